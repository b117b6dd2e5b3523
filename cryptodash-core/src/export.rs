//! CSV export of selected rows.

use std::io::Write;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::engine::TableEngine;
use crate::record::{Column, Record};

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("no rows selected")]
    NothingSelected,

    #[error("failed to create {path}: {source}")]
    Create {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("csv write failed: {0}")]
    Csv(#[from] csv::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Write `rows` as CSV: one header of column labels, then raw cell values
/// (numbers unformatted, null as an empty cell).
pub fn write_rows<R: Record, W: Write>(rows: &[&R], out: W) -> Result<usize, ExportError> {
    let mut writer = csv::Writer::from_writer(out);
    writer.write_record(R::columns().iter().map(|f| f.label()))?;
    for row in rows {
        writer.write_record(R::columns().iter().map(|&f| row.value(f).to_plain_string()))?;
    }
    writer.flush()?;
    Ok(rows.len())
}

/// Export the engine's selected rows, in source order, to `path`.
pub fn export_selected<R: Record>(engine: &TableEngine<R>, path: &Path) -> Result<usize, ExportError> {
    let rows = engine.selected_rows();
    if rows.is_empty() {
        return Err(ExportError::NothingSelected);
    }
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|source| ExportError::Create {
            path: path.to_path_buf(),
            source,
        })?;
    }
    let file = std::fs::File::create(path).map_err(|source| ExportError::Create {
        path: path.to_path_buf(),
        source,
    })?;
    let written = write_rows(&rows, file)?;
    log::info!("exported {written} rows to {}", path.display());
    Ok(written)
}
