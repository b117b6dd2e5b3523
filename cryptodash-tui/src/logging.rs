//! File logging for the dashboard.
//!
//! The terminal belongs to ratatui, so records go to
//! `<data dir>/cryptodash/cryptodash.log`, truncated on every start.

use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use anyhow::{Context, Result};
use log::LevelFilter;

const LOG_FILE: &str = "cryptodash.log";

/// Environment variable that overrides the configured level (`debug`, `warn`, ...).
pub const LOG_ENV: &str = "CRYPTODASH_LOG";

pub fn default_path() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("cryptodash")
        .join(LOG_FILE)
}

/// `CRYPTODASH_LOG` when it parses, else `configured`.
pub fn effective_level(configured: LevelFilter, env: Option<&str>) -> LevelFilter {
    env.and_then(|v| LevelFilter::from_str(v.trim()).ok())
        .unwrap_or(configured)
}

fn open(path: &Path) -> Result<fs::File> {
    if let Some(parent) = path.parent().filter(|p| !p.exists()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("creating log directory {}", parent.display()))?;
    }
    fs::OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)
        .with_context(|| format!("opening log file {}", path.display()))
}

/// Install the global logger. Call once, before the terminal is set up.
pub fn init(path: &Path, level: LevelFilter) -> Result<()> {
    let file = open(path)?;
    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "{} {:<5} [{}] {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
                record.level(),
                record.target(),
                message
            ))
        })
        .level(level)
        .chain(file)
        .apply()
        .context("installing logger")?;
    log::info!("logging at {level} to {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn env_overrides_config() {
        assert_eq!(effective_level(LevelFilter::Info, Some("debug")), LevelFilter::Debug);
        assert_eq!(effective_level(LevelFilter::Info, Some(" WARN ")), LevelFilter::Warn);
    }

    #[test]
    fn bad_env_value_is_ignored() {
        assert_eq!(effective_level(LevelFilter::Info, Some("loud")), LevelFilter::Info);
        assert_eq!(effective_level(LevelFilter::Warn, None), LevelFilter::Warn);
    }

    #[test]
    fn open_creates_parent_and_truncates() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/cryptodash.log");
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "old contents").unwrap();
        drop(open(&path).unwrap());
        assert_eq!(fs::read_to_string(&path).unwrap(), "");

        let fresh = dir.path().join("other/dir/x.log");
        assert!(open(&fresh).is_ok());
        assert!(fresh.exists());
    }
}
