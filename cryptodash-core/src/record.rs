//! The row contract shared by every table.

use std::fmt;

use crate::filter::Facet;
use crate::format::{format_value, ValueKind};
use crate::value::Value;

/// A column of one table schema.
pub trait Column: Copy + Eq + fmt::Debug + Send + Sync + 'static {
    /// Header text.
    fn label(self) -> &'static str;

    /// Stable field name (`marketCap`, `change24h`, ...), used by the CLI and exports.
    fn key(self) -> &'static str;

    fn sortable(self) -> bool {
        true
    }

    /// How numeric cells of this column are displayed. Ignored for text.
    fn kind(self) -> ValueKind {
        ValueKind::Number { decimals: 2 }
    }
}

/// One row of a table. All rows of a type share the schema given by [`Record::columns`].
pub trait Record: Sized {
    type Field: Column;
    /// Categorical filter applied beside the text query; `()` when the table has none.
    type Facet: Facet<Self>;

    /// Unique row identifier, used for selection.
    fn key(&self) -> &str;

    fn value(&self, field: Self::Field) -> Value<'_>;

    fn columns() -> &'static [Self::Field];

    /// Text fields the search query is matched against.
    fn searchable() -> &'static [Self::Field];

    /// Resolve a field by its [`Column::key`] or label, ignoring ASCII case.
    fn field_by_name(name: &str) -> Option<Self::Field> {
        Self::columns()
            .iter()
            .copied()
            .find(|f| f.key().eq_ignore_ascii_case(name) || f.label().eq_ignore_ascii_case(name))
    }
}

/// Display text for one cell: text verbatim, numbers through the formatter.
pub fn render_cell<R: Record>(row: &R, field: R::Field) -> String {
    match row.value(field) {
        Value::Text(text) => text.to_string(),
        Value::Number(n) => format_value(Some(n).filter(|v| v.is_finite()), field.kind()),
        Value::Null => format_value(None, field.kind()),
    }
}
