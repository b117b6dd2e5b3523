//! Single-key row ordering with a direction toggle.
//!
//! Null (and NaN) is the lowest value: first when ascending, last when
//! descending. When kinds are mixed, numbers order before text. Sorting is
//! stable, so equal keys keep their source order across refresh ticks.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::record::Record;
use crate::value::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Ascending,
    #[default]
    Descending,
}

impl SortDirection {
    pub fn flip(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    pub fn arrow(self) -> &'static str {
        match self {
            SortDirection::Ascending => "▲",
            SortDirection::Descending => "▼",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SortDirection::Ascending => "asc",
            SortDirection::Descending => "desc",
        }
    }
}

/// The active sort column and direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortState<F> {
    pub field: F,
    pub direction: SortDirection,
}

impl<F: Copy + Eq> SortState<F> {
    pub fn new(field: F, direction: SortDirection) -> Self {
        Self { field, direction }
    }

    pub fn ascending(field: F) -> Self {
        Self::new(field, SortDirection::Ascending)
    }

    pub fn descending(field: F) -> Self {
        Self::new(field, SortDirection::Descending)
    }

    /// Header click: same field flips direction, a new field starts at `default`.
    pub fn toggle(current: Option<Self>, field: F, default: SortDirection) -> Self {
        match current {
            Some(s) if s.field == field => Self::new(field, s.direction.flip()),
            _ => Self::new(field, default),
        }
    }
}

fn rank(v: &Value<'_>) -> u8 {
    if v.is_null() {
        return 0;
    }
    match v {
        Value::Number(_) => 1,
        Value::Text(_) => 2,
        Value::Null => 0,
    }
}

/// Ascending total order over cell values.
pub fn compare_values(a: &Value<'_>, b: &Value<'_>) -> Ordering {
    match (rank(a), rank(b)) {
        (ra, rb) if ra != rb => ra.cmp(&rb),
        _ => match (a, b) {
            (Value::Number(x), Value::Number(y)) => x.partial_cmp(y).unwrap_or(Ordering::Equal),
            (Value::Text(x), Value::Text(y)) => x.cmp(y),
            _ => Ordering::Equal,
        },
    }
}

/// Compare two rows under a sort state.
pub fn compare<R: Record>(a: &R, b: &R, sort: &SortState<R::Field>) -> Ordering {
    let ord = compare_values(&a.value(sort.field), &b.value(sort.field));
    match sort.direction {
        SortDirection::Ascending => ord,
        SortDirection::Descending => ord.reverse(),
    }
}

/// Stable in-place sort. `None` keeps insertion order.
pub fn sort_rows<R: Record>(rows: &mut [&R], sort: Option<&SortState<R::Field>>) {
    if let Some(sort) = sort {
        rows.sort_by(|a, b| compare(*a, *b, sort));
    }
}
