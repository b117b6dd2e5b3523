//! Reusable widgets shared across pages.

pub mod metric_card;
pub mod table;
