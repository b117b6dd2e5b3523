//! cryptodash core: the client-side tabular data engine behind the dashboard.
//!
//! - Display formatters (currency, percentage, compact) that never fail
//! - Value ordering, filter predicate and the filter → sort → paginate engine
//! - Row selection and the shared watchlist
//! - Live refresh driver: one background thread per live table
//! - Preference store, TOML configuration and CSV export
//! - Domain rows plus static fixtures and seedable mock feeds

pub mod config;
pub mod data;
pub mod domain;
pub mod engine;
pub mod export;
pub mod filter;
pub mod format;
pub mod indicators;
pub mod prefs;
pub mod record;
pub mod refresh;
pub mod selection;
pub mod sort;
pub mod sparkline;
pub mod ticker;
pub mod value;

pub use config::{ConfigError, DashboardConfig};
pub use engine::{TableEngine, TableSpec, TableView};
pub use filter::Facet;
pub use record::{Column, Record};
pub use selection::{Selection, Watchlist};
pub use sort::{SortDirection, SortState};
pub use value::Value;
