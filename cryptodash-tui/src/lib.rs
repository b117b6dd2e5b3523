//! cryptodash TUI: terminal dashboard over the cryptodash-core table engine.
//!
//! Pages:
//! 1. Market Overview (KPI cards, live coin table, ticker, price chart)
//! 2. Trading Performance (attribution by strategy, recent transactions)
//! 3. Portfolio Management (holdings with rebalance filters)
//! 4. Risk Monitoring (risk breakdown)
//! 5. Market Research (market data, news, social mentions, notes)

pub mod app;
pub mod input;
pub mod logging;
pub mod theme;
pub mod ui;

pub use app::{AppState, LiveData, Page, Refresh, TableId};
pub use input::handle_key;
