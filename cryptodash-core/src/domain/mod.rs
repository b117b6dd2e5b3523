//! Row types for every dashboard table.

pub mod attribution;
pub mod candle;
pub mod coin;
pub mod holding;
pub mod market;
pub mod metric;
pub mod quote;
pub mod research;
pub mod risk;
pub mod transaction;

pub use attribution::{Attribution, AttributionField, StrategyFilter};
pub use candle::{closes, Candle};
pub use coin::{Coin, CoinField};
pub use holding::{Holding, HoldingField, HoldingFilter, DRIFT_THRESHOLD};
pub use market::{ColumnSet, MarketDatum, MarketField};
pub use metric::MetricCard;
pub use quote::{Quote, QuoteField};
pub use research::{
    Impact, NewsField, NewsItem, NoteField, ResearchNote, ResearchSection, SocialField,
    SocialMention,
};
pub use risk::{RiskExposure, RiskField, RiskStatus};
pub use transaction::{Side, Transaction, TransactionField, TIMESTAMP_FORMAT};
