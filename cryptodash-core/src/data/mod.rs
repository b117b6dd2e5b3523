//! Data sources: static fixtures, seedable mock feeds and table presets.

pub mod fixtures;
pub mod mock;
pub mod tables;

pub use mock::{CandleFeed, CoinFeed, QuoteFeed};
