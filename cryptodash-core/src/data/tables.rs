//! Table presets: each dashboard table's rows and default sort, shared by
//! the TUI and the CLI. Every table starts a newly picked sort column in
//! the configured `new_sort_direction`.

use crate::config::DashboardConfig;
use crate::domain::{
    Attribution, AttributionField, Coin, CoinField, Holding, HoldingField, MarketDatum, NewsItem,
    ResearchNote, RiskExposure, RiskField, SocialMention, Transaction, TransactionField,
};
use crate::engine::{TableEngine, TableSpec};
use crate::record::Record;
use crate::sort::{SortDirection, SortState};

use super::fixtures;

/// Paginated coin table, largest market cap first.
pub fn coins(rows: Vec<Coin>, config: &DashboardConfig) -> TableEngine<Coin> {
    TableEngine::new(
        rows,
        TableSpec::paged(config.page_size)
            .with_default_sort(SortState::descending(CoinField::MarketCap))
            .with_new_field_direction(config.new_sort_direction),
    )
}

pub fn attribution(config: &DashboardConfig) -> TableEngine<Attribution> {
    TableEngine::new(
        fixtures::attributions(),
        TableSpec::unpaged()
            .with_default_sort(SortState::descending(AttributionField::TotalPnl))
            .with_new_field_direction(config.new_sort_direction),
    )
}

/// Newest first.
pub fn transactions(config: &DashboardConfig) -> TableEngine<Transaction> {
    TableEngine::new(
        fixtures::transactions(),
        TableSpec::unpaged()
            .with_default_sort(SortState::descending(TransactionField::Timestamp))
            .with_new_field_direction(config.new_sort_direction),
    )
}

pub fn holdings(config: &DashboardConfig) -> TableEngine<Holding> {
    TableEngine::new(
        fixtures::holdings(),
        TableSpec::unpaged()
            .with_default_sort(SortState::descending(HoldingField::Value))
            .with_new_field_direction(config.new_sort_direction),
    )
}

pub fn risk(config: &DashboardConfig) -> TableEngine<RiskExposure> {
    TableEngine::new(
        fixtures::risk_breakdown(),
        TableSpec::unpaged()
            .with_default_sort(SortState::ascending(RiskField::Asset))
            .with_new_field_direction(config.new_sort_direction),
    )
}

pub fn market(config: &DashboardConfig) -> TableEngine<MarketDatum> {
    research(fixtures::market_data(), config)
}

pub fn news(config: &DashboardConfig) -> TableEngine<NewsItem> {
    research(fixtures::news(), config)
}

pub fn social(config: &DashboardConfig) -> TableEngine<SocialMention> {
    research(fixtures::social(), config)
}

pub fn notes(config: &DashboardConfig) -> TableEngine<ResearchNote> {
    research(fixtures::notes(), config)
}

/// Research lists start unsorted.
fn research<R: Record>(rows: Vec<R>, config: &DashboardConfig) -> TableEngine<R> {
    TableEngine::new(
        rows,
        TableSpec::unpaged().with_new_field_direction(config.new_sort_direction),
    )
}
