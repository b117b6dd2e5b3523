//! Scenario tests for the dashboard tables.
//!
//! Each test reads as GIVEN / WHEN / THEN against real fixtures or the
//! seeded mock feeds.

use std::sync::mpsc;
use std::time::Duration;

use cryptodash_core::data::{fixtures, CoinFeed};
use cryptodash_core::domain::{
    AttributionField, Coin, CoinField, HoldingField, HoldingFilter, MarketField, RiskField,
    StrategyFilter, TransactionField,
};
use cryptodash_core::export::{export_selected, ExportError};
use cryptodash_core::prefs::PreferenceStore;
use cryptodash_core::indicators::Indicator;
use cryptodash_core::refresh;
use cryptodash_core::{SortDirection, SortState, TableEngine, TableSpec};

fn coin_table(seed: u64) -> TableEngine<Coin> {
    TableEngine::new(
        CoinFeed::new(Some(seed)).snapshot(),
        TableSpec::paged(20).with_default_sort(SortState::descending(CoinField::MarketCap)),
    )
}

fn extra_coins(n: usize) -> Vec<Coin> {
    (0..n)
        .map(|i| Coin {
            rank: 100 + i as u32,
            symbol: format!("X{i}"),
            name: format!("Extra {i}"),
            price: 1.0,
            change_1h: 0.0,
            change_24h: 0.0,
            change_7d: 0.0,
            volume_24h: 0.0,
            market_cap: i as f64,
            circulating_supply: 0.0,
            sparkline: vec![],
        })
        .collect()
}

#[test]
fn twenty_five_rows_split_into_two_pages() {
    // GIVEN 25 coins, page size 20
    let mut rows = CoinFeed::new(Some(1)).snapshot();
    rows.extend(extra_coins(5));
    let mut engine = TableEngine::new(rows, TableSpec::paged(20));

    // THEN page 1 holds rows 1..20
    let view = engine.view();
    assert_eq!(view.total_pages, 2);
    assert_eq!(view.summary(), "Showing 1 to 20 of 25");

    // WHEN the user moves to page 2
    engine.next_page();
    let view = engine.view();
    assert_eq!(view.rows.len(), 5);
    assert_eq!(view.summary(), "Showing 21 to 25 of 25");

    // AND next page is a no-op on the last page
    engine.next_page();
    assert_eq!(engine.page(), 2);
}

#[test]
fn query_narrows_and_resets_page() {
    // GIVEN the user is on page 2
    let mut rows = CoinFeed::new(Some(2)).snapshot();
    rows.extend(extra_coins(5));
    let mut engine = TableEngine::new(rows, TableSpec::paged(20));
    engine.set_page(2);

    // WHEN they search for "ethereum"
    engine.set_query("ethereum");

    // THEN ETH and ETC match and the view is back on page 1
    let view = engine.view();
    assert_eq!(engine.page(), 1);
    let mut symbols: Vec<_> = view.rows.iter().map(|c| c.symbol.as_str()).collect();
    symbols.sort_unstable();
    assert_eq!(symbols, vec!["ETC", "ETH"]);
    assert_eq!(view.summary(), "Showing 1 to 2 of 2");
}

#[test]
fn refresh_tick_preserves_view_state() {
    // GIVEN a sorted, filtered table with a selection on page 1
    let mut feed = CoinFeed::new(Some(3));
    let mut engine = TableEngine::new(feed.snapshot(), TableSpec::paged(20));
    engine.sort_by(CoinField::Price);
    engine.set_query("o");
    engine.toggle_selected("BTC");
    let sort_before = engine.sort();

    // WHEN a refresh tick replaces the rows
    engine.replace_rows(feed.tick());

    // THEN query, sort, page and selection are unchanged
    assert_eq!(engine.query(), "o");
    assert_eq!(engine.sort(), sort_before);
    assert_eq!(engine.page(), 1);
    assert!(engine.selection.contains("BTC"));

    // AND the view is still ordered by the new prices
    let view = engine.view();
    assert!(view.rows.windows(2).all(|w| w[0].price >= w[1].price));
}

#[test]
fn live_driver_feeds_engine_without_touching_state() {
    // GIVEN a coin table driven by a fast refresh thread
    let (tx, rx) = mpsc::channel();
    let handle = refresh::spawn("coins", Duration::from_millis(5), CoinFeed::new(Some(4)), tx, |rows| rows)
        .unwrap();
    let mut engine = coin_table(4);
    engine.set_query("bit");

    // WHEN two ticks arrive
    for _ in 0..2 {
        let rows = rx.recv_timeout(Duration::from_secs(2)).unwrap();
        engine.replace_rows(rows);
    }
    handle.stop();

    // THEN the search still applies
    let view = engine.view();
    assert_eq!(view.rows.len(), 1);
    assert_eq!(view.rows[0].symbol, "BTC");
}

#[test]
fn coin_table_new_field_starts_descending_then_flips() {
    let mut engine = coin_table(5);
    engine.sort_by(CoinField::Change24h);
    assert_eq!(engine.sort(), Some(SortState::descending(CoinField::Change24h)));
    engine.sort_by(CoinField::Change24h);
    assert_eq!(engine.sort(), Some(SortState::ascending(CoinField::Change24h)));
}

#[test]
fn ascending_new_field_direction_puts_lowest_first() {
    // GIVEN the research table, unsorted, configured to sort ascending first
    let mut engine = TableEngine::new(
        fixtures::market_data(),
        TableSpec::unpaged().with_new_field_direction(SortDirection::Ascending),
    );

    // WHEN the user sorts by RSI
    engine.sort_by(MarketField::Rsi);

    // THEN the lowest RSI comes first
    let view = engine.view();
    assert_eq!(view.rows[0].symbol, "DOT");
    assert_eq!(view.rows[5].symbol, "SOL");
}

#[test]
fn transactions_default_to_newest_first() {
    let engine = TableEngine::new(
        fixtures::transactions(),
        TableSpec::unpaged().with_default_sort(SortState::descending(TransactionField::Timestamp)),
    );
    let ids: Vec<_> = engine.view().rows.iter().map(|t| t.id.as_str()).collect();
    assert_eq!(ids, vec!["TXN-001", "TXN-002", "TXN-003", "TXN-004", "TXN-005"]);
}

#[test]
fn attribution_strategy_facet_with_sort() {
    // GIVEN the attribution table sorted by total P&L
    let mut engine = TableEngine::new(
        fixtures::attributions(),
        TableSpec::unpaged().with_default_sort(SortState::descending(AttributionField::TotalPnl)),
    );

    // WHEN the user picks Swing Trading
    engine.set_facet(StrategyFilter::SwingTrading);

    // THEN only swing rows remain, best first
    let ids: Vec<_> = engine.view().rows.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, vec!["2", "5"]);
}

#[test]
fn holdings_export_writes_only_selected_rows() {
    // GIVEN holdings with two rows selected, one of them hidden by the facet
    let mut engine = TableEngine::new(
        fixtures::holdings(),
        TableSpec::unpaged().with_default_sort(SortState::descending(HoldingField::Value)),
    );
    engine.toggle_selected("sol-1");
    engine.toggle_selected("btc-1");
    engine.set_facet(HoldingFilter::Overweight);

    // WHEN the selection is exported
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("export/holdings.csv");
    let written = export_selected(&engine, &path).unwrap();

    // THEN both rows are written in source order
    assert_eq!(written, 2);
    let text = std::fs::read_to_string(&path).unwrap();
    let lines: Vec<_> = text.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[1].starts_with("Bitcoin,BTC,1041250,"));
    assert!(lines[2].starts_with("Solana,SOL,127400,"));
}

#[test]
fn risk_export_requires_selection() {
    let engine = TableEngine::new(
        fixtures::risk_breakdown(),
        TableSpec::unpaged().with_default_sort(SortState::ascending(RiskField::Asset)),
    );
    let dir = tempfile::tempdir().unwrap();
    let err = export_selected(&engine, &dir.path().join("risk.csv")).unwrap_err();
    assert!(matches!(err, ExportError::NothingSelected));
}

#[test]
fn indicator_toggle_survives_reload() {
    // GIVEN a fresh preference file
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("preferences.json");
    let mut store = PreferenceStore::load(&path);

    // WHEN RSI is enabled and MA50 disabled
    store.toggle_indicator(Indicator::Rsi).unwrap();
    store.toggle_indicator(Indicator::Ma50).unwrap();

    // THEN a new store reading the same file sees the same list
    let reloaded = PreferenceStore::load(&path);
    assert_eq!(reloaded.chart_indicators(), vec![Indicator::Ma20, Indicator::Rsi]);
}
