//! Property tests for the table engine.
//!
//! Uses proptest to verify:
//! 1. Filter output is an order-preserving subset; blank query is identity
//! 2. Sort output is a permutation, ordered under the comparator, stable
//! 3. Pages partition the filtered set; no page exceeds the page size
//! 4. Watchlist toggle is an involution
//! 5. Formatters are total

use std::cmp::Ordering;

use proptest::prelude::*;

use cryptodash_core::domain::{Coin, CoinField};
use cryptodash_core::engine::{paginate, total_pages};
use cryptodash_core::filter::filter_rows;
use cryptodash_core::format::{self, format_value, ValueKind};
use cryptodash_core::record::{Column, Record};
use cryptodash_core::sort::{compare, sort_rows, SortDirection, SortState};
use cryptodash_core::{TableEngine, TableSpec, Watchlist};

// ── Strategies (proptest) ────────────────────────────────────────────

fn arb_number() -> impl Strategy<Value = f64> {
    prop_oneof![
        8 => -1e6..1e6_f64,
        1 => Just(f64::NAN),
        1 => Just(0.0),
    ]
}

fn arb_coin() -> impl Strategy<Value = Coin> {
    (
        "[A-Z]{2,4}",
        "[a-z ]{0,10}",
        arb_number(),
        arb_number(),
        0.0..1e9_f64,
    )
        .prop_map(|(symbol, name, price, change, volume)| Coin {
            rank: 0,
            symbol,
            name,
            price,
            change_1h: change,
            change_24h: change,
            change_7d: change,
            volume_24h: volume,
            market_cap: volume * 2.0,
            circulating_supply: 0.0,
            sparkline: vec![],
        })
}

fn arb_coins() -> impl Strategy<Value = Vec<Coin>> {
    prop::collection::vec(arb_coin(), 0..60).prop_map(|mut coins| {
        for (i, c) in coins.iter_mut().enumerate() {
            c.rank = i as u32 + 1;
            // Keys must be unique for selection; suffix the rank.
            c.symbol = format!("{}{}", c.symbol, c.rank);
        }
        coins
    })
}

fn arb_field() -> impl Strategy<Value = CoinField> {
    prop::sample::select(CoinField::ALL.to_vec())
}

fn arb_direction() -> impl Strategy<Value = SortDirection> {
    prop_oneof![Just(SortDirection::Ascending), Just(SortDirection::Descending)]
}

// ── 1. Filter ────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn filter_is_ordered_subset(coins in arb_coins(), query in " ?[a-zA-Z ]{1,3} ?") {
        let needle = query.to_lowercase();
        let hit = |c: &Coin| {
            query.trim().is_empty()
                || c.symbol.to_lowercase().contains(&needle)
                || c.name.to_lowercase().contains(&needle)
        };
        let out = filter_rows(&coins, &query, &());
        let mut last = None;
        for row in &out {
            prop_assert!(hit(row));
            let idx = coins.iter().position(|c| std::ptr::eq(c, *row)).unwrap();
            if let Some(prev) = last {
                prop_assert!(idx > prev);
            }
            last = Some(idx);
        }
        let expected = coins.iter().filter(|c| hit(c)).count();
        prop_assert_eq!(out.len(), expected);
    }

    #[test]
    fn blank_query_is_identity(coins in arb_coins(), spaces in " {0,4}") {
        prop_assert_eq!(filter_rows(&coins, &spaces, &()).len(), coins.len());
    }
}

// ── 2. Sort ──────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn sort_is_ordered_permutation(
        coins in arb_coins(),
        field in arb_field(),
        direction in arb_direction(),
    ) {
        let state = SortState::new(field, direction);
        let mut refs: Vec<&Coin> = coins.iter().collect();
        sort_rows(&mut refs, Some(&state));

        prop_assert_eq!(refs.len(), coins.len());
        let mut ranks: Vec<u32> = refs.iter().map(|c| c.rank).collect();
        ranks.sort_unstable();
        let expected: Vec<u32> = (1..=coins.len() as u32).collect();
        prop_assert_eq!(ranks, expected);

        for pair in refs.windows(2) {
            prop_assert_ne!(compare(pair[0], pair[1], &state), Ordering::Greater);
        }
    }

    #[test]
    fn sort_is_stable(coins in arb_coins(), direction in arb_direction()) {
        // Volume drawn from a tiny set forces many ties.
        let coins: Vec<Coin> = coins
            .into_iter()
            .map(|mut c| { c.volume_24h = (c.rank % 3) as f64; c })
            .collect();
        let state = SortState::new(CoinField::Volume24h, direction);
        let mut refs: Vec<&Coin> = coins.iter().collect();
        sort_rows(&mut refs, Some(&state));
        for pair in refs.windows(2) {
            if pair[0].volume_24h == pair[1].volume_24h {
                prop_assert!(pair[0].rank < pair[1].rank);
            }
        }
    }

    #[test]
    fn nan_never_precedes_number_ascending(coins in arb_coins()) {
        let state = SortState::ascending(CoinField::Price);
        let mut refs: Vec<&Coin> = coins.iter().collect();
        sort_rows(&mut refs, Some(&state));
        let first_number = refs.iter().position(|c| !c.price.is_nan());
        if let Some(i) = first_number {
            prop_assert!(refs[i..].iter().all(|c| !c.price.is_nan()));
        }
    }
}

// ── 3. Pagination ────────────────────────────────────────────────────

proptest! {
    #[test]
    fn pages_partition_the_view(coins in arb_coins(), size in 1usize..25) {
        let pages = total_pages(coins.len(), size);
        let mut seen = Vec::new();
        for page in 1..=pages {
            let slice = paginate(&coins, page, size);
            prop_assert!(!slice.is_empty());
            prop_assert!(slice.len() <= size);
            seen.extend(slice.iter().map(|c| c.rank));
        }
        prop_assert!(paginate(&coins, pages + 1, size).is_empty());
        let all: Vec<u32> = coins.iter().map(|c| c.rank).collect();
        prop_assert_eq!(seen, all);
    }

    #[test]
    fn engine_pages_cover_filtered_rows(
        coins in arb_coins(),
        size in 1usize..25,
        query in "[a-z]{0,1}",
    ) {
        let mut engine = TableEngine::new(coins, TableSpec::paged(size)
            .with_default_sort(SortState::descending(CoinField::MarketCap)));
        engine.set_query(query);
        let total = engine.view().total;
        let mut covered = 0;
        for page in 1..=engine.total_pages() {
            engine.set_page(page);
            let view = engine.view();
            prop_assert_eq!(view.page, page);
            prop_assert_eq!(view.offset, covered);
            covered += view.rows.len();
        }
        prop_assert_eq!(covered, total);
    }
}

// ── 4. Watchlist ─────────────────────────────────────────────────────

proptest! {
    #[test]
    fn watchlist_toggle_is_involution(symbol in "[A-Z]{1,5}") {
        let original = Watchlist::default();
        let mut w = original.clone();
        w.toggle(&symbol);
        w.toggle(&symbol);
        prop_assert_eq!(w, original);
    }
}

// ── 5. Formatters ────────────────────────────────────────────────────

proptest! {
    #[test]
    fn formatters_are_total(v in prop::num::f64::ANY) {
        let kinds = [
            ValueKind::Currency,
            ValueKind::PERCENT,
            ValueKind::COMPACT,
            ValueKind::Number { decimals: 2 },
            ValueKind::Quantity,
        ];
        for kind in kinds {
            let s = format_value(Some(v), kind);
            prop_assert!(!s.is_empty());
            if !v.is_finite() {
                prop_assert_eq!(s, format::PLACEHOLDER);
            }
        }
    }

    #[test]
    fn currency_precision_tracks_magnitude(v in -1e9..1e9_f64) {
        let s = format::currency(v);
        let decimals = s.rsplit('.').next().map(str::len).unwrap_or(0);
        let expected = if v.abs() < 1.0 { 4 } else { 2 };
        prop_assert_eq!(decimals, expected);
    }
}

#[test]
fn every_coin_field_has_a_distinct_key() {
    let mut keys: Vec<&str> = Coin::columns().iter().map(|f| f.key()).collect();
    keys.sort_unstable();
    keys.dedup();
    assert_eq!(keys.len(), CoinField::ALL.len());
}
