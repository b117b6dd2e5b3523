//! Criterion benchmarks for the table pipeline.
//!
//! Benchmarks:
//! 1. Full filter → sort → paginate view over growing row counts
//! 2. Refresh tick: replace rows then recompute the view
//! 3. Cell formatting for a page of coins

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use cryptodash_core::data::CoinFeed;
use cryptodash_core::domain::{Coin, CoinField};
use cryptodash_core::record::{render_cell, Record};
use cryptodash_core::{SortState, TableEngine, TableSpec};

fn make_coins(n: usize) -> Vec<Coin> {
    let mut feed = CoinFeed::new(Some(11));
    let mut rows = Vec::with_capacity(n);
    while rows.len() < n {
        let base = rows.len();
        rows.extend(feed.tick().into_iter().enumerate().map(|(i, mut c)| {
            c.symbol = format!("{}{}", c.symbol, base + i);
            c
        }));
    }
    rows.truncate(n);
    rows
}

fn spec() -> TableSpec<CoinField> {
    TableSpec::paged(20).with_default_sort(SortState::descending(CoinField::MarketCap))
}

fn bench_view(c: &mut Criterion) {
    let mut group = c.benchmark_group("view");
    for n in [20usize, 200, 2_000] {
        let mut engine = TableEngine::new(make_coins(n), spec());
        engine.set_query("o");
        group.bench_with_input(BenchmarkId::from_parameter(n), &engine, |b, engine| {
            b.iter(|| black_box(engine.view().rows.len()))
        });
    }
    group.finish();
}

fn bench_tick(c: &mut Criterion) {
    let mut feed = CoinFeed::new(Some(5));
    let mut engine = TableEngine::new(feed.snapshot(), spec());
    c.bench_function("refresh_tick", |b| {
        b.iter(|| {
            engine.replace_rows(feed.tick());
            black_box(engine.view().total)
        })
    });
}

fn bench_format(c: &mut Criterion) {
    let coins = make_coins(20);
    c.bench_function("format_page", |b| {
        b.iter(|| {
            let mut cells = 0usize;
            for coin in &coins {
                for &field in Coin::columns() {
                    cells += render_cell(coin, field).len();
                }
            }
            black_box(cells)
        })
    });
}

criterion_group!(benches, bench_view, bench_tick, bench_format);
criterion_main!(benches);
