//! Seedable mock feeds for the live tables.
//!
//! - [`CoinFeed`]: 20 coins. Each tick nudges price by up to ±1 % and redraws
//!   the short-term changes, volume and sparkline. Rank, market cap and
//!   supply stay put.
//! - [`QuoteFeed`]: ticker quotes, fully regenerated every tick.
//! - [`CandleFeed`]: 100 one-minute candles around a base price, fully
//!   regenerated every tick.

use chrono::{Duration as ChronoDuration, Local, NaiveDateTime};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::data::fixtures::{ticker_symbols, COINS};
use crate::domain::{Candle, Coin, Quote};
use crate::refresh::{DataSource, RefreshError};

pub const COIN_SPARKLINE_LEN: usize = 24;
pub const QUOTE_SPARKLINE_LEN: usize = 20;
pub const CANDLE_COUNT: usize = 100;
pub const CANDLE_BASE_PRICE: f64 = 43_250.0;

fn rng_from(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

/// Uniform in `[-half, half)`.
fn centered(rng: &mut StdRng, half: f64) -> f64 {
    (rng.gen::<f64>() - 0.5) * 2.0 * half
}

fn sparkline(rng: &mut StdRng, len: usize) -> Vec<f64> {
    (0..len).map(|_| rng.gen::<f64>() * 100.0).collect()
}

pub struct CoinFeed {
    rng: StdRng,
    coins: Vec<Coin>,
}

impl CoinFeed {
    pub fn new(seed: Option<u64>) -> Self {
        let mut rng = rng_from(seed);
        let coins = COINS
            .iter()
            .zip(1u32..)
            .map(|(&(symbol, name), rank)| Coin {
                rank,
                symbol: symbol.to_string(),
                name: name.to_string(),
                price: rng.gen::<f64>() * 50_000.0 + 0.01,
                change_1h: centered(&mut rng, 5.0),
                change_24h: centered(&mut rng, 10.0),
                change_7d: centered(&mut rng, 25.0),
                volume_24h: rng.gen::<f64>() * 5e9,
                market_cap: rng.gen::<f64>() * 8e11,
                circulating_supply: rng.gen::<f64>() * 1e9,
                sparkline: sparkline(&mut rng, COIN_SPARKLINE_LEN),
            })
            .collect();
        Self { rng, coins }
    }

    /// The current row set without advancing.
    pub fn snapshot(&self) -> Vec<Coin> {
        self.coins.clone()
    }

    /// Advance one tick.
    pub fn tick(&mut self) -> Vec<Coin> {
        let rng = &mut self.rng;
        for coin in &mut self.coins {
            coin.price *= 1.0 + centered(rng, 0.01);
            coin.change_1h = centered(rng, 5.0);
            coin.change_24h = centered(rng, 10.0);
            coin.change_7d = centered(rng, 25.0);
            coin.volume_24h = rng.gen::<f64>() * 5e9;
            coin.sparkline = sparkline(rng, COIN_SPARKLINE_LEN);
        }
        self.snapshot()
    }
}

impl DataSource for CoinFeed {
    type Row = Coin;

    fn next_rows(&mut self) -> Result<Vec<Coin>, RefreshError> {
        Ok(self.tick())
    }
}

pub struct QuoteFeed {
    rng: StdRng,
}

impl QuoteFeed {
    pub fn new(seed: Option<u64>) -> Self {
        Self { rng: rng_from(seed) }
    }

    pub fn generate(&mut self) -> Vec<Quote> {
        let rng = &mut self.rng;
        ticker_symbols()
            .iter()
            .map(|&(symbol, name)| Quote {
                symbol: symbol.to_string(),
                name: name.to_string(),
                price: rng.gen::<f64>() * 50_000.0 + 100.0,
                change_24h: centered(rng, 10.0),
                volume_24h: rng.gen::<f64>() * 1e9,
                market_cap: rng.gen::<f64>() * 5e11,
                sparkline: sparkline(rng, QUOTE_SPARKLINE_LEN),
            })
            .collect()
    }
}

impl DataSource for QuoteFeed {
    type Row = Quote;

    fn next_rows(&mut self) -> Result<Vec<Quote>, RefreshError> {
        Ok(self.generate())
    }
}

pub struct CandleFeed {
    rng: StdRng,
    base_price: f64,
    /// Fixed clock for reproducible series; `None` uses local time.
    anchor: Option<NaiveDateTime>,
}

impl CandleFeed {
    pub fn new(seed: Option<u64>) -> Self {
        Self {
            rng: rng_from(seed),
            base_price: CANDLE_BASE_PRICE,
            anchor: None,
        }
    }

    pub fn with_anchor(mut self, anchor: NaiveDateTime) -> Self {
        self.anchor = Some(anchor);
        self
    }

    /// A random walk of [`CANDLE_COUNT`] one-minute candles ending now.
    pub fn generate(&mut self) -> Vec<Candle> {
        let now = self.anchor.unwrap_or_else(|| Local::now().naive_local());
        let rng = &mut self.rng;
        let mut price = self.base_price;
        (0..CANDLE_COUNT)
            .map(|i| {
                price += centered(rng, 100.0);
                let open = price;
                let high = open + rng.gen::<f64>() * 100.0;
                let low = open - rng.gen::<f64>() * 100.0;
                let close = low + rng.gen::<f64>() * (high - low);
                let minutes_back = (CANDLE_COUNT - i) as i64;
                Candle {
                    timestamp: now - ChronoDuration::minutes(minutes_back),
                    open,
                    high,
                    low,
                    close,
                    volume: rng.gen::<f64>() * 1e6,
                }
            })
            .collect()
    }
}

impl DataSource for CandleFeed {
    type Row = Candle;

    fn next_rows(&mut self) -> Result<Vec<Candle>, RefreshError> {
        Ok(self.generate())
    }
}
