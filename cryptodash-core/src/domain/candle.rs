//! Candle: one OHLCV sample of the price chart.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candle {
    pub timestamp: NaiveDateTime,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: f64,
}

impl Candle {
    /// OHLC sanity: high bounds every price, low is under every price.
    pub fn is_sane(&self) -> bool {
        self.high >= self.low
            && self.high >= self.open
            && self.high >= self.close
            && self.low <= self.open
            && self.low <= self.close
    }

    pub fn is_bullish(&self) -> bool {
        self.close >= self.open
    }
}

/// Closing prices of a series, the input of every chart indicator.
pub fn closes(candles: &[Candle]) -> Vec<f64> {
    candles.iter().map(|c| c.close).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn candle(open: f64, high: f64, low: f64, close: f64) -> Candle {
        Candle {
            timestamp: NaiveDate::from_ymd_opt(2025, 1, 15)
                .unwrap()
                .and_hms_opt(14, 30, 0)
                .unwrap(),
            open,
            high,
            low,
            close,
            volume: 1_000.0,
        }
    }

    #[test]
    fn candle_sanity() {
        assert!(candle(100.0, 105.0, 98.0, 103.0).is_sane());
        assert!(!candle(100.0, 99.0, 98.0, 103.0).is_sane());
    }

    #[test]
    fn bullish_when_close_at_or_above_open() {
        assert!(candle(100.0, 105.0, 98.0, 103.0).is_bullish());
        assert!(!candle(103.0, 105.0, 98.0, 100.0).is_bullish());
    }
}
