//! Price chart indicators.
//!
//! The catalogue is fixed (MA20, MA50, RSI, MACD); which ones are drawn is a
//! persisted preference (see [`crate::prefs`]). Series functions return one
//! value per input close, NaN until the lookback is filled.

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Indicator {
    #[serde(rename = "MA20")]
    Ma20,
    #[serde(rename = "MA50")]
    Ma50,
    #[serde(rename = "RSI")]
    Rsi,
    #[serde(rename = "MACD")]
    Macd,
}

pub const DEFAULT_INDICATORS: [Indicator; 2] = [Indicator::Ma20, Indicator::Ma50];

impl Indicator {
    pub const ALL: [Indicator; 4] = [Indicator::Ma20, Indicator::Ma50, Indicator::Rsi, Indicator::Macd];

    /// Persisted identifier.
    pub fn id(self) -> &'static str {
        match self {
            Indicator::Ma20 => "MA20",
            Indicator::Ma50 => "MA50",
            Indicator::Rsi => "RSI",
            Indicator::Macd => "MACD",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Indicator::Ma20 => "MA 20",
            Indicator::Ma50 => "MA 50",
            Indicator::Rsi => "RSI",
            Indicator::Macd => "MACD",
        }
    }

    /// Case-insensitive lookup by id.
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|i| i.id().eq_ignore_ascii_case(id))
    }

    /// Drawn over the price axis rather than in a separate pane.
    pub fn is_overlay(self) -> bool {
        matches!(self, Indicator::Ma20 | Indicator::Ma50)
    }

    /// Compute the indicator's main line over `closes`.
    pub fn compute(self, closes: &[f64]) -> Vec<f64> {
        match self {
            Indicator::Ma20 => sma(closes, 20),
            Indicator::Ma50 => sma(closes, 50),
            Indicator::Rsi => rsi(closes, 14),
            Indicator::Macd => macd(closes, 12, 26),
        }
    }
}

impl fmt::Display for Indicator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Simple moving average. First value at index `period - 1`.
pub fn sma(closes: &[f64], period: usize) -> Vec<f64> {
    let n = closes.len();
    let mut out = vec![f64::NAN; n];
    if period == 0 || n < period {
        return out;
    }
    let mut sum: f64 = closes[..period].iter().sum();
    out[period - 1] = sum / period as f64;
    for i in period..n {
        sum += closes[i] - closes[i - period];
        out[i] = sum / period as f64;
    }
    out
}

/// Exponential moving average seeded with the SMA of the first `period` values.
pub fn ema(closes: &[f64], period: usize) -> Vec<f64> {
    let n = closes.len();
    let mut out = vec![f64::NAN; n];
    if period == 0 || n < period {
        return out;
    }
    let alpha = 2.0 / (period as f64 + 1.0);
    let mut prev = closes[..period].iter().sum::<f64>() / period as f64;
    out[period - 1] = prev;
    for i in period..n {
        prev = alpha * closes[i] + (1.0 - alpha) * prev;
        out[i] = prev;
    }
    out
}

/// Wilder RSI. First value at index `period`.
pub fn rsi(closes: &[f64], period: usize) -> Vec<f64> {
    let n = closes.len();
    let mut out = vec![f64::NAN; n];
    if period == 0 || n <= period {
        return out;
    }
    let mut avg_gain = 0.0;
    let mut avg_loss = 0.0;
    for i in 1..=period {
        let ch = closes[i] - closes[i - 1];
        if ch > 0.0 {
            avg_gain += ch;
        } else {
            avg_loss -= ch;
        }
    }
    avg_gain /= period as f64;
    avg_loss /= period as f64;
    out[period] = rsi_value(avg_gain, avg_loss);

    let alpha = 1.0 / period as f64;
    for i in (period + 1)..n {
        let ch = closes[i] - closes[i - 1];
        avg_gain = alpha * ch.max(0.0) + (1.0 - alpha) * avg_gain;
        avg_loss = alpha * (-ch).max(0.0) + (1.0 - alpha) * avg_loss;
        out[i] = rsi_value(avg_gain, avg_loss);
    }
    out
}

fn rsi_value(avg_gain: f64, avg_loss: f64) -> f64 {
    if avg_loss == 0.0 && avg_gain == 0.0 {
        50.0
    } else if avg_loss == 0.0 {
        100.0
    } else {
        100.0 - 100.0 / (1.0 + avg_gain / avg_loss)
    }
}

/// MACD line: fast EMA minus slow EMA.
pub fn macd(closes: &[f64], fast: usize, slow: usize) -> Vec<f64> {
    let f = ema(closes, fast);
    let s = ema(closes, slow);
    f.iter().zip(&s).map(|(a, b)| a - b).collect()
}
