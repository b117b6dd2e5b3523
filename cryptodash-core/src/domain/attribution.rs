//! Performance attribution by asset, period and strategy.

use serde::{Deserialize, Serialize};

use crate::filter::Facet;
use crate::format::ValueKind;
use crate::record::{Column, Record};
use crate::value::Value;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attribution {
    pub id: String,
    /// Display name with ticker, e.g. `Bitcoin (BTC)`.
    pub cryptocurrency: String,
    pub time_period: String,
    pub strategy: String,
    pub total_pnl: f64,
    pub win_rate: f64,
    pub avg_trade: f64,
    pub trades: u32,
    pub volume: f64,
    pub sharpe_ratio: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttributionField {
    Cryptocurrency,
    TimePeriod,
    Strategy,
    TotalPnl,
    WinRate,
    AvgTrade,
    Trades,
    Volume,
    SharpeRatio,
}

impl Column for AttributionField {
    fn label(self) -> &'static str {
        match self {
            AttributionField::Cryptocurrency => "Asset",
            AttributionField::TimePeriod => "Period",
            AttributionField::Strategy => "Strategy",
            AttributionField::TotalPnl => "Total P&L",
            AttributionField::WinRate => "Win Rate",
            AttributionField::AvgTrade => "Avg Trade",
            AttributionField::Trades => "Trades",
            AttributionField::Volume => "Volume",
            AttributionField::SharpeRatio => "Sharpe",
        }
    }

    fn key(self) -> &'static str {
        match self {
            AttributionField::Cryptocurrency => "cryptocurrency",
            AttributionField::TimePeriod => "timePeriod",
            AttributionField::Strategy => "strategy",
            AttributionField::TotalPnl => "totalPnL",
            AttributionField::WinRate => "winRate",
            AttributionField::AvgTrade => "avgTrade",
            AttributionField::Trades => "trades",
            AttributionField::Volume => "volume",
            AttributionField::SharpeRatio => "sharpeRatio",
        }
    }

    fn kind(self) -> ValueKind {
        match self {
            AttributionField::TotalPnl | AttributionField::AvgTrade => ValueKind::Currency,
            AttributionField::WinRate => ValueKind::Percentage { decimals: 1 },
            AttributionField::Volume => ValueKind::Compact { decimals: 1 },
            AttributionField::Trades => ValueKind::Number { decimals: 0 },
            _ => ValueKind::Number { decimals: 2 },
        }
    }
}

/// Strategy menu on the attribution table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StrategyFilter {
    #[default]
    All,
    Scalping,
    SwingTrading,
    Arbitrage,
}

impl StrategyFilter {
    pub const ALL: [StrategyFilter; 4] = [
        StrategyFilter::All,
        StrategyFilter::Scalping,
        StrategyFilter::SwingTrading,
        StrategyFilter::Arbitrage,
    ];

    /// Strategy name as stored on the row; `None` for the catch-all.
    pub fn strategy(self) -> Option<&'static str> {
        match self {
            StrategyFilter::All => None,
            StrategyFilter::Scalping => Some("Scalping"),
            StrategyFilter::SwingTrading => Some("Swing Trading"),
            StrategyFilter::Arbitrage => Some("Arbitrage"),
        }
    }
}

impl Facet<Attribution> for StrategyFilter {
    fn admits(&self, row: &Attribution) -> bool {
        self.strategy().map_or(true, |s| row.strategy == s)
    }

    fn label(&self) -> &'static str {
        self.strategy().unwrap_or("All Strategies")
    }

    fn next(&self) -> Self {
        let i = Self::ALL.iter().position(|f| f == self).unwrap_or(0);
        Self::ALL[(i + 1) % Self::ALL.len()]
    }
}

impl Record for Attribution {
    type Field = AttributionField;
    type Facet = StrategyFilter;

    fn key(&self) -> &str {
        &self.id
    }

    fn value(&self, field: AttributionField) -> Value<'_> {
        match field {
            AttributionField::Cryptocurrency => Value::Text(&self.cryptocurrency),
            AttributionField::TimePeriod => Value::Text(&self.time_period),
            AttributionField::Strategy => Value::Text(&self.strategy),
            AttributionField::TotalPnl => self.total_pnl.into(),
            AttributionField::WinRate => self.win_rate.into(),
            AttributionField::AvgTrade => self.avg_trade.into(),
            AttributionField::Trades => Value::Number(f64::from(self.trades)),
            AttributionField::Volume => self.volume.into(),
            AttributionField::SharpeRatio => self.sharpe_ratio.into(),
        }
    }

    fn columns() -> &'static [AttributionField] {
        &[
            AttributionField::Cryptocurrency,
            AttributionField::TimePeriod,
            AttributionField::Strategy,
            AttributionField::TotalPnl,
            AttributionField::WinRate,
            AttributionField::AvgTrade,
            AttributionField::Trades,
            AttributionField::Volume,
            AttributionField::SharpeRatio,
        ]
    }

    fn searchable() -> &'static [AttributionField] {
        &[
            AttributionField::Cryptocurrency,
            AttributionField::Strategy,
            AttributionField::TimePeriod,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::fixtures;

    #[test]
    fn strategy_facet_matches_exact_name() {
        let rows = fixtures::attributions();
        let swing: Vec<_> = rows
            .iter()
            .filter(|r| StrategyFilter::SwingTrading.admits(r))
            .map(|r| r.id.as_str())
            .collect();
        assert_eq!(swing, vec!["2", "5"]);
        assert!(rows.iter().all(|r| StrategyFilter::All.admits(r)));
    }
}
