//! Market research rows: price action plus technical and sentiment readings.

use serde::{Deserialize, Serialize};

use crate::format::ValueKind;
use crate::record::{Column, Record};
use crate::value::Value;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketDatum {
    pub id: String,
    pub symbol: String,
    pub name: String,
    pub price: f64,
    pub change_24h: f64,
    pub volume: f64,
    pub market_cap: f64,
    pub rsi: f64,
    pub macd: String,
    /// 0-100 score.
    pub sentiment: f64,
    pub correlation: f64,
    pub volatility: String,
    pub signal: String,
    /// 0-100 score.
    pub confidence: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MarketField {
    Symbol,
    Name,
    Price,
    Change24h,
    Volume,
    MarketCap,
    Rsi,
    Macd,
    Sentiment,
    Correlation,
    Volatility,
    Signal,
    Confidence,
}

impl MarketField {
    pub const ALL: [MarketField; 13] = [
        MarketField::Symbol,
        MarketField::Name,
        MarketField::Price,
        MarketField::Change24h,
        MarketField::Volume,
        MarketField::MarketCap,
        MarketField::Rsi,
        MarketField::Macd,
        MarketField::Sentiment,
        MarketField::Correlation,
        MarketField::Volatility,
        MarketField::Signal,
        MarketField::Confidence,
    ];
}

impl Column for MarketField {
    fn label(self) -> &'static str {
        match self {
            MarketField::Symbol => "Symbol",
            MarketField::Name => "Name",
            MarketField::Price => "Price",
            MarketField::Change24h => "24h Change",
            MarketField::Volume => "Volume",
            MarketField::MarketCap => "Market Cap",
            MarketField::Rsi => "RSI",
            MarketField::Macd => "MACD",
            MarketField::Sentiment => "Sentiment",
            MarketField::Correlation => "Correlation",
            MarketField::Volatility => "Volatility",
            MarketField::Signal => "Signal",
            MarketField::Confidence => "Confidence",
        }
    }

    fn key(self) -> &'static str {
        match self {
            MarketField::Symbol => "symbol",
            MarketField::Name => "name",
            MarketField::Price => "price",
            MarketField::Change24h => "change24h",
            MarketField::Volume => "volume",
            MarketField::MarketCap => "marketCap",
            MarketField::Rsi => "rsi",
            MarketField::Macd => "macd",
            MarketField::Sentiment => "sentiment",
            MarketField::Correlation => "correlation",
            MarketField::Volatility => "volatility",
            MarketField::Signal => "signal",
            MarketField::Confidence => "confidence",
        }
    }

    fn sortable(self) -> bool {
        !matches!(
            self,
            MarketField::Macd | MarketField::Volatility | MarketField::Signal
        )
    }

    fn kind(self) -> ValueKind {
        match self {
            MarketField::Price | MarketField::Volume | MarketField::MarketCap => ValueKind::Currency,
            MarketField::Change24h | MarketField::Sentiment | MarketField::Confidence => {
                ValueKind::Percentage { decimals: 1 }
            }
            _ => ValueKind::Number { decimals: 2 },
        }
    }
}

/// Column groups offered by the research table's column picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColumnSet {
    #[default]
    All,
    Basic,
    Technical,
    Fundamental,
}

impl ColumnSet {
    pub const ALL: [ColumnSet; 4] = [
        ColumnSet::All,
        ColumnSet::Basic,
        ColumnSet::Technical,
        ColumnSet::Fundamental,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ColumnSet::All => "All Columns",
            ColumnSet::Basic => "Basic Info",
            ColumnSet::Technical => "Technical Indicators",
            ColumnSet::Fundamental => "Fundamental Metrics",
        }
    }

    pub fn columns(self) -> &'static [MarketField] {
        use MarketField::*;
        match self {
            ColumnSet::All => &MarketField::ALL,
            ColumnSet::Basic => &[Symbol, Name, Price, Change24h, Volume],
            ColumnSet::Technical => &[Symbol, Rsi, Macd, Volatility, Signal],
            ColumnSet::Fundamental => &[Symbol, MarketCap, Sentiment, Correlation, Confidence],
        }
    }

    pub fn next(self) -> Self {
        let i = Self::ALL.iter().position(|c| *c == self).unwrap_or(0);
        Self::ALL[(i + 1) % Self::ALL.len()]
    }
}

impl Record for MarketDatum {
    type Field = MarketField;
    type Facet = ();

    fn key(&self) -> &str {
        &self.id
    }

    fn value(&self, field: MarketField) -> Value<'_> {
        match field {
            MarketField::Symbol => Value::Text(&self.symbol),
            MarketField::Name => Value::Text(&self.name),
            MarketField::Price => self.price.into(),
            MarketField::Change24h => self.change_24h.into(),
            MarketField::Volume => self.volume.into(),
            MarketField::MarketCap => self.market_cap.into(),
            MarketField::Rsi => self.rsi.into(),
            MarketField::Macd => Value::Text(&self.macd),
            MarketField::Sentiment => self.sentiment.into(),
            MarketField::Correlation => self.correlation.into(),
            MarketField::Volatility => Value::Text(&self.volatility),
            MarketField::Signal => Value::Text(&self.signal),
            MarketField::Confidence => self.confidence.into(),
        }
    }

    fn columns() -> &'static [MarketField] {
        &MarketField::ALL
    }

    fn searchable() -> &'static [MarketField] {
        &[MarketField::Symbol, MarketField::Name]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::fixtures;
    use crate::record::render_cell;

    #[test]
    fn column_sets_always_lead_with_symbol() {
        for set in ColumnSet::ALL {
            assert_eq!(set.columns()[0], MarketField::Symbol);
        }
        assert_eq!(ColumnSet::Fundamental.next(), ColumnSet::All);
    }

    #[test]
    fn cells_use_column_kind() {
        let rows = fixtures::market_data();
        let ada = &rows[2];
        assert_eq!(render_cell(ada, MarketField::Price), "$0.4850");
        assert_eq!(render_cell(ada, MarketField::Change24h), "+5.8%");
        assert_eq!(render_cell(ada, MarketField::Macd), "Bullish");
        assert_eq!(render_cell(ada, MarketField::Rsi), "72.10");
    }

    #[test]
    fn field_lookup_by_key_or_label() {
        assert_eq!(MarketDatum::field_by_name("marketcap"), Some(MarketField::MarketCap));
        assert_eq!(MarketDatum::field_by_name("24h Change"), Some(MarketField::Change24h));
        assert_eq!(MarketDatum::field_by_name("nope"), None);
    }
}
