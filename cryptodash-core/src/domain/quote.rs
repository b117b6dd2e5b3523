//! Quote: one live ticker entry.

use serde::{Deserialize, Serialize};

use crate::format::ValueKind;
use crate::record::{Column, Record};
use crate::ticker::TickerTab;
use crate::value::Value;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    pub symbol: String,
    pub name: String,
    pub price: f64,
    pub change_24h: f64,
    pub volume_24h: f64,
    pub market_cap: f64,
    pub sparkline: Vec<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QuoteField {
    Symbol,
    Name,
    Price,
    Change24h,
    Volume24h,
    MarketCap,
}

impl Column for QuoteField {
    fn label(self) -> &'static str {
        match self {
            QuoteField::Symbol => "Symbol",
            QuoteField::Name => "Name",
            QuoteField::Price => "Price",
            QuoteField::Change24h => "24h %",
            QuoteField::Volume24h => "Volume",
            QuoteField::MarketCap => "Market Cap",
        }
    }

    fn key(self) -> &'static str {
        match self {
            QuoteField::Symbol => "symbol",
            QuoteField::Name => "name",
            QuoteField::Price => "price",
            QuoteField::Change24h => "change24h",
            QuoteField::Volume24h => "volume24h",
            QuoteField::MarketCap => "marketCap",
        }
    }

    fn kind(self) -> ValueKind {
        match self {
            QuoteField::Price => ValueKind::Currency,
            QuoteField::Change24h => ValueKind::PERCENT,
            QuoteField::Volume24h | QuoteField::MarketCap => ValueKind::COMPACT,
            QuoteField::Symbol | QuoteField::Name => ValueKind::Number { decimals: 0 },
        }
    }
}

impl Record for Quote {
    type Field = QuoteField;
    type Facet = TickerTab;

    fn key(&self) -> &str {
        &self.symbol
    }

    fn value(&self, field: QuoteField) -> Value<'_> {
        match field {
            QuoteField::Symbol => Value::Text(&self.symbol),
            QuoteField::Name => Value::Text(&self.name),
            QuoteField::Price => self.price.into(),
            QuoteField::Change24h => self.change_24h.into(),
            QuoteField::Volume24h => self.volume_24h.into(),
            QuoteField::MarketCap => self.market_cap.into(),
        }
    }

    fn columns() -> &'static [QuoteField] {
        &[
            QuoteField::Symbol,
            QuoteField::Name,
            QuoteField::Price,
            QuoteField::Change24h,
            QuoteField::Volume24h,
            QuoteField::MarketCap,
        ]
    }

    fn searchable() -> &'static [QuoteField] {
        &[QuoteField::Symbol, QuoteField::Name]
    }
}
