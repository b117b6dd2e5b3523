//! Coin: one row of the market overview cryptocurrency table.

use serde::{Deserialize, Serialize};

use crate::format::ValueKind;
use crate::record::{Column, Record};
use crate::value::Value;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Coin {
    pub rank: u32,
    pub symbol: String,
    pub name: String,
    pub price: f64,
    pub change_1h: f64,
    pub change_24h: f64,
    pub change_7d: f64,
    pub volume_24h: f64,
    pub market_cap: f64,
    pub circulating_supply: f64,
    /// Last 24 hourly samples, unitless.
    pub sparkline: Vec<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CoinField {
    Rank,
    Symbol,
    Name,
    Price,
    Change1h,
    Change24h,
    Change7d,
    Volume24h,
    MarketCap,
    Supply,
}

impl CoinField {
    pub const ALL: [CoinField; 10] = [
        CoinField::Rank,
        CoinField::Symbol,
        CoinField::Name,
        CoinField::Price,
        CoinField::Change1h,
        CoinField::Change24h,
        CoinField::Change7d,
        CoinField::Volume24h,
        CoinField::MarketCap,
        CoinField::Supply,
    ];
}

impl Column for CoinField {
    fn label(self) -> &'static str {
        match self {
            CoinField::Rank => "#",
            CoinField::Symbol => "Symbol",
            CoinField::Name => "Name",
            CoinField::Price => "Price",
            CoinField::Change1h => "1h %",
            CoinField::Change24h => "24h %",
            CoinField::Change7d => "7d %",
            CoinField::Volume24h => "Volume (24h)",
            CoinField::MarketCap => "Market Cap",
            CoinField::Supply => "Supply",
        }
    }

    fn key(self) -> &'static str {
        match self {
            CoinField::Rank => "rank",
            CoinField::Symbol => "symbol",
            CoinField::Name => "name",
            CoinField::Price => "price",
            CoinField::Change1h => "change1h",
            CoinField::Change24h => "change24h",
            CoinField::Change7d => "change7d",
            CoinField::Volume24h => "volume24h",
            CoinField::MarketCap => "marketCap",
            CoinField::Supply => "circulatingSupply",
        }
    }

    fn sortable(self) -> bool {
        !matches!(self, CoinField::Symbol | CoinField::Name | CoinField::Supply)
    }

    fn kind(self) -> ValueKind {
        match self {
            CoinField::Rank | CoinField::Symbol | CoinField::Name => ValueKind::Number { decimals: 0 },
            CoinField::Price => ValueKind::Currency,
            CoinField::Change1h | CoinField::Change24h | CoinField::Change7d => ValueKind::PERCENT,
            CoinField::Volume24h | CoinField::MarketCap => ValueKind::COMPACT,
            CoinField::Supply => ValueKind::Quantity,
        }
    }
}

impl Record for Coin {
    type Field = CoinField;
    type Facet = ();

    fn key(&self) -> &str {
        &self.symbol
    }

    fn value(&self, field: CoinField) -> Value<'_> {
        match field {
            CoinField::Rank => Value::Number(f64::from(self.rank)),
            CoinField::Symbol => Value::Text(&self.symbol),
            CoinField::Name => Value::Text(&self.name),
            CoinField::Price => self.price.into(),
            CoinField::Change1h => self.change_1h.into(),
            CoinField::Change24h => self.change_24h.into(),
            CoinField::Change7d => self.change_7d.into(),
            CoinField::Volume24h => self.volume_24h.into(),
            CoinField::MarketCap => self.market_cap.into(),
            CoinField::Supply => self.circulating_supply.into(),
        }
    }

    fn columns() -> &'static [CoinField] {
        &CoinField::ALL
    }

    fn searchable() -> &'static [CoinField] {
        &[CoinField::Symbol, CoinField::Name]
    }
}
