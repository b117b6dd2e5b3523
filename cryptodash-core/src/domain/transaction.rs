//! Transaction: a closed or still-open trade.
//!
//! Open trades have no exit price and no realized P&L; both render as the
//! placeholder and sort as the lowest value.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::format::ValueKind;
use crate::record::{Column, Record};
use crate::value::Value;

/// Timestamp format used by the trade log.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Side {
    Buy,
    Sell,
}

impl Side {
    pub fn as_str(self) -> &'static str {
        match self {
            Side::Buy => "BUY",
            Side::Sell => "SELL",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: String,
    pub asset: String,
    pub side: Side,
    pub entry_price: f64,
    pub exit_price: Option<f64>,
    pub quantity: f64,
    pub realized_pnl: Option<f64>,
    pub timestamp: NaiveDateTime,
    pub strategy: String,
    /// Rendered form of `timestamp`, kept so the row can lend it as text.
    #[serde(skip)]
    pub timestamp_text: String,
}

impl Transaction {
    pub fn is_open(&self) -> bool {
        self.exit_price.is_none()
    }

    pub fn status(&self) -> &'static str {
        if self.is_open() {
            "Open"
        } else {
            "Completed"
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransactionField {
    Id,
    Asset,
    Side,
    EntryPrice,
    ExitPrice,
    Quantity,
    RealizedPnl,
    Timestamp,
    Strategy,
    Status,
}

impl Column for TransactionField {
    fn label(self) -> &'static str {
        match self {
            TransactionField::Id => "ID",
            TransactionField::Asset => "Asset",
            TransactionField::Side => "Type",
            TransactionField::EntryPrice => "Entry",
            TransactionField::ExitPrice => "Exit",
            TransactionField::Quantity => "Qty",
            TransactionField::RealizedPnl => "Realized P&L",
            TransactionField::Timestamp => "Time",
            TransactionField::Strategy => "Strategy",
            TransactionField::Status => "Status",
        }
    }

    fn key(self) -> &'static str {
        match self {
            TransactionField::Id => "id",
            TransactionField::Asset => "asset",
            TransactionField::Side => "type",
            TransactionField::EntryPrice => "entryPrice",
            TransactionField::ExitPrice => "exitPrice",
            TransactionField::Quantity => "quantity",
            TransactionField::RealizedPnl => "realizedPnL",
            TransactionField::Timestamp => "timestamp",
            TransactionField::Strategy => "strategy",
            TransactionField::Status => "status",
        }
    }

    fn kind(self) -> ValueKind {
        match self {
            TransactionField::EntryPrice
            | TransactionField::ExitPrice
            | TransactionField::RealizedPnl => ValueKind::Currency,
            TransactionField::Quantity => ValueKind::Quantity,
            _ => ValueKind::Number { decimals: 2 },
        }
    }
}

impl Record for Transaction {
    type Field = TransactionField;
    type Facet = ();

    fn key(&self) -> &str {
        &self.id
    }

    fn value(&self, field: TransactionField) -> Value<'_> {
        match field {
            TransactionField::Id => Value::Text(&self.id),
            TransactionField::Asset => Value::Text(&self.asset),
            TransactionField::Side => Value::Text(self.side.as_str()),
            TransactionField::EntryPrice => self.entry_price.into(),
            TransactionField::ExitPrice => self.exit_price.into(),
            TransactionField::Quantity => self.quantity.into(),
            TransactionField::RealizedPnl => self.realized_pnl.into(),
            // ISO-like text orders chronologically.
            TransactionField::Timestamp => Value::Text(&self.timestamp_text),
            TransactionField::Strategy => Value::Text(&self.strategy),
            TransactionField::Status => Value::Text(self.status()),
        }
    }

    fn columns() -> &'static [TransactionField] {
        &[
            TransactionField::Id,
            TransactionField::Asset,
            TransactionField::Side,
            TransactionField::EntryPrice,
            TransactionField::ExitPrice,
            TransactionField::Quantity,
            TransactionField::RealizedPnl,
            TransactionField::Timestamp,
            TransactionField::Strategy,
            TransactionField::Status,
        ]
    }

    fn searchable() -> &'static [TransactionField] {
        &[
            TransactionField::Id,
            TransactionField::Asset,
            TransactionField::Strategy,
        ]
    }
}
