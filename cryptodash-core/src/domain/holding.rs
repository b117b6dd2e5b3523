//! Holding: one portfolio position with its target weight and drift.

use serde::{Deserialize, Serialize};

use crate::filter::Facet;
use crate::format::ValueKind;
use crate::record::{Column, Record};
use crate::value::Value;

/// Drift (percentage points) beyond which a holding needs rebalancing.
pub const DRIFT_THRESHOLD: f64 = 2.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Holding {
    pub id: String,
    pub asset: String,
    pub symbol: String,
    /// Asset class, e.g. `cryptocurrency`.
    pub kind: String,
    pub value: f64,
    pub quantity: f64,
    pub weight: f64,
    pub target: f64,
    /// `weight - target`, in percentage points.
    pub drift: f64,
    pub day_change: f64,
    pub recommendation: String,
}

impl Holding {
    pub fn needs_rebalance(&self) -> bool {
        self.drift.abs() > DRIFT_THRESHOLD
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HoldingField {
    Asset,
    Symbol,
    Value,
    Quantity,
    Weight,
    Target,
    Drift,
    DayChange,
    Recommendation,
}

impl Column for HoldingField {
    fn label(self) -> &'static str {
        match self {
            HoldingField::Asset => "Asset",
            HoldingField::Symbol => "Symbol",
            HoldingField::Value => "Value",
            HoldingField::Quantity => "Quantity",
            HoldingField::Weight => "Weight",
            HoldingField::Target => "Target",
            HoldingField::Drift => "Drift",
            HoldingField::DayChange => "24h Change",
            HoldingField::Recommendation => "Action",
        }
    }

    fn key(self) -> &'static str {
        match self {
            HoldingField::Asset => "asset",
            HoldingField::Symbol => "symbol",
            HoldingField::Value => "value",
            HoldingField::Quantity => "quantity",
            HoldingField::Weight => "weight",
            HoldingField::Target => "target",
            HoldingField::Drift => "drift",
            HoldingField::DayChange => "dayChange",
            HoldingField::Recommendation => "recommendation",
        }
    }

    fn sortable(self) -> bool {
        !matches!(self, HoldingField::Symbol | HoldingField::Recommendation)
    }

    fn kind(self) -> ValueKind {
        match self {
            HoldingField::Value => ValueKind::Currency,
            HoldingField::Quantity => ValueKind::Quantity,
            HoldingField::Weight | HoldingField::Target => ValueKind::Number { decimals: 1 },
            HoldingField::Drift | HoldingField::DayChange => ValueKind::Percentage { decimals: 1 },
            _ => ValueKind::Number { decimals: 2 },
        }
    }
}

/// Holdings table filter menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HoldingFilter {
    #[default]
    All,
    Crypto,
    Overweight,
    Underweight,
    NeedsRebalance,
}

impl HoldingFilter {
    pub const ALL: [HoldingFilter; 5] = [
        HoldingFilter::All,
        HoldingFilter::Crypto,
        HoldingFilter::Overweight,
        HoldingFilter::Underweight,
        HoldingFilter::NeedsRebalance,
    ];
}

impl Facet<Holding> for HoldingFilter {
    fn admits(&self, row: &Holding) -> bool {
        match self {
            HoldingFilter::All => true,
            HoldingFilter::Crypto => row.kind == "cryptocurrency",
            HoldingFilter::Overweight => row.drift > DRIFT_THRESHOLD,
            HoldingFilter::Underweight => row.drift < -DRIFT_THRESHOLD,
            HoldingFilter::NeedsRebalance => row.needs_rebalance(),
        }
    }

    fn label(&self) -> &'static str {
        match self {
            HoldingFilter::All => "All Assets",
            HoldingFilter::Crypto => "Cryptocurrencies",
            HoldingFilter::Overweight => "Overweight",
            HoldingFilter::Underweight => "Underweight",
            HoldingFilter::NeedsRebalance => "Needs Rebalancing",
        }
    }

    fn next(&self) -> Self {
        let i = Self::ALL.iter().position(|f| f == self).unwrap_or(0);
        Self::ALL[(i + 1) % Self::ALL.len()]
    }
}

impl Record for Holding {
    type Field = HoldingField;
    type Facet = HoldingFilter;

    fn key(&self) -> &str {
        &self.id
    }

    fn value(&self, field: HoldingField) -> Value<'_> {
        match field {
            HoldingField::Asset => Value::Text(&self.asset),
            HoldingField::Symbol => Value::Text(&self.symbol),
            HoldingField::Value => self.value.into(),
            HoldingField::Quantity => self.quantity.into(),
            HoldingField::Weight => self.weight.into(),
            HoldingField::Target => self.target.into(),
            HoldingField::Drift => self.drift.into(),
            HoldingField::DayChange => self.day_change.into(),
            HoldingField::Recommendation => Value::Text(&self.recommendation),
        }
    }

    fn columns() -> &'static [HoldingField] {
        &[
            HoldingField::Asset,
            HoldingField::Symbol,
            HoldingField::Value,
            HoldingField::Quantity,
            HoldingField::Weight,
            HoldingField::Target,
            HoldingField::Drift,
            HoldingField::DayChange,
            HoldingField::Recommendation,
        ]
    }

    fn searchable() -> &'static [HoldingField] {
        &[HoldingField::Asset, HoldingField::Symbol]
    }
}
