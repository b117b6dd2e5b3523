//! Risk breakdown rows: per-position exposure and stress results.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::format::ValueKind;
use crate::record::{Column, Record};
use crate::value::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskStatus {
    Normal,
    Warning,
    Critical,
}

impl RiskStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            RiskStatus::Normal => "normal",
            RiskStatus::Warning => "warning",
            RiskStatus::Critical => "critical",
        }
    }

    /// Classify a reading against its limit: above 120 % is critical.
    pub fn for_threshold(value: f64, threshold: f64) -> Self {
        if value > threshold * 1.2 {
            RiskStatus::Critical
        } else if value > threshold {
            RiskStatus::Warning
        } else {
            RiskStatus::Normal
        }
    }
}

impl fmt::Display for RiskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskExposure {
    pub id: String,
    pub asset: String,
    /// Instrument type: Spot, Futures, Options.
    pub kind: String,
    pub position: f64,
    pub beta: f64,
    pub volatility: f64,
    pub correlation: f64,
    /// Loss under the stress scenario, in percent.
    pub stress_test: f64,
    pub status: RiskStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RiskField {
    Asset,
    Kind,
    Position,
    Beta,
    Volatility,
    Correlation,
    StressTest,
    Status,
}

impl Column for RiskField {
    fn label(self) -> &'static str {
        match self {
            RiskField::Asset => "Asset",
            RiskField::Kind => "Type",
            RiskField::Position => "Position",
            RiskField::Beta => "Beta",
            RiskField::Volatility => "Volatility",
            RiskField::Correlation => "Correlation",
            RiskField::StressTest => "Stress Test",
            RiskField::Status => "Status",
        }
    }

    fn key(self) -> &'static str {
        match self {
            RiskField::Asset => "asset",
            RiskField::Kind => "type",
            RiskField::Position => "position",
            RiskField::Beta => "beta",
            RiskField::Volatility => "volatility",
            RiskField::Correlation => "correlation",
            RiskField::StressTest => "stressTest",
            RiskField::Status => "status",
        }
    }

    fn kind(self) -> ValueKind {
        match self {
            RiskField::Position => ValueKind::Currency,
            RiskField::Volatility | RiskField::StressTest => ValueKind::Percentage { decimals: 1 },
            _ => ValueKind::Number { decimals: 2 },
        }
    }
}

impl Record for RiskExposure {
    type Field = RiskField;
    type Facet = ();

    fn key(&self) -> &str {
        &self.id
    }

    fn value(&self, field: RiskField) -> Value<'_> {
        match field {
            RiskField::Asset => Value::Text(&self.asset),
            RiskField::Kind => Value::Text(&self.kind),
            RiskField::Position => self.position.into(),
            RiskField::Beta => self.beta.into(),
            RiskField::Volatility => self.volatility.into(),
            RiskField::Correlation => self.correlation.into(),
            RiskField::StressTest => self.stress_test.into(),
            RiskField::Status => Value::Text(self.status.as_str()),
        }
    }

    fn columns() -> &'static [RiskField] {
        &[
            RiskField::Asset,
            RiskField::Kind,
            RiskField::Position,
            RiskField::Beta,
            RiskField::Volatility,
            RiskField::Correlation,
            RiskField::StressTest,
            RiskField::Status,
        ]
    }

    fn searchable() -> &'static [RiskField] {
        &[RiskField::Asset, RiskField::Kind]
    }
}
