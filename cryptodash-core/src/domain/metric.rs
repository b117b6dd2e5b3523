//! Headline KPI cards shown above the market overview.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricCard {
    pub title: String,
    /// Pre-rendered headline, e.g. `$1.68T` or `8.2/10`.
    pub value: String,
    /// Change versus the previous period, in percent.
    pub change: f64,
    pub sparkline: Vec<f64>,
}

impl MetricCard {
    pub fn new(title: &str, value: &str, change: f64, sparkline: &[f64]) -> Self {
        Self {
            title: title.to_string(),
            value: value.to_string(),
            change,
            sparkline: sparkline.to_vec(),
        }
    }
}
