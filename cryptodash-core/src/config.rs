//! Dashboard configuration, loaded from TOML.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::sort::SortDirection;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("`{field}` must be greater than zero")]
    Zero { field: &'static str },

    #[error("unknown log level `{0}`")]
    LogLevel(String),
}

/// Refresh periods, in seconds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RefreshConfig {
    pub market_table_secs: u64,
    pub ticker_secs: u64,
    pub price_chart_secs: u64,
}

impl Default for RefreshConfig {
    fn default() -> Self {
        Self {
            market_table_secs: 5,
            ticker_secs: 3,
            price_chart_secs: 5,
        }
    }
}

impl RefreshConfig {
    pub fn market_table(&self) -> Duration {
        Duration::from_secs(self.market_table_secs)
    }

    pub fn ticker(&self) -> Duration {
        Duration::from_secs(self.ticker_secs)
    }

    pub fn price_chart(&self) -> Duration {
        Duration::from_secs(self.price_chart_secs)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Rows per page of the paginated cryptocurrency table.
    pub page_size: usize,
    /// Quotes shown per ticker tab.
    pub ticker_limit: usize,
    /// Direction a column starts in when first selected for sorting.
    pub new_sort_direction: SortDirection,
    pub log_level: String,
    /// Fixed RNG seed for reproducible mock data.
    pub seed: Option<u64>,
    pub refresh: RefreshConfig,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            page_size: 20,
            ticker_limit: 10,
            new_sort_direction: SortDirection::Descending,
            log_level: "info".into(),
            seed: None,
            refresh: RefreshConfig::default(),
        }
    }
}

impl DashboardConfig {
    pub fn from_toml(content: &str, path: &Path) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Read and validate `path`.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&content, path)
    }

    /// Like [`load`](Self::load), but a missing file yields defaults.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            log::debug!("no config at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        Self::load(path)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let checks = [
            ("page_size", self.page_size as u64),
            ("ticker_limit", self.ticker_limit as u64),
            ("refresh.market_table_secs", self.refresh.market_table_secs),
            ("refresh.ticker_secs", self.refresh.ticker_secs),
            ("refresh.price_chart_secs", self.refresh.price_chart_secs),
        ];
        if let Some((field, _)) = checks.iter().find(|(_, v)| *v == 0) {
            return Err(ConfigError::Zero { field: *field });
        }
        self.level_filter()?;
        Ok(())
    }

    pub fn level_filter(&self) -> Result<log::LevelFilter, ConfigError> {
        self.log_level
            .parse()
            .map_err(|_| ConfigError::LogLevel(self.log_level.clone()))
    }

    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_is_all_defaults() {
        let config = DashboardConfig::from_toml("", Path::new("c.toml")).unwrap();
        assert_eq!(config, DashboardConfig::default());
        assert_eq!(config.refresh.ticker(), Duration::from_secs(3));
    }

    #[test]
    fn partial_override() {
        let config = DashboardConfig::from_toml(
            "page_size = 5\nseed = 9\n[refresh]\nticker_secs = 1\n",
            Path::new("c.toml"),
        )
        .unwrap();
        assert_eq!(config.page_size, 5);
        assert_eq!(config.seed, Some(9));
        assert_eq!(config.refresh.ticker_secs, 1);
        assert_eq!(config.refresh.market_table_secs, 5);
    }

    #[test]
    fn zero_period_rejected() {
        let err = DashboardConfig::from_toml("[refresh]\nprice_chart_secs = 0\n", Path::new("c.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Zero { field: "refresh.price_chart_secs" }));
    }

    #[test]
    fn bad_level_rejected() {
        let err = DashboardConfig::from_toml("log_level = \"loud\"", Path::new("c.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::LogLevel(_)));
    }

    #[test]
    fn malformed_toml_is_parse_error() {
        let err = DashboardConfig::from_toml("page_size = [", Path::new("c.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn serialized_defaults_reload() {
        let text = DashboardConfig::default().to_toml().unwrap();
        let back = DashboardConfig::from_toml(&text, Path::new("c.toml")).unwrap();
        assert_eq!(back, DashboardConfig::default());
    }
}
