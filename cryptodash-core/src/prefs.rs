//! Preference store, a small JSON key-value file.
//!
//! Loaded once at startup and written synchronously on every mutation. A
//! missing or corrupt file yields defaults, never an error.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde_json::Value as Json;
use thiserror::Error;

use crate::indicators::{Indicator, DEFAULT_INDICATORS};

/// Key holding the ordered list of enabled chart indicator ids.
pub const CHART_INDICATORS_KEY: &str = "chartIndicators";

#[derive(Debug, Error)]
pub enum PrefsError {
    #[error("failed to write preferences to {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to encode preferences: {0}")]
    Encode(#[from] serde_json::Error),
}

#[derive(Debug, Clone)]
pub struct PreferenceStore {
    path: PathBuf,
    values: BTreeMap<String, Json>,
}

impl PreferenceStore {
    /// Read `path`. Missing file → empty store; unreadable or corrupt → empty store with a warning.
    pub fn load(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let values = match std::fs::read_to_string(&path) {
            Ok(content) => match serde_json::from_str::<BTreeMap<String, Json>>(&content) {
                Ok(values) => values,
                Err(e) => {
                    log::warn!("ignoring corrupt preferences at {}: {e}", path.display());
                    BTreeMap::new()
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
            Err(e) => {
                log::warn!("cannot read preferences at {}: {e}", path.display());
                BTreeMap::new()
            }
        };
        Self { path, values }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn get(&self, key: &str) -> Option<&Json> {
        self.values.get(key)
    }

    /// Set `key` and write the whole file. On a failed write the previous
    /// value is restored, so memory never runs ahead of disk.
    pub fn set(&mut self, key: &str, value: Json) -> Result<(), PrefsError> {
        let previous = self.values.insert(key.to_string(), value);
        if let Err(e) = self.save() {
            match previous {
                Some(old) => self.values.insert(key.to_string(), old),
                None => self.values.remove(key),
            };
            return Err(e);
        }
        Ok(())
    }

    fn save(&self) -> Result<(), PrefsError> {
        let json = serde_json::to_string_pretty(&self.values)?;
        let write = |path: &Path| -> std::io::Result<()> {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(path, json.as_bytes())
        };
        write(&self.path).map_err(|source| PrefsError::Write {
            path: self.path.clone(),
            source,
        })?;
        log::debug!("preferences written to {}", self.path.display());
        Ok(())
    }

    /// Enabled chart indicators in toggle order. Falls back to the defaults
    /// when the key is absent or holds anything but a list of known ids.
    pub fn chart_indicators(&self) -> Vec<Indicator> {
        let parsed = self
            .get(CHART_INDICATORS_KEY)
            .and_then(|v| serde_json::from_value::<Vec<String>>(v.clone()).ok())
            .and_then(|ids| {
                ids.iter()
                    .map(|id| Indicator::from_id(id))
                    .collect::<Option<Vec<_>>>()
            });
        parsed.unwrap_or_else(|| DEFAULT_INDICATORS.to_vec())
    }

    /// Remove `indicator` if enabled, else append it. Persists immediately and
    /// returns the new list.
    pub fn toggle_indicator(&mut self, indicator: Indicator) -> Result<Vec<Indicator>, PrefsError> {
        let mut list = self.chart_indicators();
        if let Some(pos) = list.iter().position(|i| *i == indicator) {
            list.remove(pos);
        } else {
            list.push(indicator);
        }
        let ids: Vec<&str> = list.iter().map(|i| i.id()).collect();
        self.set(CHART_INDICATORS_KEY, serde_json::json!(ids))?;
        Ok(list)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failed_write_keeps_previous_state() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, "").unwrap();
        let mut store = PreferenceStore::load(blocker.join("prefs.json"));

        assert!(store.toggle_indicator(Indicator::Rsi).is_err());
        assert_eq!(store.chart_indicators(), vec![Indicator::Ma20, Indicator::Ma50]);
        assert!(store.get(CHART_INDICATORS_KEY).is_none());

        assert!(store.set("theme", serde_json::json!("dark")).is_err());
        assert!(store.get("theme").is_none());
    }

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let store = PreferenceStore::load(dir.path().join("prefs.json"));
        assert_eq!(store.chart_indicators(), vec![Indicator::Ma20, Indicator::Ma50]);
    }

    #[test]
    fn corrupt_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.json");
        std::fs::write(&path, "not valid json {{{").unwrap();
        let store = PreferenceStore::load(&path);
        assert_eq!(store.chart_indicators(), DEFAULT_INDICATORS.to_vec());
    }

    #[test]
    fn unknown_indicator_id_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.json");
        std::fs::write(&path, r#"{"chartIndicators": ["MA20", "BOLL"]}"#).unwrap();
        let store = PreferenceStore::load(&path);
        assert_eq!(store.chart_indicators(), DEFAULT_INDICATORS.to_vec());
    }

    #[test]
    fn toggle_appends_then_removes() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = PreferenceStore::load(dir.path().join("nested/prefs.json"));
        let list = store.toggle_indicator(Indicator::Rsi).unwrap();
        assert_eq!(list, vec![Indicator::Ma20, Indicator::Ma50, Indicator::Rsi]);
        let list = store.toggle_indicator(Indicator::Ma20).unwrap();
        assert_eq!(list, vec![Indicator::Ma50, Indicator::Rsi]);
    }

    #[test]
    fn written_file_uses_indicator_ids() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.json");
        let mut store = PreferenceStore::load(&path);
        store.toggle_indicator(Indicator::Macd).unwrap();
        let raw: serde_json::Value = serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(raw[CHART_INDICATORS_KEY], serde_json::json!(["MA20", "MA50", "MACD"]));
    }
}
