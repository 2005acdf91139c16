//! Configuration type definitions

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

use super::defaults::*;

/// Top-level configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Clipboard history settings
    #[serde(default)]
    pub history: HistoryConfig,
}

/// Settings for the clipboard history subsystem
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryConfig {
    /// Maximum retained entries (default: 50)
    #[serde(default = "default_capacity")]
    pub capacity: usize,
    /// Clipboard poll interval in milliseconds (default: 1000)
    #[serde(default = "default_poll_interval_ms")]
    pub poll_interval_ms: u64,
    /// Database file override (default: ~/.cliplog/db/history.sqlite)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub database_path: Option<PathBuf>,
}

fn default_capacity() -> usize {
    DEFAULT_HISTORY_CAPACITY
}
fn default_poll_interval_ms() -> u64 {
    DEFAULT_POLL_INTERVAL_MS
}

impl Default for HistoryConfig {
    fn default() -> Self {
        HistoryConfig {
            capacity: DEFAULT_HISTORY_CAPACITY,
            poll_interval_ms: DEFAULT_POLL_INTERVAL_MS,
            database_path: None,
        }
    }
}

impl HistoryConfig {
    /// Poll interval as a `Duration`
    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }

    /// The database path to use: the configured override, or the default location
    pub fn resolve_database_path(&self) -> PathBuf {
        self.database_path
            .clone()
            .unwrap_or_else(default_database_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_json_yields_defaults() {
        let config: Config = serde_json::from_str("{}").unwrap();
        assert_eq!(config.history.capacity, DEFAULT_HISTORY_CAPACITY);
        assert_eq!(config.history.poll_interval_ms, DEFAULT_POLL_INTERVAL_MS);
        assert!(config.history.database_path.is_none());
    }

    #[test]
    fn partial_history_config_fills_in_defaults() {
        let config: Config = serde_json::from_str(r#"{"history":{"capacity":5}}"#).unwrap();
        assert_eq!(config.history.capacity, 5);
        assert_eq!(config.history.poll_interval_ms, DEFAULT_POLL_INTERVAL_MS);
    }

    #[test]
    fn camel_case_keys_parse() {
        let config: Config = serde_json::from_str(
            r#"{"history":{"pollIntervalMs":250,"databasePath":"/tmp/history.sqlite"}}"#,
        )
        .unwrap();
        assert_eq!(config.history.poll_interval(), Duration::from_millis(250));
        assert_eq!(
            config.history.resolve_database_path(),
            PathBuf::from("/tmp/history.sqlite")
        );
    }

    #[test]
    fn default_database_path_used_without_override() {
        let config = HistoryConfig::default();
        assert_eq!(config.resolve_database_path(), default_database_path());
    }
}
