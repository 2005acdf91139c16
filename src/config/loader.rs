//! Configuration loading from the file system
//!
//! Handles loading and parsing the config.json file.

use std::path::PathBuf;
use tracing::{info, instrument, warn};

use super::types::Config;

/// Load configuration from ~/.cliplog/config.json
///
/// Returns `Config::default()` if the file is missing, unreadable, or
/// fails to parse. A broken config never prevents startup.
#[instrument(name = "load_config")]
pub fn load_config() -> Config {
    let config_path = get_config_path();

    if !config_path.exists() {
        info!(path = %config_path.display(), "Config file not found, using defaults");
        return Config::default();
    }

    let raw = match std::fs::read_to_string(&config_path) {
        Ok(raw) => raw,
        Err(e) => {
            warn!(error = %e, path = %config_path.display(), "Failed to read config, using defaults");
            return Config::default();
        }
    };

    match parse_config(&raw) {
        Some(config) => {
            info!(path = %config_path.display(), "Loaded config");
            config
        }
        None => Config::default(),
    }
}

fn parse_config(raw: &str) -> Option<Config> {
    match serde_json::from_str::<Config>(raw.trim()) {
        Ok(config) => Some(config),
        Err(e) => {
            warn!(error = %e, "Failed to parse config, using defaults");
            None
        }
    }
}

/// Get the config file path (~/.cliplog/config.json)
fn get_config_path() -> PathBuf {
    dirs::home_dir()
        .map(|h| h.join(".cliplog"))
        .unwrap_or_else(std::env::temp_dir)
        .join("config.json")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_json_parses() {
        let config = parse_config(r#"{"history":{"capacity":10}}"#).unwrap();
        assert_eq!(config.history.capacity, 10);
    }

    #[test]
    fn invalid_json_is_rejected() {
        assert!(parse_config("not json").is_none());
        assert!(parse_config(r#"{"history":{"capacity":"ten"}}"#).is_none());
    }

    #[test]
    fn surrounding_whitespace_is_tolerated() {
        assert!(parse_config("\n  {}  \n").is_some());
    }

    #[test]
    fn config_path_points_at_json_file() {
        assert!(get_config_path().to_string_lossy().ends_with("config.json"));
    }
}
