//! Default configuration values
//!
//! All constants used throughout the config module are defined here.

use std::path::PathBuf;

/// Maximum number of history entries retained before the oldest are evicted
pub const DEFAULT_HISTORY_CAPACITY: usize = 50;

/// Interval between clipboard polls, in milliseconds
pub const DEFAULT_POLL_INTERVAL_MS: u64 = 1000;

/// Default database location (~/.cliplog/db/history.sqlite)
pub fn default_database_path() -> PathBuf {
    dirs::home_dir()
        .map(|h| h.join(".cliplog").join("db"))
        .unwrap_or_else(|| std::env::temp_dir().join("cliplog-db"))
        .join("history.sqlite")
}
