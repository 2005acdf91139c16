//! Configuration module - application settings
//!
//! This module provides functionality for:
//! - Loading configuration from ~/.cliplog/config.json
//! - Default values for all settings
//! - Type definitions for config structures
//!
//! # Module Structure
//!
//! - `defaults` - All default constant values
//! - `types` - Configuration struct definitions (Config, HistoryConfig)
//! - `loader` - File system loading and parsing

mod defaults;
mod loader;
mod types;

// Re-export defaults that are used externally
pub use defaults::{default_database_path, DEFAULT_HISTORY_CAPACITY, DEFAULT_POLL_INTERVAL_MS};

// Re-export types that are used externally
pub use types::{Config, HistoryConfig};

// Re-export loader
pub use loader::load_config;
