//! cliplog - background clipboard-history recorder
//!
//! A sampler thread polls the system clipboard and forwards new text to a
//! SQLite-backed history store. The store is owned by a single worker
//! thread; everything else reaches it through request/response messages,
//! so access is serialized structurally rather than with locks.

pub mod clipboard_history;
pub mod config;
pub mod error;
pub mod logging;
