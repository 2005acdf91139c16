//! Core types for the clipboard history subsystem

use chrono::{DateTime, NaiveDateTime, Utc};

/// One captured clipboard text value with its capture time.
///
/// Snapshots are created by the store at insertion and never mutated;
/// they disappear through retention trimming or an explicit clear.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClipboardSnapshot {
    /// Row id assigned by the database; strictly increasing in insertion order
    pub id: i64,
    /// The captured clipboard text (never empty)
    pub content: String,
    /// Capture time assigned by the database at insertion
    pub captured_at: DateTime<Utc>,
}

/// Parse a SQLite `CURRENT_TIMESTAMP` value ("YYYY-MM-DD HH:MM:SS", UTC).
pub(crate) fn parse_sqlite_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S")
        .ok()
        .map(|naive| naive.and_utc())
}
