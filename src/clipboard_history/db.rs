//! SQLite operations for the history store
//!
//! Every function here runs on the worker thread, against the connection
//! the worker owns. Nothing else in the crate touches the database.

use rusqlite::{params, Connection};
use std::path::Path;
use tracing::debug;

use super::types::{parse_sqlite_timestamp, ClipboardSnapshot};
use crate::error::StoreError;

/// Open the database, creating the file, its parent directory, and the
/// schema as needed.
pub(crate) fn open_connection(path: &Path) -> Result<Connection, StoreError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| {
            StoreError::Storage(format!(
                "failed to create {}: {}",
                parent.display(),
                e
            ))
        })?;
    }

    let conn = Connection::open(path)?;

    conn.execute_batch(
        "PRAGMA journal_mode=WAL; PRAGMA synchronous=NORMAL; PRAGMA busy_timeout = 5000;",
    )?;

    create_schema(&conn)?;

    debug!(path = %path.display(), "History database ready");
    Ok(conn)
}

fn create_schema(conn: &Connection) -> Result<(), StoreError> {
    conn.execute(
        "CREATE TABLE IF NOT EXISTS history (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            content TEXT NOT NULL,
            timestamp DATETIME DEFAULT CURRENT_TIMESTAMP
        )",
        [],
    )?;
    conn.execute(
        "CREATE INDEX IF NOT EXISTS idx_timestamp ON history(timestamp DESC)",
        [],
    )?;
    Ok(())
}

/// Insert a snapshot and evict the oldest entries beyond `capacity`.
///
/// `CURRENT_TIMESTAMP` has one-second granularity, so `id` breaks ties to
/// keep exact insertion order within a second.
pub(crate) fn append_impl(
    conn: &Connection,
    content: &str,
    capacity: usize,
) -> Result<i64, StoreError> {
    conn.execute("INSERT INTO history (content) VALUES (?1)", params![content])?;
    let id = conn.last_insert_rowid();

    let trimmed = conn.execute(
        "DELETE FROM history WHERE id NOT IN (
            SELECT id FROM history ORDER BY timestamp DESC, id DESC LIMIT ?1
        )",
        params![capacity as i64],
    )?;
    if trimmed > 0 {
        debug!(trimmed, capacity, "Evicted oldest history entries");
    }

    Ok(id)
}

/// All retained contents, most-recent first.
pub(crate) fn list_impl(conn: &Connection) -> Result<Vec<String>, StoreError> {
    let mut stmt =
        conn.prepare("SELECT content FROM history ORDER BY timestamp DESC, id DESC")?;
    let rows = stmt.query_map([], |row| row.get(0))?;
    rows.collect::<Result<Vec<String>, _>>()
        .map_err(StoreError::from)
}

/// All retained snapshots, most-recent first.
pub(crate) fn entries_impl(conn: &Connection) -> Result<Vec<ClipboardSnapshot>, StoreError> {
    let mut stmt = conn
        .prepare("SELECT id, content, timestamp FROM history ORDER BY timestamp DESC, id DESC")?;
    let rows = stmt.query_map([], |row| {
        Ok((
            row.get::<_, i64>(0)?,
            row.get::<_, String>(1)?,
            row.get::<_, String>(2)?,
        ))
    })?;

    let mut entries = Vec::new();
    for row in rows {
        let (id, content, raw_timestamp) = row?;
        let captured_at = parse_sqlite_timestamp(&raw_timestamp).ok_or_else(|| {
            StoreError::Storage(format!(
                "unreadable timestamp in row {}: {:?}",
                id, raw_timestamp
            ))
        })?;
        entries.push(ClipboardSnapshot {
            id,
            content,
            captured_at,
        });
    }
    Ok(entries)
}

pub(crate) fn count_impl(conn: &Connection) -> Result<usize, StoreError> {
    let count: i64 = conn.query_row("SELECT COUNT(*) FROM history", [], |row| row.get(0))?;
    Ok(count as usize)
}

/// Delete all entries unconditionally. Returns the number of rows removed.
pub(crate) fn clear_impl(conn: &Connection) -> Result<usize, StoreError> {
    let deleted = conn.execute("DELETE FROM history", [])?;
    Ok(deleted)
}
