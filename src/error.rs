use thiserror::Error;
use tracing::{error, warn};

/// Errors produced by the history store.
///
/// These travel across the worker's request/response channel as values;
/// the worker never panics across that boundary, and a failed operation is
/// reported to exactly the caller that issued it.
#[derive(Error, Debug)]
pub enum StoreError {
    /// The underlying SQLite operation failed. The worker stays alive and
    /// keeps serving subsequent requests.
    #[error("storage operation failed: {0}")]
    Storage(String),

    /// The store has been shut down; no further requests are accepted.
    #[error("history store is stopped")]
    Stopped,

    /// `append` was called with empty content.
    #[error("clipboard content must not be empty")]
    EmptyContent,
}

impl From<rusqlite::Error> for StoreError {
    fn from(err: rusqlite::Error) -> Self {
        StoreError::Storage(err.to_string())
    }
}

/// Errors from the system clipboard boundary.
#[derive(Error, Debug)]
pub enum ClipboardError {
    /// Reading the clipboard failed. Fatal to the sampler loop.
    #[error("clipboard read failed: {0}")]
    Read(String),
}

/// Extension trait for silent error logging with caller location tracking.
/// Use when the operation is recoverable and the caller has nothing useful
/// to do with the failure beyond recording it.
pub trait ResultExt<T> {
    /// Log error with caller location and return None. Use for recoverable failures.
    fn log_err(self) -> Option<T>;
    /// Log as warning with caller location and return None. Use for expected failures.
    fn warn_on_err(self) -> Option<T>;
}

impl<T, E: std::fmt::Debug> ResultExt<T> for std::result::Result<T, E> {
    #[track_caller]
    fn log_err(self) -> Option<T> {
        match self {
            Ok(value) => Some(value),
            Err(err) => {
                let caller = std::panic::Location::caller();
                error!(
                    error = ?err,
                    file = caller.file(),
                    line = caller.line(),
                    "Operation failed"
                );
                None
            }
        }
    }

    #[track_caller]
    fn warn_on_err(self) -> Option<T> {
        match self {
            Ok(value) => Some(value),
            Err(err) => {
                let caller = std::panic::Location::caller();
                warn!(
                    error = ?err,
                    file = caller.file(),
                    line = caller.line(),
                    "Operation had warning"
                );
                None
            }
        }
    }
}
