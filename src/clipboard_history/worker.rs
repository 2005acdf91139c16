//! History store worker thread
//!
//! Single-threaded SQLite access via message passing. The worker owns the
//! database connection for its entire lifetime (Starting through Stopped);
//! every caller blocks on a reply channel paired with its own request, so
//! responses never cross between callers and operations are totally
//! ordered by dequeue order.

use rusqlite::Connection;
use std::path::PathBuf;
use std::sync::mpsc::{Receiver, SyncSender};
use std::thread::{self, JoinHandle};
use tracing::{debug, error, info};

use super::db;
use super::types::ClipboardSnapshot;
use crate::error::{ResultExt, StoreError};

/// Request types for the store worker
pub(crate) enum StoreRequest {
    /// Insert one snapshot, trimming beyond capacity
    Append {
        content: String,
        reply: SyncSender<Result<i64, StoreError>>,
    },
    /// All retained contents, most-recent first
    List {
        reply: SyncSender<Result<Vec<String>, StoreError>>,
    },
    /// All retained snapshots, most-recent first
    Entries {
        reply: SyncSender<Result<Vec<ClipboardSnapshot>, StoreError>>,
    },
    /// Number of retained entries
    Count {
        reply: SyncSender<Result<usize, StoreError>>,
    },
    /// Delete all entries; replies with a confirmation message
    Clear {
        reply: SyncSender<Result<String, StoreError>>,
    },
    /// Stop the worker after draining already-queued requests
    Shutdown,
}

/// Spawn the store worker.
///
/// The worker opens the database and bootstraps the schema before serving
/// anything; the outcome is reported on `ready` exactly once. On a
/// bootstrap failure the thread exits without serving and every queued
/// request is dropped (callers observe a disconnected channel).
pub(crate) fn spawn(
    db_path: PathBuf,
    capacity: usize,
    requests: Receiver<StoreRequest>,
    ready: SyncSender<Result<(), StoreError>>,
) -> JoinHandle<()> {
    thread::spawn(move || {
        let conn = match db::open_connection(&db_path) {
            Ok(conn) => conn,
            Err(e) => {
                error!(error = %e, path = %db_path.display(), "History store failed to start");
                let _ = ready.send(Err(e));
                return;
            }
        };
        let _ = ready.send(Ok(()));

        info!(capacity, path = %db_path.display(), "History store ready");
        worker_loop(conn, capacity, requests);
        info!("History store stopped");
    })
}

fn worker_loop(conn: Connection, capacity: usize, requests: Receiver<StoreRequest>) {
    for request in requests {
        if !handle_request(&conn, capacity, request) {
            break;
        }
    }
}

/// Serve one request. Returns false when the worker should stop.
///
/// A failed reply send means the caller dropped its receiver mid-request;
/// the result is lost but the worker keeps serving.
fn handle_request(conn: &Connection, capacity: usize, request: StoreRequest) -> bool {
    match request {
        StoreRequest::Append { content, reply } => {
            reply.send(db::append_impl(conn, &content, capacity)).warn_on_err();
        }
        StoreRequest::List { reply } => {
            reply.send(db::list_impl(conn)).warn_on_err();
        }
        StoreRequest::Entries { reply } => {
            reply.send(db::entries_impl(conn)).warn_on_err();
        }
        StoreRequest::Count { reply } => {
            reply.send(db::count_impl(conn)).warn_on_err();
        }
        StoreRequest::Clear { reply } => {
            let result = db::clear_impl(conn).map(|deleted| {
                info!(deleted, "Cleared clipboard history");
                "Clipboard history cleared".to_string()
            });
            reply.send(result).warn_on_err();
        }
        StoreRequest::Shutdown => {
            debug!("History store worker shutting down");
            return false;
        }
    }
    true
}
