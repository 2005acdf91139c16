//! Public handles to the history store
//!
//! `HistoryStore` owns the worker and must be shut down exactly once;
//! consuming `self` in [`HistoryStore::shutdown`] turns a second shutdown
//! into a compile error instead of a runtime one. `StoreHandle` is the
//! cheap cloneable handle given to additional callers (the sampler); a
//! handle that outlives shutdown fails fast with [`StoreError::Stopped`].

use std::path::PathBuf;
use std::sync::mpsc::{self, Sender, SyncSender};
use std::thread::JoinHandle;

use super::types::ClipboardSnapshot;
use super::worker::{self, StoreRequest};
use crate::error::StoreError;

/// Owning handle: opens the database, runs the worker, serves requests.
pub struct HistoryStore {
    requests: Sender<StoreRequest>,
    worker: JoinHandle<()>,
}

/// Cloneable data-operation handle for additional callers.
#[derive(Clone)]
pub struct StoreHandle {
    requests: Sender<StoreRequest>,
}

impl HistoryStore {
    /// Open (or create) the backing database and start the worker.
    ///
    /// Blocks until the worker has verified or created the schema; a
    /// storage bootstrap failure surfaces here, before any request can be
    /// issued.
    pub fn open(db_path: impl Into<PathBuf>, capacity: usize) -> Result<Self, StoreError> {
        let (requests, request_rx) = mpsc::channel();
        let (ready_tx, ready_rx) = mpsc::sync_channel(1);
        let worker = worker::spawn(db_path.into(), capacity, request_rx, ready_tx);

        match ready_rx.recv() {
            Ok(Ok(())) => Ok(Self { requests, worker }),
            Ok(Err(e)) => {
                let _ = worker.join();
                Err(e)
            }
            // Worker died before reporting readiness
            Err(_) => {
                let _ = worker.join();
                Err(StoreError::Stopped)
            }
        }
    }

    /// A cloneable handle sharing this store's request channel.
    pub fn handle(&self) -> StoreHandle {
        StoreHandle {
            requests: self.requests.clone(),
        }
    }

    /// Record one clipboard snapshot. An `Err` means "not acknowledged";
    /// the store never deduplicates - that is the sampler's job.
    pub fn append(&self, content: &str) -> Result<(), StoreError> {
        append(&self.requests, content)
    }

    /// All retained contents, most-recent first.
    pub fn list(&self) -> Result<Vec<String>, StoreError> {
        request(&self.requests, |reply| StoreRequest::List { reply })
    }

    /// All retained snapshots (with ids and capture times), most-recent first.
    pub fn entries(&self) -> Result<Vec<ClipboardSnapshot>, StoreError> {
        request(&self.requests, |reply| StoreRequest::Entries { reply })
    }

    /// Number of retained entries.
    pub fn count(&self) -> Result<usize, StoreError> {
        request(&self.requests, |reply| StoreRequest::Count { reply })
    }

    /// Delete all entries. Returns a human-readable confirmation.
    pub fn clear(&self) -> Result<String, StoreError> {
        request(&self.requests, |reply| StoreRequest::Clear { reply })
    }

    /// Shut the worker down, draining already-queued requests first, and
    /// wait for it to exit. Requests issued through surviving
    /// [`StoreHandle`] clones fail fast afterwards.
    pub fn shutdown(self) -> Result<(), StoreError> {
        let _ = self.requests.send(StoreRequest::Shutdown);
        self.worker
            .join()
            .map_err(|_| StoreError::Storage("history store worker panicked".to_string()))
    }
}

impl StoreHandle {
    /// Record one clipboard snapshot. See [`HistoryStore::append`].
    pub fn append(&self, content: &str) -> Result<(), StoreError> {
        append(&self.requests, content)
    }

    /// All retained contents, most-recent first.
    pub fn list(&self) -> Result<Vec<String>, StoreError> {
        request(&self.requests, |reply| StoreRequest::List { reply })
    }

    /// Number of retained entries.
    pub fn count(&self) -> Result<usize, StoreError> {
        request(&self.requests, |reply| StoreRequest::Count { reply })
    }

    /// Delete all entries. Returns a human-readable confirmation.
    pub fn clear(&self) -> Result<String, StoreError> {
        request(&self.requests, |reply| StoreRequest::Clear { reply })
    }
}

fn append(requests: &Sender<StoreRequest>, content: &str) -> Result<(), StoreError> {
    if content.is_empty() {
        return Err(StoreError::EmptyContent);
    }
    let content = content.to_string();
    request(requests, |reply| StoreRequest::Append { content, reply }).map(|_id| ())
}

/// Issue one request and block for its paired reply. A disconnected
/// channel on either leg means the worker is gone.
fn request<T>(
    requests: &Sender<StoreRequest>,
    make: impl FnOnce(SyncSender<Result<T, StoreError>>) -> StoreRequest,
) -> Result<T, StoreError> {
    let (reply_tx, reply_rx) = mpsc::sync_channel(1);
    requests
        .send(make(reply_tx))
        .map_err(|_| StoreError::Stopped)?;
    reply_rx.recv().map_err(|_| StoreError::Stopped)?
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    fn open_temp(capacity: usize) -> (tempfile::TempDir, HistoryStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = HistoryStore::open(dir.path().join("history.sqlite"), capacity).unwrap();
        (dir, store)
    }

    #[test]
    fn append_beyond_capacity_evicts_oldest() {
        let (_dir, store) = open_temp(3);
        for content in ["a", "b", "c", "d"] {
            store.append(content).unwrap();
        }
        assert_eq!(store.list().unwrap(), vec!["d", "c", "b"]);
        store.shutdown().unwrap();
    }

    #[test]
    fn list_is_most_recent_first() {
        let (_dir, store) = open_temp(10);
        for content in ["first", "second", "third"] {
            store.append(content).unwrap();
        }
        assert_eq!(store.list().unwrap(), vec!["third", "second", "first"]);

        let entries = store.entries().unwrap();
        assert!(entries[0].id > entries[1].id);
        assert!(entries[0].captured_at >= entries[1].captured_at);
        store.shutdown().unwrap();
    }

    #[test]
    fn store_does_not_deduplicate() {
        // Duplicate suppression belongs to the sampler; direct appends of
        // identical content must both be retained.
        let (_dir, store) = open_temp(10);
        store.append("x").unwrap();
        store.append("x").unwrap();
        assert_eq!(store.list().unwrap(), vec!["x", "x"]);
        store.shutdown().unwrap();
    }

    #[test]
    fn empty_content_is_rejected() {
        let (_dir, store) = open_temp(10);
        assert!(matches!(store.append(""), Err(StoreError::EmptyContent)));
        assert_eq!(store.count().unwrap(), 0);
        store.shutdown().unwrap();
    }

    #[test]
    fn clear_is_idempotent() {
        let (_dir, store) = open_temp(10);
        assert_eq!(store.clear().unwrap(), "Clipboard history cleared");

        store.append("a").unwrap();
        store.append("b").unwrap();
        store.clear().unwrap();
        store.clear().unwrap();
        assert!(store.list().unwrap().is_empty());
        store.shutdown().unwrap();
    }

    #[test]
    fn append_works_after_clear() {
        let (_dir, store) = open_temp(10);
        for content in ["a", "b", "c", "d", "e"] {
            store.append(content).unwrap();
        }
        store.clear().unwrap();
        assert!(store.list().unwrap().is_empty());

        store.append("y").unwrap();
        assert_eq!(store.list().unwrap(), vec!["y"]);
        store.shutdown().unwrap();
    }

    #[test]
    fn concurrent_appends_are_all_retained_up_to_capacity() {
        let (_dir, store) = open_temp(8);
        let workers: Vec<_> = (0..16)
            .map(|i| {
                let handle = store.handle();
                thread::spawn(move || handle.append(&format!("entry-{i}")))
            })
            .collect();
        for worker in workers {
            worker.join().unwrap().unwrap();
        }
        assert_eq!(store.list().unwrap().len(), 8);
        store.shutdown().unwrap();
    }

    #[test]
    fn concurrent_appends_below_capacity_keep_everything() {
        let (_dir, store) = open_temp(50);
        let workers: Vec<_> = (0..4)
            .map(|i| {
                let handle = store.handle();
                thread::spawn(move || handle.append(&format!("entry-{i}")))
            })
            .collect();
        for worker in workers {
            worker.join().unwrap().unwrap();
        }

        let mut listed = store.list().unwrap();
        listed.sort();
        assert_eq!(listed, vec!["entry-0", "entry-1", "entry-2", "entry-3"]);
        store.shutdown().unwrap();
    }

    #[test]
    fn requests_after_shutdown_fail_fast() {
        let (_dir, store) = open_temp(10);
        store.append("kept").unwrap();
        let handle = store.handle();
        store.shutdown().unwrap();

        assert!(matches!(handle.append("late"), Err(StoreError::Stopped)));
        assert!(matches!(handle.list(), Err(StoreError::Stopped)));
        assert!(matches!(handle.clear(), Err(StoreError::Stopped)));
    }

    #[test]
    fn bootstrap_failure_surfaces_from_open() {
        // Parent "directory" is a file, so the database path can't be created.
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("not-a-directory");
        std::fs::write(&blocker, b"blocker").unwrap();

        let result = HistoryStore::open(blocker.join("db").join("history.sqlite"), 10);
        assert!(matches!(result, Err(StoreError::Storage(_))));
    }

    #[test]
    fn history_persists_across_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("history.sqlite");

        let store = HistoryStore::open(&path, 10).unwrap();
        store.append("survives").unwrap();
        store.shutdown().unwrap();

        let store = HistoryStore::open(&path, 10).unwrap();
        assert_eq!(store.list().unwrap(), vec!["survives"]);
        store.shutdown().unwrap();
    }
}
