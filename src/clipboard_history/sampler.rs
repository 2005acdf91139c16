//! Clipboard sampling loop
//!
//! A background thread polls the clipboard at a fixed interval and
//! forwards new, non-duplicate text to the history store. Duplicate
//! suppression lives here, not in the store: the last forwarded value is
//! kept in memory only and resets on restart.
//!
//! A clipboard read failure stops the loop permanently (fail-stop). A
//! persistently broken clipboard API would otherwise have the loop
//! spinning on errors every poll; the stop is logged at error level so it
//! is observable.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;
use tracing::{debug, error, info, warn};

use super::clipboard::{ClipboardSource, SystemClipboard};
use super::store::StoreHandle;
use crate::error::StoreError;

/// Handle to a running sampler thread.
pub struct SamplerHandle {
    stop: Arc<AtomicBool>,
    thread: JoinHandle<()>,
}

impl SamplerHandle {
    /// Ask the loop to stop at its next poll and wait for it to exit.
    pub fn stop(self) {
        self.stop.store(true, Ordering::Relaxed);
        let _ = self.thread.join();
    }

    /// Block until the loop exits on its own (clipboard failure or store
    /// shutdown).
    pub fn join(self) {
        let _ = self.thread.join();
    }
}

/// Start sampling the system clipboard every `poll_interval`.
///
/// The clipboard handle is created on the sampler thread and lives there
/// for the whole run.
pub fn start(store: StoreHandle, poll_interval: Duration) -> SamplerHandle {
    let stop = Arc::new(AtomicBool::new(false));
    let stop_flag = stop.clone();
    let thread = thread::spawn(move || {
        let mut source = match SystemClipboard::new() {
            Ok(source) => source,
            Err(e) => {
                error!(error = %e, "Failed to open system clipboard");
                return;
            }
        };
        run(&mut source, &store, poll_interval, &stop_flag);
    });
    SamplerHandle { stop, thread }
}

/// Start sampling from a caller-supplied clipboard source.
pub fn start_with_source<S>(
    mut source: S,
    store: StoreHandle,
    poll_interval: Duration,
) -> SamplerHandle
where
    S: ClipboardSource + Send + 'static,
{
    let stop = Arc::new(AtomicBool::new(false));
    let stop_flag = stop.clone();
    let thread = thread::spawn(move || {
        run(&mut source, &store, poll_interval, &stop_flag);
    });
    SamplerHandle { stop, thread }
}

fn run(
    source: &mut dyn ClipboardSource,
    store: &StoreHandle,
    poll_interval: Duration,
    stop: &AtomicBool,
) {
    info!(
        poll_interval_ms = poll_interval.as_millis() as u64,
        "Clipboard sampler started"
    );
    sample_loop(source, store, poll_interval, stop);
    info!("Clipboard sampler stopped");
}

fn sample_loop(
    source: &mut dyn ClipboardSource,
    store: &StoreHandle,
    poll_interval: Duration,
    stop: &AtomicBool,
) {
    let mut last_seen: Option<String> = None;

    loop {
        if stop.load(Ordering::Relaxed) {
            break;
        }

        let text = match source.read_text() {
            Ok(text) => text,
            Err(e) => {
                // Fail-stop: history stops updating, the store stays up
                error!(error = %e, "Clipboard read failed, sampler exiting");
                break;
            }
        };

        if !text.is_empty() && last_seen.as_deref() != Some(text.as_str()) {
            last_seen = Some(text.clone());
            match store.append(&text) {
                Ok(()) => debug!(len = text.len(), "Captured clipboard text"),
                Err(StoreError::Stopped) => {
                    info!("History store stopped, sampler exiting");
                    break;
                }
                // One lost entry; the next change is still captured
                Err(e) => warn!(error = %e, "Failed to record clipboard text"),
            }
        }

        thread::sleep(poll_interval);
    }
}
