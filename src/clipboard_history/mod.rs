//! Clipboard History Module
//!
//! SQLite-backed clipboard history with background monitoring.
//!
//! ## Architecture
//! - A single worker thread owns the database connection and serializes
//!   all access; callers reach it through request/response messages and
//!   block for their paired reply (`store`, `worker`, `db`).
//! - A sampler thread polls the clipboard, suppresses consecutive
//!   duplicates, and appends genuinely new text (`sampler`, `clipboard`).
//!
//! ## Module Structure
//! - `types`: snapshot type and timestamp parsing
//! - `clipboard`: system clipboard read boundary
//! - `db`: SQLite schema and operations (worker thread only)
//! - `worker`: the serializing store worker
//! - `store`: public request/response handles
//! - `sampler`: background clipboard polling

mod clipboard;
mod db;
pub mod sampler;
mod store;
mod types;
mod worker;

// Re-export public API
pub use clipboard::{ClipboardSource, SystemClipboard};
pub use sampler::SamplerHandle;
pub use store::{HistoryStore, StoreHandle};
pub use types::ClipboardSnapshot;
