//! System clipboard read boundary
//!
//! The sampler consumes exactly one capability from the OS: "read the
//! current clipboard text, or fail". This module provides that seam plus
//! the production implementation on top of `arboard`. No clipboard-write
//! capability is exposed here.

use arboard::Clipboard;

use crate::error::ClipboardError;

/// Source of clipboard text for the sampler.
///
/// A clipboard that currently holds no text (an image, or nothing at all)
/// reads as an empty string; only genuine API failures are errors.
pub trait ClipboardSource {
    fn read_text(&mut self) -> Result<String, ClipboardError>;
}

/// The real system clipboard, backed by `arboard`.
pub struct SystemClipboard {
    inner: Clipboard,
}

impl SystemClipboard {
    pub fn new() -> Result<Self, ClipboardError> {
        Clipboard::new()
            .map(|inner| Self { inner })
            .map_err(|e| ClipboardError::Read(e.to_string()))
    }
}

impl ClipboardSource for SystemClipboard {
    fn read_text(&mut self) -> Result<String, ClipboardError> {
        match self.inner.get_text() {
            Ok(text) => Ok(text),
            // Non-text content is "nothing to sample", not a failure
            Err(arboard::Error::ContentNotAvailable) => Ok(String::new()),
            Err(e) => Err(ClipboardError::Read(e.to_string())),
        }
    }
}
