//! Clipboard access for copying code samples.

use arboard::Clipboard;
use thiserror::Error;

/// Clipboard errors. Always non-fatal: the caller degrades to a warning
/// or a per-workflow failure indicator.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ClipboardError {
    #[error("clipboard access failed: {0}")]
    AccessFailed(String),
}

/// Thin wrapper over the system clipboard.
pub struct ClipboardBridge {
    clipboard: Clipboard,
}

impl ClipboardBridge {
    /// Connect to the system clipboard. Fails on headless hosts.
    pub fn new() -> Result<Self, ClipboardError> {
        let clipboard =
            Clipboard::new().map_err(|e| ClipboardError::AccessFailed(e.to_string()))?;
        Ok(Self { clipboard })
    }

    /// Place `text` on the clipboard verbatim, newlines and comments
    /// included.
    pub fn copy_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        self.clipboard
            .set_text(text)
            .map_err(|e| ClipboardError::AccessFailed(e.to_string()))
    }
}
