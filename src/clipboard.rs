//! Clipboard surface: read, scrub, write back.
//!
//! Runs against whatever clipboard backend `arboard` resolves for the host;
//! every backend failure surfaces as [`ScrubError::Clipboard`]. An empty or
//! text-free clipboard is the [`ScrubError::EmptySource`] notice, not a
//! backend failure.

use crate::catalog::WatermarkCatalog;
use crate::error::ScrubError;
use crate::scanner::{self, Finding};
use arboard::Clipboard;
use tracing::{debug, info};

/// Read the clipboard, strip watermark characters with the full catalog,
/// and write the result back. Returns the distinct discrete catalog
/// characters that were present, for user feedback.
pub fn scrub_clipboard(catalog: &WatermarkCatalog) -> Result<Vec<Finding>, ScrubError> {
    let mut clipboard = Clipboard::new()?;
    let text = match clipboard.get_text() {
        Ok(text) if !text.is_empty() => text,
        Ok(_) => return Err(ScrubError::EmptySource),
        Err(arboard::Error::ContentNotAvailable) => return Err(ScrubError::EmptySource),
        Err(err) => return Err(err.into()),
    };
    debug!(bytes = text.len(), "clipboard text read");

    let findings = scanner::detect(catalog, &text);
    let cleaned = scanner::strip(catalog, &text);
    clipboard.set_text(cleaned)?;
    info!(removed = findings.len(), "clipboard scrubbed");
    Ok(findings)
}

/// Place `text` on the system clipboard.
pub fn copy_to_clipboard(text: &str) -> Result<(), ScrubError> {
    let mut clipboard = Clipboard::new()?;
    clipboard.set_text(text.to_string())?;
    Ok(())
}
