//! Error taxonomy for the I/O surfaces.
//!
//! The core (catalog membership, detect, strip, highlight) is total and
//! never fails; every fallible path lives at a surface boundary and is
//! reported through [`ScrubError`].

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScrubError {
    /// The clipboard or input buffer had no text to process.
    #[error("no text to process")]
    EmptySource,

    /// File extension outside the supported set; the file is never opened.
    #[error("unsupported file format '{extension}'; only .txt and .json are supported")]
    UnsupportedFormat { extension: String },

    /// Structured-document surface invoked in a build without the
    /// `document` feature.
    #[error("document support is not available in this build (enable the 'document' feature)")]
    MissingDocumentSupport,

    /// Clipboard backend failure.
    #[error("clipboard access failed: {0}")]
    Clipboard(#[from] arboard::Error),

    /// Filesystem failure while reading or replacing a target.
    #[error("{context}: {source}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },

    /// Structured document could not be parsed or serialized.
    #[cfg(feature = "document")]
    #[error("malformed document: {0}")]
    Document(#[from] serde_json::Error),
}

impl ScrubError {
    pub(crate) fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            context: context.into(),
            source,
        }
    }
}
