//! On-disk surfaces: extension dispatch, plain-text scrub, atomic replace.

use crate::catalog::WatermarkCatalog;
use crate::error::ScrubError;
use crate::scanner::{self, Finding};
use std::fs;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;
use tracing::{debug, info};

/// Supported on-disk formats.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FileKind {
    PlainText,
    Document,
}

/// Classify a path by extension, ASCII case-insensitively. Anything
/// outside the supported set is an error and the file is never opened.
pub fn file_kind(path: &Path) -> Result<FileKind, ScrubError> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase())
        .unwrap_or_default();
    match extension.as_str() {
        "txt" => Ok(FileKind::PlainText),
        "json" => Ok(FileKind::Document),
        _ => Err(ScrubError::UnsupportedFormat { extension }),
    }
}

/// Scrub a supported file in place and report the discrete catalog
/// characters that were removed.
pub fn scrub_file(catalog: &WatermarkCatalog, path: &Path) -> Result<Vec<Finding>, ScrubError> {
    let kind = file_kind(path)?;
    debug!(path = %path.display(), ?kind, "scrubbing file");
    match kind {
        FileKind::PlainText => scrub_text_file(catalog, path),
        FileKind::Document => scrub_document_file(catalog, path),
    }
}

fn scrub_text_file(catalog: &WatermarkCatalog, path: &Path) -> Result<Vec<Finding>, ScrubError> {
    let content = fs::read_to_string(path)
        .map_err(|err| ScrubError::io(format!("reading {}", path.display()), err))?;
    let findings = scanner::detect(catalog, &content);
    let cleaned = scanner::strip(catalog, &content);
    write_atomic(path, cleaned.as_bytes())?;
    info!(path = %path.display(), removed = findings.len(), "text file scrubbed");
    Ok(findings)
}

#[cfg(feature = "document")]
fn scrub_document_file(catalog: &WatermarkCatalog, path: &Path) -> Result<Vec<Finding>, ScrubError> {
    let mut document = crate::document::load_document(path)?;
    let findings = crate::document::scrub_document(catalog, &mut document);
    crate::document::save_document(path, &document)?;
    info!(path = %path.display(), removed = findings.len(), "document scrubbed");
    Ok(findings)
}

#[cfg(not(feature = "document"))]
fn scrub_document_file(_catalog: &WatermarkCatalog, _path: &Path) -> Result<Vec<Finding>, ScrubError> {
    Err(ScrubError::MissingDocumentSupport)
}

/// Replace `path` by writing a sibling temp file and renaming it over the
/// target, so a failed read or transform never leaves a half-written file.
pub(crate) fn write_atomic(path: &Path, contents: &[u8]) -> Result<(), ScrubError> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut tmp = NamedTempFile::new_in(dir)
        .map_err(|err| ScrubError::io(format!("creating temp file in {}", dir.display()), err))?;
    tmp.write_all(contents)
        .map_err(|err| ScrubError::io(format!("writing temp file for {}", path.display()), err))?;
    tmp.persist(path)
        .map_err(|err| ScrubError::io(format!("replacing {}", path.display()), err.error))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dispatch_recognizes_supported_extensions() {
        assert_eq!(file_kind(Path::new("notes.txt")).unwrap(), FileKind::PlainText);
        assert_eq!(file_kind(Path::new("report.json")).unwrap(), FileKind::Document);
    }

    #[test]
    fn dispatch_ignores_extension_case() {
        assert_eq!(file_kind(Path::new("NOTES.TXT")).unwrap(), FileKind::PlainText);
        assert_eq!(file_kind(Path::new("Report.Json")).unwrap(), FileKind::Document);
    }

    #[test]
    fn dispatch_rejects_everything_else() {
        for name in ["letter.docx", "page.md", "archive.tar.gz", "no_extension"] {
            assert!(matches!(
                file_kind(Path::new(name)),
                Err(ScrubError::UnsupportedFormat { .. })
            ));
        }
    }
}
