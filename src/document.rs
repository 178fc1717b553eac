//! Paragraph/table document model.
//!
//! A structured document is a JSON file holding paragraphs and tables of
//! cells, each with a plain-text body. Scrubbing strips every body with
//! the full catalog and reports discrete members aggregated across the
//! whole document, in catalog-definition order.

use crate::catalog::WatermarkCatalog;
use crate::error::ScrubError;
use crate::scanner::{self, Finding};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs::File;
use std::path::Path;

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Document {
    #[serde(default)]
    pub paragraphs: Vec<Paragraph>,
    #[serde(default)]
    pub tables: Vec<Table>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Paragraph {
    pub text: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Table {
    #[serde(default)]
    pub rows: Vec<TableRow>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TableRow {
    #[serde(default)]
    pub cells: Vec<TableCell>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TableCell {
    pub text: String,
}

pub fn load_document(path: &Path) -> Result<Document, ScrubError> {
    let file = File::open(path)
        .map_err(|err| ScrubError::io(format!("opening {}", path.display()), err))?;
    Ok(serde_json::from_reader(file)?)
}

pub fn save_document(path: &Path, document: &Document) -> Result<(), ScrubError> {
    let json = serde_json::to_string_pretty(document)?;
    crate::files::write_atomic(path, json.as_bytes())
}

/// Strip every paragraph and cell body in place. Returns the distinct
/// discrete catalog characters seen anywhere in the original bodies.
pub fn scrub_document(catalog: &WatermarkCatalog, document: &mut Document) -> Vec<Finding> {
    let mut seen: HashSet<char> = HashSet::new();
    for paragraph in &mut document.paragraphs {
        scrub_body(catalog, &mut paragraph.text, &mut seen);
    }
    for table in &mut document.tables {
        for row in &mut table.rows {
            for cell in &mut row.cells {
                scrub_body(catalog, &mut cell.text, &mut seen);
            }
        }
    }
    catalog
        .entries()
        .filter(|entry| seen.contains(&entry.ch))
        .map(|entry| Finding::new(entry.ch, entry.name))
        .collect()
}

fn scrub_body(catalog: &WatermarkCatalog, body: &mut String, seen: &mut HashSet<char>) {
    seen.extend(body.chars().filter(|ch| catalog.is_discrete(*ch)));
    *body = scanner::strip(catalog, body);
}
