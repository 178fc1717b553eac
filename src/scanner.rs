//! Pure detection and removal over a text buffer.
//!
//! Every function here is total: any well-formed string, including the
//! empty string, yields a result and never an error. Inputs are read-only;
//! removal allocates a fresh string. Iteration is by `char`, so the
//! high-plane tag-space range matches like any other scalar value.

use crate::catalog::WatermarkCatalog;
use serde::Serialize;
use std::collections::BTreeSet;

/// One distinct watermark character found in a buffer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Finding {
    /// The character itself.
    pub ch: char,
    /// Canonical codepoint label, e.g. `U+200B`.
    pub label: String,
    /// Unicode name, or the owning range's name for range-only matches.
    pub name: &'static str,
}

impl Finding {
    pub(crate) fn new(ch: char, name: &'static str) -> Self {
        Self {
            ch,
            label: codepoint_label(ch),
            name,
        }
    }
}

/// Uppercase hexadecimal codepoint label with the conventional `U+` prefix
/// and a minimum width of four digits.
pub fn codepoint_label(ch: char) -> String {
    format!("U+{:04X}", ch as u32)
}

/// Report the distinct discrete catalog characters present in `text`.
///
/// Iterates the catalog rather than the input, so findings come out
/// deduplicated and in catalog-definition order regardless of where they
/// occur in the text. Characters matching only the open ranges are not
/// reported here even though [`strip`] removes them; [`detect_all`]
/// includes them.
pub fn detect(catalog: &WatermarkCatalog, text: &str) -> Vec<Finding> {
    catalog
        .entries()
        .filter(|entry| text.contains(entry.ch))
        .map(|entry| Finding::new(entry.ch, entry.name))
        .collect()
}

/// Full-classification detection: discrete findings first, in catalog
/// order, then distinct range-only characters ascending by scalar value.
pub fn detect_all(catalog: &WatermarkCatalog, text: &str) -> Vec<Finding> {
    let mut findings = detect(catalog, text);
    let range_only: BTreeSet<char> = text
        .chars()
        .filter(|ch| !catalog.is_discrete(*ch) && catalog.is_watermark(*ch))
        .collect();
    for ch in range_only {
        if let Some(range) = catalog.range_for(ch) {
            findings.push(Finding::new(ch, range.name));
        }
    }
    findings
}

/// Copy of `text` with every catalog-classified character removed.
///
/// Retained characters keep their relative order; nothing else is touched
/// (no normalization, no whitespace collapsing). Stripping an already
/// stripped string returns it unchanged.
pub fn strip(catalog: &WatermarkCatalog, text: &str) -> String {
    text.chars()
        .filter(|ch| !catalog.is_watermark(*ch))
        .collect()
}

/// Scalar positions to mark when rendering occurrences of discrete catalog
/// characters.
///
/// Each occurrence at index `i` (0-based over scalar values) marks
/// `{i-1, i, i+1}` clamped to the buffer bounds; marks from adjacent
/// occurrences coalesce. Returns a sorted, deduplicated position list.
/// Rendering only; removal never consults this.
pub fn highlight_positions(catalog: &WatermarkCatalog, text: &str) -> Vec<usize> {
    let len = text.chars().count();
    let mut marks = BTreeSet::new();
    for (i, ch) in text.chars().enumerate() {
        if !catalog.is_discrete(ch) {
            continue;
        }
        if i > 0 {
            marks.insert(i - 1);
        }
        marks.insert(i);
        if i + 1 < len {
            marks.insert(i + 1);
        }
    }
    marks.into_iter().collect()
}
