#![allow(dead_code)]

use scrubmark::{Finding, WatermarkCatalog};

/// Sample seeded with discrete watermark characters in non-catalog order.
pub const SEEDED: &str = "A\u{FEFF}B\u{200B}C\u{00A0}D";

pub fn catalog() -> &'static WatermarkCatalog {
    WatermarkCatalog::global()
}

pub fn labels(findings: &[Finding]) -> Vec<&str> {
    findings.iter().map(|finding| finding.label.as_str()).collect()
}

pub fn chars(findings: &[Finding]) -> Vec<char> {
    findings.iter().map(|finding| finding.ch).collect()
}
