//! Indexed view of the watermark catalog.
//!
//! The index keeps the ordered discrete table for deterministic reporting
//! and a hash set for constant-time membership, plus the two scalar ranges.
//! `is_watermark` is the single classification authority; detection and
//! removal both answer membership through it and cannot drift apart.

use crate::catalog::{CatalogEntry, CatalogRange, DISCRETE, RANGES};
use std::collections::HashSet;
use std::sync::OnceLock;

#[derive(Debug)]
pub struct WatermarkCatalog {
    entries: &'static [CatalogEntry],
    ranges: &'static [CatalogRange],
    discrete: HashSet<char>,
}

impl WatermarkCatalog {
    fn build() -> Self {
        let discrete: HashSet<char> = DISCRETE.iter().map(|entry| entry.ch).collect();
        debug_assert_eq!(discrete.len(), DISCRETE.len(), "duplicate discrete entry");
        Self {
            entries: DISCRETE,
            ranges: RANGES,
            discrete,
        }
    }

    /// Process-wide catalog instance, built on first use and immutable
    /// afterwards.
    pub fn global() -> &'static WatermarkCatalog {
        static CATALOG: OnceLock<WatermarkCatalog> = OnceLock::new();
        CATALOG.get_or_init(WatermarkCatalog::build)
    }

    /// Full classification: discrete set or either range. Total over all
    /// scalar values, including the supplementary planes.
    pub fn is_watermark(&self, ch: char) -> bool {
        self.is_discrete(ch) || self.ranges.iter().any(|range| range.contains(ch))
    }

    /// Discrete-table membership only.
    pub fn is_discrete(&self, ch: char) -> bool {
        self.discrete.contains(&ch)
    }

    /// Discrete entries in catalog-definition order.
    pub fn entries(&self) -> impl Iterator<Item = &CatalogEntry> {
        self.entries.iter()
    }

    /// The scalar ranges beyond the discrete table.
    pub fn ranges(&self) -> impl Iterator<Item = &CatalogRange> {
        self.ranges.iter()
    }

    /// Resolve the range a scalar value falls in, if any.
    pub fn range_for(&self, ch: char) -> Option<&CatalogRange> {
        self.ranges.iter().find(|range| range.contains(ch))
    }

    /// Number of discrete entries.
    pub fn discrete_len(&self) -> usize {
        self.entries.len()
    }
}
