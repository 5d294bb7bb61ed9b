pub mod blocks;
pub mod rows;
pub mod sections;

use crate::catalog::Catalog;

/// Two-pass pipeline: markdown → blocks → categorized catalog.
///
/// Never fails. Lines that are neither a `###` heading nor a recognizable table row
/// are skipped, so the worst case is an empty catalog.
pub fn parse(markdown: &str) -> Catalog {
    let blocks = blocks::classify_lines(markdown);
    sections::cluster_categories(blocks)
}

// ── Tests ──
