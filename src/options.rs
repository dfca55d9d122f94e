//! Processing options controlling scanning and page-range behavior.

use serde::{Deserialize, Serialize};

/// Toggles for the scanning and page-range stages.
///
/// All default to off, matching the permissive legacy behavior.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ProcessingOptions {
    /// Trim surrounding whitespace from level keys while scanning
    pub compress: bool,
    /// Keep pages with different encapsulators strictly separated when
    /// sorting; mismatches inside a range flush the range as dangling
    pub strict: bool,
    /// Disable automatic range construction from adjacent single pages;
    /// only exact duplicates collapse
    pub disable_range: bool,
    /// Let the adjacency merge join ranges whose encapsulators differ
    pub merge_mixed_encaps: bool,
}
