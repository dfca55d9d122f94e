//! The index entry model: hierarchy levels and their page occurrences.

use crate::page::PageNumber;

/// One hierarchy level of an index entry: sort key plus display text.
///
/// The two differ when the record used the actual separator:
/// `alpha@$\alpha$` sorts under `alpha` but prints as `$\alpha$`.
///
/// The derived ordering compares key first, then text; a sequence of levels
/// therefore orders entries with any strict prefix before its extensions,
/// which is the store order.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EntryLevel {
    /// Text the entry sorts under
    pub key: String,
    /// Text printed in the index
    pub text: String,
}

impl EntryLevel {
    /// Level whose key and display text are the same.
    pub fn plain(text: impl Into<String>) -> EntryLevel {
        let text = text.into();
        EntryLevel { key: text.clone(), text }
    }

    /// Level with distinct sort key and display text.
    pub fn new(key: impl Into<String>, text: impl Into<String>) -> EntryLevel {
        EntryLevel { key: key.into(), text: text.into() }
    }
}

/// One logical index item: an ordered list of hierarchy levels plus the raw
/// page occurrences collected for it across all input sources.
///
/// Levels are never reordered after scanning. Two entries are the same item
/// (and must merge) iff their level sequences are pairwise equal by
/// (key, text).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexEntry {
    /// Hierarchy levels, outermost first
    pub levels: Vec<EntryLevel>,
    /// Raw page occurrences, in encounter order
    pub pages: Vec<PageNumber>,
}

impl IndexEntry {
    /// Nesting depth (number of levels).
    pub fn depth(&self) -> usize {
        self.levels.len()
    }

    /// Display text of the innermost level, if any.
    pub fn display_text(&self) -> Option<&str> {
        self.levels.last().map(|l| l.text.as_str())
    }
}
