//! The entry store: a globally ordered, deduplicated collection of index
//! entries accumulated across all input sources.
//!
//! Entries with identical level sequences merge by concatenating their page
//! lists; new entries bring synthesized, pageless placeholder ancestors with
//! them so the output stage always finds a parent for every nested item. The
//! backing `BTreeMap` gives O(log n) insert/lookup and in-order traversal;
//! the pluggable collation order is applied later, by the assembler.

use std::collections::BTreeMap;

use crate::entry::{EntryLevel, IndexEntry};
use crate::options::ProcessingOptions;
use crate::page::PageNumber;
use crate::scanner::{ScanError, Scanner};
use crate::style::InputStyle;

/// Ordered, deduplicating entry collection.
#[derive(Debug, Default)]
pub struct EntryStore {
    entries: BTreeMap<Vec<EntryLevel>, Vec<PageNumber>>,
}

impl EntryStore {
    /// Empty store.
    pub fn new() -> EntryStore {
        EntryStore::default()
    }

    /// Number of stored entries, synthesized ancestors included.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when nothing has been ingested.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Ingest one scanned entry.
    ///
    /// An existing entry with the same level sequence absorbs the incoming
    /// pages (append-only, encounter order). Otherwise the entry is inserted
    /// together with placeholder ancestors for every strict level prefix not
    /// yet present; the climb stops at the first prefix that already exists.
    pub fn insert(&mut self, entry: IndexEntry) {
        let IndexEntry { levels, pages } = entry;
        if let Some(existing) = self.entries.get_mut(&levels) {
            existing.extend(pages);
            return;
        }
        let mut prefix = levels.clone();
        self.entries.insert(levels, pages);
        loop {
            prefix.pop();
            if prefix.is_empty() || self.entries.contains_key(&prefix) {
                break;
            }
            self.entries.insert(prefix.clone(), Vec::new());
        }
    }

    /// Flatten into ascending store order, ancestors interleaved in place.
    pub fn into_entries(self) -> Vec<IndexEntry> {
        self.entries
            .into_iter()
            .map(|(levels, pages)| IndexEntry { levels, pages })
            .collect()
    }

    /// Scan a whole source, ingesting every well-formed record.
    ///
    /// Malformed records are reported through the log sink with `name` and
    /// the line number, the offending line is skipped, and scanning resumes.
    /// Returns the accepted and rejected record counts.
    pub fn read_source(
        &mut self,
        name: &str,
        input: &str,
        style: &InputStyle,
        options: &ProcessingOptions,
    ) -> (usize, usize) {
        let mut scanner = Scanner::new(input);
        let mut accepted = 0;
        let mut rejected = 0;
        loop {
            match scanner.scan_entry(style, options.compress) {
                Ok(entry) => {
                    accepted += 1;
                    self.insert(entry);
                }
                Err(ScanError::Eof) => break,
                Err(ScanError::Syntax) => {
                    rejected += 1;
                    let err = crate::error::Error::Syntax { line: scanner.line() };
                    log::warn!("{}: {}", name, err);
                    if !scanner.skip_line() {
                        break;
                    }
                }
            }
        }
        log::info!("{}: accepted {} entries, rejected {}", name, accepted, rejected);
        (accepted, rejected)
    }
}
