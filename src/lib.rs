//! # index_oxide
//!
//! CJK-aware makeindex: builds a sorted, deduplicated, typographically
//! formatted index from the raw `\indexentry` records a TeX run leaves in
//! its auxiliary file.
//!
//! ## Pipeline
//!
//! - **Scanner**: parses one heavily escaped, quoted, nested record into an
//!   [`IndexEntry`] (hierarchical levels plus one page record), recovering
//!   per line from malformed input.
//! - **Store**: deduplicates entries across all sources, merges their page
//!   lists and synthesizes missing ancestor levels in an ordered map.
//! - **Collation**: orders entries and groups output with one of three
//!   Unicode-aware strategies — phonetic reading, stroke count, or radical.
//! - **Page ranges**: folds each entry's unordered page records into minimal
//!   display ranges with a stack-based bracket matcher that repairs
//!   malformed open/close markers.
//! - **Assembler**: walks the collated groups and writes the result through
//!   configurable style templates.
//!
//! ## Quick start
//!
//! ```
//! use index_oxide::{Collator, EntryStore, InputStyle, OutputIndex, OutputStyle, ProcessingOptions};
//!
//! let style = InputStyle::default();
//! let options = ProcessingOptions::default();
//! let mut store = EntryStore::new();
//! store.read_source(
//!     "demo.idx",
//!     "\\indexentry{tree!balanced}{12}\n\\indexentry{tree!balanced}{13}\n",
//!     &style,
//!     &options,
//! );
//!
//! let output_style = OutputStyle::default();
//! let index = OutputIndex::build(
//!     store.into_entries(),
//!     Collator::Reading,
//!     &output_style,
//!     &options,
//! );
//! let mut rendered = Vec::new();
//! index.write(&mut rendered, &output_style).unwrap();
//! assert!(String::from_utf8(rendered).unwrap().contains("balanced, 12, 13"));
//! ```

#![warn(missing_docs)]

// Error handling
pub mod error;

// Data model
pub mod entry;
pub mod page;

// Record scanning and accumulation
pub mod scanner;
pub mod store;

// Collation strategies and their linguistic tables
pub mod cjk;
pub mod collate;

// Page-range folding
pub mod ranges;

// Configuration and output
pub mod options;
pub mod output;
pub mod style;

pub use collate::Collator;
pub use entry::{EntryLevel, IndexEntry};
pub use error::{Error, Result};
pub use options::ProcessingOptions;
pub use output::{IndexGroup, IndexItem, OutputIndex};
pub use page::{NumberFormat, PageNumber, RangeMarker};
pub use ranges::{PageRange, PageSorter};
pub use scanner::{ScanError, Scanner};
pub use store::EntryStore;
pub use style::{InputStyle, OutputStyle, StyleSheet};
