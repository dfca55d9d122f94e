//! Index assembly: collation-ordered grouping of entries and the
//! template-driven writer.
//!
//! The assembler is deliberately thin. It sorts the flattened store with the
//! chosen collation strategy, folds each entry's pages into display ranges,
//! and files (depth, text, ranges) items into the strategy's groups; the
//! writer then walks the groups emitting the style templates into any byte
//! sink.

use std::io::{self, Write};

use crate::collate::Collator;
use crate::entry::IndexEntry;
use crate::options::ProcessingOptions;
use crate::page::RangeMarker;
use crate::ranges::{PageRange, PageSorter};
use crate::style::OutputStyle;

/// One output item: hierarchy depth, display text and its page ranges.
#[derive(Debug, Clone)]
pub struct IndexItem {
    /// Hierarchy depth, 0 for top-level items
    pub depth: usize,
    /// Display text of the innermost level
    pub text: String,
    /// Collapsed page ranges, in display order
    pub pages: Vec<PageRange>,
}

/// One heading group of output items.
#[derive(Debug, Clone, Default)]
pub struct IndexGroup {
    /// Group heading (may be empty when headings are disabled)
    pub name: String,
    /// Items in collation order
    pub items: Vec<IndexItem>,
}

/// The fully collated index, ready for writing.
#[derive(Debug)]
pub struct OutputIndex {
    groups: Vec<IndexGroup>,
}

impl OutputIndex {
    /// Sort, range-fold and group the flattened entries.
    pub fn build(
        mut entries: Vec<IndexEntry>,
        collator: Collator,
        style: &OutputStyle,
        options: &ProcessingOptions,
    ) -> OutputIndex {
        let mut groups: Vec<IndexGroup> = collator
            .group_names(style)
            .into_iter()
            .map(|name| IndexGroup { name, items: Vec::new() })
            .collect();

        entries.sort_by(|a, b| collator.entry_cmp(a, b));

        let sorter = PageSorter::new(style, options);
        for entry in &entries {
            let text = match entry.display_text() {
                Some(text) => text.to_string(),
                None => continue,
            };
            let pages = sorter.merge(sorter.sort(&entry.pages));
            let item = IndexItem { depth: entry.depth() - 1, text, pages };
            groups[collator.group_of(entry)].items.push(item);
        }

        OutputIndex { groups }
    }

    /// Groups in output order, empty ones included.
    pub fn groups(&self) -> &[IndexGroup] {
        &self.groups
    }

    /// Write the index through the style templates.
    pub fn write<W: Write>(&self, w: &mut W, style: &OutputStyle) -> io::Result<()> {
        write!(w, "{}", style.preamble)?;
        let mut first_group = true;
        for group in &self.groups {
            if group.items.is_empty() {
                continue;
            }
            if first_group {
                first_group = false;
            } else {
                write!(w, "{}", style.group_skip)?;
            }
            if style.headings_flag != 0 {
                write!(w, "{}{}{}", style.heading_prefix, group.name, style.heading_suffix)?;
            }
            for (i, item) in group.items.iter().enumerate() {
                let prev = i.checked_sub(1).map(|p| &group.items[p]);
                match item.depth {
                    0 => write!(w, "{}", style.item_0)?,
                    1 => match prev {
                        Some(prev) if prev.depth == 0 => {
                            if prev.pages.is_empty() {
                                write!(w, "{}", style.item_x1)?;
                            } else {
                                write!(w, "{}", style.item_01)?;
                            }
                        }
                        _ => write!(w, "{}", style.item_1)?,
                    },
                    2 => match prev {
                        Some(prev) if prev.depth == 1 => {
                            if prev.pages.is_empty() {
                                write!(w, "{}", style.item_x2)?;
                            } else {
                                write!(w, "{}", style.item_12)?;
                            }
                        }
                        _ => write!(w, "{}", style.item_2)?,
                    },
                    _ => {
                        log::warn!("entry '{}' nested too deeply, skipped", item.text);
                        continue;
                    }
                }
                write!(w, "{}", item.text)?;
                write_pages(w, item, style)?;
            }
        }
        write!(w, "{}", style.postamble)
    }
}

fn write_pages<W: Write>(w: &mut W, item: &IndexItem, style: &OutputStyle) -> io::Result<()> {
    if item.pages.is_empty() {
        return Ok(());
    }
    let delim = match item.depth {
        0 => &style.delim_0,
        1 => &style.delim_1,
        _ => &style.delim_2,
    };
    write!(w, "{}", delim)?;
    for (i, range) in item.pages.iter().enumerate() {
        if i > 0 {
            write!(w, "{}", style.delim_n)?;
        }
        write_range(w, range, style)?;
    }
    write!(w, "{}", style.delim_t)
}

fn write_range<W: Write>(w: &mut W, range: &PageRange, style: &OutputStyle) -> io::Result<()> {
    let begin = range.begin.to_string();
    let text = match range.span() {
        Some(0) => begin,
        // two merged singles with no two-page suffix stay two plain pages
        Some(1)
            if range.begin.marker == RangeMarker::Normal
                && range.end.marker == RangeMarker::Normal
                && style.suffix_2p.is_empty() =>
        {
            format!("{}{}{}", begin, style.delim_n, range.end)
        }
        Some(1) if !style.suffix_2p.is_empty() => format!("{}{}", begin, style.suffix_2p),
        Some(2) if !style.suffix_3p.is_empty() => format!("{}{}", begin, style.suffix_3p),
        Some(d) if d >= 2 && !style.suffix_mp.is_empty() => {
            format!("{}{}", begin, style.suffix_mp)
        }
        _ => format!("{}{}{}", begin, style.delim_r, range.end),
    };
    // the encapsulator of the begin page decides; incomplete ranges may
    // disagree but still render
    if range.begin.encap.is_empty() {
        write!(w, "{}", text)
    } else {
        write!(
            w,
            "{}{}{}{}{}",
            style.encap_prefix, range.begin.encap, style.encap_infix, text, style.encap_suffix
        )
    }
}
