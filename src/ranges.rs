//! Page-range construction: ordering raw page records, matching open/close
//! markers with an explicit stack, and merging adjacent ranges.
//!
//! Malformed ranges (dangling opens, dangling closes, mismatched
//! encapsulators, format-spanning ranges) are reported through the log sink
//! and repaired best-effort; range processing never fails.

use std::cmp::Ordering;

use crate::options::ProcessingOptions;
use crate::page::{NumberFormat, PageNumber, RangeMarker};
use crate::style::OutputStyle;

/// A contiguous page span for display. Degenerate when begin == end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRange {
    /// First page of the span
    pub begin: PageNumber,
    /// Last page of the span
    pub end: PageNumber,
}

impl PageRange {
    /// Range covering a single page.
    pub fn single(page: &PageNumber) -> PageRange {
        PageRange { begin: page.clone(), end: page.clone() }
    }

    /// Page distance end - begin, or `None` for incomplete ranges whose
    /// endpoints do not share a numeral system.
    pub fn span(&self) -> Option<i64> {
        self.end.diff(&self.begin)
    }
}

const FORMAT_COUNT: usize = 6;

/// Default precedence when the style's `page_precedence` is malformed:
/// roman lower, arabic, alpha lower, roman upper, alpha upper.
const DEFAULT_PRECEDENCE: [usize; FORMAT_COUNT] = [0, 1, 0, 3, 2, 4];

/// Orders one entry's raw page records and folds them into display ranges.
pub struct PageSorter {
    precedence: [usize; FORMAT_COUNT],
    strict: bool,
    disable_range: bool,
    merge_mixed_encaps: bool,
}

impl PageSorter {
    /// Sorter configured from the style's page precedence string and the
    /// processing options.
    pub fn new(style: &OutputStyle, options: &ProcessingOptions) -> PageSorter {
        PageSorter {
            precedence: parse_precedence(&style.page_precedence),
            strict: options.strict,
            disable_range: options.disable_range,
            merge_mixed_encaps: options.merge_mixed_encaps,
        }
    }

    fn rank(&self, format: NumberFormat) -> usize {
        self.precedence[format as usize]
    }

    fn value_cmp(&self, a: &PageNumber, b: &PageNumber) -> Ordering {
        self.rank(a.format).cmp(&self.rank(b.format)).then_with(|| a.value.cmp(&b.value))
    }

    /// Strict order: encapsulator first, so differently encapsulated pages
    /// never interleave.
    fn strict_cmp(&self, a: &PageNumber, b: &PageNumber) -> Ordering {
        a.encap
            .cmp(&b.encap)
            .then_with(|| self.value_cmp(a, b))
            .then_with(|| a.marker.cmp(&b.marker))
    }

    /// Loose order: by page value first, encapsulator last, so adjacent pages
    /// meet regardless of their commands (legacy behavior).
    fn loose_cmp(&self, a: &PageNumber, b: &PageNumber) -> Ordering {
        self.value_cmp(a, b)
            .then_with(|| a.marker.cmp(&b.marker))
            .then_with(|| a.encap.cmp(&b.encap))
    }

    /// Pass 1: order the records and fold open/normal/close markers into
    /// ranges with a stack. Only the outermost open/close pair of a nest
    /// emits a range; dangling markers produce placeholder endpoints.
    pub fn sort(&self, pages: &[PageNumber]) -> Vec<PageRange> {
        let mut pages = pages.to_vec();
        if self.strict {
            pages.sort_by(|a, b| self.strict_cmp(a, b));
        } else {
            pages.sort_by(|a, b| self.loose_cmp(a, b));
        }

        let mut out = Vec::new();
        let mut stack: Vec<PageNumber> = Vec::new();
        let mut i = 0;
        while i < pages.len() {
            let p = pages[i].clone();
            if stack.is_empty() {
                match p.marker {
                    RangeMarker::Normal => out.push(PageRange::single(&p)),
                    RangeMarker::Open => stack.push(p),
                    RangeMarker::Close => {
                        log::warn!(
                            "page range closed at {}{{{}}} was never opened",
                            encap_label(&p.encap),
                            p
                        );
                        out.push(PageRange { begin: p.placeholder(), end: p });
                    }
                    RangeMarker::Unknown => {}
                }
            } else {
                if p.encap != stack[0].encap {
                    if self.strict {
                        let front = stack[0].clone();
                        log::warn!(
                            "page range opened at {}{{{}}} was never closed",
                            encap_label(&front.encap),
                            front
                        );
                        out.push(PageRange { begin: front.clone(), end: front.placeholder() });
                        stack.clear();
                        // reprocess this record against the empty stack
                        continue;
                    }
                    if p.marker == RangeMarker::Normal {
                        out.push(PageRange::single(&p));
                    } else {
                        log::warn!(
                            "page {}{}{{{}}} inside range {}{{{}--}} uses a different command; dropped",
                            p.marker,
                            encap_label(&p.encap),
                            p,
                            encap_label(&stack[0].encap),
                            stack[0]
                        );
                    }
                    i += 1;
                    continue;
                }
                if let Some(top) = stack.last() {
                    if !p.compatible(top) {
                        log::warn!(
                            "page range {}{{{} -- {}}} spans different numeral formats",
                            encap_label(&top.encap),
                            top,
                            p
                        );
                    }
                }
                match p.marker {
                    RangeMarker::Normal => {}
                    RangeMarker::Open => stack.push(p),
                    RangeMarker::Close => {
                        if stack.len() == 1 {
                            out.push(PageRange { begin: stack[0].clone(), end: p });
                        }
                        stack.pop();
                    }
                    RangeMarker::Unknown => {}
                }
            }
            i += 1;
        }
        if let Some(front) = stack.first() {
            log::warn!(
                "page range opened at {}{{{}}} was never closed",
                encap_label(&front.encap),
                front
            );
            out.push(PageRange { begin: front.clone(), end: front.placeholder() });
        }
        out
    }

    /// Pass 2: merge adjacent ranges.
    ///
    /// With ranges enabled, a range whose begin continues the previous range
    /// (same encapsulator unless mixed merging is on, same numeral system,
    /// gap of at most one page) extends the previous end instead of starting
    /// a new range. With ranges disabled, only exact duplicate single pages
    /// collapse. Running the pass twice changes nothing.
    pub fn merge(&self, ranges: Vec<PageRange>) -> Vec<PageRange> {
        let mut out: Vec<PageRange> = Vec::new();
        for range in ranges {
            if out.is_empty() {
                out.push(range);
                continue;
            }
            let prev = out.len() - 1;
            if self.disable_range
                && (range.begin.marker == RangeMarker::Normal
                    || out[prev].begin.marker == RangeMarker::Normal)
            {
                if out[prev].begin == range.begin {
                    continue;
                }
                out.push(range);
            } else if (self.merge_mixed_encaps || out[prev].begin.encap == range.begin.encap)
                && range.begin.compatible(&out[prev].begin)
                && matches!(range.begin.diff(&out[prev].end), Some(d) if d <= 1)
            {
                out[prev].end = range.end;
            } else {
                out.push(range);
            }
        }
        // degenerate ranges read as plain pages
        for range in &mut out {
            if range.begin.encap == range.end.encap && range.span() == Some(0) {
                range.begin.marker = RangeMarker::Normal;
                range.end.marker = RangeMarker::Normal;
            }
        }
        out
    }
}

fn parse_precedence(spec: &str) -> [usize; FORMAT_COUNT] {
    let mut precedence = [0usize; FORMAT_COUNT];
    for (rank, c) in spec.chars().enumerate() {
        let format = match c {
            'r' => NumberFormat::RomanLower,
            'n' => NumberFormat::Arabic,
            'a' => NumberFormat::AlphaLower,
            'R' => NumberFormat::RomanUpper,
            'A' => NumberFormat::AlphaUpper,
            _ => {
                log::warn!("malformed page_precedence '{}', using default", spec);
                return DEFAULT_PRECEDENCE;
            }
        };
        precedence[format as usize] = rank;
    }
    precedence
}

fn encap_label(encap: &str) -> &str {
    if encap.is_empty() {
        "(none)"
    } else {
        encap
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(value: u32, encap: &str, marker: RangeMarker) -> PageNumber {
        PageNumber {
            value,
            format: NumberFormat::Arabic,
            encap: encap.to_string(),
            marker,
        }
    }

    fn sorter(options: ProcessingOptions) -> PageSorter {
        PageSorter::new(&OutputStyle::default(), &options)
    }

    #[test]
    fn test_single_pages_pass_through() {
        let s = sorter(ProcessingOptions::default());
        let ranges = s.sort(&[page(5, "", RangeMarker::Normal)]);
        assert_eq!(ranges, vec![PageRange::single(&page(5, "", RangeMarker::Normal))]);
    }

    #[test]
    fn test_open_close_pair_forms_range() {
        let s = sorter(ProcessingOptions::default());
        let ranges = s.sort(&[
            page(5, "see", RangeMarker::Close),
            page(3, "see", RangeMarker::Open),
        ]);
        assert_eq!(ranges.len(), 1);
        assert_eq!(ranges[0].begin.value, 3);
        assert_eq!(ranges[0].end.value, 5);
        assert_eq!(ranges[0].begin.encap, "see");
    }

    #[test]
    fn test_pages_inside_range_are_absorbed() {
        let s = sorter(ProcessingOptions::default());
        let ranges = s.sort(&[
            page(1, "", RangeMarker::Open),
            page(2, "", RangeMarker::Normal),
            page(3, "", RangeMarker::Normal),
            page(3, "", RangeMarker::Close),
        ]);
        assert_eq!(ranges.len(), 1);
        assert_eq!((ranges[0].begin.value, ranges[0].end.value), (1, 3));
    }

    #[test]
    fn test_nested_ranges_emit_outermost_only() {
        let s = sorter(ProcessingOptions::default());
        let ranges = s.sort(&[
            page(1, "", RangeMarker::Open),
            page(2, "", RangeMarker::Open),
            page(3, "", RangeMarker::Close),
            page(5, "", RangeMarker::Close),
        ]);
        assert_eq!(ranges.len(), 1);
        assert_eq!((ranges[0].begin.value, ranges[0].end.value), (1, 5));
    }

    #[test]
    fn test_dangling_open_emits_placeholder_end() {
        let s = sorter(ProcessingOptions::default());
        let ranges = s.sort(&[page(9, "see", RangeMarker::Open)]);
        assert_eq!(ranges.len(), 1);
        assert_eq!(ranges[0].begin.value, 9);
        assert_eq!(ranges[0].end.format, NumberFormat::Unknown);
        assert_eq!(ranges[0].end.encap, "see");
    }

    #[test]
    fn test_dangling_close_emits_placeholder_begin() {
        let s = sorter(ProcessingOptions::default());
        let ranges = s.sort(&[page(7, "", RangeMarker::Close)]);
        assert_eq!(ranges.len(), 1);
        assert_eq!(ranges[0].begin.format, NumberFormat::Unknown);
        assert_eq!(ranges[0].end.value, 7);
    }

    #[test]
    fn test_strict_mismatch_flushes_stack() {
        let s = sorter(ProcessingOptions { strict: true, ..Default::default() });
        // strict sorting separates encapsulators: "" sorts before "bf", so
        // the bare open is processed first and flushed when 4{bf} arrives
        let ranges = s.sort(&[
            page(3, "", RangeMarker::Open),
            page(4, "bf", RangeMarker::Normal),
        ]);
        assert_eq!(ranges.len(), 2);
        assert_eq!(ranges[0].begin.value, 3);
        assert_eq!(ranges[0].end.format, NumberFormat::Unknown);
        assert_eq!(ranges[1], PageRange::single(&page(4, "bf", RangeMarker::Normal)));
    }

    #[test]
    fn test_loose_mismatch_keeps_plain_page_drops_marked() {
        let s = sorter(ProcessingOptions::default());
        let ranges = s.sort(&[
            page(1, "", RangeMarker::Open),
            page(2, "bf", RangeMarker::Normal),
            page(3, "bf", RangeMarker::Open),
            page(4, "", RangeMarker::Close),
        ]);
        // the plain mismatched page survives alone; the marked mismatched
        // open is reported and dropped; the outer range still closes
        assert_eq!(ranges.len(), 2);
        assert_eq!(ranges[0], PageRange::single(&page(2, "bf", RangeMarker::Normal)));
        assert_eq!((ranges[1].begin.value, ranges[1].end.value), (1, 4));
    }

    #[test]
    fn test_merge_adjacent_singles() {
        let s = sorter(ProcessingOptions::default());
        let ranges = s.merge(s.sort(&[
            page(12, "", RangeMarker::Normal),
            page(13, "", RangeMarker::Normal),
        ]));
        assert_eq!(ranges.len(), 1);
        assert_eq!((ranges[0].begin.value, ranges[0].end.value), (12, 13));
    }

    #[test]
    fn test_merge_chains_ranges_and_singles() {
        let s = sorter(ProcessingOptions::default());
        let ranges = s.merge(s.sort(&[
            page(1, "", RangeMarker::Normal),
            page(2, "", RangeMarker::Open),
            page(3, "", RangeMarker::Close),
            page(4, "", RangeMarker::Normal),
            page(7, "", RangeMarker::Normal),
        ]));
        assert_eq!(ranges.len(), 2);
        assert_eq!((ranges[0].begin.value, ranges[0].end.value), (1, 4));
        assert_eq!((ranges[1].begin.value, ranges[1].end.value), (7, 7));
    }

    #[test]
    fn test_merge_respects_encapsulators() {
        let s = sorter(ProcessingOptions::default());
        let ranges = s.merge(s.sort(&[
            page(1, "", RangeMarker::Normal),
            page(2, "bf", RangeMarker::Normal),
        ]));
        assert_eq!(ranges.len(), 2);
    }

    #[test]
    fn test_merge_mixed_encaps_when_enabled() {
        let s = sorter(ProcessingOptions { merge_mixed_encaps: true, ..Default::default() });
        let ranges = s.merge(s.sort(&[
            page(1, "", RangeMarker::Normal),
            page(2, "bf", RangeMarker::Normal),
        ]));
        assert_eq!(ranges.len(), 1);
        assert_eq!((ranges[0].begin.value, ranges[0].end.value), (1, 2));
    }

    #[test]
    fn test_disable_range_collapses_duplicates_only() {
        let s = sorter(ProcessingOptions { disable_range: true, ..Default::default() });
        let ranges = s.merge(s.sort(&[
            page(12, "", RangeMarker::Normal),
            page(12, "", RangeMarker::Normal),
            page(13, "", RangeMarker::Normal),
        ]));
        assert_eq!(ranges.len(), 2);
        assert_eq!(ranges[0], PageRange::single(&page(12, "", RangeMarker::Normal)));
        assert_eq!(ranges[1], PageRange::single(&page(13, "", RangeMarker::Normal)));
    }

    #[test]
    fn test_merge_is_idempotent() {
        let s = sorter(ProcessingOptions::default());
        let once = s.merge(s.sort(&[
            page(1, "", RangeMarker::Normal),
            page(2, "", RangeMarker::Normal),
            page(5, "", RangeMarker::Open),
            page(8, "", RangeMarker::Close),
            page(9, "", RangeMarker::Normal),
        ]));
        let twice = s.merge(once.clone());
        assert_eq!(once, twice);
    }

    #[test]
    fn test_roman_pages_precede_arabic() {
        let s = sorter(ProcessingOptions::default());
        let roman = PageNumber {
            value: 2,
            format: NumberFormat::RomanLower,
            encap: String::new(),
            marker: RangeMarker::Normal,
        };
        let ranges = s.sort(&[page(1, "", RangeMarker::Normal), roman.clone()]);
        assert_eq!(ranges[0], PageRange::single(&roman));
        assert_eq!(ranges[1], PageRange::single(&page(1, "", RangeMarker::Normal)));
    }

    #[test]
    fn test_format_spanning_range_stays_incomplete() {
        let s = sorter(ProcessingOptions::default());
        // roman pages sort first, so the roman open meets the arabic close
        let roman_open = PageNumber {
            value: 2,
            format: NumberFormat::RomanLower,
            encap: String::new(),
            marker: RangeMarker::Open,
        };
        let ranges = s.sort(&[roman_open, page(4, "", RangeMarker::Close)]);
        // the close still matches; the warning is the only difference
        assert_eq!(ranges.len(), 1);
        assert_eq!(ranges[0].span(), None);
    }
}
