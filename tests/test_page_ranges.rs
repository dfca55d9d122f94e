//! Page-range processor integration tests: open/close marker scenarios plus
//! property tests for merge idempotence and the roman round trip.

use proptest::prelude::*;

use index_oxide::{
    NumberFormat, OutputStyle, PageNumber, PageSorter, ProcessingOptions, RangeMarker,
};

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
fn test_open_then_close_forms_one_range() {
    // {word|see}{(}{3} then {word|see}{)}{5}
    let s = sorter(ProcessingOptions::default());
    let ranges = s.sort(&[
        page(3, "see", RangeMarker::Open),
        page(5, "see", RangeMarker::Close),
    ]);
    assert_eq!(ranges.len(), 1);
    assert_eq!(ranges[0].begin.value, 3);
    assert_eq!(ranges[0].end.value, 5);
    assert_eq!(ranges[0].begin.encap, "see");
    assert_eq!(ranges[0].end.encap, "see");
}

#[test]
fn test_unmatched_open_yields_best_effort_range() {
    // {word|see}{(}{9} alone
    let s = sorter(ProcessingOptions::default());
    let ranges = s.sort(&[page(9, "see", RangeMarker::Open)]);
    assert_eq!(ranges.len(), 1);
    assert_eq!(ranges[0].begin.value, 9);
    assert_eq!(ranges[0].begin.encap, "see");
    assert_eq!(ranges[0].end.format, NumberFormat::Unknown);
}

#[test]
fn test_two_plain_pages_merge_into_a_range() {
    // {key!sub}{12} and {key!sub}{13} with auto-merge on
    let s = sorter(ProcessingOptions::default());
    let ranges = s.merge(s.sort(&[
        page(13, "", RangeMarker::Normal),
        page(12, "", RangeMarker::Normal),
    ]));
    assert_eq!(ranges.len(), 1);
    assert_eq!((ranges[0].begin.value, ranges[0].end.value), (12, 13));
}

#[test]
fn test_strict_mode_separates_encapsulators() {
    let strict = sorter(ProcessingOptions { strict: true, ..Default::default() });
    let loose = sorter(ProcessingOptions::default());
    let pages = [
        page(1, "bf", RangeMarker::Normal),
        page(2, "", RangeMarker::Normal),
        page(3, "bf", RangeMarker::Normal),
    ];
    // strict groups by encapsulator, so 1{bf} and 3{bf} stay adjacent in the
    // processing order while the bare 2 comes first
    let strict_values: Vec<u32> =
        strict.sort(&pages).iter().map(|r| r.begin.value).collect();
    assert_eq!(strict_values, vec![2, 1, 3]);
    // loose orders by page value alone
    let loose_values: Vec<u32> = loose.sort(&pages).iter().map(|r| r.begin.value).collect();
    assert_eq!(loose_values, vec![1, 2, 3]);
}

#[test]
fn test_degenerate_merge_gated_across_encapsulators() {
    let pages = [
        page(6, "", RangeMarker::Normal),
        page(7, "bf", RangeMarker::Normal),
    ];
    let plain = sorter(ProcessingOptions::default());
    assert_eq!(plain.merge(plain.sort(&pages)).len(), 2);

    let mixed = sorter(ProcessingOptions { merge_mixed_encaps: true, ..Default::default() });
    let merged = mixed.merge(mixed.sort(&pages));
    assert_eq!(merged.len(), 1);
    assert_eq!((merged[0].begin.value, merged[0].end.value), (6, 7));
    // the merged range keeps the first page's encapsulator
    assert_eq!(merged[0].begin.encap, "");
}

#[test]
fn test_disable_range_keeps_singles() {
    let s = sorter(ProcessingOptions { disable_range: true, ..Default::default() });
    let ranges = s.merge(s.sort(&[
        page(1, "", RangeMarker::Normal),
        page(2, "", RangeMarker::Normal),
        page(2, "", RangeMarker::Normal),
        page(3, "", RangeMarker::Normal),
    ]));
    let values: Vec<u32> = ranges.iter().map(|r| r.begin.value).collect();
    assert_eq!(values, vec![1, 2, 3]);
    assert!(ranges.iter().all(|r| r.span() == Some(0)));
}

proptest! {
    #[test]
    fn prop_merge_is_idempotent(values in proptest::collection::vec(1u32..60, 0..24)) {
        let s = sorter(ProcessingOptions::default());
        let pages: Vec<PageNumber> =
            values.iter().map(|&v| page(v, "", RangeMarker::Normal)).collect();
        let once = s.merge(s.sort(&pages));
        let twice = s.merge(once.clone());
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn prop_merge_idempotent_with_disabled_ranges(
        values in proptest::collection::vec(1u32..40, 0..24),
    ) {
        let s = sorter(ProcessingOptions { disable_range: true, ..Default::default() });
        let pages: Vec<PageNumber> =
            values.iter().map(|&v| page(v, "", RangeMarker::Normal)).collect();
        let once = s.merge(s.sort(&pages));
        let twice = s.merge(once.clone());
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn prop_roman_round_trip(n in 1u32..=3999) {
        let lower = NumberFormat::RomanLower.format(n);
        let reparsed = index_oxide::page::scan_number(&lower);
        prop_assert_eq!(reparsed, Some((NumberFormat::RomanLower, n)));
        let upper = NumberFormat::RomanUpper.format(n);
        let reparsed = index_oxide::page::scan_number(&upper);
        prop_assert_eq!(reparsed, Some((NumberFormat::RomanUpper, n)));
    }

    #[test]
    fn prop_sort_always_produces_output(values in proptest::collection::vec(1u32..30, 1..16)) {
        // every non-empty page list yields a non-empty, best-effort result,
        // whatever the marker mix
        let markers = [RangeMarker::Open, RangeMarker::Normal, RangeMarker::Close];
        let s = sorter(ProcessingOptions::default());
        let pages: Vec<PageNumber> = values
            .iter()
            .enumerate()
            .map(|(i, &v)| page(v, "", markers[i % markers.len()]))
            .collect();
        let ranges = s.merge(s.sort(&pages));
        prop_assert!(!ranges.is_empty());
    }
}
