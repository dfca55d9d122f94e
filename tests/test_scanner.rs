//! Scanner integration tests: the record grammar end to end, including
//! configurable delimiters and per-line error recovery.

use index_oxide::{EntryLevel, InputStyle, NumberFormat, ProcessingOptions, RangeMarker, Scanner};

#[test]
fn test_full_record_with_all_features() {
    let input = "\\indexentry{math!sqrt@$\\sqrt{x}$|(textit}{42}";
    let mut scanner = Scanner::new(input);
    let entry = scanner.scan_entry(&InputStyle::default(), false).unwrap();

    assert_eq!(
        entry.levels,
        vec![
            EntryLevel::plain("math"),
            EntryLevel::new("sqrt", "$\\sqrt{x}$"),
        ]
    );
    assert_eq!(entry.pages.len(), 1);
    let page = &entry.pages[0];
    assert_eq!(page.value, 42);
    assert_eq!(page.format, NumberFormat::Arabic);
    assert_eq!(page.encap, "textit");
    assert_eq!(page.marker, RangeMarker::Open);
}

#[test]
fn test_custom_delimiters() {
    let style = InputStyle {
        keyword: "\\item".to_string(),
        arg_open: '[',
        arg_close: ']',
        level: '>',
        ..InputStyle::default()
    };
    let mut scanner = Scanner::new("\\item[outer>inner][ix]");
    let entry = scanner.scan_entry(&style, false).unwrap();
    assert_eq!(
        entry.levels,
        vec![EntryLevel::plain("outer"), EntryLevel::plain("inner")]
    );
    assert_eq!(entry.pages[0].value, 9);
    assert_eq!(entry.pages[0].format, NumberFormat::RomanLower);
}

#[test]
fn test_cjk_entries() {
    let mut scanner = Scanner::new("\\indexentry{汉字!编码}{12}");
    let entry = scanner.scan_entry(&InputStyle::default(), false).unwrap();
    assert_eq!(
        entry.levels,
        vec![EntryLevel::plain("汉字"), EntryLevel::plain("编码")]
    );
}

#[test]
fn test_whitespace_between_bodies() {
    let mut scanner = Scanner::new("  \\indexentry{word}\n  {7}\n");
    let entry = scanner.scan_entry(&InputStyle::default(), false).unwrap();
    assert_eq!(entry.levels, vec![EntryLevel::plain("word")]);
    assert_eq!(entry.pages[0].value, 7);
}

#[test]
fn test_error_recovery_across_lines() {
    let input = "\\indexentry{one}{1}\n\
                 \\indexentry{two}{not-a-page}\n\
                 garbage\n\
                 \\indexentry{three}{3}\n";
    let style = InputStyle::default();
    let options = ProcessingOptions::default();

    let mut store = index_oxide::EntryStore::new();
    let (accepted, rejected) = store.read_source("test.idx", input, &style, &options);
    assert_eq!((accepted, rejected), (2, 2));

    let entries = store.into_entries();
    let keys: Vec<_> = entries.iter().map(|e| e.levels[0].key.clone()).collect();
    assert_eq!(keys, vec!["one", "three"]);
}

#[test]
fn test_quoted_and_escaped_delimiters() {
    let style = InputStyle::default();
    // quoted level separator stays literal
    let entry = Scanner::new("\\indexentry{C\"!}{1}").scan_entry(&style, false).unwrap();
    assert_eq!(entry.levels, vec![EntryLevel::plain("C!")]);

    // quoted encap separator stays literal
    let entry = Scanner::new("\\indexentry{a\"|b}{2}").scan_entry(&style, false).unwrap();
    assert_eq!(entry.levels, vec![EntryLevel::plain("a|b")]);
    assert!(entry.pages[0].encap.is_empty());

    // an escape before the quote keeps the quote literal instead
    let entry = Scanner::new("\\indexentry{a\\\"b}{3}").scan_entry(&style, false).unwrap();
    assert_eq!(entry.levels, vec![EntryLevel::plain("a\\\"b")]);
}

#[test]
fn test_nested_braces_track_depth() {
    let style = InputStyle::default();
    let entry = Scanner::new("\\indexentry{cmd@\\textbf{bold {deep}}}{1}")
        .scan_entry(&style, false)
        .unwrap();
    assert_eq!(
        entry.levels,
        vec![EntryLevel::new("cmd", "\\textbf{bold {deep}}")]
    );
}

#[test]
fn test_encap_command_with_braces() {
    let style = InputStyle::default();
    let entry = Scanner::new("\\indexentry{word|format{arg}}{5}")
        .scan_entry(&style, false)
        .unwrap();
    assert_eq!(entry.pages[0].encap, "format{arg}");
}
