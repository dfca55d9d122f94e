//! Entry store integration tests: cross-source merging and ancestor
//! synthesis, driven through the scanner.

use index_oxide::{EntryStore, InputStyle, ProcessingOptions};

fn read(store: &mut EntryStore, name: &str, input: &str) -> (usize, usize) {
    store.read_source(name, input, &InputStyle::default(), &ProcessingOptions::default())
}

#[test]
fn test_pages_concatenate_across_sources() {
    let mut store = EntryStore::new();
    read(&mut store, "a.idx", "\\indexentry{term}{3}\n\\indexentry{term}{1}\n");
    read(&mut store, "b.idx", "\\indexentry{term}{2}\n");

    let entries = store.into_entries();
    assert_eq!(entries.len(), 1);
    let values: Vec<u32> = entries[0].pages.iter().map(|p| p.value).collect();
    // encounter order is preserved; the range processor sorts later
    assert_eq!(values, vec![3, 1, 2]);
}

#[test]
fn test_three_level_entry_synthesizes_two_ancestors() {
    let mut store = EntryStore::new();
    read(&mut store, "a.idx", "\\indexentry{a!b!c}{1}\n");

    let entries = store.into_entries();
    let keys: Vec<Vec<&str>> = entries
        .iter()
        .map(|e| e.levels.iter().map(|l| l.key.as_str()).collect())
        .collect();
    assert_eq!(keys, vec![vec!["a"], vec!["a", "b"], vec!["a", "b", "c"]]);
    assert!(entries[0].pages.is_empty());
    assert!(entries[1].pages.is_empty());
    assert_eq!(entries[2].pages.len(), 1);
}

#[test]
fn test_existing_ancestors_are_reused() {
    let mut store = EntryStore::new();
    read(&mut store, "a.idx", "\\indexentry{a!b}{1}\n\\indexentry{a!b!c}{2}\n");
    // [a] placeholder, [a,b] with page 1, [a,b,c] with page 2 and no
    // duplicate [a,b]
    assert_eq!(store.len(), 3);

    let entries = store.into_entries();
    assert_eq!(entries[1].pages.len(), 1);
    assert_eq!(entries[2].pages.len(), 1);
}

#[test]
fn test_sibling_subtrees_share_ancestors() {
    let mut store = EntryStore::new();
    read(
        &mut store,
        "a.idx",
        "\\indexentry{tree!avl}{1}\n\\indexentry{tree!rbtree}{2}\n",
    );
    // one shared [tree] placeholder plus the two leaves
    assert_eq!(store.len(), 3);
}

#[test]
fn test_actual_text_distinguishes_entries() {
    let mut store = EntryStore::new();
    read(
        &mut store,
        "a.idx",
        "\\indexentry{key}{1}\n\\indexentry{key@fancy}{2}\n",
    );
    // same sort key, different display text: two distinct entries
    assert_eq!(store.len(), 2);
}
