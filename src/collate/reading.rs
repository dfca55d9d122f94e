//! Phonetic-reading strategy: characters order by their normalized reading
//! and group with the Latin letter of the reading's initial.

use std::cmp::Ordering;

use super::{char_cmp_ignore_case, LETTER_BASE};
use crate::cjk;

pub(super) fn char_cmp(a: char, b: char) -> Ordering {
    match (cjk::reading(a), cjk::reading(b)) {
        (None, None) => char_cmp_ignore_case(a, b),
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (Some(ra), Some(rb)) => ra.cmp(rb),
    }
}

pub(super) fn is_cjk(c: char) -> bool {
    cjk::reading(c).is_some()
}

/// Letter group of the reading's initial, e.g. 汉 (han4) under `h`.
pub(super) fn cjk_group(c: char) -> Option<usize> {
    let initial = cjk::reading(c)?.bytes().next()?;
    initial.is_ascii_lowercase().then(|| LETTER_BASE + (initial - b'a') as usize)
}
