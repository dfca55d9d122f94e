//! Stroke strategy: characters order by stroke count, then stroke sequence,
//! then code point, and group by stroke count.

use std::cmp::Ordering;

use super::{char_cmp_ignore_case, STRATEGY_BASE};
use crate::cjk;

pub(super) fn char_cmp(a: char, b: char) -> Ordering {
    match (cjk::strokes(a), cjk::strokes(b)) {
        (None, None) => char_cmp_ignore_case(a, b),
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (Some(sa), Some(sb)) => sa
            .len()
            .cmp(&sb.len())
            .then_with(|| sa.cmp(sb))
            .then_with(|| a.cmp(&b)),
    }
}

pub(super) fn is_cjk(c: char) -> bool {
    cjk::strokes(c).is_some()
}

/// Stroke-count group: one per count, 1..=MAX_STROKE.
pub(super) fn cjk_group(c: char) -> Option<usize> {
    cjk::stroke_count(c).map(|count| STRATEGY_BASE + count - 1)
}
