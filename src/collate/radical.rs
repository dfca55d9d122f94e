//! Radical strategy: characters order by (radical id, residual strokes),
//! then code point, and group by radical.

use std::cmp::Ordering;

use super::{char_cmp_ignore_case, STRATEGY_BASE};
use crate::cjk;

pub(super) fn char_cmp(a: char, b: char) -> Ordering {
    match (cjk::radical_stroke(a), cjk::radical_stroke(b)) {
        (None, None) => char_cmp_ignore_case(a, b),
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (Some(ra), Some(rb)) => ra.cmp(&rb).then_with(|| a.cmp(&b)),
    }
}

pub(super) fn is_cjk(c: char) -> bool {
    cjk::radical_stroke(c).is_some()
}

/// Radical group: one per traditional radical, 1..=MAX_RADICAL.
pub(super) fn cjk_group(c: char) -> Option<usize> {
    cjk::radical_stroke(c).map(|(radical, _)| STRATEGY_BASE + radical as usize - 1)
}
