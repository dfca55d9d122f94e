//! Pluggable collation: entry ordering, string classification and output
//! grouping.
//!
//! The three strategies (phonetic reading, stroke count, radical) share one
//! generic comparison routine and differ only in their character order,
//! letter test and CJK group assignment. Dispatch is a tagged variant rather
//! than a trait object; the strategies are data, not behavior families.

mod radical;
mod reading;
mod stroke;

use std::cmp::Ordering;

use crate::cjk;
use crate::entry::IndexEntry;
use crate::error::{Error, Result};
use crate::style::OutputStyle;

/// Group index of symbol-leading strings.
const SYMBOL_GROUP: usize = 0;
/// Group index of digit-leading strings.
const NUMBER_GROUP: usize = 1;
/// First Latin letter group; `a` is 2, `z` is 27.
const LETTER_BASE: usize = 2;
/// First strategy-specific group (stroke counts or radicals).
const STRATEGY_BASE: usize = 2 + 26;

/// Collation strategy selected at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collator {
    /// Order CJK characters by phonetic reading, grouped with Latin letters
    Reading,
    /// Order CJK characters by stroke count and stroke order
    Stroke,
    /// Order CJK characters by radical and residual stroke count
    Radical,
}

impl Collator {
    /// Resolve a strategy name. An unknown name is a fatal configuration
    /// error; nothing is processed.
    pub fn from_name(name: &str) -> Result<Collator> {
        match name {
            "reading" | "pinyin" => Ok(Collator::Reading),
            "stroke" | "bihua" => Ok(Collator::Stroke),
            "radical" | "bushou" => Ok(Collator::Radical),
            _ => Err(Error::UnknownSortMethod(name.to_string())),
        }
    }

    /// Total number of output groups for this strategy.
    pub fn group_count(self) -> usize {
        STRATEGY_BASE
            + match self {
                Collator::Reading => 0,
                Collator::Stroke => cjk::MAX_STROKE,
                Collator::Radical => cjk::MAX_RADICAL,
            }
    }

    /// Group headings, in group order.
    ///
    /// Symbol, number and letter headings follow `headings_flag`
    /// (positive: capitalized, negative: lowercase, zero: left empty and
    /// suppressed by the writer); stroke and radical headings are always
    /// built from their style affixes.
    pub fn group_names(self, style: &OutputStyle) -> Vec<String> {
        let mut names = vec![String::new(); self.group_count()];
        if style.headings_flag > 0 {
            names[SYMBOL_GROUP] = style.symhead_positive.clone();
            names[NUMBER_GROUP] = style.numhead_positive.clone();
            for (i, c) in ('A'..='Z').enumerate() {
                names[LETTER_BASE + i] = c.to_string();
            }
        } else if style.headings_flag < 0 {
            names[SYMBOL_GROUP] = style.symhead_negative.clone();
            names[NUMBER_GROUP] = style.numhead_negative.clone();
            for (i, c) in ('a'..='z').enumerate() {
                names[LETTER_BASE + i] = c.to_string();
            }
        }
        match self {
            Collator::Reading => {}
            Collator::Stroke => {
                for count in 1..=cjk::MAX_STROKE {
                    names[STRATEGY_BASE + count - 1] =
                        format!("{}{}{}", style.stroke_prefix, count, style.stroke_suffix);
                }
            }
            Collator::Radical => {
                for id in 1..=cjk::MAX_RADICAL {
                    names[STRATEGY_BASE + id - 1] = radical_heading(id, style);
                }
            }
        }
        names
    }

    /// Output group of an entry, decided by its top-level sort key.
    pub fn group_of(self, entry: &IndexEntry) -> usize {
        let key = entry.levels.first().map(|l| l.key.as_str()).unwrap_or("");
        match string_class(self, key) {
            StringClass::Empty | StringClass::Symbol => SYMBOL_GROUP,
            StringClass::NumberPrefixed | StringClass::Number => NUMBER_GROUP,
            StringClass::Letter => {
                // class Letter guarantees a first character
                let first = match key.chars().next() {
                    Some(c) => c,
                    None => return SYMBOL_GROUP,
                };
                let lower = first.to_ascii_lowercase();
                if lower.is_ascii_lowercase() {
                    return LETTER_BASE + (lower as usize - 'a' as usize);
                }
                let cjk_group = match self {
                    Collator::Reading => reading::cjk_group(first),
                    Collator::Stroke => stroke::cjk_group(first),
                    Collator::Radical => radical::cjk_group(first),
                };
                cjk_group.unwrap_or(SYMBOL_GROUP)
            }
        }
    }

    /// Strategy character order. Ties between distinct characters are left
    /// equal here; the string comparison breaks them by code point last.
    pub fn char_cmp(self, a: char, b: char) -> Ordering {
        match self {
            Collator::Reading => reading::char_cmp(a, b),
            Collator::Stroke => stroke::char_cmp(a, b),
            Collator::Radical => radical::char_cmp(a, b),
        }
    }

    /// Whether `c` belongs to the letter-or-CJK class under this strategy.
    pub fn is_letter(self, c: char) -> bool {
        let lower = c.to_ascii_lowercase();
        lower.is_ascii_lowercase()
            || match self {
                Collator::Reading => reading::is_cjk(c),
                Collator::Stroke => stroke::is_cjk(c),
                Collator::Radical => radical::is_cjk(c),
            }
    }

    /// Compare two entries level by level, each level key first, then
    /// display text. A strict prefix sorts before its extensions.
    pub fn entry_cmp(self, a: &IndexEntry, b: &IndexEntry) -> Ordering {
        for (la, lb) in a.levels.iter().zip(&b.levels) {
            let cmp = self.str_cmp(&la.key, &lb.key).then_with(|| self.str_cmp(&la.text, &lb.text));
            if cmp != Ordering::Equal {
                return cmp;
            }
        }
        a.levels.len().cmp(&b.levels.len())
    }

    /// Compare two strings: class first, then decimal value for pure number
    /// strings, then character by character with the strategy order, with
    /// plain code-point order as the final tiebreak.
    pub fn str_cmp(self, a: &str, b: &str) -> Ordering {
        let class_cmp = string_class(self, a).cmp(&string_class(self, b));
        if class_cmp != Ordering::Equal {
            return class_cmp;
        }
        let decimal = decimal_cmp(a, b);
        if decimal != Ordering::Equal {
            return decimal;
        }
        for (x, y) in a.chars().zip(b.chars()) {
            let cmp = self.char_cmp(x, y);
            if cmp != Ordering::Equal {
                return cmp;
            }
        }
        a.chars().count().cmp(&b.chars().count()).then_with(|| a.cmp(b))
    }
}

fn radical_heading(id: usize, style: &OutputStyle) -> String {
    let radical = &cjk::RADICALS[id];
    let glyph = match (radical.simplified, style.radical_simplified) {
        (Some(simplified), true) => format!(
            "{}{}{}{}",
            radical.origin,
            style.radical_simplified_prefix,
            simplified,
            style.radical_simplified_suffix
        ),
        _ => radical.origin.to_string(),
    };
    format!("{}{}{}", style.radical_prefix, glyph, style.radical_suffix)
}

/// String classes, in comparison order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum StringClass {
    Empty,
    Symbol,
    NumberPrefixed,
    Number,
    Letter,
}

fn string_class(collator: Collator, s: &str) -> StringClass {
    let first = match s.chars().next() {
        Some(c) => c,
        None => return StringClass::Empty,
    };
    if is_num_char(first) {
        if s.chars().all(is_num_char) {
            StringClass::Number
        } else {
            StringClass::NumberPrefixed
        }
    } else if collator.is_letter(first) {
        StringClass::Letter
    } else {
        StringClass::Symbol
    }
}

/// Numeric test; the ideograph 〇 counts as a character, not a digit.
fn is_num_char(c: char) -> bool {
    c.is_numeric() && c != '〇'
}

/// Compare two natural-number strings by value; anything else is equal here.
fn decimal_cmp(a: &str, b: &str) -> Ordering {
    match (a.parse::<u64>(), b.parse::<u64>()) {
        (Ok(x), Ok(y)) => x.cmp(&y),
        _ => Ordering::Equal,
    }
}

/// Case-insensitive code-point comparison, shared by the strategy fallbacks.
pub(crate) fn char_cmp_ignore_case(a: char, b: char) -> Ordering {
    a.to_lowercase().cmp(b.to_lowercase())
}
