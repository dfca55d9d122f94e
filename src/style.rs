//! Input and output style configuration.
//!
//! The input style names the delimiter characters of the record grammar; the
//! output style is the template set a style loader fills in. Both are plain
//! serde objects so an external loader can deserialize them from any format;
//! this crate consumes them by reference and never mutates them.

use serde::{Deserialize, Serialize};

/// Delimiter set of the record grammar.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct InputStyle {
    /// Fixed keyword opening every record
    pub keyword: String,
    /// Opens the entry body and the page body
    pub arg_open: char,
    /// Closes the entry body and the page body
    pub arg_close: char,
    /// Separates a level's sort key from its display text
    pub actual: char,
    /// Introduces the encapsulating command suffix
    pub encap: char,
    /// Escape character; a quote right after it stays literal
    pub escape: char,
    /// Separates hierarchy levels
    pub level: char,
    /// Quotes the next delimiter character into plain text
    pub quote: char,
    /// Separator of composite page numbers (reserved; composite pages are
    /// scanned as plain tokens)
    pub page_compositor: String,
    /// Marks a page as opening a range
    pub range_open: char,
    /// Marks a page as closing a range
    pub range_close: char,
}

impl Default for InputStyle {
    fn default() -> InputStyle {
        InputStyle {
            keyword: "\\indexentry".to_string(),
            arg_open: '{',
            arg_close: '}',
            actual: '@',
            encap: '|',
            escape: '\\',
            level: '!',
            quote: '"',
            page_compositor: "-".to_string(),
            range_open: '(',
            range_close: ')',
        }
    }
}

/// Output templates filled in by an external style loader.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputStyle {
    /// Written once before all groups
    pub preamble: String,
    /// Written once after all groups
    pub postamble: String,
    /// Written between two non-empty groups
    pub group_skip: String,
    /// Positive: capitalized group headings; negative: lowercase; zero: none
    pub headings_flag: i32,
    /// Written before each group heading
    pub heading_prefix: String,
    /// Written after each group heading
    pub heading_suffix: String,
    /// Symbol group heading (capitalized variant)
    pub symhead_positive: String,
    /// Symbol group heading (lowercase variant)
    pub symhead_negative: String,
    /// Number group heading (capitalized variant)
    pub numhead_positive: String,
    /// Number group heading (lowercase variant)
    pub numhead_negative: String,
    /// Template opening a depth-0 item
    pub item_0: String,
    /// Template opening a depth-1 item after a depth-1 sibling
    pub item_1: String,
    /// Template opening a depth-2 item after a depth-2 sibling
    pub item_2: String,
    /// Template opening a depth-1 item right after its page-bearing parent
    pub item_01: String,
    /// Template opening a depth-1 item right after its pageless parent
    pub item_x1: String,
    /// Template opening a depth-2 item right after its page-bearing parent
    pub item_12: String,
    /// Template opening a depth-2 item right after its pageless parent
    pub item_x2: String,
    /// Between a depth-0 item and its first page
    pub delim_0: String,
    /// Between a depth-1 item and its first page
    pub delim_1: String,
    /// Between a depth-2 item and its first page
    pub delim_2: String,
    /// Between two page ranges
    pub delim_n: String,
    /// Between the endpoints of a range
    pub delim_r: String,
    /// After the last page of an item
    pub delim_t: String,
    /// Before an encapsulating command name
    pub encap_prefix: String,
    /// Between the command name and the page text
    pub encap_infix: String,
    /// After the encapsulated page text
    pub encap_suffix: String,
    /// Replaces `delim_r` + end page for a two-page range, when non-empty
    pub suffix_2p: String,
    /// Replaces `delim_r` + end page for a three-page range, when non-empty
    pub suffix_3p: String,
    /// Replaces `delim_r` + end page for any longer range, when non-empty
    pub suffix_mp: String,
    /// Page sort precedence, one letter per numeral format (`r n a R A`)
    pub page_precedence: String,
    /// Before the stroke count in a stroke group heading
    pub stroke_prefix: String,
    /// After the stroke count in a stroke group heading
    pub stroke_suffix: String,
    /// Before the radical glyph in a radical group heading
    pub radical_prefix: String,
    /// After the radical glyph in a radical group heading
    pub radical_suffix: String,
    /// Annotate radical headings with the simplified form when one exists
    pub radical_simplified: bool,
    /// Before the simplified-form annotation
    pub radical_simplified_prefix: String,
    /// After the simplified-form annotation
    pub radical_simplified_suffix: String,
}

impl Default for OutputStyle {
    fn default() -> OutputStyle {
        OutputStyle {
            preamble: "\\begin{theindex}\n".to_string(),
            postamble: "\n\n\\end{theindex}\n".to_string(),
            group_skip: "\n\n  \\indexspace\n".to_string(),
            headings_flag: 0,
            heading_prefix: String::new(),
            heading_suffix: String::new(),
            symhead_positive: "Symbols".to_string(),
            symhead_negative: "symbols".to_string(),
            numhead_positive: "Numbers".to_string(),
            numhead_negative: "numbers".to_string(),
            item_0: "\n  \\item ".to_string(),
            item_1: "\n    \\subitem ".to_string(),
            item_2: "\n      \\subsubitem ".to_string(),
            item_01: "\n    \\subitem ".to_string(),
            item_x1: "\n    \\subitem ".to_string(),
            item_12: "\n      \\subsubitem ".to_string(),
            item_x2: "\n      \\subsubitem ".to_string(),
            delim_0: ", ".to_string(),
            delim_1: ", ".to_string(),
            delim_2: ", ".to_string(),
            delim_n: ", ".to_string(),
            delim_r: "--".to_string(),
            delim_t: String::new(),
            encap_prefix: "\\".to_string(),
            encap_infix: "{".to_string(),
            encap_suffix: "}".to_string(),
            suffix_2p: String::new(),
            suffix_3p: String::new(),
            suffix_mp: String::new(),
            page_precedence: "rnaRA".to_string(),
            stroke_prefix: String::new(),
            stroke_suffix: " \u{5212}".to_string(),
            radical_prefix: String::new(),
            radical_suffix: String::new(),
            radical_simplified: true,
            radical_simplified_prefix: "(".to_string(),
            radical_simplified_suffix: ")".to_string(),
        }
    }
}

/// A complete style sheet: input delimiters plus output templates.
///
/// This is the unit an external style loader produces; the driver binary
/// deserializes one from JSON.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleSheet {
    /// Record grammar delimiters
    pub input: InputStyle,
    /// Output templates
    pub output: OutputStyle,
}
