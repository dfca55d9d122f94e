//! Character-level scanner for raw index entry records.
//!
//! One record is `\indexentry{KEY(!KEY)*(@TEXT)?(|[()]?CMD)?}{PAGE}` with
//! every delimiter configurable through [`InputStyle`]. Keys, display texts
//! and command names may contain quoted delimiter characters and nested
//! brace-delimited arguments of the typesetting system itself; the scanner
//! tracks quoting, escaping and nesting depth character by character.
//!
//! The automaton is an explicit state enum with one transition function per
//! state, so each state's behavior is testable in isolation. A malformed
//! record yields exactly one syntax error; the caller skips the rest of the
//! physical line and resumes.

use std::iter::Peekable;
use std::str::Chars;

use crate::entry::{EntryLevel, IndexEntry};
use crate::page::{scan_number, PageNumber, RangeMarker};
use crate::style::InputStyle;

/// Scanner-level outcome of one record scan.
///
/// The caller attaches the line number when reporting `Syntax`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ScanError {
    /// Malformed record; skip the rest of the line and resume
    #[error("index entry syntax error")]
    Syntax,
    /// Input exhausted
    #[error("end of input")]
    Eof,
}

/// Automaton states for the key/value/command scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    /// Before the opening delimiter
    Open,
    /// Inside a level's sort key
    Key,
    /// Inside a level's display text (after the actual separator)
    Value,
    /// Immediately after the encap separator, where a range marker may sit
    RangeMark,
    /// Inside the encapsulating command name
    Command,
}

/// Outcome of feeding one character to the automaton.
enum Step {
    Continue,
    Done,
}

/// Mutable scan state for one record's entry body.
struct EntryAutomaton {
    state: State,
    quoted: bool,
    escaped: bool,
    depth: usize,
    token: String,
    levels: Vec<EntryLevel>,
    marker: RangeMarker,
    encap: String,
}

impl EntryAutomaton {
    fn new() -> EntryAutomaton {
        EntryAutomaton {
            state: State::Open,
            quoted: false,
            escaped: false,
            depth: 0,
            token: String::new(),
            levels: Vec::new(),
            marker: RangeMarker::Normal,
            encap: String::new(),
        }
    }

    /// Finalize the current token as a level (key and text identical).
    fn finish_level(&mut self, compress: bool) {
        let text = if compress { self.token.trim().to_string() } else { self.token.clone() };
        self.levels.push(EntryLevel::plain(text));
        self.token.clear();
    }

    /// Replace the display text of the level just finished.
    fn finish_value(&mut self) {
        if let Some(level) = self.levels.last_mut() {
            level.text = self.token.clone();
        }
        self.token.clear();
    }

    fn step(&mut self, c: char, style: &InputStyle, compress: bool) -> Result<Step, ScanError> {
        match self.state {
            State::Open => {
                if !self.quoted && c == style.arg_open {
                    self.state = State::Key;
                    Ok(Step::Continue)
                } else {
                    Err(ScanError::Syntax)
                }
            }
            State::Key => {
                if self.quoted {
                    self.token.push(c);
                    self.quoted = false;
                    return Ok(Step::Continue);
                }
                if c == style.arg_open {
                    self.token.push(c);
                    self.depth += 1;
                } else if c == style.arg_close {
                    if self.depth == 0 {
                        self.finish_level(compress);
                        return Ok(Step::Done);
                    }
                    self.token.push(c);
                    self.depth -= 1;
                } else if c == style.actual {
                    self.finish_level(compress);
                    self.state = State::Value;
                } else if c == style.encap {
                    self.finish_level(compress);
                    self.state = State::RangeMark;
                } else if c == style.level {
                    self.finish_level(compress);
                } else if c == style.quote && !self.escaped {
                    self.quoted = true;
                } else {
                    self.token.push(c);
                }
                self.escaped = c == style.escape;
                Ok(Step::Continue)
            }
            State::Value => {
                if self.quoted {
                    self.token.push(c);
                    self.quoted = false;
                    return Ok(Step::Continue);
                }
                if c == style.actual {
                    return Err(ScanError::Syntax);
                }
                if c == style.arg_open {
                    self.token.push(c);
                    self.depth += 1;
                } else if c == style.arg_close {
                    if self.depth == 0 {
                        self.finish_value();
                        return Ok(Step::Done);
                    }
                    self.token.push(c);
                    self.depth -= 1;
                } else if c == style.encap {
                    self.finish_value();
                    self.state = State::RangeMark;
                } else if c == style.level {
                    self.finish_value();
                    self.state = State::Key;
                } else if c == style.quote && !self.escaped {
                    self.quoted = true;
                } else {
                    self.token.push(c);
                }
                self.escaped = c == style.escape;
                Ok(Step::Continue)
            }
            State::RangeMark => {
                if self.quoted {
                    self.token.push(c);
                    self.quoted = false;
                    return Ok(Step::Continue);
                }
                // The encap separator may not be followed directly by another
                // structural delimiter.
                if c == style.arg_open
                    || c == style.arg_close
                    || c == style.actual
                    || c == style.encap
                    || c == style.level
                {
                    return Err(ScanError::Syntax);
                }
                if c == style.range_open {
                    self.marker = RangeMarker::Open;
                } else if c == style.range_close {
                    self.marker = RangeMarker::Close;
                } else if c == style.quote {
                    self.quoted = true;
                } else {
                    self.token.push(c);
                }
                self.state = State::Command;
                self.escaped = c == style.escape;
                Ok(Step::Continue)
            }
            State::Command => {
                if self.quoted {
                    self.token.push(c);
                    self.quoted = false;
                    return Ok(Step::Continue);
                }
                if c == style.actual || c == style.encap || c == style.level {
                    return Err(ScanError::Syntax);
                }
                if c == style.arg_open {
                    self.token.push(c);
                    self.depth += 1;
                } else if c == style.arg_close {
                    if self.depth == 0 {
                        self.encap = std::mem::take(&mut self.token);
                        return Ok(Step::Done);
                    }
                    self.token.push(c);
                    self.depth -= 1;
                } else if c == style.quote && !self.escaped {
                    self.quoted = true;
                } else {
                    self.token.push(c);
                }
                self.escaped = c == style.escape;
                Ok(Step::Continue)
            }
        }
    }
}

/// Line-tracking character scanner over one input source.
pub struct Scanner<'a> {
    chars: Peekable<Chars<'a>>,
    line: usize,
}

impl<'a> Scanner<'a> {
    /// Scanner positioned at the start of `input`.
    pub fn new(input: &'a str) -> Scanner<'a> {
        Scanner { chars: input.chars().peekable(), line: 1 }
    }

    /// Current line number (1-based).
    pub fn line(&self) -> usize {
        self.line
    }

    fn next_char(&mut self) -> Option<char> {
        let c = self.chars.next()?;
        if c == '\n' {
            self.line += 1;
        }
        Some(c)
    }

    fn skip_spaces(&mut self) {
        while let Some(&c) = self.chars.peek() {
            if !c.is_whitespace() {
                break;
            }
            self.next_char();
        }
    }

    /// Skip to the start of the next line. Returns false at end of input.
    pub fn skip_line(&mut self) -> bool {
        loop {
            match self.next_char() {
                Some('\n') => return true,
                Some(_) => {}
                None => return false,
            }
        }
    }

    /// Scan one record into an [`IndexEntry`] carrying exactly one page.
    ///
    /// `compress` trims surrounding whitespace from level keys. On `Syntax`
    /// the stream is left mid-line; call [`Scanner::skip_line`] to recover.
    pub fn scan_entry(
        &mut self,
        style: &InputStyle,
        compress: bool,
    ) -> Result<IndexEntry, ScanError> {
        self.skip_spaces();

        // The fixed keyword must open every record.
        for expected in style.keyword.chars() {
            let c = self.next_char().ok_or(ScanError::Eof)?;
            if c != expected {
                return Err(ScanError::Syntax);
            }
        }

        // Entry body: levels, optional display text, optional encap command.
        let mut automaton = EntryAutomaton::new();
        loop {
            let c = self.next_char().ok_or(ScanError::Eof)?;
            match automaton.step(c, style, compress)? {
                Step::Continue => {}
                Step::Done => break,
            }
        }

        // Page body: a single token between arg_open and arg_close.
        self.skip_spaces();
        let c = self.next_char().ok_or(ScanError::Eof)?;
        if c != style.arg_open {
            return Err(ScanError::Syntax);
        }
        let mut token = String::new();
        let (format, value) = loop {
            let c = self.next_char().ok_or(ScanError::Eof)?;
            if c == style.arg_close {
                break scan_number(&token).ok_or(ScanError::Syntax)?;
            }
            if c == style.arg_open {
                return Err(ScanError::Syntax);
            }
            token.push(c);
        };

        let EntryAutomaton { levels, marker, encap, .. } = automaton;
        Ok(IndexEntry {
            levels,
            pages: vec![PageNumber { value, format, encap, marker }],
        })
    }
}
