//! Scanner
//!
//! A single forward pass over Java source text that classifies every
//! character into exactly one lexical region. The scanner never backtracks:
//! multi-character delimiters (`//`, `/*`, `/**`, `*/`, `"""`) are decided
//! on their first character with at most three bytes of lookahead, and the
//! remaining characters of the delimiter are replayed from a short run.
//!
//! Malformed input is never an error. An unterminated literal or comment
//! simply leaves the scanner in that state at end of input, which
//! `ScanSummary::unterminated` reports.

use crate::char_codes::{ASTERISK, DOUBLE_QUOTE, FORM_FEED, SLASH};
use crate::lex_state::{CharClass, LexState};
use jstrip_common::{CommentKind, CommentRange, is_line_terminator};
use serde::Serialize;

/// One character together with its classification.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Classified {
    /// Byte offset of `ch` in the source.
    pub pos: usize,
    pub ch: char,
    /// The state active before this character was consumed.
    ///
    /// All characters of an opening delimiter report the state the delimiter
    /// was found in (`Code`); all characters of a closing delimiter report
    /// the state it closes.
    pub state: LexState,
    /// Whether this character was forced to literal content by a preceding backslash.
    pub pending_escape: bool,
    pub class: CharClass,
}

/// What the scanner knows once the whole input has been consumed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ScanSummary {
    pub final_state: LexState,
    pub comments: Vec<CommentRange>,
    /// Set when end of input was reached inside a literal or block comment.
    pub unterminated: Option<LexState>,
}

/// Remaining characters of a multi-character delimiter, decided up front.
#[derive(Clone, Copy, Debug)]
struct DelimiterRun {
    remaining: u8,
    state: LexState,
    class: CharClass,
}

pub struct Scanner<'a> {
    source: &'a str,
    pos: usize,
    state: LexState,
    pending_escape: bool,
    run: Option<DelimiterRun>,
    open_comment: Option<(usize, CommentKind)>,
    comments: Vec<CommentRange>,
}

impl<'a> Scanner<'a> {
    pub fn new(source: &'a str) -> Self {
        Scanner {
            source,
            pos: 0,
            state: LexState::Code,
            pending_escape: false,
            run: None,
            open_comment: None,
            comments: Vec::new(),
        }
    }

    /// Consume any remaining input and summarise the scan.
    pub fn finish(mut self) -> ScanSummary {
        for _ in &mut self {}
        let final_state = self.state;
        ScanSummary {
            final_state,
            comments: self.comments,
            unterminated: final_state.is_unterminated_at_eof().then_some(final_state),
        }
    }

    #[inline]
    fn peek_byte(&self, offset: usize) -> Option<u8> {
        self.source.as_bytes().get(self.pos + offset).copied()
    }

    #[inline]
    fn peek_is(&self, offset: usize, byte: u8) -> bool {
        self.peek_byte(offset) == Some(byte)
    }

    /// Whether the two bytes after a `"` complete a `"""` fence.
    #[inline]
    fn fence_follows(&self) -> bool {
        self.peek_is(0, DOUBLE_QUOTE) && self.peek_is(1, DOUBLE_QUOTE)
    }

    /// Whether a `"` in code opens a text block: two more quotes, then only
    /// spaces, tabs or form feeds up to a line terminator or end of input.
    ///
    /// Anything else after `"""` makes the first two quotes an empty string.
    fn opening_fence_follows(&self) -> bool {
        if !self.fence_follows() {
            return false;
        }
        self.source.as_bytes()[self.pos + 2..]
            .iter()
            .find(|b| !matches!(**b, b' ' | b'\t' | FORM_FEED))
            .is_none_or(|&b| b == b'\n' || b == b'\r')
    }

    fn start_run(&mut self, remaining: u8, state: LexState, class: CharClass) {
        self.run = Some(DelimiterRun {
            remaining,
            state,
            class,
        });
    }

    fn open_comment(&mut self, pos: usize, kind: CommentKind) {
        self.open_comment = Some((pos, kind));
    }

    fn close_comment(&mut self, end: usize, terminated: bool) {
        if let Some((pos, kind)) = self.open_comment.take() {
            self.comments.push(CommentRange::new(pos, end, kind, terminated));
        }
    }

    /// Apply the transition for `ch`, which starts at byte `pos`.
    ///
    /// `self.pos` already points past `ch`, so `peek_byte(0)` is the next byte.
    fn step(&mut self, pos: usize, ch: char) -> CharClass {
        match self.state {
            LexState::Code => self.step_code(pos, ch),
            LexState::LineComment => {
                if is_line_terminator(ch) {
                    self.close_comment(pos, true);
                    self.state = LexState::Code;
                    CharClass::CommentTerminator
                } else {
                    CharClass::CommentBody
                }
            }
            LexState::BlockComment { .. } => {
                if ch == '*' && self.peek_is(0, SLASH) {
                    self.start_run(1, self.state, CharClass::CommentDelimiter);
                    self.close_comment(self.pos + 1, true);
                    self.state = LexState::Code;
                    CharClass::CommentDelimiter
                } else if is_line_terminator(ch) {
                    CharClass::CommentLineBreak
                } else {
                    CharClass::CommentBody
                }
            }
            LexState::StringLiteral => self.step_quoted(ch, '"', CharClass::StringLiteral),
            LexState::CharLiteral => self.step_quoted(ch, '\'', CharClass::CharLiteral),
            LexState::TextBlock => {
                if self.pending_escape {
                    self.pending_escape = false;
                } else if ch == '\\' {
                    self.pending_escape = true;
                } else if ch == '"' && self.fence_follows() {
                    self.start_run(2, LexState::TextBlock, CharClass::TextBlock);
                    self.state = LexState::Code;
                }
                CharClass::TextBlock
            }
        }
    }

    fn step_code(&mut self, pos: usize, ch: char) -> CharClass {
        match ch {
            '/' if self.peek_is(0, SLASH) => {
                self.start_run(1, LexState::Code, CharClass::CommentDelimiter);
                self.open_comment(pos, CommentKind::Line);
                self.state = LexState::LineComment;
                CharClass::CommentDelimiter
            }
            '/' if self.peek_is(0, ASTERISK) => {
                // `/**/` is an empty block comment, not a doc comment missing its close.
                let is_doc = self.peek_is(1, ASTERISK) && !self.peek_is(2, SLASH);
                if is_doc {
                    self.start_run(2, LexState::Code, CharClass::CommentDelimiter);
                    self.open_comment(pos, CommentKind::Doc);
                } else {
                    self.start_run(1, LexState::Code, CharClass::CommentDelimiter);
                    self.open_comment(pos, CommentKind::Block);
                }
                self.state = LexState::BlockComment { is_doc };
                CharClass::CommentDelimiter
            }
            '"' if self.opening_fence_follows() => {
                self.start_run(2, LexState::Code, CharClass::TextBlock);
                self.state = LexState::TextBlock;
                CharClass::TextBlock
            }
            '"' => {
                self.state = LexState::StringLiteral;
                CharClass::StringLiteral
            }
            '\'' => {
                self.state = LexState::CharLiteral;
                CharClass::CharLiteral
            }
            _ => CharClass::Code,
        }
    }

    /// String and char literals: escapes, the closing quote, and nothing else.
    ///
    /// A line terminator before the closing quote is malformed Java; it is
    /// copied through and the literal stays open.
    fn step_quoted(&mut self, ch: char, quote: char, class: CharClass) -> CharClass {
        if self.pending_escape {
            self.pending_escape = false;
        } else if ch == '\\' {
            self.pending_escape = true;
        } else if ch == quote {
            self.state = LexState::Code;
        }
        class
    }
}

impl Iterator for Scanner<'_> {
    type Item = Classified;

    fn next(&mut self) -> Option<Classified> {
        let Some(ch) = self.source[self.pos..].chars().next() else {
            // End of input: a still-open comment ends here.
            let terminated = self.state == LexState::LineComment;
            self.close_comment(self.source.len(), terminated);
            return None;
        };
        let pos = self.pos;
        self.pos += ch.len_utf8();

        if let Some(run) = self.run.as_mut() {
            let item = Classified {
                pos,
                ch,
                state: run.state,
                pending_escape: false,
                class: run.class,
            };
            run.remaining -= 1;
            if run.remaining == 0 {
                self.run = None;
            }
            return Some(item);
        }

        let state = self.state;
        let pending_escape = self.pending_escape;
        let class = self.step(pos, ch);
        Some(Classified {
            pos,
            ch,
            state,
            pending_escape,
            class,
        })
    }
}
