//! Java lexical-context scanner for the jstrip comment stripper.
//!
//! This crate provides the classification phase:
//! - `LexState` - The lexical context active at a character
//! - `CharClass` - Which region a character belongs to, and whether it survives stripping
//! - `Scanner` - Single-pass state machine yielding one `Classified` per character

pub mod char_codes;

pub mod lex_state;
pub use lex_state::{CharClass, LexState};

pub mod scanner;
pub use scanner::{Classified, ScanSummary, Scanner};

#[cfg(test)]
#[path = "tests/lex_state_tests.rs"]
mod lex_state_tests;
#[cfg(test)]
#[path = "tests/scanner_tests.rs"]
mod scanner_tests;
