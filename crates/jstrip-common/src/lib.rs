//! Common types and utilities for the jstrip Java comment stripper.
//!
//! This crate provides foundational types used across all jstrip crates:
//! - Comment ranges and kinds (`CommentRange`, `CommentKind`)
//! - Line terminator helpers (`LineEnding`, `is_line_terminator`)
//! - Source text decoding and re-encoding (`decode_source_text`, `SourceEncoding`)

// Comment ranges recorded by the scanner
pub mod comments;
pub use comments::{CommentKind, CommentRange};

// Line terminators (LF, CR, CRLF)
pub mod text;
pub use text::{LineEnding, count_line_terminators, is_line_terminator};

// Decoding raw file bytes into source text
pub mod text_decode;
pub use text_decode::{
    DecodeError, DecodedText, SourceEncoding, decode_source_text, encode_source_text,
};

#[cfg(test)]
#[path = "tests/comments_tests.rs"]
mod comments_tests;
#[cfg(test)]
#[path = "tests/text_tests.rs"]
mod text_tests;
#[cfg(test)]
#[path = "tests/text_decode_tests.rs"]
mod text_decode_tests;
