//! Comment-stripping emitter for the jstrip Java comment stripper.
//!
//! This crate turns the scanner's classification stream into output text:
//! - `Emitter` - Append-only output buffer driven by `CharClass` decisions
//! - `EmitOptions` - Emission knobs (block comment line break preservation)
//! - `strip_comments` - The one-call entry point used by the CLI

pub mod emitter;
pub use emitter::{EmitOptions, Emitter};

pub mod strip;
pub use strip::{StripOutput, strip_comments, strip_comments_bytes, strip_comments_with};

pub use jstrip_common::{CommentKind, CommentRange, DecodeError, SourceEncoding};
pub use jstrip_scanner::LexState;

#[cfg(test)]
#[path = "tests/emitter_tests.rs"]
mod emitter_tests;
#[cfg(test)]
#[path = "tests/strip_tests.rs"]
mod strip_tests;
