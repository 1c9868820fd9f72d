//! Comment Ranges
//!
//! The scanner records one `CommentRange` for every comment it removes, so
//! callers can report what was stripped without rescanning the source.

use serde::{Deserialize, Serialize};

/// The lexical flavour of a comment.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CommentKind {
    /// `// ...` up to (not including) the line terminator.
    Line,
    /// `/* ... */`
    Block,
    /// `/** ... */` (JavaDoc). Stripped exactly like `Block`.
    Doc,
}

/// A range representing a comment in the source text.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommentRange {
    /// Start position (byte offset of the opening `/`)
    pub pos: usize,
    /// End position (exclusive byte offset)
    pub end: usize,
    pub kind: CommentKind,
    /// False when end of input was reached inside a block comment.
    pub terminated: bool,
}

impl CommentRange {
    /// Create a new comment range.
    pub fn new(pos: usize, end: usize, kind: CommentKind, terminated: bool) -> Self {
        CommentRange {
            pos,
            end,
            kind,
            terminated,
        }
    }

    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.pos)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Get the comment text from source.
    pub fn get_text<'a>(&self, source: &'a str) -> &'a str {
        source.get(self.pos..self.end).unwrap_or("")
    }

    /// Check if this is a JavaDoc comment.
    pub fn is_doc(&self) -> bool {
        self.kind == CommentKind::Doc
    }
}
