use serde::Serialize;

/// The lexical context the scanner is in.
///
/// Exactly one state is active at every character. Literal states may also
/// carry a pending escape, which the scanner tracks separately.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum LexState {
    /// Ordinary program text. Initial and terminal state.
    #[default]
    Code,
    /// Inside `// ...`. The line terminator is not part of the comment.
    LineComment,
    /// Inside `/* ... */` or `/** ... */`.
    #[serde(rename_all = "camelCase")]
    BlockComment { is_doc: bool },
    /// Inside `"..."`.
    StringLiteral,
    /// Inside `'...'`.
    CharLiteral,
    /// Inside a `"""` ... `"""` text block.
    TextBlock,
}

impl LexState {
    /// Whether end of input inside this state leaves a construct unclosed.
    ///
    /// A line comment is closed by end of input as much as by a line
    /// terminator, so only `Code` and `LineComment` count as complete.
    pub fn is_unterminated_at_eof(self) -> bool {
        !matches!(self, LexState::Code | LexState::LineComment)
    }

    pub fn describe(self) -> &'static str {
        match self {
            LexState::Code => "code",
            LexState::LineComment => "line comment",
            LexState::BlockComment { is_doc: false } => "block comment",
            LexState::BlockComment { is_doc: true } => "doc comment",
            LexState::StringLiteral => "string literal",
            LexState::CharLiteral => "char literal",
            LexState::TextBlock => "text block",
        }
    }
}

/// The region a single character was classified into.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum CharClass {
    Code,
    /// Content of a `"..."` literal, quotes and escapes included.
    StringLiteral,
    /// Content of a `'...'` literal, quotes and escapes included.
    CharLiteral,
    /// Content of a text block, both fences included.
    TextBlock,
    /// `//`, `/*`, `/**` or `*/`.
    CommentDelimiter,
    CommentBody,
    /// A line terminator inside a block comment.
    CommentLineBreak,
    /// The line terminator that ends a line comment.
    CommentTerminator,
}

impl CharClass {
    /// Whether a character of this class survives stripping.
    ///
    /// Line breaks inside block comments are dropped unless
    /// `preserve_line_breaks` is set.
    pub fn is_emitted(self, preserve_line_breaks: bool) -> bool {
        match self {
            CharClass::Code
            | CharClass::StringLiteral
            | CharClass::CharLiteral
            | CharClass::TextBlock
            | CharClass::CommentTerminator => true,
            CharClass::CommentLineBreak => preserve_line_breaks,
            CharClass::CommentDelimiter | CharClass::CommentBody => false,
        }
    }
}
