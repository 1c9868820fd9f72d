use crate::emitter::{EmitOptions, Emitter};
use jstrip_common::{CommentRange, DecodeError, SourceEncoding, decode_source_text};
use jstrip_scanner::{LexState, Scanner};
use serde::Serialize;
use tracing::{Level, debug, trace};

/// The result of stripping one source text.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct StripOutput {
    pub text: String,
    /// Every comment that was removed, in source order.
    pub comments: Vec<CommentRange>,
    /// The state the scan ended in, when input ended inside a literal or block comment.
    pub unterminated: Option<LexState>,
    /// Encoding the input bytes were decoded from (UTF-8 for text inputs).
    pub encoding: SourceEncoding,
}

/// Remove every comment from `source`, keeping all other characters.
///
/// Never fails: malformed Java passes through as far as it can be scanned.
pub fn strip_comments(source: &str) -> String {
    strip_comments_with(source, &EmitOptions::default()).text
}

pub fn strip_comments_with(source: &str, options: &EmitOptions) -> StripOutput {
    // Every comment starts with '/', so text without one is returned as is.
    if memchr::memchr(b'/', source.as_bytes()).is_none() {
        return StripOutput {
            text: source.to_string(),
            comments: Vec::new(),
            unterminated: unterminated_without_comments(source),
            encoding: SourceEncoding::Utf8,
        };
    }

    let mut scanner = Scanner::new(source);
    let mut emitter = Emitter::with_capacity(*options, source.len());
    emitter.emit_all(&mut scanner);
    let dropped = emitter.dropped_chars();
    let summary = scanner.finish();

    if let Some(state) = summary.unterminated {
        debug!(?state, "input ended inside an unterminated construct");
    }
    if tracing::enabled!(Level::TRACE) {
        for comment in &summary.comments {
            trace!(
                kind = ?comment.kind,
                pos = comment.pos,
                text = comment.get_text(source),
                "removed comment"
            );
        }
    }
    debug!(
        comments = summary.comments.len(),
        doc_comments = summary.comments.iter().filter(|c| c.is_doc()).count(),
        comment_bytes = summary.comments.iter().map(CommentRange::len).sum::<usize>(),
        dropped_chars = dropped,
        "stripped comments"
    );

    StripOutput {
        text: emitter.finish(),
        comments: summary.comments,
        unterminated: summary.unterminated,
        encoding: SourceEncoding::Utf8,
    }
}

/// Decode `bytes` and strip the resulting text.
///
/// This is the only fallible entry point: it fails when the bytes are not
/// valid text, and then produces no output at all.
pub fn strip_comments_bytes(
    bytes: &[u8],
    options: &EmitOptions,
) -> Result<StripOutput, DecodeError> {
    let decoded = decode_source_text(bytes)?;
    let mut output = strip_comments_with(&decoded.text, options);
    output.encoding = decoded.encoding;
    Ok(output)
}

/// Literals can still be left open in text that has no comments.
fn unterminated_without_comments(source: &str) -> Option<LexState> {
    if memchr::memchr2(b'"', b'\'', source.as_bytes()).is_none() {
        return None;
    }
    Scanner::new(source).finish().unterminated
}
