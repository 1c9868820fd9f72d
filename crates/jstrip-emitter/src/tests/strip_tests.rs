use crate::emitter::EmitOptions;
use crate::strip::{strip_comments, strip_comments_bytes, strip_comments_with};
use jstrip_common::{CommentKind, DecodeError, SourceEncoding};
use jstrip_scanner::LexState;

#[test]
fn test_fast_path_without_slash() {
    let source = "class A { int x = 1; }\n";
    let output = strip_comments_with(source, &EmitOptions::default());
    assert_eq!(output.text, source);
    assert!(output.comments.is_empty());
    assert_eq!(output.unterminated, None);
}

#[test]
fn test_fast_path_still_reports_unterminated_literal() {
    let output = strip_comments_with("String s = \"abc", &EmitOptions::default());
    assert_eq!(output.text, "String s = \"abc");
    assert_eq!(output.unterminated, Some(LexState::StringLiteral));
}

#[test]
fn test_strip_reports_comments() {
    let source = "/** doc */\nclass A { // tail\n}\n";
    let output = strip_comments_with(source, &EmitOptions::default());
    assert_eq!(output.text, "\nclass A { \n}\n");
    let kinds: Vec<CommentKind> = output.comments.iter().map(|c| c.kind).collect();
    assert_eq!(kinds, vec![CommentKind::Doc, CommentKind::Line]);
}

#[test]
fn test_unterminated_block_comment_drops_rest() {
    let output = strip_comments_with("int a; /* never closed\nint b;", &EmitOptions::default());
    assert_eq!(output.text, "int a; ");
    assert_eq!(
        output.unterminated,
        Some(LexState::BlockComment { is_doc: false })
    );
}

#[test]
fn test_bytes_entry_point_decodes_first() {
    let mut bytes = vec![0xFF, 0xFE];
    for unit in "a // b".encode_utf16() {
        bytes.extend_from_slice(&unit.to_le_bytes());
    }
    let output = strip_comments_bytes(&bytes, &EmitOptions::default()).unwrap();
    assert_eq!(output.text, "a ");
    assert_eq!(output.encoding, SourceEncoding::Utf16Le);
}

#[test]
fn test_bytes_entry_point_rejects_invalid_text() {
    let err = strip_comments_bytes(&[0x61, 0xFF, 0x2F], &EmitOptions::default()).unwrap_err();
    assert_eq!(err, DecodeError::InvalidUtf8 { valid_up_to: 1 });
}

#[test]
fn test_strip_comments_default_options() {
    assert_eq!(strip_comments("a/*x*/b//y"), "ab");
}
