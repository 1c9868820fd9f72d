use crate::comments::{CommentKind, CommentRange};

#[test]
fn get_text_returns_comment_slice() {
    let source = "int x; // note\n";
    let range = CommentRange::new(7, 14, CommentKind::Line, true);
    assert_eq!(range.get_text(source), "// note");
    assert_eq!(range.len(), 7);
    assert!(!range.is_doc());
}

#[test]
fn get_text_out_of_bounds_is_empty() {
    let range = CommentRange::new(4, 40, CommentKind::Block, false);
    assert_eq!(range.get_text("abc"), "");
}

#[test]
fn comment_range_serializes_camel_case_kind() {
    let range = CommentRange::new(0, 5, CommentKind::Doc, true);
    let json = serde_json::to_string(&range).unwrap();
    assert_eq!(
        json,
        r#"{"pos":0,"end":5,"kind":"doc","terminated":true}"#
    );
}
