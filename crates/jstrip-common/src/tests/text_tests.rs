use crate::text::{LineEnding, count_line_terminators, is_line_terminator};

#[test]
fn detects_line_endings() {
    assert_eq!(LineEnding::detect("a\nb"), Some(LineEnding::LineFeed));
    assert_eq!(
        LineEnding::detect("a\r\nb"),
        Some(LineEnding::CarriageReturnLineFeed)
    );
    assert_eq!(LineEnding::detect("a\rb"), Some(LineEnding::CarriageReturn));
    assert_eq!(LineEnding::detect("no terminator"), None);
}

#[test]
fn counts_crlf_once() {
    assert_eq!(count_line_terminators(""), 0);
    assert_eq!(count_line_terminators("a\nb\n"), 2);
    assert_eq!(count_line_terminators("a\r\nb\r\n"), 2);
    assert_eq!(count_line_terminators("a\r\rb"), 2);
    assert_eq!(count_line_terminators("\n\r\n\r"), 3);
}

#[test]
fn only_cr_and_lf_terminate_lines() {
    assert!(is_line_terminator('\n'));
    assert!(is_line_terminator('\r'));
    assert!(!is_line_terminator('\u{2028}'));
    assert!(!is_line_terminator(' '));
}
