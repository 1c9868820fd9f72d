//! Line terminator helpers.
//!
//! Java recognises LF, CR and CRLF as line terminators (JLS 3.4).

/// The line terminator convention used by a source file.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LineEnding {
    #[default]
    LineFeed,
    CarriageReturnLineFeed,
    CarriageReturn,
}

impl LineEnding {
    /// Detect the convention from the first terminator in `text`.
    ///
    /// Returns `None` when the text contains no line terminator.
    pub fn detect(text: &str) -> Option<Self> {
        let bytes = text.as_bytes();
        let idx = bytes.iter().position(|&b| b == b'\n' || b == b'\r')?;
        Some(match bytes[idx] {
            b'\n' => LineEnding::LineFeed,
            _ if bytes.get(idx + 1) == Some(&b'\n') => LineEnding::CarriageReturnLineFeed,
            _ => LineEnding::CarriageReturn,
        })
    }
}

#[inline]
pub fn is_line_terminator(ch: char) -> bool {
    ch == '\n' || ch == '\r'
}

/// Count line terminators, treating CRLF as a single terminator.
pub fn count_line_terminators(text: &str) -> usize {
    let bytes = text.as_bytes();
    let mut count = 0;
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'\n' => count += 1,
            b'\r' => {
                count += 1;
                if bytes.get(i + 1) == Some(&b'\n') {
                    i += 1;
                }
            }
            _ => {}
        }
        i += 1;
    }
    count
}
