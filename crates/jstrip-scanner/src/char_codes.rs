//! ASCII code units the scanner looks ahead for.
//!
//! Every delimiter the scanner recognises is ASCII, so lookahead works on
//! bytes: a byte below 0x80 is always a whole character in UTF-8.

pub const SLASH: u8 = b'/';
pub const ASTERISK: u8 = b'*';
pub const DOUBLE_QUOTE: u8 = b'"';
pub const FORM_FEED: u8 = 0x0C;
