//! Decoding Java source files from raw bytes.
//!
//! Java sources show up as UTF-8, UTF-8 with BOM, and UTF-16 (with BOM).
//! The detected encoding is kept alongside the text so the stripped output
//! can be written back in the same encoding.

use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum SourceEncoding {
    Utf8,
    Utf8Bom,
    Utf16Le,
    Utf16Be,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("invalid UTF-8 at byte {valid_up_to}")]
    InvalidUtf8 { valid_up_to: usize },
    #[error("invalid UTF-16 byte length {len}")]
    OddUtf16Length { len: usize },
    #[error("invalid UTF-16 (unpaired surrogate)")]
    InvalidUtf16,
}

/// Source text together with the encoding it was read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedText {
    pub text: String,
    pub encoding: SourceEncoding,
}

/// Decode source text from raw bytes, supporting common BOM-based encodings.
pub fn decode_source_text(bytes: &[u8]) -> Result<DecodedText, DecodeError> {
    // UTF-8 BOM
    if let Some(rest) = bytes.strip_prefix(&[0xEF, 0xBB, 0xBF]) {
        return decode_utf8(rest).map(|text| DecodedText {
            text,
            encoding: SourceEncoding::Utf8Bom,
        });
    }

    // UTF-16 LE BOM
    if let Some(rest) = bytes.strip_prefix(&[0xFF, 0xFE]) {
        return decode_utf16_with_endianness(rest, true).map(|text| DecodedText {
            text,
            encoding: SourceEncoding::Utf16Le,
        });
    }

    // UTF-16 BE BOM
    if let Some(rest) = bytes.strip_prefix(&[0xFE, 0xFF]) {
        return decode_utf16_with_endianness(rest, false).map(|text| DecodedText {
            text,
            encoding: SourceEncoding::Utf16Be,
        });
    }

    decode_utf8(bytes).map(|text| DecodedText {
        text,
        encoding: SourceEncoding::Utf8,
    })
}

/// Encode `text` back into `encoding`, including its BOM.
pub fn encode_source_text(text: &str, encoding: SourceEncoding) -> Vec<u8> {
    match encoding {
        SourceEncoding::Utf8 => text.as_bytes().to_vec(),
        SourceEncoding::Utf8Bom => {
            let mut out = Vec::with_capacity(text.len() + 3);
            out.extend_from_slice(&[0xEF, 0xBB, 0xBF]);
            out.extend_from_slice(text.as_bytes());
            out
        }
        SourceEncoding::Utf16Le => {
            let mut out = vec![0xFF, 0xFE];
            for unit in text.encode_utf16() {
                out.extend_from_slice(&unit.to_le_bytes());
            }
            out
        }
        SourceEncoding::Utf16Be => {
            let mut out = vec![0xFE, 0xFF];
            for unit in text.encode_utf16() {
                out.extend_from_slice(&unit.to_be_bytes());
            }
            out
        }
    }
}

fn decode_utf8(bytes: &[u8]) -> Result<String, DecodeError> {
    std::str::from_utf8(bytes)
        .map(|s| s.to_string())
        .map_err(|err| DecodeError::InvalidUtf8 {
            valid_up_to: err.valid_up_to(),
        })
}

fn decode_utf16_with_endianness(bytes: &[u8], little_endian: bool) -> Result<String, DecodeError> {
    if bytes.len() % 2 != 0 {
        return Err(DecodeError::OddUtf16Length { len: bytes.len() });
    }

    let words = bytes.chunks_exact(2).map(|chunk| {
        if little_endian {
            u16::from_le_bytes([chunk[0], chunk[1]])
        } else {
            u16::from_be_bytes([chunk[0], chunk[1]])
        }
    });

    std::char::decode_utf16(words)
        .collect::<Result<String, _>>()
        .map_err(|_| DecodeError::InvalidUtf16)
}
