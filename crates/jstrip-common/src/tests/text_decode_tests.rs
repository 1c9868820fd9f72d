use crate::text_decode::{
    DecodeError, SourceEncoding, decode_source_text, encode_source_text,
};

#[test]
fn decodes_plain_utf8() {
    let decoded = decode_source_text(b"class A {}").unwrap();
    assert_eq!(decoded.text, "class A {}");
    assert_eq!(decoded.encoding, SourceEncoding::Utf8);
}

#[test]
fn decodes_utf8_bom() {
    let bytes = [0xEF, 0xBB, 0xBF, b'a', b'=', b'1'];
    let decoded = decode_source_text(&bytes).unwrap();
    assert_eq!(decoded.text, "a=1");
    assert_eq!(decoded.encoding, SourceEncoding::Utf8Bom);
}

#[test]
fn decodes_utf16le_bom_with_unicode() {
    // "µs" in UTF-16LE with BOM
    let bytes = [0xFF, 0xFE, 0xB5, 0x00, 0x73, 0x00];
    let decoded = decode_source_text(&bytes).unwrap();
    assert_eq!(decoded.text, "µs");
    assert_eq!(decoded.encoding, SourceEncoding::Utf16Le);
}

#[test]
fn decodes_utf16be_bom_with_unicode() {
    // "µs" in UTF-16BE with BOM
    let bytes = [0xFE, 0xFF, 0x00, 0xB5, 0x00, 0x73];
    let decoded = decode_source_text(&bytes).unwrap();
    assert_eq!(decoded.text, "µs");
    assert_eq!(decoded.encoding, SourceEncoding::Utf16Be);
}

#[test]
fn rejects_invalid_utf8() {
    let bytes = [b'a', b'b', 0xC3, 0x28];
    assert_eq!(
        decode_source_text(&bytes),
        Err(DecodeError::InvalidUtf8 { valid_up_to: 2 })
    );
}

#[test]
fn rejects_odd_utf16_length() {
    let bytes = [0xFF, 0xFE, 0x61, 0x00, 0x62];
    assert_eq!(
        decode_source_text(&bytes),
        Err(DecodeError::OddUtf16Length { len: 3 })
    );
}

#[test]
fn rejects_unpaired_surrogate() {
    let bytes = [0xFF, 0xFE, 0x00, 0xD8, 0x61, 0x00];
    assert_eq!(decode_source_text(&bytes), Err(DecodeError::InvalidUtf16));
}

#[test]
fn encodes_with_original_bom() {
    assert_eq!(
        encode_source_text("a", SourceEncoding::Utf8Bom),
        vec![0xEF, 0xBB, 0xBF, b'a']
    );
    assert_eq!(
        encode_source_text("µs", SourceEncoding::Utf16Le),
        vec![0xFF, 0xFE, 0xB5, 0x00, 0x73, 0x00]
    );
    assert_eq!(
        encode_source_text("µs", SourceEncoding::Utf16Be),
        vec![0xFE, 0xFF, 0x00, 0xB5, 0x00, 0x73]
    );
    assert_eq!(encode_source_text("a", SourceEncoding::Utf8), b"a".to_vec());
}
