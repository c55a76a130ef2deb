use crate::{PositionIndex, TranslateError};

#[test]
fn test_position_index_ascii_is_identity() {
    let src = "package main\n\nfunc main() {}\n";
    let index = PositionIndex::new(src.as_bytes()).unwrap();
    assert_eq!(index.char_count() as usize, src.len());
    for k in 0..=index.char_count() {
        assert_eq!(index.byte_offset(k), Ok(k));
    }
}

#[test]
fn test_position_index_multibyte() {
    // a=1 byte, €=3 bytes, b=1 byte
    let index = PositionIndex::new("a€b".as_bytes()).unwrap();
    assert_eq!(index.char_count(), 3);
    assert_eq!(index.byte_len(), 5);
    assert_eq!(index.byte_offset(0), Ok(0));
    assert_eq!(index.byte_offset(1), Ok(1));
    assert_eq!(index.byte_offset(2), Ok(4));
    assert_eq!(index.byte_offset(3), Ok(5));
}

#[test]
fn test_position_index_emoji() {
    let index = PositionIndex::new("😀a".as_bytes()).unwrap();
    assert_eq!(index.byte_offset(1), Ok(4));
    assert_eq!(index.byte_offset(2), Ok(5));
}

#[test]
fn test_position_index_end_maps_to_byte_len() {
    let src = "// héllo wörld — ünïcode 😀\nx := \"日本語\"\n";
    let index = PositionIndex::new(src.as_bytes()).unwrap();
    assert_eq!(index.char_count() as usize, src.chars().count());
    assert_eq!(index.byte_offset(index.char_count()), Ok(src.len() as u32));

    // Every ordinal lands on the byte where that char starts, never before the ordinal.
    for (k, (byte, _)) in src.char_indices().enumerate() {
        let k = k as u32;
        let got = index.byte_offset(k).unwrap();
        assert_eq!(got, byte as u32, "ordinal {k}");
        assert!(got >= k);
    }
}

#[test]
fn test_position_index_out_of_range() {
    let index = PositionIndex::new(b"abc").unwrap();
    assert_eq!(
        index.byte_offset(4),
        Err(TranslateError::OffsetOutOfRange {
            offset: 4,
            char_count: 3
        })
    );
}

#[test]
fn test_position_index_invalid_utf8_counts_bytes() {
    let index = PositionIndex::new(b"a\xffb").unwrap();
    assert_eq!(index.char_count(), 3);
    assert_eq!(index.byte_offset(2), Ok(2));

    // Truncated 3-byte sequence: each stray byte is its own codepoint.
    let index = PositionIndex::new(b"\xe2\x82a\xc3\xa9").unwrap();
    assert_eq!(index.char_count(), 4);
    assert_eq!(index.byte_offset(2), Ok(2));
    assert_eq!(index.byte_offset(3), Ok(3));
    assert_eq!(index.byte_offset(4), Ok(5));
}

#[test]
fn test_position_index_empty_file() {
    let index = PositionIndex::new(b"").unwrap();
    assert_eq!(index.char_count(), 0);
    assert_eq!(index.byte_offset(0), Ok(0));
    assert!(index.byte_offset(1).is_err());
}
