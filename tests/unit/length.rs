//! Length octet encoding: short form, long form, and strictness.

use ints2der::der::{decode_length, encoded_length_len};
use ints2der::{encode_length, DerError, LengthMode};

fn encoded(len: usize) -> Vec<u8> {
    let mut buf = Vec::new();
    encode_length(len, &mut buf);
    buf
}

// ============================================================================
// ENCODING
// ============================================================================

#[test]
fn test_short_form_is_single_byte() {
    for len in 0..=127usize {
        assert_eq!(encoded(len), [len as u8]);
    }
}

#[test]
fn test_long_form_octet_counts() {
    assert_eq!(encoded(0x80), [0x81, 0x80]);
    assert_eq!(encoded(0xFF), [0x81, 0xFF]);
    assert_eq!(encoded(0x100), [0x82, 0x01, 0x00]);
    assert_eq!(encoded(0xFFFF), [0x82, 0xFF, 0xFF]);
    assert_eq!(encoded(0x1_0000), [0x83, 0x01, 0x00, 0x00]);
    assert_eq!(encoded(0x0100_0000), [0x84, 0x01, 0x00, 0x00, 0x00]);
}

#[test]
fn test_long_form_never_has_leading_zero() {
    for len in [128usize, 256, 65_535, 65_536, 1 << 20, 1 << 31] {
        let buf = encoded(len);
        assert_eq!(buf[0] & 0x80, 0x80);
        assert_ne!(buf[1], 0x00, "len {len} encoded as {buf:02X?}");
        assert_eq!(encoded_length_len(len), buf.len());
    }
}

#[test]
fn test_encode_appends() {
    let mut buf = vec![0x30];
    encode_length(200, &mut buf);
    assert_eq!(buf, [0x30, 0x81, 0xC8]);
}

// ============================================================================
// DECODING
// ============================================================================

#[test]
fn test_decode_strict_rejects_every_non_minimal_form() {
    let cases: &[&[u8]] = &[
        &[0x81, 0x00],
        &[0x81, 0x7F],
        &[0x82, 0x00, 0xFF],
        &[0x83, 0x00, 0x01, 0x00],
    ];
    for bytes in cases {
        assert_eq!(
            decode_length(bytes, 0, LengthMode::Strict),
            Err(DerError::NonMinimalLength { offset: 0 }),
            "{bytes:02X?}"
        );
    }
}

#[test]
fn test_decode_lenient_accepts_non_minimal_forms() {
    assert_eq!(decode_length(&[0x81, 0x00], 0, LengthMode::Lenient), Ok((0, 2)));
    assert_eq!(decode_length(&[0x82, 0x00, 0xFF], 0, LengthMode::Lenient), Ok((255, 3)));
}

#[test]
fn test_decode_indefinite_is_always_rejected() {
    let bytes = [0x30, 0x80, 0x02, 0x01, 0x00, 0x00, 0x00];
    assert_eq!(
        decode_length(&bytes, 1, LengthMode::Lenient),
        Err(DerError::IndefiniteLength { offset: 1 })
    );
}

#[test]
fn test_default_mode_is_strict() {
    assert_eq!(LengthMode::default(), LengthMode::Strict);
}
