//! SEQUENCE assembly: header, order, long-form lengths, decoding.

use ints2der::{decode_sequence, decode_sequence_with, encode_integer_to_vec, encode_sequence};
use ints2der::{walk_sequence, DerError, LengthMode, TAG_INTEGER, TAG_SEQUENCE};

use crate::common::{concat_integers, hex, split_sequence};

#[test]
fn test_empty_sequence_is_two_bytes() {
    assert_eq!(encode_sequence(&[]), hex("30 00"));
}

#[test]
fn test_content_is_children_in_order() {
    let a = 70_000;
    let b = -3;
    let der = encode_sequence(&[a, b]);
    let (_, content) = split_sequence(&der);

    let mut expected = encode_integer_to_vec(a);
    expected.extend(encode_integer_to_vec(b));
    assert_eq!(content, expected.as_slice());

    // Swapping the input swaps the content
    let swapped = encode_sequence(&[b, a]);
    assert_ne!(der, swapped);
    assert_eq!(split_sequence(&swapped).1, concat_integers(&[b, a]).as_slice());
}

#[test]
fn test_sixty_multibyte_integers_need_long_form() {
    // 55 four-byte TLVs (02 02 xx xx) and 5 five-byte TLVs (02 03 00 8x xx)
    let values: Vec<i64> = (0..60).map(|i| 128 + i * 600).collect();
    let der = encode_sequence(&values);
    let (header, content) = split_sequence(&der);

    assert!(content.len() > 127);
    assert!(content.len() <= 255);
    assert_eq!(header, [TAG_SEQUENCE, 0x81, content.len() as u8]);
    assert_eq!(decode_sequence(&der), Ok(values));
}

#[test]
fn test_large_sequence_uses_minimal_octet_count() {
    // 70 000 × `02 01 00` = 210 000 bytes = 0x03_3450 → three octets
    let values = vec![0i64; 70_000];
    let der = encode_sequence(&values);
    assert_eq!(&der[..5], &[TAG_SEQUENCE, 0x83, 0x03, 0x34, 0x50]);
    assert_eq!(der.len(), 5 + 210_000);
}

#[test]
fn test_walk_reports_every_child() {
    let der = encode_sequence(&[1, 256, -70_000]);
    let records = walk_sequence(&der, LengthMode::Strict).unwrap();

    assert_eq!(records.len(), 4);
    assert_eq!(records[0].tag, TAG_SEQUENCE);
    assert!(records[1..].iter().all(|t| t.tag == TAG_INTEGER));
    assert_eq!(records[0].end(), der.len());
    for pair in records[1..].windows(2) {
        assert_eq!(pair[0].end(), pair[1].offset, "children must be contiguous");
    }
}

#[test]
fn test_decode_rejects_truncated_sequence() {
    let der = encode_sequence(&[1, 2, 3]);
    let truncated = &der[..der.len() - 1];
    assert!(matches!(
        decode_sequence(truncated),
        Err(DerError::LengthOverrun { offset: 0, .. })
    ));
}

#[test]
fn test_decode_rejects_wrong_outer_tag() {
    assert_eq!(
        decode_sequence(&hex("31 00")),
        Err(DerError::UnexpectedTag {
            offset: 0,
            expected: TAG_SEQUENCE,
            found: 0x31
        })
    );
}

#[test]
fn test_decode_rejects_bad_child_content() {
    assert_eq!(
        decode_sequence(&hex("30 04 02 02 00 01")),
        Err(DerError::NonMinimalInteger { offset: 4 })
    );
}

#[test]
fn test_decode_lenient_nested_lengths() {
    let der = hex("30 82 00 04 02 81 01 2A");
    assert_eq!(decode_sequence(&der), Err(DerError::NonMinimalLength { offset: 1 }));
    assert_eq!(decode_sequence_with(&der, LengthMode::Lenient), Ok(vec![42]));
}

#[cfg(feature = "parallel")]
#[test]
fn test_parallel_encoder_matches() {
    use ints2der::encode_sequence_parallel;

    let values: Vec<i64> = (0..20_000).map(|i| (i - 10_000) * 104_729).collect();
    assert_eq!(encode_sequence_parallel(&values), encode_sequence(&values));
}
