//! Documented byte vectors through the library pipeline.

use ints2der::encode_sequence;

use crate::common::{encode_json, hex, PIPELINE_VECTORS};

#[test]
fn test_documented_vectors() {
    for &(input, expected) in PIPELINE_VECTORS {
        assert_eq!(encode_json(input.as_bytes()), hex(expected), "input {:?}", input);
    }
}

#[test]
fn test_malformed_inputs_encode_empty_sequence() {
    let inputs: &[&[u8]] = &[
        b"",
        b"[",
        b"not json",
        b"{\"values\": [1]}",
        b"[1, \"two\"]",
        b"[0.5]",
        b"\xFF\xFE[1]",
    ];
    for input in inputs {
        assert_eq!(encode_json(input), hex("30 00"), "input {:?}", input);
    }
}

#[test]
fn test_library_and_pipeline_agree() {
    let values: Vec<i64> = (-300..300).step_by(7).collect();
    let text = serde_json::to_string(&values).unwrap();
    assert_eq!(encode_json(text.as_bytes()), encode_sequence(&values));
}

#[test]
fn test_long_form_through_pipeline() {
    let values: Vec<i64> = (0..60).map(|i| 200 + i).collect();
    let text = serde_json::to_string(&values).unwrap();
    let der = encode_json(text.as_bytes());
    // 60 × `02 02 00 xx` = 240 bytes
    assert_eq!(&der[..3], &[0x30, 0x81, 240]);
    assert_eq!(der.len(), 243);
}
