// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for the INTEGER codec.
//!
//! Two directions. Arbitrary i64 values must round-trip through
//! encode/decode. Arbitrary bytes must never panic the decoder, and anything
//! it accepts must already be the canonical encoding of what it decoded.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use ints2der::{decode_integer, encode_integer_to_vec};

#[derive(Debug, Arbitrary)]
struct Input {
    value: i64,
    bytes: Vec<u8>,
}

fuzz_target!(|input: Input| {
    // Property 1: roundtrip for every i64
    let encoded = encode_integer_to_vec(input.value);
    let (decoded, consumed) =
        decode_integer(&encoded, 0).expect("encoder output must always decode");
    assert_eq!(decoded, input.value, "roundtrip changed the value");
    assert_eq!(consumed, encoded.len(), "decoder must consume the whole TLV");

    // Property 2: decode never panics; accepted input is canonical
    if let Ok((value, consumed)) = decode_integer(&input.bytes, 0) {
        assert!(consumed <= input.bytes.len());
        assert_eq!(
            encode_integer_to_vec(value),
            &input.bytes[..consumed],
            "strict decoder accepted a non-canonical INTEGER"
        );
    }
});
