// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical implementations of test helpers to avoid duplication.

#![doc(hidden)]

use crate::der::{encode_integer_to_vec, TAG_SEQUENCE};
use crate::utils::parse_hex;

/// Known `(input JSON, expected DER)` pairs for the whole pipeline.
///
/// The last entry is deliberately truncated JSON.
pub const PIPELINE_VECTORS: &[(&str, &str)] = &[
    ("[]", "30 00"),
    ("[0]", "30 03 02 01 00"),
    ("[1]", "30 03 02 01 01"),
    ("[-1]", "30 03 02 01 FF"),
    ("[127]", "30 03 02 01 7F"),
    ("[128]", "30 04 02 02 00 80"),
    ("[-128]", "30 03 02 01 80"),
    ("[1, 2", "30 00"),
];

/// Parse a hex literal used in a test, panicking on typos.
pub fn hex(text: &str) -> Vec<u8> {
    parse_hex(text).unwrap_or_else(|| panic!("bad hex literal in test: {:?}", text))
}

/// Split an encoded SEQUENCE into its header and content.
///
/// Panics if `der` is not a SEQUENCE with a well-formed length.
pub fn split_sequence(der: &[u8]) -> (&[u8], &[u8]) {
    assert_eq!(der.first(), Some(&TAG_SEQUENCE), "not a SEQUENCE");
    let header_len = match der[1] {
        b if b & 0x80 == 0 => 2,
        b => 2 + (b & 0x7F) as usize,
    };
    der.split_at(header_len)
}

/// Concatenated INTEGER TLVs for `values`, built one value at a time.
///
/// Independent of the SEQUENCE encoder, so it works as an oracle for it.
pub fn concat_integers(values: &[i64]) -> Vec<u8> {
    values.iter().flat_map(|&v| encode_integer_to_vec(v)).collect()
}

/// Smallest `n` such that `value` fits in `n` bytes of two's complement,
/// computed arithmetically rather than by stripping bytes.
pub fn twos_complement_width(value: i64) -> usize {
    (1..=8)
        .find(|&n| {
            if n == 8 {
                return true;
            }
            let bits = 8 * n as u32;
            let min = -(1i64 << (bits - 1));
            let max = (1i64 << (bits - 1)) - 1;
            (min..=max).contains(&value)
        })
        .unwrap_or(8)
}
