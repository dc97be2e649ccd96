// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for SEQUENCE decoding.
//!
//! The decoder is what `inspect` runs on untrusted files. Garbage must come
//! back as `Err`, never a panic or an out-of-bounds slice.

#![no_main]

use libfuzzer_sys::fuzz_target;
use ints2der::{decode_sequence, decode_sequence_with, encode_sequence, walk_sequence, LengthMode};

fuzz_target!(|data: &[u8]| {
    // Property 1: strict acceptance implies canonical bytes
    if let Ok(values) = decode_sequence(data) {
        assert_eq!(encode_sequence(&values), data, "non-canonical SEQUENCE accepted");
    }

    // Property 2: lenient decoding never panics and errors stay in bounds
    match decode_sequence_with(data, LengthMode::Lenient) {
        Ok(values) => {
            let records = walk_sequence(data, LengthMode::Lenient)
                .expect("walk must succeed when decode succeeded");
            assert_eq!(records.len(), values.len() + 1);
            assert_eq!(records[0].end(), data.len());
        }
        Err(e) => assert!(e.offset() <= data.len(), "error offset out of bounds: {}", e),
    }
});
