// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for the stdin-to-stdout pipeline.
//!
//! Every input, however mangled, must produce a decodable SEQUENCE.

#![no_main]

use libfuzzer_sys::fuzz_target;
use ints2der::{decode_sequence, integers_or_empty, run, PipelineOptions};

fuzz_target!(|data: &[u8]| {
    let mut out = Vec::new();
    run(data, &mut out, PipelineOptions::default()).expect("in-memory I/O cannot fail");

    let decoded = decode_sequence(&out).expect("pipeline output must be strict DER");
    assert_eq!(decoded, integers_or_empty(data));
});
