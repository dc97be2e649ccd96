// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! SEQUENCE OF INTEGER: wrap the concatenated INTEGER TLVs.
//!
//! The content length is known before a single byte is written (every
//! INTEGER's size is a pure function of its value), so the output buffer is
//! allocated once at its exact final size and filled front to back.
//!
//! The parallel encoder splits the input into fixed-size runs, encodes each
//! run on the rayon pool, and then concatenates the runs in input order.
//! Output is byte-identical to the sequential path.

#[cfg(feature = "parallel")]
use rayon::prelude::*;
use tracing::debug;

use super::integer::{encode_integer, integer_from_content, integer_tlv_len};
use super::length::{encode_length, encoded_length_len, LengthMode};
use super::tlv::walk_sequence;
use super::TAG_SEQUENCE;
use crate::contracts::check_tlv_consistent;
use crate::error::DerError;

/// Values per rayon task. Small runs cost more in scheduling than they save.
#[cfg(feature = "parallel")]
const PARALLEL_CHUNK: usize = 4096;

fn sequence_header(content_len: usize) -> Vec<u8> {
    let mut buf = Vec::with_capacity(1 + encoded_length_len(content_len) + content_len);
    buf.push(TAG_SEQUENCE);
    encode_length(content_len, &mut buf);
    buf
}

/// DER-encode `values` as a `SEQUENCE OF INTEGER`.
///
/// An empty slice encodes as `30 00`.
pub fn encode_sequence(values: &[i64]) -> Vec<u8> {
    let content_len: usize = values.iter().map(|&v| integer_tlv_len(v)).sum();
    let mut buf = sequence_header(content_len);

    for &value in values {
        encode_integer(value, &mut buf);
    }

    check_tlv_consistent(&buf);
    debug!(count = values.len(), bytes = buf.len(), "encoded sequence");
    buf
}

/// Same output as [`encode_sequence`], with the children encoded on the
/// rayon pool.
#[cfg(feature = "parallel")]
pub fn encode_sequence_parallel(values: &[i64]) -> Vec<u8> {
    // par_chunks + collect keeps chunk order
    let runs: Vec<Vec<u8>> = values
        .par_chunks(PARALLEL_CHUNK)
        .map(|chunk| {
            let len: usize = chunk.iter().map(|&v| integer_tlv_len(v)).sum();
            let mut run = Vec::with_capacity(len);
            for &value in chunk {
                encode_integer(value, &mut run);
            }
            run
        })
        .collect();

    let content_len: usize = runs.iter().map(Vec::len).sum();
    let mut buf = sequence_header(content_len);
    for run in &runs {
        buf.extend_from_slice(run);
    }

    check_tlv_consistent(&buf);
    debug!(
        count = values.len(),
        runs = runs.len(),
        bytes = buf.len(),
        "encoded sequence in parallel"
    );
    buf
}

/// Decode a strict-DER `SEQUENCE OF INTEGER`.
pub fn decode_sequence(bytes: &[u8]) -> Result<Vec<i64>, DerError> {
    decode_sequence_with(bytes, LengthMode::Strict)
}

/// Decode a `SEQUENCE OF INTEGER` with the given length mode.
///
/// The whole buffer must be exactly one SEQUENCE.
pub fn decode_sequence_with(bytes: &[u8], mode: LengthMode) -> Result<Vec<i64>, DerError> {
    let records = walk_sequence(bytes, mode)?;

    records[1..]
        .iter()
        .map(|child| integer_from_content(&bytes[child.content_range()], child.content_start()))
        .collect()
}
