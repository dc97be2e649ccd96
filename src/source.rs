// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Byte source and sink plumbing around the encoder.
//!
//! The encoder itself never touches I/O. This module drains a reader into
//! one buffer, turns that buffer into integers, and writes the DER result
//! out. Malformed input is not an error at this level: any failure to parse
//! becomes an empty list, which encodes as an empty SEQUENCE (`30 00`).
//!
//! # Integer domain
//!
//! Input numbers follow JSON's double-precision semantics. Only integral
//! values inside ±(2^53 − 1) are accepted; `1e3` and `2.0` are fine, `1.5`
//! and `9007199254740992` are not. One bad element rejects the whole input.

use std::io::{self, ErrorKind, Read, Write};

use serde_json::Value;
use tracing::{debug, trace};

use crate::der::encode_sequence;
#[cfg(feature = "parallel")]
use crate::der::encode_sequence_parallel;
use crate::error::InputError;

/// Largest integer a double represents exactly, and its negation the smallest.
pub const MAX_SAFE_INTEGER: i64 = (1 << 53) - 1;

/// Read size used when draining a source.
pub const CHUNK_SIZE: usize = 1024;

/// Pipeline knobs. The default is the plain sequential encoder.
#[derive(Debug, Clone, Copy, Default)]
pub struct PipelineOptions {
    /// Encode children on the rayon pool (ignored without the `parallel` feature)
    pub parallel: bool,
}

// ============================================================================
// SOURCE
// ============================================================================

/// Read `reader` until it reports end of input, returning every byte.
///
/// Reads happen in `CHUNK_SIZE` pieces. Interrupted reads are retried.
pub fn drain<R: Read>(mut reader: R) -> io::Result<Vec<u8>> {
    let mut out = Vec::new();
    let mut chunk = [0u8; CHUNK_SIZE];

    loop {
        match reader.read(&mut chunk) {
            Ok(0) => break,
            Ok(n) => {
                trace!(bytes = n, "read chunk");
                out.extend_from_slice(&chunk[..n]);
            }
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }

    debug!(bytes = out.len(), "drained input");
    Ok(out)
}

// ============================================================================
// JSON → INTEGERS
// ============================================================================

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

fn safe_integer(value: &Value, index: usize) -> Result<i64, InputError> {
    let Value::Number(number) = value else {
        return Err(InputError::NotAnInteger { index });
    };

    let exact = if let Some(i) = number.as_i64() {
        Some(i)
    } else if number.is_u64() {
        // Above i64::MAX, so far outside the safe range
        return Err(InputError::OutOfRange { index });
    } else {
        None
    };

    let integer = match exact {
        Some(i) => i,
        None => {
            let f = number
                .as_f64()
                .ok_or(InputError::NotAnInteger { index })?;
            if !f.is_finite() || f.fract() != 0.0 {
                return Err(InputError::NotAnInteger { index });
            }
            if f.abs() > MAX_SAFE_INTEGER as f64 {
                return Err(InputError::OutOfRange { index });
            }
            f as i64
        }
    };

    if !(-MAX_SAFE_INTEGER..=MAX_SAFE_INTEGER).contains(&integer) {
        return Err(InputError::OutOfRange { index });
    }
    Ok(integer)
}

/// Parse `bytes` as UTF-8 JSON holding an array of safe integers.
pub fn parse_integers(bytes: &[u8]) -> Result<Vec<i64>, InputError> {
    let text = std::str::from_utf8(bytes)?;
    let parsed: Value = serde_json::from_str(text)?;

    let items = match parsed {
        Value::Array(items) => items,
        other => {
            return Err(InputError::NotAnArray {
                found: json_kind(&other),
            })
        }
    };

    items
        .iter()
        .enumerate()
        .map(|(index, item)| safe_integer(item, index))
        .collect()
}

/// Parse `bytes` as in [`parse_integers`], falling back to an empty list.
pub fn integers_or_empty(bytes: &[u8]) -> Vec<i64> {
    match parse_integers(bytes) {
        Ok(values) => values,
        Err(e) => {
            debug!(error = %e, "unparseable input, encoding empty sequence");
            Vec::new()
        }
    }
}

// ============================================================================
// SINK
// ============================================================================

/// Write every byte of `bytes` to `writer`, then flush.
pub fn write_all<W: Write>(mut writer: W, bytes: &[u8]) -> io::Result<()> {
    writer.write_all(bytes)?;
    writer.flush()
}

// ============================================================================
// PIPELINE
// ============================================================================

/// Encode with the encoder `options` selects.
pub fn encode_with(values: &[i64], options: PipelineOptions) -> Vec<u8> {
    #[cfg(feature = "parallel")]
    {
        if options.parallel {
            return encode_sequence_parallel(values);
        }
    }
    #[cfg(not(feature = "parallel"))]
    let _ = options;

    encode_sequence(values)
}

/// Drain `reader`, encode its integers as DER, and write them to `writer`.
///
/// Returns the number of bytes written. Only I/O can fail.
pub fn run<R: Read, W: Write>(reader: R, writer: W, options: PipelineOptions) -> io::Result<usize> {
    let input = drain(reader)?;
    let values = integers_or_empty(&input);
    let der = encode_with(&values, options);
    write_all(writer, &der)?;
    debug!(values = values.len(), bytes = der.len(), "wrote DER");
    Ok(der.len())
}
