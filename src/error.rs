// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Error types for the DER codec and the JSON input boundary.
//!
//! `DerError` is the malformed-encoding family: every variant means the bytes
//! handed to a decoder are not strict DER for the INTEGER/SEQUENCE subset this
//! crate understands. Each variant carries the byte offset where decoding
//! stopped so `inspect` can point at the bad byte.
//!
//! `InputError` never reaches the encoder. The pipeline absorbs it into an
//! empty sequence (see [`crate::source::integers_or_empty`]), but the typed
//! variants are kept so callers and logs can tell failures apart.

use thiserror::Error;

use crate::source::MAX_SAFE_INTEGER;

/// Malformed DER encountered while decoding.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DerError {
    #[error("unexpected end of input at offset {offset}: need {needed} more byte(s)")]
    UnexpectedEnd { offset: usize, needed: usize },

    #[error("unexpected tag 0x{found:02X} at offset {offset} (expected 0x{expected:02X})")]
    UnexpectedTag { offset: usize, expected: u8, found: u8 },

    #[error("indefinite length at offset {offset} is not allowed in DER")]
    IndefiniteLength { offset: usize },

    #[error("reserved length octet 0xFF at offset {offset}")]
    ReservedLength { offset: usize },

    #[error("non-minimal length encoding at offset {offset}")]
    NonMinimalLength { offset: usize },

    #[error("length at offset {offset} uses {octets} octets, more than this platform can address")]
    LengthTooLarge { offset: usize, octets: usize },

    #[error("declared length {declared} at offset {offset} exceeds the {available} byte(s) available")]
    LengthOverrun {
        offset: usize,
        declared: usize,
        available: usize,
    },

    #[error("INTEGER at offset {offset} has empty content")]
    EmptyInteger { offset: usize },

    #[error("INTEGER at offset {offset} has a redundant leading sign byte")]
    NonMinimalInteger { offset: usize },

    #[error("INTEGER at offset {offset} is {len} bytes wide and does not fit in 64 bits")]
    IntegerOverflow { offset: usize, len: usize },

    #[error("{remaining} trailing byte(s) after the SEQUENCE at offset {offset}")]
    TrailingBytes { offset: usize, remaining: usize },
}

impl DerError {
    /// Byte offset at which decoding failed.
    pub fn offset(&self) -> usize {
        match *self {
            DerError::UnexpectedEnd { offset, .. }
            | DerError::UnexpectedTag { offset, .. }
            | DerError::IndefiniteLength { offset }
            | DerError::ReservedLength { offset }
            | DerError::NonMinimalLength { offset }
            | DerError::LengthTooLarge { offset, .. }
            | DerError::LengthOverrun { offset, .. }
            | DerError::EmptyInteger { offset }
            | DerError::NonMinimalInteger { offset }
            | DerError::IntegerOverflow { offset, .. }
            | DerError::TrailingBytes { offset, .. } => offset,
        }
    }
}

/// Why raw input could not be turned into a list of integers.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("input is not valid UTF-8: {0}")]
    Utf8(#[from] std::str::Utf8Error),

    #[error("input is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("expected a JSON array, found {found}")]
    NotAnArray { found: &'static str },

    #[error("element {index} is not an integer")]
    NotAnInteger { index: usize },

    #[error("element {index} is outside the safe integer range ±{}", MAX_SAFE_INTEGER)]
    OutOfRange { index: usize },
}
