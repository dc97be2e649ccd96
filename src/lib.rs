// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! JSON integer arrays in, DER `SEQUENCE OF INTEGER` out.
//!
//! The interesting part is small and has to be bit-exact: minimal
//! two's-complement INTEGER content, minimal definite lengths, and children
//! concatenated in input order. Everything else is plumbing around it.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────────┐     ┌─────────────────┐
//! │  source.rs  │────▶│ der/sequence.rs  │────▶│   source.rs     │
//! │ (drain,     │     │ (encode_sequence)│     │ (write_all)     │
//! │  JSON→i64)  │     └────────┬─────────┘     └─────────────────┘
//! └─────────────┘              │ per element
//!                              ▼
//!                     ┌──────────────────┐     ┌─────────────────┐
//!                     │ der/integer.rs   │────▶│ der/length.rs   │
//!                     │ (minimal 2's c.) │     │ (short/long)    │
//!                     └──────────────────┘     └─────────────────┘
//! ```
//!
//! The decode direction (`decode_integer`, `decode_sequence`, `walk_sequence`)
//! exists for round-trip testing and for `ints2der inspect`.
//!
//! # Usage
//!
//! ```
//! use ints2der::{decode_sequence, encode_sequence};
//!
//! let der = encode_sequence(&[0, 128, -128]);
//! assert_eq!(der, [0x30, 0x0A, 0x02, 0x01, 0x00, 0x02, 0x02, 0x00, 0x80, 0x02, 0x01, 0x80]);
//! assert_eq!(decode_sequence(&der).unwrap(), vec![0, 128, -128]);
//! ```

// Module declarations
pub mod contracts;
pub mod der;
mod error;
pub mod source;
pub mod testing;
pub mod utils;

// Re-exports for public API
#[cfg(feature = "parallel")]
pub use der::encode_sequence_parallel;
pub use der::{
    decode_integer, decode_integer_with, decode_sequence, decode_sequence_with, encode_integer,
    encode_integer_to_vec, encode_length, encode_sequence, walk_sequence, LengthMode, Tlv,
    TAG_INTEGER, TAG_SEQUENCE,
};
pub use error::{DerError, InputError};
pub use source::{
    drain, integers_or_empty, parse_integers, run, write_all, PipelineOptions, MAX_SAFE_INTEGER,
};
