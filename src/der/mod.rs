// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Minimal DER codec for `SEQUENCE OF INTEGER`.
//!
//! Only two universal types exist here: INTEGER (tag `0x02`) and SEQUENCE
//! (tag `0x30`, constructed). Everything is definite-length and minimal, the
//! way X.690 §10 wants it. The encoder is total over `i64`; the decoder is
//! strict by default and reports a typed [`DerError`](crate::DerError) for
//! anything that a DER-strict parser would reject.
//!
//! # Layout
//!
//! ```text
//! ┌──────┬─────────────────┬──────────────────────────────────────┐
//! │ 0x30 │ length(content) │ 0x02 len v..  0x02 len v..  ...      │
//! └──────┴─────────────────┴──────────────────────────────────────┘
//!   tag    short or long      children, in input order
//! ```
//!
//! # References
//!
//! - **ITU-T X.690 (02/2021)**: §8.1.3 length octets, §8.3 INTEGER,
//!   §8.9 SEQUENCE, §10.1 DER definite-length and minimal-length rules.

mod integer;
mod length;
mod sequence;
mod tlv;

pub use integer::{
    decode_integer, decode_integer_with, encode_integer, encode_integer_to_vec, integer_content,
    integer_content_len, integer_from_content, integer_tlv_len,
};
pub use length::{decode_length, encode_length, encoded_length_len, LengthMode};
#[cfg(feature = "parallel")]
pub use sequence::encode_sequence_parallel;
pub use sequence::{decode_sequence, decode_sequence_with, encode_sequence};
pub use tlv::{read_tlv, walk_sequence, Tlv};

// ============================================================================
// CONSTANTS
// ============================================================================

/// Universal tag for INTEGER (primitive, number 2)
pub const TAG_INTEGER: u8 = 0x02;

/// Universal tag for SEQUENCE (constructed bit 0x20 | number 16)
pub const TAG_SEQUENCE: u8 = 0x30;

/// Largest length representable in the single-byte short form
pub const SHORT_FORM_MAX: usize = 0x7F;

/// High bit of the first length octet marks the long form
pub const LONG_FORM_BIT: u8 = 0x80;

/// Most length octets we accept: a length must fit in `usize`
pub const MAX_LENGTH_OCTETS: usize = std::mem::size_of::<usize>();

/// Widest INTEGER content that decodes into an `i64`
pub const MAX_INTEGER_BYTES: usize = std::mem::size_of::<i64>();
