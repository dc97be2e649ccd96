// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! INTEGER: minimal big-endian two's complement.
//!
//! The content is the shortest byte string whose two's-complement reading is
//! the value. A leading `0x00` is only allowed when the next byte has its
//! high bit set (otherwise the value would read as negative), and a leading
//! `0xFF` only when the next byte has its high bit clear. Zero is `[0x00]`.
//!
//! ```text
//!      0  →  02 01 00
//!    127  →  02 01 7F
//!    128  →  02 02 00 80
//!   -128  →  02 01 80
//!   -129  →  02 02 FF 7F
//! ```

use super::length::{encode_length, encoded_length_len, LengthMode};
use super::tlv::read_tlv;
use super::{MAX_INTEGER_BYTES, TAG_INTEGER};
use crate::contracts::check_integer_minimal;
use crate::error::DerError;

/// True if `first` is a redundant sign byte given the byte after it.
#[inline]
fn is_redundant_sign(first: u8, next: u8) -> bool {
    (first == 0x00 && next & 0x80 == 0) || (first == 0xFF && next & 0x80 != 0)
}

/// Index of the first significant byte in `value.to_be_bytes()`.
#[inline]
fn minimal_start(bytes: &[u8; MAX_INTEGER_BYTES]) -> usize {
    let mut start = 0;
    while start + 1 < bytes.len() && is_redundant_sign(bytes[start], bytes[start + 1]) {
        start += 1;
    }
    start
}

/// Minimal two's-complement content bytes for `value` (no tag, no length).
pub fn integer_content(value: i64) -> Vec<u8> {
    let bytes = value.to_be_bytes();
    bytes[minimal_start(&bytes)..].to_vec()
}

/// Length of [`integer_content`] without allocating.
pub fn integer_content_len(value: i64) -> usize {
    let bytes = value.to_be_bytes();
    MAX_INTEGER_BYTES - minimal_start(&bytes)
}

/// Total size of the INTEGER TLV for `value`.
pub fn integer_tlv_len(value: i64) -> usize {
    let content_len = integer_content_len(value);
    1 + encoded_length_len(content_len) + content_len
}

/// Append the INTEGER TLV for `value` to `buf`.
pub fn encode_integer(value: i64, buf: &mut Vec<u8>) {
    let bytes = value.to_be_bytes();
    let content = &bytes[minimal_start(&bytes)..];
    check_integer_minimal(content);

    buf.push(TAG_INTEGER);
    encode_length(content.len(), buf);
    buf.extend_from_slice(content);
}

/// The INTEGER TLV for `value` as its own buffer.
pub fn encode_integer_to_vec(value: i64) -> Vec<u8> {
    let mut buf = Vec::with_capacity(integer_tlv_len(value));
    encode_integer(value, &mut buf);
    buf
}

/// Interpret INTEGER content bytes, enforcing DER minimality.
///
/// `offset` is only used for error reporting and should point at the first
/// content byte.
pub fn integer_from_content(content: &[u8], offset: usize) -> Result<i64, DerError> {
    match content {
        [] => return Err(DerError::EmptyInteger { offset }),
        [first, next, ..] if is_redundant_sign(*first, *next) => {
            return Err(DerError::NonMinimalInteger { offset })
        }
        _ if content.len() > MAX_INTEGER_BYTES => {
            return Err(DerError::IntegerOverflow {
                offset,
                len: content.len(),
            })
        }
        _ => {}
    }

    // Sign-extend from the first byte, then shift the rest in
    let seed: i64 = if content[0] & 0x80 != 0 { -1 } else { 0 };
    Ok(content
        .iter()
        .fold(seed, |acc, &b| (acc << 8) | i64::from(b)))
}

/// Decode the INTEGER TLV at `offset` with strict DER length rules.
///
/// Returns `(value, bytes_consumed)` where `bytes_consumed` counts the tag,
/// length octets and content.
pub fn decode_integer(bytes: &[u8], offset: usize) -> Result<(i64, usize), DerError> {
    decode_integer_with(bytes, offset, LengthMode::Strict)
}

/// Decode the INTEGER TLV at `offset` with the given length mode.
///
/// Content minimality is enforced regardless of `mode`.
pub fn decode_integer_with(
    bytes: &[u8],
    offset: usize,
    mode: LengthMode,
) -> Result<(i64, usize), DerError> {
    let tlv = read_tlv(bytes, offset, TAG_INTEGER, mode)?;
    let value = integer_from_content(&bytes[tlv.content_range()], tlv.content_start())?;
    Ok((value, tlv.total_len()))
}
