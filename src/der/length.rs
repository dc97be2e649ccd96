// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Length octets: short form up to 127, long form beyond.
//!
//! Long form is `0x80 | k` followed by `k` big-endian bytes, with no leading
//! zero byte. DER forbids long form for anything short form can express and
//! forbids the indefinite form (`0x80` alone) outright.

use super::{LONG_FORM_BIT, MAX_LENGTH_OCTETS, SHORT_FORM_MAX};
use crate::error::DerError;

/// How strictly length octets are checked on decode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LengthMode {
    /// DER: the length must be in its unique minimal form.
    #[default]
    Strict,
    /// Accept non-minimal definite lengths (e.g. `81 05`, `82 00 80`).
    /// Indefinite and reserved forms are still rejected.
    Lenient,
}

/// Append the DER length octets for `len` to `buf`.
pub fn encode_length(len: usize, buf: &mut Vec<u8>) {
    if len <= SHORT_FORM_MAX {
        buf.push(len as u8);
        return;
    }

    let octets = len.to_be_bytes();
    let skip = (len.leading_zeros() / 8) as usize;
    let significant = &octets[skip..];

    buf.push(LONG_FORM_BIT | significant.len() as u8);
    buf.extend_from_slice(significant);
}

/// Number of bytes [`encode_length`] writes for `len`.
pub fn encoded_length_len(len: usize) -> usize {
    if len <= SHORT_FORM_MAX {
        1
    } else {
        1 + MAX_LENGTH_OCTETS - (len.leading_zeros() / 8) as usize
    }
}

/// Decode the length octets starting at `offset`.
///
/// Returns `(content_length, length_field_size)`.
pub fn decode_length(
    bytes: &[u8],
    offset: usize,
    mode: LengthMode,
) -> Result<(usize, usize), DerError> {
    let first = *bytes
        .get(offset)
        .ok_or(DerError::UnexpectedEnd { offset, needed: 1 })?;

    if first & LONG_FORM_BIT == 0 {
        return Ok((first as usize, 1));
    }

    let octet_count = (first & !LONG_FORM_BIT) as usize;
    if octet_count == 0 {
        return Err(DerError::IndefiniteLength { offset });
    }
    if first == 0xFF {
        return Err(DerError::ReservedLength { offset });
    }
    if octet_count > MAX_LENGTH_OCTETS {
        return Err(DerError::LengthTooLarge {
            offset,
            octets: octet_count,
        });
    }

    let start = offset + 1;
    let available = bytes.len().saturating_sub(start);
    if octet_count > available {
        return Err(DerError::UnexpectedEnd {
            offset: start,
            needed: octet_count - available,
        });
    }

    let octets = &bytes[start..start + octet_count];
    let len = octets
        .iter()
        .fold(0usize, |acc, &b| (acc << 8) | b as usize);

    // INVARIANT: strict mode accepts exactly what encode_length produces
    if mode == LengthMode::Strict && (octets[0] == 0 || len <= SHORT_FORM_MAX) {
        return Err(DerError::NonMinimalLength { offset });
    }

    Ok((len, 1 + octet_count))
}
