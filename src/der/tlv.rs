// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! TLV headers and the structural walk over a `SEQUENCE OF INTEGER`.
//!
//! `read_tlv` is the one place that checks a tag, decodes the length and
//! makes sure the content fits in the buffer. The INTEGER and SEQUENCE
//! decoders both go through it, and so does `inspect`.

use std::ops::Range;

use tracing::trace;

use super::length::{decode_length, LengthMode};
use super::{TAG_INTEGER, TAG_SEQUENCE};
use crate::error::DerError;

/// Position and size of one tag-length-value record inside a buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tlv {
    /// Offset of the tag byte
    pub offset: usize,
    pub tag: u8,
    /// Tag byte plus length octets
    pub header_len: usize,
    pub content_len: usize,
}

impl Tlv {
    /// Offset of the first content byte.
    pub fn content_start(&self) -> usize {
        self.offset + self.header_len
    }

    /// One past the last content byte.
    pub fn end(&self) -> usize {
        self.content_start() + self.content_len
    }

    pub fn content_range(&self) -> Range<usize> {
        self.content_start()..self.end()
    }

    pub fn total_len(&self) -> usize {
        self.header_len + self.content_len
    }
}

/// Read the TLV header at `offset`, requiring `expected_tag`.
///
/// Fails if the tag differs, the length octets are malformed for `mode`, or
/// the declared content runs past the end of `bytes`.
pub fn read_tlv(
    bytes: &[u8],
    offset: usize,
    expected_tag: u8,
    mode: LengthMode,
) -> Result<Tlv, DerError> {
    let tag = *bytes
        .get(offset)
        .ok_or(DerError::UnexpectedEnd { offset, needed: 1 })?;
    if tag != expected_tag {
        return Err(DerError::UnexpectedTag {
            offset,
            expected: expected_tag,
            found: tag,
        });
    }

    let (content_len, length_size) = decode_length(bytes, offset + 1, mode)?;
    let header_len = 1 + length_size;
    let available = bytes.len() - (offset + header_len);
    if content_len > available {
        return Err(DerError::LengthOverrun {
            offset,
            declared: content_len,
            available,
        });
    }

    Ok(Tlv {
        offset,
        tag,
        header_len,
        content_len,
    })
}

/// Walk a complete `SEQUENCE OF INTEGER`.
///
/// The first entry is the SEQUENCE itself, followed by every INTEGER child in
/// order. Children must tile the SEQUENCE content exactly and nothing may
/// follow the SEQUENCE. Integer contents are not interpreted here.
pub fn walk_sequence(bytes: &[u8], mode: LengthMode) -> Result<Vec<Tlv>, DerError> {
    let outer = read_tlv(bytes, 0, TAG_SEQUENCE, mode)?;
    if outer.end() < bytes.len() {
        return Err(DerError::TrailingBytes {
            offset: outer.end(),
            remaining: bytes.len() - outer.end(),
        });
    }

    // Children are bounded by the SEQUENCE content, not the whole buffer
    let scope = &bytes[..outer.end()];
    let mut records = vec![outer];
    let mut pos = outer.content_start();

    while pos < outer.end() {
        let child = read_tlv(scope, pos, TAG_INTEGER, mode)?;
        trace!(offset = child.offset, len = child.content_len, "sequence child");
        pos = child.end();
        records.push(child);
    }

    Ok(records)
}
