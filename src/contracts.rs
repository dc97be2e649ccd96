// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Runtime contracts for everything the encoder emits.
//!
//! These are debug-mode assertions: zero cost in release builds, loud in
//! tests and fuzzing. They restate the DER rules the encoder is supposed to
//! follow so that a regression panics at the point of encoding instead of
//! producing bytes some downstream parser quietly rejects.
//!
//! # INVARIANTS (DO NOT REMOVE THESE CHECKS)
//!
//! | Contract                 | Rule                                         |
//! |--------------------------|----------------------------------------------|
//! | `check_integer_minimal`  | X.690 §8.3.2: no redundant leading 00 / FF   |
//! | `check_tlv_consistent`   | length octets minimal and equal to content   |

// ============================================================================
// COMPILE-TIME ASSERTIONS
// ============================================================================

const _: () = {
    use crate::der::{MAX_INTEGER_BYTES, SHORT_FORM_MAX, TAG_INTEGER, TAG_SEQUENCE};

    // INVARIANT: an i64 INTEGER header always fits the short length form
    assert!(MAX_INTEGER_BYTES <= SHORT_FORM_MAX);
    // INVARIANT: SEQUENCE carries the constructed bit, INTEGER does not
    assert!(TAG_SEQUENCE & 0x20 != 0);
    assert!(TAG_INTEGER & 0x20 == 0);
};

use crate::der::{decode_length, LengthMode};

/// Check that INTEGER content is non-empty and has no redundant sign byte.
///
/// # Panics (debug builds only)
/// Panics on empty content, a leading `0x00` followed by a clear high bit, or
/// a leading `0xFF` followed by a set high bit.
#[inline]
pub fn check_integer_minimal(content: &[u8]) {
    debug_assert!(!content.is_empty(), "INTEGER content must not be empty");
    if let [first, next, ..] = content {
        // INVARIANT: no redundant leading 0x00
        debug_assert!(
            !(*first == 0x00 && next & 0x80 == 0),
            "INTEGER content {:02X?} has a redundant leading 0x00",
            content
        );
        // INVARIANT: no redundant leading 0xFF
        debug_assert!(
            !(*first == 0xFF && next & 0x80 != 0),
            "INTEGER content {:02X?} has a redundant leading 0xFF",
            content
        );
    }
}

/// Check that `tlv` is one complete TLV whose minimal length octets match
/// the number of bytes that follow the header.
///
/// # Panics (debug builds only)
/// Panics if the length octets are malformed, non-minimal, or disagree with
/// the buffer size.
#[inline]
pub fn check_tlv_consistent(tlv: &[u8]) {
    if cfg!(debug_assertions) {
        // INVARIANT: length field equals content length exactly
        match decode_length(tlv, 1, LengthMode::Strict) {
            Ok((len, size)) => assert_eq!(
                1 + size + len,
                tlv.len(),
                "TLV length field says {} content bytes, buffer holds {}",
                len,
                tlv.len().saturating_sub(1 + size)
            ),
            Err(e) => panic!("TLV length octets invalid: {}", e),
        }
    }
}
