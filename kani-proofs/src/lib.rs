// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Kani model checking proofs for the ints2der DER primitives.
//!
//! This standalone crate carries a copy of the INTEGER content and definite
//! length codecs and proves them over every input Kani can enumerate.
//!
//! Run with: `cargo kani`
//!
//! ## Verified Properties
//!
//! 1. **No panics**: encoders and decoders never panic
//! 2. **Roundtrip**: decode(encode(x)) == x for every i64 and every length
//! 3. **Minimality**: encoder output never starts with a redundant sign byte
//! 4. **Rejection**: indefinite and reserved length forms are refused

/// An i64 never needs more than 8 content octets
pub const MAX_INTEGER_BYTES: usize = 8;

/// Length octets after the 0x8k prefix (usize on 64-bit targets)
pub const MAX_LENGTH_OCTETS: usize = 8;

// ============================================================================
// INTEGER CONTENT (mirrors src/der/integer.rs)
// ============================================================================

/// Minimal two's-complement content octets for `value`
pub fn integer_content(value: i64) -> Vec<u8> {
    let bytes = value.to_be_bytes();
    let mut start = 0;
    while start < MAX_INTEGER_BYTES - 1 {
        let redundant = (bytes[start] == 0x00 && bytes[start + 1] & 0x80 == 0)
            || (bytes[start] == 0xFF && bytes[start + 1] & 0x80 != 0);
        if !redundant {
            break;
        }
        start += 1;
    }
    bytes[start..].to_vec()
}

#[derive(Debug, Clone, PartialEq)]
pub enum DecodeError {
    Empty,
    NonMinimal,
    Overflow,
    Truncated,
    Indefinite,
    Reserved,
    TooLarge,
}

/// Decode minimal two's-complement content back to an i64
pub fn integer_from_content(content: &[u8]) -> Result<i64, DecodeError> {
    if content.is_empty() {
        return Err(DecodeError::Empty);
    }
    if content.len() > MAX_INTEGER_BYTES {
        return Err(DecodeError::Overflow);
    }
    if content.len() > 1 {
        let (a, b) = (content[0], content[1]);
        if (a == 0x00 && b & 0x80 == 0) || (a == 0xFF && b & 0x80 != 0) {
            return Err(DecodeError::NonMinimal);
        }
    }
    let seed: i64 = if content[0] & 0x80 != 0 { -1 } else { 0 };
    Ok(content
        .iter()
        .fold(seed, |acc, &b| (acc << 8) | i64::from(b)))
}

// ============================================================================
// DEFINITE LENGTH (mirrors src/der/length.rs)
// ============================================================================

/// Encode a definite length in its shortest form
pub fn encode_length(len: usize, buf: &mut Vec<u8>) {
    if len <= 0x7F {
        buf.push(len as u8);
        return;
    }
    let bytes = (len as u64).to_be_bytes();
    let skip = bytes.iter().take_while(|&&b| b == 0).count();
    buf.push(0x80 | (MAX_LENGTH_OCTETS - skip) as u8);
    buf.extend_from_slice(&bytes[skip..]);
}

/// Decode a strict DER length, returning (length, octets consumed)
pub fn decode_length(bytes: &[u8]) -> Result<(usize, usize), DecodeError> {
    let first = *bytes.first().ok_or(DecodeError::Truncated)?;
    if first & 0x80 == 0 {
        return Ok((first as usize, 1));
    }
    let k = (first & 0x7F) as usize;
    if k == 0 {
        return Err(DecodeError::Indefinite);
    }
    if k == 0x7F {
        return Err(DecodeError::Reserved);
    }
    if k > MAX_LENGTH_OCTETS {
        return Err(DecodeError::TooLarge);
    }
    if bytes.len() < 1 + k {
        return Err(DecodeError::Truncated);
    }
    let octets = &bytes[1..1 + k];
    if octets[0] == 0 {
        return Err(DecodeError::NonMinimal);
    }
    let len = octets.iter().fold(0u64, |acc, &b| (acc << 8) | u64::from(b));
    if len <= 0x7F {
        return Err(DecodeError::NonMinimal);
    }
    Ok((len as usize, 1 + k))
}

// ============================================================================
// KANI MODEL CHECKING PROOFS
// ============================================================================

#[cfg(kani)]
mod kani_proofs {
    use super::*;

    /// Encoding any i64 yields 1..=8 minimal octets.
    #[kani::proof]
    #[kani::unwind(9)]
    fn verify_integer_content_bounded_and_minimal() {
        let value: i64 = kani::any();
        let content = integer_content(value);

        kani::assert(!content.is_empty(), "content must have at least 1 octet");
        kani::assert(content.len() <= MAX_INTEGER_BYTES, "content must fit 8 octets");
        if content.len() > 1 {
            let (a, b) = (content[0], content[1]);
            kani::assert(
                !(a == 0x00 && b & 0x80 == 0) && !(a == 0xFF && b & 0x80 != 0),
                "leading octet must not be a redundant sign byte",
            );
        }
    }

    /// decode(encode(x)) == x for all i64.
    #[kani::proof]
    #[kani::unwind(9)]
    fn verify_integer_roundtrip() {
        let value: i64 = kani::any();
        let content = integer_content(value);
        let decoded = integer_from_content(&content);
        kani::assert(decoded == Ok(value), "roundtrip must preserve value");
    }

    /// Integer decoding never panics on up to 9 arbitrary octets.
    #[kani::proof]
    #[kani::unwind(10)]
    fn verify_integer_decode_no_panic() {
        let len: usize = kani::any_where(|&n| n <= MAX_INTEGER_BYTES + 1);
        let mut bytes = [0u8; MAX_INTEGER_BYTES + 1];
        for b in bytes.iter_mut().take(len) {
            *b = kani::any();
        }
        let _ = integer_from_content(&bytes[..len]);
    }

    /// Length encoding round-trips and uses the shortest form.
    #[kani::proof]
    #[kani::unwind(10)]
    fn verify_length_roundtrip() {
        let len: usize = kani::any();
        let mut buf = Vec::new();
        encode_length(len, &mut buf);

        kani::assert(buf.len() <= 1 + MAX_LENGTH_OCTETS, "length field bounded");
        kani::assert((len <= 0x7F) == (buf.len() == 1), "short form iff len <= 127");

        let decoded = decode_length(&buf);
        kani::assert(decoded == Ok((len, buf.len())), "length roundtrip");
    }

    /// Length decoding never panics on up to 10 arbitrary octets.
    #[kani::proof]
    #[kani::unwind(11)]
    fn verify_length_decode_no_panic() {
        let len: usize = kani::any_where(|&n| n <= MAX_LENGTH_OCTETS + 2);
        let mut bytes = [0u8; MAX_LENGTH_OCTETS + 2];
        for b in bytes.iter_mut().take(len) {
            *b = kani::any();
        }
        if let Ok((_, consumed)) = decode_length(&bytes[..len]) {
            kani::assert(consumed <= len, "cannot consume more than available");
        }
    }

    /// 0x80 and 0xFF are never valid DER length prefixes.
    #[kani::proof]
    fn verify_length_rejects_indefinite_and_reserved() {
        let tail: u8 = kani::any();
        kani::assert(
            decode_length(&[0x80, tail]) == Err(DecodeError::Indefinite),
            "indefinite length must be rejected",
        );
        kani::assert(
            decode_length(&[0xFF, tail]) == Err(DecodeError::Reserved),
            "reserved length must be rejected",
        );
    }
}
