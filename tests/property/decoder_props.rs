//! Decoder robustness: arbitrary bytes never panic, accepted input is canonical.

use ints2der::{
    decode_integer, decode_sequence, decode_sequence_with, encode_integer_to_vec, encode_sequence,
    LengthMode,
};
use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(2000))]

    /// Property: whatever strict decoding accepts re-encodes to the same bytes.
    #[test]
    fn prop_strict_sequence_is_canonical(bytes in prop::collection::vec(any::<u8>(), 0..64)) {
        if let Ok(values) = decode_sequence(&bytes) {
            prop_assert_eq!(encode_sequence(&values), bytes);
        }
    }

    /// Property: whatever strict decoding accepts for one INTEGER re-encodes exactly.
    #[test]
    fn prop_strict_integer_is_canonical(bytes in prop::collection::vec(any::<u8>(), 0..12)) {
        if let Ok((value, consumed)) = decode_integer(&bytes, 0) {
            prop_assert!(consumed <= bytes.len());
            prop_assert_eq!(encode_integer_to_vec(value), &bytes[..consumed]);
        }
    }

    /// Property: lenient decoding accepts a superset of strict decoding.
    #[test]
    fn prop_lenient_superset(bytes in prop::collection::vec(any::<u8>(), 0..64)) {
        if let Ok(strict) = decode_sequence(&bytes) {
            prop_assert_eq!(decode_sequence_with(&bytes, LengthMode::Lenient), Ok(strict));
        }
    }

    /// Property: errors point inside the buffer or one past its end.
    #[test]
    fn prop_error_offset_in_bounds(bytes in prop::collection::vec(any::<u8>(), 0..64)) {
        if let Err(e) = decode_sequence_with(&bytes, LengthMode::Lenient) {
            prop_assert!(e.offset() <= bytes.len(), "{} for {:02X?}", e, bytes);
        }
    }

    /// Property: a valid encoding with a mutated byte never decodes to the
    /// same values with a different byte string.
    #[test]
    fn prop_mutation_detected(
        values in prop::collection::vec(any::<i64>(), 1..20),
        index in any::<prop::sample::Index>(),
        flip in 1u8..=255,
    ) {
        let mut der = encode_sequence(&values);
        let at = index.index(der.len());
        der[at] ^= flip;
        if let Ok(decoded) = decode_sequence(&der) {
            prop_assert_ne!(decoded, values);
        }
    }
}
