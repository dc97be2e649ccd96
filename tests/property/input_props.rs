//! JSON boundary properties.

use ints2der::{integers_or_empty, parse_integers, MAX_SAFE_INTEGER};
use proptest::prelude::*;

use crate::common::encode_json;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// Property: serde_json-rendered safe integer arrays parse back exactly.
    #[test]
    fn prop_json_array_roundtrip(values in prop::collection::vec(-MAX_SAFE_INTEGER..=MAX_SAFE_INTEGER, 0..50)) {
        let text = serde_json::to_string(&values).unwrap();
        prop_assert_eq!(parse_integers(text.as_bytes()).unwrap(), values);
    }

    /// Property: any input at all produces a DER SEQUENCE.
    #[test]
    fn prop_any_input_produces_sequence(bytes in prop::collection::vec(any::<u8>(), 0..128)) {
        let der = encode_json(&bytes);
        prop_assert_eq!(der[0], 0x30);
        prop_assert!(ints2der::decode_sequence(&der).is_ok());
    }

    /// Property: a single out-of-range element empties the whole input.
    #[test]
    fn prop_out_of_range_empties(
        values in prop::collection::vec(-1000i64..1000, 0..10),
        excess in 1i64..1_000_000,
        negative in any::<bool>(),
    ) {
        let bad = MAX_SAFE_INTEGER + excess;
        let bad = if negative { -bad } else { bad };
        let mut all = values;
        all.push(bad);
        let text = serde_json::to_string(&all).unwrap();
        prop_assert!(integers_or_empty(text.as_bytes()).is_empty());
    }
}
