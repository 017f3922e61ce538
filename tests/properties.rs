//! Property-based tests for the checksum engine.
//!
//! These tests use proptest to check detection guarantees across
//! randomly generated symbol sequences.

use proptest::prelude::*;

use damm::{append_check_symbol, check_symbol, fold, is_valid, Alphabet, AlphabetKind, Damm};

/// Strategy for one of the built-in alphabets.
fn alphabet_kind() -> impl Strategy<Value = AlphabetKind> {
    prop_oneof![
        Just(AlphabetKind::Digit),
        Just(AlphabetKind::UpperHex),
        Just(AlphabetKind::LowerHex),
    ]
}

/// Strategy for an alphabet together with a valid symbol sequence in it.
fn sequence() -> impl Strategy<Value = (AlphabetKind, Vec<u8>)> {
    alphabet_kind().prop_flat_map(|kind| {
        let symbols = prop::collection::vec(0..kind.size(), 0..40)
            .prop_map(move |indices: Vec<u8>| {
                indices.into_iter().map(|i| kind.to_symbol(i)).collect::<Vec<u8>>()
            });
        (Just(kind), symbols)
    })
}

proptest! {
    #[test]
    fn alphabet_round_trip(kind in alphabet_kind(), index in 0u8..16) {
        prop_assume!(index < kind.size());
        prop_assert_eq!(kind.from_symbol(kind.to_symbol(index)).unwrap(), index);
    }

    #[test]
    fn appended_check_symbol_validates((kind, symbols) in sequence()) {
        let check = check_symbol(&kind, &symbols).unwrap();
        let mut extended = symbols.clone();
        extended.push(check);
        prop_assert!(is_valid(&kind, &extended).unwrap());
        prop_assert_eq!(append_check_symbol(&kind, &symbols).unwrap(), extended);
    }

    #[test]
    fn substitution_is_detected(
        (kind, symbols) in sequence(),
        position in any::<prop::sample::Index>(),
        replacement in 0u8..16,
    ) {
        prop_assume!(replacement < kind.size());
        let valid = append_check_symbol(&kind, &symbols).unwrap();
        let position = position.index(valid.len());
        let replacement = kind.to_symbol(replacement);
        prop_assume!(valid[position] != replacement);

        let mut corrupted = valid;
        corrupted[position] = replacement;
        prop_assert!(!is_valid(&kind, &corrupted).unwrap());
    }

    #[test]
    fn adjacent_transposition_is_detected(
        (kind, symbols) in sequence(),
        position in any::<prop::sample::Index>(),
    ) {
        let valid = append_check_symbol(&kind, &symbols).unwrap();
        prop_assume!(valid.len() >= 2);
        let position = position.index(valid.len() - 1);
        prop_assume!(valid[position] != valid[position + 1]);

        let mut swapped = valid;
        swapped.swap(position, position + 1);
        prop_assert!(!is_valid(&kind, &swapped).unwrap());
    }

    #[test]
    fn chunked_updates_match_one_shot((kind, symbols) in sequence(), split in any::<prop::sample::Index>()) {
        let split = split.index(symbols.len() + 1);
        let mut damm = Damm::new(kind).unwrap();
        damm.update(&symbols[..split]).unwrap();
        damm.update(&symbols[split..]).unwrap();
        prop_assert_eq!(damm.state(), fold(&kind, &symbols).unwrap());
    }

    #[test]
    fn foreign_byte_is_rejected((kind, symbols) in sequence(), byte in any::<u8>()) {
        prop_assume!(kind.from_symbol(byte).is_err());
        let mut input = symbols;
        input.push(byte);
        prop_assert!(check_symbol(&kind, &input).is_err());
    }
}
