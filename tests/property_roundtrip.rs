use proptest::prelude::*;

use huffpress::{compress, compress_text, decompress, decompress_text, validate_integrity, HuffmanTree};

proptest! {
    #[test]
    fn prop_text_roundtrip(s in "(?s).{0,256}") {
        let compressed = compress_text(&s).unwrap();
        let recovered = decompress_text(&compressed.encoded, compressed.tree.as_ref()).unwrap();
        prop_assert_eq!(recovered, s);
    }

    #[test]
    fn prop_bytes_roundtrip(bytes in proptest::collection::vec(any::<u8>(), 0..512)) {
        let compressed = compress(&bytes).unwrap();
        let out = decompress(&compressed.encoded, compressed.tree.as_ref()).unwrap();
        prop_assert!(validate_integrity(&bytes, &out.symbols));
    }

    #[test]
    fn prop_repeated_symbol_roundtrip(b in any::<u8>(), n in 1usize..300) {
        let bytes = vec![b; n];
        let compressed = compress(&bytes).unwrap();
        prop_assert_eq!(compressed.encoded.len(), n);
        let out = decompress(&compressed.encoded, compressed.tree.as_ref()).unwrap();
        prop_assert_eq!(out.symbols, bytes);
    }

    #[test]
    fn prop_codebook_is_prefix_free(bytes in proptest::collection::vec(0u8..40, 1..400)) {
        let compressed = compress(&bytes).unwrap();
        prop_assert!(compressed.codebook.is_prefix_free());
        for (_, code) in compressed.codebook.iter() {
            prop_assert!(!code.is_empty());
        }
    }

    #[test]
    fn prop_leaf_count_matches_distinct_symbols(bytes in proptest::collection::vec(any::<u8>(), 1..400)) {
        let mut distinct = bytes.clone();
        distinct.sort_unstable();
        distinct.dedup();

        let compressed = compress(&bytes).unwrap();
        let tree = compressed.tree.as_ref().unwrap();
        prop_assert_eq!(tree.leaf_count(), distinct.len());
        prop_assert_eq!(compressed.codebook.len(), distinct.len());
        prop_assert_eq!(tree.weight(), bytes.len());
    }

    #[test]
    fn prop_encoded_length_is_sum_of_code_lengths(bytes in proptest::collection::vec(0u8..16, 1..400)) {
        let compressed = compress(&bytes).unwrap();
        let expected: usize = bytes.iter()
            .map(|b| compressed.codebook.get(b).map(|code| code.len()).unwrap_or(0))
            .sum();
        prop_assert_eq!(compressed.encoded.len(), expected);
    }

    #[test]
    fn prop_construction_is_deterministic(bytes in proptest::collection::vec(0u8..8, 1..200)) {
        let first = HuffmanTree::from_symbols(&bytes).unwrap();
        let second = HuffmanTree::from_symbols(&bytes).unwrap();
        prop_assert_eq!(first, second);
    }
}
