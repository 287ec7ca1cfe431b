use std::time::Instant;

use tracing::debug;

use crate::codebook::CodeBook;
use crate::config::CodecConfig;
use crate::encoded::EncodedOutput;
use crate::error::Result;
use crate::frequency::FrequencyTable;
use crate::huffman_codec::{self, HuffmanCodec};
use crate::hufftree::HuffmanTree;
use crate::stats::Statistics;
use crate::symbol::Symbol;

/// Everything produced by one compression.
///
/// `tree` is `None` only for empty input, and must be handed back unchanged to
/// decompress `encoded`.
#[derive(Debug, Clone)]
pub struct Compressed<S: Symbol> {
    pub encoded: EncodedOutput,
    pub codebook: CodeBook<S>,
    pub tree: Option<HuffmanTree<S>>,
    pub stats: Statistics,
}

#[derive(Debug, Clone)]
pub struct Decompressed<S> {
    pub symbols: Vec<S>,
    pub stats: Statistics,
}

/// Runs compress/decompress under a fixed [`CodecConfig`]. Holds no state
/// between calls.
#[derive(Debug, Clone, Copy, Default)]
pub struct Compressor {
    config: CodecConfig,
}

impl Compressor {
    pub fn new() -> Self {
        Compressor::default()
    }

    pub fn with_config(config: CodecConfig) -> Result<Self> {
        config.validate()?;
        Ok(Compressor { config })
    }

    pub fn config(&self) -> &CodecConfig {
        &self.config
    }

    pub fn compress<S: Symbol>(&self, symbols: &[S]) -> Result<Compressed<S>> {
        let start = Instant::now();

        if symbols.is_empty() {
            return Ok(Compressed {
                encoded: EncodedOutput::new(),
                codebook: CodeBook::default(),
                tree: None,
                stats: Statistics::default().with_elapsed(start.elapsed()),
            });
        }

        let frequencies = FrequencyTable::from_symbols(symbols);
        let tree = HuffmanTree::from_frequencies(&frequencies)?;
        let codec = HuffmanCodec::new(tree);
        let encoded = codec.encode(symbols)?;
        let (tree, codebook) = codec.into_parts();

        let stats = Statistics::new(symbols.len(), encoded.len(), self.config.bits_per_symbol)
            .with_tree(&tree, &codebook)
            .with_elapsed(start.elapsed());

        debug!(
            symbols = stats.original_length,
            bits = stats.encoded_length,
            ratio_pct = stats.compression_ratio_pct,
            elapsed_us = stats.elapsed.as_micros() as u64,
            "compressed"
        );

        Ok(Compressed {
            encoded,
            codebook,
            tree: Some(tree),
            stats,
        })
    }

    pub fn decompress<S: Symbol>(
        &self,
        encoded: &EncodedOutput,
        tree: Option<&HuffmanTree<S>>,
    ) -> Result<Decompressed<S>> {
        let start = Instant::now();

        let Some(tree) = tree else {
            if !encoded.is_empty() {
                debug!(bits = encoded.len(), "no tree supplied, ignoring encoded digits");
            }
            return Ok(Decompressed {
                symbols: Vec::new(),
                stats: Statistics::default().with_elapsed(start.elapsed()),
            });
        };

        let symbols = huffman_codec::decode(encoded, tree)?;
        let codebook = CodeBook::from_tree(tree);
        let stats = Statistics::new(symbols.len(), encoded.len(), self.config.bits_per_symbol)
            .with_tree(tree, &codebook)
            .with_elapsed(start.elapsed());

        debug!(
            bits = stats.encoded_length,
            symbols = stats.original_length,
            elapsed_us = stats.elapsed.as_micros() as u64,
            "decompressed"
        );

        Ok(Decompressed { symbols, stats })
    }
}

pub fn compute_frequencies<S: Symbol>(symbols: &[S]) -> FrequencyTable<S> {
    FrequencyTable::from_symbols(symbols)
}

pub fn compress<S: Symbol>(symbols: &[S]) -> Result<Compressed<S>> {
    Compressor::new().compress(symbols)
}

pub fn decompress<S: Symbol>(
    encoded: &EncodedOutput,
    tree: Option<&HuffmanTree<S>>,
) -> Result<Decompressed<S>> {
    Compressor::new().decompress(encoded, tree)
}

/// True when the round-tripped sequence matches the original exactly.
pub fn validate_integrity<S: PartialEq>(original: &[S], recovered: &[S]) -> bool {
    original == recovered
}

pub fn compress_text(text: &str) -> Result<Compressed<char>> {
    let symbols: Vec<char> = text.chars().collect();
    compress(&symbols)
}

pub fn decompress_text(encoded: &EncodedOutput, tree: Option<&HuffmanTree<char>>) -> Result<String> {
    Ok(decompress(encoded, tree)?.symbols.into_iter().collect())
}

pub fn compress_bytes(bytes: &[u8]) -> Result<Compressed<u8>> {
    compress(bytes)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::error::HuffmanError;

    #[test]
    fn empty_input() {
        let compressed = compress_text("").unwrap();
        assert!(compressed.encoded.is_empty());
        assert!(compressed.codebook.is_empty());
        assert!(compressed.tree.is_none());
        assert_eq!(compressed.stats.original_length, 0);
        assert_eq!(compressed.stats.compression_ratio_pct, 0.0);

        assert_eq!(decompress_text(&compressed.encoded, None).unwrap(), "");
    }

    #[test]
    fn text_round_trip() {
        let text = "she sells sea shells by the sea shore";
        let compressed = compress_text(text).unwrap();
        let recovered = decompress_text(&compressed.encoded, compressed.tree.as_ref()).unwrap();
        assert_eq!(recovered, text);
    }

    #[test]
    fn decompress_stats_describe_the_output() {
        let compressed = compress_bytes(b"mississippi").unwrap();
        let out = decompress(&compressed.encoded, compressed.tree.as_ref()).unwrap();
        assert_eq!(out.symbols, b"mississippi".to_vec());
        assert_eq!(out.stats.original_length, 11);
        assert_eq!(out.stats.encoded_length, compressed.encoded.len());
        assert_eq!(out.stats.leaf_count, 4);
        assert_eq!(out.stats.bits_saved, compressed.stats.bits_saved);
    }

    #[test]
    fn absent_tree_ignores_digits() {
        let encoded: EncodedOutput = "0101".parse().unwrap();
        let out = decompress::<char>(&encoded, None).unwrap();
        assert!(out.symbols.is_empty());
    }

    #[test]
    fn configured_symbol_width() {
        assert_eq!(Compressor::new().config().bits_per_symbol, 8);

        let compressor = Compressor::with_config(CodecConfig { bits_per_symbol: 16 }).unwrap();
        assert_eq!(compressor.config(), &CodecConfig { bits_per_symbol: 16 });
        let compressed = compressor.compress(&['x'; 10]).unwrap();
        assert_eq!(compressed.stats.original_bits, 160);
        assert_eq!(compressed.stats.encoded_length, 10);

        let err = Compressor::with_config(CodecConfig { bits_per_symbol: 0 }).unwrap_err();
        assert!(matches!(err, HuffmanError::InvalidConfig(_)));
    }

    #[test]
    fn mismatched_tree_is_an_error_not_a_panic() {
        let compressed = compress_text("AABBC").unwrap();
        let other = HuffmanTree::from_symbols(&['x', 'y', 'y', 'z', 'z', 'z', 'z']).unwrap();
        // Decoding with a different tree either fails or yields other symbols.
        match decompress(&compressed.encoded, Some(&other)) {
            Ok(out) => assert!(!validate_integrity(&"AABBC".chars().collect::<Vec<_>>(), &out.symbols)),
            Err(err) => assert!(matches!(err, HuffmanError::TruncatedCode { .. })),
        }
    }

    #[test]
    fn integrity() {
        assert!(validate_integrity(b"abc", b"abc"));
        assert!(!validate_integrity(b"abc", b"abd"));
        assert!(!validate_integrity(b"abc", b"ab"));
    }
}
