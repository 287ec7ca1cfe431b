use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::codebook::CodeBook;
use crate::hufftree::HuffmanTree;
use crate::symbol::Symbol;

/// Metrics snapshot for one compress or decompress call.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Statistics {
    pub original_length: usize,
    pub original_bits: usize,
    pub encoded_length: usize,
    pub compression_ratio_pct: f64,
    pub compression_factor: f64,
    /// Negative when the encoding is longer than the fixed-width input.
    pub bits_saved: i64,
    pub tree_height: usize,
    pub leaf_count: usize,
    pub internal_node_count: usize,
    pub average_code_length: f64,
    pub elapsed: Duration,
}

impl Statistics {
    pub fn new(original_length: usize, encoded_length: usize, bits_per_symbol: u32) -> Self {
        let original_bits = original_length.saturating_mul(bits_per_symbol as usize);
        let bits_saved = i64::try_from(original_bits)
            .unwrap_or(i64::MAX)
            .saturating_sub(i64::try_from(encoded_length).unwrap_or(i64::MAX));

        let compression_ratio_pct = if original_bits > 0 {
            (original_bits as f64 - encoded_length as f64) / original_bits as f64 * 100.0
        } else {
            0.0
        };
        let compression_factor = if encoded_length > 0 {
            original_bits as f64 / encoded_length as f64
        } else {
            0.0
        };

        Statistics {
            original_length,
            original_bits,
            encoded_length,
            compression_ratio_pct,
            compression_factor,
            bits_saved,
            ..Statistics::default()
        }
    }

    pub fn with_tree<S: Symbol>(mut self, tree: &HuffmanTree<S>, codebook: &CodeBook<S>) -> Self {
        self.tree_height = tree.height();
        self.leaf_count = tree.leaf_count();
        self.internal_node_count = tree.internal_count();
        self.average_code_length = codebook.average_code_length();
        self
    }

    pub fn with_elapsed(mut self, elapsed: Duration) -> Self {
        self.elapsed = elapsed;
        self
    }
}
