//! # huffpress
//!
//! Lossless prefix-code (Huffman) compression over any ordered, hashable
//! symbol type.
//!
//! ## Quick Start
//!
//! ```rust
//! use huffpress::{compress_text, decompress_text, validate_integrity};
//!
//! let text = "abracadabra";
//! let compressed = compress_text(text)?;
//! println!("{} -> {} bits", compressed.stats.original_bits, compressed.encoded.len());
//!
//! // The tree is the only state the decoder needs.
//! let recovered = decompress_text(&compressed.encoded, compressed.tree.as_ref())?;
//! assert!(validate_integrity(text.as_bytes(), recovered.as_bytes()));
//! # Ok::<(), huffpress::HuffmanError>(())
//! ```
//!
//! Lower-level pieces ([`FrequencyTable`], [`HuffmanTree`], [`CodeBook`],
//! [`HuffmanCodec`]) are exported for callers that want to reuse a tree.

pub mod codebook;
pub mod compressor;
pub mod config;
pub mod encoded;
pub mod error;
pub mod frequency;
pub mod huffman_codec;
pub mod hufftree;
pub mod stats;
pub mod symbol;

// Internal modules - not part of public API
mod bit_vec;
mod min_heap;

// Re-export main types for convenience
pub use codebook::{Code, CodeBook};
pub use compressor::{
    compress, compress_bytes, compress_text, compute_frequencies, decompress, decompress_text,
    validate_integrity, Compressed, Compressor, Decompressed,
};
pub use config::CodecConfig;
pub use encoded::EncodedOutput;
pub use error::{HuffmanError, Result};
pub use frequency::FrequencyTable;
pub use huffman_codec::HuffmanCodec;
pub use hufftree::{HuffNode, HuffmanTree, InternalNode};
pub use stats::Statistics;
pub use symbol::Symbol;
