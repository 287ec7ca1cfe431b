use thiserror::Error;

pub type Result<T> = std::result::Result<T, HuffmanError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HeapErr {
    #[error("heap index {0} out of range for heap of size {1}")]
    KeyError(usize, usize),
    #[error("extract from empty heap")]
    HeapUnderflow,
}

/// Errors reported by tree construction, encoding and decoding.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HuffmanError {
    #[error("cannot build a tree from an empty alphabet")]
    EmptyAlphabet,

    #[error("symbol {symbol} at position {position} has no code")]
    UnknownSymbol { symbol: String, position: usize },

    #[error("encoded stream of {bit_count} bits ends {pending} bits into a code")]
    TruncatedCode { bit_count: usize, pending: usize },

    #[error("invalid digit {found:?} at position {position}, expected '0' or '1'")]
    InvalidDigit { position: usize, found: char },

    #[error("{bytes} bytes cannot hold {bit_count} bits")]
    InvalidLength { bit_count: usize, bytes: usize },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("heap error: {0}")]
    Heap(#[from] HeapErr),
}
