use tracing::trace;

use crate::codebook::CodeBook;
use crate::encoded::EncodedOutput;
use crate::error::{HuffmanError, Result};
use crate::hufftree::{HuffNode, HuffmanTree};
use crate::symbol::Symbol;

/// Concatenates the code of every symbol in input order.
pub fn encode<S: Symbol>(symbols: &[S], codebook: &CodeBook<S>) -> Result<EncodedOutput> {
    let mut encoded = EncodedOutput::with_capacity(symbols.len());
    for (position, symbol) in symbols.iter().enumerate() {
        let code = codebook.get(symbol).ok_or_else(|| HuffmanError::UnknownSymbol {
            symbol: format!("{:?}", symbol),
            position,
        })?;
        encoded.push_code(code);
    }
    trace!(symbols = symbols.len(), bits = encoded.len(), "encoded");
    Ok(encoded)
}

/// Walks `tree` digit by digit, emitting a symbol at every leaf.
///
/// A single-leaf tree carries no branching, so each digit stands for one
/// occurrence of its symbol whatever its value. Otherwise the stream has to
/// end on a symbol boundary or decoding fails with `TruncatedCode`.
pub fn decode<S: Symbol>(encoded: &EncodedOutput, tree: &HuffmanTree<S>) -> Result<Vec<S>> {
    let root = match tree {
        HuffmanTree::SingleLeaf { symbol, .. } => return Ok(vec![symbol.clone(); encoded.len()]),
        HuffmanTree::Branching(root) => root,
    };

    let mut result = Vec::new();
    let mut current = root;
    // digits consumed since the last emitted symbol
    let mut pending = 0;

    for bit in encoded.iter() {
        pending += 1;
        match current.child(bit) {
            HuffNode::Leaf { symbol, .. } => {
                result.push(symbol.clone());
                current = root;
                pending = 0;
            }
            HuffNode::Internal(inner) => current = inner,
        }
    }

    if pending > 0 {
        return Err(HuffmanError::TruncatedCode {
            bit_count: encoded.len(),
            pending,
        });
    }
    trace!(bits = encoded.len(), symbols = result.len(), "decoded");
    Ok(result)
}

/// A tree paired with the codebook derived from it.
#[derive(Debug, Clone)]
pub struct HuffmanCodec<S: Symbol> {
    tree: HuffmanTree<S>,
    codebook: CodeBook<S>,
}

impl<S: Symbol> HuffmanCodec<S> {
    pub fn new(tree: HuffmanTree<S>) -> Self {
        let codebook = CodeBook::from_tree(&tree);
        HuffmanCodec { tree, codebook }
    }

    pub fn from_symbols(symbols: &[S]) -> Result<Self> {
        Ok(Self::new(HuffmanTree::from_symbols(symbols)?))
    }

    pub fn tree(&self) -> &HuffmanTree<S> {
        &self.tree
    }

    pub fn codebook(&self) -> &CodeBook<S> {
        &self.codebook
    }

    pub fn into_parts(self) -> (HuffmanTree<S>, CodeBook<S>) {
        (self.tree, self.codebook)
    }

    pub fn encode(&self, symbols: &[S]) -> Result<EncodedOutput> {
        encode(symbols, &self.codebook)
    }

    pub fn decode(&self, encoded: &EncodedOutput) -> Result<Vec<S>> {
        decode(encoded, &self.tree)
    }
}
