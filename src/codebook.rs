use std::collections::hash_map::{self, HashMap};
use std::fmt;

use crate::hufftree::{HuffNode, HuffmanTree};
use crate::symbol::Symbol;

/// The path from the root to a leaf: `false` for left, `true` for right.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Code(Vec<bool>);

impl Code {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn bits(&self) -> &[bool] {
        &self.0
    }

    pub fn is_prefix_of(&self, other: &Code) -> bool {
        other.0.starts_with(&self.0)
    }

    fn extended(&self, bit: bool) -> Code {
        let mut bits = Vec::with_capacity(self.0.len() + 1);
        bits.extend_from_slice(&self.0);
        bits.push(bit);
        Code(bits)
    }
}

impl From<Vec<bool>> for Code {
    fn from(bits: Vec<bool>) -> Self {
        Code(bits)
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &bit in &self.0 {
            f.write_str(if bit { "1" } else { "0" })?;
        }
        Ok(())
    }
}

/// Symbol to code mapping derived from one tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeBook<S: Symbol> {
    codes: HashMap<S, Code>,
}

impl<S: Symbol> CodeBook<S> {
    pub fn from_tree(tree: &HuffmanTree<S>) -> Self {
        let mut codes = HashMap::new();
        match tree {
            // Nothing to descend into; an empty code could not be decoded.
            HuffmanTree::SingleLeaf { symbol, .. } => {
                codes.insert(symbol.clone(), Code(vec![false]));
            }
            HuffmanTree::Branching(root) => {
                let mut stack = vec![
                    (root.right(), Code(vec![true])),
                    (root.left(), Code(vec![false])),
                ];
                while let Some((node, code)) = stack.pop() {
                    match node {
                        HuffNode::Leaf { symbol, .. } => {
                            codes.insert(symbol.clone(), code);
                        }
                        HuffNode::Internal(inner) => {
                            stack.push((inner.right(), code.extended(true)));
                            stack.push((inner.left(), code.extended(false)));
                        }
                    }
                }
            }
        }
        CodeBook { codes }
    }

    pub fn get(&self, symbol: &S) -> Option<&Code> {
        self.codes.get(symbol)
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    pub fn iter(&self) -> hash_map::Iter<'_, S, Code> {
        self.codes.iter()
    }

    /// Entries in ascending symbol order.
    pub fn sorted(&self) -> Vec<(&S, &Code)> {
        let mut entries: Vec<_> = self.codes.iter().collect();
        entries.sort_by(|a, b| a.0.cmp(b.0));
        entries
    }

    /// Unweighted mean of the code lengths; 0 for an empty book.
    pub fn average_code_length(&self) -> f64 {
        if self.codes.is_empty() {
            return 0.0;
        }
        let total: usize = self.codes.values().map(Code::len).sum();
        total as f64 / self.codes.len() as f64
    }

    pub fn is_prefix_free(&self) -> bool {
        // In lexicographic order a prefix sorts directly before some code it prefixes.
        let mut codes: Vec<&Code> = self.codes.values().collect();
        codes.sort();
        codes.windows(2).all(|pair| !pair[0].is_prefix_of(pair[1]))
    }
}

impl<S: Symbol> Default for CodeBook<S> {
    fn default() -> Self {
        CodeBook { codes: HashMap::new() }
    }
}
