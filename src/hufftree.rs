use std::cmp::Ordering;

use tracing::{debug, trace};

use crate::error::{HuffmanError, Result};
use crate::frequency::FrequencyTable;
use crate::min_heap::MinHeap;
use crate::symbol::Symbol;

/// A node below the root of a branching tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HuffNode<S> {
    Leaf {
        weight: usize,
        symbol: S,
    },
    Internal(InternalNode<S>),
}

impl<S> HuffNode<S> {
    pub fn weight(&self) -> usize {
        match self {
            HuffNode::Leaf { weight, .. } => *weight,
            HuffNode::Internal(node) => node.weight,
        }
    }
}

/// A node with exactly two owned children. Its weight is the sum of theirs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InternalNode<S> {
    weight: usize,
    left: Box<HuffNode<S>>,
    right: Box<HuffNode<S>>,
}

impl<S> InternalNode<S> {
    fn merge(left: HuffNode<S>, right: HuffNode<S>) -> Self {
        InternalNode {
            weight: left.weight() + right.weight(),
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn weight(&self) -> usize {
        self.weight
    }

    pub fn left(&self) -> &HuffNode<S> {
        &self.left
    }

    pub fn right(&self) -> &HuffNode<S> {
        &self.right
    }

    /// The child reached by following one digit: `false` is left, `true` is right.
    pub fn child(&self, bit: bool) -> &HuffNode<S> {
        if bit { &self.right } else { &self.left }
    }

    /// Depth-first walk over every descendant, left before right.
    pub(crate) fn walk(&self) -> Walk<'_, S> {
        Walk {
            stack: vec![(self.right(), 1), (self.left(), 1)],
        }
    }
}

/// Yields `(node, depth)` pairs; the walk's own root sits at depth 0 and is not yielded.
pub(crate) struct Walk<'a, S> {
    stack: Vec<(&'a HuffNode<S>, usize)>,
}

impl<'a, S> Iterator for Walk<'a, S> {
    type Item = (&'a HuffNode<S>, usize);

    fn next(&mut self) -> Option<Self::Item> {
        let (node, depth) = self.stack.pop()?;
        if let HuffNode::Internal(inner) = node {
            self.stack.push((inner.right(), depth + 1));
            self.stack.push((inner.left(), depth + 1));
        }
        Some((node, depth))
    }
}

/// A prefix-code tree built from symbol frequencies.
///
/// A one-symbol alphabet has no branching at all, so it is kept as its own
/// variant and every consumer has to handle it explicitly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HuffmanTree<S> {
    SingleLeaf {
        symbol: S,
        weight: usize,
    },
    Branching(InternalNode<S>),
}

// Priority entry for the builder. `seq` is unique per entry, which makes the
// extraction order a pure function of the frequency table.
struct HeapEntry<S> {
    weight: usize,
    seq: usize,
    node: HuffNode<S>,
}

impl<S> PartialEq for HeapEntry<S> {
    fn eq(&self, other: &Self) -> bool {
        self.weight == other.weight && self.seq == other.seq
    }
}

impl<S> Eq for HeapEntry<S> {}

impl<S> PartialOrd for HeapEntry<S> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<S> Ord for HeapEntry<S> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.weight.cmp(&other.weight)
            .then_with(|| self.seq.cmp(&other.seq))
    }
}

impl<S: Symbol> HuffmanTree<S> {
    pub fn from_symbols(symbols: &[S]) -> Result<Self> {
        HuffmanTree::from_frequencies(&FrequencyTable::from_symbols(symbols))
    }

    /// Greedy weighted merge. Ties go to the lower sequence number: leaves are
    /// numbered in ascending symbol order, merged nodes after them in creation
    /// order. The first node extracted of each pair becomes the left child.
    pub fn from_frequencies(frequencies: &FrequencyTable<S>) -> Result<Self> {
        let tree = match frequencies.len() {
            0 => return Err(HuffmanError::EmptyAlphabet),
            1 => {
                let (symbol, weight) = frequencies.iter()
                    .next()
                    .ok_or(HuffmanError::EmptyAlphabet)?;
                HuffmanTree::SingleLeaf { symbol: symbol.clone(), weight: *weight }
            }
            _ => {
                let entries: Vec<HeapEntry<S>> = frequencies.iter()
                    .enumerate()
                    .map(|(seq, (symbol, &weight))| HeapEntry {
                        weight,
                        seq,
                        node: HuffNode::Leaf { weight, symbol: symbol.clone() },
                    })
                    .collect();
                let next_seq = entries.len();
                let heap = MinHeap::build(entries)?;
                HuffmanTree::Branching(Self::build_from_heap(heap, next_seq)?)
            }
        };

        debug!(
            distinct = tree.leaf_count(),
            weight = tree.weight(),
            height = tree.height(),
            "built huffman tree"
        );
        Ok(tree)
    }

    fn build_from_heap(mut heap: MinHeap<HeapEntry<S>>, mut next_seq: usize) -> Result<InternalNode<S>> {
        loop {
            let x = heap.extract_min()?;
            let y = heap.extract_min()?;
            trace!(left = x.weight, right = y.weight, "merging nodes");

            let z = InternalNode::merge(x.node, y.node);
            if heap.heap_size() == 0 {
                return Ok(z);
            }
            heap.insert(HeapEntry {
                weight: z.weight,
                seq: next_seq,
                node: HuffNode::Internal(z),
            });
            next_seq += 1;
        }
    }
}

impl<S> HuffmanTree<S> {
    /// Total weight, equal to the length of the input the tree was built from.
    pub fn weight(&self) -> usize {
        match self {
            HuffmanTree::SingleLeaf { weight, .. } => *weight,
            HuffmanTree::Branching(root) => root.weight,
        }
    }

    pub fn is_single_leaf(&self) -> bool {
        matches!(self, HuffmanTree::SingleLeaf { .. })
    }

    /// The branching root, or `None` for a single-leaf tree.
    pub fn root(&self) -> Option<&InternalNode<S>> {
        match self {
            HuffmanTree::SingleLeaf { .. } => None,
            HuffmanTree::Branching(root) => Some(root),
        }
    }

    /// Longest root-to-leaf edge count.
    pub fn height(&self) -> usize {
        match self {
            HuffmanTree::SingleLeaf { .. } => 0,
            HuffmanTree::Branching(root) => root.walk()
                .map(|(_, depth)| depth)
                .max()
                .unwrap_or(0),
        }
    }

    pub fn leaf_count(&self) -> usize {
        match self {
            HuffmanTree::SingleLeaf { .. } => 1,
            HuffmanTree::Branching(root) => root.walk()
                .filter(|(node, _)| matches!(node, HuffNode::Leaf { .. }))
                .count(),
        }
    }

    pub fn internal_count(&self) -> usize {
        match self {
            HuffmanTree::SingleLeaf { .. } => 0,
            HuffmanTree::Branching(root) => 1 + root.walk()
                .filter(|(node, _)| matches!(node, HuffNode::Internal(_)))
                .count(),
        }
    }
}
