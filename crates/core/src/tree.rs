//! Huffman tree construction.
//!
//! Builds a single binary prefix-code tree from a [`FrequencyMap`] by
//! repeatedly merging the two lightest nodes.
//!
//! # Merge Order
//!
//! The priority queue orders entries by an explicit `(weight, sequence)` key,
//! never by the nodes themselves:
//! - leaves get sequence numbers in ascending symbol order
//! - every merged node gets the next unused sequence number
//! - the lightest entry is extracted first; equal weights go to the lower
//!   sequence number
//! - the first extracted node becomes the left child
//!
//! Identical frequency maps therefore always produce identical trees.

use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::fmt::Debug;

use crate::error::{HuffmanError, Result};
use crate::frequency::FrequencyMap;

/// A node of a Huffman tree.
///
/// Children are owned, so a tree is acyclic by construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HuffmanNode<S> {
    Leaf {
        symbol: S,
        weight: u64,
    },
    /// `weight` is always the sum of the children's weights
    Internal {
        weight: u64,
        left: Box<HuffmanNode<S>>,
        right: Box<HuffmanNode<S>>,
    },
}

impl<S> HuffmanNode<S> {
    pub fn weight(&self) -> u64 {
        match self {
            HuffmanNode::Leaf { weight, .. } => *weight,
            HuffmanNode::Internal { weight, .. } => *weight,
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, HuffmanNode::Leaf { .. })
    }

    fn merge(left: Self, right: Self) -> Self {
        HuffmanNode::Internal {
            weight: left.weight() + right.weight(),
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    fn leaf_count(&self) -> usize {
        match self {
            HuffmanNode::Leaf { .. } => 1,
            HuffmanNode::Internal { left, right, .. } => left.leaf_count() + right.leaf_count(),
        }
    }

    fn depth(&self) -> usize {
        match self {
            HuffmanNode::Leaf { .. } => 0,
            HuffmanNode::Internal { left, right, .. } => 1 + left.depth().max(right.depth()),
        }
    }
}

/// An immutable Huffman tree covering every symbol of a frequency map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HuffmanTree<S> {
    root: HuffmanNode<S>,
}

impl<S> HuffmanTree<S> {
    pub fn root(&self) -> &HuffmanNode<S> {
        &self.root
    }

    /// Total weight (the length of the input the tree was built from).
    pub fn weight(&self) -> u64 {
        self.root.weight()
    }

    /// Number of distinct symbols in the tree.
    pub fn leaf_count(&self) -> usize {
        self.root.leaf_count()
    }

    /// Length of the longest root-to-leaf path. Zero for a lone leaf.
    pub fn depth(&self) -> usize {
        self.root.depth()
    }
}

/// Priority key for a queued node. Only the key takes part in ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
struct MergeKey {
    weight: u64,
    sequence: usize,
}

/// A queued node, referenced by its slot in the builder's node vector.
#[derive(Debug, Clone, Copy)]
struct Queued {
    key: MergeKey,
    slot: usize,
}

// Implement ordering for the heap (min-heap: lightest, then oldest, first)
impl PartialEq for Queued {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for Queued {}

impl PartialOrd for Queued {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Queued {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering for min-heap
        other.key.cmp(&self.key)
    }
}

/// Working state of one tree build: node slots plus the merge queue.
struct Builder<S> {
    slots: Vec<Option<HuffmanNode<S>>>,
    queue: BinaryHeap<Queued>,
}

impl<S> Builder<S> {
    fn with_capacity(leaves: usize) -> Self {
        // n leaves produce n - 1 internal nodes
        let nodes = (2 * leaves).saturating_sub(1);
        Self {
            slots: Vec::with_capacity(nodes),
            queue: BinaryHeap::with_capacity(leaves),
        }
    }

    fn push(&mut self, node: HuffmanNode<S>) {
        let slot = self.slots.len();
        self.queue.push(Queued {
            key: MergeKey {
                weight: node.weight(),
                sequence: slot,
            },
            slot,
        });
        self.slots.push(Some(node));
    }

    fn pop(&mut self) -> Option<HuffmanNode<S>> {
        let queued = self.queue.pop()?;
        self.slots[queued.slot].take()
    }
}

/// Build a Huffman tree from a non-empty frequency map.
///
/// The map is consumed; it has no further use once the tree exists.
///
/// # Errors
/// Returns `HuffmanError::EmptyInput` if the map has no symbols.
pub fn build_tree<S: Ord + Clone + Debug>(freqs: FrequencyMap<S>) -> Result<HuffmanTree<S>> {
    if freqs.is_empty() {
        return Err(HuffmanError::EmptyInput.into());
    }

    let counts = freqs.into_inner();
    let mut builder = Builder::with_capacity(counts.len());
    for (symbol, weight) in counts {
        builder.push(HuffmanNode::Leaf { symbol, weight });
    }

    while builder.queue.len() > 1 {
        let (left, right) = match (builder.pop(), builder.pop()) {
            (Some(left), Some(right)) => (left, right),
            _ => return Err(HuffmanError::EmptyInput.into()),
        };
        log::trace!("merging weights {} + {}", left.weight(), right.weight());
        builder.push(HuffmanNode::merge(left, right));
    }

    let root = builder.pop().ok_or(HuffmanError::EmptyInput)?;
    let tree = HuffmanTree { root };

    log::debug!(
        "built huffman tree: {} leaves, depth {}, weight {}",
        tree.leaf_count(),
        tree.depth(),
        tree.weight()
    );

    Ok(tree)
}
