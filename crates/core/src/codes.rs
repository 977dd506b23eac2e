//! Code table generation.
//!
//! Walks a [`HuffmanTree`] depth-first and records the root-to-leaf path of
//! every symbol: a left edge appends `0`, a right edge appends `1`.
//!
//! A tree made of a single leaf has no edges at all. That symbol is given the
//! one-bit placeholder code `0` so that every codeword is non-empty.

use std::collections::BTreeMap;
use std::fmt;

use crate::frequency::FrequencyMap;
use crate::tree::{HuffmanNode, HuffmanTree};

/// A non-empty sequence of bits, first bit first.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Codeword {
    bits: Vec<bool>,
}

impl Codeword {
    /// Build a codeword from bits. Returns `None` for an empty slice.
    pub fn from_bits(bits: &[bool]) -> Option<Self> {
        if bits.is_empty() {
            None
        } else {
            Some(Self { bits: bits.to_vec() })
        }
    }

    pub fn bits(&self) -> &[bool] {
        &self.bits
    }

    pub fn len(&self) -> usize {
        self.bits.len()
    }

    /// Always false: codewords carry at least one bit.
    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// True if `self` is a prefix of `other` (including equality).
    pub fn is_prefix_of(&self, other: &Codeword) -> bool {
        other.bits.starts_with(&self.bits)
    }

    fn extended(&self, bit: bool) -> Self {
        let mut bits = Vec::with_capacity(self.bits.len() + 1);
        bits.extend_from_slice(&self.bits);
        bits.push(bit);
        Self { bits }
    }
}

impl fmt::Display for Codeword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &bit in &self.bits {
            f.write_str(if bit { "1" } else { "0" })?;
        }
        Ok(())
    }
}

/// Mapping from symbol to codeword. Prefix-free by construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeTable<S> {
    codes: BTreeMap<S, Codeword>,
}

impl<S: Ord> CodeTable<S> {
    pub fn get(&self, symbol: &S) -> Option<&Codeword> {
        self.codes.get(symbol)
    }

    /// Total encoded length in bits of an input with these frequencies:
    /// `sum(freq(s) * len(code(s)))`.
    ///
    /// Symbols of `freqs` missing from the table contribute nothing.
    /// Saturates at `u64::MAX`.
    pub fn weighted_length(&self, freqs: &FrequencyMap<S>) -> u64 {
        freqs
            .iter()
            .filter_map(|(symbol, count)| {
                self.get(symbol).map(|code| count.saturating_mul(code.len() as u64))
            })
            .fold(0u64, u64::saturating_add)
    }
}

impl<S> CodeTable<S> {
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// Iterate `(symbol, codeword)` in ascending symbol order.
    pub fn iter(&self) -> impl Iterator<Item = (&S, &Codeword)> + '_ {
        self.codes.iter()
    }

    /// Length of the longest codeword, 0 for an empty table.
    pub fn max_len(&self) -> usize {
        self.codes.values().map(Codeword::len).max().unwrap_or(0)
    }

    /// Check that no codeword is a prefix of another.
    pub fn is_prefix_free(&self) -> bool {
        // In lexicographic bit order a prefix sorts directly before the codes
        // it prefixes, so comparing neighbours is enough.
        let mut sorted: Vec<&[bool]> = self.codes.values().map(Codeword::bits).collect();
        sorted.sort_unstable();
        sorted.windows(2).all(|pair| !pair[1].starts_with(pair[0]))
    }
}

/// Produce the code table of `tree`.
pub fn generate_codes<S: Ord + Clone>(tree: &HuffmanTree<S>) -> CodeTable<S> {
    let codes = match tree.root() {
        HuffmanNode::Leaf { symbol, .. } => {
            let mut codes = BTreeMap::new();
            codes.insert(symbol.clone(), Codeword { bits: vec![false] });
            codes
        }
        root => walk(root, Codeword { bits: Vec::new() }),
    };

    log::debug!(
        "generated {} codewords, longest {} bits",
        codes.len(),
        codes.values().map(Codeword::len).max().unwrap_or(0)
    );

    CodeTable { codes }
}

/// Codes of every leaf under `node`, given the path that leads to it.
fn walk<S: Ord + Clone>(node: &HuffmanNode<S>, prefix: Codeword) -> BTreeMap<S, Codeword> {
    match node {
        HuffmanNode::Leaf { symbol, .. } => {
            let mut codes = BTreeMap::new();
            codes.insert(symbol.clone(), prefix);
            codes
        }
        HuffmanNode::Internal { left, right, .. } => {
            let mut codes = walk(left, prefix.extended(false));
            let mut right_codes = walk(right, prefix.extended(true));
            codes.append(&mut right_codes);
            codes
        }
    }
}
