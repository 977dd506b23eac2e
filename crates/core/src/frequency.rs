//! Symbol frequency counting.
//!
//! A [`FrequencyMap`] records how often each distinct symbol occurs in an
//! input batch. It is built once per batch and handed to the tree builder.
//!
//! # Invariants
//! - Every count is at least 1
//! - Counts sum to the length of the counted input
//! - Iteration is in ascending symbol order, so everything derived from the
//!   map (tree shape, code table) is reproducible

use std::collections::BTreeMap;
use std::fmt::Debug;

use crate::error::{HuffmanError, Result};

/// Mapping from symbol to its (positive) occurrence count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrequencyMap<S> {
    counts: BTreeMap<S, u64>,
}

impl<S: Ord + Clone + Debug> FrequencyMap<S> {
    /// Build a map from precomputed `(symbol, count)` pairs.
    ///
    /// Repeated symbols are summed.
    ///
    /// # Errors
    /// - `HuffmanError::EmptyInput` if no pairs are given
    /// - `HuffmanError::ZeroFrequency` if any count is zero
    /// - `HuffmanError::FrequencyOverflow` if the counts sum past `u64::MAX`
    pub fn from_counts<I>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (S, u64)>,
    {
        let mut counts: BTreeMap<S, u64> = BTreeMap::new();
        // Tree weights never exceed the total, so bounding it here keeps
        // every later sum in range
        let mut total: u64 = 0;
        for (symbol, count) in pairs {
            if count == 0 {
                return Err(HuffmanError::ZeroFrequency {
                    symbol: format!("{symbol:?}"),
                }
                .into());
            }
            total = total.checked_add(count).ok_or(HuffmanError::FrequencyOverflow)?;
            let entry = counts.entry(symbol).or_insert(0);
            *entry = entry.checked_add(count).ok_or(HuffmanError::FrequencyOverflow)?;
        }

        if counts.is_empty() {
            return Err(HuffmanError::EmptyInput.into());
        }

        Ok(Self { counts })
    }

    /// Occurrence count for `symbol`, if it occurred at all.
    pub fn get(&self, symbol: &S) -> Option<u64> {
        self.counts.get(symbol).copied()
    }
}

impl<S> FrequencyMap<S> {
    /// Number of distinct symbols.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Always false for a map obtained through the public constructors.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all counts (the length of the counted input).
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    /// Iterate `(symbol, count)` in ascending symbol order.
    pub fn iter(&self) -> impl Iterator<Item = (&S, u64)> + '_ {
        self.counts.iter().map(|(s, &c)| (s, c))
    }

    /// Shannon entropy of the distribution in bits per symbol.
    ///
    /// This is the lower bound on the mean codeword length of any prefix code
    /// for this distribution. A single-symbol distribution has entropy 0.
    pub fn entropy_bits(&self) -> f64 {
        let total = self.total() as f64;
        if total == 0.0 {
            return 0.0;
        }
        self.counts
            .values()
            .map(|&c| {
                let p = c as f64 / total;
                -p * p.log2()
            })
            .sum()
    }

    pub(crate) fn into_inner(self) -> BTreeMap<S, u64> {
        self.counts
    }
}

/// Tally the occurrences of each distinct symbol in `symbols`.
///
/// # Errors
/// Returns `HuffmanError::EmptyInput` if `symbols` is empty.
pub fn count_frequencies<S: Ord + Clone + Debug>(symbols: &[S]) -> Result<FrequencyMap<S>> {
    if symbols.is_empty() {
        return Err(HuffmanError::EmptyInput.into());
    }

    let mut counts: BTreeMap<S, u64> = BTreeMap::new();
    for symbol in symbols {
        // Avoid cloning symbols we've already seen
        match counts.get_mut(symbol) {
            Some(count) => *count += 1,
            None => {
                counts.insert(symbol.clone(), 1);
            }
        }
    }

    log::debug!(
        "counted {} symbols, {} distinct",
        symbols.len(),
        counts.len()
    );

    Ok(FrequencyMap { counts })
}
