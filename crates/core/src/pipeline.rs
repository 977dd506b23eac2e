//! One-call compression of a symbol batch.
//!
//! Runs the full chain: count frequencies, build the tree, generate the code
//! table and encode. Nothing is cached between calls.

use std::fmt::Debug;

use crate::codes::{generate_codes, CodeTable};
use crate::encoder::{encode, EncodedOutput};
use crate::error::Result;
use crate::frequency::count_frequencies;
use crate::tree::build_tree;

/// Everything produced by compressing one batch.
#[derive(Debug, Clone)]
pub struct CompressionReport<S> {
    /// Code table built from the batch
    pub codes: CodeTable<S>,

    /// Encoded bits and statistics
    pub encoded: EncodedOutput,

    /// Shannon entropy of the batch, bits per symbol
    pub entropy_bits: f64,
}

/// Huffman-compress `symbols`, reporting sizes against a raw width of
/// `raw_bits_per_symbol`.
///
/// # Errors
/// - `HuffmanError::EmptyInput` if `symbols` is empty
/// - `HuffmanError::InvalidSymbolWidth` if `raw_bits_per_symbol` is 0
pub fn compress<S: Ord + Clone + Debug>(
    symbols: &[S],
    raw_bits_per_symbol: u32,
) -> Result<CompressionReport<S>> {
    let freqs = count_frequencies(symbols)?;
    let entropy_bits = freqs.entropy_bits();

    let tree = build_tree(freqs)?;
    let codes = generate_codes(&tree);
    let encoded = encode(symbols, &codes, raw_bits_per_symbol)?;

    log::info!(
        "compressed {} symbols: {} -> {} bits",
        encoded.stats.symbol_count,
        encoded.stats.original_bits,
        encoded.stats.compressed_bits
    );

    Ok(CompressionReport {
        codes,
        encoded,
        entropy_bits,
    })
}
