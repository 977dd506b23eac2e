//! Symbol stream encoding.
//!
//! Replaces each input symbol, in input order, by its codeword and packs the
//! concatenation into a [`BitString`]. Statistics are computed alongside.

use std::fmt::Debug;

use crate::bitio::{BitString, BitWriter};
use crate::codes::CodeTable;
use crate::error::{HuffmanError, Result};
use crate::stats::CompressionStats;

/// Raw width of byte-sized symbols such as 8-bit grayscale pixels.
pub const BYTE_SYMBOL_BITS: u32 = 8;

/// Encoded bits of one input batch plus its statistics.
#[derive(Debug, Clone, PartialEq)]
pub struct EncodedOutput {
    pub bits: BitString,
    pub stats: CompressionStats,
}

impl EncodedOutput {
    /// The encoded output as a string of `'0'` and `'1'` characters.
    pub fn to_bit_string(&self) -> String {
        self.bits.to_bit_string()
    }

    /// Packed encoded bytes (MSB-first, zero padded).
    pub fn as_bytes(&self) -> &[u8] {
        self.bits.as_bytes()
    }

    pub fn original_bits(&self) -> u64 {
        self.stats.original_bits
    }

    pub fn compressed_bits(&self) -> u64 {
        self.stats.compressed_bits
    }

    pub fn ratio_pct(&self) -> f64 {
        self.stats.ratio_pct()
    }
}

/// Encode `symbols` with `codes`.
///
/// `raw_bits_per_symbol` is the width of one unencoded symbol and is only
/// used for the statistics.
///
/// # Errors
/// - `HuffmanError::InvalidSymbolWidth` if `raw_bits_per_symbol` is 0
/// - `HuffmanError::UnknownSymbol` for the first symbol with no codeword
pub fn encode<S: Ord + Debug>(
    symbols: &[S],
    codes: &CodeTable<S>,
    raw_bits_per_symbol: u32,
) -> Result<EncodedOutput> {
    if raw_bits_per_symbol == 0 {
        return Err(HuffmanError::InvalidSymbolWidth(raw_bits_per_symbol).into());
    }

    let mut writer = BitWriter::with_capacity(symbols.len() * codes.max_len());
    for (position, symbol) in symbols.iter().enumerate() {
        let code = codes
            .get(symbol)
            .ok_or_else(|| HuffmanError::unknown_symbol(symbol, position))?;
        writer.write_codeword(code);
    }

    let bits = writer.finish();
    let stats = CompressionStats::new(
        symbols.len() as u64,
        codes.len(),
        raw_bits_per_symbol,
        bits.bit_len() as u64,
    );

    log::debug!(
        "encoded {} symbols into {} bits ({:.2}%)",
        stats.symbol_count,
        stats.compressed_bits,
        stats.ratio_pct()
    );

    Ok(EncodedOutput { bits, stats })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codes::generate_codes;
    use crate::error::Error;
    use crate::frequency::count_frequencies;
    use crate::tree::build_tree;

    fn table_for(input: &[u8]) -> CodeTable<u8> {
        generate_codes(&build_tree(count_frequencies(input).unwrap()).unwrap())
    }

    #[test]
    fn test_encode_three_symbols() {
        let input = [0u8, 0, 0, 1, 1, 2];
        let table = table_for(&input);
        let out = encode(&input, &table, BYTE_SYMBOL_BITS).unwrap();

        // 0 -> 0, 1 -> 11, 2 -> 10
        assert_eq!(out.to_bit_string(), "000111110");
        assert_eq!(out.original_bits(), 48);
        assert_eq!(out.compressed_bits(), 9);
        assert_eq!(out.as_bytes(), &[0b0001_1111, 0b0000_0000]);
    }

    #[test]
    fn test_encode_single_symbol() {
        let input = [5u8, 5, 5];
        let out = encode(&input, &table_for(&input), BYTE_SYMBOL_BITS).unwrap();

        assert_eq!(out.to_bit_string(), "000");
        assert_eq!(out.compressed_bits(), 3);
        assert_eq!(out.ratio_pct(), 12.5);
    }

    #[test]
    fn test_unknown_symbol() {
        let table = table_for(&[0, 1, 1]);
        let result = encode(&[0u8, 1, 9], &table, BYTE_SYMBOL_BITS);

        match result {
            Err(Error::Huffman(HuffmanError::UnknownSymbol { symbol, position })) => {
                assert_eq!(symbol, "9");
                assert_eq!(position, 2);
            }
            other => panic!("expected UnknownSymbol, got {other:?}"),
        }
    }

    #[test]
    fn test_zero_symbol_width() {
        let table = table_for(&[0, 1]);
        let result = encode(&[0u8, 1], &table, 0);
        assert!(matches!(
            result,
            Err(Error::Huffman(HuffmanError::InvalidSymbolWidth(0)))
        ));
    }

    #[test]
    fn test_subset_of_table() {
        let table = table_for(&[0, 1, 2, 3]);
        let out = encode(&[3u8, 3], &table, BYTE_SYMBOL_BITS).unwrap();

        assert_eq!(out.compressed_bits(), 4);
        assert_eq!(out.stats.distinct_symbols, 4);
    }

    #[test]
    fn test_empty_input() {
        let table = table_for(&[0, 1]);
        let out = encode(&[], &table, BYTE_SYMBOL_BITS).unwrap();

        assert_eq!(out.compressed_bits(), 0);
        assert_eq!(out.ratio_pct(), 0.0);
    }
}
