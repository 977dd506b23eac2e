//! Compression statistics.
//!
//! Sizes are measured in bits:
//! - original size: `symbol_count * raw_bits_per_symbol`
//! - compressed size: length of the encoded bit sequence
//!
//! The compression rate is `compressed / original * 100`. It can exceed 100%
//! for tiny inputs or near-uniform distributions over a wide alphabet.

/// Statistics for one encoded batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompressionStats {
    /// Number of symbols encoded
    pub symbol_count: u64,

    /// Number of distinct symbols in the code table used
    pub distinct_symbols: usize,

    /// Width of one raw (unencoded) symbol
    pub raw_bits_per_symbol: u32,

    /// `symbol_count * raw_bits_per_symbol`
    pub original_bits: u64,

    /// Length of the encoded output
    pub compressed_bits: u64,
}

impl CompressionStats {
    pub fn new(
        symbol_count: u64,
        distinct_symbols: usize,
        raw_bits_per_symbol: u32,
        compressed_bits: u64,
    ) -> Self {
        Self {
            symbol_count,
            distinct_symbols,
            raw_bits_per_symbol,
            original_bits: symbol_count * u64::from(raw_bits_per_symbol),
            compressed_bits,
        }
    }

    /// Compressed size as a percentage of the original size.
    ///
    /// Returns 0.0 if nothing was encoded.
    pub fn ratio_pct(&self) -> f64 {
        if self.original_bits == 0 {
            0.0
        } else {
            self.compressed_bits as f64 / self.original_bits as f64 * 100.0
        }
    }

    /// Percentage of the original size saved. Negative when the output grew.
    pub fn space_saving_pct(&self) -> f64 {
        if self.original_bits == 0 {
            0.0
        } else {
            100.0 - self.ratio_pct()
        }
    }

    /// Mean encoded bits per input symbol.
    pub fn mean_code_length(&self) -> f64 {
        if self.symbol_count == 0 {
            0.0
        } else {
            self.compressed_bits as f64 / self.symbol_count as f64
        }
    }

    /// Print a human-readable summary to stdout.
    pub fn print_summary(&self) {
        println!("=== Compression ===");
        println!("Original size: {} bits", self.original_bits);
        println!("Compressed size: {} bits", self.compressed_bits);
        println!("Compression rate: {:.2}%", self.ratio_pct());
        println!();
        println!("Symbols: {} ({} distinct)", self.symbol_count, self.distinct_symbols);
        println!(
            "Mean code length: {:.3} bits (raw {} bits)",
            self.mean_code_length(),
            self.raw_bits_per_symbol
        );
        println!("Space saving: {:.2}%", self.space_saving_pct());
        println!();
    }

    /// Export statistics as a simple text format (for parsing/testing).
    pub fn export_text(&self) -> String {
        format!(
            "symbol_count={}\n\
             distinct_symbols={}\n\
             raw_bits_per_symbol={}\n\
             original_bits={}\n\
             compressed_bits={}\n\
             ratio_pct={:.4}\n",
            self.symbol_count,
            self.distinct_symbols,
            self.raw_bits_per_symbol,
            self.original_bits,
            self.compressed_bits,
            self.ratio_pct(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_original_bits() {
        let stats = CompressionStats::new(6, 3, 8, 9);
        assert_eq!(stats.original_bits, 48);
        assert_eq!(stats.compressed_bits, 9);
    }

    #[test]
    fn test_ratio() {
        let stats = CompressionStats::new(3, 1, 8, 3);
        assert_eq!(stats.ratio_pct(), 12.5);
        assert_eq!(stats.space_saving_pct(), 87.5);
        assert_eq!(stats.mean_code_length(), 1.0);
    }

    #[test]
    fn test_ratio_above_hundred() {
        // Three distinct symbols cannot all get 1-bit codes
        let stats = CompressionStats::new(4, 3, 1, 6);
        assert_eq!(stats.ratio_pct(), 150.0);
        assert!(stats.space_saving_pct() < 0.0);
    }

    #[test]
    fn test_empty_batch() {
        let stats = CompressionStats::new(0, 2, 8, 0);
        assert_eq!(stats.ratio_pct(), 0.0);
        assert_eq!(stats.mean_code_length(), 0.0);
    }

    #[test]
    fn test_export_text() {
        let stats = CompressionStats::new(6, 3, 8, 9);
        let text = stats.export_text();

        assert!(text.contains("original_bits=48\n"));
        assert!(text.contains("compressed_bits=9\n"));
        assert!(text.contains("ratio_pct=18.7500\n"));
    }
}
