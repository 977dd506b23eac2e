//! Error types for the pixel-huffman system.
//!
//! Every core operation validates its inputs at the boundary and returns a
//! structured error instead of panicking. Operations are pure, so a failed
//! call can simply be repeated with corrected inputs.

use thiserror::Error;

/// Top-level error type for all operations in the system.
///
/// Each variant corresponds to a specific failure domain:
/// - Huffman: frequency counting, tree construction or encoding failures
/// - I/O: reading input rasters or writing encoded output
/// - Config: invalid harness configuration
#[derive(Debug, Error)]
pub enum Error {
    /// Huffman codec error (e.g., empty input, symbol missing from the table)
    #[error("huffman codec error: {0}")]
    Huffman(#[from] HuffmanError),

    /// File I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),
}

/// Huffman codec errors.
///
/// Symbols are carried as their `Debug` rendering so the error type does not
/// depend on the symbol type.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum HuffmanError {
    /// No symbols to count, or no frequencies to build a tree from
    #[error("empty input: cannot build a code from zero symbols")]
    EmptyInput,

    /// Symbol at `position` has no codeword in the table being used
    #[error("unknown symbol {symbol} at position {position}: not present in code table")]
    UnknownSymbol { symbol: String, position: usize },

    /// A precomputed frequency table contained a zero count
    #[error("symbol {symbol} has zero frequency")]
    ZeroFrequency { symbol: String },

    /// Precomputed counts sum to more than `u64::MAX`
    #[error("frequency counts overflow u64")]
    FrequencyOverflow,

    /// Raw symbol width must be at least one bit
    #[error("invalid raw symbol width: {0} bits")]
    InvalidSymbolWidth(u32),
}

impl HuffmanError {
    pub(crate) fn unknown_symbol<S: std::fmt::Debug>(symbol: &S, position: usize) -> Self {
        HuffmanError::UnknownSymbol {
            symbol: format!("{symbol:?}"),
            position,
        }
    }
}

/// Type alias for Result with our Error type
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_huffman_error_converts() {
        let err: Error = HuffmanError::EmptyInput.into();
        assert!(matches!(err, Error::Huffman(HuffmanError::EmptyInput)));
    }

    #[test]
    fn test_unknown_symbol_message() {
        let err = HuffmanError::unknown_symbol(&9u8, 2);
        assert_eq!(
            err.to_string(),
            "unknown symbol 9 at position 2: not present in code table"
        );
    }
}
