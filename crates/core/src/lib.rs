//! pixel-huffman-core: Huffman code construction and encoding
//!
//! This library turns a batch of discrete symbols (typically 8-bit grayscale
//! pixel intensities) into a prefix-free Huffman code and the encoded bit
//! stream, along with compression statistics.
//!
//! # Architecture
//!
//! Data flows strictly forward through one module per stage:
//! - `frequency`: symbol occurrence counting
//! - `tree`: Huffman tree construction by minimal-pair merging
//! - `codes`: code table generation from root-to-leaf paths
//! - `encoder`: codeword concatenation into packed bits
//! - `bitio`: MSB-first bit packing
//! - `stats`: sizes and compression rate
//! - `pipeline`: all of the above in one call
//!
//! # Example
//! ```
//! use pixel_huffman_core::{compress, BYTE_SYMBOL_BITS};
//!
//! let report = compress(&[0u8, 0, 0, 1, 1, 2], BYTE_SYMBOL_BITS).unwrap();
//! assert_eq!(report.encoded.original_bits(), 48);
//! assert_eq!(report.encoded.compressed_bits(), 9);
//! ```
//!
//! # Design Principles
//!
//! - **No panics**: All errors are structured and recoverable
//! - **Stateless**: Every operation is a pure function of its arguments
//! - **Deterministic**: Equal inputs always produce identical code tables

pub mod bitio;
pub mod codes;
pub mod encoder;
pub mod error;
pub mod frequency;
pub mod pipeline;
pub mod stats;
pub mod tree;

// Re-export commonly used types
pub use codes::{generate_codes, CodeTable, Codeword};
pub use encoder::{encode, EncodedOutput, BYTE_SYMBOL_BITS};
pub use error::{Error, HuffmanError, Result};
pub use frequency::{count_frequencies, FrequencyMap};
pub use pipeline::{compress, CompressionReport};
pub use stats::CompressionStats;
pub use tree::{build_tree, HuffmanNode, HuffmanTree};
