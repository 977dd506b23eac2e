//! Bit-level packing for encoded output.
//!
//! [`BitWriter`] appends bits MSB-first into a byte buffer and produces a
//! [`BitString`]: the packed bytes plus the exact number of meaningful bits.
//!
//! # Padding Rules
//! - The final partial byte is padded with trailing zeros
//! - Padding bits are never counted in `BitString::bit_len`
//!
//! # Example
//! ```
//! use pixel_huffman_core::bitio::BitWriter;
//!
//! let mut writer = BitWriter::new();
//! writer.write_bit(true);
//! writer.write_bit(false);
//! writer.write_bit(true);
//! // 101 -> padded to 10100000
//!
//! let bits = writer.finish();
//! assert_eq!(bits.as_bytes(), &[0b1010_0000]);
//! assert_eq!(bits.bit_len(), 3);
//! assert_eq!(bits.to_bit_string(), "101");
//! ```

use crate::codes::Codeword;

/// Writes bits MSB-first into a byte buffer.
///
/// # Invariants
/// - `bit_count` is always < 8
/// - bits of `bit_buffer` below the current position are zero
#[derive(Debug, Clone, Default)]
pub struct BitWriter {
    /// Completed bytes
    bytes: Vec<u8>,
    /// Accumulator for the current partial byte (MSB-aligned)
    bit_buffer: u8,
    /// Number of bits in bit_buffer (0-7)
    bit_count: u8,
}

impl BitWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a writer expecting roughly `bits` bits of output.
    pub fn with_capacity(bits: usize) -> Self {
        Self {
            bytes: Vec::with_capacity(bits.div_ceil(8)),
            bit_buffer: 0,
            bit_count: 0,
        }
    }

    pub fn write_bit(&mut self, bit: bool) {
        if bit {
            self.bit_buffer |= 0x80 >> self.bit_count;
        }
        self.bit_count += 1;

        if self.bit_count == 8 {
            self.bytes.push(self.bit_buffer);
            self.bit_buffer = 0;
            self.bit_count = 0;
        }
    }

    /// Append every bit of `code`, first bit first.
    pub fn write_codeword(&mut self, code: &Codeword) {
        for &bit in code.bits() {
            self.write_bit(bit);
        }
    }

    /// Number of bits written so far.
    pub fn bit_len(&self) -> usize {
        self.bytes.len() * 8 + self.bit_count as usize
    }

    /// Finish writing, padding the final partial byte with zeros.
    pub fn finish(mut self) -> BitString {
        let bit_len = self.bit_len();
        if self.bit_count > 0 {
            self.bytes.push(self.bit_buffer);
        }
        BitString {
            bytes: self.bytes,
            bit_len,
        }
    }
}

/// A packed, immutable bit sequence.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BitString {
    bytes: Vec<u8>,
    bit_len: usize,
}

impl BitString {
    /// Packed bytes, MSB-first, zero padded to a byte boundary.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Number of meaningful bits (excludes padding).
    pub fn bit_len(&self) -> usize {
        self.bit_len
    }

    pub fn is_empty(&self) -> bool {
        self.bit_len == 0
    }

    /// Bit at `index`, or `None` past the end.
    pub fn get(&self, index: usize) -> Option<bool> {
        if index >= self.bit_len {
            return None;
        }
        let byte = self.bytes[index / 8];
        Some(byte & (0x80 >> (index % 8)) != 0)
    }

    pub fn iter(&self) -> impl Iterator<Item = bool> + '_ {
        (0..self.bit_len).filter_map(move |i| self.get(i))
    }

    /// Render as a string of `'0'` and `'1'` characters.
    pub fn to_bit_string(&self) -> String {
        self.iter().map(|bit| if bit { '1' } else { '0' }).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_str(bits: &str) -> BitString {
        let mut writer = BitWriter::new();
        for c in bits.chars() {
            writer.write_bit(c == '1');
        }
        writer.finish()
    }

    #[test]
    fn test_single_byte() {
        let bits = write_str("10110011");
        assert_eq!(bits.as_bytes(), &[0b1011_0011]);
        assert_eq!(bits.bit_len(), 8);
    }

    #[test]
    fn test_padding() {
        let bits = write_str("111");
        assert_eq!(bits.as_bytes(), &[0b1110_0000]);
        assert_eq!(bits.bit_len(), 3);
    }

    #[test]
    fn test_multi_byte() {
        let bits = write_str("1111000010");
        assert_eq!(bits.as_bytes(), &[0b1111_0000, 0b1000_0000]);
        assert_eq!(bits.to_bit_string(), "1111000010");
    }

    #[test]
    fn test_empty() {
        let bits = BitWriter::new().finish();
        assert!(bits.is_empty());
        assert!(bits.as_bytes().is_empty());
        assert_eq!(bits.to_bit_string(), "");
    }

    #[test]
    fn test_get_past_end() {
        let bits = write_str("1");
        assert_eq!(bits.get(0), Some(true));
        // Padding bits are not readable
        assert_eq!(bits.get(1), None);
    }

    #[test]
    fn test_write_codeword() {
        let code = Codeword::from_bits(&[true, false, true]).unwrap();
        let mut writer = BitWriter::with_capacity(6);
        writer.write_codeword(&code);
        writer.write_codeword(&code);
        assert_eq!(writer.bit_len(), 6);

        let bits = writer.finish();
        assert_eq!(bits.to_bit_string(), "101101");
        assert_eq!(bits.as_bytes(), &[0b1011_0100]);
    }
}
