//! Configuration for the pixel-huffman application.
//!
//! Handles parsing command-line arguments and generating sensible defaults
//! (including randomized defaults that are reproducible with a seed).
//!
//! # Philosophy
//!
//! The tool should work with ZERO arguments: it then encodes a synthetic
//! grayscale image whose dimensions are drawn from the seed. Printing the
//! configuration shows the seed, so any run can be repeated exactly.

use pixel_huffman_core::BYTE_SYMBOL_BITS;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::path::PathBuf;

/// Widest raw symbol the statistics accept.
const MAX_BITS_PER_SYMBOL: u32 = 64;

/// Complete configuration for one compression run.
#[derive(Debug, Clone)]
pub struct Config {
    // === Files ===
    /// Raw 8-bit grayscale raster (None = generate a synthetic image)
    pub input_file: Option<PathBuf>,

    /// Where to write the packed encoded bits (None = don't write)
    pub output_file: Option<PathBuf>,

    // === Synthetic image ===
    /// Seed for the synthetic image and randomized defaults
    pub seed: u64,

    /// Synthetic image width in pixels
    pub width: usize,

    /// Synthetic image height in pixels
    pub height: usize,

    // === Encoding ===
    /// Width of one raw symbol, used for the original size
    pub bits_per_symbol: u32,

    // === Behavior ===
    /// Whether to print the resolved configuration
    pub print_config: bool,

    /// Whether to print the code table
    pub print_codes: bool,

    /// Whether to print the encoded 0/1 string
    pub print_bits: bool,

    /// Whether to print the statistics summary
    pub print_stats: bool,
}

impl Config {
    /// Parse configuration from command-line arguments (without the program name).
    ///
    /// If --seed is not provided, a time-based seed is used.
    pub fn from_args(args: &[String]) -> Result<Self, String> {
        let mut input_file: Option<PathBuf> = None;
        let mut output_file: Option<PathBuf> = None;
        let mut seed: Option<u64> = None;
        let mut width: Option<usize> = None;
        let mut height: Option<usize> = None;
        let mut bits_per_symbol: Option<u32> = None;
        let mut print_config = false;
        let mut print_codes = false;
        let mut print_bits = false;
        let mut print_stats = true;

        let mut i = 0;
        while i < args.len() {
            match args[i].as_str() {
                "--in" => {
                    let value = next_value(args, &mut i, "--in requires a path")?;
                    input_file = Some(PathBuf::from(value));
                }
                "--out" => {
                    let value = next_value(args, &mut i, "--out requires a path")?;
                    output_file = Some(PathBuf::from(value));
                }
                "--seed" => {
                    let value = next_value(args, &mut i, "--seed requires a number")?;
                    seed = Some(value.parse().map_err(|_| "invalid seed")?);
                }
                "--width" => {
                    let value = next_value(args, &mut i, "--width requires a number")?;
                    width = Some(value.parse().map_err(|_| "invalid width")?);
                }
                "--height" => {
                    let value = next_value(args, &mut i, "--height requires a number")?;
                    height = Some(value.parse().map_err(|_| "invalid height")?);
                }
                "--bits-per-symbol" => {
                    let value = next_value(args, &mut i, "--bits-per-symbol requires a number")?;
                    bits_per_symbol = Some(value.parse().map_err(|_| "invalid bits-per-symbol")?);
                }
                "--print-config" => {
                    print_config = true;
                }
                "--print-codes" => {
                    print_codes = true;
                }
                "--print-bits" => {
                    print_bits = true;
                }
                "--no-stats" => {
                    print_stats = false;
                }
                "--help" | "-h" => {
                    print_help();
                    std::process::exit(0);
                }
                _ => {
                    return Err(format!("unknown argument: {}", args[i]));
                }
            }
            i += 1;
        }

        // Determine seed (explicit or time-based)
        let seed = seed.unwrap_or_else(|| {
            use std::time::{SystemTime, UNIX_EPOCH};
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_millis() as u64)
                .unwrap_or(0)
        });

        // Generate defaults using seed
        let mut rng = ChaCha8Rng::seed_from_u64(seed);

        let config = Config {
            input_file,
            output_file,
            seed,
            width: width.unwrap_or_else(|| rng.gen_range(16..=128)),
            height: height.unwrap_or_else(|| rng.gen_range(16..=128)),
            bits_per_symbol: bits_per_symbol.unwrap_or(BYTE_SYMBOL_BITS),
            print_config,
            print_codes,
            print_bits,
            print_stats,
        };

        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), String> {
        if self.width == 0 || self.height == 0 {
            return Err(format!(
                "image dimensions must be non-zero, got {}x{}",
                self.width, self.height
            ));
        }
        if self.bits_per_symbol == 0 || self.bits_per_symbol > MAX_BITS_PER_SYMBOL {
            return Err(format!(
                "bits-per-symbol must be in 1..={}, got {}",
                MAX_BITS_PER_SYMBOL, self.bits_per_symbol
            ));
        }
        Ok(())
    }

    /// Print the configuration in human-readable form.
    pub fn print(&self) {
        println!("=== Configuration ===");
        match &self.input_file {
            Some(path) => println!("Input file:  {}", path.display()),
            None => println!("Input file:  (synthetic {}x{} image)", self.width, self.height),
        }
        match &self.output_file {
            Some(path) => println!("Output file: {}", path.display()),
            None => println!("Output file: (none)"),
        }
        println!();
        println!("Seed: {}", self.seed);
        println!("Raw symbol width: {} bits", self.bits_per_symbol);
        println!();
    }
}

/// Advance past a flag and return its value.
fn next_value<'a>(args: &'a [String], i: &mut usize, missing: &str) -> Result<&'a str, String> {
    *i += 1;
    args.get(*i)
        .map(String::as_str)
        .ok_or_else(|| missing.to_string())
}

fn print_help() {
    println!("pixel-huffman: Huffman-encode a grayscale raster and report compression");
    println!();
    println!("USAGE:");
    println!("    pixel-huffman [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("    --in <PATH>              Raw 8-bit grayscale raster (default: synthetic image)");
    println!("    --out <PATH>             Write packed encoded bits to PATH");
    println!("    --seed <N>               Random seed for determinism");
    println!();
    println!("    --width <N>              Synthetic image width (default: random 16-128)");
    println!("    --height <N>             Synthetic image height (default: random 16-128)");
    println!("    --bits-per-symbol <N>    Raw symbol width for statistics (default: 8)");
    println!();
    println!("    --print-config           Print resolved configuration");
    println!("    --print-codes            Print the code table");
    println!("    --print-bits             Print the encoded bit string");
    println!("    --no-stats               Don't print the statistics summary");
    println!("    --help, -h               Print this help");
    println!();
    println!("EXAMPLES:");
    println!("    pixel-huffman                                  # Synthetic image, random size");
    println!("    pixel-huffman --seed 42 --print-codes          # Deterministic run");
    println!("    pixel-huffman --in photo.gray --out photo.huff # Encode a raw raster");
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_args(&args(&["--seed", "7"])).unwrap();

        assert!(config.input_file.is_none());
        assert!(config.output_file.is_none());
        assert_eq!(config.bits_per_symbol, 8);
        assert!((16..=128).contains(&config.width));
        assert!((16..=128).contains(&config.height));
        assert!(config.print_stats);
        assert!(!config.print_codes);
    }

    #[test]
    fn test_seeded_defaults_are_reproducible() {
        let a = Config::from_args(&args(&["--seed", "1234"])).unwrap();
        let b = Config::from_args(&args(&["--seed", "1234"])).unwrap();

        assert_eq!((a.width, a.height), (b.width, b.height));
    }

    #[test]
    fn test_explicit_values() {
        let config = Config::from_args(&args(&[
            "--in", "img.gray", "--out", "img.huff", "--width", "10", "--height", "20",
            "--bits-per-symbol", "12", "--print-bits", "--no-stats",
        ]))
        .unwrap();

        assert_eq!(config.input_file, Some(PathBuf::from("img.gray")));
        assert_eq!(config.output_file, Some(PathBuf::from("img.huff")));
        assert_eq!((config.width, config.height), (10, 20));
        assert_eq!(config.bits_per_symbol, 12);
        assert!(config.print_bits);
        assert!(!config.print_stats);
    }

    #[test]
    fn test_missing_value() {
        let err = Config::from_args(&args(&["--seed"])).unwrap_err();
        assert_eq!(err, "--seed requires a number");
    }

    #[test]
    fn test_invalid_number() {
        let err = Config::from_args(&args(&["--width", "wide"])).unwrap_err();
        assert_eq!(err, "invalid width");
    }

    #[test]
    fn test_unknown_argument() {
        let err = Config::from_args(&args(&["--colour"])).unwrap_err();
        assert_eq!(err, "unknown argument: --colour");
    }

    #[test]
    fn test_rejects_zero_dimensions() {
        assert!(Config::from_args(&args(&["--width", "0"])).is_err());
    }

    #[test]
    fn test_rejects_bad_symbol_width() {
        assert!(Config::from_args(&args(&["--bits-per-symbol", "0"])).is_err());
        assert!(Config::from_args(&args(&["--bits-per-symbol", "65"])).is_err());
    }
}
