//! Synthetic grayscale image generation.
//!
//! When no input raster is given, we generate an 8-bit grayscale image with
//! interesting compression characteristics by tiling it into horizontal bands
//! of different texture.
//!
//! # Design
//!
//! Each band is one of:
//! - flat fill (a single intensity, highly compressible)
//! - horizontal gradient (many intensities, evenly used)
//! - posterized blocks (a handful of intensities)
//! - noise (random intensities, barely compressible)
//!
//! This makes the effect of the pixel distribution visible in the statistics.

use pixel_huffman_core::{Error, Result};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::io::Read;
use std::path::Path;

/// Rows per texture band.
const BAND_ROWS: usize = 8;

/// A grayscale raster, one intensity per pixel, stored row by row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GrayImage {
    pub width: usize,
    pub height: usize,
    pub rows: Vec<Vec<u8>>,
}

impl GrayImage {
    /// Flatten the rows into a single symbol stream (row-major).
    pub fn pixels(&self) -> Vec<u8> {
        self.rows.iter().flatten().copied().collect()
    }

    pub fn pixel_count(&self) -> usize {
        self.width * self.height
    }
}

/// Generate a synthetic grayscale image.
///
/// The same `seed` and dimensions always yield the same image.
pub fn generate_sample_image(seed: u64, width: usize, height: usize) -> GrayImage {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut rows = Vec::with_capacity(height);

    let mut y = 0;
    while y < height {
        let band_rows = BAND_ROWS.min(height - y);
        let band_type: u8 = rng.gen_range(0..10);

        match band_type {
            // 30% flat fill
            0..=2 => {
                let level: u8 = rng.gen();
                for _ in 0..band_rows {
                    rows.push(vec![level; width]);
                }
            }

            // 30% horizontal gradient
            3..=5 => {
                let start: u8 = rng.gen();
                let step = rng.gen_range(1..=4u8);
                let row: Vec<u8> = (0..width)
                    .map(|x| start.wrapping_add((x as u8).wrapping_mul(step)))
                    .collect();
                for _ in 0..band_rows {
                    rows.push(row.clone());
                }
            }

            // 20% posterized blocks
            6..=7 => {
                let palette = generate_palette(&mut rng);
                let block = rng.gen_range(2..=8usize);
                for r in 0..band_rows {
                    let row = (0..width)
                        .map(|x| palette[(x / block + r / block) % palette.len()])
                        .collect();
                    rows.push(row);
                }
            }

            // 20% noise
            _ => {
                for _ in 0..band_rows {
                    rows.push((0..width).map(|_| rng.gen()).collect());
                }
            }
        }

        y += band_rows;
    }

    GrayImage {
        width,
        height,
        rows,
    }
}

/// A small set of distinct-ish intensities.
fn generate_palette(rng: &mut ChaCha8Rng) -> Vec<u8> {
    let size = rng.gen_range(2..=6);
    (0..size).map(|_| rng.gen()).collect()
}

/// Read a raw 8-bit grayscale raster: one byte per pixel, no header.
///
/// # Errors
/// - `Error::Io` if the file cannot be read
/// - `Error::Config` if the file holds no pixels
pub fn read_raw_pixels(path: &Path) -> Result<Vec<u8>> {
    let mut pixels = Vec::new();
    std::fs::File::open(path)?.read_to_end(&mut pixels)?;
    if pixels.is_empty() {
        return Err(Error::Config(format!("{} contains no pixels", path.display())));
    }
    Ok(pixels)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimensions() {
        let image = generate_sample_image(42, 37, 21);
        assert_eq!(image.rows.len(), 21);
        assert!(image.rows.iter().all(|row| row.len() == 37));
        assert_eq!(image.pixels().len(), image.pixel_count());
    }

    #[test]
    fn test_determinism() {
        let a = generate_sample_image(12345, 64, 64);
        let b = generate_sample_image(12345, 64, 64);

        assert_eq!(a, b);
    }

    #[test]
    fn test_different_seeds() {
        let a = generate_sample_image(1, 64, 64);
        let b = generate_sample_image(2, 64, 64);

        assert_ne!(a, b);
    }

    #[test]
    fn test_row_major_flatten() {
        let image = GrayImage {
            width: 2,
            height: 2,
            rows: vec![vec![1, 2], vec![3, 4]],
        };
        assert_eq!(image.pixels(), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_read_raw_pixels() {
        let path = temp_path("raster");
        std::fs::write(&path, [0u8, 10, 20, 255]).unwrap();

        let pixels = read_raw_pixels(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(pixels, vec![0, 10, 20, 255]);
    }

    #[test]
    fn test_read_raw_pixels_rejects_empty_file() {
        let path = temp_path("empty");
        std::fs::write(&path, [0u8; 0]).unwrap();

        let result = read_raw_pixels(&path);
        std::fs::remove_file(&path).unwrap();

        match result {
            Err(Error::Config(message)) => assert!(message.ends_with("contains no pixels")),
            other => panic!("expected Config error, got {other:?}"),
        }
    }

    #[test]
    fn test_read_raw_pixels_missing_file() {
        let result = read_raw_pixels(&temp_path("missing"));
        assert!(matches!(result, Err(Error::Io(_))));
    }

    fn temp_path(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("pixel-huffman-{}-{}.gray", name, std::process::id()))
    }
}
