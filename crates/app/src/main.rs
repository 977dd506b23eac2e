//! pixel-huffman: encode a grayscale raster with a Huffman code.
//!
//! Pipeline: acquire pixels (raw file or synthetic image) -> compress ->
//! print statistics / codes / bits -> optionally write the packed bits.

mod config;
mod input_gen;

use config::Config;
use pixel_huffman_core::{compress, CompressionReport, Result};
use std::io::Write;

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let config = match Config::from_args(&args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("error: {}", e);
            eprintln!("run with --help for usage");
            std::process::exit(2);
        }
    };

    if let Err(e) = run(&config) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

fn run(config: &Config) -> Result<()> {
    if config.print_config {
        config.print();
    }

    let pixels = load_pixels(config)?;
    log::debug!("loaded {} pixels", pixels.len());

    let report = compress(&pixels, config.bits_per_symbol)?;

    if config.print_codes {
        print_codes(&report);
    }
    if config.print_bits {
        println!("=== Encoded bits ===");
        println!("{}", report.encoded.to_bit_string());
        println!();
    }
    if config.print_stats {
        report.encoded.stats.print_summary();
        println!("Entropy: {:.3} bits/symbol", report.entropy_bits);
    }

    if let Some(path) = &config.output_file {
        let mut file = std::fs::File::create(path)?;
        file.write_all(report.encoded.as_bytes())?;
        log::info!(
            "wrote {} bytes ({} bits) to {}",
            report.encoded.as_bytes().len(),
            report.encoded.compressed_bits(),
            path.display()
        );
    }

    Ok(())
}

fn load_pixels(config: &Config) -> Result<Vec<u8>> {
    match &config.input_file {
        Some(path) => input_gen::read_raw_pixels(path),
        None => {
            let image = input_gen::generate_sample_image(config.seed, config.width, config.height);
            log::debug!(
                "generated {}x{} synthetic image ({} pixels)",
                image.width,
                image.height,
                image.pixel_count()
            );
            Ok(image.pixels())
        }
    }
}

fn print_codes(report: &CompressionReport<u8>) {
    println!("=== Code table ({} symbols) ===", report.codes.len());
    for (symbol, code) in report.codes.iter() {
        println!("{:>3}: {}", symbol, code);
    }
    println!();
}
