//! Hide one PGM image inside another and recover it again.
//!
//! Usage: cargo run -p bitplane-core --example stego_lsb -- <cover.pgm> <secret.pgm> [stego.pgm] [extracted.pgm]
//!
//! The stego image is written as binary PGM (default `stego_image_bin.pgm`), the
//! recovered secret as text PGM (default `extracted_secret.pgm`).

use std::env;
use std::path::Path;

use bitplane_core::commands::{hide_and_unveil, PipelineOptions};

fn main() {
    env_logger::init();
    let args: Vec<String> = env::args().collect();

    if args.len() < 3 || args.len() > 5 {
        eprintln!(
            "Usage: {} <cover.pgm> <secret.pgm> [stego.pgm] [extracted.pgm]",
            args[0]
        );
        eprintln!();
        eprintln!("Example:");
        eprintln!("  cargo run -p bitplane-core --example stego_lsb -- baboon.pgm farm.pgm");
        std::process::exit(1);
    }

    let cover = Path::new(&args[1]);
    let secret = Path::new(&args[2]);
    let stego = Path::new(args.get(3).map_or("stego_image_bin.pgm", String::as_str));
    let extracted = Path::new(args.get(4).map_or("extracted_secret.pgm", String::as_str));

    if let Err(e) = hide_and_unveil(cover, secret, stego, extracted, &PipelineOptions::default()) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }

    println!("Stego image: {}", stego.display());
    println!("Extracted secret: {}", extracted.display());
}
