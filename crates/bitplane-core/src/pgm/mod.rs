//! Portable graymap (PGM) support, the storage format for cover, secret and stego images.
//!
//! Loading goes through the PNM decoder of the `image` crate and accepts both the
//! text (`P2`) and the binary (`P5`) flavour. Writing produces either of them with
//! an optional comment line in the header.

mod decoder;
mod encoder;

pub use decoder::{decode, load, load_expecting};
pub use encoder::{Encoding, PgmWriter, MAX_SAMPLE_VALUE, SAMPLES_PER_LINE};
