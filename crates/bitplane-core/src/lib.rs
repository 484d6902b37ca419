//! # Bitplane Core API
//!
//! Hides one 8-bit grayscale image inside another one of the same size by
//! 4-bit least significant bit substitution:
//! - [`BitplaneCodec::embed`] puts the high nibble of every secret sample into the
//!   low nibble of the cover sample
//! - [`BitplaneCodec::extract`] moves those low nibbles back up, zero filled
//!
//! Images are stored as PGM, see [`pgm`]. The [`commands`] wire loading, hiding,
//! unveiling and writing together.
//!
//! # Usage Examples
//!
//! ## Hide an image inside another one and get it back
//!
//! ```rust
//! use bitplane_core::commands::{hide_and_unveil, PipelineOptions};
//! use std::path::Path;
//! use tempfile::tempdir;
//!
//! let temp_dir = tempdir().expect("Failed to create temporary directory");
//!
//! hide_and_unveil(
//!     Path::new("tests/images/cover-4x4.pgm"),
//!     Path::new("tests/images/secret-4x4.pgm"),
//!     &temp_dir.path().join("stego.pgm"),
//!     &temp_dir.path().join("extracted.pgm"),
//!     &PipelineOptions::default(),
//! )
//! .expect("Failed to hide and unveil the secret image");
//! ```

#![warn(clippy::redundant_else)]

pub mod codec;
pub mod commands;
pub mod error;
pub mod pgm;
pub mod raster;
pub mod result;

pub use crate::codec::{hide_nibble, unveil_nibble, BitplaneCodec};
pub use crate::error::BitplaneError;
pub use crate::raster::Image;
pub use crate::result::Result;
