use std::path::Path;

use log::{debug, info};

use crate::codec::BitplaneCodec;
use crate::pgm::{self, Encoding, PgmWriter};
use crate::raster::Image;
use crate::result::Result;

pub const DEFAULT_COMMENT: &str = "Created by Steganography LSB";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineOptions {
    /// encoding of the image that carries the secret
    pub stego_encoding: Encoding,

    /// encoding of the recovered secret
    pub extracted_encoding: Encoding,

    /// header comment of every written image, `None` writes no comment line
    pub comment: Option<String>,

    /// If set, every loaded image must have exactly these dimensions.
    /// For example `Some((512, 512))` for the classic lab images.
    pub expected_dimensions: Option<(u32, u32)>,
}

impl Default for PipelineOptions {
    fn default() -> Self {
        Self {
            stego_encoding: Encoding::Binary,
            extracted_encoding: Encoding::Text,
            comment: Some(DEFAULT_COMMENT.to_string()),
            expected_dimensions: None,
        }
    }
}

impl PipelineOptions {
    fn load(&self, path: &Path) -> Result<Image> {
        match self.expected_dimensions {
            Some((width, height)) => pgm::load_expecting(path, width, height),
            None => pgm::load(path),
        }
    }

    fn writer(&self, encoding: Encoding) -> PgmWriter {
        PgmWriter::new(encoding).use_comment(self.comment.as_deref())
    }
}

/// hides the `secret` image in the `cover` image and stores the result as `stego`
pub fn hide(cover: &Path, secret: &Path, stego: &Path, opts: &PipelineOptions) -> Result<()> {
    let stego_image = embed_files(cover, secret, opts)?;

    opts.writer(opts.stego_encoding).save_as(&stego_image, stego)
}

/// recovers the secret hidden in `stego` and stores it as `extracted`
pub fn unveil(stego: &Path, extracted: &Path, opts: &PipelineOptions) -> Result<()> {
    let stego_image = opts.load(stego)?;
    let secret = BitplaneCodec::extract(&stego_image);

    opts.writer(opts.extracted_encoding).save_as(&secret, extracted)
}

/// Runs hide and unveil in one go.
///
/// The secret is extracted from the in-memory stego image, so the stego file is
/// only written, never read back.
pub fn hide_and_unveil(
    cover: &Path,
    secret: &Path,
    stego: &Path,
    extracted: &Path,
    opts: &PipelineOptions,
) -> Result<()> {
    let stego_image = embed_files(cover, secret, opts)?;
    opts.writer(opts.stego_encoding).save_as(&stego_image, stego)?;

    let recovered = BitplaneCodec::extract(&stego_image);
    opts.writer(opts.extracted_encoding).save_as(&recovered, extracted)?;
    info!("stego image at {stego:?}, recovered secret at {extracted:?}");

    Ok(())
}

fn embed_files(cover: &Path, secret: &Path, opts: &PipelineOptions) -> Result<Image> {
    debug!("hiding {secret:?} in {cover:?}");
    let mut cover_image = opts.load(cover)?;
    let secret_image = opts.load(secret)?;
    BitplaneCodec::embed(&mut cover_image, &secret_image)?;

    Ok(cover_image)
}
