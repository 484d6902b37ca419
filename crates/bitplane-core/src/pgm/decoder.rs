use std::fs::File;
use std::io::{BufReader, ErrorKind, Read};
use std::path::Path;

use image::codecs::pnm::{PnmDecoder, PnmSubtype};
use image::{DynamicImage, ImageError};
use log::{debug, error};

use super::MAX_SAMPLE_VALUE;
use crate::error::BitplaneError;
use crate::raster::Image;
use crate::result::Result;

/// reads a PGM image from a file
pub fn load(path: impl AsRef<Path>) -> Result<Image> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| {
        error!("Error opening image {path:?}: {source}");
        BitplaneError::ReadError { source }
    })?;
    let image = decode(BufReader::new(file))?;
    debug!(
        "loaded {}x{} image from {path:?}",
        image.width(),
        image.height()
    );

    Ok(image)
}

/// like [`load`] but insists on the given dimensions
pub fn load_expecting(path: impl AsRef<Path>, width: u32, height: u32) -> Result<Image> {
    let image = load(path)?;
    if image.dimensions() != (width, height) {
        return Err(BitplaneError::UnexpectedDimensions {
            expected: (width, height),
            found: image.dimensions(),
        });
    }

    Ok(image)
}

/// decodes a text (`P2`) or binary (`P5`) graymap with 8-bit samples
///
/// Bitmaps, pixmaps and graymaps with another maximum sample value than 255 are
/// rejected, their samples would need rescaling before they could carry a secret.
pub fn decode<R: Read>(mut reader: R) -> Result<Image> {
    let mut data = Vec::new();
    reader.read_to_end(&mut data).map_err(|source| {
        error!("Error reading image: {source}");
        BitplaneError::ReadError { source }
    })?;
    check_header(&data)?;

    let decoder = PnmDecoder::new(&data[..]).map_err(decoding_error)?;
    match DynamicImage::from_decoder(decoder).map_err(decoding_error)? {
        DynamicImage::ImageLuma8(gray) => Ok(Image::from(gray)),
        other => Err(BitplaneError::InvalidImageFormat(format!(
            "expected 8-bit grayscale samples, found {:?}",
            other.color()
        ))),
    }
}

fn check_header(data: &[u8]) -> Result<()> {
    let (_, header) = PnmDecoder::new(data).map_err(decoding_error)?.into_inner();
    if !matches!(header.subtype(), PnmSubtype::Graymap(_)) {
        return Err(BitplaneError::InvalidImageFormat(format!(
            "expected a graymap (P2 or P5), found {:?}",
            header.subtype()
        )));
    }
    if header.maximal_sample() != u32::from(MAX_SAMPLE_VALUE) {
        return Err(BitplaneError::InvalidImageFormat(format!(
            "expected maximum sample value {MAX_SAMPLE_VALUE}, found {}",
            header.maximal_sample()
        )));
    }

    Ok(())
}

/// A truncated file is a format problem, everything else the reader reports is a read problem.
fn decoding_error(e: ImageError) -> BitplaneError {
    match e {
        ImageError::IoError(source) if source.kind() != ErrorKind::UnexpectedEof => {
            error!("Error reading image: {source}");
            BitplaneError::ReadError { source }
        }
        e => {
            error!("Error decoding image: {e}");
            BitplaneError::InvalidImageFormat(e.to_string())
        }
    }
}
