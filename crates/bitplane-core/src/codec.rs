use log::debug;

use crate::error::BitplaneError;
use crate::raster::Image;
use crate::result::Result;

const HIGH_NIBBLE: u8 = 0xF0;
const LOW_NIBBLE: u8 = 0x0F;

/// Keeps the high nibble of `cover` and stores the high nibble of `secret` in its low nibble.
pub const fn hide_nibble(cover: u8, secret: u8) -> u8 {
    (cover & HIGH_NIBBLE) | ((secret & HIGH_NIBBLE) >> 4)
}

/// Moves the low nibble of `stego` into the high nibble, the low nibble becomes zero.
pub const fn unveil_nibble(stego: u8) -> u8 {
    (stego & LOW_NIBBLE) << 4
}

/// 4-bit LSB codec for two grayscale images of equal size.
///
/// Every cover sample gives up its 4 least significant bits to carry the 4 most
/// significant bits of the corresponding secret sample. Samples are independent of
/// each other, so there is no state between them.
///
/// The scheme is lossy: the low nibble of the secret is dropped by [`embed`](Self::embed)
/// and [`extract`](Self::extract) fills it with zeros. Only the high nibble of every
/// secret sample can be recovered.
///
/// ## Example of usage
/// ```rust
/// use bitplane_core::{BitplaneCodec, Image};
///
/// let mut cover = Image::filled(2, 2, 0xB5);
/// let secret = Image::filled(2, 2, 0x4C);
///
/// BitplaneCodec::embed(&mut cover, &secret).expect("same dimensions");
/// assert_eq!(cover.pixels(), &[0xB4; 4]);
///
/// let unveiled = BitplaneCodec::extract(&cover);
/// assert_eq!(unveiled.pixels(), &[0x40; 4]);
/// ```
pub struct BitplaneCodec;

impl BitplaneCodec {
    /// hides `secret` in the low nibbles of `cover`, in place
    ///
    /// Fails with [`BitplaneError::DimensionMismatch`] before touching `cover` if
    /// the two images differ in width or height.
    pub fn embed(cover: &mut Image, secret: &Image) -> Result<()> {
        if cover.dimensions() != secret.dimensions() {
            return Err(BitplaneError::DimensionMismatch {
                cover: cover.dimensions(),
                secret: secret.dimensions(),
            });
        }
        debug!(
            "embedding {}x{} secret into cover",
            secret.width(),
            secret.height()
        );

        for (c, s) in cover.pixels_mut().iter_mut().zip(secret.pixels()) {
            *c = hide_nibble(*c, *s);
        }

        Ok(())
    }

    /// recovers the approximated secret from a stego image
    pub fn extract(stego: &Image) -> Image {
        debug!(
            "extracting {}x{} secret from stego image",
            stego.width(),
            stego.height()
        );
        let mut output = Image::new(stego.width(), stego.height());
        for (o, s) in output.pixels_mut().iter_mut().zip(stego.pixels()) {
            *o = unveil_nibble(*s);
        }

        output
    }
}
