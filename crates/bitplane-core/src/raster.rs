use image::GrayImage;

use crate::error::BitplaneError;
use crate::result::Result;

/// 8-bit grayscale image, samples stored row by row.
///
/// The buffer always holds exactly `width * height` samples, every constructor
/// guarantees that.
///
/// ## Example of usage
/// ```rust
/// use bitplane_core::Image;
///
/// let image = Image::from_pixels(2, 2, vec![0, 1, 2, 3]).expect("2x2 needs 4 samples");
/// assert_eq!(image.get(1, 1), Some(3));
/// assert_eq!(image.get(2, 0), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Image {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl Image {
    /// black image of the given size
    pub fn new(width: u32, height: u32) -> Self {
        Self::filled(width, height, 0)
    }

    pub fn filled(width: u32, height: u32, value: u8) -> Self {
        Self {
            width,
            height,
            pixels: vec![value; sample_count(width, height)],
        }
    }

    /// wraps an existing sample buffer, it must hold exactly `width * height` samples
    pub fn from_pixels(width: u32, height: u32, pixels: Vec<u8>) -> Result<Self> {
        let expected = sample_count(width, height);
        if pixels.len() != expected {
            return Err(BitplaneError::BufferSizeMismatch {
                expected,
                actual: pixels.len(),
            });
        }

        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub fn len(&self) -> usize {
        self.pixels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    /// sample at column `x` and row `y`
    pub fn get(&self, x: u32, y: u32) -> Option<u8> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = y as usize * self.width as usize + x as usize;

        self.pixels.get(i).copied()
    }

    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    pub fn pixels_mut(&mut self) -> &mut [u8] {
        &mut self.pixels
    }

    pub fn into_pixels(self) -> Vec<u8> {
        self.pixels
    }
}

impl From<GrayImage> for Image {
    fn from(gray: GrayImage) -> Self {
        let (width, height) = gray.dimensions();

        Self {
            width,
            height,
            pixels: gray.into_raw(),
        }
    }
}

fn sample_count(width: u32, height: u32) -> usize {
    width as usize * height as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_be_row_major() {
        let image = Image::from_pixels(3, 2, vec![0, 1, 2, 10, 11, 12]).unwrap();

        assert_eq!(image.get(0, 0), Some(0));
        assert_eq!(image.get(2, 0), Some(2));
        assert_eq!(image.get(0, 1), Some(10));
        assert_eq!(image.get(2, 1), Some(12));
        assert_eq!(image.get(0, 2), None);
    }

    #[test]
    fn should_reject_a_buffer_of_the_wrong_size() {
        match Image::from_pixels(4, 4, vec![0; 15]) {
            Err(BitplaneError::BufferSizeMismatch { expected, actual }) => {
                assert_eq!(expected, 16);
                assert_eq!(actual, 15);
            }
            other => panic!("unexpected result {other:?}"),
        }
    }

    #[test]
    fn should_allocate_width_times_height_samples() {
        let image = Image::filled(5, 3, 0xAB);

        assert_eq!(image.len(), 15);
        assert_eq!(image.dimensions(), (5, 3));
        assert!(image.pixels().iter().all(|p| *p == 0xAB));
        assert!(Image::new(0, 7).is_empty());
    }

    #[test]
    fn should_convert_from_a_gray_image() {
        let gray = GrayImage::from_fn(2, 3, |x, y| image::Luma([(x + 10 * y) as u8]));
        let image = Image::from(gray);

        assert_eq!(image.dimensions(), (2, 3));
        assert_eq!(image.pixels(), &[0, 1, 10, 11, 20, 21]);
    }
}
