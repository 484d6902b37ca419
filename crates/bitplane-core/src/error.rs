use thiserror::Error;

#[derive(Error, Debug)]
pub enum BitplaneError {
    /// Represents a cover and a secret image of different size. Nothing gets embedded then.
    #[error("Image dimensions do not match: cover is {}x{} but secret is {}x{}", .cover.0, .cover.1, .secret.0, .secret.1)]
    DimensionMismatch { cover: (u32, u32), secret: (u32, u32) },

    /// Represents a pixel buffer that does not hold exactly `width * height` samples
    #[error("Pixel buffer holds {actual} samples but the image needs {expected}")]
    BufferSizeMismatch { expected: usize, actual: usize },

    /// Represents an image whose header announces other dimensions than required
    #[error("Image is {}x{} but {}x{} was expected", .found.0, .found.1, .expected.0, .expected.1)]
    UnexpectedDimensions {
        expected: (u32, u32),
        found: (u32, u32),
    },

    /// Represents a broken or unsupported image file. For example a truncated PGM or a color PPM
    #[error("Image format is invalid: {0}")]
    InvalidImageFormat(String),

    /// Represents a failure to read from input.
    #[error("Read error")]
    ReadError { source: std::io::Error },

    /// Represents a failure to write target file.
    #[error("Write error")]
    WriteError { source: std::io::Error },

    /// Represents all other cases of `std::io::Error`.
    #[error(transparent)]
    IoError(#[from] std::io::Error),
}
