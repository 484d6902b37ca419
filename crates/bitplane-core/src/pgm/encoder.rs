use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use log::{debug, error};

use crate::error::BitplaneError;
use crate::raster::Image;
use crate::result::Result;

/// maximum gray value written to every header
pub const MAX_SAMPLE_VALUE: u8 = u8::MAX;

/// samples per line in the text flavour
pub const SAMPLES_PER_LINE: usize = 15;

/// sample encoding of a graymap
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Encoding {
    /// `P2`, samples as decimal numbers
    Text,
    /// `P5`, samples as raw bytes
    Binary,
}

impl Encoding {
    pub fn magic(self) -> &'static str {
        match self {
            Encoding::Text => "P2",
            Encoding::Binary => "P5",
        }
    }
}

/// Writes an [`Image`] as PGM.
///
/// ## Example of usage
/// ```rust
/// use bitplane_core::pgm::{Encoding, PgmWriter};
/// use bitplane_core::Image;
///
/// let image = Image::from_pixels(2, 1, vec![7, 42]).expect("2x1 needs 2 samples");
/// let mut out = Vec::new();
/// PgmWriter::new(Encoding::Text)
///     .with_comment("two samples")
///     .write_to(&image, &mut out)
///     .expect("Cannot write to a Vec");
///
/// assert_eq!(out, b"P2\n# two samples\n2 1\n255\n7 42\n");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PgmWriter {
    encoding: Encoding,
    comment: Option<String>,
}

impl PgmWriter {
    pub fn new(encoding: Encoding) -> Self {
        Self {
            encoding,
            comment: None,
        }
    }

    /// A header comment is a single line, line breaks are replaced by spaces.
    pub fn with_comment(self, comment: &str) -> Self {
        self.use_comment(Some(comment))
    }

    /// If `None` is passed, the header carries no comment
    pub fn use_comment<S: AsRef<str>>(mut self, comment: Option<S>) -> Self {
        self.comment = comment.map(|text| {
            text.as_ref()
                .replace(|c: char| c == '\n' || c == '\r', " ")
        });
        self
    }

    pub fn save_as(&self, image: &Image, file: impl AsRef<Path>) -> Result<()> {
        let file = file.as_ref();
        let f = File::create(file).map_err(|source| {
            error!("Error creating file {file:?}: {source}");
            BitplaneError::WriteError { source }
        })?;
        debug!(
            "writing {}x{} image as {} to {file:?}",
            image.width(),
            image.height(),
            self.encoding.magic()
        );

        self.write_to(image, BufWriter::new(f))
    }

    pub fn write_to<W: Write>(&self, image: &Image, writer: W) -> Result<()> {
        self.write_pgm(image, writer).map_err(|source| {
            error!("Error writing image: {source}");
            BitplaneError::WriteError { source }
        })
    }

    fn write_pgm<W: Write>(&self, image: &Image, mut writer: W) -> std::io::Result<()> {
        writeln!(writer, "{}", self.encoding.magic())?;
        if let Some(comment) = &self.comment {
            writeln!(writer, "# {comment}")?;
        }
        writeln!(writer, "{} {}", image.width(), image.height())?;
        writeln!(writer, "{MAX_SAMPLE_VALUE}")?;

        match self.encoding {
            Encoding::Text => {
                for line in image.pixels().chunks(SAMPLES_PER_LINE) {
                    let line: Vec<String> = line.iter().map(u8::to_string).collect();
                    writeln!(writer, "{}", line.join(" "))?;
                }
            }
            Encoding::Binary => writer.write_all(image.pixels())?,
        }

        writer.flush()
    }
}
