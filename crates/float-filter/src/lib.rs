//! # Float Filter
//!
//! Copies every whitespace separated token of a text that parses as a float into
//! an output, one value per line, and counts the tokens that do not.
//!
//! A token is valid only if all of it is a number, so `12abc` is counted as invalid.
//! Spaces, tabs and line breaks all separate tokens.
//!
//! ```rust
//! let input = "1.5 abc\n-2 3e2 ??\n";
//! let mut output = Vec::new();
//!
//! let report = float_filter::filter_floats(input.as_bytes(), &mut output)
//!     .expect("in-memory filtering cannot fail");
//!
//! assert_eq!(report.valid, 3);
//! assert_eq!(report.invalid, 2);
//! assert_eq!(output, b"1.500000\n-2.000000\n300.000000\n");
//! ```

mod error;

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use log::{debug, trace};

pub use crate::error::FilterError;

pub type Result<T> = std::result::Result<T, FilterError>;

/// counts of a finished filter run
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FilterReport {
    pub valid: usize,
    pub invalid: usize,
}

impl FilterReport {
    /// the number reported to the user, see [`FilterError::invalid_count`] for failed runs
    pub fn invalid_count(&self) -> i64 {
        self.invalid as i64
    }
}

/// Filters `input` into `output`.
///
/// Valid values are written with six decimal places. Tokens are separated by ASCII
/// whitespace, a token that is not valid UTF-8 counts as invalid.
pub fn filter_floats<R: BufRead, W: Write>(input: R, mut output: W) -> Result<FilterReport> {
    let mut report = FilterReport::default();

    for line in input.split(b'\n') {
        let line = line.map_err(|source| FilterError::ReadError { source })?;
        for token in line
            .split(|b| b.is_ascii_whitespace())
            .filter(|t| !t.is_empty())
        {
            match parse_token(token) {
                Some(value) => {
                    writeln!(output, "{value:.6}")
                        .map_err(|source| FilterError::WriteError { source })?;
                    report.valid += 1;
                }
                None => {
                    trace!("not a float: {:?}", String::from_utf8_lossy(token));
                    report.invalid += 1;
                }
            }
        }
    }
    output
        .flush()
        .map_err(|source| FilterError::WriteError { source })?;
    debug!(
        "{} valid and {} invalid tokens",
        report.valid, report.invalid
    );

    Ok(report)
}

fn parse_token(token: &[u8]) -> Option<f32> {
    std::str::from_utf8(token).ok()?.parse().ok()
}

/// Filters the file at `input` into a newly created file at `output`.
pub fn filter_file(input: impl AsRef<Path>, output: impl AsRef<Path>) -> Result<FilterReport> {
    let input = input.as_ref();
    let output = output.as_ref();
    let reader = File::open(input).map_err(|source| FilterError::OpenInput {
        path: input.to_path_buf(),
        source,
    })?;
    let writer = File::create(output).map_err(|source| FilterError::CreateOutput {
        path: output.to_path_buf(),
        source,
    })?;
    debug!("filtering {input:?} into {output:?}");

    filter_floats(BufReader::new(reader), BufWriter::new(writer))
}
