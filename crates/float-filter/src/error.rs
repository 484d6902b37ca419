use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum FilterError {
    /// Represents an input file that cannot be opened, for example because it does not exist
    #[error("Unable to open input file {path:?}")]
    OpenInput {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Represents an output file that cannot be created
    #[error("Unable to create output file {path:?}")]
    CreateOutput {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Represents a failure while scanning the input, for example a hardware failure
    #[error("Read error while processing input")]
    ReadError { source: std::io::Error },

    /// Represents a failure to write a valid value to the output.
    #[error("Write error")]
    WriteError { source: std::io::Error },
}

impl FilterError {
    /// process exit code for this failure
    pub fn exit_code(&self) -> i32 {
        match self {
            FilterError::OpenInput { .. } => -1,
            FilterError::CreateOutput { .. } => -2,
            FilterError::ReadError { .. } => -3,
            FilterError::WriteError { .. } => -4,
        }
    }

    /// A failed scan reports `-1` as invalid count, no matter how many tokens were seen.
    pub fn invalid_count(&self) -> i64 {
        -1
    }
}
