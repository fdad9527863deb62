//! Errors reported by the `greyscale` binary.
//!
//! Every variant is fatal. Each carries the path it concerns and the
//! underlying cause so the message alone is enough to diagnose a failure.

use std::path::PathBuf;

use greyscale_export::EncodeError;
use greyscale_pipeline::{FormatTag, PipelineError};

/// A failed conversion.
#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    /// The input path does not exist or cannot be read.
    #[error("Error opening input file {}: {source}", .path.display())]
    FileOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The input is not a JPEG, PNG or GIF image.
    #[error("Error decoding image {}: {source}", .path.display())]
    UnrecognizedFormat {
        path: PathBuf,
        #[source]
        source: PipelineError,
    },

    /// The input header is recognized but the body is corrupt.
    #[error("Error decoding image {}: {source}", .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: PipelineError,
    },

    /// The output file cannot be created.
    #[error("Error creating output file {}: {source}", .path.display())]
    FileCreate {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Serialization failed after the output file was created. The file
    /// may be empty or partially written.
    #[error(
        "Error encoding greyscale image to {} (format: {format}): {source}",
        .path.display()
    )]
    Encode {
        path: PathBuf,
        format: FormatTag,
        #[source]
        source: EncodeError,
    },
}

impl ConvertError {
    /// Attach the input path to a pipeline error.
    pub fn from_pipeline(path: PathBuf, source: PipelineError) -> Self {
        match source {
            PipelineError::UnrecognizedFormat => Self::UnrecognizedFormat { path, source },
            PipelineError::Decode(_) => Self::Decode { path, source },
        }
    }
}
