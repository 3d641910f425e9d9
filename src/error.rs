//! Error taxonomy for the reporting pipeline.
//!
//! Every stage returns a [`ReporterError`]; the pipeline surfaces the first
//! one unchanged and the binary maps any error to exit status 1.

use std::io;
use std::path::PathBuf;

use reqwest::StatusCode;
use thiserror::Error;

/// Convenience alias used across the crate.
pub type Result<T> = std::result::Result<T, ReporterError>;

/// Reasons the input path is not acceptable for archiving.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Provided path does not exist.")]
    NotFound,

    #[error("Directory is empty.")]
    EmptyDirectory,

    #[error("No valid .xml files in directory.")]
    NoMatchingFiles,

    #[error("Path is not valid .xml file.")]
    UnsupportedFileType,

    /// The path exists but could not be inspected.
    #[error("Failed to inspect {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Top-level error returned by every pipeline stage.
///
/// Underlying I/O, ZIP, HTTP and JSON errors are exposed through
/// `source()` rather than repeated in the message.
#[derive(Debug, Error)]
pub enum ReporterError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Missing or unusable configuration such as the API key.
    #[error("{0}")]
    Config(String),

    /// Reading a report file or writing the archive failed.
    #[error("Failed to archive {}", path.display())]
    Archive {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to write archive")]
    Zip(#[from] zip::result::ZipError),

    /// Network-level failure: connect, timeout, or body read.
    #[error("Request failed")]
    Transport(#[source] reqwest::Error),

    /// The service answered with a status other than the expected one.
    #[error("Bad Status: {status}")]
    BadStatus { status: StatusCode },

    #[error("Malformed response body")]
    Decode(#[from] serde_json::Error),

    #[error("Environment does not appear to be a supported CI provider (CircleCI, GitHub Actions, etc.)")]
    UnsupportedProvider,
}

impl ReporterError {
    /// Numeric status code of a [`ReporterError::BadStatus`], if this is one.
    pub fn status(&self) -> Option<u16> {
        match self {
            ReporterError::BadStatus { status } => Some(status.as_u16()),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ReporterError {
    fn from(err: reqwest::Error) -> Self {
        ReporterError::Transport(err)
    }
}
