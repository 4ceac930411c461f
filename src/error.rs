//! Crate-level error type and `Result` alias.
//! Per-file failures are carried as `Error` values inside `FileReport`s; their
//! `Display` output is the status line shown to the user.
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Skipping non-image file: {name}")]
    UnrecognizedImage { name: String },

    #[error("Error opening image {name}: {source}")]
    Open {
        name: String,
        #[source]
        source: image::ImageError,
    },

    #[error("Error opening image {name}: {source}")]
    Read {
        name: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Error saving image {name}: {source}")]
    Save {
        name: String,
        #[source]
        source: image::ImageError,
    },

    #[error("Error saving image {name}: {source}")]
    CreateDir {
        name: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Input file '{name}' is not a supported image type ({supported}).")]
    UnsupportedInputType { name: String, supported: String },

    #[error("Path has no file name: {path:?}")]
    NoFileName { path: PathBuf },
}

impl Error {
    pub fn unsupported_input(name: impl Into<String>) -> Self {
        Error::UnsupportedInputType {
            name: name.into(),
            supported: crate::types::ImageType::supported_extensions(),
        }
    }

    /// True for the "not an image at all" case, which is a skip rather than a failure.
    pub fn is_skip(&self) -> bool {
        matches!(self, Error::UnrecognizedImage { .. })
    }
}
