use std::path::PathBuf;

use thiserror::Error;

/// Invocation-level errors; each ends the process with status 1
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Unsupported output type '{value}'. Supported types are: {supported}")]
    UnsupportedOutputType { value: String, supported: String },

    #[error("Path '{}' does not exist.", .path.display())]
    PathNotFound { path: PathBuf },

    #[error("Path '{}' is not readable: {source}", .path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{0}")]
    Mirror(#[from] imgmirror::Error),
}
