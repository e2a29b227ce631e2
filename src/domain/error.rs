use std::io;

use thiserror::Error;

/// Library-wide error type for stagehand operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// The staging destination directory could not be created.
    #[error("Cannot create destination directory '{path}': {source}")]
    DestinationUnavailable {
        path: String,
        #[source]
        source: io::Error,
    },

    /// Pre-flight setup failed; the server must not be launched.
    #[error("Pre-flight setup failed: {0}")]
    PreflightFailed(String),

    /// The server process could not be started, so control was never
    /// transferred.
    #[error("Failed to launch server '{program}': {source}")]
    ServerLaunch {
        program: String,
        #[source]
        source: io::Error,
    },
}

impl AppError {
    pub(crate) fn configuration<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }
}
