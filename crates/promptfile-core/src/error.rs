//! Error types for collection runs.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that abort a collection run.
#[derive(Debug, Error)]
pub enum CollectError {
    /// Permission denied for a path.
    #[error("Permission denied: {path}")]
    PermissionDenied { path: PathBuf },

    /// Path not found.
    #[error("Path not found: {path}")]
    NotFound { path: PathBuf },

    /// Generic I/O error.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Root path is not a directory.
    #[error("Provided path is not a directory: {}", path.display())]
    NotADirectory { path: PathBuf },

    /// An ignore pattern failed to compile.
    #[error("Invalid ignore pattern {pattern:?}: {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: globset::Error,
    },

    /// Writing a block to the output failed.
    #[error("Failed to write output: {source}")]
    Output {
        #[source]
        source: std::io::Error,
    },
}

impl CollectError {
    /// Create an I/O error with path context.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        match source.kind() {
            std::io::ErrorKind::PermissionDenied => Self::PermissionDenied { path },
            std::io::ErrorKind::NotFound => Self::NotFound { path },
            _ => Self::Io { path, source },
        }
    }

    /// Check if the error is about the root not being a usable directory.
    pub fn is_invalid_root(&self) -> bool {
        matches!(self, Self::NotADirectory { .. } | Self::NotFound { .. })
    }
}

/// Why a single file could not be rendered as text.
#[derive(Debug, Error)]
pub enum ReadFailure {
    /// The file could not be opened or read.
    #[error("{0}")]
    Io(#[from] std::io::Error),

    /// The bytes are not valid UTF-8.
    #[error("invalid UTF-8 sequence at byte {position}: {reason}")]
    Decode { position: usize, reason: &'static str },
}

impl From<std::string::FromUtf8Error> for ReadFailure {
    fn from(err: std::string::FromUtf8Error) -> Self {
        let utf8 = err.utf8_error();
        let reason = match utf8.error_len() {
            Some(_) => "invalid byte sequence",
            None => "unexpected end of data",
        };
        Self::Decode {
            position: utf8.valid_up_to(),
            reason,
        }
    }
}

/// Non-fatal problem encountered while walking.
#[derive(Debug, Clone)]
pub struct WalkWarning {
    /// Path where the warning occurred.
    pub path: PathBuf,
    /// Human-readable message.
    pub message: String,
}

impl WalkWarning {
    /// Create a new walk warning.
    pub fn new(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}
