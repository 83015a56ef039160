//! Content Store Error Types

use std::time::Duration;
use thiserror::Error;

/// Failure reading a vault file.
///
/// Only a failure to read the page being rendered is fatal; embeds and
/// previews degrade to placeholder text on any of these.
#[derive(Error, Debug)]
pub enum ContentError {
    /// No file at this path
    #[error("Content not found: {path}")]
    NotFound { path: String },

    /// Path escapes the vault root or is otherwise unusable
    #[error("Invalid content path: {path}")]
    InvalidPath { path: String },

    /// Read did not finish within the configured timeout
    #[error("Timed out reading {path} after {timeout:?}")]
    Timeout { path: String, timeout: Duration },

    /// Any other I/O failure, including invalid UTF-8
    #[error("Failed to read {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
}

impl ContentError {
    /// Create a not found error
    pub fn not_found(path: impl Into<String>) -> Self {
        Self::NotFound { path: path.into() }
    }

    /// Create an invalid path error
    pub fn invalid_path(path: impl Into<String>) -> Self {
        Self::InvalidPath { path: path.into() }
    }

    /// Map an I/O error, turning `ErrorKind::NotFound` into [`ContentError::NotFound`]
    pub fn from_io(path: impl Into<String>, source: std::io::Error) -> Self {
        let path = path.into();
        if source.kind() == std::io::ErrorKind::NotFound {
            Self::NotFound { path }
        } else {
            Self::Io { path, source }
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. } | Self::InvalidPath { .. })
    }
}
