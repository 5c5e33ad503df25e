//! Error types for the bwc-core library.
//!
//! Per-file failures (`MalformedFilename`, `Unprobeable`, `CopyFailure`) are
//! recoverable and surface as per-item results; the remaining variants abort
//! the operation that produced them.

use std::path::PathBuf;
use thiserror::Error;

/// Custom error types for bwc-core
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Invalid input directory: {0}")]
    InvalidInputDirectory(String),

    #[error("Malformed filename: {0}")]
    MalformedFilename(String),

    #[error("Unable to probe duration of {}: {reason}", .path.display())]
    Unprobeable { path: PathBuf, reason: String },

    #[error("Failed to write {target}: {reason}")]
    ExportWriteFailure { target: String, reason: String },

    #[error("Failed to copy {} to {}: {reason}", .source_path.display(), .destination.display())]
    CopyFailure {
        source_path: PathBuf,
        destination: PathBuf,
        reason: String,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Operation failed: {0}")]
    OperationFailed(String),
}

/// Result type for bwc-core operations
pub type CoreResult<T> = std::result::Result<T, CoreError>;

/// Builds an `ExportWriteFailure` for the given target from any displayable error.
pub(crate) fn export_error(target: impl std::fmt::Display, err: impl std::fmt::Display) -> CoreError {
    CoreError::ExportWriteFailure {
        target: target.to_string(),
        reason: err.to_string(),
    }
}
