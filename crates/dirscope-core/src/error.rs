//! Error types for `dirscope-core`.
//!
//! All fallible operations in the core library return [`CoreResult<T>`],
//! which is an alias for `Result<T, CoreError>`.

use std::path::PathBuf;

/// Unified error type for all core operations.
///
/// Each variant captures just enough context for the caller to display
/// a meaningful message or map the failure to an HTTP status.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// The target path does not exist.
    #[error("path not found: {0}")]
    NotFound(PathBuf),

    /// The process lacks permission to access the path.
    #[error("permission denied: {0}")]
    PermissionDenied(PathBuf),

    /// A directory was expected but the path points to a file.
    #[error("not a directory: {0}")]
    NotADirectory(PathBuf),

    /// The path resolves to a location outside the served root.
    #[error("path escapes the served root: {0}")]
    OutsideRoot(PathBuf),

    /// A child name is invalid (empty, `..`, or contains path separators).
    #[error("invalid name: {0}")]
    InvalidName(String),

    /// An I/O error that doesn't fit a more specific variant.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Convenience alias used throughout `dirscope-core`.
pub type CoreResult<T> = Result<T, CoreError>;
