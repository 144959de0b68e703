//! Error types for folder-diff
//!
//! Library code returns `FolderDiffError`; the binary wraps it in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for folder-diff operations
pub type FolderDiffResult<T> = Result<T, FolderDiffError>;

/// Main error type for folder-diff operations
#[derive(Error, Debug)]
pub enum FolderDiffError {
    /// A comparison root does not exist
    #[error("directory not found: {path}")]
    DirectoryNotFound { path: PathBuf },

    /// A comparison root exists but is not a directory
    #[error("not a directory: {path}")]
    NotADirectory { path: PathBuf },

    /// Walking or hashing failed somewhere below a root
    #[error("failed to scan {path}: {message}")]
    Scan { path: PathBuf, message: String },

    /// An exclude glob could not be compiled
    #[error("invalid exclude pattern '{pattern}': {message}")]
    InvalidPattern { pattern: String, message: String },

    /// Config file is not valid for the schema
    #[error("invalid config in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// The static report could not be written
    #[error("failed to write report {path}: {source}")]
    Report {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl FolderDiffError {
    /// Path most closely associated with this error, if any.
    pub fn path(&self) -> Option<&std::path::Path> {
        match self {
            FolderDiffError::DirectoryNotFound { path }
            | FolderDiffError::NotADirectory { path }
            | FolderDiffError::Scan { path, .. }
            | FolderDiffError::Report { path, .. } => Some(path),
            FolderDiffError::InvalidConfig { file, .. } => Some(file),
            FolderDiffError::InvalidPattern { .. } | FolderDiffError::Io(_) => None,
        }
    }
}
