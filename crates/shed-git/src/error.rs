//! Error types for shed-git

use std::path::PathBuf;

/// Result type for shed-git operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in shed-git operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Git error: {0}")]
    Git(#[from] git2::Error),

    #[error("Filesystem error: {0}")]
    Fs(#[from] shed_fs::Error),

    #[error("No git repository found at {path}")]
    NotARepository { path: PathBuf },

    #[error("Repository at {path} has no working directory")]
    BareRepository { path: PathBuf },
}
