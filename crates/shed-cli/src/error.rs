//! Error types for shed-cli

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors that can occur in CLI operations
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Error from shed-blocks
    #[error(transparent)]
    Blocks(#[from] shed_blocks::Error),

    /// Error from shed-fs
    #[error(transparent)]
    Fs(#[from] shed_fs::Error),

    /// Error from shed-git
    #[error(transparent)]
    Git(#[from] shed_git::Error),

    /// Error from shed-meta
    #[error(transparent)]
    Meta(#[from] shed_meta::Error),

    /// Standard I/O error
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// User-facing error with a message
    #[error("{message}")]
    User { message: String },
}

impl CliError {
    /// Create a new user error with the given message
    pub fn user(message: impl Into<String>) -> Self {
        Self::User {
            message: message.into(),
        }
    }
}
