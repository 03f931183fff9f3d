//! Error types for shed-blocks

/// Result type for shed-blocks operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while applying a managed block.
///
/// A missing target file is not an error; it triggers file creation.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("file access failed: {0}")]
    FileAccess(#[from] shed_fs::Error),
}
