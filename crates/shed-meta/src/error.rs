//! Error types for shed-meta

use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Filesystem error: {0}")]
    Fs(#[from] shed_fs::Error),

    #[error("Invalid configuration at {path}: {message}")]
    InvalidConfig { path: PathBuf, message: String },

    #[error("Project is already registered: {path}")]
    ProjectExists { path: PathBuf },

    #[error("Directory is not registered as a project: {path}")]
    ProjectNotRegistered { path: PathBuf },

    #[error("Repository is already a favorite: {path}")]
    FavoriteExists { path: String },
}
