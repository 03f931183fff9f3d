//! Git repository wiring for shed.
//!
//! Thin git2 wrappers for the setup work shed performs on a repository:
//! local identity, the `origin` remote, and the `.git/info/exclude` path.

pub mod error;
pub mod setup;

pub use error::{Error, Result};
pub use setup::{configure_owner, exclude_file, open_repo, origin_url, repo_dir_name};
