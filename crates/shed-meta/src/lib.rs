//! Project registry and favorites for shed.
//!
//! Persisted state lives in two small files: a YAML registry of known
//! projects and a JSON list of favorite repositories. Both load from and
//! save to explicit paths handed in by the caller.

pub mod error;
pub mod favorites;
pub mod project;

pub use error::{Error, Result};
pub use favorites::Favorites;
pub use project::{Project, ProjectRegistry};
