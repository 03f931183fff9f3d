//! Filesystem primitives for shed
//!
//! Whole-file reads, atomic writes, and format-agnostic config persistence.
//! Every function takes a concrete path; nothing in this crate consults the
//! process environment.

pub mod config;
pub mod error;
pub mod io;

pub use error::{Error, Result};
pub use io::{mirror_dir, read_text, read_text_if_exists, write_atomic};
