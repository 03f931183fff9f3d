//! Idempotent managed-block patching.
//!
//! A managed block is a machine-owned region inside an otherwise
//! human-owned text file (a shell profile, a `.env` file,
//! `.git/info/exclude`), delimited by labeled marker lines:
//!
//! ```text
//! # BEGIN:API_KEY
//! export API_KEY=secret
//! # END:API_KEY
//! ```
//!
//! [`BlockManager`] creates the target file when absent, replaces an
//! existing same-label block in place, or appends a new block, leaving
//! every byte outside the block span untouched. Re-applying the same
//! block is a no-op after the first application.

pub mod error;
pub mod manager;
pub mod span;

pub use error::{Error, Result};
pub use manager::BlockManager;
pub use span::find_span;
