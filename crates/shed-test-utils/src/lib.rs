//! Shared test utilities for the shed workspace.
//!
//! This crate provides standardised test fixtures to eliminate duplication
//! across crate test suites. It is a dev-dependency only — never published.
//!
//! # Modules
//!
//! - [`git`] — git repository fixtures at two realism levels
//! - [`home`] — [`TestHome`] builder for a sandboxed shed home tree
//!
//! [`TestHome`]: home::TestHome

pub mod git;
pub mod home;

pub use home::TestHome;
