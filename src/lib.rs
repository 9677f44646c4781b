//! eden - Personal journaling utility
//!
//! Stores short dated entries, optionally grouped into named journals, in a
//! SQLite database kept under the per-user configuration directory.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::EdenError;
