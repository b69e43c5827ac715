//! Filesystem helpers for the Smart Router manifest builder
//!
//! Provides normalized paths and atomic writes that never leave a partially
//! written target behind.

pub mod error;
pub mod io;
pub mod path;

pub use error::{Error, Result};
pub use path::NormalizedPath;
