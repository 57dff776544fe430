//! Diskkit - small filesystem helpers.
//!
//! This crate provides existence predicates, `mkdir -p` and recursive delete, text file
//! read/write, basename sanitization, standard workspace names and ignore patterns, and opening
//! paths with the default application.

pub mod error;
pub mod fs;
pub mod layout;
pub mod os;

pub use error::{DiskError, Result};
