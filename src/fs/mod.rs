//! Filesystem utilities and extensions.
//!
//! Provides the [`PathExt`](path_ext::PathExt) extension trait for [`Path`](std::path::Path),
//! the [`safe_basename`](naming::safe_basename) sanitizer and the standard
//! [ignore patterns](ignore).

pub mod ignore;
pub mod naming;
pub mod path_ext;

pub use naming::{is_safe_basename, safe_basename};
pub use path_ext::PathExt;
