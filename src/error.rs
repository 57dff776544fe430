//! Error type shared by the fallible operations of this crate.

use std::io;

use thiserror::Error;

/// Errors returned by [`PathExt`](crate::fs::PathExt) and friends.
#[derive(Debug, Error)]
pub enum DiskError {
    /// Argument was rejected before touching the filesystem, e.g. an empty path, or a path
    /// pointing to the wrong kind of object.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Underlying filesystem call failed.
    #[error(transparent)]
    Io(#[from] io::Error),
}

impl DiskError {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }
}

pub type Result<T, E = DiskError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_errors_are_transparent() {
        let err = DiskError::from(io::Error::other("disk on fire"));
        assert_eq!(err.to_string(), "disk on fire");
    }

    #[test]
    fn invalid_input_is_prefixed() {
        let err = DiskError::invalid("empty path");
        assert_eq!(err.to_string(), "invalid input: empty path");
    }
}
