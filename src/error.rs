//! Error type shared by every `utilkit` module.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors returned by `utilkit` operations.
#[derive(Debug, Error)]
pub enum Error {
    /// A numeric or domain precondition was violated.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A division was requested with a zero divisor.
    #[error("division by zero")]
    DivisionByZero,

    /// The lock marker already exists.
    #[error("lock already held: {}", path.display())]
    LockHeld {
        /// Path of the lock marker file.
        path: PathBuf,
    },

    /// One or more required fields are absent from a record.
    #[error("missing required fields: {}", .0.join(", "))]
    MissingFields(Vec<String>),

    /// Filesystem access failed.
    #[error("io error on {}: {source}", path.display())]
    Io {
        /// Path being accessed.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// A JSON document could not be parsed or serialized.
    #[error("json error on {}: {source}", path.display())]
    Json {
        /// Path of the document (empty for in-memory values).
        path: PathBuf,
        /// Underlying serde error.
        #[source]
        source: serde_json::Error,
    },

    /// A date/time value could not be formatted or parsed.
    #[error("date/time error: {0}")]
    DateTime(String),

    /// The operating system could not supply randomness.
    #[error("randomness unavailable: {0}")]
    Random(String),
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn json(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::Json {
            path: path.into(),
            source,
        }
    }
}

/// Convenience alias used across the crate.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_lists_every_name() {
        let err = Error::MissingFields(vec!["email".to_string(), "age".to_string()]);
        assert_eq!(err.to_string(), "missing required fields: email, age");
    }

    #[test]
    fn lock_held_names_the_marker() {
        let err = Error::LockHeld {
            path: PathBuf::from("/tmp/app.lock"),
        };
        assert_eq!(err.to_string(), "lock already held: /tmp/app.lock");
    }
}
