//! Error types shared by the loaders, the cache and the estimator
//!
//! Every variant is fatal: the analysis assumes a validated, complete corpus,
//! so nothing is retried or skipped once an error is detected.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Convenience alias used throughout the library
pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum Error {
    /// A word list, ranked word file or cache does not exist
    #[error("input not found: {}", path.display())]
    InputNotFound { path: PathBuf },

    /// Any other I/O failure while reading or writing a file
    #[error("I/O error on {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A record that cannot be interpreted (bad JSON, bad key, bad rank line...)
    #[error("malformed record in {} at {location}: {reason}", path.display())]
    MalformedRecord {
        path: PathBuf,
        location: String,
        reason: String,
    },

    /// The compatibility set could not be encoded as JSON
    #[error("failed to encode cache: {0}")]
    Encode(#[source] serde_json::Error),

    /// A word or pattern that is not exactly the fixed length
    #[error("length mismatch in {context}: expected {expected}, got {actual}")]
    LengthMismatch {
        context: String,
        expected: usize,
        actual: usize,
    },

    /// The estimator was asked for more distinct draws than there are entries
    #[error("cannot sample {requested} distinct entries from {available}")]
    InsufficientSample { requested: usize, available: usize },
}

impl Error {
    /// Map an I/O error on `path`, turning `NotFound` into [`Error::InputNotFound`]
    pub(crate) fn from_io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        let path = path.into();
        if source.kind() == io::ErrorKind::NotFound {
            Self::InputNotFound { path }
        } else {
            Self::Io { path, source }
        }
    }

    pub(crate) fn malformed(
        path: impl Into<PathBuf>,
        location: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::MalformedRecord {
            path: path.into(),
            location: location.into(),
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_becomes_input_not_found() {
        let err = Error::from_io("words.txt", io::Error::from(io::ErrorKind::NotFound));
        assert!(matches!(err, Error::InputNotFound { .. }));
        assert_eq!(err.to_string(), "input not found: words.txt");
    }

    #[test]
    fn other_io_errors_keep_their_source() {
        let err = Error::from_io(
            "output.json",
            io::Error::from(io::ErrorKind::PermissionDenied),
        );
        assert!(matches!(err, Error::Io { .. }));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn malformed_record_names_location() {
        let err = Error::malformed("word_ranks.txt", "line 3", "rank is not an integer");
        assert_eq!(
            err.to_string(),
            "malformed record in word_ranks.txt at line 3: rank is not an integer"
        );
    }
}
