//! Error types for the chunk source system.

use std::io;
use std::path::{Path, PathBuf};

/// The main error type for sources, sinks, and consumption strategies.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The underlying resource could not be opened or read.
    ///
    /// Surfaced at source creation (missing or unreadable path) or on a
    /// failed read, before the affected chunk is emitted.
    #[error("resource {path:?}: {source}")]
    Resource {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Writing a chunk to an output sink failed.
    #[error("output sink: {0}")]
    Output(#[from] io::Error),

    /// A consumption rule was broken, e.g. reading from a pull handle after
    /// it was closed.
    #[error("source misuse: {0}")]
    Misuse(&'static str),

    /// A custom error with a message.
    #[error("{0}")]
    Custom(String),
}

impl Error {
    /// Create a resource error tied to a filesystem path.
    pub fn resource<P: AsRef<Path>>(path: P, source: io::Error) -> Self {
        Error::Resource {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Create a misuse error.
    pub fn misuse(rule: &'static str) -> Self {
        Error::Misuse(rule)
    }

    /// Create a custom error with a message.
    pub fn custom<S: Into<String>>(message: S) -> Self {
        Error::Custom(message.into())
    }
}

impl From<String> for Error {
    fn from(s: String) -> Self {
        Error::Custom(s)
    }
}

impl From<&str> for Error {
    fn from(s: &str) -> Self {
        Error::Custom(s.to_string())
    }
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, Error>;
