//! Error types for script-fs

use crate::NormalizedPath;

/// Result type for script-fs operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while reading script sources
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("I/O error at {path}: {source}")]
    Io {
        path: NormalizedPath,
        #[source]
        source: std::io::Error,
    },

    #[error("Could not decode line {line} of {path} as {encoding}")]
    Decode {
        path: NormalizedPath,
        line: usize,
        encoding: crate::Encoding,
    },

    #[error("Source file too large: {path} is {size} bytes (max {max})")]
    TooLarge { path: NormalizedPath, size: u64, max: u64 },

    #[error("Unknown text encoding: {label}")]
    UnknownEncoding { label: String },
}

impl Error {
    pub fn io(path: impl Into<NormalizedPath>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
