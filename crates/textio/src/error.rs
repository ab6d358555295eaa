//! Typed error types for text file I/O.

use std::io;
use std::path::PathBuf;

/// Bytes could not be decoded with the requested encoding.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    /// Input is not valid UTF-8.
    #[error("invalid UTF-8 after byte {valid_up_to}")]
    InvalidUtf8 {
        /// Length of the longest valid UTF-8 prefix.
        valid_up_to: usize,
    },
}

/// An encoding label was not recognized.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown encoding: {0} (expected latin1 or utf8)")]
pub struct UnknownEncoding(pub String);

/// Reading or writing a text file failed.
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum TextIoError {
    /// The file could not be read.
    #[error("failed to read {}", path.display())]
    Read {
        /// File that was being read.
        path: PathBuf,
        /// The underlying OS error.
        #[source]
        source: io::Error,
    },

    /// The file could not be written.
    #[error("failed to write {}", path.display())]
    Write {
        /// File that was being written.
        path: PathBuf,
        /// The underlying OS error.
        #[source]
        source: io::Error,
    },

    /// The file was read but its bytes could not be decoded.
    #[error("failed to decode {}", path.display())]
    Decode {
        /// File that was being decoded.
        path: PathBuf,
        /// What went wrong.
        #[source]
        source: DecodeError,
    },
}

impl TextIoError {
    /// Path of the file involved.
    pub fn path(&self) -> &std::path::Path {
        match self {
            TextIoError::Read { path, .. }
            | TextIoError::Write { path, .. }
            | TextIoError::Decode { path, .. } => path,
        }
    }
}
