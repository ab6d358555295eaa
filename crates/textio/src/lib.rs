//! Text file I/O with an explicit input encoding.
//!
//! Every read takes a [`TextEncoding`] argument; there is no process-wide
//! default. [`TextEncoding::Latin1`] maps each byte `0x00..=0xFF` to the
//! code point of the same value, so decoding arbitrary bytes never fails.
//! Output is always written as UTF-8, byte for byte, with no newline
//! translation.

#![warn(missing_docs)]

mod error;

pub use error::{DecodeError, TextIoError, UnknownEncoding};

use std::borrow::Cow;
use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use log::debug;

/// Character encoding used to decode input files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TextEncoding {
    /// ISO-8859-1. Accepts every byte.
    #[default]
    Latin1,
    /// Strict UTF-8.
    Utf8,
}

impl TextEncoding {
    /// Canonical lowercase label.
    pub const fn label(self) -> &'static str {
        match self {
            TextEncoding::Latin1 => "latin1",
            TextEncoding::Utf8 => "utf8",
        }
    }
}

impl fmt::Display for TextEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for TextEncoding {
    type Err = UnknownEncoding;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "latin1" | "latin-1" | "iso-8859-1" | "iso8859-1" | "l1" => Ok(TextEncoding::Latin1),
            "utf8" | "utf-8" => Ok(TextEncoding::Utf8),
            _ => Err(UnknownEncoding(s.to_string())),
        }
    }
}

/// Decode `bytes` with `encoding`.
///
/// Borrows when the bytes are already valid UTF-8 text in the target
/// encoding (always for [`TextEncoding::Utf8`]; for Latin-1 only when every
/// byte is ASCII).
pub fn decode(bytes: &[u8], encoding: TextEncoding) -> Result<Cow<'_, str>, DecodeError> {
    match encoding {
        TextEncoding::Latin1 => Ok(encoding_rs::mem::decode_latin1(bytes)),
        TextEncoding::Utf8 => std::str::from_utf8(bytes)
            .map(Cow::Borrowed)
            .map_err(|e| DecodeError::InvalidUtf8 {
                valid_up_to: e.valid_up_to(),
            }),
    }
}

/// Read the file at `path` and decode it with `encoding`.
pub fn read_text(path: impl AsRef<Path>, encoding: TextEncoding) -> Result<String, TextIoError> {
    let path = path.as_ref();
    let bytes = fs::read(path).map_err(|source| TextIoError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(
        "read {} bytes from {} as {}",
        bytes.len(),
        path.display(),
        encoding
    );

    let text = decode(&bytes, encoding).map_err(|source| TextIoError::Decode {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(text.into_owned())
}

/// Write `text` to `path` as UTF-8, replacing any existing file.
pub fn write_utf8(path: impl AsRef<Path>, text: &str) -> Result<(), TextIoError> {
    let path = path.as_ref();
    fs::write(path, text.as_bytes()).map_err(|source| TextIoError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    debug!("wrote {} bytes to {}", text.len(), path.display());
    Ok(())
}
