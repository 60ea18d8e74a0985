//! Text encodings accepted for script sources

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

const BOM: char = '\u{feff}';

/// Supported source text encodings.
///
/// Labels follow the spellings Python tooling uses (`utf-8`, `utf-8-sig`,
/// `latin-1`, ...) so scripts can be opened with the encoding they declare.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Encoding {
    /// Strict UTF-8
    #[default]
    Utf8,
    /// UTF-8 with an optional leading byte order mark, which is dropped
    Utf8Sig,
    /// ISO-8859-1: every byte maps to the code point of the same value
    Latin1,
    /// 7-bit ASCII; any byte above 0x7F is a decode error
    Ascii,
}

impl Encoding {
    /// Get the canonical label for this encoding.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Utf8 => "utf-8",
            Self::Utf8Sig => "utf-8-sig",
            Self::Latin1 => "latin-1",
            Self::Ascii => "ascii",
        }
    }

    /// Decode one line of raw bytes.
    ///
    /// `first` marks the first line of the source, where `Utf8Sig` strips
    /// the byte order mark. Returns `None` if the bytes are not valid in
    /// this encoding.
    pub fn decode_line(&self, bytes: Vec<u8>, first: bool) -> Option<String> {
        match self {
            Self::Utf8 => String::from_utf8(bytes).ok(),
            Self::Utf8Sig => {
                let text = String::from_utf8(bytes).ok()?;
                match text.strip_prefix(BOM) {
                    Some(rest) if first => Some(rest.to_string()),
                    _ => Some(text),
                }
            }
            Self::Latin1 => Some(bytes.into_iter().map(char::from).collect()),
            Self::Ascii => {
                if bytes.is_ascii() {
                    // ASCII is a subset of UTF-8
                    String::from_utf8(bytes).ok()
                } else {
                    None
                }
            }
        }
    }
}

impl FromStr for Encoding {
    type Err = Error;

    fn from_str(label: &str) -> Result<Self> {
        let normalized = label.trim().to_ascii_lowercase().replace('_', "-");
        match normalized.as_str() {
            "utf-8" | "utf8" | "u8" => Ok(Self::Utf8),
            "utf-8-sig" | "utf8-sig" => Ok(Self::Utf8Sig),
            "latin-1" | "latin1" | "iso-8859-1" | "iso8859-1" | "l1" => Ok(Self::Latin1),
            "ascii" | "us-ascii" => Ok(Self::Ascii),
            _ => Err(Error::UnknownEncoding {
                label: label.to_string(),
            }),
        }
    }
}

impl TryFrom<String> for Encoding {
    type Error = Error;

    fn try_from(label: String) -> Result<Self> {
        label.parse()
    }
}

impl From<Encoding> for String {
    fn from(encoding: Encoding) -> Self {
        encoding.as_str().to_string()
    }
}

impl std::fmt::Display for Encoding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
