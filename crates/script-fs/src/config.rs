//! Options controlling how script sources are read

use crate::Encoding;
use serde::{Deserialize, Serialize};

/// How a script source file is opened.
///
/// Deserializable so hosts can embed it in their own configuration:
///
/// ```toml
/// encoding = "utf-8-sig"
/// max_bytes = 1048576
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReadOptions {
    /// Text encoding of the source file
    pub encoding: Encoding,
    /// Refuse files larger than this many bytes
    pub max_bytes: Option<u64>,
}

impl ReadOptions {
    /// Create options with the default UTF-8 encoding and no size cap.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the text encoding.
    pub fn with_encoding(mut self, encoding: Encoding) -> Self {
        self.encoding = encoding;
        self
    }

    /// Set the maximum accepted file size in bytes.
    pub fn with_max_bytes(mut self, max_bytes: u64) -> Self {
        self.max_bytes = Some(max_bytes);
        self
    }
}
