//! Parse results and the string/path entry points

use std::collections::BTreeMap;
use std::path::Path;
use std::str::FromStr;

use script_fs::{NormalizedPath, ReadOptions, io};

use crate::error::{Error, Result};
use crate::parser::{BlockExtractor, parse_lines};
use crate::warning::Warning;

/// Name of the block that carries pyproject-style TOML.
pub const PYPROJECT_BLOCK: &str = "pyproject";

/// Metadata blocks extracted from one source.
///
/// Two results compare equal when both their blocks and their warnings are
/// equal, so parsing the same input twice gives equal values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScriptMetadata {
    /// Block name to payload text, comment prefixes removed
    pub blocks: BTreeMap<String, String>,
    /// Recoverable problems, in the order they were found
    pub warnings: Vec<Warning>,
}

impl ScriptMetadata {
    pub fn new(blocks: BTreeMap<String, String>, warnings: Vec<Warning>) -> Self {
        Self { blocks, warnings }
    }

    /// Extract metadata from source code held in memory.
    ///
    /// # Example
    /// ```
    /// use script_blocks::ScriptMetadata;
    ///
    /// let source = "# /// script\n# dependencies = []\n# ///\nimport os\n";
    /// let metadata = ScriptMetadata::from_string(source).unwrap();
    /// assert_eq!(metadata.block("script"), Some("dependencies = []\n"));
    /// ```
    pub fn from_string(source: &str) -> Result<Self> {
        parse_lines(source.split_inclusive('\n'))
    }

    /// Extract metadata from a source file, streaming it line by line.
    pub fn from_path(path: impl AsRef<Path>, options: &ReadOptions) -> Result<Self> {
        let path = NormalizedPath::new(path);
        let mut extractor = BlockExtractor::new();
        for line in io::open_lines(&path, options)? {
            extractor.feed_line(&line?)?;
        }
        Ok(extractor.finish())
    }

    /// Extract metadata from a UTF-8 source file.
    pub fn from_path_default(path: impl AsRef<Path>) -> Result<Self> {
        Self::from_path(path, &ReadOptions::default())
    }

    /// Extract metadata from already-split lines.
    pub fn from_lines<I, S>(lines: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        parse_lines(lines)
    }

    /// Get the payload of a block.
    pub fn block(&self, name: &str) -> Option<&str> {
        self.blocks.get(name).map(String::as_str)
    }

    /// Check whether a block was found and closed.
    pub fn has_block(&self, name: &str) -> bool {
        self.blocks.contains_key(name)
    }

    /// Payload of the `pyproject` block.
    pub fn pyproject_text(&self) -> Option<&str> {
        self.block(PYPROJECT_BLOCK)
    }

    /// Names of all recorded blocks, sorted.
    pub fn block_names(&self) -> impl Iterator<Item = &str> {
        self.blocks.keys().map(String::as_str)
    }

    /// All warnings rendered and joined with `", "`.
    ///
    /// Empty when there were no warnings. Meant for annotating errors from
    /// whatever decodes the payload afterwards.
    pub fn warnings_text(&self) -> String {
        self.warnings
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl FromStr for ScriptMetadata {
    type Err = Error;

    fn from_str(source: &str) -> Result<Self> {
        Self::from_string(source)
    }
}
