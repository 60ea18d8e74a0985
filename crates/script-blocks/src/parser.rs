//! Block extraction state machine.
//!
//! Recognises blocks of the form:
//! ```text
//! # /// TYPE
//! # payload
//! # ///
//! ```
//!
//! A block runs from its opening marker to the last `# ///` line before the
//! first line that is not a comment. Comment lines after an earlier `# ///`
//! are therefore still payload if another `# ///` follows them.

use std::collections::BTreeMap;
use std::mem;

use crate::error::{Error, Result};
use crate::metadata::ScriptMetadata;
use crate::name::{
    CLOSE_MARKER, COMMENT_PREFIX, OPEN_MARKER_PREFIX, is_valid_block_name, legacy_extension_stem,
};
use crate::warning::{Location, Warning, WarningKind};

/// A block whose opening marker has been seen.
#[derive(Debug)]
struct OpenBlock {
    name: String,
    /// Payload up to the most recent `# ///` line
    committed: String,
    /// Payload seen since the most recent `# ///` line (or the opener)
    pending: String,
    /// Whether any `# ///` line has been seen in this block
    end_seen: bool,
}

impl OpenBlock {
    fn new(name: String) -> Self {
        Self {
            name,
            committed: String::new(),
            pending: String::new(),
            end_seen: false,
        }
    }
}

#[derive(Debug, Default)]
enum State {
    #[default]
    Outside,
    Inside(OpenBlock),
}

/// Push-driven extractor: feed lines in order, then [`finish`](Self::finish).
///
/// Each parse needs its own extractor; nothing is shared between instances.
///
/// # Example
/// ```
/// use script_blocks::BlockExtractor;
///
/// let mut extractor = BlockExtractor::new();
/// for line in ["# /// script\n", "# dependencies = []\n", "# ///\n"] {
///     extractor.feed_line(line).unwrap();
/// }
/// let metadata = extractor.finish();
/// assert_eq!(metadata.block("script"), Some("dependencies = []\n"));
/// ```
#[derive(Debug, Default)]
pub struct BlockExtractor {
    state: State,
    line_no: usize,
    blocks: BTreeMap<String, String>,
    warnings: Vec<Warning>,
}

impl BlockExtractor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of lines consumed so far.
    pub fn line_no(&self) -> usize {
        self.line_no
    }

    /// Classify the next line.
    ///
    /// `line` may include its terminator. Fails only when a block type is
    /// opened again after an earlier block of that type closed.
    pub fn feed_line(&mut self, line: &str) -> Result<()> {
        self.line_no += 1;

        match mem::take(&mut self.state) {
            State::Outside => self.outside(line),
            State::Inside(block) => {
                self.inside(block, line);
                Ok(())
            }
        }
    }

    /// Close out the parse and return what was found.
    pub fn finish(mut self) -> ScriptMetadata {
        if let State::Inside(block) = mem::take(&mut self.state) {
            self.end_block(block, Location::EndOfFile);
        }
        ScriptMetadata::new(self.blocks, self.warnings)
    }

    fn outside(&mut self, line: &str) -> Result<()> {
        if !line.starts_with(COMMENT_PREFIX) {
            return Ok(());
        }

        let line = line.trim_end();
        if line == CLOSE_MARKER {
            return Ok(());
        }
        let Some(rest) = line.strip_prefix(OPEN_MARKER_PREFIX) else {
            return Ok(());
        };

        let name = rest.trim();
        if !is_valid_block_name(name) {
            if let Some(stem) = legacy_extension_stem(name) {
                self.warn(
                    Location::Line(self.line_no),
                    WarningKind::LegacyExtension {
                        found: name.to_string(),
                        expected: stem.to_string(),
                    },
                );
            }
            self.warn(
                Location::Line(self.line_no),
                WarningKind::InvalidName {
                    name: name.to_string(),
                },
            );
            return Ok(());
        }

        if self.blocks.contains_key(name) {
            return Err(Error::DuplicateBlock {
                name: name.to_string(),
                line: self.line_no,
            });
        }

        tracing::debug!(block = name, line = self.line_no, "Opened metadata block");
        self.state = State::Inside(OpenBlock::new(name.to_string()));
        Ok(())
    }

    fn inside(&mut self, mut block: OpenBlock, line: &str) {
        let trimmed = line.trim_end();

        if trimmed == CLOSE_MARKER {
            let pending = mem::take(&mut block.pending);
            block.committed.push_str(&pending);
            // If a later `# ///` follows, this line was payload after all
            block.pending.push_str(&line[2..]);
            block.end_seen = true;
        } else if trimmed == COMMENT_PREFIX || line.starts_with("# ") {
            if let Some(rest) = line.strip_prefix(OPEN_MARKER_PREFIX) {
                self.warn(
                    Location::Line(self.line_no),
                    WarningKind::NestedOpener {
                        name: rest.trim().to_string(),
                        open: block.name.clone(),
                    },
                );
            }
            let payload = line
                .strip_prefix("# ")
                .or_else(|| line.strip_prefix(COMMENT_PREFIX))
                .unwrap_or(line);
            block.pending.push_str(payload);
        } else {
            self.end_block(block, Location::Line(self.line_no));
            return;
        }

        self.state = State::Inside(block);
    }

    /// Record `block` if a closer was seen, otherwise warn that it was left
    /// open at `location`.
    fn end_block(&mut self, block: OpenBlock, location: Location) {
        if block.end_seen {
            tracing::debug!(block = %block.name, "Committed metadata block");
            self.blocks.insert(block.name, block.committed);
        } else {
            self.warn(location, WarningKind::UnclosedBlock { name: block.name });
        }
    }

    fn warn(&mut self, location: Location, kind: WarningKind) {
        let warning = Warning::new(location, kind);
        tracing::warn!(%warning, "Script metadata issue");
        self.warnings.push(warning);
    }
}

/// Extract all metadata blocks from a sequence of lines.
///
/// Lines may carry their terminators; the payload keeps whatever
/// terminator each payload line had.
///
/// # Example
/// ```
/// use script_blocks::parse_lines;
///
/// let metadata = parse_lines([
///     "# /// pyproject\n",
///     "# [run]\n",
///     "# ///\n",
/// ]).unwrap();
/// assert_eq!(metadata.block("pyproject"), Some("[run]\n"));
/// assert!(metadata.warnings.is_empty());
/// ```
pub fn parse_lines<I, S>(lines: I) -> Result<ScriptMetadata>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut extractor = BlockExtractor::new();
    for line in lines {
        extractor.feed_line(line.as_ref())?;
    }
    Ok(extractor.finish())
}
