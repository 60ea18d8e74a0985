//! Non-fatal diagnostics collected while extracting blocks

use std::fmt;

/// Where a warning was raised.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Location {
    /// 1-based line number
    Line(usize),
    /// Raised after the last line was consumed
    EndOfFile,
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Line(n) => write!(f, "Line {}", n),
            Self::EndOfFile => write!(f, "End of File"),
        }
    }
}

/// What kind of recoverable problem was found.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum WarningKind {
    /// A block ended without a `# ///` closer; it was not recorded.
    UnclosedBlock { name: String },
    /// An opening marker appeared inside block `open`. The line was kept
    /// as payload of `open`.
    NestedOpener { name: String, open: String },
    /// An opening marker named something that is not a valid block type.
    InvalidName { name: String },
    /// An opening marker used a `.toml` suffix, e.g. `pyproject.toml`.
    LegacyExtension { found: String, expected: String },
}

impl fmt::Display for WarningKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnclosedBlock { name } => write!(
                f,
                "Potential unclosed block '{}' detected. \
                 A '# ///' block is needed to indicate the end of the block.",
                name
            ),
            Self::NestedOpener { name, open } => write!(
                f,
                "New '{}' block encountered before block '{}' closed.",
                name, open
            ),
            Self::InvalidName { name } => write!(
                f,
                "'{}' is not a valid block name. \
                 Block names must consist of alphanumeric characters and '-' only.",
                name
            ),
            Self::LegacyExtension { found, expected } => {
                write!(f, "'{}' block found, should be '{}'.", found, expected)
            }
        }
    }
}

/// A diagnostic recorded during parsing.
///
/// Renders as `"Line 4: New 'other' block encountered ..."` or
/// `"End of File: Potential unclosed block ..."`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Warning {
    pub location: Location,
    pub kind: WarningKind,
}

impl Warning {
    pub fn new(location: Location, kind: WarningKind) -> Self {
        Self { location, kind }
    }

    /// The line number, or `None` for end-of-file warnings.
    pub fn line(&self) -> Option<usize> {
        match self.location {
            Location::Line(n) => Some(n),
            Location::EndOfFile => None,
        }
    }

    /// Whether this warning reports a block that was never closed.
    pub fn is_unclosed(&self) -> bool {
        matches!(self.kind, WarningKind::UnclosedBlock { .. })
    }
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.location, self.kind)
    }
}
