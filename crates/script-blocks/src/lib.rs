//! Inline script metadata block extraction.
//!
//! Scripts can carry metadata in comment blocks:
//!
//! ```text
//! # /// pyproject
//! # [run]
//! # requires-python = ">=3.11"
//! # ///
//! ```
//!
//! The [`parser`] module holds the line-classification state machine that
//! turns a line sequence into a [`ScriptMetadata`]: block name to payload
//! text, with the `# ` comment prefixes removed, plus the non-fatal
//! [`Warning`]s found on the way. A block type opened and closed twice is
//! the only fatal condition ([`Error::DuplicateBlock`]).
//!
//! The payload is handed back uninterpreted; decoding it as TOML is left to
//! consumers.

pub mod error;
pub mod metadata;
pub mod name;
pub mod parser;
pub mod warning;

pub use error::{Error, Result};
pub use metadata::ScriptMetadata;
pub use name::is_valid_block_name;
pub use parser::{BlockExtractor, parse_lines};
pub use warning::{Location, Warning, WarningKind};
