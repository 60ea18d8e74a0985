//! Source acquisition for script metadata parsing
//!
//! Opens script files with a chosen text encoding and streams their lines,
//! terminators included, so the block extractor sees exactly what the
//! in-memory entry point would see for the same text.

pub mod config;
pub mod encoding;
pub mod error;
pub mod io;
pub mod path;

pub use config::ReadOptions;
pub use encoding::Encoding;
pub use error::{Error, Result};
pub use io::LineReader;
pub use path::NormalizedPath;
