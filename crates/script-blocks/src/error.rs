//! Error types for script-blocks

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Filesystem error: {0}")]
    Fs(#[from] script_fs::Error),

    /// A block type was opened again after an earlier block of the same
    /// type had already closed.
    #[error("Line {line}: Duplicate '{name}' block found.")]
    DuplicateBlock { name: String, line: usize },
}
