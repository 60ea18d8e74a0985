//! Error types for script-pyproject

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Metadata extraction failed: {0}")]
    Blocks(#[from] script_blocks::Error),

    #[error("Block not found: '{name}'")]
    BlockNotFound { name: String },

    #[error("Invalid TOML in '{block}' block: {message}{}", possible_issues(.warnings))]
    Toml {
        block: String,
        message: String,
        /// Rendered extraction warnings that may explain the failure
        warnings: Vec<String>,
    },

    #[error("Invalid [run] table: {message}")]
    InvalidRunTable { message: String },

    #[error("Invalid version specifier '{specifier}': {message}")]
    InvalidSpecifier { specifier: String, message: String },

    #[error("Invalid requirement '{requirement}': {message}")]
    InvalidRequirement { requirement: String, message: String },
}

fn possible_issues(warnings: &[String]) -> String {
    if warnings.is_empty() {
        String::new()
    } else {
        format!("; Possible metadata issues: {}", warnings.join(", "))
    }
}
