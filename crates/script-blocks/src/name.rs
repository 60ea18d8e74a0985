//! Block markers and block-name validation

/// Every comment line in a block starts with this.
pub const COMMENT_PREFIX: &str = "#";

/// Prefix of an opening marker; the block name follows.
pub const OPEN_MARKER_PREFIX: &str = "# /// ";

/// A line that is exactly this (ignoring trailing whitespace) closes a block.
pub const CLOSE_MARKER: &str = "# ///";

/// Suffix that authors sometimes append to a block name by mistake.
const LEGACY_EXTENSION: &str = ".toml";

/// Check whether `name` is a valid block type.
///
/// Valid names are non-empty and made only of ASCII letters, digits and
/// `-`. Membership is tested byte by byte, so Unicode letters and digits
/// are rejected.
///
/// # Example
/// ```
/// use script_blocks::is_valid_block_name;
///
/// assert!(is_valid_block_name("pyproject"));
/// assert!(is_valid_block_name("123test-example"));
/// assert!(!is_valid_block_name("pyproject.toml"));
/// assert!(!is_valid_block_name(""));
/// ```
pub fn is_valid_block_name(name: &str) -> bool {
    !name.is_empty()
        && name
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'-')
}

/// If `name` looks like a valid name with a `.toml` extension tacked on,
/// return the name without it.
pub(crate) fn legacy_extension_stem(name: &str) -> Option<&str> {
    let stem = name.strip_suffix(LEGACY_EXTENSION)?;
    is_valid_block_name(stem).then_some(stem)
}
