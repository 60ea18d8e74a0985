//! Log capture for test runs.
//!
//! The parsing crates only emit `tracing` events. Tests that want to see
//! them (for example the `warn!` mirrored for each recorded warning) call
//! [`capture`] first and run with `RUST_LOG=script_blocks=debug`.

use std::sync::OnceLock;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Install a subscriber that writes through the libtest output capture.
///
/// Filters with `RUST_LOG`, defaulting to `warn`. Fails if a global
/// subscriber is already installed.
pub fn init() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let fmt_layer = fmt::layer()
        .with_test_writer()
        .with_target(true)
        .with_level(true)
        .with_line_number(true)
        .without_time()
        .compact();

    let filter_layer = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new("warn"))?;

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}

/// Install the test subscriber once per process.
///
/// Safe to call from every test. Returns whether this process's subscriber
/// is the one from [`init`].
pub fn capture() -> bool {
    static INSTALLED: OnceLock<bool> = OnceLock::new();
    *INSTALLED.get_or_init(|| init().is_ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capture_is_idempotent() {
        let first = capture();
        assert_eq!(capture(), first);
        assert!(init().is_err());

        tracing::warn!(line = 1, block = "bad$name", "Test event");
    }
}
