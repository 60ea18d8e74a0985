//! Shared test fixtures for the script-metadata workspace.
//!
//! Dev-dependency only. Holds no dependency on the parsing crates so that
//! each of them can use it from its own tests.
//!
//! # Modules
//!
//! - [`scripts`]: sample scripts with their expected extraction results
//! - [`dir`]: [`ScriptDir`](dir::ScriptDir), a temporary directory of script files
//! - [`logging`]: a `tracing` subscriber for test output

pub mod dir;
pub mod logging;
pub mod scripts;
