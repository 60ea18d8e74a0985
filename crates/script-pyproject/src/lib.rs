//! Consumers of the `pyproject` metadata block.
//!
//! [`PyprojectMetadata`] decodes the block text extracted by
//! `script-blocks` as TOML and reads its `run` table, either as raw strings
//! ([`RunRequirementsText`]) or as typed values ([`RunRequirements`]).
//! Version specifiers and dependency strings are parsed by `pep440_rs` and
//! `pep508_rs`; their types are re-exported here.

pub mod error;
pub mod pyproject;

pub use error::{Error, Result};
pub use pep440_rs::VersionSpecifiers;
pub use pep508_rs::Requirement;
pub use pyproject::{PyprojectMetadata, RunRequirements, RunRequirementsText};
