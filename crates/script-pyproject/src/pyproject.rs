//! Decoding of the `pyproject` block and its `run` table.
//!
//! ```text
//! # /// pyproject
//! # [run]
//! # requires-python = ">=3.11"
//! # dependencies = ["requests<3", "rich"]
//! # ///
//! ```

use serde::Deserialize;
use std::path::Path;

use script_blocks::ScriptMetadata;
use script_blocks::metadata::PYPROJECT_BLOCK;
use script_blocks::warning::Warning;
use script_fs::ReadOptions;

use pep440_rs::VersionSpecifiers;
use pep508_rs::Requirement;

use crate::error::{Error, Result};

/// Name of the table holding run requirements.
pub const RUN_TABLE: &str = "run";

/// The `run` table with its values left as strings.
///
/// Missing keys default to `None` and an empty list. Keys other than
/// `requires-python` and `dependencies` are kept in `extra`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RunRequirementsText {
    #[serde(rename = "requires-python", default)]
    pub requires_python: Option<String>,
    #[serde(default)]
    pub dependencies: Vec<String>,
    #[serde(flatten)]
    pub extra: toml::Table,
}

/// The `run` table with `requires-python` parsed as PEP 440 version
/// specifiers and `dependencies` as PEP 508 requirements.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RunRequirements {
    pub requires_python: Option<VersionSpecifiers>,
    pub dependencies: Vec<Requirement>,
    pub extra: toml::Table,
}

impl TryFrom<RunRequirementsText> for RunRequirements {
    type Error = Error;

    fn try_from(text: RunRequirementsText) -> Result<Self> {
        let requires_python = text
            .requires_python
            .filter(|spec| !spec.trim().is_empty())
            .map(|spec| {
                spec.parse::<VersionSpecifiers>()
                    .map_err(|e| Error::InvalidSpecifier {
                        message: e.to_string(),
                        specifier: spec,
                    })
            })
            .transpose()?;

        let dependencies = text
            .dependencies
            .iter()
            .map(|dep| {
                dep.parse::<Requirement>()
                    .map_err(|e| Error::InvalidRequirement {
                        requirement: dep.clone(),
                        message: e.message.to_string(),
                    })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            requires_python,
            dependencies,
            extra: text.extra,
        })
    }
}

/// Extracted metadata with accessors for the `pyproject` block.
///
/// The block text is decoded on each call; cache the results if they are
/// needed repeatedly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PyprojectMetadata {
    metadata: ScriptMetadata,
}

impl PyprojectMetadata {
    pub fn new(metadata: ScriptMetadata) -> Self {
        Self { metadata }
    }

    /// Extract metadata from source code held in memory.
    pub fn from_string(source: &str) -> Result<Self> {
        Ok(Self::new(ScriptMetadata::from_string(source)?))
    }

    /// Extract metadata from a source file.
    pub fn from_path(path: impl AsRef<Path>, options: &ReadOptions) -> Result<Self> {
        Ok(Self::new(ScriptMetadata::from_path(path, options)?))
    }

    /// The underlying extraction result.
    pub fn metadata(&self) -> &ScriptMetadata {
        &self.metadata
    }

    pub fn into_metadata(self) -> ScriptMetadata {
        self.metadata
    }

    pub fn warnings(&self) -> &[Warning] {
        &self.metadata.warnings
    }

    /// Raw text of the `pyproject` block.
    pub fn pyproject_text(&self) -> Option<&str> {
        self.metadata.pyproject_text()
    }

    /// Decode the `pyproject` block, failing if there is none.
    pub fn get_pyproject_toml(&self) -> Result<toml::Table> {
        let text = self.pyproject_text().ok_or_else(|| Error::BlockNotFound {
            name: PYPROJECT_BLOCK.to_string(),
        })?;

        tracing::debug!(bytes = text.len(), "Decoding pyproject block");
        text.parse::<toml::Table>().map_err(|e| Error::Toml {
            block: PYPROJECT_BLOCK.to_string(),
            message: e.message().to_string(),
            warnings: self.warnings().iter().map(ToString::to_string).collect(),
        })
    }

    /// Decode the `pyproject` block, or an empty table if there is none.
    pub fn pyproject_toml(&self) -> Result<toml::Table> {
        match self.get_pyproject_toml() {
            Err(Error::BlockNotFound { .. }) => Ok(toml::Table::new()),
            other => other,
        }
    }

    /// The `run` table with its values as strings.
    ///
    /// Defaults when the block or the table is missing.
    pub fn run_requirements_text(&self) -> Result<RunRequirementsText> {
        let mut table = self.pyproject_toml()?;
        match table.remove(RUN_TABLE) {
            None => Ok(RunRequirementsText::default()),
            Some(toml::Value::Table(run)) => {
                toml::Value::Table(run)
                    .try_into()
                    .map_err(|e: toml::de::Error| Error::InvalidRunTable {
                        message: e.message().to_string(),
                    })
            }
            Some(other) => Err(Error::InvalidRunTable {
                message: format!("expected a table, found {}", other.type_str()),
            }),
        }
    }

    /// The `run` table with `requires-python` parsed as
    /// [`VersionSpecifiers`] and `dependencies` as [`Requirement`]s.
    pub fn run_requirements(&self) -> Result<RunRequirements> {
        self.run_requirements_text()?.try_into()
    }
}
