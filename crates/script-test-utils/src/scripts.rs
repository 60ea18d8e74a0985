//! Sample scripts and what extracting them should produce.

/// Expected outcome of extracting one [`Fixture`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expected {
    /// Extraction succeeds with these blocks and this many warnings.
    Blocks {
        blocks: &'static [(&'static str, &'static str)],
        warnings: usize,
    },
    /// Extraction fails with a duplicate block error.
    Duplicate { name: &'static str, line: usize },
}

/// A named sample script.
#[derive(Debug, Clone, Copy)]
pub struct Fixture {
    pub name: &'static str,
    pub source: &'static str,
    pub expected: Expected,
}

/// The example from the inline script metadata proposal.
pub const PEP_EXAMPLE: &str = r##""""
The original example block from the PEP.
"""

# /// pyproject
# [run]
# requires-python = ">=3.11"
# dependencies = [
#   "requests<3",
#   "rich",
# ]
# ///

import requests
from rich.pretty import pprint

resp = requests.get("https://peps.python.org/api/peps.json")
data = resp.json()
pprint([(k, v["title"]) for k, v in data.items()][:10])
"##;

/// Payload of the `pyproject` block in [`PEP_EXAMPLE`].
pub const PEP_EXAMPLE_PYPROJECT: &str = r##"[run]
requires-python = ">=3.11"
dependencies = [
  "requests<3",
  "rich",
]
"##;

/// A closer after a comment run extends the earlier block.
pub const MULTIPLE_BLOCKS_JOINED: &str = r##"# Multiple block discrepancy between the regex in the pep
# and the text description.

# /// pyproject
# run.dependencies = [
#     "ducktools-lazyimporter>=0.1.1",
# ]
# ///
#
# Middle Comment
#
# /// newblock
# newblock data
# ///

import os
"##;

pub const MULTIPLE_BLOCKS_JOINED_PYPROJECT: &str = r##"run.dependencies = [
    "ducktools-lazyimporter>=0.1.1",
]
///

Middle Comment

/// newblock
newblock data
"##;

pub const MULTIPLE_CLOSING_LINES: &str = r##"# /// pyproject
# [run]
# dependencies = ["requests"]
# ///
# Additional comment
# ///

import os
"##;

pub const MULTIPLE_CLOSING_LINES_PYPROJECT: &str = r##"[run]
dependencies = ["requests"]
///
Additional comment
"##;

pub const MULTIPLE_OPENING_LINES: &str = r##"# /// pyproject
# [run]
# dependencies = ["requests"]
# /// pyproject
# requires-python = ">=3.11"
# ///
"##;

pub const MULTIPLE_OPENING_LINES_PYPROJECT: &str = r##"[run]
dependencies = ["requests"]
/// pyproject
requires-python = ">=3.11"
"##;

pub const SEPARATE_BLOCKS: &str = r##"# /// pyproject
# [run]
# requires-python = ">=3.11"
# ///

# /// script
# dependencies = ["rich"]
# ///

import rich
"##;

pub const NO_BLOCK: &str = r##"#!/usr/bin/env python3
# A regular comment
import os

print(os.getcwd())
"##;

/// The same block type closed twice.
pub const REPEATED_BLOCK: &str = r##"# /// pyproject
# [run]
# ///

# /// pyproject
# [tool]
# ///
"##;

/// A block cut off by code before any closer.
pub const UNCLOSED_BLOCK: &str = r##"# /// pyproject
# [run]
# requires-python = ">=3.11"

import os
"##;

/// A block at the very end of the file with no closer.
pub const UNCLOSED_BLOCK_EOF: &str = r##""""
This is upside down because the block is at the end of the file.
"""

output = {}


# /// pyproject
# [run]
# requires-python = ">=3.11"
# dependencies = [
#   "requests<3",
#   "rich",
# ]
"##;

pub const INVALID_NAME: &str = r##"# /// has_underscore
# a = 1
# ///

# /// pyproject
# [run]
# ///
"##;

pub const LEGACY_EXTENSION: &str = r##"# /// pyproject.toml
# [run]
# requires-python = ">=3.11"
# ///
"##;

/// Nested opener followed by TOML that no longer decodes.
pub const NESTED_BREAKS_TOML: &str = r##"# /// pyproject
# [run]
# requires-python = ">=3.11"
# /// script
# [run]
# dependencies = []
# ///
"##;

/// Every sample script with its expected result.
pub fn fixtures() -> Vec<Fixture> {
    vec![
        Fixture {
            name: "basic_pep_example",
            source: PEP_EXAMPLE,
            expected: Expected::Blocks {
                blocks: &[("pyproject", PEP_EXAMPLE_PYPROJECT)],
                warnings: 0,
            },
        },
        Fixture {
            name: "multiple_blocks_joined",
            source: MULTIPLE_BLOCKS_JOINED,
            expected: Expected::Blocks {
                blocks: &[("pyproject", MULTIPLE_BLOCKS_JOINED_PYPROJECT)],
                warnings: 1,
            },
        },
        Fixture {
            name: "multiple_closing_lines",
            source: MULTIPLE_CLOSING_LINES,
            expected: Expected::Blocks {
                blocks: &[("pyproject", MULTIPLE_CLOSING_LINES_PYPROJECT)],
                warnings: 0,
            },
        },
        Fixture {
            name: "multiple_opening_lines",
            source: MULTIPLE_OPENING_LINES,
            expected: Expected::Blocks {
                blocks: &[("pyproject", MULTIPLE_OPENING_LINES_PYPROJECT)],
                warnings: 1,
            },
        },
        Fixture {
            name: "separate_blocks",
            source: SEPARATE_BLOCKS,
            expected: Expected::Blocks {
                blocks: &[
                    ("pyproject", "[run]\nrequires-python = \">=3.11\"\n"),
                    ("script", "dependencies = [\"rich\"]\n"),
                ],
                warnings: 0,
            },
        },
        Fixture {
            name: "no_block",
            source: NO_BLOCK,
            expected: Expected::Blocks {
                blocks: &[],
                warnings: 0,
            },
        },
        Fixture {
            name: "repeated_block_error",
            source: REPEATED_BLOCK,
            expected: Expected::Duplicate {
                name: "pyproject",
                line: 5,
            },
        },
        Fixture {
            name: "unclosed_block_example",
            source: UNCLOSED_BLOCK,
            expected: Expected::Blocks {
                blocks: &[],
                warnings: 1,
            },
        },
        Fixture {
            name: "unclosed_block_eof",
            source: UNCLOSED_BLOCK_EOF,
            expected: Expected::Blocks {
                blocks: &[],
                warnings: 1,
            },
        },
        Fixture {
            name: "invalid_name",
            source: INVALID_NAME,
            expected: Expected::Blocks {
                blocks: &[("pyproject", "[run]\n")],
                warnings: 1,
            },
        },
        Fixture {
            name: "legacy_extension",
            source: LEGACY_EXTENSION,
            expected: Expected::Blocks {
                blocks: &[],
                warnings: 2,
            },
        },
        Fixture {
            name: "nested_breaks_toml",
            source: NESTED_BREAKS_TOML,
            expected: Expected::Blocks {
                blocks: &[(
                    "pyproject",
                    "[run]\nrequires-python = \">=3.11\"\n/// script\n[run]\ndependencies = []\n",
                )],
                warnings: 1,
            },
        },
    ]
}

/// Look up a fixture by name.
pub fn fixture(name: &str) -> Fixture {
    fixtures()
        .into_iter()
        .find(|f| f.name == name)
        .unwrap_or_else(|| panic!("No fixture named {name}"))
}
