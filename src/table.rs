//! Declarative spec tables in TOML.
//!
//! ```toml
//! [[option]]
//! short = "f"
//! long = "file"
//! description = "Input file"
//! required = true
//!
//! [[flag]]
//! short = "v"
//! long = "verbose"
//!
//! [[positional]]
//! description = "Source"
//! ```
//!
//! A positional without an explicit `position` takes its index in the
//! `[[positional]]` list.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::debug;

use crate::builder::SpecSet;
use crate::spec::{FlagSpec, OptionSpec, PositionalSpec, SpecError};

/// Error produced while loading a spec table.
#[derive(Debug, thiserror::Error)]
pub enum TableError {
    /// The file could not be read.
    #[error("failed to read spec table '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// The TOML is malformed or has unknown keys.
    #[error("failed to parse spec table: {0}")]
    Parse(#[from] toml::de::Error),
    /// An entry or the set as a whole is misconfigured.
    #[error("invalid spec table: {0}")]
    Spec(#[from] SpecError),
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawTable {
    #[serde(default, rename = "option")]
    options: Vec<RawOption>,
    #[serde(default, rename = "flag")]
    flags: Vec<RawFlag>,
    #[serde(default, rename = "positional")]
    positionals: Vec<RawPositional>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawOption {
    short: Option<String>,
    long: Option<String>,
    #[serde(default)]
    description: String,
    #[serde(default)]
    required: bool,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawFlag {
    short: Option<String>,
    long: Option<String>,
    #[serde(default)]
    description: String,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawPositional {
    position: Option<usize>,
    #[serde(default)]
    description: String,
    #[serde(default)]
    required: bool,
}

impl RawTable {
    fn into_spec_set(self) -> Result<SpecSet, SpecError> {
        let mut set = SpecSet::new();

        for o in self.options {
            let spec = OptionSpec::new(o.short.as_deref(), o.long.as_deref())?
                .with_description(&o.description)
                .required(o.required);
            set = set.option(spec);
        }

        for f in self.flags {
            let spec = FlagSpec::new(f.short.as_deref(), f.long.as_deref())?
                .with_description(&f.description);
            set = set.flag(spec);
        }

        for (index, p) in self.positionals.into_iter().enumerate() {
            let spec = PositionalSpec::new(p.position.unwrap_or(index))
                .with_description(&p.description)
                .required(p.required);
            set = set.positional(spec);
        }

        set.build()
    }
}

impl SpecSet {
    /// Load a spec set from TOML text.
    ///
    /// # Errors
    ///
    /// Returns `TableError::Parse` on malformed TOML and
    /// `TableError::Spec` on invalid or duplicate entries.
    pub fn from_toml_str(input: &str) -> Result<Self, TableError> {
        let raw: RawTable = toml::from_str(input)?;
        let set = raw.into_spec_set()?;
        debug!(
            options = set.options.len(),
            flags = set.flags.len(),
            positionals = set.positionals.len(),
            "loaded spec table"
        );
        Ok(set)
    }

    /// Load a spec set from a TOML file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, TableError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| TableError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }
}
