//! User-facing rule options and their JSON form.
//!
//! ```json
//! {
//!   "allowedDepth": 1,
//!   "allowSameFolder": true,
//!   "rootDir": "src",
//!   "paths": { "@app": "app", "@lib": "lib" }
//! }
//! ```
//!
//! Unknown keys are rejected, and `paths` keeps the order it was written in.

use anyhow::{Context, Result};
use log::debug;
use serde::{
    Deserialize, Deserializer,
    de::{MapAccess, Visitor},
};
use std::{fmt, fs, path::Path};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AliasEntry {
    /// Token written in place of the matched prefix, e.g. `@app`
    pub alias: String,
    /// Root-relative prefix it stands for, e.g. `src/app`
    pub target: String,
}

/// Alias substitutions, checked in declaration order. The first match wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AliasTable(Vec<AliasEntry>);

impl AliasTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, alias: impl Into<String>, target: impl Into<String>) {
        self.0.push(AliasEntry { alias: alias.into(), target: target.into() });
    }

    pub fn iter(&self) -> impl Iterator<Item = &AliasEntry> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<A: Into<String>, T: Into<String>> FromIterator<(A, T)> for AliasTable {
    fn from_iter<I: IntoIterator<Item = (A, T)>>(iter: I) -> Self {
        let mut table = AliasTable::new();
        for (alias, target) in iter {
            table.push(alias, target);
        }
        table
    }
}

impl<'de> Deserialize<'de> for AliasTable {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct AliasTableVisitor;

        impl<'de> Visitor<'de> for AliasTableVisitor {
            type Value = AliasTable;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map from alias to root-relative path")
            }

            fn visit_map<M: MapAccess<'de>>(self, mut map: M) -> Result<AliasTable, M::Error> {
                let mut table = AliasTable::new();
                while let Some((alias, target)) = map.next_entry::<String, String>()? {
                    table.push(alias, target);
                }
                Ok(table)
            }
        }

        deserializer.deserialize_map(AliasTableVisitor)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct RuleOptions {
    /// How many `../` levels are tolerated. `None` flags every parent import.
    #[serde(default)]
    pub allowed_depth: Option<usize>,
    #[serde(default)]
    pub allow_same_folder: bool,
    /// Project root, relative to the working directory
    #[serde(default)]
    pub root_dir: String,
    #[serde(default)]
    pub paths: AliasTable,
}

impl RuleOptions {
    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("Invalid rule options")
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("Reading rule options from {}", path.display());
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        serde_json::from_str(&content)
            .with_context(|| format!("Invalid rule options in {}", path.display()))
    }
}
