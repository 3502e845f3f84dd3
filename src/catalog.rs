// SPDX-License-Identifier: MPL-2.0
//! The collection catalog the carousel browses.
//!
//! A catalog is an ordered list of collections (consoles, genres, tools...)
//! with a name, an entry count, and the name of the theme that skins it. The
//! carousel never loads the catalog itself; it receives one by value so hosts
//! are free to source it from disk, a scanner, or a test fixture.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// What lives behind a collection when it is activated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CollectionKind {
    /// A browsable list of entries; the info label reports the entry count.
    #[default]
    Browsable,
    /// A configuration screen; the info label reports `CONFIGURATION`.
    Configuration,
}

/// One selectable collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Collection {
    pub name: String,
    /// Display name; falls back to `name` when absent.
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub kind: CollectionKind,
    /// Number of entries currently displayed for this collection.
    #[serde(default)]
    pub entry_count: u32,
    /// Theme key under the theme directory; absent means the default theme.
    #[serde(default)]
    pub theme: Option<String>,
    #[serde(default = "default_visible")]
    pub visible: bool,
}

fn default_visible() -> bool {
    true
}

impl Collection {
    /// The name shown to the user.
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.full_name.as_deref().unwrap_or(&self.name)
    }
}

/// Ordered, read-only collection list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default, rename = "collection")]
    collections: Vec<Collection>,
}

impl Catalog {
    #[must_use]
    pub fn new(collections: Vec<Collection>) -> Self {
        Self { collections }
    }

    /// Parses a catalog from its TOML representation.
    pub fn from_toml_str(input: &str) -> Result<Self> {
        toml::from_str(input).map_err(|e| Error::Catalog(e.to_string()))
    }

    pub fn load_from_path(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// All collections in catalog order, hidden ones included.
    #[must_use]
    pub fn collections(&self) -> &[Collection] {
        &self.collections
    }

    /// The visible subset, in catalog order. This is what the carousel shows.
    pub fn visible(&self) -> impl Iterator<Item = &Collection> {
        self.collections.iter().filter(|c| c.visible)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.collections.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.collections.is_empty()
    }
}
