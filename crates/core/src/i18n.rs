// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Key-to-label lookup used for default dialog titles.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

/// Maps a message key to its display string
pub trait Localizer {
    /// Translate `key`. Unknown keys translate to themselves.
    fn tr(&self, key: &str) -> String;
}

/// Identity localizer: keys are already English labels
#[derive(Clone, Copy, Debug, Default)]
pub struct Untranslated;

impl Localizer for Untranslated {
    fn tr(&self, key: &str) -> String {
        key.to_string()
    }
}

/// Errors from loading a catalog
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid catalog: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Flat TOML table of `key = "label"` entries.
///
/// ```toml
/// Error = "Fehler"
/// Warning = "Warnung"
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    entries: HashMap<String, String>,
}

impl Catalog {
    pub fn from_toml_str(content: &str) -> Result<Self, CatalogError> {
        Ok(toml::from_str(content)?)
    }

    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let content = std::fs::read_to_string(path)
            .map_err(|source| CatalogError::Read { path: path.to_path_buf(), source })?;
        Self::from_toml_str(&content)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Localizer for Catalog {
    fn tr(&self, key: &str) -> String {
        self.entries.get(key).cloned().unwrap_or_else(|| key.to_string())
    }
}

#[cfg(test)]
#[path = "i18n_tests.rs"]
mod tests;
