// SPDX-License-Identifier: PMPL-1.0-or-later

//! Store configuration.

use crate::locale::Locale;
use crate::placeholder::DEFAULT_MARKER;
use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Asset path of the dictionary when nothing else is configured.
pub const DEFAULT_DICTIONARY_PATH: &str = "data/dictionary.json";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Dictionary location, handed to the asset reader as-is.
    pub dictionary_path: PathBuf,
    /// Locale used when the requested one is unsupported.
    pub default_locale: Locale,
    /// Placeholder marker in dictionary text.
    pub placeholder: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            dictionary_path: PathBuf::from(DEFAULT_DICTIONARY_PATH),
            default_locale: Locale::english(),
            placeholder: DEFAULT_MARKER.to_string(),
        }
    }
}

impl StoreConfig {
    /// Load from a `.json`, `.yaml` or `.yml` file. Missing fields take
    /// their defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("reading store config {}", path.display()))?;
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => serde_json::from_str(&content)
                .with_context(|| format!("parsing json store config {}", path.display())),
            Some("yaml") | Some("yml") => serde_yaml::from_str(&content)
                .with_context(|| format!("parsing yaml store config {}", path.display())),
            _ => Err(anyhow!(
                "unsupported store config extension for {}",
                path.display()
            )),
        }
    }

    pub fn with_dictionary_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.dictionary_path = path.into();
        self
    }

    pub fn with_default_locale(mut self, locale: impl Into<Locale>) -> Self {
        self.default_locale = locale.into();
        self
    }

    pub fn with_placeholder(mut self, marker: impl Into<String>) -> Self {
        self.placeholder = marker.into();
        self
    }
}
