// SPDX-License-Identifier: PMPL-1.0-or-later

//! The localization store.
//!
//! A [`LocalizationStore`] owns one parsed dictionary and the active locale.
//! It is an ordinary value: open as many as you like, share one by
//! reference, or wrap it in whatever your engine uses for global state.
//!
//! ```
//! use phrasebook::{Locale, LocalizationStore, MemoryAssets};
//!
//! let assets = MemoryAssets::new().with(
//!     "data/dictionary.json",
//!     r#"{"en": [{"greeting": "Hello #"}], "es": [{"greeting": "Hola #"}]}"#,
//! );
//! let store = LocalizationStore::open(&assets, Some(&Locale::new("es_MX"))).unwrap();
//! assert_eq!(store.locale().language(), "es");
//! assert_eq!(store.get_with("greeting", &["Tom"]), "Hola Tom");
//! assert_eq!(store.get("missing.key"), "missing.key");
//! ```

use crate::assets::AssetReader;
use crate::config::StoreConfig;
use crate::dictionary::{Dictionary, DictionaryParser};
use crate::error::LookupError;
use crate::locale::{resolve_supported_locale, Locale};
use crate::placeholder::substitute;
use crate::sink::{ErrorSink, TracingSink, REPORT_TAG};
use anyhow::{Context, Result};
use std::fmt;
use std::sync::Arc;

pub struct LocalizationStore {
    config: StoreConfig,
    dictionary: Dictionary,
    locale: Locale,
    sink: Arc<dyn ErrorSink>,
}

impl LocalizationStore {
    /// Load the dictionary from the default asset path and select the best
    /// supported locale for `requested`.
    pub fn open<A>(assets: &A, requested: Option<&Locale>) -> Result<Self>
    where
        A: AssetReader + ?Sized,
    {
        Self::open_with_config(assets, requested, StoreConfig::default(), Arc::new(TracingSink))
    }

    pub fn open_with_config<A>(
        assets: &A,
        requested: Option<&Locale>,
        config: StoreConfig,
        sink: Arc<dyn ErrorSink>,
    ) -> Result<Self>
    where
        A: AssetReader + ?Sized,
    {
        let dictionary = load_dictionary(assets, &config)?;
        Ok(Self::from_dictionary(dictionary, requested, config, sink))
    }

    /// Build a store around an already parsed dictionary.
    pub fn from_dictionary(
        dictionary: Dictionary,
        requested: Option<&Locale>,
        config: StoreConfig,
        sink: Arc<dyn ErrorSink>,
    ) -> Self {
        let mut store = Self {
            locale: config.default_locale.clone(),
            config,
            dictionary,
            sink,
        };
        store.set_locale(requested);
        store
    }

    /// Re-read the dictionary and re-resolve the locale.
    ///
    /// On error the store keeps its previous dictionary and locale.
    pub fn reload<A>(&mut self, assets: &A, requested: Option<&Locale>) -> Result<()>
    where
        A: AssetReader + ?Sized,
    {
        self.dictionary = load_dictionary(assets, &self.config)?;
        self.set_locale(requested);
        Ok(())
    }

    /// The locale this store would use for `requested`.
    pub fn supported_locale(&self, requested: Option<&Locale>) -> Locale {
        resolve_supported_locale(requested, &self.dictionary, &self.config.default_locale)
    }

    /// Switch to the best supported locale for `requested`. Does not reload.
    pub fn set_locale(&mut self, requested: Option<&Locale>) {
        self.locale = self.supported_locale(requested);
        tracing::debug!(
            requested = requested.map(Locale::language),
            active = self.locale.language(),
            "locale resolved"
        );
    }

    /// The active locale, already resolved.
    pub fn locale(&self) -> &Locale {
        &self.locale
    }

    /// Text for `key` in the active locale, or why there is none.
    pub fn lookup(&self, key: &str) -> std::result::Result<&str, LookupError> {
        let code = self.locale.language();
        let entry = self
            .dictionary
            .entry(code)
            .ok_or_else(|| LookupError::LocaleMissing {
                locale: code.to_string(),
            })?;
        let table = entry.table.as_ref().ok_or_else(|| LookupError::EmptyRecord {
            locale: code.to_string(),
        })?;
        table.get(key).ok_or_else(|| LookupError::KeyMissing {
            locale: code.to_string(),
            key: key.to_string(),
        })
    }

    /// Text for `key`, or `key` itself when the lookup misses.
    ///
    /// Misses are reported to the store's error sink.
    pub fn get<'a>(&'a self, key: &'a str) -> &'a str {
        match self.lookup(key) {
            Ok(text) => text,
            Err(err) => {
                self.sink.report(REPORT_TAG, &err.to_string());
                key
            }
        }
    }

    /// [`get`](Self::get), then fill placeholders with `params` in order.
    pub fn get_with<P: AsRef<str>>(&self, key: &str, params: &[P]) -> String {
        substitute(self.get(key), &self.config.placeholder, params)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.lookup(key).is_ok()
    }

    /// Locale codes in dictionary order.
    pub fn available_locales(&self) -> Vec<&str> {
        self.dictionary.locales()
    }

    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }
}

impl fmt::Debug for LocalizationStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LocalizationStore")
            .field("config", &self.config)
            .field("locale", &self.locale)
            .field("locales", &self.dictionary.locales())
            .finish_non_exhaustive()
    }
}

fn load_dictionary<A>(assets: &A, config: &StoreConfig) -> Result<Dictionary>
where
    A: AssetReader + ?Sized,
{
    let path = &config.dictionary_path;
    let bytes = assets
        .read(path)
        .with_context(|| format!("loading dictionary {}", path.display()))?;
    let dictionary = DictionaryParser
        .parse(&bytes)
        .with_context(|| format!("parsing dictionary {}", path.display()))?;
    tracing::debug!(
        path = %path.display(),
        locales = dictionary.len(),
        "dictionary loaded"
    );
    Ok(dictionary)
}
