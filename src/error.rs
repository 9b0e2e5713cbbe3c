// SPDX-License-Identifier: PMPL-1.0-or-later

//! Lookup errors.
//!
//! Loading is plain `anyhow` like the rest of the crate's I/O. Lookups get
//! a typed error so callers can tell a missing locale from a missing key
//! when they care, and fall back to the key when they don't.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    #[error("no dictionary entry for locale '{locale}'")]
    LocaleMissing { locale: String },

    #[error("locale '{locale}' has an empty record list")]
    EmptyRecord { locale: String },

    #[error("key '{key}' not found for locale '{locale}'")]
    KeyMissing { locale: String, key: String },
}

impl LookupError {
    pub fn locale(&self) -> &str {
        match self {
            Self::LocaleMissing { locale }
            | Self::EmptyRecord { locale }
            | Self::KeyMissing { locale, .. } => locale,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_locale_and_key() {
        let err = LookupError::KeyMissing {
            locale: "es".into(),
            key: "menu.quit".into(),
        };
        assert_eq!(err.to_string(), "key 'menu.quit' not found for locale 'es'");
        assert_eq!(err.locale(), "es");
    }
}
