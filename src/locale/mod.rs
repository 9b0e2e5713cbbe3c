// SPDX-License-Identifier: PMPL-1.0-or-later

//! Locale codes and supported-locale resolution.
//!
//! A [`Locale`] is an opaque code string as it appears in the dictionary
//! (`"en"`, `"es"`, `"es_MX"`). No normalisation is applied: the code the
//! caller asks for is the code that gets looked up.
//!
//! ## Resolution
//!
//! [`resolve_supported_locale`] is a two-level exact-match fallback:
//!
//! | Requested | Dictionary has | Result |
//! |-----------|----------------|--------|
//! | unset / `"e"` | anything | default |
//! | `"es_MX"` | `es`, `es_MX` | `es_MX` |
//! | `"es_MX"` | `es` | `es` |
//! | `"fr_CA"` | `en`, `es` | default |
//!
//! Only the first two characters are ever tried as a shorter candidate.
//! Scripts, variants and three-letter codes get no special treatment.

mod iso639;

pub use iso639::{is_valid_iso639_1, language_name, native_name};

use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashSet};
use std::fmt;

/// Code of the built-in default locale.
pub const DEFAULT_LOCALE_CODE: &str = "en";

/// Number of leading characters that form the base language.
const BASE_LANGUAGE_LEN: usize = 2;

/// A locale code such as `"en"` or `"es_MX"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Locale(String);

impl Locale {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    /// English, the fallback when nothing better is supported.
    pub fn english() -> Self {
        Self::new(DEFAULT_LOCALE_CODE)
    }

    /// Full language code, used verbatim as the dictionary key.
    pub fn language(&self) -> &str {
        &self.0
    }

    /// First two characters of the code, or `None` when the code is shorter.
    pub fn base_language(&self) -> Option<&str> {
        let mut chars = self.0.char_indices();
        chars.nth(BASE_LANGUAGE_LEN - 1)?;
        let end = chars.next().map_or(self.0.len(), |(idx, _)| idx);
        Some(&self.0[..end])
    }
}

impl Default for Locale {
    fn default() -> Self {
        Self::english()
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Locale {
    fn from(code: &str) -> Self {
        Self::new(code)
    }
}

impl From<String> for Locale {
    fn from(code: String) -> Self {
        Self(code)
    }
}

impl AsRef<str> for Locale {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Anything that can answer "is this locale code available?".
pub trait LocaleSet {
    fn contains_locale(&self, code: &str) -> bool;
}

impl<S: AsRef<str>> LocaleSet for [S] {
    fn contains_locale(&self, code: &str) -> bool {
        self.iter().any(|s| s.as_ref() == code)
    }
}

impl<S: AsRef<str>> LocaleSet for Vec<S> {
    fn contains_locale(&self, code: &str) -> bool {
        self.as_slice().contains_locale(code)
    }
}

impl LocaleSet for HashSet<String> {
    fn contains_locale(&self, code: &str) -> bool {
        self.contains(code)
    }
}

impl LocaleSet for BTreeSet<String> {
    fn contains_locale(&self, code: &str) -> bool {
        self.contains(code)
    }
}

/// Pick the most relevant locale out of `available` for `requested`.
///
/// Returns `requested` itself when its full code is available, its
/// two-character base language when only that is available, and
/// `default` otherwise (including when nothing was requested).
pub fn resolve_supported_locale<A>(
    requested: Option<&Locale>,
    available: &A,
    default: &Locale,
) -> Locale
where
    A: LocaleSet + ?Sized,
{
    let Some(requested) = requested else {
        return default.clone();
    };
    let Some(base) = requested.base_language() else {
        return default.clone();
    };
    if !available.contains_locale(base) {
        return default.clone();
    }
    if available.contains_locale(requested.language()) {
        return requested.clone();
    }
    Locale::new(base)
}
