// SPDX-License-Identifier: PMPL-1.0-or-later

//! Phrasebook — dictionary-driven text lookup for games.
//!
//! Loads a JSON dictionary of `locale → [ { key: text } ]`, picks the best
//! locale the dictionary supports for the one the player asked for, and
//! hands back text with `#` placeholders filled in.
//!
//! MODULES:
//! 1. **locale**: locale codes and the two-level fallback rule.
//! 2. **dictionary**: the parsed document and its validation.
//! 3. **store**: the lookup surface games call every frame.
//! 4. **coverage**: which keys each locale is still missing.
//!
//! Missing text never panics and never comes back empty: the key itself is
//! returned and the miss goes to an [`ErrorSink`].

pub mod assets;
pub mod config;
pub mod coverage;
pub mod dictionary;
pub mod error;
pub mod locale;
pub mod placeholder;
pub mod report;
pub mod sink;
pub mod store;

pub use assets::{AssetReader, FsAssets, MemoryAssets};
pub use config::StoreConfig;
pub use dictionary::{Dictionary, DictionaryParser, Table};
pub use error::LookupError;
pub use locale::{resolve_supported_locale, Locale, LocaleSet};
pub use sink::{CollectingSink, ErrorSink, TracingSink};
pub use store::LocalizationStore;
