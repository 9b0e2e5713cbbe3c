// SPDX-License-Identifier: PMPL-1.0-or-later

//! Dictionary model and JSON parser.
//!
//! The on-disk document maps each locale code to a list of flat records:
//!
//! ```json
//! {
//!     "en": [{ "greeting": "Hello #", "quit": "Quit" }],
//!     "es": [{ "greeting": "Hola #", "quit": "Salir" }]
//! }
//! ```
//!
//! Only the first record of each list is used. Later records are skipped
//! without validation. An empty list is accepted here and surfaces as a
//! lookup miss later, so a half-finished locale never blocks loading.

use crate::locale::LocaleSet;
use anyhow::{anyhow, Context, Result};
use serde_json::{Map, Value};
use std::collections::HashMap;

/// Flat key → text table for one locale.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    entries: HashMap<String, String>,
}

impl Table {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, text: impl Into<String>) {
        self.entries.insert(key.into(), text.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Keys in sorted order.
    pub fn keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self.entries.keys().map(String::as_str).collect();
        keys.sort_unstable();
        keys
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Table {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut table = Table::new();
        for (key, text) in iter {
            table.insert(key, text);
        }
        table
    }
}

/// One locale's entry: its code and the first record, if the list had one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleEntry {
    pub code: String,
    pub table: Option<Table>,
}

/// All locales from a dictionary document, in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dictionary {
    entries: Vec<LocaleEntry>,
    index: HashMap<String, usize>,
}

impl Dictionary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a locale. Replacing keeps the original position.
    pub fn insert(&mut self, code: impl Into<String>, table: Option<Table>) {
        let code = code.into();
        match self.index.get(&code) {
            Some(&idx) => self.entries[idx].table = table,
            None => {
                self.index.insert(code.clone(), self.entries.len());
                self.entries.push(LocaleEntry { code, table });
            }
        }
    }

    /// The record list entry for `code`. `None` means the locale is absent;
    /// `Some(None)` means it is present with an empty record list.
    pub fn entry(&self, code: &str) -> Option<&LocaleEntry> {
        self.index.get(code).map(|&idx| &self.entries[idx])
    }

    pub fn table(&self, code: &str) -> Option<&Table> {
        self.entry(code).and_then(|entry| entry.table.as_ref())
    }

    pub fn contains(&self, code: &str) -> bool {
        self.index.contains_key(code)
    }

    /// Locale codes in document order.
    pub fn locales(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.code.as_str()).collect()
    }

    pub fn entries(&self) -> &[LocaleEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl LocaleSet for Dictionary {
    fn contains_locale(&self, code: &str) -> bool {
        self.contains(code)
    }
}

/// Parses dictionary documents.
///
/// Stateless; exists as a type so callers can name the seam.
#[derive(Debug, Clone, Copy, Default)]
pub struct DictionaryParser;

impl DictionaryParser {
    pub fn parse(&self, bytes: &[u8]) -> Result<Dictionary> {
        let root: Value = serde_json::from_slice(strip_bom(bytes))
            .context("dictionary is not valid JSON")?;
        let locales = match root {
            Value::Object(locales) => locales,
            other => {
                return Err(anyhow!(
                    "dictionary root must be an object of locale codes, found {}",
                    kind_of(&other)
                ))
            }
        };

        let mut dictionary = Dictionary::new();
        for (code, records) in locales {
            let table = parse_records(&code, records)?;
            dictionary.insert(code, table);
        }
        Ok(dictionary)
    }

    pub fn parse_str(&self, text: &str) -> Result<Dictionary> {
        self.parse(text.as_bytes())
    }
}

fn parse_records(code: &str, records: Value) -> Result<Option<Table>> {
    let records = match records {
        Value::Array(records) => records,
        other => {
            return Err(anyhow!(
                "locale '{}' must map to an array of records, found {}",
                code,
                kind_of(&other)
            ))
        }
    };
    match records.into_iter().next() {
        None => Ok(None),
        Some(Value::Object(record)) => parse_record(code, record).map(Some),
        Some(other) => Err(anyhow!(
            "first record of locale '{}' must be an object, found {}",
            code,
            kind_of(&other)
        )),
    }
}

fn parse_record(code: &str, record: Map<String, Value>) -> Result<Table> {
    let mut table = Table::new();
    for (key, value) in record {
        match value {
            Value::String(text) => table.insert(key, text),
            other => {
                return Err(anyhow!(
                    "text for '{}' in locale '{}' must be a string, found {}",
                    key,
                    code,
                    kind_of(&other)
                ))
            }
        }
    }
    Ok(table)
}

fn strip_bom(bytes: &[u8]) -> &[u8] {
    bytes.strip_prefix(b"\xEF\xBB\xBF").unwrap_or(bytes)
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
