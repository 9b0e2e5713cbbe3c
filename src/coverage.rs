// SPDX-License-Identifier: PMPL-1.0-or-later

//! Translation coverage against a reference locale.
//!
//! Lookups never fall back between locales, so a key missing from `es` is
//! shown to Spanish players as the raw key. This report finds those gaps
//! before players do.

use crate::dictionary::Dictionary;
use crate::placeholder::count_markers;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CoverageReport {
    pub reference: String,
    /// Keys in the reference locale's table.
    pub total_keys: usize,
    pub locales: Vec<LocaleCoverage>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LocaleCoverage {
    pub locale: String,
    /// Reference keys this locale also defines.
    pub present: usize,
    /// Reference keys this locale lacks, sorted.
    pub missing: Vec<String>,
    /// Keys whose marker count differs from the reference text, sorted.
    pub marker_mismatches: Vec<String>,
    /// The locale's record list was empty.
    pub empty_record: bool,
    pub coverage_percent: f32,
}

impl LocaleCoverage {
    pub fn is_complete(&self) -> bool {
        !self.empty_record && self.missing.is_empty() && self.marker_mismatches.is_empty()
    }
}

impl CoverageReport {
    pub fn is_complete(&self) -> bool {
        self.locales.iter().all(LocaleCoverage::is_complete)
    }

    pub fn incomplete(&self) -> impl Iterator<Item = &LocaleCoverage> {
        self.locales.iter().filter(|l| !l.is_complete())
    }
}

/// Compare every locale in `dictionary` against `reference`.
///
/// A reference locale that is absent or empty yields zero reference keys,
/// so every locale reports full coverage.
pub fn coverage_report(dictionary: &Dictionary, reference: &str, marker: &str) -> CoverageReport {
    let reference_table = dictionary.table(reference);
    let reference_keys = reference_table.map(|t| t.keys()).unwrap_or_default();
    let total = reference_keys.len();

    let locales = dictionary
        .entries()
        .iter()
        .map(|entry| {
            let mut missing = Vec::new();
            let mut marker_mismatches = Vec::new();
            for &key in &reference_keys {
                let expected = reference_table
                    .and_then(|t| t.get(key))
                    .map_or(0, |text| count_markers(text, marker));
                match entry.table.as_ref().and_then(|t| t.get(key)) {
                    None => missing.push(key.to_string()),
                    Some(text) if count_markers(text, marker) != expected => {
                        marker_mismatches.push(key.to_string())
                    }
                    Some(_) => {}
                }
            }
            let present = total - missing.len();
            let coverage_percent = if total == 0 {
                100.0
            } else {
                (present as f32 / total as f32) * 100.0
            };
            LocaleCoverage {
                locale: entry.code.clone(),
                present,
                missing,
                marker_mismatches,
                empty_record: entry.table.is_none(),
                coverage_percent,
            }
        })
        .collect();

    CoverageReport {
        reference: reference.to_string(),
        total_keys: total,
        locales,
    }
}
