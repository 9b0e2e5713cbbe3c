// SPDX-License-Identifier: PMPL-1.0-or-later

//! Printing and exporting coverage reports

use crate::coverage::{CoverageReport, LocaleCoverage};
use crate::locale::language_name;
use anyhow::{Context, Result};
use clap::ValueEnum;
use colored::*;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReportOutputFormat {
    Json,
    Yaml,
}

impl ReportOutputFormat {
    /// Pick a format from a file extension, defaulting to JSON.
    pub fn for_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("yaml") | Some("yml") => ReportOutputFormat::Yaml,
            _ => ReportOutputFormat::Json,
        }
    }

    pub fn serialize(&self, report: &CoverageReport) -> Result<String> {
        match self {
            ReportOutputFormat::Json => Ok(serde_json::to_string_pretty(report)?),
            ReportOutputFormat::Yaml => Ok(serde_yaml::to_string(report)?),
        }
    }
}

pub fn write_report(report: &CoverageReport, path: &Path, format: ReportOutputFormat) -> Result<()> {
    let rendered = format.serialize(report)?;
    fs::write(path, rendered).with_context(|| format!("writing {}", path.display()))
}

pub struct CoverageFormatter {
    /// Longest missing-key list printed before it is elided.
    pub max_listed: usize,
}

impl Default for CoverageFormatter {
    fn default() -> Self {
        Self { max_listed: 10 }
    }
}

impl CoverageFormatter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn print(&self, report: &CoverageReport) {
        println!("{}", self.render(report));
    }

    pub fn render(&self, report: &CoverageReport) -> String {
        let mut lines = Vec::new();
        lines.push(format!("{}", "=== DICTIONARY COVERAGE ===".bold().cyan()));
        lines.push(format!(
            "  Reference: {} ({} keys)",
            report.reference, report.total_keys
        ));
        lines.push(String::new());

        for locale in &report.locales {
            lines.extend(self.render_locale(locale));
        }

        lines.push(String::new());
        let incomplete = report.incomplete().count();
        if incomplete == 0 {
            lines.push(format!("{}", "All locales complete".green().bold()));
        } else {
            lines.push(format!(
                "{}",
                format!("{} locale(s) incomplete", incomplete).red().bold()
            ));
        }
        lines.join("\n")
    }

    fn render_locale(&self, locale: &LocaleCoverage) -> Vec<String> {
        let status = if locale.is_complete() {
            "OK".green()
        } else if locale.empty_record {
            "EMPTY".red()
        } else {
            "GAPS".yellow()
        };
        let name = language_name(&locale.locale)
            .map(|n| format!(" ({})", n))
            .unwrap_or_default();

        let mut lines = vec![format!(
            "  [{}] {:8}{:14} {:6.1}%",
            status,
            locale.locale.bold(),
            name,
            locale.coverage_percent
        )];
        if !locale.missing.is_empty() {
            lines.push(format!("       missing: {}", self.elide(&locale.missing)));
        }
        if !locale.marker_mismatches.is_empty() {
            lines.push(format!(
                "       placeholder mismatch: {}",
                self.elide(&locale.marker_mismatches)
            ));
        }
        lines
    }

    fn elide(&self, keys: &[String]) -> String {
        if keys.len() <= self.max_listed {
            keys.join(", ")
        } else {
            format!(
                "{}, ... (+{} more)",
                keys[..self.max_listed].join(", "),
                keys.len() - self.max_listed
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coverage::coverage_report;
    use crate::dictionary::DictionaryParser;

    fn report() -> CoverageReport {
        let dictionary = DictionaryParser
            .parse_str(r#"{"en": [{"a": "A", "b": "B #"}], "es": [{"a": "A"}]}"#)
            .unwrap();
        coverage_report(&dictionary, "en", "#")
    }

    #[test]
    fn test_render_lists_missing_keys() {
        colored::control::set_override(false);
        let text = CoverageFormatter::new().render(&report());
        assert!(text.contains("Reference: en (2 keys)"));
        assert!(text.contains("missing: b"));
        assert!(text.contains("1 locale(s) incomplete"));
    }

    #[test]
    fn test_elides_long_lists() {
        let formatter = CoverageFormatter { max_listed: 2 };
        let keys: Vec<String> = ["a", "b", "c", "d"].iter().map(|s| s.to_string()).collect();
        assert_eq!(formatter.elide(&keys), "a, b, ... (+2 more)");
    }

    #[test]
    fn test_format_follows_extension() {
        assert_eq!(
            ReportOutputFormat::for_path(Path::new("out.yml")),
            ReportOutputFormat::Yaml
        );
        assert_eq!(
            ReportOutputFormat::for_path(Path::new("out.json")),
            ReportOutputFormat::Json
        );
    }

    #[test]
    fn test_format_parses_from_cli_value() {
        assert_eq!(
            ReportOutputFormat::from_str("yaml", true),
            Ok(ReportOutputFormat::Yaml)
        );
        assert_eq!(
            ReportOutputFormat::from_str("JSON", true),
            Ok(ReportOutputFormat::Json)
        );
        assert!(ReportOutputFormat::from_str("nickel", true).is_err());
    }

    #[test]
    fn test_writes_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("coverage.json");
        write_report(&report(), &path, ReportOutputFormat::Json).unwrap();
        let parsed: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(parsed["total_keys"], 2);
        assert_eq!(parsed["locales"][1]["missing"][0], "b");
    }
}
