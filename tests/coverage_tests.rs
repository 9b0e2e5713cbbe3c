// SPDX-License-Identifier: PMPL-1.0-or-later

//! Coverage checks over the fixture dictionary

use phrasebook::coverage::coverage_report;
use phrasebook::report::{write_report, ReportOutputFormat};
use phrasebook::{FsAssets, LocalizationStore};
use std::fs;
use std::path::Path;

fn fixture_store() -> LocalizationStore {
    let assets = FsAssets::new(Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures"));
    LocalizationStore::open(&assets, None).expect("fixture dictionary should load")
}

#[test]
fn test_fixture_coverage() {
    let store = fixture_store();
    let report = coverage_report(store.dictionary(), "en", "#");
    assert_eq!(report.total_keys, 8);

    let by_code = |code: &str| {
        report
            .locales
            .iter()
            .find(|l| l.locale == code)
            .unwrap_or_else(|| panic!("{} missing from report", code))
    };

    assert!(by_code("en").is_complete());
    assert!(by_code("de").is_complete());
    assert_eq!(by_code("es").missing, vec!["k1", "k2", "k3"]);
    assert!(by_code("fr").empty_record);
    assert!(!report.is_complete());
}

#[test]
fn test_coverage_yaml_export() {
    let store = fixture_store();
    let report = coverage_report(store.dictionary(), "en", "#");

    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("coverage.yaml");
    write_report(&report, &path, ReportOutputFormat::for_path(&path)).unwrap();

    let yaml = fs::read_to_string(&path).unwrap();
    assert!(yaml.contains("reference: en"));
    assert!(yaml.contains("empty_record: true"));
}
