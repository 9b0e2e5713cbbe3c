// SPDX-License-Identifier: PMPL-1.0-or-later

//! Integration tests for the localization store against on-disk dictionaries

use phrasebook::{
    resolve_supported_locale, CollectingSink, FsAssets, Locale, LocalizationStore, LookupError,
    StoreConfig,
};
use std::fs;
use std::path::Path;
use std::sync::Arc;

fn fixture_assets() -> FsAssets {
    FsAssets::new(Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures"))
}

fn open(code: Option<&str>) -> (LocalizationStore, Arc<CollectingSink>) {
    let sink = Arc::new(CollectingSink::new());
    let requested = code.map(Locale::new);
    let store = LocalizationStore::open_with_config(
        &fixture_assets(),
        requested.as_ref(),
        StoreConfig::default(),
        sink.clone(),
    )
    .expect("fixture dictionary should load");
    (store, sink)
}

#[test]
fn test_supported_codes_resolve_unchanged() {
    let (store, _) = open(None);
    for code in store.available_locales() {
        let locale = Locale::new(code);
        assert_eq!(store.supported_locale(Some(&locale)), locale);
    }
}

#[test]
fn test_resolution_rules() {
    let (store, _) = open(None);
    let resolve = |code: &str| store.supported_locale(Some(&Locale::new(code)));

    assert_eq!(store.supported_locale(None), Locale::english());
    assert_eq!(resolve(""), Locale::english());
    assert_eq!(resolve("d"), Locale::english());
    assert_eq!(resolve("es_AR"), Locale::new("es"));
    assert_eq!(resolve("es_MX"), Locale::new("es_MX"));
    assert_eq!(resolve("de_CH"), Locale::new("de"));
    assert_eq!(resolve("ja_JP"), Locale::english());
    assert_eq!(resolve("it"), Locale::english());
}

#[test]
fn test_pure_resolution_matches_store() {
    let (store, _) = open(None);
    let available = store.available_locales();
    for code in ["en", "es_CL", "es_MX", "pt", "x", "de"] {
        let requested = Locale::new(code);
        assert_eq!(
            resolve_supported_locale(Some(&requested), available.as_slice(), &Locale::english()),
            store.supported_locale(Some(&requested)),
            "resolution diverged for {}",
            code
        );
    }
}

#[test]
fn test_get_present_and_absent_keys() {
    let (store, sink) = open(Some("es_MX"));
    assert_eq!(store.locale(), &Locale::new("es_MX"));
    assert_eq!(store.get("menu.quit"), "Salirse");
    assert!(sink.is_empty());

    // No cross-locale fallback: es_MX lacks "calc" even though es has it.
    assert_eq!(store.get("calc"), "calc");
    assert_eq!(
        store.lookup("calc"),
        Err(LookupError::KeyMissing {
            locale: "es_MX".into(),
            key: "calc".into()
        })
    );
    assert_eq!(sink.len(), 1);
}

#[test]
fn test_only_first_record_is_read() {
    let (store, _) = open(Some("de"));
    assert_eq!(store.get("menu.quit"), "Beenden");
    assert_eq!(store.get("ignored"), "ignored");
}

#[test]
fn test_empty_record_returns_key() {
    let (store, sink) = open(Some("fr_CA"));
    assert_eq!(store.locale(), &Locale::new("fr"));
    assert_eq!(store.get("menu.play"), "menu.play");
    assert_eq!(sink.messages(), vec!["locale 'fr' has an empty record list"]);
}

#[test]
fn test_placeholder_substitution() {
    let (store, _) = open(Some("en"));
    assert_eq!(store.get_with("greeting", &["Tom"]), "Hello Tom");
    assert_eq!(store.get_with("calc", &["$5"]), "You owe $5");
    assert_eq!(store.get_with("k1", &["A", "B"]), "A and B");
    assert_eq!(store.get_with("k2", &["A", "B"]), "only A");
    assert_eq!(store.get_with("k3", &["A", "B"]), "A and B and #");

    // Each parameter takes the first marker in the text so far, including
    // one inserted by an earlier parameter.
    assert_eq!(store.get_with("k1", &["#", "B"]), "B and #");

    let score = [120.to_string(), 300.to_string()];
    assert_eq!(store.get_with("hud.score", &score), "Score: 120 / 300");
}

#[test]
fn test_set_locale_then_get_locale_is_resolved() {
    let (mut store, _) = open(Some("en"));
    store.set_locale(Some(&Locale::new("es_PE")));
    assert_eq!(store.locale(), &Locale::new("es"));
    assert_eq!(store.get_with("greeting", &["Ana"]), "Hola Ana");

    store.set_locale(Some(&Locale::new("zz_ZZ")));
    assert_eq!(store.locale(), &Locale::english());
}

#[test]
fn test_independent_stores_do_not_share_state() {
    let (es, _) = open(Some("es"));
    let (de, _) = open(Some("de"));
    assert_eq!(es.get("menu.play"), "Jugar");
    assert_eq!(de.get("menu.play"), "Spielen");
}

#[test]
fn test_reload_picks_up_edits() {
    let dir = tempfile::tempdir().expect("tempdir");
    let data = dir.path().join("data");
    fs::create_dir_all(&data).unwrap();
    fs::write(data.join("dictionary.json"), r#"{"en": [{"title": "Old"}]}"#).unwrap();

    let assets = FsAssets::new(dir.path());
    let mut store = LocalizationStore::open(&assets, None).unwrap();
    assert_eq!(store.get("title"), "Old");

    fs::write(
        data.join("dictionary.json"),
        r#"{"en": [{"title": "New"}], "nl": [{"title": "Nieuw"}]}"#,
    )
    .unwrap();
    store.reload(&assets, Some(&Locale::new("nl_BE"))).unwrap();
    assert_eq!(store.locale(), &Locale::new("nl"));
    assert_eq!(store.get("title"), "Nieuw");
}

#[test]
fn test_load_failures_propagate() {
    let dir = tempfile::tempdir().expect("tempdir");
    let assets = FsAssets::new(dir.path());
    assert!(LocalizationStore::open(&assets, None).is_err());

    fs::create_dir_all(dir.path().join("data")).unwrap();
    fs::write(dir.path().join("data/dictionary.json"), r#"{"en": "Quit"}"#).unwrap();
    let err = LocalizationStore::open(&assets, None).unwrap_err();
    assert!(format!("{:#}", err).contains("locale 'en'"));
}
