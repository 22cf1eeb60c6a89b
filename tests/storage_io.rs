use std::fs;
use tempfile::tempdir;
use tradeboard::dataset;
use tradeboard::models::Country;
use tradeboard::storage::{self, FileStore, KeyValueStore};
use tradeboard::theme::{NoopSink, THEME_KEY, ThemeController};
use tradeboard::{Error, Theme};

#[test]
fn file_store_missing_file_is_empty() {
    let dir = tempdir().unwrap();
    let store = FileStore::open(dir.path().join("none.json")).unwrap();
    assert_eq!(store.get(THEME_KEY), None);
}

#[test]
fn file_store_persists_across_reopen() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("nested").join("settings.json");

    let mut store = FileStore::open(&path).unwrap();
    store.set(THEME_KEY, "light").unwrap();
    assert!(path.exists(), "set creates parent dirs and the file");

    let reopened = FileStore::open(&path).unwrap();
    assert_eq!(reopened.get(THEME_KEY).as_deref(), Some("light"));

    let v: serde_json::Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(v["theme"], "light");
}

#[test]
fn file_store_rejects_non_object_json() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("bad.json");
    fs::write(&path, "[1, 2, 3]").unwrap();
    let err = FileStore::open(&path).unwrap_err();
    assert!(matches!(err, Error::StoreFormat { .. }), "{err}");
}

#[test]
fn theme_survives_a_restart() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("settings.json");

    let mut first = ThemeController::init(FileStore::open(&path).unwrap(), NoopSink);
    assert_eq!(first.theme(), Theme::Dark);
    first.toggle_theme();
    drop(first);

    let second = ThemeController::init(FileStore::open(&path).unwrap(), NoopSink);
    assert_eq!(second.theme(), Theme::Light);
}

#[test]
fn save_countries_csv_and_json() {
    let dir = tempdir().unwrap();
    let rows: Vec<&Country> = dataset::trade_data().countries.iter().collect();

    let csv_path = dir.path().join("countries.csv");
    storage::save_countries_csv(&rows, &csv_path).unwrap();
    let csv_txt = fs::read_to_string(&csv_path).unwrap();
    assert!(csv_txt.starts_with("name,code,export,import,balance,region,bloc,"));
    assert_eq!(csv_txt.lines().count(), 1 + rows.len());
    assert!(csv_txt.contains("United States,USA,44.8,13.9,"));
    assert!(csv_txt.contains("North America,USMCA"));

    let json_path = dir.path().join("countries.json");
    storage::save_json(&rows, &json_path).unwrap();
    let json_txt = fs::read_to_string(&json_path).unwrap();
    let v: serde_json::Value = serde_json::from_str(&json_txt).unwrap();
    assert_eq!(v.as_array().unwrap().len(), rows.len());
    assert_eq!(v[0]["momChange"], 2.1);
}
