use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;
use tempfile::tempdir;

fn tradeboard(store: &std::path::Path) -> Command {
    let mut cmd = Command::cargo_bin("tradeboard").unwrap();
    cmd.arg("--store").arg(store);
    cmd
}

#[test]
fn cli_shows_help() {
    let mut cmd = Command::cargo_bin("tradeboard").unwrap();
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("tradeboard"));
}

#[test]
fn theme_toggle_persists_between_runs() {
    let dir = tempdir().unwrap();
    let store = dir.path().join("settings.json");

    tradeboard(&store)
        .args(["theme", "show"])
        .assert()
        .success()
        .stdout(predicate::str::diff("dark\n"));
    tradeboard(&store)
        .args(["theme", "toggle"])
        .assert()
        .success()
        .stdout(predicate::str::diff("light\n"));
    tradeboard(&store)
        .args(["theme", "show"])
        .assert()
        .success()
        .stdout(predicate::str::diff("light\n"));
}

#[test]
fn theme_config_prints_chart_styling_json() {
    let dir = tempdir().unwrap();
    let store = dir.path().join("settings.json");
    tradeboard(&store).args(["theme", "set", "light"]).assert().success();

    let out = tradeboard(&store).args(["theme", "config"]).output().unwrap();
    assert!(out.status.success());
    let v: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(v["title"]["textStyle"]["color"], "#1a1f2e");
    assert_eq!(v["backgroundColor"], "transparent");
}

#[test]
fn country_lookup_and_unknown_code() {
    let dir = tempdir().unwrap();
    let store = dir.path().join("settings.json");
    tradeboard(&store)
        .args(["country", "USA"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("United States (USA)")
                .and(predicate::str::contains("44.8B")),
        );
    tradeboard(&store)
        .args(["country", "ZZZ"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("ZZZ"));
}

#[test]
fn export_json_for_a_region() {
    let dir = tempdir().unwrap();
    let store = dir.path().join("settings.json");
    let out = dir.path().join("oceania.json");
    tradeboard(&store)
        .args(["export", "--region", "Oceania", "--out"])
        .arg(&out)
        .assert()
        .success();
    let text = std::fs::read_to_string(&out).unwrap();
    let v: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(v.as_array().unwrap().len(), 1);
    assert_eq!(v[0]["code"], "AUS");
}
