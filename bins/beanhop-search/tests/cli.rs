//! End-to-end tests for the offline paths of the binary

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

const SHOPS: &str = r#"[
    {"id": "1", "name": "Moonbean Coffee", "city": "Austin", "description": "Cozy spot with great cold brew"},
    {"id": "2", "name": "Chapter Coffee", "city": "Austin"},
    {"id": "3", "name": "Opal Coffee", "address": "12 Latte Lane"}
]"#;

const MENU: &str = r#"{"menu_items": [
    {"id": "m1", "shop_id": "1", "name": "Cold Brew", "price": 4.0},
    {"id": "m2", "shop_id": "2", "name": "Cold Brew Tonic", "category": "cold", "base_price": 5.5}
]}"#;

fn workspace() -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("shops.json"), SHOPS).unwrap();
    fs::write(dir.path().join("menu.json"), MENU).unwrap();
    dir
}

fn beanhop(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("beanhop-search").unwrap();
    cmd.current_dir(dir.path())
        .env_remove("BEANHOP_CONFIG")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn offline_search_prints_ranked_shops() {
    let dir = workspace();
    beanhop(&dir)
        .args(["search", "moon", "--offline", "--shops", "shops.json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1 shop for \"moon\" (local)"))
        .stdout(predicate::str::contains("  80  Moonbean Coffee (Austin)"));
}

#[test]
fn offline_search_json_output() {
    let dir = workspace();
    let output = beanhop(&dir)
        .args(["--format", "json", "search", "coffee", "--offline", "--shops", "shops.json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["source"], "local_fallback");

    let shops = json["shops"].as_array().unwrap();
    assert_eq!(shops.len(), 3);
    // Every name has "coffee" as a later word; ties keep file order.
    assert_eq!(shops[0]["name"], "Moonbean Coffee");
    assert_eq!(shops[2]["name"], "Opal Coffee");
    assert!(shops.iter().all(|shop| shop["_score"] == 60));
}

#[test]
fn offline_search_ranks_menu_items() {
    let dir = workspace();
    let output = beanhop(&dir)
        .args([
            "--format", "json", "search", "cold brew", "--offline", "--shops", "shops.json",
            "--menu", "menu.json",
        ])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let items = json["menu_items"].as_array().unwrap();
    assert_eq!(items[0]["name"], "Cold Brew");
    assert_eq!(items[0]["_score"], 100);
    assert_eq!(items[1]["_score"], 80);
    assert_eq!(json["suggestions"][0], "Cold Brew");
}

#[test]
fn limit_caps_results() {
    let dir = workspace();
    let output = beanhop(&dir)
        .args(["--format", "json", "search", "coffee", "--offline", "--shops", "shops.json", "--limit", "1"])
        .output()
        .unwrap();
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["shops"].as_array().unwrap().len(), 1);
}

#[test]
fn blank_query_has_no_results() {
    let dir = workspace();
    beanhop(&dir)
        .args(["search", "   ", "--offline", "--shops", "shops.json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No results"));
}

#[test]
fn config_file_overrides_limits() {
    let dir = workspace();
    fs::write(dir.path().join("beanhop.toml"), "[search]\nmax_shops = 2\n").unwrap();

    beanhop(&dir)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("max_shops = 2"))
        .stdout(predicate::str::contains("debounce_ms = 300"));
}

#[test]
fn menu_items_are_not_capped_by_max_shops() {
    let dir = workspace();
    fs::write(dir.path().join("beanhop.toml"), "[search]\nmax_shops = 1\n").unwrap();

    let output = beanhop(&dir)
        .args([
            "--format", "json", "search", "cold brew", "--offline", "--shops", "shops.json",
            "--menu", "menu.json",
        ])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert!(json["shops"].as_array().unwrap().len() <= 1);
    assert_eq!(json["menu_items"].as_array().unwrap().len(), 2);
}

#[test]
fn missing_config_file_is_a_config_error() {
    let dir = workspace();
    beanhop(&dir)
        .args(["--config", "nope.toml", "config"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("E3001"));
}

#[test]
fn missing_shops_file_fails() {
    let dir = workspace();
    beanhop(&dir)
        .args(["search", "moon", "--offline", "--shops", "missing.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("E2001"));
}

#[test]
fn watch_prints_only_settled_query() {
    let dir = workspace();
    beanhop(&dir)
        .args(["watch", "--offline", "--shops", "shops.json"])
        .write_stdin("m\nmo\nmoo\nmoon\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("for \"moon\""))
        .stdout(predicate::str::contains("for \"mo\"").not());
}
