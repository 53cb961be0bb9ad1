//! Binary-level tests that need no network

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn savey(config_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("savey").unwrap();
    cmd.env("SAVEY_CLI_CONFIG_DIR", config_dir.path())
        .env_remove("SAVEY_USERNAME")
        .env_remove("SAVEY_PASSWORD")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn help_lists_commands() {
    let dir = TempDir::new().unwrap();
    savey(&dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("accounts"))
        .stdout(predicate::str::contains("transactions"))
        .stdout(predicate::str::contains("export"))
        .stdout(predicate::str::contains("login-check"))
        .stdout(predicate::str::contains("verify"));
}

#[test]
fn config_shows_defaults() {
    let dir = TempDir::new().unwrap();
    savey(&dir)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains(dir.path().to_string_lossy().as_ref()))
        .stdout(predicate::str::contains("http://www.savey.co/"))
        .stdout(predicate::str::contains("(not set)"));

    assert!(!dir.path().join("config.json").exists());
}

#[test]
fn config_init_writes_settings() {
    let dir = TempDir::new().unwrap();
    savey(&dir).args(["config", "--init"]).assert().success();

    let written = std::fs::read_to_string(dir.path().join("config.json")).unwrap();
    assert!(written.contains("\"base_url\": \"http://www.savey.co/\""));
}

#[test]
fn config_reads_existing_settings() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("config.json"),
        r#"{ "base_url": "https://savey.example/", "username": "ana" }"#,
    )
    .unwrap();

    savey(&dir)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("https://savey.example/"))
        .stdout(predicate::str::contains("ana"));
}

#[test]
fn invalid_settings_fail() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("config.json"), r#"{ "base_url": "ftp://x/" }"#).unwrap();

    savey(&dir)
        .arg("config")
        .assert()
        .failure()
        .stderr(predicate::str::contains("base_url must be http or https"));
}

#[test]
fn network_command_needs_username() {
    let dir = TempDir::new().unwrap();
    savey(&dir)
        .arg("accounts")
        .assert()
        .failure()
        .stderr(predicate::str::contains("No username given"));
}

#[test]
fn export_requires_format() {
    let dir = TempDir::new().unwrap();
    savey(&dir)
        .arg("export")
        .assert()
        .failure()
        .stderr(predicate::str::contains("--format"));
}

#[test]
fn verify_reports_bad_export() {
    let dir = TempDir::new().unwrap();
    let file = dir.path().join("export.json");
    std::fs::write(&file, r#"{ "schema_version": "0.1" }"#).unwrap();

    savey(&dir)
        .arg("verify")
        .arg(&file)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Export error"));
}

#[test]
fn verify_missing_file() {
    let dir = TempDir::new().unwrap();
    savey(&dir)
        .args(["verify", "does-not-exist.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read"));
}
