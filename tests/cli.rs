use assert_cmd::Command;
use predicates::str::contains;
use std::fs;
use std::path::PathBuf;

/// Helper to get a temporary home directory
fn temp_home_dir() -> tempfile::TempDir {
    tempfile::tempdir().expect("create temp dir")
}

/// Helper to get config file path in the temp dir
fn config_file_path(dir: &tempfile::TempDir) -> PathBuf {
    dir.path().join(".price-dashboard").join("config.json")
}

const BINARY_NAME: &str = "price-dashboard";

#[test]
/// Help command should display usage information.
fn cli_help_displays_usage() {
    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(contains("Terminal dashboard for a remote price API"))
        .stdout(contains("fetch-now"));
}

#[test]
/// Start rejects a zero poll interval before touching the network.
fn start_rejects_zero_interval() {
    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.args(["start", "--headless", "--interval-secs", "0"])
        .assert()
        .failure();
}

#[test]
/// A URL without a scheme is rejected before any request is made.
fn status_rejects_url_without_scheme() {
    let tmp = temp_home_dir();
    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.args(["status", "--api-url", "localhost:5000"])
        .env("HOME", tmp.path())
        .assert()
        .failure()
        .stderr(contains("Invalid API URL: localhost:5000"));
}

#[test]
/// A bad URL stored in the config file is reported instead of being used.
fn history_rejects_invalid_stored_url() {
    let tmp = temp_home_dir();
    let config_path = config_file_path(&tmp);
    fs::create_dir_all(config_path.parent().unwrap()).unwrap();
    fs::write(&config_path, r#"{"api_url": "localhost:5000"}"#).unwrap();

    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.arg("history")
        .env("HOME", tmp.path())
        .assert()
        .failure()
        .stderr(contains("Invalid API URL: localhost:5000"));
}

#[test]
/// set-api should write the normalized URL to the config file.
fn set_api_writes_config_file() {
    let tmp = temp_home_dir();
    let config_path = config_file_path(&tmp);
    assert!(!config_path.exists());

    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.args(["set-api", "--url", "http://prices.example.com:8080/"])
        .env("HOME", tmp.path())
        .assert()
        .success()
        .stdout(contains("API URL saved"));

    let contents = fs::read_to_string(&config_path).unwrap();
    assert!(contents.contains("\"api_url\": \"http://prices.example.com:8080\""));
}

#[test]
/// set-api should refuse something that is not a URL.
fn set_api_rejects_invalid_url() {
    let tmp = temp_home_dir();
    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.args(["set-api", "--url", "not a url"])
        .env("HOME", tmp.path())
        .assert()
        .failure();
    assert!(!config_file_path(&tmp).exists());
}

#[test]
/// Reset command should delete an existing config file.
fn reset_deletes_config_file() {
    let tmp = temp_home_dir();
    let config_path = config_file_path(&tmp);
    fs::create_dir_all(config_path.parent().unwrap()).unwrap();
    fs::write(&config_path, "{}").unwrap();

    // Ensure the file exists
    assert!(config_path.exists());

    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.arg("reset")
        .env("HOME", tmp.path())
        .assert()
        .success()
        .stdout(contains("Configuration cleared"));

    // Confirm the file was deleted
    assert!(!config_path.exists());
}

#[test]
/// Reset without a config file is not an error.
fn reset_without_config_file_succeeds() {
    let tmp = temp_home_dir();
    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.arg("reset")
        .env("HOME", tmp.path())
        .assert()
        .success()
        .stdout(contains("Nothing to reset"));
}

#[test]
/// Status against a closed port fails with an error message.
fn status_reports_unreachable_api() {
    let tmp = temp_home_dir();
    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.args(["status", "--api-url", "http://127.0.0.1:9"])
        .env("HOME", tmp.path())
        .assert()
        .failure()
        .stdout(contains("Request failed"));
}

#[test]
#[ignore] // Requires the price API running on localhost:5000.
fn status_against_local_api() {
    let tmp = temp_home_dir();
    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.arg("status")
        .env("HOME", tmp.path())
        .assert()
        .success()
        .stdout(contains("API status: online"));
}

#[test]
#[ignore] // Requires the price API running on localhost:5000.
fn fetch_now_against_local_api() {
    let tmp = temp_home_dir();
    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.arg("fetch-now")
        .env("HOME", tmp.path())
        .assert()
        .success()
        .stdout(contains("Refresh Now"));
}
