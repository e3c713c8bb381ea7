//! Binary smoke tests for the `urlize` CLI.
//!
//! These run the compiled binary with an isolated `URLIZE_DIR` so a real
//! `~/.urlize/config` never leaks into the assertions.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

#[allow(deprecated)] // cargo_bin works fine for our use case
fn urlize(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("urlize").unwrap();
    cmd.env("URLIZE_DIR", dir.path())
        .env_remove("URLIZE_NULL_MARKER")
        .env_remove("URLIZE_JSON");
    cmd
}

// ── Version ─────────────────────────────────────────────────────────────────

#[test]
fn version_subcommand() {
    let dir = TempDir::new().unwrap();
    urlize(&dir)
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("urlize "));
}

#[test]
fn version_flag() {
    let dir = TempDir::new().unwrap();
    urlize(&dir)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("urlize "));
}

#[test]
fn no_args_prints_version() {
    let dir = TempDir::new().unwrap();
    urlize(&dir)
        .assert()
        .success()
        .stdout(predicate::str::starts_with("urlize "));
}

#[test]
fn help_lists_subcommands() {
    let dir = TempDir::new().unwrap();
    let output = urlize(&dir).arg("--help").output().unwrap();
    let stdout = String::from_utf8_lossy(&output.stdout);
    for cmd in &["slug", "batch", "check", "version"] {
        assert!(
            stdout.contains(cmd),
            "Help text should mention '{cmd}' subcommand"
        );
    }
}

// ── Slug ────────────────────────────────────────────────────────────────────

#[test]
fn slug_headline() {
    let dir = TempDir::new().unwrap();
    urlize(&dir)
        .args([
            "slug",
            "Ruby vs. Python: The Benefits of Monkeypatching and Chainability",
        ])
        .assert()
        .success()
        .stdout("ruby-vs-python-the-benefits-of-monkeypatching-and-chainability\n");
}

#[test]
fn slug_multiple_arguments() {
    let dir = TempDir::new().unwrap();
    urlize(&dir)
        .args(["slug", "O'Brien", "!!!", "--leading and trailing--"])
        .assert()
        .success()
        .stdout("obrien\n\nleading-and-trailing\n");
}

#[test]
fn slug_json_flag() {
    let dir = TempDir::new().unwrap();
    urlize(&dir)
        .args(["slug", "--json", "Hello World"])
        .assert()
        .success()
        .stdout("{\"input\":\"Hello World\",\"slug\":\"hello-world\"}\n");
}

#[test]
fn slug_requires_text() {
    let dir = TempDir::new().unwrap();
    urlize(&dir).arg("slug").assert().failure();
}

// ── Batch ───────────────────────────────────────────────────────────────────

#[test]
fn batch_reads_stdin() {
    let dir = TempDir::new().unwrap();
    urlize(&dir)
        .arg("batch")
        .write_stdin("Hello World\na!!!b\n\\N\n")
        .assert()
        .success()
        .stdout("hello-world\na-b\n\n");
}

#[test]
fn batch_custom_null_marker() {
    let dir = TempDir::new().unwrap();
    urlize(&dir)
        .args(["batch", "--null-marker", "NULL", "--json"])
        .write_stdin("NULL\n")
        .assert()
        .success()
        .stdout("{\"input\":null,\"slug\":\"\"}\n");
}

#[test]
fn batch_uses_config_file() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("config"), "null_marker=<none>\njson=true\n").unwrap();
    urlize(&dir)
        .arg("batch")
        .write_stdin("<none>\nTwo Words\n")
        .assert()
        .success()
        .stdout("{\"input\":null,\"slug\":\"\"}\n{\"input\":\"Two Words\",\"slug\":\"two-words\"}\n");
}

#[test]
fn batch_env_overrides_config_file() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("config"), "json=true\n").unwrap();
    urlize(&dir)
        .env("URLIZE_JSON", "false")
        .arg("batch")
        .write_stdin("Plain Output\n")
        .assert()
        .success()
        .stdout("plain-output\n");
}

// ── Check ───────────────────────────────────────────────────────────────────

#[test]
fn check_accepts_slugs() {
    let dir = TempDir::new().unwrap();
    urlize(&dir)
        .args(["check", "hello-world", "route-66"])
        .assert()
        .success();
}

#[test]
fn check_rejects_non_slugs() {
    let dir = TempDir::new().unwrap();
    urlize(&dir)
        .args(["check", "hello-world", "Hello World"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("try \"hello-world\""))
        .stderr(predicate::str::contains("1 of 2 arguments are not slugs"));
}

// ── Unreadable config ───────────────────────────────────────────────────────

fn dir_with_binary_config() -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("config"), b"null_marker=\xff\xfe\n").unwrap();
    dir
}

#[test]
fn version_ignores_unreadable_config() {
    let dir = dir_with_binary_config();
    urlize(&dir)
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("urlize "));
}

#[test]
fn check_ignores_unreadable_config() {
    let dir = dir_with_binary_config();
    urlize(&dir).args(["check", "hello-world"]).assert().success();
}

#[test]
fn batch_reports_unreadable_config() {
    let dir = dir_with_binary_config();
    urlize(&dir)
        .arg("batch")
        .write_stdin("Hello\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read"));
}
