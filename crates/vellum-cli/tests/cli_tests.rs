//! End-to-end tests for the `vellum` binary

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn write(root: &Path, relative: &str, content: &[u8]) {
    let path = root.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

fn sample_vault() -> TempDir {
    let dir = TempDir::new().unwrap();
    write(
        dir.path(),
        "Daily.md",
        b"---\ntags: [journal]\n---\n# Monday\nMet [[Alice|Al]] about ==launch==. #work\n",
    );
    write(dir.path(), "Ideas/Later.md", b"Someday ![[sketch.png]]\n");
    write(dir.path(), ".obsidian/app.md", b"ignored\n");
    dir
}

/// Command isolated from the user's config file and environment
fn vellum(config_home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("vellum").unwrap();
    cmd.env("XDG_CONFIG_HOME", config_home.path())
        .env_remove("VELLUM_VAULT_PATH")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_scan_lists_notes() {
    let home = TempDir::new().unwrap();
    let vault = sample_vault();

    vellum(&home)
        .arg("scan")
        .arg(vault.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Daily.md"))
        .stdout(predicate::str::contains("Ideas/Later.md"))
        .stdout(predicate::str::contains("app.md").not());
}

#[test]
fn test_scan_json() {
    let home = TempDir::new().unwrap();
    let vault = sample_vault();

    let output = vellum(&home)
        .args(["scan", "--format", "json"])
        .arg(vault.path())
        .output()
        .unwrap();
    assert!(output.status.success());

    let files: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let files = files.as_array().unwrap();
    assert_eq!(files.len(), 2);
    assert_eq!(files[0]["filename"], "Daily.md");
    assert_eq!(files[1]["relative_path"], "Ideas/Later.md");
}

#[test]
fn test_parse_prints_record() {
    let home = TempDir::new().unwrap();
    let vault = sample_vault();

    let output = vellum(&home)
        .arg("parse")
        .arg(vault.path().join("Daily.md"))
        .output()
        .unwrap();
    assert!(output.status.success());

    let note: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(note["title"], "Monday");
    assert_eq!(note["tags"], serde_json::json!(["journal", "work"]));
    assert_eq!(note["internal_links"], serde_json::json!(["Alice"]));
    assert_eq!(note["parsed_content"], "# Monday\nMet [Al](Alice) about **launch**. #work\n");
}

#[test]
fn test_parse_respects_size_limit() {
    let home = TempDir::new().unwrap();
    let vault = sample_vault();
    let config_path = home.path().join("limits.toml");
    fs::write(&config_path, "[scanner]\nmax_file_size_bytes = 8\n").unwrap();

    vellum(&home)
        .arg("-C")
        .arg(&config_path)
        .arg("parse")
        .arg(vault.path().join("Daily.md"))
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("File too large"));

    // The size check runs before the read, so a missing file is an IO error
    vellum(&home)
        .arg("-C")
        .arg(&config_path)
        .arg("parse")
        .arg(vault.path().join("Nope.md"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("IO error reading"));
}

#[test]
fn test_parse_missing_file_fails() {
    let home = TempDir::new().unwrap();
    let vault = sample_vault();

    vellum(&home)
        .arg("parse")
        .arg(vault.path().join("Nope.md"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Nope.md"));
}

#[test]
fn test_index_emits_json_lines() {
    let home = TempDir::new().unwrap();
    let vault = sample_vault();

    let output = vellum(&home).arg("index").arg(vault.path()).output().unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let titles: Vec<String> = stdout
        .lines()
        .map(|line| {
            let note: serde_json::Value = serde_json::from_str(line).unwrap();
            note["title"].as_str().unwrap().to_string()
        })
        .collect();
    assert_eq!(titles, vec!["Monday", "Later"]);
}

#[test]
fn test_index_strict_fails_on_bad_note() {
    let home = TempDir::new().unwrap();
    let vault = sample_vault();
    write(vault.path(), "Broken.md", b"---\ntitle: [unclosed\n---\nbody\n");

    // Lenient run skips the broken note
    vellum(&home)
        .arg("index")
        .arg(vault.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("\"title\":\"Monday\""));

    vellum(&home)
        .args(["index", "--strict"])
        .arg(vault.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("1 of 3 notes failed"));
}

#[test]
fn test_stats_text() {
    let home = TempDir::new().unwrap();
    let vault = sample_vault();

    vellum(&home)
        .arg("stats")
        .arg(vault.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Vaults: 1"))
        .stdout(predicate::str::contains("files=2"));
}

#[test]
fn test_vaults_from_environment() {
    let home = TempDir::new().unwrap();
    let vault = sample_vault();

    vellum(&home)
        .env("VELLUM_VAULT_PATH", vault.path())
        .arg("scan")
        .assert()
        .success()
        .stdout(predicate::str::contains("Daily.md"));
}

#[test]
fn test_vaults_from_config_file() {
    let home = TempDir::new().unwrap();
    let vault = sample_vault();
    let config_path = home.path().join("vellum.yaml");
    fs::write(
        &config_path,
        format!("vault:\n  paths:\n    - {}\n", vault.path().display()),
    )
    .unwrap();

    vellum(&home)
        .arg("-C")
        .arg(&config_path)
        .args(["stats", "--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"total_vaults\": 1"));
}

#[test]
fn test_no_vaults_configured() {
    let home = TempDir::new().unwrap();

    vellum(&home)
        .arg("scan")
        .assert()
        .failure()
        .stderr(predicate::str::contains("VELLUM_VAULT_PATH"));
}

#[test]
fn test_invalid_vault_path() {
    let home = TempDir::new().unwrap();

    vellum(&home)
        .args(["scan", "/definitely/not/a/vault"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No valid vault paths"));
}
