//! Integration tests for weft

use assert_cmd::{cargo::cargo_bin_cmd, Command};
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

fn fixture_config_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join("weft.toml")
}

fn weft_cmd() -> Command {
    let mut cmd = cargo_bin_cmd!("weft");
    cmd.env("WEFT_CONFIG", fixture_config_path());
    cmd
}

#[test]
fn test_version() {
    weft_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("weft"));
}

#[test]
fn test_help() {
    weft_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("weft is a CLI tool"));
}

#[test]
fn test_invalid_command() {
    weft_cmd().arg("invalid").assert().failure();
}

#[test]
fn test_config_show() {
    weft_cmd()
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Configuration:"));
}

#[test]
fn test_config_path() {
    weft_cmd()
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("weft.toml"));
}

#[test]
fn test_apply_writes_manifest_files() {
    let temp = TempDir::new().expect("tempdir");
    let manifest_path = temp.path().join("manifest.json");
    let target = temp.path().join("out");

    let manifest = r#"{
        "files": {
            "/home/project/a.txt": { "content": "hello", "isBinary": false, "type": "file" },
            "/home/project/sub/b.txt": { "content": "world", "isBinary": false, "type": "file" }
        }
    }"#;
    fs::write(&manifest_path, manifest).expect("write manifest");

    weft_cmd()
        .arg("apply")
        .arg(&manifest_path)
        .arg("--target-dir")
        .arg(&target)
        .assert()
        .success()
        .stdout(predicate::str::contains("a.txt"))
        .stdout(predicate::str::contains("Wrote 2 file(s)"));

    assert_eq!(
        fs::read_to_string(target.join("a.txt")).expect("a.txt"),
        "hello"
    );
    assert_eq!(
        fs::read_to_string(target.join("sub/b.txt")).expect("sub/b.txt"),
        "world"
    );
}

#[test]
fn test_apply_reads_stdin() {
    let temp = TempDir::new().expect("tempdir");
    let target = temp.path().join("out");

    let manifest = r#"{
        "files": {
            "index.html": { "content": "<html></html>", "isBinary": false, "type": "file" }
        }
    }"#;

    weft_cmd()
        .arg("apply")
        .arg("--target-dir")
        .arg(&target)
        .write_stdin(manifest)
        .assert()
        .success();

    assert!(target.join("index.html").exists());
}

#[test]
fn test_apply_uses_embedded_target_dir() {
    let temp = TempDir::new().expect("tempdir");
    let manifest_path = temp.path().join("manifest.json");
    let target = temp.path().join("embedded");

    let manifest = format!(
        r#"{{
            "target_dir": {:?},
            "files": {{
                "one.txt": {{ "content": "1", "isBinary": false, "type": "file" }}
            }}
        }}"#,
        target
    );
    fs::write(&manifest_path, manifest).expect("write manifest");

    weft_cmd().arg("apply").arg(&manifest_path).assert().success();

    assert!(target.join("one.txt").exists());
}

#[test]
fn test_apply_without_target_dir_fails() {
    let temp = TempDir::new().expect("tempdir");
    let manifest_path = temp.path().join("manifest.json");
    fs::write(&manifest_path, r#"{ "files": {} }"#).expect("write manifest");

    weft_cmd().arg("apply").arg(&manifest_path).assert().failure();
}

#[test]
fn test_apply_rejects_traversal_keys() {
    let temp = TempDir::new().expect("tempdir");
    let manifest_path = temp.path().join("manifest.json");
    let target = temp.path().join("out");

    let manifest = r#"{
        "files": {
            "../escape.txt": { "content": "nope", "isBinary": false, "type": "file" }
        }
    }"#;
    fs::write(&manifest_path, manifest).expect("write manifest");

    weft_cmd()
        .arg("apply")
        .arg(&manifest_path)
        .arg("--target-dir")
        .arg(&target)
        .assert()
        .failure();

    assert!(!temp.path().join("escape.txt").exists());
}

#[test]
fn test_check_missing_dir_fails() {
    let temp = TempDir::new().expect("tempdir");
    weft_cmd()
        .arg("check")
        .arg(temp.path().join("nope"))
        .assert()
        .failure();
}

#[test]
fn test_check_empty_dir_fails() {
    let temp = TempDir::new().expect("tempdir");
    weft_cmd().arg("check").arg(temp.path()).assert().failure();
}

#[test]
fn test_check_project_dir_succeeds() {
    let temp = TempDir::new().expect("tempdir");
    fs::write(temp.path().join("package.json"), "{}").expect("write package.json");
    weft_cmd()
        .arg("check")
        .arg(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("installable project"));
}

#[test]
fn test_init_creates_manifest() {
    let temp = TempDir::new().expect("tempdir");
    weft_cmd()
        .arg("init")
        .current_dir(temp.path())
        .env("WEFT_INIT_YES", "1")
        .assert()
        .success()
        .stdout(predicate::str::contains("created successfully"));

    assert!(temp.path().join("weft.json").exists());
}

#[test]
fn test_init_honors_custom_filename() {
    let temp = TempDir::new().expect("tempdir");
    weft_cmd()
        .arg("init")
        .arg("generated.json")
        .current_dir(temp.path())
        .env("WEFT_INIT_YES", "1")
        .assert()
        .success();

    assert!(temp.path().join("generated.json").exists());
}
