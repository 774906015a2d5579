//! CLI surface tests for the envcmp binary

use assert_cmd::Command;
use filetime::{set_file_mtime, FileTime};
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn write_file(root: &Path, rel: &str, content: &str) {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().expect("file has a parent")).expect("Failed to create dirs");
    fs::write(&path, content).expect("Failed to write file");
    set_file_mtime(&path, FileTime::from_unix_time(1_600_000_000, 0)).expect("Failed to set mtime");
}

fn envcmp(cwd: &Path) -> Command {
    let mut cmd = Command::cargo_bin("envcmp").expect("binary should build");
    cmd.current_dir(cwd);
    cmd
}

#[test]
fn test_identical_environments_report_success() {
    let temp = TempDir::new().expect("Failed to create temp dir");
    write_file(temp.path(), "dev/app/src/a.txt", "same");
    write_file(temp.path(), "prod/app/src/a.txt", "same");

    envcmp(temp.path())
        .args(["run", "--env-left", "dev", "--env-right", "prod", "--name-dir", "app"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "SUCCESS: envs 'dev' and 'prod' contain the same set of files",
        ))
        .stdout(predicate::str::contains("RESULT: environments match"));
}

#[test]
fn test_missing_file_is_reported_per_environment() {
    let temp = TempDir::new().expect("Failed to create temp dir");
    write_file(temp.path(), "dev/app/src/a.txt", "same");
    write_file(temp.path(), "dev/app/src/b.txt", "only in dev");
    write_file(temp.path(), "prod/app/src/a.txt", "same");

    envcmp(temp.path())
        .args(["run", "--env-left", "dev", "--env-right", "prod", "--name-dir", "app"])
        .assert()
        .success() // differences are findings, not failures
        .stdout(predicate::str::contains(
            "The following files are missing in env 'prod':",
        ))
        .stdout(predicate::str::contains("----src/b.txt"))
        .stdout(predicate::str::contains("RESULT: differences found"));
}

#[test]
fn test_content_mismatch_is_reported() {
    let temp = TempDir::new().expect("Failed to create temp dir");
    write_file(temp.path(), "dev/app/config/app.yaml", "replicas: 1");
    write_file(temp.path(), "prod/app/config/app.yaml", "replicas: 1000");

    envcmp(temp.path())
        .args(["run", "--env-left", "dev", "--env-right", "prod", "--name-dir", "app"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "The following shared files differ in content:",
        ))
        .stdout(predicate::str::contains("----config/app.yaml"));
}

#[test]
fn test_zero_results_in_both_environments_fails() {
    let temp = TempDir::new().expect("Failed to create temp dir");
    fs::create_dir_all(temp.path().join("dev/app")).expect("Failed to create dirs");
    fs::create_dir_all(temp.path().join("prod/app")).expect("Failed to create dirs");

    envcmp(temp.path())
        .args(["run", "--env-left", "dev", "--env-right", "prod", "--name-dir", "app"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("zero files"));
}

#[test]
fn test_unknown_environment_fails() {
    let temp = TempDir::new().expect("Failed to create temp dir");
    write_file(temp.path(), "dev/app/src/a.txt", "x");

    envcmp(temp.path())
        .args(["run", "--env-left", "dev", "--env-right", "prod", "--name-dir", "app"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No directory named 'prod'"));
}

#[test]
fn test_default_config_file_is_materialized() {
    let temp = TempDir::new().expect("Failed to create temp dir");
    write_file(temp.path(), "dev/app/src/a.txt", "x");
    write_file(temp.path(), "prod/app/src/a.txt", "x");

    assert!(!temp.path().join("envcmp.toml").exists());

    envcmp(temp.path())
        .args(["run", "--env-left", "dev", "--env-right", "prod", "--name-dir", "app"])
        .assert()
        .success();

    // Missing config is recovered by writing the default policy to disk
    let written =
        fs::read_to_string(temp.path().join("envcmp.toml")).expect("default config should exist");
    assert!(written.contains("[envcmp]"));
}

#[test]
fn test_config_exclude_list_is_honored() {
    let temp = TempDir::new().expect("Failed to create temp dir");
    write_file(temp.path(), "dev/app/src/a.txt", "x");
    write_file(temp.path(), "dev/app/logs/today.log", "noise only in dev");
    write_file(temp.path(), "prod/app/src/a.txt", "x");
    fs::write(
        temp.path().join("envcmp.toml"),
        "[envcmp]\ninclude = []\nexclude = [\"logs\"]\n",
    )
    .expect("Failed to write config");

    envcmp(temp.path())
        .args(["run", "--env-left", "dev", "--env-right", "prod", "--name-dir", "app"])
        .assert()
        .success()
        .stdout(predicate::str::contains("RESULT: environments match"));
}

#[test]
fn test_required_arguments_are_enforced() {
    let temp = TempDir::new().expect("Failed to create temp dir");

    envcmp(temp.path())
        .args(["run", "--env-left", "dev"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--env-right"));
}
