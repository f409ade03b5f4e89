//! CLI integration tests for the analyze and config subcommands.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn confsift() -> Command {
    Command::cargo_bin("confsift").unwrap()
}

fn write_program(dir: &TempDir) -> std::path::PathBuf {
    let path = dir.path().join("program.txt");
    fs::write(
        &path,
        "10:00\n\nKeynote: AI Trends\n\nMain Hall\n\nPanel: Defense Procurement",
    )
    .unwrap();
    path
}

#[test]
fn analyze_prints_session_table() {
    let dir = TempDir::new().unwrap();
    let program = write_program(&dir);

    confsift()
        .arg("analyze")
        .arg(&program)
        .assert()
        .success()
        .stdout(predicate::str::contains("Found 3 sessions."))
        .stdout(predicate::str::contains("Keynote: AI Trends"))
        .stdout(predicate::str::contains("Main Hall"));
}

#[test]
fn analyze_scores_with_keywords() {
    let dir = TempDir::new().unwrap();
    let program = write_program(&dir);

    confsift()
        .arg("analyze")
        .arg(&program)
        .args(["--keywords", "defense"])
        .assert()
        .success()
        .stdout(predicate::str::contains("medium"));
}

#[test]
fn analyze_exports_csv() {
    let dir = TempDir::new().unwrap();
    let program = write_program(&dir);
    let output = dir.path().join("out.csv");

    confsift()
        .arg("analyze")
        .arg(&program)
        .args(["--format", "csv"])
        .arg("--output")
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote"));

    let csv = fs::read_to_string(&output).unwrap();
    assert!(csv.starts_with("time,place,title,summary,language,priority"));
    assert!(csv.contains("Keynote: AI Trends"));
}

#[test]
fn analyze_handles_empty_document() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("empty.txt");
    fs::write(&path, "   \n\n  ").unwrap();

    confsift()
        .arg("analyze")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("No text could be extracted"));
}

#[test]
fn analyze_missing_file_fails_with_context() {
    confsift()
        .arg("analyze")
        .arg("does-not-exist.txt")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read"));
}

#[test]
fn config_path_points_at_toml() {
    confsift()
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("config.toml"));
}

#[test]
fn blank_line_split_mode_accepted() {
    let dir = TempDir::new().unwrap();
    let program = write_program(&dir);

    confsift()
        .arg("analyze")
        .arg(&program)
        .args(["--split-mode", "blank-line", "--time-mode", "scan"])
        .assert()
        .success();
}
