//! Integration tests for the jefit-digest CLI

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

use crate::helpers::{recent_export, temp_fixture};

/// Command for the binary with an isolated, not-yet-existing config file.
fn jefit_cmd(config_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("jefit-digest").expect("binary should build");
    cmd.env("JEFIT_DIGEST_CONFIG", config_dir.path().join("config.toml"))
        .env_remove("RUST_LOG")
        .current_dir(config_dir.path());
    cmd
}

/// File name the recent export is written to.
const INPUT: &str = "jefit.csv";

/// Write a recent export into `dir` and return its session date.
fn write_recent_export(dir: &TempDir) -> String {
    let (export, date) = recent_export(3);
    fs::write(dir.path().join(INPUT), export).unwrap();
    date.to_string()
}

// ============================================================================
// Help Output Tests
// ============================================================================

#[test]
fn convert_help_shows_usage() {
    let dir = TempDir::new().unwrap();
    jefit_cmd(&dir)
        .args(["convert", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("<INPUT>"))
        .stdout(predicate::str::contains("--months"));
}

// ============================================================================
// Convert Tests
// ============================================================================

#[test]
fn convert_writes_default_output_file() {
    let dir = TempDir::new().unwrap();
    let date = write_recent_export(&dir);

    jefit_cmd(&dir)
        .args(["convert", INPUT])
        .assert()
        .success()
        .stdout(predicate::str::contains("Conversion complete!"))
        .stdout(predicate::str::contains("optimized_workout_context.txt"));

    let written = fs::read_to_string(dir.path().join("optimized_workout_context.txt")).unwrap();
    assert!(written.starts_with("Workout History (Last 12 Months)"));
    assert!(written.ends_with(&format!("{}: Bench Press (135x5, 135x3)", date)));
}

#[test]
fn convert_writes_to_output_path() {
    let dir = TempDir::new().unwrap();
    write_recent_export(&dir);

    jefit_cmd(&dir)
        .args(["convert", INPUT, "-o", "digest.txt"])
        .assert()
        .success();

    assert!(dir.path().join("digest.txt").exists());
    assert!(!dir.path().join("optimized_workout_context.txt").exists());
}

#[test]
fn convert_print_writes_stdout() {
    let dir = TempDir::new().unwrap();
    let date = write_recent_export(&dir);

    jefit_cmd(&dir)
        .args(["convert", INPUT, "--print", "--months", "3"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Workout History (Last 3 Months)"))
        .stdout(predicate::str::contains(format!(
            "{}: Bench Press (135x5, 135x3)",
            date
        )));

    assert!(!dir.path().join("optimized_workout_context.txt").exists());
}

#[test]
fn convert_uses_months_from_config() {
    let dir = TempDir::new().unwrap();
    write_recent_export(&dir);
    fs::write(
        dir.path().join("config.toml"),
        "[history]\nmonths_to_keep = 6\n",
    )
    .unwrap();

    jefit_cmd(&dir)
        .args(["convert", INPUT, "--print"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Workout History (Last 6 Months)"));
}

#[test]
fn convert_verbose_logs_stats() {
    let dir = TempDir::new().unwrap();
    let (export, _) = recent_export(3);
    let export = export.replace("_id,starttime\n1,", "_id,starttime\n2,\n1,");
    fs::write(dir.path().join(INPUT), export).unwrap();

    jefit_cmd(&dir)
        .args(["-v", "convert", INPUT, "--print"])
        .assert()
        .success()
        .stderr(predicate::str::contains("digest complete"))
        .stderr(predicate::str::contains("undated_sessions=1"))
        .stderr(predicate::str::contains("retained=2"));
}

// ============================================================================
// Error Handling Tests
// ============================================================================

#[test]
fn convert_missing_section_fails_without_output() {
    let (dir, path) = temp_fixture("missing_sections.csv");

    jefit_cmd(&dir)
        .args(["convert", path.to_str().unwrap()])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains(
            "Could not find the exercise logs section",
        ));

    assert!(!dir.path().join("optimized_workout_context.txt").exists());
}

#[test]
fn convert_missing_input_fails() {
    let dir = TempDir::new().unwrap();
    jefit_cmd(&dir)
        .args(["convert", "does-not-exist.csv"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read export"));
}

#[test]
fn convert_rejects_months_out_of_range() {
    let dir = TempDir::new().unwrap();
    write_recent_export(&dir);

    jefit_cmd(&dir)
        .args(["convert", INPUT, "--months", "37"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("37"));
}

#[test]
fn convert_rejects_invalid_months_in_config() {
    let dir = TempDir::new().unwrap();
    write_recent_export(&dir);
    fs::write(
        dir.path().join("config.toml"),
        "[history]\nmonths_to_keep = 48\n",
    )
    .unwrap();

    jefit_cmd(&dir)
        .args(["convert", INPUT, "--print"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("months_to_keep"));
}

// ============================================================================
// Config & Completions Tests
// ============================================================================

#[test]
fn config_show_prints_defaults() {
    let dir = TempDir::new().unwrap();
    jefit_cmd(&dir)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("months_to_keep = 12"))
        .stdout(predicate::str::contains("optimized_workout_context.txt"));
}

#[test]
fn config_migrate_yes_creates_file() {
    let dir = TempDir::new().unwrap();
    jefit_cmd(&dir)
        .args(["config", "migrate", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("+ months_to_keep = 12"));

    let written = fs::read_to_string(dir.path().join("config.toml")).unwrap();
    assert!(written.contains("[output]"));
}

#[test]
fn config_migrate_reports_new_sections() {
    let dir = TempDir::new().unwrap();
    let config_path = dir.path().join("config.toml");
    fs::write(&config_path, "[history]\nmonths_to_keep = 3\n").unwrap();

    jefit_cmd(&dir)
        .args(["config", "migrate", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Found 1 missing field(s) in 1 new section(s):",
        ))
        .stdout(predicate::str::contains("+ filename"));

    let written = fs::read_to_string(&config_path).unwrap();
    assert!(written.contains("months_to_keep = 3"));
    assert!(written.contains("[output]"));
}

#[test]
fn config_migrate_without_tty_makes_no_changes() {
    let dir = TempDir::new().unwrap();
    jefit_cmd(&dir)
        .args(["config", "migrate"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No changes made."));

    assert!(!dir.path().join("config.toml").exists());
}

#[test]
fn completions_generate_for_bash() {
    let dir = TempDir::new().unwrap();
    jefit_cmd(&dir)
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("jefit-digest"));
}
