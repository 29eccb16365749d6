//! Shared fixtures for integration tests

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Duration, NaiveDate, Utc};
use tempfile::TempDir;

/// Directory holding the test fixtures.
pub fn fixtures_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
}

/// Read a fixture file as text.
pub fn load_fixture(name: &str) -> String {
    fs::read_to_string(fixtures_dir().join(name))
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", name, e))
}

/// Copy a fixture into a fresh temp directory.
pub fn temp_fixture(name: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join(name);
    fs::write(&path, load_fixture(name)).expect("Failed to copy fixture");
    (temp_dir, path)
}

/// An export with one Bench Press session `days_ago` days before now.
///
/// Returns the export text and the calendar date of the session.
pub fn recent_export(days_ago: i64) -> (String, NaiveDate) {
    let started: DateTime<Utc> = Utc::now() - Duration::days(days_ago);
    let text = format!(
        "\
### WORKOUT SESSIONS ###
_id,starttime
1,{}
### EXERCISE LOGS ###
_id,belongsession,ename
10,1,Bench Press
### EXERCISE SET LOGS ###
_id,exercise_log_id,set_index,weight_lbs,reps
100,10,0,135,5
101,10,1,135,3
### EXERCISE RECORDS ###
",
        started.timestamp()
    );
    (text, started.date_naive())
}
