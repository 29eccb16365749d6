//! Typed records built from the export tables.

use chrono::{DateTime, NaiveDate, Utc};

use crate::error::DigestError;
use crate::export::{Section, Table};

/// One workout occasion.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub id: String,
    /// Start time, or `None` when `starttime` is missing or out of range.
    pub started_at: Option<DateTime<Utc>>,
}

/// One exercise performed within a session.
///
/// Logs without an exercise name are skipped when reading the table.
#[derive(Debug, Clone, PartialEq)]
pub struct ExerciseLog {
    pub id: String,
    pub session_id: String,
    pub name: String,
}

/// One set performed within an exercise log.
#[derive(Debug, Clone, PartialEq)]
pub struct SetLog {
    pub exercise_log_id: String,
    pub set_index: i64,
    pub weight: Option<f64>,
    pub reps: Option<f64>,
}

/// A set log joined with its exercise log and session.
#[derive(Debug, Clone, PartialEq)]
pub struct JoinedRecord {
    pub performed_at: DateTime<Utc>,
    pub exercise: String,
    pub set_index: i64,
    /// Weight in pounds; absent values are zero.
    pub weight: f64,
    /// Repetitions; absent values are zero.
    pub reps: f64,
}

impl JoinedRecord {
    /// Calendar day the set was performed on.
    pub fn date(&self) -> NaiveDate {
        self.performed_at.date_naive()
    }
}

/// Interpret a Unix epoch-seconds value as a UTC timestamp.
pub fn timestamp_from_epoch(seconds: f64) -> Option<DateTime<Utc>> {
    if !seconds.is_finite() {
        return None;
    }
    let whole = seconds.floor();
    let nanos = ((seconds - whole) * 1e9).round() as u32;
    if whole < i64::MIN as f64 || whole > i64::MAX as f64 {
        return None;
    }
    DateTime::from_timestamp(whole as i64, nanos.min(999_999_999))
}

impl Session {
    /// Build sessions from the `WORKOUT SESSIONS` table.
    pub fn from_table(table: &Table) -> Result<Vec<Self>, DigestError> {
        let section = Section::WorkoutSessions;
        let id = table.column(section, "_id")?;
        let starttime = table.column(section, "starttime")?;

        Ok(table
            .rows()
            .filter_map(|row| {
                Some(Session {
                    id: row.get(id)?.to_string(),
                    started_at: row.number(starttime).and_then(timestamp_from_epoch),
                })
            })
            .collect())
    }
}

impl ExerciseLog {
    /// Build exercise logs from the `EXERCISE LOGS` table.
    pub fn from_table(table: &Table) -> Result<Vec<Self>, DigestError> {
        let section = Section::ExerciseLogs;
        let id = table.column(section, "_id")?;
        let session_id = table.column(section, "belongsession")?;
        let name = table.column(section, "ename")?;

        Ok(table
            .rows()
            .filter_map(|row| {
                Some(ExerciseLog {
                    id: row.get(id)?.to_string(),
                    session_id: row.get(session_id)?.to_string(),
                    name: row.get(name)?.to_string(),
                })
            })
            .collect())
    }
}

impl SetLog {
    /// Build set logs from the `EXERCISE SET LOGS` table.
    pub fn from_table(table: &Table) -> Result<Vec<Self>, DigestError> {
        let section = Section::ExerciseSetLogs;
        let exercise_log_id = table.column(section, "exercise_log_id")?;
        let set_index = table.column(section, "set_index")?;
        let weight = table.column(section, "weight_lbs")?;
        let reps = table.column(section, "reps")?;

        Ok(table
            .rows()
            .filter_map(|row| {
                Some(SetLog {
                    exercise_log_id: row.get(exercise_log_id)?.to_string(),
                    set_index: row.number(set_index).map_or(0, |n| n as i64),
                    weight: row.number(weight),
                    reps: row.number(reps),
                })
            })
            .collect())
    }
}
