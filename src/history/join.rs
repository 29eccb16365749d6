//! Inner join of set logs → exercise logs → sessions.

use std::collections::HashMap;

use chrono::{DateTime, Utc};

use super::records::{ExerciseLog, JoinedRecord, SetLog, Session};

/// Join set logs to their exercise logs and sessions.
///
/// Rows whose foreign key does not resolve are dropped, as are sessions that
/// have no start time. Duplicate keys yield one record per matching pair.
pub fn join(sessions: &[Session], logs: &[ExerciseLog], sets: &[SetLog]) -> Vec<JoinedRecord> {
    let mut started: HashMap<&str, Vec<DateTime<Utc>>> = HashMap::new();
    for session in sessions {
        if let Some(at) = session.started_at {
            started.entry(session.id.as_str()).or_default().push(at);
        }
    }

    let mut exercises: HashMap<&str, Vec<(DateTime<Utc>, &str)>> = HashMap::new();
    for log in logs {
        let Some(times) = started.get(log.session_id.as_str()) else {
            continue;
        };
        let entry = exercises.entry(log.id.as_str()).or_default();
        entry.extend(times.iter().map(|&at| (at, log.name.as_str())));
    }

    sets.iter()
        .filter_map(|set| exercises.get(set.exercise_log_id.as_str()).map(|m| (set, m)))
        .flat_map(|(set, matches)| {
            matches.iter().map(move |&(performed_at, exercise)| JoinedRecord {
                performed_at,
                exercise: exercise.to_string(),
                set_index: set.set_index,
                weight: set.weight.unwrap_or(0.0),
                reps: set.reps.unwrap_or(0.0),
            })
        })
        .collect()
}
