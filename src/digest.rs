//! The export → digest pipeline.
//!
//! Extract sections, build typed records, join, window, compress. Each run
//! is independent and deterministic for a given `now`.

use chrono::{DateTime, Utc};
use tracing::{debug, warn};

use crate::error::DigestError;
use crate::export::ExportDocument;
use crate::history::{self, ExerciseLog, HistoryWindow, SetLog, Session};

/// Suggested file name for a written digest.
pub const DEFAULT_OUTPUT_FILENAME: &str = "optimized_workout_context.txt";

/// Counters gathered while building a digest.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DigestStats {
    pub sessions: usize,
    pub exercise_logs: usize,
    pub set_logs: usize,
    /// Sessions dropped because their start time could not be read.
    pub undated_sessions: usize,
    pub joined: usize,
    pub retained: usize,
    pub days: usize,
}

/// A rendered digest and the stats of the run that produced it.
#[derive(Debug, Clone)]
pub struct Digest {
    pub text: String,
    pub stats: DigestStats,
}

/// Digest an export keeping `months_to_keep` months before now.
pub fn transform(document: &[u8], months_to_keep: u32) -> Result<String, DigestError> {
    transform_at(document, months_to_keep, Utc::now())
}

/// Digest an export keeping `months_to_keep` months before `now`.
pub fn transform_at(
    document: &[u8],
    months_to_keep: u32,
    now: DateTime<Utc>,
) -> Result<String, DigestError> {
    let window = HistoryWindow::new(months_to_keep)?;
    digest_at(document, window, now).map(|digest| digest.text)
}

/// Run the full pipeline and return the report with its stats.
pub fn digest_at(
    document: &[u8],
    window: HistoryWindow,
    now: DateTime<Utc>,
) -> Result<Digest, DigestError> {
    let export = ExportDocument::from_bytes(document)?;

    let sessions = Session::from_table(&export.sessions)?;
    let logs = ExerciseLog::from_table(&export.exercise_logs)?;
    let sets = SetLog::from_table(&export.set_logs)?;

    let undated_sessions = sessions.iter().filter(|s| s.started_at.is_none()).count();
    if undated_sessions > 0 {
        warn!(count = undated_sessions, "dropping sessions without a readable start time");
    }

    let joined = history::join(&sessions, &logs, &sets);
    let joined_count = joined.len();
    debug!(joined = joined_count, "joined set logs");

    let recent = window.apply(joined, now);
    debug!(
        retained = recent.len(),
        cutoff = %window.cutoff(now),
        "applied history window"
    );

    let days = history::group_by_day(&recent);
    let text = history::render(&days, window.months());

    Ok(Digest {
        text,
        stats: DigestStats {
            sessions: sessions.len(),
            exercise_logs: logs.len(),
            set_logs: sets.len(),
            undated_sessions,
            joined: joined_count,
            retained: recent.len(),
            days: days.len(),
        },
    })
}
