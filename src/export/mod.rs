//! Reading the raw Jefit export.
//!
//! A Jefit export is one text file holding many CSV tables, each introduced
//! by a `### NAME` marker line. Only three of them feed the digest:
//!
//! - [`Section::WorkoutSessions`] - one row per workout, with its start time
//! - [`Section::ExerciseLogs`] - one row per exercise performed in a workout
//! - [`Section::ExerciseSetLogs`] - one row per set of an exercise
//!
//! Everything after `### EXERCISE RECORDS` is ignored.

mod section;
mod table;

pub use section::{extract_section, Section};
pub use table::{split_fields, Row, Table};

use tracing::debug;

use crate::error::DigestError;

/// The three tables the digest is built from.
#[derive(Debug, Clone)]
pub struct ExportDocument {
    pub sessions: Table,
    pub exercise_logs: Table,
    pub set_logs: Table,
}

impl ExportDocument {
    /// Decode raw export bytes and extract the required sections.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, DigestError> {
        let text = std::str::from_utf8(bytes)?;
        Self::parse(text.strip_prefix('\u{feff}').unwrap_or(text))
    }

    /// Extract the required sections from export text.
    ///
    /// Fails with `MissingSection` on the first section that cannot be found.
    pub fn parse(text: &str) -> Result<Self, DigestError> {
        let lines: Vec<&str> = text.lines().collect();
        let extract = |section: Section| {
            let table = section
                .extract(&lines)
                .ok_or(DigestError::MissingSection { section })?;
            debug!(%section, rows = table.len(), "extracted section");
            Ok::<_, DigestError>(table)
        };

        let [sessions, exercise_logs, set_logs] = Section::ALL.map(extract);

        // Fields are checked in document order, so the first missing section wins
        Ok(Self {
            sessions: sessions?,
            exercise_logs: exercise_logs?,
            set_logs: set_logs?,
        })
    }
}
