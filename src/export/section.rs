//! Locating the marker-delimited sections of a Jefit export.

use std::fmt;

use super::Table;

/// The sections of a Jefit export the digest needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    WorkoutSessions,
    ExerciseLogs,
    ExerciseSetLogs,
}

impl Section {
    /// All required sections, in document order.
    pub const ALL: [Section; 3] = [
        Section::WorkoutSessions,
        Section::ExerciseLogs,
        Section::ExerciseSetLogs,
    ];

    /// Marker line that opens this section.
    pub fn start_marker(&self) -> &'static str {
        match self {
            Section::WorkoutSessions => "### WORKOUT SESSIONS",
            Section::ExerciseLogs => "### EXERCISE LOGS",
            Section::ExerciseSetLogs => "### EXERCISE SET LOGS",
        }
    }

    /// Marker line that closes this section (the next section's opener).
    pub fn end_marker(&self) -> &'static str {
        match self {
            Section::WorkoutSessions => Section::ExerciseLogs.start_marker(),
            Section::ExerciseLogs => Section::ExerciseSetLogs.start_marker(),
            Section::ExerciseSetLogs => "### EXERCISE RECORDS",
        }
    }

    /// Extract this section's table from the document lines.
    pub fn extract(&self, lines: &[&str]) -> Option<Table> {
        extract_section(lines, self.start_marker(), self.end_marker())
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Section::WorkoutSessions => write!(f, "workout sessions"),
            Section::ExerciseLogs => write!(f, "exercise logs"),
            Section::ExerciseSetLogs => write!(f, "exercise set logs"),
        }
    }
}

/// Extract the table between the first line containing `start` and the first
/// later line containing `end`.
///
/// Both marker lines are excluded; blank lines are skipped and the rest trimmed.
/// Returns `None` when either marker is missing or `end` only occurs before `start`.
pub fn extract_section(lines: &[&str], start: &str, end: &str) -> Option<Table> {
    let start_idx = lines.iter().position(|line| line.contains(start))?;
    let body = &lines[start_idx + 1..];
    let end_offset = body.iter().position(|line| line.contains(end))?;

    Some(Table::parse(
        body[..end_offset]
            .iter()
            .map(|line| line.trim())
            .filter(|line| !line.is_empty()),
    ))
}
