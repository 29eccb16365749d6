//! Workout history: typed records, joining, windowing and compression.
//!
//! - [`records`] - sessions, exercise logs and set logs built from export tables
//! - [`join`] - inner join into [`JoinedRecord`]s
//! - [`window`] - trailing month window, filtering and ordering
//! - [`compress`] - grouped text rendering

pub mod compress;
pub mod join;
pub mod records;
pub mod window;

pub use compress::{compress, format_set, group_by_day, render, DayGroups};
pub use join::join;
pub use records::{ExerciseLog, JoinedRecord, SetLog, Session};
pub use window::HistoryWindow;
