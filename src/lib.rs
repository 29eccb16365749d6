//! jefit-digest - compress a Jefit workout export into a compact history.
//!
//! The export is a single file holding several CSV tables. The digest keeps
//! the sets performed in the last few months and renders one line per day:
//!
//! ```text
//! Workout History (Last 12 Months)
//! Format: Date: Exercise (Weight x Reps, ...)
//! --------------------
//!
//! 2024-01-10: Bench Press (135x5, 135x3)
//! ```

pub mod cli;
pub mod config;
pub mod digest;
pub mod error;
pub mod export;
pub mod history;

pub use config::Config;
pub use digest::{digest_at, transform, transform_at, Digest, DigestStats};
pub use error::DigestError;
pub use export::Section;
pub use history::HistoryWindow;
