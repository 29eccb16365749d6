//! Compact text rendering of workout history.
//!
//! Each training day becomes one line listing every exercise with its sets:
//!
//! ```text
//! 2024-01-10: Bench Press (135x5, 135x3); Pull Up (12r, 10r)
//! ```

use std::collections::BTreeMap;

use chrono::NaiveDate;

use super::records::JoinedRecord;

/// Legend line explaining the set tokens.
pub const FORMAT_LEGEND: &str = "Format: Date: Exercise (Weight x Reps, ...)";

/// Width of the dashed rule under the header.
const RULE_WIDTH: usize = 20;

/// Render one set: `{weight}x{reps}` when weighted, `{reps}r` otherwise.
///
/// Weight and reps are truncated toward zero, never rounded.
pub fn format_set(weight: f64, reps: f64) -> String {
    let reps = reps.trunc() as i64;
    if weight > 0.0 {
        format!("{}x{}", weight.trunc() as i64, reps)
    } else {
        format!("{}r", reps)
    }
}

/// Sets grouped by day, then by exercise name.
pub type DayGroups<'a> = BTreeMap<NaiveDate, BTreeMap<&'a str, Vec<&'a JoinedRecord>>>;

/// Group records into days, then exercises, preserving set order per exercise.
///
/// Exercise groups are keyed explicitly so one exercise never splits into two
/// entries, even when its sets are not contiguous in the input.
pub fn group_by_day(records: &[JoinedRecord]) -> DayGroups<'_> {
    let mut days = DayGroups::new();
    for record in records {
        days.entry(record.date())
            .or_default()
            .entry(record.exercise.as_str())
            .or_default()
            .push(record);
    }

    for exercises in days.values_mut() {
        for sets in exercises.values_mut() {
            // Stable: equal set indexes keep their time order
            sets.sort_by_key(|r| r.set_index);
        }
    }
    days
}

/// Render the full report for the given window size.
pub fn compress(records: &[JoinedRecord], months: u32) -> String {
    render(&group_by_day(records), months)
}

/// Render already-grouped days as the report.
pub fn render(days: &DayGroups<'_>, months: u32) -> String {
    let mut lines = vec![
        format!("Workout History (Last {} Months)", months),
        FORMAT_LEGEND.to_string(),
        "-".repeat(RULE_WIDTH),
    ];

    for (date, exercises) in days {
        let entries: Vec<String> = exercises
            .iter()
            .map(|(name, sets)| {
                let tokens: Vec<String> =
                    sets.iter().map(|s| format_set(s.weight, s.reps)).collect();
                format!("{} ({})", name, tokens.join(", "))
            })
            .collect();

        lines.push(String::new());
        lines.push(format!("{}: {}", date.format("%Y-%m-%d"), entries.join("; ")));
    }

    lines.join("\n")
}
