//! Convert subcommand handler

use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::Utc;
use humansize::{format_size, DECIMAL};
use tracing::info;

use jefit_digest::cli::ConvertArgs;
use jefit_digest::{digest_at, Config, HistoryWindow};

/// Digest an export and write it to a file or stdout.
pub fn handle(args: ConvertArgs) -> Result<()> {
    let config = Config::load()?;
    let months = args.months.unwrap_or(config.history.months_to_keep);
    let window = HistoryWindow::new(months).context("Invalid months_to_keep in config")?;

    let bytes = fs::read(&args.input)
        .with_context(|| format!("Failed to read export: {}", args.input.display()))?;
    let digest = digest_at(&bytes, window, Utc::now())?;

    let stats = digest.stats;
    info!(
        sessions = stats.sessions,
        exercise_logs = stats.exercise_logs,
        set_logs = stats.set_logs,
        undated_sessions = stats.undated_sessions,
        joined = stats.joined,
        retained = stats.retained,
        days = stats.days,
        "digest complete"
    );

    if args.print {
        let mut stdout = io::stdout().lock();
        writeln!(stdout, "{}", digest.text)?;
        return Ok(());
    }

    let output = args
        .output
        .unwrap_or_else(|| PathBuf::from(&config.output.filename));
    fs::write(&output, &digest.text)
        .with_context(|| format!("Failed to write digest: {}", output.display()))?;

    println!(
        "Conversion complete! Wrote {} ({} days, {} sets) to {}",
        format_size(digest.text.len(), DECIMAL),
        stats.days,
        stats.retained,
        output.display()
    );
    Ok(())
}
