//! Command-line interface definition.
//!
//! Lives in the library so `xtask` can render man pages from it.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

/// Compress a Jefit workout export into a compact, AI-ready training history.
#[derive(Debug, Parser)]
#[command(name = "jefit-digest", version, about, long_about = None)]
pub struct Cli {
    /// Increase log output (-v info, -vv debug). RUST_LOG takes precedence.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Convert a Jefit export into a workout history digest
    Convert(ConvertArgs),

    /// Manage configuration
    #[command(subcommand)]
    Config(ConfigCommands),

    /// Generate shell completions
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Debug, Args)]
pub struct ConvertArgs {
    /// Jefit export file (the full CSV export)
    pub input: PathBuf,

    /// Months of history to keep (1-36, default from config)
    #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..=36))]
    pub months: Option<u32>,

    /// Write the digest to this file (default from config)
    #[arg(short, long, conflicts_with = "print")]
    pub output: Option<PathBuf>,

    /// Print the digest to stdout instead of writing a file
    #[arg(long)]
    pub print: bool,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Show current configuration
    Show,
    /// Open configuration in $EDITOR
    Edit,
    /// Add missing fields to the configuration file
    Migrate {
        /// Apply changes without asking
        #[arg(short, long)]
        yes: bool,
    },
}
