//! Development tasks for jefit-digest.
//!
//! Run with `cargo xtask <task>`.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand};
use clap_mangen::Man;

use jefit_digest::cli::Cli;

#[derive(Parser)]
#[command(name = "xtask", about = "Development tasks")]
struct Xtask {
    #[command(subcommand)]
    task: Task,
}

#[derive(Subcommand)]
enum Task {
    /// Generate man pages for the CLI and its subcommands
    Man {
        /// Output directory
        #[arg(long, default_value = "target/man")]
        out: PathBuf,
    },
}

fn main() -> Result<()> {
    match Xtask::parse().task {
        Task::Man { out } => generate_man_pages(&out),
    }
}

fn generate_man_pages(out: &Path) -> Result<()> {
    fs::create_dir_all(out).with_context(|| format!("Failed to create {}", out.display()))?;

    let cmd = Cli::command();
    let name = cmd.get_name().to_string();
    write_man_page(cmd.clone(), &name, out)?;

    for sub in cmd.get_subcommands() {
        let title = format!("{}-{}", name, sub.get_name());
        write_man_page(sub.clone(), &title, out)?;
    }

    println!("Man pages written to {}", out.display());
    Ok(())
}

fn write_man_page(cmd: clap::Command, title: &str, out: &Path) -> Result<()> {
    let path = out.join(format!("{}.1", title));
    let mut buffer = Vec::new();
    Man::new(cmd).title(title).render(&mut buffer)?;
    fs::write(&path, buffer).with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}
