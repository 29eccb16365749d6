//! Config subcommands handler

use anyhow::Result;
use std::collections::HashSet;
use std::fs;
use std::io::{self, BufRead, Write};

use jefit_digest::config::migrate_config;
use jefit_digest::Config;

/// Show current configuration as TOML.
#[cfg(not(tarpaulin_include))]
pub fn handle_show() -> Result<()> {
    let config = Config::load()?;
    print!("{}", toml::to_string_pretty(&config)?);
    Ok(())
}

/// Open configuration file in the default editor.
///
/// Uses $EDITOR environment variable (defaults to 'vi').
#[cfg(not(tarpaulin_include))]
pub fn handle_edit() -> Result<()> {
    let config_path = Config::config_path()?;

    if !config_path.exists() {
        Config::default().save()?;
    }

    let editor = std::env::var("EDITOR").unwrap_or_else(|_| "vi".to_string());
    println!("Opening {} with {}", config_path.display(), editor);

    std::process::Command::new(&editor)
        .arg(&config_path)
        .status()
        .map_err(|e| anyhow::anyhow!("Failed to open editor: {}", e))?;

    Ok(())
}

/// Add fields missing from the config file.
///
/// Shows the lines that would be added and asks before writing, unless
/// `yes` is set.
#[cfg(not(tarpaulin_include))]
pub fn handle_migrate(yes: bool) -> Result<()> {
    let config_path = Config::config_path()?;
    let file_exists = config_path.exists();

    let content = if file_exists {
        fs::read_to_string(&config_path)?
    } else {
        String::new()
    };

    let result = migrate_config(&content)?;

    if !result.has_changes() {
        println!("Config is already up to date.");
        return Ok(());
    }

    if file_exists {
        println!("{}", result.summary());
    } else {
        println!("Config file does not exist. Will create with default settings.");
    }
    println!();
    print_added_lines(&result.content, &result.added_fields);
    println!();

    let prompt = format!("Write {}?", config_path.display());
    if !yes && !prompt_confirmation(&prompt)? {
        println!("No changes made.");
        return Ok(());
    }

    if let Some(parent) = config_path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(&config_path, &result.content)?;
    println!("Config updated successfully.");

    Ok(())
}

/// Print the section headers and assignments of added fields with a `+` prefix.
fn print_added_lines(content: &str, added_fields: &[String]) {
    let added: HashSet<&str> = added_fields.iter().map(String::as_str).collect();
    let mut section = String::new();
    let mut pending_header: Option<&str> = None;

    for line in content.lines() {
        let trimmed = line.trim();

        if trimmed.starts_with('[') && trimmed.ends_with(']') {
            section = trimmed[1..trimmed.len() - 1].to_string();
            pending_header = Some(line);
            continue;
        }

        let Some(eq_pos) = trimmed.find('=') else {
            continue;
        };
        let key = trimmed[..eq_pos].trim();
        if added.contains(format!("{}.{}", section, key).as_str()) {
            if let Some(header) = pending_header.take() {
                println!("  {}", header);
            }
            println!("+ {}", line);
        }
    }
}

/// Prompt user for yes/no confirmation.
///
/// Returns false without asking when stdin is not a TTY.
fn prompt_confirmation(message: &str) -> Result<bool> {
    if !atty::is(atty::Stream::Stdin) {
        println!("Non-interactive mode: use --yes to apply changes automatically");
        return Ok(false);
    }

    print!("{} [y/N] ", message);
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().lock().read_line(&mut input)?;

    let response = input.trim().to_lowercase();
    Ok(response == "y" || response == "yes")
}
