//! Main CLI application structure

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};

use super::demo;
use super::output::{Output, OutputFormat};
use crate::domain::{Date, Limits};

#[derive(Parser)]
#[command(name = "triage")]
#[command(author, version, about = "In-memory priority task tracker")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(long, short = 'f', global = true, default_value = "text")]
    pub format: OutputFormat,

    /// Enable verbose output for debugging
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    /// TOML file overriding the store limits (field sizes, min year, capacity)
    #[arg(long, global = true, value_name = "PATH")]
    pub limits: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the sample walkthrough against a fresh in-memory store
    Demo,

    /// Check a due date against the calendar policy
    CheckDate {
        /// Day of month
        day: u8,

        /// Month (1-12)
        month: u8,

        /// Four-digit year
        year: i32,
    },
}

/// Parses arguments and executes the requested command
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let output = Output::new(cli.format, cli.verbose);

    let limits = match &cli.limits {
        Some(path) => load_limits(path)?,
        None => Limits::default(),
    };

    match cli.command {
        Commands::Demo => demo::run(&output, limits),
        Commands::CheckDate { day, month, year } => {
            check_date(&output, &limits, Date::new(day, month, year))
        }
    }
}

fn check_date(output: &Output, limits: &Limits, date: Date) -> Result<()> {
    if date.is_valid(limits.min_year) {
        output.success(&format!("{} is a valid due date", date));
        Ok(())
    } else {
        bail!("{} is not a valid due date", date);
    }
}

fn load_limits(path: &Path) -> Result<Limits> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read limits file: {}", path.display()))?;
    toml::from_str(&contents)
        .with_context(|| format!("Failed to parse limits file: {}", path.display()))
}
