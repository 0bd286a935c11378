//! Command line options.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{CommandFactory, Parser};

use crate::receipt::DEFAULT_LOCALE;

/// Calculates the statutory year-end bonus (aguinaldo) for each employee
/// in a payroll file and prints a receipt per employee.
#[derive(Parser, Debug)]
#[command(name = "aguinaldo", version, about, long_about = None)]
pub struct Cli {
    /// Path to the payroll JSON file (required).
    #[arg(long, value_name = "PATH")]
    pub input: Option<PathBuf>,

    /// Only produce the receipt for this employee id.
    #[arg(long, value_name = "ID")]
    pub employee: Option<String>,

    /// Directory to save receipt files to; created if missing.
    #[arg(long, value_name = "DIR")]
    pub output: Option<PathBuf>,

    /// Locale for currency formatting.
    #[arg(long, value_name = "TAG", default_value = DEFAULT_LOCALE)]
    pub locale: String,

    /// Date printed as the issue date instead of today.
    #[arg(long, value_name = "DD/MM/YYYY", value_parser = parse_issue_date)]
    pub issue_date: Option<NaiveDate>,

    /// Enable verbose logging. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Parses a `dd/mm/yyyy` date.
pub fn parse_issue_date(value: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(value, "%d/%m/%Y")
        .map_err(|e| format!("expected a date as dd/mm/yyyy, got '{}': {}", value, e))
}

/// Returns the usage text printed with recognized errors.
pub fn usage() -> String {
    Cli::command().render_help().to_string()
}
