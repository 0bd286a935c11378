//! Command line interface for the aguinaldo receipt generator.
//!
//! This module defines the accepted options and drives a run: load the
//! payroll file, render a receipt per selected employee, print it, and
//! optionally save it to the output directory.

mod args;
mod run;

pub use args::{Cli, parse_issue_date, usage};
pub use run::{RunSummary, receipt_file_name, report_error, run_cli, save_receipt};
