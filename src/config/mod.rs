//! Run configuration for the aguinaldo receipt generator.
//!
//! Command line options are resolved into a [`RunConfig`] before any file
//! is read. Resolution is where a missing `--input` is detected and where
//! the defaults for the issue date and currency format are applied.

mod types;

pub use types::{EmployeeSelection, RunConfig};
