//! Resolved run options.

use std::path::PathBuf;

use chrono::{Local, NaiveDate};

use crate::cli::Cli;
use crate::error::{AguinaldoError, AppResult};
use crate::receipt::MoneyFormat;

/// Which employees a run produces receipts for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EmployeeSelection {
    /// Every employee, in input order.
    All,
    /// Only the employee with this id.
    Single(String),
}

/// Everything a run needs, with defaults applied.
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Path to the payroll JSON file.
    pub input: PathBuf,
    /// Employees to process.
    pub selection: EmployeeSelection,
    /// Directory receipts are saved to, if any.
    pub output_dir: Option<PathBuf>,
    /// How amounts are rendered.
    pub money: MoneyFormat,
    /// Date printed on the "Fecha de emisión" line.
    pub issued_on: NaiveDate,
}

impl RunConfig {
    /// Creates a configuration that processes every employee in `input`,
    /// prints receipts only, and uses the default currency format.
    pub fn new(input: impl Into<PathBuf>, issued_on: NaiveDate) -> Self {
        Self {
            input: input.into(),
            selection: EmployeeSelection::All,
            output_dir: None,
            money: MoneyFormat::default(),
            issued_on,
        }
    }
}

impl TryFrom<Cli> for RunConfig {
    type Error = AguinaldoError;

    fn try_from(cli: Cli) -> AppResult<Self> {
        let input = cli.input.ok_or(AguinaldoError::MissingInput)?;

        let selection = match cli.employee {
            Some(id) => EmployeeSelection::Single(id),
            None => EmployeeSelection::All,
        };

        Ok(Self {
            input,
            selection,
            output_dir: cli.output,
            money: MoneyFormat::for_locale(&cli.locale),
            issued_on: cli
                .issue_date
                .unwrap_or_else(|| Local::now().date_naive()),
        })
    }
}
