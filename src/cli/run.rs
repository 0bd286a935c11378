//! Run orchestration.
//!
//! A run loads the payroll file once, then for each selected employee
//! renders the receipt, prints it, and saves it when an output directory
//! is configured. Employees are processed sequentially in input order.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::config::{EmployeeSelection, RunConfig};
use crate::error::{AguinaldoError, AppResult};
use crate::input::InputLoader;
use crate::models::{Employee, PayrollInput};
use crate::receipt::ReceiptFormatter;

use super::args::usage;

/// Counts of what a run produced.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Receipts printed to standard output.
    pub printed: usize,
    /// Receipt files saved to the output directory.
    pub written: usize,
    /// Receipt files that could not be saved.
    pub failed_writes: usize,
}

/// Returns the file name a receipt is saved under.
///
/// Path separators in the id are replaced with `_` so the file always lands
/// directly inside the output directory.
///
/// # Example
///
/// ```
/// use aguinaldo::cli::receipt_file_name;
///
/// assert_eq!(receipt_file_name("E001"), "recibo_aguinaldo_E001.txt");
/// assert_eq!(receipt_file_name("../x"), "recibo_aguinaldo_.._x.txt");
/// ```
pub fn receipt_file_name(employee_id: &str) -> String {
    let safe_id: String = employee_id
        .chars()
        .map(|ch| if ch == '/' || ch == '\\' { '_' } else { ch })
        .collect();
    format!("recibo_aguinaldo_{}.txt", safe_id)
}

/// Saves a receipt into `dir`, creating the directory if needed.
///
/// An existing receipt for the same employee is overwritten.
pub fn save_receipt(dir: &Path, employee_id: &str, text: &str) -> AppResult<PathBuf> {
    fs::create_dir_all(dir).map_err(|e| AguinaldoError::Unexpected {
        message: format!("cannot create output directory '{}': {}", dir.display(), e),
    })?;

    let path = dir.join(receipt_file_name(employee_id));
    fs::write(&path, text).map_err(|e| AguinaldoError::Unexpected {
        message: format!("cannot write '{}': {}", path.display(), e),
    })?;

    Ok(path)
}

/// Executes a run, writing receipts to `stdout` and per-employee save
/// failures to `stderr`.
///
/// In single-employee mode an unknown id fails with `EmployeeNotFound` and a
/// save failure ends the run. When processing every employee, a save failure
/// is reported and the remaining employees are still processed.
pub fn run_cli<O: Write, E: Write>(
    config: &RunConfig,
    stdout: &mut O,
    stderr: &mut E,
) -> AppResult<RunSummary> {
    let input = InputLoader::load(&config.input)?;
    let formatter = ReceiptFormatter::new(config.money);
    let mut summary = RunSummary::default();

    info!(
        input = %config.input.display(),
        employees = input.employees.len(),
        "Loaded payroll input"
    );

    match &config.selection {
        EmployeeSelection::Single(id) => {
            let employee = input
                .find_employee(id)
                .ok_or_else(|| AguinaldoError::EmployeeNotFound { id: id.clone() })?;

            let text = print_receipt(&formatter, employee, &input, config, stdout)?;
            summary.printed += 1;

            if let Some(dir) = &config.output_dir {
                let path = save_receipt(dir, &employee.id, &text)?;
                confirm_saved(&path, stdout)?;
                summary.written += 1;
            }
            writeln!(stdout)?;
        }
        EmployeeSelection::All => {
            for employee in &input.employees {
                let text = print_receipt(&formatter, employee, &input, config, stdout)?;
                summary.printed += 1;

                if let Some(dir) = &config.output_dir {
                    match save_receipt(dir, &employee.id, &text) {
                        Ok(path) => {
                            confirm_saved(&path, stdout)?;
                            summary.written += 1;
                        }
                        Err(err) => {
                            warn!(employee_id = %employee.id, error = %err, "Receipt not saved");
                            writeln!(
                                stderr,
                                "No se pudo guardar el recibo de {}: {}",
                                employee.id, err
                            )?;
                            summary.failed_writes += 1;
                        }
                    }
                }
                writeln!(stdout)?;
            }
        }
    }

    info!(
        printed = summary.printed,
        written = summary.written,
        failed_writes = summary.failed_writes,
        "Run finished"
    );
    Ok(summary)
}

/// Prints the diagnostic for a failed run, followed by usage text for
/// recognized errors, and returns the exit code.
pub fn report_error<E: Write>(err: &AguinaldoError, stderr: &mut E) -> u8 {
    // Last output before exit; a failing stderr has nowhere left to report to.
    let _ = writeln!(stderr, "Error: {}", err);
    if err.shows_usage() {
        let _ = writeln!(stderr);
        let _ = write!(stderr, "{}", usage());
    }
    err.exit_code()
}

fn print_receipt<O: Write>(
    formatter: &ReceiptFormatter,
    employee: &Employee,
    input: &PayrollInput,
    config: &RunConfig,
    stdout: &mut O,
) -> AppResult<String> {
    let text = formatter.format(employee, &input.company, &input.period, config.issued_on);
    stdout.write_all(text.as_bytes())?;
    Ok(text)
}

fn confirm_saved<O: Write>(path: &Path, stdout: &mut O) -> AppResult<()> {
    info!(path = %path.display(), "Receipt saved");
    writeln!(stdout, "Recibo guardado en: {}", path.display())?;
    Ok(())
}
