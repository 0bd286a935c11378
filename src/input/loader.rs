//! Payroll file loading functionality.
//!
//! This module provides the [`InputLoader`] type for reading and decoding
//! payroll JSON files.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{AguinaldoError, AppResult};
use crate::models::PayrollInput;

/// Reads and decodes payroll input.
///
/// The expected document shape is:
/// ```text
/// { "company":   { "name", "legalId", "address", "phone"?, "email"? },
///   "period":    { "start", "end" },
///   "employees": [ { "id", "name", "position", "monthlyEarnings": [number, ...], "notes"? } ] }
/// ```
pub struct InputLoader;

impl InputLoader {
    /// Loads a payroll file from disk.
    ///
    /// # Returns
    ///
    /// Returns the decoded [`PayrollInput`] on success, or an error if:
    /// - The file is missing or unreadable (`UnableToReadFile`)
    /// - The file is not valid payroll JSON (`UnableToDecode`)
    pub fn load<P: AsRef<Path>>(path: P) -> AppResult<PayrollInput> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let bytes = fs::read(path).map_err(|e| AguinaldoError::UnableToReadFile {
            path: path_str.clone(),
            message: e.to_string(),
        })?;
        debug!(path = %path_str, bytes = bytes.len(), "Read payroll file");

        Self::decode(&bytes)
    }

    /// Decodes payroll JSON from raw bytes.
    ///
    /// # Example
    ///
    /// ```
    /// use aguinaldo::error::AguinaldoError;
    /// use aguinaldo::input::InputLoader;
    ///
    /// let err = InputLoader::decode(br#"{"company": {}}"#).unwrap_err();
    /// assert!(matches!(err, AguinaldoError::UnableToDecode { .. }));
    /// ```
    pub fn decode(bytes: &[u8]) -> AppResult<PayrollInput> {
        let input: PayrollInput =
            serde_json::from_slice(bytes).map_err(|e| AguinaldoError::UnableToDecode {
                message: e.to_string(),
            })?;

        debug!(
            company = %input.company.name,
            employees = input.employees.len(),
            "Decoded payroll input"
        );
        Ok(input)
    }
}
