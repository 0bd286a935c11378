//! Error types for the aguinaldo receipt generator.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for every failure a run can end with.

use thiserror::Error;

/// The main error type for the aguinaldo receipt generator.
///
/// Every fallible operation returns this error type. The top-level
/// dispatcher is the single place that prints it and picks the exit code.
///
/// # Example
///
/// ```
/// use aguinaldo::error::AguinaldoError;
///
/// let error = AguinaldoError::EmployeeNotFound {
///     id: "E404".to_string(),
/// };
/// assert_eq!(error.to_string(), "Employee not found: E404");
/// ```
#[derive(Debug, Error)]
pub enum AguinaldoError {
    /// No `--input` option was given.
    #[error("Missing required option --input <path>")]
    MissingInput,

    /// The input file does not exist or could not be read.
    #[error("Unable to read file '{path}': {message}")]
    UnableToReadFile {
        /// The path that could not be read.
        path: String,
        /// The underlying I/O diagnostic.
        message: String,
    },

    /// The input file is not valid payroll JSON.
    #[error("Unable to decode payroll input: {message}")]
    UnableToDecode {
        /// The decoder diagnostic, including line and column.
        message: String,
    },

    /// The employee requested with `--employee` is not in the input.
    #[error("Employee not found: {id}")]
    EmployeeNotFound {
        /// The id that was requested.
        id: String,
    },

    /// Any other failure, such as a filesystem error writing a receipt.
    #[error("Unexpected error: {message}")]
    Unexpected {
        /// A description of what went wrong.
        message: String,
    },
}

impl AguinaldoError {
    /// Returns true if usage text should follow the diagnostic.
    ///
    /// Recognized CLI errors are followed by usage text; `Unexpected`
    /// failures are not caused by how the program was invoked.
    pub fn shows_usage(&self) -> bool {
        !matches!(self, AguinaldoError::Unexpected { .. })
    }

    /// The process exit code for this error.
    pub fn exit_code(&self) -> u8 {
        1
    }
}

impl From<std::io::Error> for AguinaldoError {
    fn from(err: std::io::Error) -> Self {
        AguinaldoError::Unexpected {
            message: err.to_string(),
        }
    }
}

/// A type alias for Results that return AguinaldoError.
pub type AppResult<T> = Result<T, AguinaldoError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_input_display() {
        assert_eq!(
            AguinaldoError::MissingInput.to_string(),
            "Missing required option --input <path>"
        );
    }

    #[test]
    fn test_unable_to_read_file_displays_path_and_message() {
        let error = AguinaldoError::UnableToReadFile {
            path: "/missing/nomina.json".to_string(),
            message: "No such file or directory (os error 2)".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Unable to read file '/missing/nomina.json': No such file or directory (os error 2)"
        );
    }

    #[test]
    fn test_unable_to_decode_displays_message() {
        let error = AguinaldoError::UnableToDecode {
            message: "missing field `employees` at line 4 column 1".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Unable to decode payroll input: missing field `employees` at line 4 column 1"
        );
    }

    #[test]
    fn test_unexpected_displays_message() {
        let error = AguinaldoError::Unexpected {
            message: "permission denied".to_string(),
        };
        assert_eq!(error.to_string(), "Unexpected error: permission denied");
    }

    #[test]
    fn test_recognized_errors_show_usage() {
        assert!(AguinaldoError::MissingInput.shows_usage());
        assert!(
            AguinaldoError::EmployeeNotFound {
                id: "E001".to_string()
            }
            .shows_usage()
        );
        assert!(
            AguinaldoError::UnableToDecode {
                message: "eof".to_string()
            }
            .shows_usage()
        );
        assert!(
            !AguinaldoError::Unexpected {
                message: "disk full".to_string()
            }
            .shows_usage()
        );
    }

    #[test]
    fn test_every_error_exits_with_one() {
        assert_eq!(AguinaldoError::MissingInput.exit_code(), 1);
        assert_eq!(
            AguinaldoError::Unexpected {
                message: "x".to_string()
            }
            .exit_code(),
            1
        );
    }

    #[test]
    fn test_io_errors_become_unexpected() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only volume");
        let error: AguinaldoError = io.into();
        assert_eq!(error.to_string(), "Unexpected error: read-only volume");
        assert!(!error.shows_usage());
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn lookup() -> AppResult<()> {
            Err(AguinaldoError::EmployeeNotFound {
                id: "E404".to_string(),
            })
        }

        fn propagates_error() -> AppResult<()> {
            lookup()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<AguinaldoError>();
    }
}
