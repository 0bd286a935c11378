//! Core data models for the aguinaldo receipt generator.
//!
//! This module contains the payroll input as decoded from JSON and the
//! derived calculation result.

mod aguinaldo_result;
mod company;
mod employee;
mod payroll_input;
mod period;

pub use aguinaldo_result::AguinaldoResult;
pub use company::Company;
pub use employee::Employee;
pub use payroll_input::PayrollInput;
pub use period::Period;
