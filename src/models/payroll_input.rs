//! Payroll input model.

use serde::Deserialize;

use super::{Company, Employee, Period};

/// The decoded contents of a payroll file.
///
/// Employees keep their file order, which is also the processing order.
/// Ids are not checked for uniqueness.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PayrollInput {
    /// The employer.
    pub company: Company,
    /// The calculation period.
    pub period: Period,
    /// Employees in display order.
    pub employees: Vec<Employee>,
}

impl PayrollInput {
    /// Finds the first employee with the given id.
    ///
    /// # Example
    ///
    /// ```
    /// use aguinaldo::models::PayrollInput;
    ///
    /// let input: PayrollInput = serde_json::from_str(r#"{
    ///     "company": {"name": "Acme", "legalId": "3-101-000000", "address": "San José"},
    ///     "period": {"start": "01/12/2023", "end": "30/11/2024"},
    ///     "employees": [
    ///         {"id": "E001", "name": "Ana", "position": "Dev", "monthlyEarnings": [1]}
    ///     ]
    /// }"#).unwrap();
    ///
    /// assert_eq!(input.find_employee("E001").map(|e| e.name.as_str()), Some("Ana"));
    /// assert!(input.find_employee("E999").is_none());
    /// ```
    pub fn find_employee(&self, id: &str) -> Option<&Employee> {
        self.employees.iter().find(|employee| employee.id == id)
    }
}
