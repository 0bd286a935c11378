//! Aguinaldo calculation.
//!
//! The statutory bonus is the total earned over the period divided by
//! twelve, whatever the number of months actually supplied.

use rust_decimal::Decimal;

use crate::models::{AguinaldoResult, Employee};

/// Returns the fixed divisor of the aguinaldo formula.
pub fn aguinaldo_divisor() -> Decimal {
    Decimal::from(12)
}

/// Calculates the total earnings and bonus for an employee.
///
/// No rounding is applied and no validation is performed: negative or zero
/// earnings are summed as given, and an empty list yields zero.
///
/// # Examples
///
/// ```
/// use aguinaldo::calculation::calculate_aguinaldo;
/// use aguinaldo::models::Employee;
/// use rust_decimal::Decimal;
///
/// let employee = Employee {
///     id: "E001".to_string(),
///     name: "Ana".to_string(),
///     position: "Dev".to_string(),
///     monthly_earnings: vec![Decimal::from(1_200_000), Decimal::from(1_200_000)],
///     notes: None,
/// };
///
/// let result = calculate_aguinaldo(&employee);
/// assert_eq!(result.total, Decimal::from(2_400_000));
/// assert_eq!(result.bonus, Decimal::from(200_000));
/// ```
pub fn calculate_aguinaldo(employee: &Employee) -> AguinaldoResult {
    let total: Decimal = employee.monthly_earnings.iter().sum();
    let bonus = total / aguinaldo_divisor();

    AguinaldoResult { total, bonus }
}
