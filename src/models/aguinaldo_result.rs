//! Calculated aguinaldo for one employee.

use rust_decimal::Decimal;

/// Totals derived from an employee's monthly earnings.
///
/// Amounts are unrounded; rounding happens only when a receipt is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AguinaldoResult {
    /// Sum of all monthly earnings.
    pub total: Decimal,
    /// The bonus owed: `total / 12`.
    pub bonus: Decimal,
}
