//! Receipt text generation.
//!
//! Renders the fixed-layout, monospaced receipt for one employee. The
//! issue date is passed in by the caller so the output is deterministic.

use chrono::NaiveDate;
use tracing::debug;

use crate::calculation::calculate_aguinaldo;
use crate::models::{Company, Employee, Period};

use super::currency::MoneyFormat;

/// Width of the receipt dividers, in columns.
pub const RECEIPT_WIDTH: usize = 65;

/// Title printed under the company header.
pub const RECEIPT_TITLE: &str = "RECIBO DE PAGO DE AGUINALDO";

/// Placeholder line for the HR sign-off.
pub const SIGNATURE_LINE: &str = "Firma Recursos Humanos: ______________________________";

/// Renders aguinaldo receipts.
///
/// # Example
///
/// ```
/// use aguinaldo::models::{Company, Employee, Period};
/// use aguinaldo::receipt::ReceiptFormatter;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let company = Company {
///     name: "Acme".to_string(),
///     legal_id: "3-101-000000".to_string(),
///     address: "San José".to_string(),
///     phone: None,
///     email: None,
/// };
/// let period = Period { start: "01/12/2023".to_string(), end: "30/11/2024".to_string() };
/// let employee = Employee {
///     id: "E001".to_string(),
///     name: "Ana".to_string(),
///     position: "Dev".to_string(),
///     monthly_earnings: vec![Decimal::from(1_200_000), Decimal::from(1_200_000)],
///     notes: None,
/// };
///
/// let issued_on = NaiveDate::from_ymd_opt(2024, 12, 15).unwrap();
/// let text = ReceiptFormatter::default().format(&employee, &company, &period, issued_on);
/// assert!(text.contains("Aguinaldo a pagar: ₡200 000,00"));
/// assert!(text.contains("Fecha de emisión: 15/12/2024"));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct ReceiptFormatter {
    money: MoneyFormat,
}

impl ReceiptFormatter {
    /// Creates a formatter that renders amounts with the given format.
    pub fn new(money: MoneyFormat) -> Self {
        Self { money }
    }

    /// Produces the receipt text for one employee.
    ///
    /// Phone, email and notes lines appear only when the value is present.
    /// Every line, including the last, ends with a newline.
    pub fn format(
        &self,
        employee: &Employee,
        company: &Company,
        period: &Period,
        issued_on: NaiveDate,
    ) -> String {
        let result = calculate_aguinaldo(employee);
        debug!(
            employee_id = %employee.id,
            months = employee.monthly_earnings.len(),
            total = %result.total,
            bonus = %result.bonus,
            "Calculated aguinaldo"
        );

        let heavy = "=".repeat(RECEIPT_WIDTH);
        let light = "-".repeat(RECEIPT_WIDTH);

        let mut lines: Vec<String> = Vec::new();

        lines.push(heavy.clone());
        lines.push(format!("{}  |  Cédula jurídica: {}", company.name, company.legal_id));
        lines.push(company.address.clone());
        if let Some(phone) = &company.phone {
            lines.push(format!("Teléfono: {}", phone));
        }
        if let Some(email) = &company.email {
            lines.push(format!("Correo: {}", email));
        }
        lines.push(format!("Periodo: {} al {}", period.start, period.end));
        lines.push(format!("Fecha de emisión: {}", issued_on.format("%d/%m/%Y")));

        lines.push(light.clone());
        lines.push(RECEIPT_TITLE.to_string());
        lines.push(format!("Colaborador: {} (ID: {})", employee.name, employee.id));
        lines.push(format!("Puesto: {}", employee.position));

        lines.push(light.clone());
        lines.push("Ingresos considerados:".to_string());
        for (index, amount) in employee.monthly_earnings.iter().enumerate() {
            lines.push(format!("  Mes {:02}: {}", index + 1, self.money.format(*amount)));
        }

        lines.push(light.clone());
        lines.push(format!("Total de ingresos: {}", self.money.format(result.total)));
        lines.push(format!("Aguinaldo a pagar: {}", self.money.format(result.bonus)));

        if let Some(notes) = &employee.notes {
            lines.push(light.clone());
            lines.push(format!("Notas: {}", notes));
        }

        lines.push(light);
        lines.push(SIGNATURE_LINE.to_string());
        lines.push(heavy);

        let mut text = lines.join("\n");
        text.push('\n');
        text
    }
}
