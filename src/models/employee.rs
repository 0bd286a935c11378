//! Employee model.
//!
//! This module defines the Employee struct and the decoding rules for
//! monthly earnings.

use rust_decimal::Decimal;
use rust_decimal::prelude::FromPrimitive;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer};

/// Represents an employee whose aguinaldo is being calculated.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    /// Identifier used for `--employee` lookups and receipt file names.
    pub id: String,
    /// The employee's full name.
    pub name: String,
    /// The employee's job title.
    pub position: String,
    /// Earnings per month in chronological order. The position in this
    /// list becomes the "Mes NN" label on the receipt.
    #[serde(deserialize_with = "deserialize_earnings")]
    pub monthly_earnings: Vec<Decimal>,
    /// Free-text notes printed at the bottom of the receipt.
    #[serde(default)]
    pub notes: Option<String>,
}

/// Decodes a list of JSON numbers into decimal amounts.
///
/// Strings and nulls are rejected; only real numbers are accepted. The
/// running total must stay representable so the aguinaldo can be summed.
fn deserialize_earnings<'de, D>(deserializer: D) -> Result<Vec<Decimal>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Vec::<f64>::deserialize(deserializer)?;
    let mut earnings = Vec::with_capacity(raw.len());
    let mut total = Decimal::ZERO;

    for amount in raw {
        let amount = Decimal::from_f64(amount).ok_or_else(|| {
            D::Error::custom(format!("earning amount {} is out of range", amount))
        })?;
        total = total.checked_add(amount).ok_or_else(|| {
            D::Error::custom("total of monthly earnings is out of range")
        })?;
        earnings.push(amount);
    }

    Ok(earnings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_deserialize_employee() {
        let json = r#"{
            "id": "E001",
            "name": "Ana",
            "position": "Dev",
            "monthlyEarnings": [1200000, 1200000]
        }"#;

        let employee: Employee = serde_json::from_str(json).unwrap();
        assert_eq!(employee.id, "E001");
        assert_eq!(employee.name, "Ana");
        assert_eq!(employee.position, "Dev");
        assert_eq!(employee.monthly_earnings, vec![dec("1200000"), dec("1200000")]);
        assert!(employee.notes.is_none());
    }

    #[test]
    fn test_fractional_earnings_are_kept() {
        let json = r#"{
            "id": "E002",
            "name": "Luis",
            "position": "QA",
            "monthlyEarnings": [350000.75, 0.5],
            "notes": "Ingreso en octubre"
        }"#;

        let employee: Employee = serde_json::from_str(json).unwrap();
        assert_eq!(employee.monthly_earnings, vec![dec("350000.75"), dec("0.5")]);
        assert_eq!(employee.notes.as_deref(), Some("Ingreso en octubre"));
    }

    #[test]
    fn test_string_earnings_are_rejected() {
        let json = r#"{
            "id": "E003",
            "name": "Eva",
            "position": "PM",
            "monthlyEarnings": ["1200000"]
        }"#;

        assert!(serde_json::from_str::<Employee>(json).is_err());
    }

    #[test]
    fn test_missing_monthly_earnings_is_rejected() {
        let json = r#"{"id": "E004", "name": "Eva", "position": "PM"}"#;
        let err = serde_json::from_str::<Employee>(json).unwrap_err();
        assert!(err.to_string().contains("monthlyEarnings"));
    }

    #[test]
    fn test_unrepresentable_total_is_rejected() {
        let json = r#"{
            "id": "E006",
            "name": "Eva",
            "position": "PM",
            "monthlyEarnings": [5e28, 5e28]
        }"#;

        let err = serde_json::from_str::<Employee>(json).unwrap_err();
        assert!(err.to_string().contains("total of monthly earnings is out of range"));
    }

    #[test]
    fn test_negative_earnings_are_accepted() {
        let json = r#"{
            "id": "E005",
            "name": "Ajuste",
            "position": "N/A",
            "monthlyEarnings": [-1500]
        }"#;

        let employee: Employee = serde_json::from_str(json).unwrap();
        assert_eq!(employee.monthly_earnings, vec![dec("-1500")]);
    }
}
