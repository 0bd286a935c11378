//! Company model.

use serde::Deserialize;

/// The employer issuing the receipts.
///
/// Loaded once per run and shared by every receipt.
///
/// # Example
///
/// ```
/// use aguinaldo::models::Company;
///
/// let company: Company = serde_json::from_str(
///     r#"{"name": "Acme", "legalId": "3-101-000000", "address": "San José"}"#,
/// ).unwrap();
/// assert_eq!(company.legal_id, "3-101-000000");
/// assert!(company.phone.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Company {
    /// The company's registered name.
    pub name: String,
    /// The legal identifier (cédula jurídica).
    pub legal_id: String,
    /// The company's address.
    pub address: String,
    /// Contact phone, omitted from receipts when absent.
    #[serde(default)]
    pub phone: Option<String>,
    /// Contact email, omitted from receipts when absent.
    #[serde(default)]
    pub email: Option<String>,
}
