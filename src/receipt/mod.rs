//! Receipt rendering for the aguinaldo receipt generator.
//!
//! This module turns an employee, the company and the period into the
//! print-ready text receipt, including colón amount formatting.

mod currency;
mod formatter;

pub use currency::{COLON_SYMBOL, CurrencyLocale, DEFAULT_LOCALE, MoneyFormat};
pub use formatter::{RECEIPT_TITLE, RECEIPT_WIDTH, ReceiptFormatter, SIGNATURE_LINE};
