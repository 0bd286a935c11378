//! Colón amount formatting.
//!
//! Amounts are rendered with two decimal places using the grouping and
//! decimal conventions of a known locale. Locales that are not in the
//! table fall back to a plain `₡1234.56` rendering, so formatting an
//! amount never fails.

use rust_decimal::{Decimal, RoundingStrategy};
use tracing::warn;

/// The Costa Rican colón sign.
pub const COLON_SYMBOL: &str = "₡";

/// The locale used when none is configured.
pub const DEFAULT_LOCALE: &str = "es-CR";

/// Separators used when rendering an amount for a locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurrencyLocale {
    /// BCP 47 tag, e.g. "es-CR".
    pub tag: &'static str,
    /// Inserted between groups of three integer digits.
    pub group_separator: char,
    /// Separates the integer part from the cents.
    pub decimal_separator: char,
}

const KNOWN_LOCALES: [CurrencyLocale; 2] = [
    CurrencyLocale {
        tag: "es-CR",
        group_separator: ' ',
        decimal_separator: ',',
    },
    CurrencyLocale {
        tag: "en-US",
        group_separator: ',',
        decimal_separator: '.',
    },
];

/// How monetary amounts are rendered on a receipt.
///
/// # Example
///
/// ```
/// use aguinaldo::receipt::MoneyFormat;
/// use rust_decimal::Decimal;
///
/// let money = MoneyFormat::for_locale("es-CR");
/// assert_eq!(money.format(Decimal::from(1_200_000)), "₡1 200 000,00");
///
/// let plain = MoneyFormat::for_locale("xx-XX");
/// assert_eq!(plain.format(Decimal::from(1_200_000)), "₡1200000.00");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoneyFormat {
    /// Grouped digits and locale separators.
    Localized(CurrencyLocale),
    /// Fixed-point with a `.` decimal separator and no grouping.
    Plain,
}

impl MoneyFormat {
    /// Selects the format for a locale tag, falling back to [`MoneyFormat::Plain`]
    /// when the locale is unknown.
    pub fn for_locale(tag: &str) -> Self {
        match KNOWN_LOCALES
            .iter()
            .find(|locale| locale.tag.eq_ignore_ascii_case(tag))
        {
            Some(locale) => MoneyFormat::Localized(*locale),
            None => {
                warn!(locale = %tag, "No currency conventions for locale, using plain format");
                MoneyFormat::Plain
            }
        }
    }

    /// Formats an amount in colones with exactly two decimal places.
    ///
    /// Midpoints are rounded away from zero.
    pub fn format(&self, amount: Decimal) -> String {
        let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);

        match self {
            MoneyFormat::Plain => format!("{}{:.2}", COLON_SYMBOL, rounded),
            MoneyFormat::Localized(locale) => {
                let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
                    "-"
                } else {
                    ""
                };
                let fixed = format!("{:.2}", rounded.abs());
                let (integer, cents) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

                format!(
                    "{}{}{}{}{}",
                    sign,
                    COLON_SYMBOL,
                    group_thousands(integer, locale.group_separator),
                    locale.decimal_separator,
                    cents
                )
            }
        }
    }
}

impl Default for MoneyFormat {
    fn default() -> Self {
        MoneyFormat::for_locale(DEFAULT_LOCALE)
    }
}

/// Inserts `separator` between groups of three digits, counting from the right.
fn group_thousands(digits: &str, separator: char) -> String {
    let len = digits.chars().count();
    let mut grouped = String::with_capacity(len + len / 3);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            grouped.push(separator);
        }
        grouped.push(ch);
    }

    grouped
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_es_cr_groups_with_spaces_and_comma_decimal() {
        let money = MoneyFormat::for_locale("es-CR");
        assert_eq!(money.format(dec("2400000")), "₡2 400 000,00");
        assert_eq!(money.format(dec("200000")), "₡200 000,00");
        assert_eq!(money.format(dec("999.5")), "₡999,50");
    }

    #[test]
    fn test_en_us_groups_with_commas() {
        let money = MoneyFormat::for_locale("en-US");
        assert_eq!(money.format(dec("1234567.891")), "₡1,234,567.89");
    }

    #[test]
    fn test_locale_tag_is_case_insensitive() {
        assert_eq!(
            MoneyFormat::for_locale("ES-cr"),
            MoneyFormat::for_locale("es-CR")
        );
    }

    #[test]
    fn test_unknown_locale_falls_back_to_plain() {
        let money = MoneyFormat::for_locale("fr-FR");
        assert_eq!(money, MoneyFormat::Plain);
        assert_eq!(money.format(dec("2400000")), "₡2400000.00");
    }

    #[test]
    fn test_rounds_half_away_from_zero() {
        let money = MoneyFormat::default();
        assert_eq!(money.format(dec("0.005")), "₡0,01");
        assert_eq!(money.format(dec("0.004")), "₡0,00");
        assert_eq!(money.format(dec("100") / dec("12")), "₡8,33");
    }

    #[test]
    fn test_negative_amounts_put_sign_before_symbol() {
        let money = MoneyFormat::default();
        assert_eq!(money.format(dec("-1500")), "-₡1 500,00");
        assert_eq!(money.format(dec("-0.001")), "₡0,00");
    }

    #[test]
    fn test_zero_has_two_decimals() {
        assert_eq!(MoneyFormat::default().format(Decimal::ZERO), "₡0,00");
        assert_eq!(MoneyFormat::Plain.format(Decimal::ZERO), "₡0.00");
    }

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands("1", ' '), "1");
        assert_eq!(group_thousands("123", ' '), "123");
        assert_eq!(group_thousands("1234", ' '), "1 234");
        assert_eq!(group_thousands("123456789", ','), "123,456,789");
    }
}
