//! Calculation period model.

use serde::Deserialize;

/// The window over which earnings were aggregated.
///
/// Both ends are display strings and are printed exactly as given;
/// they are never parsed as dates.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Period {
    /// Start of the period, e.g. "01/12/2023".
    pub start: String,
    /// End of the period, e.g. "30/11/2024".
    pub end: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_period_strings_are_not_parsed() {
        let json = r#"{"start": "1 de diciembre", "end": "30/11/2024"}"#;
        let period: Period = serde_json::from_str(json).unwrap();
        assert_eq!(period.start, "1 de diciembre");
        assert_eq!(period.end, "30/11/2024");
    }

    #[test]
    fn test_missing_end_is_rejected() {
        let json = r#"{"start": "01/12/2023"}"#;
        assert!(serde_json::from_str::<Period>(json).is_err());
    }
}
