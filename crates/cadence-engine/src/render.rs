//! Formatting adapter.
//!
//! Thin wrapper over chrono's strftime-style formatter. Any directive
//! chrono supports is supported here; no extra validation is applied.

use chrono::NaiveDate;

use crate::error::CadenceError;

/// Render `d` as text using a strftime-style format (e.g. `%Y-%m-%d`).
pub fn format_date(d: NaiveDate, time_format: &str) -> String {
    d.format(time_format).to_string()
}

/// Parse a literal date string with a strftime-style format.
///
/// # Errors
///
/// Returns [`CadenceError::InvalidExpression`] if `s` does not match
/// `date_format`.
pub fn parse_date(s: &str, date_format: &str) -> Result<NaiveDate, CadenceError> {
    NaiveDate::parse_from_str(s, date_format)
        .map_err(|e| CadenceError::InvalidExpression(format!("'{}': {}", s, e)))
}

// ── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_default() {
        let d = NaiveDate::from_ymd_opt(2022, 1, 3).unwrap();
        assert_eq!(format_date(d, "%Y-%m-%d"), "2022-01-03");
    }

    #[test]
    fn test_format_custom_directives() {
        let d = NaiveDate::from_ymd_opt(2022, 1, 3).unwrap();
        assert_eq!(format_date(d, "%d/%m/%Y"), "03/01/2022");
        assert_eq!(format_date(d, "%Y%m%d"), "20220103");
    }

    #[test]
    fn test_parse_roundtrip() {
        let d = parse_date("2022-11-14", "%Y-%m-%d").unwrap();
        assert_eq!(d, NaiveDate::from_ymd_opt(2022, 11, 14).unwrap());
    }

    #[test]
    fn test_parse_rejects_garbage() {
        let err = parse_date("not-a-date", "%Y-%m-%d").unwrap_err();
        assert!(err.to_string().contains("Invalid expression"), "got: {err}");
    }

    #[test]
    fn test_parse_rejects_out_of_range_components() {
        assert!(parse_date("2022-13-40", "%Y-%m-%d").is_err());
    }
}
