//! Input validation for CLI arguments

use crate::standup::DATE_FORMAT;
use chrono::NaiveDate;

/// Parse a `YYYY-MM-DD` date argument
pub fn parse_date(value: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(value, DATE_FORMAT)
        .map_err(|e| format!("invalid date '{value}', expected YYYY-MM-DD: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_date() {
        assert_eq!(
            parse_date("2021-03-27").unwrap(),
            NaiveDate::from_ymd_opt(2021, 3, 27).unwrap()
        );
        assert!(parse_date("2021-02-30").is_err());
        assert!(parse_date("yesterday").unwrap_err().contains("YYYY-MM-DD"));
    }
}
