//! Pure input validation for the chart submission surface.
//!
//! Every function here is deterministic given `today` and has no side
//! effects. Each rejection carries its own human-readable reason so callers
//! can surface it directly.

use chrono::NaiveDate;
use thiserror::Error;

use crate::models::chart::ChartKind;
use crate::models::date_range::DateRange;
use crate::models::granularity::Granularity;
use crate::models::symbol::Symbol;

/// A rejected submission input, with the reason.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Invalid symbol '{token}': expected 1-7 uppercase letters")]
    InvalidSymbol { token: String },

    #[error("Invalid chart type '{token}': expected 1 (line) or 2 (bar)")]
    InvalidChartType { token: String },

    #[error(
        "Invalid time series '{token}': expected 1 (daily), 2 (weekly), 3 (monthly) or 4 (intraday)"
    )]
    InvalidGranularity { token: String },

    #[error("Invalid date format '{value}'. Use YYYY-MM-DD")]
    InvalidDateFormat { value: String },

    #[error("End date {end} must be after start date {start}")]
    EndBeforeStart { start: NaiveDate, end: NaiveDate },

    #[error("End date {end} cannot be in the future (today is {today})")]
    FutureEndDate { end: NaiveDate, today: NaiveDate },
}

/// Parses a strict `YYYY-MM-DD` token into a calendar date.
///
/// Exactly four year digits, two month digits, two day digits, `-`
/// separators. The shape is checked before chrono parses the value, so
/// variants like `01-01-2023` or `2023/01/01` fail as format errors instead
/// of being reinterpreted with swapped fields.
pub fn parse_date(value: &str) -> Result<NaiveDate, ValidationError> {
    let bytes = value.as_bytes();
    let shape_ok = bytes.len() == 10
        && bytes[4] == b'-'
        && bytes[7] == b'-'
        && bytes
            .iter()
            .enumerate()
            .all(|(i, b)| matches!(i, 4 | 7) || b.is_ascii_digit());
    if !shape_ok {
        return Err(ValidationError::InvalidDateFormat {
            value: value.to_string(),
        });
    }
    // Shape alone is not enough: 2023-02-30 or 2023-13-01 must still fail.
    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| ValidationError::InvalidDateFormat {
        value: value.to_string(),
    })
}

/// Accepts iff `token` is a well-formed ticker symbol.
pub fn validate_symbol(token: &str) -> bool {
    Symbol::parse(token).is_ok()
}

/// Accepts iff `token` selects a supported chart kind.
pub fn validate_chart_type(token: &str) -> bool {
    ChartKind::from_token(token).is_some()
}

/// Accepts iff `token` selects one of the four granularities.
pub fn validate_granularity(token: &str) -> bool {
    Granularity::from_token(token).is_some()
}

/// Accepts iff `value` is a strict, real calendar date.
pub fn validate_date(value: &str) -> bool {
    parse_date(value).is_ok()
}

/// Validates a raw `[start, end]` pair against `today`.
pub fn validate_date_range(
    start: &str,
    end: &str,
    today: NaiveDate,
) -> Result<DateRange, ValidationError> {
    DateRange::parse(start, end, today)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_symbol_accepts_valid_tickers() {
        for token in ["A", "AAPL", "GOOG", "TSLA"] {
            assert!(validate_symbol(token), "{token}");
        }
    }

    #[test]
    fn validate_symbol_rejects_malformed_tickers() {
        for token in ["AAPL123", "ABCDEFGH", "aapl", "A@PL", ""] {
            assert!(!validate_symbol(token), "{token}");
        }
    }

    #[test]
    fn validate_chart_type_covers_the_fixed_set() {
        assert!(validate_chart_type("1"));
        assert!(validate_chart_type("2"));
        assert!(!validate_chart_type("3"));
        assert!(!validate_chart_type("a"));
        assert!(!validate_chart_type(""));
    }

    #[test]
    fn validate_granularity_covers_the_four_values() {
        for token in ["1", "2", "3", "4"] {
            assert!(validate_granularity(token), "{token}");
        }
        assert!(!validate_granularity("5"));
        assert!(!validate_granularity("a"));
        assert!(!validate_granularity(""));
    }

    #[test]
    fn validate_date_accepts_real_calendar_dates() {
        assert!(validate_date("2023-01-01"));
        assert!(validate_date("2020-12-31"));
        assert!(validate_date("2024-02-29"));
    }

    #[test]
    fn validate_date_rejects_impossible_dates() {
        assert!(!validate_date("2023-02-30"));
        assert!(!validate_date("2023-13-01"));
        assert!(!validate_date("2023-01-32"));
        assert!(!validate_date("2023-02-29"));
    }

    #[test]
    fn validate_date_rejects_wrong_shapes() {
        assert!(!validate_date("01-01-2023"));
        assert!(!validate_date("2023/01/01"));
        assert!(!validate_date("2023-1-01"));
        assert!(!validate_date("23-01-01"));
        assert!(!validate_date("2023-01-01 "));
        assert!(!validate_date(""));
    }

    #[test]
    fn range_failures_have_distinct_reasons() {
        let today = NaiveDate::from_ymd_opt(2023, 6, 1).unwrap();

        let err = validate_date_range("bad", "2023-01-01", today).unwrap_err();
        assert!(matches!(err, ValidationError::InvalidDateFormat { .. }));

        let err = validate_date_range("2023-03-01", "2023-02-01", today).unwrap_err();
        assert!(matches!(err, ValidationError::EndBeforeStart { .. }));

        let err = validate_date_range("2023-05-01", "2023-06-02", today).unwrap_err();
        assert!(matches!(err, ValidationError::FutureEndDate { .. }));
    }

    #[test]
    fn end_equal_to_today_is_accepted() {
        let today = NaiveDate::from_ymd_opt(2023, 6, 1).unwrap();
        assert!(validate_date_range("2023-05-01", "2023-06-01", today).is_ok());
    }
}
