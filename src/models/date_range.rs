//! Inclusive calendar date range for filtering a series.

use chrono::NaiveDate;

use crate::validation::{ValidationError, parse_date};

/// An inclusive `[start, end]` window of calendar dates.
///
/// `end` never precedes `start` and never lies in the future; both bounds
/// come from strict `YYYY-MM-DD` tokens via [`DateRange::parse`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    /// Validates and builds a range from raw tokens, with `today` as the
    /// upper bound for `end`.
    ///
    /// The three failure reasons are distinct: invalid format, end before
    /// start, and future end date.
    pub fn parse(start: &str, end: &str, today: NaiveDate) -> Result<Self, ValidationError> {
        let start = parse_date(start)?;
        let end = parse_date(end)?;
        if end < start {
            return Err(ValidationError::EndBeforeStart { start, end });
        }
        if end > today {
            return Err(ValidationError::FutureEndDate { end, today });
        }
        Ok(Self { start, end })
    }

    /// Whether `date` falls inside the window, bounds included.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn parses_a_well_ordered_range() {
        let range = DateRange::parse("2023-01-06", "2023-01-13", day(2023, 6, 1)).unwrap();
        assert_eq!(range.start, day(2023, 1, 6));
        assert_eq!(range.end, day(2023, 1, 13));
    }

    #[test]
    fn end_before_start_is_its_own_reason() {
        let err = DateRange::parse("2023-02-01", "2023-01-01", day(2023, 6, 1)).unwrap_err();
        assert!(matches!(err, ValidationError::EndBeforeStart { .. }));
    }

    #[test]
    fn future_end_date_is_its_own_reason() {
        let err = DateRange::parse("2023-05-01", "2023-07-01", day(2023, 6, 1)).unwrap_err();
        assert!(matches!(err, ValidationError::FutureEndDate { .. }));
    }

    #[test]
    fn malformed_endpoints_fail_as_format_errors() {
        let today = day(2023, 6, 1);
        for (start, end) in [
            ("2023/01/01", "2023-01-02"),
            ("2023-01-01", "01-02-2023"),
            ("2023-02-30", "2023-03-01"),
        ] {
            let err = DateRange::parse(start, end, today).unwrap_err();
            assert!(
                matches!(err, ValidationError::InvalidDateFormat { .. }),
                "{start}..{end}"
            );
        }
    }

    #[test]
    fn contains_is_inclusive_on_both_bounds() {
        let range = DateRange::parse("2023-01-05", "2023-01-10", day(2023, 6, 1)).unwrap();
        assert!(range.contains(day(2023, 1, 5)));
        assert!(range.contains(day(2023, 1, 10)));
        assert!(!range.contains(day(2023, 1, 4)));
        assert!(!range.contains(day(2023, 1, 11)));
    }

    #[test]
    fn single_day_range_is_valid() {
        let range = DateRange::parse("2023-01-05", "2023-01-05", day(2023, 6, 1)).unwrap();
        assert!(range.contains(day(2023, 1, 5)));
    }
}
