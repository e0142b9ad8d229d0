//! Series granularity and its provider-specific naming.

/// Sampling frequency of a requested price series.
///
/// Alpha Vantage does not use one uniform schema: each granularity maps to a
/// distinct query `function` and a distinct top-level key in the JSON
/// response. Both mappings live here, so supporting a new granularity is a
/// data change in this file rather than string comparisons scattered through
/// the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Granularity {
    Daily,
    Weekly,
    Monthly,
    Intraday,
}

/// Fixed sampling interval sent with intraday requests.
pub const INTRADAY_INTERVAL: &str = "5min";

impl Granularity {
    /// Parses a selector token: `"1"`-`"4"` or the granularity name
    /// (case-insensitive).
    pub fn from_token(token: &str) -> Option<Self> {
        match token.trim().to_ascii_lowercase().as_str() {
            "1" | "daily" => Some(Self::Daily),
            "2" | "weekly" => Some(Self::Weekly),
            "3" | "monthly" => Some(Self::Monthly),
            "4" | "intraday" => Some(Self::Intraday),
            _ => None,
        }
    }

    /// The `function` query parameter understood by the provider.
    pub const fn query_function(self) -> &'static str {
        match self {
            Self::Daily => "TIME_SERIES_DAILY",
            Self::Weekly => "TIME_SERIES_WEEKLY",
            Self::Monthly => "TIME_SERIES_MONTHLY",
            Self::Intraday => "TIME_SERIES_INTRADAY",
        }
    }

    /// The top-level response key holding the series for this granularity.
    pub const fn series_key(self) -> &'static str {
        match self {
            Self::Daily => "Time Series (Daily)",
            Self::Weekly => "Weekly Time Series",
            Self::Monthly => "Monthly Time Series",
            Self::Intraday => "Time Series (5min)",
        }
    }

    /// Whether timestamps at this granularity carry a time-of-day component.
    pub const fn is_intraday(self) -> bool {
        matches!(self, Self::Intraday)
    }
}
