//! Validated parameters for one chart request.

use chrono::NaiveDate;

use crate::models::chart::ChartKind;
use crate::models::date_range::DateRange;
use crate::models::granularity::Granularity;
use crate::models::symbol::Symbol;
use crate::validation::ValidationError;

/// The typed form of one chart submission.
///
/// Every field has already passed validation; the pipeline never re-checks
/// raw tokens.
#[derive(Debug, Clone)]
pub struct ChartRequestParams {
    pub symbol: Symbol,
    pub chart_kind: ChartKind,
    pub granularity: Granularity,
    pub range: DateRange,
}

impl ChartRequestParams {
    /// Validates raw submission tokens into typed parameters.
    ///
    /// `today` bounds the date range; pass `Utc::now().date_naive()` outside
    /// of tests.
    pub fn from_tokens(
        symbol: &str,
        chart_type: &str,
        granularity: &str,
        start: &str,
        end: &str,
        today: NaiveDate,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            symbol: Symbol::parse(symbol)?,
            chart_kind: ChartKind::from_token(chart_type).ok_or_else(|| {
                ValidationError::InvalidChartType {
                    token: chart_type.to_string(),
                }
            })?,
            granularity: Granularity::from_token(granularity).ok_or_else(|| {
                ValidationError::InvalidGranularity {
                    token: granularity.to_string(),
                }
            })?,
            range: DateRange::parse(start, end, today)?,
        })
    }
}
