//! The validate → fetch → normalize → render pipeline.

use crate::errors::Error;
use crate::models::granularity::Granularity;
use crate::models::request::ChartRequestParams;
use crate::normalize::normalize;
use crate::providers::QuoteProvider;
use crate::render::ChartRenderer;

/// The structured result of one chart request.
///
/// An empty filtered series is not an error: it surfaces as
/// [`ChartOutcome::NoData`] so the caller can present a granularity-aware
/// message instead of a failure.
#[derive(Debug, Clone, PartialEq)]
pub enum ChartOutcome<T> {
    /// The chart artifact was produced.
    Rendered(T),
    /// The request was well-formed but no records fell inside the range.
    NoData { granularity: Granularity },
}

impl<T> ChartOutcome<T> {
    /// A user-facing message for the no-data case. Intraday gets its own
    /// hint because the provider only retains recent intraday sessions.
    pub fn no_data_message(&self) -> Option<&'static str> {
        match self {
            Self::Rendered(_) => None,
            Self::NoData { granularity } if granularity.is_intraday() => Some(
                "No intraday data for the selected range. The provider only retains \
                 recent intraday sessions; try a range covering the last few trading days.",
            ),
            Self::NoData { .. } => Some("No data available for the selected date range"),
        }
    }
}

/// Runs one chart request end to end.
///
/// Inputs must already be validated into [`ChartRequestParams`]; all
/// failures come back as a structured [`Error`], never a panic.
pub async fn render_chart<R>(
    provider: &dyn QuoteProvider,
    renderer: &R,
    params: &ChartRequestParams,
) -> Result<ChartOutcome<R::Output>, Error>
where
    R: ChartRenderer,
{
    let response = provider
        .fetch_series(&params.symbol, params.granularity)
        .await?;
    let series = normalize(&response, params.granularity, &params.range);

    if series.is_empty() {
        tracing::info!(symbol = %params.symbol, "no records in requested range");
        return Ok(ChartOutcome::NoData {
            granularity: params.granularity,
        });
    }

    tracing::info!(symbol = %params.symbol, points = series.len(), "rendering chart");
    let artifact = renderer.render(params.chart_kind, &series, &params.symbol)?;
    Ok(ChartOutcome::Rendered(artifact))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_data_messages_differ_by_granularity() {
        let intraday: ChartOutcome<()> = ChartOutcome::NoData {
            granularity: Granularity::Intraday,
        };
        let daily: ChartOutcome<()> = ChartOutcome::NoData {
            granularity: Granularity::Daily,
        };
        let intraday_message = intraday.no_data_message().unwrap();
        let daily_message = daily.no_data_message().unwrap();
        assert_ne!(intraday_message, daily_message);
        assert!(intraday_message.contains("intraday"));
    }

    #[test]
    fn rendered_outcome_has_no_message() {
        let outcome = ChartOutcome::Rendered(());
        assert!(outcome.no_data_message().is_none());
    }
}
