//! Series normalization: the core of the ingestion pipeline.
//!
//! Takes the provider's raw nested response and produces the five aligned,
//! chronologically sorted sequences the renderer consumes. Individual
//! malformed records are skipped, never fatal to the batch; an absent or
//! empty series yields an empty [`FilteredSeries`], which upstream treats as
//! "no data", not as an error.

use chrono::NaiveDate;
use serde_json::Value;

use crate::models::date_range::DateRange;
use crate::models::granularity::Granularity;
use crate::models::series::FilteredSeries;
use crate::providers::QuoteResponse;

/// Provider-exact OHLC field names; the digit prefix is part of the name.
const PRICE_FIELDS: [&str; 4] = ["1. open", "2. high", "3. low", "4. close"];

/// Filters, coerces, and sorts the raw series into aligned sequences.
///
/// The raw response may list records newest-first or in no particular
/// order; the output is always ascending by timestamp. Inclusion is decided
/// on the record's comparison date, bounds inclusive.
pub fn normalize(
    response: &QuoteResponse,
    granularity: Granularity,
    range: &DateRange,
) -> FilteredSeries {
    let Some(series) = response.series(granularity) else {
        tracing::debug!(
            key = granularity.series_key(),
            "series key absent in response"
        );
        return FilteredSeries::default();
    };

    let mut records: Vec<(String, [f64; 4])> = Vec::with_capacity(series.len());

    for (timestamp, values) in series {
        let Some(date) = comparison_date(timestamp, granularity) else {
            tracing::warn!(%timestamp, "skipping record with unparseable timestamp");
            continue;
        };
        if !range.contains(date) {
            continue;
        }
        match extract_prices(values) {
            Some(prices) => records.push((timestamp.clone(), prices)),
            None => {
                tracing::warn!(%timestamp, "skipping record with missing or malformed price fields");
            }
        }
    }

    // Zero-padded ISO-8601 timestamps sort chronologically as plain strings,
    // for dates and date-times alike.
    records.sort_by(|a, b| a.0.cmp(&b.0));

    let mut out = FilteredSeries::default();
    for (timestamp, [open, high, low, close]) in records {
        out.push(timestamp, open, high, low, close);
    }
    out
}

/// The date used for range inclusion: intraday timestamps are truncated to
/// their date portion, all other granularities already are dates.
fn comparison_date(timestamp: &str, granularity: Granularity) -> Option<NaiveDate> {
    let date_part = if granularity.is_intraday() {
        timestamp.split_whitespace().next().unwrap_or(timestamp)
    } else {
        timestamp
    };
    NaiveDate::parse_from_str(date_part, "%Y-%m-%d").ok()
}

/// Pulls the four price fields out of one record, if all four parse.
fn extract_prices(values: &Value) -> Option<[f64; 4]> {
    let mut prices = [0.0; 4];
    for (slot, field) in prices.iter_mut().zip(PRICE_FIELDS) {
        *slot = parse_price(values.get(field)?)?;
    }
    Some(prices)
}

/// The provider serializes prices as strings; tolerate raw numbers too.
fn parse_price(value: &Value) -> Option<f64> {
    match value {
        Value::String(s) => s.trim().parse().ok(),
        Value::Number(n) => n.as_f64(),
        _ => None,
    }
}
