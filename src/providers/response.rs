//! Raw quote response envelope.

use serde_json::{Map, Value};

use crate::models::granularity::Granularity;

/// The provider's raw nested response, one per request.
///
/// The payload stays opaque JSON: the top-level shape differs per
/// granularity and the normalizer resolves the right series key itself.
/// Produced once by a [`QuoteProvider`](super::QuoteProvider), consumed once
/// by the normalizer, never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct QuoteResponse(Value);

impl QuoteResponse {
    pub fn new(payload: Value) -> Self {
        Self(payload)
    }

    /// The per-timestamp series object for `granularity`, if present.
    pub fn series(&self, granularity: Granularity) -> Option<&Map<String, Value>> {
        self.0
            .get(granularity.series_key())
            .and_then(Value::as_object)
    }

    /// The provider's explicit error message, if any.
    pub fn error_message(&self) -> Option<&str> {
        self.0.get("Error Message").and_then(Value::as_str)
    }

    /// The provider's rate-limit / throttling note, if any.
    ///
    /// Older responses carry `"Note"`, newer ones `"Information"`.
    pub fn rate_limit_note(&self) -> Option<&str> {
        self.0
            .get("Note")
            .or_else(|| self.0.get("Information"))
            .and_then(Value::as_str)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn resolves_the_series_for_the_requested_granularity() {
        let response = QuoteResponse::new(json!({
            "Meta Data": {},
            "Weekly Time Series": { "2023-01-06": {} },
        }));
        assert!(response.series(Granularity::Weekly).is_some());
        assert!(response.series(Granularity::Daily).is_none());
        assert!(response.series(Granularity::Intraday).is_none());
    }

    #[test]
    fn surfaces_provider_error_messages() {
        let response = QuoteResponse::new(json!({
            "Error Message": "Invalid API call."
        }));
        assert_eq!(response.error_message(), Some("Invalid API call."));
        assert_eq!(response.rate_limit_note(), None);
    }

    #[test]
    fn surfaces_rate_limit_notes_under_both_keys() {
        let response = QuoteResponse::new(json!({ "Note": "5 calls per minute" }));
        assert_eq!(response.rate_limit_note(), Some("5 calls per minute"));

        let response = QuoteResponse::new(json!({ "Information": "limit reached" }));
        assert_eq!(response.rate_limit_note(), Some("limit reached"));
    }

    #[test]
    fn series_key_holding_a_non_object_is_treated_as_absent() {
        let response = QuoteResponse::new(json!({ "Weekly Time Series": "oops" }));
        assert!(response.series(Granularity::Weekly).is_none());
    }
}
