//! Provider abstraction for historical quote sources.
//!
//! This module defines the [`QuoteProvider`] trait, the single seam between
//! the normalization pipeline and any quote vendor. Implementations own all
//! vendor-specific transport and error mapping: callers only ever see a
//! [`QuoteResponse`] or a structured [`ProviderError`], never a raw
//! transport exception.
//!
//! The trait is designed for async usage and supports dynamic dispatch
//! (`dyn QuoteProvider`) for runtime selection of providers.

pub mod alphavantage;
pub mod errors;
pub mod response;

use async_trait::async_trait;

pub use errors::{ProviderError, ProviderInitError};
pub use response::QuoteResponse;

use crate::models::granularity::Granularity;
use crate::models::symbol::Symbol;

#[async_trait]
pub trait QuoteProvider: Send + Sync {
    /// Fetches the raw historical series for `symbol` at `granularity`.
    async fn fetch_series(
        &self,
        symbol: &Symbol,
        granularity: Granularity,
    ) -> Result<QuoteResponse, ProviderError>;
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    struct CannedProvider;
    struct UnavailableProvider;

    #[async_trait]
    impl QuoteProvider for CannedProvider {
        async fn fetch_series(
            &self,
            _symbol: &Symbol,
            _granularity: Granularity,
        ) -> Result<QuoteResponse, ProviderError> {
            Ok(QuoteResponse::new(json!({ "Weekly Time Series": {} })))
        }
    }

    #[async_trait]
    impl QuoteProvider for UnavailableProvider {
        async fn fetch_series(
            &self,
            _symbol: &Symbol,
            _granularity: Granularity,
        ) -> Result<QuoteResponse, ProviderError> {
            Err(ProviderError::Api("service down".to_string()))
        }
    }

    fn get_provider(name: &str) -> Box<dyn QuoteProvider> {
        if name == "canned" {
            Box::new(CannedProvider)
        } else {
            Box::new(UnavailableProvider)
        }
    }

    #[tokio::test]
    async fn providers_dispatch_dynamically() {
        let symbol = Symbol::parse("AAPL").unwrap();

        let provider = get_provider("canned");
        let response = provider
            .fetch_series(&symbol, Granularity::Weekly)
            .await
            .unwrap();
        assert!(response.series(Granularity::Weekly).is_some());

        let provider = get_provider("unavailable");
        let err = provider
            .fetch_series(&symbol, Granularity::Weekly)
            .await
            .unwrap_err();
        assert!(matches!(err, ProviderError::Api(_)));
    }
}
