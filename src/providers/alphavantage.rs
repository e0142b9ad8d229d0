//! Alpha Vantage REST implementation of [`QuoteProvider`].

use async_trait::async_trait;
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};

use crate::models::granularity::{Granularity, INTRADAY_INTERVAL};
use crate::models::symbol::Symbol;
use crate::providers::{ProviderError, ProviderInitError, QuoteProvider, QuoteResponse};

const BASE_URL: &str = "https://www.alphavantage.co/query";

/// The environment variable holding the Alpha Vantage API key.
pub const API_KEY_VAR: &str = "ALPHAVANTAGE_API_KEY";

/// Quote provider backed by the Alpha Vantage REST API.
pub struct AlphaVantageProvider {
    client: Client,
    api_key: SecretString,
}

impl AlphaVantageProvider {
    /// Creates a provider reading the API key from `ALPHAVANTAGE_API_KEY`.
    pub fn new() -> Result<Self, ProviderInitError> {
        let api_key =
            std::env::var(API_KEY_VAR).map_err(|_| ProviderInitError::MissingApiKey(API_KEY_VAR))?;
        Self::with_api_key(api_key)
    }

    /// Creates a provider with an explicitly injected API key.
    pub fn with_api_key(api_key: impl Into<String>) -> Result<Self, ProviderInitError> {
        let api_key: String = api_key.into();
        let client = Client::builder().build()?;
        Ok(Self {
            client,
            api_key: SecretString::new(api_key.into()),
        })
    }
}

#[async_trait]
impl QuoteProvider for AlphaVantageProvider {
    async fn fetch_series(
        &self,
        symbol: &Symbol,
        granularity: Granularity,
    ) -> Result<QuoteResponse, ProviderError> {
        let mut query: Vec<(&str, &str)> = vec![
            ("function", granularity.query_function()),
            ("symbol", symbol.as_str()),
        ];
        if granularity.is_intraday() {
            query.push(("interval", INTRADAY_INTERVAL));
        }
        query.push(("apikey", self.api_key.expose_secret()));

        tracing::debug!(
            %symbol,
            function = granularity.query_function(),
            "requesting quote series"
        );

        let response = self.client.get(BASE_URL).query(&query).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown API error".to_string());
            return Err(ProviderError::Api(format!("{status}: {body}")));
        }

        let payload = response.json::<serde_json::Value>().await?;
        let quote_response = QuoteResponse::new(payload);

        if let Some(message) = quote_response.error_message() {
            return Err(ProviderError::Api(message.to_string()));
        }
        if let Some(note) = quote_response.rate_limit_note() {
            return Err(ProviderError::RateLimited(note.to_string()));
        }

        Ok(quote_response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn with_api_key_builds_a_provider() {
        assert!(AlphaVantageProvider::with_api_key("test-key").is_ok());
    }
}
