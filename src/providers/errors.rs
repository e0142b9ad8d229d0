use thiserror::Error;

/// Errors that can occur within a [`QuoteProvider`](super::QuoteProvider)
/// implementation.
///
/// Transport failures and provider-reported failures both end up here, so
/// the normalization pipeline never sees a raw transport error.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// Transport-level failure (network error, timeout, malformed payload).
    #[error("API request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The provider returned an explicit error message (e.g. unknown symbol).
    #[error("API error: {0}")]
    Api(String),

    /// The provider answered with a rate-limit note instead of data.
    #[error("API limit: {0}")]
    RateLimited(String),
}

/// Errors while constructing a provider.
#[derive(Debug, Error)]
pub enum ProviderInitError {
    /// No API key available from flag, config file, or environment.
    #[error("Missing API key: set {0} or provide one in the config file")]
    MissingApiKey(&'static str),

    /// The underlying HTTP client could not be built.
    #[error("Failed to build HTTP client: {0}")]
    Client(#[from] reqwest::Error),
}
