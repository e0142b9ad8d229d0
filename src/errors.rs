use thiserror::Error;

use crate::providers::{ProviderError, ProviderInitError};
use crate::render::RenderError;
use crate::validation::ValidationError;

/// The unified error type for the `stock_charter` crate.
///
/// Validation, provider, and render failures stay distinguishable so the
/// caller can present each with its own messaging. An empty filtered series
/// is deliberately not represented here: it is a valid outcome, surfaced as
/// [`ChartOutcome::NoData`](crate::requests::ChartOutcome::NoData).
#[derive(Debug, Error)]
pub enum Error {
    /// A submission input was rejected; carries the human-readable reason.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The quote provider failed (transport, API error, or rate limit).
    #[error("Provider error: {0}")]
    Provider(#[from] ProviderError),

    /// A provider could not be constructed (e.g. missing API key).
    #[error("Provider error: {0}")]
    ProviderInit(#[from] ProviderInitError),

    /// The chart artifact could not be produced.
    #[error("Render error: {0}")]
    Render(#[from] RenderError),

    /// An error related to configuration.
    #[error("Configuration error: {0}")]
    Config(String),

    /// A generic I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
