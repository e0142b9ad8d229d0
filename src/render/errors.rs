use thiserror::Error;

/// Errors while producing a chart artifact.
#[derive(Debug, Error)]
pub enum RenderError {
    /// The output location could not be created or written.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The drawing backend failed while building the chart.
    #[error("Failed to draw chart: {0}")]
    Backend(String),
}
