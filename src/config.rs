//! Application configuration.
//!
//! Credentials and paths are injected here rather than embedded in code.
//! The API key resolution order is: explicit flag, config file, then the
//! `ALPHAVANTAGE_API_KEY` environment variable.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::errors::Error;

/// Optional settings loaded from a TOML file.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Alpha Vantage API key.
    pub api_key: Option<String>,
    /// Where the rendered SVG artifact is written.
    pub output_path: Option<PathBuf>,
    /// CSV file with the selectable symbols.
    pub symbols_file: Option<PathBuf>,
}

impl AppConfig {
    pub fn from_file(path: &Path) -> Result<Self, Error> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| Error::Config(format!("{}: {e}", path.display())))
    }
}
