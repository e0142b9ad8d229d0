//! Historical stock quote ingestion and chart rendering.
//!
//! The pipeline validates submission inputs, fetches the raw series from the
//! quote provider, normalizes it into five aligned sequences, and renders an
//! SVG chart. See [`requests::render_chart`] for the one-call entry point and
//! [`normalize`] for the core of the ingestion logic.

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod errors;
pub mod models;
pub mod normalize;
pub mod providers;
pub mod render;
pub mod requests;
pub mod symbols;
pub mod validation;
