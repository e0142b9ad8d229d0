//! Request orchestration for the chart pipeline.

pub mod chart;

pub use chart::{ChartOutcome, render_chart};
