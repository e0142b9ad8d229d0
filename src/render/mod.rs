//! Chart rendering sink.
//!
//! [`ChartRenderer`] is the boundary between the normalization pipeline and
//! whatever produces the visual artifact. The associated `Output` keeps the
//! trait flexible: the bundled SVG renderer returns the path of the written
//! file, while an in-memory renderer could return bytes instead.

pub mod errors;
pub mod svg;

pub use errors::RenderError;
pub use svg::SvgChartRenderer;

use crate::models::chart::ChartKind;
use crate::models::series::FilteredSeries;
use crate::models::symbol::Symbol;

pub trait ChartRenderer {
    /// What a successful render evaluates to (e.g. the artifact's path).
    type Output;

    /// Renders `series` as a `kind` chart labeled with `symbol`.
    fn render(
        &self,
        kind: ChartKind,
        series: &FilteredSeries,
        symbol: &Symbol,
    ) -> Result<Self::Output, RenderError>;
}
