//! Chart kind selector.

/// The kind of chart to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    Line,
    Bar,
}

impl ChartKind {
    /// Parses a selector token: `"1"`/`"line"` or `"2"`/`"bar"`
    /// (case-insensitive). Unsupported tokens yield `None`, so no chart is
    /// ever produced for them.
    pub fn from_token(token: &str) -> Option<Self> {
        match token.trim().to_ascii_lowercase().as_str() {
            "1" | "line" => Some(Self::Line),
            "2" | "bar" => Some(Self::Bar),
            _ => None,
        }
    }
}
