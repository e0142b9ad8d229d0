//! Aligned output sequences of the normalization pipeline.

/// Five index-aligned sequences covering the filtered, chronologically
/// sorted observations of one request.
///
/// Index `i` across all five vectors refers to the same observation. An
/// empty series is a valid outcome ("no data in range"), not an error.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilteredSeries {
    /// Provider-formatted timestamps: `YYYY-MM-DD`, with a
    /// ` HH:MM:SS` suffix for intraday data.
    pub timestamps: Vec<String>,
    pub opens: Vec<f64>,
    pub highs: Vec<f64>,
    pub lows: Vec<f64>,
    pub closes: Vec<f64>,
}

impl FilteredSeries {
    /// Number of observations.
    pub fn len(&self) -> usize {
        self.timestamps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.timestamps.is_empty()
    }

    /// Appends one observation, keeping all five sequences aligned.
    pub fn push(&mut self, timestamp: String, open: f64, high: f64, low: f64, close: f64) {
        self.timestamps.push(timestamp);
        self.opens.push(open);
        self.highs.push(high);
        self.lows.push(low);
        self.closes.push(close);
    }

    /// Smallest and largest price across all four price sequences.
    pub fn price_bounds(&self) -> Option<(f64, f64)> {
        let mut bounds: Option<(f64, f64)> = None;
        for value in self
            .opens
            .iter()
            .chain(&self.highs)
            .chain(&self.lows)
            .chain(&self.closes)
        {
            bounds = Some(match bounds {
                None => (*value, *value),
                Some((lo, hi)) => (lo.min(*value), hi.max(*value)),
            });
        }
        bounds
    }
}
