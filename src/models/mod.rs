pub mod chart;
pub mod date_range;
pub mod granularity;
pub mod request;
pub mod series;
pub mod symbol;
