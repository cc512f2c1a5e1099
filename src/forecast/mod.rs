//! Forecast aggregation.
//!
//! Buckets a flat forecast feed into calendar days, drops today, and reduces
//! the next few days to a high, a low and a representative condition.

pub mod aggregate;
pub mod label;
pub mod types;
pub mod utility;

pub use aggregate::{MAX_FORECAST_DAYS, aggregate};
pub use types::{CurrentConditions, DaySummary, ForecastFeed, ForecastResult, RawSample};
