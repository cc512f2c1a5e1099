//! Trait for a provider of current conditions and forecast feeds.

use async_trait::async_trait;

use crate::error::FetchError;
use crate::forecast::{CurrentConditions, ForecastFeed};

/// Abstraction over a weather provider (e.g., OpenWeatherMap).
///
/// Implementations own authentication and translate upstream failures into
/// [`FetchError`]s; they hand back already-decoded records.
#[async_trait]
pub trait WeatherApi: Send + Sync {
    /// Current conditions for `city`.
    async fn current(&self, city: &str) -> Result<CurrentConditions, FetchError>;

    /// Multi-day sampled forecast for `city`.
    async fn forecast(&self, city: &str) -> Result<ForecastFeed, FetchError>;
}
