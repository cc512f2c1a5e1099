//! Error kinds surfaced by the aggregator and the fetch layer.

use reqwest::StatusCode;
use thiserror::Error;

/// Failures of the aggregation step itself.
///
/// Individual malformed samples never end up here; they are dropped from
/// their bucket instead.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ForecastError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

/// Failures while talking to the upstream weather provider.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("weather API key not configured, set OPENWEATHER_API_KEY")]
    MissingApiKey,

    #[error("city \"{0}\" not found, check the spelling and try again")]
    CityNotFound(String),

    #[error("invalid API key, check the weather API configuration")]
    Unauthorized,

    #[error("weather service error: {0}")]
    Status(StatusCode),

    #[error("unable to connect to weather service: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("malformed weather document: {0}")]
    Document(String),

    #[error(transparent)]
    Forecast(#[from] ForecastError),
}

impl From<serde_json::Error> for FetchError {
    fn from(e: serde_json::Error) -> Self {
        FetchError::Document(e.to_string())
    }
}

impl FetchError {
    /// Maps a non-success upstream status to its error kind.
    pub fn from_status(status: StatusCode, city: &str) -> Self {
        match status {
            StatusCode::NOT_FOUND => FetchError::CityNotFound(city.to_string()),
            StatusCode::UNAUTHORIZED => FetchError::Unauthorized,
            other => FetchError::Status(other),
        }
    }
}
