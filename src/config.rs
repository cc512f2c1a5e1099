//! Provider configuration, resolved once at start-up.
//!
//! Credentials never live in source; they come from the environment (or a
//! `.env` file loaded by the binary) and are handed to the fetcher explicitly.

use std::fmt;
use std::str::FromStr;

use clap::ValueEnum;
use serde::Serialize;

use crate::error::{FetchError, ForecastError};

pub const DEFAULT_BASE_URL: &str = "https://api.openweathermap.org/data/2.5";
const DEFAULT_TIMEOUT_SECS: u64 = 30;
const PLACEHOLDER_KEY: &str = "YOUR_API_KEY_HERE";

/// Unit system requested from the upstream provider.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Units {
    #[default]
    Imperial,
    Metric,
    Standard,
}

impl Units {
    /// Value of the `units` query parameter.
    pub fn as_query(&self) -> &'static str {
        match self {
            Units::Imperial => "imperial",
            Units::Metric => "metric",
            Units::Standard => "standard",
        }
    }

    pub fn temperature_symbol(&self) -> &'static str {
        match self {
            Units::Imperial => "°F",
            Units::Metric => "°C",
            Units::Standard => "K",
        }
    }

    pub fn wind_unit(&self) -> &'static str {
        match self {
            Units::Imperial => "mph",
            Units::Metric | Units::Standard => "m/s",
        }
    }
}

impl fmt::Display for Units {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_query())
    }
}

impl FromStr for Units {
    type Err = ForecastError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "imperial" => Ok(Units::Imperial),
            "metric" => Ok(Units::Metric),
            "standard" => Ok(Units::Standard),
            other => Err(ForecastError::InvalidInput(format!("unknown units: {other}"))),
        }
    }
}

/// Everything the OpenWeatherMap client needs.
#[derive(Clone)]
pub struct WeatherConfig {
    pub api_key: String,
    pub base_url: String,
    pub units: Units,
    pub timeout_secs: u64,
}

impl fmt::Debug for WeatherConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WeatherConfig")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("units", &self.units)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl WeatherConfig {
    /// Reads the configuration from process environment variables.
    pub fn from_env() -> Result<Self, FetchError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from an arbitrary variable lookup.
    ///
    /// | Variable                   | Default                                  |
    /// |----------------------------|------------------------------------------|
    /// | `OPENWEATHER_API_KEY`      | required                                 |
    /// | `OPENWEATHER_BASE_URL`     | `https://api.openweathermap.org/data/2.5`|
    /// | `OPENWEATHER_UNITS`        | `imperial`                               |
    /// | `OPENWEATHER_TIMEOUT_SECS` | `30`                                     |
    pub fn from_lookup<F>(lookup: F) -> Result<Self, FetchError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup("OPENWEATHER_API_KEY")
            .map(|k| k.trim().to_string())
            .filter(|k| !k.is_empty() && k != PLACEHOLDER_KEY)
            .ok_or(FetchError::MissingApiKey)?;

        let base_url = lookup("OPENWEATHER_BASE_URL")
            .map(|u| u.trim().trim_end_matches('/').to_string())
            .filter(|u| !u.is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        let units = match lookup("OPENWEATHER_UNITS") {
            Some(u) => u.parse::<Units>()?,
            None => Units::default(),
        };

        let timeout_secs = match lookup("OPENWEATHER_TIMEOUT_SECS") {
            Some(t) => t.trim().parse().map_err(|_| {
                ForecastError::InvalidInput(format!("OPENWEATHER_TIMEOUT_SECS is not a number: {t}"))
            })?,
            None => DEFAULT_TIMEOUT_SECS,
        };

        Ok(Self {
            api_key,
            base_url,
            units,
            timeout_secs,
        })
    }
}
