//! Data types used by the aggregation pipeline.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::ForecastError;

/// A single forecast data point as delivered by the upstream feed.
///
/// `temperature` and `condition_text` are optional so a defective entry can
/// still be carried to the aggregator, which excludes it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawSample {
    pub timestamp_seconds: i64,
    pub temperature: Option<f64>,
    pub condition_text: Option<String>,
}

impl RawSample {
    pub fn new(timestamp_seconds: i64, temperature: f64, condition_text: &str) -> Self {
        Self {
            timestamp_seconds,
            temperature: Some(temperature),
            condition_text: Some(condition_text.to_string()),
        }
    }

    /// Returns the temperature and condition if both are usable.
    pub(crate) fn reading(&self) -> Option<(f64, &str)> {
        let temperature = self.temperature.filter(|t| t.is_finite())?;
        let condition = self
            .condition_text
            .as_deref()
            .map(str::trim)
            .filter(|c| !c.is_empty())?;
        Some((temperature, condition))
    }
}

/// Current conditions for the queried city.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentConditions {
    pub city_label: String,
    pub temperature: f64,
    pub condition_text: String,
    pub humidity_percent: u8,
    pub wind_speed: f64,
}

impl CurrentConditions {
    /// Checks the shape-level completeness of the record.
    pub fn validate(&self) -> Result<(), ForecastError> {
        if self.city_label.trim().is_empty() {
            return Err(ForecastError::InvalidInput("city label is empty".into()));
        }
        if self.condition_text.trim().is_empty() {
            return Err(ForecastError::InvalidInput(
                "current condition text is empty".into(),
            ));
        }
        if !self.temperature.is_finite() {
            return Err(ForecastError::InvalidInput(format!(
                "current temperature is not a number: {}",
                self.temperature
            )));
        }
        if !self.wind_speed.is_finite() || self.wind_speed < 0.0 {
            return Err(ForecastError::InvalidInput(format!(
                "wind speed out of range: {}",
                self.wind_speed
            )));
        }
        if self.humidity_percent > 100 {
            return Err(ForecastError::InvalidInput(format!(
                "humidity out of range: {}%",
                self.humidity_percent
            )));
        }
        Ok(())
    }
}

/// Summary of one forecast day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DaySummary {
    pub label: String,
    pub date: NaiveDate,
    pub high: i32,
    pub low: i32,
    pub representative_condition: String,
}

/// Complete aggregation result for one city query.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ForecastResult {
    pub current: CurrentConditions,
    pub days: Vec<DaySummary>,
}

/// A decoded forecast document.
///
/// `utc_offset_seconds` is the city timezone reported by the feed, if any.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ForecastFeed {
    pub samples: Vec<RawSample>,
    pub utc_offset_seconds: Option<i32>,
}
