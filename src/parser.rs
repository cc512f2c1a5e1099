//! JSON decoding for OpenWeatherMap 2.5 documents.
//!
//! Only the fields the aggregator needs are modelled; everything else in the
//! payload is ignored.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::error::{FetchError, ForecastError};
use crate::forecast::{CurrentConditions, ForecastFeed, RawSample};

/// Decodes a field as `None` instead of failing when it is null or of the
/// wrong shape.
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

#[derive(Deserialize)]
struct Condition {
    description: Option<String>,
}

#[derive(Deserialize)]
struct Main {
    temp: Option<f64>,
    humidity: Option<u8>,
}

#[derive(Deserialize)]
struct Wind {
    speed: Option<f64>,
}

#[derive(Deserialize)]
struct CurrentDocument {
    name: Option<String>,
    #[serde(default)]
    weather: Vec<Condition>,
    main: Option<Main>,
    wind: Option<Wind>,
}

#[derive(Deserialize)]
struct EntryCondition {
    #[serde(default, deserialize_with = "lenient")]
    description: Option<String>,
}

#[derive(Deserialize)]
struct EntryMain {
    #[serde(default, deserialize_with = "lenient")]
    temp: Option<f64>,
}

#[derive(Deserialize)]
struct ListEntry {
    #[serde(default, deserialize_with = "lenient")]
    dt: Option<i64>,
    #[serde(default, deserialize_with = "lenient")]
    main: Option<EntryMain>,
    #[serde(default, deserialize_with = "lenient")]
    weather: Option<Vec<EntryCondition>>,
}

#[derive(Deserialize)]
struct City {
    timezone: Option<i32>,
}

#[derive(Deserialize)]
struct ForecastDocument {
    list: Vec<Value>,
    city: Option<City>,
}

fn missing(field: &str) -> ForecastError {
    ForecastError::InvalidInput(format!("current conditions missing `{field}`"))
}

/// Decodes a current-conditions document.
///
/// # Errors
///
/// Returns [`ForecastError::InvalidInput`] if the bytes are not JSON or any
/// of `name`, `weather[0].description`, `main.temp`, `main.humidity` or
/// `wind.speed` is absent.
pub fn parse_current(bytes: &[u8]) -> Result<CurrentConditions, ForecastError> {
    let doc: CurrentDocument = serde_json::from_slice(bytes)
        .map_err(|e| ForecastError::InvalidInput(format!("current conditions: {e}")))?;

    let main = doc.main.ok_or_else(|| missing("main"))?;
    let conditions = CurrentConditions {
        city_label: doc.name.ok_or_else(|| missing("name"))?,
        temperature: main.temp.ok_or_else(|| missing("main.temp"))?,
        condition_text: doc
            .weather
            .into_iter()
            .next()
            .and_then(|c| c.description)
            .ok_or_else(|| missing("weather[0].description"))?,
        humidity_percent: main.humidity.ok_or_else(|| missing("main.humidity"))?,
        wind_speed: doc
            .wind
            .and_then(|w| w.speed)
            .ok_or_else(|| missing("wind.speed"))?,
    };

    Ok(conditions)
}

/// Decodes a multi-day forecast document.
///
/// Entries without a `dt` timestamp cannot be placed on a day and are
/// dropped here. Entries missing a temperature or description are kept with
/// `None` so the aggregator can exclude them. A null or wrongly typed field
/// counts as missing, so one bad entry never rejects the rest of the feed.
///
/// # Errors
///
/// Returns [`FetchError::Document`] if the bytes are not JSON or `list` is absent.
pub fn parse_forecast(bytes: &[u8]) -> Result<ForecastFeed, FetchError> {
    let doc: ForecastDocument = serde_json::from_slice(bytes)?;

    let samples = doc
        .list
        .into_iter()
        .filter_map(|value| {
            let entry: ListEntry = serde_json::from_value(value).ok()?;
            Some(RawSample {
                timestamp_seconds: entry.dt?,
                temperature: entry.main.and_then(|m| m.temp),
                condition_text: entry
                    .weather
                    .and_then(|w| w.into_iter().next())
                    .and_then(|c| c.description),
            })
        })
        .collect();

    Ok(ForecastFeed {
        samples,
        utc_offset_seconds: doc.city.and_then(|c| c.timezone),
    })
}

/// Strips state/country qualifiers from a city query ("Austin, TX" -> "Austin").
pub fn clean_city(input: &str) -> String {
    input.split(',').next().unwrap_or_default().trim().to_string()
}
