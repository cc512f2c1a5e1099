use chrono::{DateTime, FixedOffset};
use tracing::{debug, info};

use crate::clock::Clock;
use crate::error::{FetchError, ForecastError};
use crate::forecast::{ForecastResult, aggregate};
use crate::parser::{clean_city, parse_current, parse_forecast};
use crate::services::weather_api::WeatherApi;

/// Fetches both upstream documents for a city and aggregates them.
pub struct ForecastService<A, K> {
    api: A,
    clock: K,
}

impl<A: WeatherApi, K: Clock> ForecastService<A, K> {
    pub fn new(api: A, clock: K) -> Self {
        Self { api, clock }
    }

    /// Runs one query: clean the city name, fetch current conditions and the
    /// forecast concurrently, then aggregate against the clock's `now`
    /// shifted into the city's timezone.
    ///
    /// # Errors
    ///
    /// [`ForecastError::InvalidInput`] for a blank city or bad current
    /// conditions, otherwise whatever the [`WeatherApi`] reports. A failure
    /// of either fetch fails the whole query.
    #[tracing::instrument(skip(self))]
    pub async fn forecast_for_city(&self, city: &str) -> Result<ForecastResult, FetchError> {
        let query = clean_city(city);
        if query.is_empty() {
            return Err(ForecastError::InvalidInput("city must not be empty".into()).into());
        }

        let (current, feed) =
            tokio::try_join!(self.api.current(&query), self.api.forecast(&query))?;
        debug!(
            samples = feed.samples.len(),
            utc_offset = feed.utc_offset_seconds,
            "Upstream documents received"
        );

        let now = local_now(self.clock.now(), feed.utc_offset_seconds);
        let result = aggregate(current, &feed.samples, now)?;

        info!(
            city = %result.current.city_label,
            days = result.days.len(),
            "Forecast aggregated"
        );
        Ok(result)
    }
}

/// Moves `now` into the feed-provided UTC offset, if there is a valid one.
pub fn local_now(now: DateTime<FixedOffset>, utc_offset_seconds: Option<i32>) -> DateTime<FixedOffset> {
    utc_offset_seconds
        .and_then(FixedOffset::east_opt)
        .map(|tz| now.with_timezone(&tz))
        .unwrap_or(now)
}

/// Aggregates raw upstream documents that were saved earlier, e.g. from disk.
pub fn aggregate_documents(
    current: &[u8],
    forecast: &[u8],
    now: DateTime<FixedOffset>,
) -> Result<ForecastResult, FetchError> {
    let current = parse_current(current)?;
    let feed = parse_forecast(forecast)?;
    let now = local_now(now, feed.utc_offset_seconds);
    Ok(aggregate(current, &feed.samples, now)?)
}
