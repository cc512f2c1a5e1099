use async_trait::async_trait;
use reqwest::Url;
use std::time::Duration;
use tracing::debug;

use crate::config::{Units, WeatherConfig};
use crate::error::FetchError;
use crate::fetch::auth::UrlParam;
use crate::fetch::{BasicClient, HttpClient, fetch_bytes};
use crate::forecast::{CurrentConditions, ForecastFeed};
use crate::parser::{parse_current, parse_forecast};
use crate::services::weather_api::WeatherApi;

/// [`WeatherApi`] backed by the OpenWeatherMap 2.5 `weather` and `forecast`
/// endpoints. The API key travels as the `appid` query parameter.
pub struct OpenWeatherMapClient<C> {
    http: UrlParam<C>,
    base_url: String,
    units: Units,
}

impl OpenWeatherMapClient<BasicClient> {
    /// Builds a client with a [`BasicClient`] honoring the configured timeout.
    pub fn from_config(config: &WeatherConfig) -> Result<Self, FetchError> {
        let http = BasicClient::with_timeout(Duration::from_secs(config.timeout_secs))?;
        Ok(Self::new(http, config))
    }
}

impl<C: HttpClient> OpenWeatherMapClient<C> {
    pub fn new(http: C, config: &WeatherConfig) -> Self {
        Self {
            http: UrlParam::appid(http, config.api_key.clone()),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            units: config.units,
        }
    }

    fn endpoint(&self, path: &str, city: &str) -> Result<Url, FetchError> {
        let raw = format!("{}/{}", self.base_url, path);
        Url::parse_with_params(&raw, &[("q", city), ("units", self.units.as_query())])
            .map_err(|e| FetchError::Document(format!("invalid url {raw}: {e}")))
    }
}

#[async_trait]
impl<C: HttpClient> WeatherApi for OpenWeatherMapClient<C> {
    #[tracing::instrument(skip(self))]
    async fn current(&self, city: &str) -> Result<CurrentConditions, FetchError> {
        let url = self.endpoint("weather", city)?;
        let bytes = fetch_bytes(&self.http, url.as_str(), city).await?;
        debug!(bytes = bytes.len(), "Current conditions received");

        Ok(parse_current(&bytes)?)
    }

    #[tracing::instrument(skip(self))]
    async fn forecast(&self, city: &str) -> Result<ForecastFeed, FetchError> {
        let url = self.endpoint("forecast", city)?;
        let bytes = fetch_bytes(&self.http, url.as_str(), city).await?;
        debug!(bytes = bytes.len(), "Forecast feed received");

        parse_forecast(&bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> WeatherConfig {
        WeatherConfig {
            api_key: "abc".into(),
            base_url: "https://api.example.test/data/2.5/".into(),
            units: Units::Metric,
            timeout_secs: 5,
        }
    }

    #[test]
    fn test_endpoint_encodes_city() {
        let client = OpenWeatherMapClient::from_config(&config()).unwrap();
        let url = client.endpoint("weather", "São Paulo").unwrap();

        assert_eq!(url.path(), "/data/2.5/weather");
        let pairs: Vec<(String, String)> = url
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();
        assert_eq!(
            pairs,
            [
                ("q".to_string(), "São Paulo".to_string()),
                ("units".to_string(), "metric".to_string())
            ]
        );
    }
}
