pub mod forecast;
pub mod weather_api;

pub use forecast::{ForecastService, aggregate_documents, local_now};
pub use weather_api::WeatherApi;
