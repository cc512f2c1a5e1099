//! CLI entry point for the city forecast tool.
//!
//! Provides subcommands for a live forecast query against OpenWeatherMap and
//! for aggregating previously saved upstream documents.

use anyhow::{Context, Result};
use chrono::{DateTime, FixedOffset};
use city_forecast::clock::{Clock, SystemClock};
use city_forecast::config::{Units, WeatherConfig};
use city_forecast::infra::openweathermap::OpenWeatherMapClient;
use city_forecast::output::{append_forecast, print_json, print_pretty};
use city_forecast::render::{Renderer, TextRenderer};
use city_forecast::services::{ForecastService, aggregate_documents};
use clap::{Parser, Subcommand};
use std::ffi::OsStr;
use std::path::Path;
use tracing::info;
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

#[derive(Parser)]
#[command(name = "city_forecast")]
#[command(about = "Current conditions and a 3-day outlook for a city", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch and aggregate the forecast for a city
    Forecast {
        /// City to query, e.g. "Austin" or "Austin, TX"
        #[arg(value_name = "CITY")]
        city: String,

        /// CSV file to append one row per forecast day to
        #[arg(short, long)]
        output: Option<String>,

        /// Also log the result as JSON
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Aggregate saved current-conditions and forecast documents
    Aggregate {
        /// Path to a saved current-conditions JSON document
        #[arg(long, value_name = "FILE")]
        current: String,

        /// Path to a saved forecast JSON document
        #[arg(long, value_name = "FILE")]
        forecast: String,

        /// Instant to treat as "now" (RFC 3339), defaults to the wall clock
        #[arg(long, value_parser = parse_rfc3339)]
        now: Option<DateTime<FixedOffset>>,

        /// Unit system the documents were requested in
        #[arg(short, long, value_enum, default_value_t = Units::Imperial)]
        units: Units,

        /// Also log the result as JSON
        #[arg(long, default_value_t = false)]
        json: bool,
    },
}

fn parse_rfc3339(s: &str) -> Result<DateTime<FixedOffset>, chrono::ParseError> {
    DateTime::parse_from_rfc3339(s)
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok(); // Load .env file

    // Logging setup: colored stderr + JSON rolling log file
    let log_file_path =
        std::env::var("LOG_FILE_PATH").unwrap_or_else(|_| "logs/city_forecast.log".to_string());
    let log_dir = Path::new(&log_file_path)
        .parent()
        .unwrap_or(Path::new("logs"));
    let log_file_name = Path::new(&log_file_path)
        .file_name()
        .unwrap_or(OsStr::new("city_forecast.log"));

    let file_appender = tracing_appender::rolling::daily(log_dir, log_file_name);
    let (non_blocking_file, _file_guard) = tracing_appender::non_blocking(file_appender);

    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_filter(EnvFilter::from_env("RUST_LOG").add_directive("info".parse()?));

    let json_layer = fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(true)
        .with_writer(non_blocking_file)
        .with_filter(EnvFilter::from_env("RUST_LOG_JSON").add_directive("debug".parse()?));

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Forecast { city, output, json } => {
            let config = WeatherConfig::from_env()?;
            info!(base_url = %config.base_url, units = %config.units, "Configuration loaded");

            let api = OpenWeatherMapClient::from_config(&config)?;
            let service = ForecastService::new(api, SystemClock);

            let fetched_at = SystemClock.now();
            let result = service
                .forecast_for_city(&city)
                .await
                .with_context(|| format!("weather lookup for \"{city}\" failed"))?;

            println!("{}", TextRenderer::new(config.units).render(&result));
            print_pretty(&result);
            if json {
                print_json(&result)?;
            }
            if let Some(path) = output {
                append_forecast(&path, &result, config.units, fetched_at)?;
                info!(path = %path, days = result.days.len(), "Forecast appended");
            }
        }
        Commands::Aggregate {
            current,
            forecast,
            now,
            units,
            json,
        } => {
            let current_doc =
                std::fs::read(&current).with_context(|| format!("reading {current}"))?;
            let forecast_doc =
                std::fs::read(&forecast).with_context(|| format!("reading {forecast}"))?;
            let now = now.unwrap_or_else(|| SystemClock.now());

            let result = aggregate_documents(&current_doc, &forecast_doc, now)?;

            println!("{}", TextRenderer::new(units).render(&result));
            if json {
                print_json(&result)?;
            }
        }
    }

    Ok(())
}
