//! Output sinks for forecast results.
//!
//! Supports pretty-printing, JSON logging, and CSV append.

use anyhow::Result;
use chrono::{DateTime, FixedOffset, NaiveDate};
use csv::WriterBuilder;
use serde::Serialize;
use std::fs::OpenOptions;
use std::path::Path;
use tracing::{debug, info};

use crate::config::Units;
use crate::forecast::ForecastResult;

/// One CSV row: a single day of a single query.
#[derive(Debug, Serialize)]
pub struct ForecastRecord<'a> {
    pub fetched_at: DateTime<FixedOffset>,
    pub city: &'a str,
    pub units: Units,
    pub current_temperature: f64,
    pub current_condition: &'a str,
    pub label: &'a str,
    pub date: NaiveDate,
    pub high: i32,
    pub low: i32,
    pub condition: &'a str,
}

/// Flattens a result into one record per forecast day.
pub fn records<'a>(
    result: &'a ForecastResult,
    units: Units,
    fetched_at: DateTime<FixedOffset>,
) -> Vec<ForecastRecord<'a>> {
    result
        .days
        .iter()
        .map(|day| ForecastRecord {
            fetched_at,
            city: &result.current.city_label,
            units,
            current_temperature: result.current.temperature,
            current_condition: &result.current.condition_text,
            label: &day.label,
            date: day.date,
            high: day.high,
            low: day.low,
            condition: &day.representative_condition,
        })
        .collect()
}

/// Logs a result using Rust's debug pretty-print format.
pub fn print_pretty(result: &ForecastResult) {
    debug!("{:#?}", result);
}

/// Logs a result as pretty-printed JSON.
pub fn print_json(result: &ForecastResult) -> Result<()> {
    info!("{}", serde_json::to_string_pretty(result)?);
    Ok(())
}

/// Appends one row per forecast day of `result` to a CSV file.
///
/// Creates the file with headers if it does not already exist. A result
/// without days writes nothing.
pub fn append_forecast(
    path: &str,
    result: &ForecastResult,
    units: Units,
    fetched_at: DateTime<FixedOffset>,
) -> Result<()> {
    let rows = records(result, units, fetched_at);
    if rows.is_empty() {
        debug!(path, "No forecast days to append");
        return Ok(());
    }

    let file_exists = Path::new(path).exists();
    debug!(path, file_exists, rows = rows.len(), "Appending CSV records");

    let file = OpenOptions::new().append(true).create(true).open(path)?;

    let mut writer = WriterBuilder::new()
        .has_headers(!file_exists) // existing files already carry one
        .from_writer(file);

    for row in &rows {
        writer.serialize(row)?;
    }
    writer.flush()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forecast::{CurrentConditions, DaySummary};
    use std::env;
    use std::fs;

    fn temp_path(name: &str) -> String {
        format!("{}/{}", env::temp_dir().display(), name)
    }

    fn fetched_at() -> DateTime<FixedOffset> {
        DateTime::parse_from_rfc3339("2024-06-10T09:00:00-05:00").unwrap()
    }

    fn result(days: usize) -> ForecastResult {
        let labels = ["Tomorrow", "Day After", "Day 3"];
        ForecastResult {
            current: CurrentConditions {
                city_label: "Austin".into(),
                temperature: 88.4,
                condition_text: "clear sky".into(),
                humidity_percent: 40,
                wind_speed: 5.75,
            },
            days: (0..days)
                .map(|i| DaySummary {
                    label: labels[i].into(),
                    date: NaiveDate::from_ymd_opt(2024, 6, 11 + i as u32).unwrap(),
                    high: 90 + i as i32,
                    low: 70 + i as i32,
                    representative_condition: "light rain".into(),
                })
                .collect(),
        }
    }

    #[test]
    fn test_print_pretty_does_not_panic() {
        print_pretty(&result(1));
    }

    #[test]
    fn test_print_json_does_not_panic() {
        print_json(&result(3)).unwrap();
    }

    #[test]
    fn test_records_flatten_days() {
        let r = result(3);
        let rows = records(&r, Units::Imperial, fetched_at());

        assert_eq!(rows.len(), 3);
        assert_eq!(rows[2].label, "Day 3");
        assert_eq!(rows[2].city, "Austin");
        assert_eq!(rows[2].high, 92);
    }

    #[test]
    fn test_append_forecast_creates_file() {
        let path = temp_path("city_forecast_test_create.csv");
        let _ = fs::remove_file(&path); // clean up any prior run

        append_forecast(&path, &result(3), Units::Imperial, fetched_at()).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        let lines: Vec<_> = content.lines().collect();
        // 1 header + 3 days
        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("fetched_at,city,units"));
        assert!(lines[1].contains("Tomorrow,2024-06-11,90,70,light rain"));
        assert!(lines[1].contains("imperial"));

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_append_forecast_writes_header_once() {
        let path = temp_path("city_forecast_test_header.csv");
        let _ = fs::remove_file(&path);

        append_forecast(&path, &result(2), Units::Metric, fetched_at()).unwrap();
        append_forecast(&path, &result(2), Units::Metric, fetched_at()).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        let header_count = content.lines().filter(|l| l.contains("fetched_at")).count();
        assert_eq!(header_count, 1);
        assert_eq!(content.lines().count(), 5);

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_append_forecast_without_days_writes_nothing() {
        let path = temp_path("city_forecast_test_empty.csv");
        let _ = fs::remove_file(&path);

        append_forecast(&path, &result(0), Units::Imperial, fetched_at()).unwrap();

        assert!(!Path::new(&path).exists());
    }
}
