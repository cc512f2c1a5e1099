use crate::error::ForecastError;
use crate::forecast::label::day_label;
use crate::forecast::types::{CurrentConditions, DaySummary, ForecastResult, RawSample};
use crate::forecast::utility::{max, min, modal, round_half_up};
use chrono::{DateTime, NaiveDate, TimeZone};
use std::collections::BTreeMap;
use tracing::debug;

/// Number of days after today that make it into a [`ForecastResult`].
pub const MAX_FORECAST_DAYS: usize = 3;

/// Temperatures and condition texts of all usable samples sharing a date.
#[derive(Debug, Default)]
struct Bucket {
    temps: Vec<f64>,
    conditions: Vec<String>,
}

impl Bucket {
    fn summarize(&self, index: usize, date: NaiveDate) -> Option<DaySummary> {
        Some(DaySummary {
            label: day_label(index),
            date,
            high: round_half_up(max(&self.temps)?),
            low: round_half_up(min(&self.temps)?),
            representative_condition: modal(&self.conditions)?.to_string(),
        })
    }
}

/// Reduces a forecast feed into per-day summaries for the days after `now`.
///
/// Samples are grouped by their calendar date in the timezone of `now`.
/// Today's bucket is skipped, the remaining dates are taken in ascending
/// order and at most [`MAX_FORECAST_DAYS`] of them are kept.
///
/// Samples with a missing or non-finite temperature, a missing or blank
/// condition, or a timestamp chrono cannot represent are dropped without
/// failing the call. Input order does not matter except for tie-breaking the
/// representative condition, where the earliest first occurrence wins.
///
/// # Errors
///
/// Returns [`ForecastError::InvalidInput`] if `current` fails validation.
pub fn aggregate<Tz: TimeZone>(
    current: CurrentConditions,
    samples: &[RawSample],
    now: DateTime<Tz>,
) -> Result<ForecastResult, ForecastError> {
    current.validate()?;

    let (buckets, malformed) = bucket_samples(samples, &now);
    if malformed > 0 {
        debug!(malformed, total = samples.len(), "Excluded malformed forecast samples");
    }

    let days = buckets
        .iter()
        .take(MAX_FORECAST_DAYS)
        .enumerate()
        .filter_map(|(i, (date, bucket))| bucket.summarize(i, *date))
        .collect();

    Ok(ForecastResult { current, days })
}

/// Groups the usable samples not falling on `now`'s date by calendar date.
/// Also returns how many samples were malformed.
fn bucket_samples<Tz: TimeZone>(
    samples: &[RawSample],
    now: &DateTime<Tz>,
) -> (BTreeMap<NaiveDate, Bucket>, usize) {
    let tz = now.timezone();
    let today = now.date_naive();

    let mut buckets: BTreeMap<NaiveDate, Bucket> = BTreeMap::new();
    let mut malformed = 0;

    for sample in samples {
        let reading = sample.reading();
        let instant = DateTime::from_timestamp(sample.timestamp_seconds, 0);
        let (Some((temperature, condition)), Some(instant)) = (reading, instant) else {
            malformed += 1;
            continue;
        };

        let date = instant.with_timezone(&tz).date_naive();
        if date == today {
            continue;
        }

        let bucket = buckets.entry(date).or_default();
        bucket.temps.push(temperature);
        bucket.conditions.push(condition.to_string());
    }

    (buckets, malformed)
}
