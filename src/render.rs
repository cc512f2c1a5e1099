//! Presentation of a [`ForecastResult`].

use std::fmt::Write;

use crate::config::Units;
use crate::forecast::ForecastResult;
use crate::forecast::utility::round_half_up;

/// Turns a result into something a person can read.
pub trait Renderer {
    fn render(&self, result: &ForecastResult) -> String;
}

/// Plain-text card: current conditions followed by the day list.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextRenderer {
    pub units: Units,
}

impl TextRenderer {
    pub fn new(units: Units) -> Self {
        Self { units }
    }
}

impl Renderer for TextRenderer {
    fn render(&self, result: &ForecastResult) -> String {
        let current = &result.current;
        let mut out = String::new();

        let _ = writeln!(out, "{}", current.city_label);
        let _ = writeln!(
            out,
            "{}{}  {}",
            round_half_up(current.temperature),
            self.units.temperature_symbol(),
            capitalize(&current.condition_text)
        );
        let _ = writeln!(out, "Humidity: {}%", current.humidity_percent);
        let _ = writeln!(out, "Wind: {} {}", current.wind_speed, self.units.wind_unit());

        if !result.days.is_empty() {
            let _ = writeln!(out);
            let _ = writeln!(out, "{}-Day Forecast", result.days.len());
            for day in &result.days {
                let temps = format!("{}°/{}°", day.high, day.low);
                let _ = writeln!(
                    out,
                    "{:<10} {:>9}  {}",
                    day.label,
                    temps,
                    capitalize(&day.representative_condition)
                );
            }
        }

        out
    }
}

/// Upper-cases the first character ("light rain" -> "Light rain").
pub fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
