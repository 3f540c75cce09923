//! Text the presentation layer shows for decoded values.

use crate::{
    config::Units,
    model::{ForecastEntry, Measurements},
};

/// Rounded temperature labels for the current-conditions header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemperatureDisplay {
    pub current: String,
    pub min: String,
    pub max: String,
}

impl TemperatureDisplay {
    pub fn new(main: &Measurements, units: Units) -> Self {
        let suffix = units.temperature_suffix();
        Self {
            current: format!("{}{suffix}", round_temp(main.temp)),
            min: format!("min: {}{suffix}", round_temp(main.temp_min)),
            max: format!("max: {}{suffix}", round_temp(main.temp_max)),
        }
    }
}

/// One line of the forecast list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForecastRow {
    pub time: String,
    pub temperature: String,
}

impl ForecastRow {
    pub fn new(entry: &ForecastEntry, units: Units) -> Self {
        Self {
            time: entry.timestamp.clone(),
            temperature: format!("{}{}", round_temp(entry.main.temp), units.temperature_suffix()),
        }
    }
}

/// Day heading such as "Fri 07-12", or `None` when the timestamp isn't in the API format.
pub fn day_label(entry: &ForecastEntry) -> Option<String> {
    entry.slot_time().map(|t| t.format("%a %m-%d").to_string())
}

fn round_temp(value: f64) -> i64 {
    // `as` saturates on out-of-range and maps NaN to 0.
    value.round() as i64
}
