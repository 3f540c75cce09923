use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Format of `dt_txt` in forecast entries, e.g. "2024-07-12 15:00:00".
pub const SLOT_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Body of `GET /data/2.5/weather`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentConditions {
    pub weather: Vec<Condition>,
    pub main: Measurements,
}

impl CurrentConditions {
    /// The first reported condition, if the API sent any.
    pub fn primary_condition(&self) -> Option<&Condition> {
        self.weather.first()
    }
}

/// One weather phenomenon, e.g. "Rain" or "Clear".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Condition {
    pub id: i64,
    pub main: String,
    pub description: String,
    pub icon: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Measurements {
    pub temp: f64,
    pub temp_min: f64,
    pub temp_max: f64,
}

/// Body of `GET /data/2.5/forecast`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastResponse {
    pub list: Vec<ForecastEntry>,
}

/// A single 3-hour forecast slot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastEntry {
    pub main: Measurements,
    #[serde(rename = "dt_txt")]
    pub timestamp: String,
}

impl ForecastEntry {
    /// Parses the display timestamp. The stored text is left untouched.
    pub fn slot_time(&self) -> Option<NaiveDateTime> {
        NaiveDateTime::parse_from_str(&self.timestamp, SLOT_TIME_FORMAT).ok()
    }
}
