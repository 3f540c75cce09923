//! Core library for the `skycast` weather screen.
//!
//! This crate defines:
//! - Response models for OpenWeather current conditions and 5-day forecast
//! - A generic fetch-and-decode client
//! - The OpenWeather provider and a screen loader that runs both requests
//! - Configuration & credentials handling
//!
//! It is used by `skycast-cli`, but any front end that owns a [`ScreenState`] can drive it.

pub mod config;
pub mod display;
pub mod error;
pub mod fetch;
pub mod model;
pub mod provider;
pub mod screen;

#[cfg(test)]
mod test_support;

pub use config::{Config, Endpoints, Location, Units};
pub use display::{ForecastRow, TemperatureDisplay};
pub use error::FetchError;
pub use fetch::FetchClient;
pub use model::{Condition, CurrentConditions, ForecastEntry, ForecastResponse, Measurements};
pub use provider::{OpenWeatherProvider, WeatherProvider};
pub use screen::{ConditionIcon, ScreenLoad, ScreenState, ScreenUpdate};
