use async_trait::async_trait;
use std::fmt::Debug;

use crate::{
    error::FetchError,
    model::{CurrentConditions, ForecastResponse},
};

pub mod openweather;

pub use openweather::OpenWeatherProvider;

/// The three requests a screen load makes.
///
/// Implementations keep failures distinct; collapsing them into "no result" is up to the
/// caller.
#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    async fn current_conditions(&self) -> Result<CurrentConditions, FetchError>;

    async fn forecast(&self) -> Result<ForecastResponse, FetchError>;

    /// Image bytes for a condition's icon identifier, e.g. "01d".
    async fn condition_icon(&self, icon: &str) -> Result<Vec<u8>, FetchError>;
}
