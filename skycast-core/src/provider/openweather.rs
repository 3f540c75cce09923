use async_trait::async_trait;
use reqwest::Url;
use tracing::{info, warn};

use crate::{
    config::{Config, Endpoints, Location, Units},
    error::FetchError,
    fetch::FetchClient,
    model::{CurrentConditions, ForecastResponse},
};

use super::WeatherProvider;

const CURRENT_ENDPOINT: &str = "weather";
const FORECAST_ENDPOINT: &str = "forecast";

#[derive(Debug, Clone)]
pub struct OpenWeatherProvider {
    api_key: Option<String>,
    location: Location,
    units: Units,
    endpoints: Endpoints,
    http: FetchClient,
}

impl OpenWeatherProvider {
    pub fn new(
        api_key: Option<String>,
        location: Location,
        units: Units,
        endpoints: Endpoints,
    ) -> Self {
        Self {
            api_key,
            location,
            units,
            endpoints,
            http: FetchClient::new(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        if config.api_key().is_none() {
            warn!(
                "No OpenWeather API key configured; requests will be sent without `appid`. \
                 Run `skycast configure` or set OPENWEATHER_API_KEY."
            );
        }

        Self::new(
            config.api_key.clone(),
            config.location.clone(),
            config.units,
            config.endpoints.clone(),
        )
    }

    /// Replace the underlying HTTP client.
    pub fn with_fetch_client(mut self, http: FetchClient) -> Self {
        self.http = http;
        self
    }

    pub fn location(&self) -> &Location {
        &self.location
    }

    pub fn units(&self) -> Units {
        self.units
    }

    pub fn current_conditions_url(&self) -> Result<Url, FetchError> {
        self.data_url(CURRENT_ENDPOINT)
    }

    pub fn forecast_url(&self) -> Result<Url, FetchError> {
        self.data_url(FORECAST_ENDPOINT)
    }

    /// `{icon_base}/img/wn/{icon}@2x.png`
    pub fn icon_url(&self, icon: &str) -> Result<Url, FetchError> {
        if icon.is_empty() || !icon.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(FetchError::MissingUrl {
                endpoint: "icon".to_string(),
                reason: format!("invalid icon identifier {icon:?}"),
            });
        }

        let base = self.endpoints.icon_base.trim_end_matches('/');
        let raw = format!("{base}/img/wn/{icon}@2x.png");
        Url::parse(&raw).map_err(|e| FetchError::MissingUrl {
            endpoint: "icon".to_string(),
            reason: e.to_string(),
        })
    }

    fn data_url(&self, endpoint: &str) -> Result<Url, FetchError> {
        let api_base = self.endpoints.api_base.trim_end_matches('/');
        let base = format!("{api_base}/data/2.5/{endpoint}");
        let lat = self.location.lat.to_string();
        let lon = self.location.lon.to_string();

        let mut params = vec![("lat", lat.as_str()), ("lon", lon.as_str())];
        if let Some(key) = self.api_key.as_deref() {
            params.push(("appid", key));
        }
        params.push(("units", self.units.as_str()));

        Url::parse_with_params(&base, &params).map_err(|e| FetchError::MissingUrl {
            endpoint: endpoint.to_string(),
            reason: e.to_string(),
        })
    }
}

#[async_trait]
impl WeatherProvider for OpenWeatherProvider {
    async fn current_conditions(&self) -> Result<CurrentConditions, FetchError> {
        info!(location = %self.location.name, "fetching current conditions");
        let url = self.current_conditions_url()?;
        self.http.get_json(url).await
    }

    async fn forecast(&self) -> Result<ForecastResponse, FetchError> {
        info!(location = %self.location.name, "fetching 5-day forecast");
        let url = self.forecast_url()?;
        self.http.get_json(url).await
    }

    async fn condition_icon(&self, icon: &str) -> Result<Vec<u8>, FetchError> {
        let url = self.icon_url(icon)?;
        self.http.get_bytes(url).await
    }
}
