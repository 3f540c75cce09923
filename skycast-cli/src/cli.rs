use std::{path::PathBuf, sync::Arc};

use anyhow::{Context, bail};
use clap::{Parser, Subcommand};
use inquire::{
    CustomType, CustomUserError, Password, PasswordDisplayMode, Text, validator::Validation,
};
use skycast_core::{Config, OpenWeatherProvider, ScreenState, screen};
use tracing::info;

use crate::render;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "skycast", version, about = "Current weather and 5-day forecast")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Set the OpenWeather API key and location.
    Configure,

    /// Fetch and show current conditions and the forecast.
    Show {
        /// Latitude override; requires --lon.
        #[arg(long, requires = "lon", allow_negative_numbers = true)]
        lat: Option<f64>,

        /// Longitude override; requires --lat.
        #[arg(long, requires = "lat", allow_negative_numbers = true)]
        lon: Option<f64>,

        /// Write the condition icon (PNG) to this path.
        #[arg(long)]
        icon_out: Option<PathBuf>,
    },
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        match self.command {
            Command::Configure => configure(),
            Command::Show { lat, lon, icon_out } => show(lat.zip(lon), icon_out).await,
        }
    }
}

fn configure() -> anyhow::Result<()> {
    // Read the file directly so an env override is never persisted.
    let mut cfg = Config::load_from(&Config::config_file_path()?)?;

    let hint = if cfg.api_key().is_some() { "leave empty to keep current" } else { "optional" };
    let key = Password::new(&format!("OpenWeather API key ({hint}):"))
        .without_confirmation()
        .with_display_mode(PasswordDisplayMode::Masked)
        .prompt()?;
    if !key.trim().is_empty() {
        cfg.set_api_key(&key);
    }

    let name = Text::new("Location name:").with_default(&cfg.location.name).prompt()?;

    let lat = CustomType::<f64>::new("Latitude:")
        .with_default(cfg.location.lat)
        .with_error_message("Please enter a number")
        .with_validator(|v: &f64| -> Result<Validation, CustomUserError> {
            Ok(if (-90.0..=90.0).contains(v) {
                Validation::Valid
            } else {
                Validation::Invalid("Latitude must be between -90 and 90".into())
            })
        })
        .prompt()?;

    let lon = CustomType::<f64>::new("Longitude:")
        .with_default(cfg.location.lon)
        .with_error_message("Please enter a number")
        .with_validator(|v: &f64| -> Result<Validation, CustomUserError> {
            Ok(if (-180.0..=180.0).contains(v) {
                Validation::Valid
            } else {
                Validation::Invalid("Longitude must be between -180 and 180".into())
            })
        })
        .prompt()?;

    cfg.set_location(name, lat, lon);
    let path = cfg.save()?;
    println!("Saved configuration to {}", path.display());

    Ok(())
}

async fn show(coords: Option<(f64, f64)>, icon_out: Option<PathBuf>) -> anyhow::Result<()> {
    let mut cfg = Config::load()?;

    if let Some((lat, lon)) = coords {
        if !(-90.0..=90.0).contains(&lat) || !(-180.0..=180.0).contains(&lon) {
            bail!("Coordinates out of range: lat must be in -90..=90, lon in -180..=180");
        }
        cfg.set_location(format!("{lat}, {lon}"), lat, lon);
    }

    let provider = OpenWeatherProvider::from_config(&cfg);
    let mut state = ScreenState::default();
    screen::load_into(Arc::new(provider), &mut state).await;
    info!(
        current = state.current.is_some(),
        icon = state.icon.is_some(),
        forecast = state.forecast.len(),
        "screen loaded"
    );

    let saved_icon = match (&icon_out, &state.icon) {
        (Some(path), Some(icon)) => {
            std::fs::write(path, &icon.bytes)
                .with_context(|| format!("Failed to write icon to {}", path.display()))?;
            Some(path.as_path())
        }
        _ => None,
    };

    print!("{}", render::screen(&cfg.location.name, &state, cfg.units, saved_icon));

    Ok(())
}
