//! One screen load: current conditions, the condition icon, and the forecast list.
//!
//! The two data requests run as independent tasks. Results travel back to whoever owns
//! [`ScreenState`] over a channel, so presentation state is only touched by its owner.
//! Failures are logged and dropped; the affected region keeps its previous value.

use std::sync::Arc;

use tokio::{
    sync::mpsc::{self, UnboundedSender},
    task::JoinHandle,
};
use tracing::debug;

use crate::{
    config::Units,
    display::{ForecastRow, TemperatureDisplay},
    fetch::discard_failure,
    model::{CurrentConditions, ForecastEntry},
    provider::WeatherProvider,
};

/// A successful result on its way to the presentation owner.
#[derive(Debug, Clone, PartialEq)]
pub enum ScreenUpdate {
    Current(CurrentConditions),
    Icon(ConditionIcon),
    Forecast(Vec<ForecastEntry>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConditionIcon {
    pub icon: String,
    pub bytes: Vec<u8>,
}

/// Presentation state. Each field group is overwritten by the latest update for it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScreenState {
    pub current: Option<CurrentConditions>,
    pub icon: Option<ConditionIcon>,
    pub forecast: Vec<ForecastEntry>,
}

impl ScreenState {
    pub fn apply(&mut self, update: ScreenUpdate) {
        match update {
            ScreenUpdate::Current(current) => self.current = Some(current),
            ScreenUpdate::Icon(icon) => self.icon = Some(icon),
            ScreenUpdate::Forecast(entries) => self.forecast = entries,
        }
    }

    pub fn temperatures(&self, units: Units) -> Option<TemperatureDisplay> {
        self.current.as_ref().map(|c| TemperatureDisplay::new(&c.main, units))
    }

    pub fn forecast_rows(&self, units: Units) -> Vec<ForecastRow> {
        self.forecast.iter().map(|e| ForecastRow::new(e, units)).collect()
    }
}

/// Handles of the two tasks started by [`load`].
#[derive(Debug)]
pub struct ScreenLoad {
    current: JoinHandle<()>,
    forecast: JoinHandle<()>,
}

impl ScreenLoad {
    /// Wait for both tasks. A panicked task is logged, not propagated.
    pub async fn finished(self) {
        for (name, handle) in [("current", self.current), ("forecast", self.forecast)] {
            if let Err(err) = handle.await {
                tracing::error!(task = name, error = %err, "screen load task failed");
            }
        }
    }
}

/// Start a screen load. Updates are sent on `updates` as each request succeeds.
///
/// Must be called from within a tokio runtime.
pub fn load(
    provider: Arc<dyn WeatherProvider>,
    updates: UnboundedSender<ScreenUpdate>,
) -> ScreenLoad {
    let current = tokio::spawn(load_current(provider.clone(), updates.clone()));
    let forecast = tokio::spawn(load_forecast(provider, updates));

    ScreenLoad { current, forecast }
}

/// Run a whole screen load and apply every update to `state`.
pub async fn load_into(provider: Arc<dyn WeatherProvider>, state: &mut ScreenState) {
    let (tx, mut rx) = mpsc::unbounded_channel();
    let tasks = load(provider, tx);

    // Ends once both tasks have dropped their senders.
    while let Some(update) = rx.recv().await {
        state.apply(update);
    }

    tasks.finished().await;
}

async fn load_current(
    provider: Arc<dyn WeatherProvider>,
    updates: UnboundedSender<ScreenUpdate>,
) {
    let result = provider.current_conditions().await;
    let Some(current) = discard_failure(result, "current conditions") else {
        return;
    };

    let icon = current.primary_condition().map(|c| c.icon.clone());
    if !deliver(&updates, ScreenUpdate::Current(current)) {
        return;
    }

    let Some(icon) = icon else {
        debug!("no condition reported; skipping icon");
        return;
    };

    match provider.condition_icon(&icon).await {
        Ok(bytes) => {
            deliver(&updates, ScreenUpdate::Icon(ConditionIcon { icon, bytes }));
        }
        Err(err) => {
            debug!(
                %icon,
                kind = err.kind(),
                error = %err,
                "icon download failed; keeping previous image"
            );
        }
    }
}

async fn load_forecast(
    provider: Arc<dyn WeatherProvider>,
    updates: UnboundedSender<ScreenUpdate>,
) {
    let Some(forecast) = discard_failure(provider.forecast().await, "forecast") else {
        return;
    };

    for entry in &forecast.list {
        debug!(time = %entry.timestamp, temp = entry.main.temp, "forecast slot");
    }

    deliver(&updates, ScreenUpdate::Forecast(forecast.list));
}

/// Returns false when the state owner has gone away.
fn deliver(updates: &UnboundedSender<ScreenUpdate>, update: ScreenUpdate) -> bool {
    match updates.send(update) {
        Ok(()) => true,
        Err(_) => {
            debug!("screen is gone; dropping update");
            false
        }
    }
}
