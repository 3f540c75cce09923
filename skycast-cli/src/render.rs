use std::{
    fmt::{self, Display},
    path::Path,
};

use skycast_core::{ScreenState, Units, display::day_label};

const PLACEHOLDER: &str = "--";

/// Text rendering of a loaded screen. Regions without data show a placeholder.
pub fn screen(
    title: &str,
    state: &ScreenState,
    units: Units,
    saved_icon: Option<&Path>,
) -> String {
    ScreenView {
        title,
        state,
        units,
        saved_icon,
    }
    .to_string()
}

struct ScreenView<'a> {
    title: &'a str,
    state: &'a ScreenState,
    units: Units,
    saved_icon: Option<&'a Path>,
}

impl Display for ScreenView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state;
        writeln!(f, "{}", self.title)?;

        match state.temperatures(self.units) {
            Some(t) => writeln!(f, "  {}   {}  {}", t.current, t.min, t.max)?,
            None => writeln!(f, "  {PLACEHOLDER}")?,
        }

        if let Some(condition) = state.current.as_ref().and_then(|c| c.primary_condition()) {
            writeln!(f, "  {} ({})", condition.main, condition.description)?;
        }

        if let Some(icon) = &state.icon {
            write!(f, "  icon {}: {} bytes", icon.icon, icon.bytes.len())?;
            if let Some(path) = self.saved_icon {
                write!(f, ", saved to {}", path.display())?;
            }
            writeln!(f)?;
        }

        writeln!(f, "\nForecast")?;
        if state.forecast.is_empty() {
            return writeln!(f, "  {PLACEHOLDER}");
        }

        let mut current_day: Option<String> = None;
        for (entry, row) in state.forecast.iter().zip(state.forecast_rows(self.units)) {
            let day = day_label(entry);
            if day.is_some() && day != current_day {
                if let Some(label) = &day {
                    writeln!(f, "  {label}")?;
                }
                current_day = day;
            }

            let time = entry
                .slot_time()
                .map(|t| t.format("%H:%M").to_string())
                .unwrap_or(row.time);
            writeln!(f, "    {time}  {}", row.temperature)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use skycast_core::{
        Condition, ConditionIcon, CurrentConditions, ForecastEntry, Measurements, ScreenUpdate,
    };

    fn entry(timestamp: &str, temp: f64) -> ForecastEntry {
        ForecastEntry {
            main: Measurements {
                temp,
                temp_min: temp,
                temp_max: temp,
            },
            timestamp: timestamp.to_string(),
        }
    }

    #[test]
    fn empty_screen_shows_placeholders() {
        let out = screen("Seoul", &ScreenState::default(), Units::Metric, None);

        assert_eq!(out, "Seoul\n  --\n\nForecast\n  --\n");
    }

    #[test]
    fn renders_loaded_screen_grouped_by_day() {
        let mut state = ScreenState::default();
        state.apply(ScreenUpdate::Current(CurrentConditions {
            weather: vec![Condition {
                id: 800,
                main: "Clear".to_string(),
                description: "clear sky".to_string(),
                icon: "01d".to_string(),
            }],
            main: Measurements {
                temp: 21.3,
                temp_min: 19.0,
                temp_max: 23.0,
            },
        }));
        state.apply(ScreenUpdate::Icon(ConditionIcon {
            icon: "01d".to_string(),
            bytes: vec![0; 4],
        }));
        state.apply(ScreenUpdate::Forecast(vec![
            entry("2024-07-12 21:00:00", 20.4),
            entry("2024-07-13 00:00:00", 18.6),
            entry("later", 17.0),
        ]));

        let out = screen("Seoul", &state, Units::Metric, Some(Path::new("icon.png")));

        assert_eq!(
            out,
            "Seoul\n\
             \x20 21°C   min: 19°C  max: 23°C\n\
             \x20 Clear (clear sky)\n\
             \x20 icon 01d: 4 bytes, saved to icon.png\n\
             \n\
             Forecast\n\
             \x20 Fri 07-12\n\
             \x20   21:00  20°C\n\
             \x20 Sat 07-13\n\
             \x20   00:00  19°C\n\
             \x20   later  17°C\n"
        );
    }
}
