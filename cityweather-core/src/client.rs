use chrono::NaiveDateTime;

use crate::{
    Config, SearchError,
    model::{
        ConditionCode, ConditionIcon, CurrentConditionsPayload, ForecastEntry, ForecastPayload,
        ForecastReading, ForecastSet, WeatherReport, WeatherSnapshot,
    },
    provider::{WeatherProvider, provider_from_config},
};

/// Marker the forecast filter keeps: one reading per day, at local noon.
pub const MIDDAY_MARKER: &str = "12:00:00";

const DT_TXT_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Looks up current conditions and the midday forecast for a city.
#[derive(Debug)]
pub struct WeatherClient {
    provider: Box<dyn WeatherProvider>,
}

impl WeatherClient {
    pub fn new(provider: Box<dyn WeatherProvider>) -> Self {
        Self { provider }
    }

    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        Ok(Self::new(provider_from_config(config)?))
    }

    /// Fetch and normalize weather for `city`.
    ///
    /// All or nothing: on any failure no snapshot is returned. Current
    /// conditions are fetched first and the forecast only if that succeeded.
    pub async fn search(&self, city: &str) -> Result<WeatherReport, SearchError> {
        let city = city.trim();
        if city.is_empty() {
            return Err(SearchError::EmptyInput);
        }

        let current = self.provider.current_conditions(city).await?;
        let forecast = self.provider.forecast(city).await?;

        let report = WeatherReport {
            snapshot: normalize_current(current)?,
            forecast: normalize_forecast(forecast)?,
        };

        tracing::debug!(
            location = %report.snapshot.location_name,
            forecast_days = report.forecast.len(),
            "search completed"
        );
        Ok(report)
    }
}

/// Largest humidity the provider can legitimately report.
const MAX_HUMIDITY: u8 = 100;

pub fn normalize_current(raw: CurrentConditionsPayload) -> Result<WeatherSnapshot, SearchError> {
    if raw.main.humidity > MAX_HUMIDITY {
        return Err(SearchError::network(format!(
            "humidity {}% out of range",
            raw.main.humidity
        )));
    }
    let condition_icon = first_icon(&raw.weather)?;

    Ok(WeatherSnapshot {
        humidity_percent: raw.main.humidity,
        wind_speed_kmh: raw.wind.speed,
        temperature_celsius: floor_celsius(raw.main.temp),
        location_name: raw.name,
        condition_icon,
    })
}

/// Keep the readings whose timestamp text contains the midday marker.
pub fn normalize_forecast(raw: ForecastPayload) -> Result<ForecastSet, SearchError> {
    raw.list
        .iter()
        .filter(|reading| reading.dt_txt.contains(MIDDAY_MARKER))
        .map(forecast_entry)
        .collect()
}

fn forecast_entry(reading: &ForecastReading) -> Result<ForecastEntry, SearchError> {
    let date = NaiveDateTime::parse_from_str(&reading.dt_txt, DT_TXT_FORMAT)
        .map_err(|err| {
            SearchError::network(format!(
                "unreadable forecast timestamp {:?}: {err}",
                reading.dt_txt
            ))
        })?
        .date();

    Ok(ForecastEntry {
        date,
        temperature_celsius: floor_celsius(reading.main.temp),
        condition_icon: first_icon(&reading.weather)?,
    })
}

fn first_icon(weather: &[ConditionCode]) -> Result<ConditionIcon, SearchError> {
    weather
        .first()
        .map(|w| ConditionIcon::from_provider_code(&w.icon))
        .ok_or_else(|| SearchError::network("response carried no weather condition"))
}

fn floor_celsius(raw: f64) -> i32 {
    raw.floor() as i32
}
