use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Display category for a provider condition code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ConditionIcon {
    #[default]
    Clear,
    Cloud,
    Drizzle,
    Rain,
    Snow,
}

impl ConditionIcon {
    /// Map an OpenWeather icon code such as `"10d"` to a category.
    ///
    /// Only the two-digit prefix matters. Codes outside the table (mist,
    /// thunderstorm, garbage) resolve to `Clear`.
    pub fn from_provider_code(code: &str) -> Self {
        match code.get(..2) {
            Some("01") => Self::Clear,
            Some("02" | "03") => Self::Cloud,
            Some("04") => Self::Drizzle,
            Some("09" | "10") => Self::Rain,
            Some("13") => Self::Snow,
            _ => Self::Clear,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Clear => "Clear",
            Self::Cloud => "Cloud",
            Self::Drizzle => "Drizzle",
            Self::Rain => "Rain",
            Self::Snow => "Snow",
        }
    }

    pub fn glyph(&self) -> &'static str {
        match self {
            Self::Clear => "☀",
            Self::Cloud => "☁",
            Self::Drizzle => "🌦",
            Self::Rain => "🌧",
            Self::Snow => "❄",
        }
    }
}

/// Normalized current conditions for one location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherSnapshot {
    pub humidity_percent: u8,
    pub wind_speed_kmh: f64,
    pub temperature_celsius: i32,
    /// Name as returned by the provider. Identity key for favorites.
    pub location_name: String,
    pub condition_icon: ConditionIcon,
}

/// One midday reading of the forecast.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForecastEntry {
    pub date: NaiveDate,
    pub temperature_celsius: i32,
    pub condition_icon: ConditionIcon,
}

/// Midday readings, date ascending.
pub type ForecastSet = Vec<ForecastEntry>;

/// Full result of a successful search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherReport {
    pub snapshot: WeatherSnapshot,
    pub forecast: ForecastSet,
}

// Raw provider payloads. Only the fields the normalizers read are declared.

#[derive(Debug, Clone, Deserialize)]
pub struct CurrentMain {
    pub temp: f64,
    pub humidity: u8,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ForecastMain {
    pub temp: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WindReading {
    pub speed: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ConditionCode {
    pub icon: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CurrentConditionsPayload {
    pub name: String,
    pub main: CurrentMain,
    pub wind: WindReading,
    pub weather: Vec<ConditionCode>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ForecastReading {
    pub dt_txt: String,
    pub main: ForecastMain,
    pub weather: Vec<ConditionCode>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ForecastPayload {
    pub list: Vec<ForecastReading>,
}
