use crate::{
    Config, SearchError,
    model::{CurrentConditionsPayload, ForecastPayload},
    provider::openweather::OpenWeatherProvider,
};
use async_trait::async_trait;
use std::fmt::Debug;

pub mod openweather;

/// Source of raw current-conditions and forecast payloads.
///
/// Implementations issue exactly one request per call and never retry.
#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    async fn current_conditions(&self, city: &str)
    -> Result<CurrentConditionsPayload, SearchError>;

    async fn forecast(&self, city: &str) -> Result<ForecastPayload, SearchError>;
}

/// Construct the OpenWeather provider from config.
///
/// Fails when no API key is configured, so a missing credential surfaces at
/// startup instead of as a 401 on the first search.
pub fn provider_from_config(config: &Config) -> anyhow::Result<Box<dyn WeatherProvider>> {
    let api_key = config.api_key()?;

    let provider = OpenWeatherProvider::builder(api_key.to_owned())
        .base_url(config.base_url())
        .timeout(config.request_timeout())
        .build()?;

    Ok(Box::new(provider))
}
