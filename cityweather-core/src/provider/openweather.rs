use std::time::Duration;

use anyhow::Context;
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, de::DeserializeOwned};

use crate::{
    SearchError,
    model::{CurrentConditionsPayload, ForecastPayload},
};

use super::WeatherProvider;

pub const DEFAULT_BASE_URL: &str = "https://api.openweathermap.org";

const CURRENT_PATH: &str = "/data/2.5/weather";
const FORECAST_PATH: &str = "/data/2.5/forecast";

#[derive(Debug, Clone)]
pub struct OpenWeatherProvider {
    api_key: String,
    base_url: String,
    http: Client,
}

#[derive(Debug, Clone)]
pub struct OpenWeatherProviderBuilder {
    api_key: String,
    base_url: String,
    timeout: Option<Duration>,
}

impl OpenWeatherProviderBuilder {
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// No timeout by default: a hung request blocks that search.
    pub fn timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn build(self) -> anyhow::Result<OpenWeatherProvider> {
        let mut http = Client::builder();
        if let Some(timeout) = self.timeout {
            http = http.timeout(timeout);
        }
        let http = http.build().context("Failed to build HTTP client for OpenWeather")?;

        Ok(OpenWeatherProvider {
            api_key: self.api_key,
            base_url: self.base_url,
            http,
        })
    }
}

impl OpenWeatherProvider {
    pub fn builder(api_key: String) -> OpenWeatherProviderBuilder {
        OpenWeatherProviderBuilder {
            api_key,
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: None,
        }
    }

    async fn fetch<T: DeserializeOwned>(
        &self,
        path: &str,
        what: &str,
        city: &str,
    ) -> Result<T, SearchError> {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!(%url, city, "requesting OpenWeather {what}");

        let res = self
            .http
            .get(&url)
            .query(&[
                ("q", city),
                ("units", "metric"),
                ("appid", self.api_key.as_str()),
            ])
            .send()
            .await
            .inspect_err(|err| {
                tracing::warn!(error = %err, "OpenWeather {what} request failed");
            })?;

        let status = res.status();
        let body = res.text().await?;

        if !status.is_success() {
            let message = provider_message(&body).unwrap_or_else(|| {
                format!(
                    "{what} request failed with status {status}: {}",
                    truncate_body(&body)
                )
            });
            tracing::warn!(%status, %message, "OpenWeather {what} returned an error");
            return Err(SearchError::provider(message));
        }

        let parsed = serde_json::from_str(&body).inspect_err(|err| {
            tracing::warn!(error = %err, "OpenWeather {what} body did not parse");
        })?;
        Ok(parsed)
    }
}

#[async_trait]
impl WeatherProvider for OpenWeatherProvider {
    async fn current_conditions(
        &self,
        city: &str,
    ) -> Result<CurrentConditionsPayload, SearchError> {
        self.fetch(CURRENT_PATH, "current weather", city).await
    }

    async fn forecast(&self, city: &str) -> Result<ForecastPayload, SearchError> {
        self.fetch(FORECAST_PATH, "forecast", city).await
    }
}

/// OpenWeather error bodies look like `{"cod":"404","message":"city not found"}`.
#[derive(Debug, Deserialize)]
struct OwErrorBody {
    message: Option<String>,
}

fn provider_message(body: &str) -> Option<String> {
    serde_json::from_str::<OwErrorBody>(body)
        .ok()
        .and_then(|b| b.message)
        .filter(|m| !m.is_empty())
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    match body.char_indices().nth(MAX) {
        Some((idx, _)) => format!("{}...", &body[..idx]),
        None => body.to_string(),
    }
}
