//! Core library for the `cityweather` lookup tool.
//!
//! This crate defines:
//! - Configuration & credentials handling
//! - The OpenWeather provider and the `WeatherClient` that normalizes its data
//! - The in-memory favorites list and per-session view state
//!
//! It is used by `cityweather-cli`, but holds no UI and no hidden globals:
//! callers own a `Session` and pass it around.

pub mod client;
pub mod config;
pub mod error;
pub mod favorites;
pub mod model;
pub mod provider;
pub mod session;

pub use client::WeatherClient;
pub use config::Config;
pub use error::SearchError;
pub use favorites::FavoritesStore;
pub use model::{ConditionIcon, ForecastEntry, ForecastSet, WeatherReport, WeatherSnapshot};
pub use provider::WeatherProvider;
pub use session::{SearchOutcome, SearchTicket, Session, Theme};
