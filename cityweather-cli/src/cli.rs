use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, Subcommand};
use cityweather_core::{Config, SearchError, Theme, WeatherClient, WeatherReport};
use inquire::{Password, PasswordDisplayMode, Text};

use crate::{interactive, render};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "cityweather", version, about = "City weather lookup")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store the OpenWeather API key and default city.
    Configure,

    /// Show current weather and the midday forecast for a city.
    Show {
        /// City name, e.g. "London".
        city: String,

        /// Use the dark palette.
        #[arg(long)]
        dark: bool,
    },

    /// Interactive session with favorites and theme toggle.
    Session,
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<ExitCode> {
        match self.command {
            Command::Configure => {
                configure()?;
                Ok(ExitCode::SUCCESS)
            }
            Command::Show { city, dark } => {
                let config = Config::load()?.with_env_overrides();
                let client = WeatherClient::from_config(&config)?;
                let theme = if dark { Theme::Dark } else { Theme::Light };

                Ok(show(client.search(&city).await, theme))
            }
            Command::Session => {
                let config = Config::load()?.with_env_overrides();
                let client = WeatherClient::from_config(&config)?;
                interactive::run(&client, config.default_city()).await?;
                Ok(ExitCode::SUCCESS)
            }
        }
    }
}

/// Print a one-shot result. Any search failure exits non-zero.
fn show(result: Result<WeatherReport, SearchError>, theme: Theme) -> ExitCode {
    match result {
        Ok(report) => {
            print!("{}", render::report(&report, theme));
            ExitCode::SUCCESS
        }
        Err(err) => {
            print_notice(&err, theme);
            ExitCode::FAILURE
        }
    }
}

fn configure() -> anyhow::Result<()> {
    let mut config = Config::load()?;

    let api_key = Password::new("OpenWeather API key:")
        .with_display_mode(PasswordDisplayMode::Masked)
        .without_confirmation()
        .prompt()
        .context("Failed to read API key")?;
    if api_key.trim().is_empty() {
        anyhow::bail!("API key must not be empty");
    }
    config.set_api_key(api_key.trim().to_string());

    let city = Text::new("Default city:")
        .with_default(config.default_city())
        .prompt()
        .context("Failed to read default city")?;
    config.default_city = Some(city.trim().to_string()).filter(|c| !c.is_empty());

    config.save()?;
    println!("Saved configuration to {}", Config::config_file_path()?.display());
    Ok(())
}

pub fn print_notice(err: &SearchError, theme: Theme) {
    eprintln!("{}", render::notice(err, theme));
}
