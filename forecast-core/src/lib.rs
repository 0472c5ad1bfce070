//! Core library for the `forecast` CLI.
//!
//! This crate defines:
//! - Config resolution from the environment (API key, city, endpoint)
//! - The OpenWeather client behind the `WeatherProvider` trait
//! - The decoded response model and its console presentation
//!
//! It is used by `forecast-cli`, but the pieces can be driven on their own.

pub mod config;
pub mod error;
pub mod model;
pub mod present;
pub mod provider;

pub use config::Config;
pub use error::{ErrorKind, ForecastError};
pub use model::{ForecastSnapshot, TemperatureReading, WeatherCondition};
pub use present::Report;
pub use provider::{WeatherProvider, openweather::OpenWeatherProvider};

/// Fetch the current weather for `config` and turn it into a printable report.
pub async fn lookup(
    provider: &dyn WeatherProvider,
    config: &Config,
) -> Result<Report, ForecastError> {
    let snapshot = provider.get_forecast(config).await?;
    Ok(Report::from_snapshot(&snapshot))
}
