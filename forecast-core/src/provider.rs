use async_trait::async_trait;
use std::fmt::Debug;

use crate::{Config, ForecastError, ForecastSnapshot};

pub mod openweather;

/// Source of current-weather snapshots.
#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    async fn get_forecast(&self, config: &Config) -> Result<ForecastSnapshot, ForecastError>;
}
