use async_trait::async_trait;
use reqwest::{Client, Url};
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, info, warn};

use crate::{Config, ForecastError, ForecastSnapshot};

use super::WeatherProvider;

/// Client for the OpenWeather current-weather endpoint.
#[derive(Debug, Clone)]
pub struct OpenWeatherProvider {
    http: Client,
}

impl OpenWeatherProvider {
    /// Client with reqwest defaults. `timeout` of `None` means no explicit limit.
    pub fn new(timeout: Option<Duration>) -> Result<Self, ForecastError> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        let http = builder.build().map_err(|source| ForecastError::Transport {
            context: "build HTTP client",
            source,
        })?;

        Ok(Self { http })
    }

    /// Issue one GET and return the whole body.
    ///
    /// The response is consumed by `text()` or dropped on the error path, so the
    /// connection is released either way. Request URLs carry the API key and are
    /// stripped from transport errors.
    pub async fn fetch(&self, config: &Config) -> Result<String, ForecastError> {
        let url = request_url(&config.endpoint, &config.city, &config.api_key)?;
        debug!(endpoint = %config.endpoint, city = %config.city, "requesting current weather");

        let res = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|source| ForecastError::Transport {
                context: "send request to OpenWeather",
                source: source.without_url(),
            })?;

        let status = res.status();
        let body = res.text().await.map_err(|source| ForecastError::Transport {
            context: "read OpenWeather response body",
            source: source.without_url(),
        })?;

        if !status.is_success() {
            warn!(%status, "OpenWeather returned an error status");
            return Err(ForecastError::Status {
                status,
                message: service_message(&body),
            });
        }

        info!(%status, bytes = body.len(), "received current weather");
        Ok(body)
    }
}

#[async_trait]
impl WeatherProvider for OpenWeatherProvider {
    async fn get_forecast(&self, config: &Config) -> Result<ForecastSnapshot, ForecastError> {
        let body = self.fetch(config).await?;
        decode_forecast(&body)
    }
}

/// `<endpoint>?q=<city>&appid=<api_key>`, with both values percent-encoded.
pub fn request_url(endpoint: &str, city: &str, api_key: &str) -> Result<Url, ForecastError> {
    Url::parse_with_params(endpoint, &[("q", city), ("appid", api_key)]).map_err(|e| {
        ForecastError::InvalidEndpoint {
            endpoint: endpoint.to_string(),
            reason: e.to_string(),
        }
    })
}

/// Parse a full response body into a snapshot.
pub fn decode_forecast(body: &str) -> Result<ForecastSnapshot, ForecastError> {
    Ok(serde_json::from_str(body)?)
}

/// Error payload OpenWeather sends with non-success statuses.
#[derive(Debug, Deserialize)]
struct OwErrorBody {
    message: Option<String>,
}

fn service_message(body: &str) -> String {
    serde_json::from_str::<OwErrorBody>(body)
        .ok()
        .and_then(|e| e.message)
        .filter(|m| !m.is_empty())
        .unwrap_or_else(|| truncate_body(body))
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    match body.char_indices().nth(MAX) {
        Some((idx, _)) => format!("{}...", &body[..idx]),
        None => body.to_string(),
    }
}
