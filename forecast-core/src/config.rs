use tracing::debug;

use crate::error::ForecastError;

/// OpenWeather "current weather" endpoint.
pub const DEFAULT_ENDPOINT: &str = "http://api.openweathermap.org/data/2.5/weather";

/// City used when no location is given on the command line.
pub const DEFAULT_CITY: &str = "Tokyo";

/// Environment variable holding the OpenWeather API key.
pub const API_KEY_VAR: &str = "WMAP_API_KEY";

/// Optional environment variable overriding [`DEFAULT_ENDPOINT`].
pub const ENDPOINT_VAR: &str = "WMAP_API_URL";

/// Resolved settings for a single lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub api_key: String,
    pub city: String,
    pub endpoint: String,
}

impl Config {
    /// Build a config from an optional key and location.
    ///
    /// Fails with [`ForecastError::MissingApiKey`] when the key is absent or empty.
    /// An absent or blank location falls back to [`DEFAULT_CITY`].
    pub fn resolve(
        api_key: Option<String>,
        location: Option<String>,
    ) -> Result<Self, ForecastError> {
        let api_key = api_key
            .filter(|key| !key.is_empty())
            .ok_or(ForecastError::MissingApiKey)?;

        let city = location
            .filter(|loc| !loc.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_CITY.to_string());

        Ok(Self {
            api_key,
            city,
            endpoint: DEFAULT_ENDPOINT.to_string(),
        })
    }

    /// Resolve from the process environment.
    pub fn from_env(location: Option<String>) -> Result<Self, ForecastError> {
        Self::from_vars(|name| std::env::var(name).ok(), location)
    }

    /// Resolve using `lookup` in place of the process environment.
    pub fn from_vars<F>(lookup: F, location: Option<String>) -> Result<Self, ForecastError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut cfg = Self::resolve(lookup(API_KEY_VAR), location)?;

        if let Some(endpoint) = lookup(ENDPOINT_VAR).filter(|e| !e.is_empty()) {
            debug!(%endpoint, "using endpoint override from {ENDPOINT_VAR}");
            cfg.endpoint = endpoint;
        }

        Ok(cfg)
    }

    /// Replace the service endpoint.
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn vars(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn resolve_errors_when_key_missing() {
        let err = Config::resolve(None, Some("Osaka".into())).unwrap_err();
        assert!(matches!(err, ForecastError::MissingApiKey));
    }

    #[test]
    fn resolve_errors_when_key_empty() {
        let err = Config::resolve(Some(String::new()), None).unwrap_err();
        assert!(matches!(err, ForecastError::MissingApiKey));
    }

    #[test]
    fn resolve_defaults_city_when_location_absent() {
        let cfg = Config::resolve(Some("KEY".into()), None).expect("key is set");
        assert_eq!(cfg.city, DEFAULT_CITY);
        assert_eq!(cfg.endpoint, DEFAULT_ENDPOINT);
    }

    #[test]
    fn resolve_defaults_city_when_location_blank() {
        let cfg = Config::resolve(Some("KEY".into()), Some("".into())).unwrap();
        assert_eq!(cfg.city, DEFAULT_CITY);

        let cfg = Config::resolve(Some("KEY".into()), Some("   ".into())).unwrap();
        assert_eq!(cfg.city, DEFAULT_CITY);
    }

    #[test]
    fn resolve_keeps_given_location() {
        let cfg = Config::resolve(Some("KEY".into()), Some("London".into())).unwrap();
        assert_eq!(cfg.city, "London");
        assert_eq!(cfg.api_key, "KEY");
    }

    #[test]
    fn from_vars_reads_key_and_endpoint_override() {
        let lookup = vars(&[
            (API_KEY_VAR, "SECRET"),
            (ENDPOINT_VAR, "http://localhost:9999/weather"),
        ]);

        let cfg = Config::from_vars(lookup, None).unwrap();

        assert_eq!(cfg.api_key, "SECRET");
        assert_eq!(cfg.endpoint, "http://localhost:9999/weather");
    }

    #[test]
    fn from_vars_ignores_empty_endpoint_override() {
        let lookup = vars(&[(API_KEY_VAR, "SECRET"), (ENDPOINT_VAR, "")]);

        let cfg = Config::from_vars(lookup, Some("Paris".into())).unwrap();

        assert_eq!(cfg.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(cfg.city, "Paris");
    }

    #[test]
    fn from_vars_errors_without_key() {
        let lookup = vars(&[(ENDPOINT_VAR, "http://localhost:9999/weather")]);

        let err = Config::from_vars(lookup, None).unwrap_err();
        assert!(matches!(err, ForecastError::MissingApiKey));
    }
}
