use serde::{Deserialize, Deserializer};

/// One entry of the `weather` array.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct WeatherCondition {
    /// Condition code. OpenWeather sends a number; the text form is kept.
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    /// Short label, e.g. "Clouds".
    pub main: String,
    pub description: String,
    pub icon: String,
}

/// The `main` block. Temperatures are in Kelvin, as delivered.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct TemperatureReading {
    pub temp: f64,
    #[serde(alias = "feels_like")]
    pub feel_like: f64,
    pub temp_min: f64,
    pub temp_max: f64,
    pub pressure: i64,
    pub humidity: i64,
}

/// A decoded current-weather response.
///
/// Fields are private so a snapshot cannot change after decoding.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ForecastSnapshot {
    weather: Vec<WeatherCondition>,
    #[serde(rename = "main")]
    temperature: TemperatureReading,
}

impl ForecastSnapshot {
    pub fn new(weather: Vec<WeatherCondition>, temperature: TemperatureReading) -> Self {
        Self {
            weather,
            temperature,
        }
    }

    pub fn conditions(&self) -> &[WeatherCondition] {
        &self.weather
    }

    /// First reported condition, if the service sent any.
    pub fn primary_condition(&self) -> Option<&WeatherCondition> {
        self.weather.first()
    }

    pub fn temperature(&self) -> &TemperatureReading {
        &self.temperature
    }
}

fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Int(i64),
        Float(f64),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Text(s) => s,
        Raw::Int(n) => n.to_string(),
        Raw::Float(n) => n.to_string(),
    })
}
