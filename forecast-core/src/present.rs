use std::fmt;
use std::io::{self, Write};

use crate::ForecastSnapshot;

/// Offset between Kelvin and Celsius.
pub const KELVIN_OFFSET: f64 = 273.15;

/// Label shown when the service sends no condition entries.
pub const UNKNOWN_CONDITION: &str = "Unknown";

pub fn kelvin_to_celsius(kelvin: f64) -> f64 {
    kelvin - KELVIN_OFFSET
}

/// Kelvin reading rendered as Celsius with two decimals, e.g. `"26.00"`.
pub fn format_celsius(kelvin: f64) -> String {
    format!("{:.2}", kelvin_to_celsius(kelvin))
}

pub fn format_humidity(humidity: i64) -> String {
    humidity.to_string()
}

/// The four values printed for a snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub condition: String,
    pub max_celsius: String,
    pub min_celsius: String,
    pub humidity: String,
}

impl Report {
    pub fn from_snapshot(snapshot: &ForecastSnapshot) -> Self {
        let condition = snapshot
            .primary_condition()
            .map(|w| w.main.clone())
            .unwrap_or_else(|| UNKNOWN_CONDITION.to_string());
        let t = snapshot.temperature();

        Self {
            condition,
            max_celsius: format_celsius(t.temp_max),
            min_celsius: format_celsius(t.temp_min),
            humidity: format_humidity(t.humidity),
        }
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "weather = {}", self.condition)?;
        writeln!(f, "Temperature Max = {}", self.max_celsius)?;
        writeln!(f, "Temperature Min = {}", self.min_celsius)?;
        writeln!(f, "Temperature Humidity = {}", self.humidity)
    }
}

pub fn write_report<W: Write>(out: &mut W, report: &Report) -> io::Result<()> {
    write!(out, "{report}")?;
    out.flush()
}

/// Print `report` to standard output.
pub fn print_report(report: &Report) -> io::Result<()> {
    write_report(&mut io::stdout().lock(), report)
}
