use clap::Parser;
use std::{ffi::OsString, time::Duration};
use tracing::debug;

use forecast_core::{
    Config, ForecastError, OpenWeatherProvider, Report, WeatherProvider, lookup, present,
};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(
    name = "forecast",
    version,
    about = "Print the current weather for a city (API key from WMAP_API_KEY)"
)]
pub struct Cli {
    /// City name; defaults to Tokyo when empty or absent.
    #[arg(long)]
    pub location: Option<String>,

    /// Give up on the request after this many seconds. No limit by default.
    #[arg(long, value_name = "SECONDS")]
    pub timeout: Option<u64>,
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        let report = self
            .fetch_report(Config::from_env, |timeout| {
                let provider: Box<dyn WeatherProvider> =
                    Box::new(OpenWeatherProvider::new(timeout)?);
                Ok(provider)
            })
            .await?;

        present::print_report(&report)?;
        Ok(())
    }

    /// Resolve config, build the provider, and look up the report.
    ///
    /// `make_provider` is only called once `resolve` has succeeded, so a missing
    /// key never reaches the network.
    async fn fetch_report<R, P>(self, resolve: R, make_provider: P) -> anyhow::Result<Report>
    where
        R: FnOnce(Option<String>) -> Result<Config, ForecastError>,
        P: FnOnce(Option<Duration>) -> Result<Box<dyn WeatherProvider>, ForecastError>,
    {
        let config = resolve(self.location)?;
        debug!(city = %config.city, "resolved location");

        let provider = make_provider(self.timeout.map(Duration::from_secs))?;
        Ok(lookup(provider.as_ref(), &config).await?)
    }
}

/// Rewrite Go-style single-dash long flags (`-location`) into `--location`.
///
/// Single-letter flags like `-h` and anything after `--` are left alone.
pub fn normalize_args<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut out = Vec::new();
    let mut passthrough = false;

    for (i, arg) in args.into_iter().enumerate() {
        let arg: OsString = arg.into();

        if i == 0 || passthrough {
            out.push(arg);
            continue;
        }

        let rewritten = match arg.to_str() {
            Some("--") => {
                passthrough = true;
                None
            }
            Some(s) if is_single_dash_long(s) => Some(OsString::from(format!("-{s}"))),
            _ => None,
        };

        out.push(rewritten.unwrap_or(arg));
    }

    out
}

fn is_single_dash_long(arg: &str) -> bool {
    let Some(rest) = arg.strip_prefix('-') else {
        return false;
    };
    let name = rest.split('=').next().unwrap_or_default();

    !rest.starts_with('-') && name.len() > 1 && name.chars().all(|c| c.is_ascii_alphabetic())
}
