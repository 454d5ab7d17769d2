//! Layered settings: built-in defaults, an optional file, then environment variables.
//!
//! Environment variables use the `USABILITY` prefix and `__` between sections,
//! e.g. `USABILITY__API__KEY` or `USABILITY__CRITERION__MAX_TEMP`.

use crate::error::UsabilityError;
use crate::types::criterion::UsabilityCriterion;
use crate::weather_data::page_source::WORLD_WEATHER_ONLINE_API;
use crate::world_weather::LatLon;
use config::{Config, Environment, File};
use secrecy::Secret;
use serde::Deserialize;
use std::path::{Path, PathBuf};

const ENV_PREFIX: &str = "USABILITY";
const ENV_SEPARATOR: &str = "__";

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub api: ApiSettings,
    pub site: SiteSettings,
    pub criterion: UsabilityCriterion,
    pub chart: ChartSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiSettings {
    pub endpoint: String,
    pub key: Secret<String>,
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SiteSettings {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl SiteSettings {
    pub fn location(&self) -> LatLon {
        LatLon(self.latitude, self.longitude)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChartSettings {
    pub path: PathBuf,
}

impl Settings {
    /// Loads settings, reading `path` (TOML, YAML or JSON by extension) when given.
    ///
    /// Everything except `api.key` has a default, which targets Hudson Yards.
    ///
    /// # Errors
    ///
    /// Returns [`UsabilityError::Settings`] if the file cannot be read or parsed,
    /// or if no API key was configured.
    pub fn load(path: Option<&Path>) -> Result<Self, UsabilityError> {
        Self::load_from(
            path,
            Environment::with_prefix(ENV_PREFIX)
                .separator(ENV_SEPARATOR)
                .try_parsing(true),
        )
    }

    fn load_from(path: Option<&Path>, environment: Environment) -> Result<Self, UsabilityError> {
        let criterion = UsabilityCriterion::hudson_yards();
        let mut builder = Config::builder()
            .set_default("api.endpoint", WORLD_WEATHER_ONLINE_API)?
            .set_default("api.timeout_secs", 30)?
            .set_default("site.name", "Hudson Yards")?
            .set_default("site.latitude", 40.754380)?
            .set_default("site.longitude", -74.000610)?
            .set_default("criterion.facing", criterion.facing)?
            .set_default("criterion.max_wind_projection", criterion.max_wind_projection)?
            .set_default("criterion.min_temp", criterion.min_temp)?
            .set_default("criterion.max_temp", criterion.max_temp)?
            .set_default("criterion.max_precipitation", criterion.max_precipitation)?
            .set_default("criterion.min_humidity", criterion.min_humidity)?
            .set_default("criterion.max_humidity", criterion.max_humidity)?
            .set_default("chart.path", "HudsonYardsWeatherData.svg")?;

        if let Some(path) = path {
            builder = builder.add_source(File::from(path).required(true));
        }

        let config = builder.add_source(environment).build()?;
        Ok(config.try_deserialize()?)
    }
}
