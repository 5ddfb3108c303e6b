use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;
use solar_daylight::{DaylightSaving, SunTimesParams};

const DEFAULT_TITLE: &str = "No Title";

/// Run parameters as read from a TOML file or the command line.
#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RunConfig {
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub elevation: Option<f64>,
    pub perihelion: Option<String>,
    pub solstice: Option<String>,
    pub std_tz: Option<f64>,
    pub dst_tz: Option<f64>,
    pub dst_start: Option<String>,
    pub dst_end: Option<String>,
    pub title: Option<String>,
}

fn required<T>(value: Option<T>, name: &str) -> Result<T> {
    value.with_context(|| format!("missing required parameter `{name}`"))
}

impl RunConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        Self::from_toml(&text).with_context(|| format!("parsing config {}", path.display()))
    }

    pub fn from_toml(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Values set in `overrides` win.
    pub fn merge(self, overrides: RunConfig) -> Self {
        Self {
            latitude: overrides.latitude.or(self.latitude),
            longitude: overrides.longitude.or(self.longitude),
            elevation: overrides.elevation.or(self.elevation),
            perihelion: overrides.perihelion.or(self.perihelion),
            solstice: overrides.solstice.or(self.solstice),
            std_tz: overrides.std_tz.or(self.std_tz),
            dst_tz: overrides.dst_tz.or(self.dst_tz),
            dst_start: overrides.dst_start.or(self.dst_start),
            dst_end: overrides.dst_end.or(self.dst_end),
            title: overrides.title.or(self.title),
        }
    }

    pub fn title(&self) -> &str {
        self.title.as_deref().unwrap_or(DEFAULT_TITLE)
    }

    pub fn to_params(&self) -> Result<SunTimesParams> {
        let dst = DaylightSaving::from_parts(
            self.dst_tz,
            self.dst_start.as_deref(),
            self.dst_end.as_deref(),
        )?;
        let params = SunTimesParams::new(
            required(self.latitude, "latitude")?,
            required(self.longitude, "longitude")?,
            required(self.elevation, "elevation")?,
            required(self.perihelion.as_deref(), "perihelion")?,
            required(self.solstice.as_deref(), "solstice")?,
            required(self.std_tz, "std_tz")?,
        )?
        .with_daylight_saving(dst);
        params.validate()?;
        Ok(params)
    }
}
