use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::config::RunConfig;

/// Yearly sunrise, sunset and day-length table for one location.
#[derive(Parser)]
#[command(
    name = "solar-daylight",
    version,
    about = "Daily solar noon, sunrise, sunset and day length for a year"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// TOML file with run parameters; flags override its values.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Latitude in degrees, north positive.
    #[arg(long = "lat", visible_alias = "latitude", allow_negative_numbers = true)]
    pub latitude: Option<f64>,

    /// Longitude in degrees, east positive.
    #[arg(long = "long", visible_alias = "longitude", allow_negative_numbers = true)]
    pub longitude: Option<f64>,

    /// Observer elevation in meters.
    #[arg(long = "elev", visible_alias = "elevation")]
    pub elevation: Option<f64>,

    /// Perihelion instant, UTC, as "YYYYMMDD HH:MM".
    #[arg(long = "peri", visible_alias = "perihelion-date")]
    pub perihelion: Option<String>,

    /// Previous solstice instant, UTC, as "YYYYMMDD HH:MM".
    #[arg(long = "sols", visible_alias = "solstice-date")]
    pub solstice: Option<String>,

    /// Standard UTC offset in hours.
    #[arg(long = "std-tz", allow_negative_numbers = true)]
    pub std_tz: Option<f64>,

    /// Daylight-saving UTC offset in hours.
    #[arg(long = "dst-tz", allow_negative_numbers = true)]
    pub dst_tz: Option<f64>,

    /// First day of daylight saving, "YYYYMMDD".
    #[arg(long = "dst-start")]
    pub dst_start: Option<String>,

    /// First day back on standard time, "YYYYMMDD".
    #[arg(long = "dst-end")]
    pub dst_end: Option<String>,

    /// Label printed at the start of every row.
    #[arg(long)]
    pub title: Option<String>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Render clock times in 24-hour format with seconds.
    #[arg(long = "24h")]
    pub twenty_four_hour: bool,

    /// Print longest/shortest day and extreme sunrise/sunset after the rows.
    #[arg(long)]
    pub summary: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

impl Cli {
    /// Run parameters given on the command line.
    pub fn overrides(&self) -> RunConfig {
        RunConfig {
            latitude: self.latitude,
            longitude: self.longitude,
            elevation: self.elevation,
            perihelion: self.perihelion.clone(),
            solstice: self.solstice.clone(),
            std_tz: self.std_tz,
            dst_tz: self.dst_tz,
            dst_start: self.dst_start.clone(),
            dst_end: self.dst_end.clone(),
            title: self.title.clone(),
        }
    }
}
