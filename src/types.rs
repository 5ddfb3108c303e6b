use chrono::{NaiveDate, NaiveDateTime};
use serde::Serialize;

/// Orbital constants that drive the equation of time and declination.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitalParams {
    pub eccentricity: f64,
    pub orbital_period_days: f64,
    pub axial_tilt_deg: f64,
    /// Degrees of phase per day elapsed between solstice and perihelion.
    pub phase_factor: f64,
}

impl OrbitalParams {
    pub const EARTH: Self = Self {
        eccentricity: 0.01671022,
        orbital_period_days: 365.25696,
        axial_tilt_deg: 23.4367,
        phase_factor: 1.032,
    };
}

impl Default for OrbitalParams {
    fn default() -> Self {
        Self::EARTH
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HourFormat {
    Twelve,
    TwentyFour,
}

/// Daylight-saving configuration as two fixed calendar boundaries.
///
/// When `end` falls before `start` in the year the window wraps across
/// January 1, as for southern-hemisphere locations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DaylightSaving {
    None,
    Window {
        offset: f64,
        start: NaiveDate,
        end: NaiveDate,
    },
}

/// Inputs for one location and year. Longitude is east-positive.
#[derive(Debug, Clone, PartialEq)]
pub struct SunTimesParams {
    pub latitude: f64,
    pub longitude: f64,
    pub elevation: f64,
    pub perihelion: NaiveDateTime,
    pub solstice: NaiveDateTime,
    pub std_tz: f64,
    pub dst: DaylightSaving,
    pub orbit: OrbitalParams,
}

/// How the sun relates to the horizon on a given day.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Horizon {
    Crossed { sunrise: f64, sunset: f64 },
    /// The sun never drops below the corrected horizon.
    PolarDay,
    /// The sun never climbs above the corrected horizon.
    PolarNight,
}

impl Horizon {
    pub fn crossing(&self) -> Option<(f64, f64)> {
        match *self {
            Horizon::Crossed { sunrise, sunset } => Some((sunrise, sunset)),
            Horizon::PolarDay | Horizon::PolarNight => None,
        }
    }

    pub fn shifted(self, hours: f64) -> Self {
        match self {
            Horizon::Crossed { sunrise, sunset } => Horizon::Crossed {
                sunrise: sunrise + hours,
                sunset: sunset + hours,
            },
            other => other,
        }
    }

    pub fn daylight_hours(&self) -> f64 {
        match *self {
            Horizon::Crossed { sunrise, sunset } => sunset - sunrise,
            Horizon::PolarDay => 24.0,
            Horizon::PolarNight => 0.0,
        }
    }
}

/// Solar noon and horizon crossings for one day, without any DST shift.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NeutralDay {
    pub solar_noon: f64,
    pub horizon: Horizon,
}

/// One calendar day of output. Times are decimal hours of local clock time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SunRecord {
    pub date: NaiveDate,
    pub day_of_year: u32,
    pub solar_noon: f64,
    pub horizon: Horizon,
    pub daylight_hours: f64,
    /// Minutes sunrise moved earlier than the previous day, DST-neutral.
    pub sunrise_change_mins: Option<f64>,
    /// Minutes sunset moved later than the previous day, DST-neutral.
    pub sunset_change_mins: Option<f64>,
}

impl SunRecord {
    pub fn sunrise(&self) -> Option<f64> {
        self.horizon.crossing().map(|(rise, _)| rise)
    }

    pub fn sunset(&self) -> Option<f64> {
        self.horizon.crossing().map(|(_, set)| set)
    }

    pub fn change_total_mins(&self) -> Option<f64> {
        Some(self.sunrise_change_mins? + self.sunset_change_mins?)
    }
}
