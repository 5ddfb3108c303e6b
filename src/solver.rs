use chrono::Datelike;
use tracing::{debug, instrument};

use crate::angles;
use crate::calendar;
use crate::error::SunTimesError;
use crate::timezone;
use crate::types::{DaylightSaving, Horizon, NeutralDay, OrbitalParams, SunRecord, SunTimesParams};

const MAX_UTC_OFFSET: f64 = 14.0;

impl SunTimesParams {
    /// Parses the perihelion and solstice instants (`YYYYMMDD HH:MM`) and
    /// validates the numeric inputs. DST defaults to none.
    pub fn new(
        latitude: f64,
        longitude: f64,
        elevation: f64,
        perihelion_date: &str,
        solstice_date: &str,
        std_tz: f64,
    ) -> Result<Self, SunTimesError> {
        let params = Self {
            latitude,
            longitude,
            elevation,
            perihelion: calendar::parse_instant("perihelion_date", perihelion_date)?,
            solstice: calendar::parse_instant("solstice_date", solstice_date)?,
            std_tz,
            dst: DaylightSaving::None,
            orbit: OrbitalParams::EARTH,
        };
        params.validate()?;
        Ok(params)
    }

    /// Adds a DST window from `YYYYMMDD` boundary dates.
    pub fn with_dst(self, offset: f64, start: &str, end: &str) -> Result<Self, SunTimesError> {
        let dst = DaylightSaving::from_parts(Some(offset), Some(start), Some(end))?;
        let params = self.with_daylight_saving(dst);
        params.validate()?;
        Ok(params)
    }

    pub fn with_daylight_saving(self, dst: DaylightSaving) -> Self {
        Self { dst, ..self }
    }

    pub fn with_orbit(self, orbit: OrbitalParams) -> Self {
        Self { orbit, ..self }
    }

    /// The computed year is the year of perihelion.
    pub fn year(&self) -> i32 {
        self.perihelion.year()
    }

    pub fn validate(&self) -> Result<(), SunTimesError> {
        check_range("latitude", self.latitude, -90.0, 90.0)?;
        check_range("longitude", self.longitude, -180.0, 180.0)?;
        if !self.elevation.is_finite() || self.elevation < 0.0 {
            return Err(SunTimesError::InvalidElevation {
                elevation: self.elevation,
            });
        }
        check_range("std_tz", self.std_tz, -MAX_UTC_OFFSET, MAX_UTC_OFFSET)?;
        check_range("eccentricity", self.orbit.eccentricity, 0.0, 0.99)?;
        check_range("orbital_period_days", self.orbit.orbital_period_days, 1.0, 1.0e6)?;
        check_range("axial_tilt_deg", self.orbit.axial_tilt_deg, -90.0, 90.0)?;
        check_range("phase_factor", self.orbit.phase_factor, -1.0e3, 1.0e3)?;

        let gap_days = self.days_solstice_to_perihelion();
        if gap_days <= 0.0 || gap_days >= self.orbit.orbital_period_days / 2.0 {
            return Err(SunTimesError::SolsticeOrder {
                solstice: self.solstice.format(calendar::INSTANT_LAYOUT).to_string(),
                perihelion: self.perihelion.format(calendar::INSTANT_LAYOUT).to_string(),
            });
        }

        if let DaylightSaving::Window { offset, start, end } = self.dst {
            check_range("dst_tz", offset, -MAX_UTC_OFFSET, MAX_UTC_OFFSET)?;
            for (param, date) in [("dst_start_date", start), ("dst_end_date", end)] {
                if date.year() != self.year() {
                    return Err(SunTimesError::DstYearMismatch {
                        param,
                        year: date.year(),
                        expected: self.year(),
                    });
                }
            }
        }
        Ok(())
    }

    fn days_solstice_to_perihelion(&self) -> f64 {
        (self.perihelion - self.solstice).num_seconds() as f64 / 86_400.0
    }
}

fn check_range(param: &'static str, value: f64, min: f64, max: f64) -> Result<(), SunTimesError> {
    if value.is_finite() && (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(SunTimesError::OutOfRange {
            param,
            value,
            min,
            max,
        })
    }
}

/// Per-run constants for solving individual days.
///
/// Every day is a pure function of its index, so days can be solved in any
/// order; only the rate of change in [`compute_sun_times`] needs sequence.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DaySolver {
    pub phase_deg: f64,
    pub perihelion_day: f64,
    altitude: f64,
    latitude: f64,
    longitude: f64,
    longitude_correction: f64,
    orbit: OrbitalParams,
}

impl DaySolver {
    pub fn new(params: &SunTimesParams) -> Self {
        Self {
            phase_deg: angles::phase_angle(params.days_solstice_to_perihelion(), &params.orbit),
            perihelion_day: calendar::fractional_day_of_year(&params.perihelion),
            altitude: angles::horizon_altitude(params.elevation),
            latitude: angles::deg_to_rad(params.latitude),
            longitude: params.longitude,
            longitude_correction: angles::longitude_correction(params.std_tz, params.longitude),
            orbit: params.orbit,
        }
    }

    /// Standard-time solar noon and horizon crossings for `day` (1 = Jan 1;
    /// 0 is Dec 31 of the previous year).
    pub fn neutral_day(&self, day: u32) -> NeutralDay {
        // local noon expressed as a fractional day at the zone meridian
        let t = f64::from(day) + 0.5 - self.longitude / 360.0;
        let declination = angles::solar_declination(t - 1.0, &self.orbit);
        let eot_hours =
            angles::equation_of_time(t, self.phase_deg, self.perihelion_day, &self.orbit) / 60.0;
        let solar_noon = 12.0 - eot_hours + self.longitude_correction;

        let cos_w = angles::hour_angle_cosine(self.altitude, self.latitude, declination);
        let horizon = if cos_w < -1.0 {
            Horizon::PolarDay
        } else if cos_w > 1.0 {
            Horizon::PolarNight
        } else {
            let w_hours = angles::rad_to_deg(cos_w.acos()) / angles::DEGREES_PER_HOUR;
            Horizon::Crossed {
                sunrise: solar_noon - w_hours,
                sunset: solar_noon + w_hours,
            }
        };
        NeutralDay {
            solar_noon,
            horizon,
        }
    }
}

/// Sunrise and sunset movement in minutes between two DST-neutral days.
///
/// Positive values mean the day got longer on that side.
pub fn rate_of_change(previous: &Horizon, current: &Horizon) -> (Option<f64>, Option<f64>) {
    match (previous.crossing(), current.crossing()) {
        (Some((prev_rise, prev_set)), Some((rise, set))) => {
            (Some((prev_rise - rise) * 60.0), Some((set - prev_set) * 60.0))
        }
        _ => (None, None),
    }
}

/// Computes one record per day of the perihelion year, in day order.
///
/// All validation happens before the first day is solved. Days without a
/// sunrise or sunset carry a polar [`Horizon`] and no rate of change.
#[instrument(skip(params), fields(latitude = params.latitude, longitude = params.longitude))]
pub fn compute_sun_times(params: &SunTimesParams) -> Result<Vec<SunRecord>, SunTimesError> {
    params.validate()?;

    let year = params.year();
    let first_day = calendar::doy_to_date(year, 1).ok_or_else(|| SunTimesError::MalformedDate {
        param: "perihelion_date",
        value: params.perihelion.to_string(),
        expected: "a year within the supported calendar range",
    })?;
    let schedule = timezone::build_schedule(year, params.std_tz, &params.dst);
    let solver = DaySolver::new(params);
    debug!(
        year,
        num_days = schedule.len(),
        phase_deg = solver.phase_deg,
        perihelion_day = solver.perihelion_day,
        "solving year"
    );

    let mut previous = solver.neutral_day(0).horizon;
    let mut records = Vec::with_capacity(schedule.len());
    for ((day, date), &tz) in (1u32..).zip(first_day.iter_days()).zip(&schedule) {
        let neutral = solver.neutral_day(day);
        let (sunrise_change_mins, sunset_change_mins) = rate_of_change(&previous, &neutral.horizon);
        if neutral.horizon.crossing().is_none() {
            debug!(day, horizon = ?neutral.horizon, "no sunrise or sunset");
        }

        let dst_shift = tz - params.std_tz;
        let horizon = neutral.horizon.shifted(dst_shift);
        records.push(SunRecord {
            date,
            day_of_year: day,
            solar_noon: neutral.solar_noon + dst_shift,
            horizon,
            daylight_hours: horizon.daylight_hours(),
            sunrise_change_mins,
            sunset_change_mins,
        });
        previous = neutral.horizon;
    }
    Ok(records)
}
