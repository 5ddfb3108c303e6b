use std::f64::consts::{PI, TAU};

use crate::types::OrbitalParams;

pub const DEGREES_PER_HOUR: f64 = 15.0;
pub const MINUTES_PER_DAY: f64 = 24.0 * 60.0;
/// Altitude of the solar disc centre at apparent sunrise, refraction included.
pub const SOLAR_DISC_ALTITUDE: f64 = -0.833;
pub const HORIZON_DIP_FACTOR: f64 = 2.076;

pub fn deg_to_rad(deg: f64) -> f64 {
    deg * (PI / 180.0)
}

pub fn rad_to_deg(rad: f64) -> f64 {
    rad * (180.0 / PI)
}

/// tan²(x/2) without a tangent call.
fn tan2_half(x: f64) -> f64 {
    (1.0 - x.cos()) / (1.0 + x.cos())
}

/// Phase angle in degrees between the solstice and perihelion.
pub fn phase_angle(days_solstice_to_perihelion: f64, orbit: &OrbitalParams) -> f64 {
    days_solstice_to_perihelion * orbit.phase_factor
}

/// Equation of time in minutes for a fractional day of the year.
///
/// Positive values mean the sundial runs ahead of the clock, so apparent
/// solar noon comes before 12:00 mean time. The sum is a truncated series in
/// the mean anomaly `m` and the phase angle `p`, with coefficients built from
/// the eccentricity and tan² of half the axial tilt.
pub fn equation_of_time(
    day: f64,
    phase_deg: f64,
    perihelion_day: f64,
    orbit: &OrbitalParams,
) -> f64 {
    let e = orbit.eccentricity;
    let e2 = e * e;
    let p = deg_to_rad(phase_deg);
    let tilt = deg_to_rad(orbit.axial_tilt_deg);
    let y = tan2_half(tilt);
    let y_ecc = tan2_half(tilt * (1.0 - 4.0 * e2));
    let m = TAU * (day - perihelion_day) / orbit.orbital_period_days;

    let series = y_ecc * (2.0 * (m + p)).sin()
        + 2.0 * e * m.sin()
        - 2.0 * e * y * (m + 2.0 * p).sin()
        + 2.0 * e * y * (3.0 * m + 2.0 * p).sin()
        + 0.5 * y * y * (4.0 * (m + p)).sin()
        + 1.25 * e2 * (2.0 * m).sin()
        - 2.0 * e * y * y * (3.0 * m + 4.0 * p).sin()
        + 2.0 * e * y * y * (5.0 * m + 4.0 * p).sin()
        + 3.25 * e2 * y * (4.0 * m + 2.0 * p).sin()
        + (y * y * y / 3.0) * (6.0 * (m + p)).sin();

    -series * MINUTES_PER_DAY / TAU
}

/// Solar declination in radians for a 0-based fractional day offset.
pub fn solar_declination(day_offset: f64, orbit: &OrbitalParams) -> f64 {
    let deg_per_day = 360.0 / orbit.orbital_period_days;
    let ecc_term = (360.0 / PI) * orbit.eccentricity;
    let anomaly = deg_per_day * (day_offset + 10.0)
        + ecc_term * deg_to_rad(deg_per_day * (day_offset - 2.0)).sin();
    -(deg_to_rad(orbit.axial_tilt_deg).sin() * deg_to_rad(anomaly).cos()).asin()
}

/// Altitude of the effective horizon in radians for an observer `elevation`
/// meters up: refraction and solar radius plus the dip of the horizon.
pub fn horizon_altitude(elevation: f64) -> f64 {
    deg_to_rad(SOLAR_DISC_ALTITUDE - HORIZON_DIP_FACTOR * (elevation / 60.0).sqrt())
}

/// Cosine of the sunrise hour angle. Outside [-1, 1] the sun never crosses
/// the horizon: below -1 it stays up, above 1 it stays down.
pub fn hour_angle_cosine(altitude: f64, latitude: f64, declination: f64) -> f64 {
    (altitude.sin() - latitude.sin() * declination.sin()) / (latitude.cos() * declination.cos())
}

/// Hours from the meridian of `std_tz` to `longitude`, east-positive.
pub fn longitude_correction(std_tz: f64, longitude: f64) -> f64 {
    (std_tz * DEGREES_PER_HOUR - longitude) / DEGREES_PER_HOUR
}
