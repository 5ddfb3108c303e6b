pub mod angles;
pub mod calendar;
pub mod clock;
pub mod error;
pub mod solver;
pub mod summary;
pub mod timezone;
pub mod types;

pub use angles::{
    deg_to_rad, equation_of_time, horizon_altitude, hour_angle_cosine, longitude_correction,
    phase_angle, rad_to_deg, solar_declination, DEGREES_PER_HOUR, HORIZON_DIP_FACTOR,
    MINUTES_PER_DAY, SOLAR_DISC_ALTITUDE,
};

pub use calendar::{
    date_label, day_of_year, days_in_year, doy_to_date, doy_to_month_day, fractional_day_of_year,
    leap_year, parse_date, parse_instant,
};

pub use clock::{
    format_decimal_hour, solar_noon_clock, split_decimal_hour, sunrise_clock, sunset_clock,
};

pub use error::SunTimesError;

pub use solver::{compute_sun_times, rate_of_change, DaySolver};

pub use summary::{summarize, DayValue, YearSummary};

pub use timezone::{build_schedule, schedule_for_days};

pub use types::{
    DaylightSaving, Horizon, HourFormat, NeutralDay, OrbitalParams, SunRecord, SunTimesParams,
};
