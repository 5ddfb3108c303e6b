//! Proleptic Gregorian day-of-year arithmetic and the date layouts the
//! solver accepts.

use chrono::{Datelike, NaiveDate, NaiveDateTime, Timelike};

use crate::error::SunTimesError;

pub const INSTANT_LAYOUT: &str = "%Y%m%d %H:%M";
pub const DATE_LAYOUT: &str = "%Y%m%d";
pub const LABEL_LAYOUT: &str = "%b %d %Y";

pub fn leap_year(year: i32) -> bool {
    (year % 400 == 0) || (year % 4 == 0 && year % 100 != 0)
}

pub fn days_in_year(year: i32) -> u32 {
    if leap_year(year) {
        366
    } else {
        365
    }
}

/// Day of year for a calendar date, `None` when the date does not exist.
pub fn day_of_year(year: i32, month: u32, day: u32) -> Option<u32> {
    NaiveDate::from_ymd_opt(year, month, day).map(|d| d.ordinal())
}

/// Calendar date for day `doy` of `year`, 1 being January 1.
pub fn doy_to_date(year: i32, doy: u32) -> Option<NaiveDate> {
    NaiveDate::from_yo_opt(year, doy)
}

pub fn doy_to_month_day(year: i32, doy: u32) -> Option<(u32, u32)> {
    doy_to_date(year, doy).map(|d| (d.month(), d.day()))
}

/// Day of year with the time of day as a fraction, e.g. Jan 5 12:00 -> 5.5.
pub fn fractional_day_of_year(instant: &NaiveDateTime) -> f64 {
    let minutes = instant.hour() * 60 + instant.minute();
    f64::from(instant.ordinal()) + f64::from(minutes) / 1440.0
}

/// Renders a date the way output rows label it: `Jan 01 2020`.
pub fn date_label(date: &NaiveDate) -> String {
    date.format(LABEL_LAYOUT).to_string()
}

/// Parses a `YYYYMMDD HH:MM` instant.
pub fn parse_instant(param: &'static str, value: &str) -> Result<NaiveDateTime, SunTimesError> {
    NaiveDateTime::parse_from_str(value.trim(), INSTANT_LAYOUT).map_err(|_| {
        SunTimesError::MalformedDate {
            param,
            value: value.to_string(),
            expected: "YYYYMMDD HH:MM",
        }
    })
}

/// Parses a `YYYYMMDD` calendar date.
pub fn parse_date(param: &'static str, value: &str) -> Result<NaiveDate, SunTimesError> {
    NaiveDate::parse_from_str(value.trim(), DATE_LAYOUT).map_err(|_| SunTimesError::MalformedDate {
        param,
        value: value.to_string(),
        expected: "YYYYMMDD",
    })
}
