use chrono::Datelike;
use tracing::debug;

use crate::calendar;
use crate::error::SunTimesError;
use crate::types::DaylightSaving;

impl DaylightSaving {
    /// Builds the DST description from its three optional inputs.
    ///
    /// Boundary dates must come as a pair and need an offset. An offset
    /// without dates leaves the whole year on standard time.
    pub fn from_parts(
        offset: Option<f64>,
        start: Option<&str>,
        end: Option<&str>,
    ) -> Result<Self, SunTimesError> {
        match (start, end) {
            (None, None) => {
                if offset.is_some() {
                    debug!("DST offset given without boundary dates; using standard time");
                }
                Ok(DaylightSaving::None)
            }
            (Some(_), None) => Err(SunTimesError::IncompleteDst {
                missing: "dst_end_date",
            }),
            (None, Some(_)) => Err(SunTimesError::IncompleteDst {
                missing: "dst_start_date",
            }),
            (Some(start), Some(end)) => {
                let offset = offset.ok_or(SunTimesError::IncompleteDst { missing: "dst_tz" })?;
                Ok(DaylightSaving::Window {
                    offset,
                    start: calendar::parse_date("dst_start_date", start)?,
                    end: calendar::parse_date("dst_end_date", end)?,
                })
            }
        }
    }
}

/// UTC offset for every day of `year`, index 0 being January 1.
pub fn build_schedule(year: i32, std_tz: f64, dst: &DaylightSaving) -> Vec<f64> {
    let num_days = calendar::days_in_year(year);
    match *dst {
        DaylightSaving::None => vec![std_tz; num_days as usize],
        DaylightSaving::Window { offset, start, end } => {
            schedule_for_days(num_days, std_tz, offset, start.ordinal(), end.ordinal())
        }
    }
}

/// Offsets for days `1..=num_days` given DST boundary days of the year.
///
/// DST covers `[start_day, end_day)`. When `end_day < start_day` the window
/// wraps the year: `[end_day, start_day)` is standard and the rest is DST.
pub fn schedule_for_days(
    num_days: u32,
    std_tz: f64,
    dst_tz: f64,
    start_day: u32,
    end_day: u32,
) -> Vec<f64> {
    (1..=num_days)
        .map(|day| {
            let in_dst = if end_day >= start_day {
                day >= start_day && day < end_day
            } else {
                day < end_day || day >= start_day
            };
            if in_dst {
                dst_tz
            } else {
                std_tz
            }
        })
        .collect()
}
