use chrono::NaiveDate;
use serde::Serialize;

use crate::types::{Horizon, SunRecord};

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DayValue {
    pub date: NaiveDate,
    pub value: f64,
}

/// Extremes over a year of records.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct YearSummary {
    pub longest_day: DayValue,
    pub shortest_day: DayValue,
    pub earliest_sunrise: Option<DayValue>,
    pub latest_sunset: Option<DayValue>,
    pub polar_days: usize,
    pub polar_nights: usize,
}

impl YearSummary {
    /// Days between the longest and the shortest day.
    pub fn solstice_separation_days(&self) -> i64 {
        (self.longest_day.date - self.shortest_day.date)
            .num_days()
            .abs()
    }
}

fn extreme<F>(records: &[SunRecord], value: F, want_max: bool) -> Option<DayValue>
where
    F: Fn(&SunRecord) -> Option<f64>,
{
    let values = records
        .iter()
        .filter_map(|r| value(r).map(|v| DayValue { date: r.date, value: v }));
    if want_max {
        values.max_by(|a, b| a.value.total_cmp(&b.value))
    } else {
        values.min_by(|a, b| a.value.total_cmp(&b.value))
    }
}

/// Returns `None` for an empty slice. Ties resolve to the latest date for
/// maxima and the earliest for minima.
pub fn summarize(records: &[SunRecord]) -> Option<YearSummary> {
    let daylight = |r: &SunRecord| Some(r.daylight_hours);
    Some(YearSummary {
        longest_day: extreme(records, daylight, true)?,
        shortest_day: extreme(records, daylight, false)?,
        earliest_sunrise: extreme(records, SunRecord::sunrise, false),
        latest_sunset: extreme(records, SunRecord::sunset, true),
        polar_days: records
            .iter()
            .filter(|r| r.horizon == Horizon::PolarDay)
            .count(),
        polar_nights: records
            .iter()
            .filter(|r| r.horizon == Horizon::PolarNight)
            .count(),
    })
}
