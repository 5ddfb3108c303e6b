use solar_daylight::{
    date_label, format_decimal_hour, solar_noon_clock, sunrise_clock, sunset_clock, Horizon,
    HourFormat, SunRecord, YearSummary,
};

fn horizon_word(horizon: &Horizon) -> &'static str {
    match horizon {
        Horizon::PolarDay => "polar day",
        Horizon::PolarNight => "polar night",
        Horizon::Crossed { .. } => "",
    }
}

fn change_field(change: Option<f64>) -> String {
    change.map_or_else(|| "  n/a".to_string(), |c| format!("{c:5.3}"))
}

/// One console row per record.
pub fn render_line(title: &str, record: &SunRecord, format: HourFormat) -> String {
    let seconds = format == HourFormat::TwentyFour;
    let word = horizon_word(&record.horizon);
    let sunrise = sunrise_clock(record, format, seconds).unwrap_or_else(|| word.to_string());
    let sunset = sunset_clock(record, format, seconds).unwrap_or_else(|| word.to_string());
    format!(
        "{title}: {}  Solar Noon = {}  Sunrise = {sunrise}  Sunset = {sunset}  Daylight(hrs) = {:5.3}  \
         Sunrise Change (mins) = {}  Sunset Change (mins) = {}",
        date_label(&record.date),
        solar_noon_clock(record, format, seconds),
        record.daylight_hours,
        change_field(record.sunrise_change_mins),
        change_field(record.sunset_change_mins),
    )
}

pub fn render_summary(summary: &YearSummary, format: HourFormat) -> Vec<String> {
    let seconds = format == HourFormat::TwentyFour;
    let mut lines = vec![
        format!(
            "Longest day: {} ({:.3} hrs)",
            date_label(&summary.longest_day.date),
            summary.longest_day.value
        ),
        format!(
            "Shortest day: {} ({:.3} hrs)",
            date_label(&summary.shortest_day.date),
            summary.shortest_day.value
        ),
    ];
    if let Some(rise) = summary.earliest_sunrise {
        lines.push(format!(
            "Earliest sunrise: {} at {}",
            date_label(&rise.date),
            format_decimal_hour(rise.value, format, seconds, false)
        ));
    }
    if let Some(set) = summary.latest_sunset {
        lines.push(format!(
            "Latest sunset: {} at {}",
            date_label(&set.date),
            format_decimal_hour(set.value, format, seconds, false)
        ));
    }
    if summary.polar_days + summary.polar_nights > 0 {
        lines.push(format!(
            "Polar days: {}  Polar nights: {}",
            summary.polar_days, summary.polar_nights
        ));
    }
    lines
}
