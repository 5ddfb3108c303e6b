use crate::types::{HourFormat, SunRecord};

/// Splits decimal hours into truncated `(hours, minutes, seconds)`.
///
/// The value is wrapped into a single day first.
pub fn split_decimal_hour(value: f64) -> (u32, u32, u32) {
    let wrapped = value.rem_euclid(24.0);
    let hours = wrapped.trunc();
    let minutes = (wrapped - hours) * 60.0;
    let seconds = minutes.fract() * 60.0;
    (
        (hours as u32) % 24,
        minutes.trunc() as u32,
        seconds.trunc() as u32,
    )
}

/// Formats decimal hours as a clock time, e.g. `11.5 -> "11:30:00"`.
///
/// Without seconds, 30 or more seconds round the minute up and may carry
/// into the hour. In twelve-hour mode `fixed_width` space-pads single-digit
/// hours, and midnight renders as `" 12"`. That is wider than a plain
/// single-digit rule, which would give `"12:00AM"`; keep the midnight case.
pub fn format_decimal_hour(
    value: f64,
    format: HourFormat,
    include_seconds: bool,
    fixed_width: bool,
) -> String {
    let (mut hours, mut minutes, seconds) = split_decimal_hour(value);

    if !include_seconds && seconds >= 30 {
        minutes += 1;
        if minutes == 60 {
            minutes = 0;
            hours = (hours + 1) % 24;
        }
    }

    let hour_field = match format {
        HourFormat::TwentyFour => format!("{hours:02}"),
        HourFormat::Twelve => {
            let display = match hours {
                0 => 12,
                h if h > 12 => h - 12,
                h => h,
            };
            if fixed_width && (display < 10 || hours == 0) {
                format!(" {display}")
            } else {
                display.to_string()
            }
        }
    };

    let mut clock = format!("{hour_field}:{minutes:02}");
    if include_seconds {
        clock.push_str(&format!(":{seconds:02}"));
    }
    if format == HourFormat::Twelve {
        clock.push_str(if hours < 12 { "AM" } else { "PM" });
    }
    clock
}

pub fn solar_noon_clock(record: &SunRecord, format: HourFormat, include_seconds: bool) -> String {
    format_decimal_hour(record.solar_noon, format, include_seconds, true)
}

pub fn sunrise_clock(
    record: &SunRecord,
    format: HourFormat,
    include_seconds: bool,
) -> Option<String> {
    record
        .sunrise()
        .map(|t| format_decimal_hour(t, format, include_seconds, true))
}

pub fn sunset_clock(record: &SunRecord, format: HourFormat, include_seconds: bool) -> Option<String> {
    record
        .sunset()
        .map(|t| format_decimal_hour(t, format, include_seconds, true))
}
