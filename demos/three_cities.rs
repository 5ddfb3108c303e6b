use solar_daylight::{
    compute_sun_times, date_label, solar_noon_clock, summarize, sunrise_clock, sunset_clock,
    HourFormat, SunTimesParams, SunTimesError,
};

const PERIHELION: &str = "20200105 07:48";
const SOLSTICE: &str = "20191222 04:19";

fn print_city(title: &str, params: &SunTimesParams) -> Result<(), SunTimesError> {
    let records = compute_sun_times(params)?;

    println!("=== {} ({:.3}, {:.3}) ===", title, params.latitude, params.longitude);
    for record in records.iter().step_by(30) {
        println!(
            "{}  Solar Noon = {}  Sunrise = {}  Sunset = {}  Daylight = {:.3} hrs",
            date_label(&record.date),
            solar_noon_clock(record, HourFormat::TwentyFour, true),
            sunrise_clock(record, HourFormat::TwentyFour, true).unwrap_or_default(),
            sunset_clock(record, HourFormat::TwentyFour, true).unwrap_or_default(),
            record.daylight_hours,
        );
    }
    if let Some(summary) = summarize(&records) {
        println!(
            "Longest: {} ({:.3} hrs)  Shortest: {} ({:.3} hrs)",
            date_label(&summary.longest_day.date),
            summary.longest_day.value,
            date_label(&summary.shortest_day.date),
            summary.shortest_day.value,
        );
    }
    println!();
    Ok(())
}

fn main() -> Result<(), SunTimesError> {
    let nyc = SunTimesParams::new(40.716, -74.017, 0.0, PERIHELION, SOLSTICE, -5.0)?
        .with_dst(-4.0, "20200308", "20201101")?;
    print_city("NYC", &nyc)?;

    // DST ends in April and starts in October
    let sydney = SunTimesParams::new(-33.867, 151.200, 0.0, PERIHELION, SOLSTICE, 10.0)?
        .with_dst(11.0, "20201004", "20200405")?;
    print_city("Sydney", &sydney)?;

    let mexico_city = SunTimesParams::new(19.4326, -99.1332, 0.0, PERIHELION, SOLSTICE, -6.0)?
        .with_dst(-5.0, "20200405", "20201025")?;
    print_city("Mexico City", &mexico_city)?;

    Ok(())
}
