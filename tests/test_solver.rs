use std::sync::LazyLock;

use chrono::NaiveDate;
use solar_daylight::*;

macro_rules! assert_approx {
    ($left:expr, $right:expr, $tol:expr) => {
        let (l, r) = ($left as f64, $right as f64);
        assert!(
            (l - r).abs() <= $tol,
            "assert_approx failed: left={}, right={}, diff={}, tol={}",
            l, r, (l - r).abs(), $tol
        );
    };
}

const PERIHELION: &str = "20200105 07:48";
const SOLSTICE: &str = "20191222 04:19";

fn nyc_params() -> SunTimesParams {
    SunTimesParams::new(40.716, -74.017, 0.0, PERIHELION, SOLSTICE, -5.0)
        .unwrap()
        .with_dst(-4.0, "20200308", "20201101")
        .unwrap()
}

static NYC: LazyLock<Vec<SunRecord>> =
    LazyLock::new(|| compute_sun_times(&nyc_params()).unwrap());

static SYDNEY: LazyLock<Vec<SunRecord>> = LazyLock::new(|| {
    let params = SunTimesParams::new(-33.867, 151.200, 0.0, PERIHELION, SOLSTICE, 10.0)
        .unwrap()
        .with_dst(11.0, "20201004", "20200405")
        .unwrap();
    compute_sun_times(&params).unwrap()
});

static TROMSO: LazyLock<Vec<SunRecord>> = LazyLock::new(|| {
    let params = SunTimesParams::new(69.65, 18.96, 0.0, PERIHELION, SOLSTICE, 1.0).unwrap();
    compute_sun_times(&params).unwrap()
});

// ── New York 2020 ──

#[test]
fn test_nyc_has_leap_year_of_records() {
    assert_eq!(NYC.len(), 366);
}

#[test]
fn test_nyc_first_record() {
    let first = &NYC[0];
    assert_eq!(first.date, NaiveDate::from_ymd_opt(2020, 1, 1).unwrap());
    assert_eq!(date_label(&first.date), "Jan 01 2020");
    assert_eq!(first.day_of_year, 1);

    let sunrise = first.sunrise().unwrap();
    assert!(sunrise > 7.0 && sunrise < 7.5, "sunrise={}", sunrise);
    assert!(
        first.daylight_hours > 9.0 && first.daylight_hours < 9.5,
        "daylight={}",
        first.daylight_hours
    );
    assert_eq!(sunrise_clock(first, HourFormat::Twelve, false).as_deref(), Some(" 7:20AM"));
}

#[test]
fn test_nyc_records_in_day_order() {
    for (i, pair) in NYC.windows(2).enumerate() {
        assert_eq!(pair[0].day_of_year as usize, i + 1);
        assert_eq!(pair[1].date, pair[0].date.succ_opt().unwrap());
    }
    assert_eq!(NYC.last().unwrap().date, NaiveDate::from_ymd_opt(2020, 12, 31).unwrap());
}

#[test]
fn test_nyc_ordering_and_daylight_invariants() {
    for r in NYC.iter() {
        let (rise, set) = r.horizon.crossing().expect("mid-latitude always crosses");
        assert!(rise < r.solar_noon && r.solar_noon < set, "{:?}", r);
        assert!((r.daylight_hours - (set - rise)).abs() <= 1e-9, "{:?}", r);
    }
}

#[test]
fn test_nyc_solar_noon_near_midday() {
    for r in NYC.iter() {
        let standard_noon = if (68..306).contains(&r.day_of_year) {
            r.solar_noon - 1.0
        } else {
            r.solar_noon
        };
        assert_approx!(standard_noon, 12.0, 0.4);
    }
}

#[test]
fn test_nyc_dst_shifts_clock_times() {
    let before = &NYC[66];
    let after = &NYC[67];
    assert_approx!(after.solar_noon - before.solar_noon, 1.0, 0.01);
    assert_approx!(after.sunrise().unwrap() - before.sunrise().unwrap(), 1.0, 0.05);

    let last_dst = &NYC[304];
    let back = &NYC[305];
    assert_approx!(last_dst.sunset().unwrap() - back.sunset().unwrap(), 1.0, 0.03);
}

#[test]
fn test_nyc_rate_of_change_ignores_dst_jump() {
    for r in NYC.iter() {
        let rise = r.sunrise_change_mins.unwrap();
        let set = r.sunset_change_mins.unwrap();
        assert!(rise.abs() < 2.0 && set.abs() < 2.0, "{:?}", r);
    }
    assert_approx!(NYC[67].sunrise_change_mins.unwrap(), 1.6, 0.1);
}

#[test]
fn test_nyc_rate_of_change_signs() {
    // days lengthen in spring, shorten in autumn
    let spring = &NYC[90];
    assert!(spring.change_total_mins().unwrap() > 0.0);
    let autumn = &NYC[270];
    assert!(autumn.change_total_mins().unwrap() < 0.0);
    assert_approx!(
        spring.change_total_mins().unwrap(),
        spring.sunrise_change_mins.unwrap() + spring.sunset_change_mins.unwrap(),
        1e-12
    );
}

#[test]
fn test_rate_of_change_matches_neighbouring_days() {
    let params = nyc_params();
    let solver = DaySolver::new(&params);
    for day in [1u32, 68, 150, 306] {
        let prev = solver.neutral_day(day - 1).horizon;
        let current = solver.neutral_day(day).horizon;
        let (rise, set) = rate_of_change(&prev, &current);
        let record = &NYC[(day - 1) as usize];
        assert_approx!(rise.unwrap(), record.sunrise_change_mins.unwrap(), 1e-12);
        assert_approx!(set.unwrap(), record.sunset_change_mins.unwrap(), 1e-12);
    }
}

#[test]
fn test_nyc_solstice_separation() {
    let summary = summarize(&NYC).unwrap();
    let separation = summary.solstice_separation_days();
    assert!((180..=186).contains(&separation), "separation={}", separation);
    assert_eq!(summary.longest_day.date, NaiveDate::from_ymd_opt(2020, 6, 21).unwrap());
    assert_approx!(summary.longest_day.value, 15.09, 0.05);
    assert_approx!(summary.shortest_day.value, 9.25, 0.05);
    assert_eq!(summary.polar_days + summary.polar_nights, 0);
}

#[test]
fn test_elevation_lengthens_day() {
    let high = SunTimesParams::new(40.716, -74.017, 1000.0, PERIHELION, SOLSTICE, -5.0).unwrap();
    let records = compute_sun_times(&high).unwrap();
    assert!(records[0].daylight_hours > NYC[0].daylight_hours + 1.0);
}

// ── Sydney: wrapped DST window ──

#[test]
fn test_sydney_summer_in_january() {
    assert_eq!(SYDNEY.len(), 366);
    let summary = summarize(&SYDNEY).unwrap();
    assert!(summary.longest_day.date < NaiveDate::from_ymd_opt(2020, 1, 31).unwrap()
        || summary.longest_day.date > NaiveDate::from_ymd_opt(2020, 12, 1).unwrap());
    assert!(SYDNEY[0].daylight_hours > 14.0);
}

#[test]
fn test_sydney_dst_on_both_ends_of_year() {
    // Jan 1 on +11, Apr 5 (day 96) back to +10, Oct 4 (day 278) on +11
    assert_approx!(SYDNEY[0].solar_noon, 12.97, 0.05);
    assert_approx!(SYDNEY[95].solar_noon, 11.96, 0.05);
    assert_approx!(SYDNEY[277].solar_noon, 12.73, 0.05);
    for r in SYDNEY.iter() {
        assert!(r.sunrise_change_mins.unwrap().abs() < 2.0, "{:?}", r);
    }
}

// ── Polar ──

#[test]
fn test_tromso_polar_night_in_winter() {
    assert_eq!(TROMSO.len(), 366);
    let first = &TROMSO[0];
    assert_eq!(first.horizon, Horizon::PolarNight);
    assert_eq!(first.daylight_hours, 0.0);
    assert_eq!(first.sunrise(), None);
    assert_eq!(first.sunrise_change_mins, None);
    assert_eq!(first.change_total_mins(), None);
}

#[test]
fn test_tromso_polar_day_in_summer() {
    let midsummer = &TROMSO[172];
    assert_eq!(midsummer.horizon, Horizon::PolarDay);
    assert_eq!(midsummer.daylight_hours, 24.0);
    assert_eq!(midsummer.sunset(), None);
}

#[test]
fn test_tromso_continues_through_polar_days() {
    let summary = summarize(&TROMSO).unwrap();
    assert!(summary.polar_days > 50, "{:?}", summary);
    assert!(summary.polar_nights > 30, "{:?}", summary);
    let crossing = &TROMSO[100];
    let (rise, set) = crossing.horizon.crossing().unwrap();
    assert!(rise < crossing.solar_noon && crossing.solar_noon < set);
    assert!(crossing.sunrise_change_mins.is_some());
}

#[test]
fn test_rate_of_change_missing_next_to_polar_day() {
    for pair in TROMSO.windows(2) {
        if pair[0].horizon.crossing().is_none() && pair[1].horizon.crossing().is_some() {
            assert_eq!(pair[1].sunrise_change_mins, None);
            assert_eq!(pair[1].sunset_change_mins, None);
        }
    }
}

// ── Year handling ──

#[test]
fn test_non_leap_year() {
    let params =
        SunTimesParams::new(40.716, -74.017, 0.0, "20190103 05:20", "20181221 22:23", -5.0).unwrap();
    let records = compute_sun_times(&params).unwrap();
    assert_eq!(records.len(), 365);
    assert_eq!(records[364].date, NaiveDate::from_ymd_opt(2019, 12, 31).unwrap());
}

#[test]
fn test_no_dst_keeps_standard_noon() {
    let params = SunTimesParams::new(40.716, -74.017, 0.0, PERIHELION, SOLSTICE, -5.0).unwrap();
    let records = compute_sun_times(&params).unwrap();
    for r in &records {
        assert_approx!(r.solar_noon, 12.0, 0.4);
    }
}

// ── Validation ──

#[test]
fn test_rejects_negative_elevation() {
    assert_eq!(
        SunTimesParams::new(40.0, -74.0, -1.0, PERIHELION, SOLSTICE, -5.0),
        Err(SunTimesError::InvalidElevation { elevation: -1.0 })
    );
}

#[test]
fn test_rejects_malformed_perihelion() {
    let err = SunTimesParams::new(40.0, -74.0, 0.0, "2020-01-05 07:48", SOLSTICE, -5.0).unwrap_err();
    assert!(matches!(err, SunTimesError::MalformedDate { param: "perihelion_date", .. }));
}

#[test]
fn test_rejects_solstice_after_perihelion() {
    let err = SunTimesParams::new(40.0, -74.0, 0.0, PERIHELION, "20200620 21:43", -5.0).unwrap_err();
    assert!(matches!(err, SunTimesError::SolsticeOrder { .. }), "{:?}", err);
}

#[test]
fn test_rejects_distant_solstice() {
    let err = SunTimesParams::new(40.0, -74.0, 0.0, PERIHELION, "20190621 15:54", -5.0).unwrap_err();
    assert!(matches!(err, SunTimesError::SolsticeOrder { .. }), "{:?}", err);
}

#[test]
fn test_rejects_out_of_range_coordinates() {
    let err = SunTimesParams::new(95.0, -74.0, 0.0, PERIHELION, SOLSTICE, -5.0).unwrap_err();
    assert!(matches!(err, SunTimesError::OutOfRange { param: "latitude", .. }));
    let err = SunTimesParams::new(40.0, f64::NAN, 0.0, PERIHELION, SOLSTICE, -5.0).unwrap_err();
    assert!(matches!(err, SunTimesError::OutOfRange { param: "longitude", .. }));
}

#[test]
fn test_rejects_dst_outside_year() {
    let err = SunTimesParams::new(40.0, -74.0, 0.0, PERIHELION, SOLSTICE, -5.0)
        .unwrap()
        .with_dst(-4.0, "20210314", "20211107")
        .unwrap_err();
    assert_eq!(
        err,
        SunTimesError::DstYearMismatch {
            param: "dst_start_date",
            year: 2021,
            expected: 2020,
        }
    );
}

#[test]
fn test_compute_revalidates_mutated_params() {
    let mut params = nyc_params();
    params.elevation = -10.0;
    assert_eq!(
        compute_sun_times(&params),
        Err(SunTimesError::InvalidElevation { elevation: -10.0 })
    );
}

#[test]
fn test_custom_orbit_without_eccentricity_or_tilt() {
    let flat = OrbitalParams {
        eccentricity: 0.0,
        axial_tilt_deg: 0.0,
        ..OrbitalParams::EARTH
    };
    let params = SunTimesParams::new(0.0, -75.0, 0.0, PERIHELION, SOLSTICE, -5.0)
        .unwrap()
        .with_orbit(flat);
    let records = compute_sun_times(&params).unwrap();
    for r in &records {
        assert_approx!(r.solar_noon, 12.0, 1e-9);
        assert_approx!(r.daylight_hours, records[0].daylight_hours, 1e-9);
        assert_approx!(r.sunrise_change_mins.unwrap(), 0.0, 1e-9);
    }
}
