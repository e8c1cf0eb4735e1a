use approx::assert_abs_diff_eq;
use chrono::{Days, NaiveDate};
use proptest::prelude::*;

use crate::{
    math::{limit_degrees, limit_degrees180, limit_degrees180pm, limit_minutes, limit_zero2one},
    spa_calculate,
    time::julian_day,
    Mode, RiseTransitSet, SpaInput,
};

#[test]
fn third_order_polynomial_matches_expanded_form() {
    let x = 1.7;
    let expected = 2.0 * x * x * x - 3.0 * x * x + 0.5 * x + 4.0;
    assert_abs_diff_eq!(crate::math::third_order_polynomial(2.0, -3.0, 0.5, 4.0, x), expected, epsilon = 1e-12);
}

#[test]
fn mean_obliquity_polynomial_at_j2000() {
    assert_abs_diff_eq!(crate::geo::ecliptic_mean_obliquity(0.0), 84381.448, epsilon = 1e-9);
    assert_abs_diff_eq!(crate::math::polynomial(&[1.0, 2.0, 3.0], 2.0), 17.0, epsilon = 1e-12);
    assert_eq!(crate::math::polynomial(&[], 2.0), 0.0);
}

proptest! {
    #[test]
    fn limit_degrees_stays_in_range(degrees in -1.0e6..1.0e6_f64) {
        let limited = limit_degrees(degrees);
        prop_assert!((0.0..360.0).contains(&limited), "{degrees} -> {limited}");
        let turns = (degrees - limited) / 360.0;
        prop_assert!((turns - turns.round()).abs() < 1e-6, "{degrees} -> {limited}");
    }

    #[test]
    fn limit_degrees180pm_stays_in_range(degrees in -1.0e6..1.0e6_f64) {
        let limited = limit_degrees180pm(degrees);
        prop_assert!((-180.0..=180.0).contains(&limited), "{degrees} -> {limited}");
    }

    #[test]
    fn limit_degrees180_stays_in_range(degrees in -1.0e6..1.0e6_f64) {
        let limited = limit_degrees180(degrees);
        prop_assert!((0.0..180.0).contains(&limited), "{degrees} -> {limited}");
    }

    #[test]
    fn limit_zero2one_stays_in_range(value in -1.0e6..1.0e6_f64) {
        let limited = limit_zero2one(value);
        prop_assert!((0.0..1.0).contains(&limited), "{value} -> {limited}");
    }

    #[test]
    fn limit_minutes_folds_a_day_offset(
        minutes in prop_oneof![-20.0..=20.0_f64, 1420.5..1459.5_f64, -1459.5..-1420.5_f64]
    ) {
        let limited = limit_minutes(minutes);
        prop_assert!((-20.0..=20.0).contains(&limited), "{minutes} -> {limited}");
    }

    #[test]
    fn julian_day_advances_one_per_gregorian_day(days in 0u64..1_600_000) {
        let first = NaiveDate::from_ymd_opt(1582, 10, 15).unwrap();
        let today = first.checked_add_days(Days::new(days)).unwrap();
        let tomorrow = today.checked_add_days(Days::new(1)).unwrap();

        let jd = |date: NaiveDate| {
            use chrono::Datelike;
            julian_day(date.year(), date.month() as i32, date.day() as i32, 0, 0, 0.0, 0.0, 0.0)
        };
        prop_assert!((jd(tomorrow) - jd(today) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn julian_day_increases_through_the_day(
        year in -2000..6000_i32,
        month in 1..=12_i32,
        day in 1..=28_i32,
        seconds in 0u32..86_399,
    ) {
        // The calendar switch happens at noon of 1582-10-04 (Julian).
        prop_assume!(!(year == 1582 && month == 10));
        let (hour, minute, second) = ((seconds / 3600) as i32, (seconds / 60 % 60) as i32, f64::from(seconds % 60));
        let now = julian_day(year, month, day, hour, minute, second, 0.0, 0.0);
        let later = julian_day(year, month, day, hour, minute, second + 1.0, 0.0, 0.0);
        prop_assert!(later > now);
    }

    #[test]
    fn outputs_are_normalized(
        year in 1000..3000_i32,
        month in 1..=12_i32,
        day in 1..=28_i32,
        hour in 0..24_i32,
        minute in 0..60_i32,
        latitude in -89.0..89.0_f64,
        longitude in -180.0..180.0_f64,
        elevation in 0.0..4000.0_f64,
        delta_t in 0.0..120.0_f64,
        slope in 0.0..90.0_f64,
        azm_rotation in -180.0..180.0_f64,
    ) {
        let input = SpaInput::new(year, month, day, hour, minute, 0.0, 0.0, latitude, longitude)
            .with_elevation(elevation)
            .with_delta_t(delta_t)
            .with_slope(slope)
            .with_azm_rotation(azm_rotation);
        let output = spa_calculate(&input);

        prop_assert!((0.0..=180.0).contains(&output.zenith));
        prop_assert!((0.0..360.0).contains(&output.azimuth));
        prop_assert!((0.0..360.0).contains(&output.azimuth_astronomical));
        prop_assert_eq!(output.azimuth, limit_degrees(output.azimuth_astronomical + 180.0));
        prop_assert!((output.zenith + output.elevation - 90.0).abs() < 1e-9);

        let incidence = output.incidence.unwrap();
        prop_assert!((0.0..=180.0).contains(&incidence));

        let eot = output.equation_of_time.unwrap();
        prop_assert!((-20.0..=20.0).contains(&eot), "eot {}", eot);

        if let Some(RiseTransitSet::Occurs(times)) = output.rise_transit_set {
            for hours in [times.sunrise.hours(), times.transit.hours(), times.sunset.hours()] {
                prop_assert!((0.0..24.0).contains(&hours), "{:?}", times);
            }
        }

        prop_assert_eq!(spa_calculate(&input), output);
    }

    #[test]
    fn horizontal_surface_incidence_equals_zenith(
        year in 1900..2100_i32,
        month in 1..=12_i32,
        day in 1..=28_i32,
        hour in 0..24_i32,
        latitude in -89.0..89.0_f64,
        longitude in -180.0..180.0_f64,
        azm_rotation in -180.0..180.0_f64,
    ) {
        let input = SpaInput::new(year, month, day, hour, 0, 0.0, 0.0, latitude, longitude)
            .with_azm_rotation(azm_rotation)
            .with_mode(Mode::ZenithAzimuthIncidence);
        let output = spa_calculate(&input);
        prop_assert!((output.incidence.unwrap() - output.zenith).abs() < 1e-4);
    }
}
