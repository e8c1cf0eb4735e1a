//! Reference values from NREL/TP-560-34302 (table A5.1) and the Julian Day
//! examples of Meeus, *Astronomical Algorithms*, chapter 7.

use std::string::ToString;

use approx::assert_abs_diff_eq;

use super::nrel_reference_input;
use crate::{
    spa::SpaContext,
    spa_calculate,
    time::{dayfrac_to_local_hr, julian_day},
    Mode, RiseTransitSet, SpaInput, SENTINEL,
};

#[test]
fn intermediate_values_match_nrel_example() {
    let input = nrel_reference_input();
    let jd = julian_day(
        input.year,
        input.month,
        input.day,
        input.hour,
        input.minute,
        input.second,
        input.delta_ut1,
        input.timezone,
    );
    assert_abs_diff_eq!(jd, 2452930.312847, epsilon = 1e-6);

    let mut ctx = SpaContext::new(jd);
    ctx.calculate_geocentric_sun(input.delta_t);
    assert_abs_diff_eq!(ctx.l, 24.0182616917, epsilon = 1e-8);
    assert_abs_diff_eq!(ctx.b, -0.0001011219, epsilon = 1e-9);
    assert_abs_diff_eq!(ctx.r, 0.9965422974, epsilon = 1e-9);
    assert_abs_diff_eq!(ctx.del_psi, -0.00399840, epsilon = 1e-8);
    assert_abs_diff_eq!(ctx.del_epsilon, 0.00166657, epsilon = 1e-8);
    assert_abs_diff_eq!(ctx.epsilon, 23.440465, epsilon = 1e-6);
    assert_abs_diff_eq!(ctx.lamda, 204.0085519281, epsilon = 1e-8);
    assert_abs_diff_eq!(ctx.alpha, 202.22741, epsilon = 1e-5);
    assert_abs_diff_eq!(ctx.delta, -9.31434, epsilon = 1e-5);

    ctx.calculate_topocentric_sun(&input);
    assert_abs_diff_eq!(ctx.h, 11.105902, epsilon = 1e-6);
    assert_abs_diff_eq!(ctx.h_prime, 11.106271, epsilon = 1e-6);
    assert_abs_diff_eq!(ctx.alpha_prime, 202.22704, epsilon = 1e-5);
    assert_abs_diff_eq!(ctx.delta_prime, -9.316179, epsilon = 1e-6);
}

#[test]
fn final_values_match_nrel_example() {
    let output = spa_calculate(&nrel_reference_input());

    assert_abs_diff_eq!(output.zenith, 50.111622, epsilon = 1e-6);
    assert_abs_diff_eq!(output.azimuth, 194.340241, epsilon = 1e-6);
    assert_abs_diff_eq!(output.azimuth_astronomical, 14.340241, epsilon = 1e-6);
    assert_abs_diff_eq!(output.elevation, 39.888378, epsilon = 1e-6);
    assert_abs_diff_eq!(output.incidence.unwrap(), 25.187000, epsilon = 1e-6);
    assert_abs_diff_eq!(output.equation_of_time.unwrap(), 14.641503, epsilon = 1e-4);
}

#[test]
fn rise_transit_set_match_nrel_example() {
    let output = spa_calculate(&nrel_reference_input());
    let Some(RiseTransitSet::Occurs(times)) = output.rise_transit_set else {
        panic!("expected the sun to rise and set, got {:?}", output.rise_transit_set);
    };

    assert_abs_diff_eq!(times.sunrise.hours(), 6.212067, epsilon = 1e-5);
    assert_abs_diff_eq!(times.transit.hours(), 11.768045, epsilon = 1e-5);
    assert_abs_diff_eq!(times.sunset.hours(), 17.338667, epsilon = 1e-5);
    assert_abs_diff_eq!(times.sunrise_hour_angle, -83.496338, epsilon = 1e-5);
    assert_abs_diff_eq!(times.sunset_hour_angle, 83.524274, epsilon = 1e-5);
    assert_abs_diff_eq!(times.transit_altitude, 40.954407, epsilon = 1e-5);

    assert_eq!(times.sunrise.to_string(), "06:12:43");
    assert_eq!(times.transit.to_string(), "11:46:04");
    assert_eq!(times.sunset.to_string(), "17:20:19");
}

#[test]
fn rise_transit_set_ignore_time_of_day_and_delta_ut1() {
    let noon = spa_calculate(&nrel_reference_input());
    let night = spa_calculate(&SpaInput {
        hour: 23,
        minute: 59,
        second: 59.5,
        delta_ut1: 0.4,
        ..nrel_reference_input()
    });
    assert_eq!(noon.rise_transit_set, night.rise_transit_set);
    assert_ne!(noon.zenith, night.zenith);
}

#[test]
fn julian_day_matches_published_examples() {
    let cases: [(i32, i32, i32, i32, i32, f64, f64); 16] = [
        (2000, 1, 1, 12, 0, 0.0, 2451545.0),
        (1999, 1, 1, 0, 0, 0.0, 2451179.5),
        (1987, 1, 27, 0, 0, 0.0, 2446822.5),
        (1987, 6, 19, 12, 0, 0.0, 2446966.0),
        (1988, 1, 27, 0, 0, 0.0, 2447187.5),
        (1988, 6, 19, 12, 0, 0.0, 2447332.0),
        (1900, 1, 1, 0, 0, 0.0, 2415020.5),
        (1600, 1, 1, 0, 0, 0.0, 2305447.5),
        (1600, 12, 31, 0, 0, 0.0, 2305812.5),
        (837, 4, 10, 7, 12, 0.0, 2026871.8),
        (-123, 12, 31, 0, 0, 0.0, 1676496.5),
        (-122, 1, 1, 0, 0, 0.0, 1676497.5),
        (-1000, 7, 12, 12, 0, 0.0, 1356001.0),
        (-1000, 2, 29, 0, 0, 0.0, 1355866.5),
        (-1001, 8, 17, 21, 36, 0.0, 1355671.4),
        (-4712, 1, 1, 12, 0, 0.0, 0.0),
    ];

    for (year, month, day, hour, minute, second, expected) in cases {
        let jd = julian_day(year, month, day, hour, minute, second, 0.0, 0.0);
        assert_abs_diff_eq!(jd, expected, epsilon = 1e-6);
    }
}

#[test]
fn julian_day_applies_timezone_and_delta_ut1() {
    let utc = julian_day(2003, 10, 17, 19, 30, 30.0, 0.0, 0.0);
    let local = julian_day(2003, 10, 17, 12, 30, 30.0, 0.0, -7.0);
    assert_abs_diff_eq!(utc, local, epsilon = 1e-9);

    let shifted = julian_day(2003, 10, 17, 19, 30, 30.0, 0.5, 0.0);
    assert_abs_diff_eq!(shifted - utc, 0.5 / 86400.0, epsilon = 1e-8);
}

#[test]
fn gregorian_reform_follows_julian_calendar() {
    // Thursday 4 October 1582 (Julian) was followed by Friday 15 October 1582 (Gregorian).
    let last_julian = julian_day(1582, 10, 4, 0, 0, 0.0, 0.0, 0.0);
    let first_gregorian = julian_day(1582, 10, 15, 0, 0, 0.0, 0.0, 0.0);
    assert_abs_diff_eq!(last_julian, 2299159.5, epsilon = 1e-9);
    assert_abs_diff_eq!(first_gregorian, 2299160.5, epsilon = 1e-9);
    assert_abs_diff_eq!(first_gregorian - last_julian, 1.0, epsilon = 1e-9);
}

#[test]
fn local_hours_wrap_around_midnight() {
    assert_abs_diff_eq!(dayfrac_to_local_hr(0.5, 0.0), 12.0, epsilon = 1e-12);
    assert_abs_diff_eq!(dayfrac_to_local_hr(0.1, -7.0), 24.0 * 0.1 - 7.0 + 24.0, epsilon = 1e-12);
    assert_abs_diff_eq!(dayfrac_to_local_hr(0.9, 5.0), 24.0 * 0.9 + 5.0 - 24.0, epsilon = 1e-12);
}

#[test]
fn mode_gates_optional_outputs() {
    let base = nrel_reference_input();

    let za = spa_calculate(&base.with_mode(Mode::ZenithAzimuth));
    assert!(za.incidence.is_none());
    assert!(za.equation_of_time.is_none());
    assert!(za.rise_transit_set.is_none());

    let inc = spa_calculate(&base.with_mode(Mode::ZenithAzimuthIncidence));
    assert!(inc.incidence.is_some());
    assert!(inc.equation_of_time.is_none());
    assert!(inc.rise_transit_set.is_none());

    let rts = spa_calculate(&base.with_mode(Mode::ZenithAzimuthRiseTransitSet));
    assert!(rts.incidence.is_none());
    assert!(rts.equation_of_time.is_some());
    assert!(rts.rise_transit_set.is_some());

    let all = spa_calculate(&base.with_mode(Mode::All));
    assert_eq!(all.incidence, inc.incidence);
    assert_eq!(all.equation_of_time, rts.equation_of_time);
    assert_eq!(all.rise_transit_set, rts.rise_transit_set);

    for output in [za, inc, rts] {
        assert_eq!(output.zenith, all.zenith);
        assert_eq!(output.azimuth, all.azimuth);
        assert_eq!(output.azimuth_astronomical, all.azimuth_astronomical);
    }
}

#[test]
fn polar_night_reports_sentinels() {
    let input = SpaInput::new(2003, 12, 21, 12, 0, 0.0, 0.0, 80.0, 0.0).with_mode(Mode::ZenithAzimuthRiseTransitSet);
    let output = spa_calculate(&input);

    assert_eq!(output.rise_transit_set, Some(RiseTransitSet::AllNight));
    assert_eq!(output.rise_transit_set.unwrap().to_legacy(), [SENTINEL; 6]);
    assert_eq!(SENTINEL, -99999.0);

    // Everything else is still computed.
    assert!(output.zenith > 90.0);
    assert!(output.equation_of_time.is_some());
}

#[test]
fn polar_day_reports_sentinels() {
    let arctic_summer = SpaInput::new(2003, 6, 21, 12, 0, 0.0, 0.0, 80.0, 0.0);
    let antarctic_summer = SpaInput::new(2003, 12, 21, 12, 0, 0.0, 0.0, -80.0, 0.0);

    for input in [arctic_summer, antarctic_summer] {
        let rts = spa_calculate(&input).rise_transit_set.unwrap();
        assert_eq!(rts, RiseTransitSet::AllDay);
        assert!(rts.times().is_none());
        assert_eq!(rts.to_legacy(), [SENTINEL; 6]);
    }
}

#[test]
fn legacy_fields_follow_record_order() {
    let rts = spa_calculate(&nrel_reference_input()).rise_transit_set.unwrap();
    let times = rts.times().unwrap();
    assert_eq!(
        rts.to_legacy(),
        [
            times.sunrise.hours(),
            times.transit.hours(),
            times.sunset.hours(),
            times.sunrise_hour_angle,
            times.sunset_hour_angle,
            times.transit_altitude,
        ]
    );
}

#[test]
fn calculation_is_deterministic() {
    let input = nrel_reference_input();
    assert_eq!(spa_calculate(&input), spa_calculate(&input));
    assert_eq!(input.calculate(), spa_calculate(&input));
}
