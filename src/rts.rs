//! Equation of time and sunrise, sun transit and sunset.
//!
//! Rise and set are found from the sun's apparent right ascension and
//! declination at 0h TT on the day before, the day of and the day after the
//! requested date, interpolated to the approximate event times and corrected
//! once for the altitude error at those times.

#[allow(unused_imports)]
use core_maths::CoreFloat;
use log::{debug, trace};

use crate::{
    geo::SUN_RADIUS,
    math::{limit_degrees, limit_degrees180, limit_degrees180pm, limit_minutes, limit_zero2one},
    spa::SpaContext,
    time::{dayfrac_to_local_hr, julian_day},
    ClockTime, RiseTransitSet, SpaInput, SunTimes,
};

/// Sidereal degrees gained per solar day fraction.
const SIDEREAL_RATE: f64 = 360.985647;

const RISE: usize = 0;
const TRANSIT: usize = 1;
const SET: usize = 2;

/// Sun mean longitude `M`, in degrees within `[0, 360)`.
pub(crate) fn sun_mean_longitude(jme: f64) -> f64 {
    let tail = 1.0 / 49931.0 + jme * (-1.0 / 15300.0 + jme * (-1.0 / 2_000_000.0));
    limit_degrees(280.4664567 + jme * (360007.6982779 + jme * (0.03032028 + jme * tail)))
}

/// Equation of time in minutes, apparent minus mean solar time.
///
/// `alpha`, `del_psi` and `epsilon` are the geocentric right ascension,
/// nutation in longitude and true obliquity of the same instant as `jme`.
pub(crate) fn equation_of_time(jme: f64, alpha: f64, del_psi: f64, epsilon: f64) -> f64 {
    let m = sun_mean_longitude(jme);
    limit_minutes(4.0 * (m - 0.0057183 - alpha + del_psi * epsilon.to_radians().cos()))
}

/// Sun hour angle at rise and set, or why there is none.
#[derive(Copy, Clone, Debug, PartialEq)]
enum RiseSetHourAngle {
    Angle(f64),
    AlwaysUp,
    AlwaysDown,
}

fn sun_hour_angle_at_rise_set(latitude: f64, delta_zero: f64, h0_prime: f64) -> RiseSetHourAngle {
    let latitude_rad = latitude.to_radians();
    let delta_zero_rad = delta_zero.to_radians();
    let argument = (h0_prime.to_radians().sin() - latitude_rad.sin() * delta_zero_rad.sin())
        / (latitude_rad.cos() * delta_zero_rad.cos());

    if argument < -1.0 {
        RiseSetHourAngle::AlwaysUp
    } else if argument.abs() <= 1.0 {
        RiseSetHourAngle::Angle(limit_degrees180(argument.acos().to_degrees()))
    } else {
        // Also taken for a NaN argument, which only arises at the poles.
        RiseSetHourAngle::AlwaysDown
    }
}

/// Day fractions of rise, transit and set, indexed by `RISE`, `TRANSIT`, `SET`.
fn approx_sun_rise_transit_set(m0: f64, h0: f64) -> [f64; 3] {
    let mut m_rts = [0.0; 3];
    m_rts[RISE] = limit_zero2one(m0 - h0 / 360.0);
    m_rts[TRANSIT] = limit_zero2one(m0);
    m_rts[SET] = limit_zero2one(m0 + h0 / 360.0);
    m_rts
}

/// Interpolates a quantity sampled at JD−1, JD and JD+1 to day fraction `n`.
///
/// Differences of two or more (a right ascension wrapping past 360°) are
/// reduced to their fractional part first.
fn rts_alpha_delta_prime(samples: &[f64; 3], n: f64) -> f64 {
    let mut a = samples[1] - samples[0];
    let mut b = samples[2] - samples[1];

    if a.abs() >= 2.0 {
        a = limit_zero2one(a);
    }
    if b.abs() >= 2.0 {
        b = limit_zero2one(b);
    }

    samples[1] + n * (a + b + (b - a) * n) / 2.0
}

fn rts_sun_altitude(latitude: f64, delta_prime: f64, h_prime: f64) -> f64 {
    let latitude_rad = latitude.to_radians();
    let delta_prime_rad = delta_prime.to_radians();

    (latitude_rad.sin() * delta_prime_rad.sin()
        + latitude_rad.cos() * delta_prime_rad.cos() * h_prime.to_radians().cos())
    .asin()
    .to_degrees()
}

/// Refines an approximate rise or set day fraction by the altitude error.
fn sun_rise_and_set(m: f64, h: f64, delta_prime: f64, latitude: f64, h_prime: f64, h0_prime: f64) -> f64 {
    m + (h - h0_prime)
        / (360.0 * delta_prime.to_radians().cos() * latitude.to_radians().cos() * h_prime.to_radians().sin())
}

/// Sunrise, transit and sunset for the calendar date of `input`, in local
/// hours of `input.timezone`.
///
/// The time of day and ΔUT1 of `input` are ignored; the caller's ΔT only
/// enters through the sidereal time at 0h and the interpolation offset.
pub(crate) fn rise_transit_set(input: &SpaInput) -> RiseTransitSet {
    let h0_prime = -(SUN_RADIUS + input.atmos_refract);

    let jd = julian_day(input.year, input.month, input.day, 0, 0, 0.0, 0.0, 0.0);
    let mut day = SpaContext::new(jd);
    day.calculate_geocentric_sun(input.delta_t);
    let nu = day.nu;

    let mut alpha = [0.0; 3];
    let mut delta = [0.0; 3];
    for (i, offset) in [-1.0, 0.0, 1.0].into_iter().enumerate() {
        let mut sample = SpaContext::new(jd + offset);
        sample.calculate_geocentric_sun(0.0);
        alpha[i] = sample.alpha;
        delta[i] = sample.delta;
    }

    let m0 = (alpha[1] - input.longitude - nu) / 360.0;
    let h0 = match sun_hour_angle_at_rise_set(input.latitude, delta[1], h0_prime) {
        RiseSetHourAngle::Angle(h0) => h0,
        RiseSetHourAngle::AlwaysUp => {
            debug!("sun stays above the horizon at latitude {} (δ={})", input.latitude, delta[1]);
            return RiseTransitSet::AllDay;
        }
        RiseSetHourAngle::AlwaysDown => {
            debug!("sun stays below the horizon at latitude {} (δ={})", input.latitude, delta[1]);
            return RiseTransitSet::AllNight;
        }
    };

    let m_rts = approx_sun_rise_transit_set(m0, h0);
    let mut delta_prime = [0.0; 3];
    let mut h_prime = [0.0; 3];
    let mut h_rts = [0.0; 3];

    for i in [RISE, TRANSIT, SET] {
        let nu_i = nu + SIDEREAL_RATE * m_rts[i];
        let n = m_rts[i] + input.delta_t / 86400.0;

        let alpha_prime = rts_alpha_delta_prime(&alpha, n);
        delta_prime[i] = rts_alpha_delta_prime(&delta, n);

        h_prime[i] = limit_degrees180pm(nu_i + input.longitude - alpha_prime);
        h_rts[i] = rts_sun_altitude(input.latitude, delta_prime[i], h_prime[i]);
    }

    let event = |i: usize| {
        let fraction = sun_rise_and_set(m_rts[i], h_rts[i], delta_prime[i], input.latitude, h_prime[i], h0_prime);
        ClockTime(dayfrac_to_local_hr(fraction, input.timezone))
    };

    let times = SunTimes {
        sunrise: event(RISE),
        transit: ClockTime(dayfrac_to_local_hr(m_rts[TRANSIT] - h_prime[TRANSIT] / 360.0, input.timezone)),
        sunset: event(SET),
        sunrise_hour_angle: h_prime[RISE],
        sunset_hour_angle: h_prime[SET],
        transit_altitude: h_rts[TRANSIT],
    };
    trace!("m0={m0} H0={h0} rise={} transit={} set={}", times.sunrise, times.transit, times.sunset);

    RiseTransitSet::Occurs(times)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interpolation_passes_through_the_middle_sample() {
        let samples = [10.0, 11.0, 12.5];
        assert_eq!(rts_alpha_delta_prime(&samples, 0.0), 11.0);
    }

    #[test]
    fn interpolation_unwraps_right_ascension_crossing_zero() {
        // α goes 359 → 0 → 1: the raw first difference is -359.
        let samples = [359.0, 0.0, 1.0];
        let halfway = rts_alpha_delta_prime(&samples, 0.5);
        assert!(halfway > 0.0 && halfway < 1.0, "{halfway}");
    }

    #[test]
    fn hour_angle_classification() {
        assert!(matches!(
            sun_hour_angle_at_rise_set(40.0, 0.0, -0.8333),
            RiseSetHourAngle::Angle(h0) if h0 > 90.0 && h0 < 91.5
        ));
        assert_eq!(sun_hour_angle_at_rise_set(80.0, 23.0, -0.8333), RiseSetHourAngle::AlwaysUp);
        assert_eq!(sun_hour_angle_at_rise_set(80.0, -23.0, -0.8333), RiseSetHourAngle::AlwaysDown);
    }

    #[test]
    fn approximate_times_are_day_fractions() {
        let m = approx_sun_rise_transit_set(-0.2, 100.0);
        for fraction in m {
            assert!((0.0..1.0).contains(&fraction));
        }
        assert!((m[TRANSIT] - 0.8).abs() < 1e-12);
    }
}
