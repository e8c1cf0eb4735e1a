//! Calendar to Julian time scales.
//!
//! Everything downstream of [`julian_day`] is expressed in one of the scales
//! computed here: Julian Day (UT), Julian Ephemeris Day (TT) and their century
//! and millennium counterparts relative to J2000.0.

use chrono::{DateTime, Offset, TimeZone};
#[allow(unused_imports)]
use core_maths::CoreFloat;

use crate::math::limit_zero2one;

/// Julian Day of the J2000.0 epoch.
pub(crate) const J2000: f64 = 2_451_545.0;

/// First Julian Day on which the Gregorian calendar correction applies.
const GREGORIAN_REFORM_JD: f64 = 2_299_160.0;

const DAYS_PER_CENTURY: f64 = 36_525.0;
const SECONDS_PER_DAY: f64 = 86_400.0;

/// Compute the Julian Day for a local calendar date and time.
///
/// - `second` may carry a fractional part.
/// - `delta_ut1` is UT1 − UTC in seconds and is folded into the seconds term.
/// - `timezone` is the local offset from UTC in hours, negative west.
///
/// The calendar terms are truncated toward zero, not floored, and the
/// Gregorian correction is applied once the uncorrected day number passes
/// 2299160. Dates before 1582-10-15 are therefore taken as Julian calendar
/// dates.
///
/// ```
/// use solar_angles::time::julian_day;
/// let jd = julian_day(2000, 1, 1, 12, 0, 0.0, 0.0, 0.0);
/// assert_eq!(jd, 2_451_545.0);
/// ```
#[allow(clippy::too_many_arguments)]
pub fn julian_day(
    year: i32,
    month: i32,
    day: i32,
    hour: i32,
    minute: i32,
    second: f64,
    delta_ut1: f64,
    timezone: f64,
) -> f64 {
    let day_decimal = f64::from(day)
        + (f64::from(hour) - timezone + (f64::from(minute) + (second + delta_ut1) / 60.0) / 60.0) / 24.0;

    // January and February count as months 13 and 14 of the previous year.
    let (year, month) = if month < 3 { (year - 1, month + 12) } else { (year, month) };

    let mut julian_day = (365.25 * (f64::from(year) + 4716.0)).trunc() + (30.6001 * f64::from(month + 1)).trunc()
        + day_decimal
        - 1524.5;

    if julian_day > GREGORIAN_REFORM_JD {
        let a = f64::from(year / 100);
        julian_day += 2.0 - a + (a / 4.0).trunc();
    }
    julian_day
}

/// Julian century (JC) since J2000.0 for the given Julian Day.
pub fn julian_century(julian_day: f64) -> f64 {
    (julian_day - J2000) / DAYS_PER_CENTURY
}

/// Julian Ephemeris Day (JDE) from Julian Day and ΔT (TT − UT1, in seconds).
pub fn julian_ephemeris_day(julian_day: f64, delta_t: f64) -> f64 {
    julian_day + delta_t / SECONDS_PER_DAY
}

/// Julian Ephemeris Century (JCE) since J2000.0.
pub fn julian_ephemeris_century(julian_ephemeris_day: f64) -> f64 {
    (julian_ephemeris_day - J2000) / DAYS_PER_CENTURY
}

/// Julian Ephemeris Millennium (JME).
pub fn julian_ephemeris_millennium(julian_ephemeris_century: f64) -> f64 {
    julian_ephemeris_century / 10.0
}

/// Convert a UT day fraction to local fractional hours in `[0, 24)`.
///
/// `timezone` is the offset from UTC in hours. The result wraps around
/// midnight, so an event that falls on the neighbouring UT date is reported
/// at its local clock time on the requested day.
pub fn dayfrac_to_local_hr(day_fraction: f64, timezone: f64) -> f64 {
    24.0 * limit_zero2one(day_fraction + timezone / 24.0)
}

/// Fixed UTC offset of `date`, in hours.
pub(crate) fn utc_offset_hours<Tz: TimeZone>(date: &DateTime<Tz>) -> f64 {
    f64::from(date.offset().fix().local_minus_utc()) / 3600.0
}
