use core::fmt;
use core::str::FromStr;

use chrono::{DateTime, Datelike, NaiveTime, TimeZone, Timelike};
#[allow(unused_imports)]
use core_maths::CoreFloat;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::time::utc_offset_hours;

/// Value reported for each rise/transit/set field when the sun does not
/// cross the horizon on the requested day.
pub const SENTINEL: f64 = -99999.0;

/// Selects which outputs [`spa_calculate`](crate::spa_calculate) produces.
///
/// Zenith and both azimuths are always computed.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Mode {
    /// Zenith and azimuth only.
    ZenithAzimuth,
    /// Adds the incidence angle on the configured surface.
    ZenithAzimuthIncidence,
    /// Adds the equation of time and sunrise, transit and sunset.
    ZenithAzimuthRiseTransitSet,
    /// Every output.
    #[default]
    All,
}

impl Mode {
    pub fn computes_incidence(self) -> bool {
        matches!(self, Mode::ZenithAzimuthIncidence | Mode::All)
    }

    pub fn computes_rise_transit_set(self) -> bool {
        matches!(self, Mode::ZenithAzimuthRiseTransitSet | Mode::All)
    }
}

impl FromStr for Mode {
    type Err = SpaError;

    /// Parses the legacy function codes, either by name (`SPA_ZA`,
    /// `SPA_ZA_INC`, `SPA_ZA_RTS`, `SPA_ALL`, any case) or by number (`0`-`3`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        const NAMES: [(&str, &str, Mode); 4] = [
            ("SPA_ZA", "0", Mode::ZenithAzimuth),
            ("SPA_ZA_INC", "1", Mode::ZenithAzimuthIncidence),
            ("SPA_ZA_RTS", "2", Mode::ZenithAzimuthRiseTransitSet),
            ("SPA_ALL", "3", Mode::All),
        ];
        let s = s.trim();
        NAMES
            .iter()
            .find(|(name, code, _)| s.eq_ignore_ascii_case(name) || s == *code)
            .map(|&(_, _, mode)| mode)
            .ok_or(SpaError::UnknownMode)
    }
}

/// Observer, instant and atmosphere for one solar position calculation.
///
/// Build one with [`SpaInput::new`] (or [`SpaInput::from_datetime`]) and the
/// `with_*` setters; every field not passed to the constructor starts at a
/// standard default.
///
/// Angles are in degrees, with latitude negative south and longitude negative
/// west. Nothing is range checked unless [`SpaInput::validate`] is called.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SpaInput {
    pub year: i32,
    pub month: i32,
    pub day: i32,
    pub hour: i32,
    pub minute: i32,
    /// May carry a fractional part.
    pub second: f64,
    /// Local offset from UTC in hours, negative west of Greenwich.
    pub timezone: f64,
    /// UT1 − UTC in seconds.
    pub delta_ut1: f64,
    /// TT − UT1 in seconds.
    pub delta_t: f64,
    pub latitude: f64,
    pub longitude: f64,
    /// Observer elevation in meters.
    pub elevation: f64,
    /// Annual average local pressure in millibars.
    pub pressure: f64,
    /// Annual average local temperature in °C.
    pub temperature: f64,
    /// Surface slope measured from the horizontal plane.
    pub slope: f64,
    /// Surface azimuth rotation measured from south, negative east.
    pub azm_rotation: f64,
    /// Atmospheric refraction at sunrise and sunset.
    pub atmos_refract: f64,
    pub mode: Mode,
}

impl SpaInput {
    pub const DEFAULT_PRESSURE: f64 = 1013.25;
    pub const DEFAULT_TEMPERATURE: f64 = 15.0;
    pub const DEFAULT_ATMOS_REFRACT: f64 = 0.5667;

    /// Creates an input for the given local date, time and location.
    ///
    /// Elevation, ΔUT1, ΔT, slope and azimuth rotation start at zero;
    /// pressure, temperature and refraction take the standard values above,
    /// and the mode is [`Mode::All`].
    ///
    /// ```
    /// use solar_angles::{Mode, SpaInput};
    ///
    /// let input = SpaInput::new(2003, 10, 17, 12, 30, 30.0, -7.0, 39.742476, -105.1786)
    ///     .with_delta_t(67.0)
    ///     .with_mode(Mode::ZenithAzimuth);
    /// let output = input.calculate();
    /// assert!((output.zenith - 50.11).abs() < 0.1);
    /// ```
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        year: i32,
        month: i32,
        day: i32,
        hour: i32,
        minute: i32,
        second: f64,
        timezone: f64,
        latitude: f64,
        longitude: f64,
    ) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
            timezone,
            delta_ut1: 0.0,
            delta_t: 0.0,
            latitude,
            longitude,
            elevation: 0.0,
            pressure: Self::DEFAULT_PRESSURE,
            temperature: Self::DEFAULT_TEMPERATURE,
            slope: 0.0,
            azm_rotation: 0.0,
            atmos_refract: Self::DEFAULT_ATMOS_REFRACT,
            mode: Mode::default(),
        }
    }

    /// Creates an input from a zoned chrono timestamp.
    ///
    /// The local calendar fields and the zone's UTC offset at that instant are
    /// used, so daylight saving time is honoured.
    pub fn from_datetime<Tz: TimeZone>(date: &DateTime<Tz>, latitude: f64, longitude: f64) -> Self {
        let second = f64::from(date.second()) + f64::from(date.nanosecond()) / 1_000_000_000.0;
        Self::new(
            date.year(),
            date.month() as i32,
            date.day() as i32,
            date.hour() as i32,
            date.minute() as i32,
            second,
            utc_offset_hours(date),
            latitude,
            longitude,
        )
    }

    pub fn with_elevation(mut self, elevation: f64) -> Self {
        self.elevation = elevation;
        self
    }

    pub fn with_pressure(mut self, pressure: f64) -> Self {
        self.pressure = pressure;
        self
    }

    pub fn with_temperature(mut self, temperature: f64) -> Self {
        self.temperature = temperature;
        self
    }

    pub fn with_delta_ut1(mut self, delta_ut1: f64) -> Self {
        self.delta_ut1 = delta_ut1;
        self
    }

    pub fn with_delta_t(mut self, delta_t: f64) -> Self {
        self.delta_t = delta_t;
        self
    }

    pub fn with_slope(mut self, slope: f64) -> Self {
        self.slope = slope;
        self
    }

    pub fn with_azm_rotation(mut self, azm_rotation: f64) -> Self {
        self.azm_rotation = azm_rotation;
        self
    }

    pub fn with_atmos_refract(mut self, atmos_refract: f64) -> Self {
        self.atmos_refract = atmos_refract;
        self
    }

    pub fn with_mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    /// Runs the solar position algorithm for this input.
    pub fn calculate(&self) -> crate::SpaOutput {
        crate::spa_calculate(self)
    }

    /// Checks every field against the range the algorithm is valid for.
    ///
    /// Rules are checked in a fixed order and the first failure is returned.
    /// The calculation itself never calls this.
    ///
    /// # Errors
    ///
    /// One [`SpaError`] variant per rule. NaN fails every check.
    pub fn validate(&self) -> Result<(), SpaError> {
        if !(-2000..=6000).contains(&self.year) {
            return Err(SpaError::YearOutOfRange);
        }
        if !(1..=12).contains(&self.month) {
            return Err(SpaError::MonthOutOfRange);
        }
        if !(1..=31).contains(&self.day) {
            return Err(SpaError::DayOutOfRange);
        }
        if !(0..=24).contains(&self.hour) {
            return Err(SpaError::HourOutOfRange);
        }
        if !(0..=59).contains(&self.minute) {
            return Err(SpaError::MinuteOutOfRange);
        }
        if !(0.0..60.0).contains(&self.second) {
            return Err(SpaError::SecondOutOfRange);
        }
        if !(0.0..=5000.0).contains(&self.pressure) {
            return Err(SpaError::PressureOutOfRange);
        }
        if !(self.temperature > -273.0 && self.temperature <= 6000.0) {
            return Err(SpaError::TemperatureOutOfRange);
        }
        if !(self.delta_ut1 > -1.0 && self.delta_ut1 < 1.0) {
            return Err(SpaError::DeltaUt1OutOfRange);
        }
        if self.hour == 24 && (self.minute != 0 || self.second != 0.0) {
            return Err(SpaError::PastEndOfDay);
        }
        if !(-8000.0..=8000.0).contains(&self.delta_t) {
            return Err(SpaError::DeltaTOutOfRange);
        }
        if !(-18.0..=18.0).contains(&self.timezone) {
            return Err(SpaError::TimezoneOutOfRange);
        }
        if !(-180.0..=180.0).contains(&self.longitude) {
            return Err(SpaError::LongitudeOutOfRange);
        }
        if !(-90.0..=90.0).contains(&self.latitude) {
            return Err(SpaError::LatitudeOutOfRange);
        }
        if !(-5.0..=5.0).contains(&self.atmos_refract) {
            return Err(SpaError::AtmosRefractOutOfRange);
        }
        if !(-6_500_000.0..).contains(&self.elevation) {
            return Err(SpaError::ElevationOutOfRange);
        }
        if self.mode.computes_incidence() {
            if !(-360.0..=360.0).contains(&self.slope) {
                return Err(SpaError::SlopeOutOfRange);
            }
            if !(-360.0..=360.0).contains(&self.azm_rotation) {
                return Err(SpaError::AzimuthRotationOutOfRange);
            }
        }
        Ok(())
    }
}

/// Results of one solar position calculation. Angles are in degrees.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SpaOutput {
    /// Topocentric zenith angle.
    pub zenith: f64,
    /// Topocentric azimuth measured westward from south.
    pub azimuth_astronomical: f64,
    /// Topocentric azimuth measured eastward from north.
    pub azimuth: f64,
    /// Topocentric elevation, corrected for refraction.
    pub elevation: f64,
    /// Surface incidence angle, when the mode asks for it.
    pub incidence: Option<f64>,
    /// Equation of time in minutes, when the mode asks for rise/transit/set.
    pub equation_of_time: Option<f64>,
    pub rise_transit_set: Option<RiseTransitSet>,
}

/// Sunrise, transit and sunset for the requested day.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum RiseTransitSet {
    /// The sun crosses the horizon.
    Occurs(SunTimes),
    /// The sun stays above the horizon all day (midnight sun).
    AllDay,
    /// The sun stays below the horizon all day (polar night).
    AllNight,
}

impl RiseTransitSet {
    pub fn times(&self) -> Option<&SunTimes> {
        match self {
            RiseTransitSet::Occurs(times) => Some(times),
            _ => None,
        }
    }

    /// The six values in the legacy field order, `[sunrise, transit, sunset,
    /// sunrise hour angle, sunset hour angle, transit altitude]`, with
    /// [`SENTINEL`] in every slot when the sun does not rise or set.
    pub fn to_legacy(&self) -> [f64; 6] {
        match self {
            RiseTransitSet::Occurs(times) => [
                times.sunrise.hours(),
                times.transit.hours(),
                times.sunset.hours(),
                times.sunrise_hour_angle,
                times.sunset_hour_angle,
                times.transit_altitude,
            ],
            RiseTransitSet::AllDay | RiseTransitSet::AllNight => [SENTINEL; 6],
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SunTimes {
    pub sunrise: ClockTime,
    /// Local sun transit time (solar noon).
    pub transit: ClockTime,
    pub sunset: ClockTime,
    /// Topocentric local hour angle at sunrise, in degrees.
    pub sunrise_hour_angle: f64,
    /// Topocentric local hour angle at sunset, in degrees.
    pub sunset_hour_angle: f64,
    /// Sun altitude at transit, in degrees.
    pub transit_altitude: f64,
}

/// Local time of day as fractional hours, in `[0, 24)`.
///
/// Displays as `HH:MM:SS`, each field truncated rather than rounded.
///
/// ```
/// use solar_angles::ClockTime;
/// assert_eq!(ClockTime(6.2120).to_string(), "06:12:43");
/// ```
#[derive(Copy, Clone, Debug, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct ClockTime(pub f64);

impl ClockTime {
    pub fn hours(self) -> f64 {
        self.0
    }

    fn fields(self) -> (i64, i64, i64) {
        let hours = self.0.trunc();
        let minutes = 60.0 * (self.0 - hours);
        let seconds = 60.0 * (minutes - minutes.trunc());
        (hours as i64, minutes.trunc() as i64, seconds.trunc() as i64)
    }

    /// Converts to a chrono [`NaiveTime`] with nanosecond precision.
    ///
    /// Returns `None` when the value is not a finite time within one day.
    pub fn to_naive_time(self) -> Option<NaiveTime> {
        if !(0.0..24.0).contains(&self.0) {
            return None;
        }
        let total = self.0 * 3600.0;
        let seconds = total.trunc();
        let nanos = ((total - seconds) * 1_000_000_000.0).trunc().min(999_999_999.0);
        NaiveTime::from_num_seconds_from_midnight_opt(seconds as u32, nanos as u32)
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (hours, minutes, seconds) = self.fields();
        write!(f, "{hours:02}:{minutes:02}:{seconds:02}")
    }
}

/// Errors reported by [`SpaInput::validate`] and by parsing a [`Mode`].
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpaError {
    /// Year outside [-2000, 6000]
    #[error("year out of range")]
    YearOutOfRange,

    #[error("month out of range")]
    MonthOutOfRange,

    #[error("day out of range")]
    DayOutOfRange,

    /// Hour outside [0, 24]
    #[error("hour out of range")]
    HourOutOfRange,

    #[error("minute out of range")]
    MinuteOutOfRange,

    /// Second outside [0, 60)
    #[error("second out of range")]
    SecondOutOfRange,

    /// Pressure outside [0, 5000] millibars
    #[error("pressure out of range")]
    PressureOutOfRange,

    /// Temperature outside (-273, 6000] °C
    #[error("temperature out of range")]
    TemperatureOutOfRange,

    /// ΔUT1 outside (-1, 1) seconds
    #[error("ΔUT1 out of range")]
    DeltaUt1OutOfRange,

    /// Hour 24 with non-zero minutes or seconds
    #[error("time past the end of the day")]
    PastEndOfDay,

    /// |ΔT| above 8000 seconds
    #[error("ΔT out of range")]
    DeltaTOutOfRange,

    /// |timezone| above 18 hours
    #[error("timezone out of range")]
    TimezoneOutOfRange,

    #[error("longitude out of range")]
    LongitudeOutOfRange,

    #[error("latitude out of range")]
    LatitudeOutOfRange,

    /// |refraction| above 5 degrees
    #[error("atmospheric refraction out of range")]
    AtmosRefractOutOfRange,

    /// Elevation below -6,500,000 meters
    #[error("elevation out of range")]
    ElevationOutOfRange,

    #[error("surface slope out of range")]
    SlopeOutOfRange,

    #[error("surface azimuth rotation out of range")]
    AzimuthRotationOutOfRange,

    /// Mode string not recognised
    #[error("unknown calculation mode")]
    UnknownMode,
}
