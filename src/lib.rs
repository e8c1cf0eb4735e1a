//! # Solar Angles
//!
//! An implementation of the NREL Solar Position Algorithm (Reda & Andreas,
//! NREL/TP-560-34302) for the years -2000 to 6000, with an uncertainty of
//! ±0.0003°.
//!
//! For a local date and time, an observer location and the local atmosphere it
//! computes the topocentric zenith and azimuth of the sun, the incidence angle
//! on an arbitrarily oriented surface, the equation of time, and the times of
//! sunrise, sun transit and sunset.
//!
//! ## Basic Usage
//!
//! ```
//! use solar_angles::{Mode, RiseTransitSet, SpaInput};
//!
//! // Golden, Colorado on 17 October 2003, 12:30:30 local standard time (UTC-7)
//! let input = SpaInput::new(2003, 10, 17, 12, 30, 30.0, -7.0, 39.742476, -105.1786)
//!     .with_delta_t(67.0)
//!     .with_elevation(1830.14)
//!     .with_pressure(820.0)
//!     .with_temperature(11.0)
//!     .with_slope(30.0)
//!     .with_azm_rotation(-10.0)
//!     .with_mode(Mode::All);
//!
//! let output = input.calculate();
//! println!("Zenith:  {:.6}°", output.zenith);
//! println!("Azimuth: {:.6}°", output.azimuth);
//!
//! match output.rise_transit_set {
//!     Some(RiseTransitSet::Occurs(times)) => {
//!         println!("Sunrise {} / transit {} / sunset {}", times.sunrise, times.transit, times.sunset);
//!     }
//!     Some(RiseTransitSet::AllDay) => println!("Sun never sets"),
//!     Some(RiseTransitSet::AllNight) => println!("Sun never rises"),
//!     None => {}
//! }
//! ```
//!
//! ## Modes
//!
//! [`Mode`] selects which of the optional outputs are computed. Zenith and
//! azimuth are always produced; [`SpaOutput::incidence`] is only filled in by
//! [`Mode::ZenithAzimuthIncidence`] and [`Mode::All`], and the equation of
//! time and rise/transit/set only by [`Mode::ZenithAzimuthRiseTransitSet`] and
//! [`Mode::All`].
//!
//! ## Validation
//!
//! [`spa_calculate`] trusts its input. Out of range values produce meaningless
//! (but non-panicking) results. Use [`SpaInput::validate`] to check an input
//! against the algorithm's valid ranges first.
//!
//! ## Logging
//!
//! Intermediate values of every stage are emitted through the [`log`] facade
//! at `trace` level. Install any logger (for example `env_logger`) to see them.
#![no_std]

#[cfg(test)]
#[macro_use]
extern crate std;

pub mod math;
pub mod time;

mod geo;
mod rts;
mod spa;
pub(crate) mod terms;
mod types;

#[cfg(test)]
mod tests;

pub use spa::spa_calculate;
pub use types::{ClockTime, Mode, RiseTransitSet, SpaError, SpaInput, SpaOutput, SunTimes, SENTINEL};
