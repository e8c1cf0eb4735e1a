//! Reproduces the worked example of NREL/TP-560-34302 and then follows the
//! same site through a day of local (daylight saving) time.
//!
//! Run with `RUST_LOG=trace cargo run --example denver` to see every
//! intermediate value.

use std::error::Error;

use chrono::TimeZone;
use chrono_tz::America::Denver;
use solar_angles::{Mode, RiseTransitSet, SpaInput};

const LATITUDE: f64 = 39.742476;
const LONGITUDE: f64 = -105.1786;

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let reference = SpaInput::new(2003, 10, 17, 12, 30, 30.0, -7.0, LATITUDE, LONGITUDE)
        .with_delta_t(67.0)
        .with_elevation(1830.14)
        .with_pressure(820.0)
        .with_temperature(11.0)
        .with_slope(30.0)
        .with_azm_rotation(-10.0)
        .with_atmos_refract(0.5667)
        .with_mode("SPA_ALL".parse::<Mode>()?);
    reference.validate()?;

    let output = reference.calculate();
    println!("Zenith:        {:.6} degrees", output.zenith);
    println!("Azimuth:       {:.6} degrees", output.azimuth);
    if let Some(incidence) = output.incidence {
        println!("Incidence:     {incidence:.6} degrees");
    }
    if let Some(eot) = output.equation_of_time {
        println!("Eq. of time:   {eot:.6} minutes");
    }
    match output.rise_transit_set {
        Some(RiseTransitSet::Occurs(times)) => {
            println!("Sunrise:       {}", times.sunrise);
            println!("Solar noon:    {}", times.transit);
            println!("Sunset:        {}", times.sunset);
        }
        Some(RiseTransitSet::AllDay) => println!("The sun does not set"),
        Some(RiseTransitSet::AllNight) => println!("The sun does not rise"),
        None => {}
    }

    println!();
    println!("{:>6}  {:>10}  {:>10}", "MDT", "elevation", "azimuth");
    for hour in 6..=18 {
        let local = Denver
            .with_ymd_and_hms(2003, 10, 17, hour, 0, 0)
            .single()
            .ok_or("ambiguous local time")?;
        let sample = SpaInput::from_datetime(&local, LATITUDE, LONGITUDE)
            .with_delta_t(67.0)
            .with_elevation(1830.14)
            .with_pressure(820.0)
            .with_temperature(11.0)
            .with_mode(Mode::ZenithAzimuth);
        let position = sample.calculate();
        println!("{:>3}:00  {:>10.3}  {:>10.3}", hour, position.elevation, position.azimuth);
    }

    Ok(())
}
