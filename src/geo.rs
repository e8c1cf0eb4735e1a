//! Positional astronomy formulas.
//!
//! Each function here is one step of the solar position pipeline. They are
//! pure and take their inputs in degrees (angles), AU (distances) or Julian
//! time scales. The orchestration lives in [`crate::spa`].

#[allow(unused_imports)]
use core_maths::CoreFloat;

use crate::{
    math::{limit_degrees, polynomial, third_order_polynomial},
    terms::{B_TERMS, L_TERMS, PE_TERMS, R_TERMS, Y_TERMS},
    time::J2000,
};

/// Angular radius of the solar disc, in degrees.
pub(crate) const SUN_RADIUS: f64 = 0.26667;

const EARTH_RADIUS_METERS: f64 = 6_378_140.0;

/// Polar to equatorial axis ratio of the reference ellipsoid.
const EARTH_AXIS_RATIO: f64 = 0.99664719;

const ABERRATION_ARCSEC: f64 = 20.4898;
const PARALLAX_ARCSEC: f64 = 8.794;

const PERIODIC_TERM_SCALE: f64 = 1.0e8;
const NUTATION_TERM_SCALE: f64 = 36_000_000.0;

/// Mean obliquity coefficients in arc-seconds, constant term first.
const MEAN_OBLIQUITY_COEFFICIENTS: [f64; 11] = [
    84381.448, -4680.93, -1.55, 1999.25, -51.38, -249.67, -39.05, 7.12, 27.87, 5.79, 2.45,
];

// ---------------------------------------------------------------------------
// Earth heliocentric position
// ---------------------------------------------------------------------------

/// `Σ A·cos(B + C·jme)` over one group of periodic terms.
fn periodic_term_sum(terms: &[[f64; 3]], jme: f64) -> f64 {
    terms.iter().map(|&[a, b, c]| a * (b + c * jme).cos()).sum()
}

/// Combines the group sums as a power series in `jme`, then rescales.
fn periodic_series(groups: &[&[[f64; 3]]], jme: f64) -> f64 {
    let mut jme_power = 1.0;
    let mut total = 0.0;
    for group in groups {
        total += periodic_term_sum(group, jme) * jme_power;
        jme_power *= jme;
    }
    total / PERIODIC_TERM_SCALE
}

/// Earth heliocentric longitude `L`, in degrees within `[0, 360)`.
pub(crate) fn earth_heliocentric_longitude(jme: f64) -> f64 {
    limit_degrees(periodic_series(&L_TERMS, jme).to_degrees())
}

/// Earth heliocentric latitude `B`, in degrees.
pub(crate) fn earth_heliocentric_latitude(jme: f64) -> f64 {
    periodic_series(&B_TERMS, jme).to_degrees()
}

/// Earth radius vector `R`, in astronomical units.
pub(crate) fn earth_radius_vector(jme: f64) -> f64 {
    periodic_series(&R_TERMS, jme)
}

/// Geocentric longitude `Θ`. Expects `L` already in `[0, 360)`.
pub(crate) fn geocentric_longitude(l: f64) -> f64 {
    let theta = l + 180.0;
    if theta >= 360.0 {
        theta - 360.0
    } else {
        theta
    }
}

pub(crate) fn geocentric_latitude(b: f64) -> f64 {
    -b
}

// ---------------------------------------------------------------------------
// Nutation and obliquity
// ---------------------------------------------------------------------------

/// Mean elongation of the moon from the sun, `X0`.
pub(crate) fn mean_elongation_moon_sun(jce: f64) -> f64 {
    third_order_polynomial(1.0 / 189_474.0, -0.0019142, 445_267.11148, 297.85036, jce)
}

/// Mean anomaly of the sun, `X1`.
pub(crate) fn mean_anomaly_sun(jce: f64) -> f64 {
    third_order_polynomial(-1.0 / 300_000.0, -0.0001603, 35_999.05034, 357.52772, jce)
}

/// Mean anomaly of the moon, `X2`.
pub(crate) fn mean_anomaly_moon(jce: f64) -> f64 {
    third_order_polynomial(1.0 / 56_250.0, 0.0086972, 477_198.867398, 134.96298, jce)
}

/// Moon's argument of latitude, `X3`.
pub(crate) fn argument_latitude_moon(jce: f64) -> f64 {
    third_order_polynomial(1.0 / 327_270.0, -0.0036825, 483_202.017538, 93.27191, jce)
}

/// Longitude of the ascending node of the moon's mean orbit, `X4`.
pub(crate) fn ascending_longitude_moon(jce: f64) -> f64 {
    third_order_polynomial(1.0 / 450_000.0, 0.0020708, -1934.136261, 125.04452, jce)
}

/// The five fundamental arguments `X0..X4` at `jce`, in degrees.
pub(crate) fn nutation_arguments(jce: f64) -> [f64; 5] {
    [
        mean_elongation_moon_sun(jce),
        mean_anomaly_sun(jce),
        mean_anomaly_moon(jce),
        argument_latitude_moon(jce),
        ascending_longitude_moon(jce),
    ]
}

/// Nutation in longitude and in obliquity, `(Δψ, Δε)` in degrees.
///
/// Each of the 63 rows contributes `(a + b·jce)·sin(arg)` to Δψ and
/// `(c + d·jce)·cos(arg)` to Δε, where `arg` is the row's integer
/// combination of the fundamental arguments.
pub(crate) fn nutation_longitude_and_obliquity(jce: f64, x: &[f64; 5]) -> (f64, f64) {
    let mut sum_psi = 0.0;
    let mut sum_epsilon = 0.0;

    for (multipliers, &[a, b, c, d]) in Y_TERMS.iter().zip(PE_TERMS.iter()) {
        let argument = multipliers
            .iter()
            .zip(x)
            .map(|(&multiplier, &x_j)| f64::from(multiplier) * x_j)
            .sum::<f64>()
            .to_radians();

        sum_psi += (a + b * jce) * argument.sin();
        sum_epsilon += (c + d * jce) * argument.cos();
    }

    (sum_psi / NUTATION_TERM_SCALE, sum_epsilon / NUTATION_TERM_SCALE)
}

/// Mean obliquity of the ecliptic `ε0`, in arc-seconds.
pub(crate) fn ecliptic_mean_obliquity(jme: f64) -> f64 {
    polynomial(&MEAN_OBLIQUITY_COEFFICIENTS, jme / 10.0)
}

/// True obliquity `ε` in degrees, from `Δε` (degrees) and `ε0` (arc-seconds).
pub(crate) fn ecliptic_true_obliquity(del_epsilon: f64, epsilon0: f64) -> f64 {
    del_epsilon + epsilon0 / 3600.0
}

// ---------------------------------------------------------------------------
// Apparent geocentric position
// ---------------------------------------------------------------------------

/// Aberration correction `Δτ`, in degrees.
pub(crate) fn aberration_correction(r: f64) -> f64 {
    -ABERRATION_ARCSEC / (3600.0 * r)
}

pub(crate) fn apparent_sun_longitude(theta: f64, del_psi: f64, del_tau: f64) -> f64 {
    theta + del_psi + del_tau
}

/// Greenwich mean sidereal time `ν0`, in degrees within `[0, 360)`.
pub(crate) fn greenwich_mean_sidereal_time(jd: f64, jc: f64) -> f64 {
    limit_degrees(280.46061837 + 360.98564736629 * (jd - J2000) + jc * jc * (0.000387933 - jc / 38_710_000.0))
}

/// Greenwich apparent sidereal time `ν`, in degrees.
pub(crate) fn greenwich_sidereal_time(nu0: f64, del_psi: f64, epsilon: f64) -> f64 {
    nu0 + del_psi * epsilon.to_radians().cos()
}

/// Geocentric right ascension `α`, in degrees within `[0, 360)`.
pub(crate) fn geocentric_right_ascension(lamda: f64, epsilon: f64, beta: f64) -> f64 {
    let lamda_rad = lamda.to_radians();
    let epsilon_rad = epsilon.to_radians();

    limit_degrees(
        (lamda_rad.sin() * epsilon_rad.cos() - beta.to_radians().tan() * epsilon_rad.sin())
            .atan2(lamda_rad.cos())
            .to_degrees(),
    )
}

/// Geocentric declination `δ`, in degrees.
pub(crate) fn geocentric_declination(beta: f64, epsilon: f64, lamda: f64) -> f64 {
    let beta_rad = beta.to_radians();
    let epsilon_rad = epsilon.to_radians();

    (beta_rad.sin() * epsilon_rad.cos() + beta_rad.cos() * epsilon_rad.sin() * lamda.to_radians().sin())
        .asin()
        .to_degrees()
}

// ---------------------------------------------------------------------------
// Topocentric position
// ---------------------------------------------------------------------------

/// Observer local hour angle `H`, in degrees within `[0, 360)`.
pub(crate) fn observer_hour_angle(nu: f64, longitude: f64, alpha_deg: f64) -> f64 {
    limit_degrees(nu + longitude - alpha_deg)
}

/// Equatorial horizontal parallax of the sun `ξ`, in degrees.
pub(crate) fn sun_equatorial_horizontal_parallax(r: f64) -> f64 {
    PARALLAX_ARCSEC / (3600.0 * r)
}

/// Parallax in right ascension and topocentric declination, `(Δα, δ′)`.
///
/// The observer is placed on the reference ellipsoid at `latitude`, raised by
/// `elevation` meters. All angles are in degrees.
pub(crate) fn right_ascension_parallax_and_topocentric_dec(
    latitude: f64,
    elevation: f64,
    xi: f64,
    h: f64,
    delta: f64,
) -> (f64, f64) {
    let lat_rad = latitude.to_radians();
    let xi_rad = xi.to_radians();
    let h_rad = h.to_radians();
    let delta_rad = delta.to_radians();

    let u = (EARTH_AXIS_RATIO * lat_rad.tan()).atan();
    let y = EARTH_AXIS_RATIO * u.sin() + elevation * lat_rad.sin() / EARTH_RADIUS_METERS;
    let x = u.cos() + elevation * lat_rad.cos() / EARTH_RADIUS_METERS;

    let denominator = delta_rad.cos() - x * xi_rad.sin() * h_rad.cos();
    let del_alpha_rad = (-x * xi_rad.sin() * h_rad.sin()).atan2(denominator);
    let delta_prime_rad = ((delta_rad.sin() - y * xi_rad.sin()) * del_alpha_rad.cos()).atan2(denominator);

    (del_alpha_rad.to_degrees(), delta_prime_rad.to_degrees())
}

pub(crate) fn topocentric_right_ascension(alpha_deg: f64, del_alpha: f64) -> f64 {
    alpha_deg + del_alpha
}

pub(crate) fn topocentric_local_hour_angle(h: f64, del_alpha: f64) -> f64 {
    h - del_alpha
}

/// Topocentric elevation `e0` before refraction, in degrees.
pub(crate) fn topocentric_elevation_angle(latitude: f64, delta_prime: f64, h_prime: f64) -> f64 {
    let lat_rad = latitude.to_radians();
    let delta_prime_rad = delta_prime.to_radians();

    (lat_rad.sin() * delta_prime_rad.sin() + lat_rad.cos() * delta_prime_rad.cos() * h_prime.to_radians().cos())
        .asin()
        .to_degrees()
}

/// Atmospheric refraction correction `Δe`, in degrees.
///
/// Zero once the sun's upper limb, lifted by `atmos_refract`, is below the
/// horizon.
pub(crate) fn atmospheric_refraction_correction(pressure: f64, temperature: f64, atmos_refract: f64, e0: f64) -> f64 {
    if e0 >= -(SUN_RADIUS + atmos_refract) {
        (pressure / 1010.0) * (283.0 / (273.0 + temperature)) * 1.02
            / (60.0 * (e0 + 10.3 / (e0 + 5.11)).to_radians().tan())
    } else {
        0.0
    }
}

pub(crate) fn topocentric_elevation_angle_corrected(e0: f64, del_e: f64) -> f64 {
    e0 + del_e
}

pub(crate) fn topocentric_zenith_angle(e: f64) -> f64 {
    90.0 - e
}

/// Astronomical azimuth `Γ`, measured westward from south, in `[0, 360)`.
pub(crate) fn topocentric_azimuth_angle_astro(h_prime: f64, latitude: f64, delta_prime: f64) -> f64 {
    let h_prime_rad = h_prime.to_radians();
    let lat_rad = latitude.to_radians();

    limit_degrees(
        h_prime_rad
            .sin()
            .atan2(h_prime_rad.cos() * lat_rad.sin() - delta_prime.to_radians().tan() * lat_rad.cos())
            .to_degrees(),
    )
}

/// Navigational azimuth `Φ`, measured eastward from north.
pub(crate) fn topocentric_azimuth_angle(azimuth_astro: f64) -> f64 {
    limit_degrees(azimuth_astro + 180.0)
}

/// Incidence angle on a surface with the given slope and azimuth rotation.
pub(crate) fn surface_incidence_angle(zenith: f64, azimuth_astro: f64, azm_rotation: f64, slope: f64) -> f64 {
    let zenith_rad = zenith.to_radians();
    let slope_rad = slope.to_radians();

    (zenith_rad.cos() * slope_rad.cos()
        + slope_rad.sin() * zenith_rad.sin() * (azimuth_astro - azm_rotation).to_radians().cos())
    .acos()
    .to_degrees()
}
