//! Pipeline orchestration.
//!
//! [`SpaContext`] accumulates every intermediate quantity of one evaluation.
//! Stages fill it in order; [`spa_calculate`] decides which optional stages
//! run from the requested [`Mode`](crate::Mode).

use log::trace;

use crate::{
    geo, rts,
    time::{julian_century, julian_day, julian_ephemeris_century, julian_ephemeris_day, julian_ephemeris_millennium},
    SpaInput, SpaOutput,
};

/// Intermediate values of a single solar position evaluation.
///
/// Field names follow the symbols of the algorithm: angles in degrees, `r` in
/// AU, `epsilon0` in arc-seconds.
#[derive(Copy, Clone, Debug, Default)]
pub(crate) struct SpaContext {
    pub jd: f64,
    pub jc: f64,
    pub jde: f64,
    pub jce: f64,
    pub jme: f64,

    pub l: f64,
    pub b: f64,
    pub r: f64,

    pub theta: f64,
    pub beta: f64,

    pub x: [f64; 5],
    pub del_psi: f64,
    pub del_epsilon: f64,
    pub epsilon0: f64,
    pub epsilon: f64,

    pub del_tau: f64,
    pub lamda: f64,
    pub nu0: f64,
    pub nu: f64,
    pub alpha: f64,
    pub delta: f64,

    pub h: f64,
    pub xi: f64,
    pub del_alpha: f64,
    pub delta_prime: f64,
    pub alpha_prime: f64,
    pub h_prime: f64,

    pub e0: f64,
    pub del_e: f64,
    pub e: f64,
    pub zenith: f64,
    pub azimuth_astro: f64,
    pub azimuth: f64,
}

impl SpaContext {
    pub(crate) fn new(jd: f64) -> Self {
        Self { jd, ..Self::default() }
    }

    /// Time scales, heliocentric and geocentric position, nutation, and the
    /// apparent right ascension and declination for the current `jd`.
    pub(crate) fn calculate_geocentric_sun(&mut self, delta_t: f64) {
        self.jc = julian_century(self.jd);
        self.jde = julian_ephemeris_day(self.jd, delta_t);
        self.jce = julian_ephemeris_century(self.jde);
        self.jme = julian_ephemeris_millennium(self.jce);

        self.l = geo::earth_heliocentric_longitude(self.jme);
        self.b = geo::earth_heliocentric_latitude(self.jme);
        self.r = geo::earth_radius_vector(self.jme);

        self.theta = geo::geocentric_longitude(self.l);
        self.beta = geo::geocentric_latitude(self.b);

        self.x = geo::nutation_arguments(self.jce);
        (self.del_psi, self.del_epsilon) = geo::nutation_longitude_and_obliquity(self.jce, &self.x);

        self.epsilon0 = geo::ecliptic_mean_obliquity(self.jme);
        self.epsilon = geo::ecliptic_true_obliquity(self.del_epsilon, self.epsilon0);

        self.del_tau = geo::aberration_correction(self.r);
        self.lamda = geo::apparent_sun_longitude(self.theta, self.del_psi, self.del_tau);
        self.nu0 = geo::greenwich_mean_sidereal_time(self.jd, self.jc);
        self.nu = geo::greenwich_sidereal_time(self.nu0, self.del_psi, self.epsilon);

        self.alpha = geo::geocentric_right_ascension(self.lamda, self.epsilon, self.beta);
        self.delta = geo::geocentric_declination(self.beta, self.epsilon, self.lamda);
    }

    /// Parallax, refraction, zenith and azimuth as seen by the observer.
    pub(crate) fn calculate_topocentric_sun(&mut self, input: &SpaInput) {
        self.h = geo::observer_hour_angle(self.nu, input.longitude, self.alpha);
        self.xi = geo::sun_equatorial_horizontal_parallax(self.r);

        (self.del_alpha, self.delta_prime) = geo::right_ascension_parallax_and_topocentric_dec(
            input.latitude,
            input.elevation,
            self.xi,
            self.h,
            self.delta,
        );
        self.alpha_prime = geo::topocentric_right_ascension(self.alpha, self.del_alpha);
        self.h_prime = geo::topocentric_local_hour_angle(self.h, self.del_alpha);

        self.e0 = geo::topocentric_elevation_angle(input.latitude, self.delta_prime, self.h_prime);
        self.del_e =
            geo::atmospheric_refraction_correction(input.pressure, input.temperature, input.atmos_refract, self.e0);
        self.e = geo::topocentric_elevation_angle_corrected(self.e0, self.del_e);

        self.zenith = geo::topocentric_zenith_angle(self.e);
        self.azimuth_astro = geo::topocentric_azimuth_angle_astro(self.h_prime, input.latitude, self.delta_prime);
        self.azimuth = geo::topocentric_azimuth_angle(self.azimuth_astro);
    }
}

/// Computes the solar position for `input`.
///
/// Zenith, azimuth and elevation are always produced. The incidence angle and
/// the rise/transit/set block are only computed when `input.mode` asks for
/// them and are `None` otherwise.
///
/// Inputs are not range checked; call [`SpaInput::validate`] first when they
/// come from an untrusted source.
///
/// ```
/// use solar_angles::{spa_calculate, Mode, SpaInput};
///
/// let input = SpaInput::new(2003, 10, 17, 12, 30, 30.0, -7.0, 39.742476, -105.1786)
///     .with_mode(Mode::ZenithAzimuthIncidence)
///     .with_slope(30.0)
///     .with_azm_rotation(-10.0);
/// let output = spa_calculate(&input);
/// assert!(output.incidence.is_some());
/// assert!(output.rise_transit_set.is_none());
/// ```
pub fn spa_calculate(input: &SpaInput) -> SpaOutput {
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

    let mut ctx = SpaContext::new(jd);
    ctx.calculate_geocentric_sun(input.delta_t);
    trace!(
        "jd={} jme={} L={} B={} R={} Δψ={} Δε={} ε={}",
        ctx.jd,
        ctx.jme,
        ctx.l,
        ctx.b,
        ctx.r,
        ctx.del_psi,
        ctx.del_epsilon,
        ctx.epsilon
    );
    trace!("λ={} ν={} α={} δ={}", ctx.lamda, ctx.nu, ctx.alpha, ctx.delta);

    ctx.calculate_topocentric_sun(input);
    trace!(
        "H={} α′={} δ′={} e0={} Δe={} zenith={} azimuth={}",
        ctx.h,
        ctx.alpha_prime,
        ctx.delta_prime,
        ctx.e0,
        ctx.del_e,
        ctx.zenith,
        ctx.azimuth
    );

    let incidence = input
        .mode
        .computes_incidence()
        .then(|| geo::surface_incidence_angle(ctx.zenith, ctx.azimuth_astro, input.azm_rotation, input.slope));

    let (equation_of_time, rise_transit_set) = if input.mode.computes_rise_transit_set() {
        let eot = rts::equation_of_time(ctx.jme, ctx.alpha, ctx.del_psi, ctx.epsilon);
        trace!("eot={eot}");
        (Some(eot), Some(rts::rise_transit_set(input)))
    } else {
        (None, None)
    };

    SpaOutput {
        zenith: ctx.zenith,
        azimuth_astronomical: ctx.azimuth_astro,
        azimuth: ctx.azimuth,
        elevation: ctx.e,
        incidence,
        equation_of_time,
        rise_transit_set,
    }
}
