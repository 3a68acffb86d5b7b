//! # Apparent geocentric positions
//!
//! One algorithm shared by every body with a heliocentric series:
//!
//! 1. heliocentric position of the Earth at `t` and of the body at `t − τ`,
//! 2. geocentric vector by difference, `τ = 0.0057755183 · Δ` iterated until stable,
//! 3. annual aberration (κ = 20.49552″),
//! 4. conversion to the FK5 system,
//! 5. nutation in longitude, then equatorial coordinates with the true obliquity.
use serde::{Deserialize, Serialize};

use crate::constants::{
    AstronomicalUnit, Degree, JulianDay, ABERRATION_CONSTANT, LIGHT_TIME_PER_AU, RADEG,
    SOLAR_PARALLAX,
};
use crate::coordinates::{EclipticalCoordinates, EquatorialCoordinates, RectangularCoordinates};
use crate::earth_orientation::nutation;
use crate::observation::{ObservationConfig, ObservationTime};
use crate::planets::{Heliocentric, Planet};
use crate::time::{greenwich_apparent_sidereal_time, julian_centuries};

/// Cap of the light-time loop.
const MAX_LIGHT_TIME_ITERATIONS: usize = 10;

/// Light-time convergence threshold, in days.
const LIGHT_TIME_TOLERANCE: f64 = 1e-9;

/// Apparent position of a body seen from the centre of the Earth.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ApparentPosition {
    /// Apparent right ascension and declination, true equinox of date
    pub equatorial: EquatorialCoordinates,
    /// Apparent ecliptical longitude and latitude, true equinox of date
    pub ecliptical: EclipticalCoordinates,
    /// Distance to the Earth `Δ`, AU
    pub distance: AstronomicalUnit,
    /// Distance to the Sun `r` at `t − τ`, AU
    pub heliocentric_distance: AstronomicalUnit,
    /// Distance Earth–Sun `R`, AU
    pub sun_distance: AstronomicalUnit,
    /// Light time `τ`, days
    pub light_time: f64,
}

/// Correction from the VSOP dynamical frame to FK5.
///
/// Arguments
/// ---------
/// * `longitude`, `latitude`: ecliptical coordinates of date, degrees.
/// * `jde`: dynamical time.
///
/// Returns
/// --------
/// * The corrected `(λ, β)`.
///
/// Formula
/// -------
/// ```text
/// λ′ = λ − 1.397° T − 0.00031° T²
/// Δλ = −0.09033″ + 0.03916″ (cos λ′ + sin λ′) tan β
/// Δβ = +0.03916″ (cos λ′ − sin λ′)
/// ```
pub fn fk5_correction(longitude: Degree, latitude: Degree, jde: JulianDay) -> (Degree, Degree) {
    let t = julian_centuries(jde);
    let lambda_prime = (longitude - 1.397 * t - 0.00031 * t * t) * RADEG;
    let (sin_l, cos_l) = lambda_prime.sin_cos();

    let delta_lambda = -0.09033 + 0.03916 * (cos_l + sin_l) * (latitude * RADEG).tan();
    let delta_beta = 0.03916 * (cos_l - sin_l);
    (
        longitude + delta_lambda / 3600.0,
        latitude + delta_beta / 3600.0,
    )
}

/// Annual aberration in ecliptical coordinates.
///
/// Arguments
/// ---------
/// * `longitude`, `latitude`: body, degrees.
/// * `sun_longitude`: true geometric longitude of the Sun, degrees.
/// * `jde`: dynamical time.
///
/// Returns
/// --------
/// * `(Δλ, Δβ)` in degrees, including the eccentricity terms of the Earth's orbit.
pub fn aberration(
    longitude: Degree,
    latitude: Degree,
    sun_longitude: Degree,
    jde: JulianDay,
) -> (Degree, Degree) {
    let t = julian_centuries(jde);
    let e = 0.016708634 - 0.000042037 * t - 0.0000001267 * t * t;
    let perihelion = 102.93735 + 1.71946 * t + 0.00046 * t * t;
    let kappa = ABERRATION_CONSTANT / 3600.0;

    let (lambda, beta) = (longitude * RADEG, latitude * RADEG);
    let sun = sun_longitude * RADEG - lambda;
    let peri = perihelion * RADEG - lambda;

    let delta_lambda = (-kappa * sun.cos() + e * kappa * peri.cos()) / beta.cos();
    let delta_beta = -kappa * beta.sin() * (sun.sin() - e * peri.sin());
    (delta_lambda, delta_beta)
}

/// Apparent geocentric position of a body with a heliocentric series.
///
/// Arguments
/// ---------
/// * `body`: anything implementing [`Heliocentric`] (a planet, or the Moon).
/// * `jde`: dynamical time.
///
/// Returns
/// --------
/// * The [`ApparentPosition`], light time included.
///
/// See also
/// --------
/// * [`fk5_correction`], [`aberration`] – the two corrections applied on the way.
pub fn apparent_geocentric_position<B: Heliocentric + ?Sized>(
    body: &B,
    jde: JulianDay,
) -> ApparentPosition {
    let earth = Planet::Earth.heliocentric_coordinates(jde);
    let earth_rect = earth.to_rectangular();

    let mut light_time = 0.0;
    let mut geocentric = RectangularCoordinates::new(0.0, 0.0, 0.0);
    let mut heliocentric_distance = 0.0;
    for _ in 0..MAX_LIGHT_TIME_ITERATIONS {
        let helio = body.heliocentric_coordinates(jde - light_time);
        heliocentric_distance = helio.radius;
        geocentric = helio.to_rectangular() - earth_rect;
        let next = LIGHT_TIME_PER_AU * geocentric.norm();
        let converged = (next - light_time).abs() < LIGHT_TIME_TOLERANCE;
        light_time = next;
        if converged {
            break;
        }
    }

    let (geometric_lambda, geometric_beta, distance) = geocentric.to_spherical();
    let sun_longitude = earth.longitude + 180.0;
    let (d_lambda, d_beta) = aberration(geometric_lambda, geometric_beta, sun_longitude, jde);
    let (lambda, beta) =
        fk5_correction(geometric_lambda + d_lambda, geometric_beta + d_beta, jde);

    let nut = nutation(jde);
    let ecliptical = EclipticalCoordinates::from_parts(lambda + nut.longitude, beta, jde);

    ApparentPosition {
        equatorial: ecliptical.to_equatorial(nut.true_obliquity),
        ecliptical,
        distance,
        heliocentric_distance,
        sun_distance: earth.radius,
        light_time,
    }
}

/// Shift a geocentric position to the observer's place.
///
/// Arguments
/// ---------
/// * `geocentric`: apparent geocentric coordinates.
/// * `distance`: geocentric distance in AU.
/// * `time`, `config`: instant and observer.
pub fn topocentric_position(
    geocentric: &EquatorialCoordinates,
    distance: AstronomicalUnit,
    time: &ObservationTime,
    config: &ObservationConfig,
) -> EquatorialCoordinates {
    let sin_parallax = (SOLAR_PARALLAX / 3600.0 * RADEG).sin() / distance;
    let theta = greenwich_apparent_sidereal_time(time.jd_ut(), None);
    geocentric.topocentric(sin_parallax, &config.geo_coords, config.height_meters, theta)
}

#[cfg(test)]
mod apparent_test {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_venus_1992_december_20() {
        let venus = apparent_geocentric_position(&Planet::Venus, 2448976.5);
        assert_abs_diff_eq!(venus.equatorial.right_ascension_degrees(), 316.172725, epsilon = 1e-3);
        assert_abs_diff_eq!(venus.equatorial.declination(), -18.88801, epsilon = 1e-3);
        assert_abs_diff_eq!(venus.distance, 0.910947, epsilon = 1e-5);
        assert_abs_diff_eq!(venus.light_time, 0.0052612, epsilon = 1e-6);
        assert_abs_diff_eq!(venus.heliocentric_distance, 0.724604, epsilon = 1e-5);
    }

    #[test]
    fn test_fk5_correction_is_tiny() {
        let (lambda, beta) = fk5_correction(313.08102, -2.08474, 2448976.5);
        assert!((lambda - 313.08102).abs() < 1e-4);
        assert!((beta + 2.08474).abs() < 1e-4);
    }

    #[test]
    fn test_aberration_bounded_by_kappa() {
        for lon in [0.0, 90.0, 180.0, 270.0] {
            let (dl, db) = aberration(lon, 0.0, 123.0, 2451545.0);
            assert!(dl.abs() <= 21.0 / 3600.0);
            assert_eq!(db, 0.0);
        }
    }
}
