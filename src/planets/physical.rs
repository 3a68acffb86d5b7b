//! # Physical ephemeris of the planets
//!
//! Quantities derived from the Sun–Earth–planet triangle:
//!
//! - phase angle `i`, illuminated fraction `k` and elongation `ψ`,
//! - visual magnitude (Astronomical Almanac formulas, including the ring term of Saturn),
//! - apparent equatorial semidiameter.
//!
//! The triangle sides are the heliocentric distance `r`, the geocentric distance `Δ` and the
//! Earth–Sun distance `R`, all in AU.
use serde::{Deserialize, Serialize};

use crate::constants::{ArcSec, AstronomicalUnit, Degree, JulianDay, RADEG};
use crate::planets::apparent::apparent_geocentric_position;
use crate::planets::{Heliocentric, Planet};
use crate::time::julian_centuries;

/// Phase angle `i` (Sun–planet–Earth), degrees.
///
/// ```text
/// cos i = (r² + Δ² − R²) / (2 r Δ)
/// ```
pub fn phase_angle(
    r: AstronomicalUnit,
    delta: AstronomicalUnit,
    sun_distance: AstronomicalUnit,
) -> Degree {
    let cos_i = (r * r + delta * delta - sun_distance * sun_distance) / (2.0 * r * delta);
    cos_i.clamp(-1.0, 1.0).acos() / RADEG
}

/// Illuminated fraction of the disk, `k = ((r + Δ)² − R²) / (4 r Δ)`.
pub fn illuminated_fraction(
    r: AstronomicalUnit,
    delta: AstronomicalUnit,
    sun_distance: AstronomicalUnit,
) -> f64 {
    (((r + delta).powi(2) - sun_distance * sun_distance) / (4.0 * r * delta)).clamp(0.0, 1.0)
}

/// Elongation `ψ` of the body from the Sun as seen from the Earth, degrees.
///
/// ```text
/// cos ψ = (R² + Δ² − r²) / (2 R Δ)
/// ```
pub fn elongation(
    r: AstronomicalUnit,
    delta: AstronomicalUnit,
    sun_distance: AstronomicalUnit,
) -> Degree {
    let cos_psi =
        (sun_distance * sun_distance + delta * delta - r * r) / (2.0 * sun_distance * delta);
    cos_psi.clamp(-1.0, 1.0).acos() / RADEG
}

/// Orientation of Saturn's rings seen from the Earth.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SaturnRing {
    /// Saturnicentric latitude of the Earth referred to the ring plane `B`, degrees
    pub tilt: Degree,
    /// Difference between the Saturnicentric longitudes of the Sun and the Earth `ΔU`, degrees
    pub delta_u: Degree,
}

/// Ring tilt `B` and `ΔU` at `jde`.
///
/// Uses the geometric geocentric position of Saturn (light time included, no aberration) and its
/// heliocentric position at `t − τ`, corrected for the aberration of the Sun seen from Saturn.
pub fn saturn_ring(jde: JulianDay) -> SaturnRing {
    let t = julian_centuries(jde);
    let inclination = (28.075216 - 0.012998 * t + 0.000004 * t * t) * RADEG;
    let node = (169.508470 + 1.394681 * t + 0.000412 * t * t) * RADEG;

    let tau = apparent_geocentric_position(&Planet::Saturn, jde).light_time;
    let saturn = Planet::Saturn.heliocentric_coordinates(jde - tau);
    let earth = Planet::Earth.heliocentric_coordinates(jde);
    let (lambda, beta, _) = (saturn.to_rectangular() - earth.to_rectangular()).to_spherical();
    let (lambda, beta) = (lambda * RADEG, beta * RADEG);

    let sin_b = inclination.sin() * beta.cos() * (lambda - node).sin()
        - inclination.cos() * beta.sin();

    let n = (113.6655 + 0.8771 * t) * RADEG;
    let l = saturn.longitude * RADEG;
    let l_prime = l - 0.01759 * RADEG / saturn.radius;
    let b_prime =
        saturn.latitude * RADEG - 0.000764 * RADEG * (l - n).cos() / saturn.radius;

    let saturnicentric = |lon: f64, lat: f64| {
        (inclination.sin() * lat.sin() + inclination.cos() * lat.cos() * (lon - node).sin())
            .atan2(lat.cos() * (lon - node).cos())
    };
    let u1 = saturnicentric(l_prime, b_prime);
    let u2 = saturnicentric(lambda, beta);

    SaturnRing {
        tilt: sin_b.asin() / RADEG,
        delta_u: ((u1 - u2) / RADEG).abs(),
    }
}

/// Visual magnitude of a planet.
///
/// Arguments
/// ---------
/// * `planet`: any planet but the Earth.
/// * `r`, `delta`: heliocentric and geocentric distances, AU.
/// * `phase_angle`: degrees.
/// * `ring`: Saturn's ring orientation; ignored for the other planets, and the ring term is
///   dropped for Saturn when absent.
///
/// Returns
/// --------
/// * `None` for the Earth.
pub fn magnitude(
    planet: Planet,
    r: AstronomicalUnit,
    delta: AstronomicalUnit,
    phase_angle: Degree,
    ring: Option<&SaturnRing>,
) -> Option<f64> {
    let distance_term = 5.0 * (r * delta).log10();
    let i = phase_angle;
    let value = match planet {
        Planet::Mercury => -0.42 + 0.0380 * i - 0.000273 * i * i + 0.000002 * i.powi(3),
        Planet::Venus => -4.40 + 0.0009 * i + 0.000239 * i * i - 0.00000065 * i.powi(3),
        Planet::Earth => return None,
        Planet::Mars => -1.52 + 0.016 * i,
        Planet::Jupiter => -9.40 + 0.005 * i,
        Planet::Saturn => {
            -8.88
                + ring.map_or(0.0, |ring| {
                    let sin_b = (ring.tilt * RADEG).sin();
                    0.044 * ring.delta_u - 2.60 * sin_b.abs() + 1.25 * sin_b * sin_b
                })
        }
        Planet::Uranus => -7.19,
        Planet::Neptune => -6.87,
    };
    Some(value + distance_term)
}

/// Equatorial semidiameter at 1 AU, arcseconds.
pub fn semidiameter_at_unit_distance(planet: Planet) -> Option<ArcSec> {
    match planet {
        Planet::Mercury => Some(3.36),
        Planet::Venus => Some(8.41),
        Planet::Earth => None,
        Planet::Mars => Some(4.68),
        Planet::Jupiter => Some(98.44),
        Planet::Saturn => Some(82.73),
        Planet::Uranus => Some(35.02),
        Planet::Neptune => Some(33.50),
    }
}

/// Apparent equatorial semidiameter at the geocentric distance `delta`, arcseconds.
pub fn semidiameter(planet: Planet, delta: AstronomicalUnit) -> Option<ArcSec> {
    semidiameter_at_unit_distance(planet).map(|s0| s0 / delta)
}

/// Everything the photometry layer needs about a planet at one instant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PhysicalEphemeris {
    pub phase_angle: Degree,
    pub illuminated_fraction: f64,
    pub elongation: Degree,
    pub magnitude: f64,
    /// Equatorial semidiameter, arcseconds
    pub semidiameter: ArcSec,
    pub heliocentric_distance: AstronomicalUnit,
    pub geocentric_distance: AstronomicalUnit,
}

/// Physical ephemeris of `planet` at `jde`, `None` for the Earth.
///
/// See also
/// --------
/// * [`apparent_geocentric_position`] – source of `r`, `Δ` and `R`.
pub fn physical_ephemeris(planet: Planet, jde: JulianDay) -> Option<PhysicalEphemeris> {
    if planet == Planet::Earth {
        return None;
    }
    let position = apparent_geocentric_position(&planet, jde);
    let (r, delta, sun) = (
        position.heliocentric_distance,
        position.distance,
        position.sun_distance,
    );
    let i = phase_angle(r, delta, sun);
    let ring = (planet == Planet::Saturn).then(|| saturn_ring(jde));

    Some(PhysicalEphemeris {
        phase_angle: i,
        illuminated_fraction: illuminated_fraction(r, delta, sun),
        elongation: elongation(r, delta, sun),
        magnitude: magnitude(planet, r, delta, i, ring.as_ref())?,
        semidiameter: semidiameter(planet, delta)?,
        heliocentric_distance: r,
        geocentric_distance: delta,
    })
}

#[cfg(test)]
mod physical_test {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_venus_1992_december_20() {
        let venus = physical_ephemeris(Planet::Venus, 2448976.5).unwrap();
        assert_abs_diff_eq!(venus.phase_angle, 72.96, epsilon = 0.01);
        assert_abs_diff_eq!(venus.illuminated_fraction, 0.647, epsilon = 1e-3);
        assert_abs_diff_eq!(venus.magnitude, -4.22, epsilon = 0.01);
        assert_abs_diff_eq!(venus.semidiameter, 8.41 / 0.910947, epsilon = 1e-3);
    }

    #[test]
    fn test_saturn_ring_1992_december_16() {
        let ring = saturn_ring(2448972.5);
        assert_abs_diff_eq!(ring.tilt, 16.442, epsilon = 0.01);
        assert_abs_diff_eq!(ring.delta_u, 4.198, epsilon = 0.01);
    }

    #[test]
    fn test_triangle_limits() {
        // Full phase: Earth between Sun and planet
        assert_abs_diff_eq!(phase_angle(5.0, 4.0, 1.0), 0.0, epsilon = 1e-9);
        assert_abs_diff_eq!(illuminated_fraction(5.0, 4.0, 1.0), 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(elongation(5.0, 4.0, 1.0), 180.0, epsilon = 1e-9);
        // Inferior conjunction
        assert_abs_diff_eq!(illuminated_fraction(0.7, 0.3, 1.0), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_earth_has_no_physical_ephemeris() {
        assert!(physical_ephemeris(Planet::Earth, 2451545.0).is_none());
        assert!(magnitude(Planet::Earth, 1.0, 1.0, 0.0, None).is_none());
    }
}
