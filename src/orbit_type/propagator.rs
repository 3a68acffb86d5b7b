//! # Position of a small body from its orbital elements
//!
//! The chain evaluated for one instant `t` (dynamical time):
//!
//! 1. true anomaly and radius vector from the element set (Kepler, Barker or near-parabolic),
//! 2. heliocentric equatorial J2000 position through the [`OrbitalPlane`] constants,
//! 3. geocentric vector by adding the geometric position of the Sun at `t`,
//! 4. light time `τ = 0.0057755183 · Δ` and a new solution at `t − τ`,
//! 5. right ascension, declination and, on request, the observer's parallax.
//!
//! Step 4 is done **once** by default ([`LightTime::OneStep`]), which reproduces the classical
//! reference values. [`LightTime::Iterative`] repeats it until `τ` is stable and
//! [`LightTime::Geometric`] skips it, which is how the magnitude of a parabolic comet is evaluated.
//!
//! The resulting coordinates are astrometric, referred to the equator and equinox of J2000: no
//! aberration nor nutation is applied.
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::almanac_errors::AlmanacError;
use crate::constants::{AstronomicalUnit, Degree, JulianDay, LIGHT_TIME_PER_AU};
use crate::coordinates::{EquatorialCoordinates, RectangularCoordinates};
use crate::observation::{ObservationConfig, ObservationTime};
use crate::orbit_type::{OrbitRef, OrbitalPlane};
use crate::planets::apparent::topocentric_position as parallax_correction;
use crate::planets::physical::{elongation, phase_angle};
use crate::planets::sun;

/// Cap of the iterative light-time loop.
pub const MAX_LIGHT_TIME_ITERATIONS: usize = 10;

/// Convergence threshold of the iterative light-time loop, days.
pub const LIGHT_TIME_TOLERANCE: f64 = 1e-9;

/// Light-time retraction strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LightTime {
    /// A single retraction to `t − τ`.
    #[default]
    OneStep,
    /// Retraction repeated until `τ` changes by less than [`LIGHT_TIME_TOLERANCE`].
    Iterative,
    /// No retraction: the body at `t` itself. `τ` is still reported.
    Geometric,
}

/// Geocentric (or topocentric) position of a small body with its Sun–Earth–body geometry.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OrbitPosition {
    /// Right ascension and declination, equator and equinox of J2000
    pub equatorial: EquatorialCoordinates,
    /// Distance to the Earth `Δ`, AU
    pub distance: AstronomicalUnit,
    /// Distance to the Sun `r` at `t − τ`, AU
    pub heliocentric_distance: AstronomicalUnit,
    /// Distance Earth–Sun `R`, AU
    pub sun_distance: AstronomicalUnit,
    /// Light time `τ`, days
    pub light_time: f64,
    /// Sun–body–Earth angle, degrees
    pub phase_angle: Degree,
    /// Body–Earth–Sun angle, degrees
    pub elongation: Degree,
}

impl OrbitPosition {
    /// Apparent magnitude from the photometric model of `elements`, if any.
    pub fn magnitude<'a>(&self, elements: impl Into<OrbitRef<'a>>) -> Option<f64> {
        elements.into().magnitude_model().map(|model| {
            model.apparent_magnitude(self.heliocentric_distance, self.distance, self.phase_angle)
        })
    }
}

/// Geocentric position of the body at the dynamical time `jde`.
///
/// Arguments
/// ---------
/// * `elements`: orbital elements, ecliptic and equinox of J2000, owned wrapper or borrowed view.
/// * `jde`: Julian Ephemeris Day.
/// * `light_time`: retraction strategy.
///
/// Returns
/// --------
/// * The [`OrbitPosition`] seen from the centre of the Earth.
///
/// Errors
/// ------
/// * [`AlmanacError::NonConvergence`] from the anomaly solvers.
///
/// See also
/// --------
/// * [`topocentric_position`] – same, corrected for the observer's parallax.
pub fn geocentric_position<'a>(
    elements: impl Into<OrbitRef<'a>>,
    jde: JulianDay,
    light_time: LightTime,
) -> Result<OrbitPosition, AlmanacError> {
    let elements = elements.into();
    let plane = OrbitalPlane::new(elements.orientation());
    let sun = sun::geometric_rectangular_j2000(jde);

    let solve = |t: JulianDay| -> Result<(RectangularCoordinates, AstronomicalUnit), AlmanacError> {
        let (v, r) = elements.true_anomaly_and_radius(t)?;
        Ok((plane.heliocentric_position(v, r) + sun, r))
    };

    let (mut geocentric, mut r) = solve(jde)?;
    let mut tau = LIGHT_TIME_PER_AU * geocentric.norm();
    if light_time != LightTime::Geometric {
        (geocentric, r) = solve(jde - tau)?;
    }

    if light_time == LightTime::Iterative {
        for iteration in 1..=MAX_LIGHT_TIME_ITERATIONS {
            let next = LIGHT_TIME_PER_AU * geocentric.norm();
            if (next - tau).abs() < LIGHT_TIME_TOLERANCE {
                debug!(iteration, tau, "light time converged");
                break;
            }
            tau = next;
            (geocentric, r) = solve(jde - tau)?;
        }
    }

    let (equatorial, distance) = EquatorialCoordinates::from_rectangular(&geocentric);
    let sun_distance = sun.norm();
    Ok(OrbitPosition {
        equatorial,
        distance,
        heliocentric_distance: r,
        sun_distance,
        light_time: tau,
        phase_angle: phase_angle(r, distance, sun_distance),
        elongation: elongation(r, distance, sun_distance),
    })
}

/// Position of the body seen from the observer of `config`.
///
/// The geocentric position of [`geocentric_position`] is shifted by the geocentric parallax
/// computed from the observer's globe factors `ρ sin φ′`, `ρ cos φ′`.
pub fn topocentric_position<'a>(
    elements: impl Into<OrbitRef<'a>>,
    time: &ObservationTime,
    config: &ObservationConfig,
    light_time: LightTime,
) -> Result<OrbitPosition, AlmanacError> {
    let geocentric = geocentric_position(elements, time.jde(), light_time)?;
    Ok(OrbitPosition {
        equatorial: parallax_correction(&geocentric.equatorial, geocentric.distance, time, config),
        ..geocentric
    })
}

#[cfg(test)]
mod propagator_test {
    use super::*;
    use crate::coordinates::GeographicalCoordinates;
    use crate::orbit_type::cometary_element::CometaryElements;
    use crate::orbit_type::keplerian_element::test_keplerian_element::encke;
    use crate::orbit_type::OrbitalElements;
    use crate::photometry::magnitude_models::MagnitudeModel;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_encke_1990_october_6() {
        let elements = OrbitalElements::from(encke());
        let position = geocentric_position(&elements, 2448170.5, LightTime::OneStep).unwrap();

        assert_abs_diff_eq!(
            position.equatorial.right_ascension_degrees(),
            158.5590374,
            epsilon = 1e-5
        );
        assert_abs_diff_eq!(position.equatorial.declination(), 19.1584614, epsilon = 1e-5);
        assert_abs_diff_eq!(position.distance, 0.8242809, epsilon = 1e-5);
        assert_abs_diff_eq!(position.heliocentric_distance, 0.6525755, epsilon = 1e-5);
        assert_abs_diff_eq!(position.light_time, LIGHT_TIME_PER_AU * 0.82428, epsilon = 1e-5);
    }

    #[test]
    fn test_iterative_light_time_stays_close_to_one_step() {
        let elements = OrbitalElements::from(encke());
        let one = geocentric_position(&elements, 2448170.5, LightTime::OneStep).unwrap();
        let many = geocentric_position(&elements, 2448170.5, LightTime::Iterative).unwrap();
        assert!(one.equatorial.angular_separation(&many.equatorial) < 1e-4);
        assert_abs_diff_eq!(one.distance, many.distance, epsilon = 1e-6);
    }

    #[test]
    fn test_geometric_position_is_not_retracted() {
        let comet = CometaryElements::parabolic(1.0, 30.0, 80.0, 100.0, 2451545.0).unwrap();
        let elements = OrbitalElements::from(comet);
        let geometric = geocentric_position(&elements, 2451545.0, LightTime::Geometric).unwrap();
        let retracted = geocentric_position(&elements, 2451545.0, LightTime::OneStep).unwrap();

        // Exactly at perihelion
        assert_abs_diff_eq!(geometric.heliocentric_distance, 1.0, epsilon = 1e-12);
        assert!(retracted.heliocentric_distance > geometric.heliocentric_distance);
        assert_abs_diff_eq!(
            geometric.light_time,
            LIGHT_TIME_PER_AU * geometric.distance,
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_parabolic_comet_geometry() {
        let comet = CometaryElements::parabolic(1.0, 30.0, 80.0, 100.0, 2451545.0).unwrap();
        let elements = OrbitalElements::from(comet);
        let position = geocentric_position(&elements, 2451545.0, LightTime::OneStep).unwrap();

        // At perihelion the retraction moves the body by a tiny amount only
        assert_abs_diff_eq!(position.heliocentric_distance, 1.0, epsilon = 1e-4);
        assert!(position.distance > 0.0 && position.distance < 2.1);
        assert!((0.0..=180.0).contains(&position.phase_angle));
        assert!((0.0..=180.0).contains(&position.elongation));
    }

    #[test]
    fn test_magnitude_from_model() {
        let elements = OrbitalElements::from(
            encke().with_magnitude_model(MagnitudeModel::HN {
                absolute_magnitude: 10.0,
                slope: 4.0,
            }),
        );
        let position = geocentric_position(&elements, 2448170.5, LightTime::OneStep).unwrap();
        let expected = 10.0
            + 5.0 * position.distance.log10()
            + 10.0 * position.heliocentric_distance.log10();
        assert_abs_diff_eq!(position.magnitude(&elements).unwrap(), expected, epsilon = 1e-12);
        assert!(position.magnitude(&OrbitalElements::from(encke())).is_none());
    }

    #[test]
    fn test_topocentric_shift_is_small() {
        let elements = OrbitalElements::from(encke());
        let site = GeographicalCoordinates::new(-71.0833, 42.3333).unwrap();
        let config = ObservationConfig::new(site, 100.0);
        let time = ObservationTime::new(2448170.5, 57.0);

        let geo = geocentric_position(&elements, time.jde(), LightTime::OneStep).unwrap();
        let topo = topocentric_position(&elements, &time, &config, LightTime::OneStep).unwrap();
        let shift = geo.equatorial.angular_separation(&topo.equatorial);
        // Parallax never exceeds 8.794″ / Δ
        assert!(shift > 0.0);
        assert!(shift < 8.8 / 3600.0 / geo.distance);
        assert_eq!(topo.distance, geo.distance);
    }
}
