//! # Keplerian orbital elements
//!
//! Classical elements of an **elliptical** heliocentric orbit:
//!
//! 1. **a** – Semi-major axis (AU)
//! 2. **e** – Eccentricity, `0 ≤ e < 1`
//! 3. **i** – Inclination (degrees)
//! 4. **Ω** – Longitude of ascending node (degrees)
//! 5. **ω** – Argument of perihelion (degrees)
//! 6. **T** – Time of perihelion passage (Julian Ephemeris Day)
//!
//! Angles refer to the ecliptic and equinox of J2000. Asteroid catalogs usually publish a mean
//! anomaly at an epoch instead of `T`; [`KeplerianElements::from_mean_anomaly`] derives `T` from
//! it with the mean motion `n = 0.9856076686° / a^{3/2}` per day.
//!
//! ## Units
//!
//! - Lengths: **AU**
//! - Angles: **degrees**
//! - Time: **days**, dynamical time
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::almanac_errors::AlmanacError;
use crate::constants::{AstronomicalUnit, Degree, JulianDay, MEAN_MOTION_1AU, RADEG};
use crate::kepler::{eccentric_anomaly, true_anomaly};
use crate::orbit_type::Orientation;
use crate::photometry::magnitude_models::MagnitudeModel;

/// Convergence threshold of Kepler's equation used by the propagator, degrees.
pub const KEPLER_TOLERANCE: Degree = 1e-9;

/// Keplerian orbital elements of an elliptical orbit.
///
/// See also
/// --------
/// * [`crate::orbit_type::cometary_element::CometaryElements`] – parabolic and near-parabolic
///   orbits.
/// * [`eccentric_anomaly`] – solver used by [`KeplerianElements::true_anomaly_and_radius`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeplerianElements {
    pub semi_major_axis: AstronomicalUnit,
    pub eccentricity: f64,
    pub orientation: Orientation,
    pub perihelion_time: JulianDay,
    pub magnitude_model: Option<MagnitudeModel>,
}

impl KeplerianElements {
    /// Validated elements.
    ///
    /// Arguments
    /// ---------
    /// * `semi_major_axis`: `a > 0`, AU.
    /// * `eccentricity`: `0 ≤ e < 1`.
    /// * `inclination`, `ascending_node_longitude`, `periapsis_argument`: degrees, normalised with
    ///   [`Orientation::normalized`].
    /// * `perihelion_time`: Julian Ephemeris Day of the perihelion passage.
    ///
    /// Errors
    /// ------
    /// * [`AlmanacError::InvalidOrbit`] when `a` or `e` is out of range or not finite.
    pub fn new(
        semi_major_axis: AstronomicalUnit,
        eccentricity: f64,
        inclination: Degree,
        ascending_node_longitude: Degree,
        periapsis_argument: Degree,
        perihelion_time: JulianDay,
    ) -> Result<Self, AlmanacError> {
        if !(semi_major_axis > 0.0 && semi_major_axis.is_finite()) {
            return Err(AlmanacError::InvalidOrbit(format!(
                "semi-major axis {semi_major_axis} AU must be positive"
            )));
        }
        if !(0.0..1.0).contains(&eccentricity) {
            return Err(AlmanacError::InvalidOrbit(format!(
                "eccentricity {eccentricity} outside [0, 1) for an elliptical orbit"
            )));
        }
        if !perihelion_time.is_finite() {
            return Err(AlmanacError::InvalidOrbit(
                "perihelion time is not finite".into(),
            ));
        }
        Ok(KeplerianElements {
            semi_major_axis,
            eccentricity,
            orientation: Orientation::normalized(
                inclination,
                ascending_node_longitude,
                periapsis_argument,
            ),
            perihelion_time,
            magnitude_model: None,
        })
    }

    /// Elements from a mean anomaly `M` at `epoch`, the perihelion time being `T = epoch − M/n`.
    pub fn from_mean_anomaly(
        semi_major_axis: AstronomicalUnit,
        eccentricity: f64,
        inclination: Degree,
        ascending_node_longitude: Degree,
        periapsis_argument: Degree,
        mean_anomaly: Degree,
        epoch: JulianDay,
    ) -> Result<Self, AlmanacError> {
        let mut elements = KeplerianElements::new(
            semi_major_axis,
            eccentricity,
            inclination,
            ascending_node_longitude,
            periapsis_argument,
            epoch,
        )?;
        elements.perihelion_time = epoch - mean_anomaly / elements.mean_motion();
        Ok(elements)
    }

    pub fn with_magnitude_model(mut self, model: MagnitudeModel) -> Self {
        self.magnitude_model = Some(model);
        self
    }

    /// Mean daily motion `n`, degrees per day.
    pub fn mean_motion(&self) -> Degree {
        MEAN_MOTION_1AU / self.semi_major_axis.powf(1.5)
    }

    /// Orbital period, days.
    pub fn period(&self) -> f64 {
        360.0 / self.mean_motion()
    }

    /// Perihelion distance `q = a (1 − e)`.
    pub fn perihelion_distance(&self) -> AstronomicalUnit {
        self.semi_major_axis * (1.0 - self.eccentricity)
    }

    /// Aphelion distance `Q = a (1 + e)`.
    pub fn aphelion_distance(&self) -> AstronomicalUnit {
        self.semi_major_axis * (1.0 + self.eccentricity)
    }

    /// Mean anomaly `M = n (t − T)` at `jde`, degrees, not reduced.
    pub fn mean_anomaly(&self, jde: JulianDay) -> Degree {
        self.mean_motion() * (jde - self.perihelion_time)
    }

    /// True anomaly (degrees) and radius vector (AU) at `jde`.
    ///
    /// Errors
    /// ------
    /// * [`AlmanacError::NonConvergence`] if Kepler's equation does not converge.
    pub fn true_anomaly_and_radius(
        &self,
        jde: JulianDay,
    ) -> Result<(Degree, AstronomicalUnit), AlmanacError> {
        let m = self.mean_anomaly(jde).rem_euclid(360.0);
        let e_anomaly = eccentric_anomaly(self.eccentricity, m, KEPLER_TOLERANCE)?;
        let v = true_anomaly(self.eccentricity, e_anomaly);
        let r = self.semi_major_axis
            * (1.0 - self.eccentricity * (e_anomaly * RADEG).cos());
        Ok((v, r))
    }
}

impl fmt::Display for KeplerianElements {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Keplerian Elements (J2000 ecliptic)")?;
        writeln!(f, "-------------------------------------------")?;
        writeln!(
            f,
            "  a   (semi-major axis)       = {:.6} AU",
            self.semi_major_axis
        )?;
        writeln!(f, "  e   (eccentricity)          = {:.6}", self.eccentricity)?;
        writeln!(
            f,
            "  i   (inclination)           = {:.6}°",
            self.orientation.inclination
        )?;
        writeln!(
            f,
            "  Ω   (longitude of node)     = {:.6}°",
            self.orientation.ascending_node_longitude
        )?;
        writeln!(
            f,
            "  ω   (argument of periapsis) = {:.6}°",
            self.orientation.periapsis_argument
        )?;
        writeln!(
            f,
            "  T   (perihelion passage)    = JDE {:.6}",
            self.perihelion_time
        )
    }
}

#[cfg(test)]
pub(crate) mod test_keplerian_element {
    use super::*;
    use approx::assert_abs_diff_eq;

    pub(crate) fn encke() -> KeplerianElements {
        KeplerianElements::new(
            2.2091404,
            0.8502196,
            11.94524,
            334.75006,
            186.23352,
            2448193.04502,
        )
        .unwrap()
    }

    #[test]
    fn test_validation() {
        assert!(matches!(
            KeplerianElements::new(0.0, 0.5, 0.0, 0.0, 0.0, 2451545.0),
            Err(AlmanacError::InvalidOrbit(_))
        ));
        assert!(matches!(
            KeplerianElements::new(1.0, 1.0, 0.0, 0.0, 0.0, 2451545.0),
            Err(AlmanacError::InvalidOrbit(_))
        ));
        assert!(matches!(
            KeplerianElements::new(1.0, -0.1, 0.0, 0.0, 0.0, 2451545.0),
            Err(AlmanacError::InvalidOrbit(_))
        ));
    }

    #[test]
    fn test_encke_motion() {
        let encke = encke();
        assert_abs_diff_eq!(encke.mean_motion(), 0.300171252, epsilon = 1e-8);
        assert_abs_diff_eq!(encke.perihelion_distance(), 0.3309, epsilon = 1e-4);
        assert_abs_diff_eq!(encke.period() / 365.25, 3.2835, epsilon = 1e-3);
    }

    #[test]
    fn test_from_mean_anomaly_recovers_perihelion() {
        let encke = encke();
        let epoch = 2448170.5;
        let m = encke.mean_anomaly(epoch);
        let rebuilt =
            KeplerianElements::from_mean_anomaly(2.2091404, 0.8502196, 11.94524, 334.75006, 186.23352, m, epoch)
                .unwrap();
        assert_abs_diff_eq!(rebuilt.perihelion_time, encke.perihelion_time, epsilon = 1e-9);
    }

    #[test]
    fn test_radius_at_perihelion_and_aphelion() {
        let encke = encke();
        let (v, r) = encke.true_anomaly_and_radius(encke.perihelion_time).unwrap();
        assert_abs_diff_eq!(v, 0.0, epsilon = 1e-9);
        assert_abs_diff_eq!(r, encke.perihelion_distance(), epsilon = 1e-12);

        let (v, r) = encke
            .true_anomaly_and_radius(encke.perihelion_time + encke.period() / 2.0)
            .unwrap();
        assert_abs_diff_eq!(v.abs(), 180.0, epsilon = 1e-6);
        assert_abs_diff_eq!(r, encke.aphelion_distance(), epsilon = 1e-9);
    }
}
