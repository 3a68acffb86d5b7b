//! # Orbital element representations
//!
//! Heliocentric two-body orbits of comets and asteroids, referred to the ecliptic and equinox
//! of J2000:
//!
//! - [`keplerian_element`] – elliptical orbits `(a, e, i, Ω, ω, T)`,
//! - [`cometary_element`] – perihelion based orbits `(q, e, i, Ω, ω, T)`, used for the parabolic
//!   and near-parabolic propagators,
//! - [`catalog`] – loosely typed catalog records and their conversion, with
//!   [`AlmanacError::MissingOrbitalField`] when a required field is absent,
//! - [`propagator`] – the position pipeline: anomaly, orbital plane, geocentric vector, light time
//!   and parallax.
//!
//! The [`OrbitalElements`] enum is the type-erased wrapper carried by catalogs, [`OrbitRef`] its
//! borrowed counterpart taken by the propagators.
//!
//! ## Typical workflow
//!
//! ```rust
//! use almanac::orbit_type::keplerian_element::KeplerianElements;
//! use almanac::orbit_type::propagator::{geocentric_position, LightTime};
//! use almanac::orbit_type::OrbitalElements;
//! use almanac::time::CalendarDate;
//!
//! // Comet Encke, 1990
//! let perihelion = CalendarDate::from_ymd(1990, 10, 28)?.julian_day() + 0.54502;
//! let encke = KeplerianElements::new(2.2091404, 0.8502196, 11.94524, 334.75006, 186.23352, perihelion)?;
//! let elements = OrbitalElements::Keplerian(encke);
//!
//! let t = CalendarDate::from_ymd(1990, 10, 6)?.julian_day();
//! let position = geocentric_position(&elements, t, LightTime::OneStep)?;
//! assert!((position.distance - 0.8243).abs() < 1e-3);
//! # Ok::<(), almanac::almanac_errors::AlmanacError>(())
//! ```
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::almanac_errors::AlmanacError;
use crate::constants::{
    AstronomicalUnit, Degree, JulianDay, COS_OBLIQUITY_J2000, RADEG, SIN_OBLIQUITY_J2000,
};
use crate::coordinates::{Coordinate, FullCircle, RectangularCoordinates};
use crate::orbit_type::cometary_element::{CometaryElements, ParabolicElements};
use crate::orbit_type::keplerian_element::KeplerianElements;
use crate::photometry::magnitude_models::MagnitudeModel;

/// Catalog records and their conversion into orbital elements.
pub mod catalog;

/// Perihelion based elements for parabolic and near-parabolic orbits.
pub mod cometary_element;

/// Classical elements of elliptical orbits.
pub mod keplerian_element;

/// Geocentric and topocentric positions from orbital elements.
pub mod propagator;

/// Orientation angles of an orbit, degrees, after normalisation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Orientation {
    /// Inclination `i` in `[0, 180]`
    pub inclination: Degree,
    /// Longitude of the ascending node `Ω` in `[0, 360)`
    pub ascending_node_longitude: Degree,
    /// Argument of perihelion `ω` in `[0, 360)`
    pub periapsis_argument: Degree,
}

impl Orientation {
    /// Normalise the three orientation angles.
    ///
    /// The inclination is reduced modulo 360°. A value above 180° describes the same orbit as
    /// `360° − i` with the node and the argument of perihelion turned by 180°, which is the form
    /// kept. Retrograde orbits (`90° < i ≤ 180°`) are left untouched, folding them would reverse
    /// the sense of motion.
    pub fn normalized(inclination: Degree, node: Degree, argument: Degree) -> Self {
        let mut i = Coordinate::<FullCircle>::new(inclination).value();
        let mut node = node;
        let mut argument = argument;
        if i > 180.0 {
            i = 360.0 - i;
            node += 180.0;
            argument += 180.0;
        }
        Orientation {
            inclination: i,
            ascending_node_longitude: Coordinate::<FullCircle>::new(node).value(),
            periapsis_argument: Coordinate::<FullCircle>::new(argument).value(),
        }
    }
}

/// Constants `A, B, C` (degrees) and `a, b, c` of the orbital plane, equatorial J2000.
///
/// Formula
/// -------
/// ```text
/// F = cos Ω                 P = −sin Ω cos i
/// G = sin Ω cos ε           Q = cos Ω cos i cos ε − sin i sin ε
/// H = sin Ω sin ε           R = cos Ω cos i sin ε + sin i cos ε
///
/// tan A = F/P   tan B = G/Q   tan C = H/R
/// a = √(F² + P²)   b = √(G² + Q²)   c = √(H² + R²)
/// ```
/// and the heliocentric equatorial position is `x = r a sin(A + ω + v)`, with `y`, `z` alike.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitalPlane {
    pub a_angle: Degree,
    pub b_angle: Degree,
    pub c_angle: Degree,
    pub a: f64,
    pub b: f64,
    pub c: f64,
    periapsis_argument: Degree,
}

impl OrbitalPlane {
    pub fn new(orientation: &Orientation) -> Self {
        let (sin_node, cos_node) = (orientation.ascending_node_longitude * RADEG).sin_cos();
        let (sin_i, cos_i) = (orientation.inclination * RADEG).sin_cos();

        let f = cos_node;
        let g = sin_node * COS_OBLIQUITY_J2000;
        let h = sin_node * SIN_OBLIQUITY_J2000;
        let p = -sin_node * cos_i;
        let q = cos_node * cos_i * COS_OBLIQUITY_J2000 - sin_i * SIN_OBLIQUITY_J2000;
        let r = cos_node * cos_i * SIN_OBLIQUITY_J2000 + sin_i * COS_OBLIQUITY_J2000;

        OrbitalPlane {
            a_angle: f.atan2(p) / RADEG,
            b_angle: g.atan2(q) / RADEG,
            c_angle: h.atan2(r) / RADEG,
            a: f.hypot(p),
            b: g.hypot(q),
            c: h.hypot(r),
            periapsis_argument: orientation.periapsis_argument,
        }
    }

    /// Heliocentric equatorial J2000 position for a true anomaly `v` and a radius `r`.
    pub fn heliocentric_position(
        &self,
        true_anomaly: Degree,
        radius: AstronomicalUnit,
    ) -> RectangularCoordinates {
        let u = self.periapsis_argument + true_anomaly;
        RectangularCoordinates::new(
            radius * self.a * ((self.a_angle + u) * RADEG).sin(),
            radius * self.b * ((self.b_angle + u) * RADEG).sin(),
            radius * self.c * ((self.c_angle + u) * RADEG).sin(),
        )
    }
}

/// Orbital elements of a small body.
///
/// Variants
/// --------
/// * `Keplerian` – elliptical orbit, propagated with Kepler's equation.
/// * `Cometary` – perihelion distance form, propagated with Barker's equation when `e = 1` and
///   with the near-parabolic solver otherwise.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum OrbitalElements {
    Keplerian(KeplerianElements),
    Cometary(CometaryElements),
}

impl OrbitalElements {
    /// Borrowed view of the element set.
    pub fn as_orbit(&self) -> OrbitRef<'_> {
        OrbitRef::from(self)
    }

    pub fn orientation(&self) -> &Orientation {
        match self {
            OrbitalElements::Keplerian(k) => &k.orientation,
            OrbitalElements::Cometary(c) => &c.orientation,
        }
    }

    pub fn eccentricity(&self) -> f64 {
        self.as_orbit().eccentricity()
    }

    pub fn perihelion_distance(&self) -> AstronomicalUnit {
        self.as_orbit().perihelion_distance()
    }

    pub fn perihelion_time(&self) -> JulianDay {
        self.as_orbit().perihelion_time()
    }

    pub fn magnitude_model(&self) -> Option<&MagnitudeModel> {
        match self {
            OrbitalElements::Keplerian(k) => k.magnitude_model.as_ref(),
            OrbitalElements::Cometary(c) => c.magnitude_model.as_ref(),
        }
    }

    /// True anomaly (degrees) and radius vector (AU) at the dynamical time `jde`.
    ///
    /// Errors
    /// ------
    /// * [`AlmanacError::NonConvergence`] from the anomaly solvers.
    pub fn true_anomaly_and_radius(
        &self,
        jde: JulianDay,
    ) -> Result<(Degree, AstronomicalUnit), AlmanacError> {
        self.as_orbit().true_anomaly_and_radius(jde)
    }

    /// Heliocentric equatorial J2000 position at `jde`.
    pub fn heliocentric_position(
        &self,
        jde: JulianDay,
    ) -> Result<RectangularCoordinates, AlmanacError> {
        let (v, r) = self.true_anomaly_and_radius(jde)?;
        Ok(OrbitalPlane::new(self.orientation()).heliocentric_position(v, r))
    }

    pub fn as_keplerian(&self) -> Option<&KeplerianElements> {
        if let OrbitalElements::Keplerian(ref k) = self {
            Some(k)
        } else {
            None
        }
    }

    pub fn as_cometary(&self) -> Option<&CometaryElements> {
        if let OrbitalElements::Cometary(ref c) = self {
            Some(c)
        } else {
            None
        }
    }
}

/// Borrowed element set, what the propagators read.
///
/// Built from an [`OrbitalElements`] or straight from one of the element types, so a target
/// holding its elements never clones them to evaluate a position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OrbitRef<'a> {
    Keplerian(&'a KeplerianElements),
    Cometary(&'a CometaryElements),
}

impl<'a> OrbitRef<'a> {
    pub fn orientation(self) -> &'a Orientation {
        match self {
            OrbitRef::Keplerian(k) => &k.orientation,
            OrbitRef::Cometary(c) => &c.orientation,
        }
    }

    pub fn eccentricity(self) -> f64 {
        match self {
            OrbitRef::Keplerian(k) => k.eccentricity,
            OrbitRef::Cometary(c) => c.eccentricity,
        }
    }

    pub fn perihelion_distance(self) -> AstronomicalUnit {
        match self {
            OrbitRef::Keplerian(k) => k.perihelion_distance(),
            OrbitRef::Cometary(c) => c.perihelion_distance,
        }
    }

    pub fn perihelion_time(self) -> JulianDay {
        match self {
            OrbitRef::Keplerian(k) => k.perihelion_time,
            OrbitRef::Cometary(c) => c.perihelion_time,
        }
    }

    pub fn magnitude_model(self) -> Option<&'a MagnitudeModel> {
        match self {
            OrbitRef::Keplerian(k) => k.magnitude_model.as_ref(),
            OrbitRef::Cometary(c) => c.magnitude_model.as_ref(),
        }
    }

    pub fn true_anomaly_and_radius(
        self,
        jde: JulianDay,
    ) -> Result<(Degree, AstronomicalUnit), AlmanacError> {
        match self {
            OrbitRef::Keplerian(k) => k.true_anomaly_and_radius(jde),
            OrbitRef::Cometary(c) => c.true_anomaly_and_radius(jde),
        }
    }
}

impl<'a> From<&'a OrbitalElements> for OrbitRef<'a> {
    fn from(elements: &'a OrbitalElements) -> Self {
        match elements {
            OrbitalElements::Keplerian(k) => OrbitRef::Keplerian(k),
            OrbitalElements::Cometary(c) => OrbitRef::Cometary(c),
        }
    }
}

impl<'a> From<&'a KeplerianElements> for OrbitRef<'a> {
    fn from(elements: &'a KeplerianElements) -> Self {
        OrbitRef::Keplerian(elements)
    }
}

impl<'a> From<&'a CometaryElements> for OrbitRef<'a> {
    fn from(elements: &'a CometaryElements) -> Self {
        OrbitRef::Cometary(elements)
    }
}

impl<'a> From<&'a ParabolicElements> for OrbitRef<'a> {
    fn from(elements: &'a ParabolicElements) -> Self {
        OrbitRef::Cometary(elements.elements())
    }
}

impl From<KeplerianElements> for OrbitalElements {
    fn from(elements: KeplerianElements) -> Self {
        OrbitalElements::Keplerian(elements)
    }
}

impl From<CometaryElements> for OrbitalElements {
    fn from(elements: CometaryElements) -> Self {
        OrbitalElements::Cometary(elements)
    }
}

impl fmt::Display for OrbitalElements {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrbitalElements::Keplerian(k) => {
                writeln!(f, "[Keplerian representation]")?;
                write!(f, "{k}")
            }
            OrbitalElements::Cometary(c) => {
                writeln!(f, "[Cometary representation]")?;
                write!(f, "{c}")
            }
        }
    }
}
