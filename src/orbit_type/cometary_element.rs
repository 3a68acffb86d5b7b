use std::fmt;

use serde::{Deserialize, Serialize};

use crate::almanac_errors::AlmanacError;
use crate::constants::{AstronomicalUnit, Degree, JulianDay};
use crate::kepler::{barker, near_parabolic};
use crate::orbit_type::Orientation;
use crate::photometry::magnitude_models::MagnitudeModel;

/// # Cometary orbital elements
///
/// Perihelion based elements `(q, e, i, Ω, ω, T)`, the natural form for **parabolic and
/// near-parabolic** comets, whose semi-major axis is infinite or badly determined.
///
/// Units & conventions
/// --------------------
/// - Distances in **AU**; angles in **degrees**; perihelion time in **JDE**.
/// - Angles refer to the ecliptic and equinox of J2000.
/// - `e = 1` selects Barker's equation, any other eccentricity Landgraf's near-parabolic
///   solution, which stays accurate for `e` roughly in `[0.98, 1.1]`.
///
/// See also
/// ------------
/// * [`crate::orbit_type::keplerian_element::KeplerianElements`] – elliptical orbits.
/// * [`barker`], [`near_parabolic`] – the anomaly solvers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CometaryElements {
    /// Perihelion distance `q` (AU).
    pub perihelion_distance: AstronomicalUnit,

    /// Eccentricity `e` (≥ 0).
    pub eccentricity: f64,

    pub orientation: Orientation,

    /// Time of perihelion passage `T` (JDE).
    pub perihelion_time: JulianDay,

    pub magnitude_model: Option<MagnitudeModel>,
}

impl CometaryElements {
    /// Validated elements.
    ///
    /// Errors
    /// ------
    /// * [`AlmanacError::InvalidOrbit`] when `q ≤ 0`, `e < 0` or a value is not finite.
    pub fn new(
        perihelion_distance: AstronomicalUnit,
        eccentricity: f64,
        inclination: Degree,
        ascending_node_longitude: Degree,
        periapsis_argument: Degree,
        perihelion_time: JulianDay,
    ) -> Result<Self, AlmanacError> {
        if !(perihelion_distance > 0.0 && perihelion_distance.is_finite()) {
            return Err(AlmanacError::InvalidOrbit(format!(
                "perihelion distance {perihelion_distance} AU must be positive"
            )));
        }
        if !(eccentricity >= 0.0 && eccentricity.is_finite()) {
            return Err(AlmanacError::InvalidOrbit(format!(
                "eccentricity {eccentricity} must be non-negative"
            )));
        }
        if !perihelion_time.is_finite() {
            return Err(AlmanacError::InvalidOrbit(
                "perihelion time is not finite".into(),
            ));
        }
        Ok(CometaryElements {
            perihelion_distance,
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

    /// Parabolic elements (`e = 1`).
    pub fn parabolic(
        perihelion_distance: AstronomicalUnit,
        inclination: Degree,
        ascending_node_longitude: Degree,
        periapsis_argument: Degree,
        perihelion_time: JulianDay,
    ) -> Result<Self, AlmanacError> {
        CometaryElements::new(
            perihelion_distance,
            1.0,
            inclination,
            ascending_node_longitude,
            periapsis_argument,
            perihelion_time,
        )
    }

    pub fn with_magnitude_model(mut self, model: MagnitudeModel) -> Self {
        self.magnitude_model = Some(model);
        self
    }

    pub fn is_parabolic(&self) -> bool {
        self.eccentricity == 1.0
    }

    /// True anomaly (degrees) and radius vector (AU) at `jde`.
    ///
    /// Errors
    /// ------
    /// * [`AlmanacError::NonConvergence`] from the near-parabolic solver.
    pub fn true_anomaly_and_radius(
        &self,
        jde: JulianDay,
    ) -> Result<(Degree, AstronomicalUnit), AlmanacError> {
        let dt = jde - self.perihelion_time;
        if self.is_parabolic() {
            Ok(barker(self.perihelion_distance, dt))
        } else {
            near_parabolic(self.perihelion_distance, self.eccentricity, dt)
        }
    }

    /// The same elements typed as parabolic, or `self` back when `e ≠ 1`.
    pub fn into_parabolic(self) -> Result<ParabolicElements, CometaryElements> {
        if self.is_parabolic() {
            Ok(ParabolicElements(self))
        } else {
            Err(self)
        }
    }
}

/// Cometary elements whose eccentricity is exactly 1.
///
/// Only built through [`CometaryElements::into_parabolic`] or `TryFrom`, and only readable
/// afterwards, so the Barker solver is the one always used.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "CometaryElements", into = "CometaryElements")]
pub struct ParabolicElements(CometaryElements);

impl ParabolicElements {
    pub fn elements(&self) -> &CometaryElements {
        &self.0
    }
}

impl TryFrom<CometaryElements> for ParabolicElements {
    type Error = AlmanacError;

    fn try_from(elements: CometaryElements) -> Result<Self, Self::Error> {
        elements.into_parabolic().map_err(|c| {
            AlmanacError::InvalidOrbit(format!(
                "eccentricity {} is not parabolic",
                c.eccentricity
            ))
        })
    }
}

impl From<ParabolicElements> for CometaryElements {
    fn from(elements: ParabolicElements) -> Self {
        elements.0
    }
}

impl fmt::Display for CometaryElements {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Cometary Elements (J2000 ecliptic)")?;
        writeln!(f, "-------------------------------------------")?;
        writeln!(
            f,
            "  q   (perihelion distance)   = {:.6} AU",
            self.perihelion_distance
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
