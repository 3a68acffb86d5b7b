//! # Solar system bodies
//!
//! Series-based positions of the Sun, the Moon and the eight planets, and their physical
//! ephemerides.
//!
//! - [`vsop`] – truncated VSOP87D heliocentric series of the planets (including the Earth).
//! - [`apparent`] – the apparent geocentric position algorithm shared by every planet: vector
//!   difference with the Earth, light-time retraction, annual aberration, FK5 correction and
//!   nutation.
//! - [`sun`] – low and high accuracy positions of the Sun and its geometric J2000 position used
//!   by the orbit propagators.
//! - [`moon`] – geocentric position of the Moon, illumination, bright limb and parallax.
//! - [`moon_phase`] – instants of the new Moon, quarters and full Moon.
//! - [`physical`] – magnitudes, phase angles, elongations and semidiameters.
//!
//! Every body exposes the same capability through [`Heliocentric`].
pub mod apparent;
pub mod moon;
pub mod moon_phase;
pub mod physical;
pub mod sun;
pub mod vsop;

use serde::{Deserialize, Serialize};

use crate::constants::{AstronomicalUnit, Degree, JulianDay, AU};
use crate::coordinates::RectangularCoordinates;

pub use vsop::Planet;

/// Heliocentric ecliptical position, referred to the mean ecliptic and equinox of date.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HeliocentricPosition {
    /// Longitude `[0, 360)` in degrees
    pub longitude: Degree,
    /// Latitude in degrees
    pub latitude: Degree,
    /// Radius vector in AU
    pub radius: AstronomicalUnit,
}

impl HeliocentricPosition {
    pub fn to_rectangular(&self) -> RectangularCoordinates {
        RectangularCoordinates::from_spherical(self.longitude, self.latitude, self.radius)
    }

    pub fn from_rectangular(rect: &RectangularCoordinates) -> Self {
        let (longitude, latitude, radius) = rect.to_spherical();
        HeliocentricPosition {
            longitude,
            latitude,
            radius,
        }
    }
}

/// Bodies with a heliocentric position.
pub trait Heliocentric {
    /// Heliocentric ecliptical coordinates at the dynamical time `jde`.
    fn heliocentric_coordinates(&self, jde: JulianDay) -> HeliocentricPosition;
}

impl Heliocentric for Planet {
    fn heliocentric_coordinates(&self, jde: JulianDay) -> HeliocentricPosition {
        let (longitude, latitude, radius) = self.vsop_coordinates(jde);
        HeliocentricPosition {
            longitude,
            latitude,
            radius,
        }
    }
}

/// Every body the engine knows a built-in series for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Body {
    Sun,
    Moon,
    Mercury,
    Venus,
    Earth,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
}

impl Body {
    /// The planet behind this body, `None` for the Sun and the Moon.
    pub fn planet(&self) -> Option<Planet> {
        match self {
            Body::Sun | Body::Moon => None,
            Body::Mercury => Some(Planet::Mercury),
            Body::Venus => Some(Planet::Venus),
            Body::Earth => Some(Planet::Earth),
            Body::Mars => Some(Planet::Mars),
            Body::Jupiter => Some(Planet::Jupiter),
            Body::Saturn => Some(Planet::Saturn),
            Body::Uranus => Some(Planet::Uranus),
            Body::Neptune => Some(Planet::Neptune),
        }
    }
}

impl From<Planet> for Body {
    fn from(planet: Planet) -> Self {
        match planet {
            Planet::Mercury => Body::Mercury,
            Planet::Venus => Body::Venus,
            Planet::Earth => Body::Earth,
            Planet::Mars => Body::Mars,
            Planet::Jupiter => Body::Jupiter,
            Planet::Saturn => Body::Saturn,
            Planet::Uranus => Body::Uranus,
            Planet::Neptune => Body::Neptune,
        }
    }
}

impl Heliocentric for Body {
    fn heliocentric_coordinates(&self, jde: JulianDay) -> HeliocentricPosition {
        if let Some(planet) = self.planet() {
            return planet.heliocentric_coordinates(jde);
        }
        match self {
            Body::Moon => {
                let earth = Planet::Earth.heliocentric_coordinates(jde).to_rectangular();
                let moon = moon::geocentric_position(jde);
                let geocentric = RectangularCoordinates::from_spherical(
                    moon.longitude,
                    moon.latitude,
                    moon.distance / AU,
                );
                HeliocentricPosition::from_rectangular(&(earth + geocentric))
            }
            _ => HeliocentricPosition {
                longitude: 0.0,
                latitude: 0.0,
                radius: 0.0,
            },
        }
    }
}

#[cfg(test)]
mod planets_test {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_body_dispatch() {
        let jde = 2448976.5;
        assert_eq!(
            Body::Venus.heliocentric_coordinates(jde),
            Planet::Venus.heliocentric_coordinates(jde)
        );
        assert_eq!(Body::Sun.heliocentric_coordinates(jde).radius, 0.0);
        assert_eq!(Body::Sun.planet(), None);
        assert_eq!(Body::from(Planet::Mars), Body::Mars);
    }

    #[test]
    fn test_moon_is_close_to_earth() {
        let jde = 2448724.5;
        let earth = Body::Earth.heliocentric_coordinates(jde);
        let moon = Body::Moon.heliocentric_coordinates(jde);
        assert_abs_diff_eq!(moon.radius, earth.radius, epsilon = 0.003);
        assert_abs_diff_eq!(moon.longitude, earth.longitude, epsilon = 0.2);
    }
}
