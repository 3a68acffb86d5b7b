//! # Position models
//!
//! Every observable body is placed on the sky by one [`OrbitalModel`]:
//!
//! - `FixedSeriesBody` – the Sun, the Moon or a planet, from the built-in series (or from an
//!   external ephemeris when the [`ObservationConfig`] asks for one),
//! - `EllipticalOrbit`, `ParabolicOrbit`, `NearParabolicOrbit` – small bodies propagated from their
//!   orbital elements. A parabolic orbit holds [`ParabolicElements`], so `e = 1` is known from
//!   the type.
//!
//! The capability shared by all of them is the [`PositionModel`] trait.
use serde::{Deserialize, Serialize};

use crate::almanac_errors::AlmanacError;
use crate::constants::{AstronomicalUnit, Degree, JulianDay, H0_STAR, H0_SUN};
use crate::coordinates::EquatorialCoordinates;
use crate::observation::{ObservationConfig, ObservationTime};
use crate::orbit_type::cometary_element::{CometaryElements, ParabolicElements};
use crate::orbit_type::keplerian_element::KeplerianElements;
use crate::orbit_type::propagator::{geocentric_position, topocentric_position, LightTime};
use crate::orbit_type::{OrbitRef, OrbitalElements};
use crate::planets::apparent::apparent_geocentric_position;
use crate::planets::physical::physical_ephemeris;
use crate::planets::{moon, sun, Body};

/// Equatorial position of a body and its distance to the Earth.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ObservedPosition {
    pub equatorial: EquatorialCoordinates,
    /// AU
    pub distance: AstronomicalUnit,
}

/// Anything that can be placed on the sky at a given instant.
pub trait PositionModel {
    /// Equatorial coordinates at `time` for the observer of `config`.
    ///
    /// Series bodies return apparent geocentric coordinates of date, orbits return astrometric
    /// J2000 coordinates corrected for the observer's parallax.
    fn equatorial_position(
        &self,
        time: &ObservationTime,
        config: &ObservationConfig,
    ) -> Result<ObservedPosition, AlmanacError>;

    /// Altitude `h0` of the centre of the body at its rising and setting, degrees.
    fn standard_altitude(&self, _jde: JulianDay) -> Degree {
        H0_STAR
    }
}

/// How a target's positions are obtained.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum OrbitalModel {
    FixedSeriesBody(Body),
    EllipticalOrbit(KeplerianElements),
    ParabolicOrbit(ParabolicElements),
    NearParabolicOrbit(CometaryElements),
}

impl From<OrbitalElements> for OrbitalModel {
    fn from(elements: OrbitalElements) -> Self {
        match elements {
            OrbitalElements::Keplerian(k) => OrbitalModel::EllipticalOrbit(k),
            OrbitalElements::Cometary(c) => match c.into_parabolic() {
                Ok(parabolic) => OrbitalModel::ParabolicOrbit(parabolic),
                Err(c) => OrbitalModel::NearParabolicOrbit(c),
            },
        }
    }
}

impl From<Body> for OrbitalModel {
    fn from(body: Body) -> Self {
        OrbitalModel::FixedSeriesBody(body)
    }
}

impl OrbitalModel {
    /// Orbital elements of a small body, `None` for a series body.
    pub fn elements(&self) -> Option<OrbitRef<'_>> {
        match self {
            OrbitalModel::FixedSeriesBody(_) => None,
            OrbitalModel::EllipticalOrbit(k) => Some(k.into()),
            OrbitalModel::ParabolicOrbit(p) => Some(p.into()),
            OrbitalModel::NearParabolicOrbit(c) => Some(c.into()),
        }
    }

    /// Apparent visual magnitude at `jde`.
    ///
    /// A parabolic comet is measured at its geometric position, without light time.
    ///
    /// Returns
    /// --------
    /// * the planetary magnitude for the planets, the photometric model for small bodies that
    ///   carry one, `None` otherwise.
    pub fn magnitude(&self, jde: JulianDay) -> Result<Option<f64>, AlmanacError> {
        match self {
            OrbitalModel::FixedSeriesBody(body) => Ok(body
                .planet()
                .and_then(|planet| physical_ephemeris(planet, jde))
                .map(|physical| physical.magnitude)),
            _ => match self.elements() {
                Some(elements) if elements.magnitude_model().is_some() => {
                    let light_time = match self {
                        OrbitalModel::ParabolicOrbit(_) => LightTime::Geometric,
                        _ => LightTime::OneStep,
                    };
                    let position = geocentric_position(elements, jde, light_time)?;
                    Ok(position.magnitude(elements))
                }
                _ => Ok(None),
            },
        }
    }
}

fn series_position(body: Body, jde: JulianDay) -> Result<ObservedPosition, AlmanacError> {
    let apparent = match body {
        Body::Sun => sun::apparent_position(jde),
        Body::Moon => moon::apparent_position(jde),
        Body::Earth => {
            return Err(AlmanacError::OutOfDomain(
                "the Earth has no geocentric position".into(),
            ))
        }
        _ => apparent_geocentric_position(&body, jde),
    };
    Ok(ObservedPosition {
        equatorial: apparent.equatorial,
        distance: apparent.distance,
    })
}

impl PositionModel for OrbitalModel {
    fn equatorial_position(
        &self,
        time: &ObservationTime,
        config: &ObservationConfig,
    ) -> Result<ObservedPosition, AlmanacError> {
        match self {
            OrbitalModel::FixedSeriesBody(body) => {
                if let Some((equatorial, distance)) = config.external_position(*body, time.jde()) {
                    return Ok(ObservedPosition {
                        equatorial,
                        distance,
                    });
                }
                series_position(*body, time.jde())
            }
            _ => {
                let elements = self.elements().ok_or_else(|| {
                    AlmanacError::InvalidOrbit("orbit model without elements".into())
                })?;
                let position = topocentric_position(elements, time, config, LightTime::OneStep)?;
                Ok(ObservedPosition {
                    equatorial: position.equatorial,
                    distance: position.distance,
                })
            }
        }
    }

    fn standard_altitude(&self, jde: JulianDay) -> Degree {
        match self {
            OrbitalModel::FixedSeriesBody(Body::Sun) => H0_SUN,
            OrbitalModel::FixedSeriesBody(Body::Moon) => {
                moon::standard_altitude(moon::geocentric_position(jde).distance)
            }
            _ => H0_STAR,
        }
    }
}

#[cfg(test)]
mod orbital_model_test {
    use super::*;
    use crate::coordinates::GeographicalCoordinates;
    use crate::observation::EphemerisMode;
    use crate::observation::ExternalEphemeris;
    use crate::orbit_type::keplerian_element::test_keplerian_element::encke;
    use crate::photometry::magnitude_models::MagnitudeModel;
    use approx::assert_abs_diff_eq;
    use std::sync::Arc;

    fn config() -> ObservationConfig {
        ObservationConfig::new(GeographicalCoordinates::new(-71.0833, 42.3333).unwrap(), 0.0)
    }

    #[test]
    fn test_model_from_elements() {
        let parabolic = CometaryElements::parabolic(1.0, 10.0, 20.0, 30.0, 2451545.0).unwrap();
        let near = CometaryElements::new(1.0, 0.999, 10.0, 20.0, 30.0, 2451545.0).unwrap();
        assert!(matches!(
            OrbitalModel::from(OrbitalElements::from(parabolic)),
            OrbitalModel::ParabolicOrbit(_)
        ));
        assert!(matches!(
            OrbitalModel::from(OrbitalElements::from(near)),
            OrbitalModel::NearParabolicOrbit(_)
        ));
        let elliptical = OrbitalModel::from(OrbitalElements::from(encke()));
        assert_eq!(elliptical.elements(), Some(OrbitRef::Keplerian(&encke())));
        assert_eq!(OrbitalModel::from(Body::Mars).elements(), None);
    }

    #[test]
    fn test_parabolic_orbit_only_holds_parabolic_elements() {
        let near = CometaryElements::new(1.0, 0.999, 10.0, 20.0, 30.0, 2451545.0).unwrap();
        assert!(matches!(
            ParabolicElements::try_from(near.clone()),
            Err(AlmanacError::InvalidOrbit(_))
        ));
        assert_eq!(near.clone().into_parabolic(), Err(near));

        let comet = CometaryElements::parabolic(1.0, 10.0, 20.0, 30.0, 2451545.0).unwrap();
        let model = OrbitalModel::from(OrbitalElements::from(comet.clone()));
        assert_eq!(model.elements(), Some(OrbitRef::Cometary(&comet)));
        assert_eq!(CometaryElements::from(ParabolicElements::try_from(comet.clone()).unwrap()), comet);
    }

    #[test]
    fn test_series_body_positions() {
        let time = ObservationTime::new(2448976.5, 0.0);
        let venus = OrbitalModel::from(Body::Venus)
            .equatorial_position(&time, &config())
            .unwrap();
        assert_abs_diff_eq!(venus.equatorial.right_ascension_degrees(), 316.1727, epsilon = 1e-3);
        assert_abs_diff_eq!(venus.distance, 0.910947, epsilon = 1e-5);

        assert!(matches!(
            OrbitalModel::from(Body::Earth).equatorial_position(&time, &config()),
            Err(AlmanacError::OutOfDomain(_))
        ));
    }

    #[test]
    fn test_standard_altitudes() {
        assert_eq!(OrbitalModel::from(Body::Sun).standard_altitude(2448724.5), H0_SUN);
        assert_eq!(OrbitalModel::from(Body::Jupiter).standard_altitude(2448724.5), H0_STAR);
        // 1992-04-12: π = 0.99199°
        assert_abs_diff_eq!(
            OrbitalModel::from(Body::Moon).standard_altitude(2448724.5),
            0.7275 * 0.9919901 - 0.5667,
            epsilon = 1e-4
        );
    }

    #[test]
    fn test_external_ephemeris_is_preferred() {
        struct Catalogue;
        impl ExternalEphemeris for Catalogue {
            fn apparent_position(
                &self,
                _body: Body,
                _jde: JulianDay,
            ) -> Result<(EquatorialCoordinates, f64), String> {
                EquatorialCoordinates::new(5.0, 10.0)
                    .map(|eq| (eq, 2.0))
                    .map_err(|e| e.to_string())
            }
        }
        let config =
            config().with_ephemeris_mode(EphemerisMode::ExternalEphemerisLookup(Arc::new(Catalogue)));
        let position = OrbitalModel::from(Body::Mars)
            .equatorial_position(&ObservationTime::new(2451545.0, 64.0), &config)
            .unwrap();
        assert_eq!(position.equatorial.right_ascension(), 5.0);
        assert_eq!(position.distance, 2.0);
    }

    #[test]
    fn test_magnitudes() {
        let venus = OrbitalModel::from(Body::Venus).magnitude(2448976.5).unwrap().unwrap();
        assert_abs_diff_eq!(venus, -4.22, epsilon = 0.01);
        assert_eq!(OrbitalModel::from(Body::Moon).magnitude(2448976.5).unwrap(), None);
        assert_eq!(
            OrbitalModel::from(OrbitalElements::from(encke())).magnitude(2448170.5).unwrap(),
            None
        );
    }

    #[test]
    fn test_parabolic_magnitude_at_the_geometric_position() {
        let comet = CometaryElements::parabolic(1.0, 30.0, 80.0, 100.0, 2451545.0)
            .unwrap()
            .with_magnitude_model(MagnitudeModel::HN {
                absolute_magnitude: 6.0,
                slope: 4.0,
            });
        let model = OrbitalModel::from(OrbitalElements::from(comet.clone()));
        let magnitude = model.magnitude(2451545.0).unwrap().unwrap();

        // At perihelion r = q = 1 AU, so only Δ contributes
        let geometric = geocentric_position(&comet, 2451545.0, LightTime::Geometric).unwrap();
        assert_abs_diff_eq!(magnitude, 6.0 + 5.0 * geometric.distance.log10(), epsilon = 1e-9);

        let near = CometaryElements::new(1.0, 0.999, 30.0, 80.0, 100.0, 2451545.0)
            .unwrap()
            .with_magnitude_model(MagnitudeModel::HN {
                absolute_magnitude: 6.0,
                slope: 4.0,
            });
        let retracted = geocentric_position(&near, 2451545.0, LightTime::OneStep).unwrap();
        assert_eq!(
            OrbitalModel::from(OrbitalElements::from(near.clone())).magnitude(2451545.0).unwrap(),
            retracted.magnitude(&near)
        );
    }
}
