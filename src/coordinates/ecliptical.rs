use serde::{Deserialize, Serialize};

use crate::almanac_errors::AlmanacError;
use crate::constants::{Degree, JulianDay, RADEG};
use crate::coordinates::coordinate::{Coordinate, FullCircle, Hemisphere};
use crate::coordinates::equatorial::EquatorialCoordinates;
use crate::ref_system::precess_ecliptical;

/// Ecliptical longitude `[0, 360)` and latitude `[-90, 90]` referred to the equinox `epoch`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EclipticalCoordinates {
    longitude: Coordinate<FullCircle>,
    latitude: Coordinate<Hemisphere>,
    epoch: JulianDay,
}

impl EclipticalCoordinates {
    /// Errors
    /// ------
    /// * [`AlmanacError::InvalidCoordinate`] if the latitude lies outside `[-90, 90]`.
    pub fn new(longitude: Degree, latitude: Degree, epoch: JulianDay) -> Result<Self, AlmanacError> {
        if !Coordinate::<Hemisphere>::in_range(latitude) {
            return Err(AlmanacError::InvalidCoordinate(format!(
                "ecliptical latitude {latitude} outside [-90, 90]"
            )));
        }
        Ok(Self::from_parts(longitude, latitude, epoch))
    }

    pub(crate) fn from_parts(longitude: Degree, latitude: Degree, epoch: JulianDay) -> Self {
        EclipticalCoordinates {
            longitude: Coordinate::new(longitude),
            latitude: Coordinate::new(latitude.clamp(-90.0, 90.0)),
            epoch,
        }
    }

    pub fn longitude(&self) -> Degree {
        self.longitude.value()
    }

    pub fn latitude(&self) -> Degree {
        self.latitude.value()
    }

    /// Equinox the coordinates are referred to (Julian Ephemeris Day).
    pub fn epoch(&self) -> JulianDay {
        self.epoch
    }

    /// Convert to equatorial coordinates for an obliquity `ε`.
    ///
    /// ```text
    /// α = atan2(sin λ cos ε − tan β sin ε, cos λ)
    /// δ = asin(sin β cos ε + cos β sin ε sin λ)
    /// ```
    pub fn to_equatorial(&self, obliquity: Degree) -> EquatorialCoordinates {
        let (lambda, beta, eps) = (
            self.longitude.to_radians(),
            self.latitude.to_radians(),
            obliquity * RADEG,
        );
        let alpha = (lambda.sin() * eps.cos() - beta.tan() * eps.sin()).atan2(lambda.cos());
        let delta = (beta.sin() * eps.cos() + beta.cos() * eps.sin() * lambda.sin())
            .clamp(-1.0, 1.0)
            .asin();
        EquatorialCoordinates::from_parts(
            Coordinate::<FullCircle>::new(alpha / RADEG).value() / 15.0,
            delta / RADEG,
        )
    }

    /// Rigorous precession to the ecliptic and equinox of `to_epoch`.
    ///
    /// See also
    /// --------
    /// * [`crate::ref_system::precess_ecliptical`]
    pub fn precess(&self, to_epoch: JulianDay) -> Self {
        let (lambda, beta) =
            precess_ecliptical(self.longitude(), self.latitude(), self.epoch, to_epoch);
        Self::from_parts(lambda, beta, to_epoch)
    }
}

#[cfg(test)]
mod ecliptical_test {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_pollux_to_equatorial() {
        let pollux = EclipticalCoordinates::new(113.215630, 6.684170, 2451545.0).unwrap();
        let eq = pollux.to_equatorial(23.4392911);
        assert_abs_diff_eq!(eq.right_ascension_degrees(), 116.328942, epsilon = 1e-6);
        assert_abs_diff_eq!(eq.declination(), 28.026183, epsilon = 1e-6);
    }

    #[test]
    fn test_round_trip_through_equatorial() {
        let ecl = EclipticalCoordinates::new(301.5, -4.2, 2451545.0).unwrap();
        let back = ecl.to_equatorial(23.44).to_ecliptical(23.44, ecl.epoch());
        assert_abs_diff_eq!(back.longitude(), 301.5, epsilon = 1e-9);
        assert_abs_diff_eq!(back.latitude(), -4.2, epsilon = 1e-9);
    }

    #[test]
    fn test_precess_keeps_target_epoch() {
        let venus = EclipticalCoordinates::new(149.48194, 1.76549, 2451545.0).unwrap();
        let old = venus.precess(1643074.5);
        assert_eq!(old.epoch(), 1643074.5);
        assert_abs_diff_eq!(old.longitude(), 118.704, epsilon = 1e-3);
        assert_abs_diff_eq!(old.latitude(), 1.615, epsilon = 1e-3);
    }

    #[test]
    fn test_latitude_domain() {
        assert!(EclipticalCoordinates::new(0.0, 91.0, 2451545.0).is_err());
    }
}
