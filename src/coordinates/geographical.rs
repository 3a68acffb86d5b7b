use serde::{Deserialize, Serialize};

use crate::almanac_errors::AlmanacError;
use crate::constants::{Degree, Meter, EARTH_AXIS_RATIO, EARTH_EQUATORIAL_RADIUS, RADEG};
use crate::coordinates::coordinate::{Coordinate, HalfCircle, Hemisphere};

/// Geodetic position of an observer.
///
/// Longitude is measured **positive east** of Greenwich in `[-180, 180)`; latitude is geodetic in
/// `[-90, 90]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeographicalCoordinates {
    longitude: Coordinate<HalfCircle>,
    latitude: Coordinate<Hemisphere>,
}

impl GeographicalCoordinates {
    /// Arguments
    /// ---------
    /// * `longitude`: degrees, east positive, wrapped into `[-180, 180)`.
    /// * `latitude`: degrees, must lie in `[-90, 90]`.
    ///
    /// Errors
    /// ------
    /// * [`AlmanacError::InvalidCoordinate`] if the latitude is out of range.
    pub fn new(longitude: Degree, latitude: Degree) -> Result<Self, AlmanacError> {
        if !Coordinate::<Hemisphere>::in_range(latitude) {
            return Err(AlmanacError::InvalidCoordinate(format!(
                "latitude {latitude} outside [-90, 90]"
            )));
        }
        Ok(GeographicalCoordinates {
            longitude: Coordinate::new(longitude),
            latitude: Coordinate::new(latitude),
        })
    }

    pub fn longitude(&self) -> Degree {
        self.longitude.value()
    }

    pub fn latitude(&self) -> Degree {
        self.latitude.value()
    }

    /// Compute the Earth's globe factors `(ρ sin φ′, ρ cos φ′)` of the observer.
    ///
    /// Arguments
    /// ---------
    /// * `height`: observer's altitude above the reference ellipsoid in **meters**.
    ///
    /// Returns
    /// -------
    /// A tuple `(rho_sin_phi, rho_cos_phi)` in units of the Earth's equatorial radius.
    ///
    /// Details
    /// -------
    /// ```text
    /// u = atan(b/a · tan φ)
    /// ρ sin φ′ = (b/a) · sin u + (H / a) · sin φ
    /// ρ cos φ′ = cos u + (H / a) · cos φ
    /// ```
    /// with `b/a = 0.99664719` and `a = 6378140 m`. These feed the geocentric parallax
    /// corrections of the propagators and of the Moon.
    pub fn globe_factors(&self, height: Meter) -> (f64, f64) {
        let lat = self.latitude() * RADEG;

        // Parametric latitude; atan2 keeps the poles finite.
        let u = (EARTH_AXIS_RATIO * lat.sin()).atan2(lat.cos());
        let h = height / EARTH_EQUATORIAL_RADIUS;

        let rho_sin_phi = EARTH_AXIS_RATIO * u.sin() + h * lat.sin();
        let rho_cos_phi = u.cos() + h * lat.cos();

        (rho_sin_phi, rho_cos_phi)
    }
}

#[cfg(test)]
mod geographical_test {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_globe_factors_palomar() {
        let palomar =
            GeographicalCoordinates::new(-116.8625, 33.0 + 21.0 / 60.0 + 22.0 / 3600.0).unwrap();
        let (rho_sin, rho_cos) = palomar.globe_factors(1706.0);
        assert_abs_diff_eq!(rho_sin, 0.546861, epsilon = 1e-6);
        assert_abs_diff_eq!(rho_cos, 0.836339, epsilon = 1e-6);
    }

    #[test]
    fn test_globe_factors_poles_and_equator() {
        let equator = GeographicalCoordinates::new(0.0, 0.0).unwrap();
        assert_eq!(equator.globe_factors(0.0), (0.0, 1.0));

        let pole = GeographicalCoordinates::new(0.0, 90.0).unwrap();
        let (rho_sin, rho_cos) = pole.globe_factors(0.0);
        assert_abs_diff_eq!(rho_sin, EARTH_AXIS_RATIO, epsilon = 1e-12);
        assert_abs_diff_eq!(rho_cos, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_latitude_domain() {
        assert!(GeographicalCoordinates::new(0.0, 90.5).is_err());
        assert!(GeographicalCoordinates::new(0.0, -91.0).is_err());
        let geo = GeographicalCoordinates::new(190.0, 10.0).unwrap();
        assert_abs_diff_eq!(geo.longitude(), -170.0, epsilon = 1e-12);
    }
}
