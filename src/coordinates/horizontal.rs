use serde::{Deserialize, Serialize};

use crate::almanac_errors::AlmanacError;
use crate::constants::{Degree, RADEG};
use crate::coordinates::coordinate::{Coordinate, FullCircle, Hemisphere};
use crate::coordinates::equatorial::EquatorialCoordinates;
use crate::coordinates::geographical::GeographicalCoordinates;

/// Local horizontal position.
///
/// The azimuth is counted **westward from the south** in `[0, 360)`; add 180° for the navigator's
/// convention (see [`HorizontalCoordinates::azimuth_from_north`]).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HorizontalCoordinates {
    azimuth: Coordinate<FullCircle>,
    altitude: Coordinate<Hemisphere>,
}

impl HorizontalCoordinates {
    /// Errors
    /// ------
    /// * [`AlmanacError::InvalidCoordinate`] if the altitude lies outside `[-90, 90]`.
    pub fn new(azimuth: Degree, altitude: Degree) -> Result<Self, AlmanacError> {
        if !Coordinate::<Hemisphere>::in_range(altitude) {
            return Err(AlmanacError::InvalidCoordinate(format!(
                "altitude {altitude} outside [-90, 90]"
            )));
        }
        Ok(Self::from_parts(azimuth, altitude))
    }

    pub(crate) fn from_parts(azimuth: Degree, altitude: Degree) -> Self {
        HorizontalCoordinates {
            azimuth: Coordinate::new(azimuth),
            altitude: Coordinate::new(altitude.clamp(-90.0, 90.0)),
        }
    }

    pub fn azimuth(&self) -> Degree {
        self.azimuth.value()
    }

    /// Azimuth counted eastward from the north.
    pub fn azimuth_from_north(&self) -> Degree {
        Coordinate::<FullCircle>::new(self.azimuth() + 180.0).value()
    }

    pub fn altitude(&self) -> Degree {
        self.altitude.value()
    }

    /// Convert back to equatorial coordinates.
    ///
    /// Arguments
    /// ---------
    /// * `geo_coords`: observer (east-positive longitude).
    /// * `greenwich_sidereal_time`: degrees.
    ///
    /// Formula
    /// -------
    /// ```text
    /// H = atan2(sin A, cos A sin φ + tan h cos φ)
    /// δ = asin(sin φ sin h − cos φ cos h cos A)
    /// α = θ₀ + L − H
    /// ```
    pub fn to_equatorial(
        &self,
        geo_coords: &GeographicalCoordinates,
        greenwich_sidereal_time: Degree,
    ) -> EquatorialCoordinates {
        let (a, h) = (self.azimuth.to_radians(), self.altitude.to_radians());
        let phi = geo_coords.latitude() * RADEG;

        let hour_angle = a.sin().atan2(a.cos() * phi.sin() + h.tan() * phi.cos());
        let delta = (phi.sin() * h.sin() - phi.cos() * h.cos() * a.cos())
            .clamp(-1.0, 1.0)
            .asin();
        let alpha = Coordinate::<FullCircle>::new(
            greenwich_sidereal_time + geo_coords.longitude() - hour_angle / RADEG,
        );
        EquatorialCoordinates::from_parts(alpha.value() / 15.0, delta / RADEG)
    }
}

#[cfg(test)]
mod horizontal_test {
    use super::*;
    use crate::time::{greenwich_apparent_sidereal_time, CalendarDate};
    use approx::assert_abs_diff_eq;

    fn washington() -> GeographicalCoordinates {
        GeographicalCoordinates::new(-77.06556, 38.92139).unwrap()
    }

    #[test]
    fn test_venus_to_equatorial() {
        let date = CalendarDate::new(1987, 4, 10, 19, 21, 0.0).unwrap();
        let theta = greenwich_apparent_sidereal_time(date.julian_day(), None);
        let venus = HorizontalCoordinates::new(68.0336, 15.1249).unwrap();
        let eq = venus.to_equatorial(&washington(), theta);
        assert_abs_diff_eq!(eq.right_ascension(), 23.1546225, epsilon = 1e-4);
        assert_abs_diff_eq!(eq.declination(), -6.7198917, epsilon = 1e-4);
    }

    #[test]
    fn test_equatorial_round_trip() {
        let geo = washington();
        let eq = EquatorialCoordinates::new(23.1546225, -6.7198917).unwrap();
        let hz = eq.to_horizontal(&geo, 128.7368);
        assert_abs_diff_eq!(hz.azimuth(), 68.0337, epsilon = 1e-3);
        assert_abs_diff_eq!(hz.altitude(), 15.1249, epsilon = 1e-3);
        let back = hz.to_equatorial(&geo, 128.7368);
        assert_abs_diff_eq!(back.right_ascension(), 23.1546225, epsilon = 1e-9);
        assert_abs_diff_eq!(back.declination(), -6.7198917, epsilon = 1e-9);
    }

    #[test]
    fn test_altitude_domain_and_north_azimuth() {
        assert!(HorizontalCoordinates::new(0.0, 90.01).is_err());
        let hz = HorizontalCoordinates::new(270.0, 10.0).unwrap();
        assert_abs_diff_eq!(hz.azimuth_from_north(), 90.0, epsilon = 1e-12);
    }
}
