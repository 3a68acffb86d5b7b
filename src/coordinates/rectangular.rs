use std::ops::{Add, Sub};

use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use crate::constants::{Degree, RADEG};
use crate::coordinates::coordinate::{Coordinate, FullCircle};

/// Cartesian position in an ecliptic or equatorial frame, any length unit (usually AU).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RectangularCoordinates {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl RectangularCoordinates {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        RectangularCoordinates { x, y, z }
    }

    /// Position from a longitude-like angle, a latitude-like angle (degrees) and a radius.
    pub fn from_spherical(longitude: Degree, latitude: Degree, radius: f64) -> Self {
        let (lon, lat) = (longitude * RADEG, latitude * RADEG);
        RectangularCoordinates {
            x: radius * lat.cos() * lon.cos(),
            y: radius * lat.cos() * lon.sin(),
            z: radius * lat.sin(),
        }
    }

    /// Convert back to `(longitude, latitude, radius)`.
    ///
    /// Returns
    /// --------
    /// * longitude in degrees `[0, 360)`, latitude in degrees `[-90, 90]`, and the norm.
    ///
    /// Remarks
    /// -------
    /// * If the vector has zero norm, the result is `(0.0, 0.0, 0.0)`.
    /// * The longitude uses `atan2` to preserve quadrant information.
    pub fn to_spherical(&self) -> (Degree, Degree, f64) {
        let radius = self.norm();
        if radius == 0.0 {
            return (0.0, 0.0, 0.0);
        }
        let latitude = (self.z / radius).clamp(-1.0, 1.0).asin() / RADEG;
        let longitude = Coordinate::<FullCircle>::new(self.y.atan2(self.x) / RADEG).value();
        (longitude, latitude, radius)
    }

    pub fn norm(&self) -> f64 {
        self.to_vector().norm()
    }

    pub fn to_vector(&self) -> Vector3<f64> {
        Vector3::new(self.x, self.y, self.z)
    }
}

impl From<Vector3<f64>> for RectangularCoordinates {
    fn from(v: Vector3<f64>) -> Self {
        RectangularCoordinates::new(v.x, v.y, v.z)
    }
}

impl Add for RectangularCoordinates {
    type Output = RectangularCoordinates;

    fn add(self, rhs: Self) -> Self::Output {
        (self.to_vector() + rhs.to_vector()).into()
    }
}

impl Sub for RectangularCoordinates {
    type Output = RectangularCoordinates;

    fn sub(self, rhs: Self) -> Self::Output {
        (self.to_vector() - rhs.to_vector()).into()
    }
}

#[cfg(test)]
mod rectangular_test {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_spherical_round_trip() {
        let rect = RectangularCoordinates::from_spherical(200.0, -35.0, 2.5);
        let (lon, lat, r) = rect.to_spherical();
        assert_abs_diff_eq!(lon, 200.0, epsilon = 1e-10);
        assert_abs_diff_eq!(lat, -35.0, epsilon = 1e-10);
        assert_abs_diff_eq!(r, 2.5, epsilon = 1e-12);
    }

    #[test]
    fn test_zero_vector() {
        assert_eq!(
            RectangularCoordinates::new(0.0, 0.0, 0.0).to_spherical(),
            (0.0, 0.0, 0.0)
        );
    }

    #[test]
    fn test_vector_arithmetic() {
        let a = RectangularCoordinates::new(1.0, 2.0, 3.0);
        let b = RectangularCoordinates::new(0.5, -1.0, 1.0);
        assert_eq!(a - b, RectangularCoordinates::new(0.5, 3.0, 2.0));
        assert_eq!(a + b, RectangularCoordinates::new(1.5, 1.0, 4.0));
    }
}
