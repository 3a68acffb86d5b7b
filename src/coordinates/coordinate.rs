use std::fmt;
use std::marker::PhantomData;

use serde::{Deserialize, Serialize};

use crate::constants::RADEG;

/// Canonical interval of a [`Coordinate`].
///
/// Every implementor defines `[MIN, MAX)` (or `[MIN, MAX]` when `INCLUSIVE_MAX` is set) and the
/// stored value of a coordinate is re-normalized into it on every construction or mutation.
pub trait CoordinateRange {
    const MIN: f64;
    const MAX: f64;
    const INCLUSIVE_MAX: bool = false;
    /// Degrees represented by one unit of the stored value.
    const DEGREES_PER_UNIT: f64 = 1.0;

    /// Bring `value` back into the canonical interval by whole turns of `MAX - MIN`.
    fn normalize(value: f64) -> f64 {
        if Self::INCLUSIVE_MAX && (Self::MIN..=Self::MAX).contains(&value) {
            return value;
        }
        let span = Self::MAX - Self::MIN;
        let wrapped = Self::MIN + (value - Self::MIN).rem_euclid(span);
        // rem_euclid may round up to `span` for tiny negative inputs
        if wrapped >= Self::MAX && !Self::INCLUSIVE_MAX {
            Self::MIN
        } else {
            wrapped
        }
    }
}

/// Longitudes, azimuths and position angles: `[0, 360)` degrees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct FullCircle;

/// Signed longitudes and hour angles: `[-180, 180)` degrees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct HalfCircle;

/// Latitudes, declinations and altitudes: `[-90, 90]` degrees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Hemisphere;

/// Right ascensions and sidereal times: `[0, 24)` hours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct DayHours;

impl CoordinateRange for FullCircle {
    const MIN: f64 = 0.0;
    const MAX: f64 = 360.0;
}

impl CoordinateRange for HalfCircle {
    const MIN: f64 = -180.0;
    const MAX: f64 = 180.0;
}

impl CoordinateRange for Hemisphere {
    const MIN: f64 = -90.0;
    const MAX: f64 = 90.0;
    const INCLUSIVE_MAX: bool = true;
}

impl CoordinateRange for DayHours {
    const MIN: f64 = 0.0;
    const MAX: f64 = 24.0;
    const DEGREES_PER_UNIT: f64 = 15.0;
}

/// A scalar angle that always lies in the interval of its range marker `R`.
///
/// Two coordinates with different ranges are different types, so a right ascension can never be
/// passed where a declination is expected.
///
/// ```rust
/// use almanac::coordinates::coordinate::{Coordinate, FullCircle};
///
/// assert!((Coordinate::<FullCircle>::new(365.748).value() - 5.748).abs() < 1e-12);
/// assert!((Coordinate::<FullCircle>::new(-1.748).value() - 358.252).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(from = "f64", into = "f64", bound = "R: CoordinateRange + Clone")]
pub struct Coordinate<R: CoordinateRange> {
    value: f64,
    range: PhantomData<R>,
}

impl<R: CoordinateRange> Coordinate<R> {
    pub fn new(value: f64) -> Self {
        Coordinate {
            value: R::normalize(value),
            range: PhantomData,
        }
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    /// Replace the stored value, re-normalizing it.
    pub fn set(&mut self, value: f64) {
        self.value = R::normalize(value);
    }

    pub fn min() -> f64 {
        R::MIN
    }

    pub fn max() -> f64 {
        R::MAX
    }

    /// Whether `value` already lies in the canonical interval (no wrapping needed).
    pub fn in_range(value: f64) -> bool {
        if R::INCLUSIVE_MAX {
            (R::MIN..=R::MAX).contains(&value)
        } else {
            (R::MIN..R::MAX).contains(&value)
        }
    }

    /// The stored value in radians. For [`DayHours`] the hours are first turned into degrees.
    pub fn to_radians(&self) -> f64 {
        self.value * R::DEGREES_PER_UNIT * RADEG
    }
}

impl<R: CoordinateRange> From<f64> for Coordinate<R> {
    fn from(value: f64) -> Self {
        Coordinate::new(value)
    }
}

impl<R: CoordinateRange> From<Coordinate<R>> for f64 {
    fn from(coordinate: Coordinate<R>) -> Self {
        coordinate.value
    }
}

impl<R: CoordinateRange> fmt::Display for Coordinate<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

#[cfg(test)]
mod coordinate_test {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_full_circle_wrap() {
        assert_relative_eq!(
            Coordinate::<FullCircle>::new(365.748).value(),
            5.748,
            epsilon = 1e-12
        );
        assert_relative_eq!(
            Coordinate::<FullCircle>::new(-1.748).value(),
            358.252,
            epsilon = 1e-12
        );
        assert_eq!(Coordinate::<FullCircle>::new(360.0).value(), 0.0);
        assert_eq!(Coordinate::<FullCircle>::new(-720.0).value(), 0.0);
    }

    #[test]
    fn test_half_circle_and_hours() {
        assert_relative_eq!(Coordinate::<HalfCircle>::new(190.0).value(), -170.0);
        assert_eq!(Coordinate::<HalfCircle>::new(180.0).value(), -180.0);
        assert_relative_eq!(Coordinate::<DayHours>::new(25.5).value(), 1.5);
        assert_relative_eq!(Coordinate::<DayHours>::new(-0.5).value(), 23.5);
    }

    #[test]
    fn test_hemisphere_keeps_poles() {
        assert_eq!(Coordinate::<Hemisphere>::new(90.0).value(), 90.0);
        assert_eq!(Coordinate::<Hemisphere>::new(-90.0).value(), -90.0);
        assert_relative_eq!(Coordinate::<Hemisphere>::new(100.0).value(), -80.0);
    }

    #[test]
    fn test_set_renormalizes() {
        let mut c = Coordinate::<FullCircle>::new(10.0);
        c.set(725.0);
        assert_relative_eq!(c.value(), 5.0);
        assert!(Coordinate::<FullCircle>::in_range(c.value()));
    }

    #[test]
    fn test_tiny_negative_stays_below_max() {
        let c = Coordinate::<FullCircle>::new(-1e-18);
        assert!(c.value() < 360.0);
    }

    #[test]
    fn test_to_radians() {
        assert_relative_eq!(
            Coordinate::<DayHours>::new(6.0).to_radians(),
            std::f64::consts::FRAC_PI_2
        );
        assert_relative_eq!(
            Coordinate::<Hemisphere>::new(-45.0).to_radians(),
            -std::f64::consts::FRAC_PI_4
        );
    }
}
