//! # Rising, transit and setting
//!
//! Times of the passage of a body through the meridian and through the altitude `h0`, from its
//! apparent coordinates at 0h dynamical time on the previous day, the day itself and the next
//! day.
//!
//! Algorithm
//! ---------
//! 1. `cos H0 = (sin h0 − sin φ sin δ₂) / (cos φ cos δ₂)`; out of `[−1, 1]` the body never crosses
//!    `h0` and is either [`Visibility::Circumpolar`] or [`Visibility::NeverRises`].
//! 2. First approximations, as fractions of the UT day:
//!    `m0 = (α₂ − L − Θ₀) / 360` (transit), `m1 = m0 − H0/360` (rising), `m2 = m0 + H0/360`
//!    (setting), all reduced to `[0, 1)`; `L` is the east-positive longitude.
//! 3. One correction pass per value: sidereal time `θ = Θ₀ + 360.985647 m`, coordinates
//!    interpolated at `n = m + ΔT/86400`, local hour angle `H` and altitude `h`, then
//!    `Δm = −H/360` for the transit and `Δm = (h − h0) / (360 cos δ cos φ sin H)` otherwise.
//!
//! A body whose three positions are identical (a star) skips both the interpolation and the
//! correction pass.
use serde::{Deserialize, Serialize};

use crate::constants::{Degree, RADEG, SECONDS_PER_DAY, SIDEREAL_RATE};
use crate::coordinates::{
    Coordinate, EquatorialCoordinates, FullCircle, GeographicalCoordinates, HalfCircle,
};

/// Whether a body crosses its altitude threshold during the day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Visibility {
    RisesAndSets,
    /// Always above `h0`
    Circumpolar,
    /// Always below `h0`
    NeverRises,
}

/// Rising, transit and setting, as fractions of the UT day starting at 0h.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RiseTransitSet {
    pub transit: f64,
    pub rising: Option<f64>,
    pub setting: Option<f64>,
    /// Altitude at the transit, degrees
    pub transit_altitude: Degree,
    pub visibility: Visibility,
}

/// Everything needed to place a body on the sky of one observer during one day.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DaySky {
    /// Apparent coordinates at 0h TD on the previous day, the day itself and the next day
    pub positions: [EquatorialCoordinates; 3],
    pub geo_coords: GeographicalCoordinates,
    /// Greenwich apparent sidereal time at 0h UT, degrees
    pub sidereal_time: Degree,
    /// ΔT, seconds
    pub delta_t: f64,
}

/// Bessel's three-point interpolation `y₂ + n/2 (a + b + n c)`, with `a = y₂ − y₁`, `b = y₃ − y₂`
/// and `c = b − a`.
pub fn interpolate(values: [f64; 3], n: f64) -> f64 {
    let a = values[1] - values[0];
    let b = values[2] - values[1];
    values[1] + n / 2.0 * (a + b + n * (b - a))
}

fn wrap_day_fraction(m: f64) -> f64 {
    m.rem_euclid(1.0)
}

impl DaySky {
    pub fn is_stationary(&self) -> bool {
        self.positions[0] == self.positions[1] && self.positions[1] == self.positions[2]
    }

    /// Position interpolated `n` days after 0h TD of the day.
    ///
    /// Right ascensions are unwrapped across 0h before interpolating.
    pub fn position_at(&self, n: f64) -> EquatorialCoordinates {
        if self.is_stationary() {
            return self.positions[1];
        }
        let ra = self.positions.map(|p| p.right_ascension_degrees());
        let unwrapped = [
            ra[1] + Coordinate::<HalfCircle>::new(ra[0] - ra[1]).value(),
            ra[1],
            ra[1] + Coordinate::<HalfCircle>::new(ra[2] - ra[1]).value(),
        ];
        let alpha = Coordinate::<FullCircle>::new(interpolate(unwrapped, n)).value();
        let delta = interpolate(self.positions.map(|p| p.declination()), n).clamp(-90.0, 90.0);
        EquatorialCoordinates::from_parts(alpha / 15.0, delta)
    }

    /// Local hour angle (degrees, `[−180, 180)`), altitude (degrees) and interpolated position at
    /// the day fraction `m`.
    pub fn hour_angle_and_altitude(&self, m: f64) -> (Degree, Degree, EquatorialCoordinates) {
        let theta = self.sidereal_time + SIDEREAL_RATE * m;
        let position = self.position_at(m + self.delta_t / SECONDS_PER_DAY);
        let h = position.hour_angle(theta, self.geo_coords.longitude());

        let phi = self.geo_coords.latitude() * RADEG;
        let delta = position.declination() * RADEG;
        let altitude = (phi.sin() * delta.sin() + phi.cos() * delta.cos() * (h * RADEG).cos())
            .clamp(-1.0, 1.0)
            .asin()
            / RADEG;
        (h, altitude, position)
    }

    /// Altitude at the day fraction `m` (may lie outside `[0, 1)`).
    pub fn altitude_at(&self, m: f64) -> Degree {
        self.hour_angle_and_altitude(m).1
    }

    fn corrected_transit(&self, m: f64) -> f64 {
        let (h, _, _) = self.hour_angle_and_altitude(m);
        m - h / 360.0
    }

    fn corrected_crossing(&self, m: f64, h0: Degree) -> f64 {
        let (h, altitude, position) = self.hour_angle_and_altitude(m);
        let denominator = 360.0
            * (position.declination() * RADEG).cos()
            * (self.geo_coords.latitude() * RADEG).cos()
            * (h * RADEG).sin();
        if denominator == 0.0 {
            return m;
        }
        m + (altitude - h0) / denominator
    }

    /// Rising, transit and setting for the altitude threshold `h0`.
    ///
    /// Returns
    /// --------
    /// * A [`RiseTransitSet`]; `rising` and `setting` are `None` unless the body
    ///   [`Visibility::RisesAndSets`].
    pub fn rise_transit_set(&self, h0: Degree) -> RiseTransitSet {
        let today = self.positions[1];
        let phi = self.geo_coords.latitude() * RADEG;
        let delta = today.declination() * RADEG;

        let cos_h0 = ((h0 * RADEG).sin() - phi.sin() * delta.sin()) / (phi.cos() * delta.cos());
        let visibility = if cos_h0 < -1.0 {
            Visibility::Circumpolar
        } else if cos_h0 > 1.0 {
            Visibility::NeverRises
        } else {
            Visibility::RisesAndSets
        };

        let m0 = wrap_day_fraction(
            (today.right_ascension_degrees() - self.geo_coords.longitude() - self.sidereal_time)
                / 360.0,
        );
        let stationary = self.is_stationary();

        let transit = if stationary {
            m0
        } else {
            wrap_day_fraction(self.corrected_transit(m0))
        };

        let (rising, setting) = if visibility == Visibility::RisesAndSets {
            let half_arc = cos_h0.acos() / RADEG / 360.0;
            let m1 = wrap_day_fraction(m0 - half_arc);
            let m2 = wrap_day_fraction(m0 + half_arc);
            if stationary {
                (Some(m1), Some(m2))
            } else {
                (
                    Some(wrap_day_fraction(self.corrected_crossing(m1, h0))),
                    Some(wrap_day_fraction(self.corrected_crossing(m2, h0))),
                )
            }
        } else {
            (None, None)
        };

        RiseTransitSet {
            transit,
            rising,
            setting,
            transit_altitude: self.altitude_at(transit),
            visibility,
        }
    }
}

#[cfg(test)]
pub(crate) mod rise_transit_set_test {
    use super::*;
    use approx::assert_abs_diff_eq;

    /// Greenwich apparent sidereal time at 1988-03-20 0h UT.
    pub(crate) const THETA_1988_03_20: Degree = 177.7420651;

    pub(crate) fn boston() -> GeographicalCoordinates {
        GeographicalCoordinates::new(-71.0833, 42.3333).unwrap()
    }

    fn venus_sky() -> DaySky {
        let eq = |ra: f64, dec: f64| EquatorialCoordinates::from_degrees(ra, dec).unwrap();
        DaySky {
            positions: [
                eq(40.68021, 18.04761),
                eq(41.73129, 18.44092),
                eq(42.78204, 18.82742),
            ],
            geo_coords: boston(),
            sidereal_time: THETA_1988_03_20,
            delta_t: 56.0,
        }
    }

    #[test]
    fn test_bessel_interpolation() {
        assert_eq!(interpolate([1.0, 2.0, 3.0], 0.5), 2.5);
        assert_eq!(interpolate([1.0, 4.0, 9.0], 1.0), 9.0);
        assert_eq!(interpolate([1.0, 4.0, 9.0], -1.0), 1.0);
        assert_abs_diff_eq!(interpolate([1.0, 4.0, 9.0], 0.5), 6.25, epsilon = 1e-12);
    }

    #[test]
    fn test_right_ascension_unwrapped_across_zero() {
        let eq = |ra: f64| EquatorialCoordinates::from_degrees(ra, 0.0).unwrap();
        let sky = DaySky {
            positions: [eq(359.0), eq(0.0), eq(1.0)],
            geo_coords: boston(),
            sidereal_time: 0.0,
            delta_t: 0.0,
        };
        assert_abs_diff_eq!(sky.position_at(0.5).right_ascension_degrees(), 0.5, epsilon = 1e-9);
        assert_abs_diff_eq!(sky.position_at(-0.5).right_ascension_degrees(), 359.5, epsilon = 1e-9);
    }

    #[test]
    fn test_venus_boston_1988_march_20() {
        let rts = venus_sky().rise_transit_set(-0.5667);
        assert_eq!(rts.visibility, Visibility::RisesAndSets);
        assert_abs_diff_eq!(rts.transit, 0.81980, epsilon = 1e-5);
        assert_abs_diff_eq!(rts.rising.unwrap(), 0.51766, epsilon = 1e-5);
        assert_abs_diff_eq!(rts.setting.unwrap(), 0.12130, epsilon = 1e-5);
        assert_abs_diff_eq!(rts.transit_altitude, 66.4252, epsilon = 1e-3);
    }

    #[test]
    fn test_circumpolar_star() {
        let star = EquatorialCoordinates::new(2.852136, 85.82742).unwrap();
        let sky = DaySky {
            positions: [star; 3],
            geo_coords: boston(),
            sidereal_time: THETA_1988_03_20,
            delta_t: 56.0,
        };
        let rts = sky.rise_transit_set(-0.5667);
        assert_eq!(rts.visibility, Visibility::Circumpolar);
        assert_eq!(rts.rising, None);
        assert_eq!(rts.setting, None);
        // 19:44:29.6 UT
        assert_abs_diff_eq!(rts.transit * 24.0, 19.0 + 44.0 / 60.0 + 29.6 / 3600.0, epsilon = 1e-4);
        assert_abs_diff_eq!(rts.transit_altitude, 46.50543, epsilon = 1e-4);
    }

    #[test]
    fn test_never_rising_star() {
        let star = EquatorialCoordinates::new(6.0, -70.0).unwrap();
        let sky = DaySky {
            positions: [star; 3],
            geo_coords: boston(),
            sidereal_time: THETA_1988_03_20,
            delta_t: 56.0,
        };
        let rts = sky.rise_transit_set(-0.5667);
        assert_eq!(rts.visibility, Visibility::NeverRises);
        assert!(rts.rising.is_none() && rts.setting.is_none());
        assert_abs_diff_eq!(rts.transit_altitude, 90.0 - 42.3333 - 70.0, epsilon = 0.01);
    }
}
