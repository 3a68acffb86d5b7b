//! # Truncated VSOP87D series
//!
//! Heliocentric ecliptical coordinates of the planets, referred to the mean ecliptic and
//! equinox **of date**. Each coordinate is a Poisson series in `τ`, the Julian millennia of
//! dynamical time since J2000:
//!
//! ```text
//! X = Σₙ τⁿ Σₖ Aₙₖ cos(Bₙₖ + Cₙₖ τ) / 10⁸
//! ```
//!
//! `L` and `B` come out in radians, `R` in AU. The coefficient tables are the usual truncation
//! of the theory (about 1″ over a few millennia around J2000).
use crate::constants::{JulianDay, RADEG};
use crate::time::julian_millennia;

mod earth;
mod jupiter;
mod mars;
mod mercury;
mod neptune;
mod saturn;
mod uranus;
mod venus;

/// One periodic term `A cos(B + C τ)`.
#[derive(Debug, Clone, Copy)]
pub(crate) struct VsopTerm(pub f64, pub f64, pub f64);

/// The three coordinates of one planet, each split by power of `τ`.
#[derive(Debug)]
pub(crate) struct VsopSeries {
    pub l: &'static [&'static [VsopTerm]],
    pub b: &'static [&'static [VsopTerm]],
    pub r: &'static [&'static [VsopTerm]],
}

/// Sum one coordinate of the series at `τ`.
fn evaluate(series: &[&[VsopTerm]], tau: f64) -> f64 {
    series
        .iter()
        .rev()
        .fold(0.0, |acc, terms| {
            let sum: f64 = terms
                .iter()
                .map(|VsopTerm(a, b, c)| a * (b + c * tau).cos())
                .sum();
            acc * tau + sum
        })
        / 1e8
}

/// The planets covered by the series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum Planet {
    Mercury,
    Venus,
    Earth,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
}

impl Planet {
    pub const ALL: [Planet; 8] = [
        Planet::Mercury,
        Planet::Venus,
        Planet::Earth,
        Planet::Mars,
        Planet::Jupiter,
        Planet::Saturn,
        Planet::Uranus,
        Planet::Neptune,
    ];

    fn series(&self) -> &'static VsopSeries {
        match self {
            Planet::Mercury => &mercury::SERIES,
            Planet::Venus => &venus::SERIES,
            Planet::Earth => &earth::SERIES,
            Planet::Mars => &mars::SERIES,
            Planet::Jupiter => &jupiter::SERIES,
            Planet::Saturn => &saturn::SERIES,
            Planet::Uranus => &uranus::SERIES,
            Planet::Neptune => &neptune::SERIES,
        }
    }

    /// Heliocentric `(L, B, R)`: longitude `[0, 360)` and latitude in degrees, radius in AU.
    pub fn vsop_coordinates(&self, jde: JulianDay) -> (f64, f64, f64) {
        let tau = julian_millennia(jde);
        let series = self.series();
        let l = (evaluate(series.l, tau) / RADEG).rem_euclid(360.0);
        let b = evaluate(series.b, tau) / RADEG;
        let r = evaluate(series.r, tau);
        (l, b, r)
    }
}

#[cfg(test)]
mod vsop_test {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_venus_1992_december() {
        let (l, b, r) = Planet::Venus.vsop_coordinates(2448976.5);
        assert_abs_diff_eq!(l, 26.11428, epsilon = 1e-5);
        assert_abs_diff_eq!(b, -2.62070, epsilon = 1e-5);
        assert_abs_diff_eq!(r, 0.724603, epsilon = 1e-6);
    }

    #[test]
    fn test_earth_1992_october() {
        let (l, b, r) = Planet::Earth.vsop_coordinates(2448908.5);
        assert_abs_diff_eq!(l, 19.907372, epsilon = 1e-6);
        assert_abs_diff_eq!(b, -0.000179, epsilon = 1e-6);
        assert_abs_diff_eq!(r, 0.99760775, epsilon = 1e-8);
    }

    #[test]
    fn test_radius_vectors_at_j2000() {
        let expected = [0.4665, 0.7202, 0.9833, 1.3912, 4.9654, 9.1837, 19.9240, 30.1205];
        for (planet, radius) in Planet::ALL.iter().zip(expected) {
            let (_, _, r) = planet.vsop_coordinates(2451545.0);
            assert_abs_diff_eq!(r, radius, epsilon = 1e-3);
        }
    }
}
