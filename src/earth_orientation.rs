//! # Earth orientation: obliquity, nutation and the equation of the equinoxes
//!
//! All quantities are functions of the Julian Ephemeris Day (dynamical time) only. Nothing is
//! cached: a [`Nutation`] is recomputed on every call.

use crate::constants::{Degree, JulianDay, DAYS_PER_JULIAN_CENTURY, J2000, RADEG};

/// Compute the mean obliquity of the ecliptic at a given epoch (Laskar 1986).
///
/// Arguments
/// ---------
/// * `jde`: Julian Ephemeris Day.
///
/// Returns
/// --------
/// * Mean obliquity of the ecliptic in degrees.
///
/// Formula
/// -------
/// A 10th-order polynomial in `U = T/100`, `T` in Julian centuries from J2000, evaluated with
/// Horner's method:
///
/// ```text
/// ε₀ = 23°26′21.448″ − 4680.93″U − 1.55″U² + 1999.25″U³ − 51.38″U⁴ − 249.67″U⁵
///      − 39.05″U⁶ + 7.12″U⁷ + 27.87″U⁸ + 5.79″U⁹ + 2.45″U¹⁰
/// ```
///
/// The accuracy is 0.01″ over 1000 years and a few arcseconds over 10000 years around J2000.
pub fn mean_obliquity(jde: JulianDay) -> Degree {
    const COEFFS: [f64; 11] = [
        84381.448, -4680.93, -1.55, 1999.25, -51.38, -249.67, -39.05, 7.12, 27.87, 5.79, 2.45,
    ];
    let u = (jde - J2000) / DAYS_PER_JULIAN_CENTURY / 100.0;
    COEFFS.iter().rev().fold(0.0, |acc, c| acc * u + c) / 3600.0
}

/// Nutation of the Earth's axis at one instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Nutation {
    /// Nutation in longitude Δψ (degrees).
    pub longitude: Degree,
    /// Nutation in obliquity Δε (degrees).
    pub obliquity: Degree,
    /// Mean obliquity ε₀ (degrees).
    pub mean_obliquity: Degree,
    /// True obliquity ε = ε₀ + Δε (degrees).
    pub true_obliquity: Degree,
}

/// Delaunay-type arguments of the luni-solar theory, in degrees.
#[derive(Debug, Clone, Copy)]
pub(crate) struct FundamentalArguments {
    /// Mean elongation of the Moon from the Sun
    pub(crate) d: Degree,
    /// Mean anomaly of the Sun
    pub(crate) m: Degree,
    /// Mean anomaly of the Moon
    pub(crate) m_prime: Degree,
    /// Moon's argument of latitude
    pub(crate) f: Degree,
    /// Longitude of the ascending node of the Moon's mean orbit
    pub(crate) omega: Degree,
}

impl FundamentalArguments {
    pub(crate) fn at(t: f64) -> Self {
        let t2 = t * t;
        let t3 = t2 * t;
        FundamentalArguments {
            d: 297.85036 + 445267.111480 * t - 0.0019142 * t2 + t3 / 189474.0,
            m: 357.52772 + 35999.050340 * t - 0.0001603 * t2 - t3 / 300000.0,
            m_prime: 134.96298 + 477198.867398 * t + 0.0086972 * t2 + t3 / 56250.0,
            f: 93.27191 + 483202.017538 * t - 0.0036825 * t2 + t3 / 327270.0,
            omega: 125.04452 - 1934.136261 * t + 0.0020708 * t2 + t3 / 450000.0,
        }
    }
}

/// One row of the IAU 1980 series: argument multipliers and coefficients in 0.0001″.
struct NutationTerm {
    d: i8,
    m: i8,
    m_prime: i8,
    f: i8,
    omega: i8,
    sin: f64,
    sin_t: f64,
    cos: f64,
    cos_t: f64,
}

impl NutationTerm {
    #[allow(clippy::too_many_arguments)]
    const fn new(
        d: i8,
        m: i8,
        m_prime: i8,
        f: i8,
        omega: i8,
        sin: f64,
        sin_t: f64,
        cos: f64,
        cos_t: f64,
    ) -> Self {
        NutationTerm {
            d,
            m,
            m_prime,
            f,
            omega,
            sin,
            sin_t,
            cos,
            cos_t,
        }
    }

    fn argument(&self, args: &FundamentalArguments) -> Degree {
        f64::from(self.d) * args.d
            + f64::from(self.m) * args.m
            + f64::from(self.m_prime) * args.m_prime
            + f64::from(self.f) * args.f
            + f64::from(self.omega) * args.omega
    }
}

#[rustfmt::skip]
const NUTATION_TERMS: [NutationTerm; 63] = [
    NutationTerm::new(0, 0, 0, 0, 1, -171996.0, -174.2, 92025.0, 8.9),
    NutationTerm::new(-2, 0, 0, 2, 2, -13187.0, -1.6, 5736.0, -3.1),
    NutationTerm::new(0, 0, 0, 2, 2, -2274.0, -0.2, 977.0, -0.5),
    NutationTerm::new(0, 0, 0, 0, 2, 2062.0, 0.2, -895.0, 0.5),
    NutationTerm::new(0, 1, 0, 0, 0, 1426.0, -3.4, 54.0, -0.1),
    NutationTerm::new(0, 0, 1, 0, 0, 712.0, 0.1, -7.0, 0.0),
    NutationTerm::new(-2, 1, 0, 2, 2, -517.0, 1.2, 224.0, -0.6),
    NutationTerm::new(0, 0, 0, 2, 1, -386.0, -0.4, 200.0, 0.0),
    NutationTerm::new(0, 0, 1, 2, 2, -301.0, 0.0, 129.0, -0.1),
    NutationTerm::new(-2, -1, 0, 2, 2, 217.0, -0.5, -95.0, 0.3),
    NutationTerm::new(-2, 0, 1, 0, 0, -158.0, 0.0, 0.0, 0.0),
    NutationTerm::new(-2, 0, 0, 2, 1, 129.0, 0.1, -70.0, 0.0),
    NutationTerm::new(0, 0, -1, 2, 2, 123.0, 0.0, -53.0, 0.0),
    NutationTerm::new(2, 0, 0, 0, 0, 63.0, 0.0, 0.0, 0.0),
    NutationTerm::new(0, 0, 1, 0, 1, 63.0, 0.1, -33.0, 0.0),
    NutationTerm::new(2, 0, -1, 2, 2, -59.0, 0.0, 26.0, 0.0),
    NutationTerm::new(0, 0, -1, 0, 1, -58.0, -0.1, 32.0, 0.0),
    NutationTerm::new(0, 0, 1, 2, 1, -51.0, 0.0, 27.0, 0.0),
    NutationTerm::new(-2, 0, 2, 0, 0, 48.0, 0.0, 0.0, 0.0),
    NutationTerm::new(0, 0, -2, 2, 1, 46.0, 0.0, -24.0, 0.0),
    NutationTerm::new(2, 0, 0, 2, 2, -38.0, 0.0, 16.0, 0.0),
    NutationTerm::new(0, 0, 2, 2, 2, -31.0, 0.0, 13.0, 0.0),
    NutationTerm::new(0, 0, 2, 0, 0, 29.0, 0.0, 0.0, 0.0),
    NutationTerm::new(-2, 0, 1, 2, 2, 29.0, 0.0, -12.0, 0.0),
    NutationTerm::new(0, 0, 0, 2, 0, 26.0, 0.0, 0.0, 0.0),
    NutationTerm::new(-2, 0, 0, 2, 0, -22.0, 0.0, 0.0, 0.0),
    NutationTerm::new(0, 0, -1, 2, 1, 21.0, 0.0, -10.0, 0.0),
    NutationTerm::new(0, 2, 0, 0, 0, 17.0, -0.1, 0.0, 0.0),
    NutationTerm::new(2, 0, -1, 0, 1, 16.0, 0.0, -8.0, 0.0),
    NutationTerm::new(-2, 2, 0, 2, 2, -16.0, 0.1, 7.0, 0.0),
    NutationTerm::new(0, 1, 0, 0, 1, -15.0, 0.0, 9.0, 0.0),
    NutationTerm::new(-2, 0, 1, 0, 1, -13.0, 0.0, 7.0, 0.0),
    NutationTerm::new(0, -1, 0, 0, 1, -12.0, 0.0, 6.0, 0.0),
    NutationTerm::new(0, 0, 2, -2, 0, 11.0, 0.0, 0.0, 0.0),
    NutationTerm::new(2, 0, -1, 2, 1, -10.0, 0.0, 5.0, 0.0),
    NutationTerm::new(2, 0, 1, 2, 2, -8.0, 0.0, 3.0, 0.0),
    NutationTerm::new(0, 1, 0, 2, 2, 7.0, 0.0, -3.0, 0.0),
    NutationTerm::new(-2, 1, 1, 0, 0, -7.0, 0.0, 0.0, 0.0),
    NutationTerm::new(0, -1, 0, 2, 2, -7.0, 0.0, 3.0, 0.0),
    NutationTerm::new(2, 0, 0, 2, 1, -7.0, 0.0, 3.0, 0.0),
    NutationTerm::new(2, 0, 1, 0, 0, 6.0, 0.0, 0.0, 0.0),
    NutationTerm::new(-2, 0, 2, 2, 2, 6.0, 0.0, -3.0, 0.0),
    NutationTerm::new(-2, 0, 1, 2, 1, 6.0, 0.0, -3.0, 0.0),
    NutationTerm::new(2, 0, -2, 0, 1, -6.0, 0.0, 3.0, 0.0),
    NutationTerm::new(2, 0, 0, 0, 1, -6.0, 0.0, 3.0, 0.0),
    NutationTerm::new(0, -1, 1, 0, 0, 5.0, 0.0, 0.0, 0.0),
    NutationTerm::new(-2, -1, 0, 2, 1, -5.0, 0.0, 3.0, 0.0),
    NutationTerm::new(-2, 0, 0, 0, 1, -5.0, 0.0, 3.0, 0.0),
    NutationTerm::new(0, 0, 2, 2, 1, -5.0, 0.0, 3.0, 0.0),
    NutationTerm::new(-2, 0, 2, 0, 1, 4.0, 0.0, 0.0, 0.0),
    NutationTerm::new(-2, 1, 0, 2, 1, 4.0, 0.0, 0.0, 0.0),
    NutationTerm::new(0, 0, 1, -2, 0, 4.0, 0.0, 0.0, 0.0),
    NutationTerm::new(-1, 0, 1, 0, 0, -4.0, 0.0, 0.0, 0.0),
    NutationTerm::new(-2, 1, 0, 0, 0, -4.0, 0.0, 0.0, 0.0),
    NutationTerm::new(1, 0, 0, 0, 0, -4.0, 0.0, 0.0, 0.0),
    NutationTerm::new(0, 0, 1, 2, 0, 3.0, 0.0, 0.0, 0.0),
    NutationTerm::new(0, 0, -2, 2, 2, -3.0, 0.0, 0.0, 0.0),
    NutationTerm::new(-1, -1, 1, 0, 0, -3.0, 0.0, 0.0, 0.0),
    NutationTerm::new(0, 1, 1, 0, 0, -3.0, 0.0, 0.0, 0.0),
    NutationTerm::new(0, -1, 1, 2, 2, -3.0, 0.0, 0.0, 0.0),
    NutationTerm::new(2, -1, -1, 2, 2, -3.0, 0.0, 0.0, 0.0),
    NutationTerm::new(0, 0, 3, 2, 2, -3.0, 0.0, 0.0, 0.0),
    NutationTerm::new(2, -1, 0, 2, 2, -3.0, 0.0, 0.0, 0.0),
];

/// Compute the nutation in longitude and obliquity, and both obliquities, at a given epoch.
///
/// Arguments
/// ---------
/// * `jde`: Julian Ephemeris Day.
///
/// Returns
/// --------
/// * A [`Nutation`] with every angle in degrees.
///
/// Description
/// -----------
/// The five fundamental arguments are cubic polynomials in Julian centuries from J2000. The
/// 63 periodic terms of the IAU 1980 theory are summed in units of 0.0001″ and the result is
/// divided by 3600 to obtain degrees. The truncated series is accurate to 0.5″ in Δψ and 0.1″ in
/// Δε.
///
/// # See also
/// * [`mean_obliquity`] – the ε₀ part of the result
/// * [`equation_of_equinoxes`] – the sidereal time correction derived from it
pub fn nutation(jde: JulianDay) -> Nutation {
    let t = (jde - J2000) / DAYS_PER_JULIAN_CENTURY;
    let args = FundamentalArguments::at(t);

    let (dpsi, deps) = NUTATION_TERMS
        .iter()
        .fold((0.0, 0.0), |(dpsi, deps), term| {
            let arg = term.argument(&args) * RADEG;
            (
                dpsi + (term.sin + term.sin_t * t) * arg.sin(),
                deps + (term.cos + term.cos_t * t) * arg.cos(),
            )
        });

    let longitude = dpsi * 1e-4 / 3600.0;
    let obliquity = deps * 1e-4 / 3600.0;
    let mean_obliquity = mean_obliquity(jde);

    Nutation {
        longitude,
        obliquity,
        mean_obliquity,
        true_obliquity: mean_obliquity + obliquity,
    }
}

/// Equation of the equinoxes: apparent minus mean sidereal time, in degrees.
///
/// Equal to `Δψ · cos ε` with the true obliquity.
pub fn equation_of_equinoxes(nutation: &Nutation) -> Degree {
    nutation.longitude * (nutation.true_obliquity * RADEG).cos()
}
