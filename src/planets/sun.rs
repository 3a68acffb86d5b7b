//! # Position of the Sun
//!
//! Two models:
//!
//! - [`low_accuracy_position`] – the geometric mean longitude and the equation of the centre,
//!   good to about 0.01°, cheap enough for twilight and night-window searches.
//! - [`apparent_position`] – the Earth's VSOP87 series reversed, with FK5 conversion,
//!   aberration and nutation.
//!
//! [`geometric_rectangular_j2000`] gives the Sun's geocentric rectangular position in the
//! J2000 equatorial frame, the origin shift used by the orbit propagators.
use crate::constants::{
    AstronomicalUnit, Degree, JulianDay, LIGHT_TIME_PER_AU, OBLIQUITY_J2000, RADEG, J2000,
};
use crate::coordinates::{
    EclipticalCoordinates, EquatorialCoordinates, FullCircle, Coordinate, RectangularCoordinates,
};
use crate::earth_orientation::nutation;
use crate::planets::apparent::{fk5_correction, ApparentPosition};
use crate::planets::{Heliocentric, Planet};
use crate::ref_system::{ecliptic_to_equatorial_matrix, precess_ecliptical};
use crate::time::julian_centuries;

/// Mean angular semidiameter of the Sun at 1 AU, arcseconds
pub const SEMIDIAMETER_1AU: f64 = 959.63;

/// Aberration of the Sun at 1 AU, arcseconds
const SOLAR_ABERRATION: f64 = 20.4898;

/// Geometric ecliptical longitude of the Sun from the low accuracy model.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolarLongitude {
    /// True geometric longitude `☉ = L₀ + C`, degrees `[0, 360)`
    pub true_longitude: Degree,
    /// Mean anomaly `M`, degrees
    pub mean_anomaly: Degree,
    /// Longitude of the Moon's ascending node `Ω`, degrees
    pub node: Degree,
}

/// Mean elements of the Sun and equation of the centre.
///
/// ```text
/// L₀ = 280.46646° + 36000.76983° T + 0.0003032° T²
/// M  = 357.52911° + 35999.05029° T − 0.0001537° T²
/// C  = (1.914602° − 0.004817° T − 0.000014° T²) sin M
///    + (0.019993° − 0.000101° T) sin 2M + 0.000289° sin 3M
/// ```
pub fn solar_longitude(jd: JulianDay) -> SolarLongitude {
    let t = julian_centuries(jd);
    let l0 = 280.46646 + 36000.76983 * t + 0.0003032 * t * t;
    let m = 357.52911 + 35999.05029 * t - 0.0001537 * t * t;
    let m_rad = m * RADEG;
    let c = (1.914602 - 0.004817 * t - 0.000014 * t * t) * m_rad.sin()
        + (0.019993 - 0.000101 * t) * (2.0 * m_rad).sin()
        + 0.000289 * (3.0 * m_rad).sin();

    SolarLongitude {
        true_longitude: Coordinate::<FullCircle>::new(l0 + c).value(),
        mean_anomaly: Coordinate::<FullCircle>::new(m).value(),
        node: 125.04 - 1934.136 * t,
    }
}

/// Low accuracy equatorial coordinates of the Sun.
///
/// The true geometric longitude `L₀ + C` (latitude 0) is converted with the true obliquity
/// of date. `jd` is used as given, without ΔT.
///
/// Returns
/// --------
/// * Right ascension and declination, accurate to about 0.01°.
pub fn low_accuracy_position(jd: JulianDay) -> EquatorialCoordinates {
    let sun = solar_longitude(jd);
    let obliquity = nutation(jd).true_obliquity;
    EclipticalCoordinates::from_parts(sun.true_longitude, 0.0, jd).to_equatorial(obliquity)
}

/// Low accuracy *apparent* coordinates: the longitude is corrected for aberration and
/// nutation with the short formulas `λ = ☉ − 0.00569° − 0.00478° sin Ω` and
/// `ε = ε₀ + 0.00256° cos Ω`.
pub fn low_accuracy_apparent_position(jd: JulianDay) -> EquatorialCoordinates {
    let sun = solar_longitude(jd);
    let node = sun.node * RADEG;
    let lambda = sun.true_longitude - 0.00569 - 0.00478 * node.sin();
    let obliquity = nutation(jd).mean_obliquity + 0.00256 * node.cos();
    EclipticalCoordinates::from_parts(lambda, 0.0, jd).to_equatorial(obliquity)
}

/// Apparent geocentric position of the Sun from the Earth's VSOP87 series.
///
/// Arguments
/// ---------
/// * `jde`: dynamical time.
///
/// Returns
/// --------
/// * An [`ApparentPosition`] with `distance = R` and `heliocentric_distance = 0`.
pub fn apparent_position(jde: JulianDay) -> ApparentPosition {
    let earth = Planet::Earth.heliocentric_coordinates(jde);
    let (lambda, beta) = fk5_correction(earth.longitude + 180.0, -earth.latitude, jde);

    let nut = nutation(jde);
    let lambda = lambda + nut.longitude - SOLAR_ABERRATION / 3600.0 / earth.radius;
    let ecliptical = EclipticalCoordinates::from_parts(lambda, beta, jde);

    ApparentPosition {
        equatorial: ecliptical.to_equatorial(nut.true_obliquity),
        ecliptical,
        distance: earth.radius,
        heliocentric_distance: 0.0,
        sun_distance: earth.radius,
        light_time: LIGHT_TIME_PER_AU * earth.radius,
    }
}

/// Geometric geocentric position of the Sun, equatorial J2000 rectangular coordinates (AU).
///
/// The Earth's heliocentric position of date is reversed, precessed to J2000 and rotated by
/// the J2000 obliquity.
pub fn geometric_rectangular_j2000(jde: JulianDay) -> RectangularCoordinates {
    let earth = Planet::Earth.heliocentric_coordinates(jde);
    let (lambda, beta) =
        precess_ecliptical(earth.longitude + 180.0, -earth.latitude, jde, J2000);
    let ecliptic = RectangularCoordinates::from_spherical(lambda, beta, earth.radius);
    (ecliptic_to_equatorial_matrix(OBLIQUITY_J2000) * ecliptic.to_vector()).into()
}

/// Apparent semidiameter of the Sun in arcseconds for a distance `R` in AU.
pub fn semidiameter(distance: AstronomicalUnit) -> f64 {
    SEMIDIAMETER_1AU / distance
}

#[cfg(test)]
mod sun_test {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_low_accuracy_1992_october_13() {
        let sun = low_accuracy_position(2448908.5);
        assert_abs_diff_eq!(sun.right_ascension(), 13.225445021, epsilon = 1e-5);
        assert_abs_diff_eq!(sun.declination(), -7.785469, epsilon = 1e-5);
    }

    #[test]
    fn test_low_accuracy_apparent_is_close() {
        let mean = low_accuracy_position(2448908.5);
        let apparent = low_accuracy_apparent_position(2448908.5);
        assert_abs_diff_eq!(
            mean.right_ascension_degrees(),
            apparent.right_ascension_degrees(),
            epsilon = 0.02
        );
    }

    #[test]
    fn test_apparent_position_1992_october_13() {
        let sun = apparent_position(2448908.5);
        assert_abs_diff_eq!(sun.equatorial.right_ascension_degrees(), 198.378178, epsilon = 1e-5);
        assert_abs_diff_eq!(sun.equatorial.declination(), -7.783871, epsilon = 1e-5);
        assert_abs_diff_eq!(sun.ecliptical.longitude(), 199.906060, epsilon = 1e-5);
        assert_abs_diff_eq!(sun.distance, 0.99760775, epsilon = 1e-8);
    }

    #[test]
    fn test_geometric_rectangular_j2000() {
        let sun = geometric_rectangular_j2000(2448908.5);
        assert_abs_diff_eq!(sun.x, -0.9373959, epsilon = 1e-5);
        assert_abs_diff_eq!(sun.y, -0.3131679, epsilon = 1e-5);
        assert_abs_diff_eq!(sun.z, -0.1357792, epsilon = 1e-5);
    }

    #[test]
    fn test_semidiameter() {
        assert_abs_diff_eq!(semidiameter(1.0), 959.63, epsilon = 1e-12);
        assert!(semidiameter(0.983) > semidiameter(1.017));
    }
}
