//! # Reference system rotations and precession
//!
//! Rotation matrices between ecliptic and equatorial frames and the precession of coordinates
//! between two epochs. Angles are in degrees at the API and converted to radians here.
use nalgebra::{Matrix3, Rotation3, Vector3};

use crate::constants::{Degree, JulianDay, Radian, RADEG};
use crate::time::julian_centuries;

/// Construct a right-handed 3×3 rotation matrix around one of the principal axes (X, Y, or Z).
///
/// This function builds a [`nalgebra::Matrix3`] representing an **active rotation**
/// of a 3D vector by an angle `alpha` around the chosen axis.
///
/// # Arguments
///
/// * `alpha` - Rotation angle in **radians** (positive = direct/trigonometric sense).
/// * `k` - Index of the axis of rotation: `0` → X, `1` → Y, anything else → Z.
///
/// # Returns
///
/// A 3×3 rotation matrix `R` such that the rotated vector is `x' = R · x`.
///
/// # See also
/// * [`precession_matrix`] – composes three of these for the equatorial precession
/// * [`ecliptic_to_equatorial_matrix`] – a single X rotation by the obliquity
pub fn rotmt(alpha: Radian, k: usize) -> Matrix3<f64> {
    let axis = match k {
        0 => Vector3::x_axis(),
        1 => Vector3::y_axis(),
        _ => Vector3::z_axis(),
    };

    Rotation3::from_axis_angle(&axis, alpha).into()
}

/// Rotation taking ecliptic rectangular coordinates to equatorial ones for an obliquity `ε`.
pub fn ecliptic_to_equatorial_matrix(obliquity: Degree) -> Matrix3<f64> {
    rotmt(obliquity * RADEG, 0)
}

/// Rotation taking equatorial rectangular coordinates to ecliptic ones for an obliquity `ε`.
pub fn equatorial_to_ecliptic_matrix(obliquity: Degree) -> Matrix3<f64> {
    rotmt(-obliquity * RADEG, 0)
}

/// Compute the equatorial precession rotation between two epochs (IAU 1976, Lieske).
///
/// Arguments
/// ---------
/// * `from_jd`: epoch of the input coordinates (Julian Ephemeris Day).
/// * `to_jd`: target epoch.
///
/// Returns
/// --------
/// * The matrix `P` with `x_to = P · x_from` for equatorial rectangular vectors.
///
/// Formula
/// -------
/// With `T` the centuries from J2000 to `from_jd` and `t` the centuries between both epochs,
/// in arcseconds:
///
/// ```text
/// ζ = (2306.2181″ + 1.39656″T − 0.000139″T²) t + (0.30188″ − 0.000344″T) t² + 0.017998″ t³
/// z = (2306.2181″ + 1.39656″T − 0.000139″T²) t + (1.09468″ + 0.000066″T) t² + 0.018203″ t³
/// θ = (2004.3109″ − 0.85330″T − 0.000217″T²) t − (0.42665″ + 0.000217″T) t² − 0.041833″ t³
/// ```
///
/// and `P = R_z(z) · R_y(−θ) · R_z(ζ)` with active rotations.
pub fn precession_matrix(from_jd: JulianDay, to_jd: JulianDay) -> Matrix3<f64> {
    let big_t = julian_centuries(from_jd);
    let t = (to_jd - from_jd) / 36525.0;
    let (t2, t3) = (t * t, t * t * t);

    let base = 2306.2181 + 1.39656 * big_t - 0.000139 * big_t * big_t;
    let zeta = base * t + (0.30188 - 0.000344 * big_t) * t2 + 0.017998 * t3;
    let z = base * t + (1.09468 + 0.000066 * big_t) * t2 + 0.018203 * t3;
    let theta = (2004.3109 - 0.85330 * big_t - 0.000217 * big_t * big_t) * t
        - (0.42665 + 0.000217 * big_t) * t2
        - 0.041833 * t3;

    let arcsec = RADEG / 3600.0;
    rotmt(z * arcsec, 2) * rotmt(-theta * arcsec, 1) * rotmt(zeta * arcsec, 2)
}

/// Rigorous precession of ecliptical coordinates from one epoch to another.
///
/// Arguments
/// ---------
/// * `longitude`, `latitude`: ecliptical coordinates (degrees) referred to `from_jd`.
/// * `from_jd`, `to_jd`: initial and final epochs (Julian Ephemeris Day).
///
/// Returns
/// --------
/// * `(λ, β)` referred to the ecliptic and equinox of `to_jd`, λ in `[0, 360)`.
///
/// Formula
/// -------
/// The inclination `η` of the ecliptic of `to_jd` on the one of `from_jd`, the longitude `Π` of
/// its ascending node and the general precession in longitude `p`:
///
/// ```text
/// η = (47.0029″ − 0.06603″T + 0.000598″T²) t + (−0.03302″ + 0.000598″T) t² + 0.000060″ t³
/// Π = 174.876384° + 3289.4789″T + 0.60622″T² − (869.8089″ + 0.50491″T) t + 0.03536″ t²
/// p = (5029.0966″ + 2.22226″T − 0.000042″T²) t + (1.11113″ − 0.000042″T) t² − 0.000006″ t³
/// ```
///
/// then
///
/// ```text
/// A = cos η cos β sin(Π − λ) − sin η sin β
/// B = cos β cos(Π − λ)
/// C = cos η sin β + sin η cos β sin(Π − λ)
/// λ′ = p + Π − atan2(A, B),  β′ = asin C
/// ```
pub fn precess_ecliptical(
    longitude: Degree,
    latitude: Degree,
    from_jd: JulianDay,
    to_jd: JulianDay,
) -> (Degree, Degree) {
    let big_t = julian_centuries(from_jd);
    let t = (to_jd - from_jd) / 36525.0;
    let (t2, t3) = (t * t, t * t * t);

    let eta = ((47.0029 - 0.06603 * big_t + 0.000598 * big_t * big_t) * t
        + (-0.03302 + 0.000598 * big_t) * t2
        + 0.000060 * t3)
        / 3600.0;
    let pi = 174.876384 + (3289.4789 * big_t + 0.60622 * big_t * big_t) / 3600.0
        - ((869.8089 + 0.50491 * big_t) * t - 0.03536 * t2) / 3600.0;
    let p = ((5029.0966 + 2.22226 * big_t - 0.000042 * big_t * big_t) * t
        + (1.11113 - 0.000042 * big_t) * t2
        - 0.000006 * t3)
        / 3600.0;

    let (eta, beta, node) = (eta * RADEG, latitude * RADEG, (pi - longitude) * RADEG);
    let a = eta.cos() * beta.cos() * node.sin() - eta.sin() * beta.sin();
    let b = beta.cos() * node.cos();
    let c = eta.cos() * beta.sin() + eta.sin() * beta.cos() * node.sin();

    let new_longitude = (p + pi - a.atan2(b) / RADEG).rem_euclid(360.0);
    (new_longitude, c.clamp(-1.0, 1.0).asin() / RADEG)
}

#[cfg(test)]
mod ref_system_test {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_rotmt_z_quarter_turn() {
        let r = rotmt(std::f64::consts::FRAC_PI_2, 2);
        let v = r * Vector3::new(1.0, 0.0, 0.0);
        assert_abs_diff_eq!(v, Vector3::new(0.0, 1.0, 0.0), epsilon = 1e-15);
    }

    #[test]
    fn test_ecliptic_equatorial_inverse() {
        let m = ecliptic_to_equatorial_matrix(23.44) * equatorial_to_ecliptic_matrix(23.44);
        assert_abs_diff_eq!(m, Matrix3::identity(), epsilon = 1e-15);
    }

    #[test]
    fn test_precession_matrix_theta_persei() {
        // J2000 position already corrected for proper motion, precessed to 2028 Nov 13.19 TD
        let ra: f64 = 41.054063 * RADEG;
        let dec: f64 = 49.227750 * RADEG;
        let v = Vector3::new(dec.cos() * ra.cos(), dec.cos() * ra.sin(), dec.sin());
        let p = precession_matrix(2451545.0, 2462088.69) * v;
        let ra2 = p.y.atan2(p.x) / RADEG;
        let dec2 = p.z.asin() / RADEG;
        assert_abs_diff_eq!(ra2, 41.547214, epsilon = 1e-5);
        assert_abs_diff_eq!(dec2, 49.348483, epsilon = 1e-5);
    }

    #[test]
    fn test_precession_round_trip() {
        let there = precession_matrix(2451545.0, 2488069.5);
        let back = precession_matrix(2488069.5, 2451545.0);
        assert_abs_diff_eq!(back * there, Matrix3::identity(), epsilon = 1e-7);
    }

    #[test]
    fn test_precess_ecliptical_venus_minus_214() {
        // Venus, J2000 → −214 June 30.0
        let (lambda, beta) = precess_ecliptical(149.48194, 1.76549, 2451545.0, 1643074.5);
        assert_abs_diff_eq!(lambda, 118.704, epsilon = 1e-3);
        assert_abs_diff_eq!(beta, 1.615, epsilon = 1e-3);
    }

    #[test]
    fn test_precess_ecliptical_identity() {
        let (lambda, beta) = precess_ecliptical(10.0, -5.0, 2451545.0, 2451545.0);
        assert_abs_diff_eq!(lambda, 10.0, epsilon = 1e-12);
        assert_abs_diff_eq!(beta, -5.0, epsilon = 1e-12);
    }
}
