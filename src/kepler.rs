//! # Anomaly solvers
//!
//! Solutions of the two-body motion along the orbit, as true anomaly and radius vector:
//!
//! - [`eccentric_anomaly`] – Kepler's equation for elliptical orbits (fixed-point iteration),
//! - [`barker`] – Barker's equation for parabolic orbits (closed form),
//! - [`near_parabolic`] – Landgraf's series for eccentricities close to 1, on both sides.
//!
//! Every iterative solver has an explicit iteration cap and reports
//! [`AlmanacError::NonConvergence`] instead of looping forever.
use crate::almanac_errors::AlmanacError;
use crate::constants::{AstronomicalUnit, Degree, DPI, GAUSS_GRAV, RADEG};

/// Iteration cap of [`eccentric_anomaly`].
pub const MAX_KEPLER_ITERATIONS: usize = 10_000;

/// Iteration cap of each nested loop of [`near_parabolic`].
pub const MAX_NEAR_PARABOLIC_ITERATIONS: usize = 500;

/// Convergence threshold of the loops of [`near_parabolic`].
pub const NEAR_PARABOLIC_TOLERANCE: f64 = 1e-9;

/// Barker's constant `3k/√2`, for times in days and distances in AU.
const BARKER_CONSTANT: f64 = 0.03649116245;

/// Return the principal value of an angle in radians, in `[0, 2π)`.
pub fn principal_angle(a: f64) -> f64 {
    a.rem_euclid(DPI)
}

/// Solve Kepler's equation `M = E − e sin E` for the eccentric anomaly.
///
/// Arguments
/// ---------
/// * `eccentricity`: `0 ≤ e < 1`.
/// * `mean_anomaly`: `M` in degrees.
/// * `tolerance`: stop when two successive iterates differ by at most this many degrees.
///
/// Returns
/// --------
/// * The eccentric anomaly `E` in degrees.
///
/// Errors
/// ------
/// * [`AlmanacError::NonConvergence`] after [`MAX_KEPLER_ITERATIONS`] iterations.
///
/// Formula
/// -------
/// Fixed-point iteration seeded with `E₀ = M`:
///
/// ```text
/// Eₙ₊₁ = M + e · (180/π) · sin Eₙ
/// ```
///
/// The contraction factor is `e cos E`, so the convergence gets slow as `e → 1` near
/// perihelion.
pub fn eccentric_anomaly(
    eccentricity: f64,
    mean_anomaly: Degree,
    tolerance: Degree,
) -> Result<Degree, AlmanacError> {
    let e_deg = eccentricity / RADEG;
    let mut e_anomaly = mean_anomaly;

    for _ in 0..MAX_KEPLER_ITERATIONS {
        let next = mean_anomaly + e_deg * (e_anomaly * RADEG).sin();
        if (next - e_anomaly).abs() <= tolerance {
            return Ok(next);
        }
        e_anomaly = next;
    }

    Err(AlmanacError::NonConvergence {
        solver: "Kepler equation",
        iterations: MAX_KEPLER_ITERATIONS,
    })
}

/// True anomaly (degrees) from the eccentric anomaly (degrees) of an elliptical orbit.
///
/// ```text
/// tan(v/2) = √((1 + e)/(1 − e)) · tan(E/2)
/// ```
pub fn true_anomaly(eccentricity: f64, eccentric_anomaly: Degree) -> Degree {
    let half_e = eccentric_anomaly * RADEG / 2.0;
    let factor = ((1.0 + eccentricity) / (1.0 - eccentricity)).sqrt();
    2.0 * (factor * half_e.sin()).atan2(half_e.cos()) / RADEG
}

/// Solve Barker's equation for a parabolic orbit.
///
/// Arguments
/// ---------
/// * `perihelion_distance`: `q` in AU.
/// * `time_since_perihelion`: `t − T` in days.
///
/// Returns
/// --------
/// * `(v, r)`: true anomaly in degrees and radius vector in AU.
///
/// Formula
/// -------
/// ```text
/// W = 0.03649116245 · (t − T) / q^{3/2}
/// G = W/2,  Y = (G + √(G² + 1))^{1/3},  s = Y − 1/Y
/// v = 2 atan s,  r = q (1 + s²)
/// ```
pub fn barker(
    perihelion_distance: AstronomicalUnit,
    time_since_perihelion: f64,
) -> (Degree, AstronomicalUnit) {
    let w = BARKER_CONSTANT * time_since_perihelion / perihelion_distance.powf(1.5);
    let g = w / 2.0;
    let y = (g + (g * g + 1.0).sqrt()).cbrt();
    let s = y - 1.0 / y;

    (2.0 * s.atan() / RADEG, perihelion_distance * (1.0 + s * s))
}

/// Landgraf's solution for orbits with an eccentricity close to 1 (elliptical or hyperbolic).
///
/// Arguments
/// ---------
/// * `perihelion_distance`: `q` in AU.
/// * `eccentricity`: `e`, typically in `[0.98, 1.1]`; `e = 1` reduces to Barker's equation.
/// * `time_since_perihelion`: `t − T` in days.
///
/// Returns
/// --------
/// * `(v, r)`: true anomaly in degrees (`(-180, 180]`) and radius vector in AU.
///
/// Errors
/// ------
/// * [`AlmanacError::NonConvergence`] when any of the nested loops exceeds
///   [`MAX_NEAR_PARABOLIC_ITERATIONS`].
///
/// Details
/// -------
/// The parabolic value of `s = tan(v/2)` seeds an outer loop. Inside it, a series in
/// `γ = (1 − e)/(1 + e)` is summed term by term (`z` loop) and `s` is refined by a fixed
/// point on the cubic `s³/3 + s = q₃` (`s` loop). Each loop stops when its increment falls
/// below [`NEAR_PARABOLIC_TOLERANCE`].
pub fn near_parabolic(
    perihelion_distance: AstronomicalUnit,
    eccentricity: f64,
    time_since_perihelion: f64,
) -> Result<(Degree, AstronomicalUnit), AlmanacError> {
    let q = perihelion_distance;
    let e = eccentricity;
    if time_since_perihelion == 0.0 {
        return Ok((0.0, q));
    }

    let d = NEAR_PARABOLIC_TOLERANCE;
    let q1 = GAUSS_GRAV * ((1.0 + e) / q).sqrt() / (2.0 * q);
    let gamma = (1.0 - e) / (1.0 + e);
    let q2 = q1 * time_since_perihelion;

    let mut s = 2.0 / (3.0 * q2.abs());
    s = 2.0 / (2.0 * ((s.atan() / 2.0).tan().cbrt()).atan()).tan();
    if time_since_perihelion < 0.0 {
        s = -s;
    }

    if e != 1.0 {
        let mut converged = false;
        for _ in 0..MAX_NEAR_PARABOLIC_ITERATIONS {
            let s0 = s;
            let y = s * s;
            let mut z = 1.0;
            let mut g1 = -y * s;
            let mut q3 = q2 + 2.0 * gamma * s * y / 3.0;

            let mut series_done = false;
            for _ in 0..MAX_NEAR_PARABOLIC_ITERATIONS {
                z += 1.0;
                g1 = -g1 * gamma * y;
                let z1 = (z - (z + 1.0) * gamma) / (2.0 * z + 1.0);
                let f = z1 * g1;
                q3 += f;
                if f.abs() <= d {
                    series_done = true;
                    break;
                }
            }
            if !series_done {
                return Err(non_convergence("near-parabolic series"));
            }

            let mut cubic_done = false;
            for _ in 0..MAX_NEAR_PARABOLIC_ITERATIONS {
                let s1 = s;
                s = (2.0 * s * s * s / 3.0 + q3) / (s * s + 1.0);
                if (s - s1).abs() <= d {
                    cubic_done = true;
                    break;
                }
            }
            if !cubic_done {
                return Err(non_convergence("near-parabolic cubic"));
            }

            if (s - s0).abs() <= d {
                converged = true;
                break;
            }
        }
        if !converged {
            return Err(non_convergence("near-parabolic outer loop"));
        }
    }

    let v = 2.0 * s.atan();
    let r = q * (1.0 + e) / (1.0 + e * v.cos());
    tracing::trace!(q, e, v = v / RADEG, r, "near-parabolic solution");
    Ok((v / RADEG, r))
}

fn non_convergence(solver: &'static str) -> AlmanacError {
    AlmanacError::NonConvergence {
        solver,
        iterations: MAX_NEAR_PARABOLIC_ITERATIONS,
    }
}

#[cfg(test)]
mod kepler_test {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_eccentric_anomaly() {
        assert_abs_diff_eq!(
            eccentric_anomaly(0.1, 5.0, 1e-6).unwrap(),
            5.554589,
            epsilon = 1e-6
        );
        assert_abs_diff_eq!(
            eccentric_anomaly(0.99, 33.0, 1e-6).unwrap(),
            89.722155,
            epsilon = 1e-5
        );
        assert_eq!(eccentric_anomaly(0.0, 42.0, 1e-9).unwrap(), 42.0);
    }

    #[test]
    fn test_eccentric_anomaly_satisfies_kepler() {
        for (e, m) in [(0.3, 10.0), (0.75, 200.0), (0.95, 359.0)] {
            let big_e = eccentric_anomaly(e, m, 1e-12).unwrap();
            let residual = big_e - e / RADEG * (big_e * RADEG).sin() - m;
            assert_abs_diff_eq!(residual, 0.0, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_eccentric_anomaly_non_convergence() {
        // A negative tolerance can never be reached
        assert_eq!(
            eccentric_anomaly(0.5, 10.0, -1.0),
            Err(AlmanacError::NonConvergence {
                solver: "Kepler equation",
                iterations: MAX_KEPLER_ITERATIONS,
            })
        );
    }

    #[test]
    fn test_true_anomaly() {
        assert_abs_diff_eq!(true_anomaly(0.0, 123.0), 123.0, epsilon = 1e-12);
        assert_abs_diff_eq!(true_anomaly(0.5, 180.0).abs(), 180.0, epsilon = 1e-9);
        assert!(true_anomaly(0.5, 90.0) > 90.0);
    }

    #[test]
    fn test_barker_comet_1998() {
        // q = 1.487469 AU, 1998 Aug 5.0 − 1998 Apr 14.4358
        let (v, r) = barker(1.487469, 112.5642);
        assert_abs_diff_eq!(v, 66.78862, epsilon = 1e-5);
        assert_abs_diff_eq!(r, 2.133911, epsilon = 1e-6);
    }

    #[test]
    fn test_near_parabolic_reference_cases() {
        let (v, r) = near_parabolic(0.921326, 1.0, 138.4783).unwrap();
        assert_abs_diff_eq!(v, 102.74426, epsilon = 1e-5);
        assert_abs_diff_eq!(r, 2.364192, epsilon = 1e-6);

        let (v, r) = near_parabolic(0.1, 0.987, 254.9).unwrap();
        assert_abs_diff_eq!(v, 164.50029, epsilon = 1e-5);
        assert_abs_diff_eq!(r, 4.063777, epsilon = 1e-6);

        let (v, r) = near_parabolic(0.123456, 0.99997, -30.47).unwrap();
        assert_abs_diff_eq!(v, -138.08810, epsilon = 1e-5);
        assert_abs_diff_eq!(r, 0.965053, epsilon = 1e-6);

        let (v, r) = near_parabolic(3.363943, 1.05731, 1237.1).unwrap();
        assert_abs_diff_eq!(v, 109.40598, epsilon = 1e-5);
        assert_abs_diff_eq!(r, 10.668551, epsilon = 1e-6);
    }

    #[test]
    fn test_near_parabolic_agrees_with_barker() {
        let (v1, r1) = near_parabolic(1.487469, 1.0, 112.5642).unwrap();
        let (v2, r2) = barker(1.487469, 112.5642);
        // Both sides are limited by the 1e-9 iteration tolerance
        assert_abs_diff_eq!(v1, v2, epsilon = 1e-7);
        assert_abs_diff_eq!(r1, r2, epsilon = 1e-8);
    }

    #[test]
    fn test_near_parabolic_at_perihelion() {
        assert_eq!(near_parabolic(0.5, 0.99, 0.0).unwrap(), (0.0, 0.5));
    }
}
