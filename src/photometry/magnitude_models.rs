use serde::{Deserialize, Serialize};

use crate::constants::{AstronomicalUnit, Degree, RADEG};

/// Photometric model of a small body.
///
/// Variants
/// --------
/// * `HG` – IAU two-parameter system for asteroids, with the phase functions
///   `Φi = exp(−Ai tan(β/2)^Bi)`, `A1 = 3.33`, `B1 = 0.63`, `A2 = 1.87`, `B2 = 1.22`.
/// * `HN` – total magnitude of a comet, `n` measuring how fast the activity grows towards the Sun.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum MagnitudeModel {
    HG { absolute_magnitude: f64, slope: f64 },
    HN { absolute_magnitude: f64, slope: f64 },
}

impl MagnitudeModel {
    /// Apparent magnitude.
    ///
    /// Arguments
    /// ---------
    /// * `r`: heliocentric distance, AU.
    /// * `delta`: geocentric distance, AU.
    /// * `phase_angle`: Sun–body–Earth angle `β`, degrees. Unused by the H-n model.
    ///
    /// Formula
    /// -------
    /// ```text
    /// H-G: m = H + 5 log(r Δ) − 2.5 log((1 − G) Φ1 + G Φ2)
    /// H-n: m = H + 5 log Δ + 2.5 n log r
    /// ```
    pub fn apparent_magnitude(
        &self,
        r: AstronomicalUnit,
        delta: AstronomicalUnit,
        phase_angle: Degree,
    ) -> f64 {
        match *self {
            MagnitudeModel::HG {
                absolute_magnitude,
                slope,
            } => {
                let tan_half = (phase_angle * RADEG / 2.0).tan().abs();
                let phi1 = (-3.33 * tan_half.powf(0.63)).exp();
                let phi2 = (-1.87 * tan_half.powf(1.22)).exp();
                absolute_magnitude + 5.0 * (r * delta).log10()
                    - 2.5 * ((1.0 - slope) * phi1 + slope * phi2).log10()
            }
            MagnitudeModel::HN {
                absolute_magnitude,
                slope,
            } => absolute_magnitude + 5.0 * delta.log10() + 2.5 * slope * r.log10(),
        }
    }
}

#[cfg(test)]
mod magnitude_models_test {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_hg_at_opposition_is_distance_modulus() {
        let model = MagnitudeModel::HG {
            absolute_magnitude: 3.34,
            slope: 0.12,
        };
        assert_abs_diff_eq!(model.apparent_magnitude(1.0, 1.0, 0.0), 3.34, epsilon = 1e-12);
        assert_abs_diff_eq!(
            model.apparent_magnitude(2.0, 1.5, 0.0),
            3.34 + 5.0 * 3.0f64.log10(),
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_hg_fades_with_phase() {
        let model = MagnitudeModel::HG {
            absolute_magnitude: 7.0,
            slope: 0.15,
        };
        let mut previous = model.apparent_magnitude(2.5, 1.6, 0.0);
        for beta in [5.0, 10.0, 20.0, 40.0] {
            let m = model.apparent_magnitude(2.5, 1.6, beta);
            assert!(m > previous);
            previous = m;
        }
        // 1 − G of the flux follows Φ1, G follows Φ2
        let tan_half = (20.0 * RADEG / 2.0).tan();
        let flux = 0.85 * (-3.33 * tan_half.powf(0.63)).exp() + 0.15 * (-1.87 * tan_half.powf(1.22)).exp();
        assert_abs_diff_eq!(
            model.apparent_magnitude(1.0, 1.0, 20.0),
            7.0 - 2.5 * flux.log10(),
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_hn_comet() {
        let model = MagnitudeModel::HN {
            absolute_magnitude: 5.5,
            slope: 4.0,
        };
        assert_abs_diff_eq!(model.apparent_magnitude(1.0, 1.0, 90.0), 5.5, epsilon = 1e-12);
        assert_abs_diff_eq!(
            model.apparent_magnitude(0.5, 2.0, 30.0),
            5.5 + 5.0 * 2.0f64.log10() + 10.0 * 0.5f64.log10(),
            epsilon = 1e-12
        );
    }
}
