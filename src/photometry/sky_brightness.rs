//! # Sky brightness scales
//!
//! Three ways of describing how dark the sky is:
//!
//! | Scale  | Unit        | Domain       | Dark sky |
//! |--------|-------------|--------------|----------|
//! | NELM   | magnitude   | `[0, 8]`     | high     |
//! | SQM    | mag/arcsec² | `[10, 22]`   | high     |
//! | Bortle | class       | `1..=9`      | low      |
//!
//! The NELM ⇄ SQM relations are the log-linear fits of Schaefer's visual threshold model; the
//! Bortle classes map to fixed SQM intervals. An optional personal offset (`fst_offset`) shifts
//! the limiting magnitude of an observer who sees fainter (negative) or brighter (positive) stars
//! than the average eye.
use crate::almanac_errors::AlmanacError;

/// Darkest sky brightness reachable from the ground, mag/arcsec².
pub const DARKEST_SQM: f64 = 22.0;

/// Brightest sky brightness accepted, mag/arcsec².
pub const BRIGHTEST_SQM: f64 = 10.0;

/// Faintest limiting magnitude accepted.
pub const FAINTEST_NELM: f64 = 8.0;

/// Floor of [`sqm_to_nelm`] in a very bright sky.
const BRIGHT_SKY_NELM: f64 = 2.5;

/// SQM upper bound of each Bortle class, from class 9 down to class 2. Class 1 is anything darker.
const BORTLE_SQM_LIMITS: [(u8, f64); 8] = [
    (9, 17.5),
    (8, 18.0),
    (7, 18.5),
    (6, 19.1),
    (5, 20.4),
    (4, 21.3),
    (3, 21.5),
    (2, 21.7),
];

/// Representative SQM and NELM of every Bortle class, index 0 being class 1.
const BORTLE_VALUES: [(f64, f64); 9] = [
    (21.85, 7.6),
    (21.6, 7.1),
    (21.4, 6.6),
    (20.85, 6.1),
    (19.75, 5.6),
    (18.8, 5.1),
    (18.25, 4.6),
    (17.75, 4.1),
    (17.5, 3.6),
];

fn check_nelm(nelm: f64) -> Result<(), AlmanacError> {
    if (0.0..=FAINTEST_NELM).contains(&nelm) {
        Ok(())
    } else {
        Err(AlmanacError::OutOfDomain(format!(
            "NELM {nelm} outside [0, {FAINTEST_NELM}]"
        )))
    }
}

fn check_sqm(sqm: f64) -> Result<(), AlmanacError> {
    if (BRIGHTEST_SQM..=DARKEST_SQM).contains(&sqm) {
        Ok(())
    } else {
        Err(AlmanacError::OutOfDomain(format!(
            "SQM {sqm} outside [{BRIGHTEST_SQM}, {DARKEST_SQM}]"
        )))
    }
}

fn check_bortle(bortle: u8) -> Result<usize, AlmanacError> {
    if (1..=9).contains(&bortle) {
        Ok(usize::from(bortle - 1))
    } else {
        Err(AlmanacError::OutOfDomain(format!(
            "Bortle class {bortle} outside 1..=9"
        )))
    }
}

/// Sky brightness from a naked-eye limiting magnitude.
///
/// Formula
/// -------
/// ```text
/// SQM = 21.58 − 5 log(10^(1.586 − (NELM + offset)/5) − 1)
/// ```
/// capped at [`DARKEST_SQM`], which is also returned when the logarithm argument vanishes
/// (`NELM + offset ≳ 7.93`).
///
/// Errors
/// ------
/// * [`AlmanacError::OutOfDomain`] if `nelm` is outside `[0, 8]`.
pub fn nelm_to_sqm(nelm: f64, fst_offset: f64) -> Result<f64, AlmanacError> {
    check_nelm(nelm)?;
    let x = 10f64.powf(1.586 - (nelm + fst_offset) / 5.0) - 1.0;
    if x <= 0.0 {
        return Ok(DARKEST_SQM);
    }
    Ok((21.58 - 5.0 * x.log10()).min(DARKEST_SQM))
}

/// Naked-eye limiting magnitude from a sky brightness.
///
/// Formula
/// -------
/// ```text
/// NELM = 7.97 − 5 log(1 + 10^(4.316 − SQM/5)) − offset
/// ```
/// with a floor of 2.5 magnitudes before the offset is applied.
///
/// Errors
/// ------
/// * [`AlmanacError::OutOfDomain`] if `sqm` is outside `[10, 22]`.
pub fn sqm_to_nelm(sqm: f64, fst_offset: f64) -> Result<f64, AlmanacError> {
    check_sqm(sqm)?;
    let nelm = 7.97 - 5.0 * (1.0 + 10f64.powf(4.316 - sqm / 5.0)).log10();
    Ok(nelm.max(BRIGHT_SKY_NELM) - fst_offset)
}

/// Bortle class of a sky brightness.
///
/// Errors
/// ------
/// * [`AlmanacError::OutOfDomain`] if `sqm` is outside `[10, 22]`.
pub fn sqm_to_bortle(sqm: f64) -> Result<u8, AlmanacError> {
    check_sqm(sqm)?;
    Ok(BORTLE_SQM_LIMITS
        .iter()
        .find(|(_, limit)| sqm <= *limit)
        .map_or(1, |(class, _)| *class))
}

/// Representative sky brightness of a Bortle class.
///
/// Errors
/// ------
/// * [`AlmanacError::OutOfDomain`] if `bortle` is outside `1..=9`.
pub fn bortle_to_sqm(bortle: u8) -> Result<f64, AlmanacError> {
    Ok(BORTLE_VALUES[check_bortle(bortle)?].0)
}

/// Representative limiting magnitude of a Bortle class, shifted by the personal offset.
///
/// Errors
/// ------
/// * [`AlmanacError::OutOfDomain`] if `bortle` is outside `1..=9`.
pub fn bortle_to_nelm(bortle: u8, fst_offset: f64) -> Result<f64, AlmanacError> {
    Ok(BORTLE_VALUES[check_bortle(bortle)?].1 - fst_offset)
}

/// Bortle class of a naked-eye limiting magnitude, through [`nelm_to_sqm`].
pub fn nelm_to_bortle(nelm: f64, fst_offset: f64) -> Result<u8, AlmanacError> {
    sqm_to_bortle(nelm_to_sqm(nelm, fst_offset)?.max(BRIGHTEST_SQM))
}

#[cfg(test)]
mod sky_brightness_test {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_domain_rejection() {
        assert!(matches!(nelm_to_sqm(8.1, 0.0), Err(AlmanacError::OutOfDomain(_))));
        assert!(matches!(nelm_to_sqm(-0.1, 0.0), Err(AlmanacError::OutOfDomain(_))));
        assert!(matches!(sqm_to_nelm(22.1, 0.0), Err(AlmanacError::OutOfDomain(_))));
        assert!(matches!(sqm_to_nelm(9.9, 0.0), Err(AlmanacError::OutOfDomain(_))));
        assert!(matches!(sqm_to_bortle(23.0), Err(AlmanacError::OutOfDomain(_))));
        assert_eq!(
            bortle_to_sqm(0),
            Err(AlmanacError::OutOfDomain("Bortle class 0 outside 1..=9".into()))
        );
        assert!(bortle_to_sqm(10).is_err());
        assert!(bortle_to_nelm(10, 0.0).is_err());
    }

    #[test]
    fn test_nelm_sqm_conversions() {
        assert_abs_diff_eq!(nelm_to_sqm(6.0, 0.0).unwrap(), 20.80, epsilon = 1e-3);
        assert_abs_diff_eq!(nelm_to_sqm(4.0, 0.0).unwrap(), 18.038, epsilon = 1e-3);
        assert_eq!(nelm_to_sqm(7.5, 0.0).unwrap(), DARKEST_SQM);
        assert_eq!(nelm_to_sqm(8.0, 0.0).unwrap(), DARKEST_SQM);

        assert_abs_diff_eq!(sqm_to_nelm(22.0, 0.0).unwrap(), 6.6647, epsilon = 1e-4);
        assert_abs_diff_eq!(sqm_to_nelm(20.0, 0.0).unwrap(), 5.5342, epsilon = 1e-4);
        assert_eq!(sqm_to_nelm(10.0, 0.0).unwrap(), 2.5);
        assert_abs_diff_eq!(sqm_to_nelm(20.0, 0.3).unwrap(), 5.2342, epsilon = 1e-4);

        // The two fits are inverse of each other within a few hundredths
        for nelm in [3.0, 4.0, 5.0, 6.0, 6.5] {
            let back = sqm_to_nelm(nelm_to_sqm(nelm, 0.0).unwrap(), 0.0).unwrap();
            assert_abs_diff_eq!(back, nelm, epsilon = 0.05);
        }
    }

    #[test]
    fn test_bortle_scale() {
        assert_eq!(sqm_to_bortle(10.0).unwrap(), 9);
        assert_eq!(sqm_to_bortle(17.5).unwrap(), 9);
        assert_eq!(sqm_to_bortle(17.6).unwrap(), 8);
        assert_eq!(sqm_to_bortle(19.0).unwrap(), 6);
        assert_eq!(sqm_to_bortle(21.0).unwrap(), 4);
        assert_eq!(sqm_to_bortle(21.6).unwrap(), 2);
        assert_eq!(sqm_to_bortle(22.0).unwrap(), 1);

        for class in 1..=9 {
            assert_eq!(sqm_to_bortle(bortle_to_sqm(class).unwrap()).unwrap(), class);
        }
        assert_eq!(bortle_to_nelm(1, 0.0).unwrap(), 7.6);
        assert_abs_diff_eq!(bortle_to_nelm(5, 0.5).unwrap(), 5.1, epsilon = 1e-12);
        assert_eq!(nelm_to_bortle(6.0, 0.0).unwrap(), 4);
        assert_eq!(nelm_to_bortle(2.0, 0.0).unwrap(), 9);
    }
}
