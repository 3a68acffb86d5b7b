//! # Surface brightness and contrast reserve
//!
//! Detectability of an extended object (galaxy, nebula, comet coma) in a telescope, following
//! Clark's visual threshold model:
//!
//! 1. the object's mean surface brightness from its magnitude and angular size,
//! 2. the sky background seen in the eyepiece, which dims with magnification,
//! 3. the eye's log contrast threshold for that background and the object's apparent size,
//!    bilinearly interpolated in a fixed table (background brightness × log apparent size),
//! 4. the contrast reserve: object log contrast minus threshold. Positive means visible.
use itertools::Itertools;

use crate::almanac_errors::AlmanacError;
use crate::constants::ArcSec;

/// Square arcseconds of an ellipse of axes 1′ × 1′, `π/4 · 60²`.
const ELLIPSE_AREA_ARCMIN: f64 = 2827.0;

/// `25.4 mm / 8.97 mm`: aperture in inches over the dark-adapted eye pupil.
const PUPIL_FACTOR: f64 = 2.833;

/// Log10 of the apparent angular size (arcminutes) of the threshold table columns.
const LOG_ANGLES: [f64; 7] = [-0.2255, 0.5563, 0.9859, 1.2601, 1.7419, 2.0828, 2.5563];

/// Background surface brightness (mag/arcsec²) followed by the log contrast thresholds at each
/// of [`LOG_ANGLES`].
const LOG_THRESHOLDS: [[f64; 8]; 24] = [
    [4.0, -0.3769, -1.8064, -2.3368, -2.4601, -2.5469, -2.5610, -2.5660],
    [5.0, -0.3315, -1.7747, -2.3337, -2.4608, -2.5510, -2.5662, -2.5715],
    [6.0, -0.2682, -1.7345, -2.3310, -2.4605, -2.5538, -2.5700, -2.5755],
    [7.0, -0.1982, -1.6851, -2.3275, -2.4590, -2.5547, -2.5724, -2.5783],
    [8.0, -0.1238, -1.6252, -2.3186, -2.4531, -2.5521, -2.5718, -2.5780],
    [9.0, -0.0405, -1.5480, -2.2997, -2.4386, -2.5418, -2.5635, -2.5704],
    [10.0, 0.0564, -1.4467, -2.2657, -2.4095, -2.5177, -2.5420, -2.5499],
    [11.0, 0.1802, -1.3088, -2.2078, -2.3575, -2.4709, -2.4982, -2.5071],
    [12.0, 0.3350, -1.1309, -2.1166, -2.2743, -2.3930, -2.4232, -2.4331],
    [13.0, 0.5299, -0.9093, -1.9822, -2.1503, -2.2732, -2.3060, -2.3170],
    [14.0, 0.7687, -0.6476, -1.7949, -1.9743, -2.0988, -2.1338, -2.1457],
    [15.0, 1.0501, -0.3507, -1.5526, -1.7398, -1.8611, -1.8977, -1.9103],
    [16.0, 1.3694, -0.0271, -1.2618, -1.4502, -1.5600, -1.5977, -1.6109],
    [17.0, 1.7173, 0.3132, -0.9358, -1.1193, -1.2133, -1.2515, -1.2651],
    [18.0, 2.0832, 0.6620, -0.5868, -0.7627, -0.8388, -0.8770, -0.8909],
    [19.0, 2.4594, 1.0163, -0.2227, -0.3912, -0.4514, -0.4893, -0.5033],
    [20.0, 2.8405, 1.3743, 0.1510, -0.0114, -0.0588, -0.0964, -0.1105],
    [21.0, 3.2237, 1.7350, 0.5301, 0.3715, 0.3337, 0.2964, 0.2822],
    [22.0, 3.6080, 2.0974, 0.9122, 0.7561, 0.7243, 0.6873, 0.6730],
    [23.0, 3.9928, 2.4611, 1.2962, 1.1411, 1.1128, 1.0762, 1.0618],
    [24.0, 4.3779, 2.8257, 1.6814, 1.5262, 1.4996, 1.4632, 1.4488],
    [25.0, 4.7633, 3.1910, 2.0673, 1.9114, 1.8854, 1.8492, 1.8348],
    [26.0, 5.1488, 3.5568, 2.4536, 2.2968, 2.2710, 2.2350, 2.2206],
    [27.0, 5.5344, 3.9230, 2.8402, 2.6823, 2.6566, 2.6207, 2.6063],
];

/// Lower index and weight of `value` between two consecutive entries of `grid`, clamped to the
/// grid ends.
fn bracket(grid: impl Iterator<Item = f64>, value: f64) -> (usize, f64) {
    let mut last = 0;
    for (index, (low, high)) in grid.tuple_windows().enumerate() {
        last = index;
        if value <= high {
            return (index, ((value - low) / (high - low)).clamp(0.0, 1.0));
        }
    }
    (last, 1.0)
}

/// Eye log contrast threshold for a background brightness and a log apparent size (arcmin).
fn log_threshold(background: f64, log_angle: f64) -> f64 {
    let (row, u) = bracket(LOG_THRESHOLDS.iter().map(|row| row[0]), background);
    let (column, v) = bracket(LOG_ANGLES.iter().copied(), log_angle);

    let cell = |r: usize, c: usize| LOG_THRESHOLDS[r][c + 1];
    let low = cell(row, column) * (1.0 - v) + cell(row, column + 1) * v;
    let high = cell(row + 1, column) * (1.0 - v) + cell(row + 1, column + 1) * v;
    low * (1.0 - u) + high * u
}

fn check_positive(value: f64, name: &str) -> Result<(), AlmanacError> {
    if value > 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(AlmanacError::OutOfDomain(format!("{name} {value} must be positive")))
    }
}

/// Mean surface brightness of an elliptical object, mag/arcsec².
///
/// Arguments
/// ---------
/// * `magnitude`: integrated visual magnitude.
/// * `major_axis`, `minor_axis`: angular diameters, arcseconds.
///
/// Formula
/// -------
/// ```text
/// SB = m + 2.5 log(2827 · D′ · d′)      (D′, d′ in arcminutes)
/// ```
///
/// Errors
/// ------
/// * [`AlmanacError::OutOfDomain`] if a diameter is not positive.
pub fn surface_brightness(
    magnitude: f64,
    major_axis: ArcSec,
    minor_axis: ArcSec,
) -> Result<f64, AlmanacError> {
    check_positive(major_axis, "major axis")?;
    check_positive(minor_axis, "minor axis")?;
    Ok(magnitude + 2.5 * (ELLIPSE_AREA_ARCMIN * (major_axis / 60.0) * (minor_axis / 60.0)).log10())
}

/// Surface brightness of the sky background seen through the eyepiece, mag/arcsec².
///
/// At the magnification giving an exit pupil of 8.97 mm the background is as bright as to the
/// naked eye; every doubling of the magnification dims it by 1.5 magnitude.
pub fn eyepiece_background(sky_sqm: f64, aperture_mm: f64, magnification: f64) -> f64 {
    sky_sqm - 5.0 * (PUPIL_FACTOR * aperture_mm / 25.4).log10() + 5.0 * magnification.log10()
}

/// Contrast reserve of an extended object.
///
/// Arguments
/// ---------
/// * `object_sb`: object surface brightness, mag/arcsec² (see [`surface_brightness`]).
/// * `minor_axis`: smallest angular dimension of the object, arcseconds.
/// * `sky_sqm`: sky brightness, mag/arcsec².
/// * `aperture_mm`: telescope aperture.
/// * `magnification`: eyepiece magnification.
///
/// Returns
/// --------
/// * `log C − log C_threshold`. Values below 0 mean the object is not detectable, above 1 it is
///   easy.
///
/// Errors
/// ------
/// * [`AlmanacError::OutOfDomain`] if the size, the aperture or the magnification is not
///   positive.
pub fn contrast_reserve(
    object_sb: f64,
    minor_axis: ArcSec,
    sky_sqm: f64,
    aperture_mm: f64,
    magnification: f64,
) -> Result<f64, AlmanacError> {
    check_positive(minor_axis, "minor axis")?;
    check_positive(aperture_mm, "aperture")?;
    check_positive(magnification, "magnification")?;

    let background = eyepiece_background(sky_sqm, aperture_mm, magnification);
    let log_angle = (magnification * minor_axis / 60.0).log10();
    let log_contrast = -0.4 * (object_sb - sky_sqm);
    Ok(log_contrast - log_threshold(background, log_angle))
}

/// Magnification of `candidates` giving the largest contrast reserve, with that reserve.
///
/// Returns `Ok(None)` for an empty candidate list.
pub fn optimal_magnification(
    object_sb: f64,
    minor_axis: ArcSec,
    sky_sqm: f64,
    aperture_mm: f64,
    candidates: &[f64],
) -> Result<Option<(f64, f64)>, AlmanacError> {
    let reserves = candidates
        .iter()
        .map(|&m| {
            contrast_reserve(object_sb, minor_axis, sky_sqm, aperture_mm, m).map(|cr| (m, cr))
        })
        .collect::<Result<Vec<_>, _>>()?;
    Ok(reserves.into_iter().max_by(|a, b| a.1.total_cmp(&b.1)))
}

#[cfg(test)]
mod contrast_test {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_surface_brightness() {
        // 1′ × 1′ object: area 2827 arcsec²
        assert_abs_diff_eq!(
            surface_brightness(10.0, 60.0, 60.0).unwrap(),
            10.0 + 2.5 * 2827f64.log10(),
            epsilon = 1e-12
        );
        // Four times the area, 1.505 magnitude fainter per arcsec²
        let small = surface_brightness(9.0, 120.0, 60.0).unwrap();
        let large = surface_brightness(9.0, 240.0, 120.0).unwrap();
        assert_abs_diff_eq!(large - small, 2.5 * 4f64.log10(), epsilon = 1e-12);
        assert!(surface_brightness(9.0, 0.0, 60.0).is_err());
    }

    #[test]
    fn test_threshold_table_interpolation() {
        assert_eq!(log_threshold(20.0, 0.9859), 0.1510);
        assert_abs_diff_eq!(
            log_threshold(20.5, 0.9859),
            (0.1510 + 0.5301) / 2.0,
            epsilon = 1e-12
        );
        let v = (1.0 - 0.9859) / (1.2601 - 0.9859);
        assert_abs_diff_eq!(
            log_threshold(4.0, 1.0),
            -2.3368 * (1.0 - v) - 2.4601 * v,
            epsilon = 1e-12
        );
        // Clamped outside the table
        assert_eq!(log_threshold(30.0, 3.0), 2.6063);
        assert_eq!(log_threshold(1.0, -1.0), -0.3769);
    }

    #[test]
    fn test_contrast_reserve_bright_galaxy() {
        // SB 13 under a 21 mag/arcsec² sky, 254 mm at 100×: background 23.739
        assert_abs_diff_eq!(eyepiece_background(21.0, 254.0, 100.0), 23.738767, epsilon = 1e-6);
        let cr = contrast_reserve(13.0, 600.0, 21.0, 254.0, 100.0).unwrap();
        assert_abs_diff_eq!(cr, 1.852297, epsilon = 1e-6);

        // A fainter object has less reserve
        let faint = contrast_reserve(15.0, 600.0, 21.0, 254.0, 100.0).unwrap();
        assert_abs_diff_eq!(cr - faint, 0.8, epsilon = 1e-12);
    }

    #[test]
    fn test_contrast_reserve_domain() {
        assert!(matches!(
            contrast_reserve(13.0, 600.0, 21.0, 0.0, 100.0),
            Err(AlmanacError::OutOfDomain(_))
        ));
        assert!(contrast_reserve(13.0, 600.0, 21.0, 254.0, -1.0).is_err());
        assert!(contrast_reserve(13.0, 0.0, 21.0, 254.0, 100.0).is_err());
    }

    #[test]
    fn test_optimal_magnification() {
        let candidates = [30.0, 60.0, 120.0, 240.0];
        let (best, reserve) = optimal_magnification(21.0, 120.0, 21.0, 200.0, &candidates)
            .unwrap()
            .unwrap();
        assert!(candidates.contains(&best));
        for m in candidates {
            assert!(contrast_reserve(21.0, 120.0, 21.0, 200.0, m).unwrap() <= reserve);
        }
        assert_eq!(optimal_magnification(21.0, 120.0, 21.0, 200.0, &[]).unwrap(), None);
    }
}
