//! Sexagesimal parsing and formatting of right ascensions and declinations.
use crate::almanac_errors::AlmanacError;
use crate::constants::{ArcSec, Degree, Hour};

/// Estimate the accuracy of a numeric string based on its decimal precision.
///
/// Arguments
/// ---------------
/// * `field`: a string slice containing the numeric value (e.g., `"56.78"`), typically the last component of an angle
/// * `factor`: a scale factor to apply to the accuracy (e.g., `1.0 / 60.0` for arcminutes, `1.0 / 3600.0` for arcseconds)
///
/// Return
/// ----------
/// * the estimated accuracy scaled by `factor`
fn compute_accuracy(field: &str, factor: f64) -> f64 {
    match field.find('.') {
        Some(dot_pos) => {
            let digits_after_dot = field.trim().len() - dot_pos - 1;
            10f64.powi(-(digits_after_dot as i32)) * factor
        }
        None => factor,
    }
}

/// Split `"12 34 56.7"` or `"12:34:56.7"` into three fields.
fn split_fields(value: &str) -> Result<[&str; 3], AlmanacError> {
    let parts: Vec<&str> = value
        .split(|c: char| c.is_whitespace() || c == ':')
        .filter(|p| !p.is_empty())
        .collect();
    match parts.as_slice() {
        [a, b, c] => Ok([*a, *b, *c]),
        _ => Err(AlmanacError::InvalidSexagesimal(value.to_string())),
    }
}

fn parse_field(field: &str, whole: &str) -> Result<f64, AlmanacError> {
    field
        .parse()
        .map_err(|_| AlmanacError::InvalidSexagesimal(whole.to_string()))
}

/// Parse a right ascension string to degrees
///
/// Arguments
/// ---------
/// * `ra`: a string representing the right ascension in the format `HH MM SS.SS` (or `HH:MM:SS.SS`)
///
/// Returns
/// -------
/// * `(Degree, ArcSec)`: the right ascension in degrees and the accuracy implied by the number
///   of decimals of the seconds field.
///
/// Errors
/// ------
/// * [`AlmanacError::InvalidSexagesimal`] if the string does not have three numeric fields.
pub fn parse_ra_to_deg(ra: &str) -> Result<(Degree, ArcSec), AlmanacError> {
    let [h, m, s_raw] = split_fields(ra)?;
    let h = parse_field(h, ra)?;
    let m = parse_field(m, ra)?;
    let s = parse_field(s_raw, ra)?;

    let ra_deg = (h + m / 60.0 + s / 3600.0) * 15.0;
    Ok((ra_deg, compute_accuracy(s_raw, 1.0 / 3600.0)))
}

/// Parse a declination string to degrees
///
/// Arguments
/// ---------
/// * `dec`: a string representing the declination in the format `±DD MM SS.SS`
///
/// Returns
/// -------
/// * `(Degree, ArcSec)`: the declination in degrees and the accuracy of the seconds field.
pub fn parse_dec_to_deg(dec: &str) -> Result<(Degree, ArcSec), AlmanacError> {
    let [d_raw, m, s_raw] = split_fields(dec)?;

    let sign = if d_raw.starts_with('-') { -1.0 } else { 1.0 };
    let d = parse_field(d_raw.trim_start_matches(&['-', '+'][..]), dec)?;
    let m = parse_field(m, dec)?;
    let s = parse_field(s_raw, dec)?;

    let dec_deg = sign * (d + m / 60.0 + s / 3600.0);
    Ok((dec_deg, compute_accuracy(s_raw, 1. / 3600.)))
}

/// Split a positive value into whole units, whole minutes and seconds, carrying a rounded
/// `60.0` seconds into the minutes.
fn sexagesimal(value: f64, decimals: usize) -> (u32, u32, f64) {
    let scale = 10f64.powi(decimals as i32);
    let total_seconds = (value * 3600.0 * scale).round() / scale;
    let units = (total_seconds / 3600.0).floor();
    let minutes = ((total_seconds - units * 3600.0) / 60.0).floor();
    let seconds = total_seconds - units * 3600.0 - minutes * 60.0;
    (units as u32, minutes as u32, seconds.max(0.0))
}

/// Format hours as `HHh MMm SS.SSs`.
pub fn format_ra(ra: Hour) -> String {
    let (h, m, s) = sexagesimal(ra, 2);
    format!("{h:02}h {m:02}m {s:05.2}s")
}

/// Format degrees as `±DD° MM′ SS.S″`.
pub fn format_dec(dec: Degree) -> String {
    let sign = if dec < 0.0 { '-' } else { '+' };
    let (d, m, s) = sexagesimal(dec.abs(), 1);
    format!("{sign}{d:02}° {m:02}′ {s:04.1}″")
}

#[cfg(test)]
mod conversion_test {
    use super::*;

    #[test]
    fn test_ra_to_deg() {
        assert_eq!(
            parse_ra_to_deg("22 52 23.37").unwrap(),
            (343.097375, 2.777777777777778e-6)
        );
        assert_eq!(
            parse_ra_to_deg("04 41 04.77").unwrap(),
            (70.269875, 2.777777777777778e-6)
        );
        assert_eq!(
            parse_ra_to_deg("06:50:13.370").unwrap(),
            (102.55570833333333, 2.7777777777777776e-7)
        );
        assert!(parse_ra_to_deg("1 2 3.4.5").is_err());
        assert_eq!(
            parse_ra_to_deg("1 2"),
            Err(AlmanacError::InvalidSexagesimal("1 2".into()))
        );
    }

    #[test]
    fn test_dec_to_deg() {
        assert_eq!(
            parse_dec_to_deg("-00 30 14.2").unwrap(),
            (-0.5039444444444444, 2.777777777777778e-5)
        );
        assert_eq!(
            parse_dec_to_deg("+13 55 42.7").unwrap(),
            (13.928527777777777, 2.777777777777778e-5)
        );
        assert!(parse_dec_to_deg("89 15 50.2.3").is_err());
        assert!(parse_dec_to_deg("89 15").is_err());
    }

    #[test]
    fn test_estimate_accuracy() {
        assert_eq!(compute_accuracy("23.3", 1. / 3600.), 2.777777777777778e-5);
        assert_eq!(compute_accuracy("23", 1. / 3600.), 0.0002777777777777778);
        assert_eq!(compute_accuracy("23.370", 1. / 3600.), 2.7777777777777776e-7);
    }

    #[test]
    fn test_format() {
        assert_eq!(format_ra(23.1546225), "23h 09m 16.64s");
        assert_eq!(format_dec(-6.7198917), "-06° 43′ 11.6″");
        assert_eq!(format_dec(0.0), "+00° 00′ 00.0″");
        // 59.996 s rounds up into the next minute
        assert_eq!(format_ra(1.0 + 59.0 / 60.0 + 59.996 / 3600.0), "02h 00m 00.00s");
    }
}
