//! # ΔT = TT − UT
//!
//! Piecewise polynomial model of ΔT (Espenak & Meeus, *Five Millennium Canon of Solar
//! Eclipses*), evaluated at the decimal year `y = year + (month − 0.5) / 12`.
//!
//! Between [`TABLE_FIRST_YEAR`] and [`TABLE_CUTOVER_YEAR`] the measured value is first looked
//! up from an injected [`DeltaTProvider`] by calendar year. A provider miss never fails: the era
//! polynomial is used instead.
//!
//! ## Eras
//!
//! | Years          | Model                                |
//! |----------------|--------------------------------------|
//! | < −500         | long-term parabola `−20 + 32u²`      |
//! | −500 .. 500    | 6th degree in `y/100`                |
//! | 500 .. 1600    | 6th degree in `(y − 1000)/100`       |
//! | 1600 .. 2050   | short polynomials per few decades    |
//! | 2050 .. 2150   | parabola with a linear junction term |
//! | ≥ 2150         | long-term parabola                   |
use std::collections::BTreeMap;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use crate::almanac_errors::AlmanacError;
use crate::constants::{JulianDay, SECONDS_PER_DAY};
use crate::time::CalendarDate;

/// First calendar year for which a [`DeltaTProvider`] is consulted.
pub const TABLE_FIRST_YEAR: i32 = 1620;

/// First calendar year for which the polynomial is always used.
pub const TABLE_CUTOVER_YEAR: i32 = 2050;

/// Read-only source of measured ΔT values, keyed by calendar year.
///
/// Implementations must be safe for concurrent reads; the engine only ever calls
/// [`DeltaTProvider::lookup`].
pub trait DeltaTProvider: Send + Sync {
    /// ΔT in seconds for `year`, or `None` when the year is not covered.
    fn lookup(&self, year: i32) -> Option<f64>;
}

/// Provider without any data: ΔT always comes from the polynomial model.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoDeltaTData;

impl DeltaTProvider for NoDeltaTData {
    fn lookup(&self, _year: i32) -> Option<f64> {
        None
    }
}

#[derive(Debug, Deserialize)]
struct DeltaTRecord {
    year: i32,
    delta_t: f64,
}

/// In-memory ΔT table, one value per calendar year.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DeltaTTable {
    values: BTreeMap<i32, f64>,
}

impl DeltaTTable {
    pub fn new() -> Self {
        DeltaTTable::default()
    }

    pub fn insert(&mut self, year: i32, delta_t: f64) {
        self.values.insert(year, delta_t);
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Read a CSV table with a `year,delta_t` header.
    ///
    /// Errors
    /// ------
    /// * [`AlmanacError::DeltaTTable`] on malformed rows.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, AlmanacError> {
        let mut csv_reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
        let mut table = DeltaTTable::new();
        for record in csv_reader.deserialize() {
            let record: DeltaTRecord = record?;
            table.insert(record.year, record.delta_t);
        }
        Ok(table)
    }

    /// Read a CSV table from a file, see [`DeltaTTable::from_reader`].
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, AlmanacError> {
        let file = std::fs::File::open(path)?;
        DeltaTTable::from_reader(file)
    }
}

impl FromIterator<(i32, f64)> for DeltaTTable {
    fn from_iter<I: IntoIterator<Item = (i32, f64)>>(iter: I) -> Self {
        DeltaTTable {
            values: iter.into_iter().collect(),
        }
    }
}

impl DeltaTProvider for DeltaTTable {
    fn lookup(&self, year: i32) -> Option<f64> {
        self.values.get(&year).copied()
    }
}

/// Evaluate `c[0] + c[1] t + c[2] t² + …` with Horner's scheme.
fn horner(t: f64, coefficients: &[f64]) -> f64 {
    coefficients.iter().rev().fold(0.0, |acc, c| acc * t + c)
}

fn long_term_parabola(y: f64) -> f64 {
    let u = (y - 1820.0) / 100.0;
    -20.0 + 32.0 * u * u
}

/// Polynomial ΔT, in seconds, at decimal year `y`.
pub fn delta_t_polynomial(y: f64) -> f64 {
    match y {
        y if y < -500.0 => long_term_parabola(y),
        y if y < 500.0 => horner(
            y / 100.0,
            &[
                10583.6,
                -1014.41,
                33.78311,
                -5.952053,
                -0.1798452,
                0.022174192,
                0.0090316521,
            ],
        ),
        y if y < 1600.0 => horner(
            (y - 1000.0) / 100.0,
            &[
                1574.2,
                -556.01,
                71.23472,
                0.319781,
                -0.8503463,
                -0.005050998,
                0.0083572073,
            ],
        ),
        y if y < 1700.0 => horner(y - 1600.0, &[120.0, -0.9808, -0.01532, 1.0 / 7129.0]),
        y if y < 1800.0 => horner(
            y - 1700.0,
            &[8.83, 0.1603, -0.0059285, 0.00013336, -1.0 / 1_174_000.0],
        ),
        y if y < 1860.0 => horner(
            y - 1800.0,
            &[
                13.72,
                -0.332447,
                0.0068612,
                0.0041116,
                -0.00037436,
                0.0000121272,
                -0.0000001699,
                0.000000000875,
            ],
        ),
        y if y < 1900.0 => horner(
            y - 1860.0,
            &[
                7.62,
                0.5737,
                -0.251754,
                0.01680668,
                -0.0004473624,
                1.0 / 233_174.0,
            ],
        ),
        y if y < 1920.0 => horner(
            y - 1900.0,
            &[-2.79, 1.494119, -0.0598939, 0.0061966, -0.000197],
        ),
        y if y < 1941.0 => horner(y - 1920.0, &[21.20, 0.84493, -0.076100, 0.0020936]),
        y if y < 1961.0 => horner(y - 1950.0, &[29.07, 0.407, -1.0 / 233.0, 1.0 / 2547.0]),
        y if y < 1986.0 => horner(y - 1975.0, &[45.45, 1.067, -1.0 / 260.0, -1.0 / 718.0]),
        y if y < 2005.0 => horner(
            y - 2000.0,
            &[
                63.86,
                0.3345,
                -0.060374,
                0.0017275,
                0.000651814,
                0.00002373599,
            ],
        ),
        y if y < 2050.0 => horner(y - 2000.0, &[62.92, 0.32217, 0.005589]),
        y if y < 2150.0 => long_term_parabola(y) - 0.5628 * (2150.0 - y),
        y => long_term_parabola(y),
    }
}

/// Estimate ΔT = TT − UT in seconds for a calendar date.
///
/// Arguments
/// ---------
/// * `date`: the instant (UT).
/// * `provider`: measured values; consulted only for `1620 ≤ year < 2050`.
///
/// Returns
/// --------
/// * ΔT in seconds. This function never fails.
///
/// See also
/// --------
/// * [`delta_t_polynomial`] – the fallback model.
pub fn delta_t(date: &CalendarDate, provider: &dyn DeltaTProvider) -> f64 {
    let year = date.year();
    if (TABLE_FIRST_YEAR..TABLE_CUTOVER_YEAR).contains(&year) {
        if let Some(value) = provider.lookup(year) {
            return value;
        }
        tracing::debug!(year, "ΔT provider has no value, using the polynomial model");
    }
    delta_t_polynomial(date.decimal_year())
}

/// Convert a Universal Time Julian Day to a Julian Ephemeris Day.
pub fn jde_from_ut(jd_ut: JulianDay, delta_t_seconds: f64) -> JulianDay {
    jd_ut + delta_t_seconds / SECONDS_PER_DAY
}

/// Convert a Julian Ephemeris Day back to Universal Time.
pub fn ut_from_jde(jde: JulianDay, delta_t_seconds: f64) -> JulianDay {
    jde - delta_t_seconds / SECONDS_PER_DAY
}

#[cfg(test)]
mod delta_t_test {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn date(year: i32, month: u8) -> CalendarDate {
        CalendarDate::from_ymd(year, month, 1).unwrap()
    }

    #[test]
    fn test_polynomial_eras() {
        assert_abs_diff_eq!(delta_t(&date(1988, 3), &NoDeltaTData), 55.879, epsilon = 1e-3);
        assert_abs_diff_eq!(delta_t(&date(2000, 1), &NoDeltaTData), 63.874, epsilon = 1e-3);
        assert_abs_diff_eq!(delta_t(&date(2100, 1), &NoDeltaTData), 202.838, epsilon = 1e-3);
        assert_abs_diff_eq!(delta_t(&date(1000, 1), &NoDeltaTData), 1573.968, epsilon = 1e-3);
        assert_abs_diff_eq!(delta_t(&date(-1000, 1), &NoDeltaTData), 25426.928, epsilon = 1e-3);
    }

    #[test]
    fn test_provider_is_used_inside_window() {
        let table: DeltaTTable = [(1988, 56.0)].into_iter().collect();
        assert_eq!(delta_t(&date(1988, 3), &table), 56.0);
        // miss: same as the polynomial
        assert_eq!(
            delta_t(&date(1989, 3), &table),
            delta_t(&date(1989, 3), &NoDeltaTData)
        );
    }

    #[test]
    fn test_provider_ignored_outside_window() {
        let table: DeltaTTable = [(1500, 1.0), (2060, 1.0)].into_iter().collect();
        assert_ne!(delta_t(&date(1500, 1), &table), 1.0);
        assert_ne!(delta_t(&date(2060, 1), &table), 1.0);
    }

    #[test]
    fn test_era_junctions_are_close() {
        for y in [1700.0, 1800.0, 1860.0, 1900.0, 1920.0, 1941.0, 1961.0, 1986.0, 2005.0] {
            let gap = (delta_t_polynomial(y - 1e-9) - delta_t_polynomial(y)).abs();
            assert!(gap < 1.0, "ΔT jump of {gap} s at {y}");
        }
    }

    #[test]
    fn test_table_from_csv() {
        let data = "year,delta_t\n1990, 56.86\n1991,57.57\n";
        let table = DeltaTTable::from_reader(data.as_bytes()).unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.lookup(1991), Some(57.57));
        assert_eq!(table.lookup(1992), None);

        let broken = "year,delta_t\nnineteen,56.86\n";
        assert!(matches!(
            DeltaTTable::from_reader(broken.as_bytes()),
            Err(AlmanacError::DeltaTTable(_))
        ));
    }

    #[test]
    fn test_jde_round_trip() {
        let jde = jde_from_ut(2451545.0, 64.0);
        // Compared in seconds, JD ~2.4e6 only resolves ~4e-5 s
        assert_abs_diff_eq!((jde - 2451545.0) * 86400.0, 64.0, epsilon = 1e-4);
        assert_abs_diff_eq!(ut_from_jde(jde, 64.0), 2451545.0, epsilon = 1e-9);
    }
}
