//! # Catalog records
//!
//! Loosely typed rows as published by comet and asteroid catalogs, where any column may be
//! empty. The conversion into [`OrbitalElements`] checks that every field needed by the
//! propagators is present and raises [`AlmanacError::MissingOrbitalField`] otherwise; no value is
//! ever made up.
//!
//! Records deserialize with **serde**, so a CSV file with matching headers can be read with
//! [`read_comets`] and [`read_asteroids`].
//!
//! ```rust
//! use almanac::orbit_type::catalog::read_comets;
//!
//! let data = "\
//! designation,perihelion_distance,eccentricity,inclination,ascending_node,perihelion_argument,perihelion_time,absolute_magnitude,slope
//! 2P/Encke,0.330905,0.8502196,11.94524,334.75006,186.23352,2448193.04502,,
//! ";
//! let comets = read_comets(data.as_bytes())?;
//! assert_eq!(comets.len(), 1);
//! assert_eq!(comets[0].0, "2P/Encke");
//! # Ok::<(), almanac::almanac_errors::AlmanacError>(())
//! ```
use std::io::Read;

use serde::{Deserialize, Serialize};

use crate::almanac_errors::AlmanacError;
use crate::constants::{AstronomicalUnit, Degree, JulianDay};
use crate::orbit_type::cometary_element::CometaryElements;
use crate::orbit_type::keplerian_element::KeplerianElements;
use crate::orbit_type::OrbitalElements;
use crate::photometry::magnitude_models::MagnitudeModel;
use crate::time::CalendarDate;

/// A comet row: perihelion distance form, perihelion passage either as a Julian Day or as a
/// calendar date with a fractional day.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CometRecord {
    pub designation: String,
    pub perihelion_distance: Option<AstronomicalUnit>,
    pub eccentricity: Option<f64>,
    pub inclination: Option<Degree>,
    pub ascending_node: Option<Degree>,
    pub perihelion_argument: Option<Degree>,
    #[serde(default)]
    pub perihelion_time: Option<JulianDay>,
    #[serde(default)]
    pub perihelion_year: Option<i32>,
    #[serde(default)]
    pub perihelion_month: Option<u8>,
    #[serde(default)]
    pub perihelion_day: Option<f64>,
    /// Absolute magnitude `H` of the H-n model
    #[serde(default)]
    pub absolute_magnitude: Option<f64>,
    /// Activity slope `n` of the H-n model
    #[serde(default)]
    pub slope: Option<f64>,
}

/// An asteroid row: semi-major axis form with either the perihelion passage or a mean anomaly
/// at an epoch.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AsteroidRecord {
    pub designation: String,
    pub semi_major_axis: Option<AstronomicalUnit>,
    pub eccentricity: Option<f64>,
    pub inclination: Option<Degree>,
    pub ascending_node: Option<Degree>,
    pub perihelion_argument: Option<Degree>,
    #[serde(default)]
    pub perihelion_time: Option<JulianDay>,
    #[serde(default)]
    pub mean_anomaly: Option<Degree>,
    #[serde(default)]
    pub epoch: Option<JulianDay>,
    /// Absolute magnitude `H` of the H-G model
    #[serde(default)]
    pub absolute_magnitude: Option<f64>,
    /// Slope parameter `G` of the H-G model
    #[serde(default)]
    pub slope: Option<f64>,
}

/// Below this eccentricity a comet row is propagated as an elliptical orbit.
pub const NEAR_PARABOLIC_ECCENTRICITY: f64 = 0.98;

fn required<T>(value: Option<T>, designation: &str, field: &str) -> Result<T, AlmanacError> {
    value.ok_or_else(|| AlmanacError::MissingOrbitalField(format!("{designation}: {field}")))
}

impl CometRecord {
    fn perihelion_time(&self) -> Result<JulianDay, AlmanacError> {
        if let Some(jd) = self.perihelion_time {
            return Ok(jd);
        }
        match (self.perihelion_year, self.perihelion_month, self.perihelion_day) {
            (Some(year), Some(month), Some(day)) => {
                let whole = day.floor();
                let date = CalendarDate::from_ymd(year, month, whole as u8)?;
                Ok(date.julian_day() + (day - whole))
            }
            _ => Err(AlmanacError::MissingOrbitalField(format!(
                "{}: perihelion_time",
                self.designation
            ))),
        }
    }
}

impl TryFrom<&CometRecord> for OrbitalElements {
    type Error = AlmanacError;

    /// Elements of a comet row.
    ///
    /// Orbits with `e <` [`NEAR_PARABOLIC_ECCENTRICITY`] are converted to elliptical elements with
    /// `a = q / (1 − e)`, the others are kept in perihelion distance form.
    fn try_from(record: &CometRecord) -> Result<Self, Self::Error> {
        let name = record.designation.as_str();
        let q = required(record.perihelion_distance, name, "perihelion_distance")?;
        let e = required(record.eccentricity, name, "eccentricity")?;
        let i = required(record.inclination, name, "inclination")?;
        let node = required(record.ascending_node, name, "ascending_node")?;
        let argument = required(record.perihelion_argument, name, "perihelion_argument")?;
        let tp = record.perihelion_time()?;

        let model = match (record.absolute_magnitude, record.slope) {
            (Some(absolute_magnitude), Some(slope)) => Some(MagnitudeModel::HN {
                absolute_magnitude,
                slope,
            }),
            _ => None,
        };

        if (0.0..NEAR_PARABOLIC_ECCENTRICITY).contains(&e) {
            let mut elements = KeplerianElements::new(q / (1.0 - e), e, i, node, argument, tp)?;
            elements.magnitude_model = model;
            Ok(OrbitalElements::Keplerian(elements))
        } else {
            let mut elements = CometaryElements::new(q, e, i, node, argument, tp)?;
            elements.magnitude_model = model;
            Ok(OrbitalElements::Cometary(elements))
        }
    }
}

impl TryFrom<&AsteroidRecord> for OrbitalElements {
    type Error = AlmanacError;

    /// Elliptical elements of an asteroid row.
    ///
    /// The perihelion passage is taken from the record when present, otherwise derived from the
    /// mean anomaly at the epoch. With neither, the conversion fails on `perihelion_time`.
    fn try_from(record: &AsteroidRecord) -> Result<Self, Self::Error> {
        let name = record.designation.as_str();
        let a = required(record.semi_major_axis, name, "semi_major_axis")?;
        let e = required(record.eccentricity, name, "eccentricity")?;
        let i = required(record.inclination, name, "inclination")?;
        let node = required(record.ascending_node, name, "ascending_node")?;
        let argument = required(record.perihelion_argument, name, "perihelion_argument")?;

        let mut elements = match (record.perihelion_time, record.mean_anomaly, record.epoch) {
            (Some(tp), _, _) => KeplerianElements::new(a, e, i, node, argument, tp)?,
            (None, Some(m), Some(epoch)) => {
                KeplerianElements::from_mean_anomaly(a, e, i, node, argument, m, epoch)?
            }
            _ => {
                return Err(AlmanacError::MissingOrbitalField(format!(
                    "{name}: perihelion_time"
                )))
            }
        };
        if let (Some(absolute_magnitude), Some(slope)) = (record.absolute_magnitude, record.slope) {
            elements = elements.with_magnitude_model(MagnitudeModel::HG {
                absolute_magnitude,
                slope,
            });
        }
        Ok(OrbitalElements::Keplerian(elements))
    }
}

fn read_records<R, T>(reader: R) -> Result<Vec<T>, AlmanacError>
where
    R: Read,
    T: for<'de> Deserialize<'de>,
{
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    csv_reader
        .deserialize()
        .map(|row| row.map_err(|err| AlmanacError::CatalogRecord(err.to_string())))
        .collect()
}

/// Read a CSV comet catalog into `(designation, elements)` pairs.
///
/// Errors
/// ------
/// * [`AlmanacError::CatalogRecord`] on malformed rows.
/// * [`AlmanacError::MissingOrbitalField`] or [`AlmanacError::InvalidOrbit`] on the first row that
///   cannot be converted.
pub fn read_comets<R: Read>(reader: R) -> Result<Vec<(String, OrbitalElements)>, AlmanacError> {
    read_records::<R, CometRecord>(reader)?
        .iter()
        .map(|record| Ok((record.designation.clone(), OrbitalElements::try_from(record)?)))
        .collect()
}

/// Read a CSV asteroid catalog into `(designation, elements)` pairs, see [`read_comets`].
pub fn read_asteroids<R: Read>(
    reader: R,
) -> Result<Vec<(String, OrbitalElements)>, AlmanacError> {
    read_records::<R, AsteroidRecord>(reader)?
        .iter()
        .map(|record| Ok((record.designation.clone(), OrbitalElements::try_from(record)?)))
        .collect()
}
