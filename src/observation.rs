//! # Observation context
//!
//! Everything a position query needs besides the body itself:
//!
//! - [`ObservationTime`] – a Universal Time Julian Day paired with its ΔT, so that dynamical time
//!   (for the series and the propagators) and Universal Time (for the sidereal time) are always
//!   consistent.
//! - [`ObservationConfig`] – observer location, height and the [`EphemerisMode`] that selects
//!   between the built-in series and an injected [`ExternalEphemeris`].
//!
//! ## Example
//!
//! ```rust
//! use almanac::coordinates::GeographicalCoordinates;
//! use almanac::delta_t::NoDeltaTData;
//! use almanac::observation::{ObservationConfig, ObservationTime};
//! use almanac::time::CalendarDate;
//!
//! let site = GeographicalCoordinates::new(-71.0833, 42.3333)?;
//! let config = ObservationConfig::new(site, 0.0);
//! let date = CalendarDate::from_ymd(1988, 3, 20)?;
//! let time = ObservationTime::from_date(&date, &NoDeltaTData);
//! assert!(time.jde() > time.jd_ut());
//! # Ok::<(), almanac::almanac_errors::AlmanacError>(())
//! ```
use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::constants::{JulianDay, Meter};
use crate::coordinates::{EquatorialCoordinates, GeographicalCoordinates};
use crate::delta_t::{delta_t, jde_from_ut, DeltaTProvider};
use crate::planets::Body;
use crate::time::CalendarDate;

/// A Universal Time instant with its ΔT (seconds).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ObservationTime {
    jd_ut: JulianDay,
    delta_t: f64,
}

impl ObservationTime {
    pub fn new(jd_ut: JulianDay, delta_t: f64) -> Self {
        ObservationTime { jd_ut, delta_t }
    }

    /// Instant of `date` (UT) with ΔT estimated from `provider`.
    pub fn from_date(date: &CalendarDate, provider: &dyn DeltaTProvider) -> Self {
        ObservationTime::new(date.julian_day(), delta_t(date, provider))
    }

    /// Julian Day in Universal Time.
    pub fn jd_ut(&self) -> JulianDay {
        self.jd_ut
    }

    /// Julian Ephemeris Day (dynamical time).
    pub fn jde(&self) -> JulianDay {
        jde_from_ut(self.jd_ut, self.delta_t)
    }

    /// ΔT in seconds.
    pub fn delta_t(&self) -> f64 {
        self.delta_t
    }

    /// Same ΔT, shifted by `days`.
    pub fn shifted(&self, days: f64) -> Self {
        ObservationTime::new(self.jd_ut + days, self.delta_t)
    }
}

/// Source of apparent geocentric positions that can replace the built-in series.
///
/// Implementations are typically backed by a numerical ephemeris file or a remote service; the
/// engine only needs this single read function and must be able to share it between threads.
pub trait ExternalEphemeris: Send + Sync {
    /// Apparent geocentric equatorial coordinates of `body` and its distance in AU, at the
    /// dynamical time `jde`.
    fn apparent_position(
        &self,
        body: Body,
        jde: JulianDay,
    ) -> Result<(EquatorialCoordinates, f64), String>;
}

/// How the positions of the Sun, the Moon and the planets are obtained.
#[derive(Clone, Default)]
pub enum EphemerisMode {
    /// Built-in truncated series.
    #[default]
    SeriesModel,
    /// Ask an external ephemeris first; on failure fall back to the series with a warning.
    ExternalEphemerisLookup(Arc<dyn ExternalEphemeris>),
}

impl fmt::Debug for EphemerisMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EphemerisMode::SeriesModel => write!(f, "SeriesModel"),
            EphemerisMode::ExternalEphemerisLookup(_) => write!(f, "ExternalEphemerisLookup"),
        }
    }
}

/// Per-call observation configuration.
///
/// The ephemeris mode is not serialized: a deserialized configuration always starts with
/// [`EphemerisMode::SeriesModel`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObservationConfig {
    pub geo_coords: GeographicalCoordinates,
    pub height_meters: Meter,
    #[serde(skip)]
    pub ephemeris_mode: EphemerisMode,
}

impl ObservationConfig {
    pub fn new(geo_coords: GeographicalCoordinates, height_meters: Meter) -> Self {
        ObservationConfig {
            geo_coords,
            height_meters,
            ephemeris_mode: EphemerisMode::SeriesModel,
        }
    }

    pub fn with_ephemeris_mode(mut self, ephemeris_mode: EphemerisMode) -> Self {
        self.ephemeris_mode = ephemeris_mode;
        self
    }

    /// Position from the external ephemeris if one is configured and answers.
    pub(crate) fn external_position(
        &self,
        body: Body,
        jde: JulianDay,
    ) -> Option<(EquatorialCoordinates, f64)> {
        match &self.ephemeris_mode {
            EphemerisMode::SeriesModel => None,
            EphemerisMode::ExternalEphemerisLookup(provider) => {
                match provider.apparent_position(body, jde) {
                    Ok(position) => Some(position),
                    Err(err) => {
                        tracing::warn!(?body, jde, %err, "external ephemeris failed, using series model");
                        None
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod observation_test {
    use super::*;
    use crate::almanac_errors::AlmanacError;
    use crate::delta_t::DeltaTTable;
    use approx::assert_abs_diff_eq;

    struct FailingEphemeris;

    impl ExternalEphemeris for FailingEphemeris {
        fn apparent_position(
            &self,
            _body: Body,
            _jde: JulianDay,
        ) -> Result<(EquatorialCoordinates, f64), String> {
            Err("service unavailable".into())
        }
    }

    struct FixedEphemeris;

    impl ExternalEphemeris for FixedEphemeris {
        fn apparent_position(
            &self,
            _body: Body,
            _jde: JulianDay,
        ) -> Result<(EquatorialCoordinates, f64), String> {
            let eq = EquatorialCoordinates::new(1.0, 2.0).map_err(|e| e.to_string())?;
            Ok((eq, 3.0))
        }
    }

    #[test]
    fn test_observation_time() -> Result<(), AlmanacError> {
        let table: DeltaTTable = [(1988, 56.0)].into_iter().collect();
        let time = ObservationTime::from_date(&CalendarDate::from_ymd(1988, 3, 20)?, &table);
        assert_eq!(time.delta_t(), 56.0);
        assert_abs_diff_eq!((time.jde() - time.jd_ut()) * 86400.0, 56.0, epsilon = 1e-4);
        assert_eq!(time.shifted(1.0).jd_ut(), time.jd_ut() + 1.0);
        Ok(())
    }

    #[test]
    fn test_external_ephemeris_fallback() -> Result<(), AlmanacError> {
        let site = GeographicalCoordinates::new(0.0, 0.0)?;
        let config = ObservationConfig::new(site, 0.0);
        assert!(config.external_position(Body::Mars, 2451545.0).is_none());

        let failing = config
            .clone()
            .with_ephemeris_mode(EphemerisMode::ExternalEphemerisLookup(Arc::new(FailingEphemeris)));
        assert!(failing.external_position(Body::Mars, 2451545.0).is_none());

        let fixed = config
            .with_ephemeris_mode(EphemerisMode::ExternalEphemerisLookup(Arc::new(FixedEphemeris)));
        let (eq, distance) = fixed.external_position(Body::Mars, 2451545.0).unwrap();
        assert_eq!(eq.right_ascension(), 1.0);
        assert_eq!(distance, 3.0);
        Ok(())
    }
}
