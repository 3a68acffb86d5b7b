//! # Almanac: providers and one-call ephemerides
//!
//! The [`Almanac`] struct wires together the two external collaborators of the engine:
//!
//! 1. a **ΔT provider** ([`DeltaTProvider`]): a table of observed values, or nothing at all in
//!    which case the polynomial model is used,
//! 2. a **night window provider** ([`NightWindowProvider`]): the built-in solar model or a host
//!    service.
//!
//! Both are shared behind `Arc` and only read, so one `Almanac` can serve several threads, each
//! working on its own [`Target`].
//!
//! ## Typical usage
//!
//! ```rust, no_run
//! use almanac::almanac::Almanac;
//! use almanac::coordinates::GeographicalCoordinates;
//! use almanac::observation::ObservationConfig;
//! use almanac::planets::Body;
//! use almanac::target::Target;
//! use almanac::time::CalendarDate;
//!
//! let almanac = Almanac::new();
//! let config = ObservationConfig::new(GeographicalCoordinates::new(4.35, 50.85).unwrap(), 100.0);
//! let date = CalendarDate::from_ymd(2024, 10, 1).unwrap();
//!
//! let mut saturn = Target::with_model("Saturn", Body::Saturn);
//! let ephemerides = almanac.calculate_ephemerides(&mut saturn, &date, &config).unwrap();
//! println!("{:?} {:?}", ephemerides.rising, ephemerides.best_time);
//! ```
use std::fmt;
use std::sync::Arc;

use crate::almanac_errors::AlmanacError;
use crate::coordinates::GeographicalCoordinates;
use crate::delta_t::{delta_t, DeltaTProvider, NoDeltaTData};
use crate::observation::{ObservationConfig, ObservationTime};
use crate::target::night::{NightWindow, NightWindowProvider, SolarNightWindow};
use crate::target::{Ephemerides, Target};
use crate::time::CalendarDate;

#[derive(Clone)]
pub struct Almanac {
    delta_t: Arc<dyn DeltaTProvider>,
    night: Arc<dyn NightWindowProvider>,
}

impl fmt::Debug for Almanac {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Almanac").finish_non_exhaustive()
    }
}

impl Default for Almanac {
    fn default() -> Self {
        Almanac::new()
    }
}

impl Almanac {
    /// Polynomial ΔT and night windows from the built-in solar model.
    pub fn new() -> Self {
        Almanac::with_delta_t(Arc::new(NoDeltaTData))
    }

    /// ΔT from `delta_t`, also used by the built-in solar night window.
    pub fn with_delta_t(delta_t: Arc<dyn DeltaTProvider>) -> Self {
        let night = Arc::new(SolarNightWindow::new(delta_t.clone()));
        Almanac { delta_t, night }
    }

    /// Both providers supplied by the host.
    pub fn with_providers(
        delta_t: Arc<dyn DeltaTProvider>,
        night: Arc<dyn NightWindowProvider>,
    ) -> Self {
        Almanac { delta_t, night }
    }

    pub fn delta_t_provider(&self) -> &dyn DeltaTProvider {
        self.delta_t.as_ref()
    }

    /// ΔT at `date`, seconds.
    pub fn delta_t(&self, date: &CalendarDate) -> f64 {
        delta_t(date, self.delta_t.as_ref())
    }

    /// The instant `date` on both the UT and dynamical time axes.
    pub fn observation_time(&self, date: &CalendarDate) -> ObservationTime {
        ObservationTime::from_date(date, self.delta_t.as_ref())
    }

    /// Night starting on the evening of `date`.
    pub fn night_window(
        &self,
        date: &CalendarDate,
        geo_coords: &GeographicalCoordinates,
    ) -> Result<NightWindow, AlmanacError> {
        self.night.night_window(date, geo_coords)
    }

    /// Refreshes the daily positions of a moving target for the UT day of `date`.
    ///
    /// Fixed targets are left untouched.
    pub fn prepare_target(
        &self,
        target: &mut Target,
        date: &CalendarDate,
        config: &ObservationConfig,
    ) -> Result<(), AlmanacError> {
        if target.model().is_some() {
            target.update_positions(date, self.delta_t.as_ref(), config)?;
        }
        Ok(())
    }

    /// Positions (for moving targets) then ephemerides of `target` on the UT day of `date`.
    ///
    /// See also
    /// --------
    /// * [`Target::calculate_ephemerides`]
    pub fn calculate_ephemerides(
        &self,
        target: &mut Target,
        date: &CalendarDate,
        config: &ObservationConfig,
    ) -> Result<Ephemerides, AlmanacError> {
        self.prepare_target(target, date, config)?;
        target
            .calculate_ephemerides(
                &config.geo_coords,
                date,
                self.delta_t.as_ref(),
                self.night.as_ref(),
            )
            .copied()
    }
}

#[cfg(test)]
mod almanac_test {
    use super::*;
    use crate::coordinates::EquatorialCoordinates;
    use crate::delta_t::DeltaTTable;
    use crate::planets::Body;
    use crate::target::night::Darkness;

    fn brussels() -> ObservationConfig {
        ObservationConfig::new(GeographicalCoordinates::new(4.35, 50.85).unwrap(), 100.0)
    }

    #[test]
    fn test_delta_t_from_table() {
        let mut table = DeltaTTable::new();
        table.insert(2000, 63.83);
        let almanac = Almanac::with_delta_t(Arc::new(table));
        let date = CalendarDate::from_ymd(2000, 1, 1).unwrap();
        assert_eq!(almanac.delta_t(&date), 63.83);
        let time = almanac.observation_time(&date);
        assert_eq!(time.delta_t(), 63.83);
    }

    #[test]
    fn test_planet_ephemerides() {
        let almanac = Almanac::new();
        let date = CalendarDate::from_ymd(2024, 10, 1).unwrap();
        let mut saturn = Target::with_model("Saturn", Body::Saturn);
        let ephemerides = almanac
            .calculate_ephemerides(&mut saturn, &date, &brussels())
            .unwrap();

        assert!(ephemerides.rising.is_some() && ephemerides.setting.is_some());
        // Three weeks after opposition Saturn transits around 22h15 UT
        let midnight = date.julian_day();
        let transit = ephemerides.transit - midnight;
        assert!(transit > 0.88 && transit < 0.97);
        assert_eq!(ephemerides.best_time, Some(ephemerides.transit));
        assert!(ephemerides.max_height > 25.0 && ephemerides.max_height < 35.0);
        assert_eq!(saturn.ephemerides().unwrap(), &ephemerides);
    }

    #[test]
    fn test_fixed_target_is_not_moved() {
        let almanac = Almanac::new();
        let date = CalendarDate::from_ymd(2024, 10, 1).unwrap();
        let position = EquatorialCoordinates::new(0.712, 41.269).unwrap();
        let mut m31 = Target::fixed("M 31", position);
        almanac.prepare_target(&mut m31, &date, &brussels()).unwrap();
        assert_eq!(m31.daily_positions(), Some([position; 3]));
    }

    #[test]
    fn test_night_window_from_solar_model() {
        let almanac = Almanac::new();
        let date = CalendarDate::from_ymd(2024, 10, 1).unwrap();
        let night = almanac
            .night_window(&date, &brussels().geo_coords)
            .unwrap();
        assert!(matches!(night.astronomical, Darkness::Between { .. }));
    }
}
