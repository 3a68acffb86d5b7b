//! # Night windows
//!
//! When is it dark enough to observe? A [`NightWindowProvider`] answers with the periods during
//! which the Sun stays below the horizon and below the civil (−6°), nautical (−12°) and
//! astronomical (−18°) twilight limits, starting on the evening of a given UT date.
//!
//! [`SolarNightWindow`] is the built-in provider: it runs the rise/transit/set solver on the
//! apparent position of the Sun. Hosts with their own almanac service can inject another
//! implementation.
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::almanac_errors::AlmanacError;
use crate::constants::{
    Degree, JulianDay, H0_ASTRONOMICAL_TWILIGHT, H0_CIVIL_TWILIGHT, H0_NAUTICAL_TWILIGHT, H0_SUN,
};
use crate::coordinates::GeographicalCoordinates;
use crate::delta_t::{delta_t, DeltaTProvider, NoDeltaTData};
use crate::planets::sun;
use crate::target::rise_transit_set::{DaySky, Visibility};
use crate::time::{greenwich_apparent_sidereal_time, CalendarDate};

/// Dark period below one altitude limit of the Sun.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Darkness {
    /// The Sun goes below the limit at `start` and comes back at `end` (Julian Days, UT).
    Between { start: JulianDay, end: JulianDay },
    /// The Sun stays above the limit: no darkness at all.
    Never,
    /// The Sun stays below the limit for the whole day.
    AllDay,
}

impl Darkness {
    /// The window as a `(start, end)` pair, a polar night covering the UT day starting at
    /// `midnight`.
    pub fn window(&self, midnight: JulianDay) -> Option<(JulianDay, JulianDay)> {
        match *self {
            Darkness::Between { start, end } => Some((start, end)),
            Darkness::AllDay => Some((midnight, midnight + 1.0)),
            Darkness::Never => None,
        }
    }
}

/// Darkness below the horizon and the three twilight limits, for one evening.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NightWindow {
    /// Sunset to sunrise
    pub night: Darkness,
    pub civil: Darkness,
    pub nautical: Darkness,
    pub astronomical: Darkness,
}

impl NightWindow {
    /// Window used to judge observability: astronomical darkness, or nautical darkness when the
    /// Sun never gets 18° below the horizon.
    pub fn observing_window(&self, midnight: JulianDay) -> Option<(JulianDay, JulianDay)> {
        self.astronomical
            .window(midnight)
            .or_else(|| self.nautical.window(midnight))
    }
}

/// Source of night windows.
pub trait NightWindowProvider: Send + Sync {
    /// Night starting on the evening of `date` (its UT day is used) at `geo_coords`.
    fn night_window(
        &self,
        date: &CalendarDate,
        geo_coords: &GeographicalCoordinates,
    ) -> Result<NightWindow, AlmanacError>;
}

/// Night windows computed from the apparent position of the Sun.
#[derive(Clone)]
pub struct SolarNightWindow {
    delta_t: Arc<dyn DeltaTProvider>,
}

impl Default for SolarNightWindow {
    fn default() -> Self {
        SolarNightWindow::new(Arc::new(NoDeltaTData))
    }
}

impl SolarNightWindow {
    pub fn new(delta_t: Arc<dyn DeltaTProvider>) -> Self {
        SolarNightWindow { delta_t }
    }
}

/// Dark period below `h0` from the Sun's events of the day (`today`) and of the next day.
fn darkness(today: &DaySky, tomorrow: &DaySky, midnight: JulianDay, h0: Degree) -> Darkness {
    let events = today.rise_transit_set(h0);
    match (events.visibility, events.setting) {
        (Visibility::Circumpolar, _) => Darkness::Never,
        (Visibility::NeverRises, _) => Darkness::AllDay,
        (Visibility::RisesAndSets, None) => Darkness::Never,
        (Visibility::RisesAndSets, Some(setting)) => {
            let start = midnight + setting;
            let end = match events.rising {
                Some(rising) if midnight + rising > start => midnight + rising,
                _ => match tomorrow.rise_transit_set(h0).rising {
                    Some(rising) => midnight + 1.0 + rising,
                    None => {
                        debug!(h0, "no sunrise on the next day, night lasts until its end");
                        midnight + 2.0
                    }
                },
            };
            Darkness::Between { start, end }
        }
    }
}

impl NightWindowProvider for SolarNightWindow {
    fn night_window(
        &self,
        date: &CalendarDate,
        geo_coords: &GeographicalCoordinates,
    ) -> Result<NightWindow, AlmanacError> {
        let midnight = date.midnight().julian_day();
        let dt = delta_t(date, self.delta_t.as_ref());
        // 0h TD of each day, DaySky adds ΔT when it interpolates
        let sun_at = |day: f64| sun::apparent_position(midnight + day).equatorial;
        let positions = [sun_at(-1.0), sun_at(0.0), sun_at(1.0), sun_at(2.0)];

        let today = DaySky {
            positions: [positions[0], positions[1], positions[2]],
            geo_coords: *geo_coords,
            sidereal_time: greenwich_apparent_sidereal_time(midnight, None),
            delta_t: dt,
        };
        let tomorrow = DaySky {
            positions: [positions[1], positions[2], positions[3]],
            sidereal_time: greenwich_apparent_sidereal_time(midnight + 1.0, None),
            ..today
        };

        Ok(NightWindow {
            night: darkness(&today, &tomorrow, midnight, H0_SUN),
            civil: darkness(&today, &tomorrow, midnight, H0_CIVIL_TWILIGHT),
            nautical: darkness(&today, &tomorrow, midnight, H0_NAUTICAL_TWILIGHT),
            astronomical: darkness(&today, &tomorrow, midnight, H0_ASTRONOMICAL_TWILIGHT),
        })
    }
}

#[cfg(test)]
mod night_test {
    use super::*;

    fn window(longitude: f64, latitude: f64, date: (i32, u8, u8)) -> NightWindow {
        let geo = GeographicalCoordinates::new(longitude, latitude).unwrap();
        let date = CalendarDate::from_ymd(date.0, date.1, date.2).unwrap();
        SolarNightWindow::default().night_window(&date, &geo).unwrap()
    }

    fn hours(darkness: Darkness) -> (f64, f64) {
        match darkness {
            Darkness::Between { start, end } => (start, end),
            other => panic!("expected a dark period, got {other:?}"),
        }
    }

    #[test]
    fn test_twilights_are_nested() {
        // Brussels, equinox
        let night = window(4.35, 50.85, (2024, 3, 20));
        let (sunset, sunrise) = hours(night.night);
        let (civil_start, civil_end) = hours(night.civil);
        let (nautical_start, nautical_end) = hours(night.nautical);
        let (astro_start, astro_end) = hours(night.astronomical);

        assert!(sunset < civil_start && civil_start < nautical_start && nautical_start < astro_start);
        assert!(astro_end < nautical_end && nautical_end < civil_end && civil_end < sunrise);

        // Sunset around 18h UT, sunrise around 6h UT the next day
        let midnight = CalendarDate::from_ymd(2024, 3, 20).unwrap().julian_day();
        assert!((sunset - midnight - 0.75).abs() < 0.03);
        assert!((sunrise - midnight - 1.25).abs() < 0.03);
        assert!((sunrise - sunset - 0.5).abs() < 0.03);
    }

    #[test]
    fn test_eastern_observer_night_starts_in_the_evening() {
        // Tokyo: local midnight is 15h UT
        let night = window(139.69, 35.69, (2024, 3, 20));
        let (sunset, sunrise) = hours(night.night);
        assert!(sunrise > sunset);
        assert!(sunrise - sunset < 0.55);
    }

    #[test]
    fn test_midsummer_at_high_latitude() {
        // Tromsø, June: the Sun never sets
        let night = window(18.96, 69.65, (2024, 6, 21));
        assert_eq!(night.night, Darkness::Never);
        assert_eq!(night.astronomical, Darkness::Never);
        assert_eq!(night.observing_window(0.0), None);

        // Tromsø, December: polar night, no astronomical dawn either at noon
        let night = window(18.96, 69.65, (2024, 12, 21));
        assert_eq!(night.night, Darkness::AllDay);
        assert!(matches!(night.astronomical, Darkness::Between { .. }));
    }

    #[test]
    fn test_sunset_altitude_under_a_large_delta_t() {
        struct HalfDay;
        impl DeltaTProvider for HalfDay {
            fn lookup(&self, _year: i32) -> Option<f64> {
                Some(43200.0)
            }
        }

        // Brussels, equinox. At the sunset found by the solver, the Sun computed directly at
        // JDE = UT + ΔT stands at the standard altitude.
        let geo = GeographicalCoordinates::new(4.35, 50.85).unwrap();
        let date = CalendarDate::from_ymd(2024, 3, 20).unwrap();
        let night = SolarNightWindow::new(Arc::new(HalfDay))
            .night_window(&date, &geo)
            .unwrap();
        for instant in [hours(night.night).0, hours(night.night).1] {
            let sun = sun::apparent_position(instant + 43200.0 / 86400.0).equatorial;
            let altitude = sun
                .to_horizontal(&geo, greenwich_apparent_sidereal_time(instant, None))
                .altitude();
            assert!((altitude - H0_SUN).abs() < 0.05, "{altitude} at {instant}");
        }
    }
}
