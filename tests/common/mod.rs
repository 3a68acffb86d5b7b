#![allow(dead_code)]

use almanac::almanac_errors::AlmanacError;
use almanac::coordinates::{EquatorialCoordinates, GeographicalCoordinates};
use almanac::orbit_type::keplerian_element::KeplerianElements;
use almanac::target::night::{Darkness, NightWindow, NightWindowProvider};
use almanac::time::CalendarDate;
use approx::assert_abs_diff_eq;

pub fn boston() -> GeographicalCoordinates {
    GeographicalCoordinates::new(-71.0833, 42.3333).unwrap()
}

pub fn brussels() -> GeographicalCoordinates {
    GeographicalCoordinates::new(4.35, 50.85).unwrap()
}

pub fn date(year: i32, month: u8, day: u8) -> CalendarDate {
    CalendarDate::from_ymd(year, month, day).unwrap()
}

/// Comet Encke, 1990 apparition.
pub fn encke() -> KeplerianElements {
    KeplerianElements::new(
        2.2091404,
        0.8502196,
        11.94524,
        334.75006,
        186.23352,
        2448193.04502,
    )
    .unwrap()
}

pub fn assert_equatorial_close(
    actual: &EquatorialCoordinates,
    right_ascension_deg: f64,
    declination: f64,
    epsilon: f64,
) {
    assert_abs_diff_eq!(
        actual.right_ascension_degrees(),
        right_ascension_deg,
        epsilon = epsilon
    );
    assert_abs_diff_eq!(actual.declination(), declination, epsilon = epsilon);
}

/// Night window with the same dark period (day fractions after 0h UT) below every limit.
pub struct FixedNight(pub Option<(f64, f64)>);

impl NightWindowProvider for FixedNight {
    fn night_window(
        &self,
        date: &CalendarDate,
        _geo_coords: &GeographicalCoordinates,
    ) -> Result<NightWindow, AlmanacError> {
        let midnight = date.midnight().julian_day();
        let darkness = match self.0 {
            Some((start, end)) => Darkness::Between {
                start: midnight + start,
                end: midnight + end,
            },
            None => Darkness::Never,
        };
        Ok(NightWindow {
            night: darkness,
            civil: darkness,
            nautical: darkness,
            astronomical: darkness,
        })
    }
}
