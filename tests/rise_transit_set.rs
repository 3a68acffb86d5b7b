use std::sync::Arc;

use almanac::almanac::Almanac;
use almanac::almanac_errors::AlmanacError;
use almanac::coordinates::EquatorialCoordinates;
use almanac::delta_t::NoDeltaTData;
use almanac::observation::ObservationConfig;
use almanac::orbit_type::OrbitalElements;
use almanac::planets::Body;
use almanac::target::night::{Darkness, NightWindowProvider, SolarNightWindow};
use almanac::target::rise_transit_set::{DaySky, Visibility};
use almanac::target::Target;
use almanac::time::{greenwich_apparent_sidereal_time, CalendarDate};
use approx::assert_abs_diff_eq;

mod common;
use common::{boston, brussels, date, encke, FixedNight};

fn venus_1988_march_20() -> DaySky {
    let eq = |ra: f64, dec: f64| EquatorialCoordinates::from_degrees(ra, dec).unwrap();
    DaySky {
        positions: [
            eq(40.68021, 18.04761),
            eq(41.73129, 18.44092),
            eq(42.78204, 18.82742),
        ],
        geo_coords: boston(),
        sidereal_time: greenwich_apparent_sidereal_time(date(1988, 3, 20).julian_day(), None),
        delta_t: 56.0,
    }
}

#[test]
fn test_venus_at_boston() {
    let events = venus_1988_march_20().rise_transit_set(-0.5667);
    assert_eq!(events.visibility, Visibility::RisesAndSets);
    // 12h25m, 19h40m and 02h55m UT
    assert_abs_diff_eq!(events.rising.unwrap(), 0.51766, epsilon = 1e-4);
    assert_abs_diff_eq!(events.transit, 0.81980, epsilon = 1e-4);
    assert_abs_diff_eq!(events.setting.unwrap(), 0.12130, epsilon = 1e-4);
}

#[test]
fn test_circumpolar_and_never_rising_targets() {
    let night = FixedNight(Some((0.05, 0.4)));
    let mut polaris = Target::fixed(
        "Polaris",
        EquatorialCoordinates::new(2.852136, 85.82742).unwrap(),
    );
    let ephemerides = *polaris
        .calculate_ephemerides(&boston(), &date(1988, 3, 20), &NoDeltaTData, &night)
        .unwrap();
    assert_eq!(ephemerides.visibility, Visibility::Circumpolar);
    assert_eq!((ephemerides.rising, ephemerides.setting), (None, None));
    assert_abs_diff_eq!(ephemerides.max_height, 46.50543, epsilon = 1e-4);

    let mut canopus = Target::fixed("Canopus", EquatorialCoordinates::new(6.399, -52.696).unwrap());
    let ephemerides = *canopus
        .calculate_ephemerides(&boston(), &date(1988, 3, 20), &NoDeltaTData, &night)
        .unwrap();
    assert_eq!(ephemerides.visibility, Visibility::NeverRises);
    assert!(ephemerides.max_height < 0.0);
    assert!(ephemerides.max_height_at_night.unwrap() < 0.0);
}

#[test]
fn test_ephemerides_lifecycle() {
    let mut vega = Target::fixed("Vega", EquatorialCoordinates::new(18.6156, 38.7837).unwrap());
    assert_eq!(vega.max_height(), Err(AlmanacError::EphemeridesNotCalculated));

    let night = SolarNightWindow::default();
    let day = date(2024, 7, 15);
    let first = *vega
        .calculate_ephemerides(&brussels(), &day, &NoDeltaTData, &night)
        .unwrap();
    let second = *vega
        .calculate_ephemerides(&brussels(), &day, &NoDeltaTData, &night)
        .unwrap();
    assert_eq!(first, second);

    vega.set_equatorial_coordinates(EquatorialCoordinates::new(5.9195, 7.4071).unwrap());
    assert_eq!(vega.transit(), Err(AlmanacError::EphemeridesNotCalculated));
    let moved = *vega
        .calculate_ephemerides(&brussels(), &day, &NoDeltaTData, &night)
        .unwrap();
    assert_ne!(moved.transit, first.transit);
}

#[test]
fn test_summer_night_best_time_at_high_latitude() {
    // Vega transits near local midnight in July
    let almanac = Almanac::new();
    let config = ObservationConfig::new(brussels(), 0.0);
    let mut vega = Target::fixed("Vega", EquatorialCoordinates::new(18.6156, 38.7837).unwrap());
    let ephemerides = almanac
        .calculate_ephemerides(&mut vega, &date(2024, 7, 15), &config)
        .unwrap();
    assert_eq!(ephemerides.best_time, Some(ephemerides.transit));
    assert_abs_diff_eq!(ephemerides.max_height, 90.0 - 50.85 + 38.7837, epsilon = 0.05);

    // No astronomical or nautical darkness north of the Arctic circle in June
    let tromso = ObservationConfig::new(
        almanac::coordinates::GeographicalCoordinates::new(18.96, 69.65).unwrap(),
        0.0,
    );
    let ephemerides = almanac
        .calculate_ephemerides(&mut vega, &date(2024, 6, 21), &tromso)
        .unwrap();
    assert_eq!(ephemerides.best_time, None);
    assert_eq!(ephemerides.max_height_at_night, None);
}

#[test]
fn test_moving_targets() {
    let almanac = Almanac::with_delta_t(Arc::new(NoDeltaTData));
    let config = ObservationConfig::new(boston(), 0.0);
    let day = date(1990, 10, 6);

    let mut comet = Target::with_model("2P/Encke", OrbitalElements::from(encke()));
    let ephemerides = almanac.calculate_ephemerides(&mut comet, &day, &config).unwrap();
    let [yesterday, today, tomorrow] = comet.daily_positions().unwrap();
    assert!(yesterday != today && today != tomorrow);
    assert_abs_diff_eq!(today.right_ascension_degrees(), 158.56, epsilon = 0.2);
    assert_eq!(ephemerides.visibility, Visibility::RisesAndSets);

    let mut moon = Target::with_model("Moon", Body::Moon);
    let ephemerides = almanac.calculate_ephemerides(&mut moon, &day, &config).unwrap();
    assert!(moon.h0() > 0.08 && moon.h0() < 0.18);
    // A single correction pass leaves the Moon within a few minutes of its rising
    let altitude = ephemerides.altitude_at(ephemerides.rising.unwrap());
    assert_abs_diff_eq!(altitude, moon.h0(), epsilon = 1.0);
}

#[test]
fn test_solar_night_window_brackets_midnight() {
    let provider = SolarNightWindow::default();
    let day = CalendarDate::from_ymd(2024, 12, 21).unwrap();
    let night = provider.night_window(&day, &brussels()).unwrap();
    let midnight = day.julian_day();
    match night.night {
        Darkness::Between { start, end } => {
            // Sunset near 15h40 UT, sunrise near 7h45 UT
            assert!(start - midnight > 0.6 && start - midnight < 0.7);
            assert!(end - midnight > 1.28 && end - midnight < 1.36);
        }
        other => panic!("expected a night, got {other:?}"),
    }
    assert!(night.observing_window(midnight).is_some());
}
