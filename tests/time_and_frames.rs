use almanac::almanac_errors::AlmanacError;
use almanac::coordinates::{
    EclipticalCoordinates, EquatorialCoordinates, GalacticCoordinates, HorizontalCoordinates,
};
use almanac::delta_t::{delta_t, delta_t_polynomial, DeltaTTable, NoDeltaTData};
use almanac::earth_orientation::nutation;
use almanac::time::{greenwich_apparent_sidereal_time, greenwich_mean_sidereal_time, CalendarDate};
use approx::assert_abs_diff_eq;

mod common;
use common::{assert_equatorial_close, date};

#[test]
fn test_sputnik_launch() {
    let launch: CalendarDate = "1957 10 4.81".parse().unwrap();
    assert_abs_diff_eq!(launch.julian_day(), 2436116.31, epsilon = 1e-8);

    let back = CalendarDate::from_julian_day(2436116.31).unwrap();
    assert_eq!((back.year(), back.month(), back.day()), (1957, 10, 4));
    assert_eq!(back.hour(), 19);
}

#[test]
fn test_gregorian_reform_gap() {
    assert!(matches!(
        CalendarDate::from_ymd(1582, 10, 10),
        Err(AlmanacError::InvalidDate(_))
    ));
    assert_eq!(
        date(1582, 10, 15).julian_day() - date(1582, 10, 4).julian_day(),
        1.0
    );
}

#[test]
fn test_nutation_and_sidereal_time_1987_april_10() {
    let jd = date(1987, 4, 10).julian_day();
    let nut = nutation(jd);
    assert_abs_diff_eq!(nut.longitude * 3600.0, -3.788, epsilon = 1e-3);
    assert_abs_diff_eq!(nut.obliquity * 3600.0, 9.443, epsilon = 1e-3);
    // 23°26′36.850″
    assert_abs_diff_eq!(
        nut.true_obliquity,
        23.0 + 26.0 / 60.0 + 36.850 / 3600.0,
        epsilon = 1e-6
    );

    // 13h10m46.3668s and 13h10m46.1351s
    assert_abs_diff_eq!(
        greenwich_mean_sidereal_time(jd) * 240.0,
        (13.0 * 3600.0 + 10.0 * 60.0 + 46.3668),
        epsilon = 1e-3
    );
    assert_abs_diff_eq!(
        greenwich_apparent_sidereal_time(jd, Some(&nut)) * 240.0,
        (13.0 * 3600.0 + 10.0 * 60.0 + 46.1351),
        epsilon = 1e-3
    );
}

#[test]
fn test_delta_t_sources() {
    let mut table = DeltaTTable::new();
    table.insert(1990, 56.86);
    let day = date(1990, 6, 1);
    assert_eq!(delta_t(&day, &table), 56.86);
    assert_eq!(
        delta_t(&day, &NoDeltaTData),
        delta_t_polynomial(day.decimal_year())
    );
    assert!((delta_t(&day, &NoDeltaTData) - 56.86).abs() < 2.0);

    let csv = "year,delta_t\n2000,63.83\n2001,64.09\n";
    let table = DeltaTTable::from_reader(csv.as_bytes()).unwrap();
    assert_eq!(table.len(), 2);
    assert_eq!(delta_t(&date(2001, 3, 1), &table), 64.09);
    assert!(DeltaTTable::from_reader("year,delta_t\n2000,abc\n".as_bytes()).is_err());
}

#[test]
fn test_frame_chain_pollux() {
    let pollux = EquatorialCoordinates::from_degrees(116.328942, 28.026183).unwrap();
    let ecliptical = pollux.to_ecliptical(23.4392911, 2451545.0);
    assert_abs_diff_eq!(ecliptical.longitude(), 113.215630, epsilon = 1e-6);
    assert_abs_diff_eq!(ecliptical.latitude(), 6.684170, epsilon = 1e-6);

    let back = EclipticalCoordinates::new(ecliptical.longitude(), ecliptical.latitude(), 2451545.0)
        .unwrap()
        .to_equatorial(23.4392911);
    assert_equatorial_close(&back, 116.328942, 28.026183, 1e-9);

    let galactic = pollux.to_galactic();
    let again = GalacticCoordinates::new(galactic.longitude(), galactic.latitude())
        .unwrap()
        .to_equatorial();
    assert_equatorial_close(&again, 116.328942, 28.026183, 1e-8);
}

#[test]
fn test_horizontal_round_trip_washington() {
    let washington =
        almanac::coordinates::GeographicalCoordinates::new(-77.06556, 38.92139).unwrap();
    let venus = EquatorialCoordinates::new(23.1546225, -6.7198917).unwrap();
    let horizontal = venus.to_horizontal(&washington, 128.7368);
    // Azimuth measured westward from the south
    assert_abs_diff_eq!(horizontal.azimuth(), 68.0337, epsilon = 1e-3);
    assert_abs_diff_eq!(horizontal.altitude(), 15.1249, epsilon = 1e-3);

    let back = HorizontalCoordinates::new(horizontal.azimuth(), horizontal.altitude())
        .unwrap()
        .to_equatorial(&washington, 128.7368);
    assert_equatorial_close(&back, venus.right_ascension_degrees(), venus.declination(), 1e-9);
}

#[test]
fn test_coordinate_domains() {
    assert!(matches!(
        EquatorialCoordinates::new(24.5, 0.0),
        Err(AlmanacError::InvalidCoordinate(_))
    ));
    assert!(EquatorialCoordinates::new(1.0, -91.0).is_err());
    assert!(HorizontalCoordinates::new(10.0, 95.0).is_err());
    assert!(EquatorialCoordinates::from_sexagesimal("25 00 00", "+10 00 00").is_err());
    assert!(matches!(
        EquatorialCoordinates::from_sexagesimal("12 00", "+10 00 00"),
        Err(AlmanacError::InvalidSexagesimal(_))
    ));
}
