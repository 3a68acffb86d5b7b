use almanac::almanac_errors::AlmanacError;
use almanac::kepler::{barker, eccentric_anomaly, near_parabolic};
use almanac::observation::{ObservationConfig, ObservationTime};
use almanac::orbit_type::catalog::{read_asteroids, read_comets};
use almanac::orbit_type::cometary_element::CometaryElements;
use almanac::orbit_type::propagator::{geocentric_position, topocentric_position, LightTime};
use almanac::orbit_type::OrbitalElements;
use almanac::photometry::magnitude_models::MagnitudeModel;
use approx::assert_abs_diff_eq;

mod common;
use common::{assert_equatorial_close, boston, encke};

#[test]
fn test_kepler_equation() {
    let e = eccentric_anomaly(0.1, 5.0, 1e-9).unwrap();
    assert_abs_diff_eq!(e, 5.554589, epsilon = 1e-6);
    // E − e sin E = M
    let m = e - 0.1 * e.to_radians().sin().to_degrees();
    assert_abs_diff_eq!(m, 5.0, epsilon = 1e-8);
}

#[test]
fn test_parabolic_and_near_parabolic_solvers() {
    let (v, r) = barker(1.487469, 112.5642);
    assert_abs_diff_eq!(v, 66.78862, epsilon = 1e-5);
    assert_abs_diff_eq!(r, 2.133911, epsilon = 1e-6);

    let (v, r) = near_parabolic(0.1, 0.987, 254.9).unwrap();
    assert_abs_diff_eq!(v, 164.50029, epsilon = 1e-5);
    assert_abs_diff_eq!(r, 4.063777, epsilon = 1e-5);

    // Landgraf's series agrees with Barker's equation at e = 1
    let (v_barker, r_barker) = barker(1.0, 60.0);
    let (v_landgraf, r_landgraf) = near_parabolic(1.0, 1.0, 60.0).unwrap();
    assert_abs_diff_eq!(v_barker, v_landgraf, epsilon = 1e-6);
    assert_abs_diff_eq!(r_barker, r_landgraf, epsilon = 1e-6);
}

#[test]
fn test_encke_geocentric_position() {
    let elements = OrbitalElements::from(encke());
    let position = geocentric_position(&elements, 2448170.5, LightTime::OneStep).unwrap();
    assert_equatorial_close(&position.equatorial, 158.5590374, 19.1584614, 1e-5);
    assert_abs_diff_eq!(position.distance, 0.8242809, epsilon = 1e-5);
    assert_abs_diff_eq!(position.heliocentric_distance, 0.6525755, epsilon = 1e-5);
}

#[test]
fn test_comet_catalog_to_topocentric_position() {
    let data = "\
designation,perihelion_distance,eccentricity,inclination,ascending_node,perihelion_argument,perihelion_time,perihelion_year,perihelion_month,perihelion_day,absolute_magnitude,slope
2P/Encke,0.3308859,0.8502196,11.94524,334.75006,186.23352,,1990,10,28.54502,9.8,4.0
C/Parabolic,1.2,1.0,120.0,45.0,10.0,2451545.0,,,,6.0,4.0
";
    let comets = read_comets(data.as_bytes()).unwrap();
    assert_eq!(comets.len(), 2);

    // q = a (1 − e) of the Encke fixture
    assert_abs_diff_eq!(
        comets[0].1.perihelion_distance(),
        encke().perihelion_distance(),
        epsilon = 1e-7
    );

    let (name, encke) = &comets[0];
    assert_eq!(name, "2P/Encke");
    assert!(encke.as_keplerian().is_some());
    assert_eq!(
        encke.magnitude_model(),
        Some(&MagnitudeModel::HN {
            absolute_magnitude: 9.8,
            slope: 4.0
        })
    );
    let geocentric = geocentric_position(encke, 2448170.5, LightTime::OneStep).unwrap();
    assert_equatorial_close(&geocentric.equatorial, 158.5590374, 19.1584614, 1e-4);
    let magnitude = geocentric.magnitude(encke).unwrap();
    assert_abs_diff_eq!(
        magnitude,
        9.8 + 5.0 * 0.8242809f64.log10() + 10.0 * 0.6525755f64.log10(),
        epsilon = 1e-3
    );

    let config = ObservationConfig::new(boston(), 0.0);
    let time = ObservationTime::new(2448170.5 - 57.0 / 86400.0, 57.0);
    let topocentric = topocentric_position(encke, &time, &config, LightTime::OneStep).unwrap();
    assert!(
        topocentric
            .equatorial
            .angular_separation(&geocentric.equatorial)
            < 8.8 / 3600.0 / geocentric.distance
    );

    let (_, parabolic) = &comets[1];
    assert!(parabolic.as_cometary().unwrap().is_parabolic());
    let position = geocentric_position(parabolic, 2451545.0, LightTime::Iterative).unwrap();
    assert_abs_diff_eq!(position.heliocentric_distance, 1.2, epsilon = 1e-3);
}

#[test]
fn test_asteroid_catalog() {
    let header = "designation,semi_major_axis,eccentricity,inclination,ascending_node,perihelion_argument,perihelion_time,mean_anomaly,epoch,absolute_magnitude,slope\n";
    let data = format!("{header}4 Vesta,2.3615,0.0889,7.142,103.81,151.2,,20.86,2460600.5,3.25,0.32\n");
    let asteroids = read_asteroids(data.as_bytes()).unwrap();
    assert_eq!(asteroids.len(), 1);
    let kepler = asteroids[0].1.as_keplerian().unwrap();
    assert_abs_diff_eq!(kepler.mean_anomaly(2460600.5), 20.86, epsilon = 1e-9);
    assert!(matches!(
        asteroids[0].1.magnitude_model(),
        Some(MagnitudeModel::HG { .. })
    ));

    let lost = format!("{header}Lost,2.5,0.1,5.0,10.0,20.0,,,,,\n");
    assert_eq!(
        read_asteroids(lost.as_bytes()),
        Err(AlmanacError::MissingOrbitalField("Lost: perihelion_time".into()))
    );

    let malformed = format!("{header}Bad,two,0.1,5.0,10.0,20.0,,,,,\n");
    assert!(matches!(
        read_asteroids(malformed.as_bytes()),
        Err(AlmanacError::CatalogRecord(_))
    ));
}

#[test]
fn test_invalid_orbits_are_rejected() {
    assert!(matches!(
        CometaryElements::new(0.0, 0.9, 1.0, 2.0, 3.0, 2451545.0),
        Err(AlmanacError::InvalidOrbit(_))
    ));
    assert!(CometaryElements::new(1.0, -0.5, 1.0, 2.0, 3.0, 2451545.0).is_err());
}
