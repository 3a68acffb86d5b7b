use criterion::{black_box, criterion_group, criterion_main, Criterion};

use almanac::coordinates::{EquatorialCoordinates, GeographicalCoordinates};
use almanac::delta_t::NoDeltaTData;
use almanac::observation::ObservationConfig;
use almanac::planets::Body;
use almanac::target::night::{NightWindowProvider, SolarNightWindow};
use almanac::target::rise_transit_set::DaySky;
use almanac::target::Target;
use almanac::time::CalendarDate;

fn boston() -> GeographicalCoordinates {
    GeographicalCoordinates::new(-71.0833, 42.3333).unwrap()
}

/// Venus on 1988 March 20, the solver alone
fn bench_solver(c: &mut Criterion) {
    let eq = |ra: f64, dec: f64| EquatorialCoordinates::from_degrees(ra, dec).unwrap();
    let sky = DaySky {
        positions: [
            eq(40.68021, 18.04761),
            eq(41.73129, 18.44092),
            eq(42.78204, 18.82742),
        ],
        geo_coords: boston(),
        sidereal_time: 177.7420651,
        delta_t: 56.0,
    };

    c.bench_function("rise_transit_set/solver", |b| {
        b.iter(|| black_box(sky.rise_transit_set(black_box(-0.5667))))
    });
}

/// Solar night window: four Sun positions and four solver runs
fn bench_night_window(c: &mut Criterion) {
    let provider = SolarNightWindow::default();
    let date = CalendarDate::from_ymd(2024, 3, 20).unwrap();
    let geo = boston();

    c.bench_function("rise_transit_set/solar_night_window", |b| {
        b.iter(|| black_box(provider.night_window(black_box(&date), &geo).unwrap()))
    });
}

/// Full target pipeline: three planetary positions, solver and night window
fn bench_planet_target(c: &mut Criterion) {
    let provider = SolarNightWindow::default();
    let date = CalendarDate::from_ymd(2024, 10, 1).unwrap();
    let config = ObservationConfig::new(boston(), 0.0);

    c.bench_function("rise_transit_set/saturn_target", |b| {
        b.iter(|| {
            let mut saturn = Target::with_model("Saturn", Body::Saturn);
            saturn
                .update_positions(black_box(&date), &NoDeltaTData, &config)
                .unwrap();
            let ephemerides = *saturn
                .calculate_ephemerides(&config.geo_coords, &date, &NoDeltaTData, &provider)
                .unwrap();
            black_box(ephemerides)
        })
    });
}

criterion_group!(
    name = benches;
    config = Criterion::default();
    targets = bench_solver, bench_night_window, bench_planet_target
);
criterion_main!(benches);
