use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use almanac::kepler::{eccentric_anomaly, near_parabolic};

const TOLERANCE: f64 = 1e-9;

/// Uniform random mean anomaly in [0, 360)
#[inline]
fn rand_mean_anomaly(rng: &mut StdRng) -> f64 {
    rng.random::<f64>() * 360.0
}

/// Planets and most asteroids: e ∈ [0.0, 0.7]
fn bench_typical(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0x5EED_2451);
    let samples = 10_000usize;

    c.bench_function("eccentric_anomaly/typical_e<=0.7", |b| {
        b.iter_batched(
            || {
                // Inputs drawn outside the timed closure
                (0..samples)
                    .map(|_| (rng.random_range(0.0..=0.7), rand_mean_anomaly(&mut rng)))
                    .collect::<Vec<_>>()
            },
            |cases| {
                for (e, m) in cases {
                    let anomaly = eccentric_anomaly(black_box(e), black_box(m), TOLERANCE).unwrap();
                    black_box(anomaly);
                }
            },
            BatchSize::LargeInput,
        )
    });
}

/// High-eccentricity (still elliptic): e ∈ [0.7, 0.97]
fn bench_high_e(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0x5EED_0097);
    let samples = 10_000usize;

    c.bench_function("eccentric_anomaly/high_e_0.7..0.97", |b| {
        b.iter_batched(
            || {
                (0..samples)
                    .map(|_| (rng.random_range(0.7..0.97), rand_mean_anomaly(&mut rng)))
                    .collect::<Vec<_>>()
            },
            |cases| {
                for (e, m) in cases {
                    let _ = eccentric_anomaly(black_box(e), black_box(m), TOLERANCE);
                }
            },
            BatchSize::LargeInput,
        )
    });
}

/// Near-parabolic regime on both sides of e = 1, within a year of perihelion
fn bench_near_parabolic(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0x5EED_1000);
    let samples = 10_000usize;

    c.bench_function("near_parabolic/e_0.98..1.02", |b| {
        b.iter_batched(
            || {
                (0..samples)
                    .map(|_| {
                        (
                            rng.random_range(0.3..3.0),
                            rng.random_range(0.98..1.02),
                            rng.random_range(-365.0..365.0),
                        )
                    })
                    .collect::<Vec<_>>()
            },
            |cases| {
                for (q, e, t) in cases {
                    let _ = near_parabolic(black_box(q), black_box(e), black_box(t));
                }
            },
            BatchSize::LargeInput,
        )
    });
}

/// Fixed stress case: Landgraf's e = 0.987 comet, 254.9 days after perihelion.
fn bench_fixed_stress(c: &mut Criterion) {
    c.bench_function("near_parabolic/fixed_stress_case", |b| {
        b.iter(|| {
            let solution = near_parabolic(black_box(0.1), black_box(0.987), black_box(254.9));
            black_box(solution.ok());
        })
    });
}

criterion_group!(
    name = benches;
    config = Criterion::default();
    targets = bench_typical, bench_high_e, bench_near_parabolic, bench_fixed_stress
);
criterion_main!(benches);
