//! # Phases of the Moon
//!
//! Instants of the new Moon, the quarters and the full Moon from the mean lunation
//! `JDE = 2451550.09766 + 29.530588861 k + …` corrected by the periodic terms of each phase
//! and the fourteen planetary arguments `A₁ … A₁₄`. `k = 0` is the new Moon of 2000 January 6;
//! integer `k` gives new Moons, `k + 0.25` first quarters, `k + 0.5` full Moons and `k + 0.75`
//! last quarters.
use serde::{Deserialize, Serialize};

use crate::constants::{JulianDay, RADEG};

/// Mean synodic month, days
pub const SYNODIC_MONTH: f64 = 29.530588861;

/// JDE of the mean new Moon `k = 0`
const MEAN_NEW_MOON_EPOCH: JulianDay = 2451550.09766;

/// Lunations per Julian century
const LUNATIONS_PER_CENTURY: f64 = 1236.85;

/// The four principal phases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoonPhase {
    NewMoon,
    FirstQuarter,
    FullMoon,
    LastQuarter,
}

impl MoonPhase {
    /// Fraction added to an integer lunation number.
    pub fn offset(&self) -> f64 {
        match self {
            MoonPhase::NewMoon => 0.0,
            MoonPhase::FirstQuarter => 0.25,
            MoonPhase::FullMoon => 0.5,
            MoonPhase::LastQuarter => 0.75,
        }
    }

    fn corrections(&self) -> &'static [PhaseTerm] {
        match self {
            MoonPhase::NewMoon => &NEW_MOON_TERMS,
            MoonPhase::FullMoon => &FULL_MOON_TERMS,
            MoonPhase::FirstQuarter | MoonPhase::LastQuarter => &QUARTER_TERMS,
        }
    }
}

/// `coefficient · E^e_power · sin(m M + mp M′ + f F + omega Ω)`
#[derive(Debug, Clone, Copy)]
struct PhaseTerm {
    coefficient: f64,
    e_power: i32,
    m: i8,
    mp: i8,
    f: i8,
    omega: i8,
}

const fn term(coefficient: f64, e_power: i32, m: i8, mp: i8, f: i8, omega: i8) -> PhaseTerm {
    PhaseTerm {
        coefficient,
        e_power,
        m,
        mp,
        f,
        omega,
    }
}

const NEW_MOON_TERMS: [PhaseTerm; 25] = [
    term(-0.40720, 0, 0, 1, 0, 0),
    term(0.17241, 1, 1, 0, 0, 0),
    term(0.01608, 0, 0, 2, 0, 0),
    term(0.01039, 0, 0, 0, 2, 0),
    term(0.00739, 1, -1, 1, 0, 0),
    term(-0.00514, 1, 1, 1, 0, 0),
    term(0.00208, 2, 2, 0, 0, 0),
    term(-0.00111, 0, 0, 1, -2, 0),
    term(-0.00057, 0, 0, 1, 2, 0),
    term(0.00056, 1, 1, 2, 0, 0),
    term(-0.00042, 0, 0, 3, 0, 0),
    term(0.00042, 1, 1, 0, 2, 0),
    term(0.00038, 1, 1, 0, -2, 0),
    term(-0.00024, 1, -1, 2, 0, 0),
    term(-0.00017, 0, 0, 0, 0, 1),
    term(-0.00007, 0, 2, 1, 0, 0),
    term(0.00004, 0, 0, 2, -2, 0),
    term(0.00004, 0, 3, 0, 0, 0),
    term(0.00003, 0, 1, 1, -2, 0),
    term(0.00003, 0, 0, 2, 2, 0),
    term(-0.00003, 0, 1, 1, 2, 0),
    term(0.00003, 0, -1, 1, 2, 0),
    term(-0.00002, 0, -1, 1, -2, 0),
    term(-0.00002, 0, 1, 3, 0, 0),
    term(0.00002, 0, 0, 4, 0, 0),
];

const FULL_MOON_TERMS: [PhaseTerm; 25] = [
    term(-0.40614, 0, 0, 1, 0, 0),
    term(0.17302, 1, 1, 0, 0, 0),
    term(0.01614, 0, 0, 2, 0, 0),
    term(0.01043, 0, 0, 0, 2, 0),
    term(0.00734, 1, -1, 1, 0, 0),
    term(-0.00515, 1, 1, 1, 0, 0),
    term(0.00209, 2, 2, 0, 0, 0),
    term(-0.00111, 0, 0, 1, -2, 0),
    term(-0.00057, 0, 0, 1, 2, 0),
    term(0.00056, 1, 1, 2, 0, 0),
    term(-0.00042, 0, 0, 3, 0, 0),
    term(0.00042, 1, 1, 0, 2, 0),
    term(0.00038, 1, 1, 0, -2, 0),
    term(-0.00024, 1, -1, 2, 0, 0),
    term(-0.00017, 0, 0, 0, 0, 1),
    term(-0.00007, 0, 2, 1, 0, 0),
    term(0.00004, 0, 0, 2, -2, 0),
    term(0.00004, 0, 3, 0, 0, 0),
    term(0.00003, 0, 1, 1, -2, 0),
    term(0.00003, 0, 0, 2, 2, 0),
    term(-0.00003, 0, 1, 1, 2, 0),
    term(0.00003, 0, -1, 1, 2, 0),
    term(-0.00002, 0, -1, 1, -2, 0),
    term(-0.00002, 0, 1, 3, 0, 0),
    term(0.00002, 0, 0, 4, 0, 0),
];

const QUARTER_TERMS: [PhaseTerm; 25] = [
    term(-0.62801, 0, 0, 1, 0, 0),
    term(0.17172, 1, 1, 0, 0, 0),
    term(-0.01183, 1, 1, 1, 0, 0),
    term(0.00862, 0, 0, 2, 0, 0),
    term(0.00804, 0, 0, 0, 2, 0),
    term(0.00454, 1, -1, 1, 0, 0),
    term(0.00204, 2, 2, 0, 0, 0),
    term(-0.00180, 0, 0, 1, -2, 0),
    term(-0.00070, 0, 0, 1, 2, 0),
    term(-0.00040, 0, 0, 3, 0, 0),
    term(-0.00034, 1, -1, 2, 0, 0),
    term(0.00032, 1, 1, 0, 2, 0),
    term(0.00032, 1, 1, 0, -2, 0),
    term(-0.00028, 2, 2, 1, 0, 0),
    term(0.00027, 1, 1, 2, 0, 0),
    term(-0.00017, 0, 0, 0, 0, 1),
    term(-0.00005, 0, -1, 1, -2, 0),
    term(0.00004, 0, 0, 2, 2, 0),
    term(-0.00004, 0, 1, 1, 2, 0),
    term(0.00004, 0, -2, 1, 0, 0),
    term(0.00003, 0, 1, 1, -2, 0),
    term(0.00003, 0, 3, 0, 0, 0),
    term(-0.00002, 0, 0, 2, -2, 0),
    term(0.00002, 0, -1, 1, 2, 0),
    term(-0.00002, 0, 1, 3, 0, 0),
];

/// Planetary arguments: amplitude (days), phase and rate per lunation (degrees).
const PLANETARY_TERMS: [(f64, f64, f64); 14] = [
    (0.000325, 299.77, 0.107408),
    (0.000165, 251.88, 0.016321),
    (0.000164, 251.83, 26.651886),
    (0.000126, 349.42, 36.412478),
    (0.000110, 84.66, 18.206239),
    (0.000062, 141.74, 53.303771),
    (0.000060, 207.14, 2.453732),
    (0.000056, 154.84, 7.306860),
    (0.000047, 34.52, 27.261239),
    (0.000042, 207.19, 0.121824),
    (0.000040, 291.34, 1.844379),
    (0.000037, 161.72, 24.198154),
    (0.000035, 239.56, 25.513099),
    (0.000023, 331.55, 3.592518),
];

/// Approximate lunation number of a date, `k ≈ (year − 2000) × 12.3685`.
pub fn lunation_number(decimal_year: f64) -> f64 {
    (decimal_year - 2000.0) * 12.3685
}

/// JDE of the mean phase `k` (no periodic terms).
pub fn mean_phase(k: f64) -> JulianDay {
    let t = k / LUNATIONS_PER_CENTURY;
    MEAN_NEW_MOON_EPOCH + SYNODIC_MONTH * k + 0.00015437 * t * t - 0.000000150 * t.powi(3)
        + 0.00000000073 * t.powi(4)
}

/// JDE of the true phase for lunation `k`.
///
/// Arguments
/// ---------
/// * `k`: integer lunation number (`0` is the new Moon of 2000 January 6).
/// * `phase`: which phase of that lunation.
///
/// Returns
/// --------
/// * Instant of the phase in dynamical time, a few seconds from the exact value.
pub fn true_phase(k: i64, phase: MoonPhase) -> JulianDay {
    let k = k as f64 + phase.offset();
    let t = k / LUNATIONS_PER_CENTURY;
    let t2 = t * t;
    let t3 = t2 * t;
    let t4 = t3 * t;

    let e = 1.0 - 0.002516 * t - 0.0000074 * t2;
    let m = 2.5534 + 29.10535670 * k - 0.0000014 * t2 - 0.00000011 * t3;
    let mp = 201.5643 + 385.81693528 * k + 0.0107582 * t2 + 0.00001238 * t3 - 0.000000058 * t4;
    let f = 160.7108 + 390.67050284 * k - 0.0016118 * t2 - 0.00000227 * t3 + 0.000000011 * t4;
    let omega = 124.7746 - 1.56375588 * k + 0.0020672 * t2 + 0.00000215 * t3;

    let mut correction: f64 = phase
        .corrections()
        .iter()
        .map(|term| {
            let angle = (term.m as f64 * m
                + term.mp as f64 * mp
                + term.f as f64 * f
                + term.omega as f64 * omega)
                * RADEG;
            term.coefficient * e.powi(term.e_power) * angle.sin()
        })
        .sum();

    let cos = |x: f64| (x * RADEG).cos();
    let w = 0.00306 - 0.00038 * e * cos(m) + 0.00026 * cos(mp) - 0.00002 * cos(mp - m)
        + 0.00002 * cos(mp + m)
        + 0.00002 * cos(2.0 * f);
    match phase {
        MoonPhase::FirstQuarter => correction += w,
        MoonPhase::LastQuarter => correction -= w,
        MoonPhase::NewMoon | MoonPhase::FullMoon => {}
    }

    let planetary: f64 = PLANETARY_TERMS
        .iter()
        .enumerate()
        .map(|(i, (amplitude, phase0, rate))| {
            let secular = if i == 0 { -0.009173 * t2 } else { 0.0 };
            amplitude * ((phase0 + rate * k + secular) * RADEG).sin()
        })
        .sum();

    mean_phase(k) + correction + planetary
}

/// First occurrence of `phase` at or after `jde`.
pub fn next_phase(jde: JulianDay, phase: MoonPhase) -> JulianDay {
    let mut k = ((jde - MEAN_NEW_MOON_EPOCH) / SYNODIC_MONTH - phase.offset()).floor() as i64 - 1;
    loop {
        let candidate = true_phase(k, phase);
        if candidate >= jde {
            return candidate;
        }
        k += 1;
    }
}

/// Age of the Moon in days since the last new Moon.
pub fn moon_age(jde: JulianDay) -> f64 {
    let mut previous = next_phase(jde - SYNODIC_MONTH - 1.0, MoonPhase::NewMoon);
    loop {
        let following = next_phase(previous + 1.0, MoonPhase::NewMoon);
        if following > jde {
            return jde - previous;
        }
        previous = following;
    }
}

#[cfg(test)]
mod moon_phase_test {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_new_moon_1977_february() {
        assert_abs_diff_eq!(true_phase(-283, MoonPhase::NewMoon), 2443192.65118, epsilon = 1e-5);
    }

    #[test]
    fn test_last_quarter_2044_january() {
        assert_abs_diff_eq!(true_phase(544, MoonPhase::LastQuarter), 2467636.49186, epsilon = 1e-4);
    }

    #[test]
    fn test_phases_are_ordered() {
        let new = true_phase(-283, MoonPhase::NewMoon);
        let first = true_phase(-283, MoonPhase::FirstQuarter);
        let full = true_phase(-283, MoonPhase::FullMoon);
        let last = true_phase(-283, MoonPhase::LastQuarter);
        assert!(new < first && first < full && full < last);
        assert!(last < true_phase(-282, MoonPhase::NewMoon));
    }

    #[test]
    fn test_next_phase() {
        let new = true_phase(-283, MoonPhase::NewMoon);
        assert_abs_diff_eq!(next_phase(new - 3.0, MoonPhase::NewMoon), new, epsilon = 1e-9);
        assert_abs_diff_eq!(next_phase(new, MoonPhase::NewMoon), new, epsilon = 1e-9);
        assert!(next_phase(new + 0.01, MoonPhase::NewMoon) > new + 29.0);
    }

    #[test]
    fn test_moon_age() {
        let new = true_phase(-283, MoonPhase::NewMoon);
        assert_abs_diff_eq!(moon_age(new + 5.0), 5.0, epsilon = 1e-9);
        assert!(moon_age(new - 1.0) > 27.0);
    }

    #[test]
    fn test_lunation_number() {
        assert_abs_diff_eq!(lunation_number(1977.13), -283.0, epsilon = 0.3);
    }
}
