//! # Position of the Moon
//!
//! Geocentric longitude, latitude and distance from the main periodic terms of the ELP-2000/82
//! theory (about 10″ in longitude and 4″ in latitude), plus the quantities derived from them:
//! apparent place, horizontal parallax, semidiameter, illuminated fraction and position angle of
//! the bright limb.
//!
//! All arguments are in dynamical time.
use serde::{Deserialize, Serialize};

use crate::constants::{Degree, JulianDay, Kilometer, AU, H0_STAR, LIGHT_TIME_PER_AU, RADEG};
use crate::coordinates::{Coordinate, EclipticalCoordinates, FullCircle};
use crate::earth_orientation::nutation;
use crate::planets::apparent::ApparentPosition;
use crate::planets::sun;
use crate::time::julian_centuries;

/// Earth equatorial radius used by the lunar parallax, km
const EARTH_RADIUS_KM: Kilometer = 6378.14;

/// Mean distance of the Moon, km
const MEAN_DISTANCE: Kilometer = 385_000.56;

/// Semidiameter constant: `s = SEMIDIAMETER_CONSTANT / Δ` arcseconds with `Δ` in km
const SEMIDIAMETER_CONSTANT: f64 = 358_473_400.0;

/// One term of the lunar series: multiples of `D`, `M`, `M′`, `F` and two coefficients
/// (`Σl`, `Σr` for the longitude/distance table, `Σb` and zero for the latitude table).
#[derive(Debug, Clone, Copy)]
struct LunarTerm {
    d: i8,
    m: i8,
    mp: i8,
    f: i8,
    sine: f64,
    cosine: f64,
}

impl LunarTerm {
    const fn new(d: i8, m: i8, mp: i8, f: i8, sine: f64, cosine: f64) -> Self {
        LunarTerm {
            d,
            m,
            mp,
            f,
            sine,
            cosine,
        }
    }

    /// Argument in radians and the eccentricity factor `E^|m|`.
    fn argument(&self, args: &LunarArguments) -> (f64, f64) {
        let angle = (self.d as f64 * args.d
            + self.m as f64 * args.m
            + self.mp as f64 * args.mp
            + self.f as f64 * args.f)
            * RADEG;
        let factor = match self.m.abs() {
            0 => 1.0,
            1 => args.e,
            _ => args.e * args.e,
        };
        (angle, factor)
    }
}

/// Σl and Σr, units of 10⁻⁶ degree and 10⁻³ km.
const LONGITUDE_DISTANCE_TERMS: [LunarTerm; 60] = [
    LunarTerm::new(0, 0, 1, 0, 6288774.0, -20905355.0),
    LunarTerm::new(2, 0, -1, 0, 1274027.0, -3699111.0),
    LunarTerm::new(2, 0, 0, 0, 658314.0, -2955968.0),
    LunarTerm::new(0, 0, 2, 0, 213618.0, -569925.0),
    LunarTerm::new(0, 1, 0, 0, -185116.0, 48888.0),
    LunarTerm::new(0, 0, 0, 2, -114332.0, -3149.0),
    LunarTerm::new(2, 0, -2, 0, 58793.0, 246158.0),
    LunarTerm::new(2, -1, -1, 0, 57066.0, -152138.0),
    LunarTerm::new(2, 0, 1, 0, 53322.0, -170733.0),
    LunarTerm::new(2, -1, 0, 0, 45758.0, -204586.0),
    LunarTerm::new(0, 1, -1, 0, -40923.0, -129620.0),
    LunarTerm::new(1, 0, 0, 0, -34720.0, 108743.0),
    LunarTerm::new(0, 1, 1, 0, -30383.0, 104755.0),
    LunarTerm::new(2, 0, 0, -2, 15327.0, 10321.0),
    LunarTerm::new(0, 0, 1, 2, -12528.0, 0.0),
    LunarTerm::new(0, 0, 1, -2, 10980.0, 79661.0),
    LunarTerm::new(4, 0, -1, 0, 10675.0, -34782.0),
    LunarTerm::new(0, 0, 3, 0, 10034.0, -23210.0),
    LunarTerm::new(4, 0, -2, 0, 8548.0, -21636.0),
    LunarTerm::new(2, 1, -1, 0, -7888.0, 24208.0),
    LunarTerm::new(2, 1, 0, 0, -6766.0, 30824.0),
    LunarTerm::new(1, 0, -1, 0, -5163.0, -8379.0),
    LunarTerm::new(1, 1, 0, 0, 4987.0, -16675.0),
    LunarTerm::new(2, -1, 1, 0, 4036.0, -12831.0),
    LunarTerm::new(2, 0, 2, 0, 3994.0, -10445.0),
    LunarTerm::new(4, 0, 0, 0, 3861.0, -11650.0),
    LunarTerm::new(2, 0, -3, 0, 3665.0, 14403.0),
    LunarTerm::new(0, 1, -2, 0, -2689.0, -7003.0),
    LunarTerm::new(2, 0, -1, 2, -2602.0, 0.0),
    LunarTerm::new(2, -1, -2, 0, 2390.0, 10056.0),
    LunarTerm::new(1, 0, 1, 0, -2348.0, 6322.0),
    LunarTerm::new(2, -2, 0, 0, 2236.0, -9884.0),
    LunarTerm::new(0, 1, 2, 0, -2120.0, 5751.0),
    LunarTerm::new(0, 2, 0, 0, -2069.0, 0.0),
    LunarTerm::new(2, -2, -1, 0, 2048.0, -4950.0),
    LunarTerm::new(2, 0, 1, -2, -1773.0, 4130.0),
    LunarTerm::new(2, 0, 0, 2, -1595.0, 0.0),
    LunarTerm::new(4, -1, -1, 0, 1215.0, -3958.0),
    LunarTerm::new(0, 0, 2, 2, -1110.0, 0.0),
    LunarTerm::new(3, 0, -1, 0, -892.0, 3258.0),
    LunarTerm::new(2, 1, 1, 0, -810.0, 2616.0),
    LunarTerm::new(4, -1, -2, 0, 759.0, -1897.0),
    LunarTerm::new(0, 2, -1, 0, -713.0, -2117.0),
    LunarTerm::new(2, 2, -1, 0, -700.0, 2354.0),
    LunarTerm::new(2, 1, -2, 0, 691.0, 0.0),
    LunarTerm::new(2, -1, 0, -2, 596.0, 0.0),
    LunarTerm::new(4, 0, 1, 0, 549.0, -1423.0),
    LunarTerm::new(0, 0, 4, 0, 537.0, -1117.0),
    LunarTerm::new(4, -1, 0, 0, 520.0, -1571.0),
    LunarTerm::new(1, 0, -2, 0, -487.0, -1739.0),
    LunarTerm::new(2, 1, 0, -2, -399.0, 0.0),
    LunarTerm::new(0, 0, 2, -2, -381.0, -4421.0),
    LunarTerm::new(1, 1, 1, 0, 351.0, 0.0),
    LunarTerm::new(3, 0, -2, 0, -340.0, 0.0),
    LunarTerm::new(4, 0, -3, 0, 330.0, 0.0),
    LunarTerm::new(2, -1, 2, 0, 327.0, 0.0),
    LunarTerm::new(0, 2, 1, 0, -323.0, 1165.0),
    LunarTerm::new(1, 1, -1, 0, 299.0, 0.0),
    LunarTerm::new(2, 0, 3, 0, 294.0, 0.0),
    LunarTerm::new(2, 0, -1, -2, 0.0, 8752.0),];

/// Σb, units of 10⁻⁶ degree.
const LATITUDE_TERMS: [LunarTerm; 60] = [
    LunarTerm::new(0, 0, 0, 1, 5128122.0, 0.0),
    LunarTerm::new(0, 0, 1, 1, 280602.0, 0.0),
    LunarTerm::new(0, 0, 1, -1, 277693.0, 0.0),
    LunarTerm::new(2, 0, 0, -1, 173237.0, 0.0),
    LunarTerm::new(2, 0, -1, 1, 55413.0, 0.0),
    LunarTerm::new(2, 0, -1, -1, 46271.0, 0.0),
    LunarTerm::new(2, 0, 0, 1, 32573.0, 0.0),
    LunarTerm::new(0, 0, 2, 1, 17198.0, 0.0),
    LunarTerm::new(2, 0, 1, -1, 9266.0, 0.0),
    LunarTerm::new(0, 0, 2, -1, 8822.0, 0.0),
    LunarTerm::new(2, -1, 0, -1, 8216.0, 0.0),
    LunarTerm::new(2, 0, -2, -1, 4324.0, 0.0),
    LunarTerm::new(2, 0, 1, 1, 4200.0, 0.0),
    LunarTerm::new(2, 1, 0, -1, -3359.0, 0.0),
    LunarTerm::new(2, -1, -1, 1, 2463.0, 0.0),
    LunarTerm::new(2, -1, 0, 1, 2211.0, 0.0),
    LunarTerm::new(2, -1, -1, -1, 2065.0, 0.0),
    LunarTerm::new(0, 1, -1, -1, -1870.0, 0.0),
    LunarTerm::new(4, 0, -1, -1, 1828.0, 0.0),
    LunarTerm::new(0, 1, 0, 1, -1794.0, 0.0),
    LunarTerm::new(0, 0, 0, 3, -1749.0, 0.0),
    LunarTerm::new(0, 1, -1, 1, -1565.0, 0.0),
    LunarTerm::new(1, 0, 0, 1, -1491.0, 0.0),
    LunarTerm::new(0, 1, 1, 1, -1475.0, 0.0),
    LunarTerm::new(0, 1, 1, -1, -1410.0, 0.0),
    LunarTerm::new(0, 1, 0, -1, -1344.0, 0.0),
    LunarTerm::new(1, 0, 0, -1, -1335.0, 0.0),
    LunarTerm::new(0, 0, 3, 1, 1107.0, 0.0),
    LunarTerm::new(4, 0, 0, -1, 1021.0, 0.0),
    LunarTerm::new(4, 0, -1, 1, 833.0, 0.0),
    LunarTerm::new(0, 0, 1, -3, 777.0, 0.0),
    LunarTerm::new(4, 0, -2, 1, 671.0, 0.0),
    LunarTerm::new(2, 0, 0, -3, 607.0, 0.0),
    LunarTerm::new(2, 0, 2, -1, 596.0, 0.0),
    LunarTerm::new(2, -1, 1, -1, 491.0, 0.0),
    LunarTerm::new(2, 0, -2, 1, -451.0, 0.0),
    LunarTerm::new(0, 0, 3, -1, 439.0, 0.0),
    LunarTerm::new(2, 0, 2, 1, 422.0, 0.0),
    LunarTerm::new(2, 0, -3, -1, 421.0, 0.0),
    LunarTerm::new(2, 1, -1, 1, -366.0, 0.0),
    LunarTerm::new(2, 1, 0, 1, -351.0, 0.0),
    LunarTerm::new(4, 0, 0, 1, 331.0, 0.0),
    LunarTerm::new(2, -1, 1, 1, 315.0, 0.0),
    LunarTerm::new(2, -2, 0, -1, 302.0, 0.0),
    LunarTerm::new(0, 0, 1, 3, -283.0, 0.0),
    LunarTerm::new(2, 1, 1, -1, -229.0, 0.0),
    LunarTerm::new(1, 1, 0, -1, 223.0, 0.0),
    LunarTerm::new(1, 1, 0, 1, 223.0, 0.0),
    LunarTerm::new(0, 1, -2, -1, -220.0, 0.0),
    LunarTerm::new(2, 1, -1, -1, -220.0, 0.0),
    LunarTerm::new(1, 0, 1, 1, -185.0, 0.0),
    LunarTerm::new(2, -1, -2, -1, 181.0, 0.0),
    LunarTerm::new(0, 1, 2, 1, -177.0, 0.0),
    LunarTerm::new(4, 0, -2, -1, 176.0, 0.0),
    LunarTerm::new(4, -1, -1, -1, 166.0, 0.0),
    LunarTerm::new(1, 0, 1, -1, -164.0, 0.0),
    LunarTerm::new(4, 0, 1, -1, 132.0, 0.0),
    LunarTerm::new(1, 0, -1, -1, -119.0, 0.0),
    LunarTerm::new(4, -1, 0, -1, 115.0, 0.0),
    LunarTerm::new(2, -2, 0, 1, 107.0, 0.0),];

/// Fundamental arguments of the lunar theory, degrees.
#[derive(Debug, Clone, Copy)]
pub(crate) struct LunarArguments {
    /// Mean longitude `L′`
    pub l: Degree,
    /// Mean elongation `D`
    pub d: Degree,
    /// Sun's mean anomaly `M`
    pub m: Degree,
    /// Moon's mean anomaly `M′`
    pub mp: Degree,
    /// Argument of latitude `F`
    pub f: Degree,
    /// Eccentricity factor of the Earth's orbit
    pub e: f64,
}

impl LunarArguments {
    pub(crate) fn at(jde: JulianDay) -> Self {
        let t = julian_centuries(jde);
        let t2 = t * t;
        let t3 = t2 * t;
        let t4 = t3 * t;
        LunarArguments {
            l: 218.3164477 + 481267.88123421 * t - 0.0015786 * t2 + t3 / 538841.0
                - t4 / 65194000.0,
            d: 297.8501921 + 445267.1114034 * t - 0.0018819 * t2 + t3 / 545868.0
                - t4 / 113065000.0,
            m: 357.5291092 + 35999.0502909 * t - 0.0001536 * t2 + t3 / 24490000.0,
            mp: 134.9633964 + 477198.8675055 * t + 0.0087414 * t2 + t3 / 69699.0
                - t4 / 14712000.0,
            f: 93.2720950 + 483202.0175233 * t - 0.0036539 * t2 - t3 / 3526000.0
                + t4 / 863310000.0,
            e: 1.0 - 0.002516 * t - 0.0000074 * t2,
        }
    }
}

/// Geometric geocentric position of the Moon, mean equinox of date.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MoonPosition {
    /// Longitude `[0, 360)`, degrees
    pub longitude: Degree,
    /// Latitude, degrees
    pub latitude: Degree,
    /// Distance between the centres of the Earth and the Moon, km
    pub distance: Kilometer,
}

/// Geocentric position of the Moon.
///
/// Arguments
/// ---------
/// * `jde`: dynamical time.
///
/// Returns
/// --------
/// * The geometric [`MoonPosition`], nutation not applied.
///
/// Formula
/// -------
/// ```text
/// λ = L′ + Σl / 10⁶,   β = Σb / 10⁶,   Δ = 385000.56 + Σr / 10³
/// ```
/// with the additive terms of Venus (`A₁`), Jupiter (`A₂`) and the flattening of the Earth
/// (`L′ − F`, `A₃`).
pub fn geocentric_position(jde: JulianDay) -> MoonPosition {
    let args = LunarArguments::at(jde);
    let t = julian_centuries(jde);
    let a1 = (119.75 + 131.849 * t) * RADEG;
    let a2 = (53.09 + 479264.290 * t) * RADEG;
    let a3 = (313.45 + 481266.484 * t) * RADEG;
    let l = args.l * RADEG;
    let f = args.f * RADEG;
    let mp = args.mp * RADEG;

    let (mut sum_l, sum_r) = LONGITUDE_DISTANCE_TERMS.iter().fold(
        (0.0, 0.0),
        |(sum_l, sum_r), term| {
            let (angle, factor) = term.argument(&args);
            (
                sum_l + term.sine * factor * angle.sin(),
                sum_r + term.cosine * factor * angle.cos(),
            )
        },
    );
    let mut sum_b: f64 = LATITUDE_TERMS
        .iter()
        .map(|term| {
            let (angle, factor) = term.argument(&args);
            term.sine * factor * angle.sin()
        })
        .sum();

    sum_l += 3958.0 * a1.sin() + 1962.0 * (l - f).sin() + 318.0 * a2.sin();
    sum_b += -2235.0 * l.sin()
        + 382.0 * a3.sin()
        + 175.0 * (a1 - f).sin()
        + 175.0 * (a1 + f).sin()
        + 127.0 * (l - mp).sin()
        - 115.0 * (l + mp).sin();

    MoonPosition {
        longitude: Coordinate::<FullCircle>::new(args.l + sum_l / 1e6).value(),
        latitude: sum_b / 1e6,
        distance: MEAN_DISTANCE + sum_r / 1e3,
    }
}

/// Apparent geocentric position of the Moon.
///
/// The longitude receives the nutation in longitude and the equatorial coordinates use the true
/// obliquity. `distance` is returned in AU like for the planets; the light time is reported but
/// not applied (about 1.3 s).
pub fn apparent_position(jde: JulianDay) -> ApparentPosition {
    let moon = geocentric_position(jde);
    let nut = nutation(jde);
    let ecliptical =
        EclipticalCoordinates::from_parts(moon.longitude + nut.longitude, moon.latitude, jde);
    let sun_distance = sun::apparent_position(jde).distance;
    let distance = moon.distance / AU;

    ApparentPosition {
        equatorial: ecliptical.to_equatorial(nut.true_obliquity),
        ecliptical,
        distance,
        heliocentric_distance: sun_distance,
        sun_distance,
        light_time: LIGHT_TIME_PER_AU * distance,
    }
}

/// Equatorial horizontal parallax `π = asin(6378.14 / Δ)`, degrees, for `Δ` in km.
pub fn horizontal_parallax(distance: Kilometer) -> Degree {
    (EARTH_RADIUS_KM / distance).asin() / RADEG
}

/// Sine of the horizontal parallax, the form expected by
/// [`crate::coordinates::EquatorialCoordinates::topocentric`].
pub fn sin_horizontal_parallax(distance: Kilometer) -> f64 {
    EARTH_RADIUS_KM / distance
}

/// Geocentric semidiameter, arcseconds, for `Δ` in km.
pub fn semidiameter(distance: Kilometer) -> f64 {
    SEMIDIAMETER_CONSTANT / distance
}

/// Standard altitude of the Moon for rising and setting: `h₀ = 0.7275 π − 0.5667°`.
pub fn standard_altitude(distance: Kilometer) -> Degree {
    0.7275 * horizontal_parallax(distance) + H0_STAR
}

/// Illumination of the Moon's disk.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MoonIllumination {
    /// Geocentric elongation from the Sun `ψ`, degrees
    pub elongation: Degree,
    /// Phase angle `i`, degrees
    pub phase_angle: Degree,
    /// Illuminated fraction `k = (1 + cos i) / 2`
    pub illuminated_fraction: f64,
    /// Position angle of the midpoint of the bright limb `χ`, degrees from north through east
    pub bright_limb_angle: Degree,
}

/// Illuminated fraction and bright limb from the apparent positions of the Moon and the Sun.
///
/// Formula
/// -------
/// ```text
/// cos ψ = sin δ₀ sin δ + cos δ₀ cos δ cos(α₀ − α)
/// tan i = R sin ψ / (Δ − R cos ψ)
/// tan χ = cos δ₀ sin(α₀ − α) / (sin δ₀ cos δ − cos δ₀ sin δ cos(α₀ − α))
/// ```
pub fn illumination(jde: JulianDay) -> MoonIllumination {
    let moon = apparent_position(jde);
    let sun = sun::apparent_position(jde);

    let alpha = moon.equatorial.right_ascension_degrees() * RADEG;
    let delta = moon.equatorial.declination() * RADEG;
    let alpha0 = sun.equatorial.right_ascension_degrees() * RADEG;
    let delta0 = sun.equatorial.declination() * RADEG;

    let cos_psi = delta0.sin() * delta.sin() + delta0.cos() * delta.cos() * (alpha0 - alpha).cos();
    let psi = cos_psi.clamp(-1.0, 1.0).acos();
    let phase_angle = (sun.distance * psi.sin()).atan2(moon.distance - sun.distance * psi.cos());

    let chi = (delta0.cos() * (alpha0 - alpha).sin()).atan2(
        delta0.sin() * delta.cos() - delta0.cos() * delta.sin() * (alpha0 - alpha).cos(),
    );

    MoonIllumination {
        elongation: psi / RADEG,
        phase_angle: phase_angle / RADEG,
        illuminated_fraction: (1.0 + phase_angle.cos()) / 2.0,
        bright_limb_angle: Coordinate::<FullCircle>::new(chi / RADEG).value(),
    }
}

/// Phase angle from the mean elongation and anomalies only (about 0.2° off).
pub fn low_accuracy_phase_angle(jde: JulianDay) -> Degree {
    let args = LunarArguments::at(jde);
    let (d, m, mp) = (args.d * RADEG, args.m * RADEG, args.mp * RADEG);
    let i = 180.0 - Coordinate::<FullCircle>::new(args.d).value() - 6.289 * mp.sin()
        + 2.100 * m.sin()
        - 1.274 * (2.0 * d - mp).sin()
        - 0.658 * (2.0 * d).sin()
        - 0.214 * (2.0 * mp).sin()
        - 0.110 * d.sin();
    Coordinate::<FullCircle>::new(i).value()
}

/// Illuminated fraction from [`low_accuracy_phase_angle`].
pub fn low_accuracy_illuminated_fraction(jde: JulianDay) -> f64 {
    (1.0 + (low_accuracy_phase_angle(jde) * RADEG).cos()) / 2.0
}
