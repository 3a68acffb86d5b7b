//! # Constants and type definitions for Almanac
//!
//! This module centralizes the **physical constants**, **conversion factors**, and **common type
//! aliases** used throughout the `almanac` library.
//!
//! ## Overview
//!
//! - Time scale anchors (J2000, Julian century and millennium lengths)
//! - Unit conversions (degrees ↔ radians, hours ↔ degrees, AU ↔ km)
//! - Earth figure and light-time constants used by the propagators
//! - Standard altitudes (`h0`) used by the rise/transit/set solver
//!
//! Angles are carried in **degrees** across the public API and converted to radians only at
//! evaluation time.

// -------------------------------------------------------------------------------------------------
// Physical constants and unit conversions
// -------------------------------------------------------------------------------------------------

/// 2π, useful for trigonometric conversions
pub const DPI: f64 = 2. * std::f64::consts::PI;

/// Number of seconds in a Julian day
pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// Astronomical Unit in kilometers (IAU 2012)
pub const AU: f64 = 149_597_870.7;

/// Julian Day of the J2000.0 epoch (2000-01-01 12:00:00 TT)
pub const J2000: f64 = 2_451_545.0;

/// Days in a Julian century
pub const DAYS_PER_JULIAN_CENTURY: f64 = 36_525.0;

/// Days in a Julian millennium
pub const DAYS_PER_JULIAN_MILLENNIUM: f64 = 365_250.0;

/// First Julian Day of the Gregorian calendar (1582-10-15 00:00)
pub const GREGORIAN_REFORM_JD: f64 = 2_299_160.5;

/// Degrees → radians
pub const RADEG: f64 = std::f64::consts::PI / 180.0;

/// Arcseconds → radians
pub const RADSEC: f64 = std::f64::consts::PI / 648000.0;

/// Hours → radians
pub const RADH: f64 = DPI / 24.0;

/// Hours → degrees
pub const DEG_PER_HOUR: f64 = 15.0;

/// Earth equatorial radius in meters (IAU 1976, the ellipsoid of the globe factors)
pub const EARTH_EQUATORIAL_RADIUS: f64 = 6_378_140.0;

/// Ratio b/a of the Earth's polar to equatorial radius (IAU 1976)
pub const EARTH_AXIS_RATIO: f64 = 0.99664719;

/// Equatorial horizontal parallax of the Sun at 1 AU, in arcseconds
pub const SOLAR_PARALLAX: f64 = 8.794;

/// Gaussian gravitational constant k (used in classical orbit dynamics)
pub const GAUSS_GRAV: f64 = 0.01720209895;

/// Mean daily motion (degrees/day) of a body with a = 1 AU
pub const MEAN_MOTION_1AU: f64 = 0.9856076686;

/// Light time for one astronomical unit, in days
pub const LIGHT_TIME_PER_AU: f64 = 0.0057755183;

/// Constant of annual aberration κ, in arcseconds
pub const ABERRATION_CONSTANT: f64 = 20.49552;

/// cos ε and sin ε for the J2000 mean obliquity (ε = 23.4392911°)
pub const COS_OBLIQUITY_J2000: f64 = 0.917482062;
pub const SIN_OBLIQUITY_J2000: f64 = 0.397777156;

/// Mean obliquity of the ecliptic at J2000, in degrees
pub const OBLIQUITY_J2000: f64 = 23.4392911;

/// Rotation of the Earth relative to the equinox, degrees per mean solar day
pub const SIDEREAL_RATE: f64 = 360.985647;

// -------------------------------------------------------------------------------------------------
// Standard altitudes for rise and set
// -------------------------------------------------------------------------------------------------

/// Stars and planets: refraction only
pub const H0_STAR: f64 = -0.5667;

/// Sun: refraction plus mean semidiameter
pub const H0_SUN: f64 = -0.8333;

/// Sun altitude at the start of civil twilight
pub const H0_CIVIL_TWILIGHT: f64 = -6.0;

/// Sun altitude at the start of nautical twilight
pub const H0_NAUTICAL_TWILIGHT: f64 = -12.0;

/// Sun altitude at the start of astronomical twilight
pub const H0_ASTRONOMICAL_TWILIGHT: f64 = -18.0;

// -------------------------------------------------------------------------------------------------
// Type aliases
// -------------------------------------------------------------------------------------------------

/// Angle in degrees
pub type Degree = f64;
/// Angle in arcseconds
pub type ArcSec = f64;
/// Angle in radians
pub type Radian = f64;
/// Angle or time in hours
pub type Hour = f64;
/// Distance in astronomical units
pub type AstronomicalUnit = f64;
/// Distance in kilometers
pub type Kilometer = f64;
/// Distance in meters
pub type Meter = f64;
/// Julian Day (days)
pub type JulianDay = f64;
