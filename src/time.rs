//! # Calendar dates, Julian Day and sidereal time
//!
//! The engine's internal time axis is the plain Julian Day (`f64`). [`CalendarDate`] is the
//! validated calendar representation: the Julian calendar is used up to 1582-10-04 and the
//! Gregorian calendar from 1582-10-15, the ten days in between do not exist. `hifitime`
//! [`Epoch`]s are accepted and produced at the API boundary.
use std::fmt;
use std::str::FromStr;

use hifitime::Epoch;
use serde::{Deserialize, Serialize};

use crate::almanac_errors::AlmanacError;
use crate::constants::{
    Degree, JulianDay, DAYS_PER_JULIAN_CENTURY, DAYS_PER_JULIAN_MILLENNIUM, DEG_PER_HOUR, J2000,
    SECONDS_PER_DAY,
};
use crate::coordinates::coordinate::{Coordinate, DayHours, FullCircle};
use crate::coordinates::geographical::GeographicalCoordinates;
use crate::earth_orientation::{equation_of_equinoxes, nutation, Nutation};

/// A calendar instant (UTC or dynamical time, depending on the caller) with a validated date.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CalendarDate {
    year: i32,
    month: u8,
    day: u8,
    hour: u8,
    minute: u8,
    second: f64,
}

impl CalendarDate {
    /// Build a validated calendar date.
    ///
    /// Arguments
    /// ---------
    /// * `year`: astronomical year (year 0 is 1 BC, −4712 is 4713 BC).
    /// * `month`, `day`, `hour`, `minute`, `second`: usual calendar fields.
    ///
    /// Errors
    /// ------
    /// * [`AlmanacError::InvalidDate`] for out-of-range fields, for the ten days
    ///   1582-10-05..=1582-10-14 that the Gregorian reform removed, and for any instant before
    ///   Julian Day 0 (−4712-01-01 12:00).
    pub fn new(
        year: i32,
        month: u8,
        day: u8,
        hour: u8,
        minute: u8,
        second: f64,
    ) -> Result<Self, AlmanacError> {
        if !(1..=12).contains(&month) {
            return Err(AlmanacError::InvalidDate(format!("month {month}")));
        }
        if day == 0 || day > days_in_month(year, month) {
            return Err(AlmanacError::InvalidDate(format!(
                "day {day} of {year}-{month:02}"
            )));
        }
        if year == 1582 && month == 10 && (5..=14).contains(&day) {
            return Err(AlmanacError::InvalidDate(format!(
                "1582-10-{day:02} does not exist in the Julian or Gregorian calendar"
            )));
        }
        if hour > 23 || minute > 59 || !(0.0..60.0).contains(&second) {
            return Err(AlmanacError::InvalidDate(format!(
                "time of day {hour:02}:{minute:02}:{second}"
            )));
        }

        let date = CalendarDate {
            year,
            month,
            day,
            hour,
            minute,
            second,
        };
        if date.julian_day() < 0.0 {
            return Err(AlmanacError::InvalidDate(format!(
                "{date} is before Julian Day 0"
            )));
        }
        Ok(date)
    }

    /// Midnight at the start of the given day.
    pub fn from_ymd(year: i32, month: u8, day: u8) -> Result<Self, AlmanacError> {
        CalendarDate::new(year, month, day, 0, 0, 0.0)
    }

    /// Inverse of [`CalendarDate::julian_day`].
    pub fn from_julian_day(jd: JulianDay) -> Result<Self, AlmanacError> {
        from_julian_day(jd)
    }

    /// Convert a `hifitime` epoch through its UTC Julian Day.
    pub fn from_epoch(epoch: Epoch) -> Result<Self, AlmanacError> {
        from_julian_day(epoch.to_jde_utc_days())
    }

    /// The same instant as a `hifitime` epoch in the UTC scale.
    pub fn to_epoch(&self) -> Epoch {
        Epoch::from_jde_utc(self.julian_day())
    }

    pub fn julian_day(&self) -> JulianDay {
        julian_day(self)
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u8 {
        self.month
    }

    pub fn day(&self) -> u8 {
        self.day
    }

    pub fn hour(&self) -> u8 {
        self.hour
    }

    pub fn minute(&self) -> u8 {
        self.minute
    }

    pub fn second(&self) -> f64 {
        self.second
    }

    /// Time of day as a fraction of the day, in `[0, 1)`.
    pub fn day_fraction(&self) -> f64 {
        (f64::from(self.hour) * 3600.0 + f64::from(self.minute) * 60.0 + self.second)
            / SECONDS_PER_DAY
    }

    /// Year with the month as fraction, `y + (m − 0.5)/12`, as used by the ΔT polynomials.
    pub fn decimal_year(&self) -> f64 {
        f64::from(self.year) + (f64::from(self.month) - 0.5) / 12.0
    }

    /// Whether the date falls on or after the Gregorian reform (1582-10-15).
    pub fn is_gregorian(&self) -> bool {
        (self.year, self.month, self.day) >= (1582, 10, 15)
    }

    /// 0h of the same calendar day.
    pub fn midnight(&self) -> CalendarDate {
        CalendarDate {
            hour: 0,
            minute: 0,
            second: 0.0,
            ..*self
        }
    }

    /// Shift by a (possibly fractional, possibly negative) number of days.
    pub fn add_days(&self, days: f64) -> Result<CalendarDate, AlmanacError> {
        from_julian_day(self.julian_day() + days)
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02} {:02}:{:02}:{:06.3}",
            self.year, self.month, self.day, self.hour, self.minute, self.second
        )
    }
}

impl FromStr for CalendarDate {
    type Err = AlmanacError;

    /// Parse a date in the format `YYYY MM DD.FFFFF` (fractional day).
    fn from_str(date_str: &str) -> Result<Self, Self::Err> {
        let invalid = || AlmanacError::InvalidDate(format!("expected YYYY MM DD.FFFFF: {date_str}"));
        let parts: Vec<&str> = date_str.split_whitespace().collect();
        if parts.len() != 3 {
            return Err(invalid());
        }

        let year = i32::from_str(parts[0]).map_err(|_| invalid())?;
        let month = u8::from_str(parts[1]).map_err(|_| invalid())?;
        let day_fraction = f64::from_str(parts[2]).map_err(|_| invalid())?;
        if !(1.0..32.0).contains(&day_fraction) {
            return Err(invalid());
        }

        // Separation of day and fraction day
        let day = day_fraction.trunc() as u8;
        let (hour, minute, second) = split_day_fraction(day_fraction - f64::from(day));
        CalendarDate::new(year, month, day, hour, minute, second)
    }
}

fn is_leap_year(year: i32, gregorian: bool) -> bool {
    if gregorian {
        (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
    } else {
        year.rem_euclid(4) == 0
    }
}

fn days_in_month(year: i32, month: u8) -> u8 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        _ => {
            if is_leap_year(year, year > 1582) {
                29
            } else {
                28
            }
        }
    }
}

/// Split a day fraction into hours, minutes and seconds, rounded to the microsecond.
fn split_day_fraction(fraction: f64) -> (u8, u8, f64) {
    let micros = (fraction * SECONDS_PER_DAY * 1e6).round().min(SECONDS_PER_DAY * 1e6 - 1.0);
    let seconds = micros / 1e6;
    let hour = (seconds / 3600.0).floor();
    let minute = ((seconds - hour * 3600.0) / 60.0).floor();
    let second = seconds - hour * 3600.0 - minute * 60.0;
    (hour as u8, minute as u8, second.max(0.0))
}

/// Julian Day of a calendar date.
///
/// Arguments
/// ---------
/// * `date`: a validated [`CalendarDate`]; Julian calendar before 1582-10-15, Gregorian after.
///
/// Returns
/// --------
/// * The Julian Day, with the time of day as fraction.
///
/// Formula
/// -------
/// ```text
/// JD = ⌊365.25 (Y + 4716)⌋ + ⌊30.6001 (M + 1)⌋ + D + B − 1524.5
/// ```
/// where January and February count as months 13 and 14 of the previous year, and
/// `B = 2 − A + ⌊A/4⌋` with `A = ⌊Y/100⌋` in the Gregorian calendar, `B = 0` otherwise.
pub fn julian_day(date: &CalendarDate) -> JulianDay {
    let (mut y, mut m) = (f64::from(date.year), f64::from(date.month));
    if date.month <= 2 {
        y -= 1.0;
        m += 12.0;
    }
    let b = if date.is_gregorian() {
        let a = (y / 100.0).floor();
        2.0 - a + (a / 4.0).floor()
    } else {
        0.0
    };

    (365.25 * (y + 4716.0)).floor()
        + (30.6001 * (m + 1.0)).floor()
        + f64::from(date.day)
        + date.day_fraction()
        + b
        - 1524.5
}

/// Calendar date of a Julian Day.
///
/// Errors
/// ------
/// * [`AlmanacError::InvalidDate`] if `jd` is negative or not finite.
pub fn from_julian_day(jd: JulianDay) -> Result<CalendarDate, AlmanacError> {
    if !jd.is_finite() {
        return Err(AlmanacError::InvalidDate(format!(
            "Julian Day {jd} is not finite"
        )));
    }
    if jd < 0.0 {
        return Err(AlmanacError::InvalidDate(format!(
            "Julian Day {jd} is negative"
        )));
    }

    let shifted = jd + 0.5;
    let z = shifted.floor();
    let f = shifted - z;

    let a = if z < 2_299_161.0 {
        z
    } else {
        let alpha = ((z - 1_867_216.25) / 36_524.25).floor();
        z + 1.0 + alpha - (alpha / 4.0).floor()
    };
    let b = a + 1524.0;
    let c = ((b - 122.1) / 365.25).floor();
    let d = (365.25 * c).floor();
    let e = ((b - d) / 30.6001).floor();

    let day = b - d - (30.6001 * e).floor();
    let month = if e < 14.0 { e - 1.0 } else { e - 13.0 };
    let year = if month > 2.0 { c - 4716.0 } else { c - 4715.0 };

    let (hour, minute, second) = split_day_fraction(f);
    Ok(CalendarDate {
        year: year as i32,
        month: month as u8,
        day: day as u8,
        hour,
        minute,
        second,
    })
}

/// Julian centuries of 36525 days since J2000.
pub fn julian_centuries(jd: JulianDay) -> f64 {
    (jd - J2000) / DAYS_PER_JULIAN_CENTURY
}

/// Julian millennia of 365250 days since J2000.
pub fn julian_millennia(jd: JulianDay) -> f64 {
    (jd - J2000) / DAYS_PER_JULIAN_MILLENNIUM
}

/// Greenwich mean sidereal time, in degrees `[0, 360)`.
///
/// Arguments
/// ---------
/// * `jd_ut`: Julian Day in Universal Time, any time of day.
///
/// Formula
/// -------
/// ```text
/// θ₀ = 280.46061837° + 360.98564736629° (JD − 2451545.0) + 0.000387933° T² − T³ / 38710000
/// ```
pub fn greenwich_mean_sidereal_time(jd_ut: JulianDay) -> Degree {
    let t = julian_centuries(jd_ut);
    let theta = 280.46061837 + 360.98564736629 * (jd_ut - J2000) + 0.000387933 * t * t
        - t * t * t / 38_710_000.0;
    Coordinate::<FullCircle>::new(theta).value()
}

/// Greenwich apparent sidereal time, in degrees `[0, 360)`.
///
/// The mean sidereal time corrected by the equation of the equinoxes `Δψ · cos ε`. When
/// `nutation` is `None` it is computed from `jd_ut`.
pub fn greenwich_apparent_sidereal_time(jd_ut: JulianDay, nutation_at: Option<&Nutation>) -> Degree {
    let correction = match nutation_at {
        Some(nut) => equation_of_equinoxes(nut),
        None => equation_of_equinoxes(&nutation(jd_ut)),
    };
    Coordinate::<FullCircle>::new(greenwich_mean_sidereal_time(jd_ut) + correction).value()
}

/// Local mean sidereal time at the observer, in hours `[0, 24)`.
pub fn mean_sidereal_time(
    date: &CalendarDate,
    geo_coords: &GeographicalCoordinates,
) -> Coordinate<DayHours> {
    let theta = greenwich_mean_sidereal_time(date.julian_day()) + geo_coords.longitude();
    Coordinate::new(theta / DEG_PER_HOUR)
}

/// Local apparent sidereal time at the observer, in hours `[0, 24)`.
///
/// See also
/// --------
/// * [`greenwich_apparent_sidereal_time`] – the Greenwich value this is offset from.
pub fn apparent_sidereal_time(
    date: &CalendarDate,
    geo_coords: &GeographicalCoordinates,
    nutation_at: Option<&Nutation>,
) -> Coordinate<DayHours> {
    let theta = greenwich_apparent_sidereal_time(date.julian_day(), nutation_at)
        + geo_coords.longitude();
    Coordinate::new(theta / DEG_PER_HOUR)
}
