//! Time module for Julian day and calendar conversions
//!
//! Every periodic series in the crate is evaluated in Julian centuries from
//! J2000.0 as produced by [`julian_centuries`]. Calendar dates go through
//! Meeus (7.1) and its inverse. No ΔT correction is applied: a Julian day
//! built from a calendar date is used directly as a Julian ephemeris day.

use chrono::{DateTime, Utc};
use std::fmt;

use crate::constants::{DAY_S, GREGORIAN_START, J2000, JULIAN_CENTURY, JULIAN_YEAR};
use crate::numeric::floor_div;
use crate::{EphemerisError, Result};

/// Julian day of the Unix epoch, 1970-01-01T00:00:00 UTC
const UNIX_EPOCH_JD: f64 = 2_440_587.5;

/// Calendar tuple for representing a date and time
#[derive(Debug, Clone, PartialEq)]
pub struct CalendarTuple {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: f64,
}

impl CalendarTuple {
    /// Day of month with the time of day folded in as a fraction
    pub fn fractional_day(&self) -> f64 {
        f64::from(self.day)
            + (f64::from(self.hour) * 3600.0 + f64::from(self.minute) * 60.0 + self.second)
                / DAY_S
    }
}

impl fmt::Display for CalendarTuple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02}T{:02}:{:02}:{:06.3}",
            self.year, self.month, self.day, self.hour, self.minute, self.second
        )
    }
}

/// Julian day for a date in the proleptic Gregorian calendar
///
/// Valid for any result JD ≥ 0; negative (astronomical) years are allowed.
///
/// # Examples
///
/// ```rust
/// use meeus_ephem::time::calendar_gregorian_to_jd;
///
/// assert_eq!(calendar_gregorian_to_jd(1957, 10, 4.81), 2436116.31);
/// ```
pub fn calendar_gregorian_to_jd(year: i32, month: u32, day: f64) -> f64 {
    let (y, m) = shift_january_february(year, month);
    let a = floor_div(y, 100);
    let b = 2 - a + floor_div(a, 4);
    days_before(y, m) + (b as f64) + day - 1524.5
}

/// Julian day for a date in the Julian calendar
pub fn calendar_julian_to_jd(year: i32, month: u32, day: f64) -> f64 {
    let (y, m) = shift_january_february(year, month);
    days_before(y, m) + day - 1524.5
}

/// Julian day for a historical date
///
/// Dates before 1582-10-15 are read in the Julian calendar, later ones in the
/// Gregorian calendar.
pub fn calendar_to_jd(year: i32, month: u32, day: f64) -> f64 {
    if (year, month, day) < (1582, 10, 15.0) {
        calendar_julian_to_jd(year, month, day)
    } else {
        calendar_gregorian_to_jd(year, month, day)
    }
}

fn shift_january_february(year: i32, month: u32) -> (i64, i64) {
    let (y, m) = (i64::from(year), i64::from(month));
    if m <= 2 {
        (y - 1, m + 12)
    } else {
        (y, m)
    }
}

fn days_before(y: i64, m: i64) -> f64 {
    (floor_div(36525 * (y + 4716), 100) + floor_div(306 * (m + 1), 10)) as f64
}

/// Calendar date for a Julian day
///
/// Returns `(year, month, fractional_day)`. Days from JD 2299161
/// (1582-10-15) onward are Gregorian, earlier ones Julian.
///
/// # Errors
///
/// [`EphemerisError::DomainError`] for a negative or non-finite Julian day.
pub fn jd_to_calendar(jd: f64) -> Result<(i32, u32, f64)> {
    if !jd.is_finite() || jd < 0.0 {
        return Err(EphemerisError::DomainError(format!(
            "calendar conversion is undefined for JD {}",
            jd
        )));
    }
    let shifted = jd + 0.5;
    let z = shifted.floor();
    let f = shifted - z;
    let z = z as i64;

    let a = if z >= GREGORIAN_START {
        let alpha = floor_div(z * 100 - 186_721_625, 3_652_425);
        z + 1 + alpha - floor_div(alpha, 4)
    } else {
        z
    };
    let b = a + 1524;
    let c = floor_div(b * 100 - 12_210, 36_525);
    let d = floor_div(36_525 * c, 100);
    let e = floor_div((b - d) * 10_000, 306_001);

    let day = (b - d - floor_div(306_001 * e, 10_000)) as f64 + f;
    let month = if e < 14 { e - 1 } else { e - 13 };
    let year = if month > 2 { c - 4716 } else { c - 4715 };
    Ok((year as i32, month as u32, day))
}

/// Calendar date and time of day for a Julian day
pub fn jd_to_calendar_tuple(jd: f64) -> Result<CalendarTuple> {
    let (year, month, fday) = jd_to_calendar(jd)?;
    let day = fday.floor();
    let seconds_in_day = (fday - day) * DAY_S;
    let hour = (seconds_in_day / 3600.0).floor();
    let minute = ((seconds_in_day - hour * 3600.0) / 60.0).floor();
    let second = seconds_in_day - hour * 3600.0 - minute * 60.0;

    Ok(CalendarTuple {
        year,
        month,
        day: day as u32,
        hour: hour as u32,
        minute: minute as u32,
        second,
    })
}

/// Julian centuries since J2000.0
pub fn julian_centuries(jd: f64) -> f64 {
    (jd - J2000) / JULIAN_CENTURY
}

/// Julian epoch year (e.g. 2000.0) for a Julian ephemeris day
pub fn jde_to_julian_year(jde: f64) -> f64 {
    2000.0 + (jde - J2000) / JULIAN_YEAR
}

/// Julian ephemeris day for a Julian epoch year
pub fn julian_year_to_jde(year: f64) -> f64 {
    J2000 + (year - 2000.0) * JULIAN_YEAR
}

/// Julian day for a UTC instant
pub fn datetime_to_jd(dt: &DateTime<Utc>) -> f64 {
    let seconds = dt.timestamp() as f64 + f64::from(dt.timestamp_subsec_nanos()) * 1e-9;
    UNIX_EPOCH_JD + seconds / DAY_S
}

/// Day of month with a local clock time folded in
///
/// `tz_hours` is the zone offset from UTC, negative west of Greenwich, so
/// 06:45 at UTC−5 becomes 11:45 UTC.
pub fn fractional_day(day: u32, hour: u32, minute: u32, second: f64, tz_hours: f64) -> f64 {
    f64::from(day)
        + (f64::from(hour) - tz_hours) / 24.0
        + f64::from(minute) / 1440.0
        + second / DAY_S
}
