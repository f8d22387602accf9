//! # Angle Representation Module
//!
//! This module provides the angular quantity every other part of the crate
//! is built on.
//!
//! ## Internal Storage
//!
//! An `Angle` is a single `f64` in radians. Constructors accept degrees,
//! arcseconds, sexagesimal components or hours of right ascension, and
//! convert once at construction. Accessors (`degrees()`, `hours()`, ...)
//! convert back on request.
//!
//! ## Normalization and Comparison
//!
//! Stored values are never wrapped implicitly. `normalize()` maps a value
//! into `[0, 2π)`; equality and ordering compare raw radians, so callers
//! normalize both sides before comparing across the wrap point.
//!
//! ## Examples
//!
//! ```rust
//! use meeus_ephem::coordinates::angle::Angle;
//!
//! let a = Angle::from_sexagesimal(true, 23, 26, 21.448);
//! assert!((a.degrees() - 23.439291).abs() < 1e-6);
//!
//! let wrapped = Angle::from_degrees(-30.0).normalize();
//! assert!((wrapped.degrees() - 330.0).abs() < 1e-12);
//! ```

use std::f64::consts::PI;
use std::fmt;
use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};

use serde::{Deserialize, Serialize};

use crate::constants::{ASEC2RAD, SEC2RAD, TAU};
use crate::{EphemerisError, Result};

/// An angular measurement stored in radians
///
/// `Angle` is an immutable value type; arithmetic returns new instances.
/// Trigonometric accessors are pure functions of the stored radian value.
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Angle(f64);

impl Angle {
    /// The zero angle
    pub const ZERO: Angle = Angle(0.0);

    /// Creates an angle from a value in radians
    ///
    /// # Examples
    ///
    /// ```rust
    /// use meeus_ephem::coordinates::angle::Angle;
    ///
    /// let right_angle = Angle::from_radians(std::f64::consts::PI / 2.0);
    /// assert_eq!(right_angle.radians(), std::f64::consts::PI / 2.0);
    /// ```
    pub const fn from_radians(radians: f64) -> Self {
        Angle(radians)
    }

    /// Creates an angle from a value in degrees
    ///
    /// # Examples
    ///
    /// ```rust
    /// use meeus_ephem::coordinates::angle::Angle;
    ///
    /// let right_angle = Angle::from_degrees(90.0);
    /// assert!((right_angle.degrees() - 90.0).abs() < 1e-12);
    /// ```
    pub fn from_degrees(degrees: f64) -> Self {
        Angle(degrees.to_radians())
    }

    /// Creates an angle from a value in arcseconds
    pub fn from_arcseconds(arcseconds: f64) -> Self {
        Angle(arcseconds * ASEC2RAD)
    }

    /// Creates an angle from sexagesimal degrees, minutes and seconds
    ///
    /// The sign is carried separately so that values such as −0°30′ can be
    /// expressed; the component fields are taken as magnitudes.
    ///
    /// # Arguments
    ///
    /// * `positive` - `false` for a negative angle
    /// * `degrees` - Whole degrees
    /// * `minutes` - Whole arcminutes
    /// * `seconds` - Arcseconds, possibly fractional
    ///
    /// # Examples
    ///
    /// ```rust
    /// use meeus_ephem::coordinates::angle::Angle;
    ///
    /// let dec = Angle::from_sexagesimal(false, 11, 9, 40.71);
    /// assert!(dec.degrees() < 0.0);
    /// ```
    pub fn from_sexagesimal(positive: bool, degrees: u32, minutes: u32, seconds: f64) -> Self {
        let magnitude =
            (f64::from(degrees) * 3600.0 + f64::from(minutes) * 60.0 + seconds.abs()) * ASEC2RAD;
        Angle(if positive { magnitude } else { -magnitude })
    }

    /// Creates an angle from hours, minutes and seconds of time
    ///
    /// Used for right ascension, where one hour is 15 degrees.
    pub fn from_hms(hours: u32, minutes: u32, seconds: f64) -> Self {
        Angle((f64::from(hours) * 3600.0 + f64::from(minutes) * 60.0 + seconds) * SEC2RAD)
    }

    /// Creates an angle from seconds of time (15 arcseconds each)
    pub fn from_time_seconds(seconds: f64) -> Self {
        Angle(seconds * SEC2RAD)
    }

    /// Creates an angle from hours of time
    pub fn from_hours(hours: f64) -> Self {
        Angle(hours * PI / 12.0)
    }

    /// Returns the angle value in radians
    pub const fn radians(&self) -> f64 {
        self.0
    }

    /// Returns the angle value in degrees
    pub fn degrees(&self) -> f64 {
        self.0.to_degrees()
    }

    /// Returns the angle value in arcseconds
    pub fn arcseconds(&self) -> f64 {
        self.0 / ASEC2RAD
    }

    /// Returns the angle expressed as hours of time
    pub fn hours(&self) -> f64 {
        self.0 * 12.0 / PI
    }

    /// Returns the angle expressed as seconds of time
    pub fn time_seconds(&self) -> f64 {
        self.0 / SEC2RAD
    }

    /// Sine of the angle
    pub fn sin(&self) -> f64 {
        self.0.sin()
    }

    /// Cosine of the angle
    pub fn cos(&self) -> f64 {
        self.0.cos()
    }

    /// Tangent of the angle
    pub fn tan(&self) -> f64 {
        self.0.tan()
    }

    /// Sine and cosine of the angle, computed together
    pub fn sin_cos(&self) -> (f64, f64) {
        self.0.sin_cos()
    }

    /// Maps the angle into `[0, 2π)`
    ///
    /// Idempotent: normalizing an already normalized angle returns it
    /// unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use meeus_ephem::coordinates::angle::Angle;
    ///
    /// let a = Angle::from_degrees(725.0).normalize();
    /// assert!((a.degrees() - 5.0).abs() < 1e-9);
    /// assert_eq!(a.normalize(), a);
    /// ```
    pub fn normalize(&self) -> Angle {
        let r = self.0.rem_euclid(TAU);
        // rem_euclid can round up to exactly TAU for tiny negative inputs
        Angle(if r >= TAU { 0.0 } else { r })
    }

    /// Maps the angle into `[-π, π)`
    pub fn normalize_signed(&self) -> Angle {
        let r = self.normalize().0;
        Angle(if r >= PI { r - TAU } else { r })
    }

    /// Absolute value of the angle
    pub fn abs(&self) -> Angle {
        Angle(self.0.abs())
    }

    /// Divides the angle by a scalar, failing on a zero divisor
    ///
    /// # Errors
    ///
    /// Returns [`EphemerisError::DomainError`] when `divisor` is zero or not
    /// finite.
    pub fn try_div(&self, divisor: f64) -> Result<Angle> {
        if divisor == 0.0 || !divisor.is_finite() {
            return Err(EphemerisError::DomainError(format!(
                "cannot divide angle {} by {}",
                self, divisor
            )));
        }
        Ok(Angle(self.0 / divisor))
    }

    /// Ratio of two angles, failing when the denominator is the zero angle
    pub fn try_ratio(&self, other: Angle) -> Result<f64> {
        if other.0 == 0.0 {
            return Err(EphemerisError::DomainError(
                "division by a zero angle".to_string(),
            ));
        }
        Ok(self.0 / other.0)
    }

    /// Splits the absolute value into whole degrees, minutes and seconds
    ///
    /// Returns `(positive, degrees, minutes, seconds)`.
    pub fn to_sexagesimal(&self) -> (bool, u32, u32, f64) {
        let total = self.arcseconds().abs();
        let degrees = (total / 3600.0).floor();
        let minutes = ((total - degrees * 3600.0) / 60.0).floor();
        let seconds = total - degrees * 3600.0 - minutes * 60.0;
        (self.0 >= 0.0, degrees as u32, minutes as u32, seconds)
    }
}

impl fmt::Display for Angle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (positive, d, m, s) = self.to_sexagesimal();
        let sign = if positive { "" } else { "-" };
        write!(f, "{}{}°{:02}′{:06.3}″", sign, d, m, s)
    }
}

impl Add for Angle {
    type Output = Angle;
    fn add(self, rhs: Angle) -> Angle {
        Angle(self.0 + rhs.0)
    }
}

impl AddAssign for Angle {
    fn add_assign(&mut self, rhs: Angle) {
        self.0 += rhs.0;
    }
}

impl Sub for Angle {
    type Output = Angle;
    fn sub(self, rhs: Angle) -> Angle {
        Angle(self.0 - rhs.0)
    }
}

impl SubAssign for Angle {
    fn sub_assign(&mut self, rhs: Angle) {
        self.0 -= rhs.0;
    }
}

impl Neg for Angle {
    type Output = Angle;
    fn neg(self) -> Angle {
        Angle(-self.0)
    }
}

impl Mul<f64> for Angle {
    type Output = Angle;
    fn mul(self, rhs: f64) -> Angle {
        Angle(self.0 * rhs)
    }
}

impl Mul<Angle> for f64 {
    type Output = Angle;
    fn mul(self, rhs: Angle) -> Angle {
        Angle(self * rhs.0)
    }
}

// Unchecked division for divisors that are constants or known to be
// non-zero; use `try_div` otherwise.
impl Div<f64> for Angle {
    type Output = Angle;
    fn div(self, rhs: f64) -> Angle {
        Angle(self.0 / rhs)
    }
}
