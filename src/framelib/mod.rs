//! Frame corrections applied on the way from a geometric to an apparent place
//!
//! - [`aberration`]: annual aberration for ecliptic and equatorial
//!   coordinates (Meeus 23.2, 23.3)
//! - [`fk5`]: conversion from the VSOP dynamical frame to FK5 (Meeus 32.3)
//! - [`apparent`]: nutation in equatorial coordinates (Meeus 23.1) and the
//!   full apparent place of a star
//!
//! Precession and the nutation angles themselves live in
//! [`crate::precessionlib`] and [`crate::nutationlib`].

pub mod aberration;
pub mod apparent;
pub mod fk5;

use crate::coordinates::angle::Angle;
use crate::{EphemerisError, Result};

/// Cosine of a latitude-like angle, rejecting the poles
///
/// Several corrections divide by this value.
pub(crate) fn checked_cos(angle: Angle, what: &str) -> Result<f64> {
    let c = angle.cos();
    if c.abs() < f64::EPSILON {
        return Err(EphemerisError::DomainError(format!(
            "{} correction is undefined at a pole ({})",
            what, angle
        )));
    }
    Ok(c)
}
