//! Apparent place of a star, Meeus chapter 23
//!
//! The apparent position combines, in order: proper motion and precession
//! to the target epoch, nutation (23.1), and annual aberration (23.3).

use super::aberration::equatorial_aberration;
use super::checked_cos;
use crate::coordinates::angle::Angle;
use crate::coordinates::Equatorial;
use crate::nutationlib::{mean_obliquity, nutation};
use crate::precessionlib::{precess_equatorial, ProperMotion};
use crate::time::julian_year_to_jde;
use crate::Result;

/// Nutation corrections (Δα, Δδ) for equatorial coordinates, Meeus (23.1)
///
/// Invalid very close to the celestial poles; exactly at a pole this fails
/// with a domain error.
pub fn nutation_correction(eq: &Equatorial, jde: f64) -> Result<(Angle, Angle)> {
    let (se, ce) = mean_obliquity(jde).sin_cos();
    let (d_psi, d_eps) = nutation(jde);
    let (sa, ca) = eq.ra.sin_cos();
    let td = eq.dec.sin() / checked_cos(eq.dec, "nutation")?;

    let d_ra = d_psi * (ce + se * sa * td) - d_eps * (ca * td);
    let d_dec = d_psi * (se * ca) + d_eps * sa;
    Ok((d_ra, d_dec))
}

/// Apparent equatorial position for a catalogue position and proper motion
///
/// # Arguments
/// * `eq` - mean position at `epoch_from`
/// * `epoch_from`, `epoch_to` - Julian epochs
/// * `motion` - annual proper motion
pub fn apparent_position(
    eq: &Equatorial,
    epoch_from: f64,
    epoch_to: f64,
    motion: ProperMotion,
) -> Result<Equatorial> {
    let mean = precess_equatorial(eq, epoch_from, epoch_to, motion);
    let jde = julian_year_to_jde(epoch_to);
    let (d_ra1, d_dec1) = nutation_correction(&mean, jde)?;
    let (d_ra2, d_dec2) = equatorial_aberration(&mean, jde)?;
    log::trace!(
        "apparent place: nutation ({}, {}) aberration ({}, {})",
        d_ra1,
        d_dec1,
        d_ra2,
        d_dec2
    );
    Ok(Equatorial::new(
        mean.ra + d_ra1 + d_ra2,
        mean.dec + d_dec1 + d_dec2,
    ))
}
