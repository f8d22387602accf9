//! Periodic series for heliocentric planet positions
//!
//! Each coordinate is a polynomial in τ (Julian millennia from J2000.0)
//! whose coefficients are sums of `A·cos(B + C·τ)` terms:
//!
//! ```text
//! L = (L0 + L1·τ + L2·τ² + ...)        for each Lk: Σ A·cos(B + C·τ)
//! ```
//!
//! Terms are summed from the smallest to the largest so that rounding in the
//! big leading terms does not swallow the small ones.

use crate::constants::J2000;
use crate::coordinates::angle::Angle;
use crate::coordinates::Ecliptic;
use crate::numeric::horner;
use crate::precessionlib::EclipticPrecessor;
use crate::time::jde_to_julian_year;

use super::HeliocentricPosition;

/// Days in a Julian millennium
const JULIAN_MILLENNIUM: f64 = 365_250.0;

/// One `A·cos(B + C·τ)` term
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Term {
    /// Amplitude, radians for L and B, AU for R
    pub amplitude: f64,
    /// Phase in radians
    pub phase: f64,
    /// Frequency in radians per Julian millennium
    pub frequency: f64,
}

impl Term {
    pub fn new(amplitude: f64, phase: f64, frequency: f64) -> Self {
        Self {
            amplitude,
            phase,
            frequency,
        }
    }

    #[inline]
    fn value(&self, tau: f64) -> f64 {
        self.amplitude * (self.phase + self.frequency * tau).cos()
    }
}

/// Reference frame a series is expressed in
///
/// J2000 positions still need ecliptic precession to the date before they
/// can be combined with nutation and aberration; of-date positions do not.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeriesFrame {
    /// Mean ecliptic and equinox of J2000.0
    J2000,
    /// Mean ecliptic and equinox of the date
    OfDate,
}

/// The L, B and R series of one body
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesTable {
    frame: SeriesFrame,
    longitude: Vec<Vec<Term>>,
    latitude: Vec<Vec<Term>>,
    radius: Vec<Vec<Term>>,
}

impl SeriesTable {
    /// Build a table from power-ordered blocks of terms
    ///
    /// `longitude[k]` holds the terms multiplied by τᵏ. A coordinate with no
    /// blocks evaluates to zero.
    pub fn new(
        frame: SeriesFrame,
        longitude: Vec<Vec<Term>>,
        latitude: Vec<Vec<Term>>,
        radius: Vec<Vec<Term>>,
    ) -> Self {
        Self {
            frame,
            longitude,
            latitude,
            radius,
        }
    }

    pub fn frame(&self) -> SeriesFrame {
        self.frame
    }

    /// Total number of terms across all coordinates
    pub fn term_count(&self) -> usize {
        [&self.longitude, &self.latitude, &self.radius]
            .iter()
            .flat_map(|blocks| blocks.iter())
            .map(Vec::len)
            .sum()
    }

    /// Evaluate the three series at a Julian ephemeris day
    ///
    /// Returns raw `(L, B, R)`: L in radians, not yet reduced to one turn.
    pub fn evaluate(&self, jde: f64) -> (f64, f64, f64) {
        let tau = (jde - J2000) / JULIAN_MILLENNIUM;
        (
            sum_blocks(&self.longitude, tau),
            sum_blocks(&self.latitude, tau),
            sum_blocks(&self.radius, tau),
        )
    }

    /// Heliocentric position referred to the ecliptic and equinox of date
    ///
    /// J2000 tables are precessed from 2000.0 to the Julian year of `jde`.
    pub fn position(&self, jde: f64) -> HeliocentricPosition {
        let (l, b, r) = self.evaluate(jde);
        log::trace!("series at {}: L={} B={} R={}", jde, l, b, r);
        let ecl = Ecliptic::new(Angle::from_radians(l).normalize(), Angle::from_radians(b));
        let ecl = match self.frame {
            SeriesFrame::OfDate => ecl,
            SeriesFrame::J2000 => {
                EclipticPrecessor::new(2000.0, jde_to_julian_year(jde)).precess(&ecl)
            }
        };
        HeliocentricPosition::new(ecl.lon, ecl.lat, r)
    }
}

fn sum_block(terms: &[Term], tau: f64) -> f64 {
    terms.iter().rev().map(|term| term.value(tau)).sum()
}

fn sum_blocks(blocks: &[Vec<Term>], tau: f64) -> f64 {
    let coeffs: Vec<f64> = blocks.iter().map(|terms| sum_block(terms, tau)).collect();
    horner(tau, &coeffs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn toy_table() -> SeriesTable {
        SeriesTable::new(
            SeriesFrame::OfDate,
            vec![
                vec![Term::new(1.0, 0.0, 0.0), Term::new(0.5, 0.0, 1.0)],
                vec![Term::new(2.0, 0.0, 0.0)],
            ],
            vec![],
            vec![vec![Term::new(1.5, 0.0, 0.0)]],
        )
    }

    #[test]
    fn test_evaluate_at_epoch() {
        let (l, b, r) = toy_table().evaluate(J2000);
        assert_abs_diff_eq!(l, 1.5, epsilon = 1e-15);
        assert_eq!(b, 0.0);
        assert_abs_diff_eq!(r, 1.5, epsilon = 1e-15);
    }

    #[test]
    fn test_evaluate_one_millennium_later() {
        let (l, _, _) = toy_table().evaluate(J2000 + JULIAN_MILLENNIUM);
        assert_abs_diff_eq!(l, 1.0 + 0.5 * 1.0f64.cos() + 2.0, epsilon = 1e-12);
    }

    #[test]
    fn test_position_normalizes_longitude() {
        let table = SeriesTable::new(
            SeriesFrame::OfDate,
            vec![vec![Term::new(-1.0, 0.0, 0.0)]],
            vec![],
            vec![],
        );
        let pos = table.position(J2000);
        assert_abs_diff_eq!(pos.l.radians(), std::f64::consts::TAU - 1.0, epsilon = 1e-12);
        assert_eq!(table.frame(), SeriesFrame::OfDate);
        assert_eq!(table.term_count(), 1);
    }

    #[test]
    fn test_j2000_position_is_precessed() {
        let table = SeriesTable::new(
            SeriesFrame::J2000,
            vec![vec![Term::new(1.0, 0.0, 0.0)]],
            vec![],
            vec![vec![Term::new(1.0, 0.0, 0.0)]],
        );
        // No precession at the epoch itself
        let pos = table.position(J2000);
        assert_abs_diff_eq!(pos.l.radians(), 1.0, epsilon = 1e-12);

        // About 50.3″ per year in longitude
        let pos = table.position(J2000 + 36525.0);
        let shift = (pos.l.radians() - 1.0) / crate::constants::ASEC2RAD;
        assert!((shift - 5029.0).abs() < 20.0, "shift {}", shift);
        let (l, _, _) = table.evaluate(J2000 + 36525.0);
        assert_eq!(l, 1.0);
    }
}
