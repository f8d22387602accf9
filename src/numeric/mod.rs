//! Small numeric helpers shared by every polynomial and calendar routine

use num_traits::Float;

/// Evaluates a polynomial with Horner's method
///
/// `coeffs[0]` is the constant term, so `horner(t, &[a, b, c])` is
/// `a + b·t + c·t²`. An empty coefficient list evaluates to zero.
pub fn horner<F: Float>(x: F, coeffs: &[F]) -> F {
    coeffs
        .iter()
        .rev()
        .fold(F::zero(), |acc, &c| acc * x + c)
}

/// Integer division rounding toward negative infinity
///
/// Calendar formulas are written for floor division; Rust's `/` truncates
/// toward zero, which breaks them for negative years.
pub fn floor_div(x: i64, y: i64) -> i64 {
    x.div_euclid(y) - if y < 0 && x.rem_euclid(y) != 0 { 1 } else { 0 }
}
