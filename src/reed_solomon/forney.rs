//! Forney's algorithm: error magnitudes and correction
//!
//! With syndromes taken at `α^0..α^(2t-1)`, the magnitude at location `X` is
//!
//! ```text
//! e = X · Ω(X⁻¹) / Λ'(X⁻¹),    Ω(x) = S(x)·Λ(x) mod x^2t
//! ```
//!
//! The sign of the textbook formula disappears in characteristic 2.

use super::chien::ErrorLocation;
use super::error::{RsError, RsResult};
use super::galois::Gf256;
use super::poly::Poly;
use super::syndrome::Syndromes;

/// `Ω(x) = S(x)·Λ(x) mod x^2t`
pub fn error_evaluator(gf: &Gf256, syndromes: &Syndromes, locator: &Poly) -> Poly {
    syndromes
        .as_poly()
        .mul_mod_x_pow(gf, locator, syndromes.len())
}

/// Magnitude of the error at `location`
///
/// `derivative` is `Λ'(x)`. A zero derivative at the location is a domain
/// error; the decoder reports it as uncorrectable.
pub fn error_magnitude(
    gf: &Gf256,
    evaluator: &Poly,
    derivative: &Poly,
    location: &ErrorLocation,
) -> RsResult<u8> {
    let x_inv = gf.alpha_pow_inv(location.power);
    let denominator = derivative.eval(gf, x_inv);
    if denominator == 0 {
        return Err(RsError::Domain(format!(
            "locator derivative vanishes at position {}",
            location.position
        )));
    }
    let numerator = gf.mul(location.locator, evaluator.eval(gf, x_inv));
    gf.div(numerator, denominator)
}

/// XOR each magnitude into its position
pub fn apply_corrections(codeword: &mut [u8], corrections: &[(ErrorLocation, u8)]) {
    for (location, magnitude) in corrections {
        codeword[location.position] ^= magnitude;
    }
}
