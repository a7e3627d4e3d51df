//! Erasure support
//!
//! Known-bad positions are folded in through the erasure locator
//! `Γ(x) = ∏ (1 + X_e·x)`. Multiplying the syndromes by Γ cancels the erased
//! symbols, leaving the Forney syndromes `T_e..T_(2t-1)`: a shorter sequence
//! that Berlekamp-Massey fits to the unknown errors alone. The errata locator
//! handed to Chien and Forney is then `σ(x)·Γ(x)`.
//!
//! Each erasure costs one parity symbol, each unknown error two.

use super::error::{RsError, RsResult};
use super::galois::Gf256;
use super::poly::{Coeffs, Poly};
use super::syndrome::Syndromes;

/// `Γ(x)` for erasures given as codeword indices
pub fn erasure_locator(gf: &Gf256, positions: &[usize], codeword_len: usize) -> RsResult<Poly> {
    let mut seen = [false; 256];
    let mut gamma = Poly::one();

    for &position in positions {
        if position >= codeword_len {
            return Err(RsError::InvalidParameters(format!(
                "erasure position {} outside a {}-symbol codeword",
                position, codeword_len
            )));
        }
        if std::mem::replace(&mut seen[position], true) {
            return Err(RsError::InvalidParameters(format!(
                "erasure position {} given twice",
                position
            )));
        }
        let locator = gf.alpha_pow(codeword_len - 1 - position);
        gamma = gamma.mul(gf, &Poly::new(&[locator, 1]));
    }

    Ok(gamma)
}

/// Coefficients `e..2t` of `Γ(x)·S(x) mod x^2t`, where `e = deg Γ`
pub fn forney_syndromes(gf: &Gf256, syndromes: &Syndromes, gamma: &Poly) -> Coeffs {
    let parity_len = syndromes.len();
    let product = gamma.mul_mod_x_pow(gf, &syndromes.as_poly(), parity_len);
    (gamma.degree()..parity_len)
        .map(|power| product.coeff(power))
        .collect()
}
