//! Syndrome calculation

use super::galois::Gf256;
use super::poly::{Coeffs, Poly};

/// `S_i = R(α^i)` for `i` in `0..parity_len`, constant term first
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Syndromes {
    values: Coeffs,
}

impl Syndromes {
    pub fn values(&self) -> &[u8] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// No detectable error
    pub fn all_zero(&self) -> bool {
        self.values.iter().all(|&s| s == 0)
    }

    /// `S(x) = S_0 + S_1·x + ... + S_(2t-1)·x^(2t-1)`
    pub fn as_poly(&self) -> Poly {
        Poly::from_ascending(&self.values)
    }
}

/// Evaluate the received word, read as a polynomial, at each generator root
pub fn compute_syndromes(gf: &Gf256, received: &[u8], parity_len: usize) -> Syndromes {
    let poly = Poly::new(received);
    let values = (0..parity_len)
        .map(|i| poly.eval(gf, gf.alpha_pow(i)))
        .collect();
    Syndromes { values }
}
