//! Berlekamp-Massey: shortest LFSR for a syndrome sequence
//!
//! Finds the minimal-degree `Λ(x) = 1 + Λ_1·x + ... + Λ_ν·x^ν` with
//! `S_k + Λ_1·S_(k-1) + ... + Λ_ν·S_(k-ν) = 0` for every `k` in `ν..len`.
//! The solver never fails; whether `ν` is small enough to correct is the
//! caller's decision.

use super::galois::Gf256;
use super::poly::{Coeffs, Poly};
use log::trace;
use smallvec::smallvec;
use std::num::NonZeroU8;

/// Output of the solver
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorLocator {
    /// Λ(x), constant term 1
    pub poly: Poly,
    /// LFSR length ν; can exceed `poly.degree()` when the top coefficient vanished
    pub degree: usize,
}

/// Carried state of the iteration, coefficients constant term first
struct LfsrState {
    /// Current connection polynomial Λ(x)
    current: Coeffs,
    /// Λ(x) as it was before the last length change
    previous: Coeffs,
    /// Current LFSR length L
    length: usize,
    /// Steps since the last length change
    shift: usize,
    /// Discrepancy at the last length change
    last_discrepancy: NonZeroU8,
}

impl LfsrState {
    fn new(capacity: usize) -> Self {
        let mut current: Coeffs = smallvec![0; capacity];
        current[0] = 1;
        Self {
            previous: current.clone(),
            current,
            length: 0,
            shift: 1,
            last_discrepancy: NonZeroU8::MIN,
        }
    }

    /// `d = S_n + Σ Λ_i·S_(n-i)` for `i` in `1..=L`
    fn discrepancy(&self, gf: &Gf256, syndromes: &[u8], n: usize) -> u8 {
        (1..=self.length).fold(syndromes[n], |d, i| {
            d ^ gf.mul(self.current[i], syndromes[n - i])
        })
    }

    fn step(&mut self, gf: &Gf256, syndromes: &[u8], n: usize) {
        let Some(d) = NonZeroU8::new(self.discrepancy(gf, syndromes, n)) else {
            self.shift += 1;
            return;
        };

        // Λ(x) ← Λ(x) - (d / b)·x^m·B(x)
        let snapshot = self.current.clone();
        let scale = gf.div_nonzero(d.get(), self.last_discrepancy);
        let span = self.current.len().saturating_sub(self.shift);
        for (i, &b) in self.previous.iter().take(span).enumerate() {
            if b != 0 {
                self.current[i + self.shift] ^= gf.mul(scale, b);
            }
        }

        if 2 * self.length <= n {
            self.length = n + 1 - self.length;
            self.previous = snapshot;
            self.last_discrepancy = d;
            self.shift = 1;
        } else {
            self.shift += 1;
        }
    }
}

/// Fit the error locator to `syndromes`
pub fn berlekamp_massey(gf: &Gf256, syndromes: &[u8]) -> ErrorLocator {
    let mut state = LfsrState::new(syndromes.len() + 1);
    for n in 0..syndromes.len() {
        state.step(gf, syndromes, n);
    }

    let poly = Poly::from_ascending(&state.current[..=state.length]);
    trace!("berlekamp-massey: L={} Λ={:?}", state.length, poly);
    ErrorLocator {
        poly,
        degree: state.length,
    }
}
