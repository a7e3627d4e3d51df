//! Polynomials over GF(2^8)
//!
//! Coefficients are stored highest degree first, so `[1, 3, 2]` is
//! `x² + 3x + 2`. Storage is an inline [`SmallVec`] sized for the longest
//! codeword, and every constructor trims leading zeros: the zero polynomial
//! is the single coefficient `[0]`.
//!
//! Locator and evaluator polynomials are naturally indexed by power; use
//! [`Poly::from_ascending`] and [`Poly::coeff`] for those.

use super::error::{RsError, RsResult};
use super::galois::{Gf256, FIELD_SIZE};
use smallvec::{smallvec, SmallVec};
use std::fmt;

/// Inline coefficient capacity; a 255-symbol codeword fits without spilling
pub const POLY_CAPACITY: usize = FIELD_SIZE;

/// Coefficient buffer shared by polynomials, codewords and syndromes
pub type Coeffs = SmallVec<[u8; POLY_CAPACITY]>;

#[derive(Clone, PartialEq, Eq)]
pub struct Poly {
    coeffs: Coeffs,
}

impl Poly {
    /// Build from coefficients given highest degree first
    pub fn new(coeffs: &[u8]) -> Self {
        Self::from_buf(Coeffs::from_slice(coeffs))
    }

    /// Build from coefficients given constant term first
    pub fn from_ascending(coeffs: &[u8]) -> Self {
        Self::from_buf(coeffs.iter().rev().copied().collect())
    }

    fn from_buf(mut coeffs: Coeffs) -> Self {
        let leading = coeffs.iter().take_while(|&&c| c == 0).count();
        if leading == coeffs.len() {
            coeffs.clear();
            coeffs.push(0);
        } else if leading > 0 {
            coeffs.drain(..leading);
        }
        Self { coeffs }
    }

    pub fn zero() -> Self {
        Self { coeffs: smallvec![0] }
    }

    pub fn one() -> Self {
        Self { coeffs: smallvec![1] }
    }

    /// `coeff · x^degree`
    pub fn monomial(coeff: u8, degree: usize) -> Self {
        if coeff == 0 {
            return Self::zero();
        }
        let mut coeffs = Coeffs::with_capacity(degree + 1);
        coeffs.push(coeff);
        coeffs.resize(degree + 1, 0);
        Self { coeffs }
    }

    /// Coefficients, highest degree first
    pub fn coefficients(&self) -> &[u8] {
        &self.coeffs
    }

    pub fn degree(&self) -> usize {
        self.coeffs.len() - 1
    }

    pub fn is_zero(&self) -> bool {
        self.coeffs.len() == 1 && self.coeffs[0] == 0
    }

    /// Coefficient of the highest-degree term
    pub fn leading(&self) -> u8 {
        self.coeffs[0]
    }

    /// Coefficient of `x^power`, zero beyond the degree
    pub fn coeff(&self, power: usize) -> u8 {
        if power > self.degree() {
            0
        } else {
            self.coeffs[self.degree() - power]
        }
    }

    /// Sum, aligned by degree
    pub fn add(&self, other: &Poly) -> Poly {
        let (long, short) = if self.coeffs.len() >= other.coeffs.len() {
            (&self.coeffs, &other.coeffs)
        } else {
            (&other.coeffs, &self.coeffs)
        };
        let offset = long.len() - short.len();
        let mut sum = long.clone();
        for (dst, &src) in sum[offset..].iter_mut().zip(short.iter()) {
            *dst ^= src;
        }
        Self::from_buf(sum)
    }

    /// Product by full convolution
    pub fn mul(&self, gf: &Gf256, other: &Poly) -> Poly {
        let mut product: Coeffs = smallvec![0; self.coeffs.len() + other.coeffs.len() - 1];
        for (i, &a) in self.coeffs.iter().enumerate() {
            if a == 0 {
                continue;
            }
            for (j, &b) in other.coeffs.iter().enumerate() {
                product[i + j] ^= gf.mul(a, b);
            }
        }
        Self::from_buf(product)
    }

    /// `(self · other) mod x^terms`, computing only the kept low-order terms
    pub fn mul_mod_x_pow(&self, gf: &Gf256, other: &Poly, terms: usize) -> Poly {
        if terms == 0 {
            return Self::zero();
        }
        let mut low: Coeffs = smallvec![0; terms];
        for i in 0..=self.degree().min(terms - 1) {
            let a = self.coeff(i);
            if a == 0 {
                continue;
            }
            for j in 0..=other.degree().min(terms - 1 - i) {
                low[i + j] ^= gf.mul(a, other.coeff(j));
            }
        }
        Self::from_ascending(&low)
    }

    /// Every coefficient multiplied by `a`
    pub fn scale(&self, gf: &Gf256, a: u8) -> Poly {
        Self::from_buf(self.coeffs.iter().map(|&c| gf.mul(c, a)).collect())
    }

    /// Multiply by `x^shift`
    pub fn shift(&self, shift: usize) -> Poly {
        if self.is_zero() {
            return Self::zero();
        }
        let mut coeffs = self.coeffs.clone();
        coeffs.resize(coeffs.len() + shift, 0);
        Self { coeffs }
    }

    /// Horner evaluation at `x`
    pub fn eval(&self, gf: &Gf256, x: u8) -> u8 {
        self.coeffs
            .iter()
            .fold(0u8, |acc, &c| gf.mul(acc, x) ^ c)
    }

    /// Keep only the terms of degree below `terms`
    pub fn mod_x_pow(&self, terms: usize) -> Poly {
        if terms == 0 {
            return Self::zero();
        }
        let keep = terms.min(self.coeffs.len());
        Self::new(&self.coeffs[self.coeffs.len() - keep..])
    }

    /// Formal derivative; in characteristic 2 only odd powers survive
    pub fn formal_derivative(&self) -> Poly {
        let degree = self.degree();
        if degree == 0 {
            return Self::zero();
        }
        let ascending: Coeffs = (1..=degree)
            .map(|power| if power & 1 == 1 { self.coeff(power) } else { 0 })
            .collect();
        Self::from_ascending(&ascending)
    }

    /// Long division, returning `(quotient, remainder)`
    pub fn div_rem(&self, gf: &Gf256, divisor: &Poly) -> RsResult<(Poly, Poly)> {
        if divisor.is_zero() {
            return Err(RsError::Domain(
                "polynomial division by zero".to_string(),
            ));
        }
        if self.coeffs.len() < divisor.coeffs.len() {
            return Ok((Self::zero(), self.clone()));
        }

        let lead_inv = gf.inv(divisor.leading())?;
        let steps = self.coeffs.len() - divisor.coeffs.len() + 1;
        let mut rem = self.coeffs.clone();
        let mut quotient: Coeffs = smallvec![0; steps];

        for i in 0..steps {
            let coef = rem[i];
            if coef == 0 {
                continue;
            }
            let factor = gf.mul(coef, lead_inv);
            quotient[i] = factor;
            for (j, &d) in divisor.coeffs.iter().enumerate() {
                rem[i + j] ^= gf.mul(d, factor);
            }
        }

        let remainder = Self::new(&rem[steps..]);
        Ok((Self::from_buf(quotient), remainder))
    }
}

impl fmt::Debug for Poly {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Poly{:?}", self.coeffs.as_slice())
    }
}
