//! Galois Field GF(2^8) arithmetic for Reed-Solomon operations
//!
//! ## Field Polynomial
//!
//! - **GF(2^8)**: 0x11D (x⁸ + x⁴ + x³ + x² + 1), primitive element α = 2
//!
//! Multiplication and division go through exp/log tables built once per
//! [`Gf256`] value. The tables are never mutated after construction, so a
//! single instance can be shared freely between threads.

use super::error::{RsError, RsResult};
use std::num::NonZeroU8;
use std::sync::OnceLock;

/// GF(2^8) primitive polynomial: 0x11D (x⁸ + x⁴ + x³ + x² + 1)
pub const PRIMITIVE_POLY: u16 = 0x11D;

/// Primitive element α
pub const ALPHA: u8 = 2;

/// Number of elements in the field
pub const FIELD_SIZE: usize = 256;

/// Order of the multiplicative group
pub const FIELD_ORDER: usize = FIELD_SIZE - 1;

// exp is doubled so log[a] + log[b] indexes without a modulo
const EXP_LEN: usize = FIELD_ORDER * 2;

/// Lookup tables and arithmetic for GF(2^8)
#[derive(Clone)]
pub struct Gf256 {
    exp: [u8; EXP_LEN],
    log: [u8; FIELD_SIZE],
}

impl Default for Gf256 {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Gf256 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Gf256")
            .field("primitive_poly", &format_args!("{:#x}", PRIMITIVE_POLY))
            .finish()
    }
}

impl Gf256 {
    /// Build the exp/log tables for α = 2 over 0x11D
    pub const fn new() -> Self {
        let mut exp = [0u8; EXP_LEN];
        let mut log = [0u8; FIELD_SIZE];

        let mut b: u16 = 1;
        let mut l = 0usize;
        while l < FIELD_ORDER {
            exp[l] = b as u8;
            log[b as usize] = l as u8;

            b <<= 1;
            if b & FIELD_SIZE as u16 != 0 {
                b ^= PRIMITIVE_POLY;
            }
            l += 1;
        }

        while l < EXP_LEN {
            exp[l] = exp[l - FIELD_ORDER];
            l += 1;
        }

        // log[0] stays 0 as a sentinel; every caller checks for zero first.
        Gf256 { exp, log }
    }

    /// Process-wide instance, built on first use
    pub fn shared() -> &'static Gf256 {
        static TABLE: OnceLock<Gf256> = OnceLock::new();
        TABLE.get_or_init(Gf256::new)
    }

    /// Addition (XOR)
    #[inline(always)]
    pub fn add(&self, a: u8, b: u8) -> u8 {
        a ^ b
    }

    /// Subtraction, identical to addition in characteristic 2
    #[inline(always)]
    pub fn sub(&self, a: u8, b: u8) -> u8 {
        a ^ b
    }

    #[inline(always)]
    pub fn mul(&self, a: u8, b: u8) -> u8 {
        if a == 0 || b == 0 {
            return 0;
        }
        self.exp[self.log[a as usize] as usize + self.log[b as usize] as usize]
    }

    /// Multiplicative inverse; zero has none
    #[inline]
    pub fn inv(&self, a: u8) -> RsResult<u8> {
        if a == 0 {
            return Err(RsError::Domain("zero has no inverse in GF(256)".to_string()));
        }
        Ok(self.exp[(FIELD_ORDER - self.log[a as usize] as usize) % FIELD_ORDER])
    }

    /// Division, `a * inv(b)`
    #[inline]
    pub fn div(&self, a: u8, b: u8) -> RsResult<u8> {
        Ok(self.mul(a, self.inv(b)?))
    }

    /// Division by a divisor already known to be non-zero
    #[inline]
    pub fn div_nonzero(&self, a: u8, b: NonZeroU8) -> u8 {
        if a == 0 {
            return 0;
        }
        let idx = self.log[a as usize] as usize + FIELD_ORDER - self.log[b.get() as usize] as usize;
        self.exp[idx]
    }

    /// `a` raised to a signed exponent
    ///
    /// `0^e` is 0 for positive `e`, 1 for `e == 0`, and a domain error for
    /// negative `e`.
    pub fn pow(&self, a: u8, exponent: i32) -> RsResult<u8> {
        if a == 0 {
            return match exponent {
                0 => Ok(1),
                e if e > 0 => Ok(0),
                _ => Err(RsError::Domain(format!(
                    "zero raised to negative power {}",
                    exponent
                ))),
            };
        }
        let log_a = self.log[a as usize] as i64;
        let power = (log_a * exponent as i64).rem_euclid(FIELD_ORDER as i64);
        Ok(self.exp[power as usize])
    }

    /// α^power for any non-negative power
    #[inline(always)]
    pub fn alpha_pow(&self, power: usize) -> u8 {
        self.exp[power % FIELD_ORDER]
    }

    /// α^-power
    #[inline(always)]
    pub fn alpha_pow_inv(&self, power: usize) -> u8 {
        self.exp[(FIELD_ORDER - power % FIELD_ORDER) % FIELD_ORDER]
    }

    /// Discrete logarithm base α; undefined for zero
    pub fn log(&self, a: u8) -> RsResult<u8> {
        if a == 0 {
            return Err(RsError::Domain("zero has no logarithm".to_string()));
        }
        Ok(self.log[a as usize])
    }

    /// Antilogarithm, α^power for power in 0..255
    pub fn exp(&self, power: u8) -> u8 {
        self.exp[power as usize]
    }
}
