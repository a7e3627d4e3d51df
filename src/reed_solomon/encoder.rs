//! Systematic encoding
//!
//! The codeword is `m(x)·x^2t + r(x)` where `r` is the remainder of
//! `m(x)·x^2t` divided by the generator. The message symbols come through
//! unchanged, followed by `2t` parity symbols, and every codeword is a
//! multiple of `g(x)`.

use super::error::{RsError, RsResult};
use super::galois::Gf256;
use super::generator::build_generator;
use super::poly::Poly;
use crate::config::CodecConfig;

/// Encoder for one (n, k) shape, holding its generator polynomial
#[derive(Debug, Clone)]
pub struct Encoder<'gf> {
    gf: &'gf Gf256,
    config: CodecConfig,
    generator: Poly,
}

impl<'gf> Encoder<'gf> {
    pub fn new(gf: &'gf Gf256, config: CodecConfig) -> Self {
        let generator = build_generator(gf, config.capability());
        Self {
            gf,
            config,
            generator,
        }
    }

    pub fn generator(&self) -> &Poly {
        &self.generator
    }

    pub fn config(&self) -> &CodecConfig {
        &self.config
    }

    /// The `2t` parity symbols for `message`
    pub fn parity(&self, message: &[u8]) -> RsResult<Vec<u8>> {
        let k = self.config.message_len();
        if message.len() != k {
            return Err(RsError::Length {
                what: "message",
                expected: k,
                actual: message.len(),
            });
        }

        let parity_len = self.config.parity_len();
        let shifted = Poly::new(message).shift(parity_len);
        let (_, remainder) = shifted.div_rem(self.gf, &self.generator)?;

        // The remainder may have fewer than 2t significant coefficients
        let coeffs = remainder.coefficients();
        let mut parity = vec![0u8; parity_len - coeffs.len()];
        parity.extend_from_slice(coeffs);
        Ok(parity)
    }

    /// Message followed by its parity
    pub fn encode(&self, message: &[u8]) -> RsResult<Vec<u8>> {
        let parity = self.parity(message)?;
        let mut codeword = Vec::with_capacity(self.config.codeword_len());
        codeword.extend_from_slice(message);
        codeword.extend_from_slice(&parity);
        Ok(codeword)
    }
}
