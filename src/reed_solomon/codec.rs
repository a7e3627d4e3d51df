//! Reed-Solomon codec for a fixed (n, k) shape
//!
//! [`ReedSolomon`] pairs an [`Encoder`] and a [`Decoder`] over one field
//! instance. The free functions [`encode`] and [`decode`] build a codec on
//! the shared field for one-off calls.

use super::decoder::{Decoded, Decoder};
use super::encoder::Encoder;
use super::error::{RsError, RsResult};
use super::galois::Gf256;
use super::poly::Poly;
use super::syndrome::{compute_syndromes, Syndromes};
use crate::config::CodecConfig;

/// Encoder/decoder pair for one code
#[derive(Debug, Clone)]
pub struct ReedSolomon<'gf> {
    gf: &'gf Gf256,
    encoder: Encoder<'gf>,
    decoder: Decoder<'gf>,
}

impl ReedSolomon<'static> {
    /// Codec on the process-wide field tables
    pub fn new(config: CodecConfig) -> Self {
        Self::with_field(Gf256::shared(), config)
    }
}

impl<'gf> ReedSolomon<'gf> {
    pub fn with_field(gf: &'gf Gf256, config: CodecConfig) -> Self {
        Self {
            gf,
            encoder: Encoder::new(gf, config),
            decoder: Decoder::new(gf, config),
        }
    }

    pub fn config(&self) -> &CodecConfig {
        self.encoder.config()
    }

    pub fn generator(&self) -> &Poly {
        self.encoder.generator()
    }

    /// Message followed by `2t` parity symbols
    pub fn encode(&self, message: &[u8]) -> RsResult<Vec<u8>> {
        self.encoder.encode(message)
    }

    /// Parity symbols only
    pub fn parity(&self, message: &[u8]) -> RsResult<Vec<u8>> {
        self.encoder.parity(message)
    }

    /// Correct up to t symbol errors
    pub fn decode(&self, received: &[u8]) -> RsResult<Decoded> {
        self.decoder.decode(received, &[])
    }

    /// Correct `e` erasures plus up to `(2t - e) / 2` unknown errors
    pub fn decode_with_erasures(&self, received: &[u8], erasures: &[usize]) -> RsResult<Decoded> {
        self.decoder.decode(received, erasures)
    }

    pub fn syndromes(&self, received: &[u8]) -> RsResult<Syndromes> {
        let n = self.config().codeword_len();
        if received.len() != n {
            return Err(RsError::Length {
                what: "codeword",
                expected: n,
                actual: received.len(),
            });
        }
        Ok(compute_syndromes(self.gf, received, self.config().parity_len()))
    }

    /// True when `received` is a codeword of this code
    pub fn is_codeword(&self, received: &[u8]) -> bool {
        self.syndromes(received).is_ok_and(|s| s.all_zero())
    }
}

/// Convert untyped integers to field symbols
pub fn to_symbols(values: &[i64]) -> RsResult<Vec<u8>> {
    values
        .iter()
        .enumerate()
        .map(|(index, &value)| {
            u8::try_from(value).map_err(|_| {
                RsError::Domain(format!(
                    "symbol {} at index {} is outside [0, 255]",
                    value, index
                ))
            })
        })
        .collect()
}

/// Encode `message` with an (n, k) code
pub fn encode(message: &[u8], k: usize, n: usize) -> RsResult<Vec<u8>> {
    ReedSolomon::new(CodecConfig::new(n, k)?).encode(message)
}

/// Decode `received` with an (n, k) code, returning the message and the
/// number of corrected symbols
pub fn decode(
    received: &[u8],
    k: usize,
    n: usize,
    erasures: Option<&[usize]>,
) -> RsResult<(Vec<u8>, usize)> {
    let codec = ReedSolomon::new(CodecConfig::new(n, k)?);
    let decoded = codec.decode_with_erasures(received, erasures.unwrap_or(&[]))?;
    Ok((decoded.message, decoded.error_count))
}
