//! Decoder pipeline
//!
//! ```text
//! Start
//!   ↓ compute syndromes
//! SyndromeComputed ── all zero ──→ return unchanged
//!   ↓ Berlekamp-Massey (on Forney syndromes when erasures are known)
//! LocatorFitted ── degree too high ──→ fail
//!   ↓ Chien search
//! PositionsLocated ── root count mismatch ──→ fail
//!   ↓ Forney
//! MagnitudesComputed ── zero derivative ──→ fail
//!   ↓ XOR corrections
//! Corrected ── syndromes still non-zero ──→ fail
//!   ↓
//! Success
//! ```
//!
//! A single pass either succeeds or fails; nothing is retried and the
//! received word is never returned partially corrected.

use super::berlekamp::{berlekamp_massey, ErrorLocator};
use super::chien::{chien_search, ErrorLocation};
use super::erasure::{erasure_locator, forney_syndromes};
use super::error::{DecodeFailure, RsError, RsResult};
use super::forney::{apply_corrections, error_evaluator, error_magnitude};
use super::galois::Gf256;
use super::syndrome::compute_syndromes;
use crate::config::CodecConfig;
use log::{debug, trace};
use smallvec::SmallVec;

/// A successfully decoded word
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decoded {
    /// The k message symbols
    pub message: Vec<u8>,
    /// The full corrected codeword
    pub codeword: Vec<u8>,
    /// Number of symbols that were changed
    pub error_count: usize,
    /// Indices of the changed symbols, ascending
    pub positions: Vec<usize>,
}

impl Decoded {
    fn unchanged(received: &[u8], message_len: usize) -> Self {
        Self {
            message: received[..message_len].to_vec(),
            codeword: received.to_vec(),
            error_count: 0,
            positions: Vec::new(),
        }
    }
}

/// Errors-and-erasures decoder for one (n, k) shape
#[derive(Debug, Clone)]
pub struct Decoder<'gf> {
    gf: &'gf Gf256,
    config: CodecConfig,
}

impl<'gf> Decoder<'gf> {
    pub fn new(gf: &'gf Gf256, config: CodecConfig) -> Self {
        Self { gf, config }
    }

    pub fn config(&self) -> &CodecConfig {
        &self.config
    }

    /// Correct `received`, treating `erasures` as known-bad indices
    pub fn decode(&self, received: &[u8], erasures: &[usize]) -> RsResult<Decoded> {
        let gf = self.gf;
        let n = self.config.codeword_len();
        let k = self.config.message_len();
        let parity_len = self.config.parity_len();

        if received.len() != n {
            return Err(RsError::Length {
                what: "codeword",
                expected: n,
                actual: received.len(),
            });
        }
        let gamma = erasure_locator(gf, erasures, n)?;

        let syndromes = compute_syndromes(gf, received, parity_len);
        trace!("syndromes: {:?}", syndromes.values());
        if syndromes.all_zero() {
            debug!("syndromes all zero, codeword intact");
            return Ok(Decoded::unchanged(received, k));
        }

        let erasure_count = erasures.len();
        if erasure_count > parity_len {
            return Err(DecodeFailure::TooManyErasures {
                erasures: erasure_count,
                parity: parity_len,
            }
            .into());
        }

        let sigma = berlekamp_massey(gf, &forney_syndromes(gf, &syndromes, &gamma));
        debug!(
            "locator fitted: {} errors, {} erasures",
            sigma.degree, erasure_count
        );
        if 2 * sigma.degree + erasure_count > parity_len {
            return Err(DecodeFailure::LocatorDegreeExceedsCapacity {
                degree: sigma.degree,
                capability: (parity_len - erasure_count) / 2,
            }
            .into());
        }

        let errata = ErrorLocator {
            poly: sigma.poly.mul(gf, &gamma),
            degree: sigma.degree + erasure_count,
        };
        let locations = chien_search(gf, &errata, n)?;
        debug!(
            "positions located: {:?}",
            locations.iter().map(|l| l.position).collect::<Vec<_>>()
        );

        let omega = error_evaluator(gf, &syndromes, &errata.poly);
        let derivative = errata.poly.formal_derivative();
        trace!("Ω={:?} Λ'={:?}", omega, derivative);

        let corrections = locations
            .iter()
            .map(|location| {
                error_magnitude(gf, &omega, &derivative, location)
                    .map(|magnitude| (*location, magnitude))
                    .map_err(|_| {
                        RsError::from(DecodeFailure::ZeroDerivative {
                            position: location.position,
                        })
                    })
            })
            .collect::<RsResult<SmallVec<[(ErrorLocation, u8); 32]>>>()?;

        let mut codeword = received.to_vec();
        apply_corrections(&mut codeword, &corrections);

        if !compute_syndromes(gf, &codeword, parity_len).all_zero() {
            debug!("correction left non-zero syndromes");
            return Err(DecodeFailure::ResidualSyndromes.into());
        }

        let positions: Vec<usize> = corrections
            .iter()
            .filter(|(_, magnitude)| *magnitude != 0)
            .map(|(location, _)| location.position)
            .collect();
        debug!("corrected {} symbols", positions.len());

        Ok(Decoded {
            message: codeword[..k].to_vec(),
            error_count: positions.len(),
            positions,
            codeword,
        })
    }
}
