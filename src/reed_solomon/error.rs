//! Error types for Reed-Solomon encoding and decoding

use std::fmt;
use thiserror::Error;

/// Why a received word could not be corrected.
///
/// These are expected outcomes for words carrying more damage than the code
/// can repair, not internal faults.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeFailure {
    /// More erasures were supplied than there are parity symbols
    TooManyErasures { erasures: usize, parity: usize },
    /// Berlekamp-Massey needed a locator of higher degree than the code can correct
    LocatorDegreeExceedsCapacity { degree: usize, capability: usize },
    /// Chien search found a different number of roots than the locator degree
    RootCountMismatch { degree: usize, roots: usize },
    /// A locator root points at a symbol beyond the end of the (shortened) codeword
    RootOutsideCodeword { power: usize, codeword_len: usize },
    /// The locator derivative vanished at an error location
    ZeroDerivative { position: usize },
    /// Syndromes were still non-zero after applying the correction
    ResidualSyndromes,
}

impl fmt::Display for DecodeFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecodeFailure::TooManyErasures { erasures, parity } => {
                write!(f, "{} erasures exceed {} parity symbols", erasures, parity)
            }
            DecodeFailure::LocatorDegreeExceedsCapacity { degree, capability } => write!(
                f,
                "error locator degree {} exceeds correction capability {}",
                degree, capability
            ),
            DecodeFailure::RootCountMismatch { degree, roots } => write!(
                f,
                "locator of degree {} has {} roots in the field",
                degree, roots
            ),
            DecodeFailure::RootOutsideCodeword {
                power,
                codeword_len,
            } => write!(
                f,
                "locator root at power {} lies outside a {}-symbol codeword",
                power, codeword_len
            ),
            DecodeFailure::ZeroDerivative { position } => {
                write!(f, "locator derivative is zero at position {}", position)
            }
            DecodeFailure::ResidualSyndromes => {
                write!(f, "syndromes are non-zero after correction")
            }
        }
    }
}

/// Errors produced by the codec
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RsError {
    /// A value outside the field, or an undefined field operation
    #[error("Domain error: {0}")]
    Domain(String),

    /// An input sequence does not have the length the code requires
    #[error("Length mismatch for {what}: expected {expected}, got {actual}")]
    Length {
        what: &'static str,
        expected: usize,
        actual: usize,
    },

    /// Code parameters or erasure positions that cannot describe a valid code
    #[error("Invalid parameters: {0}")]
    InvalidParameters(String),

    /// The received word is uncorrectable
    #[error("Decode failure: {0}")]
    DecodeFailure(DecodeFailure),
}

impl RsError {
    /// True when the error reports an uncorrectable word rather than bad input
    pub fn is_uncorrectable(&self) -> bool {
        matches!(self, RsError::DecodeFailure(_))
    }
}

impl From<DecodeFailure> for RsError {
    fn from(failure: DecodeFailure) -> Self {
        RsError::DecodeFailure(failure)
    }
}

/// Type alias for Result with RsError
pub type RsResult<T> = std::result::Result<T, RsError>;
