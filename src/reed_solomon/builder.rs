//! Builder for [`ReedSolomon`] codecs
//!
//! The message length is required; the code size comes from either the
//! parity length or the total codeword length. When both are given they
//! must agree.

use super::codec::ReedSolomon;
use super::error::{RsError, RsResult};
use super::galois::Gf256;
use crate::config::CodecConfig;

#[derive(Debug, Default, Clone)]
pub struct ReedSolomonBuilder {
    message_len: Option<usize>,
    parity_len: Option<usize>,
    codeword_len: Option<usize>,
}

impl ReedSolomonBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// k
    pub fn with_message_len(mut self, message_len: usize) -> Self {
        self.message_len = Some(message_len);
        self
    }

    /// 2t
    pub fn with_parity_len(mut self, parity_len: usize) -> Self {
        self.parity_len = Some(parity_len);
        self
    }

    /// n
    pub fn with_codeword_len(mut self, codeword_len: usize) -> Self {
        self.codeword_len = Some(codeword_len);
        self
    }

    /// Resolve and validate the (n, k) pair
    pub fn config(&self) -> RsResult<CodecConfig> {
        let k = self
            .message_len
            .ok_or_else(|| RsError::InvalidParameters("message length not set".to_string()))?;

        let n = match (self.codeword_len, self.parity_len) {
            (Some(n), Some(parity)) if n != k + parity => {
                return Err(RsError::InvalidParameters(format!(
                    "codeword length {} disagrees with {} message + {} parity symbols",
                    n, k, parity
                )))
            }
            (Some(n), _) => n,
            (None, Some(parity)) => k + parity,
            (None, None) => {
                return Err(RsError::InvalidParameters(
                    "neither codeword nor parity length set".to_string(),
                ))
            }
        };

        CodecConfig::new(n, k)
    }

    /// Codec on the shared field tables
    pub fn build(self) -> RsResult<ReedSolomon<'static>> {
        Ok(ReedSolomon::new(self.config()?))
    }

    /// Codec on a caller-provided field instance
    pub fn build_with_field(self, gf: &Gf256) -> RsResult<ReedSolomon<'_>> {
        Ok(ReedSolomon::with_field(gf, self.config()?))
    }
}
