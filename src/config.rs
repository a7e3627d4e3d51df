//! Code parameters for Reed-Solomon operations

use crate::reed_solomon::error::{RsError, RsResult};
use crate::reed_solomon::galois::FIELD_ORDER;

/// Longest codeword a GF(2^8) code can carry
pub const MAX_CODEWORD_LEN: usize = FIELD_ORDER;

/// Shape of an (n, k) code: n codeword symbols carrying k message symbols
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodecConfig {
    codeword_len: usize,
    message_len: usize,
}

impl Default for CodecConfig {
    /// RS(255, 223), t = 16
    fn default() -> Self {
        Self {
            codeword_len: 255,
            message_len: 223,
        }
    }
}

impl CodecConfig {
    /// Validate an (n, k) pair
    pub fn new(codeword_len: usize, message_len: usize) -> RsResult<Self> {
        if codeword_len > MAX_CODEWORD_LEN {
            return Err(RsError::InvalidParameters(format!(
                "codeword length {} exceeds {}",
                codeword_len, MAX_CODEWORD_LEN
            )));
        }
        if message_len == 0 || message_len >= codeword_len {
            return Err(RsError::InvalidParameters(format!(
                "message length {} must be between 1 and {}",
                message_len,
                codeword_len.saturating_sub(1)
            )));
        }
        if (codeword_len - message_len) % 2 != 0 {
            return Err(RsError::InvalidParameters(format!(
                "parity length {} must be even",
                codeword_len - message_len
            )));
        }
        Ok(Self {
            codeword_len,
            message_len,
        })
    }

    /// Config for `message_len` symbols protected by `parity_len` parity symbols
    pub fn with_parity(message_len: usize, parity_len: usize) -> RsResult<Self> {
        Self::new(message_len + parity_len, message_len)
    }

    pub fn from_args(matches: &clap::ArgMatches) -> RsResult<Self> {
        let read = |name: &str| -> RsResult<usize> {
            let raw = matches.get_one::<String>(name).ok_or_else(|| {
                RsError::InvalidParameters(format!("missing --{}", name))
            })?;
            raw.parse().map_err(|_| {
                RsError::InvalidParameters(format!("--{} expects a number, got {:?}", name, raw))
            })
        };

        Self::new(read("codeword-len")?, read("message-len")?)
    }

    /// n
    pub fn codeword_len(&self) -> usize {
        self.codeword_len
    }

    /// k
    pub fn message_len(&self) -> usize {
        self.message_len
    }

    /// 2t
    pub fn parity_len(&self) -> usize {
        self.codeword_len - self.message_len
    }

    /// t, the number of symbol errors the code corrects
    pub fn capability(&self) -> usize {
        self.parity_len() / 2
    }
}
