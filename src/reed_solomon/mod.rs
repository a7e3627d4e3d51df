//! Reed-Solomon Error Correction Module
//!
//! Systematic RS codes over GF(2^8) (primitive polynomial 0x11D, α = 2) with
//! generator roots α^0..α^(2t-1). Decoding runs the classic algebraic
//! pipeline: syndromes, Berlekamp-Massey, Chien search and Forney, with
//! optional known erasures.

pub mod berlekamp;
pub mod builder;
pub mod chien;
pub mod codec;
pub mod decoder;
pub mod encoder;
pub mod erasure;
pub mod error;
pub mod forney;
pub mod galois;
pub mod generator;
pub mod poly;
pub mod syndrome;

pub use builder::ReedSolomonBuilder;
pub use codec::{decode, encode, to_symbols, ReedSolomon};
pub use decoder::{Decoded, Decoder};
pub use encoder::Encoder;
pub use error::{DecodeFailure, RsError, RsResult};
pub use galois::Gf256;
pub use generator::build_generator;
pub use poly::Poly;
pub use syndrome::{compute_syndromes, Syndromes};
