pub mod args;
pub mod config;
pub mod reed_solomon;

pub use args::parse_args;
pub use config::CodecConfig;
pub use reed_solomon::{
    decode, encode, to_symbols, DecodeFailure, Decoded, Gf256, ReedSolomon, ReedSolomonBuilder,
    RsError, RsResult,
};
