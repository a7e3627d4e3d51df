//! Command-line Reed-Solomon encoder and decoder
//!
//! ```text
//! rscodec encode -n 7 -k 3 32,45,12
//! rscodec decode -n 7 -k 3 -e 1 32,0,12,58,51,88,81
//! ```

use anyhow::{Context, Result};
use log::debug;
use rscodec::args::{erasures_from_args, format_symbols, parse_args, symbols_from_args};
use rscodec::{CodecConfig, ReedSolomon, RsError};

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(false)
        .init();

    let matches = parse_args();

    match matches.subcommand() {
        Some(("encode", sub_matches)) => handle_encode(sub_matches),
        Some(("decode", sub_matches)) => handle_decode(sub_matches),
        Some((cmd, _)) => {
            eprintln!("Unknown command: {}", cmd);
            std::process::exit(1);
        }
        None => {
            eprintln!("Error: No command specified");
            eprintln!("\nUse 'rscodec --help' for usage information");
            std::process::exit(1);
        }
    }
}

fn codec_from_args(matches: &clap::ArgMatches) -> Result<ReedSolomon<'static>> {
    let config = CodecConfig::from_args(matches).context("Invalid code parameters")?;
    debug!(
        "RS({}, {}), corrects {} errors",
        config.codeword_len(),
        config.message_len(),
        config.capability()
    );
    Ok(ReedSolomon::new(config))
}

fn handle_encode(matches: &clap::ArgMatches) -> Result<()> {
    let codec = codec_from_args(matches)?;
    let message = symbols_from_args(matches).context("Failed to read message symbols")?;
    let codeword = codec.encode(&message).context("Encoding failed")?;

    println!("{}", format_symbols(&codeword, matches.get_flag("hex")));
    Ok(())
}

fn handle_decode(matches: &clap::ArgMatches) -> Result<()> {
    let codec = codec_from_args(matches)?;
    let received = symbols_from_args(matches).context("Failed to read received symbols")?;
    let erasures = erasures_from_args(matches).context("Failed to read erasure list")?;

    match codec.decode_with_erasures(&received, &erasures) {
        Ok(decoded) => {
            println!("{}", format_symbols(&decoded.message, matches.get_flag("hex")));
            println!("corrected: {}", decoded.error_count);
            if !decoded.positions.is_empty() {
                debug!("corrected positions: {:?}", decoded.positions);
            }
            Ok(())
        }
        Err(RsError::DecodeFailure(failure)) => {
            eprintln!("uncorrectable: {}", failure);
            std::process::exit(2);
        }
        Err(e) => Err(e).context("Decoding failed"),
    }
}
