use crate::reed_solomon::codec::to_symbols;
use crate::reed_solomon::error::{RsError, RsResult};
use clap::{Arg, ArgAction, Command};

fn shape_args(command: Command) -> Command {
    command
        .arg(
            Arg::new("codeword-len")
                .short('n')
                .long("codeword-len")
                .help("Codeword length n (at most 255)")
                .value_name("N")
                .default_value("255"),
        )
        .arg(
            Arg::new("message-len")
                .short('k')
                .long("message-len")
                .help("Message length k; n - k must be even")
                .value_name("K")
                .default_value("223"),
        )
        .arg(
            Arg::new("hex")
                .long("hex")
                .help("Read and print symbols as a hex string")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("symbols")
                .help("Symbols, comma or space separated decimals (or hex with --hex)")
                .required(true)
                .num_args(1..)
                .index(1),
        )
}

pub fn build_cli() -> Command {
    Command::new("rscodec")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Reed-Solomon encoder/decoder over GF(2^8)")
        .arg_required_else_help(true)
        .subcommand(shape_args(
            Command::new("encode")
                .visible_alias("e")
                .about("Append parity symbols to a message"),
        ))
        .subcommand(
            shape_args(
                Command::new("decode")
                    .visible_alias("d")
                    .about("Correct a received codeword and print the message"),
            )
            .arg(
                Arg::new("erasures")
                    .short('e')
                    .long("erasures")
                    .help("Known-bad codeword indices, comma separated")
                    .value_name("LIST"),
            ),
        )
}

pub fn parse_args() -> clap::ArgMatches {
    build_cli().get_matches()
}

/// Symbols from the positional arguments of a subcommand
pub fn symbols_from_args(matches: &clap::ArgMatches) -> RsResult<Vec<u8>> {
    let raw: Vec<&str> = matches
        .get_many::<String>("symbols")
        .map(|values| values.map(String::as_str).collect())
        .unwrap_or_default();

    if matches.get_flag("hex") {
        parse_hex_symbols(&raw.concat())
    } else {
        parse_decimal_symbols(&raw.join(" "))
    }
}

/// Erasure indices from `--erasures`, empty when absent
pub fn erasures_from_args(matches: &clap::ArgMatches) -> RsResult<Vec<usize>> {
    match matches.get_one::<String>("erasures") {
        Some(list) => split_tokens(list)
            .map(|token| {
                token.parse().map_err(|_| {
                    RsError::InvalidParameters(format!("bad erasure index {:?}", token))
                })
            })
            .collect(),
        None => Ok(Vec::new()),
    }
}

pub fn parse_decimal_symbols(input: &str) -> RsResult<Vec<u8>> {
    let values = split_tokens(input)
        .map(|token| {
            token
                .parse::<i64>()
                .map_err(|_| RsError::Domain(format!("{:?} is not an integer symbol", token)))
        })
        .collect::<RsResult<Vec<i64>>>()?;
    to_symbols(&values)
}

pub fn parse_hex_symbols(input: &str) -> RsResult<Vec<u8>> {
    hex::decode(input.trim()).map_err(|e| RsError::Domain(format!("bad hex input: {}", e)))
}

pub fn format_symbols(symbols: &[u8], as_hex: bool) -> String {
    if as_hex {
        hex::encode(symbols)
    } else {
        symbols
            .iter()
            .map(|s| s.to_string())
            .collect::<Vec<_>>()
            .join(",")
    }
}

fn split_tokens(input: &str) -> impl Iterator<Item = &str> {
    input
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
}
