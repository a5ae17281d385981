//! Parsing of program address arguments out of [`ArgMatches`].

use {
    crate::{OUTPUT_ARG, PROGRAM_ID_ARG, SEED_ARG},
    clap::ArgMatches,
    pda_sdk::pubkey::{ParsePubkeyError, Pubkey},
    std::{error, num::ParseIntError},
    thiserror::Error,
};

#[derive(Debug, Error, Clone, PartialEq)]
pub enum SeedParseError {
    #[error("invalid hex seed: {0}")]
    Hex(#[from] hex::FromHexError),
    #[error("invalid pubkey seed: {0}")]
    Pubkey(#[from] ParsePubkeyError),
    #[error("invalid u8 seed: {0}")]
    U8(#[from] ParseIntError),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Display,
    Json,
}

/// Turns a seed argument into bytes.
///
/// A value without one of the known prefixes, including one with an
/// unknown prefix, is taken as UTF-8 text in full.
pub fn parse_seed(value: &str) -> Result<Vec<u8>, SeedParseError> {
    match value.split_once(':') {
        Some(("string", text)) => Ok(text.as_bytes().to_vec()),
        Some(("hex", hex)) => Ok(hex::decode(hex)?),
        Some(("pubkey", pubkey)) => Ok(pubkey.parse::<Pubkey>()?.to_bytes().to_vec()),
        Some(("u8", byte)) => Ok(vec![byte.parse::<u8>()?]),
        _ => Ok(value.as_bytes().to_vec()),
    }
}

pub fn try_get_program_id(matches: &ArgMatches) -> Result<String, Box<dyn error::Error>> {
    matches
        .try_get_one::<String>(PROGRAM_ID_ARG.name)?
        .cloned()
        .ok_or_else(|| format!("missing --{}", PROGRAM_ID_ARG.long).into())
}

pub fn try_get_seeds(matches: &ArgMatches) -> Result<Vec<Vec<u8>>, Box<dyn error::Error>> {
    Ok(matches
        .try_get_many::<Vec<u8>>(SEED_ARG.name)?
        .map(|seeds| seeds.cloned().collect())
        .unwrap_or_default())
}

pub fn try_get_output_format(
    matches: &ArgMatches,
) -> Result<OutputFormat, Box<dyn error::Error>> {
    Ok(matches
        .try_get_one::<String>(OUTPUT_ARG.name)?
        .map(|format| match format.as_str() {
            "display" => OutputFormat::Display,
            "json" => OutputFormat::Json,
            _ => unreachable!(),
        })
        .unwrap_or(OutputFormat::Display))
}

#[cfg(test)]
mod tests {
    use {super::*, crate::derivation::ProgramAddressArgs, clap::Command};

    fn app<'a>() -> Command<'a> {
        Command::new("test").program_address_args()
    }

    #[test]
    fn test_parse_seed() {
        assert_eq!(parse_seed("vault"), Ok(b"vault".to_vec()));
        assert_eq!(parse_seed("string:u8:1"), Ok(b"u8:1".to_vec()));
        assert_eq!(parse_seed("hex:00ff"), Ok(vec![0, 255]));
        assert_eq!(parse_seed("u8:254"), Ok(vec![254]));
        assert_eq!(parse_seed("pubkey:11111111111111111111111111111111"), Ok(vec![0; 32]));
        assert_eq!(parse_seed("other:x"), Ok(b"other:x".to_vec()));
        assert_eq!(parse_seed(""), Ok(vec![]));

        assert!(matches!(parse_seed("hex:0"), Err(SeedParseError::Hex(_))));
        assert!(matches!(parse_seed("u8:256"), Err(SeedParseError::U8(_))));
        assert_eq!(
            parse_seed("pubkey:111"),
            Err(SeedParseError::Pubkey(ParsePubkeyError::InvalidLength {
                expected_length: 32,
                received_length: 3,
            }))
        );
    }

    #[test]
    fn test_try_get_args() {
        let matches = app()
            .try_get_matches_from([
                "test",
                "--program-id",
                "11111111111111111111111111111111",
                "a",
                "u8:7",
                "--output",
                "json",
            ])
            .unwrap();
        assert_eq!(
            try_get_program_id(&matches).unwrap(),
            "11111111111111111111111111111111"
        );
        assert_eq!(try_get_seeds(&matches).unwrap(), vec![b"a".to_vec(), vec![7]]);
        assert_eq!(try_get_output_format(&matches).unwrap(), OutputFormat::Json);
    }

    #[test]
    fn test_no_seeds() {
        let matches = app()
            .try_get_matches_from(["test", "-p", "11111111111111111111111111111111"])
            .unwrap();
        assert!(try_get_seeds(&matches).unwrap().is_empty());
        assert_eq!(try_get_output_format(&matches).unwrap(), OutputFormat::Display);
    }

    #[test]
    fn test_bad_seed_is_rejected_by_clap() {
        assert!(app()
            .try_get_matches_from(["test", "-p", "11111111111111111111111111111111", "u8:x"])
            .is_err());
        assert!(app()
            .try_get_matches_from(["test", "-p", "1111", "--output", "yaml"])
            .is_err());
    }
}
