use {
    clap::{crate_description, crate_name, crate_version, ArgMatches, Command},
    pda_clap_v3_utils::{
        derivation::ProgramAddressArgs,
        input_parsers::{try_get_output_format, try_get_program_id, try_get_seeds, OutputFormat},
    },
    pda_sdk::{
        bridge::DeriveResponse,
        derivation::{derive_direct, derive_with_search, ProgramDerivedAddressInput},
    },
    std::{env, error, io, process::exit},
    tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter},
};

fn main() {
    tracing_subscriber::registry()
        .with(EnvFilter::new(env::var("RUST_LOG").unwrap_or_else(|_| "warn".into())))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let matches = app().try_get_matches().unwrap_or_else(|e| e.exit());
    match do_main(&matches) {
        Ok(output) => println!("{output}"),
        Err(err) => {
            eprintln!("error: {err}");
            exit(1);
        }
    }
}

fn app<'a>() -> Command<'a> {
    Command::new(crate_name!())
        .about(crate_description!())
        .version(crate_version!())
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("find")
                .about(
                    "Find a program derived address and its bump seed, trying bump seeds from \
                     255 down",
                )
                .program_address_args(),
        )
        .subcommand(
            Command::new("create")
                .about(
                    "Create a program derived address from seeds whose last seed is the bump \
                     seed",
                )
                .program_address_args(),
        )
}

fn do_main(matches: &ArgMatches) -> Result<String, Box<dyn error::Error>> {
    let (subcommand, matches) = matches.subcommand().ok_or("missing subcommand")?;
    let input =
        ProgramDerivedAddressInput::new(try_get_program_id(matches)?, try_get_seeds(matches)?);
    let format = try_get_output_format(matches)?;
    tracing::debug!(
        subcommand,
        program_id = %input.program_address,
        seeds = input.seeds.len(),
        "deriving program address"
    );

    let output = match subcommand {
        "find" => {
            let output = derive_with_search(&input)?;
            match format {
                OutputFormat::Display => {
                    format!("address: {}\nbump: {}", output.address, output.bump)
                }
                OutputFormat::Json => serde_json::to_string_pretty(&DeriveResponse {
                    address: output.address.to_string(),
                    bump: output.bump,
                })?,
            }
        }
        "create" => {
            let address = derive_direct(&input)?;
            match format {
                OutputFormat::Display => format!("address: {address}"),
                OutputFormat::Json => serde_json::to_string_pretty(&serde_json::json!({
                    "address": address.to_string()
                }))?,
            }
        }
        _ => unreachable!(),
    };
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SYSTEM_PROGRAM: &str = "11111111111111111111111111111111";

    fn run(args: &[&str]) -> Result<String, Box<dyn error::Error>> {
        let matches = app().try_get_matches_from(args)?;
        do_main(&matches)
    }

    #[test]
    fn test_find() {
        assert_eq!(
            run(&["pda", "find", "-p", SYSTEM_PROGRAM, "test-seed"]).unwrap(),
            "address: 3n5uLQWtj4NVqKFjWqj4WyE9gd1o4wbboD7kKpNc2bN4\nbump: 254"
        );

        let json = run(&[
            "pda",
            "find",
            "-p",
            SYSTEM_PROGRAM,
            "string:test-seed",
            "--output",
            "json",
        ])
        .unwrap();
        let response: DeriveResponse = serde_json::from_str(&json).unwrap();
        assert_eq!(
            response.address,
            "3n5uLQWtj4NVqKFjWqj4WyE9gd1o4wbboD7kKpNc2bN4"
        );
        assert_eq!(response.bump, 254);
    }

    #[test]
    fn test_create_with_found_bump() {
        assert_eq!(
            run(&["pda", "create", "-p", SYSTEM_PROGRAM, "test-seed", "u8:254"]).unwrap(),
            "address: 3n5uLQWtj4NVqKFjWqj4WyE9gd1o4wbboD7kKpNc2bN4"
        );
        let err = run(&["pda", "create", "-p", SYSTEM_PROGRAM, "oc", "u8:1"]).unwrap_err();
        assert_eq!(err.to_string(), "hash landed on curve");
    }

    #[test]
    fn test_derivation_errors() {
        let err = run(&["pda", "find", "-p", "not-base58!", "seed"]).unwrap_err();
        assert_eq!(err.to_string(), "invalid base58 encoding");

        let long_seed = format!("hex:{}", "00".repeat(33));
        let err = run(&["pda", "find", "-p", SYSTEM_PROGRAM, long_seed.as_str()]).unwrap_err();
        assert_eq!(err.to_string(), "seed too long: 33 bytes (max: 32)");
    }

    #[test]
    fn test_subcommand_required() {
        assert!(run(&["pda"]).is_err());
    }
}
