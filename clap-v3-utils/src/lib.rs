//! Command line arguments shared by the program address tools.

pub mod derivation;
pub mod input_parsers;

pub struct ArgConstant<'a> {
    pub long: &'a str,
    pub name: &'a str,
    pub help: &'a str,
}

pub const PROGRAM_ID_ARG: ArgConstant<'static> = ArgConstant {
    long: "program-id",
    name: "program_id",
    help: "Base58 address of the program that owns the derived address",
};

/// Read when `--program-id` is not given.
pub const PROGRAM_ID_ENV: &str = "PDA_PROGRAM_ID";

pub const SEED_ARG: ArgConstant<'static> = ArgConstant {
    long: "seed",
    name: "seed",
    help: "Seeds in order. Each is string:<TEXT>, hex:<HEX>, pubkey:<BASE58>, u8:<0-255>, \
           or bare text",
};

pub const OUTPUT_ARG: ArgConstant<'static> = ArgConstant {
    long: "output",
    name: "output",
    help: "Output format",
};
