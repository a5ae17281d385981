use {
    crate::{input_parsers::parse_seed, OUTPUT_ARG, PROGRAM_ID_ARG, PROGRAM_ID_ENV, SEED_ARG},
    clap::{builder::PossibleValuesParser, Arg, Command},
};

// The constant `OUTPUT_FORMATS` and function `try_get_output_format` must always be
// updated in sync
pub const OUTPUT_FORMATS: &[&str] = &["display", "json"];

pub trait ProgramAddressArgs {
    fn program_address_args(self) -> Self;
}

impl ProgramAddressArgs for Command<'_> {
    fn program_address_args(self) -> Self {
        self.arg(program_id_arg()).arg(seed_arg()).arg(output_arg())
    }
}

pub fn program_id_arg<'a>() -> Arg<'a> {
    Arg::new(PROGRAM_ID_ARG.name)
        .long(PROGRAM_ID_ARG.long)
        .short('p')
        .env(PROGRAM_ID_ENV)
        .value_name("PUBKEY")
        .takes_value(true)
        .required(true)
        .help(PROGRAM_ID_ARG.help)
}

pub fn seed_arg<'a>() -> Arg<'a> {
    Arg::new(SEED_ARG.name)
        .value_name("SEED")
        .takes_value(true)
        .multiple_values(true)
        .value_parser(parse_seed)
        .help(SEED_ARG.help)
}

pub fn output_arg<'a>() -> Arg<'a> {
    Arg::new(OUTPUT_ARG.name)
        .long(OUTPUT_ARG.long)
        .value_parser(PossibleValuesParser::new(OUTPUT_FORMATS))
        .default_value("display")
        .value_name("FORMAT")
        .takes_value(true)
        .help(OUTPUT_ARG.help)
}
