use std::env;
use std::ffi::OsString;
use std::path::PathBuf;
use std::process;

use clap::{value_parser, Arg, Command};

pub mod command_handlers;
pub mod errors;
pub mod filter;
pub mod samples;
pub mod utils;

fn cli() -> Command {
    Command::new(env!("CARGO_PKG_NAME"))
        .about("Smooths a text file of samples with a single-pole RC low-pass filter")
        .disable_help_flag(true)
        .disable_version_flag(true)
        .arg(
            Arg::new("input")
                .required(true)
                .allow_hyphen_values(true)
                .value_parser(value_parser!(PathBuf))
                .help("Text file of whitespace-separated samples"),
        )
        .arg(
            Arg::new("output")
                .required(true)
                .allow_hyphen_values(true)
                .value_parser(value_parser!(PathBuf))
                .help("File to write the filtered samples to, one per line"),
        )
}

/// Takes exactly two operands after the program name. The count is checked
/// before clap sees the arguments so a leading `--` cannot shift them.
fn parse_args(args: &[OsString]) -> Result<(PathBuf, PathBuf), errors::FilterError> {
    let program = args
        .first()
        .map(|p| p.to_string_lossy().into_owned())
        .unwrap_or_else(|| env!("CARGO_PKG_NAME").to_string());
    let usage = || errors::FilterError::Usage { program: program.clone() };

    if args.len() != 3 {
        return Err(usage());
    }
    let matches = cli().try_get_matches_from(args).map_err(|_| usage())?;
    match (
        matches.get_one::<PathBuf>("input"),
        matches.get_one::<PathBuf>("output"),
    ) {
        (Some(input), Some(output)) => Ok((input.clone(), output.clone())),
        _ => Err(usage()),
    }
}

fn main() {
    let args: Vec<OsString> = env::args_os().collect();
    let (input, output) = match parse_args(&args) {
        Ok(paths) => paths,
        Err(usage) => {
            println!("{}", usage);
            process::exit(usage.exit_status());
        }
    };

    process::exit(command_handlers::run(&input, &output));
}
