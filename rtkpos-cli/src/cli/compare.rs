// Comparison opmode
use clap::{value_parser, Arg, Command};
use std::path::PathBuf;

pub fn subcommand() -> Command {
    Command::new("compare")
        .arg_required_else_help(true)
        .about("Compare existing Emlid solutions to RTK (reference) solutions.")
        .arg(
            Arg::new("emlid")
                .long("emlid")
                .value_name("FILE")
                .value_parser(value_parser!(PathBuf))
                .required(true)
                .help("Emlid solution file."),
        )
        .arg(
            Arg::new("rtk")
                .long("rtk")
                .value_name("FILE")
                .value_parser(value_parser!(PathBuf))
                .required(true)
                .help("RTK (reference) solution file."),
        )
}
