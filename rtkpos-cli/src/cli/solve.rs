// Post processing opmodes
use clap::{value_parser, Arg, Command};
use std::path::PathBuf;

fn path_arg(id: &'static str) -> Arg {
    Arg::new(id)
        .long(id)
        .value_name("FILE")
        .value_parser(value_parser!(PathBuf))
}

fn solver_args(cmd: Command) -> Command {
    cmd.arg(
        path_arg("cfg")
            .short('c')
            .help("Post processing configuration (JSON). See --help for more information.")
            .long_help("Post processing configuration, as JSON. Example:
{
    \"executable_path\": \"/opt/RTKLIB/bin/rnx2rtkp\",
    \"config_file_path\": \"rtklib.conf\",
    \"rover_obs_path\": \"Rover.24O\",
    \"base_obs_path\": \"Base.24o\",
    \"nav_path\": \"Nav.24n\",
    \"output_path\": \"528rtk.pos\"
}
Missing fields use default values. Individual options have precedence."),
    )
    .arg(path_arg("exe").help("rnx2rtkp executable."))
    .arg(path_arg("rtklib-cfg").help("RTKLIB configuration file (rnx2rtkp -k)."))
    .arg(path_arg("rover").help("Rover observations (RINEX)."))
    .arg(path_arg("base").help("Base station observations (RINEX)."))
    .arg(path_arg("nav").help("Navigation data (RINEX)."))
    .arg(
        path_arg("output")
            .short('o')
            .help("Solution file to generate (rnx2rtkp -o)."),
    )
}

/// Post processing only
pub fn subcommand() -> Command {
    solver_args(
        Command::new("solve")
            .arg_required_else_help(true)
            .about("Resolve the Emlid solutions with rnx2rtkp."),
    )
}

/// Post processing followed by the comparison
pub fn run_subcommand() -> Command {
    solver_args(
        Command::new("run")
            .arg_required_else_help(true)
            .about("Resolve the Emlid solutions with rnx2rtkp, then compare them to RTK solutions."),
    )
    .arg(
        path_arg("rtk")
            .required(true)
            .help("RTK (reference) solution file."),
    )
}
