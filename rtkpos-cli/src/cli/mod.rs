use std::{
    fs::File,
    path::{Path, PathBuf},
};

use clap::{value_parser, Arg, ArgAction, ArgMatches, ColorChoice, Command};
use rtkpos::prelude::{Config, DuplicatePolicy};

use crate::Error;

mod compare;
mod solve;
mod workspace;

pub use workspace::Workspace;

pub struct Cli {
    /// Arguments passed by user
    pub matches: ArgMatches,
}

impl Default for Cli {
    fn default() -> Self {
        Self::new()
    }
}

/// Builds the command line interface
pub fn command() -> Command {
    Command::new("rtkpos")
        .version(env!("CARGO_PKG_VERSION"))
        .about("RTKLIB solutions post processing and comparison")
        .long_about("rtkpos resolves RTKLIB solutions (rnx2rtkp) and compares
the fixed solutions of a low cost receiver (Emlid) to a reference receiver (RTK).
Comparisons are rendered as HTML plots in the session workspace.")
        .arg_required_else_help(true)
        .subcommand_required(true)
        .color(ColorChoice::Always)
        .next_help_heading("Session (custom preferences)")
        .arg(
            Arg::new("quiet")
                .short('q')
                .long("quiet")
                .action(ArgAction::SetTrue)
                .global(true)
                .help("Disable the automatic plots opener (Web browser)."),
        )
        .arg(
            Arg::new("workspace")
                .short('w')
                .long("workspace")
                .value_name("FOLDER")
                .value_parser(value_parser!(PathBuf))
                .global(true)
                .help("Define custom workspace location. See --help for more information.")
                .long_help("Workspace is where the plots are to be generated.
The $RTKPOS_WORKSPACE variable is automatically picked up by this application and always prefered.
Use --workspace,-w to define it at runtime if you prefer.
When no workspace is defined, we simply create a local folder."),
        )
        .next_help_heading("Comparison")
        .arg(
            Arg::new("csv")
                .long("csv")
                .action(ArgAction::SetTrue)
                .global(true)
                .help("Export the altitude differences as CSV, next to the plots."),
        )
        .arg(
            Arg::new("duplicates")
                .long("duplicates")
                .value_name("POLICY")
                .value_parser(["last", "first", "reject"])
                .default_value("last")
                .global(true)
                .help("Repeated timestamps in the RTK solutions: latest one is retained (last),
first one is retained (first), or the comparison is aborted (reject)."),
        )
        .next_help_heading("Exclusive Opmodes: you can only run one at a time.")
        .subcommand(solve::subcommand())
        .subcommand(solve::run_subcommand())
        .subcommand(compare::subcommand())
}

impl Cli {
    /// Build new command line interface
    pub fn new() -> Self {
        Self {
            matches: command().get_matches(),
        }
    }

    /// True when -q (quiet) option is active
    pub fn quiet(&self) -> bool {
        self.matches.get_flag("quiet")
    }

    /// True when CSV export is requested
    pub fn csv(&self) -> bool {
        self.matches.get_flag("csv")
    }

    /// Custom workspace location
    pub fn workspace(&self) -> Option<&PathBuf> {
        self.matches.get_one::<PathBuf>("workspace")
    }

    /// Duplicate timestamps handling
    pub fn duplicate_policy(&self) -> DuplicatePolicy {
        self.matches
            .get_one::<String>("duplicates")
            .and_then(|policy| policy.parse().ok())
            .unwrap_or_default()
    }
}

/// Returns path argument
pub fn path_arg<'a>(matches: &'a ArgMatches, id: &'static str) -> Result<&'a Path, Error> {
    matches
        .get_one::<PathBuf>(id)
        .map(|path| path.as_path())
        .ok_or(Error::MissingArgument(id))
}

/// Builds the post processing [Config]: from the -c configuration
/// file when provided, then possibly customized by individual arguments.
pub fn solver_config(matches: &ArgMatches) -> Result<Config, Error> {
    let mut cfg = match matches.get_one::<PathBuf>("cfg") {
        Some(path) => {
            let fd = File::open(path)?;
            let cfg: Config = serde_json::from_reader(fd)?;
            info!("using configuration \"{}\"", path.display());
            cfg
        },
        None => Config::default(),
    };
    if let Some(path) = matches.get_one::<PathBuf>("exe") {
        cfg = cfg.with_executable(path);
    }
    if let Some(path) = matches.get_one::<PathBuf>("rtklib-cfg") {
        cfg = cfg.with_config_file(path);
    }
    if let Some(path) = matches.get_one::<PathBuf>("rover") {
        cfg = cfg.with_rover_observations(path);
    }
    if let Some(path) = matches.get_one::<PathBuf>("base") {
        cfg = cfg.with_base_observations(path);
    }
    if let Some(path) = matches.get_one::<PathBuf>("nav") {
        cfg = cfg.with_navigation(path);
    }
    if let Some(path) = matches.get_one::<PathBuf>("output") {
        cfg = cfg.with_output(path);
    }
    debug!("{:?}", cfg);
    Ok(cfg)
}
