//! Command line tool to resolve and compare RTKLIB solutions.
//! Refer to README for command line arguments.

mod cli; // command line interface
mod csv; // export to CSV instead of plotting
mod plot;

use cli::{path_arg, solver_config, Cli, Workspace};
use csv::csv_export_height_difference;
use plot::{
    plot_height_difference, plot_height_difference_timedomain, plot_positions, plot_quality,
};

use rtkpos::prelude::{Comparison, ProcessError, QualitySummary, Rnx2Rtkp};

use plotly::Plot;
use std::io::Write;
use std::path::Path;

use env_logger::{Builder, Target};

#[macro_use]
extern crate log;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("i/o error")]
    StdioError(#[from] std::io::Error),
    #[error("solution error")]
    SolutionError(#[from] rtkpos::Error),
    #[error("invalid configuration")]
    ConfigError(#[from] serde_json::Error),
    #[error("post processing failure")]
    ProcessError(#[from] ProcessError),
    #[error("missing argument \"{0}\"")]
    MissingArgument(&'static str),
}

/*
 * Session name, from the file being compared
 */
fn session_name(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().to_string())
        .unwrap_or_else(|| String::from("session"))
}

fn summarize(name: &str, quality: &QualitySummary) {
    info!(
        "{}: {} solutions - Q1 {:.2}% - Q2 {:.2}% - other {:.2}%",
        name,
        quality.total,
        quality.q1_percent,
        quality.q2_percent,
        quality.other_percent(),
    );
}

fn render_html(workspace: &Workspace, filename: &str, plot: &Plot) -> Result<(), Error> {
    let mut fd = workspace.create_file(filename)?;
    write!(fd, "{}", plot.to_html())?;
    Ok(())
}

/*
 * Renders the comparison in the session workspace
 */
fn render(cli: &Cli, session: &str, cmp: &Comparison) -> Result<(), Error> {
    summarize("emlid", &cmp.emlid_quality);
    summarize("rtk", &cmp.rtk_quality);
    info!(
        "{} matched epochs - mean height difference {:.4} m - max {:.4} m",
        cmp.alignment.len(),
        cmp.difference.mean,
        cmp.difference.max(),
    );

    if let Some((first, last)) = cmp.alignment.time_span() {
        info!("matched epochs from {} to {}", first, last);
    }

    let workspace = Workspace::new(session, cli)?;

    render_html(&workspace, "positions.html", &plot_positions(cmp))?;
    render_html(&workspace, "quality.html", &plot_quality(cmp))?;
    render_html(
        &workspace,
        "height_difference.html",
        &plot_height_difference(cmp),
    )?;
    render_html(
        &workspace,
        "height_difference_timedomain.html",
        &plot_height_difference_timedomain(cmp),
    )?;

    if cli.csv() {
        let mut fd = workspace.create_file("height_difference.csv")?;
        csv_export_height_difference(&mut fd, cmp)?;
    }

    if !cli.quiet() {
        workspace.open_with_web_browser("height_difference.html");
    }
    Ok(())
}

pub fn main() -> Result<(), Error> {
    let mut builder = Builder::from_default_env();
    builder
        .target(Target::Stdout)
        .format_timestamp_secs()
        .format_module_path(false)
        .init();

    let cli = Cli::new();
    let policy = cli.duplicate_policy();

    match cli.matches.subcommand() {
        Some(("solve", submatches)) => {
            let cfg = solver_config(submatches)?;
            let output = Rnx2Rtkp::new(&cfg).run()?;
            info!("solutions \"{}\" are ready", output.display());
            let quality = QualitySummary::from_path(&output)?;
            summarize(&session_name(&output), &quality);
        },
        Some(("run", submatches)) => {
            let cfg = solver_config(submatches)?;
            let rtk = path_arg(submatches, "rtk")?;
            let cmp = Comparison::from_config(&cfg, rtk, policy)?;
            render(&cli, &session_name(&cfg.output_path), &cmp)?;
        },
        Some(("compare", submatches)) => {
            let emlid = path_arg(submatches, "emlid")?;
            let rtk = path_arg(submatches, "rtk")?;
            let cmp = Comparison::from_files(emlid, rtk, policy)?;
            render(&cli, &session_name(emlid), &cmp)?;
        },
        _ => unreachable!("subcommand is required"),
    }
    Ok(())
}
