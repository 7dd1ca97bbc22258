//! Command-line interface of the tool.

pub mod heights;
pub mod odometry;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use miette::{IntoDiagnostic, Result};
use run_log::TimeWindow;

#[derive(Parser)]
#[command(
    name = "gaitview",
    version,
    about = "Offline analysis plots for quadruped deployment run logs"
)]
pub struct Cli {
    /// Path to a TOML file with render settings.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Plot per-leg foot heights relative to the base, with contact forces.
    Heights(heights::HeightsOpts),
    /// Plot the odometry path and its position components.
    Odometry(odometry::OdometryOpts),
}

/// Build a wall-clock window from the optional `--start`/`--end` strings.
pub(crate) fn parse_window(start: Option<&str>, end: Option<&str>) -> Result<TimeWindow> {
    let parse = |value: Option<&str>| {
        value
            .map(run_log::parse_wall_time)
            .transpose()
            .into_diagnostic()
    };

    Ok(TimeWindow::new(parse(start)?, parse(end)?))
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::{Cli, parse_window};

    #[test]
    fn cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn window_accepts_partial_bounds() {
        let window = parse_window(Some("10:00:00"), None).unwrap();
        assert!(window.start.is_some());
        assert!(window.end.is_none());

        assert!(parse_window(Some("nope"), None).is_err());
    }
}
