//! The `odometry` subcommand: the logged odometry path and its components.

use std::path::PathBuf;

use clap::Args;
use miette::{IntoDiagnostic, Result, bail};
use nalgebra::Vector3;
use run_log::{elapsed_seconds, read_log};
use tracing::info;

use crate::config::RenderConfig;
use crate::plot::odometry::{self, OdometryChart};

#[derive(Args)]
pub struct OdometryOpts {
    /// Path to the run-log CSV file.
    pub csv: PathBuf,

    /// Start of the wall-clock window (H:M:S or H:M:S.f).
    #[arg(long)]
    pub start: Option<String>,

    /// End of the wall-clock window (H:M:S or H:M:S.f).
    #[arg(long)]
    pub end: Option<String>,

    /// Output PNG path; defaults to odometry.png in the output directory.
    #[arg(long)]
    pub out: Option<PathBuf>,
}

impl OdometryOpts {
    pub fn render(&self, config: &RenderConfig) -> Result<()> {
        let window = super::parse_window(self.start.as_deref(), self.end.as_deref())?;
        let records = read_log(&self.csv, window).into_diagnostic()?;
        if records.is_empty() {
            bail!("no records in the selected time range");
        }

        let Some(positions) = records
            .iter()
            .map(|record| record.odom_pos)
            .collect::<Option<Vec<Vector3<f32>>>>()
        else {
            bail!("log has no odom_pos columns");
        };

        info!(count = positions.len(), "loaded odometry");

        let base = records[0].wall_time;
        let xs: Vec<f32> = records
            .iter()
            .map(|record| elapsed_seconds(base, record.wall_time))
            .collect();

        let out = self
            .out
            .clone()
            .unwrap_or_else(|| config.output_dir.join("odometry.png"));
        if let Some(parent) = out.parent() {
            std::fs::create_dir_all(parent).into_diagnostic()?;
        }

        odometry::render(
            &OdometryChart {
                xs: &xs,
                positions: &positions,
            },
            &out,
            config,
        )
    }
}
