//! The `heights` subcommand: foot heights relative to the base, reconstructed
//! from the logged joint angles.

use std::path::PathBuf;
use std::str::FromStr;

use clap::Args;
use kinematics::leg::JOINT_NAMES;
use kinematics::{JointPositions, Leg, foot_heights};
use miette::{IntoDiagnostic, Result, bail};
use run_log::{DEFAULT_FORCE_THRESHOLD, contact_mask, elapsed_seconds, leg_contacts, read_log};
use tracing::info;

use crate::config::RenderConfig;
use crate::plot::heights::{self, HeightsChart};

fn parse_leg(value: &str) -> Result<Leg, String> {
    Leg::from_str(value)
        .map_err(|_| format!("unknown leg '{value}', expected one of FR, FL, RR, RL"))
}

fn parse_joint(value: &str) -> Result<usize, String> {
    JOINT_NAMES
        .iter()
        .position(|name| name.eq_ignore_ascii_case(value))
        .ok_or_else(|| format!("unknown joint '{value}', expected e.g. FR_hip or RL_calf"))
}

#[derive(Args)]
pub struct HeightsOpts {
    /// Path to the run-log CSV file.
    pub csv: PathBuf,

    /// Start of the wall-clock window (H:M:S or H:M:S.f).
    #[arg(long)]
    pub start: Option<String>,

    /// End of the wall-clock window (H:M:S or H:M:S.f).
    #[arg(long)]
    pub end: Option<String>,

    /// Legs to plot; defaults to all four.
    #[arg(long, value_parser = parse_leg, num_args = 1.., value_delimiter = ',')]
    pub legs: Vec<Leg>,

    /// Force above which a foot counts as in contact, in newtons.
    #[arg(long, default_value_t = DEFAULT_FORCE_THRESHOLD)]
    pub force_threshold: f32,

    /// Joints whose angles to plot in an extra panel (e.g. FR_hip,FR_calf).
    #[arg(long, value_parser = parse_joint, num_args = 1.., value_delimiter = ',')]
    pub joints: Vec<usize>,

    /// Output PNG path; defaults to foot_heights.png in the output directory.
    #[arg(long)]
    pub out: Option<PathBuf>,
}

impl HeightsOpts {
    pub fn render(&self, config: &RenderConfig) -> Result<()> {
        let window = super::parse_window(self.start.as_deref(), self.end.as_deref())?;
        let records = read_log(&self.csv, window).into_diagnostic()?;
        if records.is_empty() {
            bail!("no records in the selected time range");
        }

        info!(
            count = records.len(),
            start = %records[0].wall_time,
            end = %records[records.len() - 1].wall_time,
            "loaded run log"
        );

        let legs = if self.legs.is_empty() {
            Leg::ALL.to_vec()
        } else {
            self.legs.clone()
        };

        let samples: Vec<JointPositions> =
            records.iter().map(|record| record.joints).collect();
        let series = foot_heights(&samples, &legs);

        let base = records[0].wall_time;
        let xs: Vec<f32> = records
            .iter()
            .map(|record| elapsed_seconds(base, record.wall_time))
            .collect();

        // all-or-nothing: the force columns are a property of the file
        let forces: Option<Vec<[f32; 4]>> =
            records.iter().map(|record| record.foot_forces).collect();

        if let Some(forces) = &forces {
            let mask = contact_mask(forces, self.force_threshold);
            for &leg in &legs {
                let contacts = leg_contacts(&mask, leg);
                let in_contact = contacts.iter().filter(|&&contact| contact).count();
                info!(
                    %leg,
                    duty_factor = in_contact as f32 / contacts.len().max(1) as f32,
                    "contact statistics"
                );
            }
        }

        let joint_traces: Vec<(String, Vec<f32>)> = self
            .joints
            .iter()
            .map(|&index| {
                let trace = samples.iter().map(|sample| sample.0[index]).collect();
                (JOINT_NAMES[index].to_owned(), trace)
            })
            .collect();

        let out = self
            .out
            .clone()
            .unwrap_or_else(|| config.output_dir.join("foot_heights.png"));
        if let Some(parent) = out.parent() {
            std::fs::create_dir_all(parent).into_diagnostic()?;
        }

        heights::render(
            &HeightsChart {
                xs: &xs,
                heights: &series,
                forces: forces.as_deref(),
                force_threshold: self.force_threshold,
                joints: &joint_traces,
            },
            &out,
            config,
        )
    }
}
