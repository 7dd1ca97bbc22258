//! Rendering of the stacked contact-force / foot-height chart.

use std::ops::Range;
use std::path::Path;

use kinematics::HeightTimeSeries;
use miette::{IntoDiagnostic, Result};
use plotters::coord::Shift;
use plotters::prelude::*;

use super::{leg_color, padded_range};
use crate::config::RenderConfig;

/// Everything the heights chart draws; the force and joint panels are
/// omitted when their data is absent.
pub struct HeightsChart<'a> {
    /// Seconds since the first retained sample, shared x-axis.
    pub xs: &'a [f32],
    pub heights: &'a HeightTimeSeries,
    /// One `[FR, FL, RR, RL]` force reading per sample, if the log has them.
    pub forces: Option<&'a [[f32; 4]]>,
    pub force_threshold: f32,
    /// Additional joint-angle traces as `(name, series)` pairs.
    pub joints: &'a [(String, Vec<f32>)],
}

/// One stacked panel: a caption, a y-axis label and a set of named line series.
struct Panel {
    caption: String,
    y_desc: String,
    series: Vec<(String, RGBColor, Vec<(f32, f32)>)>,
}

fn draw_panel(
    area: &DrawingArea<BitMapBackend<'_>, Shift>,
    x_range: Range<f32>,
    panel: &Panel,
) -> Result<()> {
    let y_range = padded_range(
        panel
            .series
            .iter()
            .flat_map(|(_, _, points)| points.iter().map(|&(_, y)| y)),
    );

    let mut chart = ChartBuilder::on(area)
        .margin(10)
        .caption(&panel.caption, ("sans-serif", 22))
        .x_label_area_size(35)
        .y_label_area_size(60)
        .build_cartesian_2d(x_range, y_range)
        .into_diagnostic()?;

    chart
        .configure_mesh()
        .x_desc("Time (s)")
        .y_desc(panel.y_desc.as_str())
        .draw()
        .into_diagnostic()?;

    for (label, color, points) in &panel.series {
        let color = *color;
        chart
            .draw_series(LineSeries::new(points.iter().copied(), &color))
            .into_diagnostic()?
            .label(label.as_str())
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color));
    }

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()
        .into_diagnostic()?;

    Ok(())
}

pub fn render(chart: &HeightsChart<'_>, out: &Path, config: &RenderConfig) -> Result<()> {
    let x_range = padded_range(chart.xs.iter().copied());

    let mut panels = Vec::new();

    if let Some(forces) = chart.forces {
        let threshold_line = vec![
            (x_range.start, chart.force_threshold),
            (x_range.end, chart.force_threshold),
        ];
        let mut series = vec![("threshold".to_owned(), RGBColor(0, 0, 0), threshold_line)];

        for (leg, _) in chart.heights.iter() {
            let points = chart
                .xs
                .iter()
                .zip(forces)
                .map(|(&x, sample)| (x, sample[leg.index()]))
                .collect();
            series.push((format!("{leg}"), leg_color(leg), points));
        }

        panels.push(Panel {
            caption: format!("Foot Contact Forces (threshold {} N)", chart.force_threshold),
            y_desc: "Force (N)".to_owned(),
            series,
        });
    }

    panels.push(Panel {
        caption: "Foot Heights Relative to Base".to_owned(),
        y_desc: "Height (m)".to_owned(),
        series: chart
            .heights
            .iter()
            .map(|(leg, heights)| {
                let points = chart.xs.iter().copied().zip(heights.iter().copied()).collect();
                (format!("{leg}"), leg_color(leg), points)
            })
            .collect(),
    });

    if !chart.joints.is_empty() {
        let series = chart
            .joints
            .iter()
            .enumerate()
            .map(|(i, (name, trace))| {
                let points = chart.xs.iter().copied().zip(trace.iter().copied()).collect();
                let color = Palette99::pick(i).to_rgba();
                (name.clone(), RGBColor(color.0, color.1, color.2), points)
            })
            .collect();

        panels.push(Panel {
            caption: "Joint Positions".to_owned(),
            y_desc: "Angle (rad)".to_owned(),
            series,
        });
    }

    let root = BitMapBackend::new(out, (config.width, config.height)).into_drawing_area();
    root.fill(&WHITE).into_diagnostic()?;

    for (area, panel) in root.split_evenly((panels.len(), 1)).iter().zip(&panels) {
        draw_panel(area, x_range.clone(), panel)?;
    }

    root.present().into_diagnostic()?;
    tracing::info!("plot saved to {}", out.display());

    Ok(())
}
