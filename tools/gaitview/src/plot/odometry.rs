//! Rendering of the odometry path chart.

use std::path::Path;

use miette::{IntoDiagnostic, Result};
use nalgebra::Vector3;
use plotters::prelude::*;

use super::padded_range;
use crate::config::RenderConfig;

/// The odometry chart: ground-plane path on the left, position components
/// over time on the right.
pub struct OdometryChart<'a> {
    /// Seconds since the first retained sample.
    pub xs: &'a [f32],
    /// Odometry position estimates, one per sample.
    pub positions: &'a [Vector3<f32>],
}

pub fn render(chart: &OdometryChart<'_>, out: &Path, config: &RenderConfig) -> Result<()> {
    let root = BitMapBackend::new(out, (config.width, config.height)).into_drawing_area();
    root.fill(&WHITE).into_diagnostic()?;

    let (path_area, components_area) = root.split_horizontally((config.width / 2) as i32);

    // ground-plane path with start and end markers
    {
        let x_range = padded_range(chart.positions.iter().map(|position| position.x));
        let y_range = padded_range(chart.positions.iter().map(|position| position.y));

        let mut path_chart = ChartBuilder::on(&path_area)
            .margin(10)
            .caption("Odometry Path (X-Y Plane)", ("sans-serif", 22))
            .x_label_area_size(35)
            .y_label_area_size(60)
            .build_cartesian_2d(x_range, y_range)
            .into_diagnostic()?;

        path_chart
            .configure_mesh()
            .x_desc("X (m)")
            .y_desc("Y (m)")
            .draw()
            .into_diagnostic()?;

        let path_color = RGBColor(148, 103, 189);
        path_chart
            .draw_series(LineSeries::new(
                chart
                    .positions
                    .iter()
                    .map(|position| (position.x, position.y)),
                &path_color,
            ))
            .into_diagnostic()?
            .label("path")
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], path_color));

        if let (Some(first), Some(last)) = (chart.positions.first(), chart.positions.last()) {
            path_chart
                .draw_series(std::iter::once(Circle::new(
                    (first.x, first.y),
                    5,
                    GREEN.filled(),
                )))
                .into_diagnostic()?
                .label("start")
                .legend(|(x, y)| Circle::new((x + 10, y), 5, GREEN.filled()));

            path_chart
                .draw_series(std::iter::once(Cross::new((last.x, last.y), 5, RED)))
                .into_diagnostic()?
                .label("end")
                .legend(|(x, y)| Cross::new((x + 10, y), 5, RED));
        }

        path_chart
            .configure_series_labels()
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK)
            .draw()
            .into_diagnostic()?;
    }

    // position components over time
    {
        let time_range = padded_range(chart.xs.iter().copied());
        let value_range = padded_range(
            chart
                .positions
                .iter()
                .flat_map(|position| [position.x, position.y, position.z]),
        );

        let mut components_chart = ChartBuilder::on(&components_area)
            .margin(10)
            .caption("Position Components over Time", ("sans-serif", 22))
            .x_label_area_size(35)
            .y_label_area_size(60)
            .build_cartesian_2d(time_range, value_range)
            .into_diagnostic()?;

        components_chart
            .configure_mesh()
            .x_desc("Time (s)")
            .y_desc("Position (m)")
            .draw()
            .into_diagnostic()?;

        let components: [(&str, fn(&Vector3<f32>) -> f32); 3] = [
            ("x", |position| position.x),
            ("y", |position| position.y),
            ("z", |position| position.z),
        ];

        for (i, (name, component)) in components.into_iter().enumerate() {
            let color = Palette99::pick(i).to_rgba();
            components_chart
                .draw_series(LineSeries::new(
                    chart
                        .xs
                        .iter()
                        .zip(chart.positions)
                        .map(|(&time, position)| (time, component(position))),
                    &color,
                ))
                .into_diagnostic()?
                .label(name)
                .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color));
        }

        components_chart
            .configure_series_labels()
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK)
            .draw()
            .into_diagnostic()?;
    }

    root.present().into_diagnostic()?;
    tracing::info!("plot saved to {}", out.display());

    Ok(())
}
