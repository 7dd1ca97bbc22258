//! Chart rendering on top of `plotters`.

pub mod heights;
pub mod odometry;

use std::ops::Range;

use kinematics::Leg;
use plotters::style::RGBColor;

/// Fixed color per leg, so the force and height panels match up.
pub(crate) fn leg_color(leg: Leg) -> RGBColor {
    match leg {
        Leg::FrontRight => RGBColor(214, 39, 40),
        Leg::FrontLeft => RGBColor(31, 119, 180),
        Leg::RearRight => RGBColor(255, 127, 14),
        Leg::RearLeft => RGBColor(44, 160, 44),
    }
}

/// Axis range covering `values` with a little padding on both ends.
///
/// Degenerate inputs (single value, constant series) still get a non-empty
/// range so chart construction never fails.
pub(crate) fn padded_range(values: impl Iterator<Item = f32>) -> Range<f32> {
    let (min, max) = values.fold((f32::INFINITY, f32::NEG_INFINITY), |(lo, hi), value| {
        (lo.min(value), hi.max(value))
    });

    if min > max {
        return 0.0..1.0;
    }

    let pad = ((max - min) * 0.05).max(1e-3);
    (min - pad)..(max + pad)
}
