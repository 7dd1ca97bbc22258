//! Contact detection from foot-force measurements.

use kinematics::Leg;

/// Default force above which a foot counts as in contact, in newtons.
pub const DEFAULT_FORCE_THRESHOLD: f32 = 25.0;

/// Per-foot boolean contact series derived from force measurements.
///
/// `forces` holds one `[FR, FL, RR, RL]` reading per sample; the output is
/// index-aligned with it. Force sensors are noisy around touchdown, so the
/// threshold should sit well above the sensor's resting bias.
#[must_use]
pub fn contact_mask(forces: &[[f32; 4]], threshold: f32) -> [Vec<bool>; 4] {
    let mut mask: [Vec<bool>; 4] = Default::default();

    for sample in forces {
        for (foot, &force) in sample.iter().enumerate() {
            mask[foot].push(force > threshold);
        }
    }

    mask
}

/// The contact series of a single leg within a [`contact_mask`] result.
#[must_use]
pub fn leg_contacts(mask: &[Vec<bool>; 4], leg: Leg) -> &[bool] {
    &mask[leg.index()]
}
