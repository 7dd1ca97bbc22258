//! Batch extraction of foot-height series from joint-angle logs.

use std::collections::BTreeMap;

use crate::forward;
use crate::leg::{JointPositions, Leg};

/// Per-leg foot-height series, index-aligned with the input samples.
///
/// Built once by [`foot_heights`] and read-only afterwards. Legs iterate in
/// low-level order.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct HeightTimeSeries {
    heights: BTreeMap<Leg, Vec<f32>>,
}

impl HeightTimeSeries {
    fn with_legs(legs: &[Leg]) -> Self {
        Self {
            heights: legs.iter().map(|&leg| (leg, Vec::new())).collect(),
        }
    }

    fn push(&mut self, leg: Leg, height: f32) {
        // `with_legs` created an entry for every requested leg
        self.heights
            .get_mut(&leg)
            .unwrap_or_else(|| unreachable!("no series for {leg}"))
            .push(height);
    }

    /// The height series of `leg`, or `None` if it was not requested.
    #[must_use]
    pub fn get(&self, leg: Leg) -> Option<&[f32]> {
        self.heights.get(&leg).map(Vec::as_slice)
    }

    /// Iterate over the computed legs and their series.
    pub fn iter(&self) -> impl Iterator<Item = (Leg, &[f32])> {
        self.heights.iter().map(|(&leg, series)| (leg, series.as_slice()))
    }

    /// Number of samples each series holds.
    #[must_use]
    pub fn sample_count(&self) -> usize {
        self.heights.values().next().map_or(0, Vec::len)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sample_count() == 0
    }
}

/// Compute the height of each requested leg's foot relative to the base, for
/// every sample in input order.
///
/// Each leg's series has exactly one entry per sample; an empty input yields
/// empty series, and a leg requested more than once is computed once.
/// Samples are independent of each other.
pub fn foot_heights<'a, I>(samples: I, legs: &[Leg]) -> HeightTimeSeries
where
    I: IntoIterator<Item = &'a JointPositions>,
{
    let mut series = HeightTimeSeries::with_legs(legs);
    // iterate the series' own key set so a duplicate request cannot push
    // two entries per sample
    let legs: Vec<Leg> = series.heights.keys().copied().collect();

    for sample in samples {
        for &leg in &legs {
            series.push(leg, forward::foot_height(leg, sample.leg_joints(leg)));
        }
    }

    series
}

/// [`foot_heights`] over all four legs.
pub fn foot_heights_all<'a, I>(samples: I) -> HeightTimeSeries
where
    I: IntoIterator<Item = &'a JointPositions>,
{
    foot_heights(samples, &Leg::ALL)
}

#[cfg(test)]
mod tests {
    use std::f32::consts::FRAC_PI_2;

    use super::{foot_heights, foot_heights_all};
    use crate::forward::foot_height;
    use crate::leg::{JointPositions, Leg, LegJoints};

    const EPSILON: f32 = 1e-5;

    #[test]
    fn empty_input_yields_empty_series() {
        let samples: Vec<JointPositions> = Vec::new();
        let series = foot_heights_all(&samples);
        assert!(series.is_empty());
        assert_eq!(series.sample_count(), 0);
        for leg in Leg::ALL {
            assert_eq!(series.get(leg), Some(&[][..]));
        }
    }

    #[test]
    fn series_length_equals_sample_count() {
        for count in [1, 7, 100] {
            let samples = vec![JointPositions::default(); count];
            let series = foot_heights_all(&samples);
            assert_eq!(series.sample_count(), count);
            for (_, heights) in series.iter() {
                assert_eq!(heights.len(), count);
            }
        }
    }

    #[test]
    fn duplicate_leg_requests_are_computed_once() {
        let samples = [JointPositions::default(); 3];
        let series = foot_heights(&samples, &[Leg::FrontLeft, Leg::FrontLeft]);

        assert_eq!(series.sample_count(), 3);
        assert_eq!(series.get(Leg::FrontLeft).unwrap().len(), 3);
        assert!(series.get(Leg::FrontRight).is_none());
    }

    #[test]
    fn only_requested_legs_are_computed() {
        let samples = [JointPositions::default(); 3];
        let series = foot_heights(&samples, &[Leg::FrontLeft, Leg::RearRight]);

        assert!(series.get(Leg::FrontLeft).is_some());
        assert!(series.get(Leg::RearRight).is_some());
        assert!(series.get(Leg::FrontRight).is_none());
        assert!(series.get(Leg::RearLeft).is_none());
    }

    /// Three all-zero samples produce a constant series at the leg's
    /// fully-extended reference height.
    #[test]
    fn zero_angle_samples_sit_at_the_reference_height() {
        let samples = [JointPositions::default(); 3];
        let series = foot_heights_all(&samples);

        for leg in Leg::ALL {
            let reference = foot_height(leg, LegJoints::default());
            let heights = series.get(leg).unwrap();
            assert_eq!(heights.len(), 3);
            for &height in heights {
                assert!((height - reference).abs() < EPSILON, "{leg}");
            }
        }
    }

    /// Setting one leg's hip to pi/2 lifts that foot to the height predicted
    /// by rotating its lower chain about the hip's x-axis; the other legs
    /// stay at their reference heights.
    #[test]
    fn hip_quarter_turn_moves_only_the_turned_leg() {
        for leg in Leg::ALL {
            let mut angles = [0.0f32; 12];
            angles[leg.joint_indices()[0]] = FRAC_PI_2;
            let sample = JointPositions(angles);

            let series = foot_heights_all(&[sample]);

            for other in Leg::ALL {
                let expected = if other == leg {
                    foot_height(other, LegJoints::new(FRAC_PI_2, 0.0, 0.0))
                } else {
                    foot_height(other, LegJoints::default())
                };
                let heights = series.get(other).unwrap();
                assert!((heights[0] - expected).abs() < EPSILON, "{leg} -> {other}");
            }
        }
    }
}
