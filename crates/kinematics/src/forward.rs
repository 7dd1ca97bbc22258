//! The forward kinematics of a single leg.
//!
//! A leg is a chain of four segments, root to tip: hip, thigh, calf, foot.
//! Each segment carries a fixed translation from its parent joint and a
//! rotation axis for its own joint; the foot segment is rigidly attached.
//! The pose of the foot in the base frame is the left-to-right composition
//! of the segment transforms.

use nalgebra::{Isometry3, Point3, Translation3, Vector3, vector};

use super::dimensions;
use super::leg::{Leg, LegJoints};

/// The axis a segment's joint rotates about, in the parent segment's frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// Right-handed rotation about the x-axis (roll).
    X,
    /// Right-handed rotation about the y-axis (pitch).
    Y,
    /// No rotation, regardless of the joint angle.
    Fixed,
}

/// One link of a leg's kinematic chain.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    /// Translation from the parent joint to this segment's joint, in the
    /// parent's frame, in meters.
    pub offset: Vector3<f32>,
    /// Axis this segment's joint rotates about.
    pub axis: Axis,
}

impl Segment {
    /// Transform from this segment's frame to its parent's frame, for joint angle `q` in radians.
    #[must_use]
    pub fn to_parent(&self, q: f32) -> Isometry3<f32> {
        let translation = Translation3::from(self.offset);
        match self.axis {
            Axis::X => translation * Isometry3::rotation(Vector3::x() * q),
            Axis::Y => translation * Isometry3::rotation(Vector3::y() * q),
            Axis::Fixed => Isometry3::from(translation),
        }
    }
}

impl Leg {
    /// The segments of this leg's kinematic chain, root to tip.
    ///
    /// The legs differ only in the signs of the hip and thigh offsets; the
    /// axes and the lower-leg offsets are identical for all four.
    #[must_use]
    pub fn segments(self) -> [Segment; 4] {
        let x = if self.is_front() { 1.0f32 } else { -1.0 };
        let y = if self.is_left() { 1.0f32 } else { -1.0 };

        [
            Segment {
                offset: vector![x * dimensions::BASE_TO_HIP_X, y * dimensions::BASE_TO_HIP_Y, 0.0],
                axis: Axis::X,
            },
            Segment {
                offset: vector![0.0, y * dimensions::HIP_TO_THIGH_Y, 0.0],
                axis: Axis::Y,
            },
            Segment {
                offset: dimensions::THIGH_TO_CALF,
                axis: Axis::Y,
            },
            Segment {
                offset: dimensions::CALF_TO_FOOT,
                axis: Axis::Fixed,
            },
        ]
    }
}

/// Pose of the foot frame relative to the base frame for the given joint angles.
///
/// Total over all real-valued angles; out-of-range angles are physically
/// meaningless but not an error.
#[must_use]
pub fn foot_to_base(leg: Leg, joints: LegJoints) -> Isometry3<f32> {
    let angles = [joints.hip, joints.thigh, joints.calf, 0.0];

    leg.segments()
        .iter()
        .zip(angles)
        .fold(Isometry3::identity(), |base_to_parent, (segment, q)| {
            base_to_parent * segment.to_parent(q)
        })
}

/// Position of the foot in the base frame, in meters.
#[must_use]
pub fn foot_position(leg: Leg, joints: LegJoints) -> Point3<f32> {
    Point3::from(foot_to_base(leg, joints).translation.vector)
}

/// Vertical height of the foot relative to the base, in meters.
///
/// Negative below the base, which is where a standing robot's feet are.
#[must_use]
pub fn foot_height(leg: Leg, joints: LegJoints) -> f32 {
    foot_to_base(leg, joints).translation.z
}

#[cfg(test)]
mod tests {
    use std::f32::consts::{FRAC_PI_2, PI};

    use nalgebra::{Isometry3, Vector3, point, vector};

    use super::{foot_height, foot_position, foot_to_base};
    use crate::dimensions;
    use crate::leg::{Leg, LegJoints};

    const EPSILON: f32 = 1e-5;

    fn assert_close(actual: f32, expected: f32) {
        assert!(
            (actual - expected).abs() < EPSILON,
            "expected {expected}, got {actual}"
        );
    }

    /// With all angles at zero the chain is fully extended and the foot
    /// position is the plain sum of the segment offsets.
    #[test]
    fn zero_angles_reach_the_reference_position() {
        for leg in Leg::ALL {
            let expected = leg
                .segments()
                .iter()
                .fold(vector![0.0, 0.0, 0.0], |sum, segment| sum + segment.offset);

            let position = foot_position(leg, LegJoints::default());
            assert!((position.coords - expected).norm() < EPSILON, "{leg}");
        }
    }

    #[test]
    fn front_right_reference_position() {
        let position = foot_position(Leg::FrontRight, LegJoints::default());
        assert!((position - point![0.1934, -0.142, -0.426]).norm() < EPSILON);
    }

    /// Sweeping only the calf rotates the foot offset about the calf joint's
    /// y-axis: the height follows `calf_z + foot_z * cos(q)`.
    #[test]
    fn calf_sweep_traces_a_cosine() {
        let steps = 32;
        for i in 0..steps {
            let q = 2.0 * PI * i as f32 / steps as f32;
            let expected = dimensions::THIGH_TO_CALF.z + dimensions::CALF_TO_FOOT.z * q.cos();

            let height = foot_height(Leg::FrontLeft, LegJoints::new(0.0, 0.0, q));
            assert_close(height, expected);
        }
    }

    /// Mirrored legs differ only in the sign of their lateral offsets, so
    /// mirroring the hip (roll) angle must produce the same height.
    #[test]
    fn mirrored_legs_have_mirrored_heights() {
        let pairs = [
            (Leg::FrontLeft, Leg::FrontRight),
            (Leg::RearLeft, Leg::RearRight),
        ];

        for (left, right) in pairs {
            for hip in [-0.7f32, -0.2, 0.0, 0.4, 1.1] {
                let left_height = foot_height(left, LegJoints::new(hip, 0.3, -0.8));
                let right_height = foot_height(right, LegJoints::new(-hip, 0.3, -0.8));
                assert_close(left_height, right_height);
            }
        }
    }

    /// Rolling the hip by pi/2 rotates the rest of the chain about the hip's
    /// x-axis; the height change must match that rotation applied to the
    /// summed lower-chain offsets.
    #[test]
    fn hip_quarter_turn_displacement() {
        for leg in Leg::ALL {
            let segments = leg.segments();
            let lower_chain = segments[1].offset + segments[2].offset + segments[3].offset;
            let expected =
                Isometry3::rotation(Vector3::x() * FRAC_PI_2).transform_vector(&lower_chain);

            let pose = foot_to_base(leg, LegJoints::new(FRAC_PI_2, 0.0, 0.0));
            let hip_to_foot = pose.translation.vector - segments[0].offset;

            assert!((hip_to_foot - expected).norm() < EPSILON, "{leg}");
            assert_close(pose.translation.z, expected.z);
        }
    }

    /// The full pose carries the accumulated rotation, not just the translation.
    #[test]
    fn pose_rotation_accumulates_pitch() {
        let thigh = 0.5;
        let calf = -1.2;
        let pose = foot_to_base(Leg::RearRight, LegJoints::new(0.0, thigh, calf));

        let (roll, pitch, yaw) = pose.rotation.euler_angles();
        assert_close(roll, 0.0);
        assert_close(pitch, thigh + calf);
        assert_close(yaw, 0.0);
    }
}
