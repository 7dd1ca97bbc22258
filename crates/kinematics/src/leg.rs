//! Leg identifiers and joint-angle containers.

use strum::{Display, EnumString};

/// Names of the twelve joints in low-level order, three per leg.
pub const JOINT_NAMES: [&str; 12] = [
    "FR_hip", "FR_thigh", "FR_calf", "FL_hip", "FL_thigh", "FL_calf", "RR_hip", "RR_thigh",
    "RR_calf", "RL_hip", "RL_thigh", "RL_calf",
];

/// One of the four legs of the robot.
///
/// The declaration order matches the low-level joint and foot-sensor order
/// used by the deployment logger: FR, FL, RR, RL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, EnumString)]
#[strum(ascii_case_insensitive)]
pub enum Leg {
    #[strum(serialize = "FR")]
    FrontRight,
    #[strum(serialize = "FL")]
    FrontLeft,
    #[strum(serialize = "RR")]
    RearRight,
    #[strum(serialize = "RL")]
    RearLeft,
}

impl Leg {
    /// All four legs, in low-level order.
    pub const ALL: [Leg; 4] = [
        Leg::FrontRight,
        Leg::FrontLeft,
        Leg::RearRight,
        Leg::RearLeft,
    ];

    /// Index of this leg in the low-level order, also the index of its foot
    /// in the `foot_force` array.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Leg::FrontRight => 0,
            Leg::FrontLeft => 1,
            Leg::RearRight => 2,
            Leg::RearLeft => 3,
        }
    }

    /// Indices of this leg's hip, thigh and calf angles within a [`JointPositions`] sample.
    #[must_use]
    pub const fn joint_indices(self) -> [usize; 3] {
        let base = self.index() * 3;
        [base, base + 1, base + 2]
    }

    /// Whether this leg is in front of the base frame (positive x).
    #[must_use]
    pub const fn is_front(self) -> bool {
        matches!(self, Leg::FrontRight | Leg::FrontLeft)
    }

    /// Whether this leg is on the left side of the robot (positive y).
    #[must_use]
    pub const fn is_left(self) -> bool {
        matches!(self, Leg::FrontLeft | Leg::RearLeft)
    }
}

/// The hip, thigh and calf angles of a single leg, in radians.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct LegJoints {
    pub hip: f32,
    pub thigh: f32,
    pub calf: f32,
}

impl LegJoints {
    #[must_use]
    pub const fn new(hip: f32, thigh: f32, calf: f32) -> Self {
        Self { hip, thigh, calf }
    }
}

/// One sample of all twelve measured joint angles, in radians.
///
/// Stored in low-level order: FR, FL, RR, RL, with hip, thigh, calf per leg.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct JointPositions(pub [f32; 12]);

impl JointPositions {
    /// Extract the three angles of `leg` from this sample.
    #[must_use]
    pub fn leg_joints(&self, leg: Leg) -> LegJoints {
        let [hip, thigh, calf] = leg.joint_indices().map(|i| self.0[i]);
        LegJoints { hip, thigh, calf }
    }
}

impl From<[f32; 12]> for JointPositions {
    fn from(angles: [f32; 12]) -> Self {
        Self(angles)
    }
}
