//! The record schema of a deployment run log.

use chrono::NaiveTime;
use kinematics::JointPositions;
use nalgebra::Vector3;

/// One logged control step.
///
/// The logger always writes `wall_time` and the measured joint angles; the
/// force and odometry columns depend on the deployment configuration, so
/// they are optional here.
#[derive(Debug, Clone, PartialEq)]
pub struct RunRecord {
    /// Wall-clock time the step was logged at.
    pub wall_time: NaiveTime,
    /// All twelve measured joint angles, in low-level order.
    pub joints: JointPositions,
    /// Estimated contact force per foot in newtons (FR, FL, RR, RL), if logged.
    pub foot_forces: Option<[f32; 4]>,
    /// Odometry position estimate in the odometry frame, in meters, if logged.
    pub odom_pos: Option<Vector3<f32>>,
}
