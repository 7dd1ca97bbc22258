//! Forward kinematics for the quadruped's legs.
//!
//! Each leg is modelled as a chain of four segments (hip, thigh, calf, foot)
//! with offsets taken from the robot's URDF. [`forward`] composes the segment
//! transforms into a foot pose relative to the base, and [`trajectory`] applies
//! that to whole joint-angle logs to produce per-leg foot-height series.

pub mod dimensions;
pub mod forward;
pub mod leg;
pub mod trajectory;

pub use forward::{foot_height, foot_position, foot_to_base};
pub use leg::{JointPositions, Leg, LegJoints};
pub use trajectory::{HeightTimeSeries, foot_heights, foot_heights_all};
