//! Contains the dimensions of the robot's legs in meters, taken from the Go2 URDF.
//!
//! The origin is the center of the robot's base, the x-axis points forward, the y-axis points
//! left, and the z-axis points up. Per-leg signs are applied in [`crate::leg::Leg::segments`]:
//! front legs are at positive x, left legs at positive y.
use nalgebra::{Vector3, vector};

/// Distance from the base frame to a hip joint along the x-axis.
pub const BASE_TO_HIP_X: f32 = 0.1934;
/// Distance from the base frame to a hip joint along the y-axis.
pub const BASE_TO_HIP_Y: f32 = 0.0465;
/// Distance from a hip joint to its thigh joint along the y-axis.
pub const HIP_TO_THIGH_Y: f32 = 0.0955;
/// Vector pointing from the thigh joint to the calf joint (identical for all legs).
pub const THIGH_TO_CALF: Vector3<f32> = vector![0.0, 0.0, -0.213];
/// Vector pointing from the calf joint to the center of the foot (identical for all legs).
pub const CALF_TO_FOOT: Vector3<f32> = vector![0.0, 0.0, -0.213];
