//! Offline analysis plots for quadruped deployment run logs.
//!
//! `heights` reconstructs per-leg foot heights from the logged joint angles
//! via forward kinematics and overlays the measured contact forces;
//! `odometry` plots the logged odometry path. Both read the CSV files the
//! deployment data logger writes and render PNGs.

pub mod cli;
pub mod config;
pub mod plot;
