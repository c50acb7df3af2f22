//! Projectile kinematics

pub mod trajectory;

pub use trajectory::{Trajectory, TrajectoryError};
