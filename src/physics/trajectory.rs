//! Closed-form ballistic trajectory
//!
//! Position is a pure function of (origin, speed, angle, t):
//!
//! ```text
//! x = x0 + speed * cos(angle) * t
//! y = y0 + speed * sin(angle) * t + 0.5 * g * t^2
//! ```
//!
//! Screen space has y growing downward, so gravity is positive. The
//! trajectory is unbounded; ground contact belongs to the projectile.

use std::fmt;

use crate::rasterizer::Vec2;

/// Gravity in px/s² (9.8 scaled by 64 px per "meter")
pub const GRAVITY: f32 = 9.8 * 64.0;

/// Construction failure for a trajectory
#[derive(Debug, Clone, PartialEq)]
pub enum TrajectoryError {
    /// A scalar input was NaN or infinite
    InvalidArgument { field: &'static str, value: f32 },
}

impl fmt::Display for TrajectoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TrajectoryError::InvalidArgument { field, value } => {
                write!(f, "invalid argument: {} must be a finite number (got {})", field, value)
            }
        }
    }
}

impl std::error::Error for TrajectoryError {}

fn require_finite(field: &'static str, value: f32) -> Result<f32, TrajectoryError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(TrajectoryError::InvalidArgument { field, value })
    }
}

/// A single projectile's flight path
#[derive(Debug, Clone, PartialEq)]
pub struct Trajectory {
    origin: Vec2,
    /// Launch speed in px/s
    speed: f32,
    /// Launch angle in radians (converted once at construction)
    angle: f32,
    /// Elapsed flight time in seconds
    t: f32,
    /// Cached position at `t`
    pos: Vec2,
}

impl Trajectory {
    /// Create a trajectory launched from `origin` at `angle_degrees`.
    ///
    /// Every scalar must be finite; the angle is converted to radians here and
    /// never re-derived.
    pub fn new(origin: Vec2, speed: f32, angle_degrees: f32, t0: f32) -> Result<Self, TrajectoryError> {
        require_finite("x0", origin.x)?;
        require_finite("y0", origin.y)?;
        require_finite("speed", speed)?;
        require_finite("angle", angle_degrees)?;
        require_finite("t", t0)?;

        let mut trajectory = Self {
            origin,
            speed,
            angle: angle_degrees.to_radians(),
            t: t0,
            pos: origin,
        };
        trajectory.pos = trajectory.position_at(t0);
        Ok(trajectory)
    }

    /// Advance the clock by `dt` seconds and recompute the cached position
    pub fn advance(&mut self, dt: f32) {
        self.t += dt;
        self.pos = self.position_at(self.t);
    }

    /// Position at an arbitrary time, without touching any state
    pub fn position_at(&self, t: f32) -> Vec2 {
        let (sin, cos) = self.angle.sin_cos();
        Vec2::new(
            self.origin.x + self.speed * cos * t,
            self.origin.y + self.speed * sin * t + 0.5 * GRAVITY * t * t,
        )
    }

    /// Position at the current elapsed time
    pub fn position(&self) -> Vec2 {
        self.pos
    }

    #[cfg(test)]
    pub fn elapsed(&self) -> f32 {
        self.t
    }

    #[cfg(test)]
    pub fn origin(&self) -> Vec2 {
        self.origin
    }

    /// Launch angle in radians
    pub fn angle(&self) -> f32 {
        self.angle
    }

    /// Lazily sample `count` future positions, `step` seconds apart, starting now.
    ///
    /// Borrows the trajectory immutably; sampling never advances the clock.
    pub fn samples(&self, count: usize, step: f32) -> impl Iterator<Item = Vec2> + '_ {
        let start = self.t;
        (0..count).map(move |i| self.position_at(start + i as f32 * step))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: Vec2, b: Vec2) -> bool {
        (a.x - b.x).abs() < 1e-2 && (a.y - b.y).abs() < 1e-2
    }

    #[test]
    fn test_gravity_constant() {
        assert!((GRAVITY - 627.2).abs() < 1e-4);
    }

    #[test]
    fn test_horizontal_launch_after_one_second() {
        let mut traj = Trajectory::new(Vec2::ZERO, 100.0, 0.0, 0.0).unwrap();
        traj.advance(1.0);
        let p = traj.position();
        assert!((p.x - 100.0).abs() < 1e-3);
        assert!((p.y - 313.6).abs() < 1e-3);
    }

    #[test]
    fn test_position_at_is_pure() {
        let traj = Trajectory::new(Vec2::new(5.0, 7.0), 320.0, -45.0, 0.0).unwrap();
        let before = traj.clone();
        let a = traj.position_at(0.8);
        let b = traj.position_at(0.8);
        assert_eq!(a, b);
        assert_eq!(traj, before);
        assert_eq!(traj.elapsed(), 0.0);
    }

    #[test]
    fn test_advance_is_additive() {
        let mut split = Trajectory::new(Vec2::new(100.0, 400.0), 640.0, -30.0, 0.0).unwrap();
        let mut whole = split.clone();
        split.advance(0.25);
        split.advance(0.5);
        whole.advance(0.75);
        assert!(close(split.position(), whole.position()));
        assert!((split.elapsed() - whole.elapsed()).abs() < 1e-6);
    }

    #[test]
    fn test_rejects_non_finite_inputs() {
        let err = Trajectory::new(Vec2::new(f32::NAN, 0.0), 1.0, 0.0, 0.0).unwrap_err();
        assert!(matches!(err, TrajectoryError::InvalidArgument { field: "x0", .. }));
        assert!(Trajectory::new(Vec2::ZERO, f32::INFINITY, 0.0, 0.0).is_err());
        assert!(Trajectory::new(Vec2::ZERO, 1.0, f32::NEG_INFINITY, 0.0).is_err());
        assert!(Trajectory::new(Vec2::ZERO, 1.0, 0.0, f32::NAN).is_err());
    }

    #[test]
    fn test_angle_converted_once() {
        let traj = Trajectory::new(Vec2::ZERO, 1.0, 90.0, 0.0).unwrap();
        assert!((traj.angle() - std::f32::consts::FRAC_PI_2).abs() < 1e-6);
    }

    #[test]
    fn test_nonzero_start_time() {
        let traj = Trajectory::new(Vec2::ZERO, 100.0, 0.0, 1.0).unwrap();
        assert!(close(traj.position(), Vec2::new(100.0, 313.6)));
    }

    #[test]
    fn test_samples_do_not_mutate() {
        let mut traj = Trajectory::new(Vec2::ZERO, 200.0, -60.0, 0.0).unwrap();
        traj.advance(0.3);
        let snapshot = traj.clone();
        let points: Vec<Vec2> = traj.samples(30, 0.1).collect();
        assert_eq!(points.len(), 30);
        assert_eq!(points[0], traj.position());
        assert!(close(points[10], traj.position_at(1.3)));
        assert_eq!(traj, snapshot);
    }
}
