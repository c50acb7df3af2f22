//! 2D vector math for screen-space positions

use serde::{Deserialize, Serialize};
use std::ops::{Add, AddAssign, Mul, Sub};

/// 2D Vector (screen space, y grows downward)
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    #[cfg(test)]
    pub fn dot(self, other: Vec2) -> f32 {
        self.x * other.x + self.y * other.y
    }

    #[cfg(test)]
    pub fn length(self) -> f32 {
        self.dot(self).sqrt()
    }

    /// Angle in radians of the vector from `self` to `target`, `atan2(dy, dx)`
    pub fn angle_to(self, target: Vec2) -> f32 {
        let d = target - self;
        d.y.atan2(d.x)
    }

    /// Unit vector at `radians` (screen space, so positive angles turn clockwise)
    pub fn from_angle(radians: f32) -> Vec2 {
        Vec2::new(radians.cos(), radians.sin())
    }

    pub fn scale(self, s: f32) -> Vec2 {
        Vec2::new(self.x * s, self.y * s)
    }
}

impl Add for Vec2 {
    type Output = Vec2;
    fn add(self, other: Vec2) -> Vec2 {
        Vec2::new(self.x + other.x, self.y + other.y)
    }
}

impl AddAssign for Vec2 {
    fn add_assign(&mut self, other: Vec2) {
        self.x += other.x;
        self.y += other.y;
    }
}

impl Sub for Vec2 {
    type Output = Vec2;
    fn sub(self, other: Vec2) -> Vec2 {
        Vec2::new(self.x - other.x, self.y - other.y)
    }
}

impl Mul<f32> for Vec2 {
    type Output = Vec2;
    fn mul(self, s: f32) -> Vec2 {
        self.scale(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_angle_to_screen_space() {
        let origin = Vec2::new(10.0, 10.0);
        assert!((origin.angle_to(Vec2::new(20.0, 10.0))).abs() < 1e-6);
        // Below the origin on screen is +90 degrees
        let down = origin.angle_to(Vec2::new(10.0, 30.0));
        assert!((down - std::f32::consts::FRAC_PI_2).abs() < 1e-6);
    }

    #[test]
    fn test_from_angle_round_trip() {
        let v = Vec2::from_angle(0.75);
        assert!((v.length() - 1.0).abs() < 1e-6);
        assert!((Vec2::ZERO.angle_to(v) - 0.75).abs() < 1e-6);
    }
}
