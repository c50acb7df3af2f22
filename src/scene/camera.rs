//! Horizontal deadzone camera
//!
//! The player moves freely inside a central band of the viewport; once
//! their center leaves it the camera scrolls to keep it on the band's edge.

use crate::rasterizer::Vec2;
use crate::ui::Rect;

#[derive(Debug, Clone, PartialEq)]
pub struct DeadzoneCamera {
    world_width: f32,
    world_height: f32,
    viewport_width: f32,
    viewport_height: f32,
    deadzone_width: f32,
    /// Top-left of the viewport in world coordinates
    pub x: f32,
    pub y: f32,
}

impl DeadzoneCamera {
    pub fn new(world_width: f32, world_height: f32, viewport_width: f32, viewport_height: f32, deadzone_width: f32) -> Self {
        Self {
            world_width,
            world_height,
            viewport_width,
            viewport_height,
            deadzone_width,
            x: 0.0,
            y: 0.0,
        }
    }

    pub fn world_size(&self) -> Vec2 {
        Vec2::new(self.world_width, self.world_height)
    }

    pub fn viewport_size(&self) -> Vec2 {
        Vec2::new(self.viewport_width, self.viewport_height)
    }

    /// Follow `target`'s horizontal center
    pub fn update(&mut self, target: &Rect) {
        let px = target.center_x();
        let deadzone_left = self.x + (self.viewport_width - self.deadzone_width) / 2.0;
        let deadzone_right = deadzone_left + self.deadzone_width;

        if px > deadzone_right {
            self.x = px - (self.viewport_width + self.deadzone_width) / 2.0;
        } else if px < deadzone_left {
            self.x = px - (self.viewport_width - self.deadzone_width) / 2.0;
        }

        // Narrow worlds pin to 0
        let (world, viewport) = (self.world_size(), self.viewport_size());
        self.x = self.x.min(world.x - viewport.x).max(0.0);
        self.y = 0.0;
    }

    /// World rect shifted into viewport coordinates
    pub fn apply(&self, rect: &Rect) -> Rect {
        rect.translate(-self.x, -self.y)
    }
}
