//! Per-frame input snapshot consumed by scenes and entities
//!
//! Kept free of macroquad so entity logic can be driven from tests.

use crate::rasterizer::Vec2;

/// Held keys, pointer and clock for one frame
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FrameInput {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
    pub fire: bool,
    /// Pointer position in framebuffer pixels
    pub pointer: Vec2,
    /// Absolute time in seconds since startup
    pub now: f64,
}

impl FrameInput {
    /// Movement axes as -1/0/+1 per axis (screen space, +y is down)
    pub fn axis(&self) -> Vec2 {
        let mut axis = Vec2::ZERO;
        if self.left {
            axis.x -= 1.0;
        }
        if self.right {
            axis.x += 1.0;
        }
        if self.up {
            axis.y -= 1.0;
        }
        if self.down {
            axis.y += 1.0;
        }
        axis
    }
}

/// Mouse buttons UI widgets react to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseButton {
    Left,
    Right,
}

/// Discrete input events, in the order they were observed this frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    PointerMoved(Vec2),
    MouseDown { button: MouseButton, pos: Vec2 },
    MouseUp { button: MouseButton, pos: Vec2 },
    KeyDown(super::Action),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_axis_independent() {
        let input = FrameInput { left: true, right: true, down: true, ..Default::default() };
        assert_eq!(input.axis(), Vec2::new(0.0, 1.0));
        let diag = FrameInput { up: true, right: true, ..Default::default() };
        assert_eq!(diag.axis(), Vec2::new(1.0, -1.0));
    }
}
