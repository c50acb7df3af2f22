//! Rasterizer constants
//!
//! Screen resolution and other fundamental constants.

/// Default screen width in pixels
pub const WIDTH: usize = 800;

/// Default screen height in pixels
pub const HEIGHT: usize = 600;
