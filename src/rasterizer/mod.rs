//! Software 2D rasterizer
//!
//! Features:
//! - RGBA framebuffer surfaces for the screen, sprites and light masks
//! - Opaque / alpha / subtractive blending
//! - Scanline polygon and disc fills, nearest-neighbour rotation
//!
//! # Module Organization
//!
//! - `types` - Color, BlendMode
//! - `math` - Vec2
//! - `render` - Framebuffer and drawing primitives
//! - `constants` - Screen resolution constants

pub mod constants;
pub mod math;
pub mod render;
pub mod types;

pub use constants::{HEIGHT, WIDTH};
pub use math::Vec2;
pub use render::Framebuffer;
pub use types::{BlendMode, Color};
