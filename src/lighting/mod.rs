//! Dynamic lighting
//!
//! The scene is darkened by a translucent overlay and lights "remove" that
//! darkness with subtractive blits:
//!
//! - `mask` - radial point-light masks and their placement
//! - `spotlight` - the directional beam, built once and rotated per frame
//! - `cache` - shared, build-once mask storage
//! - `compositor` - ambient tint, light subtraction and final blend

mod cache;
mod compositor;
mod mask;
mod spotlight;

pub use compositor::LightingCompositor;
pub use mask::{GlowSpot, PointLight};
pub use spotlight::{DEFAULT_BEAM_ALPHA, DEFAULT_BEAM_ANGLE, DEFAULT_BEAM_STEPS};
