//! Radial point-light masks
//!
//! A mask is a square surface of concentric discs, painted from the
//! outermost (faintest) to the innermost (strongest). Each disc overwrites
//! the previous one, so alpha rises from the rim toward the center. Blitted
//! with `BlendMode::Subtract`, the mask carves a soft hole in the overlay.

use serde::{Deserialize, Serialize};

use crate::rasterizer::{BlendMode, Color, Framebuffer, Vec2};

/// Gradient layers used when none are configured
pub const DEFAULT_STEPS: u32 = 100;

/// Point light descriptor; also the cache key for its mask
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PointLight {
    /// Mask radius in pixels
    pub radius: u32,
    /// Number of gradient rings
    pub steps: u32,
    /// Peak strength, percent of full alpha (0-100)
    pub alpha: u8,
}

impl Default for PointLight {
    fn default() -> Self {
        Self { radius: 32, steps: DEFAULT_STEPS, alpha: 90 }
    }
}

impl PointLight {
    pub const fn new(radius: u32, steps: u32, alpha: u8) -> Self {
        Self { radius, steps, alpha }
    }

    /// Side length of the mask surface
    pub fn diameter(&self) -> usize {
        self.radius as usize * 2
    }
}

/// Alpha of gradient layer `i` out of `steps`, peaking just below `peak` percent
pub fn layer_alpha(i: u32, steps: u32, peak: u8) -> u8 {
    if steps == 0 {
        return 0;
    }
    let t = i as f32 / steps as f32;
    (t * (peak.min(100) as f32 / 100.0) * 255.0) as u8
}

/// Build the radial mask for `light`.
///
/// O(steps * radius²): meant to be built once and cached.
pub fn circle_light_mask(light: &PointLight) -> Framebuffer {
    let size = light.diameter();
    let mut mask = Framebuffer::new(size, size);
    let r = light.radius;
    let center = Vec2::new(r as f32, r as f32);

    for i in 0..light.steps {
        let ring_radius = r - (r * i) / light.steps;
        let color = Color::rgba(0, 0, 0, layer_alpha(i, light.steps, light.alpha));
        mask.fill_circle(center, ring_radius as f32, color, BlendMode::Opaque);
    }
    mask
}

/// A point light placed on screen for one frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlowSpot {
    /// Where the mask's top-left corner goes
    pub corner: Vec2,
    pub light: PointLight,
}

impl GlowSpot {
    /// Glow whose mask is centered on `center`
    pub fn centered(center: Vec2, light: PointLight) -> Self {
        let r = light.radius as f32;
        Self { corner: center - Vec2::new(r, r), light }
    }

    /// Glow whose mask's top-left corner sits at `corner`
    pub fn at_corner(corner: Vec2, light: PointLight) -> Self {
        Self { corner, light }
    }

    #[cfg(test)]
    pub fn center(&self) -> Vec2 {
        let r = self.light.radius as f32;
        self.corner + Vec2::new(r, r)
    }
}
