//! Per-frame lighting overlay
//!
//! Each frame the overlay is reset to the ambient tint, then every light
//! subtracts from it: the spotlight first, then point-light glows. Because
//! all subtractions land on the same surface, overlapping lights accumulate
//! and nothing is darkened twice. The finished overlay is alpha-blitted
//! onto the frame once.

use std::rc::Rc;

use crate::config::LightingConfig;
use crate::rasterizer::{BlendMode, Color, Framebuffer, Vec2};

use super::cache::MaskCache;
use super::mask::GlowSpot;
use super::spotlight::SpotLight;

pub struct LightingCompositor {
    overlay: Framebuffer,
    ambient: Color,
    spotlight: SpotLight,
    /// Unrotated beam, built once
    beam: Rc<Framebuffer>,
    masks: MaskCache,
}

impl LightingCompositor {
    pub fn new(width: usize, height: usize, config: &LightingConfig) -> Self {
        let spotlight = SpotLight::new(width, height).with_angle_degrees(config.beam_angle);
        let beam = Rc::new(spotlight.create_beam(config.beam_alpha, config.beam_steps));
        let (bw, bh) = spotlight.beam_size();
        tracing::debug!(width = bw, height = bh, angle = config.beam_angle, "built spotlight beam");

        Self {
            overlay: Framebuffer::filled(width, height, config.ambient),
            ambient: config.ambient,
            spotlight,
            beam,
            masks: MaskCache::new(),
        }
    }

    /// Start a new frame: reset the overlay to the ambient tint
    pub fn begin(&mut self) {
        self.overlay.fill(self.ambient);
    }

    /// Carve the spotlight beam, apex at `origin`, pointing at `target`
    pub fn subtract_spotlight(&mut self, origin: Vec2, target: Vec2) {
        let (beam, center) = self.spotlight.orient(&self.beam, origin, target);
        self.overlay.blit_centered(&beam, center, BlendMode::Subtract);
    }

    /// Carve one point-light glow
    pub fn subtract_glow(&mut self, glow: &GlowSpot) {
        let mask = self.masks.get_or_build(glow.light);
        let x = glow.corner.x.round() as i32;
        let y = glow.corner.y.round() as i32;
        self.overlay.blit(&mask, x, y, BlendMode::Subtract);
    }

    #[cfg(test)]
    pub fn overlay(&self) -> &Framebuffer {
        &self.overlay
    }

    /// Overlay surface for UI drawn on top of the lighting
    pub fn overlay_mut(&mut self) -> &mut Framebuffer {
        &mut self.overlay
    }

    /// Blend the finished overlay onto `fb`
    pub fn present(&self, fb: &mut Framebuffer) {
        fb.blit(&self.overlay, 0, 0, BlendMode::Alpha);
    }
}
