//! Directional spotlight beam
//!
//! The beam is a wedge of an ellipse with its apex at the left-middle of
//! the beam surface, pointing along +x. It is built once as a stack of
//! polygon fans: each layer is narrower and more opaque than the last, so
//! the beam is strongest along its axis and near its apex. Every frame the
//! cached surface is rotated toward the target and placed so the apex
//! lands on the light's origin.

use crate::rasterizer::{BlendMode, Color, Framebuffer, Vec2};

use super::mask::layer_alpha;

/// Default full beam angle in degrees (the wedge spans ±angle/2)
pub const DEFAULT_BEAM_ANGLE: f32 = 60.0;

/// Angular samples along each wedge's elliptical arc
pub const ARC_SAMPLES: usize = 100;

/// Default peak beam strength (percent)
pub const DEFAULT_BEAM_ALPHA: u8 = 90;

/// Default number of beam gradient layers
pub const DEFAULT_BEAM_STEPS: u32 = 90;

/// Spotlight descriptor: cone angle and beam surface dimensions
#[derive(Debug, Clone, PartialEq)]
pub struct SpotLight {
    angle_rad: f32,
    beam_width: usize,
    beam_height: usize,
}

impl SpotLight {
    /// Spotlight sized for a `screen_width` x `screen_height` display.
    ///
    /// The beam surface defaults to two thirds of the screen width by half its height.
    pub fn new(screen_width: usize, screen_height: usize) -> Self {
        Self {
            angle_rad: DEFAULT_BEAM_ANGLE.to_radians(),
            beam_width: (2 * screen_width / 3).max(1),
            beam_height: (screen_height / 2).max(1),
        }
    }

    pub fn with_angle_degrees(mut self, degrees: f32) -> Self {
        self.set_angle_degrees(degrees);
        self
    }

    /// Beam angle in radians
    #[cfg(test)]
    pub fn angle(&self) -> f32 {
        self.angle_rad
    }

    pub fn set_angle_degrees(&mut self, degrees: f32) {
        self.angle_rad = degrees.to_radians();
    }

    pub fn beam_size(&self) -> (usize, usize) {
        (self.beam_width, self.beam_height)
    }

    /// Distance from the beam surface's center to its apex
    pub fn orbit_radius(&self) -> f32 {
        self.beam_width as f32 / 2.0
    }

    /// Apex followed by `ARC_SAMPLES + 1` points on the elliptical arc
    /// spanning `+wedge/2 .. -wedge/2`
    pub fn wedge_points(&self, wedge: f32) -> Vec<Vec2> {
        let w = self.beam_width as f32;
        let h = self.beam_height as f32;
        let apex = Vec2::new(0.0, h / 2.0);

        let start = wedge / 2.0;
        let end = -wedge / 2.0;
        let mut points = Vec::with_capacity(ARC_SAMPLES + 2);
        points.push(apex);
        for i in 0..=ARC_SAMPLES {
            let t = i as f32 / ARC_SAMPLES as f32;
            let theta = start + t * (end - start);
            points.push(Vec2::new(apex.x + w * theta.cos(), apex.y + h * theta.sin()));
        }
        points
    }

    /// Build the gradient beam surface.
    ///
    /// `alpha` is the peak strength in percent, `steps` the number of fan
    /// layers. Layer `i` narrows the wedge by `i / steps` radians.
    pub fn create_beam(&self, alpha: u8, steps: u32) -> Framebuffer {
        let mut beam = Framebuffer::new(self.beam_width, self.beam_height);
        for i in 0..steps {
            let color = Color::rgba(0, 0, 0, layer_alpha(i, steps, alpha));
            let wedge = self.angle_rad - i as f32 / steps as f32;
            beam.fill_polygon(&self.wedge_points(wedge), color, BlendMode::Opaque);
        }
        beam
    }

    /// Beam direction from `origin` toward `target`, in degrees
    pub fn heading_degrees(origin: Vec2, target: Vec2) -> f32 {
        origin.angle_to(target).to_degrees()
    }

    /// Rotate the cached `beam` to face `target` from `origin`.
    ///
    /// Returns the rotated surface and the point its center must be placed at
    /// so the apex sits on `origin`.
    pub fn orient(&self, beam: &Framebuffer, origin: Vec2, target: Vec2) -> (Framebuffer, Vec2) {
        let heading = Self::heading_degrees(origin, target);
        // The rotation primitive turns counter-clockwise; screen headings run clockwise
        let rotated = beam.rotated(-heading);
        let center = origin + Vec2::from_angle(heading.to_radians()) * self.orbit_radius();
        (rotated, center)
    }
}
