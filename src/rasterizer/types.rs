//! Color and blend mode types for the RGBA framebuffer

use serde::{Deserialize, Serialize};

/// How a source pixel is combined with the destination pixel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum BlendMode {
    /// Replace destination, alpha included (drawing onto a translucent surface)
    Opaque,
    /// Source-over compositing using the source alpha
    #[default]
    Alpha,
    /// Per-channel saturating subtraction on all four channels: D - S
    Subtract,
}

/// 8-bit RGBA color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    #[serde(default = "opaque_alpha")]
    pub a: u8,
}

fn opaque_alpha() -> u8 {
    255
}

impl Color {
    pub const BLACK: Color = Color { r: 0, g: 0, b: 0, a: 255 };
    pub const WHITE: Color = Color { r: 255, g: 255, b: 255, a: 255 };
    /// Fully transparent black (empty surface pixel)
    pub const TRANSPARENT: Color = Color { r: 0, g: 0, b: 0, a: 0 };

    #[cfg(test)]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub fn is_transparent(&self) -> bool {
        self.a == 0
    }

    /// Move each RGB channel `factor` of the way toward white (alpha kept)
    pub fn brighten(self, factor: f32) -> Self {
        let f = factor.clamp(0.0, 1.0);
        let up = |c: u8| (c as f32 + (255.0 - c as f32) * f).min(255.0) as u8;
        Self { r: up(self.r), g: up(self.g), b: up(self.b), a: self.a }
    }

    /// Scale each RGB channel down by `factor` (alpha kept)
    pub fn darken(self, factor: f32) -> Self {
        let f = 1.0 - factor.clamp(0.0, 1.0);
        let down = |c: u8| (c as f32 * f).max(0.0) as u8;
        Self { r: down(self.r), g: down(self.g), b: down(self.b), a: self.a }
    }

    /// Convert to [u8; 4] for the framebuffer
    pub fn to_bytes(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    pub fn from_bytes(bytes: [u8; 4]) -> Self {
        Self::rgba(bytes[0], bytes[1], bytes[2], bytes[3])
    }

    /// Combine this color (front) with the back color using `mode`
    pub fn blend_with(self, back: Color, mode: BlendMode) -> Color {
        match mode {
            BlendMode::Opaque => self,
            BlendMode::Alpha => {
                if self.a == 255 {
                    return self;
                }
                if self.a == 0 {
                    return back;
                }
                let sa = self.a as f32 / 255.0;
                let inv = 1.0 - sa;
                let mix = |f: u8, b: u8| (f as f32 * sa + b as f32 * inv).round().min(255.0) as u8;
                Color::rgba(
                    mix(self.r, back.r),
                    mix(self.g, back.g),
                    mix(self.b, back.b),
                    (self.a as f32 + back.a as f32 * inv).round().min(255.0) as u8,
                )
            }
            BlendMode::Subtract => Color::rgba(
                back.r.saturating_sub(self.r),
                back.g.saturating_sub(self.g),
                back.b.saturating_sub(self.b),
                back.a.saturating_sub(self.a),
            ),
        }
    }
}

impl Default for Color {
    fn default() -> Self {
        Color::TRANSPARENT
    }
}
