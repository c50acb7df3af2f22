//! Text drawing on top of the presented framebuffer
//!
//! Text is drawn with macroquad after the framebuffer texture, so
//! positions are given in framebuffer pixels and scaled to the window here.

use std::path::Path;

use macroquad::prelude::{draw_text_ex, load_ttf_font, measure_text, screen_height, screen_width, Font, TextParams};

use crate::rasterizer::{Color, Vec2};

/// Outline drawn around text
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Outline {
    pub color: Color,
    /// Stroke thickness in framebuffer pixels
    pub thickness: i32,
}

/// Offsets the outline color is stamped at: every cell of the
/// thickness square except the center
pub fn outline_offsets(thickness: i32) -> impl Iterator<Item = (i32, i32)> {
    let t = thickness.max(0);
    (-t..=t).flat_map(move |dx| (-t..=t).map(move |dy| (dx, dy))).filter(|&d| d != (0, 0))
}

pub fn to_mq_color(c: Color) -> macroquad::color::Color {
    macroquad::color::Color::from_rgba(c.r, c.g, c.b, c.a)
}

/// Draws labels in framebuffer coordinates with an optional TTF font
pub struct TextPainter {
    font: Option<Font>,
    font_size: u16,
    fb_width: f32,
    fb_height: f32,
}

impl TextPainter {
    pub fn new(font: Option<Font>, font_size: u16, fb_width: usize, fb_height: usize) -> Self {
        Self {
            font,
            font_size,
            fb_width: fb_width as f32,
            fb_height: fb_height as f32,
        }
    }

    /// Load `path` as the font; falls back to the built-in font on failure
    pub async fn load(path: Option<&Path>, font_size: u16, fb_width: usize, fb_height: usize) -> Self {
        let font = match path {
            Some(path) => match load_ttf_font(&path.to_string_lossy()).await {
                Ok(font) => {
                    tracing::info!(path = %path.display(), "loaded font");
                    Some(font)
                }
                Err(e) => {
                    tracing::warn!(path = %path.display(), "failed to load font, using default: {}", e);
                    None
                }
            },
            None => None,
        };
        Self::new(font, font_size, fb_width, fb_height)
    }

    fn scale(&self) -> (f32, f32) {
        (screen_width() / self.fb_width.max(1.0), screen_height() / self.fb_height.max(1.0))
    }

    fn screen_size(&self) -> u16 {
        let (_, sy) = self.scale();
        ((self.font_size as f32 * sy).round() as u16).max(1)
    }

    /// Label size in framebuffer pixels
    pub fn measure(&self, text: &str) -> Vec2 {
        let (sx, sy) = self.scale();
        let dims = measure_text(text, self.font.as_ref(), self.screen_size(), 1.0);
        Vec2::new(dims.width / sx.max(f32::EPSILON), dims.height / sy.max(f32::EPSILON))
    }

    /// Draw `text` with its baseline-left at `pos`
    pub fn draw(&self, text: &str, pos: Vec2, color: Color, outline: Option<Outline>) {
        let (sx, sy) = self.scale();
        let size = self.screen_size();
        let x = pos.x * sx;
        let y = pos.y * sy;

        if let Some(outline) = outline {
            let params = TextParams {
                font: self.font.as_ref(),
                font_size: size,
                color: to_mq_color(outline.color),
                ..Default::default()
            };
            for (dx, dy) in outline_offsets(outline.thickness) {
                draw_text_ex(text, (x + dx as f32 * sx).round(), (y + dy as f32 * sy).round(), params.clone());
            }
        }

        draw_text_ex(
            text,
            x.round(),
            y.round(),
            TextParams {
                font: self.font.as_ref(),
                font_size: size,
                color: to_mq_color(color),
                ..Default::default()
            },
        );
    }

    /// Draw `text` centered on `center`
    pub fn draw_centered(&self, text: &str, center: Vec2, color: Color, outline: Option<Outline>) {
        let size = self.measure(text);
        let pos = Vec2::new(center.x - size.x * 0.5, center.y + size.y * 0.5);
        self.draw(text, pos, color, outline);
    }
}
