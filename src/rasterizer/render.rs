//! Software framebuffer and 2D drawing primitives
//!
//! Every surface in the game (screen, sprites, light masks, the lighting
//! overlay) is a `Framebuffer`. Primitives take a `BlendMode`: `Opaque`
//! writes the color as-is, which is how gradient masks are layered.

use super::math::Vec2;
use super::types::{BlendMode, Color};

/// RGBA surface for software rendering
#[derive(Debug, Clone, PartialEq)]
pub struct Framebuffer {
    pub pixels: Vec<u8>, // RGBA, 4 bytes per pixel
    pub width: usize,
    pub height: usize,
}

impl Framebuffer {
    /// New fully transparent surface
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            pixels: vec![0; width * height * 4],
            width,
            height,
        }
    }

    /// New surface filled with one color
    pub fn filled(width: usize, height: usize, color: Color) -> Self {
        let mut fb = Self::new(width, height);
        fb.fill(color);
        fb
    }

    pub fn size(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Overwrite every pixel with `color`
    pub fn fill(&mut self, color: Color) {
        let bytes = color.to_bytes();
        for px in self.pixels.chunks_exact_mut(4) {
            px.copy_from_slice(&bytes);
        }
    }

    pub fn get_pixel(&self, x: usize, y: usize) -> Color {
        if x < self.width && y < self.height {
            let idx = (y * self.width + x) * 4;
            Color::from_bytes([
                self.pixels[idx],
                self.pixels[idx + 1],
                self.pixels[idx + 2],
                self.pixels[idx + 3],
            ])
        } else {
            Color::TRANSPARENT
        }
    }

    pub fn set_pixel(&mut self, x: usize, y: usize, color: Color) {
        if x < self.width && y < self.height {
            let idx = (y * self.width + x) * 4;
            self.pixels[idx..idx + 4].copy_from_slice(&color.to_bytes());
        }
    }

    /// Combine `color` with the existing pixel using `mode`
    #[inline]
    pub fn blend_pixel(&mut self, x: usize, y: usize, color: Color, mode: BlendMode) {
        if mode == BlendMode::Opaque {
            self.set_pixel(x, y, color);
            return;
        }
        if x < self.width && y < self.height {
            let back = self.get_pixel(x, y);
            self.set_pixel(x, y, color.blend_with(back, mode));
        }
    }

    /// Copy `src` onto this surface with its top-left at (x, y), clipped
    pub fn blit(&mut self, src: &Framebuffer, x: i32, y: i32, mode: BlendMode) {
        let x_start = x.max(0);
        let y_start = y.max(0);
        let x_end = (x + src.width as i32).min(self.width as i32);
        let y_end = (y + src.height as i32).min(self.height as i32);
        if x_start >= x_end || y_start >= y_end {
            return;
        }

        for dy in y_start..y_end {
            let sy = (dy - y) as usize;
            for dx in x_start..x_end {
                let sx = (dx - x) as usize;
                let color = src.get_pixel(sx, sy);
                // Empty source pixels are a no-op for both blending modes
                if mode != BlendMode::Opaque && color == Color::TRANSPARENT {
                    continue;
                }
                self.blend_pixel(dx as usize, dy as usize, color, mode);
            }
        }
    }

    /// Blit `src` so that its center lands on `center`
    pub fn blit_centered(&mut self, src: &Framebuffer, center: Vec2, mode: BlendMode) {
        let x = (center.x - src.width as f32 / 2.0).round() as i32;
        let y = (center.y - src.height as f32 / 2.0).round() as i32;
        self.blit(src, x, y, mode);
    }

    /// Fill an axis-aligned rectangle
    pub fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Color, mode: BlendMode) {
        let x0 = x.round().max(0.0) as usize;
        let y0 = y.round().max(0.0) as usize;
        let x1 = ((x + w).round().max(0.0) as usize).min(self.width);
        let y1 = ((y + h).round().max(0.0) as usize).min(self.height);
        for py in y0..y1 {
            for px in x0..x1 {
                self.blend_pixel(px, py, color, mode);
            }
        }
    }

    /// Draw a rectangle outline `thickness` pixels wide, inside the rect
    pub fn stroke_rect(&mut self, x: f32, y: f32, w: f32, h: f32, thickness: f32, color: Color, mode: BlendMode) {
        let t = thickness.min(w / 2.0).min(h / 2.0).max(0.0);
        if t <= 0.0 {
            return;
        }
        self.fill_rect(x, y, w, t, color, mode);
        self.fill_rect(x, y + h - t, w, t, color, mode);
        self.fill_rect(x, y + t, t, h - 2.0 * t, color, mode);
        self.fill_rect(x + w - t, y + t, t, h - 2.0 * t, color, mode);
    }

    /// Fill a disc; a pixel is inside when its center is within `radius`
    pub fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color, mode: BlendMode) {
        if radius <= 0.0 {
            return;
        }
        let r2 = radius * radius;
        let min_x = (center.x - radius).floor().max(0.0) as usize;
        let min_y = (center.y - radius).floor().max(0.0) as usize;
        let max_x = ((center.x + radius).ceil().max(0.0) as usize).min(self.width);
        let max_y = ((center.y + radius).ceil().max(0.0) as usize).min(self.height);

        for y in min_y..max_y {
            let dy = y as f32 + 0.5 - center.y;
            for x in min_x..max_x {
                let dx = x as f32 + 0.5 - center.x;
                if dx * dx + dy * dy <= r2 {
                    self.blend_pixel(x, y, color, mode);
                }
            }
        }
    }

    /// Scanline-fill a closed polygon (even-odd rule, sampled at pixel centers)
    pub fn fill_polygon(&mut self, points: &[Vec2], color: Color, mode: BlendMode) {
        if points.len() < 3 {
            return;
        }

        let min_y = points.iter().map(|p| p.y).fold(f32::MAX, f32::min);
        let max_y = points.iter().map(|p| p.y).fold(f32::MIN, f32::max);
        let y_start = min_y.floor().max(0.0) as usize;
        let y_end = (max_y.ceil().max(0.0) as usize).min(self.height);

        let n = points.len();
        let mut x_intersections: Vec<f32> = Vec::with_capacity(n);
        for y in y_start..y_end {
            let scan_y = y as f32 + 0.5;
            x_intersections.clear();

            for i in 0..n {
                let p0 = points[i];
                let p1 = points[(i + 1) % n];
                // Half-open test so shared vertices are counted once
                if (p0.y <= scan_y && p1.y > scan_y) || (p1.y <= scan_y && p0.y > scan_y) {
                    let t = (scan_y - p0.y) / (p1.y - p0.y);
                    x_intersections.push(p0.x + t * (p1.x - p0.x));
                }
            }

            x_intersections.sort_by(|a, b| a.total_cmp(b));

            for pair in x_intersections.chunks(2) {
                if let [left, right] = *pair {
                    // Pixel centers in [left, right)
                    let x_start = (left - 0.5).ceil().max(0.0) as usize;
                    let x_end = ((right - 0.5).ceil().max(0.0) as usize).min(self.width);
                    for x in x_start..x_end {
                        self.blend_pixel(x, y, color, mode);
                    }
                }
            }
        }
    }

    /// Return a copy rotated by `degrees` (positive = counter-clockwise on screen).
    ///
    /// The result is sized to the rotated bounding box and sampled
    /// nearest-neighbour; corners not covered by the source stay transparent.
    pub fn rotated(&self, degrees: f32) -> Framebuffer {
        let theta = degrees.to_radians();
        let (sin, cos) = theta.sin_cos();
        let w = self.width as f32;
        let h = self.height as f32;

        // Trim float noise so 90-degree turns don't grow by a pixel
        let out_w = ((w * cos.abs() + h * sin.abs()) - 1e-3).ceil().max(1.0) as usize;
        let out_h = ((w * sin.abs() + h * cos.abs()) - 1e-3).ceil().max(1.0) as usize;
        let mut out = Framebuffer::new(out_w, out_h);

        let half_src = Vec2::new(w / 2.0, h / 2.0);
        let half_out = Vec2::new(out_w as f32 / 2.0, out_h as f32 / 2.0);

        for oy in 0..out_h {
            let y = oy as f32 + 0.5 - half_out.y;
            for ox in 0..out_w {
                let x = ox as f32 + 0.5 - half_out.x;
                // Inverse rotation back into source space
                let sx = x * cos - y * sin + half_src.x;
                let sy = x * sin + y * cos + half_src.y;
                if sx < 0.0 || sy < 0.0 || sx >= w || sy >= h {
                    continue;
                }
                let color = self.get_pixel(sx as usize, sy as usize);
                out.set_pixel(ox, oy, color);
            }
        }
        out
    }

    /// Sum of the alpha channel over the whole surface (coverage metric)
    #[cfg(test)]
    pub fn alpha_sum(&self) -> u64 {
        self.pixels.chunks_exact(4).map(|px| px[3] as u64).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blit_clips_out_of_bounds() {
        let mut dst = Framebuffer::new(4, 4);
        let src = Framebuffer::filled(3, 3, Color::WHITE);
        dst.blit(&src, 2, -1, BlendMode::Opaque);
        assert_eq!(dst.get_pixel(2, 0), Color::WHITE);
        assert_eq!(dst.get_pixel(3, 1), Color::WHITE);
        assert_eq!(dst.get_pixel(1, 0), Color::TRANSPARENT);
        assert_eq!(dst.get_pixel(2, 2), Color::TRANSPARENT);
    }

    #[test]
    fn test_subtract_blit_reduces_alpha() {
        let mut overlay = Framebuffer::filled(2, 1, Color::rgba(20, 30, 50, 120));
        let mut mask = Framebuffer::new(2, 1);
        mask.set_pixel(0, 0, Color::rgba(0, 0, 0, 100));
        overlay.blit(&mask, 0, 0, BlendMode::Subtract);
        assert_eq!(overlay.get_pixel(0, 0), Color::rgba(20, 30, 50, 20));
        assert_eq!(overlay.get_pixel(1, 0), Color::rgba(20, 30, 50, 120));
    }

    #[test]
    fn test_fill_polygon_square() {
        let mut fb = Framebuffer::new(10, 10);
        let square = [
            Vec2::new(2.0, 2.0),
            Vec2::new(6.0, 2.0),
            Vec2::new(6.0, 6.0),
            Vec2::new(2.0, 6.0),
        ];
        fb.fill_polygon(&square, Color::WHITE, BlendMode::Opaque);
        assert_eq!(fb.alpha_sum(), 16 * 255);
        assert_eq!(fb.get_pixel(2, 2), Color::WHITE);
        assert_eq!(fb.get_pixel(5, 5), Color::WHITE);
        assert_eq!(fb.get_pixel(6, 6), Color::TRANSPARENT);
    }

    #[test]
    fn test_fill_circle_stays_in_box() {
        let mut fb = Framebuffer::new(20, 20);
        fb.fill_circle(Vec2::new(10.0, 10.0), 5.0, Color::WHITE, BlendMode::Opaque);
        assert_eq!(fb.get_pixel(10, 10), Color::WHITE);
        assert_eq!(fb.get_pixel(4, 10), Color::TRANSPARENT);
        assert_eq!(fb.get_pixel(10, 16), Color::TRANSPARENT);
    }

    #[test]
    fn test_rotated_quarter_turn_swaps_size() {
        let mut fb = Framebuffer::new(6, 2);
        // Mark the right end of a horizontal bar
        fb.set_pixel(5, 0, Color::WHITE);
        fb.set_pixel(5, 1, Color::WHITE);
        let r = fb.rotated(90.0);
        assert_eq!(r.size(), (2, 6));
        // Counter-clockwise: the right end ends up on top
        assert_eq!(r.get_pixel(0, 0), Color::WHITE);
        assert_eq!(r.get_pixel(1, 0), Color::WHITE);
        assert_eq!(r.get_pixel(0, 5), Color::TRANSPARENT);
    }

    #[test]
    fn test_rotated_zero_is_identity() {
        let mut fb = Framebuffer::new(5, 3);
        fb.set_pixel(1, 2, Color::new(1, 2, 3));
        assert_eq!(fb.rotated(0.0), fb);
    }

    #[test]
    fn test_stroke_rect_leaves_interior() {
        let mut fb = Framebuffer::new(10, 10);
        fb.stroke_rect(0.0, 0.0, 10.0, 10.0, 2.0, Color::WHITE, BlendMode::Opaque);
        assert_eq!(fb.get_pixel(0, 0), Color::WHITE);
        assert_eq!(fb.get_pixel(9, 5), Color::WHITE);
        assert_eq!(fb.get_pixel(5, 5), Color::TRANSPARENT);
    }
}
