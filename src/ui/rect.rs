//! Rectangle type for entity bounds and UI layout

use crate::rasterizer::Vec2;

/// A rectangle defined by position and size
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// Create from screen dimensions
    pub fn screen(width: f32, height: f32) -> Self {
        Self::new(0.0, 0.0, width, height)
    }

    /// Rect of size (w, h) centered on `center`
    #[cfg(test)]
    pub fn centered(center: Vec2, w: f32, h: f32) -> Self {
        Self::new(center.x - w * 0.5, center.y - h * 0.5, w, h)
    }

    /// Right edge
    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    /// Bottom edge
    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    /// Center X
    pub fn center_x(&self) -> f32 {
        self.x + self.w * 0.5
    }

    /// Center Y
    pub fn center_y(&self) -> f32 {
        self.y + self.h * 0.5
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.center_x(), self.center_y())
    }

    pub fn top_left(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    /// Offset by (dx, dy)
    pub fn translate(&self, dx: f32, dy: f32) -> Self {
        Self::new(self.x + dx, self.y + dy, self.w, self.h)
    }

    /// Check if point is inside
    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }

    pub fn contains_point(&self, p: Vec2) -> bool {
        self.contains(p.x, p.y)
    }

    /// True if `other` lies entirely inside this rect (edges may touch)
    #[cfg(test)]
    pub fn contains_rect(&self, other: &Rect) -> bool {
        other.x >= self.x && other.y >= self.y && other.right() <= self.right() && other.bottom() <= self.bottom()
    }

    /// Shift this rect the minimum amount needed to lie inside `bounds`.
    ///
    /// An axis on which the rect is larger than the bounds is centered instead.
    pub fn clamp_within(&mut self, bounds: &Rect) {
        self.x = clamp_axis(self.x, self.w, bounds.x, bounds.w);
        self.y = clamp_axis(self.y, self.h, bounds.y, bounds.h);
    }
}

fn clamp_axis(pos: f32, size: f32, min: f32, span: f32) -> f32 {
    if size >= span {
        min + (span - size) * 0.5
    } else if pos < min {
        min
    } else if pos + size > min + span {
        min + span - size
    } else {
        pos
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains() {
        let r = Rect::new(10.0, 20.0, 100.0, 50.0);
        assert!(r.contains(50.0, 40.0));
        assert!(!r.contains(5.0, 40.0));
        assert!(!r.contains(50.0, 100.0));
    }

    #[test]
    fn test_clamp_within_edges() {
        let bounds = Rect::screen(800.0, 600.0);
        let mut r = Rect::new(-20.0, 580.0, 50.0, 60.0);
        r.clamp_within(&bounds);
        assert_eq!(r, Rect::new(0.0, 540.0, 50.0, 60.0));
        assert!(bounds.contains_rect(&r));

        // Already inside and touching an edge: untouched
        let mut inside = Rect::new(750.0, 0.0, 50.0, 60.0);
        inside.clamp_within(&bounds);
        assert_eq!(inside, Rect::new(750.0, 0.0, 50.0, 60.0));
    }

    #[test]
    fn test_clamp_oversized_centers() {
        let bounds = Rect::screen(100.0, 100.0);
        let mut r = Rect::new(40.0, 10.0, 140.0, 20.0);
        r.clamp_within(&bounds);
        assert_eq!(r.x, -20.0);
        assert_eq!(r.y, 10.0);
    }
}
