//! Passive characters
//!
//! NPCs stand where they were placed (clamped to the screen) and may carry
//! an ambient glow. No movement, no AI.

use std::rc::Rc;

use crate::lighting::{GlowSpot, PointLight};
use crate::rasterizer::{BlendMode, Framebuffer, Vec2};
use crate::ui::Rect;

use super::entity::{Actor, Drawable, EmitsGlow, UpdateContext};

/// Point light whose mask corner sits at the NPC center plus `corner_offset`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NpcGlow {
    pub light: PointLight,
    pub corner_offset: Vec2,
}

pub struct Npc {
    name: String,
    rect: Rect,
    sprite: Rc<Framebuffer>,
    glow: Option<NpcGlow>,
}

impl Npc {
    pub fn new(name: impl Into<String>, sprite: Rc<Framebuffer>, top_left: Vec2) -> Self {
        let rect = Rect::new(top_left.x, top_left.y, sprite.width as f32, sprite.height as f32);
        Self { name: name.into(), rect, sprite, glow: None }
    }

    pub fn with_glow(mut self, glow: NpcGlow) -> Self {
        self.glow = Some(glow);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Drawable for Npc {
    fn draw(&self, fb: &mut Framebuffer) {
        let top_left = self.rect.top_left();
        fb.blit(&self.sprite, top_left.x.round() as i32, top_left.y.round() as i32, BlendMode::Alpha);
    }
}

impl EmitsGlow for Npc {
    fn glows(&self, out: &mut Vec<GlowSpot>) {
        if let Some(glow) = self.glow {
            out.push(GlowSpot::at_corner(self.rect.center() + glow.corner_offset, glow.light));
        }
    }
}

impl Actor for Npc {
    fn update(&mut self, _dt: f32, ctx: &UpdateContext) {
        self.rect.clamp_within(&ctx.bounds);
    }

    fn rect(&self) -> Rect {
        self.rect
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::FrameInput;
    use crate::rasterizer::Color;

    fn ctx() -> UpdateContext {
        UpdateContext { input: FrameInput::default(), bounds: Rect::screen(800.0, 600.0) }
    }

    #[test]
    fn test_clamped_but_otherwise_still() {
        let sprite = Rc::new(Framebuffer::filled(60, 300, Color::WHITE));
        let mut npc = Npc::new("stick", sprite.clone(), Vec2::new(370.0, 375.0));
        npc.update(0.1, &ctx());
        assert_eq!(npc.rect().top_left(), Vec2::new(370.0, 300.0));

        let mut inside = Npc::new("stick", sprite, Vec2::new(100.0, 100.0));
        let input = FrameInput { left: true, fire: true, ..Default::default() };
        inside.update(0.1, &UpdateContext { input, ..ctx() });
        assert_eq!(inside.rect().top_left(), Vec2::new(100.0, 100.0));
    }

    #[test]
    fn test_glow_anchor() {
        let sprite = Rc::new(Framebuffer::filled(40, 60, Color::WHITE));
        let light = PointLight::new(32, 100, 90);
        let npc = Npc::new("scream", sprite.clone(), Vec2::new(100.0, 100.0))
            .with_glow(NpcGlow { light, corner_offset: Vec2::new(5.0, 10.0) });

        let mut glows = Vec::new();
        npc.glows(&mut glows);
        assert_eq!(glows, vec![GlowSpot::at_corner(Vec2::new(125.0, 140.0), light)]);

        let dark = Npc::new("stick", sprite, Vec2::ZERO);
        let mut none = Vec::new();
        dark.glows(&mut none);
        assert!(none.is_empty());
    }
}
