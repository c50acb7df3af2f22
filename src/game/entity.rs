//! Entity capabilities and the scene's entity set
//!
//! Every entity is an `Actor`: it updates against the frame's input and
//! screen bounds, draws itself (`Drawable`) and may emit point lights
//! (`EmitsGlow`, empty by default).

use crate::input::FrameInput;
use crate::lighting::GlowSpot;
use crate::rasterizer::Framebuffer;
use crate::ui::Rect;

use super::character::Character;
use super::npc::Npc;

/// Per-frame data every actor updates against
#[derive(Debug, Clone, Copy)]
pub struct UpdateContext {
    pub input: FrameInput,
    /// Screen rect; entities never assume a global screen size
    pub bounds: Rect,
}

pub trait Drawable {
    fn draw(&self, fb: &mut Framebuffer);
}

pub trait EmitsGlow {
    /// Append this frame's point lights to `out`
    fn glows(&self, _out: &mut Vec<GlowSpot>) {}
}

pub trait Actor: Drawable + EmitsGlow {
    fn update(&mut self, dt: f32, ctx: &UpdateContext);
    fn rect(&self) -> Rect;
}

/// The scene's entities: exactly one player plus any NPCs, fixed at load.
///
/// Iteration order is the player first, then NPCs in insertion order.
pub struct EntitySet {
    player: Character,
    npcs: Vec<Npc>,
}

impl EntitySet {
    pub fn new(player: Character, npcs: Vec<Npc>) -> Self {
        Self { player, npcs }
    }

    pub fn player(&self) -> &Character {
        &self.player
    }

    #[cfg(test)]
    pub fn npcs(&self) -> &[Npc] {
        &self.npcs
    }

    pub fn len(&self) -> usize {
        1 + self.npcs.len()
    }

    pub fn actors(&self) -> impl Iterator<Item = &dyn Actor> + '_ {
        std::iter::once(&self.player as &dyn Actor).chain(self.npcs.iter().map(|npc| npc as &dyn Actor))
    }

    pub fn actors_mut(&mut self) -> impl Iterator<Item = &mut dyn Actor> + '_ {
        std::iter::once(&mut self.player as &mut dyn Actor)
            .chain(self.npcs.iter_mut().map(|npc| npc as &mut dyn Actor))
    }

    pub fn update(&mut self, dt: f32, ctx: &UpdateContext) {
        for actor in self.actors_mut() {
            actor.update(dt, ctx);
        }
    }

    /// Draw every actor, then the player's projectiles over all of them
    pub fn draw(&self, fb: &mut Framebuffer) {
        for actor in self.actors() {
            actor.draw(fb);
        }
        self.player.draw_projectiles(fb);
    }

    /// Point lights for this frame: NPC glows first, then the player's fuses
    pub fn glows(&self) -> Vec<GlowSpot> {
        let mut out = Vec::new();
        for npc in &self.npcs {
            npc.glows(&mut out);
        }
        self.player.glows(&mut out);
        out
    }
}
