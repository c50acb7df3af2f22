//! Player-controlled character
//!
//! Moves with the four axis keys, throws projectiles at the pointer and owns
//! every projectile it has thrown until they expire.

use std::rc::Rc;

use serde::{Deserialize, Serialize};

use crate::config::PlayerConfig;
use crate::input::FrameInput;
use crate::lighting::GlowSpot;
use crate::rasterizer::{BlendMode, Framebuffer, Vec2};
use crate::ui::Rect;

use super::entity::{Actor, Drawable, EmitsGlow, UpdateContext};
use super::projectile::Projectile;

/// How `PlayerConfig::speed` is applied
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum MovementMode {
    /// `speed` pixels every frame, whatever the frame rate
    #[default]
    PerFrame,
    /// `speed` pixels per 1/60 s, scaled by `dt`
    PerSecond,
}

impl MovementMode {
    /// Pixels to move this frame
    pub fn step(self, speed: f32, dt: f32) -> f32 {
        match self {
            MovementMode::PerFrame => speed,
            MovementMode::PerSecond => speed * 60.0 * dt,
        }
    }
}

pub struct Character {
    rect: Rect,
    speed: f32,
    movement: MovementMode,
    launch_speed: f32,
    shoot_cooldown: f64,
    /// Absolute time of the last shot
    last_shot_time: f64,
    projectiles: Vec<Projectile>,
    sprite: Rc<Framebuffer>,
    projectile_sprite: Rc<Framebuffer>,
}

impl Character {
    /// Character sized to `sprite`, top-left corner at `top_left`
    pub fn new(sprite: Rc<Framebuffer>, projectile_sprite: Rc<Framebuffer>, top_left: Vec2, config: &PlayerConfig) -> Self {
        let rect = Rect::new(top_left.x, top_left.y, sprite.width as f32, sprite.height as f32);
        Self {
            rect,
            speed: config.speed,
            movement: config.movement,
            launch_speed: config.launch_speed,
            shoot_cooldown: config.shoot_cooldown,
            last_shot_time: 0.0,
            projectiles: Vec::new(),
            sprite,
            projectile_sprite,
        }
    }

    pub fn rect(&self) -> Rect {
        self.rect
    }

    pub fn center(&self) -> Vec2 {
        self.rect.center()
    }

    #[cfg(test)]
    pub fn projectiles(&self) -> &[Projectile] {
        &self.projectiles
    }

    /// Move, shoot, clamp to `bounds`, then update and prune projectiles
    pub fn update(&mut self, dt: f32, input: &FrameInput, bounds: &Rect) {
        let step = self.movement.step(self.speed, dt);
        let axis = input.axis();
        self.rect = self.rect.translate(axis.x * step, axis.y * step);

        if input.fire {
            self.try_fire(input.now, input.pointer);
        }

        self.rect.clamp_within(bounds);

        for projectile in &mut self.projectiles {
            projectile.update(dt, bounds);
        }
        self.projectiles.retain(|p| !p.is_expired());
    }

    /// Projectile sprites; drawn after every actor so thrown firecrackers
    /// stay on top of the scene
    pub fn draw_projectiles(&self, fb: &mut Framebuffer) {
        for projectile in &self.projectiles {
            projectile.draw_sprite(fb, &self.projectile_sprite);
        }
    }

    /// Throw a projectile at `target` if the cooldown has elapsed at `now`.
    /// Returns whether a projectile was spawned.
    pub fn try_fire(&mut self, now: f64, target: Vec2) -> bool {
        if now - self.last_shot_time < self.shoot_cooldown {
            return false;
        }
        match Projectile::spawn(self.rect.center(), target, self.launch_speed) {
            Ok(projectile) => {
                self.last_shot_time = now;
                tracing::debug!(
                    angle = projectile.trajectory().angle().to_degrees(),
                    live = self.projectiles.len() + 1,
                    "projectile spawned"
                );
                self.projectiles.push(projectile);
                true
            }
            Err(e) => {
                tracing::warn!("projectile not spawned: {}", e);
                false
            }
        }
    }
}

impl Drawable for Character {
    fn draw(&self, fb: &mut Framebuffer) {
        let top_left = self.rect.top_left();
        fb.blit(&self.sprite, top_left.x.round() as i32, top_left.y.round() as i32, BlendMode::Alpha);
        for projectile in &self.projectiles {
            projectile.draw_trail(fb);
        }
    }
}

impl EmitsGlow for Character {
    fn glows(&self, out: &mut Vec<GlowSpot>) {
        out.extend(self.projectiles.iter().filter_map(Projectile::fuse));
    }
}

impl Actor for Character {
    fn update(&mut self, dt: f32, ctx: &UpdateContext) {
        Character::update(self, dt, &ctx.input, &ctx.bounds);
    }

    fn rect(&self) -> Rect {
        self.rect
    }
}
