//! Thrown firecracker
//!
//! State machine: `Flying -> Grounded -> expired`. A flying projectile
//! follows its trajectory until it reaches ground height, where it is
//! pinned and starts a death timer. There is no bounce and no way back to
//! `Flying`; the owner drops the projectile once `is_expired` is true.

use crate::lighting::{GlowSpot, PointLight};
use crate::physics::{Trajectory, TrajectoryError};
use crate::rasterizer::{BlendMode, Color, Framebuffer, Vec2};
use crate::ui::Rect;

/// Ground height above the bottom of the screen
pub const GROUND_OFFSET: f32 = 64.0;

/// Seconds a grounded projectile lingers before removal
pub const DEATH_LINGER: f32 = 3.0;

/// Launch speed in px/s
pub const LAUNCH_SPEED: f32 = 640.0;

/// Trail preview: number of samples and seconds between them
pub const TRAIL_SAMPLES: usize = 30;
pub const TRAIL_STEP: f32 = 0.1;

const TRAIL_COLOR: Color = Color::rgba(128, 128, 128, 80);
const TRAIL_DOT_RADIUS: f32 = 3.0;

/// Light carried by the burning fuse
pub const FUSE_LIGHT: PointLight = PointLight::new(10, 100, 100);

/// Fuse position relative to the projectile's center
pub const FUSE_OFFSET: Vec2 = Vec2::new(16.0, -3.0);

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ProjectileState {
    Flying,
    /// On the ground; `death_timer` counts seconds since landing
    Grounded { death_timer: f32 },
}

#[derive(Debug, Clone)]
pub struct Projectile {
    trajectory: Trajectory,
    state: ProjectileState,
    /// Center position; equals the trajectory position until grounded
    position: Vec2,
}

impl Projectile {
    /// Launch from `origin` toward `target` at `speed` px/s
    pub fn spawn(origin: Vec2, target: Vec2, speed: f32) -> Result<Self, TrajectoryError> {
        let angle = origin.angle_to(target).to_degrees();
        let trajectory = Trajectory::new(origin, speed, angle, 0.0)?;
        Ok(Self {
            position: trajectory.position(),
            trajectory,
            state: ProjectileState::Flying,
        })
    }

    /// Advance one frame. `bounds` is the screen rect; ground sits
    /// `GROUND_OFFSET` above its bottom edge.
    pub fn update(&mut self, dt: f32, bounds: &Rect) {
        match &mut self.state {
            ProjectileState::Grounded { death_timer } => {
                *death_timer += dt;
            }
            ProjectileState::Flying => {
                self.trajectory.advance(dt);
                let mut pos = self.trajectory.position();
                let ground = bounds.bottom() - GROUND_OFFSET;
                if pos.y >= ground {
                    pos.y = ground;
                    self.state = ProjectileState::Grounded { death_timer: 0.0 };
                    tracing::trace!(x = pos.x, y = pos.y, "projectile grounded");
                }
                self.position = pos;
            }
        }
    }

    #[cfg(test)]
    pub fn state(&self) -> ProjectileState {
        self.state
    }

    pub fn is_active(&self) -> bool {
        self.state == ProjectileState::Flying
    }

    /// True once the projectile has lingered on the ground long enough
    pub fn is_expired(&self) -> bool {
        matches!(self.state, ProjectileState::Grounded { death_timer } if death_timer >= DEATH_LINGER)
    }

    #[cfg(test)]
    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn trajectory(&self) -> &Trajectory {
        &self.trajectory
    }

    /// Future positions for the trail preview
    pub fn trajectory_points(&self) -> impl Iterator<Item = Vec2> + '_ {
        self.trajectory.samples(TRAIL_SAMPLES, TRAIL_STEP)
    }

    /// Fuse glow, lit only while flying
    pub fn fuse(&self) -> Option<GlowSpot> {
        self.is_active()
            .then(|| GlowSpot::centered(self.position + FUSE_OFFSET, FUSE_LIGHT))
    }

    pub fn draw_trail(&self, fb: &mut Framebuffer) {
        for point in self.trajectory_points() {
            fb.fill_circle(point, TRAIL_DOT_RADIUS, TRAIL_COLOR, BlendMode::Alpha);
        }
    }

    pub fn draw_sprite(&self, fb: &mut Framebuffer, sprite: &Framebuffer) {
        fb.blit_centered(sprite, self.position, BlendMode::Alpha);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn screen() -> Rect {
        Rect::screen(800.0, 600.0)
    }

    fn level_shot() -> Projectile {
        // Horizontal launch: only gravity pulls it down
        Projectile::spawn(Vec2::new(400.0, 500.0), Vec2::new(700.0, 500.0), 100.0).unwrap()
    }

    #[test]
    fn test_spawn_aims_at_target() {
        let p = Projectile::spawn(Vec2::new(0.0, 0.0), Vec2::new(0.0, 10.0), LAUNCH_SPEED).unwrap();
        assert!((p.trajectory().angle() - std::f32::consts::FRAC_PI_2).abs() < 1e-5);
        assert!(p.is_active());
        assert_eq!(p.position(), Vec2::new(0.0, 0.0));
    }

    #[test]
    fn test_grounding_is_one_way_and_pinned() {
        let bounds = screen();
        let ground = 600.0 - GROUND_OFFSET;
        let mut p = level_shot();

        let mut transitions = 0;
        let mut was_active = true;
        for _ in 0..20 {
            p.update(0.1, &bounds);
            if was_active && !p.is_active() {
                transitions += 1;
            }
            was_active = p.is_active();
            assert!(p.position().y <= ground);
        }
        assert_eq!(transitions, 1);
        assert_eq!(p.position().y, ground);

        let landed = p.position();
        let t = p.trajectory().elapsed();
        p.update(0.5, &bounds);
        assert_eq!(p.position(), landed);
        assert_eq!(p.trajectory().elapsed(), t);
    }

    #[test]
    fn test_death_timer() {
        let bounds = screen();
        let mut p = level_shot();
        while p.is_active() {
            assert!(!p.is_expired());
            p.update(0.1, &bounds);
        }
        assert_eq!(p.state(), ProjectileState::Grounded { death_timer: 0.0 });

        p.update(1.0, &bounds);
        p.update(1.0, &bounds);
        assert!(!p.is_expired());
        p.update(0.5, &bounds);
        assert!(!p.is_expired());
        p.update(0.5, &bounds);
        assert!(p.is_expired());
    }

    #[test]
    fn test_never_expires_in_flight() {
        let bounds = Rect::screen(800.0, 1_000_000.0);
        let mut p = Projectile::spawn(Vec2::new(0.0, 0.0), Vec2::new(1.0, -1.0), 640.0).unwrap();
        for _ in 0..100 {
            p.update(0.1, &bounds);
            assert!(p.is_active());
            assert!(!p.is_expired());
        }
    }

    #[test]
    fn test_trail_does_not_advance() {
        let mut p = level_shot();
        p.update(0.05, &screen());
        let before = p.position();
        let points: Vec<Vec2> = p.trajectory_points().collect();
        assert_eq!(points.len(), TRAIL_SAMPLES);
        assert_eq!(points[0], before);
        assert!((points[1].x - (before.x + 100.0 * TRAIL_STEP)).abs() < 1e-3);
        assert_eq!(p.position(), before);
        assert!((p.trajectory().elapsed() - 0.05).abs() < 1e-6);
    }

    #[test]
    fn test_fuse_only_while_flying() {
        let mut p = level_shot();
        let fuse = p.fuse().unwrap();
        assert_eq!(fuse.center(), p.position() + FUSE_OFFSET);
        assert_eq!(fuse.light.radius, 10);

        while p.is_active() {
            p.update(0.1, &screen());
        }
        assert!(p.fuse().is_none());
    }

    #[test]
    fn test_draw_trail_and_sprite() {
        let p = level_shot();
        let mut fb = Framebuffer::new(800, 600);
        p.draw_trail(&mut fb);
        assert!(fb.get_pixel(400, 500).a > 0);

        let sprite = Framebuffer::filled(4, 4, Color::WHITE);
        p.draw_sprite(&mut fb, &sprite);
        assert_eq!(fb.get_pixel(400, 500), Color::WHITE);
    }
}
