//! The courtyard at night
//!
//! A player with a flashlight that follows the pointer, a screaming figure
//! with its own glow, a stick figure, a test button, and firecrackers whose
//! fuses light up the dark. The background scrolls with a deadzone camera;
//! entities live in screen space.

use std::cell::Cell;
use std::rc::Rc;

use crate::asset::{load_and_scale, load_surface, scale_to_height, AssetError};
use crate::config::{AssetPaths, GameConfig};
use crate::game::{Actor, Character, EntitySet, Npc, NpcGlow, UpdateContext};
use crate::input::{FrameInput, InputEvent};
use crate::lighting::LightingCompositor;
use crate::rasterizer::{BlendMode, Color, Framebuffer, Vec2};
use crate::ui::{Button, ButtonStyle, ButtonTheme, Outline, Rect, TextPainter};

use super::{DeadzoneCamera, Scene};

/// Scream glow mask corner, relative to the NPC center
const SCREAM_GLOW_OFFSET: Vec2 = Vec2::new(5.0, 10.0);

const BUTTON_LABEL: &str = "Click Me";
const BUTTON_RECT: Rect = Rect::new(250.0, 250.0, 150.0, 50.0);
const LABEL_OUTLINE: Outline = Outline { color: Color::BLACK, thickness: 1 };
/// Hairline drawn around the button in every state
const BUTTON_OUTLINE: Color = Color::rgba(255, 0, 0, 255);

/// Decoded, pre-scaled images the courtyard is built from
pub struct CourtyardAssets {
    pub background: Framebuffer,
    pub player: Framebuffer,
    pub projectile: Framebuffer,
    pub stickfigure: Framebuffer,
    pub scream: Framebuffer,
}

impl CourtyardAssets {
    /// Load and scale every image for a `width` x `height` screen.
    ///
    /// The player is a quarter of the screen tall, the NPCs twice that. The
    /// background is scaled to the screen height; its width sets the world.
    pub fn load(paths: &AssetPaths, height: usize) -> Result<Self, AssetError> {
        let character_height = height / 4;
        let background = load_surface(&paths.background)?;
        Ok(Self {
            background: scale_to_height(&background, height),
            player: load_and_scale(&paths.player, character_height)?,
            projectile: load_surface(&paths.projectile)?,
            stickfigure: load_and_scale(&paths.stickfigure, character_height * 2)?,
            scream: load_and_scale(&paths.scream, character_height * 2)?,
        })
    }
}

pub struct Courtyard {
    bounds: Rect,
    background: Framebuffer,
    camera: DeadzoneCamera,
    entities: EntitySet,
    lighting: LightingCompositor,
    button: Button,
    clicks: Rc<Cell<u32>>,
    pointer: Vec2,
}

impl Courtyard {
    pub fn load(config: &GameConfig) -> Result<Self, AssetError> {
        let assets = CourtyardAssets::load(&config.assets, config.window.height)?;
        Ok(Self::from_parts(config, assets))
    }

    /// Lay out the scene from already-loaded images
    pub fn from_parts(config: &GameConfig, assets: CourtyardAssets) -> Self {
        let w = config.window.width as i64;
        let h = config.window.height as i64;
        let bounds = Rect::screen(w as f32, h as f32);
        let character_height = h / 4;

        let player_w = assets.player.width as i64;
        let stick_w = assets.stickfigure.width as i64;
        let stick_h = assets.stickfigure.height as i64;

        let at = |x: i64, y: i64| Vec2::new(x as f32, y as f32);

        let player = Character::new(
            Rc::new(assets.player),
            Rc::new(assets.projectile),
            at(w / 2 - player_w / 2, h - character_height / 2),
            &config.player,
        );
        // The scream figure is placed by the stick figure's size; both share a height
        let scream = Npc::new("scream", Rc::new(assets.scream), at(w - w / 3 - stick_w / 2, h / 6 - stick_h / 2))
            .with_glow(NpcGlow { light: config.lighting.npc_glow, corner_offset: SCREAM_GLOW_OFFSET });
        let stick = Npc::new("stickfigure", Rc::new(assets.stickfigure), at(w / 2 - stick_w / 2, h - stick_h * 3 / 2));
        for npc in [&scream, &stick] {
            tracing::debug!(npc = npc.name(), rect = ?npc.rect(), "placed npc");
        }

        let camera = DeadzoneCamera::new(
            assets.background.width as f32,
            assets.background.height as f32,
            bounds.w,
            bounds.h,
            config.camera.deadzone_width,
        );

        let clicks = Rc::new(Cell::new(0));
        let counter = clicks.clone();
        let button = Button::new(BUTTON_LABEL, BUTTON_RECT, button_theme()).with_handler(move |button| {
            counter.set(counter.get() + 1);
            tracing::info!(clicks = counter.get(), "{} was clicked!", button.label());
            Ok(())
        });

        Self {
            bounds,
            background: assets.background,
            camera,
            entities: EntitySet::new(player, vec![scream, stick]),
            lighting: LightingCompositor::new(config.window.width, config.window.height, &config.lighting),
            button,
            clicks,
            pointer: bounds.center(),
        }
    }

    #[cfg(test)]
    pub fn entities(&self) -> &EntitySet {
        &self.entities
    }

    #[cfg(test)]
    pub fn camera(&self) -> &DeadzoneCamera {
        &self.camera
    }

    #[cfg(test)]
    pub fn clicks(&self) -> u32 {
        self.clicks.get()
    }

    /// Build this frame's lighting overlay: ambient, spotlight, glows, UI
    fn compose_lighting(&mut self) {
        self.lighting.begin();
        self.lighting.subtract_spotlight(self.entities.player().center(), self.pointer);
        for glow in self.entities.glows() {
            self.lighting.subtract_glow(&glow);
        }
        let overlay = self.lighting.overlay_mut();
        self.button.draw(overlay);
        let Rect { x, y, w, h } = self.button.rect();
        overlay.stroke_rect(x, y, w, h, 1.0, BUTTON_OUTLINE, BlendMode::Alpha);
    }
}

fn button_theme() -> ButtonTheme {
    ButtonTheme::new(
        ButtonStyle {
            fill: Color::rgba(200, 200, 200, 250),
            text: Color::rgba(255, 255, 255, 255),
            border: Color::rgba(255, 0, 0, 255),
        },
        4.0,
    )
    .with_hover(ButtonStyle {
        fill: Color::rgba(0, 0, 0, 220),
        text: Color::rgba(255, 255, 100, 255),
        border: Color::rgba(255, 255, 0, 80),
    })
    .with_pressed(ButtonStyle {
        fill: Color::rgba(0, 0, 0, 250),
        text: Color::rgba(255, 100, 100, 255),
        border: Color::rgba(255, 100, 100, 255),
    })
}

impl Scene for Courtyard {
    fn name(&self) -> &str {
        "courtyard"
    }

    fn enter(&mut self) {
        tracing::info!(actors = self.entities.len(), "entering courtyard");
    }

    fn exit(&mut self) {
        tracing::info!(clicks = self.clicks.get(), "leaving courtyard");
    }

    fn handle_events(&mut self, events: &[InputEvent]) {
        self.button.update(events);
    }

    fn update(&mut self, dt: f32, input: &FrameInput) {
        self.pointer = input.pointer;
        let ctx = UpdateContext { input: *input, bounds: self.bounds };
        self.entities.update(dt, &ctx);
        self.camera.update(&self.entities.player().rect());
    }

    fn draw(&mut self, fb: &mut Framebuffer) {
        fb.fill(Color::BLACK);
        let bg = self.camera.apply(&Rect::new(0.0, 0.0, self.background.width as f32, self.background.height as f32));
        fb.blit(&self.background, bg.x.round() as i32, bg.y.round() as i32, BlendMode::Opaque);

        self.entities.draw(fb);

        self.compose_lighting();
        self.lighting.present(fb);
    }

    fn draw_text(&self, text: &TextPainter) {
        let style = self.button.style();
        if !style.text.is_transparent() {
            text.draw_centered(self.button.label(), self.button.label_center(), style.text, Some(LABEL_OUTLINE));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::MouseButton;

    fn assets() -> CourtyardAssets {
        CourtyardAssets {
            background: Framebuffer::filled(1600, 600, Color::new(90, 120, 90)),
            player: Framebuffer::filled(40, 150, Color::WHITE),
            projectile: Framebuffer::filled(12, 12, Color::new(200, 30, 30)),
            stickfigure: Framebuffer::filled(60, 300, Color::new(10, 10, 10)),
            scream: Framebuffer::filled(80, 300, Color::new(230, 230, 200)),
        }
    }

    fn courtyard() -> Courtyard {
        Courtyard::from_parts(&GameConfig::default(), assets())
    }

    #[test]
    fn test_initial_layout() {
        let scene = courtyard();
        let entities = scene.entities();
        assert_eq!(entities.len(), 3);
        assert_eq!(entities.player().rect().top_left(), Vec2::new(380.0, 525.0));
        assert_eq!(entities.npcs()[0].rect().top_left(), Vec2::new(504.0, -50.0));
        assert_eq!(entities.npcs()[1].rect().top_left(), Vec2::new(370.0, 150.0));
    }

    #[test]
    fn test_update_clamps_everyone_on_screen() {
        let mut scene = courtyard();
        scene.update(1.0 / 60.0, &FrameInput::default());
        let bounds = Rect::screen(800.0, 600.0);
        for actor in scene.entities().actors() {
            assert!(bounds.contains_rect(&actor.rect()));
        }
        assert_eq!(scene.entities().player().rect().bottom(), 600.0);
    }

    #[test]
    fn test_fire_spawns_projectile() {
        let mut scene = courtyard();
        // Settle the player on screen first so the throw starts above ground
        scene.update(1.0 / 60.0, &FrameInput::default());
        let input = FrameInput { fire: true, now: 2.0, pointer: Vec2::new(700.0, 100.0), ..Default::default() };
        scene.update(1.0 / 60.0, &input);
        assert_eq!(scene.entities().player().projectiles().len(), 1);
        assert_eq!(scene.entities().glows().len(), 2);
    }

    #[test]
    fn test_draw_darkens_unlit_areas() {
        let mut scene = courtyard();
        let mut fb = Framebuffer::new(800, 600);
        scene.draw(&mut fb);

        let unlit = fb.get_pixel(20, 590);
        let bare = Color::new(90, 120, 90);
        let expected = Color::rgba(20, 30, 50, 120).blend_with(bare, BlendMode::Alpha);
        assert_eq!(unlit, expected);
    }

    #[test]
    fn test_spotlight_follows_pointer() {
        let mut scene = courtyard();
        let mut fb = Framebuffer::new(800, 600);
        // Player settles with its center at (400, 525); aim straight up
        let input = FrameInput { pointer: Vec2::new(400.0, 0.0), ..Default::default() };
        scene.update(1.0 / 60.0, &input);
        scene.draw(&mut fb);

        let bare = Color::new(90, 120, 90);
        // Inside the cone, clear of every sprite
        let lit = fb.get_pixel(435, 380);
        let dark = fb.get_pixel(20, 590);
        assert!(lit.g > dark.g, "lit {:?} dark {:?}", lit, dark);
        assert!(lit.g <= bare.g);
    }

    #[test]
    fn test_button_click_runs_handler() {
        let mut scene = courtyard();
        let pos = Vec2::new(300.0, 270.0);
        scene.handle_events(&[
            InputEvent::PointerMoved(pos),
            InputEvent::MouseDown { button: MouseButton::Left, pos },
            InputEvent::MouseUp { button: MouseButton::Left, pos },
        ]);
        assert_eq!(scene.clicks(), 1);
    }

    #[test]
    fn test_button_outline_drawn_over_hover_border() {
        let mut scene = courtyard();
        scene.handle_events(&[InputEvent::PointerMoved(Vec2::new(300.0, 270.0))]);
        let mut fb = Framebuffer::new(800, 600);
        scene.draw(&mut fb);

        let red = Color::rgba(255, 0, 0, 255);
        assert_eq!(fb.get_pixel(250, 250), red);
        assert_eq!(fb.get_pixel(399, 299), red);
        // Just inside the hairline the translucent yellow hover border shows
        assert_ne!(fb.get_pixel(252, 252), red);
    }

    #[test]
    fn test_camera_scrolls_background_only() {
        let mut scene = courtyard();
        let input = FrameInput { right: true, ..Default::default() };
        for _ in 0..60 {
            scene.update(1.0 / 60.0, &input);
        }
        assert!(scene.camera().x > 0.0);
        assert!(scene.entities().player().rect().right() <= 800.0);
    }
}
