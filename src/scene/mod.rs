//! Scenes and scene switching
//!
//! A scene owns everything on screen for one part of the game. The
//! `SceneManager` holds the active scene; there is no global.

mod camera;
mod courtyard;
mod manager;

pub use camera::DeadzoneCamera;
pub use courtyard::Courtyard;
pub use manager::SceneManager;

use crate::input::{FrameInput, InputEvent};
use crate::rasterizer::Framebuffer;
use crate::ui::TextPainter;

pub trait Scene {
    fn name(&self) -> &str;

    /// Called when the scene becomes active
    fn enter(&mut self) {}

    /// Called before another scene replaces this one
    fn exit(&mut self) {}

    /// Discrete input for widgets
    fn handle_events(&mut self, events: &[InputEvent]);

    fn update(&mut self, dt: f32, input: &FrameInput);

    /// Render into the software framebuffer
    fn draw(&mut self, fb: &mut Framebuffer);

    /// Text drawn over the presented framebuffer
    fn draw_text(&self, _text: &TextPainter) {}
}
