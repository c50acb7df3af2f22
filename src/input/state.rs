//! Input state management
//!
//! Polls keyboard and mouse through macroquad and turns them into a
//! `FrameInput` snapshot plus a list of discrete `InputEvent`s.

use macroquad::prelude::{
    get_time, is_key_down, is_key_pressed, is_mouse_button_pressed, is_mouse_button_released,
    mouse_position, screen_height, screen_width, KeyCode,
};
use macroquad::input::MouseButton as MqMouseButton;

use super::{Action, FrameInput, InputEvent, MouseButton};
use crate::rasterizer::Vec2;

/// Keyboard/mouse state mapped into framebuffer coordinates
pub struct InputState {
    /// Framebuffer size the window is scaled from
    fb_width: f32,
    fb_height: f32,
    last_pointer: Option<Vec2>,
    events: Vec<InputEvent>,
}

impl InputState {
    pub fn new(fb_width: usize, fb_height: usize) -> Self {
        Self {
            fb_width: fb_width as f32,
            fb_height: fb_height as f32,
            last_pointer: None,
            events: Vec::new(),
        }
    }

    /// Call once per frame before reading the snapshot or events
    pub fn poll(&mut self) {
        self.events.clear();

        let pointer = self.pointer();
        if self.last_pointer != Some(pointer) {
            self.events.push(InputEvent::PointerMoved(pointer));
            self.last_pointer = Some(pointer);
        }

        for (mq, button) in [(MqMouseButton::Left, MouseButton::Left), (MqMouseButton::Right, MouseButton::Right)] {
            if is_mouse_button_pressed(mq) {
                self.events.push(InputEvent::MouseDown { button, pos: pointer });
            }
            if is_mouse_button_released(mq) {
                self.events.push(InputEvent::MouseUp { button, pos: pointer });
            }
        }

        for action in [Action::Fire, Action::TogglePause, Action::Quit] {
            if self.action_pressed(action) {
                self.events.push(InputEvent::KeyDown(action));
            }
        }
    }

    /// Events observed by the last `poll`
    pub fn events(&self) -> &[InputEvent] {
        &self.events
    }

    /// Pointer position in framebuffer pixels
    pub fn pointer(&self) -> Vec2 {
        let (mx, my) = mouse_position();
        let sx = self.fb_width / screen_width().max(1.0);
        let sy = self.fb_height / screen_height().max(1.0);
        Vec2::new(mx * sx, my * sy)
    }

    /// Snapshot of held keys, pointer and the absolute clock
    pub fn snapshot(&self) -> FrameInput {
        FrameInput {
            up: self.action_down(Action::MoveUp),
            down: self.action_down(Action::MoveDown),
            left: self.action_down(Action::MoveLeft),
            right: self.action_down(Action::MoveRight),
            fire: self.action_down(Action::Fire),
            pointer: self.pointer(),
            now: get_time(),
        }
    }

    /// Check if action is currently held down
    pub fn action_down(&self, action: Action) -> bool {
        is_key_down(key_for(action))
    }

    /// Check if action was just pressed this frame
    pub fn action_pressed(&self, action: Action) -> bool {
        is_key_pressed(key_for(action))
    }
}

fn key_for(action: Action) -> KeyCode {
    match action {
        Action::MoveUp => KeyCode::W,
        Action::MoveDown => KeyCode::S,
        Action::MoveLeft => KeyCode::A,
        Action::MoveRight => KeyCode::D,
        Action::Fire => KeyCode::Space,
        Action::TogglePause => KeyCode::E,
        Action::Quit => KeyCode::Escape,
    }
}
