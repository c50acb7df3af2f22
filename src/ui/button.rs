//! Clickable button
//!
//! Retained state driven by `InputEvent`s: hover follows the pointer, a
//! press starts inside the button and a click is a release inside while
//! pressed. The click handler returns a `Result`; failures are logged and
//! swallowed so a faulty handler cannot take down the frame loop.

use crate::input::{InputEvent, MouseButton};
use crate::rasterizer::{BlendMode, Color, Framebuffer, Vec2};

use super::Rect;

/// Fallback adjustment for unspecified hover/pressed colors
const DERIVE_FACTOR: f32 = 0.2;

/// Click handler; receives the clicked button
pub type ClickHandler = Box<dyn FnMut(&Button) -> Result<(), Box<dyn std::error::Error>>>;

/// Colors for one button state
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ButtonStyle {
    pub fill: Color,
    pub text: Color,
    pub border: Color,
}

/// Styles for every state plus the border width
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ButtonTheme {
    pub normal: ButtonStyle,
    pub hover: ButtonStyle,
    pub pressed: ButtonStyle,
    pub border_width: f32,
}

impl ButtonTheme {
    /// Theme from the normal style; hover brightens, pressed darkens
    pub fn new(normal: ButtonStyle, border_width: f32) -> Self {
        Self {
            normal,
            hover: ButtonStyle {
                fill: normal.fill.brighten(DERIVE_FACTOR),
                text: normal.text,
                border: normal.border.brighten(DERIVE_FACTOR),
            },
            pressed: ButtonStyle {
                fill: normal.fill.darken(DERIVE_FACTOR),
                text: normal.text,
                border: normal.border.darken(DERIVE_FACTOR),
            },
            border_width,
        }
    }

    pub fn with_hover(mut self, hover: ButtonStyle) -> Self {
        self.hover = hover;
        self
    }

    pub fn with_pressed(mut self, pressed: ButtonStyle) -> Self {
        self.pressed = pressed;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonState {
    Normal,
    Hovered,
    Pressed,
}

pub struct Button {
    label: String,
    rect: Rect,
    theme: ButtonTheme,
    hovered: bool,
    pressed: bool,
    on_click: Option<ClickHandler>,
}

impl Button {
    pub fn new(label: impl Into<String>, rect: Rect, theme: ButtonTheme) -> Self {
        Self {
            label: label.into(),
            rect,
            theme,
            hovered: false,
            pressed: false,
            on_click: None,
        }
    }

    pub fn with_handler<F>(mut self, handler: F) -> Self
    where
        F: FnMut(&Button) -> Result<(), Box<dyn std::error::Error>> + 'static,
    {
        self.on_click = Some(Box::new(handler));
        self
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn rect(&self) -> Rect {
        self.rect
    }

    pub fn state(&self) -> ButtonState {
        if self.pressed {
            ButtonState::Pressed
        } else if self.hovered {
            ButtonState::Hovered
        } else {
            ButtonState::Normal
        }
    }

    /// Colors for the current state
    pub fn style(&self) -> ButtonStyle {
        match self.state() {
            ButtonState::Normal => self.theme.normal,
            ButtonState::Hovered => self.theme.hover,
            ButtonState::Pressed => self.theme.pressed,
        }
    }

    /// Process this frame's events. Returns true if the button was clicked.
    pub fn update(&mut self, events: &[InputEvent]) -> bool {
        let mut clicked = false;
        for event in events {
            match *event {
                InputEvent::PointerMoved(pos) => self.hovered = self.rect.contains_point(pos),
                InputEvent::MouseDown { button: MouseButton::Left, pos } => {
                    if self.rect.contains_point(pos) {
                        self.pressed = true;
                    }
                }
                InputEvent::MouseUp { button: MouseButton::Left, pos } => {
                    if self.pressed && self.rect.contains_point(pos) {
                        clicked = true;
                    }
                    self.pressed = false;
                    self.hovered = self.rect.contains_point(pos);
                }
                _ => {}
            }
        }

        if clicked {
            self.handle_click();
        }
        clicked
    }

    fn handle_click(&mut self) {
        match self.on_click.take() {
            Some(mut handler) => {
                if let Err(e) = handler(self) {
                    tracing::error!(button = %self.label, "button callback failed: {}", e);
                }
                self.on_click = Some(handler);
            }
            None => tracing::info!(button = %self.label, "button clicked (no handler)"),
        }
    }

    /// Draw fill and border; the label is drawn by the text pass
    pub fn draw(&self, fb: &mut Framebuffer) {
        let style = self.style();
        let Rect { x, y, w, h } = self.rect;
        if !style.fill.is_transparent() {
            fb.fill_rect(x, y, w, h, style.fill, BlendMode::Alpha);
        }
        if self.theme.border_width > 0.0 && !style.border.is_transparent() {
            fb.stroke_rect(x, y, w, h, self.theme.border_width, style.border, BlendMode::Alpha);
        }
    }

    /// Where the label is centered, in framebuffer pixels
    pub fn label_center(&self) -> Vec2 {
        self.rect.center()
    }
}
