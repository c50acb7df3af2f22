//! Input handling
//!
//! Provides an action-based input layer over macroquad's keyboard and
//! mouse polling. Game code only sees the pure `FrameInput` snapshot and
//! `InputEvent` list, never macroquad directly.

mod actions;
mod frame;
mod state;

pub use actions::*;
pub use frame::*;
pub use state::*;
