//! Screen-space UI
//!
//! - `rect` - float rectangles shared by entities and widgets
//! - `button` - clickable button drawn into the lighting overlay
//! - `text` - labels drawn over the presented frame
//! - `frame_rate` - FPS / frame time HUD

mod button;
mod frame_rate;
mod rect;
mod text;

pub use button::{Button, ButtonStyle, ButtonTheme};
pub use frame_rate::FrameRateDisplay;
pub use rect::Rect;
pub use text::{Outline, TextPainter};
