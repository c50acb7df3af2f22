//! Image assets
//!
//! Decodes sprites and backgrounds into `Framebuffer` surfaces. Everything is
//! loaded once at scene construction; the game loop only blits.

mod surface;

pub use surface::*;
