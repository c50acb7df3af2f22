//! Configuration sections
//!
//! Every section is `#[serde(default)]`, so a config file only needs to
//! name the values it changes.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::clock::FpsLimit;
use crate::game::{MovementMode, LAUNCH_SPEED};
use crate::lighting::{PointLight, DEFAULT_BEAM_ALPHA, DEFAULT_BEAM_ANGLE, DEFAULT_BEAM_STEPS};
use crate::rasterizer::{Color, HEIGHT, WIDTH};

/// Top-level game configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub window: WindowConfig,
    pub assets: AssetPaths,
    pub player: PlayerConfig,
    pub lighting: LightingConfig,
    pub camera: CameraConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    /// Framebuffer width in pixels; the window starts at this size
    pub width: usize,
    pub height: usize,
    pub fullscreen: bool,
    pub fps_limit: FpsLimit,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Lanternfall".to_string(),
            width: WIDTH,
            height: HEIGHT,
            fullscreen: false,
            fps_limit: FpsLimit::Fps60,
        }
    }
}

/// Image and font locations, relative to the working directory
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetPaths {
    pub background: PathBuf,
    pub player: PathBuf,
    pub projectile: PathBuf,
    pub stickfigure: PathBuf,
    pub scream: PathBuf,
    /// TTF used for the button label; macroquad's built-in font when unset
    pub font: Option<PathBuf>,
}

impl Default for AssetPaths {
    fn default() -> Self {
        Self {
            background: PathBuf::from("assets/background.png"),
            player: PathBuf::from("assets/white.png"),
            projectile: PathBuf::from("assets/tnt.png"),
            stickfigure: PathBuf::from("assets/stick.png"),
            scream: PathBuf::from("assets/scream.png"),
            font: Some(PathBuf::from("assets/fonts/Creepster_Regular.ttf")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    /// Pixels moved per frame (or per 1/60 s with `PerSecond`)
    pub speed: f32,
    pub movement: MovementMode,
    /// Projectile launch speed in px/s
    pub launch_speed: f32,
    /// Minimum seconds between shots
    pub shoot_cooldown: f64,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            speed: 5.0,
            movement: MovementMode::PerFrame,
            launch_speed: LAUNCH_SPEED,
            shoot_cooldown: 0.3,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LightingConfig {
    /// Tint covering the whole scene before lights are carved out
    pub ambient: Color,
    /// Full spotlight cone angle in degrees
    pub beam_angle: f32,
    /// Peak spotlight strength, percent
    pub beam_alpha: u8,
    pub beam_steps: u32,
    /// Glow around the scream NPC
    pub npc_glow: PointLight,
}

impl Default for LightingConfig {
    fn default() -> Self {
        Self {
            ambient: Color::rgba(20, 30, 50, 120),
            beam_angle: DEFAULT_BEAM_ANGLE,
            beam_alpha: DEFAULT_BEAM_ALPHA,
            beam_steps: DEFAULT_BEAM_STEPS,
            npc_glow: PointLight::new(32, 100, 90),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    /// Width of the central band the player moves in without scrolling
    pub deadzone_width: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self { deadzone_width: 100.0 }
    }
}
