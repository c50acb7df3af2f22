//! Game configuration
//!
//! Loaded from a RON file at startup. A missing file means defaults; a file
//! that fails to parse or holds invalid values is fatal.

mod settings;

pub use settings::*;

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Environment variable naming the config file
pub const CONFIG_ENV: &str = "LANTERNFALL_CONFIG";

/// Config file used when `CONFIG_ENV` is unset
pub const DEFAULT_CONFIG_PATH: &str = "lanternfall.ron";

/// Error type for configuration loading
#[derive(Debug)]
pub enum ConfigError {
    Io(io::Error),
    Parse(ron::error::SpannedError),
    Invalid(String),
}

impl From<io::Error> for ConfigError {
    fn from(e: io::Error) -> Self {
        ConfigError::Io(e)
    }
}

impl From<ron::error::SpannedError> for ConfigError {
    fn from(e: ron::error::SpannedError) -> Self {
        ConfigError::Parse(e)
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "IO error: {}", e),
            ConfigError::Parse(e) => write!(f, "Parse error: {}", e),
            ConfigError::Invalid(e) => write!(f, "Invalid config: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io(e) => Some(e),
            ConfigError::Parse(e) => Some(e),
            ConfigError::Invalid(_) => None,
        }
    }
}

impl GameConfig {
    /// Parse and validate a config from RON text
    pub fn from_ron(text: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = ron::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a config file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path)?;
        Self::from_ron(&text)
    }

    /// Load `path`, falling back to defaults when it does not exist
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        match fs::read_to_string(path) {
            Ok(text) => {
                let config = Self::from_ron(&text)?;
                tracing::info!(path = %path.display(), "loaded config");
                Ok(config)
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::info!(path = %path.display(), "no config file, using defaults");
                Ok(Self::default())
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Config path from the environment, or the default location
    pub fn resolve_path() -> PathBuf {
        std::env::var_os(CONFIG_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH))
    }

    /// Check value ranges serde cannot express
    pub fn validate(&self) -> Result<(), ConfigError> {
        let invalid = |msg: &str| Err(ConfigError::Invalid(msg.to_string()));

        if self.window.width == 0 || self.window.height == 0 {
            return invalid("window size must be non-zero");
        }
        if self.window.width > u16::MAX as usize || self.window.height > u16::MAX as usize {
            return invalid("window size must fit in 16 bits");
        }
        if !(self.player.speed.is_finite() && self.player.speed > 0.0) {
            return invalid("player.speed must be positive");
        }
        if !(self.player.launch_speed.is_finite() && self.player.launch_speed > 0.0) {
            return invalid("player.launch_speed must be positive");
        }
        if !(self.player.shoot_cooldown.is_finite() && self.player.shoot_cooldown > 0.0) {
            return invalid("player.shoot_cooldown must be positive");
        }
        if !(self.lighting.beam_angle.is_finite() && self.lighting.beam_angle > 0.0) {
            return invalid("lighting.beam_angle must be positive");
        }
        if self.lighting.beam_steps == 0 {
            return invalid("lighting.beam_steps must be non-zero");
        }
        if self.lighting.beam_alpha > 100 {
            return invalid("lighting.beam_alpha is a percentage (0-100)");
        }
        let glow = &self.lighting.npc_glow;
        if glow.steps == 0 || glow.radius == 0 {
            return invalid("lighting.npc_glow needs a non-zero radius and step count");
        }
        if glow.alpha > 100 {
            return invalid("lighting.npc_glow.alpha is a percentage (0-100)");
        }
        if !(self.camera.deadzone_width.is_finite() && self.camera.deadzone_width >= 0.0) {
            return invalid("camera.deadzone_width must be zero or positive");
        }
        Ok(())
    }
}
