//! Lanternfall: a night-time courtyard
//!
//! A 2D game loop on a software framebuffer:
//! - Ballistic firecrackers with trail previews
//! - A flashlight spotlight and point-light glows carved out of a dark overlay
//! - Scene/entity update-draw pipeline presented through macroquad

/// Version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

mod asset;
mod clock;
mod config;
mod game;
mod input;
mod lighting;
mod physics;
mod rasterizer;
mod scene;
mod ui;

use macroquad::prelude::{
    clear_background, draw_texture_ex, next_frame, screen_height, screen_width, vec2, Conf, DrawTextureParams,
    FilterMode, Texture2D, BLACK, WHITE,
};

use asset::AssetError;
use clock::FrameClock;
use config::{ConfigError, GameConfig};
use input::{Action, InputEvent, InputState};
use rasterizer::Framebuffer;
use scene::{Courtyard, SceneManager};
use ui::{FrameRateDisplay, TextPainter};

/// Label font size in framebuffer pixels
const LABEL_FONT_SIZE: u16 = 24;
const HUD_FONT_SIZE: u16 = 30;

/// Anything that stops the game from starting
#[derive(Debug)]
enum StartupError {
    Config(ConfigError),
    Asset(AssetError),
}

impl From<ConfigError> for StartupError {
    fn from(e: ConfigError) -> Self {
        StartupError::Config(e)
    }
}

impl From<AssetError> for StartupError {
    fn from(e: AssetError) -> Self {
        StartupError::Asset(e)
    }
}

impl std::fmt::Display for StartupError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StartupError::Config(e) => write!(f, "config: {}", e),
            StartupError::Asset(e) => write!(f, "assets: {}", e),
        }
    }
}

impl std::error::Error for StartupError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StartupError::Config(e) => Some(e),
            StartupError::Asset(e) => Some(e),
        }
    }
}

fn window_conf() -> Conf {
    // Errors surface again, logged, once main runs
    let config = GameConfig::load(GameConfig::resolve_path()).unwrap_or_default();
    Conf {
        window_title: format!("{} v{}", config.window.title, VERSION),
        window_width: config.window.width as i32,
        window_height: config.window.height as i32,
        window_resizable: true,
        high_dpi: true,
        #[cfg(not(target_arch = "wasm32"))]
        fullscreen: config.window.fullscreen,
        ..Default::default()
    }
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let json = matches!(std::env::var("LOG_FORMAT").as_deref(), Ok("json"));
    if json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .json()
            .with_current_span(true)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .compact()
            .init();
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    // Initialize crash logging FIRST (before any other code)
    #[cfg(not(target_arch = "wasm32"))]
    crashlog::setup!(crashlog::cargo_metadata!().capitalized(), false);

    init_tracing();

    if let Err(e) = run().await {
        tracing::error!("startup failed: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<(), StartupError> {
    let config = GameConfig::load_or_default(GameConfig::resolve_path())?;
    let (width, height) = (config.window.width, config.window.height);
    tracing::info!(version = VERSION, width, height, fps = config.window.fps_limit.label(), "starting");

    let mut fb = Framebuffer::new(width, height);
    let texture = Texture2D::from_rgba8(width as u16, height as u16, &fb.pixels);
    texture.set_filter(FilterMode::Nearest);

    let label_text = TextPainter::load(config.assets.font.as_deref(), LABEL_FONT_SIZE, width, height).await;
    let hud_text = TextPainter::new(None, HUD_FONT_SIZE, width, height);
    let mut hud = FrameRateDisplay::default();

    let mut input = InputState::new(width, height);
    let mut clock = FrameClock::new(config.window.fps_limit);
    let mut scenes = SceneManager::new();
    scenes.switch_to(Box::new(Courtyard::load(&config)?));

    let mut paused = false;
    loop {
        let dt = clock.begin_frame();
        input.poll();

        let events = input.events();
        if events.contains(&InputEvent::KeyDown(Action::Quit)) {
            tracing::info!("quit requested");
            break;
        }
        if events.contains(&InputEvent::KeyDown(Action::TogglePause)) {
            paused = !paused;
            tracing::info!(paused, "pause toggled");
        }

        scenes.handle_events(events);
        if !paused {
            scenes.update(dt, &input.snapshot());
            scenes.draw(&mut fb);
            hud.record(dt);
        }

        present(&texture, &fb);
        scenes.draw_text(&label_text);
        hud.draw(&hud_text);

        clock.wait_for_frame_end();
        next_frame().await;
    }
    Ok(())
}

/// Upload the framebuffer and stretch it over the window
fn present(texture: &Texture2D, fb: &Framebuffer) {
    texture.update_from_bytes(fb.width as u32, fb.height as u32, &fb.pixels);
    clear_background(BLACK);
    draw_texture_ex(
        texture,
        0.0,
        0.0,
        WHITE,
        DrawTextureParams {
            dest_size: Some(vec2(screen_width(), screen_height())),
            ..Default::default()
        },
    );
}
