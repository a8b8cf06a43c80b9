//! Application configuration resource.
//!
//! Holds window and animator settings loaded from an INI configuration file.
//! Defaults are safe to run with when no file is present.
//!
//! # Configuration File Format
//!
//! ```ini
//! [window]
//! width = 800
//! height = 600
//! target_fps = 60
//!
//! [animator]
//! tick_rate_hz = 60
//! gravity = 0.1
//! shrink_factor = 0.95
//! max_points = 4096
//! ```

use bevy_ecs::prelude::*;
use configparser::ini::Ini;
use log::{info, warn};
use std::path::{Path, PathBuf};

use crate::resources::animator::AnimatorSettings;

/// Default safe values for startup
const DEFAULT_WINDOW_WIDTH: u32 = 800;
const DEFAULT_WINDOW_HEIGHT: u32 = 600;
const DEFAULT_TARGET_FPS: u32 = 60;
pub const DEFAULT_CONFIG_PATH: &str = "./config.ini";

/// Application configuration resource.
#[derive(Resource, Debug, Clone)]
pub struct AppConfig {
    /// Window width in pixels.
    pub window_width: u32,
    /// Window height in pixels.
    pub window_height: u32,
    /// Target frames per second for the window loop.
    pub target_fps: u32,
    /// Settings handed to the point animator.
    pub animator: AnimatorSettings,
    /// Path to the configuration file.
    pub config_path: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl AppConfig {
    /// Create a new configuration with safe default values.
    pub fn new() -> Self {
        Self {
            window_width: DEFAULT_WINDOW_WIDTH,
            window_height: DEFAULT_WINDOW_HEIGHT,
            target_fps: DEFAULT_TARGET_FPS,
            animator: AnimatorSettings::default(),
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }

    /// Create a new configuration with a custom config file path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            ..Self::new()
        }
    }

    /// Load configuration from the INI file.
    ///
    /// Missing values retain their current (default) values. Values that are
    /// present but out of range are ignored with a warning.
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from_file(&mut self) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .load(&self.config_path)
            .map_err(|e| format!("Failed to load config file: {}", e))?;
        self.apply(&config);

        info!(
            "Loaded config: {}x{} window, fps={}, tick_rate={}Hz, gravity={}, shrink={}, max_points={}",
            self.window_width,
            self.window_height,
            self.target_fps,
            self.animator.tick_rate_hz,
            self.animator.gravity,
            self.animator.shrink_factor,
            self.animator.max_points
        );

        Ok(())
    }

    /// Load configuration from an INI string. Used by tests and embedders.
    pub fn load_from_str(&mut self, content: &str) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .read(content.to_string())
            .map_err(|e| format!("Failed to parse config: {}", e))?;
        self.apply(&config);
        Ok(())
    }

    fn apply(&mut self, config: &Ini) {
        // [window] section
        if let Some(width) = config.getuint("window", "width").ok().flatten() {
            self.window_width = width as u32;
        }
        if let Some(height) = config.getuint("window", "height").ok().flatten() {
            self.window_height = height as u32;
        }
        if let Some(fps) = config.getuint("window", "target_fps").ok().flatten() {
            self.target_fps = fps as u32;
        }

        // [animator] section
        if let Some(rate) = config.getfloat("animator", "tick_rate_hz").ok().flatten() {
            if rate.is_finite() && rate > 0.0 {
                self.animator.tick_rate_hz = rate;
            } else {
                warn!("Ignoring tick_rate_hz={}, must be finite and positive", rate);
            }
        }
        if let Some(gravity) = config.getfloat("animator", "gravity").ok().flatten() {
            if gravity.is_finite() {
                self.animator.gravity = gravity as f32;
            } else {
                warn!("Ignoring non-finite gravity={}", gravity);
            }
        }
        if let Some(shrink) = config.getfloat("animator", "shrink_factor").ok().flatten() {
            // Points must shrink every tick: 0 < shrink < 1.
            if shrink.is_finite() && shrink > 0.0 && shrink < 1.0 {
                self.animator.shrink_factor = shrink as f32;
            } else {
                warn!("Ignoring shrink_factor={}, must be in (0, 1)", shrink);
            }
        }
        if let Some(max) = config.getuint("animator", "max_points").ok().flatten() {
            self.animator.max_points = max as usize;
        }
    }

    /// Save configuration to the INI file.
    ///
    /// Creates the file if it doesn't exist.
    pub fn save_to_file(&self) -> Result<(), String> {
        self.save_to(&self.config_path)
    }

    fn save_to(&self, path: &Path) -> Result<(), String> {
        let mut config = Ini::new();

        // [window] section
        config.set("window", "width", Some(self.window_width.to_string()));
        config.set("window", "height", Some(self.window_height.to_string()));
        config.set("window", "target_fps", Some(self.target_fps.to_string()));

        // [animator] section
        config.set(
            "animator",
            "tick_rate_hz",
            Some(self.animator.tick_rate_hz.to_string()),
        );
        config.set("animator", "gravity", Some(self.animator.gravity.to_string()));
        config.set(
            "animator",
            "shrink_factor",
            Some(self.animator.shrink_factor.to_string()),
        );
        config.set(
            "animator",
            "max_points",
            Some(self.animator.max_points.to_string()),
        );

        config
            .write(path)
            .map_err(|e| format!("Failed to save config file: {}", e))?;

        info!("Saved config to {:?}", path);

        Ok(())
    }

    /// Get the window size.
    pub fn window_size(&self) -> (u32, u32) {
        (self.window_width, self.window_height)
    }

    /// Seconds between two animator ticks.
    pub fn tick_period(&self) -> f32 {
        (1.0 / self.animator.tick_rate_hz) as f32
    }
}
