//! Simulator configuration
//!
//! Read from TOML at startup. A missing file means defaults; a file that
//! exists but does not parse is an error.

use std::path::{Path, PathBuf};

use log::info;
use meridian_core::config::FaceConfig;
use meridian_core::traits::WallTime;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Environment variable naming the config file
pub const CONFIG_ENV: &str = "MERIDIAN_CONFIG";

/// Config file looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "meridian.toml";

/// Shortest accepted frame interval
pub const MIN_FRAME_INTERVAL_MS: u32 = 1;

/// Largest accepted canvas width or height in pixels
pub const MAX_CANVAS_SIDE: u32 = 1024;

/// Terminal canvas settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CanvasConfig {
    /// Canvas width in pixels
    pub width: u32,
    /// Canvas height in pixels
    pub height: u32,
    /// Pixels per terminal column
    pub cell_width: u32,
    /// Pixels per terminal row
    pub cell_height: u32,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: 144,
            height: 168,
            cell_width: 4,
            cell_height: 8,
        }
    }
}

/// Simulator configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Face settings
    pub face: FaceConfig,
    /// Animation driver frame interval
    pub frame_interval_ms: u32,
    /// Delay before the application gains focus
    pub focus_delay_ms: u32,
    /// Stop after this many seconds (`None` runs forever)
    pub run_seconds: Option<u32>,
    /// Time shown at startup, `HH:MM[:SS]` (`None` follows the system clock)
    pub start_time: Option<String>,
    /// Draw to the terminal
    pub render: bool,
    /// Terminal canvas
    pub canvas: CanvasConfig,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            face: FaceConfig::default(),
            frame_interval_ms: 33,
            focus_delay_ms: 250,
            run_seconds: None,
            start_time: None,
            render: true,
            canvas: CanvasConfig::default(),
        }
    }
}

impl SimConfig {
    /// Parse a configuration from TOML text
    pub fn from_toml(text: &str, path: &Path) -> Result<Self, ConfigError> {
        let config: SimConfig = toml::from_str(text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Load from `MERIDIAN_CONFIG`, else `meridian.toml`, else defaults
    pub fn load() -> Result<Self, ConfigError> {
        match std::env::var_os(CONFIG_ENV) {
            Some(path) => Self::load_from(&PathBuf::from(path)),
            None => {
                let path = Path::new(DEFAULT_CONFIG_FILE);
                if path.exists() {
                    Self::load_from(path)
                } else {
                    info!("No {} found, using defaults", DEFAULT_CONFIG_FILE);
                    Ok(Self::default())
                }
            }
        }
    }

    /// Load from a specific file
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml(&text, path)?;
        info!("Configuration loaded from {}", path.display());
        Ok(config)
    }

    /// Parsed start time
    pub fn start_time(&self) -> Result<Option<WallTime>, ConfigError> {
        self.start_time
            .as_deref()
            .map(|text| {
                text.parse::<WallTime>()
                    .map_err(|_| ConfigError::Invalid("start_time must be HH:MM or HH:MM:SS"))
            })
            .transpose()
    }

    /// Check settings the face and the tasks cannot use
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.face.validate()?;

        if self.frame_interval_ms < MIN_FRAME_INTERVAL_MS {
            return Err(ConfigError::Invalid("frame_interval_ms must be non-zero"));
        }
        if self.frame_interval_ms > self.face.intro.duration_ms {
            return Err(ConfigError::Invalid(
                "frame_interval_ms must not exceed the intro duration",
            ));
        }
        if self.run_seconds == Some(0) {
            return Err(ConfigError::Invalid("run_seconds must be non-zero"));
        }

        let canvas = &self.canvas;
        if canvas.width == 0 || canvas.height == 0 {
            return Err(ConfigError::Invalid("canvas must have a non-zero size"));
        }
        if canvas.width > MAX_CANVAS_SIDE || canvas.height > MAX_CANVAS_SIDE {
            return Err(ConfigError::Invalid("canvas must be at most 1024x1024"));
        }
        if canvas.cell_width == 0 || canvas.cell_height == 0 {
            return Err(ConfigError::Invalid("canvas cells must have a non-zero size"));
        }

        self.start_time()?;
        Ok(())
    }
}
