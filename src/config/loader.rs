use anyhow::{Context, Result};
use log::info;
use serde::Deserialize;
use std::fs;

use crate::cli::CliArgs;

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    pub camera: CameraConfig,
    pub buffer: BufferConfig,
    pub run: RunConfig,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    pub width: u32,
    pub height: u32,
    pub fps: f64,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct BufferConfig {
    /// Number of frame slots; the oldest frame is dropped once this many are
    /// pending.
    pub capacity: usize,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    /// Frames the demo binary consumes before shutting down.
    pub frames: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            camera: CameraConfig::default(),
            buffer: BufferConfig::default(),
            run: RunConfig::default(),
        }
    }
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            width: 640,
            height: 480,
            fps: 60.0,
        }
    }
}

impl Default for BufferConfig {
    fn default() -> Self {
        Self { capacity: 5 }
    }
}

impl Default for RunConfig {
    fn default() -> Self {
        Self { frames: 100 }
    }
}

impl Config {
    pub fn load(cli_args: &CliArgs) -> Result<Self> {
        let mut config = match cli_args.config.as_deref() {
            Some(config_path) => {
                info!("Loading configuration from {}", config_path);
                let config_str = fs::read_to_string(config_path)
                    .with_context(|| format!("Failed to read config file: {}", config_path))?;
                toml::from_str(&config_str)
                    .with_context(|| format!("Failed to parse config file: {}", config_path))?
            }
            None => Config::default(),
        };

        // Override config with CLI arguments
        config.override_with_cli_args(cli_args);

        config.validate()?;

        Ok(config)
    }

    fn override_with_cli_args(&mut self, args: &CliArgs) {
        if let Some(width) = args.width {
            self.camera.width = width;
        }
        if let Some(height) = args.height {
            self.camera.height = height;
        }
        if let Some(fps) = args.fps {
            self.camera.fps = fps;
        }
        if let Some(capacity) = args.capacity {
            self.buffer.capacity = capacity;
        }
        if let Some(frames) = args.frames {
            self.run.frames = frames;
        }
    }

    fn validate(&self) -> Result<()> {
        if self.camera.width == 0 || self.camera.height == 0 {
            return Err(anyhow::anyhow!("Resolution must be greater than 0"));
        }
        if self.camera.fps <= 0.0 {
            return Err(anyhow::anyhow!("FPS must be greater than 0"));
        }
        if self.buffer.capacity == 0 {
            return Err(anyhow::anyhow!("Buffer capacity must be greater than 0"));
        }
        if self.run.frames == 0 {
            return Err(anyhow::anyhow!("Frame count must be greater than 0"));
        }
        Ok(())
    }
}
