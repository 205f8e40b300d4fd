/// Session configuration loaded from JSON
use constants::gameplay::{COLLECTIBLE_COUNT, STARTING_TIME, TICK_SECS};
use constants::terrain::{DEFAULT_HEIGHT_RANGE, DEFAULT_HEIGHTMAP_PATH};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Everything needed to start a headless session.
/// Missing keys fall back to the defaults below.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Grayscale heightmap; only the first channel is used.
    pub heightmap: PathBuf,
    /// World-unit span between black and white pixels.
    pub height_range: f32,
    /// Fixed step fed to the game clock per tick (seconds).
    pub tick_secs: f32,
    /// Seed for collectible placement; random when absent.
    pub seed: Option<u64>,
    pub collectible_count: usize,
    pub starting_time: i32,
    /// Input script; the built-in demo lap is used when absent.
    pub script: Option<PathBuf>,
    /// Directory receiving the mesh and run summaries.
    pub output_dir: PathBuf,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            heightmap: PathBuf::from(DEFAULT_HEIGHTMAP_PATH),
            height_range: DEFAULT_HEIGHT_RANGE,
            tick_secs: TICK_SECS,
            seed: None,
            collectible_count: COLLECTIBLE_COUNT,
            starting_time: STARTING_TIME,
            script: None,
            output_dir: PathBuf::from("."),
        }
    }
}

impl SessionConfig {
    /// Read and validate a JSON config file.
    /// Relative paths inside the file resolve against the file's directory.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let mut config: SessionConfig = serde_json::from_str(&text)?;

        if let Some(base) = path.parent() {
            config.heightmap = base.join(&config.heightmap);
            config.output_dir = base.join(&config.output_dir);
            config.script = config.script.map(|script| base.join(script));
        }

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.height_range.is_finite() || self.height_range <= 0.0 {
            return Err(ConfigError::Invalid(format!(
                "height_range must be a positive number, got {}",
                self.height_range
            )));
        }
        if !self.tick_secs.is_finite() || self.tick_secs <= 0.0 {
            return Err(ConfigError::Invalid(format!(
                "tick_secs must be a positive number, got {}",
                self.tick_secs
            )));
        }
        if self.starting_time <= 0 {
            return Err(ConfigError::Invalid(format!(
                "starting_time must be positive, got {}",
                self.starting_time
            )));
        }
        Ok(())
    }
}
