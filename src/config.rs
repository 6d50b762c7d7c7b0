//! User configuration file
//!
//! Defaults for the CLI live in `<config dir>/tempo/config.toml`. A missing
//! file means defaults; command-line flags override file values. The
//! library-level [`PlayerOptions`] defaults are untouched by this file.

use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::playback::PlayerOptions;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub playback: PlaybackDefaults,
    pub display: DisplayDefaults,
}

/// `[playback]` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PlaybackDefaults {
    pub fps: f64,
    pub steps: u32,
    pub hold_ms: u64,
}

impl Default for PlaybackDefaults {
    fn default() -> Self {
        Self {
            fps: 24.0,
            steps: 250,
            hold_ms: 2500,
        }
    }
}

/// `[display]` section. Both overlays are on for the CLI; the library
/// default keeps them off.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayDefaults {
    pub clock: bool,
    pub captions: bool,
}

impl Default for DisplayDefaults {
    fn default() -> Self {
        Self {
            clock: true,
            captions: true,
        }
    }
}

impl Config {
    /// Path of the configuration file.
    pub fn config_path() -> Result<PathBuf> {
        let dir = dirs::config_dir().context("Could not determine config directory")?;
        Ok(dir.join("tempo").join("config.toml"))
    }

    /// Load the configuration, falling back to defaults when no file exists.
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config: {:?}", path))?;
        toml::from_str(&content).with_context(|| format!("Failed to parse config: {:?}", path))
    }

    /// Write the current values to the configuration file.
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {:?}", parent))?;
        }
        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;
        fs::write(&path, content).with_context(|| format!("Failed to write config: {:?}", path))
    }

    /// Player options seeded from this configuration.
    pub fn player_options(&self) -> PlayerOptions {
        PlayerOptions {
            steps: self.playback.steps,
            fps: self.playback.fps,
            hold: Duration::from_millis(self.playback.hold_ms),
            clock: self.display.clock,
            captions: self.display.captions,
        }
    }
}
