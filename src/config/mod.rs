//! Configuration file support for coffeenote-mockup.
//!
//! Settings are read from `~/.config/coffeenote-mockup/config.toml` (or a
//! path given on the command line). They cover where the PNG is written and
//! which font files to try. The mockup layout itself is not configurable.
//!
//! If no config file exists, defaults reproduce the stock output.

pub mod types;

// Re-export commonly used types at module level
pub use types::{FontConfig, OutputConfig};

use crate::mockup;
use anyhow::{Context, Result};
use log::{debug, info};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure containing all user settings.
///
/// # Example TOML
/// ```toml
/// [output]
/// path = "~/Pictures/personal_center_ui.png"
///
/// [[fonts.candidates]]
/// path = "/usr/share/fonts/opentype/noto/NotoSansCJK-Regular.ttc"
/// family = "Noto Sans CJK SC"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default, JsonSchema)]
pub struct Config {
    /// Output file settings
    #[serde(default)]
    pub output: OutputConfig,

    /// Font candidates for text rendering
    #[serde(default)]
    pub fonts: FontConfig,
}

impl Config {
    /// Normalizes loaded values.
    ///
    /// Expands `~/` in every path and drops font candidates with an empty
    /// family name, logging a warning for each.
    fn validate(&mut self) {
        if let Some(path) = self.output.path.take() {
            self.output.path = Some(expand_tilde(&path));
        }

        self.fonts.candidates.retain(|candidate| {
            let keep = !candidate.family.trim().is_empty();
            if !keep {
                log::warn!(
                    "Ignoring font candidate {} with empty family",
                    candidate.path.display()
                );
            }
            keep
        });
        for candidate in &mut self.fonts.candidates {
            candidate.path = expand_tilde(&candidate.path);
        }
    }

    /// Returns the path to the configuration file.
    ///
    /// The config file is located at `~/.config/coffeenote-mockup/config.toml`.
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined (e.g., HOME not set).
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not find config directory")?
            .join("coffeenote-mockup");

        Ok(config_dir.join("config.toml"))
    }

    /// Loads configuration from the default location, or returns defaults if
    /// no file exists there.
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load() -> Result<Self> {
        let config_path = match Self::get_config_path() {
            Ok(path) => path,
            Err(err) => {
                info!("{err:#}, using defaults");
                return Ok(Self::default());
            }
        };

        if !config_path.exists() {
            info!("Config file not found, using defaults");
            debug!("Expected config at: {}", config_path.display());
            return Ok(Self::default());
        }

        Self::load_from(&config_path)
    }

    /// Loads configuration from an explicit file.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or contains invalid TOML.
    pub fn load_from(config_path: &Path) -> Result<Self> {
        let config_str = fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config from {}", config_path.display()))?;

        let mut config = Self::from_toml(&config_str)
            .with_context(|| format!("Failed to parse config from {}", config_path.display()))?;
        config.validate();

        info!("Loaded config from {}", config_path.display());
        debug!("Config: {:?}", config);

        Ok(config)
    }

    /// Parses configuration from TOML text without validation.
    pub fn from_toml(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Output path to write to: the configured one, or the default next to
    /// the executable.
    pub fn output_path(&self) -> PathBuf {
        self.output
            .path
            .clone()
            .unwrap_or_else(mockup::default_output_path)
    }

    /// JSON schema describing the config file.
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Config)
    }
}

/// Expands a leading `~/` to the home directory.
pub fn expand_tilde(path: &Path) -> PathBuf {
    if let Ok(stripped) = path.strip_prefix("~")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(stripped);
    }
    path.to_path_buf()
}
