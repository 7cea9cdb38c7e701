//! # Configuration Management Module
//!
//! Settings for the Old Forest front end and its logging. The game world
//! itself is fixed and is never read from configuration.
//!
//! ## Configuration Structure
//!
//! - [`GameConfig`] - prompt, banner, image lines and output format
//! - [`LoggingConfig`] - log level and optional log file
//! - [`ConfigSource`] - whether a file was read or defaults were used
//!
//! ## Usage
//!
//! ```rust,no_run
//! use oldforest::config::Config;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     // Write a starter file, then read it back
//!     Config::create_default("oldforest.toml").await?;
//!     let config = Config::load("oldforest.toml").await?;
//!
//!     println!("Prompt: {:?}", config.game.prompt);
//!     Ok(())
//! }
//! ```
//!
//! ## Configuration File Format
//!
//! ```toml
//! [game]
//! prompt = "> "
//! show_banner = true
//! show_images = true
//! output = "text"   # or "json"
//!
//! [logging]
//! level = "warn"
//! file = "oldforest.log"
//! ```
//!
//! Every section and field is optional; anything left out takes its default.
//! Precedence when the binary runs: CLI flags > config file > defaults.

use anyhow::{anyhow, Result};
use log::LevelFilter;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tokio::fs;

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub game: GameConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// How turn output is written to stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable text.
    #[default]
    Text,
    /// One JSON event per line.
    Json,
}

/// Where a loaded configuration came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigSource {
    File,
    /// No file at the path; built-in defaults are in use.
    Defaults,
}

impl ConfigSource {
    /// Warning to log once logging is up, when the file was missing.
    pub fn fallback_warning(self, path: &str) -> Option<String> {
        match self {
            ConfigSource::File => None,
            ConfigSource::Defaults => Some(format!("Config file {} not found; using defaults", path)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Prompt printed before each command in interactive play.
    #[serde(default = "default_prompt")]
    pub prompt: String,
    /// Print the title banner when a game starts.
    #[serde(default = "default_true")]
    pub show_banner: bool,
    /// Print the `[image: ...]` line under room titles.
    #[serde(default = "default_true")]
    pub show_images: bool,
    #[serde(default)]
    pub output: OutputFormat,
}

fn default_prompt() -> String {
    "> ".to_string()
}

fn default_true() -> bool {
    true
}

impl GameConfig {
    /// Output format after the CLI `--json` override.
    pub fn output_format(&self, json_flag: bool) -> OutputFormat {
        if json_flag {
            OutputFormat::Json
        } else {
            self.output
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            prompt: default_prompt(),
            show_banner: true,
            show_images: true,
            output: OutputFormat::Text,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// One of "off", "error", "warn", "info", "debug", "trace".
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Append log lines to this file instead of stderr.
    #[serde(default)]
    pub file: Option<String>,
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: None,
        }
    }
}

impl LoggingConfig {
    /// Parsed level filter. Unknown names fall back to `Warn`.
    pub fn level_filter(&self) -> LevelFilter {
        match self.level.trim().to_lowercase().as_str() {
            "off" => LevelFilter::Off,
            "error" => LevelFilter::Error,
            "warn" | "warning" => LevelFilter::Warn,
            "info" => LevelFilter::Info,
            "debug" => LevelFilter::Debug,
            "trace" => LevelFilter::Trace,
            _ => {
                eprintln!("Invalid log level '{}', defaulting to warn", self.level);
                LevelFilter::Warn
            }
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub async fn load(path: &str) -> Result<Self> {
        let content = fs::read_to_string(path)
            .await
            .map_err(|e| anyhow!("Failed to read config file {}: {}", path, e))?;

        let config: Config = toml::from_str(&content)
            .map_err(|e| anyhow!("Failed to parse config file {}: {}", path, e))?;

        Ok(config)
    }

    /// Load the file when present, otherwise fall back to defaults.
    ///
    /// A file that exists but cannot be parsed is still an error. Nothing is
    /// logged here since this runs before the logger is installed; callers
    /// report [`ConfigSource::fallback_warning`] afterwards.
    pub async fn load_or_default(path: &str) -> Result<(Self, ConfigSource)> {
        if !Path::new(path).exists() {
            return Ok((Config::default(), ConfigSource::Defaults));
        }
        Ok((Self::load(path).await?, ConfigSource::File))
    }

    /// Create a default configuration file
    pub async fn create_default(path: &str) -> Result<()> {
        let config = Config::default();
        let content = toml::to_string_pretty(&config)
            .map_err(|e| anyhow!("Failed to serialize default config: {}", e))?;

        fs::write(path, content)
            .await
            .map_err(|e| anyhow!("Failed to write config file {}: {}", path, e))?;

        Ok(())
    }
}
