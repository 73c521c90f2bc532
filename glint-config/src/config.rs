//! Configuration management for the glint highlight library.
//!
//! Provides the serializable settings surface, per-field defaults, semantic
//! validation, and YAML load/save against the user's config directory.

use crate::color::HighlightColor;
use crate::error::ConfigError;

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Settings for the highlight engine, trigger policy, and navigation ring.
///
/// Every field has a serde default, so a partial (or empty) YAML document
/// deserializes into a usable config.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Total fade duration in seconds. One ramp color is consumed per tick,
    /// so the decay interval is `fade_duration_secs / highlight_width`.
    #[serde(default = "crate::defaults::fade_duration_secs")]
    pub fade_duration_secs: f32,

    /// Delay in seconds between painting the highlight and the first fade
    /// step.
    #[serde(default = "crate::defaults::fade_delay_secs")]
    pub fade_delay_secs: f32,

    /// Highlight width in character cells. This is also the length of the
    /// color ramp.
    #[serde(default = "crate::defaults::highlight_width")]
    pub highlight_width: usize,

    /// Seed color of the highlight: an explicit RGB value, or a brightness
    /// fraction used to derive a seed from the ambient background.
    #[serde(default = "crate::defaults::highlight_color")]
    pub highlight_color: HighlightColor,

    /// Minimum vertical displacement, in lines, for a cursor move to count
    /// as a large movement.
    #[serde(default = "crate::defaults::movement_line_threshold")]
    pub movement_line_threshold: usize,

    /// Optional horizontal displacement threshold in columns. When set, a
    /// move must also exceed this column delta to count as large.
    #[serde(default)]
    pub movement_column_threshold: Option<usize>,

    /// Buffer mode tags that never trigger a blink. Matched against the
    /// full declared tag set of the buffer, ancestors included.
    #[serde(default)]
    pub excluded_modes: Vec<String>,

    /// Commands that never trigger a blink (predictable scrolling commands
    /// and similar).
    #[serde(default)]
    pub excluded_commands: Vec<String>,

    /// Maximum number of entries kept in the navigation ring.
    #[serde(default = "crate::defaults::ring_capacity")]
    pub ring_capacity: usize,

    /// When a recorded offset falls outside the buffer's accessible range,
    /// widen the buffer instead of failing the jump.
    #[serde(default = "crate::defaults::bool_true")]
    pub widen_on_jump: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            fade_duration_secs: crate::defaults::fade_duration_secs(),
            fade_delay_secs: crate::defaults::fade_delay_secs(),
            highlight_width: crate::defaults::highlight_width(),
            highlight_color: crate::defaults::highlight_color(),
            movement_line_threshold: crate::defaults::movement_line_threshold(),
            movement_column_threshold: None,
            excluded_modes: Vec::new(),
            excluded_commands: Vec::new(),
            ring_capacity: crate::defaults::ring_capacity(),
            widen_on_jump: crate::defaults::bool_true(),
        }
    }
}

impl Config {
    /// Create a config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the fade duration in seconds.
    pub fn with_fade_duration(mut self, secs: f32) -> Self {
        self.fade_duration_secs = secs;
        self
    }

    /// Set the pre-fade delay in seconds.
    pub fn with_fade_delay(mut self, secs: f32) -> Self {
        self.fade_delay_secs = secs;
        self
    }

    /// Set the highlight width in character cells.
    pub fn with_highlight_width(mut self, cells: usize) -> Self {
        self.highlight_width = cells;
        self
    }

    /// Set the highlight seed color.
    pub fn with_highlight_color(mut self, color: HighlightColor) -> Self {
        self.highlight_color = color;
        self
    }

    /// Set the movement thresholds (line delta, optional column delta).
    pub fn with_movement_threshold(mut self, lines: usize, columns: Option<usize>) -> Self {
        self.movement_line_threshold = lines;
        self.movement_column_threshold = columns;
        self
    }

    /// Set the navigation ring capacity.
    pub fn with_ring_capacity(mut self, capacity: usize) -> Self {
        self.ring_capacity = capacity;
        self
    }

    /// Set whether out-of-range jumps widen the buffer instead of failing.
    pub fn with_widen_on_jump(mut self, widen: bool) -> Self {
        self.widen_on_jump = widen;
        self
    }

    /// Interval between fade ticks: total duration spread over the ramp.
    pub fn fade_interval(&self) -> Duration {
        Duration::from_secs_f32(self.fade_duration_secs.max(0.0) / self.highlight_width.max(1) as f32)
    }

    /// Delay before the first fade tick.
    pub fn fade_delay(&self) -> Duration {
        Duration::from_secs_f32(self.fade_delay_secs.max(0.0))
    }

    /// Check field values for semantic errors.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.fade_duration_secs <= 0.0 {
            return Err(ConfigError::Validation(format!(
                "fade_duration_secs must be positive, got {}",
                self.fade_duration_secs
            )));
        }
        if self.fade_delay_secs < 0.0 {
            return Err(ConfigError::Validation(format!(
                "fade_delay_secs must not be negative, got {}",
                self.fade_delay_secs
            )));
        }
        if self.highlight_width == 0 {
            return Err(ConfigError::Validation(
                "highlight_width must be at least 1".to_string(),
            ));
        }
        if self.ring_capacity == 0 {
            return Err(ConfigError::Validation(
                "ring_capacity must be at least 1".to_string(),
            ));
        }
        if let HighlightColor::Brightness(fraction) = self.highlight_color
            && !(fraction > 0.0 && fraction <= 1.0)
        {
            return Err(ConfigError::Validation(format!(
                "highlight_color brightness must be in (0, 1], got {fraction}"
            )));
        }
        Ok(())
    }

    /// Default config file path: `~/.config/glint/config.yaml`.
    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("glint")
            .join("config.yaml")
    }

    /// Load configuration from the default path, or return defaults when no
    /// file exists yet.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path())
    }

    /// Load configuration from `path`, or return defaults when the file
    /// does not exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            log::info!("No config file at {:?}, using defaults", path);
            return Ok(Self::default());
        }
        log::info!("Loading config from {:?}", path);
        let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
        let config: Config = serde_yaml_ng::from_str(&contents).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to the default path.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path())
    }

    /// Save configuration to `path`, creating parent directories as needed.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(ConfigError::Io)?;
        }
        let yaml = serde_yaml_ng::to_string(self).map_err(ConfigError::Parse)?;
        fs::write(path, yaml).map_err(ConfigError::Io)?;
        log::debug!("Saved config to {:?}", path);
        Ok(())
    }
}
