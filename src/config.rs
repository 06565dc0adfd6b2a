//! Icon configuration
//!
//! All three knobs are optional everywhere they can be supplied: struct
//! construction falls back to `Default`, and TOML documents may omit any
//! subset of fields.

use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

/// Errors that can occur when loading a configuration file
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config TOML: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Configuration options for the rendered icon
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct IconConfig {
    /// Rendered width and height in pixels (the icon is square)
    pub size: f64,

    /// Stroke color (named color, hex, or any value the rendering surface accepts)
    pub color: String,

    /// Outline thickness
    pub stroke_width: f64,
}

impl Default for IconConfig {
    fn default() -> Self {
        Self {
            size: 36.0,
            color: "white".to_string(),
            stroke_width: 1.5,
        }
    }
}

impl IconConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the rendered size (width and height)
    pub fn with_size(mut self, size: f64) -> Self {
        self.size = size;
        self
    }

    /// Set the stroke color
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }

    /// Set the stroke thickness
    pub fn with_stroke_width(mut self, stroke_width: f64) -> Self {
        self.stroke_width = stroke_width;
        self
    }

    /// Load configuration from a TOML file
    ///
    /// Missing fields resolve to their defaults.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Load configuration from a TOML string
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }
}
