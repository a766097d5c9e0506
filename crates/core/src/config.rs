//! Sandbox configuration
//!
//! The grid size is derived from a screen resolution and a cell size, the same
//! way a windowed front-end would lay the grid over its canvas.

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};

/// Screen and grid settings for a sandbox
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SandboxConfig {
    /// Canvas width in pixels
    pub screen_width: u32,
    /// Canvas height in pixels
    pub screen_height: u32,
    /// Side of one square cell in pixels
    pub cell_size: u32,
    /// Seed for the simulation's random generator
    pub seed: u64,
}

impl Default for SandboxConfig {
    fn default() -> Self {
        Self {
            screen_width: 1200,
            screen_height: 600,
            cell_size: 4,
            seed: 0,
        }
    }
}

impl SandboxConfig {
    /// Parse a JSON config. Missing fields fall back to the defaults.
    ///
    /// # Errors
    /// Returns [`ConfigError::Parse`] if the text is not a valid config.
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(text).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Check that the config describes a non-empty grid.
    ///
    /// # Errors
    /// Returns the first problem found: a zero screen dimension, a zero cell
    /// size, or a screen smaller than one cell.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.screen_width == 0 {
            return Err(ConfigError::InvalidDimension {
                name: "screen_width",
                value: self.screen_width,
            });
        }
        if self.screen_height == 0 {
            return Err(ConfigError::InvalidDimension {
                name: "screen_height",
                value: self.screen_height,
            });
        }
        if self.cell_size == 0 {
            return Err(ConfigError::InvalidCellSize(self.cell_size));
        }
        if self.screen_width < self.cell_size || self.screen_height < self.cell_size {
            return Err(ConfigError::GridTooSmall {
                width: self.screen_width,
                height: self.screen_height,
                cell_size: self.cell_size,
            });
        }
        Ok(())
    }

    /// Grid dimensions in cells as `(width, height)`.
    ///
    /// # Errors
    /// Same as [`SandboxConfig::validate`].
    pub fn grid_dimensions(&self) -> Result<(u32, u32), ConfigError> {
        self.validate()?;
        Ok((
            self.screen_width / self.cell_size,
            self.screen_height / self.cell_size,
        ))
    }
}
