//! Configuration errors.
//!
//! Stepping and painting are total over any valid grid, so the only failures in
//! this crate happen while building a grid or parsing its configuration.

/// Errors raised while constructing or configuring a sandbox
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A grid or screen dimension was zero
    InvalidDimension {
        /// Name of the offending parameter (e.g. `"width"`, `"screen_height"`)
        name: &'static str,
        /// The rejected value
        value: u32,
    },
    /// Cell size was zero
    InvalidCellSize(u32),
    /// Screen is smaller than a single cell in at least one direction
    GridTooSmall {
        /// Screen width in pixels
        width: u32,
        /// Screen height in pixels
        height: u32,
        /// Cell size in pixels
        cell_size: u32,
    },
    /// Material name not in the palette
    UnknownMaterial(String),
    /// Failed to parse configuration contents
    Parse(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::InvalidDimension { name, value } => {
                write!(f, "Parameter '{name}' must be positive, got {value}")
            }
            ConfigError::InvalidCellSize(size) => {
                write!(f, "Cell size must be positive, got {size}")
            }
            ConfigError::GridTooSmall {
                width,
                height,
                cell_size,
            } => write!(
                f,
                "Screen {width}x{height} is smaller than one {cell_size}px cell"
            ),
            ConfigError::UnknownMaterial(name) => write!(f, "Unknown material '{name}'"),
            ConfigError::Parse(msg) => write!(f, "Failed to parse config: {msg}"),
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_parameter() {
        let err = ConfigError::InvalidDimension {
            name: "width",
            value: 0,
        };
        assert_eq!(err.to_string(), "Parameter 'width' must be positive, got 0");

        let err = ConfigError::GridTooSmall {
            width: 3,
            height: 600,
            cell_size: 4,
        };
        assert_eq!(err.to_string(), "Screen 3x600 is smaller than one 4px cell");
    }
}
