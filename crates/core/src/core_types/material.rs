//! Material palette for the sand grid.
//!
//! The palette is closed: every cell holds exactly one of these tags, and each tag
//! has its own update rule in [`crate::solver`].

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Cell material tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum Material {
    /// Air. Never updated.
    #[default]
    Empty = 0,
    /// Sand - falls, slides diagonally, burns.
    Granular = 1,
    /// Water - falls, sinks through oil, spreads sideways.
    Liquid = 2,
    /// Stone - never moves.
    Solid = 3,
    /// Oil - falls like sand, floats on water, burns.
    Viscous = 4,
    /// Fire - burns down its fuel, ignites neighbours, rises.
    Combustion = 5,
}

impl Material {
    /// Every material in index order.
    pub const ALL: [Material; 6] = [
        Material::Empty,
        Material::Granular,
        Material::Liquid,
        Material::Solid,
        Material::Viscous,
        Material::Combustion,
    ];

    /// Number of materials in the palette.
    pub const COUNT: usize = Self::ALL.len();

    /// Dense index in `0..COUNT`, matching [`Material::ALL`].
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Palette slot bound to the number keys `1`-`5`.
    ///
    /// `Empty` has no hotkey; erasing is a separate brush action.
    pub const fn from_hotkey(key: u8) -> Option<Self> {
        match key {
            1 => Some(Material::Granular),
            2 => Some(Material::Liquid),
            3 => Some(Material::Solid),
            4 => Some(Material::Viscous),
            5 => Some(Material::Combustion),
            _ => None,
        }
    }

    /// Materials that fire can spread into.
    #[inline]
    pub const fn is_flammable(self) -> bool {
        matches!(self, Material::Granular | Material::Viscous)
    }

    /// Cells a falling liquid may swap into. Liquid is denser than oil.
    #[inline]
    pub const fn sinks_liquid_through(self) -> bool {
        matches!(self, Material::Empty | Material::Viscous)
    }

    /// Lower-case display name.
    pub const fn name(self) -> &'static str {
        match self {
            Material::Empty => "empty",
            Material::Granular => "granular",
            Material::Liquid => "liquid",
            Material::Solid => "solid",
            Material::Viscous => "viscous",
            Material::Combustion => "combustion",
        }
    }
}

impl fmt::Display for Material {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl FromStr for Material {
    type Err = ConfigError;

    /// Accepts both the generic names and the everyday ones (`sand`, `water`, ...).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "empty" | "air" => Ok(Material::Empty),
            "granular" | "sand" => Ok(Material::Granular),
            "liquid" | "water" => Ok(Material::Liquid),
            "solid" | "stone" => Ok(Material::Solid),
            "viscous" | "oil" => Ok(Material::Viscous),
            "combustion" | "fire" => Ok(Material::Combustion),
            _ => Err(ConfigError::UnknownMaterial(s.to_string())),
        }
    }
}
