//! Paint brush state: selected material and radius

use crate::core_types::Material;
use crate::grid::{paint, Grid};
use serde::{Deserialize, Serialize};

/// Smallest brush radius in cells
pub const MIN_BRUSH_RADIUS: u32 = 1;
/// Largest brush radius in cells
pub const MAX_BRUSH_RADIUS: u32 = 20;
/// Radius a new brush starts with
pub const DEFAULT_BRUSH_RADIUS: u32 = 6;

/// Material and radius used for strokes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Brush {
    material: Material,
    radius: u32,
}

impl Default for Brush {
    fn default() -> Self {
        Self {
            material: Material::Granular,
            radius: DEFAULT_BRUSH_RADIUS,
        }
    }
}

impl Brush {
    /// Brush with the given material and a radius clamped to the allowed range
    pub fn new(material: Material, radius: u32) -> Self {
        Self {
            material,
            radius: radius.clamp(MIN_BRUSH_RADIUS, MAX_BRUSH_RADIUS),
        }
    }

    /// Selected material
    pub fn material(&self) -> Material {
        self.material
    }

    /// Current radius in cells
    pub fn radius(&self) -> u32 {
        self.radius
    }

    /// Select a material
    pub fn select(&mut self, material: Material) {
        self.material = material;
    }

    /// Select by palette hotkey (`1`-`5`). Returns false for unbound keys.
    pub fn select_hotkey(&mut self, key: u8) -> bool {
        match Material::from_hotkey(key) {
            Some(material) => {
                self.material = material;
                true
            }
            None => false,
        }
    }

    /// Widen by one cell, up to [`MAX_BRUSH_RADIUS`]
    pub fn grow(&mut self) {
        self.radius = (self.radius + 1).min(MAX_BRUSH_RADIUS);
    }

    /// Narrow by one cell, down to [`MIN_BRUSH_RADIUS`]
    pub fn shrink(&mut self) {
        self.radius = self.radius.saturating_sub(1).max(MIN_BRUSH_RADIUS);
    }

    /// Paint the selected material around `center`. Returns cells written.
    pub fn stroke(&self, grid: &mut Grid, center: (i32, i32)) -> usize {
        paint(grid, center, self.radius, self.material)
    }

    /// Clear cells around `center` back to `Empty`. Returns cells written.
    pub fn erase(&self, grid: &mut Grid, center: (i32, i32)) -> usize {
        paint(grid, center, self.radius, Material::Empty)
    }
}
