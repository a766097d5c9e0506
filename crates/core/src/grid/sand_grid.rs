//! Dense 2D material grid with a per-cell fuel counter
//!
//! Cells are stored row-major: `[y * width + x]`, with `y` growing downward.
//! All coordinate-taking accessors use signed coordinates and bounds-check them,
//! so neighbour probes at the edges simply come back as `None`.

use crate::core_types::Material;
use crate::error::ConfigError;

/// Fixed-size grid of material cells
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    /// Material tag per cell
    cells: Vec<Material>,
    /// Remaining fuel per cell; only meaningful where the cell is `Combustion`
    fuel: Vec<i32>,
}

impl Grid {
    /// Create an all-`Empty` grid.
    ///
    /// # Errors
    /// Returns [`ConfigError::InvalidDimension`] if either dimension is zero.
    pub fn new(width: u32, height: u32) -> Result<Self, ConfigError> {
        if width == 0 {
            return Err(ConfigError::InvalidDimension {
                name: "width",
                value: width,
            });
        }
        if height == 0 {
            return Err(ConfigError::InvalidDimension {
                name: "height",
                value: height,
            });
        }

        let width = width as usize;
        let height = height as usize;
        let total_cells = width * height;

        Ok(Self {
            width,
            height,
            cells: vec![Material::Empty; total_cells],
            fuel: vec![0; total_cells],
        })
    }

    /// Grid width in cells
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Grid height in cells
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Total number of cells
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always false; a grid has at least one cell.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Check if coordinates are within grid bounds
    #[inline]
    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.width && (y as usize) < self.height
    }

    #[inline]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if self.in_bounds(x, y) {
            Some(y as usize * self.width + x as usize)
        } else {
            None
        }
    }

    /// Material at `(x, y)`, or `None` outside the grid
    #[inline]
    pub fn get(&self, x: i32, y: i32) -> Option<Material> {
        self.index(x, y).map(|idx| self.cells[idx])
    }

    /// True when `(x, y)` is inside the grid and holds `Empty`
    #[inline]
    pub fn is_empty_at(&self, x: i32, y: i32) -> bool {
        self.get(x, y) == Some(Material::Empty)
    }

    /// Set the material at `(x, y)`. Writes outside the grid are ignored.
    #[inline]
    pub fn set(&mut self, x: i32, y: i32, material: Material) {
        if let Some(idx) = self.index(x, y) {
            self.cells[idx] = material;
        }
    }

    /// Fuel counter at `(x, y)`, or `None` outside the grid
    #[inline]
    pub fn fuel(&self, x: i32, y: i32) -> Option<i32> {
        self.index(x, y).map(|idx| self.fuel[idx])
    }

    /// Set the fuel counter at `(x, y)`. Writes outside the grid are ignored.
    #[inline]
    pub fn set_fuel(&mut self, x: i32, y: i32, fuel: i32) {
        if let Some(idx) = self.index(x, y) {
            self.fuel[idx] = fuel;
        }
    }

    /// Set a cell to `Combustion` with the given fuel.
    #[inline]
    pub fn ignite(&mut self, x: i32, y: i32, fuel: i32) {
        if let Some(idx) = self.index(x, y) {
            self.cells[idx] = Material::Combustion;
            self.fuel[idx] = fuel;
        }
    }

    /// Swap the materials of two cells. Fuel counters stay where they are.
    ///
    /// Does nothing if either cell is outside the grid.
    #[inline]
    pub fn swap(&mut self, a: (i32, i32), b: (i32, i32)) {
        if let (Some(ia), Some(ib)) = (self.index(a.0, a.1), self.index(b.0, b.1)) {
            self.cells.swap(ia, ib);
        }
    }

    /// All cells in row-major order
    #[inline]
    pub fn cells(&self) -> &[Material] {
        &self.cells
    }

    /// One row of cells, or `None` if `y` is outside the grid
    pub fn row(&self, y: usize) -> Option<&[Material]> {
        if y < self.height {
            let start = y * self.width;
            Some(&self.cells[start..start + self.width])
        } else {
            None
        }
    }

    /// Reset every cell to `Empty` and every fuel counter to zero
    pub fn clear(&mut self) {
        self.cells.fill(Material::Empty);
        self.fuel.fill(0);
    }
}
