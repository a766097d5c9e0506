//! Per-material cell counts

use crate::core_types::Material;
use crate::grid::Grid;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

/// Number of cells holding each material
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Census {
    counts: [usize; Material::COUNT],
}

impl Census {
    /// Count every material on the grid, one rayon task per row
    pub fn of(grid: &Grid) -> Self {
        let counts = grid
            .cells()
            .par_chunks(grid.width())
            .map(|row| {
                let mut counts = [0usize; Material::COUNT];
                for material in row {
                    counts[material.index()] += 1;
                }
                counts
            })
            .reduce(
                || [0usize; Material::COUNT],
                |mut a, b| {
                    for (total, n) in a.iter_mut().zip(b) {
                        *total += n;
                    }
                    a
                },
            );

        Self { counts }
    }

    /// Number of cells holding `material`
    #[inline]
    pub fn count(&self, material: Material) -> usize {
        self.counts[material.index()]
    }

    /// Total number of cells counted
    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }

    /// Number of non-`Empty` cells
    pub fn occupied(&self) -> usize {
        self.total() - self.count(Material::Empty)
    }

    /// Share of the grid that is not `Empty` (0-1)
    pub fn fill_fraction(&self) -> f32 {
        let total = self.total();
        if total == 0 {
            0.0
        } else {
            self.occupied() as f32 / total as f32
        }
    }

    /// `(material, count)` pairs in palette order
    pub fn iter(&self) -> impl Iterator<Item = (Material, usize)> + '_ {
        Material::ALL.iter().map(|&m| (m, self.count(m)))
    }
}
