//! Disk-shaped material stamps
//!
//! Painting is the only way besides stepping to change the grid. Stone, in
//! particular, can only appear or disappear through here.

use crate::core_types::Material;
use crate::grid::Grid;
use crate::solver::PAINT_FUEL;
use tracing::trace;

/// Stamp a filled disk of `material` centred on `center`.
///
/// Covers every cell with `dx² + dy² <= radius²`, clipped to the grid; the
/// center itself may lie outside the grid. Painting `Combustion` also seeds the
/// fuel counter with [`PAINT_FUEL`]. Painting `Empty` erases.
///
/// Returns the number of cells written.
pub fn paint(grid: &mut Grid, center: (i32, i32), radius: u32, material: Material) -> usize {
    let (cx, cy) = center;
    let (cx64, cy64) = (i64::from(cx), i64::from(cy));
    let r = i64::from(radius);
    let r_sq = i128::from(r) * i128::from(r);
    let mut written = 0;

    // Only the part of the bounding square that overlaps the grid is visited
    let max_x = i64::try_from(grid.width()).unwrap_or(i64::MAX) - 1;
    let max_y = i64::try_from(grid.height()).unwrap_or(i64::MAX) - 1;
    let (x0, x1) = ((cx64 - r).max(0), (cx64 + r).min(max_x));
    let (y0, y1) = ((cy64 - r).max(0), (cy64 + r).min(max_y));

    for nx in x0..=x1 {
        let dx = i128::from(nx - cx64);
        for ny in y0..=y1 {
            let dy = i128::from(ny - cy64);
            if dx * dx + dy * dy > r_sq {
                continue;
            }
            let (Ok(nx), Ok(ny)) = (i32::try_from(nx), i32::try_from(ny)) else {
                continue;
            };

            grid.set(nx, ny, material);
            if material == Material::Combustion {
                grid.set_fuel(nx, ny, PAINT_FUEL);
            }
            written += 1;
        }
    }

    trace!(
        "Painted {} cells of {} at ({}, {}) r={}",
        written,
        material,
        cx,
        cy,
        radius
    );
    written
}
