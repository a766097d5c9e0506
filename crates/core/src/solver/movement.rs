//! Falling rules for sand, oil and water

use super::StepReport;
use crate::core_types::Material;
use crate::grid::Grid;
use rand::Rng;

/// Pick a horizontal direction, -1 or +1 with equal probability
#[inline]
pub(crate) fn random_direction<R: Rng>(rng: &mut R) -> i32 {
    if rng.random::<bool>() {
        -1
    } else {
        1
    }
}

/// Sand and oil: fall straight down into air, else slide to a random free
/// diagonal, else stay.
pub(crate) fn update_powder<R: Rng>(
    grid: &mut Grid,
    x: i32,
    y: i32,
    rng: &mut R,
    report: &mut StepReport,
) {
    if grid.is_empty_at(x, y + 1) {
        grid.swap((x, y), (x, y + 1));
        report.moves += 1;
        return;
    }

    let dir = random_direction(rng);
    for nx in [x + dir, x - dir] {
        if grid.is_empty_at(nx, y + 1) {
            grid.swap((x, y), (nx, y + 1));
            report.moves += 1;
            return;
        }
    }
}

/// Water: sink into air or oil below, else diagonally, else spread sideways
/// into air.
pub(crate) fn update_liquid<R: Rng>(
    grid: &mut Grid,
    x: i32,
    y: i32,
    rng: &mut R,
    report: &mut StepReport,
) {
    let can_sink =
        |grid: &Grid, nx: i32, ny: i32| grid.get(nx, ny).is_some_and(Material::sinks_liquid_through);

    if can_sink(grid, x, y + 1) {
        grid.swap((x, y), (x, y + 1));
        report.moves += 1;
        return;
    }

    let dir = random_direction(rng);
    for nx in [x + dir, x - dir] {
        if can_sink(grid, nx, y + 1) {
            grid.swap((x, y), (nx, y + 1));
            report.moves += 1;
            return;
        }
    }

    if grid.is_empty_at(x + dir, y) {
        grid.swap((x, y), (x + dir, y));
        report.moves += 1;
    }
}
