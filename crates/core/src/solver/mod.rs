//! Grid automaton stepping
//!
//! One call to [`step`] advances the whole grid by one tick. Cells are visited in
//! [`ScanOrder`] and each visit applies the rule for whatever material the cell
//! holds at that moment:
//!
//! | Material | Rule |
//! |---|---|
//! | `Empty`, `Solid` | nothing |
//! | `Granular`, `Viscous` | fall into air, else slide to a random free diagonal |
//! | `Liquid` | sink into air or oil (also diagonally), else spread sideways into air |
//! | `Combustion` | burn fuel, ignite flammable neighbours, maybe rise |
//!
//! A cell that moves into a row not yet visited this tick can be visited again.
//! Rising flames and water spreading in the scan direction both do this.
//!
//! All randomness comes from the caller's generator, so a fixed seed gives a
//! fixed trajectory.

mod combustion;
mod movement;
mod scan;

// Re-exports
pub use combustion::{
    IGNITION_FUEL_BASE, IGNITION_FUEL_SPREAD, IGNITION_ROLL_SIDES, IGNITION_ROLL_THRESHOLD,
    PAINT_FUEL, RISE_FUEL_COST, RISE_ROLL_SIDES,
};
pub use scan::ScanOrder;

use crate::core_types::Material;
use crate::grid::Grid;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// What happened during one tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepReport {
    /// Cells visited (every cell above the bottom row)
    pub visited: usize,
    /// Successful moves or swaps of sand, oil and water
    pub moves: usize,
    /// Neighbours set alight
    pub ignitions: usize,
    /// Flames that ran out of fuel
    pub extinguished: usize,
    /// Flames that moved up a cell
    pub risen: usize,
}

/// Advance the grid by one tick.
pub fn step<R: Rng>(grid: &mut Grid, rng: &mut R) {
    step_with_report(grid, rng);
}

/// Advance the grid by one tick and report what changed.
pub fn step_with_report<R: Rng>(grid: &mut Grid, rng: &mut R) -> StepReport {
    let mut report = StepReport::default();

    for (x, y) in ScanOrder::new(grid.width(), grid.height()) {
        report.visited += 1;
        let Some(material) = grid.get(x, y) else {
            continue;
        };

        match material {
            Material::Empty | Material::Solid => {}
            Material::Granular | Material::Viscous => {
                movement::update_powder(grid, x, y, rng, &mut report);
            }
            Material::Liquid => movement::update_liquid(grid, x, y, rng, &mut report),
            Material::Combustion => combustion::update_fire(grid, x, y, rng, &mut report),
        }
    }

    report
}
