//! Fire: fuel burn-down, spread to flammable neighbours, and rising
//!
//! The chances below are gameplay tuning constants.

use super::StepReport;
use crate::core_types::Material;
use crate::grid::Grid;
use rand::Rng;

/// Fuel seeded into every cell painted as fire
pub const PAINT_FUEL: i32 = 40;

/// Minimum fuel of a freshly ignited neighbour
pub const IGNITION_FUEL_BASE: i32 = 20;

/// Extra fuel of a freshly ignited neighbour, drawn uniformly from `0..=IGNITION_FUEL_SPREAD`
pub const IGNITION_FUEL_SPREAD: i32 = 20;

/// Sides of the ignition die rolled per flammable neighbour
pub const IGNITION_ROLL_SIDES: i32 = 11;

/// A neighbour ignites when `uniform(0..IGNITION_ROLL_SIDES)` is below this (4 in 11)
pub const IGNITION_ROLL_THRESHOLD: i32 = 4;

/// Sides of the rise die; fire moves up on a 0 (1 in 3)
pub const RISE_ROLL_SIDES: i32 = 3;

/// Fuel lost when a flame moves up one cell
pub const RISE_FUEL_COST: i32 = 5;

/// Burn one tick of fuel at `(x, y)`, then spread and maybe rise.
pub(crate) fn update_fire<R: Rng>(
    grid: &mut Grid,
    x: i32,
    y: i32,
    rng: &mut R,
    report: &mut StepReport,
) {
    let fuel = grid.fuel(x, y).unwrap_or(0) - 1;
    grid.set_fuel(x, y, fuel);
    if fuel <= 0 {
        grid.set(x, y, Material::Empty);
        report.extinguished += 1;
        return;
    }

    for dx in -1..=1 {
        for dy in -1..=1 {
            if dx == 0 && dy == 0 {
                continue;
            }
            let (nx, ny) = (x + dx, y + dy);
            let flammable = grid.get(nx, ny).is_some_and(Material::is_flammable);
            if flammable && rng.random_range(0..IGNITION_ROLL_SIDES) < IGNITION_ROLL_THRESHOLD {
                let new_fuel = IGNITION_FUEL_BASE + rng.random_range(0..=IGNITION_FUEL_SPREAD);
                grid.ignite(nx, ny, new_fuel);
                report.ignitions += 1;
            }
        }
    }

    if y > 0 && grid.is_empty_at(x, y - 1) && rng.random_range(0..RISE_ROLL_SIDES) == 0 {
        grid.ignite(x, y - 1, fuel - RISE_FUEL_COST);
        grid.set(x, y, Material::Empty);
        report.risen += 1;
    }
}
