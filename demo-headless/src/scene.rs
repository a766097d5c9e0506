//! Starting layouts for the headless demo

use clap::ValueEnum;
use sand_sim_core::{Material, SandSimulation};

/// Preset arrangement painted before the first tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Scene {
    /// Nothing; only `--paint` strokes
    Empty,
    /// Sand pouring through a stone funnel
    Hourglass,
    /// Water and oil dropped into a stone basin
    Basin,
    /// A pool of oil on stone, lit from above
    OilFire,
}

impl Scene {
    /// Paint this scene onto the simulation's grid
    pub fn build(self, sim: &mut SandSimulation) {
        let w = sim.grid().width() as i32;
        let h = sim.grid().height() as i32;

        match self {
            Scene::Empty => {}
            Scene::Hourglass => {
                // Two stone ramps leaving a one-cell gap in the middle
                let mid = w / 2;
                let ramp_y = h / 2;
                for i in 0..mid {
                    sim.paint((mid - 1 - i, ramp_y - i / 2), 0, Material::Solid);
                    sim.paint((mid + 1 + i, ramp_y - i / 2), 0, Material::Solid);
                }
                sim.paint((mid / 2, ramp_y / 3), (w / 10).max(1) as u32, Material::Granular);
                sim.paint(
                    (mid + mid / 2, ramp_y / 3),
                    (w / 10).max(1) as u32,
                    Material::Granular,
                );
            }
            Scene::Basin => {
                paint_basin(sim, w, h);
                let r = (w / 12).max(1) as u32;
                sim.paint((w / 3, h / 4), r, Material::Viscous);
                sim.paint((2 * w / 3, h / 4), r, Material::Liquid);
            }
            Scene::OilFire => {
                paint_basin(sim, w, h);
                for y in h - 1 - (h / 6).max(1)..h - 1 {
                    for x in 1..w - 1 {
                        sim.paint((x, y), 0, Material::Viscous);
                    }
                }
                sim.paint((w / 2, h - 2 - (h / 6).max(1)), 1, Material::Combustion);
            }
        }
    }
}

/// Stone floor along the bottom row plus a wall on each side
fn paint_basin(sim: &mut SandSimulation, w: i32, h: i32) {
    for x in 0..w {
        sim.paint((x, h - 1), 0, Material::Solid);
    }
    for y in h / 2..h {
        sim.paint((0, y), 0, Material::Solid);
        sim.paint((w - 1, y), 0, Material::Solid);
    }
}
