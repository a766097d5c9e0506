//! Sandbox simulation driver
//!
//! `SandSimulation` owns the grid, its random generator, the paint brush and the
//! pause state. A front-end calls [`SandSimulation::update`] once per frame and
//! forwards pointer strokes to [`SandSimulation::stroke`] / [`SandSimulation::erase`].

pub mod brush;

pub use brush::{Brush, DEFAULT_BRUSH_RADIUS, MAX_BRUSH_RADIUS, MIN_BRUSH_RADIUS};

use crate::config::SandboxConfig;
use crate::core_types::Material;
use crate::error::ConfigError;
use crate::grid::{paint, Census, Grid};
use crate::solver::{step_with_report, StepReport};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, info};

/// Falling-sand simulation with a seeded random generator
pub struct SandSimulation {
    grid: Grid,
    rng: StdRng,
    seed: u64,
    brush: Brush,
    paused: bool,
    /// Ticks advanced since creation or the last reset
    tick: u64,
    /// Report from the most recent tick
    last_report: StepReport,
}

impl SandSimulation {
    /// Create an all-`Empty` sandbox sized from `config`.
    ///
    /// # Errors
    /// Returns a [`ConfigError`] if the config describes an empty grid.
    pub fn new(config: &SandboxConfig) -> Result<Self, ConfigError> {
        let (width, height) = config.grid_dimensions()?;
        let grid = Grid::new(width, height)?;

        info!(
            "Sand simulation initialized: {}x{} grid, cell_size={}px, seed={}",
            width, height, config.cell_size, config.seed
        );

        Ok(Self::from_grid(grid, config.seed))
    }

    /// Wrap an existing grid
    pub fn from_grid(grid: Grid, seed: u64) -> Self {
        Self {
            grid,
            rng: StdRng::seed_from_u64(seed),
            seed,
            brush: Brush::default(),
            paused: false,
            tick: 0,
            last_report: StepReport::default(),
        }
    }

    /// Advance one tick unless paused. Returns true if the grid was stepped.
    pub fn update(&mut self) -> bool {
        if self.paused {
            return false;
        }
        self.step();
        true
    }

    /// Advance one tick regardless of the pause state
    pub fn step(&mut self) -> StepReport {
        let report = step_with_report(&mut self.grid, &mut self.rng);
        self.tick += 1;
        self.last_report = report;

        debug!(
            "Tick {}: moves={}, ignitions={}, extinguished={}, risen={}",
            self.tick, report.moves, report.ignitions, report.extinguished, report.risen
        );
        report
    }

    /// Call [`SandSimulation::update`] `ticks` times. Returns ticks actually advanced.
    pub fn run(&mut self, ticks: u64) -> u64 {
        let mut advanced = 0;
        for _ in 0..ticks {
            if self.update() {
                advanced += 1;
            }
        }
        advanced
    }

    /// Stamp a disk of `material`. Returns cells written.
    pub fn paint(&mut self, center: (i32, i32), radius: u32, material: Material) -> usize {
        paint(&mut self.grid, center, radius, material)
    }

    /// Paint with the current brush
    pub fn stroke(&mut self, center: (i32, i32)) -> usize {
        self.brush.stroke(&mut self.grid, center)
    }

    /// Erase with the current brush radius
    pub fn erase(&mut self, center: (i32, i32)) -> usize {
        self.brush.erase(&mut self.grid, center)
    }

    /// Stop [`SandSimulation::update`] from advancing
    pub fn pause(&mut self) {
        self.paused = true;
    }

    /// Let [`SandSimulation::update`] advance again
    pub fn resume(&mut self) {
        self.paused = false;
    }

    /// Flip the pause state and return the new one
    pub fn toggle_pause(&mut self) -> bool {
        self.paused = !self.paused;
        self.paused
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    pub fn brush(&self) -> &Brush {
        &self.brush
    }

    pub fn brush_mut(&mut self) -> &mut Brush {
        &mut self.brush
    }

    /// Ticks advanced since creation or the last reset
    pub fn tick(&self) -> u64 {
        self.tick
    }

    /// Report from the most recent tick
    pub fn last_report(&self) -> StepReport {
        self.last_report
    }

    /// Per-material cell counts
    pub fn census(&self) -> Census {
        Census::of(&self.grid)
    }

    /// Empty the grid and restart the generator from the configured seed
    pub fn reset(&mut self) {
        info!("Resetting sand simulation after {} ticks", self.tick);
        self.grid.clear();
        self.rng = StdRng::seed_from_u64(self.seed);
        self.tick = 0;
        self.last_report = StepReport::default();
    }
}
