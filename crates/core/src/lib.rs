//! Falling Sand Simulation Core Library
//!
//! A deterministic cellular automaton over a fixed 2D grid of materials: sand that
//! piles up, water that levels out and sinks beneath oil, stone that never moves,
//! and fire that burns down its fuel, spreads to sand and oil, and drifts upward.
//!
//! ## Structure
//!
//! - [`core_types`]: the closed [`Material`] palette
//! - [`grid`]: the [`Grid`] itself, disk painting ([`paint()`]) and the material [`Census`]
//! - [`solver`]: the per-tick update ([`step`]) and its serpentine scan order
//! - [`simulation`]: [`SandSimulation`], owning grid, seeded RNG, brush and pause state
//! - [`config`]: [`SandboxConfig`], deriving grid size from screen and cell size
//!
//! ## Example
//!
//! ```rust
//! use sand_sim_core::{step, Grid, Material};
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//!
//! let mut grid = Grid::new(3, 3).unwrap();
//! grid.set(1, 0, Material::Granular);
//! let mut rng = StdRng::seed_from_u64(0);
//!
//! step(&mut grid, &mut rng);
//! assert_eq!(grid.get(1, 1), Some(Material::Granular));
//! ```

pub mod config;
pub mod core_types;
pub mod error;
pub mod grid;
pub mod simulation;
pub mod solver;

// Re-export core types
pub use config::SandboxConfig;
pub use core_types::Material;
pub use error::ConfigError;
pub use grid::{paint, Census, Grid};
pub use simulation::{Brush, SandSimulation};
pub use solver::{step, step_with_report, ScanOrder, StepReport, PAINT_FUEL};
