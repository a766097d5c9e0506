//! Core types shared by the grid, the solver and the simulation driver

pub mod material;

pub use material::Material;
