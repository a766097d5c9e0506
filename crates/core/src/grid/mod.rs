//! Grid storage, census and painting

pub mod census;
pub mod paint;
pub mod sand_grid;

// Re-export main types
pub use census::Census;
pub use paint::paint;
pub use sand_grid::Grid;
