//! Serpentine scan order
//!
//! Rows are visited from the second-to-last row up to the top. Even rows run
//! left to right, odd rows right to left. Alternating the direction keeps
//! diagonal movers from drifting toward one side of the grid. The bottom row is
//! never visited as a source.

/// Iterator over `(x, y)` cell coordinates in update order
#[derive(Debug, Clone)]
pub struct ScanOrder {
    width: i32,
    /// Row currently being emitted; negative once exhausted
    y: i32,
    /// Number of cells already emitted from the current row
    col: i32,
}

impl ScanOrder {
    /// Scan order for a `width x height` grid
    pub fn new(width: usize, height: usize) -> Self {
        let width = i32::try_from(width).unwrap_or(i32::MAX);
        let height = i32::try_from(height).unwrap_or(i32::MAX);
        Self {
            width,
            y: height - 2,
            col: 0,
        }
    }
}

impl Iterator for ScanOrder {
    type Item = (i32, i32);

    fn next(&mut self) -> Option<Self::Item> {
        if self.width <= 0 {
            return None;
        }
        if self.col == self.width {
            self.y -= 1;
            self.col = 0;
        }
        if self.y < 0 {
            return None;
        }

        let x = if self.y % 2 == 0 {
            self.col
        } else {
            self.width - 1 - self.col
        };
        self.col += 1;
        Some((x, self.y))
    }
}
