//! Rectangular screen regions
//!
//! Regions address the screen with 1-based (row, column) coordinates.
//! Every primitive that accepts a region normalizes it with
//! [`Region::clamped`] first; out-of-range input is never an error.

/// A rectangular sub-area of the screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region {
    /// Row of the upper-left corner, 1-based.
    pub row: u16,
    /// Column of the upper-left corner, 1-based.
    pub column: u16,
    pub width: u16,
    pub height: u16,
}

impl Region {
    pub const fn new(row: u16, column: u16, width: u16, height: u16) -> Self {
        Region {
            row,
            column,
            width,
            height,
        }
    }

    /// A region covering the whole of a `rows` x `columns` screen.
    pub const fn full(rows: u16, columns: u16) -> Self {
        Region::new(1, 1, columns, rows)
    }

    /// Force the region to be contained on a `rows` x `columns` screen.
    ///
    /// The corner is clamped into `[1, rows]` x `[1, columns]`, the width
    /// and height are forced to at least one cell and then shrunk so the
    /// region never crosses the right or bottom edge. The result is always
    /// a valid sub-rectangle, possibly smaller than requested.
    #[must_use]
    pub fn clamped(self, rows: u16, columns: u16) -> Self {
        let row = self.row.clamp(1, rows);
        let column = self.column.clamp(1, columns);
        let mut width = self.width.max(1);
        let mut height = self.height.max(1);

        if height > rows - row + 1 {
            height = rows - row + 1;
        }
        if width > columns - column + 1 {
            width = columns - column + 1;
        }

        Region {
            row,
            column,
            width,
            height,
        }
    }

    /// Number of cells covered by the region.
    pub const fn area(self) -> usize {
        self.width as usize * self.height as usize
    }
}
