//! Direct-memory driver
//!
//! Renders into an in-process cell array, the way hardware with
//! memory-mapped video would be driven. There is no real terminal behind
//! it, which also makes it the reference backend for end-to-end tests:
//! after a refresh its cells are exactly what a terminal would show.

use charcell_screen::{Attribute, Cell, DriverError, TerminalDriver};

/// A [`TerminalDriver`] backed by an owned cell array.
pub struct MemoryDriver {
    rows: u16,
    columns: u16,
    color: bool,
    cells: Vec<Cell>,
    /// 1-based (row, column). The column may sit one past the row end
    /// after a write to the last column.
    cursor: (u16, u16),
    attribute: Attribute,
}

impl MemoryDriver {
    pub fn new(rows: u16, columns: u16) -> Self {
        MemoryDriver {
            rows,
            columns,
            color: true,
            cells: vec![Cell::default(); rows as usize * columns as usize],
            cursor: (1, 1),
            attribute: Attribute::DEFAULT,
        }
    }

    /// A driver that reports no color support.
    pub fn monochrome(rows: u16, columns: u16) -> Self {
        MemoryDriver {
            color: false,
            ..MemoryDriver::new(rows, columns)
        }
    }

    /// The rendered display, row-major.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// The rendered cell at a 1-based (row, column).
    pub fn cell(&self, row: u16, column: u16) -> Cell {
        let row = row.clamp(1, self.rows) as usize;
        let column = column.clamp(1, self.columns) as usize;
        self.cells[(row - 1) * self.columns as usize + (column - 1)]
    }
}

impl TerminalDriver for MemoryDriver {
    fn open(&mut self) -> Result<(), DriverError> {
        Ok(())
    }

    fn close(&mut self) -> Result<(), DriverError> {
        Ok(())
    }

    fn geometry(&mut self) -> Result<(u16, u16), DriverError> {
        Ok((self.rows, self.columns))
    }

    fn supports_color(&self) -> bool {
        self.color
    }

    fn move_cursor(&mut self, row: u16, column: u16) -> Result<(), DriverError> {
        self.cursor = (row, column);
        Ok(())
    }

    fn set_attribute(&mut self, attribute: Attribute) -> Result<(), DriverError> {
        self.attribute = attribute;
        Ok(())
    }

    fn write_glyph(&mut self, glyph: u8) -> Result<(), DriverError> {
        let (row, column) = self.cursor;
        // Writes that have run off the end of a row are dropped.
        if (1..=self.rows).contains(&row) && (1..=self.columns).contains(&column) {
            let index = (row as usize - 1) * self.columns as usize + (column as usize - 1);
            self.cells[index] = Cell::new(glyph, self.attribute);
        }
        self.cursor.1 = column.saturating_add(1);
        Ok(())
    }

    fn clear_screen(&mut self) -> Result<(), DriverError> {
        self.cells.fill(Cell::default());
        self.cursor = (1, 1);
        Ok(())
    }

    fn flush(&mut self) -> Result<(), DriverError> {
        Ok(())
    }
}
