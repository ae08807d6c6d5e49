//! The screen buffer
//!
//! A rows x columns grid of cells in row-major order, addressed with
//! 1-based coordinates at the API. The same type backs both the virtual
//! buffer (desired display state) and the physical image (what was last
//! sent to the terminal). Every region primitive silently clamps its
//! region to the grid before touching any cell.

use crate::attr::Attribute;
use crate::cell::Cell;
use crate::region::Region;

/// Scroll direction for [`ScreenBuffer::scroll`]. `Up` means the content
/// of the region moves up on the screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

/// A rows x columns grid of cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScreenBuffer {
    rows: u16,
    columns: u16,
    cells: Vec<Cell>,
}

impl ScreenBuffer {
    /// Allocate a buffer filled with blank default-attribute cells.
    pub fn new(rows: u16, columns: u16) -> Self {
        ScreenBuffer {
            rows,
            columns,
            cells: vec![Cell::default(); rows as usize * columns as usize],
        }
    }

    pub fn rows(&self) -> u16 {
        self.rows
    }

    pub fn columns(&self) -> u16 {
        self.columns
    }

    /// The cell at a 1-based (row, column) position. Coordinates are
    /// clamped onto the grid.
    pub fn cell(&self, row: u16, column: u16) -> Cell {
        let row = row.clamp(1, self.rows);
        let column = column.clamp(1, self.columns);
        self.cells[self.index(row, column)]
    }

    pub(crate) fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub(crate) fn cells_mut(&mut self) -> &mut [Cell] {
        &mut self.cells
    }

    /// Reset every cell to a blank in the given attribute.
    pub fn fill_blank(&mut self, attribute: Attribute) {
        self.cells.fill(Cell::blank(attribute));
    }

    fn index(&self, row: u16, column: u16) -> usize {
        (row as usize - 1) * self.columns as usize + (column as usize - 1)
    }

    fn clamp(&self, region: Region) -> Region {
        region.clamped(self.rows, self.columns)
    }

    /// Write spaces in the given attribute over the whole region.
    pub fn clear(&mut self, region: Region, attribute: Attribute) {
        let region = self.clamp(region);
        for row in region.row..region.row + region.height {
            let start = self.index(row, region.column);
            self.cells[start..start + region.width as usize].fill(Cell::blank(attribute));
        }
    }

    /// Change the attribute of every cell in the region, leaving the text.
    pub fn set_color(&mut self, region: Region, attribute: Attribute) {
        let region = self.clamp(region);
        for row in region.row..region.row + region.height {
            let start = self.index(row, region.column);
            for cell in &mut self.cells[start..start + region.width as usize] {
                cell.attribute = attribute;
            }
        }
    }

    /// Copy cells into the region, row-major. At most `width * height`
    /// cells are consumed; a shorter source fills what it covers.
    pub fn write(&mut self, region: Region, source: &[Cell]) {
        let region = self.clamp(region);
        let mut source = source.iter();
        'rows: for row in region.row..region.row + region.height {
            let start = self.index(row, region.column);
            for cell in &mut self.cells[start..start + region.width as usize] {
                match source.next() {
                    Some(new) => *cell = *new,
                    None => break 'rows,
                }
            }
        }
    }

    /// Read the region's cells into a row-major vector of `width * height`
    /// elements.
    pub fn read(&self, region: Region) -> Vec<Cell> {
        let region = self.clamp(region);
        let mut out = Vec::with_capacity(region.area());
        for row in region.row..region.row + region.height {
            let start = self.index(row, region.column);
            out.extend_from_slice(&self.cells[start..start + region.width as usize]);
        }
        out
    }

    /// Like [`write`](Self::write) but copies glyphs only, leaving each
    /// cell's attribute in place.
    pub fn write_text(&mut self, region: Region, source: &[u8]) {
        let region = self.clamp(region);
        let mut source = source.iter();
        'rows: for row in region.row..region.row + region.height {
            let start = self.index(row, region.column);
            for cell in &mut self.cells[start..start + region.width as usize] {
                match source.next() {
                    Some(&glyph) => cell.glyph = glyph,
                    None => break 'rows,
                }
            }
        }
    }

    /// The glyphs of the region, row-major, `width * height` bytes.
    pub fn read_text(&self, region: Region) -> Vec<u8> {
        let region = self.clamp(region);
        let mut out = Vec::with_capacity(region.area());
        for row in region.row..region.row + region.height {
            let start = self.index(row, region.column);
            out.extend(
                self.cells[start..start + region.width as usize]
                    .iter()
                    .map(|cell| cell.glyph),
            );
        }
        out
    }

    /// Render at most `max_count` bytes of `text` starting at (row,
    /// column), clamped to the remaining width of the row, overwriting
    /// both glyph and attribute.
    pub fn print(&mut self, row: u16, column: u16, max_count: u16, attribute: Attribute, text: &str) {
        let region = self.clamp(Region::new(row, column, max_count, 1));
        let start = self.index(region.row, region.column);
        let cells = &mut self.cells[start..start + region.width as usize];
        for (cell, glyph) in cells.iter_mut().zip(text.bytes()) {
            *cell = Cell::new(glyph, attribute);
        }
    }

    /// Like [`print`](Self::print) but leaves each cell's attribute
    /// untouched.
    pub fn print_text(&mut self, row: u16, column: u16, max_count: u16, text: &str) {
        let region = self.clamp(Region::new(row, column, max_count, 1));
        let start = self.index(region.row, region.column);
        let cells = &mut self.cells[start..start + region.width as usize];
        for (cell, glyph) in cells.iter_mut().zip(text.bytes()) {
            cell.glyph = glyph;
        }
    }

    /// Scroll the region's rows by `count` toward `direction`.
    ///
    /// The vacated rows at the trailing edge are cleared with `attribute`.
    /// A count of zero does nothing; a count of `height` or more clears
    /// the whole region.
    pub fn scroll(&mut self, direction: Direction, region: Region, count: u16, attribute: Attribute) {
        if count == 0 {
            return;
        }
        let region = self.clamp(region);
        if count >= region.height {
            self.clear(region, attribute);
            return;
        }

        let width = region.width as usize;
        let kept = region.height - count;
        match direction {
            Direction::Up => {
                for offset in 0..kept {
                    let dst = self.index(region.row + offset, region.column);
                    let src = self.index(region.row + offset + count, region.column);
                    self.cells.copy_within(src..src + width, dst);
                }
                self.clear(
                    Region::new(region.row + kept, region.column, region.width, count),
                    attribute,
                );
            }
            Direction::Down => {
                for offset in (0..kept).rev() {
                    let dst = self.index(region.row + offset + count, region.column);
                    let src = self.index(region.row + offset, region.column);
                    self.cells.copy_within(src..src + width, dst);
                }
                self.clear(
                    Region::new(region.row, region.column, region.width, count),
                    attribute,
                );
            }
        }
    }
}
