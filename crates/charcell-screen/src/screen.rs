//! The screen engine
//!
//! Owns the virtual buffer, the physical image, both cursors, and the
//! nested initialize/terminate lifecycle. Drawing calls mutate only the
//! virtual buffer; nothing reaches the terminal until [`Screen::refresh`]
//! or [`Screen::redraw`] runs the update algorithm against the driver.
//!
//! The engine is single-threaded and synchronous. Callers that share a
//! screen across threads must serialize access themselves.

use tracing::{debug, trace};

use crate::attr::Attribute;
use crate::buffer::{Direction, ScreenBuffer};
use crate::cell::Cell;
use crate::driver::TerminalDriver;
use crate::region::Region;
use crate::ScreenError;

/// Everything that exists only while the lifecycle counter is above zero.
struct ScreenState {
    rows: u16,
    columns: u16,
    /// Desired display contents, mutated by the region primitives.
    virtual_buffer: ScreenBuffer,
    /// What was last actually sent to the terminal.
    physical_image: ScreenBuffer,
    /// Where the caller wants the cursor, 1-based (row, column).
    virtual_cursor: (u16, u16),
    /// Where the engine believes the real cursor currently sits.
    physical_cursor: (u16, u16),
}

impl ScreenState {
    fn new(rows: u16, columns: u16) -> Self {
        ScreenState {
            rows,
            columns,
            virtual_buffer: ScreenBuffer::new(rows, columns),
            physical_image: ScreenBuffer::new(rows, columns),
            virtual_cursor: (1, 1),
            physical_cursor: (1, 1),
        }
    }
}

/// A character-cell display driven through a [`TerminalDriver`].
pub struct Screen<D: TerminalDriver> {
    driver: D,
    initialize_count: u32,
    state: Option<ScreenState>,
}

impl<D: TerminalDriver> Screen<D> {
    /// Wrap a driver. The screen is unusable until [`initialize`]
    /// succeeds.
    ///
    /// [`initialize`]: Screen::initialize
    pub fn new(driver: D) -> Self {
        Screen {
            driver,
            initialize_count: 0,
            state: None,
        }
    }

    /// The injected driver.
    pub fn driver(&self) -> &D {
        &self.driver
    }

    pub fn driver_mut(&mut self) -> &mut D {
        &mut self.driver
    }

    pub fn is_initialized(&self) -> bool {
        self.initialize_count > 0
    }

    fn state(&self) -> &ScreenState {
        match &self.state {
            Some(state) => state,
            None => panic!("screen used before a successful initialize()"),
        }
    }

    fn state_mut(&mut self) -> &mut ScreenState {
        match &mut self.state {
            Some(state) => state,
            None => panic!("screen used before a successful initialize()"),
        }
    }

    /// Acquire the terminal and allocate the buffers.
    ///
    /// Calling this on an already-initialized screen only increments the
    /// nesting counter and returns immediately; each call must eventually
    /// be matched by a [`terminate`](Screen::terminate). On the first
    /// call the driver is opened, the geometry is queried and fixed for
    /// the rest of the run, both buffers are allocated blank, and the
    /// physical screen is cleared.
    ///
    /// On failure nothing stays allocated and the screen must not be used
    /// further (another `initialize` attempt is permitted).
    pub fn initialize(&mut self) -> Result<(), ScreenError> {
        if self.initialize_count > 0 {
            self.initialize_count += 1;
            return Ok(());
        }

        self.driver.open()?;
        match self.setup() {
            Ok(()) => {
                self.initialize_count = 1;
                Ok(())
            }
            Err(error) => {
                // Roll back so a failed initialize leaves nothing behind.
                let _ = self.driver.close();
                self.state = None;
                Err(error)
            }
        }
    }

    fn setup(&mut self) -> Result<(), ScreenError> {
        let (rows, columns) = self.driver.geometry()?;
        if rows == 0 || columns == 0 {
            return Err(ScreenError::BadGeometry { rows, columns });
        }
        debug!(rows, columns, "screen initialized");

        self.state = Some(ScreenState::new(rows, columns));
        self.driver.clear_screen()?;
        self.driver.move_cursor(1, 1)?;
        self.driver.flush()?;
        Ok(())
    }

    /// Release one level of initialization.
    ///
    /// Only the call matching the first `initialize` shuts the engine
    /// down: the physical screen is cleared, the driver is closed, and
    /// both buffers are freed. Calling this on an uninitialized screen
    /// does nothing.
    pub fn terminate(&mut self) -> Result<(), ScreenError> {
        if self.initialize_count == 0 {
            return Ok(());
        }
        self.initialize_count -= 1;
        if self.initialize_count > 0 {
            return Ok(());
        }

        debug!("screen terminated");
        let cleared = self
            .driver
            .clear_screen()
            .and_then(|()| self.driver.move_cursor(1, 1))
            .and_then(|()| self.driver.flush());
        let closed = self.driver.close();
        self.state = None;

        cleared?;
        closed?;
        Ok(())
    }

    pub fn number_of_rows(&self) -> u16 {
        self.state().rows
    }

    pub fn number_of_columns(&self) -> u16 {
        self.state().columns
    }

    /// Whether the active driver cannot render color.
    pub fn is_monochrome(&self) -> bool {
        !self.driver.supports_color()
    }

    /// Adjust an attribute for the active terminal: on a monochrome
    /// driver the attribute is converted so text stays visible, on a
    /// color driver it passes through unchanged.
    pub fn convert_attribute(&self, attribute: Attribute) -> Attribute {
        if self.is_monochrome() {
            attribute.monochrome()
        } else {
            attribute
        }
    }

    //
    // Region primitives. All of these mutate the virtual buffer only and
    // silently clamp their region onto the screen.
    //

    pub fn clear(&mut self, region: Region, attribute: Attribute) {
        let attribute = self.convert_attribute(attribute);
        self.state_mut().virtual_buffer.clear(region, attribute);
    }

    pub fn set_color(&mut self, region: Region, attribute: Attribute) {
        let attribute = self.convert_attribute(attribute);
        self.state_mut().virtual_buffer.set_color(region, attribute);
    }

    /// Bulk-copy cells into a region. Attributes are taken verbatim from
    /// the source, with no monochrome conversion; pair with
    /// [`read`](Screen::read) to save and restore screen contents exactly.
    pub fn write(&mut self, region: Region, source: &[Cell]) {
        self.state_mut().virtual_buffer.write(region, source);
    }

    pub fn read(&self, region: Region) -> Vec<Cell> {
        self.state().virtual_buffer.read(region)
    }

    pub fn write_text(&mut self, region: Region, source: &[u8]) {
        self.state_mut().virtual_buffer.write_text(region, source);
    }

    pub fn read_text(&self, region: Region) -> Vec<u8> {
        self.state().virtual_buffer.read_text(region)
    }

    /// Render at most `max_count` characters of `text` at (row, column)
    /// in the given attribute, clamped to the row's remaining width.
    pub fn print(&mut self, row: u16, column: u16, max_count: u16, attribute: Attribute, text: &str) {
        let attribute = self.convert_attribute(attribute);
        self.state_mut()
            .virtual_buffer
            .print(row, column, max_count, attribute, text);
    }

    /// Like [`print`](Screen::print) but keeps the attributes already on
    /// screen.
    pub fn print_text(&mut self, row: u16, column: u16, max_count: u16, text: &str) {
        self.state_mut()
            .virtual_buffer
            .print_text(row, column, max_count, text);
    }

    pub fn scroll(&mut self, direction: Direction, region: Region, count: u16, attribute: Attribute) {
        let attribute = self.convert_attribute(attribute);
        self.state_mut()
            .virtual_buffer
            .scroll(direction, region, count, attribute);
    }

    /// Move the virtual cursor, clamped onto the screen.
    pub fn set_cursor_position(&mut self, row: u16, column: u16) {
        let state = self.state_mut();
        state.virtual_cursor = (row.clamp(1, state.rows), column.clamp(1, state.columns));
    }

    pub fn cursor_position(&self) -> (u16, u16) {
        self.state().virtual_cursor
    }

    //
    // Display synchronization.
    //

    /// Make the terminal match the virtual buffer, emitting the minimal
    /// set of driver commands.
    ///
    /// Cells already correct on the terminal are skipped; cursor motion is
    /// emitted only when the tracked terminal cursor is not already in
    /// place (each glyph written advances it one column); attribute
    /// selection is emitted only when it differs from the last attribute
    /// sent during this scan. Each emitted cell is copied into the
    /// physical image immediately, so a driver failure partway through
    /// leaves the image consistent with everything already on screen.
    ///
    /// After a successful return the physical image equals the virtual
    /// buffer and the terminal cursor sits at the virtual cursor. A second
    /// call with no intervening mutation emits nothing.
    pub fn refresh(&mut self) -> Result<(), ScreenError> {
        let state = match &mut self.state {
            Some(state) => state,
            None => panic!("screen used before a successful initialize()"),
        };
        let driver = &mut self.driver;

        let mut current_attribute: Option<Attribute> = None;
        let mut emitted = 0usize;
        let columns = state.columns as usize;

        for row in 1..=state.rows {
            for column in 1..=state.columns {
                let index = (row as usize - 1) * columns + (column as usize - 1);
                let desired = state.virtual_buffer.cells()[index];
                if state.physical_image.cells()[index] == desired {
                    continue;
                }

                if state.physical_cursor != (row, column) {
                    driver.move_cursor(row, column)?;
                    state.physical_cursor = (row, column);
                }
                if current_attribute != Some(desired.attribute) {
                    driver.set_attribute(desired.attribute)?;
                    current_attribute = Some(desired.attribute);
                }
                driver.write_glyph(desired.glyph)?;
                state.physical_cursor.1 += 1;
                state.physical_image.cells_mut()[index] = desired;
                emitted += 1;
            }
        }

        let mut touched = emitted > 0;
        if state.physical_cursor != state.virtual_cursor {
            driver.move_cursor(state.virtual_cursor.0, state.virtual_cursor.1)?;
            state.physical_cursor = state.virtual_cursor;
            touched = true;
        }
        if touched {
            driver.flush()?;
        }

        trace!(cells = emitted, "refresh");
        Ok(())
    }

    /// Unconditionally repaint the whole screen.
    ///
    /// Use this after an event that invalidated the terminal's own state.
    /// Every row gets one cursor positioning, then every cell is emitted
    /// left to right with attribute changes as they occur. The physical
    /// image is rewritten to match the virtual buffer.
    pub fn redraw(&mut self) -> Result<(), ScreenError> {
        let state = match &mut self.state {
            Some(state) => state,
            None => panic!("screen used before a successful initialize()"),
        };
        let driver = &mut self.driver;
        let columns = state.columns as usize;

        for row in 1..=state.rows {
            driver.move_cursor(row, 1)?;
            let mut current_attribute: Option<Attribute> = None;
            for column in 1..=state.columns {
                let index = (row as usize - 1) * columns + (column as usize - 1);
                let cell = state.virtual_buffer.cells()[index];
                if current_attribute != Some(cell.attribute) {
                    driver.set_attribute(cell.attribute)?;
                    current_attribute = Some(cell.attribute);
                }
                driver.write_glyph(cell.glyph)?;
            }
        }

        state
            .physical_image
            .cells_mut()
            .copy_from_slice(state.virtual_buffer.cells());

        driver.move_cursor(state.virtual_cursor.0, state.virtual_cursor.1)?;
        state.physical_cursor = state.virtual_cursor;
        driver.flush()?;

        trace!("redraw");
        Ok(())
    }

    /// Blank the entire display in one step.
    ///
    /// Uses the driver's fast clear rather than the cell-by-cell diff,
    /// resets both buffers to blank default-attribute cells, and homes
    /// both cursors. Unlike the other drawing calls, the effect on the
    /// terminal is immediate.
    pub fn clear_screen(&mut self) -> Result<(), ScreenError> {
        let state = match &mut self.state {
            Some(state) => state,
            None => panic!("screen used before a successful initialize()"),
        };

        self.driver.clear_screen()?;
        self.driver.move_cursor(1, 1)?;
        self.driver.flush()?;

        state.virtual_buffer.fill_blank(Attribute::DEFAULT);
        state.physical_image.fill_blank(Attribute::DEFAULT);
        state.virtual_cursor = (1, 1);
        state.physical_cursor = (1, 1);
        Ok(())
    }
}
