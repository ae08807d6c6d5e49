//! A single display position

use crate::attr::Attribute;

/// One screen cell: an 8-bit glyph code plus its packed attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub glyph: u8,
    pub attribute: Attribute,
}

impl Cell {
    pub const fn new(glyph: u8, attribute: Attribute) -> Self {
        Cell { glyph, attribute }
    }

    /// A space in the given attribute.
    pub const fn blank(attribute: Attribute) -> Self {
        Cell::new(b' ', attribute)
    }
}

impl Default for Cell {
    fn default() -> Self {
        Cell::blank(Attribute::DEFAULT)
    }
}
