//! Border and box drawing tools
//!
//! Conveniences layered on the region primitives. Borders are painted
//! segment by segment because each segment may use a distinct glyph.

use crate::attr::Attribute;
use crate::boxes::{box_characters, BoxStyle};
use crate::cell::Cell;
use crate::driver::TerminalDriver;
use crate::region::Region;
use crate::screen::Screen;

fn put<D: TerminalDriver>(screen: &mut Screen<D>, row: u16, column: u16, glyph: u8, attribute: Attribute) {
    screen.write(Region::new(row, column, 1, 1), &[Cell::new(glyph, attribute)]);
}

/// Draw a border around the region using the given box style.
///
/// The four corners are painted first, then the top and bottom edges with
/// the horizontal glyph, then the two side columns with the vertical
/// glyph. The region's interior is untouched.
pub fn draw_border<D: TerminalDriver>(
    screen: &mut Screen<D>,
    region: Region,
    style: BoxStyle,
    attribute: Attribute,
) {
    let region = region.clamped(screen.number_of_rows(), screen.number_of_columns());
    let chars = box_characters(style);
    let attribute = screen.convert_attribute(attribute);
    let top = region.row;
    let bottom = region.row + region.height - 1;
    let left = region.column;
    let right = region.column + region.width - 1;

    put(screen, top, left, chars.upper_left, attribute);
    put(screen, top, right, chars.upper_right, attribute);
    put(screen, bottom, left, chars.lower_left, attribute);
    put(screen, bottom, right, chars.lower_right, attribute);

    for column in left + 1..right {
        put(screen, top, column, chars.horizontal, attribute);
        put(screen, bottom, column, chars.horizontal, attribute);
    }
    for row in top + 1..bottom {
        put(screen, row, left, chars.vertical, attribute);
        put(screen, row, right, chars.vertical, attribute);
    }
}

/// Clear the region and draw a border around it.
pub fn fill_box<D: TerminalDriver>(
    screen: &mut Screen<D>,
    region: Region,
    style: BoxStyle,
    attribute: Attribute,
) {
    screen.clear(region, attribute);
    draw_border(screen, region, style, attribute);
}

/// [`fill_box`] plus a drop shadow.
///
/// The shadow re-colors (attributes only, text kept) a one-row strip
/// below the box, offset two columns right, and a two-column strip along
/// the box's right edge, using the fixed dim shadow attribute. The strips
/// are assumed to fit on screen; the usual clamping absorbs any overhang.
pub fn fill_shadowed_box<D: TerminalDriver>(
    screen: &mut Screen<D>,
    region: Region,
    style: BoxStyle,
    attribute: Attribute,
) {
    fill_box(screen, region, style, attribute);

    let below = Region::new(
        region.row.saturating_add(region.height),
        region.column.saturating_add(2),
        region.width,
        1,
    );
    let right = Region::new(
        region.row.saturating_add(1),
        region.column.saturating_add(region.width),
        2,
        region.height,
    );
    screen.set_color(below, Attribute::SHADOW);
    screen.set_color(right, Attribute::SHADOW);
}

/// Center text within a width starting at (row, column).
///
/// Text wider than the region is left-justified and truncated at the
/// width.
pub fn center<D: TerminalDriver>(
    screen: &mut Screen<D>,
    row: u16,
    column: u16,
    width: u16,
    attribute: Attribute,
    text: &str,
) {
    let length = text.len().min(u16::MAX as usize) as u16;
    if length >= width {
        screen.print(row, column, width, attribute, text);
    } else {
        let offset = (width - length) / 2;
        screen.print(row, column + offset, length, attribute, text);
    }
}
