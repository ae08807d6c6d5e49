//! Packed display attributes
//!
//! One byte per cell: three bits of foreground color, three bits of
//! background color, one bright bit, and one blink bit. Colors are built
//! from red/green/blue component bits, so white is red|green|blue.

/// A 3-bit color component value for either field of an [`Attribute`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color(u8);

impl Color {
    pub const BLACK: Color = Color(0x00);
    pub const BLUE: Color = Color(0x01);
    pub const GREEN: Color = Color(0x02);
    pub const CYAN: Color = Color(0x03);
    pub const RED: Color = Color(0x04);
    pub const MAGENTA: Color = Color(0x05);
    pub const BROWN: Color = Color(0x06);
    pub const WHITE: Color = Color(0x07);

    /// Build a color from raw bits. Anything above the low three bits is
    /// ignored.
    pub const fn from_bits(bits: u8) -> Self {
        Color(bits & 0x07)
    }

    pub const fn bits(self) -> u8 {
        self.0
    }
}

/// A packed cell attribute.
///
/// Bit layout: `0bKBBB_IFFF` where `FFF` is the foreground color, `I` the
/// bright flag, `BBB` the background color, and `K` the blink flag. Only
/// these eight bits are meaningful; [`Attribute::from_bits`] masks nothing
/// away because the carrier is already a byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Attribute(u8);

const FG_MASK: u8 = 0x07;
const BRIGHT_BIT: u8 = 0x08;
const BG_MASK: u8 = 0x70;
const BLINK_BIT: u8 = 0x80;

impl Attribute {
    /// White on black, no effects. The attribute every buffer starts with.
    pub const DEFAULT: Attribute = Attribute(0x07);

    /// Bright black on black, used for drop shadows.
    pub const SHADOW: Attribute = Attribute(BRIGHT_BIT);

    pub const fn new(foreground: Color, background: Color) -> Self {
        Attribute(foreground.bits() | (background.bits() << 4))
    }

    pub const fn from_bits(bits: u8) -> Self {
        Attribute(bits)
    }

    pub const fn bits(self) -> u8 {
        self.0
    }

    pub const fn foreground(self) -> Color {
        Color(self.0 & FG_MASK)
    }

    pub const fn background(self) -> Color {
        Color((self.0 & BG_MASK) >> 4)
    }

    pub const fn bright(self) -> bool {
        self.0 & BRIGHT_BIT != 0
    }

    pub const fn blink(self) -> bool {
        self.0 & BLINK_BIT != 0
    }

    #[must_use]
    pub const fn with_bright(self, bright: bool) -> Self {
        if bright {
            Attribute(self.0 | BRIGHT_BIT)
        } else {
            Attribute(self.0 & !BRIGHT_BIT)
        }
    }

    #[must_use]
    pub const fn with_blink(self, blink: bool) -> Self {
        if blink {
            Attribute(self.0 | BLINK_BIT)
        } else {
            Attribute(self.0 & !BLINK_BIT)
        }
    }

    /// Swap the foreground and background color fields.
    ///
    /// The bright and blink bits are untouched. Applying this twice yields
    /// the original attribute.
    #[must_use]
    pub const fn reverse(self) -> Self {
        let foreground = self.0 & FG_MASK;
        let background = (self.0 & BG_MASK) >> 4;
        Attribute((self.0 & !(FG_MASK | BG_MASK)) | (foreground << 4) | background)
    }

    /// Adjust the attribute so text stays visible on a monochrome display.
    ///
    /// On a black background the foreground is forced to full white.
    /// Any colored background becomes full reverse video: white background,
    /// black foreground. Bright and blink are preserved.
    #[must_use]
    pub const fn monochrome(self) -> Self {
        if self.0 & BG_MASK == 0 {
            Attribute(self.0 | FG_MASK)
        } else {
            Attribute((self.0 | BG_MASK) & !FG_MASK)
        }
    }
}

impl Default for Attribute {
    fn default() -> Self {
        Attribute::DEFAULT
    }
}
