//! Box-drawing glyph tables
//!
//! Each named style carries the eleven glyphs needed to draw borders and
//! rules: the two line pieces, four corners, four tee junctions, and the
//! cross. Glyph values are the classic 8-bit box-drawing codes; drivers
//! that cannot emit them directly remap through
//! [`TerminalDriver::glyph_for`](crate::driver::TerminalDriver::glyph_for).

/// The glyph set for one box style.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoxChars {
    pub horizontal: u8,
    pub vertical: u8,
    pub upper_left: u8,
    pub upper_right: u8,
    pub lower_left: u8,
    pub lower_right: u8,
    /// Tee on a right-hand wall, opening leftward.
    pub right_tee: u8,
    /// Tee on a left-hand wall, opening rightward.
    pub left_tee: u8,
    /// Tee on a bottom wall, opening upward.
    pub bottom_tee: u8,
    /// Tee on a top wall, opening downward.
    pub top_tee: u8,
    pub cross: u8,
}

/// The available box styles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoxStyle {
    DoubleLine,
    SingleLine,
    DarkShading,
    LightShading,
    Solid,
    Ascii,
    Blank,
}

const DOUBLE_LINE: BoxChars = BoxChars {
    horizontal: 205,
    vertical: 186,
    upper_left: 201,
    upper_right: 187,
    lower_left: 200,
    lower_right: 188,
    right_tee: 181,
    left_tee: 198,
    bottom_tee: 208,
    top_tee: 210,
    cross: 206,
};

const SINGLE_LINE: BoxChars = BoxChars {
    horizontal: 196,
    vertical: 179,
    upper_left: 218,
    upper_right: 191,
    lower_left: 192,
    lower_right: 217,
    right_tee: 180,
    left_tee: 195,
    bottom_tee: 193,
    top_tee: 194,
    cross: 197,
};

const fn uniform(glyph: u8) -> BoxChars {
    BoxChars {
        horizontal: glyph,
        vertical: glyph,
        upper_left: glyph,
        upper_right: glyph,
        lower_left: glyph,
        lower_right: glyph,
        right_tee: glyph,
        left_tee: glyph,
        bottom_tee: glyph,
        top_tee: glyph,
        cross: glyph,
    }
}

const DARK_SHADING: BoxChars = uniform(177);
const LIGHT_SHADING: BoxChars = uniform(176);
const SOLID: BoxChars = uniform(219);
const BLANK: BoxChars = uniform(b' ');

const ASCII: BoxChars = BoxChars {
    horizontal: b'-',
    vertical: b'|',
    upper_left: b'+',
    upper_right: b'+',
    lower_left: b'+',
    lower_right: b'+',
    right_tee: b'+',
    left_tee: b'+',
    bottom_tee: b'+',
    top_tee: b'+',
    cross: b'+',
};

impl BoxStyle {
    const fn chars(self) -> &'static BoxChars {
        match self {
            BoxStyle::DoubleLine => &DOUBLE_LINE,
            BoxStyle::SingleLine => &SINGLE_LINE,
            BoxStyle::DarkShading => &DARK_SHADING,
            BoxStyle::LightShading => &LIGHT_SHADING,
            BoxStyle::Solid => &SOLID,
            BoxStyle::Ascii => &ASCII,
            BoxStyle::Blank => &BLANK,
        }
    }

    /// The style actually rendered when ASCII-only output is in force.
    /// Blank stays blank; every other style falls back to [`BoxStyle::Ascii`].
    pub const fn ascii_override(self) -> BoxStyle {
        match self {
            BoxStyle::Blank => BoxStyle::Blank,
            _ => BoxStyle::Ascii,
        }
    }
}

/// Look up the glyph set for a box style.
///
/// With the `ascii-boxes` cargo feature enabled, every style except
/// [`BoxStyle::Blank`] resolves to the ASCII fallback set.
pub fn box_characters(style: BoxStyle) -> &'static BoxChars {
    #[cfg(feature = "ascii-boxes")]
    {
        box_characters_ascii_only(style)
    }
    #[cfg(not(feature = "ascii-boxes"))]
    {
        style.chars()
    }
}

/// The ASCII-only form of [`box_characters`], available regardless of the
/// `ascii-boxes` feature.
pub fn box_characters_ascii_only(style: BoxStyle) -> &'static BoxChars {
    style.ascii_override().chars()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const ALL_STYLES: [BoxStyle; 7] = [
        BoxStyle::DoubleLine,
        BoxStyle::SingleLine,
        BoxStyle::DarkShading,
        BoxStyle::LightShading,
        BoxStyle::Solid,
        BoxStyle::Ascii,
        BoxStyle::Blank,
    ];

    #[test]
    fn double_line_glyphs() {
        let chars = BoxStyle::DoubleLine.chars();
        assert_eq!(chars.horizontal, 205);
        assert_eq!(chars.vertical, 186);
        assert_eq!(chars.upper_left, 201);
        assert_eq!(chars.cross, 206);
    }

    #[test]
    fn shading_styles_are_uniform() {
        for style in [BoxStyle::DarkShading, BoxStyle::LightShading, BoxStyle::Solid] {
            let chars = style.chars();
            assert_eq!(chars.horizontal, chars.vertical);
            assert_eq!(chars.horizontal, chars.upper_left);
            assert_eq!(chars.horizontal, chars.cross);
        }
    }

    #[test]
    fn ascii_override_covers_every_style() {
        for style in ALL_STYLES {
            let expected = if style == BoxStyle::Blank {
                BoxStyle::Blank
            } else {
                BoxStyle::Ascii
            };
            assert_eq!(style.ascii_override(), expected);
        }
    }

    #[test]
    fn ascii_only_lookup_keeps_blank_as_spaces() {
        assert_eq!(box_characters_ascii_only(BoxStyle::Blank), &BLANK);
        assert_eq!(box_characters_ascii_only(BoxStyle::DoubleLine), &ASCII);
        assert_eq!(box_characters_ascii_only(BoxStyle::Solid), &ASCII);
    }

    #[cfg(not(feature = "ascii-boxes"))]
    #[test]
    fn default_lookup_returns_native_glyphs() {
        assert_eq!(box_characters(BoxStyle::SingleLine), &SINGLE_LINE);
    }

    #[cfg(feature = "ascii-boxes")]
    #[test]
    fn feature_forces_ascii_glyphs() {
        assert_eq!(box_characters(BoxStyle::SingleLine), &ASCII);
        assert_eq!(box_characters(BoxStyle::Blank), &BLANK);
    }
}
