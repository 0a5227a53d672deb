//! Terminal cell type representing a single character position.
//!
//! The display is a grid of cells; each cell holds a glyph index into the
//! 256-entry font atlas plus foreground and background colors. The default
//! cell is symbol 0 drawn black-on-black, which is why a freshly opened
//! grid renders as a solid block of the edge color's absence.

use crate::color::Rgb;

/// A single grid cell: glyph index plus foreground/background color.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Cell {
    /// Index into the 256-entry font atlas.
    pub symbol: u8,
    /// Foreground (glyph) color.
    pub fg: Rgb,
    /// Background color.
    pub bg: Rgb,
}

impl Cell {
    /// Create a cell from a glyph index and colors.
    #[must_use]
    pub const fn new(symbol: u8, fg: Rgb, bg: Rgb) -> Self {
        Self { symbol, fg, bg }
    }

    /// Create a cell from an ASCII character.
    ///
    /// Non-ASCII characters fall back to symbol 0; the atlas only has 256
    /// slots and this library does no Unicode mapping.
    #[must_use]
    pub fn ascii(ch: char, fg: Rgb, bg: Rgb) -> Self {
        let symbol = if ch.is_ascii() { ch as u8 } else { 0 };
        Self::new(symbol, fg, bg)
    }

    /// A blank cell with the given background.
    #[must_use]
    pub const fn blank(bg: Rgb) -> Self {
        Self::new(0, Rgb::BLACK, bg)
    }
}
