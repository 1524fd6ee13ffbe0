use crate::types::{Rgb, TextStyle};

/// One terminal cell. The second column of a wide glyph is marked as a
/// tail cell and never flushed on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub glyph: char,
    pub fg: Rgb,
    pub bg: Rgb,
    pub attrs: TextStyle,
    pub wide_tail: bool,
}

impl Cell {
    pub const BLANK: Self = Self {
        glyph: ' ',
        fg: Rgb::WHITE,
        bg: Rgb::BLACK,
        attrs: TextStyle::new(),
        wide_tail: false,
    };

    pub fn new(glyph: char) -> Self {
        Self {
            glyph,
            ..Self::BLANK
        }
    }

    pub fn fg(mut self, fg: Rgb) -> Self {
        self.fg = fg;
        self
    }

    pub fn bg(mut self, bg: Rgb) -> Self {
        self.bg = bg;
        self
    }

    pub fn attrs(mut self, attrs: TextStyle) -> Self {
        self.attrs = attrs;
        self
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self::BLANK
    }
}
