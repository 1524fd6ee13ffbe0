use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Columns a label occupies on screen.
pub fn display_width(s: &str) -> usize {
    UnicodeWidthStr::width(s)
}

/// Columns one glyph occupies; zero for combining marks.
pub fn char_width(c: char) -> usize {
    UnicodeWidthChar::width(c).unwrap_or(0)
}
