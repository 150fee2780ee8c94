//! East Asian width classification for single glyphs.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Returns the number of columns `ch` occupies: 2 for wide characters, 1
/// otherwise.
///
/// Zero-width and control characters are reported as 1 column. Callers that
/// need to reject them (see [`crate::style::StyleSpec`]) do so before
/// measuring.
pub fn char_width(ch: char) -> usize {
    match UnicodeWidthChar::width(ch) {
        Some(2) => 2,
        _ => 1,
    }
}

/// Returns the number of columns a single grapheme cluster occupies, clamped
/// to 1 or 2.
///
/// A single code point is measured with [`char_width`]. Combining marks and
/// variation selectors don't add columns of their own, so a longer cluster
/// is as wide as its widest base character.
pub fn glyph_width(glyph: &str) -> usize {
    let mut chars = glyph.chars();
    match (chars.next(), chars.next()) {
        (Some(ch), None) => char_width(ch),
        _ => UnicodeWidthStr::width(glyph).clamp(1, 2),
    }
}

/// Returns `true` if `glyph` takes up at least one column and holds no
/// control character.
///
/// Zero-width clusters such as U+200B, U+FEFF or a lone combining mark
/// would be clamped to one column by [`glyph_width`] while drawing nothing.
pub fn is_printable(glyph: &str) -> bool {
    !glyph.chars().any(char::is_control) && UnicodeWidthStr::width(glyph) > 0
}

/// Returns the total column width of `text`.
pub fn text_width(text: &str) -> usize {
    UnicodeWidthStr::width(text)
}
