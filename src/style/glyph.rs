//! A single measured display glyph.

use crate::width::glyph_width;
use std::fmt;

/// Ellipsis drawn when a bar cannot show everything it should.
pub const ELLIPSIS: &str = "…";

/// One grapheme cluster together with its column width.
///
/// The width is measured once when the glyph is created and never again, so
/// drawing a frame doesn't need to classify characters.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Glyph {
    text: String,
    width: usize,
}

impl Glyph {
    /// Creates a glyph and measures its width.
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let width = glyph_width(&text);
        Self { text, width }
    }

    /// Creates the ellipsis glyph.
    pub fn ellipsis() -> Self {
        Self::new(ELLIPSIS)
    }

    /// The glyph text.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Number of terminal columns the glyph occupies, 1 or 2.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Returns `true` if the glyph spans two columns.
    pub fn is_wide(&self) -> bool {
        self.width > 1
    }
}

impl From<char> for Glyph {
    fn from(ch: char) -> Self {
        Self::new(ch.to_string())
    }
}

impl fmt::Display for Glyph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
