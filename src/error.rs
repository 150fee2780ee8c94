//! Error handling for barline.
//!
//! Rendering a frame never fails: out-of-range progress values and widths are
//! normalized instead. The only errors surfaced by this crate come from
//! building a style or a filler, so a bad configuration is caught once, before
//! the first frame is drawn.

use thiserror::Error;

/// Errors that can happen when configuring a bar.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The style descriptor is the empty string.
    #[error("Empty bar style")]
    EmptyStyle,

    /// The style descriptor does not name every mandatory glyph.
    ///
    /// A descriptor needs at least the two caps, the fill, the tip and the
    /// empty glyph.
    #[error("Bar style has {found} glyphs, expected at least 5")]
    TooFewGlyphs {
        /// Number of glyphs found in the descriptor.
        found: usize,
    },

    /// The style descriptor has glyphs past the optional refill position.
    #[error("Bar style has {found} glyphs, expected at most 7")]
    TooManyGlyphs {
        /// Number of glyphs found in the descriptor.
        found: usize,
    },

    /// A glyph is a control character or takes up no terminal column.
    #[error("Invalid glyph {glyph:?} at position {position}")]
    InvalidGlyph {
        /// Zero-based position of the glyph in the descriptor.
        position: usize,
        /// The offending glyph.
        glyph: String,
    },
}

/// Result type alias for operations that can fail with a barline error.
pub type Result<T> = std::result::Result<T, Error>;
