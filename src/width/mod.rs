//! Column width measurement.
//!
//! Terminals draw most characters in one column and East Asian wide
//! characters in two. Everything that decides how many glyphs fit in a bar
//! goes through this module. [`char_width`] measures one code point,
//! [`glyph_width`] one grapheme cluster, and [`is_printable`] tells whether a
//! cluster can be drawn at all.
//!
//! # Examples
//!
//! ```rust
//! use barline::width::{char_width, glyph_width, text_width};
//!
//! assert_eq!(char_width('='), 1);
//! assert_eq!(char_width('の'), 2);
//! assert_eq!(glyph_width("の"), 2);
//! assert_eq!(text_width("[=の-]"), 6);
//! ```

pub mod meter;

pub use meter::{char_width, glyph_width, is_printable, text_width};
