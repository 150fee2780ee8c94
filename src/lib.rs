//! Barline renders the text of a single progress bar segment for a terminal
//! row: caps, fill, tip and empty glyphs, fitted exactly into a column
//! budget.
//!
//! # Quick Start
//!
//! ```rust
//! use barline::{Filler, FillerBuilder, ProgressState, RenderRequest};
//!
//! let filler = FillerBuilder::new().build()?;
//! let line = filler.render(
//!     &ProgressState::new(60, 20),
//!     &RenderRequest::new(80).requested_width(60),
//! );
//! assert_eq!(line, " [==================>---------------------------------------] ");
//! # Ok::<(), barline::Error>(())
//! ```
//!
//! Rendering is pure: the same state and request always produce the same
//! text, and out-of-range numbers are clamped rather than rejected. Only
//! building a filler from a malformed style can fail.
//!
//! # Module Organization
//!
//! - [`width`] - column width of glyphs (1 or 2 columns)
//! - [`style`] - parsing style descriptors such as `"[=>-]<+"`
//! - [`filler`] - the fill arithmetic, filler variants and their builder
//! - [`compose`] - framing the interior with caps and padding
//! - [`frame`] - per-frame progress state and width request
//! - [`bar`] - per-bar layout options and width sources
//! - [`error`] - the crate error type

pub mod bar;
pub mod compose;
pub mod error;
pub mod filler;
pub mod frame;
pub mod style;
pub mod width;

pub use bar::{Bar, WidthSource};
pub use compose::LineComposer;
pub use error::{Error, Result};
pub use filler::{
    BarFiller, BasicFiller, ColumnStream, FillLayout, Filler, FillerBuilder, FillerConfig,
    RefillFiller, Segment,
};
pub use frame::{ProgressState, RenderRequest};
pub use style::{Glyph, StyleSpec, DEFAULT_STYLE, ELLIPSIS};
