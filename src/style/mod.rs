//! Bar styles: the glyph set a bar is drawn with.
//!
//! A style is described by a short string listing each glyph by position,
//! such as the default `"[=>-]<+"`. The descriptor is parsed and measured
//! once, when a filler is built, so invalid styles are rejected before any
//! frame is drawn.
//!
//! # Examples
//!
//! ```rust
//! use barline::style::{StyleSpec, DEFAULT_STYLE};
//!
//! let style = StyleSpec::parse(DEFAULT_STYLE)?;
//! assert_eq!(style.refill().as_str(), "+");
//!
//! let wide = StyleSpec::parse("[=の-]")?;
//! assert!(wide.tip(false).is_wide());
//! # Ok::<(), barline::Error>(())
//! ```

pub mod glyph;
pub mod spec;

pub use glyph::{Glyph, ELLIPSIS};
pub use spec::{StyleSpec, DEFAULT_STYLE};
