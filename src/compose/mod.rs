//! Line composition: framing a bar interior with caps and padding.
//!
//! [`LineComposer`] is the last step of a frame. It decides how many interior
//! slots the filler gets, wraps the interior with the caps and the outer
//! padding, and degrades to a short placeholder when the width budget is too
//! small for a bar.
//!
//! # Examples
//!
//! ```rust
//! use barline::compose::LineComposer;
//! use barline::filler::FillerBuilder;
//! use barline::frame::{ProgressState, RenderRequest};
//!
//! let filler = FillerBuilder::new().build()?;
//! let state = ProgressState::new(60, 20);
//!
//! assert_eq!(LineComposer::compose(&filler, &state, &RenderRequest::new(7)), " [>--] ");
//! assert_eq!(LineComposer::compose(&filler, &state, &RenderRequest::new(3)), "  ");
//! # Ok::<(), barline::Error>(())
//! ```

pub mod line;

pub use line::LineComposer;
