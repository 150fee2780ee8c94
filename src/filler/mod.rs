//! Fillers: turning progress into the glyphs inside a bar.
//!
//! A filler is built once per bar from a [`FillerConfig`] and reused for
//! every frame. Given a [`ProgressState`] and a number of interior slots it
//! produces a [`ColumnStream`]: the refill run, the fill run, the tip and the
//! empty run, mirrored when the bar fills from right to left.
//!
//! # Overview
//!
//! - `filler` - the fill arithmetic, the [`Filler`] trait and its variants
//! - `stream` - run-length encoded interiors and overflow correction
//! - `builder` - [`FillerBuilder`] for configuring and creating fillers
//! - `config` - [`FillerConfig`] and its defaults
//!
//! The refill target can only be stored on a [`RefillFiller`]; choose it with
//! [`FillerBuilder::refillable`] or [`FillerBuilder::build_refillable`].
//!
//! # Examples
//!
//! ```rust
//! use barline::filler::{Filler, FillerBuilder};
//! use barline::frame::{ProgressState, RenderRequest};
//!
//! let filler = FillerBuilder::new().build()?;
//! let request = RenderRequest::new(20).trim_space(true);
//!
//! assert_eq!(filler.render(&ProgressState::new(100, 50), &request), "[========>---------]");
//! assert_eq!(filler.render(&ProgressState::new(100, 100), &request), "[==================]");
//! # Ok::<(), barline::Error>(())
//! ```
//!
//! [`ProgressState`]: crate::frame::ProgressState

pub mod builder;
pub mod config;
pub mod filler;
pub mod stream;

pub use builder::FillerBuilder;
pub use config::FillerConfig;
pub use filler::{BarFiller, BasicFiller, FillLayout, Filler, RefillFiller};
pub use stream::{ColumnStream, Segment};
