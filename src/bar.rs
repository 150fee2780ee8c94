//! Per-bar draw state.
//!
//! A [`Bar`] pairs a filler with the layout options that stay fixed for the
//! bar's lifetime: its requested width and whether the outer padding is
//! trimmed. Each frame only supplies the progress and the terminal width.
//!
//! # Examples
//!
//! ```rust
//! use barline::bar::Bar;
//! use barline::filler::FillerBuilder;
//! use barline::frame::ProgressState;
//!
//! let mut bar = Bar::new(FillerBuilder::new().build_refillable()?)
//!     .requested_width(12)
//!     .trim_space(true);
//!
//! // Resumed at 30%: mark it as refill.
//! bar.set_refill(30);
//! assert_eq!(bar.draw(&ProgressState::new(100, 50), &80usize), "[+++=>-----]");
//! # Ok::<(), barline::Error>(())
//! ```

use crate::filler::{BarFiller, Filler, RefillFiller};
use crate::frame::{ProgressState, RenderRequest};

/// Anything that can report how many terminal columns a bar may use.
pub trait WidthSource {
    /// Columns available for the bar segment right now.
    fn available_width(&self) -> usize;
}

impl WidthSource for usize {
    fn available_width(&self) -> usize {
        *self
    }
}

/// A filler plus the layout options of one bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bar<F> {
    filler: F,
    requested_width: usize,
    trim_space: bool,
}

impl<F: Filler> Bar<F> {
    /// Creates a bar that uses all available columns, with outer padding.
    pub fn new(filler: F) -> Self {
        Self {
            filler,
            requested_width: 0,
            trim_space: false,
        }
    }

    /// Bounds the bracketed bar to `width` columns. Zero removes the bound.
    pub fn requested_width(mut self, width: usize) -> Self {
        self.requested_width = width;
        self
    }

    /// Drops the space normally drawn on each side of the bar.
    pub fn trim_space(mut self, trim: bool) -> Self {
        self.trim_space = trim;
        self
    }

    /// The filler drawing this bar.
    pub fn filler(&self) -> &F {
        &self.filler
    }

    /// Builds the request for a frame with `available_width` columns.
    pub fn request(&self, available_width: usize) -> RenderRequest {
        RenderRequest::new(available_width)
            .requested_width(self.requested_width)
            .trim_space(self.trim_space)
    }

    /// Draws one frame.
    pub fn draw(&self, state: &ProgressState, width: &impl WidthSource) -> String {
        self.filler
            .render(state, &self.request(width.available_width()))
    }
}

impl Bar<RefillFiller> {
    /// Sets the refill target kept between frames.
    pub fn set_refill(&mut self, upto: i64) {
        self.filler.set_refill(upto);
    }
}

impl Bar<BarFiller> {
    /// Returns the refillable filler when configuration picked that variant.
    pub fn refillable_mut(&mut self) -> Option<&mut RefillFiller> {
        self.filler.as_refillable_mut()
    }
}
