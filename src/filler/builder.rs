//! Builder pattern implementation for creating fillers.
//!
//! The style descriptor is only parsed in the `build*` methods, so every
//! configuration error surfaces there, once, before the first frame.
//!
//! # Examples
//!
//! ## Default bar
//!
//! ```rust
//! use barline::filler::{Filler, FillerBuilder};
//! use barline::frame::{ProgressState, RenderRequest};
//!
//! let filler = FillerBuilder::new().build()?;
//! let line = filler.render(&ProgressState::new(60, 20), &RenderRequest::new(8));
//! assert_eq!(line, " [>---] ");
//! # Ok::<(), barline::Error>(())
//! ```
//!
//! ## Reversed bar with a custom style
//!
//! ```rust
//! use barline::filler::{Filler, FillerBuilder};
//! use barline::frame::{ProgressState, RenderRequest};
//!
//! let filler = FillerBuilder::new().style("|#>.|").reverse(true).build_basic()?;
//! let line = filler.render(
//!     &ProgressState::new(10, 5),
//!     &RenderRequest::new(12).trim_space(true),
//! );
//! assert_eq!(line, "|.....<####|");
//! # Ok::<(), barline::Error>(())
//! ```

use super::config::FillerConfig;
use super::filler::{BarFiller, BasicFiller, RefillFiller};
use crate::error::Result;
use crate::style::{Glyph, StyleSpec};
use tracing::debug;

/// A builder used to create fillers.
///
/// ```rust
/// use barline::filler::{BarFiller, FillerBuilder};
///
/// let filler = FillerBuilder::new().refillable(true).build()?;
/// assert!(matches!(filler, BarFiller::Refillable(_)));
/// # Ok::<(), barline::Error>(())
/// ```
#[derive(Debug, Default)]
pub struct FillerBuilder {
    config: FillerConfig,
}

impl FillerBuilder {
    /// Creates a builder with the default options.
    pub fn new() -> Self {
        FillerBuilder::default()
    }

    /// Creates a builder from an existing configuration.
    pub fn with_config(config: FillerConfig) -> Self {
        Self { config }
    }

    /// Sets the style descriptor.
    pub fn style(mut self, style: impl Into<String>) -> Self {
        self.config.style = style.into();
        self
    }

    /// Fill the bar from right to left.
    pub fn reverse(mut self, reverse: bool) -> Self {
        self.config.reverse = reverse;
        self
    }

    /// Draw the refill overlay with `glyph`, whatever the descriptor says.
    pub fn refill_glyph(mut self, glyph: char) -> Self {
        self.config.refill_glyph = Some(glyph);
        self
    }

    /// Choose the refillable variant in [`build`](Self::build).
    pub fn refillable(mut self, refillable: bool) -> Self {
        self.config.refillable = refillable;
        self
    }

    /// Parses the configured style.
    fn parse_style(&self) -> Result<StyleSpec> {
        let style = StyleSpec::parse(&self.config.style)?;
        Ok(match self.config.refill_glyph {
            Some(glyph) => style.with_refill(Glyph::from(glyph)),
            None => style,
        })
    }

    /// Creates the filler variant named by the configuration.
    pub fn build(self) -> Result<BarFiller> {
        if self.config.refillable {
            self.build_refillable().map(BarFiller::from)
        } else {
            self.build_basic().map(BarFiller::from)
        }
    }

    /// Creates a [`BasicFiller`], ignoring the `refillable` option.
    pub fn build_basic(self) -> Result<BasicFiller> {
        let style = self.parse_style()?;
        debug!("Building basic filler (reverse: {})", self.config.reverse);
        Ok(BasicFiller::new(style, self.config.reverse))
    }

    /// Creates a [`RefillFiller`], ignoring the `refillable` option.
    pub fn build_refillable(self) -> Result<RefillFiller> {
        let style = self.parse_style()?;
        debug!("Building refillable filler (reverse: {})", self.config.reverse);
        Ok(RefillFiller::new(style, self.config.reverse))
    }
}
