//! Configuration for building fillers.
//!
//! [`FillerConfig`] holds everything fixed for the lifetime of a bar. It is
//! normally filled in through [`FillerBuilder`], but can be built directly.
//!
//! # Examples
//!
//! ```rust
//! use barline::filler::FillerConfig;
//!
//! let config = FillerConfig {
//!     style: "(#>.)".to_string(),
//!     reverse: true,
//!     ..FillerConfig::default()
//! };
//! assert!(!config.refillable);
//! ```
//!
//! [`FillerBuilder`]: super::FillerBuilder

use crate::style::DEFAULT_STYLE;

/// Configuration structure for a filler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FillerConfig {
    /// Style descriptor, parsed when the filler is built.
    pub style: String,
    /// Fill from right to left.
    pub reverse: bool,
    /// Refill glyph overriding the descriptor's.
    pub refill_glyph: Option<char>,
    /// Build a filler that stores a refill target between frames.
    pub refillable: bool,
}

impl Default for FillerConfig {
    fn default() -> Self {
        Self {
            style: DEFAULT_STYLE.to_string(),
            reverse: false,
            refill_glyph: None,
            refillable: false,
        }
    }
}
