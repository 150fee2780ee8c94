//! Parsing and validation of bar style descriptors.

use super::glyph::Glyph;
use crate::error::{Error, Result};
use crate::width::is_printable;
use std::str::FromStr;
use tracing::debug;
use unicode_segmentation::UnicodeSegmentation;

/// Style used when no other style is configured: `"[=>-]<+"`.
pub const DEFAULT_STYLE: &str = "[=>-]<+";

/// Reverse tip used when a descriptor stops after the right cap.
const DEFAULT_REVERSE_TIP: char = '<';

/// Glyphs every descriptor must name: caps, fill, tip and empty.
const MANDATORY_GLYPHS: usize = 5;

/// Mandatory glyphs plus the optional reverse tip and refill.
const MAX_GLYPHS: usize = 7;

/// The parsed, measured glyph set of a bar.
///
/// A descriptor lists the glyphs by position, one grapheme cluster each:
///
/// | position | role        | required |
/// |----------|-------------|----------|
/// | 0        | left cap    | yes      |
/// | 1        | fill        | yes      |
/// | 2        | tip         | yes      |
/// | 3        | empty       | yes      |
/// | 4        | right cap   | yes      |
/// | 5        | reverse tip | no, `<`  |
/// | 6        | refill      | no, fill |
///
/// # Examples
///
/// ```rust
/// use barline::style::StyleSpec;
///
/// let style = StyleSpec::parse("[=>-]")?;
/// assert_eq!(style.tip(false).as_str(), ">");
/// assert_eq!(style.tip(true).as_str(), "<");
/// assert_eq!(style.refill().as_str(), "=");
///
/// assert!(StyleSpec::parse("[=]").is_err());
/// # Ok::<(), barline::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleSpec {
    left: Glyph,
    fill: Glyph,
    tip: Glyph,
    empty: Glyph,
    right: Glyph,
    reverse_tip: Glyph,
    refill: Glyph,
    ellipsis: Glyph,
}

impl Default for StyleSpec {
    fn default() -> Self {
        Self {
            left: Glyph::from('['),
            fill: Glyph::from('='),
            tip: Glyph::from('>'),
            empty: Glyph::from('-'),
            right: Glyph::from(']'),
            reverse_tip: Glyph::from(DEFAULT_REVERSE_TIP),
            refill: Glyph::from('+'),
            ellipsis: Glyph::ellipsis(),
        }
    }
}

impl StyleSpec {
    /// Parses a style descriptor.
    ///
    /// Fails if the descriptor is empty, has fewer than 5 or more than 7
    /// grapheme clusters, or contains a control character or a zero-width
    /// cluster.
    pub fn parse(descriptor: &str) -> Result<Self> {
        if descriptor.is_empty() {
            return Err(Error::EmptyStyle);
        }

        let graphemes: Vec<&str> = descriptor.graphemes(true).collect();
        if graphemes.len() < MANDATORY_GLYPHS {
            return Err(Error::TooFewGlyphs {
                found: graphemes.len(),
            });
        }
        if graphemes.len() > MAX_GLYPHS {
            return Err(Error::TooManyGlyphs {
                found: graphemes.len(),
            });
        }

        if let Some((position, glyph)) = graphemes
            .iter()
            .enumerate()
            .find(|(_, g)| !is_printable(g))
        {
            return Err(Error::InvalidGlyph {
                position,
                glyph: glyph.to_string(),
            });
        }

        let mut glyphs = graphemes.into_iter().map(Glyph::new);
        // The length check above guarantees the mandatory positions.
        let (Some(left), Some(fill), Some(tip), Some(empty), Some(right)) = (
            glyphs.next(),
            glyphs.next(),
            glyphs.next(),
            glyphs.next(),
            glyphs.next(),
        ) else {
            return Err(Error::TooFewGlyphs { found: 0 });
        };
        let reverse_tip = glyphs
            .next()
            .unwrap_or_else(|| Glyph::from(DEFAULT_REVERSE_TIP));
        let refill = glyphs.next().unwrap_or_else(|| fill.clone());

        debug!(
            "Parsed bar style {:?} (cap width {}, wide interior: {})",
            descriptor,
            left.width() + right.width(),
            [&fill, &tip, &empty, &reverse_tip, &refill]
                .iter()
                .any(|g| g.is_wide())
        );

        Ok(Self {
            left,
            fill,
            tip,
            empty,
            right,
            reverse_tip,
            refill,
            ellipsis: Glyph::ellipsis(),
        })
    }

    /// Replaces the refill glyph.
    pub fn with_refill(mut self, refill: Glyph) -> Self {
        self.refill = refill;
        self
    }

    /// Left cap.
    pub fn left(&self) -> &Glyph {
        &self.left
    }

    /// Right cap.
    pub fn right(&self) -> &Glyph {
        &self.right
    }

    /// Glyph for freshly achieved progress.
    pub fn fill(&self) -> &Glyph {
        &self.fill
    }

    /// Glyph for the leading edge of progress, facing the fill direction.
    pub fn tip(&self, reverse: bool) -> &Glyph {
        if reverse {
            &self.reverse_tip
        } else {
            &self.tip
        }
    }

    /// Glyph for progress not yet achieved.
    pub fn empty(&self) -> &Glyph {
        &self.empty
    }

    /// Glyph for the refill overlay.
    pub fn refill(&self) -> &Glyph {
        &self.refill
    }

    /// Glyph drawn when the bar is cut short.
    pub fn ellipsis(&self) -> &Glyph {
        &self.ellipsis
    }

    /// Combined width of both caps.
    pub fn cap_width(&self) -> usize {
        self.left.width() + self.right.width()
    }
}

impl FromStr for StyleSpec {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}
