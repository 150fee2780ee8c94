//! Run-length encoded bar interiors.

use crate::style::Glyph;

/// A run of one glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment<'a> {
    glyph: &'a Glyph,
    repeat: usize,
}

impl<'a> Segment<'a> {
    /// Creates a run of `repeat` copies of `glyph`.
    pub fn new(glyph: &'a Glyph, repeat: usize) -> Self {
        Self { glyph, repeat }
    }

    /// The repeated glyph.
    pub fn glyph(&self) -> &'a Glyph {
        self.glyph
    }

    /// How many times the glyph repeats.
    pub fn repeat(&self) -> usize {
        self.repeat
    }

    /// Columns the whole run occupies.
    pub fn column_width(&self) -> usize {
        self.glyph.width() * self.repeat
    }
}

/// The interior of a bar as an ordered list of glyph runs, read left to
/// right.
///
/// Adjacent runs never share a glyph and no run is empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnStream<'a> {
    segments: Vec<Segment<'a>>,
}

impl<'a> ColumnStream<'a> {
    /// Creates an empty stream.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `repeat` copies of `glyph`, merging with the last run when it
    /// holds the same glyph.
    pub fn push(&mut self, glyph: &'a Glyph, repeat: usize) {
        if repeat == 0 {
            return;
        }
        match self.segments.last_mut() {
            Some(last) if last.glyph == glyph => last.repeat += repeat,
            _ => self.segments.push(Segment::new(glyph, repeat)),
        }
    }

    /// The runs in display order.
    pub fn segments(&self) -> &[Segment<'a>] {
        &self.segments
    }

    /// Total columns the stream occupies.
    pub fn columns(&self) -> usize {
        self.segments.iter().map(Segment::column_width).sum()
    }

    /// Number of glyphs in the stream.
    pub fn glyph_count(&self) -> usize {
        self.segments.iter().map(Segment::repeat).sum()
    }

    /// Number of times `glyph` appears in the stream.
    pub fn count_of(&self, glyph: &Glyph) -> usize {
        self.segments
            .iter()
            .filter(|s| s.glyph == glyph)
            .map(Segment::repeat)
            .sum()
    }

    /// Returns `true` if the stream holds no glyph.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Reverses the display order.
    pub fn mirror(&mut self) {
        self.segments.reverse();
    }

    /// Cuts the stream down to `budget` columns if it is wider.
    ///
    /// The longest prefix that leaves room for `ellipsis` is kept and the
    /// ellipsis is appended. A wide glyph that straddles the cut is dropped
    /// whole, so the result may end up narrower than `budget`. Returns `true`
    /// if the stream was cut.
    pub fn fit(&mut self, budget: usize, ellipsis: &'a Glyph) -> bool {
        if self.columns() <= budget {
            return false;
        }

        let limit = budget.saturating_sub(ellipsis.width());
        let mut fitted = ColumnStream::new();
        let mut used = 0;
        for segment in &self.segments {
            let width = segment.glyph.width();
            let take = segment.repeat.min((limit - used) / width);
            fitted.push(segment.glyph, take);
            used += take * width;
            if take < segment.repeat {
                break;
            }
        }
        if ellipsis.width() <= budget {
            fitted.push(ellipsis, 1);
        }

        *self = fitted;
        true
    }

    /// Appends the glyphs to `out`.
    pub fn write_to(&self, out: &mut String) {
        for segment in &self.segments {
            for _ in 0..segment.repeat {
                out.push_str(segment.glyph.as_str());
            }
        }
    }
}
