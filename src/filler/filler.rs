//! Fill arithmetic and the filler variants.

use super::stream::ColumnStream;
use crate::compose::LineComposer;
use crate::frame::{ProgressState, RenderRequest};
use crate::style::StyleSpec;
use tracing::trace;

/// How the interior slots of a bar are shared between glyph roles.
///
/// Every slot holds one glyph, so the four counts always add up to the
/// number of slots the layout was computed for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FillLayout {
    /// Slots drawn with the refill glyph, starting at the origin.
    pub refill: usize,
    /// Slots drawn with the fill glyph, after the refill run.
    pub fill: usize,
    /// Whether the tip glyph follows the fill run.
    pub tip: bool,
    /// Slots drawn with the empty glyph.
    pub empty: usize,
}

impl FillLayout {
    /// Splits `slots` for `state`, drawing an overlay up to `refill_to`.
    ///
    /// The filled share is rounded half away from zero. The tip takes the
    /// last filled slot whenever the bar is neither empty nor full, shortening
    /// the refill run if it reaches that far.
    pub fn compute(state: &ProgressState, refill_to: i64, slots: usize) -> Self {
        let total = state.total();
        let filled = scale(total, state.current(), slots);
        let tip = filled > 0 && filled < slots;
        let solid = filled - usize::from(tip);
        let refill = scale(total, refill_to.clamp(0, state.current()), slots).min(solid);

        Self {
            refill,
            fill: solid - refill,
            tip,
            empty: slots - filled,
        }
    }

    /// Number of slots the layout covers.
    pub fn slots(&self) -> usize {
        self.refill + self.fill + usize::from(self.tip) + self.empty
    }
}

/// Scales `value` out of `total` onto `slots`.
fn scale(total: i64, value: i64, slots: usize) -> usize {
    if total <= 0 || value <= 0 {
        return 0;
    }
    if value >= total {
        return slots;
    }
    let exact = slots as f64 * value as f64 / total as f64;
    (exact.round() as usize).min(slots)
}

/// Builds the interior stream for one frame.
fn interior<'a>(
    style: &'a StyleSpec,
    reverse: bool,
    state: &ProgressState,
    refill_to: i64,
    slots: usize,
) -> ColumnStream<'a> {
    let layout = FillLayout::compute(state, refill_to, slots);

    let mut stream = ColumnStream::new();
    stream.push(style.refill(), layout.refill);
    stream.push(style.fill(), layout.fill);
    if layout.tip {
        stream.push(style.tip(reverse), 1);
    }
    stream.push(style.empty(), layout.empty);

    if stream.fit(slots, style.ellipsis()) {
        trace!("Bar interior cut to {} columns", slots);
    }
    if reverse {
        stream.mirror();
    }
    stream
}

/// Something that can draw the interior of a bar.
///
/// Implementations must be pure: the same inputs always produce the same
/// stream.
pub trait Filler {
    /// The glyph set, caps included.
    fn style(&self) -> &StyleSpec;

    /// Computes the interior for `state`, spread over `slots` glyph slots.
    fn stream(&self, state: &ProgressState, slots: usize) -> ColumnStream<'_>;

    /// Renders a whole bar segment for one frame.
    fn render(&self, state: &ProgressState, request: &RenderRequest) -> String {
        LineComposer::compose(self, state, request)
    }
}

/// A filler that draws fill, tip and empty glyphs, plus the refill overlay
/// carried by each frame's [`ProgressState`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BasicFiller {
    style: StyleSpec,
    reverse: bool,
}

impl BasicFiller {
    /// Creates a filler. `reverse` mirrors the fill direction.
    pub fn new(style: StyleSpec, reverse: bool) -> Self {
        Self { style, reverse }
    }

    /// Whether the bar fills from right to left.
    pub fn is_reverse(&self) -> bool {
        self.reverse
    }
}

impl Filler for BasicFiller {
    fn style(&self) -> &StyleSpec {
        &self.style
    }

    fn stream(&self, state: &ProgressState, slots: usize) -> ColumnStream<'_> {
        interior(&self.style, self.reverse, state, state.refill_to(), slots)
    }
}

/// A filler that also remembers a refill target between frames.
///
/// The stored target is used for frames whose state carries no overlay of
/// its own. Updating it takes `&mut self`, so callers sharing a filler
/// between threads serialize updates against draws through their own lock.
///
/// # Examples
///
/// ```rust
/// use barline::filler::{Filler, FillerBuilder};
/// use barline::frame::{ProgressState, RenderRequest};
///
/// let mut filler = FillerBuilder::new().build_refillable()?;
/// filler.set_refill(33);
///
/// let line = filler.render(
///     &ProgressState::new(100, 40),
///     &RenderRequest::new(12).trim_space(true),
/// );
/// assert_eq!(line, "[+++>------]");
/// # Ok::<(), barline::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RefillFiller {
    basic: BasicFiller,
    refill: i64,
}

impl RefillFiller {
    /// Creates a filler with no refill target.
    pub fn new(style: StyleSpec, reverse: bool) -> Self {
        Self {
            basic: BasicFiller::new(style, reverse),
            refill: 0,
        }
    }

    /// Sets the refill target. Zero or less removes the overlay.
    pub fn set_refill(&mut self, upto: i64) {
        self.refill = upto.max(0);
    }

    /// The stored refill target.
    pub fn refill(&self) -> i64 {
        self.refill
    }

    /// Whether the bar fills from right to left.
    pub fn is_reverse(&self) -> bool {
        self.basic.reverse
    }
}

impl Filler for RefillFiller {
    fn style(&self) -> &StyleSpec {
        &self.basic.style
    }

    fn stream(&self, state: &ProgressState, slots: usize) -> ColumnStream<'_> {
        let refill_to = match state.refill_to() {
            0 => self.refill,
            frame => frame,
        };
        interior(&self.basic.style, self.basic.reverse, state, refill_to, slots)
    }
}

/// A filler chosen from configuration at build time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BarFiller {
    /// No stored refill target.
    Basic(BasicFiller),
    /// Stores a refill target between frames.
    Refillable(RefillFiller),
}

impl BarFiller {
    /// Returns the refillable filler, if this is one.
    pub fn as_refillable_mut(&mut self) -> Option<&mut RefillFiller> {
        match self {
            BarFiller::Refillable(filler) => Some(filler),
            BarFiller::Basic(_) => None,
        }
    }
}

impl From<BasicFiller> for BarFiller {
    fn from(filler: BasicFiller) -> Self {
        BarFiller::Basic(filler)
    }
}

impl From<RefillFiller> for BarFiller {
    fn from(filler: RefillFiller) -> Self {
        BarFiller::Refillable(filler)
    }
}

impl Filler for BarFiller {
    fn style(&self) -> &StyleSpec {
        match self {
            BarFiller::Basic(filler) => filler.style(),
            BarFiller::Refillable(filler) => filler.style(),
        }
    }

    fn stream(&self, state: &ProgressState, slots: usize) -> ColumnStream<'_> {
        match self {
            BarFiller::Basic(filler) => filler.stream(state, slots),
            BarFiller::Refillable(filler) => filler.stream(state, slots),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout(total: i64, current: i64, refill_to: i64, slots: usize) -> FillLayout {
        FillLayout::compute(&ProgressState::new(total, current), refill_to, slots)
    }

    fn draw(filler: &impl Filler, state: &ProgressState, slots: usize) -> String {
        let mut out = String::new();
        filler.stream(state, slots).write_to(&mut out);
        out
    }

    #[test]
    fn test_layout_rounds_and_places_tip() {
        // 98 * 33 / 100 = 32.34
        assert_eq!(
            layout(100, 33, 0, 98),
            FillLayout {
                refill: 0,
                fill: 31,
                tip: true,
                empty: 66
            }
        );
        // 96 / 100 rounds up to one slot, taken by the tip.
        assert_eq!(
            layout(100, 1, 0, 96),
            FillLayout {
                refill: 0,
                fill: 0,
                tip: true,
                empty: 95
            }
        );
    }

    #[test]
    fn test_layout_bounds() {
        assert_eq!(layout(100, 0, 0, 10).empty, 10);
        assert!(!layout(100, 0, 0, 10).tip);

        let full = layout(100, 100, 0, 10);
        assert_eq!(full.fill, 10);
        assert!(!full.tip);
        assert_eq!(full.empty, 0);

        assert_eq!(layout(0, 0, 0, 10).empty, 10);
        assert_eq!(layout(100, 50, 0, 0).slots(), 0);
    }

    #[test]
    fn test_layout_refill_keeps_tip_visible() {
        let l = layout(100, 33, 33, 96);
        assert_eq!(l.refill, 31);
        assert_eq!(l.fill, 0);
        assert!(l.tip);

        let l = layout(100, 40, 33, 98);
        assert_eq!(l.refill, 32);
        assert_eq!(l.fill, 6);
        assert!(l.tip);
    }

    #[test]
    fn test_layout_refill_clamped_to_current() {
        assert_eq!(layout(100, 40, 90, 98), layout(100, 40, 40, 98));
    }

    #[test]
    fn test_scale_half_rounds_up() {
        assert_eq!(scale(4, 1, 2), 1);
        assert_eq!(scale(4, 1, 6), 2);
        assert_eq!(scale(i64::MAX, i64::MAX - 1, 100), 100);
    }

    #[test]
    fn test_basic_filler_reverse_swaps_tip() {
        let forward = BasicFiller::new(StyleSpec::default(), false);
        let reverse = BasicFiller::new(StyleSpec::default(), true);
        let state = ProgressState::new(10, 4);

        assert_eq!(draw(&forward, &state, 10), "===>------");
        assert_eq!(draw(&reverse, &state, 10), "------<===");
    }

    #[test]
    fn test_refill_filler_prefers_frame_overlay() {
        let mut filler = RefillFiller::new(StyleSpec::default(), false);
        filler.set_refill(2);
        assert_eq!(draw(&filler, &ProgressState::new(10, 6), 10), "++===>----");
        assert_eq!(
            draw(&filler, &ProgressState::new(10, 6).with_refill(4), 10),
            "++++=>----"
        );

        filler.set_refill(-3);
        assert_eq!(filler.refill(), 0);
        assert_eq!(draw(&filler, &ProgressState::new(10, 6), 10), "=====>----");
    }

    #[test]
    fn test_bar_filler_dispatch() {
        let mut filler = BarFiller::from(RefillFiller::new(StyleSpec::default(), false));
        if let Some(refillable) = filler.as_refillable_mut() {
            refillable.set_refill(5);
        }
        assert_eq!(draw(&filler, &ProgressState::new(10, 10), 10), "+++++=====");

        let mut basic = BarFiller::from(BasicFiller::new(StyleSpec::default(), false));
        assert!(basic.as_refillable_mut().is_none());
    }
}
