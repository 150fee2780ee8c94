#![allow(dead_code)]

use barline::{
    BarFiller, ColumnStream, Filler, FillerBuilder, Glyph, ProgressState, RenderRequest,
    StyleSpec,
};
use barline::width::text_width;

// Common test constants
pub const WIDE_TIP_STYLE: &str = "[=の-]";
pub const ASCII_STYLE: &str = "|#>.|";

/// One row of the draw table.
#[derive(Debug, Clone, Copy)]
pub struct DrawCase {
    pub name: &'static str,
    pub style: &'static str,
    pub total: i64,
    pub current: i64,
    pub bar_width: usize,
    pub trim: bool,
    pub reverse: bool,
    pub refill: i64,
    pub want: &'static str,
}

impl DrawCase {
    /// A case with the default style and no options.
    pub fn new(name: &'static str, total: i64, current: i64, want: &'static str) -> Self {
        Self {
            name,
            style: "",
            total,
            current,
            bar_width: 0,
            trim: false,
            reverse: false,
            refill: 0,
            want,
        }
    }

    pub fn trim(mut self) -> Self {
        self.trim = true;
        self
    }

    pub fn reverse(mut self) -> Self {
        self.reverse = true;
        self
    }

    pub fn refill(mut self, refill: i64) -> Self {
        self.refill = refill;
        self
    }

    pub fn bar_width(mut self, width: usize) -> Self {
        self.bar_width = width;
        self
    }

    pub fn style(mut self, style: &'static str) -> Self {
        self.style = style;
        self
    }
}

// === Filler Helpers ===

/// Creates a refillable filler for a table case, like a bar would.
pub fn create_case_filler(style: &str, reverse: bool) -> BarFiller {
    let mut builder = FillerBuilder::new().reverse(reverse).refillable(true);
    if !style.is_empty() {
        builder = builder.style(style);
    }
    builder.build().expect("Failed to build filler")
}

/// Creates a default basic filler.
pub fn create_test_filler() -> BarFiller {
    FillerBuilder::new().build().expect("Failed to build filler")
}

/// Creates a default filler filling from right to left.
pub fn create_reverse_filler() -> BarFiller {
    FillerBuilder::new()
        .reverse(true)
        .build()
        .expect("Failed to build filler")
}

/// Creates a filler with the given style.
pub fn create_styled_filler(style: &str) -> BarFiller {
    FillerBuilder::new()
        .style(style)
        .build()
        .expect("Failed to build filler")
}

/// Draws a table case at the given terminal width.
pub fn draw_case(term_width: usize, case: &DrawCase) -> String {
    let mut filler = create_case_filler(case.style, case.reverse);
    if case.refill > 0 {
        if let Some(refillable) = filler.as_refillable_mut() {
            refillable.set_refill(case.refill);
        }
    }
    let request = RenderRequest::new(term_width)
        .requested_width(case.bar_width)
        .trim_space(case.trim);
    filler.render(&ProgressState::new(case.total, case.current), &request)
}

/// Renders an interior stream to text.
pub fn stream_text(stream: &ColumnStream<'_>) -> String {
    let mut out = String::new();
    stream.write_to(&mut out);
    out
}

/// Reverses a string char by char.
pub fn mirror_text(text: &str) -> String {
    text.chars().rev().collect()
}

// === Assertion Helpers ===

/// Asserts that a rendered line fits the request.
pub fn assert_fits(line: &str, request: &RenderRequest) {
    assert!(
        text_width(line) <= request.effective_width(),
        "{:?} is {} columns, budget {}",
        line,
        text_width(line),
        request.effective_width()
    );
    assert!(!line.contains('\n'), "{:?} contains a newline", line);
}

/// Asserts that a stream only uses glyphs of `style` and the ellipsis.
pub fn assert_uses_style_glyphs(stream: &ColumnStream<'_>, style: &StyleSpec) {
    let allowed: Vec<&Glyph> = vec![
        style.fill(),
        style.refill(),
        style.tip(false),
        style.tip(true),
        style.empty(),
        style.ellipsis(),
    ];
    for segment in stream.segments() {
        assert!(
            allowed.contains(&segment.glyph()),
            "unexpected glyph {:?}",
            segment.glyph()
        );
    }
}

/// Counts the columns of each role in a stream: (refill, fill, tip, empty).
pub fn role_counts(stream: &ColumnStream<'_>, style: &StyleSpec) -> (usize, usize, usize, usize) {
    let tip = stream.count_of(style.tip(false)) + stream.count_of(style.tip(true));
    (
        stream.count_of(style.refill()),
        stream.count_of(style.fill()),
        tip,
        stream.count_of(style.empty()),
    )
}
