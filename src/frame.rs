//! Per-frame inputs: the progress to show and the room to show it in.
//!
//! Both types are plain values built fresh by the caller for every frame.
//! Out-of-range numbers are accepted and normalized when read, so building a
//! frame never fails.
//!
//! # Examples
//!
//! ```rust
//! use barline::frame::{ProgressState, RenderRequest};
//!
//! let state = ProgressState::new(100, 250).with_refill(400);
//! assert_eq!(state.current(), 100);
//! assert_eq!(state.refill_to(), 100);
//!
//! let request = RenderRequest::new(80).requested_width(60);
//! assert_eq!(request.bar_width(), 60);
//! assert_eq!(request.effective_width(), 62);
//! ```

/// Progress of one bar at the time of a frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProgressState {
    total: i64,
    current: i64,
    refill_to: i64,
}

impl ProgressState {
    /// Creates a state with no refill overlay.
    pub fn new(total: i64, current: i64) -> Self {
        Self {
            total,
            current,
            refill_to: 0,
        }
    }

    /// Sets the end of the refill overlay, measured from the origin.
    pub fn with_refill(mut self, refill_to: i64) -> Self {
        self.refill_to = refill_to;
        self
    }

    /// Total amount of work, never negative.
    pub fn total(&self) -> i64 {
        self.total.max(0)
    }

    /// Work done, clamped to `0..=total`.
    pub fn current(&self) -> i64 {
        self.current.clamp(0, self.total())
    }

    /// End of the refill overlay, clamped to `0..=current`. Zero means no
    /// overlay.
    pub fn refill_to(&self) -> i64 {
        self.refill_to.clamp(0, self.current())
    }

    /// Returns `true` once all the work is done.
    ///
    /// A zero total never completes: it is drawn as a bar with no progress.
    pub fn is_complete(&self) -> bool {
        self.total() > 0 && self.current() >= self.total()
    }
}

/// Width budget and layout options for one frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderRequest {
    available_width: usize,
    requested_width: usize,
    trim_space: bool,
}

impl RenderRequest {
    /// Creates a request that may use all of `available_width` columns.
    pub fn new(available_width: usize) -> Self {
        Self {
            available_width,
            ..Self::default()
        }
    }

    /// Creates a request from signed widths, treating negatives as zero.
    pub fn from_signed(available_width: i64, requested_width: i64) -> Self {
        let clamp = |w: i64| usize::try_from(w).unwrap_or(0);
        Self::new(clamp(available_width)).requested_width(clamp(requested_width))
    }

    /// Caps the width of the segment. Zero means "use everything available".
    pub fn requested_width(mut self, width: usize) -> Self {
        self.requested_width = width;
        self
    }

    /// Drops the single space normally drawn on each side of the bar.
    pub fn trim_space(mut self, trim: bool) -> Self {
        self.trim_space = trim;
        self
    }

    /// Columns the terminal has for this segment.
    pub fn available_width(&self) -> usize {
        self.available_width
    }

    /// Whether the outer padding is suppressed.
    pub fn is_trimmed(&self) -> bool {
        self.trim_space
    }

    /// Columns the rendered segment may occupy, outer padding included.
    ///
    /// A requested width bounds the bracketed bar itself; the padding is
    /// drawn around it as long as the terminal has room.
    pub fn effective_width(&self) -> usize {
        match self.requested_width {
            0 => self.available_width,
            w => w.saturating_add(2 * self.outer_pad()).min(self.available_width),
        }
    }

    /// Columns left for the caps and the interior once padding is taken out.
    pub fn bar_width(&self) -> usize {
        self.effective_width().saturating_sub(2 * self.outer_pad())
    }

    /// Spaces drawn on each side of the bar.
    pub fn outer_pad(&self) -> usize {
        if self.trim_space {
            0
        } else {
            1
        }
    }
}
