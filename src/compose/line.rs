//! Assembling padding, caps and interior into the final segment.

use crate::filler::Filler;
use crate::frame::{ProgressState, RenderRequest};
use tracing::trace;

/// Lays out one bar segment: `[pad] left-cap interior right-cap [pad]`.
///
/// The result never spans more columns than the request's effective width.
/// When there isn't room for both caps the bar degrades:
///
/// - with trimmed space, nothing is drawn;
/// - otherwise the two padding spaces are kept if they fit, or else a lone
///   ellipsis marks that a bar was dropped.
#[derive(Debug, Clone, Copy, Default)]
pub struct LineComposer;

impl LineComposer {
    /// Renders the segment into a new string.
    pub fn compose<F>(filler: &F, state: &ProgressState, request: &RenderRequest) -> String
    where
        F: Filler + ?Sized,
    {
        let mut line = String::with_capacity(request.effective_width());
        Self::compose_into(filler, state, request, &mut line);
        line
    }

    /// Appends the segment to `out`.
    pub fn compose_into<F>(
        filler: &F,
        state: &ProgressState,
        request: &RenderRequest,
        out: &mut String,
    ) where
        F: Filler + ?Sized,
    {
        let style = filler.style();
        let width = request.effective_width();
        let pad = request.outer_pad();
        let bar_width = request.bar_width();

        if bar_width < style.cap_width() {
            trace!("No room for a bar in {} columns", width);
            Self::fallback(filler, request, out);
            return;
        }

        push_spaces(out, pad);
        out.push_str(style.left().as_str());
        filler
            .stream(state, bar_width - style.cap_width())
            .write_to(out);
        out.push_str(style.right().as_str());
        push_spaces(out, pad);
    }

    fn fallback<F>(filler: &F, request: &RenderRequest, out: &mut String)
    where
        F: Filler + ?Sized,
    {
        if request.is_trimmed() {
            return;
        }
        let width = request.effective_width();
        let pad = request.outer_pad();
        let ellipsis = filler.style().ellipsis();
        if width >= 2 * pad {
            push_spaces(out, 2 * pad);
        } else if ellipsis.width() <= width {
            out.push_str(ellipsis.as_str());
        }
    }
}

fn push_spaces(out: &mut String, count: usize) {
    out.extend(std::iter::repeat(' ').take(count));
}
