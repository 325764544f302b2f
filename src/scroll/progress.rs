use crate::foundation::core::{ElementBox, Viewport};
use crate::foundation::error::FolioResult;
use crate::runtime::events::{ViewportEvents, ViewportState};
use crate::runtime::registry::Subscription;
use crate::runtime::signal::{MotionValue, NodeRef, Signal};
use crate::scroll::offset::ScrollOffset;

/// Progress in `[0, 1]` of `scroll_y` between the two offset events of `element`.
///
/// Missing or zero-height elements, and degenerate spans, report 0.
pub fn scroll_progress(
    element: Option<ElementBox>,
    viewport: Viewport,
    scroll_y: f64,
    offset: ScrollOffset,
) -> f64 {
    let Some(element) = element else {
        return 0.0;
    };
    if element.height <= 0.0 || !scroll_y.is_finite() {
        return 0.0;
    }
    let (s0, s1) = offset.span(element, viewport);
    let span = s1 - s0;
    if !span.is_finite() || span.abs() < f64::EPSILON {
        return 0.0;
    }
    ((scroll_y - s0) / span).clamp(0.0, 1.0)
}

/// Mounted scroll progress tracker for one element.
///
/// Listens to scroll and resize events for as long as it lives; dropping it releases the
/// listener and freezes the last published progress.
#[derive(Debug)]
pub struct ScrollProgress {
    progress: MotionValue,
    _listener: Subscription,
}

impl ScrollProgress {
    /// Start tracking `node` with `offset`.
    pub fn mount(
        events: &ViewportEvents,
        label: impl Into<String>,
        node: NodeRef,
        offset: ScrollOffset,
    ) -> FolioResult<Self> {
        let progress = MotionValue::new(0.0);
        let out = progress.clone();
        let listener = events.subscribe(label, move |s: &ViewportState| {
            out.set(scroll_progress(node.get(), s.viewport, s.scroll_y, offset));
            Ok(())
        })?;
        Ok(Self {
            progress,
            _listener: listener,
        })
    }

    /// Latest progress.
    pub fn get(&self) -> f64 {
        self.progress.get()
    }

    /// Shared handle to the progress value.
    pub fn signal(&self) -> MotionValue {
        self.progress.clone()
    }
}

impl Signal for ScrollProgress {
    fn get(&self) -> f64 {
        ScrollProgress::get(self)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scroll/progress.rs"]
mod tests;
