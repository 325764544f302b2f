use std::cell::Cell;
use std::rc::Rc;

use crate::foundation::core::Viewport;
use crate::foundation::error::FolioResult;
use crate::runtime::registry::{CallbackSet, Subscription};

/// Scroll container state delivered to scroll/resize listeners.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct ViewportState {
    /// Current viewport size.
    pub viewport: Viewport,
    /// Current vertical scroll offset.
    pub scroll_y: f64,
}

/// Scroll and resize event source for one page.
#[derive(Clone)]
pub struct ViewportEvents {
    state: Rc<Cell<ViewportState>>,
    listeners: CallbackSet<ViewportState>,
}

impl ViewportEvents {
    /// Create an event source at scroll offset 0.
    pub fn new(viewport: Viewport) -> Self {
        Self {
            state: Rc::new(Cell::new(ViewportState {
                viewport,
                scroll_y: 0.0,
            })),
            listeners: CallbackSet::new(),
        }
    }

    /// Current state.
    pub fn state(&self) -> ViewportState {
        self.state.get()
    }

    /// Subscribe to scroll and resize events.
    ///
    /// The listener is invoked once immediately with the current state so derived values are
    /// correct on mount; an error from that first call aborts the subscription.
    pub fn subscribe<F>(
        &self,
        label: impl Into<String>,
        mut listener: F,
    ) -> FolioResult<Subscription>
    where
        F: FnMut(&ViewportState) -> FolioResult<()> + 'static,
    {
        listener(&self.state())?;
        let label = label.into();
        tracing::debug!(listener = %label, "viewport listener registered");
        Ok(self.listeners.insert(label, listener))
    }

    /// Emit a scroll event; negative or non-finite offsets clamp to 0.
    pub fn scroll_to(&self, scroll_y: f64) -> usize {
        let scroll_y = if scroll_y.is_finite() {
            scroll_y.max(0.0)
        } else {
            0.0
        };
        let mut s = self.state.get();
        s.scroll_y = scroll_y;
        self.state.set(s);
        self.listeners.dispatch(&s)
    }

    /// Emit a resize event.
    pub fn resize(&self, viewport: Viewport) -> usize {
        let mut s = self.state.get();
        s.viewport = viewport;
        self.state.set(s);
        self.listeners.dispatch(&s)
    }

    /// Re-deliver the current state after a layout change moved tracked elements.
    pub fn refresh(&self) -> usize {
        self.listeners.dispatch(&self.state.get())
    }

    /// Registered listeners.
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/runtime/events.rs"]
mod tests;
