use crate::foundation::core::FrameIndex;
use crate::foundation::error::FolioResult;
use crate::runtime::registry::{CallbackSet, Subscription};

/// Timing information passed to per-frame callbacks.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameTick {
    /// Frame being produced.
    pub frame: FrameIndex,
    /// Seconds elapsed since the previous frame.
    pub dt_secs: f64,
}

/// Display-refresh callback registry.
///
/// Views register work here while mounted and drop the returned [`Subscription`] on unmount,
/// so no per-frame work outlives its owner.
#[derive(Clone)]
pub struct FrameLoop {
    callbacks: CallbackSet<FrameTick>,
}

impl FrameLoop {
    /// Create an empty loop.
    pub fn new() -> Self {
        Self {
            callbacks: CallbackSet::new(),
        }
    }

    /// Register `callback` to run once per frame until the subscription is dropped.
    pub fn register<F>(&self, label: impl Into<String>, callback: F) -> Subscription
    where
        F: FnMut(&FrameTick) -> FolioResult<()> + 'static,
    {
        let label = label.into();
        tracing::debug!(callback = %label, "frame callback registered");
        self.callbacks.insert(label, callback)
    }

    /// Run every live callback for `tick`; returns how many ran.
    pub fn tick(&self, tick: FrameTick) -> usize {
        self.callbacks.dispatch(&tick)
    }

    /// Registered callbacks, including disabled ones.
    pub fn len(&self) -> usize {
        self.callbacks.len()
    }

    /// `true` when nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Callbacks disabled after returning an error.
    pub fn disabled_len(&self) -> usize {
        self.callbacks.disabled_len()
    }
}

impl Default for FrameLoop {
    fn default() -> Self {
        Self::new()
    }
}
