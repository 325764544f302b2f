use crate::animation::spring::{Spring, SpringConfig};
use crate::foundation::error::FolioResult;
use crate::runtime::frame_loop::{FrameLoop, FrameTick};
use crate::runtime::registry::Subscription;
use crate::runtime::signal::{MotionValue, Signal};

/// A spring-smoothed copy of another signal, stepped by the frame loop while mounted.
///
/// The output starts at the source's current value and follows it every frame. Dropping the
/// `Smoothed` unregisters its frame callback.
#[derive(Debug)]
pub struct Smoothed {
    output: MotionValue,
    _frame: Subscription,
}

impl Smoothed {
    /// Mount a spring following `source` on `frame_loop`.
    pub fn mount<S>(
        frame_loop: &FrameLoop,
        label: impl Into<String>,
        source: S,
        config: SpringConfig,
    ) -> FolioResult<Self>
    where
        S: Signal + 'static,
    {
        let mut spring = Spring::new(config, source.get())?;
        let output = MotionValue::new(spring.value());
        let out = output.clone();
        let frame = frame_loop.register(label, move |tick: &FrameTick| {
            spring.set_target(source.get());
            out.set(spring.step(tick.dt_secs));
            Ok(())
        });
        Ok(Self {
            output,
            _frame: frame,
        })
    }

    /// Current smoothed value.
    pub fn get(&self) -> f64 {
        self.output.get()
    }

    /// Shared handle to the smoothed output.
    pub fn signal(&self) -> MotionValue {
        self.output.clone()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/runtime/smoothed.rs"]
mod tests;
