use crate::animation::anim::{Anim, Keyframes, delay};
use crate::animation::ease::Ease;
use crate::foundation::core::{FrameIndex, Fps};
use crate::foundation::error::{FolioError, FolioResult};
use crate::view::style::StyleProps;

/// Tween duration used when a transition only names a delay.
pub const DEFAULT_DURATION_SECS: f64 = 0.3;

/// Timing of a one-shot entrance tween.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Transition {
    /// Tween length in seconds.
    pub duration_secs: f64,
    /// Wait after the trigger before the tween starts.
    #[serde(default)]
    pub delay_secs: f64,
    /// Easing applied across the tween.
    #[serde(default = "default_ease")]
    pub ease: Ease,
}

fn default_ease() -> Ease {
    Ease::EaseInOut
}

impl Transition {
    /// Tween of `duration_secs` starting after `delay_secs`, eased with CSS `ease-in-out`.
    pub fn new(duration_secs: f64, delay_secs: f64) -> Self {
        Self {
            duration_secs,
            delay_secs,
            ease: default_ease(),
        }
    }

    /// Default-length tween starting after `delay_secs`.
    pub fn delayed(delay_secs: f64) -> Self {
        Self::new(DEFAULT_DURATION_SECS, delay_secs)
    }

    /// Copy with a different ease.
    pub fn with_ease(self, ease: Ease) -> Self {
        Self { ease, ..self }
    }

    /// Durations must be finite and non-negative.
    pub fn validate(&self) -> FolioResult<()> {
        let ok = |v: f64| v.is_finite() && v >= 0.0;
        if !ok(self.duration_secs) || !ok(self.delay_secs) {
            return Err(FolioError::animation(format!(
                "transition timings must be finite and >= 0 (duration {}, delay {})",
                self.duration_secs, self.delay_secs
            )));
        }
        Ok(())
    }

    /// Frame at which the tween is complete, relative to the trigger.
    pub fn end_frame(&self, fps: Fps) -> u64 {
        fps.secs_to_frames_round(self.delay_secs) + fps.secs_to_frames_round(self.duration_secs)
    }
}

/// Lifecycle of an entrance animation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum EntranceState {
    /// Not triggered; the element shows its `from` style.
    Pending,
    /// Triggered at `at_frame`; the tween runs from there.
    Revealed {
        /// Frame of the trigger.
        at_frame: FrameIndex,
    },
}

/// One-shot tween from a hidden style to a resting style.
///
/// Triggering is idempotent: later calls keep the first trigger frame, so a latched
/// intersection signal can be polled every frame.
#[derive(Clone, Debug)]
pub struct Entrance {
    from: StyleProps,
    to: StyleProps,
    transition: Transition,
    state: EntranceState,
}

impl Entrance {
    /// Build a pending entrance.
    pub fn new(from: StyleProps, to: StyleProps, transition: Transition) -> FolioResult<Self> {
        transition.validate()?;
        if !(from.is_finite() && to.is_finite()) {
            return Err(FolioError::animation("entrance styles must be finite"));
        }
        Ok(Self {
            from,
            to,
            transition,
            state: EntranceState::Pending,
        })
    }

    /// Fade in while sliding from `dy` pixels below the resting position.
    pub fn fade_up(dy: f64, transition: Transition) -> FolioResult<Self> {
        Self::new(
            StyleProps::hidden().with_y(dy),
            StyleProps::identity(),
            transition,
        )
    }

    /// Fade in while sliding horizontally from `dx`.
    pub fn fade_x(dx: f64, transition: Transition) -> FolioResult<Self> {
        Self::new(
            StyleProps::hidden().with_x(dx),
            StyleProps::identity(),
            transition,
        )
    }

    /// Mark revealed at `now`; returns `true` only on the first call.
    pub fn trigger(&mut self, now: FrameIndex) -> bool {
        match self.state {
            EntranceState::Pending => {
                self.state = EntranceState::Revealed { at_frame: now };
                true
            }
            EntranceState::Revealed { .. } => false,
        }
    }

    /// Current lifecycle state.
    pub fn state(&self) -> EntranceState {
        self.state
    }

    /// `true` once triggered.
    pub fn is_revealed(&self) -> bool {
        matches!(self.state, EntranceState::Revealed { .. })
    }

    /// Timing in use.
    pub fn transition(&self) -> Transition {
        self.transition
    }

    /// Replace the timing; only allowed before the trigger.
    pub fn retime(&mut self, transition: Transition) -> FolioResult<()> {
        transition.validate()?;
        if self.is_revealed() {
            return Err(FolioError::animation(
                "cannot retime an entrance that has already been revealed",
            ));
        }
        self.transition = transition;
        Ok(())
    }

    /// Tween track in frames relative to the trigger.
    pub fn track(&self, fps: Fps) -> Anim<StyleProps> {
        let duration = fps.secs_to_frames_round(self.transition.duration_secs);
        let tween = Keyframes::linear([
            (0, self.from, self.transition.ease),
            (duration, self.to, Ease::Linear),
        ]);
        delay(
            Anim::Keyframes(tween),
            fps.secs_to_frames_round(self.transition.delay_secs),
        )
    }

    /// Style at `now`.
    pub fn sample(&self, now: FrameIndex, fps: Fps) -> FolioResult<StyleProps> {
        match self.state {
            EntranceState::Pending => Ok(self.from),
            EntranceState::Revealed { at_frame } => {
                self.track(fps).sample(FrameIndex(now.since(at_frame)))
            }
        }
    }

    /// `true` when revealed and the tween has reached its resting style.
    pub fn is_settled(&self, now: FrameIndex, fps: Fps) -> bool {
        match self.state {
            EntranceState::Pending => false,
            EntranceState::Revealed { at_frame } => {
                now.since(at_frame) >= self.transition.end_frame(fps)
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/view/entrance.rs"]
mod tests;
