use crate::{
    animation::ease::Ease,
    foundation::core::FrameIndex,
    foundation::error::{FolioError, FolioResult},
};

/// Interpolation contract for animation value types.
pub trait Lerp: Sized {
    /// Interpolate from `a` to `b` with normalized factor `t` in `[0, 1]`.
    fn lerp(a: &Self, b: &Self, t: f64) -> Self;
}

impl Lerp for f64 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        a + (b - a) * t
    }
}

/// Frame-indexed animation track: explicit keyframes or an expression over other tracks.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Anim<T> {
    /// Piecewise animation defined by explicit keyframes.
    Keyframes(Keyframes<T>),
    /// Animation expression composed from another animation.
    Expr(Expr<T>),
}

impl<T> Anim<T>
where
    T: Lerp + Clone,
{
    /// Sample the animation at local frame `local`.
    pub fn sample(&self, local: FrameIndex) -> FolioResult<T> {
        match self {
            Self::Keyframes(kf) => kf.sample(local),
            Self::Expr(expr) => expr.sample(local),
        }
    }

    /// Validate static invariants for this animation tree.
    pub fn validate(&self) -> FolioResult<()> {
        match self {
            Self::Keyframes(kf) => kf.validate(),
            Self::Expr(expr) => expr.validate(),
        }
    }
}

/// Keyframed animation with optional default value.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct Keyframes<T> {
    /// Keyframes sorted by `frame`.
    pub keys: Vec<Keyframe<T>>,
    /// Value used when `keys` is empty.
    pub default: Option<T>,
}

impl<T> Keyframes<T>
where
    T: Lerp + Clone,
{
    /// Linear keyframes from `(frame, value, ease)` triples.
    pub fn linear(keys: impl IntoIterator<Item = (u64, T, Ease)>) -> Self {
        Self {
            keys: keys
                .into_iter()
                .map(|(frame, value, ease)| Keyframe {
                    frame: FrameIndex(frame),
                    value,
                    ease,
                })
                .collect(),
            default: None,
        }
    }

    /// Validate keyframe ordering and default/fallback requirements.
    pub fn validate(&self) -> FolioResult<()> {
        if self.keys.is_empty() && self.default.is_none() {
            return Err(FolioError::animation(
                "Keyframes must have at least one key or a default value",
            ));
        }
        if !self.keys.windows(2).all(|w| w[0].frame.0 <= w[1].frame.0) {
            return Err(FolioError::animation(
                "Keyframes keys must be sorted by frame",
            ));
        }
        Ok(())
    }

    /// Frame of the last key, or 0 when empty.
    pub fn last_frame(&self) -> u64 {
        self.keys.last().map(|k| k.frame.0).unwrap_or(0)
    }

    /// Sample keyframed value in local time.
    pub fn sample(&self, local: FrameIndex) -> FolioResult<T> {
        if self.keys.is_empty() {
            return self
                .default
                .clone()
                .ok_or_else(|| FolioError::animation("Keyframes has no keys and no default"));
        }

        let f = local.0;
        let idx = self.keys.partition_point(|k| k.frame.0 <= f);

        if idx == 0 {
            return Ok(self.keys[0].value.clone());
        }
        if idx >= self.keys.len() {
            return Ok(self.keys[self.keys.len() - 1].value.clone());
        }

        let a = &self.keys[idx - 1];
        let b = &self.keys[idx];
        let denom = b.frame.0.saturating_sub(a.frame.0);
        if denom == 0 {
            return Ok(a.value.clone());
        }

        let t = ((f - a.frame.0) as f64) / (denom as f64);
        Ok(T::lerp(&a.value, &b.value, a.ease.apply(t)))
    }
}

/// One keyframe in a keyframed animation.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct Keyframe<T> {
    /// Local frame index for this key.
    pub frame: FrameIndex,
    /// Value at `frame`.
    pub value: T,
    /// Easing function applied toward the next keyframe.
    #[serde(default)]
    pub ease: Ease,
}

/// Time-remapping animation operators.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Expr<T> {
    /// Delay an animation by `by` frames; the first value holds during the delay.
    Delay {
        /// Inner animation.
        inner: Box<Anim<T>>,
        /// Delay amount in frames.
        by: u64,
    },
    /// Wrap local time at `period`.
    Loop {
        /// Inner animation.
        inner: Box<Anim<T>>,
        /// Loop period in frames (`> 0`).
        period: u64,
    },
}

impl<T> Expr<T>
where
    T: Lerp + Clone,
{
    /// Validate expression-specific invariants recursively.
    pub fn validate(&self) -> FolioResult<()> {
        match self {
            Self::Delay { inner, by: _ } => inner.validate(),
            Self::Loop { inner, period } => {
                if *period == 0 {
                    return Err(FolioError::animation("Loop period must be > 0"));
                }
                inner.validate()
            }
        }
    }

    /// Sample this expression by remapping local frame coordinates.
    pub fn sample(&self, local: FrameIndex) -> FolioResult<T> {
        match self {
            Self::Delay { inner, by } => {
                let f = local.0;
                inner.sample(FrameIndex(f.saturating_sub(*by)))
            }
            Self::Loop { inner, period } => {
                if *period == 0 {
                    return Err(FolioError::animation("Loop period must be > 0"));
                }
                inner.sample(FrameIndex(local.0 % period))
            }
        }
    }
}

/// Delay `inner` by `by_frames`.
pub fn delay<T>(inner: Anim<T>, by_frames: u64) -> Anim<T> {
    Anim::Expr(Expr::Delay {
        inner: Box::new(inner),
        by: by_frames,
    })
}

/// Repeat `inner` every `period_frames`.
pub fn loop_<T>(inner: Anim<T>, period_frames: u64) -> Anim<T> {
    Anim::Expr(Expr::Loop {
        inner: Box::new(inner),
        period: period_frames,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/animation/anim.rs"]
mod tests;
