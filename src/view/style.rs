use crate::animation::anim::Lerp;

/// Animated style properties of one element, as a renderer would apply them.
///
/// Offsets are CSS pixels; `width_pct` is the element's width as a percentage of its track and
/// is only animated for skill bars.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct StyleProps {
    /// Horizontal translation.
    pub x: f64,
    /// Vertical translation.
    pub y: f64,
    /// Opacity in `[0, 1]`.
    pub opacity: f64,
    /// Uniform scale factor.
    pub scale: f64,
    /// Width percentage.
    pub width_pct: f64,
}

impl StyleProps {
    /// Untransformed, fully opaque, full width.
    pub const fn identity() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            opacity: 1.0,
            scale: 1.0,
            width_pct: 100.0,
        }
    }

    /// Identity with opacity 0.
    pub const fn hidden() -> Self {
        Self {
            opacity: 0.0,
            ..Self::identity()
        }
    }

    /// Copy with `x` replaced.
    pub const fn with_x(self, x: f64) -> Self {
        Self { x, ..self }
    }

    /// Copy with `y` replaced.
    pub const fn with_y(self, y: f64) -> Self {
        Self { y, ..self }
    }

    /// Copy with `opacity` replaced.
    pub const fn with_opacity(self, opacity: f64) -> Self {
        Self { opacity, ..self }
    }

    /// Copy with `scale` replaced.
    pub const fn with_scale(self, scale: f64) -> Self {
        Self { scale, ..self }
    }

    /// Copy with `width_pct` replaced.
    pub const fn with_width_pct(self, width_pct: f64) -> Self {
        Self { width_pct, ..self }
    }

    /// `true` when every field is finite.
    pub fn is_finite(&self) -> bool {
        [self.x, self.y, self.opacity, self.scale, self.width_pct]
            .iter()
            .all(|v| v.is_finite())
    }
}

impl Default for StyleProps {
    fn default() -> Self {
        Self::identity()
    }
}

impl Lerp for StyleProps {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        Self {
            x: f64::lerp(&a.x, &b.x, t),
            y: f64::lerp(&a.y, &b.y, t),
            opacity: f64::lerp(&a.opacity, &b.opacity, t),
            scale: f64::lerp(&a.scale, &b.scale, t),
            width_pct: f64::lerp(&a.width_pct, &b.width_pct, t),
        }
    }
}
