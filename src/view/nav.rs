use std::str::FromStr;

use crate::animation::ease::Ease;
use crate::foundation::core::{FrameIndex, Fps};
use crate::foundation::error::{FolioError, FolioResult};

/// Length of an anchor smooth-scroll.
pub const SMOOTH_SCROLL_SECS: f64 = 0.8;

/// Page sections addressable by anchor.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionId {
    /// Hero.
    Home,
    /// About and skills.
    About,
    /// Project gallery.
    Projects,
    /// Contact.
    Contact,
}

impl SectionId {
    /// Every section in document order.
    pub const ALL: [SectionId; 4] = [Self::Home, Self::About, Self::Projects, Self::Contact];

    /// Fragment identifier, e.g. `#about`.
    pub fn anchor(self) -> &'static str {
        match self {
            Self::Home => "#home",
            Self::About => "#about",
            Self::Projects => "#projects",
            Self::Contact => "#contact",
        }
    }

    /// Element id without the `#`.
    pub fn element_id(self) -> &'static str {
        &self.anchor()[1..]
    }
}

impl FromStr for SectionId {
    type Err = FolioError;

    /// Accepts `about` or `#about`.
    fn from_str(s: &str) -> FolioResult<Self> {
        let id = s.strip_prefix('#').unwrap_or(s);
        Self::ALL
            .into_iter()
            .find(|section| section.element_id() == id)
            .ok_or_else(|| FolioError::validation(format!("unknown section anchor '{s}'")))
    }
}

/// Where a link leads.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum NavTarget {
    /// In-page anchor.
    Section {
        /// Target section.
        section: SectionId,
    },
    /// Off-site link, opened in a new browsing context.
    External {
        /// Absolute URL.
        url: String,
    },
}

impl NavTarget {
    /// In-page link to `section`.
    pub fn section(section: SectionId) -> Self {
        Self::Section { section }
    }

    /// Off-site link to `url`.
    pub fn external(url: impl Into<String>) -> Self {
        Self::External { url: url.into() }
    }

    /// `href` attribute.
    pub fn href(&self) -> &str {
        match self {
            Self::Section { section } => section.anchor(),
            Self::External { url } => url,
        }
    }

    /// `target` attribute, if any.
    pub fn target(&self) -> Option<&'static str> {
        match self {
            Self::Section { .. } => None,
            Self::External { .. } => Some("_blank"),
        }
    }

    /// `rel` attribute, if any.
    pub fn rel(&self) -> Option<&'static str> {
        match self {
            Self::Section { .. } => None,
            Self::External { .. } => Some("noopener noreferrer"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
struct ScrollTween {
    from: f64,
    to: f64,
    start: FrameIndex,
    frames: u64,
}

/// Anchor smooth-scroll animation.
///
/// Drives the scroll position from its current value to a target offset over
/// [`SMOOTH_SCROLL_SECS`] with a cubic ease-in-out. Any user scroll input cancels it.
#[derive(Clone, Debug, Default)]
pub struct SmoothScroll {
    active: Option<ScrollTween>,
}

impl SmoothScroll {
    /// Idle animator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start scrolling from `from` to `to`, replacing any scroll in flight.
    pub fn start(&mut self, from: f64, to: f64, now: FrameIndex, fps: Fps) {
        let frames = fps.secs_to_frames_round(SMOOTH_SCROLL_SECS).max(1);
        tracing::debug!(from, to, frames, "smooth scroll started");
        self.active = Some(ScrollTween {
            from,
            to: to.max(0.0),
            start: now,
            frames,
        });
    }

    /// Abort the scroll in flight, leaving the position where it is.
    pub fn cancel(&mut self) {
        if self.active.take().is_some() {
            tracing::debug!("smooth scroll cancelled by user input");
        }
    }

    /// `true` while a scroll is in flight.
    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    /// Scroll position for `now`, or `None` when idle. Finishes on the target frame.
    pub fn step(&mut self, now: FrameIndex) -> Option<f64> {
        let tween = self.active?;
        let elapsed = now.since(tween.start);
        if elapsed >= tween.frames {
            self.active = None;
            return Some(tween.to);
        }
        let t = Ease::InOutCubic.apply(elapsed as f64 / tween.frames as f64);
        Some(tween.from + (tween.to - tween.from) * t)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/view/nav.rs"]
mod tests;
