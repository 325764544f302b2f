use std::collections::BTreeMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::animation::anim::{Keyframe, Keyframes};
use crate::animation::ease::Ease;
use crate::foundation::core::{FrameIndex, Viewport};
use crate::foundation::error::{FolioError, FolioResult};
use crate::view::nav::SectionId;

/// User scroll position at a frame; positions between keys are eased.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ScrollKey {
    /// Script frame.
    pub frame: u64,
    /// Scroll offset in CSS pixels.
    pub scroll_y: f64,
    /// Ease toward the next key.
    #[serde(default)]
    pub ease: Ease,
}

/// Pointer click on a category control.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct CategoryClick {
    /// Script frame.
    pub frame: u64,
    /// Category label, or `"All"`.
    pub category: String,
}

/// Viewport resize.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ResizeEvent {
    /// Script frame.
    pub frame: u64,
    /// New width.
    pub width: f64,
    /// New height.
    pub height: f64,
}

/// Click on an in-page navigation link.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct NavClick {
    /// Script frame.
    pub frame: u64,
    /// Target section.
    pub section: SectionId,
}

/// Scripted user input for a page session, read from JSON.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScrollScript {
    /// Frames to produce.
    pub frames: u64,
    /// Scroll keyframes sorted by frame. No keys means the page never scrolls.
    #[serde(default)]
    pub keys: Vec<ScrollKey>,
    /// Category clicks.
    #[serde(default)]
    pub clicks: Vec<CategoryClick>,
    /// Viewport resizes.
    #[serde(default)]
    pub resizes: Vec<ResizeEvent>,
    /// Navigation link clicks.
    #[serde(default)]
    pub navigations: Vec<NavClick>,
}

/// Discrete input applied at the start of a frame.
#[derive(Clone, Debug, PartialEq)]
pub enum ScriptEvent {
    /// Resize the viewport.
    Resize(Viewport),
    /// Select a category.
    Category(String),
    /// Smooth-scroll to a section.
    Navigate(SectionId),
}

/// A validated script: sampled scroll track plus per-frame events.
#[derive(Clone, Debug)]
pub struct ScrollTimeline {
    frames: u64,
    track: Keyframes<f64>,
    events: BTreeMap<u64, Vec<ScriptEvent>>,
}

impl ScrollScript {
    /// Parse from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> FolioResult<Self> {
        serde_json::from_reader(r)
            .map_err(|e| FolioError::serde(format!("parse scroll script JSON: {e}")))
    }

    /// Parse from a JSON file.
    pub fn from_path(path: impl AsRef<Path>) -> FolioResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            FolioError::validation(format!("open scroll script '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Check frame ranges, ordering and values.
    pub fn validate(&self) -> FolioResult<()> {
        if self.frames == 0 {
            return Err(FolioError::validation("scroll script must produce at least one frame"));
        }
        if !self.keys.windows(2).all(|w| w[0].frame <= w[1].frame) {
            return Err(FolioError::validation("scroll keys must be sorted by frame"));
        }
        for k in &self.keys {
            if !k.scroll_y.is_finite() || k.scroll_y < 0.0 {
                return Err(FolioError::validation(format!(
                    "scroll key at frame {} has invalid scroll_y {}",
                    k.frame, k.scroll_y
                )));
            }
        }
        let event_frames = self
            .clicks
            .iter()
            .map(|c| c.frame)
            .chain(self.resizes.iter().map(|r| r.frame))
            .chain(self.navigations.iter().map(|n| n.frame));
        for f in event_frames {
            if f >= self.frames {
                return Err(FolioError::validation(format!(
                    "script event at frame {f} is beyond the last frame {}",
                    self.frames - 1
                )));
            }
        }
        for r in &self.resizes {
            Viewport::new(r.width, r.height)?;
        }
        Ok(())
    }

    /// Validate and compile into a [`ScrollTimeline`].
    pub fn compile(&self) -> FolioResult<ScrollTimeline> {
        self.validate()?;
        let track = Keyframes {
            keys: self
                .keys
                .iter()
                .map(|k| Keyframe {
                    frame: FrameIndex(k.frame),
                    value: k.scroll_y,
                    ease: k.ease,
                })
                .collect(),
            default: Some(0.0),
        };
        track.validate()?;

        let mut events: BTreeMap<u64, Vec<ScriptEvent>> = BTreeMap::new();
        for r in &self.resizes {
            events
                .entry(r.frame)
                .or_default()
                .push(ScriptEvent::Resize(Viewport::new(r.width, r.height)?));
        }
        for c in &self.clicks {
            events
                .entry(c.frame)
                .or_default()
                .push(ScriptEvent::Category(c.category.clone()));
        }
        for n in &self.navigations {
            events
                .entry(n.frame)
                .or_default()
                .push(ScriptEvent::Navigate(n.section));
        }

        Ok(ScrollTimeline {
            frames: self.frames,
            track,
            events,
        })
    }
}

impl ScrollTimeline {
    /// Frames to produce.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// User scroll position at script frame `frame`.
    pub fn scroll_at(&self, frame: u64) -> FolioResult<f64> {
        self.track.sample(FrameIndex(frame))
    }

    /// Events at `frame`: resizes, then clicks, then navigations.
    pub fn events_at(&self, frame: u64) -> &[ScriptEvent] {
        self.events.get(&frame).map(Vec::as_slice).unwrap_or(&[])
    }
}

#[cfg(test)]
#[path = "../../tests/unit/session/script.rs"]
mod tests;
