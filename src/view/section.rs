use crate::animation::interpolate::Interpolate;
use crate::animation::spring::SpringConfig;
use crate::foundation::core::{ElementBox, FrameIndex, Fps, Viewport};
use crate::foundation::error::FolioResult;
use crate::runtime::events::ViewportEvents;
use crate::runtime::frame_loop::FrameLoop;
use crate::runtime::signal::Derived;
use crate::runtime::smoothed::Smoothed;
use crate::scroll::progress::ScrollProgress;
use crate::view::about::AboutFrame;
use crate::view::hero::HeroFrame;
use crate::view::nav::SectionId;
use crate::view::projects::ProjectsFrame;

/// Shared page plumbing handed to a section when it mounts.
#[derive(Clone, Copy)]
pub struct MountContext<'a> {
    /// Scroll/resize events.
    pub events: &'a ViewportEvents,
    /// Per-frame callbacks.
    pub frame_loop: &'a FrameLoop,
    /// Spring used for every smoothed value.
    pub spring: SpringConfig,
    /// Session frame rate.
    pub fps: Fps,
    /// Frame on which the section mounts.
    pub now: FrameIndex,
}

/// Per-frame input for [`SectionView::frame`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameContext {
    /// Frame being produced.
    pub frame: FrameIndex,
    /// Session frame rate.
    pub fps: Fps,
}

/// Snapshot of one section's animated state.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(tag = "section", rename_all = "snake_case")]
pub enum SectionFrame {
    /// `#home`.
    Hero(HeroFrame),
    /// `#about`.
    About(AboutFrame),
    /// `#projects`.
    Projects(ProjectsFrame),
}

impl SectionFrame {
    /// Section the snapshot belongs to.
    pub fn id(&self) -> SectionId {
        match self {
            Self::Hero(_) => SectionId::Home,
            Self::About(_) => SectionId::About,
            Self::Projects(_) => SectionId::Projects,
        }
    }
}

/// One mounted page section.
pub trait SectionView {
    /// Anchor of the section.
    fn id(&self) -> SectionId;

    /// Place the section and its tracked children at `bounds`.
    fn layout(&mut self, bounds: ElementBox, viewport: Viewport);

    /// Advance entrance triggers and sample every animated style for `ctx.frame`.
    fn frame(&mut self, ctx: &FrameContext) -> FolioResult<SectionFrame>;
}

/// `progress → map → spring`, the parallax pipeline every section uses.
pub(crate) fn sprung(
    ctx: &MountContext<'_>,
    label: &str,
    progress: &ScrollProgress,
    domain: [f64; 2],
    range: [f64; 2],
) -> FolioResult<Smoothed> {
    let mapped = Derived::new(progress.signal(), Interpolate::linear(domain, range)?);
    Smoothed::mount(ctx.frame_loop, label, mapped, ctx.spring)
}
