use std::path::Path;

use crate::content::catalog::ContentCatalog;
use crate::content::model::ImageStatus;
use crate::foundation::core::{ElementBox, FrameIndex, Fps, Viewport};
use crate::foundation::error::{FolioError, FolioResult};
use crate::runtime::events::ViewportEvents;
use crate::runtime::frame_loop::{FrameLoop, FrameTick};
use crate::session::config::{PageConfig, SectionHeights};
use crate::session::script::{ScriptEvent, ScrollScript};
use crate::view::about::AboutSection;
use crate::view::hero::{HeroSceneOptions, HeroSection};
use crate::view::nav::{SectionId, SmoothScroll};
use crate::view::projects::ProjectsSection;
use crate::view::section::{FrameContext, MountContext, SectionFrame, SectionView};

/// Document placement of every section.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct PageLayout {
    /// Sections in document order.
    pub sections: Vec<(SectionId, ElementBox)>,
    /// Total document height.
    pub document_height: f64,
}

impl PageLayout {
    /// Stack sections top to bottom. The hero is at least one viewport tall.
    pub fn stack(viewport: Viewport, heights: &SectionHeights) -> Self {
        let hero = heights.hero.unwrap_or(viewport.height).max(viewport.height);
        let mut top = 0.0;
        let sections = [
            (SectionId::Home, hero),
            (SectionId::About, heights.about),
            (SectionId::Projects, heights.projects),
            (SectionId::Contact, heights.contact),
        ]
        .into_iter()
        .map(|(id, height)| {
            let b = ElementBox::new(top, height);
            top += height;
            (id, b)
        })
        .collect();
        Self {
            sections,
            document_height: top,
        }
    }

    /// Box of `id`.
    pub fn section(&self, id: SectionId) -> Option<ElementBox> {
        self.sections
            .iter()
            .find(|(s, _)| *s == id)
            .map(|(_, b)| *b)
    }

    /// Largest reachable scroll offset.
    pub fn max_scroll(&self, viewport: Viewport) -> f64 {
        (self.document_height - viewport.height).max(0.0)
    }

    /// Scroll offset that brings `id`'s top edge to the viewport top.
    pub fn anchor_offset(&self, id: SectionId, viewport: Viewport) -> f64 {
        self.section(id)
            .map(|b| b.top.min(self.max_scroll(viewport)))
            .unwrap_or(0.0)
    }
}

/// Everything a renderer needs for one frame.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct PageFrame {
    /// Session frame.
    pub frame: FrameIndex,
    /// Seconds since session start.
    pub time_secs: f64,
    /// Applied scroll offset.
    pub scroll_y: f64,
    /// Current viewport.
    pub viewport: Viewport,
    /// `true` while an anchor smooth-scroll is in flight.
    pub smooth_scrolling: bool,
    /// One snapshot per mounted section, in document order.
    pub sections: Vec<SectionFrame>,
}

impl PageFrame {
    /// Snapshot of `id`, when mounted.
    pub fn section(&self, id: SectionId) -> Option<&SectionFrame> {
        self.sections.iter().find(|s| s.id() == id)
    }
}

/// A mounted page: sections, their event and frame plumbing, and the session clock.
///
/// The session is single-threaded and advances one frame per [`PageSession::step`].
pub struct PageSession {
    config: PageConfig,
    events: ViewportEvents,
    frame_loop: FrameLoop,
    hero: HeroSection,
    about: AboutSection,
    projects: ProjectsSection,
    layout: PageLayout,
    smooth: SmoothScroll,
    next_frame: FrameIndex,
}

impl PageSession {
    /// Mount every section over `content` and lay out the page.
    #[tracing::instrument(level = "info", skip_all, fields(viewport = ?config.viewport))]
    pub fn new(
        config: PageConfig,
        content: &ContentCatalog,
        images: &[(u32, ImageStatus)],
    ) -> FolioResult<Self> {
        config.validate()?;
        content.validate()?;

        let events = ViewportEvents::new(config.viewport);
        let frame_loop = FrameLoop::new();
        let ctx = MountContext {
            events: &events,
            frame_loop: &frame_loop,
            spring: config.spring,
            fps: config.fps,
            now: FrameIndex(0),
        };
        let scene = HeroSceneOptions {
            theme: config.resolved_theme(),
            seed: config.scene.seed,
            raster: config.scene.raster.map(|s| (config.scene.capability, s)),
        };
        let hero = HeroSection::mount(&ctx, content, scene)?;
        let about = AboutSection::mount(&ctx, content)?;
        let projects = ProjectsSection::mount(&ctx, content, images)?;

        let layout = PageLayout::stack(config.viewport, &config.sections);
        let mut session = Self {
            config,
            events,
            frame_loop,
            hero,
            about,
            projects,
            layout,
            smooth: SmoothScroll::new(),
            next_frame: FrameIndex(0),
        };
        session.apply_layout();
        tracing::info!(
            document_height = session.layout.document_height,
            callbacks = session.frame_loop.len(),
            listeners = session.events.listener_count(),
            "page session mounted"
        );
        Ok(session)
    }

    /// Build a session from `config`, loading content and checking images relative to `base`.
    pub fn from_config(config: PageConfig, base: &Path) -> FolioResult<Self> {
        let content = config.load_content(base)?;
        let images = match &config.assets_root {
            Some(root) => content.image_statuses(&base.join(root)),
            None => Vec::new(),
        };
        Self::new(config, &content, &images)
    }

    fn sections_mut(&mut self) -> [&mut dyn SectionView; 3] {
        [&mut self.hero, &mut self.about, &mut self.projects]
    }

    fn apply_layout(&mut self) {
        let viewport = self.events.state().viewport;
        self.layout = PageLayout::stack(viewport, &self.config.sections);
        let layout = self.layout.clone();
        for section in self.sections_mut() {
            if let Some(b) = layout.section(section.id()) {
                section.layout(b, viewport);
            }
        }
        self.events.refresh();
    }

    /// Current layout.
    pub fn layout(&self) -> &PageLayout {
        &self.layout
    }

    /// Session configuration.
    pub fn config(&self) -> &PageConfig {
        &self.config
    }

    /// Session frame rate.
    pub fn fps(&self) -> Fps {
        self.config.fps
    }

    /// Frame the next [`PageSession::step`] produces.
    pub fn next_frame(&self) -> FrameIndex {
        self.next_frame
    }

    /// Current scroll offset.
    pub fn scroll_y(&self) -> f64 {
        self.events.state().scroll_y
    }

    /// Hero section.
    pub fn hero(&self) -> &HeroSection {
        &self.hero
    }

    /// Projects section.
    pub fn projects(&self) -> &ProjectsSection {
        &self.projects
    }

    /// Resize the viewport and re-lay out the page.
    pub fn resize(&mut self, viewport: Viewport) -> FolioResult<()> {
        Viewport::new(viewport.width, viewport.height)?;
        tracing::debug!(width = viewport.width, height = viewport.height, "viewport resized");
        self.events.resize(viewport);
        self.apply_layout();
        let max = self.layout.max_scroll(viewport);
        if self.scroll_y() > max {
            self.events.scroll_to(max);
        }
        Ok(())
    }

    /// User scroll input: cancels any smooth-scroll and jumps to `scroll_y`.
    pub fn user_scroll(&mut self, scroll_y: f64) {
        self.smooth.cancel();
        self.scroll_clamped(scroll_y);
    }

    fn scroll_clamped(&self, scroll_y: f64) {
        let max = self.layout.max_scroll(self.events.state().viewport);
        self.events.scroll_to(scroll_y.min(max));
    }

    /// Select a gallery category.
    pub fn set_category(&mut self, label: &str) -> FolioResult<()> {
        self.projects.set_category(label)
    }

    /// Start a smooth-scroll to `section`, beginning on the next frame.
    pub fn navigate(&mut self, section: SectionId) {
        let viewport = self.events.state().viewport;
        let target = self.layout.anchor_offset(section, viewport);
        tracing::debug!(anchor = section.anchor(), target, "navigating");
        self.smooth
            .start(self.scroll_y(), target, self.next_frame, self.config.fps);
    }

    /// Advance one frame: smooth-scroll, frame callbacks, then section snapshots.
    pub fn step(&mut self) -> FolioResult<PageFrame> {
        let frame = self.next_frame;
        let fps = self.config.fps;

        if let Some(y) = self.smooth.step(frame) {
            self.scroll_clamped(y);
        }
        let ran = self.frame_loop.tick(FrameTick {
            frame,
            dt_secs: fps.frame_duration_secs(),
        });
        if self.frame_loop.disabled_len() > 0 {
            tracing::trace!(ran, disabled = self.frame_loop.disabled_len(), "frame callbacks");
        }

        let ctx = FrameContext { frame, fps };
        let sections = self
            .sections_mut()
            .into_iter()
            .map(|s| s.frame(&ctx))
            .collect::<FolioResult<Vec<_>>>()?;

        let state = self.events.state();
        self.next_frame = FrameIndex(frame.0 + 1);
        Ok(PageFrame {
            frame,
            time_secs: fps.frames_to_secs(frame.0),
            scroll_y: state.scroll_y,
            viewport: state.viewport,
            smooth_scrolling: self.smooth.is_active(),
            sections,
        })
    }

    /// Replay `script` from the current frame and collect every produced frame.
    ///
    /// Script frames are relative to the frame the replay starts on. A change in the scripted
    /// scroll position counts as user input and cancels a smooth-scroll in flight.
    #[tracing::instrument(level = "info", skip_all, fields(frames = script.frames))]
    pub fn run(&mut self, script: &ScrollScript) -> FolioResult<Vec<PageFrame>> {
        let timeline = script.compile()?;
        let mut out = Vec::with_capacity(usize::try_from(timeline.frames()).unwrap_or(0));
        let mut last_input: Option<f64> = None;

        for f in 0..timeline.frames() {
            let y = timeline.scroll_at(f)?;
            if last_input != Some(y) {
                self.user_scroll(y);
                last_input = Some(y);
            }
            for event in timeline.events_at(f) {
                match event {
                    ScriptEvent::Resize(v) => self.resize(*v)?,
                    ScriptEvent::Category(label) => self.set_category(label)?,
                    ScriptEvent::Navigate(section) => self.navigate(*section),
                }
            }
            out.push(self.step().map_err(|e| {
                FolioError::evaluation(format!("script frame {f}: {e}"))
            })?);
        }
        tracing::info!(frames = out.len(), "script replayed");
        Ok(out)
    }
}

impl std::fmt::Debug for PageSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PageSession")
            .field("next_frame", &self.next_frame)
            .field("layout", &self.layout)
            .field("scroll_y", &self.scroll_y())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/session/page_session.rs"]
mod tests;
