use std::collections::HashSet;

use crate::content::catalog::ContentCatalog;
use crate::content::filter::{CategoryFilter, categories};
use crate::content::model::{Category, ImageStatus, ProjectEntry};
use crate::foundation::core::{ElementBox, Viewport};
use crate::foundation::error::FolioResult;
use crate::runtime::events::ViewportEvents;
use crate::runtime::signal::NodeRef;
use crate::runtime::smoothed::Smoothed;
use crate::scroll::in_view::{InViewOptions, InViewSignal};
use crate::scroll::offset::ScrollOffset;
use crate::scroll::progress::ScrollProgress;
use crate::view::entrance::{Entrance, Transition};
use crate::view::nav::{NavTarget, SectionId};
use crate::view::section::{FrameContext, MountContext, SectionFrame, SectionView, sprung};
use crate::view::style::StyleProps;

/// Intersection margin of the section header.
pub const HEADER_MARGIN_PX: f64 = -100.0;
/// Intersection margin of each card.
pub const CARD_MARGIN_PX: f64 = -50.0;

const PADDING_Y: f64 = 128.0;
const HEADER_HEIGHT: f64 = 240.0;
const HEADER_GAP: f64 = 64.0;
const CARD_HEIGHT: f64 = 440.0;
const CARD_GAP: f64 = 32.0;

/// Grid columns at `viewport` width.
pub fn grid_columns(viewport: Viewport) -> usize {
    if viewport.width >= 1024.0 {
        3
    } else if viewport.width >= 768.0 {
        2
    } else {
        1
    }
}

/// One visible project card.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct ProjectCardFrame {
    /// Project id.
    pub id: u32,
    /// Title.
    pub title: String,
    /// Category label.
    pub category: Category,
    /// Technologies in order.
    pub tech: Vec<String>,
    /// Hover overlay classes.
    pub gradient: &'static str,
    /// Live link.
    pub link: NavTarget,
    /// `true` when the screenshot is missing and a placeholder is shown.
    pub placeholder: bool,
    /// Entrance style.
    pub style: StyleProps,
}

/// Projects snapshot.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct ProjectsFrame {
    /// Section header.
    pub header: StyleProps,
    /// Active filter label.
    pub category: String,
    /// Filter choices.
    pub categories: Vec<&'static str>,
    /// Visible cards in display order.
    pub cards: Vec<ProjectCardFrame>,
    /// Sprung horizontal offsets of the two background blobs.
    pub bg_x: [f64; 2],
}

struct ProjectCard {
    id: u32,
    node: NodeRef,
    in_view: InViewSignal,
    entrance: Entrance,
}

fn card_transition(index: usize) -> Transition {
    Transition::new(0.6, index as f64 * 0.1)
}

/// `#projects`: filterable gallery with per-card entrances and horizontal parallax.
pub struct ProjectsSection {
    events: ViewportEvents,
    node: NodeRef,
    header_node: NodeRef,
    _progress: ScrollProgress,
    bg1: Smoothed,
    bg2: Smoothed,
    header_in_view: InViewSignal,
    header: Entrance,
    projects: Vec<ProjectEntry>,
    missing_images: HashSet<u32>,
    filter: CategoryFilter,
    cards: Vec<ProjectCard>,
    placed: Option<(ElementBox, Viewport)>,
}

impl ProjectsSection {
    /// Mount the gallery over `content`'s projects, showing every category.
    ///
    /// `images` lists known screenshot statuses; projects absent from it are assumed present.
    #[tracing::instrument(level = "debug", skip_all, fields(frame = ctx.now.0))]
    pub fn mount(
        ctx: &MountContext<'_>,
        content: &ContentCatalog,
        images: &[(u32, ImageStatus)],
    ) -> FolioResult<Self> {
        let node = NodeRef::new();
        let header_node = NodeRef::new();
        let progress = ScrollProgress::mount(
            ctx.events,
            "projects.progress",
            node.clone(),
            ScrollOffset::through_viewport(),
        )?;
        let bg1 = sprung(ctx, "projects.bg1", &progress, [0.0, 1.0], [-50.0, 50.0])?;
        let bg2 = sprung(ctx, "projects.bg2", &progress, [0.0, 1.0], [50.0, -50.0])?;
        let header_in_view = InViewSignal::mount(
            ctx.events,
            "projects.header",
            header_node.clone(),
            InViewOptions::once_with_margin(HEADER_MARGIN_PX),
        )?;

        let mut section = Self {
            events: ctx.events.clone(),
            node,
            header_node,
            _progress: progress,
            bg1,
            bg2,
            header_in_view,
            header: Entrance::fade_up(40.0, Transition::new(0.8, 0.0))?,
            projects: content.projects.clone(),
            missing_images: images
                .iter()
                .filter(|(_, s)| *s == ImageStatus::Missing)
                .map(|(id, _)| *id)
                .collect(),
            filter: CategoryFilter::new(),
            cards: Vec::new(),
            placed: None,
        };
        section.sync_cards()?;
        Ok(section)
    }

    /// Select a gallery category by label. Unknown labels empty the gallery.
    pub fn set_category(&mut self, label: &str) -> FolioResult<()> {
        self.filter.set_category(label);
        self.sync_cards()?;
        self.events.refresh();
        Ok(())
    }

    /// Filter state.
    pub fn filter(&self) -> &CategoryFilter {
        &self.filter
    }

    /// Document box of grid cell `index`.
    pub fn card_box(bounds: ElementBox, viewport: Viewport, index: usize) -> ElementBox {
        let row = index / grid_columns(viewport);
        let top = bounds.top + PADDING_Y + HEADER_HEIGHT + HEADER_GAP;
        ElementBox::new(top + row as f64 * (CARD_HEIGHT + CARD_GAP), CARD_HEIGHT)
    }

    /// Rebuild the card list for the current filter.
    ///
    /// Cards that stay visible keep their entrance state; a pending card is retimed for its new
    /// position. Cards that disappear are dropped, releasing their observers.
    fn sync_cards(&mut self) -> FolioResult<()> {
        let visible: Vec<u32> = self
            .filter
            .visible(&self.projects)
            .iter()
            .map(|p| p.id)
            .collect();

        let mut previous = std::mem::take(&mut self.cards);
        let mut cards = Vec::with_capacity(visible.len());
        for (index, id) in visible.into_iter().enumerate() {
            let card = match previous.iter().position(|c| c.id == id) {
                Some(at) => {
                    let mut card = previous.swap_remove(at);
                    if !card.entrance.is_revealed() {
                        card.entrance.retime(card_transition(index))?;
                    }
                    card
                }
                None => {
                    let node = NodeRef::new();
                    if let Some((bounds, viewport)) = self.placed {
                        node.attach(Self::card_box(bounds, viewport, index));
                    }
                    let in_view = InViewSignal::mount(
                        &self.events,
                        format!("projects.card.{id}"),
                        node.clone(),
                        InViewOptions::once_with_margin(CARD_MARGIN_PX),
                    )?;
                    ProjectCard {
                        id,
                        node,
                        in_view,
                        entrance: Entrance::fade_up(50.0, card_transition(index))?,
                    }
                }
            };
            cards.push(card);
        }
        tracing::debug!(
            category = self.filter.selection().label(),
            visible = cards.len(),
            dropped = previous.len(),
            "project cards synced"
        );
        self.cards = cards;
        self.place_cards();
        Ok(())
    }

    fn place_cards(&self) {
        if let Some((bounds, viewport)) = self.placed {
            for (i, card) in self.cards.iter().enumerate() {
                card.node.attach(Self::card_box(bounds, viewport, i));
            }
        }
    }
}

impl SectionView for ProjectsSection {
    fn id(&self) -> SectionId {
        SectionId::Projects
    }

    fn layout(&mut self, bounds: ElementBox, viewport: Viewport) {
        self.node.attach(bounds);
        self.header_node
            .attach(ElementBox::new(bounds.top + PADDING_Y, HEADER_HEIGHT));
        self.placed = Some((bounds, viewport));
        self.place_cards();
    }

    fn frame(&mut self, ctx: &FrameContext) -> FolioResult<SectionFrame> {
        let now = ctx.frame;
        if self.header_in_view.get() {
            self.header.trigger(now);
        }

        let mut cards = Vec::with_capacity(self.cards.len());
        for card in &mut self.cards {
            if card.in_view.get() {
                card.entrance.trigger(now);
            }
            let Some(p) = self.projects.iter().find(|p| p.id == card.id) else {
                continue;
            };
            cards.push(ProjectCardFrame {
                id: p.id,
                title: p.title.clone(),
                category: p.category,
                tech: p.tech.clone(),
                gradient: p.gradient.class(),
                link: NavTarget::external(p.live_url.clone()),
                placeholder: self.missing_images.contains(&p.id),
                style: card.entrance.sample(now, ctx.fps)?,
            });
        }

        Ok(SectionFrame::Projects(ProjectsFrame {
            header: self.header.sample(now, ctx.fps)?,
            category: self.filter.selection().label().to_owned(),
            categories: categories(&self.projects),
            cards,
            bg_x: [self.bg1.get(), self.bg2.get()],
        }))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/view/projects.rs"]
mod tests;
