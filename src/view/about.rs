use crate::animation::ease::Ease;
use crate::content::catalog::ContentCatalog;
use crate::content::model::{HighlightEntry, SkillEntry};
use crate::foundation::core::{ElementBox, Viewport};
use crate::foundation::error::FolioResult;
use crate::runtime::signal::NodeRef;
use crate::runtime::smoothed::Smoothed;
use crate::scroll::in_view::{InViewOptions, InViewSignal};
use crate::scroll::offset::ScrollOffset;
use crate::scroll::progress::ScrollProgress;
use crate::view::a11y::SkillBarA11y;
use crate::view::entrance::{Entrance, Transition};
use crate::view::nav::SectionId;
use crate::view::section::{FrameContext, MountContext, SectionFrame, SectionView, sprung};
use crate::view::style::StyleProps;

/// Intersection margin shared by the header and every skill bar.
pub const REVEAL_MARGIN_PX: f64 = -100.0;

// Layout of tracked children relative to the section top.
const PADDING_Y: f64 = 128.0;
const HEADER_HEIGHT: f64 = 220.0;
const HEADER_GAP: f64 = 64.0;
const STACKED_LEFT_COLUMN: f64 = 720.0;
const WIDE_BREAKPOINT: f64 = 1024.0;
const SKILL_BAR_HEIGHT: f64 = 44.0;
const SKILL_BAR_GAP: f64 = 24.0;

/// One skill bar: its width tween and accessibility attributes.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct SkillBarFrame {
    /// Skill name.
    pub name: String,
    /// Fill style; `width_pct` grows from 0 to the level.
    pub fill: StyleProps,
    /// ARIA attributes.
    pub a11y: SkillBarA11y,
}

/// One highlight card.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct HighlightFrame {
    /// Card title.
    pub title: String,
    /// Icon glyph name.
    pub icon: &'static str,
    /// Animated style.
    pub style: StyleProps,
}

/// About snapshot.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct AboutFrame {
    /// Section header.
    pub header: StyleProps,
    /// Text and highlight column.
    pub left_column: StyleProps,
    /// Highlight cards.
    pub highlights: Vec<HighlightFrame>,
    /// Skills column.
    pub right_column: StyleProps,
    /// Skill bars in catalog order.
    pub skills: Vec<SkillBarFrame>,
    /// Sprung vertical offsets of the two background blobs.
    pub bg_y: [f64; 2],
}

struct SkillBar {
    skill: SkillEntry,
    node: NodeRef,
    in_view: InViewSignal,
    fill: Entrance,
}

/// `#about`: header-gated entrances, per-bar skill reveals and background parallax.
pub struct AboutSection {
    node: NodeRef,
    header_node: NodeRef,
    _progress: ScrollProgress,
    bg1: Smoothed,
    bg2: Smoothed,
    in_view: InViewSignal,
    header: Entrance,
    left: Entrance,
    highlights: Vec<(HighlightEntry, Entrance)>,
    right: Entrance,
    skills: Vec<SkillBar>,
}

impl AboutSection {
    /// Mount the section with `content`'s skills and highlights.
    #[tracing::instrument(level = "debug", skip_all, fields(frame = ctx.now.0))]
    pub fn mount(ctx: &MountContext<'_>, content: &ContentCatalog) -> FolioResult<Self> {
        let node = NodeRef::new();
        let header_node = NodeRef::new();
        let progress = ScrollProgress::mount(
            ctx.events,
            "about.progress",
            node.clone(),
            ScrollOffset::through_viewport(),
        )?;
        let bg1 = sprung(ctx, "about.bg1", &progress, [0.0, 1.0], [0.0, -100.0])?;
        let bg2 = sprung(ctx, "about.bg2", &progress, [0.0, 1.0], [0.0, 100.0])?;
        let in_view = InViewSignal::mount(
            ctx.events,
            "about.header",
            header_node.clone(),
            InViewOptions::once_with_margin(REVEAL_MARGIN_PX),
        )?;

        let highlights = content
            .highlights
            .iter()
            .enumerate()
            .map(|(i, h)| {
                let e = Entrance::fade_up(20.0, Transition::new(0.5, 0.4 + i as f64 * 0.1))?;
                Ok((h.clone(), e))
            })
            .collect::<FolioResult<Vec<_>>>()?;

        let skills = content
            .skills
            .iter()
            .enumerate()
            .map(|(i, skill)| {
                skill.validate()?;
                let node = NodeRef::new();
                let in_view = InViewSignal::mount(
                    ctx.events,
                    format!("about.skill.{i}"),
                    node.clone(),
                    InViewOptions::once_with_margin(REVEAL_MARGIN_PX),
                )?;
                let fill = Entrance::new(
                    StyleProps::identity().with_width_pct(0.0),
                    StyleProps::identity().with_width_pct(f64::from(skill.level)),
                    Transition::new(1.0, 0.5 + i as f64 * 0.1).with_ease(Ease::EaseOut),
                )?;
                Ok(SkillBar {
                    skill: skill.clone(),
                    node,
                    in_view,
                    fill,
                })
            })
            .collect::<FolioResult<Vec<_>>>()?;

        tracing::debug!(skills = skills.len(), highlights = highlights.len(), "about mounted");
        Ok(Self {
            node,
            header_node,
            _progress: progress,
            bg1,
            bg2,
            in_view,
            header: Entrance::fade_up(40.0, Transition::new(0.8, 0.0))?,
            left: Entrance::fade_x(-40.0, Transition::new(0.8, 0.2))?,
            highlights,
            right: Entrance::fade_x(40.0, Transition::new(0.8, 0.3))?,
            skills,
        })
    }

    /// Document box of skill bar `index` for a section placed at `bounds`.
    pub fn skill_bar_box(bounds: ElementBox, viewport: Viewport, index: usize) -> ElementBox {
        let mut top = bounds.top + PADDING_Y + HEADER_HEIGHT + HEADER_GAP;
        if viewport.width < WIDE_BREAKPOINT {
            top += STACKED_LEFT_COLUMN;
        }
        ElementBox::new(
            top + index as f64 * (SKILL_BAR_HEIGHT + SKILL_BAR_GAP),
            SKILL_BAR_HEIGHT,
        )
    }
}

impl SectionView for AboutSection {
    fn id(&self) -> SectionId {
        SectionId::About
    }

    fn layout(&mut self, bounds: ElementBox, viewport: Viewport) {
        self.node.attach(bounds);
        self.header_node
            .attach(ElementBox::new(bounds.top + PADDING_Y, HEADER_HEIGHT));
        for (i, bar) in self.skills.iter().enumerate() {
            bar.node.attach(Self::skill_bar_box(bounds, viewport, i));
        }
    }

    fn frame(&mut self, ctx: &FrameContext) -> FolioResult<SectionFrame> {
        let now = ctx.frame;
        if self.in_view.get() {
            for e in [&mut self.header, &mut self.left, &mut self.right] {
                e.trigger(now);
            }
            for (_, e) in &mut self.highlights {
                e.trigger(now);
            }
        }
        for bar in &mut self.skills {
            if bar.in_view.get() && bar.fill.trigger(now) {
                tracing::debug!(skill = %bar.skill.name, frame = now.0, "skill bar revealed");
            }
        }

        let highlights = self
            .highlights
            .iter()
            .map(|(h, e)| {
                Ok(HighlightFrame {
                    title: h.title.clone(),
                    icon: h.icon.name(),
                    style: e.sample(now, ctx.fps)?,
                })
            })
            .collect::<FolioResult<Vec<_>>>()?;

        let skills = self
            .skills
            .iter()
            .map(|bar| {
                Ok(SkillBarFrame {
                    name: bar.skill.name.clone(),
                    fill: bar.fill.sample(now, ctx.fps)?,
                    a11y: SkillBarA11y::for_skill(&bar.skill),
                })
            })
            .collect::<FolioResult<Vec<_>>>()?;

        Ok(SectionFrame::About(AboutFrame {
            header: self.header.sample(now, ctx.fps)?,
            left_column: self.left.sample(now, ctx.fps)?,
            highlights,
            right_column: self.right.sample(now, ctx.fps)?,
            skills,
            bg_y: [self.bg1.get(), self.bg2.get()],
        }))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/view/about.rs"]
mod tests;
