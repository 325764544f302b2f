use std::rc::Rc;

use crate::animation::anim::{Anim, Keyframes, loop_};
use crate::animation::ease::Ease;
use crate::content::catalog::ContentCatalog;
use crate::foundation::core::{ElementBox, FrameIndex, Fps, Viewport};
use crate::foundation::error::FolioResult;
use crate::runtime::signal::NodeRef;
use crate::runtime::smoothed::Smoothed;
use crate::scene::backend::{SceneCapability, SceneSettings};
use crate::scene::driver::{DriverStatus, SceneDriver};
use crate::scene::model::{SceneSample, SceneSpec};
use crate::scene::theme::Theme;
use crate::scroll::offset::ScrollOffset;
use crate::scroll::progress::ScrollProgress;
use crate::view::a11y::ImageA11y;
use crate::view::entrance::{Entrance, Transition};
use crate::view::nav::{NavTarget, SectionId};
use crate::view::section::{FrameContext, MountContext, SectionFrame, SectionView, sprung};
use crate::view::style::StyleProps;

/// Bob height of the scroll indicator.
pub const INDICATOR_BOB_PX: f64 = 10.0;
/// Length of one bob cycle.
pub const INDICATOR_PERIOD_SECS: f64 = 2.0;

/// Decorative scene settings for the hero.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HeroSceneOptions {
    /// Palette selector.
    pub theme: Theme,
    /// Particle and phase seed.
    pub seed: u64,
    /// Rasterize every frame with this backend and output size; `None` only samples poses.
    pub raster: Option<(SceneCapability, SceneSettings)>,
}

impl Default for HeroSceneOptions {
    fn default() -> Self {
        Self {
            theme: Theme::default(),
            seed: crate::scene::model::DEFAULT_SEED,
            raster: None,
        }
    }
}

/// One technology pill.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct PillFrame {
    /// Pill text.
    pub label: String,
    /// Animated style.
    pub style: StyleProps,
}

/// Decorative scene state for one frame.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct HeroSceneFrame {
    /// Container accessibility attributes.
    pub a11y: ImageA11y,
    /// Active palette.
    pub theme: Theme,
    /// Primitive poses.
    pub sample: SceneSample,
    /// Rasterizer state, when rasterizing.
    pub driver: Option<DriverStatus>,
}

/// Hero snapshot.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct HeroFrame {
    /// Scroll-linked parallax of the whole content block.
    pub content: StyleProps,
    /// Tagline badge.
    pub badge: StyleProps,
    /// Main heading.
    pub heading: StyleProps,
    /// Subtitle paragraph.
    pub subtitle: StyleProps,
    /// Technology row container.
    pub tech_row: StyleProps,
    /// Technology pills.
    pub tech: Vec<PillFrame>,
    /// Call-to-action buttons.
    pub ctas: StyleProps,
    /// "Explore" indicator: fades in late, then bobs.
    pub scroll_indicator: StyleProps,
    /// Background scene.
    pub scene: HeroSceneFrame,
}

/// `#home`: on-mount entrances, scroll-out parallax and the decorative scene.
pub struct HeroSection {
    node: NodeRef,
    mounted_at: FrameIndex,
    _progress: ScrollProgress,
    y: Smoothed,
    opacity: Smoothed,
    scale: Smoothed,
    badge: Entrance,
    heading: Entrance,
    subtitle: Entrance,
    tech_row: Entrance,
    pills: Vec<(String, Entrance)>,
    ctas: Entrance,
    indicator: Entrance,
    bob: Anim<f64>,
    scene: Rc<SceneSpec>,
    scene_options: HeroSceneOptions,
    driver: Option<SceneDriver>,
}

impl HeroSection {
    /// Mount the hero; every entrance starts on this frame.
    #[tracing::instrument(level = "debug", skip_all, fields(frame = ctx.now.0))]
    pub fn mount(
        ctx: &MountContext<'_>,
        content: &ContentCatalog,
        scene_options: HeroSceneOptions,
    ) -> FolioResult<Self> {
        let node = NodeRef::new();
        let progress = ScrollProgress::mount(
            ctx.events,
            "hero.progress",
            node.clone(),
            ScrollOffset::leaving_top(),
        )?;
        let y = sprung(ctx, "hero.y", &progress, [0.0, 1.0], [0.0, 200.0])?;
        let opacity = sprung(ctx, "hero.opacity", &progress, [0.0, 0.5], [1.0, 0.0])?;
        let scale = sprung(ctx, "hero.scale", &progress, [0.0, 0.5], [1.0, 0.9])?;

        let mut badge = Entrance::fade_up(20.0, Transition::new(0.6, 0.0))?;
        let mut heading = Entrance::fade_up(30.0, Transition::new(0.8, 0.2))?;
        let mut subtitle = Entrance::fade_up(30.0, Transition::new(0.8, 0.4))?;
        let mut tech_row = Entrance::fade_up(30.0, Transition::new(0.8, 0.6))?;
        let mut ctas = Entrance::fade_up(30.0, Transition::new(0.8, 0.8))?;
        let mut indicator = Entrance::new(
            StyleProps::hidden(),
            StyleProps::identity(),
            Transition::delayed(1.5),
        )?;
        let mut pills = content
            .hero_tech
            .iter()
            .enumerate()
            .map(|(i, label)| {
                let e = Entrance::new(
                    StyleProps::hidden().with_scale(0.8),
                    StyleProps::identity(),
                    Transition::delayed(0.8 + i as f64 * 0.1),
                )?;
                Ok((label.clone(), e))
            })
            .collect::<FolioResult<Vec<_>>>()?;

        for e in [
            &mut badge,
            &mut heading,
            &mut subtitle,
            &mut tech_row,
            &mut ctas,
            &mut indicator,
        ] {
            e.trigger(ctx.now);
        }
        for (_, e) in &mut pills {
            e.trigger(ctx.now);
        }

        let scene = Rc::new(SceneSpec::hero(scene_options.seed));
        let driver = scene_options
            .raster
            .map(|(capability, settings)| {
                SceneDriver::mount(
                    ctx.frame_loop,
                    Rc::clone(&scene),
                    scene_options.theme,
                    ctx.fps,
                    capability,
                    settings,
                )
            })
            .transpose()?;

        tracing::debug!(pills = pills.len(), raster = driver.is_some(), "hero mounted");
        Ok(Self {
            node,
            mounted_at: ctx.now,
            _progress: progress,
            y,
            opacity,
            scale,
            badge,
            heading,
            subtitle,
            tech_row,
            pills,
            ctas,
            indicator,
            bob: indicator_bob(ctx.fps),
            scene,
            scene_options,
            driver,
        })
    }

    /// Call-to-action and indicator links.
    pub fn links() -> [(&'static str, NavTarget); 3] {
        [
            ("View My Work", NavTarget::section(SectionId::Projects)),
            ("Get In Touch", NavTarget::section(SectionId::Contact)),
            ("Explore Haseeb Labs", NavTarget::section(SectionId::About)),
        ]
    }

    /// Scene rasterizer, when one was requested.
    pub fn scene_driver(&self) -> Option<&SceneDriver> {
        self.driver.as_ref()
    }
}

/// `y: [0, 10, 0]` over two seconds, repeating forever.
fn indicator_bob(fps: Fps) -> Anim<f64> {
    let period = fps.secs_to_frames_round(INDICATOR_PERIOD_SECS).max(2);
    let cycle = Keyframes::linear([
        (0, 0.0, Ease::EaseInOut),
        (period / 2, INDICATOR_BOB_PX, Ease::EaseInOut),
        (period, 0.0, Ease::Linear),
    ]);
    loop_(Anim::Keyframes(cycle), period)
}

impl SectionView for HeroSection {
    fn id(&self) -> SectionId {
        SectionId::Home
    }

    fn layout(&mut self, bounds: ElementBox, _viewport: Viewport) {
        self.node.attach(bounds);
    }

    fn frame(&mut self, ctx: &FrameContext) -> FolioResult<SectionFrame> {
        let now = ctx.frame;
        let local = FrameIndex(now.since(self.mounted_at));

        let content = StyleProps::identity()
            .with_y(self.y.get())
            .with_opacity(self.opacity.get())
            .with_scale(self.scale.get());

        let tech = self
            .pills
            .iter()
            .map(|(label, e)| {
                Ok(PillFrame {
                    label: label.clone(),
                    style: e.sample(now, ctx.fps)?,
                })
            })
            .collect::<FolioResult<Vec<_>>>()?;

        let indicator = self.indicator.sample(now, ctx.fps)?;
        let scroll_indicator = indicator.with_y(self.bob.sample(local)?);

        Ok(SectionFrame::Hero(HeroFrame {
            content,
            badge: self.badge.sample(now, ctx.fps)?,
            heading: self.heading.sample(now, ctx.fps)?,
            subtitle: self.subtitle.sample(now, ctx.fps)?,
            tech_row: self.tech_row.sample(now, ctx.fps)?,
            tech,
            ctas: self.ctas.sample(now, ctx.fps)?,
            scroll_indicator,
            scene: HeroSceneFrame {
                a11y: ImageA11y::new(self.scene.label.clone()),
                theme: self.scene_options.theme,
                sample: self.scene.sample(local, ctx.fps),
                driver: self.driver.as_ref().map(SceneDriver::status),
            },
        }))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/view/hero.rs"]
mod tests;
