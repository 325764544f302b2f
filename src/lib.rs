//! Folio Motion is a frame-driven model of a scroll-animated portfolio page.
//!
//! A [`PageSession`] mounts the hero, about and projects sections over a
//! [`ContentCatalog`], then produces one [`PageFrame`] per display frame:
//!
//! - Scroll and resize input feed per-section progress trackers and viewport observers
//! - Spring followers smooth every scroll-linked parallax value
//! - Entrance tweens fire once when their element first enters the viewport
//! - The hero's decorative 3D scene is posed each frame and optionally rasterized
#![forbid(unsafe_code)]
#![deny(missing_docs)]

/// Interpolation, easing, keyframes and springs.
pub mod animation;
/// Page content and the gallery filter.
pub mod content;
/// Core value types, errors and math helpers.
pub mod foundation;
/// Signals, event sources and the frame loop.
pub mod runtime;
/// Decorative 3D scene.
pub mod scene;
/// Scroll progress and viewport intersection.
pub mod scroll;
/// Page sessions and scripted input.
pub mod session;
/// Section views.
pub mod view;

pub use crate::animation::anim::{Anim, Keyframes};
pub use crate::animation::ease::Ease;
pub use crate::animation::spring::SpringConfig;
pub use crate::content::catalog::ContentCatalog;
pub use crate::content::filter::{CategoryFilter, Selection};
pub use crate::content::model::{Category, ProjectEntry, SkillEntry};
pub use crate::foundation::core::{ElementBox, Fps, FrameIndex, Rgba8, Viewport};
pub use crate::foundation::error::{FolioError, FolioResult};
pub use crate::scene::backend::{SceneBackend, SceneCapability, SceneFrameRGBA, SceneSettings};
pub use crate::scene::model::{SceneSample, SceneSpec};
pub use crate::scene::theme::Theme;
pub use crate::session::config::PageConfig;
pub use crate::session::page_session::{PageFrame, PageLayout, PageSession};
pub use crate::session::script::ScrollScript;
pub use crate::view::nav::SectionId;
pub use crate::view::style::StyleProps;
