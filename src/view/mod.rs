//! Page sections and the animated style values they produce.

/// Accessibility attributes.
pub mod a11y;
/// About section.
pub mod about;
/// One-shot entrance tweens.
pub mod entrance;
/// Hero section.
pub mod hero;
/// Navigation targets and anchor smooth-scrolling.
pub mod nav;
/// Projects gallery.
pub mod projects;
/// Section mounting and frame plumbing.
pub mod section;
/// Animated style values.
pub mod style;
