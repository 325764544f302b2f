//! Scroll-linked inputs: offset anchors, the progress tracker, and viewport intersection.

/// Viewport intersection.
pub mod in_view;
/// Scroll offset anchors.
pub mod offset;
/// Scroll progress tracking.
pub mod progress;
