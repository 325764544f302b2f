//! Single-threaded signal plumbing: shared values, scoped callback registries, and the
//! per-frame loop that drives springs and the decorative scene.

/// Scroll and resize event source.
pub mod events;
/// Per-frame callback registry.
pub mod frame_loop;
pub(crate) mod registry;
/// Shared values and element references.
pub mod signal;
/// Spring-smoothed signals.
pub mod smoothed;

pub use registry::Subscription;
