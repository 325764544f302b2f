//! Animation primitives: keyframed tracks, easing, piecewise mappings and springs.

/// Frame-indexed animation values.
pub mod anim;
/// Easing curves.
pub mod ease;
/// Piecewise-linear value mapping.
pub mod interpolate;
/// Critically-damped spring follower.
pub mod spring;
