//! Shared primitives: timeline/viewport types, errors, and small math helpers.

/// Timeline, viewport and color primitives.
pub mod core;
/// Crate error type.
pub mod error;
/// Deterministic RNG and numeric helpers.
pub mod math;
