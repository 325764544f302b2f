//! Decorative hero scene: primitives and their motion laws, theme palettes, and rasterization.

/// Scene rasterizer seam.
pub mod backend;
/// CPU scene rasterizer.
pub mod cpu;
/// Per-frame scene driver.
pub mod driver;
/// Scene primitives and motion laws.
pub mod model;
/// Light/dark palettes.
pub mod theme;
