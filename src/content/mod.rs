//! Static page content: skills, highlights, projects, and the gallery's category filter.

/// Page content catalog.
pub mod catalog;
/// Project category filter.
pub mod filter;
/// Content entities.
pub mod model;
