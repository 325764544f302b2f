//! Page sessions: configuration, scripted input and the frame-by-frame driver.

/// Session configuration.
pub mod config;
/// Frame-by-frame page driver.
pub mod page_session;
/// Scripted scroll input.
pub mod script;
