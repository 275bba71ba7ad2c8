//! Runtime diagnostics systems.

/// FPS tracking for the native frame-rate overlay.
///
/// Reads the smoothed frame-time diagnostic and updates the overlay text.
pub mod fps_tracking;
