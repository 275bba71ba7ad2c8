//! Orbit camera for scene navigation.
//!
//! Left drag orbits, right drag pans and the wheel zooms, with distance and
//! polar clamps and smooth interpolation towards the target view.

/// Orbit camera resource and controller system.
pub mod orbit_camera;
