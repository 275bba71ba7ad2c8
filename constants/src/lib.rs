//! Shared tuning constants for the prehistoric world scene.

pub mod animation;
pub mod band;
pub mod coordinate_system;
pub mod render_settings;
pub mod terrain;
