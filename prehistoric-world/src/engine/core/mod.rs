//! Core application setup and state management.
//!
//! Handles application lifecycle, window configuration, state transitions,
//! and plugin initialisation for both native and WASM targets.

/// Application setup and plugin configuration for the Bevy engine.
///
/// Creates the main app with rendering, picking and physics plugins,
/// the state machine and per-state system sets.
pub mod app_setup;

/// Application state machine and loading progress transitions.
///
/// Loading, running and failed states plus the scene teardown sweep.
pub mod app_state;

/// Scene failure type and the resource that routes it to the fallback screen.
pub mod error;

/// Platform-specific window configuration for native and WASM builds.
///
/// Configures canvas integration for web targets and vsync settings.
pub mod window_config;
