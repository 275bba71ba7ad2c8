//! Loading gate between app start and the mounted scene.
//!
//! Loads and validates the scene configuration, checks the creature catalog
//! and reports progress to the loading placeholder.

/// Scene configuration loading and catalog validation systems.
pub mod config_loader;

/// Loading progress tracking resource for the transition into the running state.
pub mod progress;
