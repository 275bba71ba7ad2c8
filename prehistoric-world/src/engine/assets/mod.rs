//! Static creature data and the loadable scene configuration.
//!
//! The catalog is compiled in and read-only for the lifetime of the process;
//! the scene configuration is a JSON asset gating the loading state.

/// Static creature records with placement, collider and display fields.
pub mod creature_catalog;

/// JSON scene configuration: terrain, camera clamps and prop clusters.
pub mod scene_config;
