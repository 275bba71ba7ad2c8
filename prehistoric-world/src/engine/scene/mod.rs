//! Scene construction: terrain, decorative props and the composer that
//! mounts everything once the configuration is ready.

/// Mounts terrain, props, creatures and overlays, routing failures to the fallback.
pub mod composer;

/// Scattered tree and rock clusters plus fixed hills.
///
/// Placement draws from a pluggable unit source so layouts can be seeded or scripted.
pub mod props;

/// Height-displaced terrain grid with per-vertex colour bands and a trimesh collider.
pub mod terrain;
