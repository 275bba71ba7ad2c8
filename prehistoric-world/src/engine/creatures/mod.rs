//! Procedurally assembled creatures.
//!
//! Each catalog id maps to one of five fixed archetype templates built from
//! primitive solids. The assembler turns those parts into an entity
//! hierarchy with a grounded collider, a pickable body and a hover marker.

/// Idle breathing and bob animations.
pub mod animation;

/// Archetype selection by catalog id and part assembly.
pub mod archetype;

/// Entity hierarchy spawning for catalog records.
pub mod assembler;

/// Primitive body parts: shapes, materials and local transforms.
pub mod parts;

/// Hand-authored part lists for each archetype.
pub mod templates;
