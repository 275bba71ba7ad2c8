//! Interactive prehistoric world: procedural terrain, primitive-built
//! creatures and a click-to-inspect detail overlay on top of Bevy.

pub mod engine;
pub mod tools;

pub use engine::core::app_setup::create_app;
