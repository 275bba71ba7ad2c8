pub mod assets;
pub mod camera;
pub mod core;
pub mod creatures;
pub mod loading;
pub mod scene;
pub mod systems;
