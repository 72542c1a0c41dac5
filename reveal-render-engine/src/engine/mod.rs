pub mod animation;
pub mod assets;
pub mod camera;
pub mod core;
pub mod interaction;
pub mod loading;
pub mod mesh;
pub mod render;
pub mod scene;
pub mod shaders;
pub mod systems;
