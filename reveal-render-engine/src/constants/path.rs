/// Scene settings file, relative to the asset root.
pub const SCENE_SETTINGS_PATH: &str = "scene.json";

/// Model loaded when the settings file does not name one.
pub const DEFAULT_MODEL_PATH: &str = "models/brain.glb";

pub const WIREFRAME_SHADER_PATH: &str = "shaders/reveal_wireframe.wgsl";
pub const POINTS_SHADER_PATH: &str = "shaders/reveal_points.wgsl";
pub const STARFIELD_SHADER_PATH: &str = "shaders/starfield.wgsl";
