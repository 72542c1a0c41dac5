//! Asset loading and initialisation systems for the reveal scene.
//!
//! Manages the loading pipeline from scene settings through the glTF model
//! to the spawned model views, with progress tracking and failure handling.

/// Glb model loading and failure detection.
///
/// Starts once the settings have named a model path.
pub mod model_loader;

/// Loading progress tracking resource for state transitions.
///
/// Monitors completion of settings, model and renderable creation.
pub mod progress;

/// Model view creation after the model is loaded.
///
/// Simplifies every mesh primitive into one shared geometry and spawns the
/// edge and point views.
pub mod renderable_creator;

/// Scene settings loading with fallback to defaults.
pub mod settings_loader;
