//! Run-time configuration assets.

/// Scene settings loaded from JSON: model path, draw duration and the
/// initial parameter panel values.
pub mod scene_settings;
