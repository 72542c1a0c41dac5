use bevy::prelude::*;
use constants::reveal::DEFAULT_DRAW_DURATION_SECS;
use constants::starfield::{DEFAULT_STAR_BLUR, DEFAULT_STAR_SIZE, DEFAULT_STAR_SPREAD};
use serde::{Deserialize, Serialize};

use crate::constants::path::DEFAULT_MODEL_PATH;
use crate::constants::render_settings::{
    CAMERA_DEFAULT_FOV_DEGREES, DEFAULT_MODEL_POSITION, DEFAULT_MODEL_ROTATION_DEGREES,
    DEFAULT_MODEL_SCALE, DEFAULT_POINT_COLOUR, DEFAULT_POINT_HOVER_COLOUR, DEFAULT_POINT_SIZE,
    DEFAULT_STAR_COLOUR_PRIMARY, DEFAULT_STAR_COLOUR_SECONDARY, DEFAULT_WIREFRAME_COLOUR,
};
use crate::tools::parameter_panel::{Axis, ParameterChange};

/// Model placement as written in the settings file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelSettings {
    pub position: [f32; 3],
    pub scale: f32,
    pub rotation_degrees: [f32; 3],
}

impl Default for ModelSettings {
    fn default() -> Self {
        Self {
            position: DEFAULT_MODEL_POSITION.to_array(),
            scale: DEFAULT_MODEL_SCALE,
            rotation_degrees: DEFAULT_MODEL_ROTATION_DEGREES.to_array(),
        }
    }
}

/// Colours are `#rrggbb` hex strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppearanceSettings {
    pub wireframe_colour: String,
    pub point_colour: String,
    pub point_hover_colour: String,
    pub point_size: f32,
}

impl Default for AppearanceSettings {
    fn default() -> Self {
        Self {
            wireframe_colour: to_hex(DEFAULT_WIREFRAME_COLOUR),
            point_colour: to_hex(DEFAULT_POINT_COLOUR),
            point_hover_colour: to_hex(DEFAULT_POINT_HOVER_COLOUR),
            point_size: DEFAULT_POINT_SIZE,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StarSettings {
    pub size: f32,
    pub blur_strength: f32,
    pub spread: f32,
    pub colour_primary: String,
    pub colour_secondary: String,
}

impl Default for StarSettings {
    fn default() -> Self {
        Self {
            size: DEFAULT_STAR_SIZE,
            blur_strength: DEFAULT_STAR_BLUR,
            spread: DEFAULT_STAR_SPREAD,
            colour_primary: to_hex(DEFAULT_STAR_COLOUR_PRIMARY),
            colour_secondary: to_hex(DEFAULT_STAR_COLOUR_SECONDARY),
        }
    }
}

/// Run-time scene configuration loaded from `scene.json`.
/// Every field is optional in the file and falls back to the built-in default.
#[derive(Asset, TypePath, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneSettings {
    #[serde(default = "default_model_path")]
    pub model_path: String,
    #[serde(default = "default_draw_duration")]
    pub draw_duration_secs: f32,
    #[serde(default = "default_camera_fov")]
    pub camera_fov_degrees: f32,
    #[serde(default)]
    pub model: ModelSettings,
    #[serde(default)]
    pub appearance: AppearanceSettings,
    #[serde(default)]
    pub stars: StarSettings,
}

fn default_model_path() -> String {
    DEFAULT_MODEL_PATH.to_string()
}

fn default_draw_duration() -> f32 {
    DEFAULT_DRAW_DURATION_SECS
}

fn default_camera_fov() -> f32 {
    CAMERA_DEFAULT_FOV_DEGREES
}

impl Default for SceneSettings {
    fn default() -> Self {
        Self {
            model_path: default_model_path(),
            draw_duration_secs: default_draw_duration(),
            camera_fov_degrees: default_camera_fov(),
            model: ModelSettings::default(),
            appearance: AppearanceSettings::default(),
            stars: StarSettings::default(),
        }
    }
}

impl SceneSettings {
    /// Panel changes that bring the scene to these settings.
    /// Unparseable colours are skipped with a warning.
    pub fn parameter_changes(&self) -> Vec<ParameterChange> {
        let model = &self.model;
        let mut changes = vec![
            ParameterChange::ModelPosition(Axis::X, model.position[0]),
            ParameterChange::ModelPosition(Axis::Y, model.position[1]),
            ParameterChange::ModelPosition(Axis::Z, model.position[2]),
            ParameterChange::ModelScale(model.scale),
            ParameterChange::ModelRotationDegrees(Axis::X, model.rotation_degrees[0]),
            ParameterChange::ModelRotationDegrees(Axis::Y, model.rotation_degrees[1]),
            ParameterChange::ModelRotationDegrees(Axis::Z, model.rotation_degrees[2]),
            ParameterChange::PointSize(self.appearance.point_size),
            ParameterChange::CameraFovDegrees(self.camera_fov_degrees),
            ParameterChange::StarSize(self.stars.size),
            ParameterChange::StarBlur(self.stars.blur_strength),
            ParameterChange::StarSpread(self.stars.spread),
        ];

        let colours: [(&str, fn(Color) -> ParameterChange); 5] = [
            (self.appearance.wireframe_colour.as_str(), ParameterChange::WireframeColour),
            (self.appearance.point_colour.as_str(), ParameterChange::PointColour),
            (self.appearance.point_hover_colour.as_str(), ParameterChange::PointHoverColour),
            (self.stars.colour_primary.as_str(), ParameterChange::StarColourPrimary),
            (self.stars.colour_secondary.as_str(), ParameterChange::StarColourSecondary),
        ];
        for (hex, change) in colours {
            match Srgba::hex(hex) {
                Ok(colour) => changes.push(change(colour.into())),
                Err(err) => warn!("Ignoring colour {hex:?} in scene settings: {err}"),
            }
        }

        changes
    }
}

fn to_hex(colour: Color) -> String {
    colour.to_srgba().to_hex()
}

#[cfg(test)]
mod tests {
    use bevy::color::ColorToComponents;

    use super::*;

    #[test]
    fn empty_file_uses_defaults() {
        let settings: SceneSettings = serde_json::from_str("{}").unwrap();

        assert_eq!(settings, SceneSettings::default());
        assert_eq!(settings.model_path, DEFAULT_MODEL_PATH);
        assert_eq!(settings.draw_duration_secs, 3.0);
    }

    #[test]
    fn partial_sections_keep_remaining_defaults() {
        let settings: SceneSettings = serde_json::from_str(
            r##"{
                "model_path": "models/teapot.glb",
                "model": { "scale": 2.0 },
                "stars": { "colour_primary": "#ff0000" }
            }"##,
        )
        .unwrap();

        assert_eq!(settings.model_path, "models/teapot.glb");
        assert_eq!(settings.model.scale, 2.0);
        assert_eq!(settings.model.position, DEFAULT_MODEL_POSITION.to_array());
        assert_eq!(settings.stars.spread, DEFAULT_STAR_SPREAD);
        assert!(
            settings
                .parameter_changes()
                .contains(&ParameterChange::StarColourPrimary(Color::srgb(1.0, 0.0, 0.0)))
        );
    }

    #[test]
    fn default_colours_survive_hex_round_trip() {
        let changes = SceneSettings::default().parameter_changes();

        assert_eq!(changes.len(), 17);
        let Some(ParameterChange::WireframeColour(colour)) = changes
            .iter()
            .copied()
            .find(|c| matches!(c, ParameterChange::WireframeColour(_)))
        else {
            panic!("wireframe colour missing");
        };
        let expected = DEFAULT_WIREFRAME_COLOUR.to_srgba().to_f32_array();
        let parsed = colour.to_srgba().to_f32_array();
        for (a, b) in parsed.iter().zip(expected) {
            assert!((a - b).abs() <= 1.0 / 255.0);
        }
    }

    #[test]
    fn bad_colours_are_skipped() {
        let mut settings = SceneSettings::default();
        settings.appearance.point_colour = "not a colour".to_string();

        let changes = settings.parameter_changes();
        assert_eq!(changes.len(), 16);
        assert!(
            !changes
                .iter()
                .any(|c| matches!(c, ParameterChange::PointColour(_)))
        );
    }
}
