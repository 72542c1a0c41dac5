#[cfg(not(target_arch = "wasm32"))]
use bevy::prelude::*;

#[cfg(not(target_arch = "wasm32"))]
use super::parameter_panel::{Axis, ParameterChange, ParameterChangeEvent, ParameterSource};
#[cfg(not(target_arch = "wasm32"))]
use crate::engine::camera::orbit_camera::CameraLens;
#[cfg(not(target_arch = "wasm32"))]
use crate::engine::render::coordinator::{ModelAppearance, ModelTransform};
#[cfg(not(target_arch = "wasm32"))]
use crate::engine::scene::starfield::{StarField, StarFieldSettings};

#[cfg(not(target_arch = "wasm32"))]
const ROTATION_STEP_DEGREES: f32 = 5.0;
#[cfg(not(target_arch = "wasm32"))]
const FINE_STEP: f32 = 0.1;

/// Keyboard stand-ins for the panel controls.
///
/// | Keys | Control |
/// |------|---------|
/// | Left / Right | model rotation Y |
/// | Up / Down | model scale |
/// | PageUp / PageDown | model position Y |
/// | `[` / `]` | point size on hover |
/// | `-` / `=` | camera field of view |
/// | `,` / `.` | star spread |
/// | `N` / `M` | star size |
/// | `K` / `L` | star blur |
#[cfg(not(target_arch = "wasm32"))]
pub fn handle_panel_keyboard_shortcuts(
    keyboard: Res<ButtonInput<KeyCode>>,
    model: Res<ModelTransform>,
    appearance: Res<ModelAppearance>,
    lens: Res<CameraLens>,
    stars: Res<StarField>,
    star_settings: Res<StarFieldSettings>,
    mut parameter_events: EventWriter<ParameterChangeEvent>,
) {
    let step = |decrease: KeyCode, increase: KeyCode| -> f32 {
        let mut direction = 0.0;
        if keyboard.just_pressed(decrease) {
            direction -= 1.0;
        }
        if keyboard.just_pressed(increase) {
            direction += 1.0;
        }
        direction
    };

    let mut changes = Vec::new();

    let rotation = step(KeyCode::ArrowLeft, KeyCode::ArrowRight);
    if rotation != 0.0 {
        let degrees =
            (model.rotation_degrees.y + rotation * ROTATION_STEP_DEGREES).rem_euclid(360.0);
        changes.push(ParameterChange::ModelRotationDegrees(Axis::Y, degrees));
    }

    let scale = step(KeyCode::ArrowDown, KeyCode::ArrowUp);
    if scale != 0.0 {
        changes.push(ParameterChange::ModelScale(model.scale + scale * FINE_STEP));
    }

    let height = step(KeyCode::PageDown, KeyCode::PageUp);
    if height != 0.0 {
        changes.push(ParameterChange::ModelPosition(
            Axis::Y,
            model.position.y + height * FINE_STEP,
        ));
    }

    let point_size = step(KeyCode::BracketLeft, KeyCode::BracketRight);
    if point_size != 0.0 {
        changes.push(ParameterChange::PointSize(appearance.point_size + point_size));
    }

    let fov = step(KeyCode::Minus, KeyCode::Equal);
    if fov != 0.0 {
        changes.push(ParameterChange::CameraFovDegrees(lens.fov_degrees + fov * 5.0));
    }

    let spread = step(KeyCode::Comma, KeyCode::Period);
    if spread != 0.0 {
        changes.push(ParameterChange::StarSpread(stars.spread() + spread * 5.0));
    }

    let star_size = step(KeyCode::KeyN, KeyCode::KeyM);
    if star_size != 0.0 {
        changes.push(ParameterChange::StarSize(
            stars.size_scale() + star_size * FINE_STEP,
        ));
    }

    let blur = step(KeyCode::KeyK, KeyCode::KeyL);
    if blur != 0.0 {
        changes.push(ParameterChange::StarBlur(
            star_settings.blur_strength + blur * FINE_STEP,
        ));
    }

    parameter_events.write_batch(changes.into_iter().map(|change| ParameterChangeEvent {
        change,
        source: ParameterSource::Keyboard,
    }));
}

/// Placeholder system for WASM builds where keyboard shortcuts are disabled.
#[cfg(target_arch = "wasm32")]
pub fn handle_panel_keyboard_shortcuts() {}
